use rand::RngCore;

use crate::model::*;
use crate::store::MemoryStore;

/// RNG that returns the same word forever. `ConstRng(0)` drives every
/// uniform draw to the bottom of its range, `ConstRng(u64::MAX)` to the top.
pub struct ConstRng(pub u64);

impl RngCore for ConstRng {
    fn next_u32(&mut self) -> u32 {
        (self.0 >> 32) as u32
    }

    fn next_u64(&mut self) -> u64 {
        self.0
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        for (i, byte) in dest.iter_mut().enumerate() {
            *byte = (self.0 >> ((i % 8) * 8)) as u8;
        }
    }
}

/// Detached competitor (not in any store) with uniform attributes.
pub fn competitor(id: u64, name: &str, level: f64) -> Competitor {
    Competitor {
        id,
        name: name.to_string(),
        promotion_id: 1,
        attributes: Attributes::uniform(level),
        popularity: RegionalPopularity::default(),
        record: Record::default(),
    }
}

/// Store with `n` competitors in promotion 1 and one vacant title.
/// Returns the store, the competitor IDs, and the title ID.
pub fn small_league(n: usize) -> (MemoryStore, Vec<u64>, u64) {
    let mut store = MemoryStore::starting_at(SimTimestamp::from_year(2024));
    let ids = (0..n)
        .map(|i| {
            store.add_competitor(NewCompetitor::new(
                format!("Worker {i}"),
                1,
                Attributes::uniform(40.0 + i as f64 * 5.0),
            ))
        })
        .collect();
    let title = store.add_title(NewTitle::new("World Championship", 1, 90.0));
    (store, ids, title)
}

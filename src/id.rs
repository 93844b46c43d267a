/// Monotonic row-ID generator for a store.
///
/// IDs are unique across all tables of one store, so a match ID can never
/// be confused with a competitor ID in logs or exports.
#[derive(Debug, Clone)]
pub struct IdGenerator {
    next: u64,
}

impl IdGenerator {
    pub fn new() -> Self {
        Self { next: 1 }
    }

    pub fn next_id(&mut self) -> u64 {
        let id = self.next;
        self.next += 1;
        id
    }

    /// Record an ID assigned elsewhere (e.g. loaded from Postgres) so later
    /// IDs never collide with it.
    pub fn observe(&mut self, id: u64) {
        if id >= self.next {
            self.next = id + 1;
        }
    }
}

impl Default for IdGenerator {
    fn default() -> Self {
        Self::new()
    }
}

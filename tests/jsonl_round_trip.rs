mod common;

use rand::SeedableRng;
use rand::rngs::SmallRng;
use ring_sim::flush::flush_to_jsonl;
use ring_sim::model::{Competitor, MatchRecord};
use ring_sim::sim::{BatchConfig, award_title, run_batch};

use common::{build_test_league, read_lines};

#[test]
fn flush_produces_one_file_per_table() {
    let mut league = build_test_league();
    run_batch(
        &mut league.store,
        &BatchConfig::new(1, 2, 3, "Export"),
        &mut SmallRng::seed_from_u64(1),
    )
    .unwrap();
    award_title(&mut league.store, league.title, league.roster[0]).unwrap();
    let dir = tempfile::tempdir().unwrap();

    flush_to_jsonl(&league.store, dir.path()).unwrap();

    assert_eq!(read_lines(&dir.path().join("competitors.jsonl")).len(), 7);
    assert_eq!(read_lines(&dir.path().join("titles.jsonl")).len(), 1);
    assert_eq!(read_lines(&dir.path().join("reigns.jsonl")).len(), 1);
    assert_eq!(read_lines(&dir.path().join("events.jsonl")).len(), 2);
    assert_eq!(read_lines(&dir.path().join("matches.jsonl")).len(), 6);

    for line in read_lines(&dir.path().join("matches.jsonl")) {
        let v: serde_json::Value = serde_json::from_str(&line).unwrap();
        assert_eq!(v["match_type"], "singles");
        assert_eq!(v["participants"].as_array().unwrap().len(), 2);
        assert!(v["crowd_reaction"].is_string());
        assert!(v["title_id"].is_null());
    }

    let reign: serde_json::Value =
        serde_json::from_str(&read_lines(&dir.path().join("reigns.jsonl"))[0]).unwrap();
    assert!(reign["end"].is_null());
    assert_eq!(reign["champion_id"], league.roster[0]);
}

#[test]
fn flushed_rows_deserialize_back() {
    let mut league = build_test_league();
    run_batch(
        &mut league.store,
        &BatchConfig::new(1, 1, 4, "Replay"),
        &mut SmallRng::seed_from_u64(2),
    )
    .unwrap();
    let dir = tempfile::tempdir().unwrap();
    flush_to_jsonl(&league.store, dir.path()).unwrap();

    let competitors: Vec<Competitor> = read_lines(&dir.path().join("competitors.jsonl"))
        .iter()
        .map(|l| serde_json::from_str(l).unwrap())
        .collect();
    assert_eq!(
        competitors,
        league.store.competitors.values().cloned().collect::<Vec<_>>()
    );

    let matches: Vec<MatchRecord> = read_lines(&dir.path().join("matches.jsonl"))
        .iter()
        .map(|l| serde_json::from_str(l).unwrap())
        .collect();
    assert_eq!(matches.len(), league.store.matches.len());
    for (read, original) in matches.iter().zip(league.store.matches.values()) {
        assert_eq!(read.id, original.id);
        assert_eq!(read.participants, original.participants);
        assert_eq!(read.winner_id, original.winner_id);
        assert_eq!(read.crowd_reaction, original.crowd_reaction);
        assert_eq!(read.finish, original.finish);
        assert!((read.quality - original.quality).abs() < 1e-9);
    }
}

#[test]
fn flush_creates_missing_directories() {
    let league = build_test_league();
    let dir = tempfile::tempdir().unwrap();
    let nested = dir.path().join("runs").join("001");

    flush_to_jsonl(&league.store, &nested).unwrap();

    assert!(nested.join("competitors.jsonl").exists());
    assert!(read_lines(&nested.join("matches.jsonl")).is_empty());
}

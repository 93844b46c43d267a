mod common;

use rand::SeedableRng;
use rand::rngs::SmallRng;
use ring_sim::model::{MatchType, NewEvent, NewMatch, TitleState};
use ring_sim::sim::{record_match, resolve_match};
use ring_sim::store::{MemoryStore, Store};

use common::build_test_league;

/// Resolve and record a title match between two roster members.
fn play_title_match(store: &mut MemoryStore, event: u64, a: u64, b: u64, title: u64, seed: u64) -> u64 {
    let first = store.competitors[&a].clone();
    let second = store.competitors[&b].clone();
    let outcome =
        resolve_match(&first, &second, MatchType::Singles, &mut SmallRng::seed_from_u64(seed))
            .unwrap();
    record_match(
        store,
        NewMatch {
            event_id: event,
            participants: vec![a, b],
            winner_id: outcome.winner_id,
            match_type: outcome.match_type,
            title_id: Some(title),
            quality: outcome.quality,
            segment_rating: outcome.segment_rating,
            crowd_reaction: outcome.crowd_reaction,
            finish: outcome.finish,
            description: outcome.description,
        },
    )
    .unwrap();
    outcome.winner_id
}

#[test]
fn title_history_keeps_one_open_reign() {
    let mut league = build_test_league();
    let store = &mut league.store;
    let event = store
        .insert_event(NewEvent::new(1, "Title Tournament", "Arena 1", store.now()))
        .unwrap();

    let mut winners = Vec::new();
    for (round, pair) in league.roster.windows(2).enumerate() {
        store.advance_clock(24);
        winners.push(play_title_match(store, event, pair[0], pair[1], league.title, round as u64));

        let reigns = store.reigns_for_title(league.title).unwrap();
        assert_eq!(reigns.len(), round + 1);
        assert_eq!(reigns.iter().filter(|r| r.is_open()).count(), 1);
    }

    let title = store.title(league.title).unwrap().unwrap();
    let last_winner = *winners.last().unwrap();
    assert_eq!(title.state(), TitleState::Held(last_winner));
    assert_eq!(title.defenses, 1);

    let reigns = store.reigns_for_title(league.title).unwrap();
    let open = reigns.iter().find(|r| r.is_open()).unwrap();
    assert_eq!(open.champion_id, last_winner);
    for pair in reigns.windows(2) {
        // Each closed reign ends exactly when the next one starts.
        assert_eq!(pair[0].end, Some(pair[1].start));
        assert_eq!(pair[0].defenses, 1);
    }
}

#[test]
fn title_match_also_updates_stats_and_event() {
    let mut league = build_test_league();
    let store = &mut league.store;
    let event = store
        .insert_event(NewEvent::new(1, "Championship Night", "Arena 1", store.now()))
        .unwrap();
    let (a, b) = (league.roster[0], league.roster[5]);

    let winner = play_title_match(store, event, a, b, league.title, 17);

    let loser = if winner == a { b } else { a };
    assert_eq!(store.competitors[&winner].record.wins, 1);
    assert_eq!(store.competitors[&loser].record.losses, 1);
    assert!(store.events[&event].average_rating.is_some());
    assert_eq!(store.titles[&league.title].current_champion, Some(winner));
}

#[test]
fn non_title_match_leaves_lineage_alone() {
    let mut league = build_test_league();
    let store = &mut league.store;
    let event = store
        .insert_event(NewEvent::new(1, "House Show", "Arena 9", store.now()))
        .unwrap();
    let a = store.competitors[&league.roster[1]].clone();
    let b = store.competitors[&league.roster[2]].clone();
    let outcome =
        resolve_match(&a, &b, MatchType::Singles, &mut SmallRng::seed_from_u64(3)).unwrap();

    record_match(
        store,
        NewMatch {
            event_id: event,
            participants: vec![a.id, b.id],
            winner_id: outcome.winner_id,
            match_type: outcome.match_type,
            title_id: None,
            quality: outcome.quality,
            segment_rating: outcome.segment_rating,
            crowd_reaction: outcome.crowd_reaction,
            finish: outcome.finish,
            description: outcome.description,
        },
    )
    .unwrap();

    assert_eq!(store.titles[&league.title].state(), TitleState::Vacant);
    assert!(store.reigns.is_empty());
}

//! Integration test: Offline catch-up
//!
//! Saves a running guild, reopens it later, and checks the lump-sum pass:
//! open job intervals close against the load instant, the away clock runs
//! from the last save, and due quests wait for the first real tick.

use guildhall::core::constants::STARTING_CURRENCY;
use guildhall::core::tick::TickEvent;
use guildhall::save::SaveStore;
use guildhall::{Game, GameConfig, GameOps};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

const T0: i64 = 1_700_000_000_000;

fn seeded(seed: u64) -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(seed)
}

// =============================================================================
// Save, Reopen, Catch Up Tests
// =============================================================================

#[test]
fn test_catch_up_closes_the_interval_from_assignment() {
    let store = SaveStore::new_for_test();
    let path = store.path().to_path_buf();
    let mut rng = seeded(1);

    let mut game =
        Game::load(GameConfig::with_save_path(path.clone())).expect("open fresh game");
    let wren = game.state().roster[0].id.clone();

    // Post Wren ten minutes before closing up. Foraging is neutral for
    // Wind, so the rate is exactly 1.0 and the sums below are whole.
    game.assign_job(&wren, "foraging", T0).expect("assign foraging");
    let t_save = T0 + 600_000;
    game.save(t_save).expect("save");
    drop(game);

    let mut reopened = Game::load(GameConfig::with_save_path(path)).expect("reopen");
    assert!(reopened.state().roster[0].assignment.is_some());

    // An hour away, but the posting itself has been open for seventy minutes.
    let t_back = t_save + 3_600_000;
    let report = reopened.catch_up(t_back, &mut rng);

    assert_eq!(report.away_secs, 3_600, "away runs from the save");
    assert_eq!(report.xp_earned, 4_200, "accrual runs from the posting");
    assert_eq!(report.currency_earned, 1_050);
    assert_eq!(report.entries.len(), 1);
    assert!(report.entries[0]
        .message
        .contains("While the hall slept, Wren earned 4200 XP and 1050 coin"));

    let state = reopened.state();
    assert_eq!(state.roster[0].experience, 4_200);
    assert_eq!(state.currency, STARTING_CURRENCY + 1_050);

    let last = reopened.log().last().expect("catch-up should log");
    assert!(last.message.contains("While the hall slept"));
}

#[test]
fn test_second_catch_up_finds_nothing() {
    let mut game = Game::new(GameConfig::default());
    let wren = game.state().roster[0].id.clone();
    let mut rng = seeded(2);

    game.assign_job(&wren, "foraging", T0).expect("assign foraging");

    let first = game.catch_up(T0 + 120_000, &mut rng);
    assert_eq!(first.xp_earned, 120);

    // The interval clock reset as part of the first pass.
    let second = game.catch_up(T0 + 120_000, &mut rng);
    assert!(second.is_empty());
    assert_eq!(second.xp_earned, 0);
    assert_eq!(game.state().roster[0].experience, 120);
}

#[test]
fn test_idle_members_are_skipped() {
    let mut game = Game::new(GameConfig::default());
    let wren = game.state().roster[0].id.clone();
    let mut rng = seeded(3);

    let tam = game.recruit("tam", T0).expect("hire tam");
    game.assign_job(&wren, "foraging", T0).expect("assign foraging");

    let report = game.catch_up(T0 + 100_000, &mut rng);

    assert_eq!(report.entries.len(), 1, "only the posted member reports");
    assert!(report.entries[0].message.contains("Wren"));
    assert_eq!(game.state().character(&tam).map(|c| c.experience), Some(0));
}

#[test]
fn test_cap_clamps_offline_coin() {
    let config = GameConfig {
        currency_cap: 60,
        ..GameConfig::default()
    };
    let mut game = Game::new(config);
    let wren = game.state().roster[0].id.clone();
    let mut rng = seeded(4);

    game.assign_job(&wren, "foraging", T0).expect("assign foraging");
    let report = game.catch_up(T0 + 3_600_000, &mut rng);

    assert_eq!(report.away_secs, 0, "never saved, so no away clock");
    assert_eq!(report.xp_earned, 3_600);
    assert_eq!(report.currency_earned, 10, "900 raw coin, 10 fit under the cap");
    assert_eq!(game.state().currency, 60);
}

// =============================================================================
// Quests Across the Gap Tests
// =============================================================================

#[test]
fn test_catch_up_leaves_due_quests_for_the_tick() {
    let mut game = Game::new(GameConfig::default());
    let wren = game.state().roster[0].id.clone();
    let mut rng = seeded(5);

    let tam = game.recruit("tam", T0).expect("hire tam");
    game.start_quest("wolves_at_the_gate", &[wren, tam], T0)
        .expect("send the party");

    // The quest came due while the hall slept, but catch-up only settles
    // job postings.
    let t_back = T0 + 200_000;
    let report = game.catch_up(t_back, &mut rng);
    assert!(report.is_empty());
    assert_eq!(game.state().active_quests.len(), 1);
    assert!(!game.state().quest_is_completed("wolves_at_the_gate"));

    let result = game.tick(t_back, &mut rng);
    let resolved = result
        .events
        .iter()
        .any(|e| matches!(e, TickEvent::QuestResolved { victory: true, .. }));

    assert!(resolved, "the first tick settles the overdue quest");
    assert!(game.state().quest_is_completed("wolves_at_the_gate"));
    assert!(game.state().active_quests.is_empty());
}

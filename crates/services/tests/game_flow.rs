use std::sync::Arc;

use catalog::manifest::Tags;
use catalog::{Catalog, InMemoryImages, ManifestRecord};
use guess_core::model::Category;
use guess_core::time::fixed_clock;
use services::{GamePhase, GameRng, GameService};

fn record(filename: &str, category: &str, aliases: &[&str]) -> ManifestRecord {
    ManifestRecord {
        filename: filename.to_owned(),
        category: Tags::One(category.to_owned()),
        aliases: aliases.iter().map(|a| (*a).to_owned()).collect(),
    }
}

fn build_service(records: Vec<ManifestRecord>) -> GameService {
    let mut images = InMemoryImages::new();
    for r in &records {
        images.insert(r.filename.clone(), vec![0xAB]);
    }
    let catalog = Catalog::from_records(records, &images).unwrap();
    GameService::new(catalog, Arc::new(images))
        .with_clock(fixed_clock())
        .with_rng(GameRng::seeded(9))
}

#[test]
fn single_round_game_end_to_end() {
    // One state capital, one correct guess.
    let mut game = build_service(vec![record("denver.jpg", "us_state_capitals", &[])]);
    let capitals = Category::new("us_state_capitals").unwrap();

    assert_eq!(game.phase(), GamePhase::NotStarted);
    let progress = game.start_session(&capitals, false).unwrap();
    assert_eq!(progress.total_rounds, 1);

    let round = game.current_round().unwrap();
    assert_eq!(round.filename, "denver.jpg");
    assert!(!round.hard_mode);

    let outcome = game.submit_guess("Denver").unwrap();
    assert!(outcome.record.correct);
    assert!(outcome.is_complete);

    let summary = game.summary();
    assert_eq!(summary.games_played, 1);
    assert_eq!(summary.games_won, 1);
    assert!((summary.accuracy - 100.0).abs() < f64::EPSILON);
    assert_eq!(game.phase(), GamePhase::Finished);
    assert!(game.current_round().is_none());
}

#[test]
fn full_game_with_mixed_guesses_and_reset() {
    let mut game = build_service(vec![
        record("denver.jpg", "us_state_capitals", &[]),
        record("boston.jpg", "us_state_capitals", &[]),
        record("austin.jpg", "us_state_capitals", &[]),
        record("new_york_city.jpg", "us_top10_cities", &["nyc"]),
    ]);
    let capitals = Category::new("us_state_capitals").unwrap();

    game.start_session(&capitals, false).unwrap();
    assert_eq!(game.current_round().unwrap().total_rounds, 3);

    // Round 1: answer correctly by deriving the name from the filename.
    let shown = game.current_round().unwrap().filename;
    let answer = shown.trim_end_matches(".jpg").replace('_', " ");
    assert!(game.submit_guess(&answer).unwrap().record.correct);

    // Round 2: empty guess is rejected and consumes nothing.
    assert!(game.submit_guess("  ").is_err());
    assert_eq!(game.summary().games_played, 1);

    // Round 2 again: deliberately wrong.
    let outcome = game.submit_guess("nowhere").unwrap();
    assert!(!outcome.record.correct);
    assert!(!outcome.is_complete);

    // Round 3: correct, finishing the game.
    let shown = game.current_round().unwrap().filename;
    let answer = shown.trim_end_matches(".jpg").replace('_', " ");
    let outcome = game.submit_guess(&answer).unwrap();
    assert!(outcome.is_complete);

    let summary = game.summary();
    assert_eq!(summary.games_played, 3);
    assert_eq!(summary.games_won, 2);
    assert_eq!(summary.history.len(), 3);
    let rounds: Vec<u32> = summary.history.iter().map(|r| r.round).collect();
    assert_eq!(rounds, [1, 2, 3]);

    // Reset returns to the menu; the next start re-filters by category.
    game.reset_to_menu();
    assert_eq!(game.phase(), GamePhase::NotStarted);
    assert_eq!(game.summary().games_played, 0);

    let top10 = Category::new("us_top10_cities").unwrap();
    let progress = game.start_session(&top10, false).unwrap();
    assert_eq!(progress.total_rounds, 1);
    assert_eq!(game.current_round().unwrap().filename, "new_york_city.jpg");
}

#[test]
fn hard_mode_keeps_session_accounting_identical() {
    let mut game = build_service(vec![
        record("denver.jpg", "us_state_capitals", &[]),
        record("boston.jpg", "us_state_capitals", &[]),
    ]);
    let capitals = Category::new("us_state_capitals").unwrap();

    game.start_session(&capitals, true).unwrap();
    let round = game.current_round().unwrap();
    assert!(round.hard_mode);

    game.submit_guess("a").unwrap();
    game.submit_guess("b").unwrap();

    assert_eq!(game.phase(), GamePhase::Finished);
    assert_eq!(game.summary().games_played, 2);
}

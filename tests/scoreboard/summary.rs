use chrono::Duration;
use scoreboard::{ManualClock, Scoreboard, ScoreboardConfig, TieBreak};

use crate::{board, play};

fn teams(board: &Scoreboard<ManualClock>) -> Vec<String> {
    board
        .matches()
        .iter()
        .map(|game| format!("{} - {}", game.home_team(), game.away_team()))
        .collect()
}

#[test]
fn empty_board_has_empty_summary() {
    let (board, _) = board();
    assert!(board.matches().is_empty());
}

#[test]
fn ranks_by_total_then_most_recent_start() {
    let (mut board, clock) = board();
    play(&mut board, &clock, "Mexico", "Canada", (0, 5));
    play(&mut board, &clock, "Spain", "Brazil", (10, 2));
    play(&mut board, &clock, "Germany", "France", (2, 2));
    play(&mut board, &clock, "Uruguay", "Italy", (6, 6));
    play(&mut board, &clock, "Argentina", "Australia", (3, 1));

    assert_eq!(
        teams(&board),
        [
            "uruguay - italy",
            "spain - brazil",
            "mexico - canada",
            "argentina - australia",
            "germany - france",
        ]
    );
}

#[test]
fn oldest_first_tie_break() {
    let clock = ManualClock::default();
    let config = ScoreboardConfig::default().with_tie_break(TieBreak::OldestFirst);
    let mut board = Scoreboard::with_config(config).with_clock(clock.clone());

    play(&mut board, &clock, "Mexico", "Canada", (0, 5));
    play(&mut board, &clock, "Spain", "Brazil", (10, 2));
    play(&mut board, &clock, "Germany", "France", (2, 2));
    play(&mut board, &clock, "Uruguay", "Italy", (6, 6));
    play(&mut board, &clock, "Argentina", "Australia", (3, 1));

    assert_eq!(
        teams(&board),
        [
            "spain - brazil",
            "uruguay - italy",
            "mexico - canada",
            "germany - france",
            "argentina - australia",
        ]
    );
}

#[test]
fn reranks_after_score_change() {
    let (mut board, clock) = board();
    let first = play(&mut board, &clock, "Mexico", "Canada", (1, 0));
    play(&mut board, &clock, "Spain", "Brazil", (2, 0));
    assert_eq!(teams(&board)[0], "spain - brazil");

    board.update_score(&first, 3, 0).unwrap();
    assert_eq!(teams(&board)[0], "mexico - canada");
}

#[test]
fn repeated_reads_are_identical() {
    let (mut board, clock) = board();
    play(&mut board, &clock, "Mexico", "Canada", (1, 1));
    play(&mut board, &clock, "Spain", "Brazil", (1, 1));

    assert_eq!(board.matches(), board.matches());
}

#[test]
fn starts_at_same_instant_keep_start_order() {
    let (mut board, clock) = board();
    clock.advance(Duration::minutes(10));
    board.start("Mexico", "Canada").unwrap();
    board.start("Spain", "Brazil").unwrap();
    board.start("Germany", "France").unwrap();

    assert_eq!(
        teams(&board),
        ["mexico - canada", "spain - brazil", "germany - france"]
    );
}

#[test]
fn frozen_clock_ranks_equal_totals_in_start_order() {
    let (mut board, _) = board();
    let scores = [
        ("Mexico", "Canada", (0, 5)),
        ("Spain", "Brazil", (10, 2)),
        ("Germany", "France", (2, 2)),
        ("Uruguay", "Italy", (6, 6)),
        ("Argentina", "Australia", (3, 1)),
    ];
    for (home, away, (home_score, away_score)) in scores {
        let id = board.start(home, away).unwrap();
        board.update_score(&id, home_score, away_score).unwrap();
    }

    assert_eq!(
        teams(&board),
        [
            "spain - brazil",
            "uruguay - italy",
            "mexico - canada",
            "germany - france",
            "argentina - australia",
        ]
    );
}

#[test]
fn numbered_lines() {
    let (mut board, clock) = board();
    play(&mut board, &clock, "Mexico", "Canada", (0, 5));
    play(&mut board, &clock, "Spain", "Brazil", (10, 2));

    assert_eq!(
        board.matches().lines(),
        ["1. spain 10 - brazil 2", "2. mexico 0 - canada 5"]
    );
}

#[test]
fn summary_serializes_for_hosts() {
    let (mut board, clock) = board();
    play(&mut board, &clock, "Mexico", "Canada", (0, 5));

    let json = serde_json::to_value(board.matches()).unwrap();
    assert_eq!(json[0]["homeTeam"], "mexico");
    assert_eq!(json[0]["awayScore"], 5);
    assert_eq!(json[0]["isFinished"], false);
}

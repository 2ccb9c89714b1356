//! Listener notifications fired by scoreboard transitions.

use std::sync::mpsc;
use std::time::Duration;

use scoreboard::{Match, MatchEvent, Scoreboard};

fn listen(board: &mut Scoreboard, event: MatchEvent) -> mpsc::Receiver<Match> {
    let (tx, rx) = mpsc::channel();
    board.on(event, move |payload: String| {
        let game: Match = serde_json::from_str(&payload).unwrap();
        tx.send(game).unwrap();
    });
    rx
}

#[test]
fn start_notifies_with_new_match() {
    let mut board = Scoreboard::new();
    let started = listen(&mut board, MatchEvent::Started);

    let id = board.start("Mexico", "Canada").unwrap();

    let game = started
        .recv_timeout(Duration::from_secs(1))
        .expect("MatchStarted listener never fired");
    assert_eq!(game.id(), &id);
    assert_eq!(game.home_team(), "mexico");
    assert_eq!(game.total_score(), 0);
}

#[test]
fn score_update_notifies_with_new_scores() {
    let mut board = Scoreboard::new();
    let updated = listen(&mut board, MatchEvent::ScoreUpdated);

    let id = board.start("Spain", "Brazil").unwrap();
    board.update_score(&id, 10, 2).unwrap();

    let game = updated.recv_timeout(Duration::from_secs(1)).unwrap();
    assert_eq!(game.home_score(), 10);
    assert_eq!(game.away_score(), 2);
    assert!(!game.is_finished());
}

#[test]
fn finish_notifies_once() {
    let mut board = Scoreboard::new();
    let finished = listen(&mut board, MatchEvent::Finished);
    let updated = listen(&mut board, MatchEvent::ScoreUpdated);

    let id = board.start("Germany", "France").unwrap();
    board.finish(&id).unwrap();
    assert!(board.finish(&id).is_err());

    let game = finished.recv_timeout(Duration::from_secs(1)).unwrap();
    assert!(game.is_finished());
    assert!(finished.recv_timeout(Duration::from_millis(50)).is_err());
    assert!(updated.try_recv().is_err());
}

#[test]
fn rejected_operations_notify_nobody() {
    let mut board = Scoreboard::new();
    let started = listen(&mut board, MatchEvent::Started);
    let updated = listen(&mut board, MatchEvent::ScoreUpdated);

    assert!(board.start("Mexico", "mexico").is_err());
    assert!(board.update_score("missing", 1, 1).is_err());

    assert!(started.recv_timeout(Duration::from_millis(50)).is_err());
    assert!(updated.recv_timeout(Duration::from_millis(50)).is_err());
    assert!(board.is_empty());
}

#[test]
fn removed_listener_stops_receiving() {
    let mut board = Scoreboard::new();
    let (tx, rx) = mpsc::channel::<String>();
    let listener = board.on(MatchEvent::Started, move |payload: String| {
        tx.send(payload).unwrap();
    });

    assert!(board.remove_listener(&listener));
    board.start("Mexico", "Canada").unwrap();

    assert!(rx.recv_timeout(Duration::from_millis(50)).is_err());
}

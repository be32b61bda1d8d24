//! Session integration tests: the presentation layer's view of a game.

use dots_boxes::core::{Action, BoardConfig, CellPos, Edge, Player};
use dots_boxes::rules::Outcome;
use dots_boxes::session::{Color, GameSession};

/// Intents arrive as JSON, one at a time, in order.
#[test]
fn test_dispatch_json_intents() {
    let intents = [
        r#"{"type":"claim-horizontal-edge","row":0,"col":0}"#,
        r#"{"type":"claim-vertical-edge","row":0,"col":0}"#,
        r#"{"type":"claim-horizontal-edge","row":1,"col":0}"#,
        r#"{"type":"claim-vertical-edge","row":0,"col":1}"#,
    ];

    let mut session = GameSession::default();
    for intent in intents {
        let action: Action = serde_json::from_str(intent).unwrap();
        session.dispatch(action).unwrap();
    }

    assert_eq!(session.state().cell(CellPos::new(0, 0)), Some(Player::B));
    assert_eq!(session.state().score(Player::B), 1);
    assert_eq!(session.highlighted_player(), Some(Player::B));
}

/// Redundant clicks are reported as ignored and change nothing.
#[test]
fn test_redundant_click_ignored() {
    let mut session = GameSession::default();
    session.claim(Edge::vertical(2, 2)).unwrap();
    let before = session.snapshot();

    let step = session.claim(Edge::vertical(2, 2)).unwrap();
    assert!(step.ignored);
    assert_eq!(session.state(), &before);
    assert_eq!(session.state().turn(), Player::B);
}

/// Play a full game on a 2x2 board to a tie, then play again.
#[test]
fn test_tie_then_play_again() {
    let mut session = GameSession::new(BoardConfig::new(2, 2).unwrap());
    let moves = [
        Edge::horizontal(0, 0),
        Edge::vertical(0, 0),
        Edge::horizontal(1, 0),
        Edge::horizontal(0, 1),
        Edge::vertical(0, 2),
        Edge::horizontal(1, 1),
        Edge::vertical(0, 1),
        Edge::horizontal(2, 0),
        Edge::horizontal(2, 1),
        Edge::vertical(1, 0),
        Edge::vertical(1, 1),
        Edge::vertical(1, 2),
    ];
    for edge in moves {
        session.claim(edge).unwrap();
    }

    assert_eq!(session.state().winner(), Some(Outcome::Tie));
    assert_eq!(session.banner(), Some("Tie"));
    assert_eq!(session.highlighted_player(), None);

    let step = session.dispatch(Action::Reset).unwrap();
    assert_eq!(step.state.total_score(), 0);
    assert_eq!(session.state().unclaimed_edges().count(), 12);
    assert_eq!(session.state().config().cell_count(), 4);
}

/// Colour changes from the picker are visible immediately.
#[test]
fn test_color_picker() {
    let mut session = GameSession::default();
    let edge = Edge::horizontal(0, 3);
    session.claim(edge).unwrap();

    let picked: Color = "#112233".parse().unwrap();
    session.set_color(Player::A, picked);

    assert_eq!(session.edge_color(edge), Some(picked));
    assert_eq!(session.colors()[Player::B].to_string(), "#6bde99");
}

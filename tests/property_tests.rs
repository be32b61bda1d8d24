//! Property tests over random move sequences.
//!
//! Moves are drawn from every edge on the board, claimed or not, so the
//! sequences mix real claims with redundant ones.

use proptest::prelude::*;
use proptest::sample::Index;

use dots_boxes::core::{Action, BoardConfig, CellPos, Edge, GameState};
use dots_boxes::games::boxes::{apply, step, DotsAndBoxes};
use dots_boxes::rules::RulesEngine;

fn all_edges(config: &BoardConfig) -> Vec<Edge> {
    let horizontal = (0..=config.height())
        .flat_map(|row| (0..config.width()).map(move |col| Edge::horizontal(row, col)));
    let vertical = (0..config.height())
        .flat_map(|row| (0..=config.width()).map(move |col| Edge::vertical(row, col)));
    horizontal.chain(vertical).collect()
}

fn complete_cells(state: &GameState) -> usize {
    let config = state.config();
    (0..config.height())
        .flat_map(|row| (0..config.width()).map(move |col| CellPos::new(row, col)))
        .filter(|cell| state.is_cell_complete(*cell))
        .count()
}

fn arb_config() -> impl Strategy<Value = BoardConfig> {
    (1usize..=5, 1usize..=4).prop_map(|(w, h)| BoardConfig::new(w, h).unwrap())
}

fn arb_game() -> impl Strategy<Value = (BoardConfig, Vec<Index>)> {
    (arb_config(), prop::collection::vec(any::<Index>(), 0..60))
}

proptest! {
    /// Claiming the same edge twice is the same as claiming it once.
    #[test]
    fn prop_idempotent_rejection((config, picks) in arb_game()) {
        let edges = all_edges(&config);
        let mut state = GameState::new(config);

        for pick in picks {
            let action = Action::claim(*pick.get(&edges));
            let once = apply(&state, &action).unwrap();
            let twice = apply(&once, &action).unwrap();
            prop_assert_eq!(&once, &twice);
            state = once;
        }
    }

    /// A claimed edge keeps its owner in every later snapshot, and earlier
    /// snapshots never change.
    #[test]
    fn prop_edge_permanence((config, picks) in arb_game()) {
        let edges = all_edges(&config);
        let mut state = GameState::new(config);

        for pick in picks {
            let before = state.clone();
            let next = apply(&state, &Action::claim(*pick.get(&edges))).unwrap();

            prop_assert_eq!(&state, &before);
            for (edge, owner) in state.claimed_edges() {
                prop_assert_eq!(next.edge(edge), Some(owner));
            }
            state = next;
        }
    }

    /// Scores always add up to the number of owned, and complete, cells.
    #[test]
    fn prop_score_cell_consistency((config, picks) in arb_game()) {
        let edges = all_edges(&config);
        let mut state = GameState::new(config);

        for pick in picks {
            state = apply(&state, &Action::claim(*pick.get(&edges))).unwrap();
            prop_assert_eq!(state.total_score() as usize, state.owned_cells());
            prop_assert_eq!(state.owned_cells(), complete_cells(&state));
        }
    }

    /// The mover keeps the turn exactly when the claim completes a box.
    #[test]
    fn prop_turn_retention((config, picks) in arb_game()) {
        let edges = all_edges(&config);
        let mut state = GameState::new(config);

        for pick in picks {
            let step = step(&state, &Action::claim(*pick.get(&edges))).unwrap();
            if step.ignored {
                prop_assert_eq!(step.state.turn(), state.turn());
            } else if step.completed.is_empty() {
                prop_assert_eq!(step.state.turn(), state.turn().opponent());
            } else {
                prop_assert_eq!(step.state.turn(), state.turn());
                prop_assert_eq!(
                    step.state.score(state.turn()),
                    state.score(state.turn()) + step.completed.len() as u32
                );
            }
            state = step.state;
        }
    }

    /// A winner exists exactly when every cell is owned.
    #[test]
    fn prop_winner_finality((config, picks) in arb_game()) {
        let edges = all_edges(&config);
        let mut state = GameState::new(config);

        for pick in picks {
            state = apply(&state, &Action::claim(*pick.get(&edges))).unwrap();
            prop_assert_eq!(
                state.winner().is_some(),
                state.total_score() as usize == config.cell_count()
            );
        }
    }

    /// Reset from anywhere gives the initial state.
    #[test]
    fn prop_reset_purity((config, picks) in arb_game()) {
        let edges = all_edges(&config);
        let game = DotsAndBoxes::new(config);
        let mut state = game.initial_state();

        for pick in picks {
            state = game.apply(&state, &Action::claim(*pick.get(&edges))).unwrap();
        }

        prop_assert_eq!(game.apply(&state, &Action::Reset).unwrap(), game.initial_state());
    }

    /// Playing legal moves until none remain always finishes the game.
    #[test]
    fn prop_legal_play_terminates(config in arb_config(), picks in prop::collection::vec(any::<Index>(), 64)) {
        let game = DotsAndBoxes::new(config);
        let mut state = game.initial_state();
        let mut picks = picks.into_iter().cycle();

        loop {
            let legal = game.legal_actions(&state);
            if legal.is_empty() {
                break;
            }
            let pick = picks.next().unwrap();
            let step = game.step(&state, pick.get(&legal)).unwrap();
            prop_assert!(!step.ignored);
            state = step.state;
        }

        prop_assert!(game.is_terminal(&state).is_some());
        prop_assert_eq!(state.unclaimed_edges().count(), 0);
        prop_assert_eq!(state.total_score() as usize, config.cell_count());
    }

    /// Edges off the board are rejected and leave nothing behind.
    #[test]
    fn prop_out_of_range_rejected(config in arb_config(), row in 0usize..12, col in 0usize..12, vertical in any::<bool>()) {
        let edge = if vertical { Edge::vertical(row, col) } else { Edge::horizontal(row, col) };
        let state = GameState::new(config);
        let result = apply(&state, &Action::claim(edge));

        prop_assert_eq!(result.is_ok(), edge.in_bounds(&config));
        prop_assert_eq!(state, GameState::new(config));
    }
}

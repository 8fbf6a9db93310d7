use std::collections::VecDeque;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread;

use super::*;

#[derive(Debug)]
struct ScriptedRoller {
    faces: VecDeque<u32>,
}

impl ScriptedRoller {
    fn new(dice: &[(u32, u32)]) -> Self {
        Self {
            faces: dice.iter().flat_map(|&(a, b)| [a, b]).collect(),
        }
    }
}

impl Roller for ScriptedRoller {
    fn roll_in_range(&mut self, _max: u32) -> u32 {
        self.faces.pop_front().expect("scripted roller ran out of faces")
    }
}

fn scripted_game(dice: &[(u32, u32)]) -> Game<ScriptedRoller> {
    Game::new(ScriptedRoller::new(dice))
}

/// Checks the shape of any history a reader may observe.
fn assert_well_formed(rolls: &[Roll]) {
    for (i, roll) in rolls.iter().enumerate() {
        let [a, b] = roll.dice();
        assert!((1..=6).contains(&a) && (1..=6).contains(&b), "bad dice {:?}", roll.dice());
        assert_eq!(roll.total(), a + b);
        assert_ne!(roll.state(), State::ComeOut, "no roll leaves the table in come-out");
        if i + 1 < rolls.len() {
            assert_eq!(roll.state(), State::Point, "only the last roll may be terminal");
        }
    }
}

#[test]
fn test_new_game_initial_state() {
    let game = scripted_game(&[]);
    assert_eq!(game.state(), State::ComeOut);
    assert_eq!(game.point(), None);
    assert!(game.rolls().is_empty());
    assert_eq!(game.wins(), 0);
    assert_eq!(game.losses(), 0);
}

#[test]
fn test_natural_wins_on_come_out() {
    let mut game = scripted_game(&[(3, 4)]);

    assert_eq!(game.play(), State::Win);

    let rolls = game.rolls();
    assert_eq!(rolls.len(), 1);
    assert_eq!(rolls[0].dice(), [3, 4]);
    assert_eq!(rolls[0].state(), State::Win);
    assert_eq!(game.wins(), 1);
    assert_eq!(game.losses(), 0);
}

#[test]
fn test_point_made_after_other_totals() {
    let mut game = scripted_game(&[(2, 3), (1, 1), (2, 3)]);

    assert_eq!(game.play(), State::Win);

    let states: Vec<State> = game.rolls().iter().map(Roll::state).collect();
    assert_eq!(states, vec![State::Point, State::Point, State::Win]);
    assert_eq!(game.point(), Some(5));
    assert_eq!(game.state(), State::Win);
    assert_eq!(game.wins(), 1);
}

#[test]
fn test_craps_loses_on_come_out() {
    let mut game = scripted_game(&[(1, 1)]);

    assert_eq!(game.play(), State::Loss);
    assert_eq!(game.rolls().len(), 1);
    assert_eq!(game.losses(), 1);
    assert_eq!(game.wins(), 0);
}

#[test]
fn test_seven_out_loses_point() {
    let mut game = scripted_game(&[(4, 4), (6, 5), (3, 4)]);

    assert_eq!(game.play(), State::Loss);

    let rolls = game.rolls();
    assert_eq!(rolls.len(), 3);
    assert_eq!(rolls[1].state(), State::Point, "11 is not special once a point is on");
    assert_eq!(rolls[2].state(), State::Loss);
    assert_eq!(game.point(), Some(8));
    assert_eq!(game.losses(), 1);
}

#[test]
fn test_single_roll_latches_point() {
    let mut game = scripted_game(&[(2, 2), (5, 6)]);

    assert_eq!(game.roll(), State::Point);
    assert_eq!(game.point(), Some(4));

    assert_eq!(game.roll(), State::Point);
    assert_eq!(game.point(), Some(4), "point does not move after the come-out");
    assert_eq!(game.rolls().len(), 2);
    assert_eq!(game.games_played(), 0, "stepping alone never tallies");
}

#[test]
fn test_reset_clears_play_but_keeps_tallies() {
    let mut game = scripted_game(&[(6, 6), (5, 6), (3, 3)]);
    game.play();
    game.play();
    game.roll();

    game.reset();

    assert_eq!(game.state(), State::ComeOut);
    assert_eq!(game.point(), None);
    assert!(game.rolls().is_empty());
    assert_eq!(game.wins(), 1);
    assert_eq!(game.losses(), 1);
}

#[test]
fn test_play_discards_previous_history() {
    let mut game = scripted_game(&[(4, 5), (6, 3), (1, 2)]);
    game.play();
    assert_eq!(game.rolls().len(), 2);

    game.play();
    let rolls = game.rolls();
    assert_eq!(rolls.len(), 1);
    assert_eq!(rolls[0].dice(), [1, 2]);
}

#[test]
fn test_rolls_snapshot_is_stable_and_detached() {
    let mut game = scripted_game(&[(5, 5), (2, 4), (5, 5)]);
    game.play();

    let first = game.rolls();
    let mut second = game.rolls();
    assert_eq!(first, second);

    second.clear();
    assert_eq!(game.rolls(), first);
}

#[test]
fn test_every_play_tallies_exactly_once() {
    let mut game = Game::new(RngRoller::seeded(7));

    for played in 1..=500u32 {
        let (wins, losses) = (game.wins(), game.losses());
        let outcome = game.play();

        assert!(outcome.is_terminal());
        assert_eq!(game.state(), outcome);
        match outcome {
            State::Win => assert_eq!((game.wins(), game.losses()), (wins + 1, losses)),
            _ => assert_eq!((game.wins(), game.losses()), (wins, losses + 1)),
        }
        assert_eq!(game.games_played(), played);

        let rolls = game.rolls();
        assert!(!rolls.is_empty());
        assert_well_formed(&rolls);
        assert_eq!(rolls.last().map(Roll::state), Some(outcome));
        if rolls.len() > 1 {
            assert!(matches!(game.point(), Some(4 | 5 | 6 | 8 | 9 | 10)));
        }
    }
}

#[test]
fn test_same_seed_same_session() {
    let mut a = Game::new(RngRoller::seeded(2024));
    let mut b = Game::new(RngRoller::seeded(2024));

    for _ in 0..50 {
        assert_eq!(a.play(), b.play());
        assert_eq!(a.rolls(), b.rolls());
    }
    assert_eq!(a.wins(), b.wins());
}

#[test]
#[should_panic(expected = "die face 7")]
fn test_out_of_range_face_panics() {
    let mut game = scripted_game(&[(7, 1)]);
    game.roll();
}

#[test]
#[should_panic(expected = "die face 0")]
fn test_zero_face_panics() {
    let mut game = scripted_game(&[(3, 0)]);
    game.roll();
}

#[test]
fn test_reader_sees_consistent_history_while_playing() {
    let mut game = Game::new(RngRoller::seeded(99));
    let history = game.history();
    let done = Arc::new(AtomicBool::new(false));

    let reader = {
        let done = Arc::clone(&done);
        thread::spawn(move || {
            let mut snapshots = 0usize;
            loop {
                let finished = done.load(Ordering::Acquire);
                assert_well_formed(&history.snapshot());
                snapshots += 1;
                if finished {
                    break snapshots;
                }
            }
        })
    };

    let writer = {
        let done = Arc::clone(&done);
        thread::spawn(move || {
            for _ in 0..2_000 {
                game.play();
            }
            done.store(true, Ordering::Release);
            game
        })
    };

    let game = writer.join().expect("writer panicked");
    let snapshots = reader.join().expect("reader saw a malformed history");

    assert!(snapshots > 0);
    assert_eq!(game.games_played(), 2_000);
    assert_well_formed(&game.rolls());
}

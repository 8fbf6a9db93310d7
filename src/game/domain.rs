use super::history::RollHistory;
use super::roller::Roller;
use super::types::{Dice, Roll, State};

const DIE_FACES: u32 = 6;

/// A single-player craps session: the current play-through plus lifetime tallies.
///
/// One thread drives the game through `play`/`roll`. Other threads may read
/// the roll history through a handle from [`Game::history`].
#[derive(Debug)]
pub struct Game<R> {
    state: State,
    point: Option<u8>,
    rolls: RollHistory,
    wins: u32,
    losses: u32,
    roller: R,
}

impl<R: Roller> Game<R> {
    pub fn new(roller: R) -> Self {
        Self {
            state: State::ComeOut,
            point: None,
            rolls: RollHistory::default(),
            wins: 0,
            losses: 0,
            roller,
        }
    }

    // Getters
    pub fn state(&self) -> State {
        self.state
    }

    /// The latched point, if one was established this play-through.
    /// Only meaningful while `state() == State::Point`.
    pub fn point(&self) -> Option<u8> {
        self.point
    }

    pub fn rolls(&self) -> Vec<Roll> {
        self.rolls.snapshot()
    }

    pub fn history(&self) -> RollHistory {
        self.rolls.clone()
    }

    pub fn wins(&self) -> u32 {
        self.wins
    }

    pub fn losses(&self) -> u32 {
        self.losses
    }

    pub fn games_played(&self) -> u32 {
        self.wins + self.losses
    }

    //  --- Public mutators ---

    /// Back to the come-out roll with an empty history. Tallies are kept.
    pub fn reset(&mut self) {
        self.state = State::ComeOut;
        self.point = None;
        self.rolls.clear();
    }

    /// Rolls once and applies the result to the current phase.
    ///
    /// Calling this in a terminal state records the roll but the state stays put.
    ///
    /// # Panics
    ///
    /// Panics if the roller returns a face outside `1..=6`. That is a broken
    /// roller, and clamping the face would silently skew the tallies.
    pub fn roll(&mut self) -> State {
        let dice: Dice = [self.draw_face(), self.draw_face()];
        let total = dice[0] + dice[1];

        let next = self.state.next(total, self.point);
        if self.state == State::ComeOut && next == State::Point {
            tracing::debug!(point = total, "point established");
            self.point = Some(total);
        }
        self.state = next;
        self.rolls.push(Roll::new(dice, next));

        tracing::debug!(?dice, total, state = %next, "rolled");
        next
    }

    /// Plays one complete game from a fresh come-out roll and tallies the outcome.
    #[tracing::instrument(skip(self))]
    pub fn play(&mut self) -> State {
        self.reset();
        while !self.state.is_terminal() {
            self.roll();
        }

        if self.state == State::Win {
            self.wins += 1;
        } else {
            self.losses += 1;
        }

        tracing::debug!(
            outcome = %self.state,
            rolls = self.rolls.len(),
            wins = self.wins,
            losses = self.losses,
            "game resolved"
        );
        self.state
    }

    //  --- Private helpers ---
    fn draw_face(&mut self) -> u8 {
        let face = self.roller.roll_in_range(DIE_FACES);
        assert!(
            (1..=DIE_FACES).contains(&face),
            "roller returned die face {face}, expected 1..={DIE_FACES}"
        );
        face as u8
    }
}

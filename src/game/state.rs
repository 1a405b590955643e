//! Round/phase state machine
//!
//! `GameState` is the only owner of phase, round, score, target, guess and
//! history. Every mutation goes through a transition method; a transition
//! requested from the wrong phase is ignored and reported as `false`.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::clamp01;
use crate::consts::{BAND_COUNT, INITIAL_GUESS, MAX_ROUNDS, SLIDER_RESOLUTION};
use crate::deck::{self, Category};
use crate::geometry::{BandWedge, derive_wedges};
use crate::scoring::{Verdict, compute_points, percent};

/// Current step of the round protocol
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    /// Idle, category list editable
    Start,
    /// Dial covered for both players
    SeerReady,
    /// Seer is looking at the target; clue entry locked
    SeerView,
    /// Target hidden, Guesser moves the dial
    Guess,
    /// Target and guess both shown with points
    Result,
    /// End of game: total and full history
    Summary,
}

impl Phase {
    pub fn as_str(&self) -> &'static str {
        match self {
            Phase::Start => "start",
            Phase::SeerReady => "seer_ready",
            Phase::SeerView => "seer_view",
            Phase::Guess => "guess",
            Phase::Result => "result",
            Phase::Summary => "summary",
        }
    }

    /// Phases that render the dial for the active round
    pub fn in_round(&self) -> bool {
        matches!(
            self,
            Phase::SeerReady | Phase::SeerView | Phase::Guess | Phase::Result
        )
    }

    /// Phases where the target may be drawn
    pub fn shows_target(&self) -> bool {
        matches!(self, Phase::SeerView | Phase::Result)
    }
}

/// One completed round, appended to history on scoring
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoundRecord {
    /// 1-based round index
    pub round: u32,
    pub category: Category,
    pub guess: f64,
    pub target: f64,
    pub points: u8,
    pub clue: String,
}

impl RoundRecord {
    pub fn diff(&self) -> f64 {
        (self.guess - self.target).abs()
    }

    pub fn verdict(&self) -> Verdict {
        Verdict::from_points(self.points)
    }

    /// "Target 37% · Guess 40% · Error 3%"
    pub fn breakdown(&self) -> String {
        format!(
            "Target {}% · Guess {}% · Error {}%",
            percent(self.target),
            percent(self.guess),
            percent(self.diff())
        )
    }

    /// "Target 37% · Guess 40% → +3"
    pub fn summary_line(&self) -> String {
        format!(
            "Target {}% · Guess {}% → +{}",
            percent(self.target),
            percent(self.guess),
            self.points
        )
    }
}

/// Complete state of one game session
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    phase: Phase,
    /// 1-based current round
    round: u32,
    rounds_count: u32,
    score: u32,
    /// Shuffled once per game; round N plays `deck[N - 1]`
    deck: Vec<Category>,
    guess: f64,
    target: f64,
    clue: String,
    history: Vec<RoundRecord>,
}

impl GameState {
    /// Idle state with a pre-shuffled default deck
    pub fn new<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let deck = deck::shuffle(&deck::default_categories(), rng);
        Self {
            phase: Phase::Start,
            round: 1,
            rounds_count: MAX_ROUNDS.min(deck.len() as u32),
            score: 0,
            deck,
            guess: INITIAL_GUESS,
            target: rng.random::<f64>(),
            clue: String::new(),
            history: Vec::new(),
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn round(&self) -> u32 {
        self.round
    }

    pub fn rounds_count(&self) -> u32 {
        self.rounds_count
    }

    /// Round number for the counter badge (never exceeds the total)
    pub fn display_round(&self) -> u32 {
        self.round.min(self.rounds_count)
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn guess(&self) -> f64 {
        self.guess
    }

    /// Guess on the integer slider scale
    pub fn slider_position(&self) -> u32 {
        (self.guess * f64::from(SLIDER_RESOLUTION)).round() as u32
    }

    pub fn clue(&self) -> &str {
        &self.clue
    }

    pub fn history(&self) -> &[RoundRecord] {
        &self.history
    }

    pub fn deck(&self) -> &[Category] {
        &self.deck
    }

    /// Category for the current round
    pub fn category(&self) -> &Category {
        let index = (self.round as usize - 1).min(self.deck.len() - 1);
        &self.deck[index]
    }

    /// Target, only while the phase permits seeing it
    pub fn visible_target(&self) -> Option<f64> {
        self.phase.shows_target().then_some(self.target)
    }

    /// Band geometry around the target, only while the target is visible
    pub fn visible_wedges(&self) -> Option<[BandWedge; BAND_COUNT]> {
        self.visible_target().map(derive_wedges)
    }

    /// Record of the round just scored
    pub fn last_result(&self) -> Option<&RoundRecord> {
        match self.phase {
            Phase::Result => self.history.last(),
            _ => None,
        }
    }

    fn ignored(&self, action: &str) -> bool {
        log::debug!("Ignoring {action} in phase {}", self.phase.as_str());
        false
    }

    fn enter(&mut self, phase: Phase) {
        log::debug!("Phase {} -> {}", self.phase.as_str(), phase.as_str());
        self.phase = phase;
    }

    /// Start a new game from the editor's category list
    ///
    /// Blank pairs are dropped (default deck if nothing survives), the deck
    /// is shuffled once, and all per-game state is reset.
    pub fn start_game<R: Rng + ?Sized>(&mut self, categories: &[Category], rng: &mut R) -> bool {
        if self.phase != Phase::Start {
            return self.ignored("start game");
        }

        self.deck = deck::shuffle(&deck::playable_deck(categories), rng);
        self.rounds_count = MAX_ROUNDS.min(self.deck.len() as u32);
        self.round = 1;
        self.score = 0;
        self.guess = INITIAL_GUESS;
        self.target = rng.random::<f64>();
        self.history.clear();
        self.clue.clear();
        self.enter(Phase::SeerReady);

        log::info!(
            "Game started: {} rounds from {} categories",
            self.rounds_count,
            self.deck.len()
        );
        true
    }

    /// Seer uncovers the dial
    pub fn reveal_target(&mut self) -> bool {
        if self.phase != Phase::SeerReady {
            return self.ignored("reveal target");
        }
        self.enter(Phase::SeerView);
        true
    }

    /// Seer covers the dial again and hands over to the Guesser
    pub fn hide_and_clue(&mut self) -> bool {
        if self.phase != Phase::SeerView {
            return self.ignored("hide and clue");
        }
        self.enter(Phase::Guess);
        true
    }

    /// Move the dial (clamped to [0, 1]); only while guessing
    pub fn set_guess(&mut self, value: f64) -> bool {
        if self.phase != Phase::Guess {
            return self.ignored("move guess");
        }
        self.guess = clamp01(value);
        true
    }

    /// Move the dial from the integer slider (0..=1000)
    pub fn set_guess_from_slider(&mut self, position: u32) -> bool {
        let position = position.min(SLIDER_RESOLUTION);
        self.set_guess(f64::from(position) / f64::from(SLIDER_RESOLUTION))
    }

    /// Edit the clue text; locked while the Seer is looking
    pub fn set_clue(&mut self, text: &str) -> bool {
        if !matches!(self.phase, Phase::SeerReady | Phase::Guess | Phase::Result) {
            return self.ignored("edit clue");
        }
        self.clue.clear();
        self.clue.push_str(text);
        true
    }

    /// Score the current guess, append it to history, and show the result
    pub fn reveal_and_score(&mut self) -> Option<&RoundRecord> {
        if self.phase != Phase::Guess {
            self.ignored("reveal and score");
            return None;
        }

        let diff = (self.guess - self.target).abs();
        let points = compute_points(diff);
        let record = RoundRecord {
            round: self.round,
            category: self.category().clone(),
            guess: self.guess,
            target: self.target,
            points,
            clue: self.clue.clone(),
        };
        self.history.push(record);
        self.score += u32::from(points);
        self.enter(Phase::Result);

        log::info!(
            "Round {}/{} scored: diff {:.3} -> {} points (total {})",
            self.round,
            self.rounds_count,
            diff,
            points,
            self.score
        );
        self.history.last()
    }

    /// Advance to the next round, or to the summary after the last one
    pub fn next_round<R: Rng + ?Sized>(&mut self, rng: &mut R) -> bool {
        if self.phase != Phase::Result {
            return self.ignored("next round");
        }

        let next = self.round + 1;
        if next > self.rounds_count {
            log::info!("Game finished with {} points", self.score);
            self.enter(Phase::Summary);
            return true;
        }

        self.round = next;
        self.guess = INITIAL_GUESS;
        self.target = rng.random::<f64>();
        self.clue.clear();
        self.enter(Phase::SeerReady);
        true
    }

    /// Skip straight to the end-of-game summary
    pub fn go_to_summary(&mut self) -> bool {
        if self.phase != Phase::Result {
            return self.ignored("go to summary");
        }
        log::info!("Game ended early with {} points", self.score);
        self.enter(Phase::Summary);
        true
    }

    /// Back to the start screen; state resets on the next start
    pub fn restart(&mut self) -> bool {
        if self.phase != Phase::Summary {
            return self.ignored("restart");
        }
        self.enter(Phase::Start);
        true
    }
}

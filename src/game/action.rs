//! User actions and the session that applies them
//!
//! The presentation layer turns every click, drag sample, or keystroke into
//! one `Action` and hands it to `Session::apply`. Nothing else mutates game
//! state.

use rand::SeedableRng;
use rand_pcg::Pcg32;

use super::state::{GameState, Phase};
use crate::deck::CategoryEditor;
use crate::settings::{Settings, Theme};

/// One discrete user input
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    // Start screen
    AddCategory { left: String, right: String },
    RemoveCategory(usize),
    ShuffleCategories,
    ResetCategories,
    StartGame,
    // Round flow
    RevealTarget,
    HideAndClue,
    /// Dial drag sample, already converted to [0, 1]
    MoveGuess(f64),
    /// Linear slider position (0..=1000)
    SlideGuess(u32),
    EditClue(String),
    RevealAndScore,
    NextRound,
    GoToSummary,
    Restart,
    // Presentation
    ToggleTheme,
}

/// A running game session: state, pre-game editor, RNG and theme
#[derive(Debug, Clone)]
pub struct Session {
    pub state: GameState,
    pub editor: CategoryEditor,
    pub theme: Theme,
    rng: Pcg32,
}

impl Session {
    /// Create a session seeded from `seed`
    pub fn new(seed: u64, settings: &Settings) -> Self {
        let mut rng = Pcg32::seed_from_u64(seed);
        let editor = match &settings.categories {
            Some(categories) => CategoryEditor::new(categories.clone()),
            None => CategoryEditor::default(),
        };
        Self {
            state: GameState::new(&mut rng),
            editor,
            theme: settings.theme,
            rng,
        }
    }

    /// Apply one action; returns whether anything changed
    pub fn apply(&mut self, action: Action) -> bool {
        match action {
            Action::AddCategory { left, right } => {
                self.in_start("add category") && self.editor.add(&left, &right)
            }
            Action::RemoveCategory(index) => {
                self.in_start("remove category") && self.editor.remove(index).is_some()
            }
            Action::ShuffleCategories => {
                if !self.in_start("shuffle categories") {
                    return false;
                }
                self.editor.shuffle(&mut self.rng);
                true
            }
            Action::ResetCategories => {
                if !self.in_start("reset categories") {
                    return false;
                }
                self.editor.reset();
                true
            }
            Action::StartGame => self.state.start_game(self.editor.entries(), &mut self.rng),
            Action::RevealTarget => self.state.reveal_target(),
            Action::HideAndClue => self.state.hide_and_clue(),
            Action::MoveGuess(value) => self.state.set_guess(value),
            Action::SlideGuess(position) => self.state.set_guess_from_slider(position),
            Action::EditClue(text) => self.state.set_clue(&text),
            Action::RevealAndScore => self.state.reveal_and_score().is_some(),
            Action::NextRound => self.state.next_round(&mut self.rng),
            Action::GoToSummary => self.state.go_to_summary(),
            Action::Restart => self.state.restart(),
            Action::ToggleTheme => {
                self.theme = self.theme.toggle();
                log::debug!("Theme switched to {}", self.theme.as_str());
                true
            }
        }
    }

    fn in_start(&self, action: &str) -> bool {
        let ok = self.state.phase() == Phase::Start;
        if !ok {
            log::debug!("Ignoring {action} outside the start screen");
        }
        ok
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::deck::Category;

    fn session() -> Session {
        Session::new(4242, &Settings::default())
    }

    #[test]
    fn test_session_plays_through_actions() {
        let mut s = session();
        assert!(s.apply(Action::StartGame));
        assert!(s.apply(Action::RevealTarget));
        let target = s.state.visible_target().unwrap();
        assert!(s.apply(Action::HideAndClue));
        assert!(s.apply(Action::EditClue("lukewarm".into())));
        assert!(s.apply(Action::MoveGuess(target)));
        assert!(s.apply(Action::RevealAndScore));
        assert_eq!(s.state.score(), 4);
        assert_eq!(s.state.history()[0].clue, "lukewarm");
        assert!(s.apply(Action::NextRound));
        assert_eq!(s.state.round(), 2);
    }

    #[test]
    fn test_editor_actions_only_on_start_screen() {
        let mut s = session();
        assert!(s.apply(Action::ResetCategories));
        assert!(s.apply(Action::AddCategory {
            left: "Cat".into(),
            right: "Dog".into()
        }));
        assert!(!s.apply(Action::AddCategory {
            left: "".into(),
            right: "Dog".into()
        }));
        assert_eq!(s.editor.len(), 21);
        assert!(s.apply(Action::RemoveCategory(20)));
        assert!(!s.apply(Action::RemoveCategory(99)));
        assert!(s.apply(Action::ShuffleCategories));

        s.apply(Action::StartGame);
        assert!(!s.apply(Action::ResetCategories));
        assert!(!s.apply(Action::RemoveCategory(0)));
        assert!(!s.apply(Action::ShuffleCategories));
        assert_eq!(s.editor.len(), 20);
    }

    #[test]
    fn test_custom_categories_from_settings() {
        let settings = Settings {
            categories: Some(vec![
                Category::new("Tea", "Coffee").unwrap(),
                Category::new("Cats", "Dogs").unwrap(),
                Category::new("Books", "Films").unwrap(),
            ]),
            ..Settings::default()
        };
        let mut s = Session::new(1, &settings);
        assert_eq!(s.editor.preview_rounds(), 3);
        s.apply(Action::StartGame);
        assert_eq!(s.state.rounds_count(), 3);
    }

    #[test]
    fn test_slider_and_drag_rejected_outside_guess() {
        let mut s = session();
        s.apply(Action::StartGame);
        assert!(!s.apply(Action::SlideGuess(800)));
        assert!(!s.apply(Action::MoveGuess(0.2)));
        assert_eq!(s.state.guess(), 0.5);
    }

    #[test]
    fn test_theme_toggle() {
        let mut s = session();
        assert_eq!(s.theme, Theme::Light);
        s.apply(Action::ToggleTheme);
        assert_eq!(s.theme, Theme::Dark);
    }

    #[test]
    fn test_same_seed_same_game() {
        let mut a = session();
        let mut b = session();
        a.apply(Action::StartGame);
        b.apply(Action::StartGame);
        assert_eq!(a.state.deck(), b.state.deck());
        a.apply(Action::RevealTarget);
        b.apply(Action::RevealTarget);
        assert_eq!(a.state.visible_target(), b.state.visible_target());
    }
}

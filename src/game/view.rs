//! What each phase permits the presentation layer to show and accept

use super::state::Phase;

/// Buttons/inputs offered below the dial or on the start/summary screens
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    StartGame,
    RevealTarget,
    HideAndClue,
    Slider,
    RevealAndScore,
    GoToSummary,
    NextRound,
    Restart,
}

impl Control {
    pub fn label(&self) -> &'static str {
        match self {
            Control::StartGame => "Start",
            Control::RevealTarget => "Show target (Seer)",
            Control::HideAndClue => "Hide and give clue",
            Control::Slider => "",
            Control::RevealAndScore => "Reveal and score",
            Control::GoToSummary => "Go to summary",
            Control::NextRound => "Next round",
            Control::Restart => "Back to start",
        }
    }
}

const START_CONTROLS: &[Control] = &[Control::StartGame];
const SEER_READY_CONTROLS: &[Control] = &[Control::RevealTarget];
const SEER_VIEW_CONTROLS: &[Control] = &[Control::HideAndClue];
const GUESS_CONTROLS: &[Control] = &[Control::Slider, Control::RevealAndScore];
const RESULT_CONTROLS: &[Control] = &[Control::GoToSummary, Control::NextRound];
const SUMMARY_CONTROLS: &[Control] = &[Control::Restart];

/// Derived view permissions for one phase
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PhaseView {
    /// Dial and round panel rendered at all
    pub show_dial: bool,
    /// Opaque cover over the dial
    pub dial_hidden: bool,
    pub show_target: bool,
    /// Dial accepts drags
    pub interactive: bool,
    pub clue_enabled: bool,
    pub clue_placeholder: &'static str,
    pub prompt: &'static str,
    pub controls: &'static [Control],
}

impl PhaseView {
    pub fn for_phase(phase: Phase) -> Self {
        let clue_placeholder = match phase {
            Phase::SeerView => "Don't say the clue yet…",
            _ => "Clue (optional, read it out loud)",
        };
        let (prompt, controls) = match phase {
            Phase::Start => ("Edit the categories, then start.", START_CONTROLS),
            Phase::SeerReady => (
                "Seer: press \"Show target\", look, then hide it.",
                SEER_READY_CONTROLS,
            ),
            Phase::SeerView => (
                "Only the Seer should be looking right now.",
                SEER_VIEW_CONTROLS,
            ),
            Phase::Guess => ("Guesser: move the dial and pick a spot.", GUESS_CONTROLS),
            Phase::Result => ("Result shown below.", RESULT_CONTROLS),
            Phase::Summary => ("Final result", SUMMARY_CONTROLS),
        };

        Self {
            show_dial: phase.in_round(),
            dial_hidden: phase == Phase::SeerReady,
            show_target: phase.shows_target(),
            interactive: phase == Phase::Guess,
            clue_enabled: matches!(phase, Phase::SeerReady | Phase::Guess | Phase::Result),
            clue_placeholder,
            prompt,
            controls,
        }
    }

    pub fn offers(&self, control: Control) -> bool {
        self.controls.contains(&control)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seer_phases() {
        let ready = PhaseView::for_phase(Phase::SeerReady);
        assert!(ready.show_dial && ready.dial_hidden);
        assert!(!ready.show_target && !ready.interactive);
        assert!(ready.offers(Control::RevealTarget));

        let view = PhaseView::for_phase(Phase::SeerView);
        assert!(view.show_target);
        assert!(!view.clue_enabled);
        assert!(!view.interactive);
        assert!(view.clue_placeholder.starts_with("Don't"));
    }

    #[test]
    fn test_guess_phase_is_only_interactive_one() {
        for phase in [
            Phase::Start,
            Phase::SeerReady,
            Phase::SeerView,
            Phase::Result,
            Phase::Summary,
        ] {
            let v = PhaseView::for_phase(phase);
            assert!(!v.interactive, "{phase:?}");
            assert!(!v.offers(Control::Slider), "{phase:?}");
        }
        let guess = PhaseView::for_phase(Phase::Guess);
        assert!(guess.interactive && guess.clue_enabled && !guess.show_target);
        assert!(guess.offers(Control::Slider));
    }

    #[test]
    fn test_result_and_summary_controls() {
        let result = PhaseView::for_phase(Phase::Result);
        assert!(result.show_target);
        assert_eq!(result.controls, &[Control::GoToSummary, Control::NextRound]);
        let summary = PhaseView::for_phase(Phase::Summary);
        assert!(!summary.show_dial);
        assert_eq!(summary.controls, &[Control::Restart]);
    }
}

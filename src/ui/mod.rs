//! Browser presentation layer
//!
//! Owns the DOM. Reads the session to decide what to draw and feeds every
//! user input back in as an `Action`.

mod dial;
mod dom;
mod input;
mod screens;

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::JsValue;

use crate::game::{Action, Control, Phase, PhaseView, Session};
use crate::scene::{DialLayout, DialScene};
use crate::settings::Settings;

use input::DragSession;

/// Control → button element id
const CONTROL_BUTTONS: [(Control, &str); 7] = [
    (Control::StartGame, "btn-start"),
    (Control::RevealTarget, "btn-reveal"),
    (Control::HideAndClue, "btn-hide"),
    (Control::RevealAndScore, "btn-score"),
    (Control::GoToSummary, "btn-summary"),
    (Control::NextRound, "btn-next"),
    (Control::Restart, "btn-restart"),
];

/// Game instance holding all UI-side state
pub(crate) struct App {
    session: Session,
    layout: DialLayout,
    /// Live pointer drag, if any; dropping it unsubscribes
    drag: Option<DragSession>,
}

impl App {
    fn new(session: Session, viewport_width: f64) -> Self {
        Self {
            session,
            layout: DialLayout::from_viewport_width(viewport_width),
            drag: None,
        }
    }

    fn view(&self) -> PhaseView {
        PhaseView::for_phase(self.session.state.phase())
    }

    /// Redraw everything from the session
    fn render(&self) -> Result<(), JsValue> {
        let doc = dom::document()?;
        let state = &self.session.state;
        let phase = state.phase();
        let view = self.view();

        if let Some(root) = doc.document_element() {
            root.set_attribute("data-theme", self.session.theme.as_str())?;
        }
        dom::set_text(&doc, "theme-toggle", self.session.theme.toggle_icon())?;
        dom::set_text(
            &doc,
            "round-badge",
            &format!("Round {} / {}", state.display_round(), state.rounds_count()),
        )?;
        dom::set_text(&doc, "score-badge", &format!("Points: {}", state.score()))?;

        dom::show_id(&doc, "start-screen", phase == Phase::Start)?;
        dom::show_id(&doc, "round-panel", view.show_dial)?;
        dom::show_id(&doc, "summary-screen", phase == Phase::Summary)?;

        for (control, id) in CONTROL_BUTTONS {
            let button = dom::by_id(&doc, id)?;
            button.set_text_content(Some(control.label()));
            dom::set_shown(&button, view.offers(control))?;
        }
        dom::show_id(&doc, "slider-wrap", view.offers(Control::Slider))?;
        dom::set_text(&doc, "prompt", view.prompt)?;

        match phase {
            Phase::Start => screens::render_editor(&doc, &self.session.editor)?,
            Phase::Summary => screens::render_summary(&doc, state)?,
            _ => {}
        }

        if view.show_dial {
            let category = state.category();
            dom::set_text(&doc, "cat-left-label", &category.left)?;
            dom::set_text(&doc, "cat-right-label", &category.right)?;

            let clue = dom::input_by_id(&doc, "clue-input")?;
            if clue.value() != state.clue() {
                clue.set_value(state.clue());
            }
            clue.set_disabled(!view.clue_enabled);
            clue.set_placeholder(view.clue_placeholder);

            let slider = dom::input_by_id(&doc, "slider")?;
            slider.set_value(&state.slider_position().to_string());

            dial::render(&doc, &DialScene::build(self.layout, state), &view)?;
            screens::render_result(&doc, state)?;
        }
        Ok(())
    }
}

/// Apply an action and redraw if it changed anything
pub(crate) fn dispatch(app: &Rc<RefCell<App>>, action: Action) -> bool {
    let changed = app.borrow_mut().session.apply(action);
    if changed {
        redraw(app);
    }
    changed
}

pub(crate) fn redraw(app: &Rc<RefCell<App>>) {
    if let Err(e) = app.borrow().render() {
        log::error!("Render failed: {:?}", e);
    }
}

/// Build the session, wire inputs, and draw the first frame
pub fn run() -> Result<(), JsValue> {
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;

    let settings = Settings::load();
    let seed = settings.seed.unwrap_or_else(|| js_sys::Date::now() as u64);
    let viewport_width = window.inner_width()?.as_f64().unwrap_or(1024.0);

    let app = Rc::new(RefCell::new(App::new(
        Session::new(seed, &settings),
        viewport_width,
    )));
    log::info!("Session initialized with seed: {}", seed);

    input::setup(&app)?;
    app.borrow().render()?;

    let doc = dom::document()?;
    if let Some(loading) = doc.get_element_by_id("loading") {
        dom::set_shown(&loading, false)?;
    }
    Ok(())
}

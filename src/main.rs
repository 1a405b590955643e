//! Wavelength Coop entry point
//!
//! Handles platform-specific initialization. The browser build mounts the
//! UI; the native build plays a short headless game for a quick smoke check.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    console_error_panic_hook::set_once();
    if let Err(e) = console_log::init_with_level(log::Level::Info) {
        web_sys::console::error_1(&JsValue::from_str(&format!("Logger init failed: {e}")));
    }

    log::info!("Wavelength Coop starting...");
    match wavelength_coop::ui::run() {
        Ok(()) => log::info!("Wavelength Coop running!"),
        Err(e) => log::error!("UI setup failed: {:?}", e),
    }
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Wavelength Coop (native) starting...");
    log::info!("The playable UI is browser-only - run with `trunk serve` for the web version");

    let seed = std::env::args()
        .nth(1)
        .and_then(|s| s.parse().ok())
        .unwrap_or_else(rand::random::<u64>);
    demo_game(seed);
}

/// Headless game: the Seer memorizes the target, the Guesser lands near it
#[cfg(not(target_arch = "wasm32"))]
fn demo_game(seed: u64) {
    use rand::{Rng, SeedableRng};
    use rand_pcg::Pcg32;
    use wavelength_coop::game::{Action, Phase, Session};
    use wavelength_coop::scoring::points_caption;
    use wavelength_coop::settings::Settings;

    let mut session = Session::new(seed, &Settings::load());
    let mut guesser = Pcg32::seed_from_u64(seed ^ 0x9e37_79b9_7f4a_7c15);

    session.apply(Action::StartGame);
    println!(
        "\nPlaying {} rounds (seed {seed})",
        session.state.rounds_count()
    );

    while session.state.phase() != Phase::Summary {
        session.apply(Action::RevealTarget);
        let target = session.state.visible_target().unwrap_or(0.5);
        session.apply(Action::HideAndClue);

        let category = session.state.category().clone();
        session.apply(Action::EditClue(format!(
            "{}% of the way from {} to {}",
            (target * 100.0).round(),
            category.left,
            category.right
        )));
        session.apply(Action::MoveGuess(target + guesser.random_range(-0.3..0.3)));
        session.apply(Action::RevealAndScore);

        if let Some(record) = session.state.last_result() {
            println!(
                "Round {}: {} ↔ {} | {} | {}",
                record.round,
                record.category.left,
                record.category.right,
                record.breakdown(),
                points_caption(record.points)
            );
        }
        session.apply(Action::NextRound);
    }

    println!("Final score: {}", session.state.score());
}

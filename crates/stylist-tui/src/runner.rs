//! Main TUI runner - terminal lifecycle and event loop

use std::time::Instant;

use ratatui::layout::Rect;

use stylist_app::config::Settings;
use stylist_app::Engine;
use stylist_backend::StyleBackend;
use stylist_core::prelude::*;

use crate::event::{self, SwipeTracker, Ticker};
use crate::{render, terminal};

/// Run the TUI until the user quits or a signal arrives
pub async fn run<B>(settings: Settings, backend: B) -> Result<()>
where
    B: StyleBackend + Sync + 'static,
{
    terminal::install_panic_hook();

    let mut term = ratatui::init();
    if let Err(e) = terminal::enable_mouse() {
        // Keys still work without mouse swipes
        warn!("{}", e);
    }

    let mut engine = Engine::new(settings, backend);
    engine.start();

    let result = run_loop(&mut term, &mut engine);

    terminal::disable_mouse();
    ratatui::restore();

    info!("AIstylist exiting");
    result
}

/// Main event loop
fn run_loop<B>(terminal: &mut ratatui::DefaultTerminal, engine: &mut Engine<B>) -> Result<()>
where
    B: StyleBackend + Sync + 'static,
{
    let mut swipes = SwipeTracker::new();
    let mut ticker = Ticker::new(event::POLL_INTERVAL);

    while !engine.should_quit() {
        // Completions from background tasks and the signal handler
        engine.drain_pending_messages();

        let mut area = Rect::default();
        terminal.draw(|frame| {
            area = frame.area();
            render::view(frame, &engine.state);
        })?;
        let region = render::swipe_region(area, &engine.state);

        if let Some(message) = event::poll(&mut swipes, region)? {
            engine.process_message(message);
        }
        if let Some(tick) = ticker.tick(Instant::now()) {
            engine.process_message(tick);
        }
    }

    Ok(())
}

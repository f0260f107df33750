//! Main TUI runner - entry point and event loop

use cinemax_api::{ApiClient, HttpMovieApi, MovieApi};
use cinemax_app::{signals, Engine, Settings};
use cinemax_core::prelude::*;

use crate::layout::HitAreas;
use crate::{event, render, terminal};

/// Run the TUI against the movie service named in `settings`
pub async fn run(settings: Settings) -> Result<()> {
    // Install panic hook for terminal restoration
    terminal::install_panic_hook();

    let client =
        ApiClient::with_timeout(&settings.api.base_url, settings.api.request_timeout())?;
    info!("Using movie service at {}", client.base_url());

    let mut engine = Engine::new(HttpMovieApi::new(client), settings);

    // Sends Message::Quit on SIGINT/SIGTERM
    signals::spawn_signal_handler(engine.msg_sender());

    let mut term = ratatui::try_init().map_err(|e| Error::TerminalInit(e.to_string()))?;
    let mouse = engine.settings.ui.mouse;
    if mouse {
        if let Err(e) = terminal::enable_mouse() {
            warn!("{}", e);
        }
    }

    engine.start();
    let result = run_loop(&mut term, &mut engine);

    if mouse {
        if let Err(e) = terminal::disable_mouse() {
            warn!("{}", e);
        }
    }
    ratatui::restore();

    engine.shutdown().await;
    result
}

/// Main event loop
fn run_loop<A>(terminal: &mut ratatui::DefaultTerminal, engine: &mut Engine<A>) -> Result<()>
where
    A: MovieApi + Sync + 'static,
{
    let mut hits = HitAreas::default();

    while !engine.should_quit() {
        // Replies from fetch tasks, debounce timers and the signal handler
        engine.drain_pending_messages();
        if engine.should_quit() {
            break;
        }

        terminal.draw(|frame| hits = render::view(frame, &mut engine.state))?;

        if let Some(message) = event::poll(&hits)? {
            engine.process_message(message);
        }
    }

    info!("Event loop finished");
    Ok(())
}

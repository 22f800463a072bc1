use eavtui::api::EavClient;
use eavtui::app::App;
use eavtui::cli::{parse_args, run_cli_command, CliCommand};
use eavtui::config::{Config, ConfigError, ConfigManager};
use eavtui::error::{ErrorContext, ResultExt};
use eavtui::store::{EffectRunner, StoreHandle};
use eavtui::terminal::{setup_panic_hook, TerminalManager};
use eavtui::{logging, ui};

use color_eyre::Result;
use crossterm::event::{Event, EventStream};
use futures::StreamExt;
use ratatui::Terminal;
use std::time::Duration;
use tokio::sync::watch;

/// Redraw cadence while something is loading (spinner animation).
const TICK: Duration = Duration::from_millis(50);

#[tokio::main]
async fn main() -> Result<()> {
    let command = parse_args(std::env::args());
    if run_cli_command(&command) {
        return Ok(());
    }
    let CliCommand::RunTui(overrides) = command else {
        return Ok(());
    };

    color_eyre::install()?;

    let manager = ConfigManager::new().ok_or(ConfigError::NoHomeDir)?;
    let config = Config::load(&manager, &overrides)
        .with_context(|| ErrorContext::new("load config").with_component("main"))?;

    let log_path = config.log_path()?;
    logging::init(&log_path).context(ErrorContext::new("open log file").with_component("main"))?;
    tracing::info!(version = eavtui::cli::VERSION, api_url = %config.api_url, "starting");

    match config.validate() {
        Ok(()) => {}
        // The backend reports this itself when the connect request arrives
        Err(e @ ConfigError::MissingDatabase) => tracing::warn!("{}", e),
        Err(e) => return Err(e.into()),
    }

    let (store, effects) = StoreHandle::new();
    let client = EavClient::new(config.api_url.clone());
    let runner = EffectRunner::new(client, config.db.clone(), store.clone(), effects);
    let runner_handle = tokio::spawn(runner.run());

    setup_panic_hook();
    let mut terminal_manager = TerminalManager::new()?;

    let mut app = App::new(store.clone());
    app.mount();

    let result = run_app(terminal_manager.terminal(), &mut app, store.subscribe_revision()).await;

    app.tabs.unmount();
    terminal_manager.restore()?;
    drop(app);
    drop(store);
    runner_handle.abort();

    if let Err(ref e) = result {
        tracing::error!("event loop failed: {:?}", e);
    }
    tracing::info!("exiting");
    result
}

async fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
    mut revision_rx: watch::Receiver<u64>,
) -> Result<()>
where
    B::Error: Send + Sync + 'static,
{
    let mut event_stream = EventStream::new();

    loop {
        app.poll_store();

        if app.needs_redraw {
            terminal.draw(|f| ui::render(f, app))?;
            app.needs_redraw = false;
        }

        if app.should_quit {
            return Ok(());
        }

        let tick = tokio::time::sleep(TICK);

        tokio::select! {
            _ = tick => {
                app.tick();
                if app.is_busy() {
                    app.mark_dirty();
                }
            }

            changed = revision_rx.changed() => {
                if changed.is_err() {
                    // Store dropped; nothing more will change
                    return Ok(());
                }
                app.mark_dirty();
            }

            event_result = event_stream.next() => {
                match event_result {
                    Some(Ok(Event::Key(key))) => app.handle_key_event(key),
                    Some(Ok(Event::Mouse(mouse))) => app.handle_mouse_event(mouse),
                    Some(Ok(Event::Resize(_, _))) => app.mark_dirty(),
                    Some(Ok(_)) => {}
                    Some(Err(e)) => return Err(e.into()),
                    None => return Ok(()),
                }
            }
        }
    }
}

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::mpsc;

use crate::client::ApiClient;
use crate::config::Config;
use crate::server::ConversionServer;
use crate::shutdown::ShutdownHandle;
use crate::ui::app::{App, UiCommand};
use crate::ui::events::{AppEvent, EventHandler};
use crate::ui::form::InputMode;
use crate::ui::input::{handle_key, handle_paste};
use crate::ui::render::draw;
use crate::ui::terminal_guard::setup_terminal;

/// Run the TUI until the user quits.
///
/// When no service URL is configured, a conversion service is started on
/// the loopback interface and torn down with the UI.
pub fn run(
    config: Config,
    server_override: Option<String>,
    initial_mode: Option<InputMode>,
) -> anyhow::Result<()> {
    let runtime = tokio::runtime::Runtime::new()?;

    let mut embedded_shutdown = None;
    let base_url = match server_override.or_else(|| config.client.server_url.clone()) {
        Some(url) => url,
        None => {
            let mut server = ConversionServer::new(&config);
            let (_, base_url) = runtime.block_on(server.try_bind(&config.server.bind_addr))?;
            embedded_shutdown = Some(server.shutdown_handle());
            runtime.spawn(async move {
                if let Err(err) = server.run().await {
                    tracing::error!("Embedded service failed: {}", err);
                }
            });
            base_url
        }
    };
    tracing::info!("Using conversion service at {}", base_url);

    let (mut terminal, guard) = setup_terminal()?;
    let tick_rate = Duration::from_millis(250);
    let ui_shutdown = ShutdownHandle::new();
    let events = EventHandler::new(tick_rate, ui_shutdown.clone());

    let mut app = App::new();
    if let Some(mode) = initial_mode {
        app.select_mode(mode);
    }

    let (command_tx, mut command_rx) = mpsc::channel::<UiCommand>(16);
    app.set_command_sender(command_tx);

    // Worker: each submission runs as its own task, so overlapping
    // requests are possible and the last to resolve wins on screen.
    let api = Arc::new(ApiClient::new(base_url, &config.client));
    let event_tx = events.sender();
    runtime.spawn(async move {
        while let Some(command) = command_rx.recv().await {
            match command {
                UiCommand::Submit(submission) => {
                    let client = Arc::clone(&api);
                    let tx = event_tx.clone();
                    tokio::spawn(async move {
                        match client.submit(submission).await {
                            Ok(text) => {
                                let _ = tx.send(AppEvent::Conversion(text));
                            }
                            Err(err) => {
                                // Failures never reach the screen
                                tracing::error!("Conversion failed: {}", err);
                            }
                        }
                    });
                }
            }
        }
    });

    loop {
        terminal.draw(|frame| draw(frame, &app))?;
        if app.should_quit() {
            break;
        }

        match events.next(tick_rate) {
            Ok(AppEvent::Key(key)) => handle_key(&mut app, key),
            Ok(AppEvent::Paste(text)) => handle_paste(&mut app, text),
            Ok(AppEvent::Tick) => app.on_tick(),
            Ok(AppEvent::Resize(_, _)) => {}
            Ok(AppEvent::Conversion(text)) => app.on_conversion(text),
            Err(std::sync::mpsc::RecvTimeoutError::Timeout) => {}
            Err(std::sync::mpsc::RecvTimeoutError::Disconnected) => break,
        }
    }

    ui_shutdown.signal();
    if let Some(shutdown) = embedded_shutdown {
        shutdown.signal();
    }
    runtime.shutdown_timeout(Duration::from_secs(2));
    drop(guard);
    Ok(())
}

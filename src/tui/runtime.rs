use std::io;
use std::time::Duration;

use tokio::runtime::Handle;

use crate::config::Config;
use crate::net::RatesClient;

use super::app::App;
use super::events::{AppEvent, EventHandler};
use super::input::handle_key;
use super::render::draw;
use super::terminal_guard::setup_terminal;

/// Drive the application until the user quits.
///
/// Fetch commands are spawned onto `runtime`; their results come back
/// through the same event channel as keyboard input, so the reducer
/// only ever runs on this thread, one message at a time.
pub fn run(config: &Config, runtime: Handle) -> io::Result<()> {
    let (mut terminal, guard) = setup_terminal()?;
    let tick_rate = Duration::from_millis(250);
    let events = EventHandler::new(tick_rate);
    let client = RatesClient::new(&config.rates);
    let mut app = App::new(client, runtime, events.sender());

    loop {
        terminal.draw(|frame| draw(frame, &app))?;
        if app.should_quit() {
            break;
        }

        match events.next(tick_rate) {
            Ok(AppEvent::Input(key)) => handle_key(&mut app, key),
            Ok(AppEvent::Message(message)) => app.dispatch(message),
            Ok(AppEvent::Tick) => {}
            Ok(AppEvent::Resize(_, _)) => {}
            Err(std::sync::mpsc::RecvTimeoutError::Timeout) => {}
            Err(std::sync::mpsc::RecvTimeoutError::Disconnected) => break,
        }
    }

    drop(guard);
    Ok(())
}

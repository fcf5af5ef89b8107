//! Shared test utilities.

#![allow(dead_code)]

use std::io::{Read, Write};
use std::net::TcpListener;
use std::sync::mpsc::{self, Receiver};
use std::thread::{self, JoinHandle};

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyEventState, KeyModifiers};
use tokio::runtime::Runtime;

use cambio::config::RatesConfig;
use cambio::domain::{AppState, RateTable};
use cambio::net::RatesClient;
use cambio::tui::app::App;
use cambio::tui::events::AppEvent;

/// The documented response shape of the rates endpoint, two currencies.
pub fn rates_payload() -> Vec<u8> {
    br#"{"base":"EUR","date":"2017-08-29","rates":{"USD":1.18,"GBP":0.86}}"#.to_vec()
}

pub fn rate_table(entries: &[(&str, f64)]) -> RateTable {
    entries
        .iter()
        .map(|(code, rate)| (code.to_string(), *rate))
        .collect()
}

pub fn state_with_rates(entries: &[(&str, f64)]) -> AppState {
    AppState {
        rates: Some(rate_table(entries)),
        converter: None,
    }
}

/// Find an available port for testing.
pub fn free_port() -> u16 {
    let listener = TcpListener::bind("127.0.0.1:0").expect("Failed to bind to free port");
    listener.local_addr().unwrap().port()
}

/// Serve exactly one canned HTTP response on a random local port.
///
/// Returns the endpoint URL and a handle to join once the response has
/// gone out.
pub fn serve_once(status_line: &str, body: &[u8]) -> (String, JoinHandle<()>) {
    let listener = TcpListener::bind("127.0.0.1:0").expect("Failed to bind mock server");
    let addr = listener.local_addr().unwrap();
    let status_line = status_line.to_string();
    let body = body.to_vec();

    let handle = thread::spawn(move || {
        if let Ok((mut stream, _)) = listener.accept() {
            // Drain the request head; a GET fits one read.
            let mut request = [0u8; 1024];
            let _ = stream.read(&mut request);
            let head = format!(
                "HTTP/1.1 {}\r\nContent-Length: {}\r\nConnection: close\r\n\r\n",
                status_line,
                body.len()
            );
            let _ = stream.write_all(head.as_bytes());
            let _ = stream.write_all(&body);
        }
    });

    (format!("http://{}/latest", addr), handle)
}

pub fn rates_config(endpoint: &str) -> RatesConfig {
    RatesConfig {
        endpoint: endpoint.to_string(),
        base_currency: "EUR".to_string(),
        timeout_seconds: 5,
        connect_timeout_seconds: 2,
    }
}

// -- Driver rig ---------------------------------------------------------------

/// An `App` wired to a real runtime and an inspectable event channel.
pub struct DriverRig {
    pub app: App,
    pub events: Receiver<AppEvent>,
    /// Keeps spawned fetches alive for the rig's lifetime.
    _runtime: Runtime,
}

pub fn make_driver(endpoint: &str) -> DriverRig {
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .worker_threads(1)
        .enable_all()
        .build()
        .expect("Failed to build test runtime");
    let (tx, rx) = mpsc::channel();
    let client = RatesClient::new(&rates_config(endpoint));
    let app = App::new(client, runtime.handle().clone(), tx);
    DriverRig {
        app,
        events: rx,
        _runtime: runtime,
    }
}

pub fn press_key(code: KeyCode) -> KeyEvent {
    KeyEvent {
        code,
        modifiers: KeyModifiers::empty(),
        kind: KeyEventKind::Press,
        state: KeyEventState::empty(),
    }
}

pub fn press_ctrl(ch: char) -> KeyEvent {
    KeyEvent {
        code: KeyCode::Char(ch),
        modifiers: KeyModifiers::CONTROL,
        kind: KeyEventKind::Press,
        state: KeyEventState::empty(),
    }
}

//! Integration tests for `log` facade capture
//!
//! Everything here shares the process-wide facade, so every test is
//! `#[serial]` and starts by calling `ensure_wired`. The first call wires
//! the interceptor with a recording sink as its forward target; later
//! calls reset the sink and the max level so tests stay independent.

use std::sync::{Mutex, Once};

use log::{LevelFilter, Log, Metadata, Record};
use serde_json::json;
use serial_test::serial;

use termcon::{install, install_with_forward, Console, Error, LogBuffer, RecordKind};

/// Downstream handler standing in for a host application's real logger.
static SINK: Mutex<Vec<(log::Level, String)>> = Mutex::new(Vec::new());

struct RecordingSink;

impl Log for RecordingSink {
    fn enabled(&self, _metadata: &Metadata) -> bool {
        true
    }

    fn log(&self, record: &Record) {
        SINK.lock()
            .unwrap()
            .push((record.level(), record.args().to_string()));
    }

    fn flush(&self) {}
}

/// Wire the facade to the interceptor exactly once, forwarding to
/// [`RecordingSink`]. The throwaway install is dropped immediately so each
/// test starts with an empty listener slot, a clean sink, and a max level
/// that lets macro calls through (the facade boots at `Off`).
fn ensure_wired() {
    static WIRE: Once = Once::new();
    WIRE.call_once(|| {
        let guard = install_with_forward(LogBuffer::new(), RecordingSink)
            .expect("first install wires the facade");
        drop(guard);
    });

    log::set_max_level(LevelFilter::Trace);
    SINK.lock().unwrap().clear();
}

fn sink_contents() -> Vec<(log::Level, String)> {
    SINK.lock().unwrap().clone()
}

// ═══════════════════════════════════════════════════════════════
// Capture and Forwarding
// ═══════════════════════════════════════════════════════════════

#[test]
#[serial]
fn test_capture_and_forward_exactly_once() {
    ensure_wired();
    let buffer = LogBuffer::new();
    let _guard = install(buffer.clone()).unwrap();

    log::error!("boom");

    let records = buffer.snapshot();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].kind, RecordKind::Error);
    assert_eq!(records[0].message, "boom");

    let forwarded = sink_contents();
    assert_eq!(forwarded.len(), 1);
    assert_eq!(forwarded[0], (log::Level::Error, "boom".to_string()));
}

#[test]
#[serial]
fn test_pass_through_without_listener() {
    ensure_wired();

    log::warn!("nobody listening");

    let forwarded = sink_contents();
    assert_eq!(forwarded.len(), 1);
    assert_eq!(forwarded[0].1, "nobody listening");
}

#[test]
#[serial]
fn test_guard_drop_stops_capture_but_not_forwarding() {
    ensure_wired();
    let buffer = LogBuffer::new();
    let guard = install(buffer.clone()).unwrap();

    log::warn!("while installed");
    drop(guard);
    log::warn!("after drop");

    assert_eq!(buffer.len(), 1, "capture must end with the guard");
    assert_eq!(
        sink_contents().len(),
        2,
        "forwarding must survive the guard"
    );
}

#[test]
#[serial]
fn test_records_arrive_in_emission_order() {
    ensure_wired();
    let buffer = LogBuffer::new();
    let _guard = install(buffer.clone()).unwrap();

    log::error!("e");
    log::warn!("w");
    log::info!("i");
    log::debug!("d");
    log::trace!("t");

    let records = buffer.snapshot();
    let kinds: Vec<RecordKind> = records.iter().map(|r| r.kind).collect();
    assert_eq!(
        kinds,
        vec![
            RecordKind::Error,
            RecordKind::Warn,
            RecordKind::Info,
            RecordKind::Debug,
            RecordKind::Log,
        ]
    );
    let messages: Vec<&str> = records.iter().map(|r| r.message.as_str()).collect();
    assert_eq!(messages, vec!["e", "w", "i", "d", "t"]);
}

// ═══════════════════════════════════════════════════════════════
// Install Lifecycle
// ═══════════════════════════════════════════════════════════════

#[test]
#[serial]
fn test_second_install_rejected_until_guard_drops() {
    ensure_wired();
    let guard = install(LogBuffer::new()).unwrap();

    assert!(matches!(
        install(LogBuffer::new()),
        Err(Error::AlreadyInstalled)
    ));

    drop(guard);
    let second = LogBuffer::new();
    let _guard = install(second.clone()).unwrap();

    log::info!("second listener");
    assert_eq!(second.len(), 1);
}

#[test]
#[serial]
fn test_install_raises_and_restores_max_level() {
    ensure_wired();
    log::set_max_level(LevelFilter::Warn);

    let buffer = LogBuffer::new();
    let guard = install(buffer.clone()).unwrap();
    assert_eq!(log::max_level(), LevelFilter::Trace);

    log::debug!("fine grained");
    assert_eq!(buffer.len(), 1);

    drop(guard);
    assert_eq!(log::max_level(), LevelFilter::Warn);

    log::debug!("filtered out");
    assert_eq!(
        sink_contents().len(),
        1,
        "restored level must filter debug again"
    );
}

// ═══════════════════════════════════════════════════════════════
// Console Scenarios
// ═══════════════════════════════════════════════════════════════

#[test]
#[serial]
fn test_clear_resets_scrollback_midstream() {
    ensure_wired();
    let console = Console::new().unwrap();

    log::trace!("hi");
    log::warn!("careful {}", 42);
    console.clear();
    log::info!("done");

    let records = console.buffer().snapshot();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].kind, RecordKind::Info);
    assert_eq!(records[0].message, "done");
}

#[test]
#[serial]
fn test_facade_and_direct_appends_share_the_buffer() {
    ensure_wired();
    let console = Console::new().unwrap();

    log::info!("from facade");
    console.append(RecordKind::Error, &[json!({"code": 500})]);

    let records = console.buffer().snapshot();
    assert_eq!(records.len(), 2);
    assert_eq!(records[0].message, "from facade");
    assert!(records[1].message.contains("\"code\": 500"));
}

#[test]
#[serial]
fn test_console_drop_frees_the_facade_listener() {
    ensure_wired();
    let console = Console::new().unwrap();
    drop(console);

    let console = Console::new().expect("listener slot freed by drop");
    log::info!("fresh console");
    assert_eq!(console.buffer().len(), 1);
}

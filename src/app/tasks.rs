//! Background tokio tasks
//!
//! Two tasks run beside the event loop: the one-shot console template
//! load and the synthetic traffic generator feeding the log facade.

use std::path::PathBuf;
use std::time::Duration;

use rand::{rngs::StdRng, Rng, SeedableRng};
use tokio::sync::{mpsc, watch};
use tokio::task::JoinHandle;

use super::message::Message;
use crate::prelude::*;
use crate::template::PanelTemplate;

/// Spawn the one-shot template load task.
///
/// Sends a single `TemplateReady` message on success and exits. There is
/// no retry: on failure the overlay simply stays hidden and the error
/// only reaches the diagnostic log.
pub fn spawn_template_load(msg_tx: mpsc::Sender<Message>, path: Option<PathBuf>) {
    tokio::spawn(async move {
        match PanelTemplate::resolve(path.as_deref()) {
            Ok(template) => {
                let _ = msg_tx.send(Message::TemplateReady(template)).await;
            }
            Err(e) => {
                warn!("Console template unavailable, overlay stays hidden: {}", e);
            }
        }
    });
}

/// Spawn the demo traffic generator.
///
/// Emits one record per interval through the log facade while not paused.
/// The returned handle is aborted on shutdown.
pub fn spawn_traffic(pause_rx: watch::Receiver<bool>, interval_ms: u64) -> JoinHandle<()> {
    tokio::spawn(async move {
        let mut rng = StdRng::from_entropy();
        // tokio::time::interval panics on a zero period
        let period = Duration::from_millis(interval_ms.max(50));
        let mut interval = tokio::time::interval(period);
        let mut seq: u64 = 0;

        loop {
            interval.tick().await;
            if *pause_rx.borrow() {
                continue;
            }
            seq += 1;
            emit_traffic(&mut rng, seq);
        }
    })
}

/// Emit one synthetic record, weighted towards the quieter kinds
fn emit_traffic(rng: &mut StdRng, seq: u64) {
    match rng.gen_range(0..10) {
        0 => log::error!(
            "worker {} lost connection: reset by peer",
            rng.gen_range(1..8)
        ),
        1 | 2 => log::warn!("queue depth {} above threshold", rng.gen_range(50..400)),
        3..=5 => log::info!("request #{} served in {}ms", seq, rng.gen_range(1..120)),
        6 | 7 => log::debug!("cache refresh took {:.1}ms", rng.gen_range(0.2..8.0)),
        _ => log::trace!("tick {} idle", seq),
    }
}

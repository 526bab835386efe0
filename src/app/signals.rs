//! Delivers OS shutdown signals into the message loop.

use tokio::sync::mpsc;

use super::message::Message;
use crate::prelude::*;

/// Forward the first SIGINT/SIGTERM (Ctrl+C on Windows) as [`Message::Quit`].
///
/// Quitting through the message loop lets the runner restore the terminal
/// before the process exits.
pub fn spawn_signal_handler(tx: mpsc::Sender<Message>) {
    tokio::spawn(async move {
        match shutdown_signal().await {
            Ok(name) => {
                info!("{} received, shutting down", name);
                let _ = tx.send(Message::Quit).await;
            }
            Err(e) => warn!("Shutdown signals unavailable: {}", e),
        }
    });
}

/// Resolves with the name of the first shutdown signal delivered.
#[cfg(unix)]
async fn shutdown_signal() -> std::io::Result<&'static str> {
    use tokio::signal::unix::{signal, SignalKind};

    let mut interrupt = signal(SignalKind::interrupt())?;
    let mut terminate = signal(SignalKind::terminate())?;

    tokio::select! {
        _ = interrupt.recv() => Ok("SIGINT"),
        _ = terminate.recv() => Ok("SIGTERM"),
    }
}

#[cfg(windows)]
async fn shutdown_signal() -> std::io::Result<&'static str> {
    tokio::signal::ctrl_c().await.map(|_| "Ctrl+C")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_no_quit_before_any_signal() {
        let (tx, mut rx) = mpsc::channel::<Message>(1);
        spawn_signal_handler(tx);

        tokio::time::sleep(std::time::Duration::from_millis(10)).await;
        assert!(rx.try_recv().is_err());
    }
}

//! Quit on SIGINT/SIGTERM, or Ctrl+C on Windows

use cinemax_core::prelude::*;
use tokio::sync::mpsc;

use crate::message::Message;

/// Send `Message::Quit` on `tx` once the process is asked to stop.
///
/// The task owns its sender until then, so the engine's channel stays open
/// for as long as the handler is waiting.
pub fn spawn_signal_handler(tx: mpsc::Sender<Message>) {
    tokio::spawn(async move {
        match shutdown_signal().await {
            Ok(name) => {
                info!("{} received, quitting", name);
                if tx.send(Message::Quit).await.is_err() {
                    debug!("Engine stopped before the quit message was delivered");
                }
            }
            Err(e) => warn!("Signal handling unavailable: {}", e),
        }
    });
}

/// Resolves with the name of the first stop signal delivered
#[cfg(unix)]
async fn shutdown_signal() -> Result<&'static str> {
    use tokio::signal::unix::{signal, SignalKind};

    let listen = |kind: SignalKind| {
        signal(kind).map_err(|e| Error::terminal(format!("Cannot listen for {:?}: {}", kind, e)))
    };
    let mut interrupt = listen(SignalKind::interrupt())?;
    let mut terminate = listen(SignalKind::terminate())?;

    let name = tokio::select! {
        _ = interrupt.recv() => "SIGINT",
        _ = terminate.recv() => "SIGTERM",
    };
    Ok(name)
}

#[cfg(not(unix))]
async fn shutdown_signal() -> Result<&'static str> {
    tokio::signal::ctrl_c()
        .await
        .map_err(|e| Error::terminal(format!("Cannot listen for Ctrl+C: {}", e)))?;
    Ok("Ctrl+C")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;
    use tokio::sync::mpsc::error::TryRecvError;

    #[tokio::test]
    async fn test_waiting_handler_keeps_channel_open() {
        let (tx, mut rx) = mpsc::channel::<Message>(1);

        spawn_signal_handler(tx);
        tokio::time::sleep(Duration::from_millis(10)).await;

        // Only the handler holds a sender; nothing sent, nothing closed
        assert_eq!(rx.try_recv().unwrap_err(), TryRecvError::Empty);
    }
}

//! Ctrl+C / SIGTERM become an ordinary `Message::Quit`

use tokio::sync::mpsc;

use stylist_core::prelude::*;

use crate::message::Message;

/// Which shutdown request arrived
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShutdownSignal {
    Interrupt,
    Terminate,
}

impl ShutdownSignal {
    pub fn name(&self) -> &'static str {
        match self {
            ShutdownSignal::Interrupt => "SIGINT",
            ShutdownSignal::Terminate => "SIGTERM",
        }
    }
}

/// Listen in the background and quit the engine on the first signal.
///
/// Raw mode swallows Ctrl+C as a key press, so this mostly matters for
/// SIGTERM and for the moments before the terminal is initialized.
pub fn spawn_signal_handler(tx: mpsc::Sender<Message>) {
    tokio::spawn(async move {
        match next_signal().await {
            Ok(signal) => {
                info!("{} received, shutting down", signal.name());
                let _ = tx.send(Message::Quit).await;
            }
            Err(e) => error!("Could not listen for shutdown signals: {}", e),
        }
    });
}

#[cfg(unix)]
async fn next_signal() -> Result<ShutdownSignal> {
    use tokio::signal::unix::{signal, SignalKind};

    let listen = |kind: SignalKind| {
        signal(kind).map_err(|e| Error::terminal(format!("signal handler: {}", e)))
    };
    let mut interrupt = listen(SignalKind::interrupt())?;
    let mut terminate = listen(SignalKind::terminate())?;

    Ok(tokio::select! {
        _ = interrupt.recv() => ShutdownSignal::Interrupt,
        _ = terminate.recv() => ShutdownSignal::Terminate,
    })
}

#[cfg(not(unix))]
async fn next_signal() -> Result<ShutdownSignal> {
    tokio::signal::ctrl_c()
        .await
        .map_err(|e| Error::terminal(format!("Ctrl+C handler: {}", e)))?;
    Ok(ShutdownSignal::Interrupt)
}

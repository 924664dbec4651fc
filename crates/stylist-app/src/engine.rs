//! Engine - the state, message channel and backend the frontend drives
//!
//! The terminal runner owns an [`Engine`]: it feeds key, mouse and tick
//! messages in, drains completions from background tasks, and renders
//! `engine.state` between batches.

use std::sync::Arc;

use tokio::sync::mpsc;
use tracing::info;

use stylist_backend::StyleBackend;

use crate::config::Settings;
use crate::message::Message;
use crate::process;
use crate::signals;
use crate::state::AppState;

/// Capacity of the message channel shared by all background tasks
pub const MESSAGE_CHANNEL_CAPACITY: usize = 256;

pub struct Engine<B> {
    /// TEA application state (the Model)
    pub state: AppState,
    msg_tx: mpsc::Sender<Message>,
    msg_rx: mpsc::Receiver<Message>,
    backend: Arc<B>,
}

impl<B> Engine<B>
where
    B: StyleBackend + Sync + 'static,
{
    pub fn new(settings: Settings, backend: B) -> Self {
        Self::with_backend(settings, Arc::new(backend))
    }

    /// Build an engine around a shared backend (tests keep a handle to it)
    pub fn with_backend(settings: Settings, backend: Arc<B>) -> Self {
        let (msg_tx, msg_rx) = mpsc::channel(MESSAGE_CHANNEL_CAPACITY);
        Self {
            state: AppState::with_settings(settings),
            msg_tx,
            msg_rx,
            backend,
        }
    }

    /// Install the signal handler and kick off the initial loads
    pub fn start(&mut self) {
        info!("AIstylist engine starting");
        signals::spawn_signal_handler(self.msg_tx.clone());
        self.process_message(Message::Startup);
    }

    /// Process a single message through the TEA update loop
    pub fn process_message(&mut self, msg: Message) {
        process::process_message(&mut self.state, msg, &self.msg_tx, &self.backend);
    }

    /// Drain and process all pending messages from the channel.
    ///
    /// Returns the number of messages processed.
    pub fn drain_pending_messages(&mut self) -> usize {
        let mut count = 0;
        while let Ok(msg) = self.msg_rx.try_recv() {
            self.process_message(msg);
            count += 1;
        }
        count
    }

    /// Wait for the next background completion and process it.
    ///
    /// Returns false if every sender is gone.
    pub async fn process_next(&mut self) -> bool {
        match self.msg_rx.recv().await {
            Some(msg) => {
                self.process_message(msg);
                true
            }
            None => false,
        }
    }

    pub fn msg_sender(&self) -> mpsc::Sender<Message> {
        self.msg_tx.clone()
    }

    pub fn backend(&self) -> &Arc<B> {
        &self.backend
    }

    pub fn should_quit(&self) -> bool {
        self.state.should_quit()
    }
}

//! Action handlers: UpdateAction dispatch and background task spawning
//!
//! Every action runs on its own tokio task and reports back with exactly one
//! completion [`Message`]. Tasks never touch [`crate::AppState`].

use std::sync::Arc;

use tokio::sync::mpsc;
use tracing::{debug, warn};

use stylist_backend::{encode_image_file, StyleBackend};

use crate::handler::UpdateAction;
use crate::message::Message;

/// Execute an action by spawning a background task
pub fn handle_action<B>(action: UpdateAction, msg_tx: mpsc::Sender<Message>, backend: Arc<B>)
where
    B: StyleBackend + Sync + 'static,
{
    debug!("Dispatching {:?}", action);

    match action {
        UpdateAction::Bootstrap { location } => {
            spawn_weather(location, msg_tx.clone(), backend.clone());
            spawn_subscription(msg_tx, backend);
        }

        UpdateAction::LoadOutfits { weather, occasion } => {
            tokio::spawn(async move {
                let msg = match backend.recommend_outfits(&weather, &occasion).await {
                    Ok(outfits) => Message::OutfitsLoaded { outfits },
                    Err(e) => {
                        warn!("Outfit recommendation failed: {}", e);
                        Message::OutfitsFailed {
                            error: e.user_message("Could not load outfits"),
                        }
                    }
                };
                let _ = msg_tx.send(msg).await;
            });
        }

        UpdateAction::GenerateOutfit { weather, occasion } => {
            tokio::spawn(async move {
                let msg = match backend.generate_outfit(&weather, &occasion).await {
                    Ok(result) => Message::OutfitGenerated { result },
                    Err(e) => {
                        warn!("Outfit generation failed: {}", e);
                        Message::GenerationFailed {
                            error: e.user_message("Generation failed"),
                        }
                    }
                };
                let _ = msg_tx.send(msg).await;
            });
        }

        UpdateAction::SendChat(request) => {
            tokio::spawn(async move {
                let msg = match backend.send_chat(request).await {
                    Ok(reply) => Message::ChatReplied { reply },
                    Err(e) => {
                        warn!("Chat request failed: {}", e);
                        Message::ChatFailed {
                            error: e.user_message("Message failed"),
                        }
                    }
                };
                let _ = msg_tx.send(msg).await;
            });
        }

        UpdateAction::EncodeImage { path } => {
            tokio::spawn(async move {
                let msg = match encode_image_file(&path).await {
                    Ok(data_url) => Message::ImageEncoded { path, data_url },
                    Err(e) => {
                        warn!("Could not read {}: {}", path.display(), e);
                        Message::ImageFailed {
                            error: e.user_message("Could not attach image"),
                        }
                    }
                };
                let _ = msg_tx.send(msg).await;
            });
        }

        UpdateAction::LoadCloset => {
            tokio::spawn(async move {
                let msg = match backend.list_closet().await {
                    Ok(items) => Message::ClosetLoaded { items },
                    Err(e) => Message::ClosetFailed {
                        error: e.user_message("Could not load closet"),
                    },
                };
                let _ = msg_tx.send(msg).await;
            });
        }

        UpdateAction::UploadItem { path } => {
            tokio::spawn(async move {
                let result = backend.upload_item(&path).await;
                let msg = match result {
                    Ok(()) => Message::UploadSucceeded { path },
                    Err(e) => Message::UploadFailed {
                        path,
                        error: e.user_message("Upload failed"),
                    },
                };
                let _ = msg_tx.send(msg).await;
            });
        }

        UpdateAction::DeleteItem { file } => {
            tokio::spawn(async move {
                let msg = match backend.delete_item(&file).await {
                    Ok(()) => Message::ItemDeleted { file },
                    Err(e) => {
                        warn!("Delete of {} failed: {}", file, e);
                        Message::DeleteFailed {
                            error: e.user_message("Failed to delete item"),
                        }
                    }
                };
                let _ = msg_tx.send(msg).await;
            });
        }

        UpdateAction::StartCheckout => {
            tokio::spawn(async move {
                let msg = match backend.checkout().await {
                    Ok(url) => Message::CheckoutReady { url },
                    Err(e) => Message::CheckoutFailed {
                        error: e.user_message("Checkout failed"),
                    },
                };
                let _ = msg_tx.send(msg).await;
            });
        }
    }
}

fn spawn_weather<B>(location: String, msg_tx: mpsc::Sender<Message>, backend: Arc<B>)
where
    B: StyleBackend + Sync + 'static,
{
    tokio::spawn(async move {
        let msg = match backend.fetch_weather(&location).await {
            Ok(weather) => Message::WeatherLoaded { weather },
            Err(e) => Message::WeatherFailed {
                error: e.user_message("Could not load weather"),
            },
        };
        let _ = msg_tx.send(msg).await;
    });
}

fn spawn_subscription<B>(msg_tx: mpsc::Sender<Message>, backend: Arc<B>)
where
    B: StyleBackend + Sync + 'static,
{
    tokio::spawn(async move {
        let msg = match backend.subscription_status().await {
            Ok(status) => Message::SubscriptionLoaded { status },
            Err(e) => Message::SubscriptionFailed {
                error: e.to_string(),
            },
        };
        let _ = msg_tx.send(msg).await;
    });
}

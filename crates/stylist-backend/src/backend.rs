//! The server boundary as a trait
//!
//! Everything the client asks of the AIstylist server goes through
//! [`StyleBackend`]. The terminal app talks to [`crate::HttpBackend`]; tests
//! substitute the in-memory `MockBackend` from `test_utils`.

use std::path::Path;

use stylist_core::prelude::*;
use stylist_core::{ClothingItem, GeneratedOutfit, Outfit, SubscriptionStatus, WeatherSnapshot};

/// One chat turn sent to the stylist
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ChatRequest {
    pub message: String,
    /// Staged image as a `data:` URL
    pub image_base64: Option<String>,
    pub weather: Option<String>,
    pub occasion: String,
}

/// Server operations used by the client
#[trait_variant::make(StyleBackend: Send)]
pub trait LocalStyleBackend {
    /// Current conditions for a location
    async fn fetch_weather(&self, location: &str) -> Result<WeatherSnapshot>;

    /// Trial/billing state of the signed-in user
    async fn subscription_status(&self) -> Result<SubscriptionStatus>;

    /// Recommended outfits for a weather condition and occasion
    async fn recommend_outfits(&self, weather: &str, occasion: &str) -> Result<Vec<Outfit>>;

    /// Send a chat turn and return the stylist's reply
    async fn send_chat(&self, request: ChatRequest) -> Result<String>;

    /// The full closet
    async fn list_closet(&self) -> Result<Vec<ClothingItem>>;

    /// Upload one photo for analysis
    async fn upload_item(&self, path: &Path) -> Result<()>;

    /// Delete an item by file name
    async fn delete_item(&self, file: &str) -> Result<()>;

    /// Generate a single look for the chosen weather and occasion
    async fn generate_outfit(&self, weather: &str, occasion: &str) -> Result<GeneratedOutfit>;

    /// Start a subscription checkout, returning the payment page URL
    async fn checkout(&self) -> Result<String>;
}

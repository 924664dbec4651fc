//! In-memory backend for tests
//!
//! [`MockBackend`] behaves like a small, well-mannered server: the closet is a
//! live list that uploads append to and deletes remove from. Any endpoint can
//! be scripted to fail, and every call is recorded for later assertions.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, MutexGuard};

use stylist_core::prelude::*;
use stylist_core::{
    Category, ClothingItem, GeneratedOutfit, Outfit, SubscriptionStatus, WeatherSnapshot,
};
use tokio::sync::Notify;

use crate::backend::{ChatRequest, StyleBackend};

/// Server operations, used to script failures and count calls
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endpoint {
    Weather,
    Subscription,
    Outfits,
    Chat,
    Closet,
    Upload,
    Delete,
    Generate,
    Checkout,
}

/// How a scripted endpoint fails
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MockFailure {
    /// `success: false` with this message
    Server(String),
    /// Connection or parse failure
    Transport(String),
}

impl MockFailure {
    fn to_error(&self) -> Error {
        match self {
            MockFailure::Server(message) => Error::server(message.clone()),
            MockFailure::Transport(message) => Error::transport(message.clone()),
        }
    }
}

/// One recorded request
#[derive(Debug, Clone, PartialEq)]
pub enum MockCall {
    Weather { location: String },
    Subscription,
    Outfits { weather: String, occasion: String },
    Chat(ChatRequest),
    Closet,
    Upload { path: PathBuf },
    Delete { file: String },
    Generate { weather: String, occasion: String },
    Checkout,
}

impl MockCall {
    pub fn endpoint(&self) -> Endpoint {
        match self {
            MockCall::Weather { .. } => Endpoint::Weather,
            MockCall::Subscription => Endpoint::Subscription,
            MockCall::Outfits { .. } => Endpoint::Outfits,
            MockCall::Chat(_) => Endpoint::Chat,
            MockCall::Closet => Endpoint::Closet,
            MockCall::Upload { .. } => Endpoint::Upload,
            MockCall::Delete { .. } => Endpoint::Delete,
            MockCall::Generate { .. } => Endpoint::Generate,
            MockCall::Checkout => Endpoint::Checkout,
        }
    }
}

#[derive(Debug)]
struct MockState {
    weather: WeatherSnapshot,
    subscription: SubscriptionStatus,
    outfits: Vec<Outfit>,
    closet: Vec<ClothingItem>,
    chat_reply: String,
    generated: GeneratedOutfit,
    checkout_url: String,
    failures: HashMap<Endpoint, MockFailure>,
    calls: Vec<MockCall>,
}

/// Scriptable in-memory [`StyleBackend`]
#[derive(Debug)]
pub struct MockBackend {
    state: Mutex<MockState>,
    outfits_held: AtomicBool,
    outfits_gate: Arc<Notify>,
}

impl Default for MockBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl MockBackend {
    pub fn new() -> Self {
        Self {
            state: Mutex::new(MockState {
                weather: test_weather(),
                subscription: SubscriptionStatus::Active,
                outfits: test_outfits(3),
                closet: test_closet(),
                chat_reply: "Gray pairs well with navy, blush, and white.".to_string(),
                generated: GeneratedOutfit {
                    image_url: Some("/output/generated_outfit.png".to_string()),
                    message: "Outfit generated successfully".to_string(),
                },
                checkout_url: "https://checkout.example.com/session/abc".to_string(),
                failures: HashMap::new(),
                calls: Vec::new(),
            }),
            outfits_held: AtomicBool::new(false),
            outfits_gate: Arc::new(Notify::new()),
        }
    }

    fn state(&self) -> MutexGuard<'_, MockState> {
        // A panicking test thread must not wedge the others
        self.state.lock().unwrap_or_else(|e| e.into_inner())
    }

    // ─────────────────────────────────────────────────────────
    // Scripting
    // ─────────────────────────────────────────────────────────

    pub fn with_closet(self, items: Vec<ClothingItem>) -> Self {
        self.state().closet = items;
        self
    }

    pub fn with_outfits(self, outfits: Vec<Outfit>) -> Self {
        self.set_outfits(outfits);
        self
    }

    pub fn with_subscription(self, status: SubscriptionStatus) -> Self {
        self.state().subscription = status;
        self
    }

    pub fn with_chat_reply(self, reply: impl Into<String>) -> Self {
        self.state().chat_reply = reply.into();
        self
    }

    pub fn with_weather(self, weather: WeatherSnapshot) -> Self {
        self.state().weather = weather;
        self
    }

    pub fn set_outfits(&self, outfits: Vec<Outfit>) {
        self.state().outfits = outfits;
    }

    /// Make every later call to `endpoint` fail
    pub fn fail(&self, endpoint: Endpoint, failure: MockFailure) {
        self.state().failures.insert(endpoint, failure);
    }

    pub fn succeed(&self, endpoint: Endpoint) {
        self.state().failures.remove(&endpoint);
    }

    /// Park outfit requests until [`MockBackend::release_outfits`]
    pub fn hold_outfits(&self) {
        self.outfits_held.store(true, Ordering::SeqCst);
    }

    /// Let one parked (or the next) outfit request through
    pub fn release_outfits(&self) {
        self.outfits_gate.notify_one();
    }

    // ─────────────────────────────────────────────────────────
    // Inspection
    // ─────────────────────────────────────────────────────────

    pub fn calls(&self) -> Vec<MockCall> {
        self.state().calls.clone()
    }

    pub fn call_count(&self, endpoint: Endpoint) -> usize {
        self.state()
            .calls
            .iter()
            .filter(|c| c.endpoint() == endpoint)
            .count()
    }

    pub fn closet(&self) -> Vec<ClothingItem> {
        self.state().closet.clone()
    }

    /// Record the call and return the scripted failure, if any
    fn record(&self, call: MockCall) -> Result<()> {
        let mut state = self.state();
        let endpoint = call.endpoint();
        state.calls.push(call);
        match state.failures.get(&endpoint) {
            Some(failure) => Err(failure.to_error()),
            None => Ok(()),
        }
    }
}

impl StyleBackend for MockBackend {
    async fn fetch_weather(&self, location: &str) -> Result<WeatherSnapshot> {
        self.record(MockCall::Weather {
            location: location.to_string(),
        })?;
        let mut weather = self.state().weather.clone();
        weather.location = location.to_string();
        Ok(weather)
    }

    async fn subscription_status(&self) -> Result<SubscriptionStatus> {
        self.record(MockCall::Subscription)?;
        Ok(self.state().subscription)
    }

    async fn recommend_outfits(&self, weather: &str, occasion: &str) -> Result<Vec<Outfit>> {
        let outcome = self.record(MockCall::Outfits {
            weather: weather.to_string(),
            occasion: occasion.to_string(),
        });
        if self.outfits_held.load(Ordering::SeqCst) {
            let gate = Arc::clone(&self.outfits_gate);
            gate.notified().await;
        }
        outcome?;
        Ok(self.state().outfits.clone())
    }

    async fn send_chat(&self, request: ChatRequest) -> Result<String> {
        self.record(MockCall::Chat(request))?;
        Ok(self.state().chat_reply.clone())
    }

    async fn list_closet(&self) -> Result<Vec<ClothingItem>> {
        self.record(MockCall::Closet)?;
        Ok(self.state().closet.clone())
    }

    async fn upload_item(&self, path: &Path) -> Result<()> {
        self.record(MockCall::Upload {
            path: path.to_path_buf(),
        })?;
        let stem = path
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or("upload");
        self.state().closet.push(ClothingItem::new(
            format!("{}.txt", stem),
            "Freshly analyzed item",
            Category::Other,
        ));
        Ok(())
    }

    async fn delete_item(&self, file: &str) -> Result<()> {
        self.record(MockCall::Delete {
            file: file.to_string(),
        })?;
        let mut state = self.state();
        let before = state.closet.len();
        state.closet.retain(|item| item.file != file);
        if state.closet.len() == before {
            return Err(Error::server("Item not found or already deleted"));
        }
        Ok(())
    }

    async fn generate_outfit(&self, weather: &str, occasion: &str) -> Result<GeneratedOutfit> {
        self.record(MockCall::Generate {
            weather: weather.to_string(),
            occasion: occasion.to_string(),
        })?;
        Ok(self.state().generated.clone())
    }

    async fn checkout(&self) -> Result<String> {
        self.record(MockCall::Checkout)?;
        Ok(self.state().checkout_url.clone())
    }
}

// ─────────────────────────────────────────────────────────────
// Fixtures
// ─────────────────────────────────────────────────────────────

/// Mild, rainy Vancouver
pub fn test_weather() -> WeatherSnapshot {
    WeatherSnapshot {
        condition: "Light rain".to_string(),
        temperature_celsius: 14.0,
        location: "Vancouver".to_string(),
    }
}

/// `count` outfits named `Outfit 1..=count`
pub fn test_outfits(count: usize) -> Vec<Outfit> {
    (1..=count)
        .map(|i| {
            let mut outfit = Outfit::new(i.to_string(), format!("Outfit {}", i));
            outfit.occasion = "casual".to_string();
            outfit.description = format!("Look number {}", i);
            outfit
        })
        .collect()
}

/// A small closet spanning several categories
pub fn test_closet() -> Vec<ClothingItem> {
    vec![
        ClothingItem::new(
            "beige-sweater.txt",
            "Beige cable-knit sweater, relaxed fit",
            Category::Tops,
        ),
        ClothingItem::new("white-blouse.txt", "White silk blouse", Category::Tops),
        ClothingItem::new("dark-jeans.txt", "Dark wash straight jeans", Category::Bottoms),
        ClothingItem::new("trench-coat.txt", "Camel trench coat", Category::Outerwear),
        ClothingItem::new("ankle-boots.txt", "Black leather ankle boots", Category::Shoes),
    ]
}

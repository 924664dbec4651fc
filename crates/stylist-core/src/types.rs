//! Core domain type definitions

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

use chrono::{DateTime, Local};
use serde::{Deserialize, Deserializer, Serialize};

// ─────────────────────────────────────────────────────────────────
// Closet
// ─────────────────────────────────────────────────────────────────

/// Garment category assigned by the server when a photo is analyzed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Tops,
    Bottoms,
    Dresses,
    Outerwear,
    Shoes,
    Accessories,
    /// Any category string the client does not know about
    #[serde(other)]
    Other,
}

impl Category {
    /// The known categories, in display order
    pub const ALL: [Category; 6] = [
        Category::Tops,
        Category::Bottoms,
        Category::Dresses,
        Category::Outerwear,
        Category::Shoes,
        Category::Accessories,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Category::Tops => "Tops",
            Category::Bottoms => "Bottoms",
            Category::Dresses => "Dresses",
            Category::Outerwear => "Outerwear",
            Category::Shoes => "Shoes",
            Category::Accessories => "Accessories",
            Category::Other => "Other",
        }
    }

    /// Exact-name lookup. No partial or case-insensitive matching.
    pub fn from_name(name: &str) -> Option<Category> {
        Self::ALL.into_iter().find(|c| c.label() == name)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Category selector for the closet view
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(Category),
    /// A name that matches no known category; selects nothing
    Unknown(String),
}

impl CategoryFilter {
    /// Chips shown in the closet view, `All` first
    pub fn choices() -> Vec<CategoryFilter> {
        std::iter::once(CategoryFilter::All)
            .chain(Category::ALL.into_iter().map(CategoryFilter::Only))
            .collect()
    }

    /// Parse a category name. `"All"` is the identity filter.
    pub fn parse(name: &str) -> CategoryFilter {
        if name == "All" {
            return CategoryFilter::All;
        }
        match Category::from_name(name) {
            Some(category) => CategoryFilter::Only(category),
            None => CategoryFilter::Unknown(name.to_string()),
        }
    }

    pub fn matches(&self, item: &ClothingItem) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(category) => item.category == *category,
            CategoryFilter::Unknown(_) => false,
        }
    }

    pub fn label(&self) -> &str {
        match self {
            CategoryFilter::All => "All",
            CategoryFilter::Only(category) => category.label(),
            CategoryFilter::Unknown(name) => name,
        }
    }
}

/// Maximum characters of a description shown in list previews
pub const DESCRIPTION_PREVIEW_LEN: usize = 100;

/// One analyzed garment in the user's closet
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClothingItem {
    /// Unique id, the stored file name
    #[serde(alias = "filename")]
    pub file: String,

    #[serde(default, alias = "desc", deserialize_with = "null_as_empty")]
    pub description: String,

    #[serde(default = "default_category", deserialize_with = "null_as_other")]
    pub category: Category,

    #[serde(
        default,
        rename = "imageUrl",
        alias = "image_url",
        alias = "image",
        skip_serializing_if = "Option::is_none"
    )]
    pub image_url: Option<String>,
}

fn default_category() -> Category {
    Category::Other
}

/// The analysis may leave the category out as `null`
fn null_as_other<'de, D>(deserializer: D) -> Result<Category, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Category>::deserialize(deserializer)?.unwrap_or(Category::Other))
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

impl ClothingItem {
    pub fn new(file: impl Into<String>, description: impl Into<String>, category: Category) -> Self {
        Self {
            file: file.into(),
            description: description.into(),
            category,
            image_url: None,
        }
    }

    /// File name without the analysis `.txt` suffix
    pub fn display_name(&self) -> &str {
        self.file.strip_suffix(".txt").unwrap_or(&self.file)
    }

    /// Description cut to [`DESCRIPTION_PREVIEW_LEN`] characters
    pub fn preview(&self) -> String {
        if self.description.chars().count() > DESCRIPTION_PREVIEW_LEN {
            let cut: String = self
                .description
                .chars()
                .take(DESCRIPTION_PREVIEW_LEN)
                .collect();
            format!("{}...", cut)
        } else {
            self.description.clone()
        }
    }

    /// Case-insensitive substring match on name and description
    pub fn matches_query(&self, query: &str) -> bool {
        let query = query.trim().to_lowercase();
        if query.is_empty() {
            return true;
        }
        self.file.to_lowercase().contains(&query)
            || self.description.to_lowercase().contains(&query)
    }
}

// ─────────────────────────────────────────────────────────────────
// Outfits
// ─────────────────────────────────────────────────────────────────

/// A recommended outfit. Immutable once received.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Outfit {
    #[serde(deserialize_with = "id_as_string")]
    pub id: String,

    #[serde(default)]
    pub name: String,

    #[serde(
        default,
        rename = "imageUrl",
        alias = "image_url",
        alias = "image",
        skip_serializing_if = "Option::is_none"
    )]
    pub image_url: Option<String>,

    #[serde(default)]
    pub occasion: String,

    #[serde(default)]
    pub description: String,

    #[serde(default, rename = "weatherCondition", alias = "weather")]
    pub weather_condition: String,

    #[serde(
        default,
        deserialize_with = "lenient_number",
        skip_serializing_if = "Option::is_none"
    )]
    pub temperature: Option<f64>,
}

impl Outfit {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            image_url: None,
            occasion: String::new(),
            description: String::new(),
            weather_condition: String::new(),
            temperature: None,
        }
    }
}

/// Accept `"3"` and `3` alike
fn id_as_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match serde_json::Value::deserialize(deserializer)? {
        serde_json::Value::String(s) => Ok(s),
        serde_json::Value::Number(n) => Ok(n.to_string()),
        other => Err(serde::de::Error::custom(format!(
            "expected string or number id, got {}",
            other
        ))),
    }
}

/// Numbers, numeric strings, or anything else as `None`
fn lenient_number<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match serde_json::Value::deserialize(deserializer)? {
        serde_json::Value::Number(n) => n.as_f64(),
        serde_json::Value::String(s) => s.trim().parse().ok(),
        _ => None,
    })
}

/// Result of the weather/occasion outfit generation flow
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct GeneratedOutfit {
    pub image_url: Option<String>,
    pub message: String,
}

// ─────────────────────────────────────────────────────────────────
// Chat
// ─────────────────────────────────────────────────────────────────

static LAST_MESSAGE_ID: AtomicU64 = AtomicU64::new(0);

/// Millisecond timestamp id, bumped when two messages share a millisecond
fn next_message_id(now: DateTime<Local>) -> u64 {
    let candidate = now.timestamp_millis().max(0) as u64;
    let mut last = LAST_MESSAGE_ID.load(Ordering::Relaxed);
    loop {
        let id = candidate.max(last + 1);
        match LAST_MESSAGE_ID.compare_exchange_weak(last, id, Ordering::Relaxed, Ordering::Relaxed)
        {
            Ok(_) => return id,
            Err(actual) => last = actual,
        }
    }
}

/// One entry of the chat transcript
#[derive(Debug, Clone, PartialEq)]
pub struct ChatMessage {
    pub id: u64,
    pub text: String,
    pub is_from_user: bool,
    /// Attached image, a `data:` URL for locally staged images
    pub image_url: Option<String>,
    pub timestamp: DateTime<Local>,
}

impl ChatMessage {
    pub fn from_user(text: impl Into<String>, image_url: Option<String>) -> Self {
        Self::new(text.into(), true, image_url)
    }

    pub fn from_assistant(text: impl Into<String>) -> Self {
        Self::new(text.into(), false, None)
    }

    fn new(text: String, is_from_user: bool, image_url: Option<String>) -> Self {
        let timestamp = Local::now();
        Self {
            id: next_message_id(timestamp),
            text,
            is_from_user,
            image_url,
            timestamp,
        }
    }
}

// ─────────────────────────────────────────────────────────────────
// Session
// ─────────────────────────────────────────────────────────────────

/// Whether the account may use outfit loading and chat
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubscriptionStatus {
    #[default]
    Active,
    TrialExpired,
}

impl SubscriptionStatus {
    pub fn can_use_features(&self) -> bool {
        matches!(self, SubscriptionStatus::Active)
    }
}

/// The signed-in user, as far as the client needs to know
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct UserSession {
    pub name: String,
    pub picture_url: Option<String>,
    /// `None` until the billing collaborator has answered
    pub subscription: Option<SubscriptionStatus>,
}

impl UserSession {
    pub fn new(name: impl Into<String>, picture_url: Option<String>) -> Self {
        Self {
            name: name.into(),
            picture_url,
            subscription: None,
        }
    }

    /// First word of the name, or `"there"`
    pub fn first_name(&self) -> &str {
        self.name.split_whitespace().next().unwrap_or("there")
    }

    pub fn greeting(&self) -> String {
        format!("Good morning, {}!", self.first_name())
    }

    /// Unknown status does not block anything
    pub fn can_use_features(&self) -> bool {
        self.subscription
            .map(|s| s.can_use_features())
            .unwrap_or(true)
    }

    pub fn is_trial_expired(&self) -> bool {
        self.subscription == Some(SubscriptionStatus::TrialExpired)
    }
}

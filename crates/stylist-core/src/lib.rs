//! # stylist-core - Core Domain Types
//!
//! Foundation crate for AIstylist. Provides the domain model shared by the
//! backend client, the application state machine, and the terminal UI.
//!
//! This crate has **zero internal dependencies** -- it only depends on external
//! crates (serde, chrono, thiserror, tracing).
//!
//! ## Public API
//!
//! ### Domain Types (`types`)
//! - [`ClothingItem`] - One analyzed garment, keyed by its file name
//! - [`Category`], [`CategoryFilter`] - Garment categories and the closet filter
//! - [`Outfit`], [`GeneratedOutfit`] - Recommendations and generated looks
//! - [`ChatMessage`] - Append-only transcript entry with a monotonic id
//! - [`UserSession`], [`SubscriptionStatus`] - Who is signed in and the trial gate
//!
//! ### Weather (`weather`)
//! - [`WeatherSnapshot`] - Condition and temperature fetched at startup
//! - [`WeatherGlyph`] - Icon class derived from the condition text
//!
//! ### Error Handling (`error`)
//! - [`Error`] - Custom error enum with `fatal` vs `recoverable` classification
//! - [`Result`] - Type alias for `std::result::Result<T, Error>`
//! - [`ResultExt`] - Extension trait for adding error context
//!
//! ## Prelude
//!
//! Import commonly used types with:
//! ```rust
//! use stylist_core::prelude::*;
//! ```

pub mod error;
pub mod logging;
pub mod prelude;
pub mod types;
pub mod weather;

// Re-export commonly used types at crate root for convenience
pub use error::{Error, Result, ResultExt};
pub use types::{
    Category, CategoryFilter, ChatMessage, ClothingItem, GeneratedOutfit, Outfit,
    SubscriptionStatus, UserSession, DESCRIPTION_PREVIEW_LEN,
};
pub use weather::{
    WeatherGlyph, WeatherSnapshot, FALLBACK_CONDITION, FALLBACK_TEMPERATURE,
    UNKNOWN_WEATHER_QUERY,
};

//! Message types for the application (TEA pattern)
//!
//! Every user intent and every network completion is a [`Message`]. Network
//! tasks never touch [`crate::AppState`]; they send one of the `*Loaded`,
//! `*Failed` or similar messages back to the event loop, which applies it.

use std::path::PathBuf;

use stylist_core::{
    ClothingItem, GeneratedOutfit, Outfit, SubscriptionStatus, WeatherSnapshot,
};

use crate::input_key::InputKey;
use crate::modal::ModalId;
use crate::tabs::Tab;

/// All possible messages/actions in the application
#[derive(Debug, Clone)]
pub enum Message {
    /// Keyboard event from terminal
    Key(InputKey),

    /// Horizontal drag over the outfit image, in pixels (positive = right)
    Swipe { dx: i32 },

    /// Tick event for periodic updates (toast expiry)
    Tick,

    /// Quit immediately (q, Ctrl+C, signal handler)
    Quit,

    /// Kick off the startup loads
    Startup,

    // ─────────────────────────────────────────────────────────
    // Navigation
    // ─────────────────────────────────────────────────────────
    SelectTab(Tab),
    NextTab,
    PrevTab,

    // ─────────────────────────────────────────────────────────
    // Session & weather
    // ─────────────────────────────────────────────────────────
    WeatherLoaded { weather: WeatherSnapshot },
    WeatherFailed { error: String },
    SubscriptionLoaded { status: SubscriptionStatus },
    SubscriptionFailed { error: String },

    // ─────────────────────────────────────────────────────────
    // Home: outfit carousel
    // ─────────────────────────────────────────────────────────
    CarouselNext,
    CarouselPrev,
    RegenerateOutfits,
    OutfitsLoaded { outfits: Vec<Outfit> },
    OutfitsFailed { error: String },

    // ─────────────────────────────────────────────────────────
    // Outfit generation form
    // ─────────────────────────────────────────────────────────
    OpenOutfitForm,
    FormToggleField,
    FormCycleOption { forward: bool },
    SubmitOutfitForm,
    OutfitGenerated { result: GeneratedOutfit },
    GenerationFailed { error: String },

    // ─────────────────────────────────────────────────────────
    // Chat
    // ─────────────────────────────────────────────────────────
    FocusComposer,
    BlurComposer,
    ComposerInput { text: String },
    SendChat,
    ChatReplied { reply: String },
    ChatFailed { error: String },
    CycleSuggestion,
    AttachImage,
    ImageEncoded { path: PathBuf, data_url: String },
    ImageFailed { error: String },
    ClearStagedImage,

    // ─────────────────────────────────────────────────────────
    // Closet
    // ─────────────────────────────────────────────────────────
    LoadCloset,
    ClosetLoaded { items: Vec<ClothingItem> },
    ClosetFailed { error: String },
    CycleCategory { forward: bool },
    SelectNextItem,
    SelectPrevItem,
    StartSearch,
    SearchInput { text: String },
    EndSearch,
    RequestDelete,
    ConfirmDelete,
    CancelDelete,
    ItemDeleted { file: String },
    DeleteFailed { error: String },

    // ─────────────────────────────────────────────────────────
    // Upload
    // ─────────────────────────────────────────────────────────
    OpenUpload,
    SubmitUpload,
    /// `path` is the file the finished upload was started with
    UploadSucceeded { path: PathBuf },
    UploadFailed { path: PathBuf, error: String },

    // ─────────────────────────────────────────────────────────
    // File picker
    // ─────────────────────────────────────────────────────────
    PickerInput { text: String },
    PickerSubmit,
    PickerCancel,

    // ─────────────────────────────────────────────────────────
    // Dialogs
    // ─────────────────────────────────────────────────────────
    CloseModal(ModalId),
    DismissAlert,

    // ─────────────────────────────────────────────────────────
    // Trial gate
    // ─────────────────────────────────────────────────────────
    RequestCheckout,
    CheckoutReady { url: String },
    CheckoutFailed { error: String },
}

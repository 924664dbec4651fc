//! Application state (Model in TEA pattern)

use stylist_core::{UserSession, WeatherSnapshot, UNKNOWN_WEATHER_QUERY};

use crate::carousel::OutfitCarousel;
use crate::chat::ChatSession;
use crate::closet::ClosetStore;
use crate::config::Settings;
use crate::modal::{ModalController, ModalId};
use crate::tabs::TabNavigation;
use crate::toast::ToastQueue;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AppPhase {
    #[default]
    Running,
    Quitting,
}

/// Which layer of the screen receives keys
///
/// Derived from state on demand rather than stored, so it can never
/// disagree with the dialogs that are actually open.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiMode {
    /// Tab content
    Normal,
    /// Typing into the chat composer
    ComposerInput,
    /// Typing into the closet search box
    SearchInput,
    /// The trial has ended; only the subscribe screen is shown
    TrialExpired,
    /// A modal dialog is on top
    Modal(ModalId),
    /// The path prompt is on top
    FilePicker,
    /// Yes/no before deleting a closet item
    ConfirmDelete,
    /// A blocking alert is on top
    Alert,
}

/// Text inputs that can hold focus
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputFocus {
    #[default]
    None,
    Composer,
    Search,
}

/// A blocking message the user must acknowledge
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Alert {
    pub title: String,
    pub message: String,
}

impl Alert {
    pub fn new(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::new("Error", message)
    }
}

/// Which startup loads have settled, successfully or not
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StartupProgress {
    pub weather_settled: bool,
    pub subscription_settled: bool,
    pub outfits_requested: bool,
}

/// Complete application state (the Model in TEA)
#[derive(Debug)]
pub struct AppState {
    pub phase: AppPhase,
    pub settings: Settings,

    pub session: UserSession,
    pub weather: Option<WeatherSnapshot>,
    pub startup: StartupProgress,

    pub tabs: TabNavigation,
    pub carousel: OutfitCarousel,
    pub chat: ChatSession,
    pub closet: ClosetStore,
    pub modals: ModalController,
    pub toasts: ToastQueue,

    pub alert: Option<Alert>,
    pub focus: InputFocus,
    pub checkout_pending: bool,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl AppState {
    pub fn new() -> Self {
        Self::with_settings(Settings::default())
    }

    pub fn with_settings(settings: Settings) -> Self {
        let session = UserSession::new(
            settings.profile.name.clone(),
            settings.profile.picture_url.clone(),
        );
        let toasts = ToastQueue::new(settings.behavior.toast_duration());

        Self {
            phase: AppPhase::Running,
            settings,
            session,
            weather: None,
            startup: StartupProgress::default(),
            tabs: TabNavigation::new(),
            carousel: OutfitCarousel::new(),
            chat: ChatSession::new(),
            closet: ClosetStore::new(),
            modals: ModalController::new(),
            toasts,
            alert: None,
            focus: InputFocus::None,
            checkout_pending: false,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.phase == AppPhase::Quitting
    }

    pub fn ui_mode(&self) -> UiMode {
        if self.alert.is_some() {
            return UiMode::Alert;
        }
        if self.session.is_trial_expired() {
            return UiMode::TrialExpired;
        }
        if self.closet.pending_delete().is_some() {
            return UiMode::ConfirmDelete;
        }
        if self.modals.picker.is_some() {
            return UiMode::FilePicker;
        }
        if let Some(id) = self.modals.top() {
            return UiMode::Modal(id);
        }
        match self.focus {
            InputFocus::Composer => UiMode::ComposerInput,
            InputFocus::Search => UiMode::SearchInput,
            InputFocus::None => UiMode::Normal,
        }
    }

    /// Current condition, if the weather has loaded
    pub fn weather_condition(&self) -> Option<String> {
        self.weather.as_ref().map(|w| w.condition.clone())
    }

    /// Weather value for the outfit query, `moderate` when unknown
    pub fn weather_query(&self) -> String {
        self.weather_condition()
            .unwrap_or_else(|| UNKNOWN_WEATHER_QUERY.to_string())
    }

    pub fn occasion(&self) -> &str {
        &self.settings.behavior.default_occasion
    }

    pub fn guard_duplicates(&self) -> bool {
        self.settings.behavior.guard_duplicate_requests
    }

    pub fn show_alert(&mut self, alert: Alert) {
        self.alert = Some(alert);
    }

    /// Surface a failure of a background load or chat send
    ///
    /// Shown as an error toast when `notify_background_failures` is on,
    /// otherwise only logged.
    pub fn notify_background_failure(&mut self, error: &str) {
        if self.settings.behavior.notify_background_failures {
            self.toasts.error(error);
        } else {
            tracing::warn!("Background request failed: {}", error);
        }
    }
}

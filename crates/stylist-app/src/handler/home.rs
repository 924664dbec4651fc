//! Startup loads and the outfit carousel

use stylist_core::prelude::*;
use stylist_core::{Outfit, SubscriptionStatus, WeatherSnapshot};

use crate::message::Message;
use crate::state::{AppState, InputFocus};
use crate::tabs::Tab;

use super::{UpdateAction, UpdateResult};

pub fn handle_startup(state: &mut AppState) -> UpdateResult {
    info!(
        "Starting up: weather for {}, subscription status",
        state.settings.behavior.location
    );
    UpdateResult::action(UpdateAction::Bootstrap {
        location: state.settings.behavior.location.clone(),
    })
}

pub fn handle_weather_loaded(state: &mut AppState, weather: WeatherSnapshot) -> UpdateResult {
    debug!(
        "Weather: {} {}",
        weather.condition,
        weather.temperature_label()
    );
    state.weather = Some(weather);
    state.startup.weather_settled = true;
    maybe_load_outfits(state)
}

pub fn handle_weather_failed(state: &mut AppState, error: String) -> UpdateResult {
    warn!("Weather load failed: {}", error);
    state.notify_background_failure(&error);
    state.startup.weather_settled = true;
    maybe_load_outfits(state)
}

pub fn handle_subscription_loaded(
    state: &mut AppState,
    status: SubscriptionStatus,
) -> UpdateResult {
    info!("Subscription status: {:?}", status);
    state.session.subscription = Some(status);
    state.startup.subscription_settled = true;

    if status == SubscriptionStatus::TrialExpired {
        // The subscribe screen replaces everything else
        state.modals.cancel_picker();
        state.closet.cancel_delete();
        state.focus = InputFocus::None;
    }
    maybe_load_outfits(state)
}

/// An unknown status does not lock the user out
pub fn handle_subscription_failed(state: &mut AppState, error: String) -> UpdateResult {
    warn!("Subscription status unavailable: {}", error);
    state.startup.subscription_settled = true;
    maybe_load_outfits(state)
}

/// Request the first batch once weather and subscription have both settled
fn maybe_load_outfits(state: &mut AppState) -> UpdateResult {
    let startup = state.startup;
    if startup.weather_settled
        && startup.subscription_settled
        && !startup.outfits_requested
        && state.session.can_use_features()
    {
        UpdateResult::message(Message::RegenerateOutfits)
    } else {
        UpdateResult::none()
    }
}

pub fn handle_regenerate(state: &mut AppState) -> UpdateResult {
    if !state.session.can_use_features() {
        debug!("Outfit load blocked: trial expired");
        return UpdateResult::none();
    }
    if state.guard_duplicates() && state.carousel.is_pending() {
        debug!("Outfit load already in flight, ignoring");
        return UpdateResult::none();
    }

    state.startup.outfits_requested = true;
    state.carousel.begin_generate();
    UpdateResult::action(UpdateAction::LoadOutfits {
        weather: state.weather_query(),
        occasion: state.occasion().to_string(),
    })
}

pub fn handle_outfits_loaded(state: &mut AppState, outfits: Vec<Outfit>) -> UpdateResult {
    info!("Received {} outfits", outfits.len());
    state.carousel.replace(outfits);
    UpdateResult::none()
}

pub fn handle_outfits_failed(state: &mut AppState, error: String) -> UpdateResult {
    warn!("Outfit load failed: {}", error);
    state.carousel.generate_failed();
    state.toasts.error(error);
    UpdateResult::none()
}

/// Swipes only mean something on the home tab
pub fn handle_swipe(state: &mut AppState, dx: i32) -> UpdateResult {
    if state.tabs.active() == Tab::Home {
        let threshold = state.settings.ui.swipe_threshold;
        if let Some(direction) = state.carousel.swipe(dx, threshold) {
            trace!("Swipe {} -> {:?}", dx, direction);
        }
    }
    UpdateResult::none()
}

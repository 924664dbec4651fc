//! Main render/view function (View in TEA pattern)

use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::widgets::Block;
use ratatui::Frame;

use stylist_app::modal::ModalId;
use stylist_app::state::InputFocus;
use stylist_app::tabs::Tab;
use stylist_app::{AppState, UiMode};

use crate::theme::palette;
use crate::{layout, widgets};

/// Render the complete UI (View function in TEA)
///
/// Pure: reads `state` and draws, nothing else.
pub fn view(frame: &mut Frame, state: &AppState) {
    let area = frame.area();
    frame.render_widget(
        Block::default().style(Style::default().bg(palette::DEEPEST_BG)),
        area,
    );
    let areas = layout::create(area);
    let mode = state.ui_mode();

    frame.render_widget(
        widgets::MainHeader::new(&state.session, state.weather.as_ref()),
        areas.header,
    );

    if state.session.is_trial_expired() {
        frame.render_widget(
            widgets::TrialExpiredScreen::new(state.checkout_pending),
            areas.body,
        );
    } else {
        frame.render_widget(widgets::TabBar::new(state.tabs.active()), areas.tabs);
        render_body(frame, state, areas.body);
    }

    // Overlays, bottom to top in the same order ui_mode() checks them
    if let Some(id) = state.modals.top() {
        render_modal(frame, state, id, area);
    }
    if let Some(picker) = &state.modals.picker {
        frame.render_widget(widgets::FilePickerDialog::new(picker), area);
    }
    if let Some(file) = state.closet.pending_delete() {
        frame.render_widget(widgets::ConfirmDeleteDialog::new(file), area);
    }
    if let Some(alert) = &state.alert {
        frame.render_widget(widgets::AlertDialog::new(alert), area);
    }

    frame.render_widget(widgets::ToastStack::new(&state.toasts), areas.body);
    frame.render_widget(widgets::KeyHints::new(mode, state.tabs.active()), areas.hints);
}

fn render_body(frame: &mut Frame, state: &AppState, body: Rect) {
    match state.tabs.active() {
        Tab::Home => {
            let (card, controls) = layout::split_home(body);
            frame.render_widget(widgets::OutfitCard::new(&state.carousel), card);
            frame.render_widget(widgets::OutfitControls::new(&state.carousel), controls);
        }
        Tab::Chat => {
            let (transcript, composer) = layout::split_chat(body);
            frame.render_widget(widgets::ChatTranscript::new(&state.chat), transcript);
            frame.render_widget(
                widgets::Composer::new(&state.chat, state.focus == InputFocus::Composer),
                composer,
            );
        }
        Tab::Closet => {
            frame.render_widget(
                widgets::ClosetView::new(&state.closet, state.focus == InputFocus::Search),
                body,
            );
        }
    }
}

fn render_modal(frame: &mut Frame, state: &AppState, id: ModalId, area: Rect) {
    match id {
        ModalId::Upload => {
            frame.render_widget(widgets::UploadDialog::new(&state.modals.upload), area);
        }
        ModalId::OutfitForm => {
            frame.render_widget(
                widgets::OutfitFormDialog::new(&state.modals.outfit_form),
                area,
            );
        }
        ModalId::OutfitResult => {
            if let Some(result) = &state.modals.result {
                frame.render_widget(widgets::OutfitResultDialog::new(result), area);
            }
        }
    }
}

/// Screen region where mouse drags count as carousel swipes
///
/// Only the outfit card on the Home tab, and only while nothing covers it.
pub fn swipe_region(area: Rect, state: &AppState) -> Option<Rect> {
    if state.ui_mode() != UiMode::Normal || state.tabs.active() != Tab::Home {
        return None;
    }
    let areas = layout::create(area);
    let (card, _) = layout::split_home(areas.body);
    Some(card)
}

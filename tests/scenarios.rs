//! End-to-end flows through the engine against the in-memory backend
//!
//! Each test drives [`Engine`] with the same messages the terminal would
//! send and waits for the background completions to land.

use std::sync::Arc;
use std::time::Duration;

use stylist_app::closet::filter_items;
use stylist_app::config::Settings;
use stylist_app::tabs::Tab;
use stylist_app::{handle_action, Engine, Message, UiMode, UpdateAction};
use stylist_backend::test_utils::{test_closet, test_outfits, Endpoint, MockBackend, MockFailure};
use stylist_core::CategoryFilter;

type TestEngine = Engine<MockBackend>;

fn engine_with(backend: MockBackend) -> (TestEngine, Arc<MockBackend>) {
    let backend = Arc::new(backend);
    let engine = Engine::with_backend(Settings::default(), backend.clone());
    (engine, backend)
}

/// Process background completions until `done` holds
async fn run_until(engine: &mut TestEngine, done: impl Fn(&TestEngine) -> bool) {
    let wait = async {
        while !done(engine) {
            assert!(engine.process_next().await, "message channel closed");
        }
    };
    tokio::time::timeout(Duration::from_secs(5), wait)
        .await
        .expect("timed out waiting for the engine");
}

async fn open_closet(engine: &mut TestEngine) {
    engine.process_message(Message::SelectTab(Tab::Closet));
    run_until(engine, |e| !e.state.closet.is_loading()).await;
}

// ─────────────────────────────────────────────────────────
// Startup
// ─────────────────────────────────────────────────────────

#[tokio::test]
async fn test_startup_shows_weather_and_first_outfit() {
    let (mut engine, backend) = engine_with(MockBackend::new());

    engine.process_message(Message::Startup);
    run_until(&mut engine, |e| e.state.carousel.len() == 3).await;

    assert_eq!(engine.state.weather_condition().as_deref(), Some("Light rain"));
    assert_eq!(engine.state.carousel.index(), 0);
    assert_eq!(backend.call_count(Endpoint::Outfits), 1);
    assert!(backend.calls().iter().any(|c| matches!(
        c,
        stylist_backend::test_utils::MockCall::Outfits { weather, occasion }
            if weather == "Light rain" && occasion == "casual"
    )));
}

#[tokio::test]
async fn test_weather_failure_still_loads_outfits() {
    let backend = MockBackend::new();
    backend.fail(
        Endpoint::Weather,
        MockFailure::Transport("Could not connect to server".to_string()),
    );
    let (mut engine, backend) = engine_with(backend);

    engine.process_message(Message::Startup);
    run_until(&mut engine, |e| e.state.carousel.len() == 3).await;

    assert!(engine.state.weather.is_none());
    assert!(backend.calls().iter().any(|c| matches!(
        c,
        stylist_backend::test_utils::MockCall::Outfits { weather, .. } if weather == "moderate"
    )));
}

#[tokio::test]
async fn test_expired_trial_blocks_outfits() {
    let (mut engine, backend) = engine_with(
        MockBackend::new().with_subscription(stylist_core::SubscriptionStatus::TrialExpired),
    );

    engine.process_message(Message::Startup);
    run_until(&mut engine, |e| {
        e.state.startup.weather_settled && e.state.startup.subscription_settled
    })
    .await;

    assert_eq!(engine.state.ui_mode(), UiMode::TrialExpired);
    assert_eq!(backend.call_count(Endpoint::Outfits), 0);
}

// ─────────────────────────────────────────────────────────
// Chat
// ─────────────────────────────────────────────────────────

#[tokio::test]
async fn test_chat_round_trip_adds_two_messages() {
    let (mut engine, backend) =
        engine_with(MockBackend::new().with_chat_reply("Try a navy cardigan."));

    engine.process_message(Message::ComposerInput {
        text: "What goes with gray trousers?".to_string(),
    });
    engine.process_message(Message::SendChat);
    assert_eq!(engine.state.chat.len(), 1);

    run_until(&mut engine, |e| !e.state.chat.is_waiting()).await;

    assert_eq!(engine.state.chat.len(), 2);
    let reply = &engine.state.chat.messages()[1];
    assert!(!reply.is_from_user);
    assert_eq!(reply.text, "Try a navy cardigan.");
    assert_eq!(backend.call_count(Endpoint::Chat), 1);
}

#[tokio::test]
async fn test_blank_chat_send_is_a_no_op() {
    let (mut engine, backend) = engine_with(MockBackend::new());

    engine.process_message(Message::ComposerInput {
        text: "   ".to_string(),
    });
    engine.process_message(Message::SendChat);

    assert!(engine.state.chat.is_empty());
    assert_eq!(engine.drain_pending_messages(), 0);
    assert_eq!(backend.call_count(Endpoint::Chat), 0);
}

// ─────────────────────────────────────────────────────────
// Closet
// ─────────────────────────────────────────────────────────

#[tokio::test]
async fn test_rejected_upload_leaves_closet_unchanged() {
    let backend = MockBackend::new();
    backend.fail(
        Endpoint::Upload,
        MockFailure::Server("unsupported format".to_string()),
    );
    let (mut engine, backend) = engine_with(backend);
    open_closet(&mut engine).await;
    let before = engine.state.closet.items().to_vec();

    engine.process_message(Message::OpenUpload);
    engine.process_message(Message::PickerInput {
        text: "/photos/scarf.heic".to_string(),
    });
    engine.process_message(Message::PickerSubmit);
    engine.process_message(Message::SubmitUpload);
    assert!(engine.state.modals.upload.in_progress);

    run_until(&mut engine, |e| !e.state.modals.upload.in_progress).await;

    assert_eq!(engine.state.closet.items(), before.as_slice());
    assert_eq!(backend.closet().len(), before.len());
    let alert = engine.state.alert.as_ref().expect("upload failure alert");
    assert_eq!(alert.message, "Error: unsupported format");
}

#[tokio::test]
async fn test_successful_upload_reloads_closet() {
    let (mut engine, backend) = engine_with(MockBackend::new());
    open_closet(&mut engine).await;

    engine.process_message(Message::OpenUpload);
    engine.process_message(Message::PickerInput {
        text: "/photos/scarf.jpg".to_string(),
    });
    engine.process_message(Message::PickerSubmit);
    engine.process_message(Message::SubmitUpload);

    run_until(&mut engine, |e| e.state.closet.items().len() == 6).await;

    assert!(engine.state.closet.contains("scarf.txt"));
    assert!(engine.state.modals.top().is_none());
    assert_eq!(backend.call_count(Endpoint::Closet), 2);
}

#[tokio::test]
async fn test_delete_then_delete_again() {
    let (mut engine, backend) = engine_with(MockBackend::new());
    open_closet(&mut engine).await;
    assert_eq!(
        engine.state.closet.selected().map(|i| i.file.as_str()),
        Some("beige-sweater.txt")
    );

    engine.process_message(Message::RequestDelete);
    engine.process_message(Message::ConfirmDelete);
    run_until(&mut engine, |e| !e.state.closet.contains("beige-sweater.txt")).await;

    assert_eq!(
        engine.state.toasts.latest().map(|t| t.text.as_str()),
        Some("Item deleted successfully")
    );
    assert_eq!(backend.call_count(Endpoint::Delete), 1);

    // Gone from the cache, so asking again is a client-side no-op
    assert!(!engine.state.closet.request_delete("beige-sweater.txt"));
    assert!(engine.state.closet.pending_delete().is_none());

    // A stale delete reaching the server comes back as a clean failure
    handle_action(
        UpdateAction::DeleteItem {
            file: "beige-sweater.txt".to_string(),
        },
        engine.msg_sender(),
        engine.backend().clone(),
    );
    run_until(&mut engine, |e| {
        e.state
            .toasts
            .latest()
            .is_some_and(|t| t.text.contains("Item not found"))
    })
    .await;

    assert_eq!(engine.state.closet.items().len(), 4);
    assert!(!engine.should_quit());
}

#[tokio::test]
async fn test_visiting_closet_twice_loads_twice() {
    let (mut engine, backend) = engine_with(MockBackend::new());

    open_closet(&mut engine).await;
    open_closet(&mut engine).await;

    assert_eq!(backend.call_count(Endpoint::Closet), 2);
}

#[tokio::test]
async fn test_category_filter_leaves_cache_intact() {
    let (mut engine, _backend) = engine_with(MockBackend::new().with_closet(test_closet()));
    open_closet(&mut engine).await;

    engine.process_message(Message::CycleCategory { forward: true });

    assert_eq!(engine.state.closet.filter().label(), "Tops");
    assert_eq!(engine.state.closet.visible().len(), 2);
    assert_eq!(engine.state.closet.items().len(), 5);

    let tops = filter_items(engine.state.closet.items(), engine.state.closet.filter());
    assert_eq!(filter_items(&tops, engine.state.closet.filter()), tops);
    assert_eq!(
        filter_items(engine.state.closet.items(), &CategoryFilter::All).len(),
        5
    );
}

// ─────────────────────────────────────────────────────────
// Outfit carousel
// ─────────────────────────────────────────────────────────

#[tokio::test]
async fn test_late_outfits_reset_navigation() {
    let (mut engine, backend) = engine_with(MockBackend::new());
    engine.process_message(Message::Startup);
    run_until(&mut engine, |e| e.state.carousel.len() == 3).await;

    backend.hold_outfits();
    backend.set_outfits(test_outfits(4));
    engine.process_message(Message::RegenerateOutfits);
    assert!(engine.state.carousel.is_pending());

    engine.process_message(Message::CarouselNext);
    engine.process_message(Message::CarouselNext);
    assert_eq!(engine.state.carousel.index(), 2);

    backend.release_outfits();
    run_until(&mut engine, |e| !e.state.carousel.is_pending()).await;

    assert_eq!(engine.state.carousel.len(), 4);
    assert_eq!(engine.state.carousel.index(), 0);
    assert_eq!(backend.call_count(Endpoint::Outfits), 2);
}

//! Chat transcript, composer and staged image

use std::path::PathBuf;

use stylist_backend::ChatRequest;
use stylist_core::ChatMessage;

/// Prompts offered before the user has typed anything
pub const SUGGESTED_QUESTIONS: [&str; 3] = [
    "What colors match with gray?",
    "How to style a white blouse?",
    "Casual outfit ideas",
];

/// An image waiting to go out with the next message
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StagedImage {
    pub path: PathBuf,
    pub data_url: String,
}

impl StagedImage {
    pub fn file_name(&self) -> String {
        self.path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.path.display().to_string())
    }
}

/// The conversation with the stylist
///
/// Messages are only ever appended. A reply is appended when its own request
/// resolves, so replies to overlapping sends may arrive in either order.
#[derive(Debug, Clone, Default)]
pub struct ChatSession {
    messages: Vec<ChatMessage>,
    pub composer: String,
    pub staged_image: Option<StagedImage>,
    in_flight: usize,
    next_suggestion: usize,
}

impl ChatSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// Number of sends still waiting for a reply
    pub fn in_flight(&self) -> usize {
        self.in_flight
    }

    pub fn is_waiting(&self) -> bool {
        self.in_flight > 0
    }

    /// Append the user's message and build its request
    ///
    /// Returns `None`, leaving everything untouched, when there is neither
    /// text nor an image. Otherwise the composer and the staged image are
    /// cleared.
    pub fn send(&mut self, weather: Option<String>, occasion: &str) -> Option<ChatRequest> {
        let text = self.composer.trim().to_string();
        if text.is_empty() && self.staged_image.is_none() {
            return None;
        }

        let image = self.staged_image.take().map(|img| img.data_url);
        self.messages
            .push(ChatMessage::from_user(text.clone(), image.clone()));
        self.composer.clear();
        self.in_flight += 1;

        Some(ChatRequest {
            message: text,
            image_base64: image,
            weather,
            occasion: occasion.to_string(),
        })
    }

    /// Append the stylist's reply to one of the pending sends
    pub fn receive_reply(&mut self, reply: impl Into<String>) {
        self.in_flight = self.in_flight.saturating_sub(1);
        self.messages.push(ChatMessage::from_assistant(reply));
    }

    /// A send failed. The user's message stays; nothing is appended.
    pub fn send_failed(&mut self) {
        self.in_flight = self.in_flight.saturating_sub(1);
    }

    pub fn stage_image(&mut self, image: StagedImage) {
        self.staged_image = Some(image);
    }

    pub fn clear_staged_image(&mut self) {
        self.staged_image = None;
    }

    /// Put the next suggested question in the composer, without sending it
    pub fn cycle_suggestion(&mut self) -> &'static str {
        let question = SUGGESTED_QUESTIONS[self.next_suggestion % SUGGESTED_QUESTIONS.len()];
        self.next_suggestion = self.next_suggestion.wrapping_add(1);
        self.composer = question.to_string();
        question
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn staged() -> StagedImage {
        StagedImage {
            path: PathBuf::from("/tmp/look.png"),
            data_url: "data:image/png;base64,AAAA".to_string(),
        }
    }

    #[test]
    fn test_empty_send_is_noop() {
        let mut chat = ChatSession::new();
        chat.composer = "   \n ".to_string();
        assert!(chat.send(None, "casual").is_none());
        assert_eq!(chat.len(), 0);
        assert_eq!(chat.composer, "   \n ");
        assert_eq!(chat.in_flight(), 0);
    }

    #[test]
    fn test_send_appends_user_message_and_clears_composer() {
        let mut chat = ChatSession::new();
        chat.composer = "  What goes with gray? ".to_string();

        let request = chat.send(Some("Rain".into()), "casual").unwrap();

        assert_eq!(request.message, "What goes with gray?");
        assert_eq!(request.weather.as_deref(), Some("Rain"));
        assert_eq!(request.occasion, "casual");
        assert_eq!(chat.len(), 1);
        assert!(chat.messages()[0].is_from_user);
        assert!(chat.composer.is_empty());
        assert!(chat.is_waiting());
    }

    #[test]
    fn test_image_only_send_is_allowed() {
        let mut chat = ChatSession::new();
        chat.stage_image(staged());

        let request = chat.send(None, "casual").unwrap();

        assert_eq!(request.message, "");
        assert_eq!(
            request.image_base64.as_deref(),
            Some("data:image/png;base64,AAAA")
        );
        assert_eq!(
            chat.messages()[0].image_url.as_deref(),
            Some("data:image/png;base64,AAAA")
        );
        assert!(chat.staged_image.is_none());
    }

    #[test]
    fn test_reply_follows_user_message() {
        let mut chat = ChatSession::new();
        chat.composer = "hi".to_string();
        chat.send(None, "casual");
        chat.receive_reply("Hello! How can I help?");

        assert_eq!(chat.len(), 2);
        assert!(chat.messages()[0].is_from_user);
        assert!(!chat.messages()[1].is_from_user);
        assert!(chat.messages()[0].id < chat.messages()[1].id);
        assert!(!chat.is_waiting());
    }

    #[test]
    fn test_failed_send_keeps_transcript() {
        let mut chat = ChatSession::new();
        chat.composer = "hi".to_string();
        chat.send(None, "casual");
        chat.send_failed();

        assert_eq!(chat.len(), 1);
        assert!(!chat.is_waiting());
    }

    #[test]
    fn test_suggestions_cycle_without_sending() {
        let mut chat = ChatSession::new();
        assert_eq!(chat.cycle_suggestion(), SUGGESTED_QUESTIONS[0]);
        assert_eq!(chat.cycle_suggestion(), SUGGESTED_QUESTIONS[1]);
        assert_eq!(chat.cycle_suggestion(), SUGGESTED_QUESTIONS[2]);
        assert_eq!(chat.cycle_suggestion(), SUGGESTED_QUESTIONS[0]);
        assert_eq!(chat.composer, SUGGESTED_QUESTIONS[0]);
        assert!(chat.is_empty());
    }

    #[test]
    fn test_staged_image_file_name() {
        assert_eq!(staged().file_name(), "look.png");
    }
}

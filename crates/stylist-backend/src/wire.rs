//! JSON shapes exchanged with the server
//!
//! Every response carries a `success` discriminator. `success: false` comes
//! with an `error` string meant for display. Some endpoints omit `success`
//! on error paths and only send `error` with a non-2xx status, so both fields
//! are optional here and [`Envelope::into_result`] decides.

use serde::{Deserialize, Serialize};
use stylist_core::prelude::*;
use stylist_core::{ClothingItem, Outfit, SubscriptionStatus};

use crate::ChatRequest;

/// Common response envelope with an endpoint-specific body
#[derive(Debug, Deserialize)]
pub struct Envelope<T> {
    #[serde(default)]
    pub success: Option<bool>,
    #[serde(default)]
    pub error: Option<String>,
    #[serde(flatten)]
    pub body: T,
}

impl<T> Envelope<T> {
    /// Resolve the envelope into its body or a [`Error::Server`]
    ///
    /// An explicit `error` always wins. A missing `success` flag on a body
    /// without an error counts as success.
    pub fn into_result(self) -> Result<T> {
        if let Some(message) = self.error.filter(|e| !e.is_empty()) {
            return Err(Error::server(message));
        }
        match self.success {
            Some(false) => Err(Error::server("Request failed")),
            _ => Ok(self.body),
        }
    }
}

/// Body of endpoints that return nothing but the envelope
#[derive(Debug, Default, Deserialize)]
pub struct Empty {
    #[serde(default)]
    pub message: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct OutfitsBody {
    #[serde(default)]
    pub outfits: Vec<Outfit>,
}

#[derive(Debug, Deserialize)]
pub struct ClosetBody {
    #[serde(default)]
    pub items: Vec<ClothingItem>,
}

#[derive(Debug, Deserialize)]
pub struct ChatBody {
    #[serde(default)]
    pub reply: String,
}

#[derive(Debug, Deserialize)]
pub struct GenerateBody {
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub message: String,
}

#[derive(Debug, Deserialize)]
pub struct CheckoutBody {
    #[serde(default)]
    pub url: Option<String>,
}

/// `GET /api/subscription/status`
#[derive(Debug, Deserialize)]
pub struct SubscriptionBody {
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub is_trial: bool,
    #[serde(default = "default_true")]
    pub can_use_features: bool,
}

fn default_true() -> bool {
    true
}

impl SubscriptionBody {
    pub fn status(&self) -> SubscriptionStatus {
        if self.can_use_features {
            SubscriptionStatus::Active
        } else {
            SubscriptionStatus::TrialExpired
        }
    }
}

/// `POST /api/chat`
#[derive(Debug, Serialize)]
pub struct ChatPayload<'a> {
    pub message: &'a str,
    #[serde(rename = "imageBase64", skip_serializing_if = "Option::is_none")]
    pub image_base64: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weather: Option<&'a str>,
    pub occasion: &'a str,
}

impl<'a> From<&'a ChatRequest> for ChatPayload<'a> {
    fn from(request: &'a ChatRequest) -> Self {
        Self {
            message: &request.message,
            image_base64: request.image_base64.as_deref(),
            weather: request.weather.as_deref(),
            occasion: &request.occasion,
        }
    }
}

/// `POST /api/delete-clothing`
///
/// The id is sent under both `file` and `filename`; server builds disagree
/// on the key.
#[derive(Debug, Serialize)]
pub struct DeletePayload<'a> {
    pub file: &'a str,
    pub filename: &'a str,
}

impl<'a> DeletePayload<'a> {
    pub fn new(file: &'a str) -> Self {
        Self {
            file,
            filename: file,
        }
    }
}

/// `POST /generate-outfit`
#[derive(Debug, Serialize)]
pub struct GeneratePayload<'a> {
    pub weather: &'a str,
    pub occasion: &'a str,
}

/// Pull a displayable message out of an error body, if there is one
pub fn error_message(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    value
        .get("error")
        .and_then(|e| e.as_str())
        .filter(|e| !e.is_empty())
        .map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_envelope_success() {
        let env: Envelope<ClosetBody> = serde_json::from_str(
            r#"{"success":true,"items":[{"file":"a.txt","description":"red top","category":"Tops"}]}"#,
        )
        .unwrap();
        let body = env.into_result().unwrap();
        assert_eq!(body.items.len(), 1);
    }

    #[test]
    fn test_envelope_server_error_carries_message() {
        let env: Envelope<Empty> =
            serde_json::from_str(r#"{"success":false,"error":"unsupported format"}"#).unwrap();
        let err = env.into_result().unwrap_err();
        assert!(matches!(err, Error::Server { ref message } if message == "unsupported format"));
    }

    #[test]
    fn test_envelope_failure_without_message() {
        let env: Envelope<Empty> = serde_json::from_str(r#"{"success":false}"#).unwrap();
        assert!(matches!(env.into_result(), Err(Error::Server { .. })));
    }

    #[test]
    fn test_envelope_error_without_success_flag() {
        let env: Envelope<Empty> =
            serde_json::from_str(r#"{"error":"User not authenticated"}"#).unwrap();
        assert!(env.into_result().is_err());
    }

    #[test]
    fn test_subscription_body_maps_status() {
        let active: SubscriptionBody =
            serde_json::from_str(r#"{"status":"trial","is_trial":true,"can_use_features":true}"#)
                .unwrap();
        assert_eq!(active.status(), SubscriptionStatus::Active);

        let expired: SubscriptionBody =
            serde_json::from_str(r#"{"status":"expired","can_use_features":false}"#).unwrap();
        assert_eq!(expired.status(), SubscriptionStatus::TrialExpired);
    }

    #[test]
    fn test_chat_payload_field_names() {
        let request = ChatRequest {
            message: "What goes with gray?".into(),
            image_base64: Some("data:image/png;base64,AAAA".into()),
            weather: Some("Rain".into()),
            occasion: "casual".into(),
        };
        let json = serde_json::to_value(ChatPayload::from(&request)).unwrap();
        assert_eq!(json["message"], "What goes with gray?");
        assert_eq!(json["imageBase64"], "data:image/png;base64,AAAA");
        assert_eq!(json["weather"], "Rain");
        assert_eq!(json["occasion"], "casual");
    }

    #[test]
    fn test_chat_payload_omits_absent_image() {
        let request = ChatRequest {
            message: "hi".into(),
            occasion: "casual".into(),
            ..Default::default()
        };
        let json = serde_json::to_value(ChatPayload::from(&request)).unwrap();
        assert!(json.get("imageBase64").is_none());
        assert!(json.get("weather").is_none());
    }

    #[test]
    fn test_error_message_extraction() {
        assert_eq!(
            error_message(r#"{"error":"Failed to create checkout session"}"#).as_deref(),
            Some("Failed to create checkout session")
        );
        assert_eq!(error_message("<html>502</html>"), None);
        assert_eq!(error_message(r#"{"error":""}"#), None);
    }
}

//! [`StyleBackend`] over HTTP with reqwest

use std::path::Path;
use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderValue, COOKIE};
use reqwest::multipart::{Form, Part};
use reqwest::{Client, RequestBuilder};
use serde::de::DeserializeOwned;
use stylist_core::prelude::*;
use stylist_core::{ClothingItem, GeneratedOutfit, Outfit, SubscriptionStatus, WeatherSnapshot};
use url::Url;

use crate::backend::{ChatRequest, StyleBackend};
use crate::image::mime_for_path;
use crate::wire::{
    self, ChatBody, ChatPayload, CheckoutBody, ClosetBody, DeletePayload, Empty, Envelope,
    GenerateBody, GeneratePayload, OutfitsBody, SubscriptionBody,
};

/// Default server address
pub const DEFAULT_BASE_URL: &str = "http://localhost:5000";

/// Default per-request timeout. Outfit generation can be slow.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(60);

/// Connection settings for [`HttpBackend`]
#[derive(Debug, Clone)]
pub struct HttpBackendConfig {
    pub base_url: String,
    /// Value of the server's `session` cookie
    pub session_cookie: Option<String>,
    pub timeout: Duration,
}

impl Default for HttpBackendConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            session_cookie: None,
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

/// Talks to the AIstylist server
#[derive(Debug, Clone)]
pub struct HttpBackend {
    client: Client,
    base_url: Url,
}

impl HttpBackend {
    pub fn new(config: HttpBackendConfig) -> Result<Self> {
        let base_url = parse_base_url(&config.base_url)?;

        let mut headers = HeaderMap::new();
        if let Some(cookie) = config.session_cookie.as_deref().filter(|c| !c.is_empty()) {
            let value = HeaderValue::from_str(&format!("session={}", cookie))
                .map_err(|e| Error::config(format!("invalid session cookie: {}", e)))?;
            headers.insert(COOKIE, value);
        }

        let client = Client::builder()
            .timeout(config.timeout)
            .default_headers(headers)
            .build()
            .map_err(|e| Error::config(format!("failed to build HTTP client: {}", e)))?;

        info!("Using AIstylist server at {}", base_url);
        Ok(Self { client, base_url })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> Result<Url> {
        self.base_url
            .join(path)
            .map_err(|e| Error::config(format!("bad endpoint {}: {}", path, e)))
    }

    /// Send a request whose response is wrapped in the `success` envelope
    async fn call<T: DeserializeOwned>(&self, request: RequestBuilder) -> Result<T> {
        let envelope: Envelope<T> = self.call_raw(request).await?;
        envelope.into_result()
    }

    /// Send a request and parse the body as-is
    async fn call_raw<T: DeserializeOwned>(&self, request: RequestBuilder) -> Result<T> {
        let response = request.send().await.map_err(transport_error)?;
        let status = response.status();
        let url = response.url().path().to_string();
        let body = response.text().await.map_err(transport_error)?;

        if !status.is_success() {
            warn!("{} returned {}", url, status);
            return Err(match wire::error_message(&body) {
                Some(message) => Error::server(message),
                None => Error::transport(format!("Server returned {}", status)),
            });
        }

        serde_json::from_str(&body).map_err(|e| {
            warn!("Unparsable response from {}: {}", url, e);
            Error::transport(format!("Invalid response from server: {}", e))
        })
    }
}

fn parse_base_url(raw: &str) -> Result<Url> {
    let mut url =
        Url::parse(raw).map_err(|e| Error::config(format!("invalid server URL {}: {}", raw, e)))?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(Error::config(format!(
            "server URL must be http or https, got {}",
            raw
        )));
    }
    // Relative joins replace the last segment unless the path ends in '/'
    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }
    Ok(url)
}

fn transport_error(err: reqwest::Error) -> Error {
    if err.is_timeout() {
        Error::transport("Request timed out")
    } else if err.is_connect() {
        Error::transport("Could not connect to server")
    } else {
        Error::transport(err.to_string())
    }
}

impl StyleBackend for HttpBackend {
    async fn fetch_weather(&self, location: &str) -> Result<WeatherSnapshot> {
        let url = self.endpoint("api/weather")?;
        let request = self.client.get(url).query(&[("location", location)]);
        self.call_raw(request).await
    }

    async fn subscription_status(&self) -> Result<SubscriptionStatus> {
        let url = self.endpoint("api/subscription/status")?;
        let body: SubscriptionBody = self.call_raw(self.client.get(url)).await?;
        debug!(
            "Subscription status {:?} (trial: {})",
            body.status, body.is_trial
        );
        Ok(body.status())
    }

    async fn recommend_outfits(&self, weather: &str, occasion: &str) -> Result<Vec<Outfit>> {
        let url = self.endpoint("api/outfits")?;
        let request = self
            .client
            .get(url)
            .query(&[("weather", weather), ("occasion", occasion)]);
        let body: OutfitsBody = self.call(request).await?;
        Ok(body.outfits)
    }

    async fn send_chat(&self, request: ChatRequest) -> Result<String> {
        let url = self.endpoint("api/chat")?;
        let payload = ChatPayload::from(&request);
        let body: ChatBody = self.call(self.client.post(url).json(&payload)).await?;
        Ok(body.reply)
    }

    async fn list_closet(&self) -> Result<Vec<ClothingItem>> {
        let url = self.endpoint("closet")?;
        let body: ClosetBody = self.call(self.client.get(url)).await?;
        Ok(body.items)
    }

    async fn upload_item(&self, path: &Path) -> Result<()> {
        let url = self.endpoint("upload")?;
        let bytes = tokio::fs::read(path).await?;
        let file_name = path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("upload")
            .to_string();

        let mut part = Part::bytes(bytes).file_name(file_name);
        if let Some(mime) = mime_for_path(path) {
            part = part
                .mime_str(mime)
                .map_err(|e| Error::validation(format!("bad content type: {}", e)))?;
        }
        let form = Form::new().part("file", part);

        let _: Empty = self.call(self.client.post(url).multipart(form)).await?;
        Ok(())
    }

    async fn delete_item(&self, file: &str) -> Result<()> {
        let url = self.endpoint("api/delete-clothing")?;
        let payload = DeletePayload::new(file);
        let _: Empty = self.call(self.client.post(url).json(&payload)).await?;
        Ok(())
    }

    async fn generate_outfit(&self, weather: &str, occasion: &str) -> Result<GeneratedOutfit> {
        let url = self.endpoint("generate-outfit")?;
        let payload = GeneratePayload { weather, occasion };
        let body: GenerateBody = self.call(self.client.post(url).json(&payload)).await?;
        Ok(GeneratedOutfit {
            image_url: body.image_url,
            message: body.message,
        })
    }

    async fn checkout(&self) -> Result<String> {
        let url = self.endpoint("api/payment/checkout")?;
        let body: CheckoutBody = self.call(self.client.post(url)).await?;
        body.url
            .ok_or_else(|| Error::server("Failed to create checkout session"))
    }
}

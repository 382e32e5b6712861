use std::fmt;
use std::io::Read;
use std::time::{Duration, Instant};

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, info, warn};

use crate::config::RemovalConfig;
use crate::consts::REMOVAL_API_KEY_HEADER;
use crate::error::{Result, TailorError};
use crate::face::Face;
use crate::import::decode_image;
use crate::overlay::{OverlayId, OverlayImage};

/// Output size/quality tier requested from the service.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum RemovalTier {
    #[default]
    #[serde(rename = "preview")]
    Preview,
    #[serde(rename = "auto")]
    Auto,
    #[serde(rename = "full")]
    Full,
    #[serde(rename = "50MP")]
    FiftyMegapixel,
}

impl RemovalTier {
    pub const ALL: &[Self] = &[Self::Preview, Self::Auto, Self::Full, Self::FiftyMegapixel];

    /// Value of the `size` form field.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Preview => "preview",
            Self::Auto => "auto",
            Self::Full => "full",
            Self::FiftyMegapixel => "50MP",
        }
    }
}

impl fmt::Display for RemovalTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Preview => write!(f, "Preview"),
            Self::Auto => write!(f, "Auto"),
            Self::Full => write!(f, "Full"),
            Self::FiftyMegapixel => write!(f, "50 MP"),
        }
    }
}

/// Anything that can strip the background from a base64-encoded image and
/// return the encoded result.
pub trait BackgroundRemover: Send + Sync {
    fn remove_background(&self, image_b64: &str, tier: RemovalTier) -> Result<Vec<u8>>;
}

/// HTTP client for a remove.bg-compatible endpoint.
pub struct RemoveBgClient {
    agent: ureq::Agent,
    endpoint: String,
    api_key: String,
}

impl RemoveBgClient {
    /// `timeout` of `None` waits indefinitely.
    pub fn new(
        endpoint: impl Into<String>,
        api_key: impl Into<String>,
        timeout: Option<Duration>,
    ) -> Self {
        let mut builder = ureq::AgentBuilder::new();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let agent = builder.build();
        Self {
            agent,
            endpoint: endpoint.into(),
            api_key: api_key.into(),
        }
    }

    /// Build a client from config. Fails when no API key is configured.
    pub fn from_config(config: &RemovalConfig) -> Result<Self> {
        let key = config.api_key().ok_or(TailorError::MissingApiKey)?;
        Ok(Self::new(config.endpoint.clone(), key, config.timeout()))
    }
}

impl BackgroundRemover for RemoveBgClient {
    fn remove_background(&self, image_b64: &str, tier: RemovalTier) -> Result<Vec<u8>> {
        debug!(endpoint = %self.endpoint, %tier, "Requesting background removal");

        let response = self
            .agent
            .post(&self.endpoint)
            .set(REMOVAL_API_KEY_HEADER, &self.api_key)
            .send_form(&[("image_file_b64", image_b64), ("size", tier.as_str())]);

        match response {
            Ok(resp) => {
                let mut body = Vec::new();
                resp.into_reader().read_to_end(&mut body)?;
                if body.is_empty() {
                    return Err(TailorError::EmptyResponse);
                }
                Ok(body)
            }
            Err(ureq::Error::Status(status, resp)) => Err(TailorError::HttpStatus {
                status,
                body: resp.into_string().unwrap_or_default(),
            }),
            Err(ureq::Error::Transport(t)) => Err(TailorError::Transport(t.to_string())),
        }
    }
}

/// A background-removal request bound to the overlay and face it was issued for.
#[derive(Clone, Debug)]
pub struct RemovalRequest {
    pub overlay: OverlayId,
    pub face: Face,
    pub image: OverlayImage,
    pub tier: RemovalTier,
}

/// Result of running a [`RemovalRequest`].
#[derive(Debug)]
pub struct RemovalOutcome {
    pub overlay: OverlayId,
    pub face: Face,
    pub result: Result<OverlayImage>,
}

/// Send the request's original image to `remover` and decode the response.
///
/// Every failure (transport, status, empty or undecodable body) is captured
/// in the outcome rather than returned.
pub fn perform_removal(remover: &dyn BackgroundRemover, request: &RemovalRequest) -> RemovalOutcome {
    let start = Instant::now();
    let encoded = BASE64.encode(request.image.encoded.as_slice());

    let result = remover
        .remove_background(&encoded, request.tier)
        .and_then(|bytes| {
            if bytes.is_empty() {
                return Err(TailorError::EmptyResponse);
            }
            decode_image(bytes)
        });

    match &result {
        Ok(img) => {
            let (w, h) = img.dimensions();
            info!(
                overlay = %request.overlay,
                elapsed_ms = start.elapsed().as_millis() as u64,
                "Background removed ({w}x{h})"
            );
        }
        Err(e) => warn!(overlay = %request.overlay, "Background removal failed: {e}"),
    }

    RemovalOutcome {
        overlay: request.overlay,
        face: request.face,
        result,
    }
}

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("Background removal for overlay {pending} is still in flight")]
pub struct GateBusy {
    pub pending: OverlayId,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum GateState {
    #[default]
    Idle,
    Pending { overlay: OverlayId, face: Face },
}

/// Single-slot admission for background-removal requests.
///
/// At most one request is outstanding. A second request is rejected
/// immediately; it is neither queued nor allowed to cancel the first.
#[derive(Debug, Default)]
pub struct RemovalGate {
    state: GateState,
}

impl RemovalGate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> GateState {
        self.state
    }

    pub fn is_pending(&self) -> bool {
        matches!(self.state, GateState::Pending { .. })
    }

    pub fn try_begin(&mut self, overlay: OverlayId, face: Face) -> std::result::Result<(), GateBusy> {
        if let GateState::Pending { overlay: pending, .. } = self.state {
            return Err(GateBusy { pending });
        }
        self.state = GateState::Pending { overlay, face };
        Ok(())
    }

    /// Return to idle. Returns `false` if the gate was not pending for `overlay`,
    /// in which case the state is left as is.
    pub fn finish(&mut self, overlay: OverlayId) -> bool {
        match self.state {
            GateState::Pending { overlay: pending, .. } if pending == overlay => {
                self.state = GateState::Idle;
                true
            }
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tier_wire_names() {
        let names: Vec<&str> = RemovalTier::ALL.iter().map(|t| t.as_str()).collect();
        assert_eq!(names, ["preview", "auto", "full", "50MP"]);
        assert_eq!(RemovalTier::default(), RemovalTier::Preview);
    }

    #[test]
    fn test_gate_rejects_second_request() {
        let mut gate = RemovalGate::new();
        assert!(gate.try_begin(OverlayId(1), Face::Front).is_ok());
        assert_eq!(
            gate.try_begin(OverlayId(2), Face::Back),
            Err(GateBusy { pending: OverlayId(1) })
        );
        assert!(!gate.finish(OverlayId(2)));
        assert!(gate.is_pending());
        assert!(gate.finish(OverlayId(1)));
        assert_eq!(gate.state(), GateState::Idle);
    }

    #[test]
    fn test_client_requires_api_key() {
        let mut config = RemovalConfig::default();
        assert!(matches!(
            RemoveBgClient::from_config(&config),
            Err(TailorError::MissingApiKey)
        ));

        config.api_key = Some("   ".into());
        assert!(matches!(
            RemoveBgClient::from_config(&config),
            Err(TailorError::MissingApiKey)
        ));
    }
}

//! Error types for the Mandrill client.

use serde::{Deserialize, Serialize};
use thiserror::Error;

type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Error type for all Mandrill client operations.
#[derive(Debug, Error)]
pub enum Error {
    /// The caller passed a payload that serializes to JSON `null`.
    /// Detected before any network activity.
    #[error("empty request payload")]
    EmptyRequest,
    /// The request payload could not be encoded to JSON.
    #[error("failed to encode request payload: {0}")]
    Serialize(#[source] serde_json::Error),
    /// Network, TLS, or response decompression failure.
    #[error("transport error: {0}")]
    Transport(#[source] BoxError),
    /// The API answered with a structured error document.
    #[error(transparent)]
    Api(#[from] ApiError),
    /// A success payload could not be decoded into the expected type.
    #[error("failed to decode response payload: {0}")]
    Deserialize(#[source] serde_json::Error),
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        Error::Transport(err.into())
    }
}

/// Structured error document returned by the Mandrill API.
///
/// The API signals errors as a JSON object with exactly these four fields,
/// on any HTTP status code. Deserialization is strict: a document with
/// missing, extra, or mistyped fields does not match and is treated as a
/// regular response payload instead.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Error)]
#[serde(deny_unknown_fields)]
#[error("api error {code} ({name}): {message}")]
pub struct ApiError {
    /// Error category reported by the API, normally `"error"`.
    pub status: String,
    /// Numeric error code.
    pub code: i64,
    /// Symbolic error identifier, e.g. `"Invalid_Key"`.
    pub name: String,
    /// Human-readable description.
    pub message: String,
}

impl ApiError {
    /// Classify this error by its symbolic [`name`](Self::name).
    pub fn kind(&self) -> ApiErrorKind {
        ApiErrorKind::classify(&self.name)
    }
}

/// Classification of the API's documented error conditions.
///
/// The vendor taxonomy is stable but can grow; names outside the documented
/// set map to [`ApiErrorKind::Unrecognized`] rather than failing, and the
/// carrying [`ApiError`] keeps the original fields for diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum ApiErrorKind {
    /// `Invalid_Key`
    InvalidKey,
    /// `ValidationError`
    Validation,
    /// `GeneralError`
    General,
    /// `PaymentRequired`
    PaymentRequired,
    /// `Unknown_Subaccount`
    UnknownSubaccount,
    /// `Invalid_Tag_Name`
    InvalidTagName,
    /// `ServiceUnavailable`
    ServiceUnavailable,
    /// `Unknown_Sender`
    UnknownSender,
    /// `Unknown_Url`
    UnknownUrl,
    /// `Unknown_TrackingDomain`
    UnknownTrackingDomain,
    /// `Unknown_Template`
    UnknownTemplate,
    /// `Unknown_Webhook`
    UnknownWebhook,
    /// `Unknown_InboundRoute`
    UnknownInboundRoute,
    /// `Unknown_Pool`
    UnknownPool,
    /// `Unknown_IP`
    UnknownIp,
    /// Any symbolic name outside the documented set.
    Unrecognized,
}

impl ApiErrorKind {
    /// Map a symbolic error name to its kind.
    ///
    /// Total over all inputs; names outside the documented set yield
    /// [`ApiErrorKind::Unrecognized`].
    pub fn classify(name: &str) -> Self {
        match name {
            "Invalid_Key" => Self::InvalidKey,
            "ValidationError" => Self::Validation,
            "GeneralError" => Self::General,
            "PaymentRequired" => Self::PaymentRequired,
            "Unknown_Subaccount" => Self::UnknownSubaccount,
            "Invalid_Tag_Name" => Self::InvalidTagName,
            "ServiceUnavailable" => Self::ServiceUnavailable,
            "Unknown_Sender" => Self::UnknownSender,
            "Unknown_Url" => Self::UnknownUrl,
            "Unknown_TrackingDomain" => Self::UnknownTrackingDomain,
            "Unknown_Template" => Self::UnknownTemplate,
            "Unknown_Webhook" => Self::UnknownWebhook,
            "Unknown_InboundRoute" => Self::UnknownInboundRoute,
            "Unknown_Pool" => Self::UnknownPool,
            "Unknown_IP" => Self::UnknownIp,
            _ => Self::Unrecognized,
        }
    }

    /// The vendor-documented description of this error condition.
    pub fn description(self) -> &'static str {
        match self {
            Self::InvalidKey => "The provided API key is not a valid Mandrill API key",
            Self::Validation => {
                "The parameters passed to the API call are invalid or not provided when required"
            }
            Self::General => {
                "An unexpected error occurred processing the request. Mandrill developers will be notified."
            }
            Self::PaymentRequired => "The requested feature requires payment",
            Self::UnknownSubaccount => "The provided subaccount id does not exist",
            Self::InvalidTagName => {
                "The requested tag does not exist or contains invalid characters"
            }
            Self::ServiceUnavailable => {
                "The subsystem providing this API call is down for maintenance"
            }
            Self::UnknownSender => "The requested sender does not exist",
            Self::UnknownUrl => "The requested URL has not been seen in a tracked link",
            Self::UnknownTrackingDomain => "The provided tracking domain does not exist",
            Self::UnknownTemplate => {
                "The given template name already exists or contains invalid characters"
            }
            Self::UnknownWebhook => "The requested webhook does not exist",
            Self::UnknownInboundRoute => "The provided inbound route does not exist",
            Self::UnknownPool => "The provided dedicated IP pool does not exist",
            Self::UnknownIp => "The provided dedicated IP does not exist",
            Self::Unrecognized => "An unrecognized error response was received from the API",
        }
    }
}

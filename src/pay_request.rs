//! LNURL-pay service responses, as returned by the well-known endpoint of a lightning address and
//! by its callback.

use serde::Deserialize;
use url::Url;

use crate::lnurl::{to_msat, LnurlError};

const PAY_REQUEST_TAG: &str = "payRequest";
const ERROR_STATUS: &str = "ERROR";

#[derive(thiserror::Error, Debug)]
pub enum PayRequestError {
    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error("No LNURL callback found")]
    NoCallback,

    #[error("Expected tag 'payRequest' found '{0}'")]
    UnexpectedTag(String),

    #[error("Invalid callback url: {0}")]
    InvalidCallback(#[from] url::ParseError),

    #[error("Amount of {amount_msat} msat outside the sendable range {min_sendable}..={max_sendable}")]
    AmountOutOfRange {
        amount_msat: u64,
        min_sendable: u64,
        max_sendable: u64,
    },

    #[error(transparent)]
    Lnurl(#[from] LnurlError),

    #[error("LNURL service error: {0}")]
    Service(String),

    #[error("No invoice received from server")]
    NoInvoice,
}

/// Response of the `/.well-known/lnurlp/<user>` endpoint
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PayRequest {
    pub callback: String,
    pub min_sendable: u64,
    pub max_sendable: u64,
    pub metadata: String,
    pub tag: String,
    pub comment_allowed: Option<u64>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawPayRequest {
    callback: Option<String>,
    #[serde(default)]
    min_sendable: u64,
    #[serde(default = "u64_max")]
    max_sendable: u64,
    #[serde(default)]
    metadata: String,
    tag: Option<String>,
    comment_allowed: Option<u64>,
}

fn u64_max() -> u64 {
    u64::MAX
}

impl PayRequest {
    pub fn from_json(json: &str) -> Result<Self, PayRequestError> {
        let raw: RawPayRequest = serde_json::from_str(json)?;
        let callback = raw
            .callback
            .filter(|c| !c.is_empty())
            .ok_or(PayRequestError::NoCallback)?;
        let tag = raw.tag.unwrap_or_else(|| PAY_REQUEST_TAG.to_string());
        if tag != PAY_REQUEST_TAG {
            return Err(PayRequestError::UnexpectedTag(tag));
        }
        Ok(PayRequest {
            callback,
            min_sendable: raw.min_sendable,
            max_sendable: raw.max_sendable,
            metadata: raw.metadata,
            tag,
            comment_allowed: raw.comment_allowed,
        })
    }

    /// The callback url to request an invoice of `amount_sats`.
    ///
    /// ```
    /// # use zapdesk::pay_request::PayRequest;
    /// let json = r#"{"callback":"https://example.com/pay/alice","minSendable":1000,"maxSendable":1000000000,"tag":"payRequest"}"#;
    /// let pay_request = PayRequest::from_json(json).unwrap();
    /// let url = pay_request.invoice_url(100).unwrap();
    /// assert_eq!(url.as_str(), "https://example.com/pay/alice?amount=100000");
    /// ```
    pub fn invoice_url(&self, amount_sats: u64) -> Result<Url, PayRequestError> {
        let amount_msat = to_msat(amount_sats)?;
        if amount_msat < self.min_sendable || amount_msat > self.max_sendable {
            return Err(PayRequestError::AmountOutOfRange {
                amount_msat,
                min_sendable: self.min_sendable,
                max_sendable: self.max_sendable,
            });
        }
        let mut url = Url::parse(&self.callback)?;
        url.query_pairs_mut()
            .append_pair("amount", &amount_msat.to_string());
        log::debug!("invoice url: {url}");
        Ok(url)
    }
}

/// Response of the callback, either an invoice or an error status
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct InvoiceResponse {
    pub pr: Option<String>,
    pub status: Option<String>,
    pub reason: Option<String>,
}

impl InvoiceResponse {
    pub fn from_json(json: &str) -> Result<Self, PayRequestError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn lightning_uri(&self) -> Result<String, PayRequestError> {
        if self.status.as_deref() == Some(ERROR_STATUS) {
            let reason = self.reason.clone().unwrap_or_default();
            return Err(PayRequestError::Service(reason));
        }
        match self.pr.as_deref() {
            Some(pr) if !pr.is_empty() => Ok(format!("lightning:{pr}")),
            _ => Err(PayRequestError::NoInvoice),
        }
    }
}

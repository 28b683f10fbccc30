use std::{fmt::Display, str::FromStr};

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

use crate::codec::{self, Bech32Error, ConversionError};

pub const LNURL_HRP: &str = "lnurl";

const LIGHTNING_SCHEME: &str = "lightning:";

/// Characters escaped in the local part, everything but `A-Z a-z 0-9 - _ . ! ~ * ' ( )`
const LOCAL_PART: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum LnurlError {
    #[error("Invalid Lightning Address '{0}', expected user@domain")]
    InvalidAddress(String),

    #[error("Amount of {0} sats overflows when converted to millisatoshis")]
    AmountOverflow(u64),

    #[error("Conversion failed: {0}")]
    ConversionFailed(#[from] ConversionError),

    #[error(transparent)]
    Bech32(#[from] Bech32Error),

    #[error("Expected prefix 'lnurl' found '{0}'")]
    WrongPrefix(String),

    #[error("Decoded LNURL is not valid UTF-8")]
    NotUtf8,
}

/// An email-like `user@domain` identifier resolving to a LNURL-pay endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LightningAddress {
    user: String,
    domain: String,
}

impl LightningAddress {
    pub fn user(&self) -> &str {
        &self.user
    }

    pub fn domain(&self) -> &str {
        &self.domain
    }

    /// The LNURL-pay metadata endpoint of this address
    ///
    /// ```
    /// # use zapdesk::lnurl::LightningAddress;
    /// let address: LightningAddress = "alice@example.com".parse().unwrap();
    /// assert_eq!(address.well_known_url(), "https://example.com/.well-known/lnurlp/alice");
    /// ```
    pub fn well_known_url(&self) -> String {
        format!(
            "https://{}/.well-known/lnurlp/{}",
            self.domain,
            utf8_percent_encode(&self.user, LOCAL_PART)
        )
    }

    /// The metadata endpoint with the amount query, millisatoshis are computed from `amount_sats`
    pub fn pay_url(&self, amount_sats: u64) -> Result<String, LnurlError> {
        let amount_msat = to_msat(amount_sats)?;
        Ok(format!("{}?amount={amount_msat}", self.well_known_url()))
    }
}

impl FromStr for LightningAddress {
    type Err = LnurlError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.split_once('@') {
            Some((user, domain)) if !user.is_empty() && !domain.is_empty() && !domain.contains('@') => {
                Ok(LightningAddress {
                    user: user.to_string(),
                    domain: domain.to_string(),
                })
            }
            _ => Err(LnurlError::InvalidAddress(s.to_string())),
        }
    }
}

impl Display for LightningAddress {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}@{}", self.user, self.domain)
    }
}

pub(crate) fn to_msat(amount_sats: u64) -> Result<u64, LnurlError> {
    amount_sats
        .checked_mul(1000)
        .ok_or(LnurlError::AmountOverflow(amount_sats))
}

/// Encode the LNURL-pay request for `amount_sats` to the given lightning address.
///
/// ```
/// # use zapdesk::lnurl::lnurl_from_lightning_address;
/// let lnurl = lnurl_from_lightning_address("alice@example.com", 1000).unwrap();
/// assert!(lnurl.starts_with("lnurl1dp68gurn8ghj7"));
/// ```
pub fn lnurl_from_lightning_address(
    lightning_address: &str,
    amount_sats: u64,
) -> Result<String, LnurlError> {
    let address = LightningAddress::from_str(lightning_address)?;
    let url = address.pay_url(amount_sats)?.to_lowercase();
    log::debug!("LNURL url: {url}");

    let words = codec::convert_bits(url.as_bytes(), 8, 5, true)?;
    Ok(codec::encode(LNURL_HRP, &words)?)
}

/// A `lightning:` URI of the address, with the amount in sats when it's given and not zero.
pub fn lightning_uri_from_address(
    lightning_address: &str,
    amount_sats: Option<u64>,
) -> Result<String, LnurlError> {
    let address = LightningAddress::from_str(lightning_address)?;
    let uri = match amount_sats {
        Some(amount) if amount > 0 => format!("{LIGHTNING_SCHEME}{address}?amount={amount}sat"),
        _ => format!("{LIGHTNING_SCHEME}{address}"),
    };
    log::debug!("Lightning URI: {uri}");
    Ok(uri)
}

/// Decode an LNURL, optionally prefixed by `lightning:`, back into the url it encodes
pub fn decode_lnurl(lnurl: &str) -> Result<String, LnurlError> {
    let lnurl = lnurl.trim();
    let lnurl = match lnurl.get(..LIGHTNING_SCHEME.len()) {
        Some(scheme) if scheme.eq_ignore_ascii_case(LIGHTNING_SCHEME) => {
            &lnurl[LIGHTNING_SCHEME.len()..]
        }
        _ => lnurl,
    };
    let (hrp, words) = codec::decode(lnurl)?;
    if hrp != LNURL_HRP {
        return Err(LnurlError::WrongPrefix(hrp));
    }
    let bytes = codec::convert_bits(&words, 5, 8, false)?;
    String::from_utf8(bytes).map_err(|_| LnurlError::NotUtf8)
}

use crate::lnurl::{lightning_uri_from_address, LnurlError};

pub fn uri(address: &str, amount_sats: Option<u64>) -> Result<String, LnurlError> {
    lightning_uri_from_address(address, amount_sats)
}

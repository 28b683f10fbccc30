use crate::lnurl::{decode_lnurl, LnurlError};

pub fn decode(lnurl: &str) -> Result<String, LnurlError> {
    let url = decode_lnurl(lnurl)?;
    log::info!("decoded LNURL to {url}");
    Ok(url)
}

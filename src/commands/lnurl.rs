use qr_code::types::QrError;

use crate::lnurl::{lnurl_from_lightning_address, LnurlError};

#[derive(thiserror::Error, Debug)]
pub enum LnurlCommandError {
    #[error(transparent)]
    Lnurl(#[from] LnurlError),

    #[error(transparent)]
    Qr(#[from] QrError),
}

pub fn lnurl(
    address: &str,
    amount_sats: u64,
    uppercase: bool,
    qr_border: Option<u8>,
) -> Result<String, LnurlCommandError> {
    let lnurl = lnurl_from_lightning_address(address, amount_sats)?;
    log::info!("LNURL-pay of {amount_sats} sats to {address}");
    let lnurl = if uppercase {
        lnurl.to_ascii_uppercase()
    } else {
        lnurl
    };
    Ok(match qr_border {
        Some(border) => {
            let qr = super::single_qr(&lnurl.to_ascii_uppercase(), border)?;
            format!("{lnurl}\n{qr}")
        }
        None => lnurl,
    })
}

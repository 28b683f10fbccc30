use qr_code::types::QrError;

use crate::{
    i18n::{I18nError, Translations},
    lnurl::{lnurl_from_lightning_address, LightningAddress, LnurlError},
    tip::{TipError, TIP_AMOUNTS},
};

#[derive(thiserror::Error, Debug)]
pub enum TipCommandError {
    #[error(transparent)]
    I18n(#[from] I18nError),

    #[error(transparent)]
    Qr(#[from] QrError),

    #[error(transparent)]
    Lnurl(#[from] LnurlError),

    #[error(transparent)]
    Tip(#[from] TipError),

    /// Already translated message for the user
    #[error("{0}")]
    Localized(String),
}

const NO_CONTEXT: &[(&str, &str)] = &[];

/// Replace the errors a user can fix with their translated message
pub(super) fn localize(
    translations: &Translations,
    error: TipError,
    address: &str,
) -> Result<TipCommandError, TipCommandError> {
    let address_context = [("address", address)];
    let (key, context) = match &error {
        TipError::NoTipAmount => ("errors.noTipAmount", NO_CONTEXT),
        TipError::NoAssignee => ("errors.noAssignee", NO_CONTEXT),
        TipError::NoLightningAddress => ("errors.noLightningAddress", NO_CONTEXT),
        TipError::Lnurl(LnurlError::InvalidAddress(a)) if a.trim().is_empty() => {
            ("errors.noLightningAddress", NO_CONTEXT)
        }
        TipError::Lnurl(LnurlError::InvalidAddress(_)) => {
            ("errors.invalidLightningAddress", &address_context[..])
        }
        _ => return Ok(error.into()),
    };
    Ok(TipCommandError::Localized(translations.t(key, context)?))
}

/// Localized tip summary: a header, then the LNURL for `amount_sats` or one LNURL per preset
/// amount when no amount is given.
pub fn tip(
    translations: &Translations,
    address: Option<&str>,
    agent_name: Option<&str>,
    amount_sats: Option<u64>,
    qr_border: Option<u8>,
) -> Result<String, TipCommandError> {
    let address = match address {
        Some(address) => address,
        None => return Err(localize(translations, TipError::NoLightningAddress, "")?),
    };
    if let Err(e) = address.parse::<LightningAddress>() {
        return Err(localize(translations, e.into(), address)?);
    }

    let mut lines = vec![match agent_name {
        Some(name) if !name.trim().is_empty() => translations.t("ui.tipAgent", &[("name", name)])?,
        _ => translations.t("ui.title", &[])?,
    }];

    match amount_sats {
        Some(0) => return Err(localize(translations, TipError::NoTipAmount, address)?),
        Some(amount) => {
            let amount_str = amount.to_string();
            lines.push(translations.t("ui.scanToPay", &[("amount", &amount_str)])?);
            let lnurl = lnurl_from_lightning_address(address, amount)?;
            if let Some(border) = qr_border {
                lines.push(super::single_qr(&lnurl.to_ascii_uppercase(), border)?);
            }
            lines.push(lnurl);
        }
        None => {
            for amount in TIP_AMOUNTS {
                let amount_str = amount.to_string();
                let label = translations.t("ui.satsLabel", &[("amount", &amount_str)])?;
                let lnurl = lnurl_from_lightning_address(address, amount)?;
                lines.push(format!("{label}: {lnurl}"));
            }
        }
    }
    log::info!("tip summary for {address} in {}", translations.locale());

    Ok(lines.join("\n"))
}

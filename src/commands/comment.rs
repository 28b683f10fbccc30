use super::tip::{localize, TipCommandError};
use crate::{i18n::Translations, tip::TipComment};

/// The ticket update recording the tip, errors the user can fix are translated
pub fn comment(
    translations: &Translations,
    amount_sats: u64,
    agent_name: &str,
    message: Option<String>,
    address: &str,
    private_comments: bool,
) -> Result<String, TipCommandError> {
    let comment = match TipComment::new(amount_sats, agent_name, message, address, private_comments)
    {
        Ok(comment) => comment,
        Err(e) => return Err(localize(translations, e, address)?),
    };
    let amount = amount_sats.to_string();
    log::info!(
        "{} (agent: {agent_name}, public: {})",
        translations.t("notifications.tipRecorded", &[("amount", &amount)])?,
        comment.public
    );
    Ok(comment.ticket_update_json()?)
}

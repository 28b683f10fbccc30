use crate::{commands, i18n, lnurl, pay_request, tip};

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Lnurl(#[from] lnurl::LnurlError),

    #[error(transparent)]
    PayRequest(#[from] pay_request::PayRequestError),

    #[error(transparent)]
    Tip(#[from] tip::TipError),

    #[error(transparent)]
    I18n(#[from] i18n::I18nError),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Qr(#[from] qr_code::types::QrError),

    #[error(transparent)]
    Stdin(#[from] crate::stdin::StdinError),

    #[error(transparent)]
    LnurlCommand(#[from] commands::LnurlCommandError),

    #[error(transparent)]
    TipCommand(#[from] commands::TipCommandError),

    #[error("Stdin is expected for this command")]
    StdinExpected,
}

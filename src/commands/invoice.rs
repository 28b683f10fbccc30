use crate::pay_request::{InvoiceResponse, PayRequest, PayRequestError};

/// Given the LNURL-pay response of a lightning address, the url to call to get an invoice
pub fn invoice_url(pay_request_json: &str, amount_sats: u64) -> Result<String, PayRequestError> {
    let pay_request = PayRequest::from_json(pay_request_json)?;
    Ok(pay_request.invoice_url(amount_sats)?.to_string())
}

/// Given the response of the LNURL-pay callback, the `lightning:` URI of the invoice
pub fn invoice(invoice_json: &str) -> Result<String, PayRequestError> {
    InvoiceResponse::from_json(invoice_json)?.lightning_uri()
}

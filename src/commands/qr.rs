use qr_code::{structured::SplittedQr, types::QrError, QrCode};

/// Split `content` in as many QR codes of the given version as needed, numbering them
pub fn qr(content: &str, version: i16, border: u8, empty_lines: u8) -> Result<String, QrError> {
    let splitted = SplittedQr::new(content.as_bytes().to_vec(), version)?;

    let mut result = String::new();
    let splitted = splitted.split()?;
    let separator = "\n".repeat(empty_lines as usize);

    let len = splitted.len();
    for (i, qr) in splitted.iter().enumerate() {
        let number = format!("({}/{len})\n", i + 1);
        let width = qr.width() + border as usize * 2;
        let spaces = " ".repeat(width.saturating_sub(number.len()) / 2);

        result.push_str(&spaces);
        result.push_str(&number);

        result.push_str(&qr.to_string(true, border));
        result.push_str(&separator);
    }
    Ok(result)
}

/// A single QR code of `content`.
///
/// Bech32 strings should be given uppercase, so that the QR uses the denser alphanumeric mode.
pub fn single_qr(content: &str, border: u8) -> Result<String, QrError> {
    let qr = QrCode::new(content.as_bytes())?;
    Ok(qr.to_string(true, border))
}

//! Bech32 encoding of 5-bit words under a human-readable prefix.
//!
//! The classic bech32 checksum is used (constant `1`), which is what LNURL strings carry. The
//! 90 characters limit of BIP-173 is enforced neither while encoding nor while decoding
//! because LNURL strings are almost always longer.

mod bits;
mod checksum;

pub use bits::{convert_bits, ConversionError};
pub use checksum::{create_checksum, hrp_expand, polymod, verify_checksum, CHECKSUM_LENGTH};

pub const CHARSET: &str = "qpzry9x8gf2tvdw0s3jn54khce6mua7l";

const SEPARATOR: char = '1';

#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum Bech32Error {
    #[error("The human readable prefix '{0}' must be non-empty and contain only ASCII chars 33..=126")]
    InvalidHrp(String),

    #[error("Word {0} doesn't fit in 5 bits")]
    InvalidWord(u8),

    #[error("Mixed upper and lower case characters")]
    MixedCase,

    #[error("Missing separator '1'")]
    MissingSeparator,

    #[error("Data part is {0} chars long, at least 6 are needed for the checksum")]
    TooShort(usize),

    #[error("Character '{0}' is not in the bech32 alphabet")]
    InvalidChar(char),

    #[error("Invalid checksum")]
    InvalidChecksum,
}

fn check_hrp(hrp: &str) -> Result<(), Bech32Error> {
    if hrp.is_empty() || !hrp.bytes().all(|b| (33..=126).contains(&b)) {
        return Err(Bech32Error::InvalidHrp(hrp.to_string()));
    }
    Ok(())
}

/// Encode the 5-bit `data` words with the given prefix, appending the checksum.
///
/// ```
/// # use zapdesk::codec::encode;
/// assert_eq!(encode("a", &[]).unwrap(), "a12uel5l");
/// ```
pub fn encode(hrp: &str, data: &[u8]) -> Result<String, Bech32Error> {
    check_hrp(hrp)?;
    if let Some(word) = data.iter().find(|w| **w > 31) {
        return Err(Bech32Error::InvalidWord(*word));
    }
    let checksum = create_checksum(hrp, data);
    let charset = CHARSET.as_bytes();

    let mut result = String::with_capacity(hrp.len() + 1 + data.len() + CHECKSUM_LENGTH);
    result.push_str(hrp);
    result.push(SEPARATOR);
    result.extend(
        data.iter()
            .chain(checksum.iter())
            .map(|w| charset[*w as usize] as char),
    );
    Ok(result)
}

/// Parse a bech32 string returning the lowercase prefix and the data words without checksum.
///
/// Upper case strings are accepted, as QR codes often carry them, mixed case strings are not.
pub fn decode(s: &str) -> Result<(String, Vec<u8>), Bech32Error> {
    let has_lower = s.chars().any(|c| c.is_ascii_lowercase());
    let has_upper = s.chars().any(|c| c.is_ascii_uppercase());
    if has_lower && has_upper {
        return Err(Bech32Error::MixedCase);
    }
    let s = s.to_ascii_lowercase();

    let pos = s.rfind(SEPARATOR).ok_or(Bech32Error::MissingSeparator)?;
    let (hrp, data_part) = (&s[..pos], &s[pos + 1..]);
    check_hrp(hrp)?;
    if data_part.len() < CHECKSUM_LENGTH {
        return Err(Bech32Error::TooShort(data_part.len()));
    }

    let mut words = data_part
        .chars()
        .map(|c| {
            CHARSET
                .find(c)
                .map(|i| i as u8)
                .ok_or(Bech32Error::InvalidChar(c))
        })
        .collect::<Result<Vec<_>, _>>()?;

    if !verify_checksum(hrp, &words) {
        return Err(Bech32Error::InvalidChecksum);
    }
    words.truncate(words.len() - CHECKSUM_LENGTH);

    Ok((hrp.to_string(), words))
}

#[cfg(test)]
mod test {
    use bech32::{FromBase32, ToBase32, Variant};
    use rand::prelude::*;

    use super::*;

    #[test]
    fn bip173_vectors() {
        for valid in [
            "A12UEL5L",
            "a12uel5l",
            "an83characterlonghumanreadablepartthatcontainsthenumber1andtheexcludedcharactersbio1tt5tgs",
            "abcdef1qpzry9x8gf2tvdw0s3jn54khce6mua7lmqqqxw",
            "split1checkupstagehandshakeupstreamerranterredcaperred2y9e3w",
        ] {
            let (hrp, data) = decode(valid).unwrap();
            assert_eq!(encode(&hrp, &data).unwrap(), valid.to_ascii_lowercase());
        }
    }

    #[test]
    fn invalid_strings() {
        assert_eq!(decode("pzry9x0s0muk"), Err(Bech32Error::MissingSeparator));
        assert!(matches!(decode("1pzry9x0s0muk"), Err(Bech32Error::InvalidHrp(_))));
        assert_eq!(decode("x1b4n0q5v"), Err(Bech32Error::InvalidChar('b')));
        assert_eq!(decode("li1dgmt3"), Err(Bech32Error::TooShort(5)));
        assert_eq!(decode("A1G7SGD8"), Err(Bech32Error::InvalidChecksum));
        assert_eq!(decode("a12UEL5L"), Err(Bech32Error::MixedCase));
    }

    #[test]
    fn invalid_input_to_encode() {
        assert_eq!(encode("a", &[32]), Err(Bech32Error::InvalidWord(32)));
        assert!(matches!(encode("", &[1]), Err(Bech32Error::InvalidHrp(_))));
        assert!(matches!(encode("a b", &[1]), Err(Bech32Error::InvalidHrp(_))));
    }

    #[test]
    fn deterministic() {
        let data = convert_bits(b"zapdesk", 8, 5, true).unwrap();
        assert_eq!(encode("test", &data), encode("test", &data));
    }

    #[test]
    fn single_char_mutation_detected() {
        let data = convert_bits(b"https://example.com/tip", 8, 5, true).unwrap();
        let encoded = encode("lnurl", &data).unwrap();
        let sep = encoded.rfind('1').unwrap();

        for i in sep + 1..encoded.len() {
            let original = encoded.as_bytes()[i] as char;
            for replacement in CHARSET.chars().filter(|c| *c != original) {
                let mut mutated = encoded.clone();
                mutated.replace_range(i..i + 1, &replacement.to_string());
                assert_eq!(
                    decode(&mutated),
                    Err(Bech32Error::InvalidChecksum),
                    "{mutated}"
                );
            }
        }
    }

    #[test]
    fn same_as_bech32_crate() {
        let mut rng = rand::thread_rng();
        for len in [0usize, 1, 10, 32, 100, 300] {
            let mut bytes = vec![0u8; len];
            rng.fill_bytes(&mut bytes);
            let words = convert_bits(&bytes, 8, 5, true).unwrap();
            let ours = encode("lnurl", &words).unwrap();
            let theirs = bech32::encode("lnurl", bytes.to_base32(), Variant::Bech32).unwrap();
            assert_eq!(ours, theirs);

            let (hrp, data, variant) = bech32::decode(&ours).unwrap();
            assert_eq!(hrp, "lnurl");
            assert_eq!(variant, Variant::Bech32);
            assert_eq!(Vec::<u8>::from_base32(&data).unwrap(), bytes);
        }
    }
}

const GENERATORS: [u32; 5] = [0x3b6a57b2, 0x26508e6d, 0x1ea119fa, 0x3d4233dd, 0x2a1462b3];

/// The value `polymod` yields over a prefix and data carrying a valid bech32 checksum
const BECH32_CONST: u32 = 1;

pub const CHECKSUM_LENGTH: usize = 6;

/// BCH checksum register over GF(32), 30 bits wide.
pub fn polymod(values: &[u8]) -> u32 {
    let mut chk = 1u32;
    for value in values {
        let top = chk >> 25;
        chk = ((chk & 0x1ffffff) << 5) ^ *value as u32;
        for (i, generator) in GENERATORS.iter().enumerate() {
            if (top >> i) & 1 == 1 {
                chk ^= generator;
            }
        }
    }
    chk
}

/// High bits of every prefix char, a zero, then the low 5 bits of every char.
pub fn hrp_expand(hrp: &str) -> Vec<u8> {
    let bytes = hrp.as_bytes();
    let mut result = Vec::with_capacity(bytes.len() * 2 + 1);
    result.extend(bytes.iter().map(|b| b >> 5));
    result.push(0);
    result.extend(bytes.iter().map(|b| b & 31));
    result
}

pub fn create_checksum(hrp: &str, data: &[u8]) -> [u8; CHECKSUM_LENGTH] {
    let mut values = hrp_expand(hrp);
    values.extend_from_slice(data);
    values.extend_from_slice(&[0; CHECKSUM_LENGTH]);
    let m = polymod(&values) ^ BECH32_CONST;

    let mut result = [0u8; CHECKSUM_LENGTH];
    for (i, word) in result.iter_mut().enumerate() {
        *word = ((m >> (5 * (5 - i))) & 31) as u8;
    }
    result
}

/// `data` must end with the 6 checksum words
pub fn verify_checksum(hrp: &str, data: &[u8]) -> bool {
    let mut values = hrp_expand(hrp);
    values.extend_from_slice(data);
    polymod(&values) == BECH32_CONST
}

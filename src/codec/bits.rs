#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum ConversionError {
    #[error("Bit width must be between 1 and 8, got from {from} to {to}")]
    UnsupportedWidth { from: u32, to: u32 },

    #[error("Value {value} at position {position} doesn't fit in {from} bits")]
    ValueOutOfRange {
        value: u8,
        position: usize,
        from: u32,
    },

    #[error("Data is not evenly divisible in groups of {0} bits")]
    InvalidPadding(u32),
}

/// Regroup `data`, made of `from`-bit values, into `to`-bit values, most significant bit first.
///
/// With `pad` the remaining bits are left aligned into a final group, without it the leftover
/// bits must be fewer than `from` and all zero, which is what an encoder padding the other way
/// produces.
///
/// ```
/// # use zapdesk::codec::convert_bits;
/// let words = convert_bits(&[0xff], 8, 5, true).unwrap();
/// assert_eq!(words, vec![31, 28]);
/// assert_eq!(convert_bits(&words, 5, 8, false).unwrap(), vec![0xff]);
/// ```
pub fn convert_bits(data: &[u8], from: u32, to: u32, pad: bool) -> Result<Vec<u8>, ConversionError> {
    if !(1..=8).contains(&from) || !(1..=8).contains(&to) {
        return Err(ConversionError::UnsupportedWidth { from, to });
    }
    let max_value = (1u32 << to) - 1;
    let max_acc = (1u32 << (from + to - 1)) - 1;
    let mut acc = 0u32;
    let mut bits = 0u32;
    let mut result = Vec::with_capacity(data.len() * from as usize / to as usize + 1);

    for (position, value) in data.iter().enumerate() {
        let v = *value as u32;
        if v >> from != 0 {
            return Err(ConversionError::ValueOutOfRange {
                value: *value,
                position,
                from,
            });
        }
        acc = ((acc << from) | v) & max_acc;
        bits += from;
        while bits >= to {
            bits -= to;
            result.push(((acc >> bits) & max_value) as u8);
        }
    }

    if pad {
        if bits > 0 {
            result.push(((acc << (to - bits)) & max_value) as u8);
        }
    } else if bits >= from || ((acc << (to - bits)) & max_value) != 0 {
        return Err(ConversionError::InvalidPadding(to));
    }

    Ok(result)
}

#[cfg(test)]
mod test {
    use rand::prelude::*;

    use super::{convert_bits, ConversionError};

    #[test]
    fn https_prefix() {
        assert_eq!(
            convert_bits(b"ht", 8, 5, true).unwrap(),
            vec![13, 1, 26, 0]
        );
    }

    #[test]
    fn empty() {
        assert!(convert_bits(&[], 8, 5, true).unwrap().is_empty());
        assert!(convert_bits(&[], 5, 8, false).unwrap().is_empty());
    }

    #[test]
    fn roundtrip_random() {
        let mut rng = rand::thread_rng();
        for len in 0..64 {
            let mut bytes = vec![0u8; len];
            rng.fill_bytes(&mut bytes);
            let words = convert_bits(&bytes, 8, 5, true).unwrap();
            assert_eq!(words.len(), (len * 8 + 4) / 5);
            assert!(words.iter().all(|w| *w < 32));
            assert_eq!(convert_bits(&words, 5, 8, false).unwrap(), bytes);
        }
    }

    #[test]
    fn unpadded_leftover() {
        // 3 words are 15 bits, the last 7 bits are not zero
        assert_eq!(
            convert_bits(&[1, 2, 3], 5, 8, false),
            Err(ConversionError::InvalidPadding(8))
        );
        // 8 bits into 5 leaves 3 non-zero bits
        assert_eq!(
            convert_bits(&[0xff], 8, 5, false),
            Err(ConversionError::InvalidPadding(5))
        );
        // a single word can't make a byte, the leftover is a whole input group
        assert_eq!(
            convert_bits(&[0], 5, 8, false),
            Err(ConversionError::InvalidPadding(8))
        );
    }

    #[test]
    fn out_of_range() {
        assert_eq!(
            convert_bits(&[1, 32], 5, 8, false),
            Err(ConversionError::ValueOutOfRange {
                value: 32,
                position: 1,
                from: 5
            })
        );
        assert!(matches!(
            convert_bits(&[1], 9, 5, true),
            Err(ConversionError::UnsupportedWidth { .. })
        ));
    }
}

//! Decoding of hex color strings into vectors.

use crate::{MAX_COMPONENTS, Result, Vector, VectorError};

impl Vector {
    /// Decodes a hex color string into a vector, one component per byte,
    /// each scaled by 1/255.
    ///
    /// The string must have an even number of hex digits and encode at most
    /// [`MAX_COMPONENTS`] bytes. The leftmost (most significant) byte
    /// becomes component 0, so `"ff0000"` decodes to `{1; 0; 0}` and
    /// `"aabb"` decodes to `{0xaa/255; 0xbb/255}`. The empty string decodes
    /// to the empty vector.
    ///
    /// # Errors
    /// - [`VectorError::OddHexLength`] if the number of digits is odd.
    /// - [`VectorError::MalformedHex`] if any character is not a hex digit.
    /// - [`VectorError::HexTooBig`] if the string encodes more than
    ///   [`MAX_COMPONENTS`] bytes.
    pub fn from_hex(hex: &str) -> Result<Self> {
        let digit_count = hex.chars().count();
        if digit_count % 2 != 0 {
            return Err(VectorError::OddHexLength { len: digit_count });
        }

        let digits: Vec<u32> = hex
            .chars()
            .map(|character| {
                character
                    .to_digit(16)
                    .ok_or_else(|| VectorError::MalformedHex {
                        hex: hex.to_string(),
                    })
            })
            .collect::<Result<_>>()?;

        let byte_count = digit_count / 2;
        if byte_count > MAX_COMPONENTS {
            return Err(VectorError::HexTooBig {
                hex: hex.to_string(),
            });
        }

        let mut components = [0.0; MAX_COMPONENTS];
        for (component, pair) in components[..byte_count]
            .iter_mut()
            .zip(digits.chunks_exact(2))
        {
            *component = f64::from(pair[0] * 16 + pair[1]) / 255.0;
        }
        Ok(Self::from_parts(components, byte_count))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn decoding_pure_red_gives_unit_first_component() {
        let v = Vector::from_hex("ff0000").unwrap();
        assert_eq!(v.len(), 3);
        assert_eq!(v, Vector::new(&[1.0, 0.0, 0.0]).unwrap());
    }

    #[test]
    fn leftmost_byte_becomes_the_first_component() {
        let v = Vector::from_hex("aabb").unwrap();
        assert_eq!(v.len(), 2);
        assert_abs_diff_eq!(v.component(0).unwrap(), 170.0 / 255.0);
        assert_abs_diff_eq!(v.component(1).unwrap(), 187.0 / 255.0);
    }

    #[test]
    fn uppercase_digits_decode_like_lowercase() {
        assert_eq!(
            Vector::from_hex("FF00"),
            Vector::from_hex("ff00")
        );
    }

    #[test]
    fn four_byte_string_fills_the_vector() {
        let v = Vector::from_hex("ffffffff").unwrap();
        assert_eq!(v.len(), 4);
        assert_eq!(v, Vector::new(&[1.0, 1.0, 1.0, 1.0]).unwrap());
    }

    #[test]
    fn empty_string_decodes_to_the_empty_vector() {
        let v = Vector::from_hex("").unwrap();
        assert!(v.is_empty());
    }

    #[test]
    fn odd_length_string_fails() {
        assert_eq!(
            Vector::from_hex("abc"),
            Err(VectorError::OddHexLength { len: 3 })
        );
    }

    #[test]
    fn non_hex_characters_fail() {
        assert_eq!(
            Vector::from_hex("zz"),
            Err(VectorError::MalformedHex {
                hex: "zz".to_string()
            })
        );
        // A sign prefix is not a hex digit.
        assert_eq!(
            Vector::from_hex("+f"),
            Err(VectorError::MalformedHex {
                hex: "+f".to_string()
            })
        );
    }

    #[test]
    fn more_than_four_bytes_fails() {
        assert_eq!(
            Vector::from_hex("ff00ff00ff"),
            Err(VectorError::HexTooBig {
                hex: "ff00ff00ff".to_string()
            })
        );
    }
}

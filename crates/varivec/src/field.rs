//! Resolution of single-character field names to component slots.
//!
//! Both the positional naming scheme (`x`, `y`, `z`, `w`) and the color
//! naming scheme (`r`, `g`, `b`, `a`) alias the same underlying slots:
//! `x`/`r` is slot 0, `y`/`g` is slot 1, `z`/`b` is slot 2 and `w`/`a` is
//! slot 3. Resolution is a fixed mapping; there is no runtime-extensible
//! field table.

use crate::{MAX_COMPONENTS, Result, VectorError};

/// Resolves a single-character field name to its component slot, or `None`
/// if the character is not a recognized field name.
#[inline]
pub const fn field_slot(name: char) -> Option<usize> {
    match name {
        'x' | 'r' => Some(0),
        'y' | 'g' => Some(1),
        'z' | 'b' => Some(2),
        'w' | 'a' => Some(3),
        _ => None,
    }
}

/// Resolves a field name against a vector of the given length, yielding the
/// slot it addresses.
///
/// # Errors
/// [`VectorError::InvalidField`] if the name is unrecognized or its slot
/// lies at or beyond `len`.
#[inline]
pub fn resolve_field(name: char, len: usize) -> Result<usize> {
    match field_slot(name) {
        Some(slot) if slot < len => Ok(slot),
        _ => Err(VectorError::InvalidField { field: name, len }),
    }
}

/// Resolves every character of a swizzle pattern against a source vector of
/// the given length.
///
/// Returns the resolved slots and the pattern length. Slots may repeat and
/// appear in any order.
///
/// # Errors
/// - [`VectorError::SwizzleTooLong`] if the pattern names more than
///   [`MAX_COMPONENTS`] components.
/// - [`VectorError::InvalidField`] if any character is unrecognized or
///   addresses a slot at or beyond `source_len`.
pub fn resolve_swizzle(pattern: &str, source_len: usize) -> Result<([usize; MAX_COMPONENTS], usize)> {
    let pattern_len = pattern.chars().count();
    if pattern_len > MAX_COMPONENTS {
        return Err(VectorError::SwizzleTooLong { len: pattern_len });
    }

    let mut slots = [0; MAX_COMPONENTS];
    for (i, name) in pattern.chars().enumerate() {
        slots[i] = resolve_field(name, source_len)?;
    }
    Ok((slots, pattern_len))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn position_and_color_names_alias_the_same_slots() {
        for (position, color) in [('x', 'r'), ('y', 'g'), ('z', 'b'), ('w', 'a')] {
            assert_eq!(field_slot(position), field_slot(color));
        }
        assert_eq!(field_slot('x'), Some(0));
        assert_eq!(field_slot('w'), Some(3));
    }

    #[test]
    fn unknown_field_name_does_not_resolve() {
        assert_eq!(field_slot('q'), None);
        assert_eq!(field_slot('X'), None);
        assert_eq!(field_slot(' '), None);
    }

    #[test]
    fn resolving_field_beyond_vector_length_fails() {
        assert_eq!(
            resolve_field('z', 2),
            Err(VectorError::InvalidField { field: 'z', len: 2 })
        );
    }

    #[test]
    fn resolving_valid_field_within_length_succeeds() {
        assert_eq!(resolve_field('g', 2), Ok(1));
    }

    #[test]
    fn swizzle_pattern_may_repeat_and_reorder_slots() {
        let (slots, len) = resolve_swizzle("yxxa", 4).unwrap();
        assert_eq!(len, 4);
        assert_eq!(&slots[..len], &[1, 0, 0, 3]);
    }

    #[test]
    fn swizzle_pattern_longer_than_capacity_fails() {
        assert_eq!(
            resolve_swizzle("xyzwx", 4),
            Err(VectorError::SwizzleTooLong { len: 5 })
        );
    }

    #[test]
    fn swizzle_pattern_addressing_slot_beyond_source_fails() {
        assert_eq!(
            resolve_swizzle("xz", 2),
            Err(VectorError::InvalidField { field: 'z', len: 2 })
        );
    }

    #[test]
    fn empty_swizzle_pattern_resolves_to_zero_slots() {
        let (_, len) = resolve_swizzle("", 3).unwrap();
        assert_eq!(len, 0);
    }
}

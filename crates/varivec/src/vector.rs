//! The vector value type and its operations.

use crate::{MAX_COMPONENTS, Result, VectorError, field};
use approx::AbsDiffEq;
use std::fmt;

/// A fixed-capacity vector of up to [`MAX_COMPONENTS`] double-precision
/// components.
///
/// The number of components is fixed when the vector is created and never
/// changes afterwards. Components are addressed positionally (`0..len`) or
/// by single-character field name (`x`, `y`, `z`, `w` for positions and
/// `r`, `g`, `b`, `a` for colors, both aliasing the same slots).
///
/// The type has plain value semantics: it is `Copy`, and every instance
/// owns its component storage exclusively. Each operation that modifies a
/// vector comes in two forms: a mutating form (suffixed `_mut`) that
/// modifies the receiver in place, and a non-mutating form that copies the
/// receiver and applies the mutating form to the copy. The mutating form
/// holds the single algorithmic implementation; the non-mutating twin only
/// copies and delegates.
///
/// Binary operations on two vectors require equal lengths and report
/// [`VectorError::LengthMismatch`] otherwise. Equality is the one
/// exception: vectors of different lengths compare unequal rather than
/// erroring.
#[derive(Copy, Clone, Debug)]
pub struct Vector {
    components: [f64; MAX_COMPONENTS],
    len: usize,
}

impl Vector {
    /// Creates a new vector from the given components.
    ///
    /// The length of the vector equals the number of components given, which
    /// may be zero.
    ///
    /// # Errors
    /// [`VectorError::TooManyComponents`] if more than [`MAX_COMPONENTS`]
    /// components are given.
    pub fn new(components: &[f64]) -> Result<Self> {
        if components.len() > MAX_COMPONENTS {
            return Err(VectorError::TooManyComponents {
                count: components.len(),
            });
        }
        let mut slots = [0.0; MAX_COMPONENTS];
        slots[..components.len()].copy_from_slice(components);
        Ok(Self {
            components: slots,
            len: components.len(),
        })
    }

    /// Creates a new vector from an array of components, with the component
    /// count checked at compile time.
    pub const fn from_array<const N: usize>(components: [f64; N]) -> Self {
        const {
            assert!(
                N <= MAX_COMPONENTS,
                "a vector holds at most `MAX_COMPONENTS` components"
            );
        }
        let mut slots = [0.0; MAX_COMPONENTS];
        let mut i = 0;
        while i < N {
            slots[i] = components[i];
            i += 1;
        }
        Self {
            components: slots,
            len: N,
        }
    }

    /// Creates a vector directly from its raw parts.
    ///
    /// Slots at or beyond `len` must be zero.
    pub(crate) const fn from_parts(components: [f64; MAX_COMPONENTS], len: usize) -> Self {
        debug_assert!(len <= MAX_COMPONENTS);
        Self { components, len }
    }

    /// Returns the number of components in the vector.
    #[inline]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Whether the vector has no components.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the components of the vector as a slice.
    #[inline]
    pub fn components(&self) -> &[f64] {
        &self.components[..self.len]
    }

    /// Returns an iterator over the components of the vector.
    pub fn iter(&self) -> impl Iterator<Item = f64> + '_ {
        self.components().iter().copied()
    }

    /// Returns the component at the given position.
    ///
    /// # Errors
    /// [`VectorError::IndexOutOfRange`] if `index` is not smaller than the
    /// vector's length.
    pub fn component(&self, index: usize) -> Result<f64> {
        if index >= self.len {
            return Err(VectorError::IndexOutOfRange {
                index,
                len: self.len,
            });
        }
        Ok(self.components[index])
    }

    /// Sets the component at the given position.
    ///
    /// # Errors
    /// [`VectorError::IndexOutOfRange`] if `index` is not smaller than the
    /// vector's length.
    pub fn set_component(&mut self, index: usize, value: f64) -> Result<()> {
        if index >= self.len {
            return Err(VectorError::IndexOutOfRange {
                index,
                len: self.len,
            });
        }
        self.components[index] = value;
        Ok(())
    }

    /// Returns the component addressed by the given single-character field
    /// name (`x`, `y`, `z`, `w`, `r`, `g`, `b` or `a`).
    ///
    /// # Errors
    /// [`VectorError::InvalidField`] if the name is unrecognized or
    /// addresses a slot at or beyond the vector's length.
    pub fn field(&self, name: char) -> Result<f64> {
        let slot = field::resolve_field(name, self.len)?;
        Ok(self.components[slot])
    }

    /// Sets the component addressed by the given single-character field
    /// name.
    ///
    /// # Errors
    /// [`VectorError::InvalidField`] if the name is unrecognized or
    /// addresses a slot at or beyond the vector's length.
    pub fn set_field(&mut self, name: char, value: f64) -> Result<()> {
        let slot = field::resolve_field(name, self.len)?;
        self.components[slot] = value;
        Ok(())
    }

    /// Creates a new vector by picking source components according to the
    /// given swizzle pattern.
    ///
    /// Each character of the pattern names a source slot; the resulting
    /// vector's length equals the pattern length, and its component `i` is
    /// the source component named by the pattern's character `i`. Slots may
    /// repeat and appear in any order, so `"yx"` swaps the first two
    /// components and `"xx"` duplicates the first. The source vector is
    /// never mutated.
    ///
    /// # Errors
    /// - [`VectorError::SwizzleTooLong`] if the pattern names more than
    ///   [`MAX_COMPONENTS`] components.
    /// - [`VectorError::InvalidField`] if a character is unrecognized or
    ///   addresses a slot at or beyond the vector's length.
    pub fn swizzle(&self, pattern: &str) -> Result<Self> {
        let (slots, len) = field::resolve_swizzle(pattern, self.len)?;
        let mut components = [0.0; MAX_COMPONENTS];
        for (component, &slot) in components[..len].iter_mut().zip(&slots[..len]) {
            *component = self.components[slot];
        }
        Ok(Self { components, len })
    }

    /// Adds the given vector to this vector in place and returns the
    /// receiver for chaining.
    ///
    /// # Errors
    /// [`VectorError::LengthMismatch`] if the vectors have different
    /// lengths.
    pub fn add_mut(&mut self, other: &Self) -> Result<&mut Self> {
        self.check_same_length(other)?;
        for (component, &term) in self.components[..self.len].iter_mut().zip(other.components()) {
            *component += term;
        }
        Ok(self)
    }

    /// Returns the sum of this vector and the given vector.
    ///
    /// # Errors
    /// [`VectorError::LengthMismatch`] if the vectors have different
    /// lengths.
    pub fn added(&self, other: &Self) -> Result<Self> {
        let mut result = *self;
        result.add_mut(other)?;
        Ok(result)
    }

    /// Subtracts the given vector from this vector in place and returns the
    /// receiver for chaining.
    ///
    /// # Errors
    /// [`VectorError::LengthMismatch`] if the vectors have different
    /// lengths.
    pub fn sub_mut(&mut self, other: &Self) -> Result<&mut Self> {
        self.check_same_length(other)?;
        for (component, &term) in self.components[..self.len].iter_mut().zip(other.components()) {
            *component -= term;
        }
        Ok(self)
    }

    /// Returns the difference of this vector and the given vector.
    ///
    /// # Errors
    /// [`VectorError::LengthMismatch`] if the vectors have different
    /// lengths.
    pub fn subtracted(&self, other: &Self) -> Result<Self> {
        let mut result = *self;
        result.sub_mut(other)?;
        Ok(result)
    }

    /// Multiplies every component by the given scalar in place and returns
    /// the receiver for chaining.
    pub fn mul_mut(&mut self, scalar: f64) -> &mut Self {
        for component in &mut self.components[..self.len] {
            *component *= scalar;
        }
        self
    }

    /// Returns this vector scaled by the given scalar.
    pub fn scaled(&self, scalar: f64) -> Self {
        let mut result = *self;
        result.mul_mut(scalar);
        result
    }

    /// Divides every component by the given scalar in place and returns the
    /// receiver for chaining.
    ///
    /// Dividing by zero follows IEEE 754 semantics and yields infinite or
    /// NaN components rather than an error.
    pub fn div_mut(&mut self, scalar: f64) -> &mut Self {
        for component in &mut self.components[..self.len] {
            *component /= scalar;
        }
        self
    }

    /// Returns this vector divided by the given scalar.
    ///
    /// Dividing by zero follows IEEE 754 semantics and yields infinite or
    /// NaN components rather than an error.
    pub fn divided(&self, scalar: f64) -> Self {
        let mut result = *self;
        result.div_mut(scalar);
        result
    }

    /// Flips the sign of every component in place and returns the receiver
    /// for chaining.
    pub fn neg_mut(&mut self) -> &mut Self {
        for component in &mut self.components[..self.len] {
            *component = -*component;
        }
        self
    }

    /// Returns this vector with the sign of every component flipped.
    pub fn negated(&self) -> Self {
        let mut result = *self;
        result.neg_mut();
        result
    }

    /// Whether every component of this vector is strictly smaller than the
    /// corresponding component of the given vector.
    ///
    /// Together with [`greater_than`](Self::greater_than) and friends this
    /// forms a strict partial order: two vectors may be incomparable.
    ///
    /// # Errors
    /// [`VectorError::LengthMismatch`] if the vectors have different
    /// lengths.
    pub fn less_than(&self, other: &Self) -> Result<bool> {
        self.compare_componentwise(other, |a, b| a < b)
    }

    /// Whether every component of this vector is strictly greater than the
    /// corresponding component of the given vector.
    ///
    /// # Errors
    /// [`VectorError::LengthMismatch`] if the vectors have different
    /// lengths.
    pub fn greater_than(&self, other: &Self) -> Result<bool> {
        self.compare_componentwise(other, |a, b| a > b)
    }

    /// Whether every component of this vector is smaller than or equal to
    /// the corresponding component of the given vector.
    ///
    /// # Errors
    /// [`VectorError::LengthMismatch`] if the vectors have different
    /// lengths.
    pub fn less_or_equal(&self, other: &Self) -> Result<bool> {
        self.compare_componentwise(other, |a, b| a <= b)
    }

    /// Whether every component of this vector is greater than or equal to
    /// the corresponding component of the given vector.
    ///
    /// # Errors
    /// [`VectorError::LengthMismatch`] if the vectors have different
    /// lengths.
    pub fn greater_or_equal(&self, other: &Self) -> Result<bool> {
        self.compare_componentwise(other, |a, b| a >= b)
    }

    /// Computes the Euclidean norm of the vector.
    ///
    /// The empty vector has magnitude zero.
    pub fn magnitude(&self) -> f64 {
        self.components()
            .iter()
            .map(|component| component * component)
            .sum::<f64>()
            .sqrt()
    }

    /// Computes the Manhattan norm of the vector (the sum of the absolute
    /// values of the components).
    pub fn manhattan_magnitude(&self) -> f64 {
        self.components().iter().map(|component| component.abs()).sum()
    }

    /// Divides every component by the vector's magnitude in place and
    /// returns the receiver for chaining.
    ///
    /// Normalizing the zero vector divides by zero and yields NaN
    /// components; this case is deliberately not guarded.
    pub fn normalize_mut(&mut self) -> &mut Self {
        self.div_mut(self.magnitude())
    }

    /// Returns this vector divided by its magnitude.
    ///
    /// Normalizing the zero vector divides by zero and yields NaN
    /// components; this case is deliberately not guarded.
    pub fn normalized(&self) -> Self {
        let mut result = *self;
        result.normalize_mut();
        result
    }

    /// Snaps this 2-D vector to the nearest cardinal axis in place and
    /// returns the receiver for chaining.
    ///
    /// The component with the strictly larger absolute value is set to one
    /// with its sign preserved and the other component is zeroed. When the
    /// absolute values are equal, the tie goes to the second component as
    /// long as it is nonzero.
    ///
    /// # Errors
    /// - [`VectorError::NotTwoDimensional`] if the vector is not 2-D.
    /// - [`VectorError::CannotNormalizeZeroVector`] for the zero vector,
    ///   which has no nearest axis.
    pub fn normalize_to_axis_mut(&mut self) -> Result<&mut Self> {
        if self.len != 2 {
            return Err(VectorError::NotTwoDimensional { len: self.len });
        }
        let x = self.components[0];
        let y = self.components[1];

        if x.abs() > y.abs() {
            self.components[0] = 1.0_f64.copysign(x);
            self.components[1] = 0.0;
        } else if y != 0.0 {
            self.components[0] = 0.0;
            self.components[1] = 1.0_f64.copysign(y);
        } else {
            return Err(VectorError::CannotNormalizeZeroVector);
        }
        Ok(self)
    }

    /// Returns this 2-D vector snapped to the nearest cardinal axis.
    ///
    /// See [`normalize_to_axis_mut`](Self::normalize_to_axis_mut) for the
    /// snapping policy.
    ///
    /// # Errors
    /// - [`VectorError::NotTwoDimensional`] if the vector is not 2-D.
    /// - [`VectorError::CannotNormalizeZeroVector`] for the zero vector.
    pub fn normalized_to_axis(&self) -> Result<Self> {
        let mut result = *self;
        result.normalize_to_axis_mut()?;
        Ok(result)
    }

    /// Replaces every component with the result of applying the given
    /// function to it, in positional order, and returns the receiver for
    /// chaining.
    pub fn map_mut(&mut self, mut f: impl FnMut(f64) -> f64) -> &mut Self {
        for component in &mut self.components[..self.len] {
            *component = f(*component);
        }
        self
    }

    /// Returns this vector with every component replaced by the result of
    /// applying the given function to it, in positional order.
    pub fn mapped(&self, f: impl FnMut(f64) -> f64) -> Self {
        let mut result = *self;
        result.map_mut(f);
        result
    }

    /// Replaces every component with the result of applying the given
    /// fallible function to it, in positional order, and returns the
    /// receiver for chaining.
    ///
    /// If the function fails, its error is propagated to the caller and
    /// iteration stops. Components already transformed at that point stay
    /// transformed; the operation is not atomic.
    pub fn try_map_mut<E>(
        &mut self,
        mut f: impl FnMut(f64) -> std::result::Result<f64, E>,
    ) -> std::result::Result<&mut Self, E> {
        for component in &mut self.components[..self.len] {
            *component = f(*component)?;
        }
        Ok(self)
    }

    /// Returns this vector with every component replaced by the result of
    /// applying the given fallible function to it, in positional order.
    ///
    /// If the function fails, its error is propagated to the caller and the
    /// receiver is left untouched.
    pub fn try_mapped<E>(
        &self,
        f: impl FnMut(f64) -> std::result::Result<f64, E>,
    ) -> std::result::Result<Self, E> {
        let mut result = *self;
        result.try_map_mut(f)?;
        Ok(result)
    }

    fn compare_componentwise(
        &self,
        other: &Self,
        relation: impl Fn(f64, f64) -> bool,
    ) -> Result<bool> {
        self.check_same_length(other)?;
        Ok(self
            .components()
            .iter()
            .zip(other.components())
            .all(|(&a, &b)| relation(a, b)))
    }

    fn check_same_length(&self, other: &Self) -> Result<()> {
        if self.len != other.len {
            return Err(VectorError::LengthMismatch {
                len: self.len,
                other_len: other.len,
            });
        }
        Ok(())
    }
}

impl PartialEq for Vector {
    /// Vectors are equal when their lengths match and every pair of
    /// corresponding components compares exactly equal (no epsilon
    /// tolerance). Vectors of different lengths are unequal; this never
    /// errors.
    fn eq(&self, other: &Self) -> bool {
        self.components() == other.components()
    }
}

impl std::ops::Neg for Vector {
    type Output = Self;

    fn neg(self) -> Self {
        self.negated()
    }
}

impl fmt::Display for Vector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for (i, component) in self.components().iter().enumerate() {
            if i > 0 {
                write!(f, "; ")?;
            }
            write!(f, "{component}")?;
        }
        write!(f, "}}")
    }
}

impl AbsDiffEq for Vector {
    type Epsilon = f64;

    fn default_epsilon() -> f64 {
        f64::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: f64) -> bool {
        self.len == other.len
            && self
                .components()
                .iter()
                .zip(other.components())
                .all(|(a, b)| a.abs_diff_eq(b, epsilon))
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Vector {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_seq(self.components())
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Vector {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let components = Vec::<f64>::deserialize(deserializer)?;
        Self::new(&components).map_err(serde::de::Error::custom)
    }
}

#[cfg(feature = "arbitrary")]
impl<'a> arbitrary::Arbitrary<'a> for Vector {
    fn arbitrary(u: &mut arbitrary::Unstructured<'a>) -> arbitrary::Result<Self> {
        let len = u.int_in_range(0..=MAX_COMPONENTS)?;
        let mut components = [0.0; MAX_COMPONENTS];
        for component in components.iter_mut().take(len) {
            *component = f64::arbitrary(u)?;
        }
        Ok(Self { components, len })
    }
}

//! Crate-local utility macros.

/// Creates a [`Vector`](crate::Vector) from a list of components.
///
/// The component count is checked at compile time, so a pattern with more
/// than four components fails to compile.
///
/// ```
/// use varivec::vector;
///
/// let v = vector![1.0, 2.0, 3.0];
/// assert_eq!(v.len(), 3);
/// assert_eq!(v.component(1), Ok(2.0));
/// ```
#[macro_export]
macro_rules! vector {
    ($($component:expr),* $(,)?) => {
        $crate::Vector::from_array([$($component),*])
    };
}

#[cfg(test)]
mod tests {
    use crate::Vector;

    #[test]
    fn macro_builds_the_same_vector_as_new() {
        assert_eq!(vector![1.0, 2.0], Vector::new(&[1.0, 2.0]).unwrap());
        assert_eq!(vector![0.5], Vector::new(&[0.5]).unwrap());
    }

    #[test]
    fn macro_accepts_a_trailing_comma() {
        assert_eq!(vector![1.0, 2.0,], Vector::new(&[1.0, 2.0]).unwrap());
    }
}

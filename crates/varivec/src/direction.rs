//! Cardinal directions and the shared vector constants.
//!
//! The coordinate convention is screen space: the y-axis grows downward,
//! so [`Direction::Up`] is `(0, -1)` and [`Direction::Down`] is `(0, 1)`.

use crate::Vector;

/// One of the four cardinal directions in screen space.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Towards negative y: `(0, -1)`.
    Up,
    /// Towards positive y: `(0, 1)`.
    Down,
    /// Towards negative x: `(-1, 0)`.
    Left,
    /// Towards positive x: `(1, 0)`.
    Right,
}

impl Direction {
    /// All cardinal directions, in the canonical order.
    pub const ALL: [Self; 4] = [Self::Up, Self::Down, Self::Left, Self::Right];

    /// The lowercase name of the direction.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Up => "up",
            Self::Down => "down",
            Self::Left => "left",
            Self::Right => "right",
        }
    }

    /// The unit vector pointing in this direction.
    pub const fn unit_vector(self) -> Vector {
        match self {
            Self::Up => Vector::UP,
            Self::Down => Vector::DOWN,
            Self::Left => Vector::LEFT,
            Self::Right => Vector::RIGHT,
        }
    }

    /// Determines the cardinal direction the given vector points in, if
    /// any.
    ///
    /// Only 2-D vectors that are exactly one of the four cardinal unit
    /// vectors have a direction; every other vector (including every vector
    /// that is not 2-D) yields `None`. This is a value result, not an
    /// error.
    pub fn from_vector(vector: &Vector) -> Option<Self> {
        if vector.len() != 2 {
            return None;
        }
        let [x, y] = *vector.components().first_chunk()?;
        if x == 0.0 {
            if y == 1.0 {
                return Some(Self::Down);
            }
            if y == -1.0 {
                return Some(Self::Up);
            }
        } else if y == 0.0 {
            if x == 1.0 {
                return Some(Self::Right);
            }
            if x == -1.0 {
                return Some(Self::Left);
            }
        }
        None
    }
}

impl Vector {
    /// The 2-D zero vector.
    pub const ZERO: Self = Self::from_array([0.0, 0.0]);

    /// The 2-D vector with both components one.
    pub const ONE: Self = Self::from_array([1.0, 1.0]);

    /// The color white as a 3-component vector.
    pub const WHITE: Self = Self::from_array([1.0, 1.0, 1.0]);

    /// The color black as a 3-component vector.
    pub const BLACK: Self = Self::from_array([0.0, 0.0, 0.0]);

    /// The unit vector pointing up in screen space.
    pub const UP: Self = Self::from_array([0.0, -1.0]);

    /// The unit vector pointing down in screen space.
    pub const DOWN: Self = Self::from_array([0.0, 1.0]);

    /// The unit vector pointing left.
    pub const LEFT: Self = Self::from_array([-1.0, 0.0]);

    /// The unit vector pointing right.
    pub const RIGHT: Self = Self::from_array([1.0, 0.0]);

    /// The four cardinal direction vectors, in the canonical order.
    pub const CARDINAL_DIRECTIONS: [Self; 4] = [Self::UP, Self::DOWN, Self::LEFT, Self::RIGHT];

    /// The four cardinal direction vectors followed by the four diagonals
    /// (up-left, up-right, down-left, down-right).
    pub const EXTENDED_DIRECTIONS: [Self; 8] = [
        Self::UP,
        Self::DOWN,
        Self::LEFT,
        Self::RIGHT,
        Self::from_array([-1.0, -1.0]),
        Self::from_array([1.0, -1.0]),
        Self::from_array([-1.0, 1.0]),
        Self::from_array([1.0, 1.0]),
    ];

    /// The name of the cardinal direction this vector points in, if any.
    ///
    /// See [`Direction::from_vector`].
    pub fn direction_name(&self) -> Option<&'static str> {
        Direction::from_vector(self).map(Direction::name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cardinal_unit_vectors_have_their_names() {
        assert_eq!(Vector::DOWN.direction_name(), Some("down"));
        assert_eq!(Vector::UP.direction_name(), Some("up"));
        assert_eq!(Vector::RIGHT.direction_name(), Some("right"));
        assert_eq!(Vector::LEFT.direction_name(), Some("left"));
    }

    #[test]
    fn down_is_positive_y() {
        assert_eq!(
            Vector::new(&[0.0, 1.0]).unwrap().direction_name(),
            Some("down")
        );
    }

    #[test]
    fn non_unit_vectors_have_no_direction_name() {
        assert_eq!(Vector::new(&[2.0, 0.0]).unwrap().direction_name(), None);
        assert_eq!(Vector::new(&[1.0, 1.0]).unwrap().direction_name(), None);
        assert_eq!(Vector::ZERO.direction_name(), None);
    }

    #[test]
    fn non_two_dimensional_vectors_have_no_direction_name() {
        assert_eq!(
            Vector::new(&[0.0, 1.0, 0.0]).unwrap().direction_name(),
            None
        );
        assert_eq!(Vector::new(&[1.0]).unwrap().direction_name(), None);
        assert_eq!(Vector::new(&[]).unwrap().direction_name(), None);
    }

    #[test]
    fn direction_enum_round_trips_through_its_unit_vector() {
        for direction in Direction::ALL {
            assert_eq!(Direction::from_vector(&direction.unit_vector()), Some(direction));
            assert_eq!(direction.unit_vector().direction_name(), Some(direction.name()));
        }
    }

    #[test]
    fn constants_have_their_documented_values() {
        assert_eq!(Vector::ZERO, Vector::new(&[0.0, 0.0]).unwrap());
        assert_eq!(Vector::ONE, Vector::new(&[1.0, 1.0]).unwrap());
        assert_eq!(Vector::WHITE, Vector::new(&[1.0, 1.0, 1.0]).unwrap());
        assert_eq!(Vector::BLACK, Vector::new(&[0.0, 0.0, 0.0]).unwrap());
    }

    #[test]
    fn extended_directions_start_with_the_cardinals() {
        assert_eq!(
            &Vector::EXTENDED_DIRECTIONS[..4],
            &Vector::CARDINAL_DIRECTIONS
        );
        // The diagonals follow in up-left, up-right, down-left, down-right
        // order.
        assert_eq!(
            Vector::EXTENDED_DIRECTIONS[4],
            Vector::new(&[-1.0, -1.0]).unwrap()
        );
        assert_eq!(
            Vector::EXTENDED_DIRECTIONS[7],
            Vector::new(&[1.0, 1.0]).unwrap()
        );
    }

    #[test]
    fn constants_are_templates_that_copy_before_mutation() {
        let mut moving = Vector::UP;
        moving.mul_mut(3.0);

        assert_eq!(moving, Vector::new(&[0.0, -3.0]).unwrap());
        assert_eq!(Vector::UP, Vector::new(&[0.0, -1.0]).unwrap());
    }
}

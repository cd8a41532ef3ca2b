use derive_more::{Add, Sub, Mul, Div, MulAssign, DivAssign};

use super::point::Point2D;


#[derive(
    Copy, Clone,
    PartialEq, Add, Sub, Mul, Div, MulAssign, DivAssign,
    Debug, Default
)]
pub struct Vector2D {
    pub initial_point: Point2D,
    pub terminal_point: Point2D
}

impl Vector2D {
    #[must_use]
    pub fn new(initial_point: Point2D, terminal_point: Point2D) -> Self {
        Self { initial_point, terminal_point }
    }

    #[must_use]
    pub fn displacement(&self) -> Point2D {
        self.terminal_point - self.initial_point
    }

    #[must_use]
    pub fn size(&self) -> f32 {
        let displacement = self.displacement();

        (
            displacement.x.powi(2)
            + displacement.y.powi(2)
        ).sqrt()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_vector_as_default() {
        let default_vector = Vector2D::default();

        assert_eq!(default_vector.initial_point.x, 0.0);
        assert_eq!(default_vector.initial_point.y, 0.0);
        assert_eq!(default_vector.terminal_point.x, 0.0);
        assert_eq!(default_vector.terminal_point.y, 0.0);
        assert_eq!(default_vector.size(), 0.0);
    }

    #[test]
    fn displacement_and_size() {
        let vector = Vector2D::new(
            Point2D::new(1.0, 2.0),
            Point2D::new(4.0, 6.0)
        );

        assert_eq!(vector.displacement(), Point2D::new(3.0, 4.0));
        assert_eq!(vector.size(), 5.0);
    }
}

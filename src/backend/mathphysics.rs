pub use point::Point2D;
pub use vector::Vector2D;


pub mod point;
pub mod vector;


pub type Meter = f32;


pub trait Position {
    fn position(&self) -> &Point2D;

    fn distance_to<P: Position>(&self, other: &P) -> Meter {
        let vector = Vector2D::new(*self.position(), *other.position());

        vector.size()
    }

    /// # Panics
    ///
    /// Will panic if distances are not comparable.
    fn cmp_by_distance_to<P: Position>(
        &self,
        other: &P,
        destination: &P
    ) -> std::cmp::Ordering {
        let distance_x = self.distance_to(destination);
        let distance_y = other.distance_to(destination);

        distance_x
            .partial_cmp(&distance_y)
            .expect("Failed to compare f32 values")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ORIGIN: Point2D = Point2D { x: 0.0, y: 0.0 };

    #[test]
    fn distance_to_another_point() {
        let some_point = Point2D::new(3.0, 4.0);

        assert_eq!(0.0, ORIGIN.distance_to(&ORIGIN));
        assert_eq!(5.0, ORIGIN.distance_to(&some_point));
    }

    #[test]
    fn comparison_by_distance() {
        let point_a = Point2D::new(5.0, 0.0);
        let point_b = Point2D::new(0.0, -5.0);

        assert_eq!(
            7.0,
            point_a.distance_to(&point_b).round()
        );
        assert_eq!(
            ORIGIN.distance_to(&point_a),
            point_a.distance_to(&ORIGIN)
        );
        assert_eq!(
            ORIGIN.distance_to(&point_a),
            point_b.distance_to(&ORIGIN)
        );
        assert_eq!(
            std::cmp::Ordering::Equal,
            point_a.cmp_by_distance_to(&point_b, &ORIGIN)
        );
    }
}

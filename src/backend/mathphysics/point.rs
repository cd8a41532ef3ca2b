use derive_more::{Add, Sub, Mul, Div, MulAssign, DivAssign};

use super::Position;


#[derive(
    Copy, Clone,
    PartialEq, Add, Sub, Mul, Div, MulAssign, DivAssign,
    Debug, Default
)]
pub struct Point2D {
    pub x: f32,
    pub y: f32,
}

impl Point2D {
    #[must_use]
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

impl From<(f32, f32)> for Point2D {
    fn from(value: (f32, f32)) -> Self {
        Self {
            x: value.0,
            y: value.1,
        }
    }
}

impl Position for Point2D {
    fn position(&self) -> &Self {
        self
    }
}

pub mod span;

/// 2D point type. `x` grows eastward, `y` grows southward.
pub type Point2 = nalgebra::Point2<f64>;

/// 2D vector type.
pub type Vector2 = nalgebra::Vector2<f64>;

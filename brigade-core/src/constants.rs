/// Engine version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Lower bound of the client feedback scale.
pub const FEEDBACK_MIN: f64 = 1.0;

/// Upper bound of the client feedback scale.
pub const FEEDBACK_MAX: f64 = 5.0;

/// Tolerance for weight-vector normalization checks.
pub const WEIGHT_SUM_TOLERANCE: f64 = 1e-6;

/// Number of courses in every menu (starter, main, dessert).
pub const MENU_COURSES: usize = 3;

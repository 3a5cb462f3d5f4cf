//! Result type alias for kit operations.

use super::kit_error::KitError;

/// Type alias for Results using KitError.
///
/// # Example
///
/// ```ignore
/// use swipekit::error::KitResult;
///
/// fn load() -> KitResult<CarouselConfig> {
///     CarouselConfig::from_json_file("carousel.json")
/// }
/// ```
pub type KitResult<T> = Result<T, KitError>;

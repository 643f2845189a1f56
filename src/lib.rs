//! # parcel-sort - package handling classification
//!
//! Sorts a package into one of three handling categories from its width,
//! height, length (cm) and mass (kg).
//!
//! ## Rules
//!
//! - **Bulky**: volume >= 1,000,000 cm³, or any dimension >= 150 cm
//! - **Heavy**: mass >= 20 kg
//! - **STANDARD**: neither bulky nor heavy
//! - **SPECIAL**: bulky or heavy, but not both
//! - **REJECTED**: bulky and heavy
//!
//! Inputs may be native numbers or numeric strings. Non-numeric input is a
//! type error; zero, negative, NaN or infinite input is a value error.
//!
//! ## Modules
//!
//! - [`classifier`] - The classification function and validated [`Package`]
//! - [`measure`] - Raw inputs and their coercion to floats
//! - [`category`] - Handling category labels
//! - [`error`] - Error kinds reported to callers
//! - [`thresholds`] - Fixed thresholds
//! - [`config`] - Settings for the command-line binary
//! - [`logging`] - Tracing setup for the command-line binary
//!
//! ## Example
//!
//! ```
//! use parcel_sort::{classify, Category, ErrorKind};
//!
//! assert_eq!(classify(150, 150, 1, 20).unwrap(), Category::Rejected);
//! assert_eq!(classify("10", "10", "10", "20").unwrap(), Category::Special);
//!
//! let err = classify(10, 10, 10, 0).unwrap_err();
//! assert_eq!(err.kind(), ErrorKind::Value);
//! ```

pub mod category;
pub mod classifier;
pub mod config;
pub mod error;
pub mod logging;
pub mod measure;
pub mod thresholds;

pub use category::Category;
pub use classifier::{classify, Package};
pub use error::{ErrorKind, Field, SortError};
pub use measure::Measure;
pub use thresholds::{
    BULKY_DIMENSION_THRESHOLD_CM, BULKY_VOLUME_THRESHOLD_CM3, HEAVY_MASS_THRESHOLD_KG,
};

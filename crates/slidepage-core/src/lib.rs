//! # slidepage-core - Core Domain Types
//!
//! Foundation crate for SlidePage. Provides the error type, logging
//! bootstrap and the small set of navigation types shared by the state
//! machine and the terminal front end.
//!
//! This crate has **zero internal dependencies**.
//!
//! ## Public API
//!
//! ### Domain Types (`types`)
//! - [`Direction`] - Forward/backward transition direction and its animation slot
//! - [`SwipeDirection`] - The four recognised swipe gestures
//! - [`Intent`] - Normalized navigation request (advance, retreat, goto)
//! - [`SlidePhase`] - Idle vs. transitioning
//!
//! ### Error Handling (`error`)
//! - [`Error`] - Custom error enum with `fatal` vs `recoverable` classification
//! - [`Result`] - Type alias for `std::result::Result<T, Error>`
//! - [`ResultExt`] - Extension trait for adding error context
//!
//! ## Prelude
//!
//! Import commonly used types with:
//! ```rust
//! use slidepage_core::prelude::*;
//! ```

pub mod error;
pub mod logging;
pub mod prelude;
pub mod types;

// Re-export commonly used types at crate root for convenience
pub use error::{Error, Result, ResultExt};
pub use types::{Direction, Intent, SlidePhase, SwipeDirection};

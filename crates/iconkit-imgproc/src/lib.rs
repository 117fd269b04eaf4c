#![deny(missing_docs)]
#![doc = env!("CARGO_PKG_DESCRIPTION")]

/// background to transparency conversion module.
pub mod background;

/// color transformations module.
pub mod color;

/// dominant color estimation module.
pub mod dominant;

/// utilities for interpolation.
pub mod interpolation;

/// module containing parallization utilities.
pub mod parallel;

/// utility functions for resizing images.
pub mod resize;

/// corner transparency inspection module.
pub mod transparency;

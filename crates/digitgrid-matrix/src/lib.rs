//! Digit-stream-to-matrix pipeline.
//!
//! Raw items flow through four stages, orchestrated by [`MatrixPipeline`]:
//! [`Sanitizer`] → [`digits`] → [`dimensions`] → [`MatrixPopulator`].
//! The [`query`] module carries the small filtering and frequency helpers
//! that sit next to the pipeline.

pub mod digits;
pub mod dimensions;
pub mod pipeline;
pub mod populator;
pub mod query;
pub mod sanitizer;
pub mod types;

pub use dimensions::{DimensionRule, LengthFilter};
pub use pipeline::{to_matrices, to_matrices_where, MatrixPipeline, MatrixStream, Predicate};
pub use populator::MatrixPopulator;
pub use sanitizer::Sanitizer;
pub use types::{Dimensions, Matrix};

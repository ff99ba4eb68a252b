//! Query helpers that sit beside the matrix pipeline.
//!
//! Eager, iterator-based filters and aggregations over plain collections:
//! numeric filtering over a tagged [`Value`], parity grouping of inner
//! sequences, Hamming-distance string filtering, and mode selection.

pub mod distance;
pub mod frequency;
pub mod parity;
pub mod value;

pub use distance::{hamming_distance, within_distance};
pub use frequency::{most_frequent, most_frequent_objects};
pub use parity::{even_length, partition_by_parity};
pub use value::{filter_numerics, Value};

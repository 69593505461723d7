//! Setup workflows
//!
//! Linear sequences that combine config emission with docker and libdoc runs.
//! Each step must succeed before the next one starts; nothing is retried.

pub mod docgen;
pub mod fast_start;

pub use docgen::{DocFailure, DocFormat, DocGenReport, DocGenerator, GeneratedDoc};
pub use fast_start::{FastStart, FastStartReport, Step};

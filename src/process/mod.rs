//! External process invocation
//!
//! Docker and libdoc are driven through the [`ProcessRunner`] trait so that the
//! sequencing logic can be exercised without spawning real processes.

pub mod runner;

pub use runner::{check, ExitStatus, Invocation, ProcessRunner, SystemRunner};

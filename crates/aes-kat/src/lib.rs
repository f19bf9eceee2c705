//! Known-answer verification for the `aes-core` AES-128 implementation.
//!
//! Cases are key/input/expected triples in hex. They come from the built-in
//! published vectors or from TOML files, run through [`run_all`], and end up in
//! a [`Report`] whose [`Report::success`] drives the process exit status.

#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod builtin;
mod error;
mod file;
mod runner;
mod vector;

pub use crate::builtin::builtin_vectors;
pub use crate::error::{Error, Result};
pub use crate::file::VectorFile;
pub use crate::runner::{run_all, run_case, CaseOutcome, Report};
pub use crate::vector::{Direction, KnownAnswer};

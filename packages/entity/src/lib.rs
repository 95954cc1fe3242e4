//! Matrix room event envelopes and the typed contents a timeline renders.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]

pub mod error;
pub mod types;

pub use error::*;
pub use types::*;

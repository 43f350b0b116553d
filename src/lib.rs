//! Draws samples from a randomly parameterized categorical distribution and
//! reports the likelihoods the distribution assigns to them.

pub mod args;
pub mod demo;
pub mod error;
pub mod logging;
pub mod probability_vector;
pub mod sampling;
pub mod variables;

pub use error::{Result, SamplerError};

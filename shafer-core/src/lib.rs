//! # shafer-core
//!
//! Foundation crate for Dempster-Shafer evidence fusion.
//! Defines the frame of discernment, the bitmask subset codec, mass functions
//! and their validation, plus errors, config, constants, and tracing setup.
//! Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod frame;
pub mod mass;
pub mod tracing;

// Re-export the most commonly used types at the crate root.
pub use config::ShaferConfig;
pub use errors::{ShaferError, ShaferResult};
pub use frame::{Frame, Subset};
pub use mass::{MassFunction, RawMass, Reliability};

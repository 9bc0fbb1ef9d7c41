//! Core types for building parametrized quantum layers
//!
//! This crate provides the fundamental types shared by the layer and gate
//! crates:
//! - [`WireId`]: Type-safe wire (qubit or photonic mode) addressing
//! - [`Gate`]: Trait for unitary operations with matrix and inverse
//! - [`GateOp`]: A gate bound to an ordered wire group
//! - [`Parameter`]: Trainable or data-encoded gate parameter
//!
//! # Example
//! ```
//! use varq_core::WireId;
//!
//! let w0 = WireId::new(0);
//! assert_eq!(w0.index(), 0);
//! ```

pub mod error;
pub mod gate;
pub mod parameter;
pub mod wire;

// Re-exports for convenience
pub use error::LayerError;
pub use gate::{Dagger, Gate, GateOp};
pub use num_complex::Complex64;
pub use parameter::Parameter;
pub use wire::WireId;

/// Type alias for results in varq
pub type Result<T> = std::result::Result<T, LayerError>;

//! Gate matrices and the concrete gate catalog for varq
//!
//! Three modules:
//! - [`matrices`]: constant matrices and parametrized matrix generators
//! - [`matrix_ops`]: tensor products, embeddings and matrix utilities
//! - [`standard`]: concrete [`varq_core::Gate`] implementations

pub mod matrices;
pub mod matrix_ops;
pub mod standard;

pub use standard::{Cnot, Hadamard, Mzi, PauliX, PauliY, PauliZ, PhaseShifter, Rx, Ry, Rz, U3};

//! Parametrized quantum layers over a fixed wire set
//!
//! A [`Layer`] is an ordered, fixed-arity sequence of gate operations over
//! a declared number of wires. This crate provides:
//! - The layer abstraction with default wire assignment, arity validation,
//!   exact unitary assembly and deep-copy inversion
//! - The concrete layer catalog: Pauli/Hadamard families, rotation families,
//!   the three-parameter U3 family and the CNOT family
//! - The ring wiring generator for cyclic two-wire connectivity
//! - The Clements interferometer mesh with its angle-dictionary translation
//! - The Pauli-string [`Observable`] layer
//!
//! # Example
//! ```
//! use varq_layers::Layer;
//!
//! let layer = Layer::h_layer(3, None).unwrap();
//! assert_eq!(layer.len(), 3);
//! let u = layer.unitary().unwrap();
//! assert_eq!(u.len(), 64); // 8x8
//! ```

pub mod double;
pub mod layer;
pub mod mesh;
pub mod observable;
pub mod ring;
pub mod single;

pub use layer::Layer;
pub use mesh::{Angle, AngleDict, ClementsMesh};
pub use observable::{Observable, PauliBasis};

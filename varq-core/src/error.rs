//! Error types for varq

use crate::WireId;
use thiserror::Error;

/// Errors that can occur while constructing or evaluating layers
///
/// Configuration errors are detected eagerly at construction time and are
/// fatal to the constructing call; no partial layer is ever returned.
#[derive(Debug, Error)]
pub enum LayerError {
    /// Wire index out of range for the declared wire count
    #[error("Invalid wire index {0}: layer has only {1} wires")]
    InvalidWire(usize, usize),

    /// A wire group with the wrong number of wires for its layer
    #[error("Layer '{layer}' requires wire groups of {expected} wires, but a group of {actual} was supplied")]
    WireArity {
        layer: String,
        expected: usize,
        actual: usize,
    },

    /// The same wire appears twice in one operation
    #[error("Duplicate wire {0} in gate operation")]
    DuplicateWire(WireId),

    /// Unitary requested on a layer holding no operations
    #[error("Layer '{0}' holds no quantum gates")]
    EmptyLayer(String),

    /// Malformed ring bounds
    #[error("Ring bounds [{low}, {high}] are invalid for {num_wires} wires (need low < high < num_wires)")]
    InvalidRange {
        low: usize,
        high: usize,
        num_wires: usize,
    },

    /// A Clements mesh needs at least two modes
    #[error("Clements mesh needs at least 2 modes, got {0}")]
    MeshSize(usize),

    /// Injected parameter slice does not match the layer's slot count
    #[error("Layer '{layer}' expects {expected} input parameters, but {actual} were supplied")]
    InputLength {
        layer: String,
        expected: usize,
        actual: usize,
    },

    /// Per-wire basis string of mismatched length
    #[error("The number of wires ({expected}) is not equal to the number of bases ({actual})")]
    BasisLength { expected: usize, actual: usize },

    /// Unrecognized measurement-basis character
    #[error("Illegal measurement basis '{0}', expected one of 'x', 'y', 'z'")]
    InvalidBasis(char),

    /// Missing entry in an angle dictionary during flattening
    #[error("Angle dictionary is missing the entry for wire {wire}, column {column}")]
    MissingAngle { wire: usize, column: usize },

    /// Attempt to mutate a data-encoded parameter
    #[error("Cannot modify encoded parameter{0}")]
    EncodedParameter(String),
}

impl LayerError {
    /// Create an invalid wire error
    pub fn invalid_wire(wire: usize, num_wires: usize) -> Self {
        Self::InvalidWire(wire, num_wires)
    }

    /// Create a wire-arity error
    pub fn wire_arity(layer: impl Into<String>, expected: usize, actual: usize) -> Self {
        Self::WireArity {
            layer: layer.into(),
            expected,
            actual,
        }
    }

    /// Create an input-length error
    pub fn input_length(layer: impl Into<String>, expected: usize, actual: usize) -> Self {
        Self::InputLength {
            layer: layer.into(),
            expected,
            actual,
        }
    }

    /// Create a missing-angle error
    pub fn missing_angle(wire: usize, column: usize) -> Self {
        Self::MissingAngle { wire, column }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_wire_error() {
        let err = LayerError::invalid_wire(5, 3);
        let msg = format!("{}", err);
        assert!(msg.contains("5"));
        assert!(msg.contains("3"));
    }

    #[test]
    fn test_wire_arity_error() {
        let err = LayerError::wire_arity("RxLayer", 1, 2);
        let msg = format!("{}", err);
        assert!(msg.contains("RxLayer"));
        assert!(msg.contains("1"));
        assert!(msg.contains("2"));
    }

    #[test]
    fn test_missing_angle_error() {
        let err = LayerError::missing_angle(2, 3);
        let msg = format!("{}", err);
        assert!(msg.contains("wire 2"));
        assert!(msg.contains("column 3"));
    }

    #[test]
    fn test_empty_layer_error() {
        let err = LayerError::EmptyLayer("XLayer".to_string());
        assert!(format!("{}", err).contains("no quantum gates"));
    }
}

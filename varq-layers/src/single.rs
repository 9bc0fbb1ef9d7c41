//! The single-wire layer catalog
//!
//! Fixed families (Pauli X/Y/Z, Hadamard) carry zero trainable parameters.
//! Rotation families accept an optional flat input slice: when present it
//! is sliced per operation and injected as encoded parameters, when absent
//! each gate self-initializes a trainable angle.

use crate::layer::{resolve_wire_groups, Layer};
use std::sync::Arc;
use varq_core::{Gate, GateOp, LayerError, Result};
use varq_gates::standard::{Hadamard, PauliX, PauliY, PauliZ, Rx, Ry, Rz, U3};

/// Build a layer of identical parameter-free single-wire gates.
fn fixed_single_layer(
    name: &str,
    num_wires: usize,
    wires: Option<Vec<Vec<usize>>>,
    gate: impl Fn() -> Arc<dyn Gate>,
) -> Result<Layer> {
    let groups = resolve_wire_groups(name, num_wires, 1, wires)?;
    let mut ops = Vec::with_capacity(groups.len());
    for group in &groups {
        ops.push(GateOp::new(gate(), group)?);
    }
    Ok(Layer::from_ops(name, num_wires, ops))
}

/// Build a layer of one-angle rotation gates, injecting `inputs` when given.
fn rotation_single_layer(
    name: &str,
    num_wires: usize,
    wires: Option<Vec<Vec<usize>>>,
    inputs: Option<&[f64]>,
    encoded: fn(f64) -> Arc<dyn Gate>,
    trainable: fn() -> Arc<dyn Gate>,
) -> Result<Layer> {
    let groups = resolve_wire_groups(name, num_wires, 1, wires)?;
    if let Some(values) = inputs {
        if values.len() != groups.len() {
            return Err(LayerError::input_length(name, groups.len(), values.len()));
        }
    }

    let mut ops = Vec::with_capacity(groups.len());
    for (i, group) in groups.iter().enumerate() {
        let gate = match inputs {
            Some(values) => encoded(values[i]),
            None => trainable(),
        };
        ops.push(GateOp::new(gate, group)?);
    }
    Ok(Layer::from_ops(name, num_wires, ops))
}

impl Layer {
    /// A layer of Pauli-X gates
    pub fn x_layer(num_wires: usize, wires: Option<Vec<Vec<usize>>>) -> Result<Layer> {
        fixed_single_layer("XLayer", num_wires, wires, || Arc::new(PauliX))
    }

    /// A layer of Pauli-Y gates
    pub fn y_layer(num_wires: usize, wires: Option<Vec<Vec<usize>>>) -> Result<Layer> {
        fixed_single_layer("YLayer", num_wires, wires, || Arc::new(PauliY))
    }

    /// A layer of Pauli-Z gates
    pub fn z_layer(num_wires: usize, wires: Option<Vec<Vec<usize>>>) -> Result<Layer> {
        fixed_single_layer("ZLayer", num_wires, wires, || Arc::new(PauliZ))
    }

    /// A layer of Hadamard gates
    pub fn h_layer(num_wires: usize, wires: Option<Vec<Vec<usize>>>) -> Result<Layer> {
        fixed_single_layer("HLayer", num_wires, wires, || Arc::new(Hadamard))
    }

    /// A layer of Rx gates, one angle slot per operation
    pub fn rx_layer(
        num_wires: usize,
        wires: Option<Vec<Vec<usize>>>,
        inputs: Option<&[f64]>,
    ) -> Result<Layer> {
        rotation_single_layer(
            "RxLayer",
            num_wires,
            wires,
            inputs,
            |theta| Arc::new(Rx::encoded(theta)),
            || Arc::new(Rx::trainable()),
        )
    }

    /// A layer of Ry gates, one angle slot per operation
    pub fn ry_layer(
        num_wires: usize,
        wires: Option<Vec<Vec<usize>>>,
        inputs: Option<&[f64]>,
    ) -> Result<Layer> {
        rotation_single_layer(
            "RyLayer",
            num_wires,
            wires,
            inputs,
            |theta| Arc::new(Ry::encoded(theta)),
            || Arc::new(Ry::trainable()),
        )
    }

    /// A layer of Rz gates, one angle slot per operation
    pub fn rz_layer(
        num_wires: usize,
        wires: Option<Vec<Vec<usize>>>,
        inputs: Option<&[f64]>,
    ) -> Result<Layer> {
        rotation_single_layer(
            "RzLayer",
            num_wires,
            wires,
            inputs,
            |theta| Arc::new(Rz::encoded(theta)),
            || Arc::new(Rz::trainable()),
        )
    }

    /// A layer of U3 gates, three contiguous angle slots per operation
    pub fn u3_layer(
        num_wires: usize,
        wires: Option<Vec<Vec<usize>>>,
        inputs: Option<&[f64]>,
    ) -> Result<Layer> {
        let groups = resolve_wire_groups("U3Layer", num_wires, 1, wires)?;
        if let Some(values) = inputs {
            if values.len() != 3 * groups.len() {
                return Err(LayerError::input_length(
                    "U3Layer",
                    3 * groups.len(),
                    values.len(),
                ));
            }
        }

        let mut ops = Vec::with_capacity(groups.len());
        for (i, group) in groups.iter().enumerate() {
            let gate: Arc<dyn Gate> = match inputs {
                Some(values) => {
                    let angles = &values[3 * i..3 * i + 3];
                    Arc::new(U3::encoded(angles[0], angles[1], angles[2]))
                }
                None => Arc::new(U3::trainable()),
            };
            ops.push(GateOp::new(gate, group)?);
        }
        Ok(Layer::from_ops("U3Layer", num_wires, ops))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use varq_gates::matrix_ops::{identity_matrix, matrix_multiply, max_deviation};

    #[test]
    fn test_x_layer_defaults_cover_all_wires() {
        let layer = Layer::x_layer(4, None).unwrap();
        assert_eq!(layer.len(), 4);
        assert_eq!(layer.num_params(), 0);
        assert_eq!(
            layer.wire_groups(),
            vec![vec![0], vec![1], vec![2], vec![3]]
        );
    }

    #[test]
    fn test_h_layer_explicit_wires() {
        let layer = Layer::h_layer(4, Some(vec![vec![1], vec![3]])).unwrap();
        assert_eq!(layer.len(), 2);
        assert_eq!(layer.wire_groups(), vec![vec![1], vec![3]]);
    }

    #[test]
    fn test_rx_layer_counts_one_param_per_wire() {
        let layer = Layer::rx_layer(3, None, None).unwrap();
        assert_eq!(layer.num_params(), 3);
    }

    #[test]
    fn test_u3_layer_counts_three_params_per_wire() {
        let layer = Layer::u3_layer(3, None, None).unwrap();
        assert_eq!(layer.num_params(), 9);
    }

    #[test]
    fn test_rx_layer_rejects_short_inputs() {
        let result = Layer::rx_layer(3, None, Some(&[0.1, 0.2]));
        match result {
            Err(LayerError::InputLength {
                layer,
                expected,
                actual,
            }) => {
                assert_eq!(layer, "RxLayer");
                assert_eq!(expected, 3);
                assert_eq!(actual, 2);
            }
            other => panic!("Expected InputLength error, got {:?}", other),
        }
    }

    #[test]
    fn test_u3_layer_rejects_wrong_slot_count() {
        let result = Layer::u3_layer(2, None, Some(&[0.1; 5]));
        assert!(matches!(result, Err(LayerError::InputLength { .. })));
    }

    #[test]
    fn test_rotation_layer_rejects_double_wire_group() {
        let result = Layer::ry_layer(3, Some(vec![vec![0, 1]]), None);
        assert!(matches!(result, Err(LayerError::WireArity { .. })));
    }

    #[test]
    fn test_rx_layer_inverse_roundtrip() {
        let inputs = [0.3, -1.2, 2.4];
        let layer = Layer::rx_layer(3, None, Some(&inputs)).unwrap();
        let inv = layer.inverse();

        let product = matrix_multiply(&inv.unitary().unwrap(), &layer.unitary().unwrap());
        let dev = max_deviation(&product, &identity_matrix(8));
        assert!(dev < 1e-6, "deviation {}", dev);
    }

    #[test]
    fn test_u3_layer_trainable_inverse_roundtrip() {
        let layer = Layer::u3_layer(2, None, None).unwrap();
        let inv = layer.inverse();

        let product = matrix_multiply(&inv.unitary().unwrap(), &layer.unitary().unwrap());
        let dev = max_deviation(&product, &identity_matrix(4));
        assert!(dev < 1e-6, "deviation {}", dev);
    }

    #[test]
    fn test_h_layer_unitary_is_symmetric_kron() {
        // H ⊗ H has all entries of magnitude 1/2
        let layer = Layer::h_layer(2, None).unwrap();
        let u = layer.unitary().unwrap();
        assert!(u.iter().all(|e| (e.norm() - 0.5).abs() < 1e-10));
    }
}

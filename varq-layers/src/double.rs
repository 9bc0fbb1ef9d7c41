//! The two-wire layer catalog

use crate::layer::{resolve_wire_groups, Layer};
use std::sync::Arc;
use varq_core::{GateOp, Result};
use varq_gates::standard::Cnot;

impl Layer {
    /// A layer of CNOT gates
    ///
    /// Defaults to consecutive disjoint pairs `(0,1), (2,3), ...`; each
    /// group's first wire is the control.
    pub fn cnot_layer(num_wires: usize, wires: Option<Vec<Vec<usize>>>) -> Result<Layer> {
        Self::cnot_layer_named("CnotLayer", num_wires, wires)
    }

    /// CNOT layer with a caller-chosen name (the ring generator reuses this)
    pub(crate) fn cnot_layer_named(
        name: &str,
        num_wires: usize,
        wires: Option<Vec<Vec<usize>>>,
    ) -> Result<Layer> {
        let groups = resolve_wire_groups(name, num_wires, 2, wires)?;
        let mut ops = Vec::with_capacity(groups.len());
        for group in &groups {
            ops.push(GateOp::new(Arc::new(Cnot), group)?);
        }
        Ok(Layer::from_ops(name, num_wires, ops))
    }
}

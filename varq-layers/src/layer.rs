//! The layer abstraction: wire-group resolution, validation, unitary
//! assembly and inversion

use num_complex::Complex64;
use smallvec::SmallVec;
use varq_core::{GateOp, LayerError, Result, WireId};
use varq_gates::matrices;
use varq_gates::matrix_ops::{
    embed_gate, identity_matrix, matrix_multiply, matrix_to_vec, multi_kron,
};

/// An ordered wire group naming the operands of one operation
pub type WireGroup = SmallVec<[WireId; 2]>;

/// Default wiring for a single-wire layer: every wire individually,
/// in ascending order.
pub fn single_wire_defaults(num_wires: usize) -> Vec<Vec<usize>> {
    (0..num_wires).map(|w| vec![w]).collect()
}

/// Default wiring for a two-wire layer: consecutive disjoint pairs
/// `(0,1), (2,3), ...`; a trailing unpaired wire is left untouched.
pub fn double_wire_defaults(num_wires: usize) -> Vec<Vec<usize>> {
    (0..num_wires.saturating_sub(1))
        .step_by(2)
        .map(|w| vec![w, w + 1])
        .collect()
}

/// Resolve an optional wire-group list against a required arity
///
/// With `wires == None` the per-arity default wiring is used. Supplied
/// groups are validated: every group must have exactly `arity` wires
/// and every index must be in range.
pub(crate) fn resolve_wire_groups(
    name: &str,
    num_wires: usize,
    arity: usize,
    wires: Option<Vec<Vec<usize>>>,
) -> Result<Vec<WireGroup>> {
    let groups = match wires {
        Some(groups) => groups,
        None if arity == 1 => single_wire_defaults(num_wires),
        None => double_wire_defaults(num_wires),
    };

    let mut resolved = Vec::with_capacity(groups.len());
    for group in &groups {
        if group.len() != arity {
            return Err(LayerError::wire_arity(name, arity, group.len()));
        }
        for &w in group {
            if w >= num_wires {
                return Err(LayerError::invalid_wire(w, num_wires));
            }
        }
        resolved.push(group.iter().map(|&w| WireId::new(w)).collect());
    }
    Ok(resolved)
}

/// An ordered, fixed-arity sequence of gate operations over a shared wire set
///
/// Operation order is application order: the first operation is applied
/// first. The `density_matrix` and `tensor_mode` flags describe the state
/// representation the layer is meant for; they are carried metadata for the
/// propagation engine, which is outside this crate.
#[derive(Clone, Debug)]
pub struct Layer {
    name: String,
    num_wires: usize,
    density_matrix: bool,
    tensor_mode: bool,
    num_params: usize,
    ops: Vec<GateOp>,
}

impl Layer {
    /// Assemble a layer from validated operations
    pub(crate) fn from_ops(name: impl Into<String>, num_wires: usize, ops: Vec<GateOp>) -> Self {
        let num_params = ops.iter().map(GateOp::num_params).sum();
        Self {
            name: name.into(),
            num_wires,
            density_matrix: false,
            tensor_mode: false,
            num_params,
            ops,
        }
    }

    /// Mark the layer for density-matrix semantics (builder style)
    pub fn with_density_matrix(mut self, density_matrix: bool) -> Self {
        self.density_matrix = density_matrix;
        self
    }

    /// Mark the layer for batched tensor I/O (builder style)
    pub fn with_tensor_mode(mut self, tensor_mode: bool) -> Self {
        self.tensor_mode = tensor_mode;
        self
    }

    /// The layer name
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The declared total wire count
    #[inline]
    pub fn num_wires(&self) -> usize {
        self.num_wires
    }

    /// Total trainable/encoded parameter count over all operations
    #[inline]
    pub fn num_params(&self) -> usize {
        self.num_params
    }

    /// Whether the layer targets density-matrix semantics
    #[inline]
    pub fn density_matrix(&self) -> bool {
        self.density_matrix
    }

    /// Whether the layer uses batched tensor I/O
    #[inline]
    pub fn tensor_mode(&self) -> bool {
        self.tensor_mode
    }

    /// Number of operations
    #[inline]
    pub fn len(&self) -> usize {
        self.ops.len()
    }

    /// Whether the layer holds no operations
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.ops.is_empty()
    }

    /// Iterate over the operations in application order
    pub fn ops(&self) -> impl Iterator<Item = &GateOp> {
        self.ops.iter()
    }

    /// The wire groups in application order
    pub fn wire_groups(&self) -> Vec<Vec<usize>> {
        self.ops
            .iter()
            .map(|op| op.wires().iter().map(|w| w.index()).collect())
            .collect()
    }

    /// Assemble the layer's exact unitary, side `2^num_wires`
    ///
    /// Single-wire layers fold per-wire matrices (identity on untouched
    /// wires) with the generalized tensor product, in ascending wire order.
    /// Layers holding multi-wire operations compose arbitrary-position
    /// embeddings in application order instead, since their wire groups may
    /// be non-contiguous (ring wiring wraps around).
    ///
    /// This is O(2^n) in memory; it is meant for small-circuit exact
    /// unitary extraction, not scalable simulation.
    ///
    /// # Errors
    /// Returns [`LayerError::EmptyLayer`] if the layer holds no operations.
    pub fn unitary(&self) -> Result<Vec<Complex64>> {
        if self.ops.is_empty() {
            return Err(LayerError::EmptyLayer(self.name.clone()));
        }

        if self.ops.iter().all(|op| op.num_wires() == 1) {
            let identity = matrix_to_vec(&matrices::IDENTITY);
            let mut slots = vec![identity; self.num_wires];
            for op in &self.ops {
                slots[op.wires()[0].index()] = op.gate().matrix();
            }
            return Ok(multi_kron(&slots));
        }

        let dim = 1usize << self.num_wires;
        let mut result = identity_matrix(dim);
        for op in &self.ops {
            let wires: Vec<usize> = op.wires().iter().map(|w| w.index()).collect();
            let embedded = embed_gate(&op.gate().matrix(), self.num_wires, &wires);
            // Applied first means multiplied from the right
            result = matrix_multiply(&embedded, &result);
        }
        Ok(result)
    }

    /// The inverse layer
    ///
    /// A new independent value: operation order reversed (wire groups
    /// reverse with their operations) and every gate replaced by its
    /// adjoint. Applying a layer and then its inverse is the identity up to
    /// numerical tolerance. No mutable state is shared with `self`.
    pub fn inverse(&self) -> Layer {
        Layer {
            name: self.name.clone(),
            num_wires: self.num_wires,
            density_matrix: self.density_matrix,
            tensor_mode: self.tensor_mode,
            num_params: self.num_params,
            ops: self.ops.iter().rev().map(|op| op.dagger()).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use varq_gates::matrix_ops::max_deviation;

    #[test]
    fn test_single_wire_defaults() {
        for n in 1..=6 {
            let groups = single_wire_defaults(n);
            assert_eq!(groups.len(), n);
            for (i, group) in groups.iter().enumerate() {
                assert_eq!(group, &vec![i]);
            }
        }
    }

    #[test]
    fn test_double_wire_defaults_even() {
        let groups = double_wire_defaults(4);
        assert_eq!(groups, vec![vec![0, 1], vec![2, 3]]);
    }

    #[test]
    fn test_double_wire_defaults_odd_leaves_trailing_wire() {
        let groups = double_wire_defaults(5);
        assert_eq!(groups, vec![vec![0, 1], vec![2, 3]]);

        // No group touches wire 4
        assert!(groups.iter().all(|g| !g.contains(&4)));
    }

    #[test]
    fn test_double_wire_defaults_degenerate() {
        assert!(double_wire_defaults(1).is_empty());
        assert!(double_wire_defaults(0).is_empty());
    }

    #[test]
    fn test_resolve_rejects_wrong_arity() {
        let result = resolve_wire_groups("RxLayer", 3, 1, Some(vec![vec![0, 1]]));
        match result {
            Err(LayerError::WireArity {
                layer,
                expected,
                actual,
            }) => {
                assert_eq!(layer, "RxLayer");
                assert_eq!(expected, 1);
                assert_eq!(actual, 2);
            }
            other => panic!("Expected WireArity error, got {:?}", other),
        }
    }

    #[test]
    fn test_resolve_rejects_out_of_range_wire() {
        let result = resolve_wire_groups("XLayer", 2, 1, Some(vec![vec![5]]));
        assert!(matches!(result, Err(LayerError::InvalidWire(5, 2))));
    }

    #[test]
    fn test_empty_layer_unitary_fails() {
        let layer = Layer::from_ops("Empty", 2, Vec::new());
        let err = layer.unitary().unwrap_err();
        assert!(matches!(err, LayerError::EmptyLayer(name) if name == "Empty"));
    }

    #[test]
    fn test_builder_flags() {
        let layer = Layer::from_ops("Flags", 1, Vec::new())
            .with_density_matrix(true)
            .with_tensor_mode(true);
        assert!(layer.density_matrix());
        assert!(layer.tensor_mode());
    }

    #[test]
    fn test_inverse_does_not_alias() {
        let layer = Layer::x_layer(2, None).unwrap();
        let inv = layer.inverse();

        // Both survive independently and produce identical unitaries
        // (Pauli-X is hermitian).
        let u = layer.unitary().unwrap();
        let v = inv.unitary().unwrap();
        assert!(max_deviation(&u, &v) < 1e-12);
        assert_eq!(layer.len(), inv.len());
    }

    #[test]
    fn test_inverse_reverses_wire_groups() {
        let layer = Layer::h_layer(3, None).unwrap();
        let inv = layer.inverse();

        assert_eq!(layer.wire_groups(), vec![vec![0], vec![1], vec![2]]);
        assert_eq!(inv.wire_groups(), vec![vec![2], vec![1], vec![0]]);
        assert_eq!(inv.num_params(), layer.num_params());
    }
}

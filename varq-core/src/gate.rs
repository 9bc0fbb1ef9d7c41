//! Gate trait, wire-bound gate operations and the adjoint adapter

use crate::{LayerError, Result, WireId};
use num_complex::Complex64;
use smallvec::SmallVec;
use std::fmt;
use std::sync::Arc;

/// Trait for unitary gate operations
///
/// Gates are stateless once constructed and reusable across layers. Every
/// gate can produce its matrix and the matrix of its inverse; for unitary
/// gates the inverse is the conjugate transpose.
///
/// Matrices are flattened row-major vectors. Qubit gates on `k` wires have
/// side `2^k`; photonic mode-space gates (phase shifter, MZI) have side `k`.
pub trait Gate: Send + Sync + fmt::Debug {
    /// The name of the gate (e.g., "H", "CNOT", "Rx")
    fn name(&self) -> &str;

    /// Number of wires this gate acts on
    fn num_wires(&self) -> usize;

    /// The gate matrix as a flattened row-major vector
    fn matrix(&self) -> Vec<Complex64>;

    /// The matrix of the inverse gate
    ///
    /// Defaults to the conjugate transpose of [`Gate::matrix`], which is the
    /// inverse of any unitary. Gates with an analytic inverse (e.g. a
    /// rotation with negated angle) override this.
    fn inverse_matrix(&self) -> Vec<Complex64> {
        conjugate_transpose(&self.matrix())
    }

    /// Number of trainable or encoded parameters this gate owns
    fn num_params(&self) -> usize {
        0
    }

    /// Whether this gate is hermitian (self-adjoint, its own inverse)
    fn is_hermitian(&self) -> bool {
        false
    }
}

/// Conjugate transpose of a flattened square matrix.
fn conjugate_transpose(matrix: &[Complex64]) -> Vec<Complex64> {
    let n = (matrix.len() as f64).sqrt() as usize;
    debug_assert_eq!(n * n, matrix.len(), "matrix must be square");
    let mut result = vec![Complex64::new(0.0, 0.0); n * n];
    for i in 0..n {
        for j in 0..n {
            result[i * n + j] = matrix[j * n + i].conj();
        }
    }
    result
}

/// A gate applied to an ordered group of wires
///
/// The wire group's order is meaningful: for a two-wire gate the first
/// wire is the control (or upper mode).
///
/// # Example
/// ```
/// # use varq_core::{WireId, gate::GateOp};
/// # use std::sync::Arc;
/// # use num_complex::Complex64;
/// # #[derive(Debug)]
/// # struct DummyGate;
/// # impl varq_core::Gate for DummyGate {
/// #     fn name(&self) -> &str { "DUMMY" }
/// #     fn num_wires(&self) -> usize { 1 }
/// #     fn matrix(&self) -> Vec<Complex64> {
/// #         vec![Complex64::new(1.0, 0.0), Complex64::new(0.0, 0.0),
/// #              Complex64::new(0.0, 0.0), Complex64::new(1.0, 0.0)]
/// #     }
/// # }
/// let gate = Arc::new(DummyGate);
/// let op = GateOp::new(gate, &[WireId::new(0)]).unwrap();
/// assert_eq!(op.num_wires(), 1);
/// ```
#[derive(Clone)]
pub struct GateOp {
    gate: Arc<dyn Gate>,
    wires: SmallVec<[WireId; 2]>, // Most gates are 1-2 wires
}

impl GateOp {
    /// Create a new gate operation
    ///
    /// # Errors
    /// Returns error if:
    /// - Wire count doesn't match the gate's arity
    /// - The same wire appears twice
    pub fn new(gate: Arc<dyn Gate>, wires: &[WireId]) -> Result<Self> {
        if wires.len() != gate.num_wires() {
            return Err(LayerError::wire_arity(
                gate.name(),
                gate.num_wires(),
                wires.len(),
            ));
        }

        for i in 0..wires.len() {
            for j in (i + 1)..wires.len() {
                if wires[i] == wires[j] {
                    return Err(LayerError::DuplicateWire(wires[i]));
                }
            }
        }

        Ok(Self {
            gate,
            wires: SmallVec::from_slice(wires),
        })
    }

    /// Get the gate
    #[inline]
    pub fn gate(&self) -> &Arc<dyn Gate> {
        &self.gate
    }

    /// Get the ordered wire group this operation acts on
    #[inline]
    pub fn wires(&self) -> &[WireId] {
        &self.wires
    }

    /// Get the number of wires
    #[inline]
    pub fn num_wires(&self) -> usize {
        self.wires.len()
    }

    /// Number of parameters owned by the underlying gate
    #[inline]
    pub fn num_params(&self) -> usize {
        self.gate.num_params()
    }

    /// The adjoint of this operation over the same wire group
    ///
    /// The wire group was validated at construction, so no revalidation is
    /// needed; the dagger adapter preserves the gate's arity.
    pub fn dagger(&self) -> GateOp {
        GateOp {
            gate: Arc::new(Dagger::new(Arc::clone(&self.gate))),
            wires: self.wires.clone(),
        }
    }
}

impl fmt::Debug for GateOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}(", self.gate.name())?;
        for (i, w) in self.wires.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", w)?;
        }
        write!(f, ")")
    }
}

impl fmt::Display for GateOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// Adjoint adapter over any gate
///
/// Swaps [`Gate::matrix`] and [`Gate::inverse_matrix`] of the wrapped gate.
/// Used by layer inversion to invert operations without knowing their
/// concrete type.
#[derive(Debug, Clone)]
pub struct Dagger {
    inner: Arc<dyn Gate>,
    name: String,
}

impl Dagger {
    /// Wrap a gate in its adjoint
    pub fn new(inner: Arc<dyn Gate>) -> Self {
        let name = format!("{}\u{2020}", inner.name());
        Self { inner, name }
    }
}

impl Gate for Dagger {
    fn name(&self) -> &str {
        &self.name
    }

    fn num_wires(&self) -> usize {
        self.inner.num_wires()
    }

    fn matrix(&self) -> Vec<Complex64> {
        self.inner.inverse_matrix()
    }

    fn inverse_matrix(&self) -> Vec<Complex64> {
        self.inner.matrix()
    }

    fn num_params(&self) -> usize {
        self.inner.num_params()
    }

    fn is_hermitian(&self) -> bool {
        self.inner.is_hermitian()
    }
}

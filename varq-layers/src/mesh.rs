//! Clements interferometer mesh: triangular wiring and angle-dictionary
//! translation
//!
//! A Clements mesh over `nmode` modes is `nmode` rows of two-mode MZI
//! units plus one phase shifter per mode, implementing a universal linear
//! transform. The mesh topology is fixed at construction; only the angles
//! inside it vary.
//!
//! Angle assignments come as a dictionary keyed by `(wire, column)`, where
//! the column is the running count of angle slots already consumed on that
//! wire. [`ClementsMesh::angle_dict_to_vector`] flattens such a dictionary
//! into the parameter vector matching the physical gate emission order;
//! walking the dictionary and the topology in the same order is what keeps
//! each physical angle attached to the right gate.

use ahash::AHashMap;
use num_complex::Complex64;
use std::sync::Arc;
use varq_core::{GateOp, LayerError, Result, WireId};
use varq_gates::matrix_ops::{embed_mode_block, identity_matrix, matrix_multiply};
use varq_gates::standard::{Mzi, PhaseShifter};

/// An angle value: a plain scalar or a batch of values
///
/// Batches are flattened in place during translation, so a dictionary may
/// mix scalars and equal-length batches.
#[derive(Clone, Debug, PartialEq)]
pub enum Angle {
    /// A single angle
    Scalar(f64),
    /// A batch of angles (flattened on concatenation)
    Batch(Vec<f64>),
}

impl Angle {
    fn extend_into(&self, out: &mut Vec<f64>) {
        match self {
            Angle::Scalar(v) => out.push(*v),
            Angle::Batch(vs) => out.extend_from_slice(vs),
        }
    }
}

impl From<f64> for Angle {
    fn from(v: f64) -> Self {
        Angle::Scalar(v)
    }
}

impl From<Vec<f64>> for Angle {
    fn from(vs: Vec<f64>) -> Self {
        Angle::Batch(vs)
    }
}

/// Mapping from `(wire, column)` to an angle value
pub type AngleDict = AHashMap<(usize, usize), Angle>;

/// One unit of the mesh in construction order
#[derive(Clone, Copy, Debug)]
enum MeshUnit {
    /// Single-mode phase shifter
    Phase { wire: usize },
    /// Two-mode MZI on `(left, left + 1)`
    Coupler { left: usize },
}

/// A Clements-style triangular interferometer mesh
///
/// Construction order: when not `phi_first`, one phase shifter per mode
/// first; then `nmode` rows of MZIs (even rows couple `(0,1), (2,3), ...`,
/// odd rows couple `(1,2), (3,4), ...`); when `phi_first`, the per-mode
/// phase shifters come last. Every MZI carries two encoded angles
/// `(theta, phi)`, every phase shifter one.
///
/// # Example
/// ```
/// use varq_layers::ClementsMesh;
///
/// let mesh = ClementsMesh::new(4, true).unwrap();
/// assert_eq!(mesh.num_params(), 16); // nmode^2
/// ```
#[derive(Clone, Debug)]
pub struct ClementsMesh {
    nmode: usize,
    phi_first: bool,
    num_params: usize,
    ops: Vec<GateOp>,
}

impl ClementsMesh {
    /// Build the mesh topology with all angles zero
    ///
    /// # Errors
    /// Returns [`LayerError::MeshSize`] for `nmode < 2`.
    pub fn new(nmode: usize, phi_first: bool) -> Result<Self> {
        if nmode < 2 {
            return Err(LayerError::MeshSize(nmode));
        }
        let zeros = vec![0.0; nmode * nmode];
        Self::with_angles(nmode, phi_first, &zeros)
    }

    /// Build the mesh with a flat angle vector in emission order
    ///
    /// `angles` must hold `nmode^2` values: `(theta, phi)` per MZI and one
    /// phase per shifter, ordered exactly as the units are constructed —
    /// the vector produced by [`ClementsMesh::angle_dict_to_vector`].
    ///
    /// # Errors
    /// Returns [`LayerError::MeshSize`] for `nmode < 2` and
    /// [`LayerError::InputLength`] on a wrong vector length.
    pub fn with_angles(nmode: usize, phi_first: bool, angles: &[f64]) -> Result<Self> {
        if nmode < 2 {
            return Err(LayerError::MeshSize(nmode));
        }
        if angles.len() != nmode * nmode {
            return Err(LayerError::input_length(
                "Clements",
                nmode * nmode,
                angles.len(),
            ));
        }

        let mut ops = Vec::new();
        let mut num_params = 0;
        let mut cursor = 0;
        for unit in units(nmode, phi_first) {
            match unit {
                MeshUnit::Phase { wire } => {
                    let ps = PhaseShifter::encoded(angles[cursor]);
                    cursor += 1;
                    num_params += 1;
                    ops.push(GateOp::new(Arc::new(ps), &[WireId::new(wire)])?);
                }
                MeshUnit::Coupler { left } => {
                    let mzi = Mzi::encoded(angles[cursor], angles[cursor + 1], phi_first);
                    cursor += 2;
                    num_params += 2;
                    ops.push(GateOp::new(
                        Arc::new(mzi),
                        &[WireId::new(left), WireId::new(left + 1)],
                    )?);
                }
            }
        }

        Ok(Self {
            nmode,
            phi_first,
            num_params,
            ops,
        })
    }

    /// Number of modes
    #[inline]
    pub fn nmode(&self) -> usize {
        self.nmode
    }

    /// Whether the internal MZI phase precedes the splitter
    #[inline]
    pub fn phi_first(&self) -> bool {
        self.phi_first
    }

    /// Total encoded angle count, `nmode^2`
    #[inline]
    pub fn num_params(&self) -> usize {
        self.num_params
    }

    /// Number of operations (MZIs plus phase shifters)
    #[inline]
    pub fn len(&self) -> usize {
        self.ops.len()
    }

    /// Whether the mesh holds no operations (never, for a valid mesh)
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.ops.is_empty()
    }

    /// Iterate over the operations in application order
    pub fn ops(&self) -> impl Iterator<Item = &GateOp> {
        self.ops.iter()
    }

    /// Flatten an angle dictionary into the emission-order parameter vector
    ///
    /// One running column counter per wire, initialized to zero and scoped
    /// to this call, is advanced along the same walk that built the
    /// topology. A phase shifter on wire `i` consumes slot
    /// `(i, columns[i])`; an MZI with left wire `w` consumes
    /// `(w, columns[w])` and `(w, columns[w] + 1)` — `(phi, theta)` in that
    /// slot order when `phi_first`, `(theta, phi)` otherwise — and always
    /// emits `theta` before `phi`, the MZI's own parameter order.
    ///
    /// # Errors
    /// Returns [`LayerError::MissingAngle`] naming the first `(wire,
    /// column)` key the walk visits that the dictionary does not contain.
    pub fn angle_dict_to_vector(&self, angles: &AngleDict) -> Result<Vec<f64>> {
        let mut columns = vec![0usize; self.nmode];
        let mut data = Vec::with_capacity(self.num_params);

        let fetch = |wire: usize, column: usize| -> Result<&Angle> {
            angles
                .get(&(wire, column))
                .ok_or_else(|| LayerError::missing_angle(wire, column))
        };

        for unit in units(self.nmode, self.phi_first) {
            match unit {
                MeshUnit::Phase { wire } => {
                    fetch(wire, columns[wire])?.extend_into(&mut data);
                    columns[wire] += 1;
                }
                MeshUnit::Coupler { left } => {
                    let column = columns[left];
                    let first = fetch(left, column)?;
                    let second = fetch(left, column + 1)?;
                    let (theta, phi) = if self.phi_first {
                        (second, first)
                    } else {
                        (first, second)
                    };
                    theta.extend_into(&mut data);
                    phi.extend_into(&mut data);
                    columns[left] += 2;
                }
            }
        }

        Ok(data)
    }

    /// The mesh's `nmode × nmode` mode-space operator
    ///
    /// Product of direct-sum-embedded unit blocks in application order.
    pub fn unitary(&self) -> Vec<Complex64> {
        let mut result = identity_matrix(self.nmode);
        for op in &self.ops {
            let modes: Vec<usize> = op.wires().iter().map(|w| w.index()).collect();
            let embedded = embed_mode_block(&op.gate().matrix(), self.nmode, &modes);
            result = matrix_multiply(&embedded, &result);
        }
        result
    }
}

/// The mesh units in construction order
///
/// Both the constructor and the dictionary translation walk this exact
/// sequence; sharing it is what guarantees the two orders never diverge.
fn units(nmode: usize, phi_first: bool) -> Vec<MeshUnit> {
    let mut units = Vec::new();
    if !phi_first {
        for wire in 0..nmode {
            units.push(MeshUnit::Phase { wire });
        }
    }
    for row in 0..nmode {
        // Even rows couple pairs starting at mode 0, odd rows at mode 1
        let start = if row % 2 == 0 { 1 } else { 2 };
        let mut w = start;
        while w < nmode {
            units.push(MeshUnit::Coupler { left: w - 1 });
            w += 2;
        }
    }
    if phi_first {
        for wire in 0..nmode {
            units.push(MeshUnit::Phase { wire });
        }
    }
    units
}

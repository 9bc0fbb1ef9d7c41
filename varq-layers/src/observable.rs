//! Observable layer: a Pauli string over measured wires

use crate::layer::Layer;
use num_complex::Complex64;
use std::sync::Arc;
use varq_core::{Gate, GateOp, LayerError, Result, WireId};
use varq_gates::standard::{PauliX, PauliY, PauliZ};

/// Single-wire measurement basis
///
/// Closed set of recognized bases; parsing anything else is a
/// configuration error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PauliBasis {
    /// Pauli-X basis
    X,
    /// Pauli-Y basis
    Y,
    /// Pauli-Z basis
    Z,
}

impl PauliBasis {
    /// Parse a basis from a character (case-insensitive)
    pub fn from_char(c: char) -> Result<Self> {
        match c.to_ascii_lowercase() {
            'x' => Ok(PauliBasis::X),
            'y' => Ok(PauliBasis::Y),
            'z' => Ok(PauliBasis::Z),
            other => Err(LayerError::InvalidBasis(other)),
        }
    }

    /// Character representation
    pub fn to_char(self) -> char {
        match self {
            PauliBasis::X => 'x',
            PauliBasis::Y => 'y',
            PauliBasis::Z => 'z',
        }
    }

    /// The Pauli gate measuring in this basis
    fn gate(self) -> Arc<dyn Gate> {
        match self {
            PauliBasis::X => Arc::new(PauliX),
            PauliBasis::Y => Arc::new(PauliY),
            PauliBasis::Z => Arc::new(PauliZ),
        }
    }
}

/// A layer representing an observable expressible as a Pauli string
///
/// One Pauli gate per measured wire, selected by a basis string. A
/// single-character basis repeats for every measured wire; otherwise the
/// string length must equal the number of measured wires.
///
/// # Example
/// ```
/// use varq_layers::Observable;
///
/// let obs = Observable::new(3, None, "z").unwrap();
/// assert_eq!(obs.basis_string(), "zzz");
///
/// let obs = Observable::new(3, Some(vec![0, 2]), "xy").unwrap();
/// assert_eq!(obs.basis_string(), "xy");
/// ```
#[derive(Clone, Debug)]
pub struct Observable {
    basis: Vec<PauliBasis>,
    layer: Layer,
}

impl Observable {
    /// Build an observable over the given wires (default: all wires)
    ///
    /// # Errors
    /// - [`LayerError::BasisLength`] if a multi-character basis string does
    ///   not match the number of measured wires
    /// - [`LayerError::InvalidBasis`] on an unrecognized character
    /// - [`LayerError::InvalidWire`] on an out-of-range wire
    pub fn new(num_wires: usize, wires: Option<Vec<usize>>, basis: &str) -> Result<Self> {
        let measured = wires.unwrap_or_else(|| (0..num_wires).collect());
        for &w in &measured {
            if w >= num_wires {
                return Err(LayerError::invalid_wire(w, num_wires));
            }
        }

        let chars: Vec<char> = basis.chars().collect();
        let expanded: Vec<char> = if chars.len() == 1 {
            vec![chars[0]; measured.len()]
        } else {
            chars
        };
        if expanded.len() != measured.len() {
            return Err(LayerError::BasisLength {
                expected: measured.len(),
                actual: expanded.len(),
            });
        }

        let basis = expanded
            .into_iter()
            .map(PauliBasis::from_char)
            .collect::<Result<Vec<_>>>()?;

        let mut ops = Vec::with_capacity(measured.len());
        for (&wire, &b) in measured.iter().zip(basis.iter()) {
            ops.push(GateOp::new(b.gate(), &[WireId::new(wire)])?);
        }

        Ok(Self {
            basis,
            layer: Layer::from_ops("Observable", num_wires, ops),
        })
    }

    /// The per-wire measurement bases, in measured-wire order
    #[inline]
    pub fn basis(&self) -> &[PauliBasis] {
        &self.basis
    }

    /// The basis as a string, one character per measured wire
    pub fn basis_string(&self) -> String {
        self.basis.iter().map(|b| b.to_char()).collect()
    }

    /// The underlying Pauli layer
    #[inline]
    pub fn layer(&self) -> &Layer {
        &self.layer
    }

    /// The observable's matrix over the full wire set
    pub fn unitary(&self) -> Result<Vec<Complex64>> {
        self.layer.unitary()
    }
}

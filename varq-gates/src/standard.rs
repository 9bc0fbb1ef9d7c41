//! Concrete gate implementations
//!
//! Fixed gates carry no parameters. Parametrized gates own their
//! [`Parameter`]s exclusively and come in two flavors: `encoded` (value
//! injected from classical data, non-trainable) and `trainable`
//! (self-initialized uniformly in [-π, π)).

use crate::matrices;
use crate::matrix_ops::{matrix_adjoint, matrix_to_vec};
use num_complex::Complex64;
use rand::Rng;
use std::f64::consts::PI;
use varq_core::{Gate, Parameter};

/// Uniform random angle in [-π, π), used for trainable initialization.
fn random_angle() -> f64 {
    rand::thread_rng().gen_range(-PI..PI)
}

/// Helper macro for the fixed hermitian single-wire gates
macro_rules! fixed_single_gate {
    ($(#[$doc:meta])* $gate_type:ident, $name:expr, $matrix:expr) => {
        $(#[$doc])*
        #[derive(Debug, Clone, Copy)]
        pub struct $gate_type;

        impl Gate for $gate_type {
            fn name(&self) -> &str {
                $name
            }

            fn num_wires(&self) -> usize {
                1
            }

            fn matrix(&self) -> Vec<Complex64> {
                matrix_to_vec($matrix)
            }

            fn inverse_matrix(&self) -> Vec<Complex64> {
                // Hermitian, its own inverse
                self.matrix()
            }

            fn is_hermitian(&self) -> bool {
                true
            }
        }
    };
}

fixed_single_gate!(
    /// Pauli-X gate (NOT gate)
    ///
    /// Bit flip: X|0⟩ = |1⟩, X|1⟩ = |0⟩
    PauliX,
    "X",
    &matrices::PAULI_X
);

fixed_single_gate!(
    /// Pauli-Y gate
    ///
    /// Combined bit and phase flip
    PauliY,
    "Y",
    &matrices::PAULI_Y
);

fixed_single_gate!(
    /// Pauli-Z gate
    ///
    /// Phase flip: Z|0⟩ = |0⟩, Z|1⟩ = -|1⟩
    PauliZ,
    "Z",
    &matrices::PAULI_Z
);

fixed_single_gate!(
    /// Hadamard gate
    ///
    /// Creates superposition: H|0⟩ = (|0⟩ + |1⟩)/√2
    Hadamard,
    "H",
    &matrices::HADAMARD
);

/// CNOT gate, first wire of the group is the control
#[derive(Debug, Clone, Copy)]
pub struct Cnot;

impl Gate for Cnot {
    fn name(&self) -> &str {
        "CNOT"
    }

    fn num_wires(&self) -> usize {
        2
    }

    fn matrix(&self) -> Vec<Complex64> {
        matrix_to_vec(&matrices::CNOT)
    }

    fn inverse_matrix(&self) -> Vec<Complex64> {
        self.matrix()
    }

    fn is_hermitian(&self) -> bool {
        true
    }
}

/// Helper macro for the single-angle rotation gates
macro_rules! rotation_gate {
    ($(#[$doc:meta])* $gate_type:ident, $name:expr, $matrix_fn:path) => {
        $(#[$doc])*
        #[derive(Debug, Clone)]
        pub struct $gate_type {
            theta: Parameter,
        }

        impl $gate_type {
            /// Create with an injected, non-trainable angle
            pub fn encoded(theta: f64) -> Self {
                Self {
                    theta: Parameter::encoded(theta),
                }
            }

            /// Create with a self-initialized trainable angle
            pub fn trainable() -> Self {
                Self {
                    theta: Parameter::trainable(random_angle()),
                }
            }

            /// The rotation angle
            #[inline]
            pub fn theta(&self) -> f64 {
                self.theta.value()
            }
        }

        impl Gate for $gate_type {
            fn name(&self) -> &str {
                $name
            }

            fn num_wires(&self) -> usize {
                1
            }

            fn matrix(&self) -> Vec<Complex64> {
                matrix_to_vec(&$matrix_fn(self.theta()))
            }

            fn inverse_matrix(&self) -> Vec<Complex64> {
                // Rotation inverse is the negated angle
                matrix_to_vec(&$matrix_fn(-self.theta()))
            }

            fn num_params(&self) -> usize {
                1
            }
        }
    };
}

rotation_gate!(
    /// Rotation about the X axis by θ
    Rx,
    "Rx",
    matrices::rotation_x
);

rotation_gate!(
    /// Rotation about the Y axis by θ
    Ry,
    "Ry",
    matrices::rotation_y
);

rotation_gate!(
    /// Rotation about the Z axis by θ
    Rz,
    "Rz",
    matrices::rotation_z
);

/// Generic single-wire unitary U3(θ, φ, λ)
///
/// Three parameters: splitting angle θ and the two phases φ, λ.
#[derive(Debug, Clone)]
pub struct U3 {
    theta: Parameter,
    phi: Parameter,
    lambda: Parameter,
}

impl U3 {
    /// Create with injected, non-trainable angles
    pub fn encoded(theta: f64, phi: f64, lambda: f64) -> Self {
        Self {
            theta: Parameter::encoded(theta),
            phi: Parameter::encoded(phi),
            lambda: Parameter::encoded(lambda),
        }
    }

    /// Create with self-initialized trainable angles
    pub fn trainable() -> Self {
        Self {
            theta: Parameter::trainable(random_angle()),
            phi: Parameter::trainable(random_angle()),
            lambda: Parameter::trainable(random_angle()),
        }
    }

    /// The splitting angle θ
    #[inline]
    pub fn theta(&self) -> f64 {
        self.theta.value()
    }

    /// The phase φ
    #[inline]
    pub fn phi(&self) -> f64 {
        self.phi.value()
    }

    /// The phase λ
    #[inline]
    pub fn lambda(&self) -> f64 {
        self.lambda.value()
    }
}

impl Gate for U3 {
    fn name(&self) -> &str {
        "U3"
    }

    fn num_wires(&self) -> usize {
        1
    }

    fn matrix(&self) -> Vec<Complex64> {
        matrix_to_vec(&matrices::u3(self.theta(), self.phi(), self.lambda()))
    }

    fn inverse_matrix(&self) -> Vec<Complex64> {
        // U3(θ,φ,λ)† = U3(-θ,-λ,-φ)
        matrix_to_vec(&matrices::u3(-self.theta(), -self.lambda(), -self.phi()))
    }

    fn num_params(&self) -> usize {
        3
    }
}

/// Single-mode phase shifter, PS(φ) = [e^(iφ)]
///
/// Mode-space gate: its matrix is 1x1, embedded by direct sum.
#[derive(Debug, Clone)]
pub struct PhaseShifter {
    phi: Parameter,
}

impl PhaseShifter {
    /// Create with an injected, non-trainable phase
    pub fn encoded(phi: f64) -> Self {
        Self {
            phi: Parameter::encoded(phi),
        }
    }

    /// Create with a self-initialized trainable phase
    pub fn trainable() -> Self {
        Self {
            phi: Parameter::trainable(random_angle()),
        }
    }

    /// The phase φ
    #[inline]
    pub fn phi(&self) -> f64 {
        self.phi.value()
    }
}

impl Gate for PhaseShifter {
    fn name(&self) -> &str {
        "PS"
    }

    fn num_wires(&self) -> usize {
        1
    }

    fn matrix(&self) -> Vec<Complex64> {
        matrix_to_vec(&matrices::phase_shifter(self.phi()))
    }

    fn inverse_matrix(&self) -> Vec<Complex64> {
        matrix_to_vec(&matrices::phase_shifter(-self.phi()))
    }

    fn num_params(&self) -> usize {
        1
    }
}

/// Two-mode Mach-Zehnder interferometer
///
/// Carries the splitting angle θ and internal phase φ; `phi_first` places
/// the internal phase before the splitter (Clements convention) or after.
/// Mode-space gate: its matrix is 2x2, embedded by direct sum.
#[derive(Debug, Clone)]
pub struct Mzi {
    theta: Parameter,
    phi: Parameter,
    phi_first: bool,
}

impl Mzi {
    /// Create with injected, non-trainable angles
    pub fn encoded(theta: f64, phi: f64, phi_first: bool) -> Self {
        Self {
            theta: Parameter::encoded(theta),
            phi: Parameter::encoded(phi),
            phi_first,
        }
    }

    /// Create with self-initialized trainable angles
    pub fn trainable(phi_first: bool) -> Self {
        Self {
            theta: Parameter::trainable(random_angle()),
            phi: Parameter::trainable(random_angle()),
            phi_first,
        }
    }

    /// The splitting angle θ
    #[inline]
    pub fn theta(&self) -> f64 {
        self.theta.value()
    }

    /// The internal phase φ
    #[inline]
    pub fn phi(&self) -> f64 {
        self.phi.value()
    }

    /// Whether the internal phase precedes the splitter
    #[inline]
    pub fn phi_first(&self) -> bool {
        self.phi_first
    }
}

impl Gate for Mzi {
    fn name(&self) -> &str {
        "MZI"
    }

    fn num_wires(&self) -> usize {
        2
    }

    fn matrix(&self) -> Vec<Complex64> {
        matrix_to_vec(&matrices::mzi(self.theta(), self.phi(), self.phi_first))
    }

    fn inverse_matrix(&self) -> Vec<Complex64> {
        matrix_adjoint(&self.matrix())
    }

    fn num_params(&self) -> usize {
        2
    }
}

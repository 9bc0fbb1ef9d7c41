//! Constant gate matrices and parametrized matrix generators
//!
//! Qubit gates are given in the computational basis with wire order
//! matching the tensor-product fold (first wire most significant).
//! Photonic matrices (phase shifter, MZI) live in mode space: a k-mode
//! block is k x k, not 2^k x 2^k.

use num_complex::Complex64;

const ZERO: Complex64 = Complex64::new(0.0, 0.0);
const ONE: Complex64 = Complex64::new(1.0, 0.0);
const I: Complex64 = Complex64::new(0.0, 1.0);
const NEG_I: Complex64 = Complex64::new(0.0, -1.0);
const NEG_ONE: Complex64 = Complex64::new(-1.0, 0.0);

const INV_SQRT2: f64 = std::f64::consts::FRAC_1_SQRT_2;

/// Identity matrix
pub const IDENTITY: [[Complex64; 2]; 2] = [
    [ONE, ZERO],
    [ZERO, ONE],
];

/// Pauli-X gate matrix (NOT gate)
/// X = [[0, 1],
///      [1, 0]]
pub const PAULI_X: [[Complex64; 2]; 2] = [
    [ZERO, ONE],
    [ONE, ZERO],
];

/// Pauli-Y gate matrix
/// Y = [[0, -i],
///      [i,  0]]
pub const PAULI_Y: [[Complex64; 2]; 2] = [
    [ZERO, NEG_I],
    [I, ZERO],
];

/// Pauli-Z gate matrix
/// Z = [[1,  0],
///      [0, -1]]
pub const PAULI_Z: [[Complex64; 2]; 2] = [
    [ONE, ZERO],
    [ZERO, NEG_ONE],
];

/// Hadamard gate matrix
/// H = 1/√2 * [[1,  1],
///             [1, -1]]
pub const HADAMARD: [[Complex64; 2]; 2] = [
    [
        Complex64::new(INV_SQRT2, 0.0),
        Complex64::new(INV_SQRT2, 0.0),
    ],
    [
        Complex64::new(INV_SQRT2, 0.0),
        Complex64::new(-INV_SQRT2, 0.0),
    ],
];

/// CNOT gate matrix, first wire is the control
/// CNOT = [[1, 0, 0, 0],
///         [0, 1, 0, 0],
///         [0, 0, 0, 1],
///         [0, 0, 1, 0]]
pub const CNOT: [[Complex64; 4]; 4] = [
    [ONE, ZERO, ZERO, ZERO],
    [ZERO, ONE, ZERO, ZERO],
    [ZERO, ZERO, ZERO, ONE],
    [ZERO, ZERO, ONE, ZERO],
];

/// Generate rotation-X gate matrix for a given angle
/// RX(θ) = [[cos(θ/2),    -i·sin(θ/2)],
///          [-i·sin(θ/2),  cos(θ/2)]]
#[inline]
pub fn rotation_x(theta: f64) -> [[Complex64; 2]; 2] {
    let half = theta / 2.0;
    let c = half.cos();
    let s = half.sin();

    [
        [Complex64::new(c, 0.0), Complex64::new(0.0, -s)],
        [Complex64::new(0.0, -s), Complex64::new(c, 0.0)],
    ]
}

/// Generate rotation-Y gate matrix for a given angle
/// RY(θ) = [[cos(θ/2),  -sin(θ/2)],
///          [sin(θ/2),   cos(θ/2)]]
#[inline]
pub fn rotation_y(theta: f64) -> [[Complex64; 2]; 2] {
    let half = theta / 2.0;
    let c = half.cos();
    let s = half.sin();

    [
        [Complex64::new(c, 0.0), Complex64::new(-s, 0.0)],
        [Complex64::new(s, 0.0), Complex64::new(c, 0.0)],
    ]
}

/// Generate rotation-Z gate matrix for a given angle
/// RZ(θ) = [[e^(-iθ/2),  0       ],
///          [0,          e^(iθ/2)]]
#[inline]
pub fn rotation_z(theta: f64) -> [[Complex64; 2]; 2] {
    let half = theta / 2.0;

    [
        [Complex64::new(half.cos(), -half.sin()), ZERO],
        [ZERO, Complex64::new(half.cos(), half.sin())],
    ]
}

/// Generate U3 gate matrix (universal single-qubit gate)
/// U3(θ,φ,λ) = [[cos(θ/2),              -e^(iλ)·sin(θ/2)    ],
///              [e^(iφ)·sin(θ/2),        e^(i(φ+λ))·cos(θ/2)]]
#[inline]
pub fn u3(theta: f64, phi: f64, lambda: f64) -> [[Complex64; 2]; 2] {
    let half = theta / 2.0;
    let c = half.cos();
    let s = half.sin();

    let e_phi = Complex64::from_polar(1.0, phi);
    let e_lambda = Complex64::from_polar(1.0, lambda);
    let e_phi_lambda = Complex64::from_polar(1.0, phi + lambda);

    [
        [Complex64::new(c, 0.0), -e_lambda * s],
        [e_phi * s, e_phi_lambda * c],
    ]
}

/// Generate the 1x1 mode-space phase-shifter matrix
/// PS(φ) = [e^(iφ)]
#[inline]
pub fn phase_shifter(phi: f64) -> [[Complex64; 1]; 1] {
    [[Complex64::from_polar(1.0, phi)]]
}

/// Generate the 2x2 mode-space Mach-Zehnder interferometer matrix
///
/// The unit is a 50:50 splitter pair with internal phase shift `phi` on the
/// upper mode and splitting angle `theta`. With `phi_first` the internal
/// phase acts before the splitter (Clements convention); otherwise after.
///
/// `phi_first`:
/// MZI(θ,φ) = i·e^(iθ/2) * [[e^(iφ)·sin(θ/2), cos(θ/2)],
///                          [e^(iφ)·cos(θ/2), -sin(θ/2)]]
#[inline]
pub fn mzi(theta: f64, phi: f64, phi_first: bool) -> [[Complex64; 2]; 2] {
    let half = theta / 2.0;
    let c = half.cos();
    let s = half.sin();
    // i·e^(iθ/2) global prefactor
    let pre = I * Complex64::from_polar(1.0, half);
    let e_phi = Complex64::from_polar(1.0, phi);

    if phi_first {
        [
            [pre * e_phi * s, pre * c],
            [pre * e_phi * c, pre * -s],
        ]
    } else {
        [
            [pre * e_phi * s, pre * e_phi * c],
            [pre * c, pre * -s],
        ]
    }
}

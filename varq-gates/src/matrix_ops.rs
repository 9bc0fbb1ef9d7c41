//! Matrix primitives used by unitary assembly
//!
//! Provides the numeric building blocks consumed by the layer crate:
//! - Tensor products and the multi-Kronecker fold over per-wire matrices
//! - Embedding a gate matrix at arbitrary wire positions
//! - Direct-sum embedding of photonic mode blocks
//! - Multiplication, adjoint and unitarity checks
//!
//! All matrices are flattened row-major `Vec<Complex64>`. For qubit-space
//! operators, wire 0 maps to the most significant bit of a basis index,
//! matching the left-to-right tensor-product fold.

use num_complex::Complex64;

/// Compute the tensor product of two square matrices
///
/// For matrices A (m×m) and B (n×n), the tensor product A ⊗ B is (mn)×(mn).
///
/// # Panics
/// Panics if either matrix is not square.
pub fn tensor_product(a: &[Complex64], b: &[Complex64]) -> Vec<Complex64> {
    let n_a = (a.len() as f64).sqrt() as usize;
    let n_b = (b.len() as f64).sqrt() as usize;

    assert_eq!(n_a * n_a, a.len(), "Matrix A must be square");
    assert_eq!(n_b * n_b, b.len(), "Matrix B must be square");

    let n = n_a * n_b;
    let mut result = vec![Complex64::new(0.0, 0.0); n * n];

    for i in 0..n_a {
        for j in 0..n_a {
            let a_ij = a[i * n_a + j];
            for k in 0..n_b {
                for l in 0..n_b {
                    let row = i * n_b + k;
                    let col = j * n_b + l;
                    result[row * n + col] = a_ij * b[k * n_b + l];
                }
            }
        }
    }

    result
}

/// Fold a sequence of per-wire matrices into one operator
///
/// Computes `matrices[0] ⊗ matrices[1] ⊗ ...` left to right, so the first
/// entry owns the most significant bits of the result's basis indices.
///
/// # Panics
/// Panics if the slice is empty.
pub fn multi_kron(matrices: &[Vec<Complex64>]) -> Vec<Complex64> {
    assert!(!matrices.is_empty(), "multi_kron needs at least one matrix");

    let mut result = matrices[0].clone();
    for m in &matrices[1..] {
        result = tensor_product(&result, m);
    }
    result
}

/// Create an identity matrix of the given side length
pub fn identity_matrix(size: usize) -> Vec<Complex64> {
    let mut matrix = vec![Complex64::new(0.0, 0.0); size * size];
    for i in 0..size {
        matrix[i * size + i] = Complex64::new(1.0, 0.0);
    }
    matrix
}

/// Multiply two square matrices, C = A * B
pub fn matrix_multiply(a: &[Complex64], b: &[Complex64]) -> Vec<Complex64> {
    let n = (a.len() as f64).sqrt() as usize;
    assert_eq!(n * n, a.len(), "Matrix A must be square");
    assert_eq!(n * n, b.len(), "Matrix B must be square");

    let mut result = vec![Complex64::new(0.0, 0.0); n * n];

    for i in 0..n {
        for j in 0..n {
            for k in 0..n {
                result[i * n + j] += a[i * n + k] * b[k * n + j];
            }
        }
    }

    result
}

/// Compute the adjoint (conjugate transpose) of a square matrix
pub fn matrix_adjoint(matrix: &[Complex64]) -> Vec<Complex64> {
    let n = (matrix.len() as f64).sqrt() as usize;
    assert_eq!(n * n, matrix.len(), "Matrix must be square");

    let mut result = vec![Complex64::new(0.0, 0.0); n * n];

    for i in 0..n {
        for j in 0..n {
            result[i * n + j] = matrix[j * n + i].conj();
        }
    }

    result
}

/// Check if a matrix is unitary (U†U = I) within a tolerance
pub fn is_unitary(matrix: &[Complex64], tolerance: f64) -> bool {
    let n = (matrix.len() as f64).sqrt() as usize;
    assert_eq!(n * n, matrix.len(), "Matrix must be square");

    let adjoint = matrix_adjoint(matrix);
    let u_dagger_u = matrix_multiply(&adjoint, matrix);
    let identity = identity_matrix(n);

    u_dagger_u
        .iter()
        .zip(identity.iter())
        .all(|(a, b)| (a - b).norm() <= tolerance)
}

/// Embed a qubit-space gate matrix into a larger system
///
/// Given a gate over `wires.len()` wires (side `2^k`), builds the
/// `2^num_wires` operator acting as the gate on `wires` and as identity on
/// every other wire. The wire group is ordered: `wires[0]` owns the most
/// significant bit of the gate-local basis index.
///
/// Wire groups need not be contiguous or ascending, which the plain
/// tensor-product fold cannot express.
///
/// # Panics
/// Panics if a wire index is out of range or the matrix side doesn't match
/// the wire count.
pub fn embed_gate(
    gate_matrix: &[Complex64],
    num_wires: usize,
    wires: &[usize],
) -> Vec<Complex64> {
    let k = wires.len();
    let side = 1usize << k;
    assert_eq!(
        side * side,
        gate_matrix.len(),
        "Gate matrix side must be 2^(number of wires)"
    );
    for &w in wires {
        assert!(w < num_wires, "Wire index {} out of bounds for {} wires", w, num_wires);
    }

    let dim = 1usize << num_wires;
    let mut result = vec![Complex64::new(0.0, 0.0); dim * dim];

    // Wires the gate does not touch keep their value between row and column.
    let free: Vec<usize> = (0..num_wires).filter(|w| !wires.contains(w)).collect();

    for rest in 0..(1usize << free.len()) {
        let mut base = 0usize;
        for (bit, &w) in free.iter().enumerate() {
            if rest >> bit & 1 == 1 {
                base |= 1 << (num_wires - 1 - w);
            }
        }

        for i in 0..side {
            for j in 0..side {
                let mut row = base;
                let mut col = base;
                for (bit, &w) in wires.iter().enumerate() {
                    let shift = num_wires - 1 - w;
                    if i >> (k - 1 - bit) & 1 == 1 {
                        row |= 1 << shift;
                    }
                    if j >> (k - 1 - bit) & 1 == 1 {
                        col |= 1 << shift;
                    }
                }
                result[row * dim + col] = gate_matrix[i * side + j];
            }
        }
    }

    result
}

/// Embed a photonic mode block into an nmode × nmode operator
///
/// Mode space composes by direct sum, not tensor product: a k-mode block is
/// written into the rows and columns named by `modes`, with identity
/// everywhere else.
///
/// # Panics
/// Panics if a mode index is out of range or the block side doesn't match.
pub fn embed_mode_block(
    block: &[Complex64],
    nmode: usize,
    modes: &[usize],
) -> Vec<Complex64> {
    let side = modes.len();
    assert_eq!(side * side, block.len(), "Block must be square over the given modes");
    for &m in modes {
        assert!(m < nmode, "Mode index {} out of bounds for {} modes", m, nmode);
    }

    let mut result = identity_matrix(nmode);
    for i in 0..side {
        for j in 0..side {
            result[modes[i] * nmode + modes[j]] = block[i * side + j];
        }
    }
    result
}

/// Convert a constant 2D matrix array to a flattened vector
pub fn matrix_to_vec<const N: usize>(matrix: &[[Complex64; N]; N]) -> Vec<Complex64> {
    matrix.iter().flatten().copied().collect()
}

/// Maximum element-wise deviation between two matrices of equal shape
pub fn max_deviation(a: &[Complex64], b: &[Complex64]) -> f64 {
    assert_eq!(a.len(), b.len(), "Matrices must have equal shape");
    a.iter()
        .zip(b.iter())
        .map(|(x, y)| (x - y).norm())
        .fold(0.0, f64::max)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matrices::{CNOT, HADAMARD, IDENTITY, PAULI_X, PAULI_Y};
    use approx::assert_relative_eq;

    #[test]
    fn test_tensor_product() {
        let i = matrix_to_vec(&IDENTITY);
        let x = matrix_to_vec(&PAULI_X);

        // I ⊗ X applies X to the lower (less significant) wire
        let result = tensor_product(&i, &x);
        assert_eq!(result.len(), 16);

        assert_relative_eq!(result[0 * 4 + 1].norm(), 1.0, epsilon = 1e-10);
        assert_relative_eq!(result[1 * 4 + 0].norm(), 1.0, epsilon = 1e-10);
        assert_relative_eq!(result[2 * 4 + 3].norm(), 1.0, epsilon = 1e-10);
        assert_relative_eq!(result[3 * 4 + 2].norm(), 1.0, epsilon = 1e-10);
    }

    #[test]
    fn test_multi_kron_matches_pairwise_fold() {
        let i = matrix_to_vec(&IDENTITY);
        let x = matrix_to_vec(&PAULI_X);
        let h = matrix_to_vec(&HADAMARD);

        let folded = multi_kron(&[i.clone(), x.clone(), h.clone()]);
        let pairwise = tensor_product(&tensor_product(&i, &x), &h);

        assert_eq!(folded.len(), 64);
        assert_relative_eq!(max_deviation(&folded, &pairwise), 0.0, epsilon = 1e-12);
    }

    #[test]
    #[should_panic(expected = "at least one matrix")]
    fn test_multi_kron_rejects_empty() {
        multi_kron(&[]);
    }

    #[test]
    fn test_embed_gate_matches_multi_kron() {
        // X on wire 1 of 2: embed must agree with I ⊗ X
        let x = matrix_to_vec(&PAULI_X);
        let i = matrix_to_vec(&IDENTITY);

        let embedded = embed_gate(&x, 2, &[1]);
        let kron = multi_kron(&[i, x]);

        assert_relative_eq!(max_deviation(&embedded, &kron), 0.0, epsilon = 1e-12);
    }

    #[test]
    fn test_embed_gate_two_wire_contiguous() {
        // CNOT on (0,1) of a 3-wire system equals CNOT ⊗ I
        let cnot = matrix_to_vec(&CNOT);
        let i = matrix_to_vec(&IDENTITY);

        let embedded = embed_gate(&cnot, 3, &[0, 1]);
        let kron = multi_kron(&[cnot, i]);

        assert_relative_eq!(max_deviation(&embedded, &kron), 0.0, epsilon = 1e-12);
    }

    #[test]
    fn test_embed_gate_reversed_pair() {
        // CNOT on (1,0): control on the lower-significance wire.
        // |01⟩ (wire0=0, wire1=1) must flip wire 0 -> |11⟩.
        let cnot = matrix_to_vec(&CNOT);
        let embedded = embed_gate(&cnot, 2, &[1, 0]);

        // basis order |w0 w1⟩: 0=|00⟩ 1=|01⟩ 2=|10⟩ 3=|11⟩
        assert_relative_eq!(embedded[3 * 4 + 1].norm(), 1.0, epsilon = 1e-10);
        assert_relative_eq!(embedded[1 * 4 + 3].norm(), 1.0, epsilon = 1e-10);
        assert_relative_eq!(embedded[0 * 4 + 0].norm(), 1.0, epsilon = 1e-10);
        assert_relative_eq!(embedded[2 * 4 + 2].norm(), 1.0, epsilon = 1e-10);
    }

    #[test]
    fn test_embed_mode_block() {
        let block = matrix_to_vec(&PAULI_X);
        let embedded = embed_mode_block(&block, 4, &[1, 2]);

        assert_eq!(embedded.len(), 16);
        // Identity outside the block
        assert_relative_eq!(embedded[0 * 4 + 0].re, 1.0, epsilon = 1e-10);
        assert_relative_eq!(embedded[3 * 4 + 3].re, 1.0, epsilon = 1e-10);
        // Swap inside the block
        assert_relative_eq!(embedded[1 * 4 + 2].re, 1.0, epsilon = 1e-10);
        assert_relative_eq!(embedded[2 * 4 + 1].re, 1.0, epsilon = 1e-10);
        assert_relative_eq!(embedded[1 * 4 + 1].re, 0.0, epsilon = 1e-10);
    }

    #[test]
    fn test_matrix_multiply_pauli() {
        let x = matrix_to_vec(&PAULI_X);
        let x_squared = matrix_multiply(&x, &x);
        let identity = matrix_to_vec(&IDENTITY);

        assert_relative_eq!(max_deviation(&x_squared, &identity), 0.0, epsilon = 1e-12);
    }

    #[test]
    fn test_matrix_adjoint_hermitian() {
        let y = matrix_to_vec(&PAULI_Y);
        let y_dagger = matrix_adjoint(&y);

        // Y is hermitian
        assert_relative_eq!(max_deviation(&y, &y_dagger), 0.0, epsilon = 1e-12);
    }

    #[test]
    fn test_is_unitary() {
        let h = matrix_to_vec(&HADAMARD);
        assert!(is_unitary(&h, 1e-10));

        let cnot = matrix_to_vec(&CNOT);
        assert!(is_unitary(&cnot, 1e-10));

        let mut not_unitary = matrix_to_vec(&IDENTITY);
        not_unitary[0] = Complex64::new(2.0, 0.0);
        assert!(!is_unitary(&not_unitary, 1e-10));
    }

    #[test]
    fn test_identity_matrix() {
        let i = identity_matrix(3);
        assert_eq!(i.len(), 9);
        for r in 0..3 {
            for c in 0..3 {
                let expected = if r == c { 1.0 } else { 0.0 };
                assert_relative_eq!(i[r * 3 + c].re, expected, epsilon = 1e-12);
            }
        }
    }
}

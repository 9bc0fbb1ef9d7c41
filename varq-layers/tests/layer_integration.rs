//! Integration tests composing layers, rings, observables and meshes

use varq_gates::matrix_ops::{
    identity_matrix, is_unitary, matrix_multiply, max_deviation, multi_kron,
};
use varq_layers::{Angle, AngleDict, ClementsMesh, Layer, Observable};

/// Multiply layer unitaries in application order: first layer acts first.
fn compose(layers: &[&Layer]) -> Vec<num_complex::Complex64> {
    let dim = 1usize << layers[0].num_wires();
    let mut result = identity_matrix(dim);
    for layer in layers {
        result = matrix_multiply(&layer.unitary().unwrap(), &result);
    }
    result
}

#[test]
fn test_ansatz_block_roundtrip() {
    // A hardware-efficient block: rotations followed by ring entanglement.
    // Inverting each layer and applying them in reverse order cancels the
    // whole block.
    let n = 3;
    let ry = Layer::ry_layer(n, None, Some(&[0.4, -0.9, 1.7])).unwrap();
    let rz = Layer::rz_layer(n, None, Some(&[0.2, 0.8, -0.3])).unwrap();
    let ring = Layer::cnot_ring(n, None, 1, false).unwrap();

    let forward = compose(&[&ry, &rz, &ring]);
    let backward = compose(&[&ring.inverse(), &rz.inverse(), &ry.inverse()]);

    let product = matrix_multiply(&backward, &forward);
    let dev = max_deviation(&product, &identity_matrix(1 << n));
    assert!(dev < 1e-10, "deviation {}", dev);
}

#[test]
fn test_layer_unitaries_are_unitary() {
    let n = 3;
    let layers = vec![
        Layer::x_layer(n, None).unwrap(),
        Layer::h_layer(n, None).unwrap(),
        Layer::rx_layer(n, None, Some(&[0.1, 0.2, 0.3])).unwrap(),
        Layer::u3_layer(n, None, None).unwrap(),
        Layer::cnot_layer(n, None).unwrap(),
        Layer::cnot_ring(n, None, 1, false).unwrap(),
        Layer::cnot_ring(n, None, 2, true).unwrap(),
    ];
    for layer in &layers {
        let u = layer.unitary().unwrap();
        assert!(is_unitary(&u, 1e-9), "{} not unitary", layer.name());
    }
}

#[test]
fn test_hadamard_then_cnot_builds_bell_unitary() {
    let h = Layer::h_layer(2, Some(vec![vec![0]])).unwrap();
    let cnot = Layer::cnot_layer(2, None).unwrap();
    let u = compose(&[&h, &cnot]);

    // Column 0 is the Bell state (|00> + |11>)/sqrt(2)
    let inv_sqrt2 = 1.0 / 2f64.sqrt();
    assert!((u[0 * 4 + 0].re - inv_sqrt2).abs() < 1e-10);
    assert!((u[3 * 4 + 0].re - inv_sqrt2).abs() < 1e-10);
    assert!(u[1 * 4 + 0].norm() < 1e-10);
    assert!(u[2 * 4 + 0].norm() < 1e-10);
}

#[test]
fn test_observable_commutes_with_matching_rotation_layer() {
    // Z...Z commutes with any Rz layer.
    let n = 2;
    let obs = Observable::new(n, None, "z").unwrap();
    let rz = Layer::rz_layer(n, None, Some(&[0.7, -1.3])).unwrap();

    let zu = obs.unitary().unwrap();
    let ru = rz.unitary().unwrap();
    let lhs = matrix_multiply(&zu, &ru);
    let rhs = matrix_multiply(&ru, &zu);
    assert!(max_deviation(&lhs, &rhs) < 1e-10);
}

#[test]
fn test_observable_layer_matches_kron_of_bases() {
    let obs = Observable::new(2, None, "xz").unwrap();
    let x = vec![
        num_complex::Complex64::new(0.0, 0.0),
        num_complex::Complex64::new(1.0, 0.0),
        num_complex::Complex64::new(1.0, 0.0),
        num_complex::Complex64::new(0.0, 0.0),
    ];
    let z = vec![
        num_complex::Complex64::new(1.0, 0.0),
        num_complex::Complex64::new(0.0, 0.0),
        num_complex::Complex64::new(0.0, 0.0),
        num_complex::Complex64::new(-1.0, 0.0),
    ];
    let expected = multi_kron(&[x, z]);
    assert!(max_deviation(&obs.unitary().unwrap(), &expected) < 1e-12);
}

#[test]
fn test_mesh_dict_to_unitary_pipeline() {
    // Dictionary -> flat vector -> mesh -> mode-space unitary.
    let nmode = 3;
    let mesh = ClementsMesh::new(nmode, true).unwrap();

    let mut dict = AngleDict::new();
    for wire in 0..nmode {
        for column in 0..(2 * nmode) {
            dict.insert(
                (wire, column),
                Angle::Scalar(0.31 * (wire as f64) + 0.17 * (column as f64)),
            );
        }
    }

    let data = mesh.angle_dict_to_vector(&dict).unwrap();
    assert_eq!(data.len(), nmode * nmode);

    let loaded = ClementsMesh::with_angles(nmode, true, &data).unwrap();
    let u = loaded.unitary();
    assert_eq!(u.len(), nmode * nmode);
    assert!(is_unitary(&u, 1e-10));
}

#[test]
fn test_mesh_zero_angles_phase_only() {
    // With every angle zero each MZI still mixes its two modes, so the
    // operator is unitary but not the identity.
    let mesh = ClementsMesh::new(2, false).unwrap();
    let u = mesh.unitary();
    assert!(is_unitary(&u, 1e-10));
    assert!(max_deviation(&u, &identity_matrix(2)) > 0.5);
}

#[test]
fn test_encoded_layers_carry_expected_param_counts() {
    let rx = Layer::rx_layer(4, None, Some(&[0.0; 4])).unwrap();
    let u3 = Layer::u3_layer(4, None, Some(&[0.0; 12])).unwrap();
    let ring = Layer::cnot_ring(4, None, 1, false).unwrap();
    let mesh = ClementsMesh::new(4, true).unwrap();

    assert_eq!(rx.num_params(), 4);
    assert_eq!(u3.num_params(), 12);
    assert_eq!(ring.num_params(), 0);
    assert_eq!(mesh.num_params(), 16);
}

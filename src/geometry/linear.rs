use crate::geometry::Vector3;

/// Determinant of the 3×3 matrix with columns `x`, `y`, `z`, by the
/// triple-product expansion.
pub fn determinant3(x: Vector3<f32>, y: Vector3<f32>, z: Vector3<f32>) -> f32 {
    x.x * y.y * z.z + y.x * z.y * x.z + z.x * x.y * y.z
        - z.x * y.y * x.z
        - y.x * x.y * z.z
        - x.x * z.y * y.z
}

/// Cramer's-rule solve of `[x y z] · s = rhs`.
///
/// Returns [`Vector3::MAX`] when the main determinant is zero. The remesher
/// runs this solve once per candidate triangle per vertex, and near-parallel
/// configurations are routine there, so degeneracy is signalled in-band
/// instead of through an error type.
pub fn solve3(
    x: Vector3<f32>,
    y: Vector3<f32>,
    z: Vector3<f32>,
    rhs: Vector3<f32>,
) -> Vector3<f32> {
    let main = determinant3(x, y, z);
    if main == 0.0 {
        return Vector3::MAX;
    }
    Vector3::new(
        determinant3(rhs, y, z) / main,
        determinant3(x, rhs, z) / main,
        determinant3(x, y, rhs) / main,
    )
}

/// First unknown of `[x y z] · s = rhs`, with the second and third unknowns
/// constrained to [0, 1].
///
/// The constrained minors are evaluated first so a miss rejects before the
/// remaining determinant is computed; a degenerate system or an
/// out-of-range unknown yields `f32::MAX`. With the remesher's edge-vector
/// columns the [0, 1] × [0, 1] acceptance region spans the full
/// parallelogram of the two edges, not only the triangular half.
pub fn ray_parameter(
    x: Vector3<f32>,
    y: Vector3<f32>,
    z: Vector3<f32>,
    rhs: Vector3<f32>,
) -> f32 {
    let main = determinant3(x, y, z);
    if main == 0.0 {
        return f32::MAX;
    }
    let u = determinant3(x, rhs, z) / main;
    if !(0.0..=1.0).contains(&u) {
        return f32::MAX;
    }
    let v = determinant3(x, y, rhs) / main;
    if !(0.0..=1.0).contains(&v) {
        return f32::MAX;
    }
    determinant3(rhs, y, z) / main
}

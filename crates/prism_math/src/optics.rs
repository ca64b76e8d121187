//! Mirror reflection and Snell refraction of unit vectors.

use crate::Vec3;

/// Reflect the incident vector `v` about the unit normal `n`.
#[inline]
pub fn reflect(v: Vec3, n: Vec3) -> Vec3 {
    v - 2.0 * v.dot(n) * n
}

/// Refract the unit incident vector `v` through a surface with unit normal `n`.
///
/// `n` must face against `v`, and `eta` is the ratio of the refractive index
/// on the incident side to the one on the far side. Returns `None` on total
/// internal reflection.
#[inline]
pub fn refract(v: Vec3, n: Vec3, eta: f32) -> Option<Vec3> {
    let cos_i = n.dot(v);
    let k = 1.0 - eta * eta * (1.0 - cos_i * cos_i);
    if k < 0.0 {
        return None;
    }
    Some(eta * v - (eta * cos_i + k.sqrt()) * n)
}

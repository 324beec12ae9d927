//! Stateless numeric primitives over magnitude vectors.
//!
//! These are the only arithmetic the step engine performs; everything is
//! `f32` to match the rest of the crate.

use ndarray::{Array1, ArrayView1};

/// Euclidean length of a vector. Returns 0 for an all-zero vector.
#[inline]
pub fn magnitude(v: ArrayView1<f32>) -> f32 {
    v.dot(&v).sqrt()
}

/// Inner product. Lengths must match; this is the caller's responsibility.
#[inline]
pub fn dot(a: ArrayView1<f32>, b: ArrayView1<f32>) -> f32 {
    debug_assert_eq!(a.len(), b.len());
    a.dot(&b)
}

/// Elementwise multiply by a scalar, returning a new vector.
#[inline]
pub fn scale(v: ArrayView1<f32>, s: f32) -> Array1<f32> {
    v.mapv(|x| x * s)
}

/// Divide every element by the vector's magnitude, in place.
///
/// No epsilon guard: a zero vector produces non-finite values. The step
/// engine adds its own 1e-6 to the magnitude before normalizing input
/// windows, so it never hits this case.
#[inline]
pub fn normalize_in_place(v: &mut Array1<f32>) {
    let m = magnitude(v.view());
    v.mapv_inplace(|x| x / m);
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::array;

    #[test]
    fn test_magnitude() {
        let v = array![3.0f32, 4.0];
        assert!((magnitude(v.view()) - 5.0).abs() < 1e-6);

        let zero = Array1::<f32>::zeros(8);
        assert_eq!(magnitude(zero.view()), 0.0);
    }

    #[test]
    fn test_dot() {
        let a = array![1.0f32, 2.0, 3.0];
        let b = array![4.0f32, 5.0, 6.0];
        assert!((dot(a.view(), b.view()) - 32.0).abs() < 1e-6);
    }

    #[test]
    fn test_scale_allocates() {
        let v = array![1.0f32, -2.0, 0.5];
        let s = scale(v.view(), 2.0);
        assert_eq!(s, array![2.0f32, -4.0, 1.0]);
        // input untouched
        assert_eq!(v, array![1.0f32, -2.0, 0.5]);
    }

    #[test]
    fn test_normalize_unit_length() {
        let mut v = array![1.0f32, 2.0, 2.0, 4.0, 0.5];
        normalize_in_place(&mut v);
        assert!((magnitude(v.view()) - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_normalize_preserves_direction() {
        let mut v = array![3.0f32, 4.0];
        normalize_in_place(&mut v);
        assert!((v[0] - 0.6).abs() < 1e-6);
        assert!((v[1] - 0.8).abs() < 1e-6);
    }
}

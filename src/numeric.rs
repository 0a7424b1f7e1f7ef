//! Scalar primitives shared by the geometry types.
//!
//! Everything here is exact: results are compared against zero with the
//! native `f64` equality, never against a tolerance.

/// Determinant of the 2x2 matrix `[[a, b], [c, d]]`.
#[inline]
pub fn determinant2(a: f64, b: f64, c: f64, d: f64) -> f64 {
    a * d - b * c
}

/// `2^k` for `k` in the normal exponent range `-1022..=1023`.
#[inline]
fn pow2(k: i32) -> f64 {
    f64::from_bits(((k + 1023) as u64) << 52)
}

/// Scales `t` by a power of two so that its largest magnitude lies in `[1, 2)`.
///
/// Power-of-two scaling leaves the mantissas alone, so the rank of a pair of
/// tuples is preserved while their products stay far from overflow and
/// underflow. Zero and non-finite tuples are returned unchanged.
fn normalize_exponent(t: [f64; 4]) -> [f64; 4] {
    let mut m = t.iter().fold(0.0_f64, |acc, c| acc.max(c.abs()));
    if m == 0.0 || !m.is_finite() {
        return t;
    }
    let mut t = t;
    if m < f64::MIN_POSITIVE {
        // subnormal: lift into the normal range first
        let lift = pow2(54);
        t = t.map(|c| c * lift);
        m *= lift;
    }
    let e = ((m.to_bits() >> 52) & 0x7ff) as i32 - 1023;
    // two steps, since 2^-1023 is itself subnormal
    let s1 = pow2(-e / 2);
    let s2 = pow2(-e - (-e / 2));
    t.map(|c| c * s1 * s2)
}

/// Returns true if `(a1, b1, c1, d1)` and `(a2, b2, c2, d2)` are linearly
/// dependent, i.e. the 2x4 matrix they form has rank at most one.
///
/// The zero tuple is dependent on every tuple, and negative scale factors
/// count as dependence. Each tuple is first rescaled by a power of two, so
/// the six 2x2 minors stay finite and nonzero products do not vanish, for
/// any finite magnitude.
#[allow(clippy::too_many_arguments)]
pub fn are_dependent4(
    a1: f64,
    b1: f64,
    c1: f64,
    d1: f64,
    a2: f64,
    b2: f64,
    c2: f64,
    d2: f64,
) -> bool {
    let [a1, b1, c1, d1] = normalize_exponent([a1, b1, c1, d1]);
    let [a2, b2, c2, d2] = normalize_exponent([a2, b2, c2, d2]);
    determinant2(a1, a2, b1, b2) == 0.0
        && determinant2(a1, a2, c1, c2) == 0.0
        && determinant2(a1, a2, d1, d2) == 0.0
        && determinant2(b1, b2, c1, c2) == 0.0
        && determinant2(b1, b2, d1, d2) == 0.0
        && determinant2(c1, c2, d1, d2) == 0.0
}

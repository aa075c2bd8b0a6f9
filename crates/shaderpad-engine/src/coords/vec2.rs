use core::fmt;
use core::ops::{Add, Div, Mul, Neg, Rem, Sub};

use super::error::{expect_pair, ValidationError};

/// Anything that normalizes into a [`Vec2`].
///
/// `Slice` is the only shape whose length is unknown at compile time and the
/// only one that can be rejected.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum Vec2Like<'a> {
    /// Fills both components.
    Scalar(f32),
    Vector(Vec2),
    Pair([f32; 2]),
    Slice(&'a [f32]),
}

impl Default for Vec2Like<'_> {
    fn default() -> Self {
        Vec2Like::Scalar(0.0)
    }
}

impl From<f32> for Vec2Like<'_> {
    fn from(value: f32) -> Self {
        Vec2Like::Scalar(value)
    }
}

impl From<Vec2> for Vec2Like<'_> {
    fn from(value: Vec2) -> Self {
        Vec2Like::Vector(value)
    }
}

impl From<[f32; 2]> for Vec2Like<'_> {
    fn from(value: [f32; 2]) -> Self {
        Vec2Like::Pair(value)
    }
}

impl<'a> From<&'a [f32]> for Vec2Like<'a> {
    fn from(value: &'a [f32]) -> Self {
        Vec2Like::Slice(value)
    }
}

impl<'a> From<&'a Vec<f32>> for Vec2Like<'a> {
    fn from(value: &'a Vec<f32>) -> Self {
        Vec2Like::Slice(value.as_slice())
    }
}

/// 2D vector used for pointer and shader-space coordinates.
///
/// Arithmetic is pure and returns new values. The `set_*` methods are the only
/// way to change a vector in place, which is how a long-lived accumulator is
/// updated. `Vec2` is `Copy`; take `*v` when a caller needs a snapshot that
/// later writes through `&mut` must not affect.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct Vec2 {
    xy: [f32; 2],
}

impl Vec2 {
    pub const ZERO: Vec2 = Vec2::new(0.0, 0.0);

    #[inline]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { xy: [x, y] }
    }

    #[inline]
    pub const fn splat(v: f32) -> Self {
        Self::new(v, v)
    }

    /// Normalizes any vector-like input.
    ///
    /// Fails only for a slice whose length is not exactly two.
    pub fn from_like<'a>(value: impl Into<Vec2Like<'a>>) -> Result<Self, ValidationError> {
        match value.into() {
            Vec2Like::Scalar(v) => Ok(Self::splat(v)),
            Vec2Like::Vector(v) => Ok(Self::new(v.x(), v.y())),
            Vec2Like::Pair([x, y]) => Ok(Self::new(x, y)),
            Vec2Like::Slice(values) => {
                let [x, y] = expect_pair(values)?;
                Ok(Self::new(x, y))
            }
        }
    }

    #[inline]
    pub const fn x(&self) -> f32 {
        self.xy[0]
    }

    #[inline]
    pub const fn y(&self) -> f32 {
        self.xy[1]
    }

    #[inline]
    pub fn set_x(&mut self, x: f32) {
        self.xy[0] = x;
    }

    #[inline]
    pub fn set_y(&mut self, y: f32) {
        self.xy[1] = y;
    }

    /// Copy of both components in `(x, y)` order.
    #[inline]
    pub const fn xy(&self) -> [f32; 2] {
        self.xy
    }

    /// Copy of both components in `(y, x)` order.
    #[inline]
    pub const fn yx(&self) -> [f32; 2] {
        [self.xy[1], self.xy[0]]
    }

    /// Replaces both components. On error the vector is left untouched.
    pub fn set_xy(&mut self, pair: &[f32]) -> Result<(), ValidationError> {
        self.xy = expect_pair(pair)?;
        Ok(())
    }

    /// Replaces this vector with the normalization of `value`.
    pub fn set<'a>(&mut self, value: impl Into<Vec2Like<'a>>) -> Result<(), ValidationError> {
        *self = Self::from_like(value)?;
        Ok(())
    }

    /// Read-only view of the backing pair, e.g. for uniform upload.
    #[inline]
    pub const fn as_pair(&self) -> &[f32; 2] {
        &self.xy
    }

    /// Componentwise `max(min, min(max, v))`.
    ///
    /// Bounds are shared by both axes. `min > max` yields `min`, NaN stays NaN.
    pub fn clamp(self, min: f32, max: f32) -> Self {
        Self::new(clamp_scalar(self.x(), min, max), clamp_scalar(self.y(), min, max))
    }

    /// Negates `x`.
    #[inline]
    pub fn mirror_x(self) -> Self {
        self * [-1.0, 1.0]
    }

    /// Negates `y`.
    #[inline]
    pub fn mirror_y(self) -> Self {
        self * [1.0, -1.0]
    }

    #[inline]
    pub fn is_finite(self) -> bool {
        self.x().is_finite() && self.y().is_finite()
    }
}

fn clamp_scalar(v: f32, min: f32, max: f32) -> f32 {
    let upper = if v > max { max } else { v };
    if upper < min { min } else { upper }
}

impl From<f32> for Vec2 {
    #[inline]
    fn from(value: f32) -> Self {
        Self::splat(value)
    }
}

impl From<[f32; 2]> for Vec2 {
    #[inline]
    fn from([x, y]: [f32; 2]) -> Self {
        Self::new(x, y)
    }
}

impl From<(f32, f32)> for Vec2 {
    #[inline]
    fn from((x, y): (f32, f32)) -> Self {
        Self::new(x, y)
    }
}

impl From<Vec2> for [f32; 2] {
    #[inline]
    fn from(value: Vec2) -> Self {
        value.xy
    }
}

impl TryFrom<&[f32]> for Vec2 {
    type Error = ValidationError;

    fn try_from(value: &[f32]) -> Result<Self, Self::Error> {
        Self::from_like(value)
    }
}

impl<'a> TryFrom<Vec2Like<'a>> for Vec2 {
    type Error = ValidationError;

    fn try_from(value: Vec2Like<'a>) -> Result<Self, Self::Error> {
        Self::from_like(value)
    }
}

macro_rules! componentwise {
    ($trait:ident, $method:ident, $op:tt) => {
        impl $trait<Vec2> for Vec2 {
            type Output = Vec2;
            #[inline]
            fn $method(self, rhs: Vec2) -> Vec2 {
                Vec2::new(self.x() $op rhs.x(), self.y() $op rhs.y())
            }
        }

        impl $trait<f32> for Vec2 {
            type Output = Vec2;
            #[inline]
            fn $method(self, rhs: f32) -> Vec2 {
                self $op Vec2::splat(rhs)
            }
        }

        impl $trait<[f32; 2]> for Vec2 {
            type Output = Vec2;
            #[inline]
            fn $method(self, rhs: [f32; 2]) -> Vec2 {
                self $op Vec2::from(rhs)
            }
        }
    };
}

componentwise!(Add, add, +);
componentwise!(Sub, sub, -);
componentwise!(Mul, mul, *);
componentwise!(Div, div, /);
componentwise!(Rem, rem, %);

impl Neg for Vec2 {
    type Output = Vec2;
    #[inline]
    fn neg(self) -> Vec2 {
        Vec2::new(-self.x(), -self.y())
    }
}

impl fmt::Display for Vec2 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("vec2(")?;
        write_fixed2(f, self.x())?;
        f.write_str(", ")?;
        write_fixed2(f, self.y())?;
        f.write_str(")")
    }
}

/// Two-decimal fixed notation: ties round away from zero, `-0.0` prints
/// unsigned, non-finite values print as `NaN` / `Infinity` / `-Infinity`.
fn write_fixed2(f: &mut fmt::Formatter<'_>, v: f32) -> fmt::Result {
    if v.is_nan() {
        return f.write_str("NaN");
    }

    let sign = if v < 0.0 { "-" } else { "" };
    if v.is_infinite() {
        return write!(f, "{sign}Infinity");
    }

    // 24 mantissa bits times 100 fit in an f64 exactly, so ties are exact here.
    let scaled = f64::from(v).abs() * 100.0;
    let mut hundredths = scaled.floor();
    if scaled - hundredths >= 0.5 {
        hundredths += 1.0;
    }

    write!(f, "{sign}{:.2}", hundredths / 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn v(x: f32, y: f32) -> Vec2 { Vec2::new(x, y) }

    const SAMPLES: [f32; 7] = [0.0, 1.0, -1.0, 0.5, 123.25, -7.75, 1.0e6];

    // ── construction ──────────────────────────────────────────────────────

    #[test]
    fn scalar_fills_both_components() {
        for s in SAMPLES {
            let vec = Vec2::from_like(s).unwrap();
            assert_eq!(vec.x(), s);
            assert_eq!(vec.y(), s);
        }
    }

    #[test]
    fn omitted_input_is_zero() {
        assert_eq!(Vec2::from_like(Vec2Like::default()).unwrap(), Vec2::ZERO);
        assert_eq!(Vec2::default(), Vec2::ZERO);
    }

    #[test]
    fn pair_is_positional() {
        for a in SAMPLES {
            for b in SAMPLES {
                let vec = Vec2::from_like([a, b]).unwrap();
                assert_eq!(vec.xy(), [a, b]);
                assert_eq!(vec.yx(), [b, a]);
            }
        }
    }

    #[test]
    fn slice_of_two_is_accepted() {
        let values: Vec<f32> = vec![3.0, 4.0];
        assert_eq!(Vec2::from_like(&values).unwrap(), v(3.0, 4.0));
        assert_eq!(Vec2::try_from(&values[..]).unwrap(), v(3.0, 4.0));
    }

    #[test]
    fn slice_of_wrong_length_is_rejected() {
        let cases: [&[f32]; 3] = [&[], &[1.0], &[1.0, 2.0, 3.0]];
        for values in cases {
            assert_eq!(
                Vec2::from_like(values),
                Err(ValidationError::InvalidSize { len: values.len() })
            );
        }
    }

    #[test]
    fn copy_from_vector_is_independent() {
        let mut source = v(1.0, 2.0);
        let copy = Vec2::from_like(source).unwrap();
        source.set_x(9.0);
        assert_eq!(copy, v(1.0, 2.0));
    }

    // ── mutation ──────────────────────────────────────────────────────────

    #[test]
    fn component_setters_mutate_in_place() {
        let mut vec = Vec2::ZERO;
        vec.set_x(1.5);
        vec.set_y(-2.5);
        assert_eq!(vec, v(1.5, -2.5));
    }

    #[test]
    fn set_xy_replaces_both() {
        let mut vec = v(1.0, 2.0);
        vec.set_xy(&[5.0, 6.0]).unwrap();
        assert_eq!(vec, v(5.0, 6.0));
    }

    #[test]
    fn set_xy_rejects_bad_length_without_mutating() {
        let mut vec = v(1.0, 2.0);
        assert_eq!(
            vec.set_xy(&[5.0, 6.0, 7.0]),
            Err(ValidationError::InvalidSize { len: 3 })
        );
        assert_eq!(vec, v(1.0, 2.0));
    }

    #[test]
    fn set_normalizes_any_shape() {
        let mut vec = Vec2::ZERO;
        vec.set(4.0).unwrap();
        assert_eq!(vec, v(4.0, 4.0));
        vec.set([1.0, 2.0]).unwrap();
        assert_eq!(vec, v(1.0, 2.0));
        let short: &[f32] = &[1.0];
        assert!(vec.set(short).is_err());
        assert_eq!(vec, v(1.0, 2.0));
    }

    #[test]
    fn mutation_is_visible_through_the_borrow() {
        let mut acc = Vec2::ZERO;
        let snapshot = acc;
        {
            let handle = &mut acc;
            handle.set_x(1.0);
        }
        assert_eq!(acc.x(), 1.0);
        assert_eq!(snapshot.x(), 0.0);
    }

    #[test]
    fn yx_does_not_mutate() {
        let vec = v(1.0, 2.0);
        let _ = vec.yx();
        assert_eq!(vec.xy(), [1.0, 2.0]);
    }

    // ── arithmetic ────────────────────────────────────────────────────────

    #[test]
    fn arithmetic_is_componentwise() {
        let a = v(6.0, 8.0);
        assert_eq!(a + v(1.0, 2.0), v(7.0, 10.0));
        assert_eq!(a - [1.0, 2.0], v(5.0, 6.0));
        assert_eq!(a * 2.0, v(12.0, 16.0));
        assert_eq!(a / [3.0, 4.0], v(2.0, 2.0));
        assert_eq!(a % v(4.0, 3.0), v(2.0, 2.0));
    }

    #[test]
    fn arithmetic_leaves_receiver_unchanged() {
        let a = v(1.0, 2.0);
        let _ = a + 1.0;
        let _ = a.mirror_x();
        let _ = a.clamp(0.0, 0.5);
        assert_eq!(a, v(1.0, 2.0));
    }

    #[test]
    fn add_then_sub_is_identity() {
        for a in SAMPLES {
            for b in SAMPLES {
                let vec = v(a, b);
                let w = v(b * 0.5, a - 3.0);
                let back = (vec + w) - w;
                assert!((back.x() - vec.x()).abs() <= 1e-6 * a.abs().max(b.abs()).max(1.0));
                assert!((back.y() - vec.y()).abs() <= 1e-6 * a.abs().max(b.abs()).max(1.0));
            }
        }
    }

    #[test]
    fn remainder_is_truncated() {
        assert_eq!(v(-7.0, 7.0) % 3.0, v(-1.0, 1.0));
    }

    #[test]
    fn negation() {
        assert_eq!(-v(1.0, -2.0), v(-1.0, 2.0));
    }

    // ── IEEE edge cases ───────────────────────────────────────────────────

    #[test]
    fn divide_by_zero_yields_infinity() {
        let r = Vec2::from_like([1.0, 0.0]).unwrap() / [0.0, 1.0];
        assert_eq!(r.x(), f32::INFINITY);
        assert_eq!(r.y(), 0.0);
        assert!(!r.is_finite());
    }

    #[test]
    fn zero_over_zero_is_nan() {
        let r = Vec2::ZERO / 0.0;
        assert!(r.x().is_nan());
        assert!(r.y().is_nan());
    }

    #[test]
    fn modulo_by_zero_is_nan() {
        let r = v(5.0, 5.0) % [0.0, 2.0];
        assert!(r.x().is_nan());
        assert_eq!(r.y(), 1.0);
    }

    // ── mirror ────────────────────────────────────────────────────────────

    #[test]
    fn mirror_flips_one_axis() {
        assert_eq!(v(1.0, 2.0).mirror_x(), v(-1.0, 2.0));
        assert_eq!(v(1.0, 2.0).mirror_y(), v(1.0, -2.0));
    }

    #[test]
    fn mirror_is_an_involution() {
        for a in SAMPLES {
            for b in SAMPLES {
                let vec = v(a, b);
                assert_eq!(vec.mirror_x().mirror_x(), vec);
                assert_eq!(vec.mirror_y().mirror_y(), vec);
            }
        }
    }

    // ── clamp ─────────────────────────────────────────────────────────────

    #[test]
    fn clamp_bounds_both_components() {
        for a in SAMPLES {
            for b in SAMPLES {
                let c = v(a, b).clamp(-1.0, 1.0);
                assert!((-1.0..=1.0).contains(&c.x()));
                assert!((-1.0..=1.0).contains(&c.y()));
            }
        }
    }

    #[test]
    fn clamp_in_range_is_identity() {
        let vec = v(0.25, -0.75);
        assert_eq!(vec.clamp(-1.0, 1.0), vec);
    }

    #[test]
    fn clamp_inverted_bounds_yield_min() {
        assert_eq!(v(5.0, -5.0).clamp(3.0, 1.0), v(3.0, 3.0));
    }

    #[test]
    fn clamp_keeps_nan() {
        assert!(v(f32::NAN, 0.0).clamp(0.0, 1.0).x().is_nan());
    }

    // ── formatting / coercion ─────────────────────────────────────────────

    #[test]
    fn display_uses_two_decimals() {
        assert_eq!(v(1.0, 2.5).to_string(), "vec2(1.00, 2.50)");
        assert_eq!(v(-0.126, 10.0).to_string(), "vec2(-0.13, 10.00)");
    }

    #[test]
    fn display_of_near_two() {
        let s = Vec2::from_like([1.0, 2.005]).unwrap().to_string();
        assert!(s.starts_with("vec2(1.00, 2.0"), "{s}");
        assert!(s.ends_with(')'));
        let second = &s["vec2(1.00, ".len()..s.len() - 1];
        assert_eq!(second.split('.').nth(1).map(str::len), Some(2), "{s}");
    }

    #[test]
    fn display_drops_sign_of_negative_zero() {
        assert_eq!(Vec2::ZERO.mirror_x().to_string(), "vec2(0.00, 0.00)");
        assert_eq!(v(-0.0, -0.0).to_string(), "vec2(0.00, 0.00)");
    }

    #[test]
    fn display_keeps_sign_of_small_negatives() {
        assert_eq!(v(-0.001, 0.001).to_string(), "vec2(-0.00, 0.00)");
    }

    #[test]
    fn display_rounds_ties_away_from_zero() {
        assert_eq!(v(0.125, -0.125).to_string(), "vec2(0.13, -0.13)");
        assert_eq!(v(2.375, -0.625).to_string(), "vec2(2.38, -0.63)");
    }

    #[test]
    fn display_spells_non_finite_values() {
        let r = Vec2::from_like([1.0, 0.0]).unwrap() / [0.0, 0.0];
        assert_eq!(r.to_string(), "vec2(Infinity, NaN)");
        assert_eq!(v(f32::NEG_INFINITY, 1.0).to_string(), "vec2(-Infinity, 1.00)");
    }

    #[test]
    fn as_pair_borrows_backing_storage() {
        let vec = v(3.0, 4.0);
        assert_eq!(vec.as_pair(), &[3.0, 4.0]);
        let pair: [f32; 2] = vec.into();
        assert_eq!(pair, [3.0, 4.0]);
    }
}

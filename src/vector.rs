//! Vector algebra helpers on top of `glam`.
//!
//! `glam::Vec2` already covers componentwise arithmetic, min/max, lerp and
//! rounding; this module adds the pieces a layout/render pipeline needs on
//! top of that: axis-indexed access, positive-minimum, and conversions to
//! integer-grid and 26.6 fixed-point coordinates.

use glam::{IVec2, Vec2};
use std::fmt;

/// A two-valued axis selector, for indexing into vectors (and per-axis
/// matrix factors) without duplicating per-axis code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    X,
    Y,
}

impl Axis {
    /// The other axis.
    pub fn other(self) -> Axis {
        match self {
            Axis::X => Axis::Y,
            Axis::Y => Axis::X,
        }
    }
}

/// Minimum of two values, ignoring any that are not positive.
///
/// Layout code uses zero as "unset"; this picks the smaller of two sizes
/// without letting an unset one win.
pub fn min_pos(a: f32, b: f32) -> f32 {
    if a > 0.0 && b > 0.0 {
        a.min(b)
    } else if a > 0.0 {
        a
    } else {
        b
    }
}

/// Domain extensions for [`glam::Vec2`].
pub trait Vec2Ext {
    /// Component along `axis`.
    fn axis(self, axis: Axis) -> f32;
    /// Copy with the component along `axis` replaced.
    fn with_axis(self, axis: Axis, value: f32) -> Vec2;
    /// Set the component along `axis` in place.
    fn set_axis(&mut self, axis: Axis, value: f32);
    /// Componentwise [`min_pos`].
    fn min_pos(self, other: Vec2) -> Vec2;
    /// Truncate both components toward zero.
    fn to_grid(self) -> IVec2;
    /// Floor both components.
    fn to_grid_floor(self) -> IVec2;
    /// Ceil both components.
    fn to_grid_ceil(self) -> IVec2;
    /// Round both components to the nearest integer.
    fn to_grid_round(self) -> IVec2;
    /// Convert to 26.6 fixed point.
    fn to_fixed(self) -> FixedPoint;
}

impl Vec2Ext for Vec2 {
    fn axis(self, axis: Axis) -> f32 {
        match axis {
            Axis::X => self.x,
            Axis::Y => self.y,
        }
    }

    fn with_axis(self, axis: Axis, value: f32) -> Vec2 {
        let mut v = self;
        v.set_axis(axis, value);
        v
    }

    fn set_axis(&mut self, axis: Axis, value: f32) {
        match axis {
            Axis::X => self.x = value,
            Axis::Y => self.y = value,
        }
    }

    fn min_pos(self, other: Vec2) -> Vec2 {
        Vec2::new(min_pos(self.x, other.x), min_pos(self.y, other.y))
    }

    fn to_grid(self) -> IVec2 {
        self.as_ivec2()
    }

    fn to_grid_floor(self) -> IVec2 {
        self.floor().as_ivec2()
    }

    fn to_grid_ceil(self) -> IVec2 {
        self.ceil().as_ivec2()
    }

    fn to_grid_round(self) -> IVec2 {
        self.round().as_ivec2()
    }

    fn to_fixed(self) -> FixedPoint {
        FixedPoint {
            x: Fixed26_6::from_f32(self.x),
            y: Fixed26_6::from_f32(self.y),
        }
    }
}

/// 26.6 fixed-point coordinate: 26 integer bits, 6 fractional bits.
///
/// The interchange format of font and scan-conversion libraries; kept as a
/// zero-cost newtype so it cannot be confused with a plain count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
#[repr(transparent)]
pub struct Fixed26_6(pub i32);

impl Fixed26_6 {
    pub const ZERO: Fixed26_6 = Fixed26_6(0);

    /// Convert from float, truncating sub-1/64 precision.
    pub fn from_f32(v: f32) -> Fixed26_6 {
        Fixed26_6((v * 64.0) as i32)
    }

    pub fn to_f32(self) -> f32 {
        self.0 as f32 / 64.0
    }
}

impl fmt::Display for Fixed26_6 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_f32())
    }
}

/// A point in 26.6 fixed-point coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FixedPoint {
    pub x: Fixed26_6,
    pub y: Fixed26_6,
}

impl FixedPoint {
    pub fn to_vec2(self) -> Vec2 {
        Vec2::new(self.x.to_f32(), self.y.to_f32())
    }
}

impl From<Vec2> for FixedPoint {
    fn from(v: Vec2) -> FixedPoint {
        v.to_fixed()
    }
}

impl From<FixedPoint> for Vec2 {
    fn from(p: FixedPoint) -> Vec2 {
        p.to_vec2()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::{ivec2, vec2};

    #[test]
    fn axis_access() {
        let v = vec2(3.0, 7.0);
        assert_eq!(v.axis(Axis::X), 3.0);
        assert_eq!(v.axis(Axis::Y), 7.0);
        assert_eq!(Axis::X.other(), Axis::Y);
        assert_eq!(Axis::Y.other(), Axis::X);
    }

    #[test]
    fn axis_update() {
        let mut v = vec2(1.0, 2.0);
        v.set_axis(Axis::Y, 9.0);
        assert_eq!(v, vec2(1.0, 9.0));
        assert_eq!(v.with_axis(Axis::X, 4.0), vec2(4.0, 9.0));
        // with_axis does not mutate the receiver
        assert_eq!(v, vec2(1.0, 9.0));
    }

    #[test]
    fn min_pos_ignores_unset() {
        assert_eq!(min_pos(3.0, 5.0), 3.0);
        assert_eq!(min_pos(0.0, 5.0), 5.0);
        assert_eq!(min_pos(3.0, 0.0), 3.0);
        assert_eq!(min_pos(0.0, 0.0), 0.0);
        assert_eq!(
            vec2(2.0, 0.0).min_pos(vec2(5.0, 4.0)),
            vec2(2.0, 4.0)
        );
    }

    #[test]
    fn grid_conversions() {
        let v = vec2(1.7, -1.7);
        assert_eq!(v.to_grid(), ivec2(1, -1));
        assert_eq!(v.to_grid_floor(), ivec2(1, -2));
        assert_eq!(v.to_grid_ceil(), ivec2(2, -1));
        assert_eq!(v.to_grid_round(), ivec2(2, -2));
    }

    #[test]
    fn fixed_point_round_trip() {
        assert_eq!(Fixed26_6::from_f32(1.5).0, 96);
        assert_eq!(Fixed26_6::from_f32(-0.25).0, -16);
        assert_eq!(Fixed26_6(96).to_f32(), 1.5);

        let p = vec2(1.5, -0.25).to_fixed();
        assert_eq!(p.to_vec2(), vec2(1.5, -0.25));
    }
}

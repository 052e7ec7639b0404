//! 2x3 affine matrix for 2D transforms.
//!
//! `Matrix2D` maps a point as `p' = (xx*x + xy*y + x0, yx*x + yy*y + y0)`.
//! The serialized field order `(xx, yx, xy, yy, x0, y0)` is the SVG
//! `matrix(a b c d e f)` convention, shared with `glam::Affine2`'s column
//! array.

use glam::{Affine2, Vec2};
use std::fmt;

/// A 2D affine transform: linear part plus translation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Matrix2D {
    pub xx: f32,
    pub yx: f32,
    pub xy: f32,
    pub yy: f32,
    pub x0: f32,
    pub y0: f32,
}

impl Matrix2D {
    /// The identity transform.
    pub const IDENTITY: Matrix2D = Matrix2D {
        xx: 1.0,
        yx: 0.0,
        xy: 0.0,
        yy: 1.0,
        x0: 0.0,
        y0: 0.0,
    };

    pub const fn new(xx: f32, yx: f32, xy: f32, yy: f32, x0: f32, y0: f32) -> Matrix2D {
        Matrix2D { xx, yx, xy, yy, x0, y0 }
    }

    /// Fields in the fixed serialization order `(xx, yx, xy, yy, x0, y0)`.
    pub const fn to_array(self) -> [f32; 6] {
        [self.xx, self.yx, self.xy, self.yy, self.x0, self.y0]
    }

    pub const fn from_array(m: [f32; 6]) -> Matrix2D {
        Matrix2D::new(m[0], m[1], m[2], m[3], m[4], m[5])
    }

    /// Pure translation by `v`.
    pub const fn from_translation(v: Vec2) -> Matrix2D {
        Matrix2D::new(1.0, 0.0, 0.0, 1.0, v.x, v.y)
    }

    /// Pure scale by `v` about the origin.
    pub const fn from_scale(v: Vec2) -> Matrix2D {
        Matrix2D::new(v.x, 0.0, 0.0, v.y, 0.0, 0.0)
    }

    /// Counterclockwise rotation by `radians` about the origin.
    pub fn from_rotation(radians: f32) -> Matrix2D {
        let (s, c) = radians.sin_cos();
        Matrix2D::new(c, s, -s, c, 0.0, 0.0)
    }

    /// Shear with the given x and y factors.
    pub const fn from_shear(v: Vec2) -> Matrix2D {
        Matrix2D::new(1.0, v.y, v.x, 1.0, 0.0, 0.0)
    }

    /// Tangent-based skew: shear by `tan(v.x)`, `tan(v.y)`.
    pub fn from_skew(v: Vec2) -> Matrix2D {
        Matrix2D::new(1.0, v.y.tan(), v.x.tan(), 1.0, 0.0, 0.0)
    }

    /// Compose two transforms: `self` applied to the point first, then
    /// `after`.
    ///
    /// `a.then(b).transform_point(p) == b.transform_point(a.transform_point(p))`
    pub fn then(self, after: Matrix2D) -> Matrix2D {
        let a = self;
        let b = after;
        Matrix2D {
            xx: a.xx * b.xx + a.yx * b.xy,
            yx: a.xx * b.yx + a.yx * b.yy,
            xy: a.xy * b.xx + a.yy * b.xy,
            yy: a.xy * b.yx + a.yy * b.yy,
            x0: a.x0 * b.xx + a.y0 * b.xy + b.x0,
            y0: a.x0 * b.yx + a.y0 * b.yy + b.y0,
        }
    }

    /// Prepend a translation: the translation happens in the local frame,
    /// before `self`'s own effect.
    pub fn translate(self, v: Vec2) -> Matrix2D {
        Matrix2D::from_translation(v).then(self)
    }

    /// Prepend a scale.
    pub fn scale(self, v: Vec2) -> Matrix2D {
        Matrix2D::from_scale(v).then(self)
    }

    /// Prepend a rotation.
    pub fn rotate(self, radians: f32) -> Matrix2D {
        Matrix2D::from_rotation(radians).then(self)
    }

    /// Prepend a shear.
    pub fn shear(self, v: Vec2) -> Matrix2D {
        Matrix2D::from_shear(v).then(self)
    }

    /// Prepend a tangent-based skew.
    pub fn skew(self, v: Vec2) -> Matrix2D {
        Matrix2D::from_skew(v).then(self)
    }

    /// Apply the full affine map to a point.
    pub fn transform_point(self, p: Vec2) -> Vec2 {
        Vec2::new(
            self.xx * p.x + self.xy * p.y + self.x0,
            self.yx * p.x + self.yy * p.y + self.y0,
        )
    }

    /// Apply only the linear part, for direction/extent quantities that
    /// must not shift with translation.
    pub fn transform_vector(self, v: Vec2) -> Vec2 {
        Vec2::new(
            self.xx * v.x + self.xy * v.y,
            self.yx * v.x + self.yy * v.y,
        )
    }

    pub fn is_identity(self) -> bool {
        self == Matrix2D::IDENTITY
    }

    /// Extract the rotation component.
    ///
    /// Only meaningful for shear-free matrices; under shear the value is
    /// numerically defined but has no geometric meaning.
    pub fn rotation(self) -> f32 {
        (-self.xy).atan2(self.xx)
    }

    /// Extract the x/y scale factors after undoing the extracted rotation.
    ///
    /// Exact for shear-free matrices that apply rotation before scale
    /// (e.g. built as `from_translation(t).scale(s).rotate(r)`); like
    /// [`rotation`](Self::rotation), meaningless under shear.
    pub fn scale_factors(self) -> Vec2 {
        let derotated = self.rotate(-self.rotation());
        Vec2::new(
            derotated.transform_vector(Vec2::X).x,
            derotated.transform_vector(Vec2::Y).y,
        )
    }

    /// Hand-off form for rasterizers and GPU pipelines built on glam.
    pub fn to_affine2(self) -> Affine2 {
        Affine2::from_cols_array(&self.to_array())
    }

    pub fn from_affine2(a: Affine2) -> Matrix2D {
        Matrix2D::from_array(a.to_cols_array())
    }
}

impl Default for Matrix2D {
    fn default() -> Matrix2D {
        Matrix2D::IDENTITY
    }
}

/// Serializes in the SVG `matrix(a,b,c,d,e,f)` form, which the
/// transform-list parser accepts back.
impl fmt::Display for Matrix2D {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "matrix({},{},{},{},{},{})",
            self.xx, self.yx, self.xy, self.yy, self.x0, self.y0
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::vec2;
    use std::f32::consts::{FRAC_PI_2, FRAC_PI_3, FRAC_PI_4};

    const EPS: f32 = 1e-5;

    fn assert_vec_close(a: Vec2, b: Vec2) {
        assert!((a - b).length() < EPS, "{a} != {b}");
    }

    fn assert_mat_close(a: Matrix2D, b: Matrix2D) {
        let (a, b) = (a.to_array(), b.to_array());
        for i in 0..6 {
            assert!((a[i] - b[i]).abs() < EPS, "field {i}: {a:?} != {b:?}");
        }
    }

    #[test]
    fn identity_is_noop() {
        let p = vec2(3.5, -2.0);
        assert_eq!(Matrix2D::IDENTITY.transform_point(p), p);
        assert!(Matrix2D::IDENTITY.is_identity());
    }

    #[test]
    fn compose_with_identity_round_trips() {
        let m = Matrix2D::from_translation(vec2(5.0, 7.0)).rotate(0.3).scale(vec2(2.0, 0.5));
        assert_mat_close(m.then(Matrix2D::IDENTITY), m);
        assert_mat_close(Matrix2D::IDENTITY.then(m), m);
    }

    #[test]
    fn then_applies_first_argument_first() {
        let first = Matrix2D::from_rotation(FRAC_PI_2);
        let second = Matrix2D::from_translation(vec2(10.0, 20.0));
        let p = vec2(1.0, 0.0);
        let composed = first.then(second).transform_point(p);
        let stepwise = second.transform_point(first.transform_point(p));
        assert_vec_close(composed, stepwise);
        assert_vec_close(composed, vec2(10.0, 21.0));
    }

    #[test]
    fn prepend_translate_happens_before_scale() {
        // scale(2) with a prepended translate(1,0): the point moves first,
        // then the whole (moved) frame scales.
        let m = Matrix2D::from_scale(vec2(2.0, 2.0)).translate(vec2(1.0, 0.0));
        assert_vec_close(m.transform_point(vec2(1.0, 0.0)), vec2(4.0, 0.0));
    }

    #[test]
    fn rotation_maps_x_to_y() {
        let m = Matrix2D::from_rotation(FRAC_PI_2);
        assert_vec_close(m.transform_point(vec2(1.0, 0.0)), vec2(0.0, 1.0));
    }

    #[test]
    fn transform_vector_ignores_translation() {
        let m = Matrix2D::from_translation(vec2(100.0, 100.0)).scale(vec2(3.0, 1.0));
        assert_vec_close(m.transform_vector(vec2(1.0, 1.0)), vec2(3.0, 1.0));
        assert_vec_close(m.transform_point(vec2(1.0, 1.0)), vec2(103.0, 101.0));
    }

    #[test]
    fn shear_and_skew_agree_on_tangent() {
        let ang = 0.4_f32;
        let sheared = Matrix2D::from_shear(vec2(ang.tan(), 0.0));
        let skewed = Matrix2D::from_skew(vec2(ang, 0.0));
        assert_mat_close(sheared, skewed);
    }

    #[test]
    fn decompose_rotation_and_scale() {
        let m = Matrix2D::from_translation(vec2(5.0, 7.0))
            .scale(vec2(2.0, 3.0))
            .rotate(FRAC_PI_3);
        assert!((m.rotation() - FRAC_PI_3).abs() < EPS);
        assert_vec_close(m.scale_factors(), vec2(2.0, 3.0));
    }

    #[test]
    fn decompose_uniform_scale_any_order() {
        let m = Matrix2D::from_scale(vec2(2.5, 2.5)).rotate(FRAC_PI_4);
        assert!((m.rotation() - FRAC_PI_4).abs() < EPS);
        assert_vec_close(m.scale_factors(), vec2(2.5, 2.5));
    }

    #[test]
    fn decompose_pure_rotation() {
        let m = Matrix2D::from_rotation(1.0);
        assert!((m.rotation() - 1.0).abs() < EPS);
        assert_vec_close(m.scale_factors(), vec2(1.0, 1.0));
    }

    #[test]
    fn affine2_round_trip_and_agreement() {
        let m = Matrix2D::from_translation(vec2(4.0, -1.0))
            .scale(vec2(2.0, 0.5))
            .rotate(0.7);
        let a = m.to_affine2();
        assert_mat_close(Matrix2D::from_affine2(a), m);

        let p = vec2(1.25, -3.5);
        assert_vec_close(a.transform_point2(p), m.transform_point(p));
        assert_vec_close(a.transform_vector2(p), m.transform_vector(p));
    }

    #[test]
    fn display_is_svg_matrix_form() {
        let m = Matrix2D::new(1.0, 0.0, 0.0, 1.0, 5.0, 6.0);
        assert_eq!(m.to_string(), "matrix(1,0,0,1,5,6)");
    }
}

//! 2x3 affine transform.
//!
//! Uses the canvas convention:
//! ```text
//! x' = a * x + c * y + e
//! y' = b * x + d * y + f
//! ```
//!
//! Transforms are chained with [`Affine::then`], which reads in the order the
//! steps are applied to a point.

use super::{formula_angle, Point, EQUALITY_THRESHOLD};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Affine {
    pub a: f64,
    pub b: f64,
    pub c: f64,
    pub d: f64,
    pub e: f64,
    pub f: f64,
}

impl Default for Affine {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Affine {
    pub const IDENTITY: Affine = Affine {
        a: 1.0,
        b: 0.0,
        c: 0.0,
        d: 1.0,
        e: 0.0,
        f: 0.0,
    };

    pub fn translate(tx: f64, ty: f64) -> Self {
        Affine {
            e: tx,
            f: ty,
            ..Self::IDENTITY
        }
    }

    pub fn scale(sx: f64, sy: f64) -> Self {
        Affine {
            a: sx,
            d: sy,
            ..Self::IDENTITY
        }
    }

    /// Rotation about the coordinate origin, clockwise on screen.
    pub fn rotate(angle_degrees: f64) -> Self {
        let (sin, cos) = formula_angle(angle_degrees).sin_cos();
        Affine {
            a: cos,
            b: sin,
            c: -sin,
            d: cos,
            e: 0.0,
            f: 0.0,
        }
    }

    /// Rotation about `origin`.
    pub fn rotate_about(angle_degrees: f64, origin: Point) -> Self {
        Self::translate(-origin.x, -origin.y)
            .then(Self::rotate(angle_degrees))
            .then(Self::translate(origin.x, origin.y))
    }

    /// Mirror across the vertical and/or horizontal line through `origin`.
    pub fn mirror_about(flip_horizontal: bool, flip_vertical: bool, origin: Point) -> Self {
        let sx = if flip_horizontal { -1.0 } else { 1.0 };
        let sy = if flip_vertical { -1.0 } else { 1.0 };
        Self::translate(-origin.x, -origin.y)
            .then(Self::scale(sx, sy))
            .then(Self::translate(origin.x, origin.y))
    }

    /// Apply `self` first, then `next`.
    pub fn then(self, next: Affine) -> Affine {
        Affine {
            a: next.a * self.a + next.c * self.b,
            b: next.b * self.a + next.d * self.b,
            c: next.a * self.c + next.c * self.d,
            d: next.b * self.c + next.d * self.d,
            e: next.a * self.e + next.c * self.f + next.e,
            f: next.b * self.e + next.d * self.f + next.f,
        }
    }

    #[inline]
    pub fn apply(&self, p: Point) -> Point {
        Point::new(
            self.a * p.x + self.c * p.y + self.e,
            self.b * p.x + self.d * p.y + self.f,
        )
    }

    /// Apply only the linear part, for offsets and directions.
    #[inline]
    pub fn apply_vector(&self, dx: f64, dy: f64) -> (f64, f64) {
        (self.a * dx + self.c * dy, self.b * dx + self.d * dy)
    }

    pub fn apply_all(&self, points: &[Point]) -> Vec<Point> {
        points.iter().map(|p| self.apply(*p)).collect()
    }

    pub fn determinant(&self) -> f64 {
        self.a * self.d - self.b * self.c
    }

    /// Inverse transform, or `None` when the matrix is (near) singular.
    pub fn inverse(&self) -> Option<Affine> {
        let det = self.determinant();
        if det.abs() < EQUALITY_THRESHOLD * EQUALITY_THRESHOLD {
            return None;
        }
        let a = self.d / det;
        let b = -self.b / det;
        let c = -self.c / det;
        let d = self.a / det;
        Some(Affine {
            a,
            b,
            c,
            d,
            e: -(a * self.e + c * self.f),
            f: -(b * self.e + d * self.f),
        })
    }

    /// Coefficients as `[a, b, c, d, e, f]`, matching canvas `setTransform`.
    pub fn to_array(&self) -> [f64; 6] {
        [self.a, self.b, self.c, self.d, self.e, self.f]
    }
}

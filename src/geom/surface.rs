use super::core::{Point3, Tolerance, Vec3};

pub trait Surface {
    fn point_at(&self, u: f64, v: f64) -> Point3;

    #[must_use]
    fn domain_u(&self) -> (f64, f64) {
        (0.0, 1.0)
    }

    #[must_use]
    fn domain_v(&self) -> (f64, f64) {
        (0.0, 1.0)
    }

    /// First partial derivatives `(∂P/∂u, ∂P/∂v)`.
    ///
    /// The default is a central difference clamped to the domain, with a step
    /// of [`Tolerance::DERIVATIVE`] relative to the domain span. Surfaces with a
    /// closed form should override it.
    #[must_use]
    fn partial_derivatives_at(&self, u: f64, v: f64) -> (Vec3, Vec3) {
        let (u0, u1) = ordered(self.domain_u());
        let (v0, v1) = ordered(self.domain_v());

        let u = u.clamp(u0, u1);
        let v = v.clamp(v0, v1);

        let mut du = Vec3::ZERO;
        let mut dv = Vec3::ZERO;

        let u_span = u1 - u0;
        if u_span.is_finite() && u_span != 0.0 {
            let h = Tolerance::DERIVATIVE.relative_to(u_span);
            let ua = (u - h).max(u0);
            let ub = (u + h).min(u1);
            if ua != ub {
                let pa = self.point_at(ua, v);
                let pb = self.point_at(ub, v);
                du = pb.sub_point(pa).mul_scalar(1.0 / (ub - ua));
            }
        }

        let v_span = v1 - v0;
        if v_span.is_finite() && v_span != 0.0 {
            let h = Tolerance::DERIVATIVE.relative_to(v_span);
            let va = (v - h).max(v0);
            let vb = (v + h).min(v1);
            if va != vb {
                let pa = self.point_at(u, va);
                let pb = self.point_at(u, vb);
                dv = pb.sub_point(pa).mul_scalar(1.0 / (vb - va));
            }
        }

        (du, dv)
    }

    #[must_use]
    fn normal_at(&self, u: f64, v: f64) -> Option<Vec3> {
        let (du, dv) = self.partial_derivatives_at(u, v);
        du.cross(dv).normalized()
    }

    /// Local area element `|∂P/∂u × ∂P/∂v|`.
    #[must_use]
    fn area_element_at(&self, u: f64, v: f64) -> f64 {
        let (du, dv) = self.partial_derivatives_at(u, v);
        du.cross(dv).length()
    }
}

fn ordered((a, b): (f64, f64)) -> (f64, f64) {
    if a <= b { (a, b) } else { (b, a) }
}

/// Möbius strip of centre radius `radius` and width `width`.
///
/// ```text
/// x(u,v) = (R + v·cos(u/2))·cos(u)
/// y(u,v) = (R + v·cos(u/2))·sin(u)
/// z(u,v) = v·sin(u/2)
/// ```
///
/// with `u ∈ [0, 2π]` and `v ∈ [−w/2, w/2]`. The parametrisation is not
/// periodic in `u` at fixed `v`: `P(u + 2π, v) = P(u, −v)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MobiusSurface {
    pub radius: f64,
    pub width: f64,
}

impl MobiusSurface {
    #[must_use]
    pub const fn new(radius: f64, width: f64) -> Self {
        Self { radius, width }
    }

    /// `∂P/∂u` alone, for arc length along a curve of constant `v`.
    #[must_use]
    pub fn u_partial_at(&self, u: f64, v: f64) -> Vec3 {
        let (sin_u, cos_u) = u.sin_cos();
        let (sin_half, cos_half) = (u / 2.0).sin_cos();
        let ring = self.radius + v * cos_half;
        let half_v = v / 2.0;

        Vec3::new(
            -ring * sin_u - half_v * sin_half * cos_u,
            ring * cos_u - half_v * sin_half * sin_u,
            half_v * cos_half,
        )
    }

    /// `∂P/∂v`, independent of `v`.
    #[must_use]
    pub fn v_partial_at(&self, u: f64) -> Vec3 {
        let (sin_u, cos_u) = u.sin_cos();
        let (sin_half, cos_half) = (u / 2.0).sin_cos();
        Vec3::new(cos_half * cos_u, cos_half * sin_u, sin_half)
    }
}

impl Surface for MobiusSurface {
    fn point_at(&self, u: f64, v: f64) -> Point3 {
        let (sin_u, cos_u) = u.sin_cos();
        let (sin_half, cos_half) = (u / 2.0).sin_cos();
        let ring = self.radius + v * cos_half;
        Point3::new(ring * cos_u, ring * sin_u, v * sin_half)
    }

    fn domain_u(&self) -> (f64, f64) {
        (0.0, std::f64::consts::TAU)
    }

    fn domain_v(&self) -> (f64, f64) {
        (-self.width / 2.0, self.width / 2.0)
    }

    fn partial_derivatives_at(&self, u: f64, v: f64) -> (Vec3, Vec3) {
        (self.u_partial_at(u, v), self.v_partial_at(u))
    }
}

//! Curvature-profile curve model for motion primitives
//!
//! A primitive's geometry is a curve whose curvature varies as a
//! quadratic polynomial of normalized arc length. Integrating it with a
//! small step gives kinematically feasible trajectories; constant
//! profiles degenerate to circular arcs and straight lines.

use crate::common::{CurveModel, Point2D};

/// Curve with quadratic curvature profile
/// k(t) = a*t^2 + b*t + c over normalized arc length t in [0, 1],
/// with boundary conditions k(0)=k0, k(0.5)=km, k(1)=kf.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QuadraticSpiral {
    k0: f64,
    km: f64,
    kf: f64,
    length: f64,
}

impl QuadraticSpiral {
    pub fn new(k0: f64, km: f64, kf: f64, length: f64) -> Self {
        Self { k0, km, kf, length }
    }

    /// Straight segment of the given length.
    pub fn straight(length: f64) -> Self {
        Self::new(0.0, 0.0, 0.0, length)
    }

    /// Circular arc with constant curvature.
    pub fn arc(curvature: f64, length: f64) -> Self {
        Self::new(curvature, curvature, curvature, length)
    }

    /// Curvature at the start of the curve.
    pub fn start_curvature(&self) -> f64 {
        self.k0
    }

    /// Curvature at the end of the curve.
    pub fn end_curvature(&self) -> f64 {
        self.kf
    }

    /// Interpolate curvature at normalized arc length t in [0, 1]
    ///
    /// Solving the boundary conditions:
    /// c = k0
    /// a + b + c = kf
    /// 0.25*a + 0.5*b + c = km
    ///
    /// a = 2*(kf + k0 - 2*km)
    /// b = -kf - 3*k0 + 4*km
    fn curvature_at(&self, t: f64) -> f64 {
        let a = 2.0 * (self.kf + self.k0 - 2.0 * self.km);
        let b = -self.kf - 3.0 * self.k0 + 4.0 * self.km;
        let c = self.k0;

        a * t * t + b * t + c
    }
}

impl CurveModel for QuadraticSpiral {
    fn length(&self) -> f64 {
        self.length
    }

    /// Forward-Euler integration over arc length:
    /// x' = cos(theta), y' = sin(theta), theta' = k(s / length).
    fn sample(&self, start_heading: f64, ds: f64) -> Vec<Point2D> {
        let n = (self.length / ds).round() as usize;

        let mut points = Vec::with_capacity(n + 1);
        let mut x = 0.0;
        let mut y = 0.0;
        let mut theta = start_heading;
        points.push(Point2D::new(x, y));

        for i in 0..n {
            let t = i as f64 / n as f64;
            let k = self.curvature_at(t);

            x += ds * theta.cos();
            y += ds * theta.sin();
            theta += ds * k;
            points.push(Point2D::new(x, y));
        }

        points
    }
}

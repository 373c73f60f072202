//! Random variate generation: standard Normal, Gamma and Beta.
//!
//! Normal draws use Leva's ratio-of-uniforms method, Gamma draws use
//! Marsaglia and Tsang's method on top of it, and a Beta draw is the ratio of
//! two Gamma draws. Both rejection loops retry without an iteration cap; they
//! terminate with probability 1.

use crate::error::SamplingError;
use crate::uniform::UniformSource;

// Leva (1992) constants.
const LEVA_S: f64 = 0.449871;
const LEVA_T: f64 = -0.386595;
const LEVA_A: f64 = 0.196;
const LEVA_B: f64 = 0.25472;
const LEVA_INNER: f64 = 0.27597;
const LEVA_OUTER: f64 = 0.27846;
/// 2 * sqrt(2/e), the width of the ratio-of-uniforms region in v.
const LEVA_V_SCALE: f64 = 1.7156;

/// A Gamma shape parameter known to be finite and >= 1.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Shape(f64);

impl Shape {
    pub const ONE: Shape = Shape(1.0);

    pub fn new(value: f64) -> Result<Self, SamplingError> {
        if !value.is_finite() || value < 1.0 {
            return Err(SamplingError::ShapeBelowOne(value));
        }
        Ok(Shape(value))
    }

    pub fn get(self) -> f64 {
        self.0
    }
}

/// Draw from the standard Normal distribution.
///
/// Each attempt consumes two uniforms. An attempt with `u == 0` is rejected,
/// since the method needs `u` in (0, 1).
pub fn sample_normal<U: UniformSource + ?Sized>(uniform: &mut U) -> f64 {
    loop {
        let u = uniform.next_uniform();
        let v = LEVA_V_SCALE * (uniform.next_uniform() - 0.5);
        if u <= 0.0 {
            continue;
        }

        let x = u - LEVA_S;
        let y = v.abs() - LEVA_T;
        let q = x * x + y * (LEVA_A * y - LEVA_B * x);

        if q < LEVA_INNER {
            return v / u;
        }
        if q > LEVA_OUTER {
            continue;
        }
        if v * v <= -4.0 * u.ln() * u * u {
            return v / u;
        }
    }
}

/// Draw from Gamma(shape, 1) with Normal draws taken from [`sample_normal`].
pub fn sample_gamma<U: UniformSource + ?Sized>(shape: Shape, uniform: &mut U) -> f64 {
    sample_gamma_with(shape, sample_normal::<U>, uniform)
}

/// Draw from Gamma(shape, 1) with an injected Normal sampler.
///
/// `normal` receives the same uniform source so it can draw from it, or
/// ignore it and replay scripted values.
pub fn sample_gamma_with<U, N>(shape: Shape, mut normal: N, uniform: &mut U) -> f64
where
    U: UniformSource + ?Sized,
    N: FnMut(&mut U) -> f64,
{
    let d = shape.get() - 1.0 / 3.0;
    let c = 1.0 / (9.0 * d).sqrt();

    loop {
        let (x, v) = loop {
            let x = normal(uniform);
            let v = 1.0 + c * x;
            if v > 0.0 {
                break (x, v * v * v);
            }
        };

        let u = uniform.next_uniform();
        if u.ln() <= 0.5 * x * x + d - d * v + d * v.ln() {
            return d * v;
        }
    }
}

/// Draw from Beta(a, b) as `Ga / (Ga + Gb)`, drawing `Ga` first.
pub fn sample_beta<U: UniformSource + ?Sized>(a: Shape, b: Shape, uniform: &mut U) -> f64 {
    let ag = sample_gamma(a, uniform);
    let bg = sample_gamma(b, uniform);
    beta_from_gammas(ag, bg)
}

/// Combine two Gamma draws into a Beta draw.
///
/// Returns NaN when both draws are zero. The NaN is passed through, not clamped.
pub fn beta_from_gammas(ag: f64, bg: f64) -> f64 {
    ag / (ag + bg)
}

/// Mean of Beta(a, b).
pub fn beta_mean(a: f64, b: f64) -> f64 {
    a / (a + b)
}

/// Variance of Beta(a, b).
pub fn beta_variance(a: f64, b: f64) -> f64 {
    let sum = a + b;
    (a * b) / (sum * sum * (sum + 1.0))
}

//! Número complexo usado em todas as amplitudes
//!
//! Envoltório fino sobre [`num_complex::Complex64`]: a aritmética é toda de
//! `num-complex`; aqui ficam só as constantes, a forma polar `e(φ)` e o
//! formato legível.

use num_complex::Complex64;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, Deref, Mul, Neg, Sub};

/// Número complexo `(re, im)` sobre `Complex64`
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Complex(Complex64);

impl Complex {
    /// Zero complexo
    pub const ZERO: Self = Self::new(0.0, 0.0);

    /// Um complexo
    pub const ONE: Self = Self::new(1.0, 0.0);

    /// Unidade imaginária
    pub const I: Self = Self::new(0.0, 1.0);

    /// Cria número complexo
    pub const fn new(re: f64, im: f64) -> Self {
        Self(Complex64::new(re, im))
    }

    /// Número puramente real
    pub const fn real(re: f64) -> Self {
        Self::new(re, 0.0)
    }

    /// Exponencial complexa: e^(i*phi) = (cos phi, sin phi)
    pub fn e(phi: f64) -> Self {
        Self(Complex64::cis(phi))
    }

    /// Forma polar r·e^(i*phi)
    pub fn from_polar(r: f64, phi: f64) -> Self {
        Self(Complex64::from_polar(r, phi))
    }

    /// Conjugado
    pub fn conj(self) -> Self {
        Self(self.0.conj())
    }

    /// Módulo ao quadrado
    pub fn norm_sq(self) -> f64 {
        self.0.norm_sqr()
    }

    /// Módulo `sqrt(re² + im²)`
    pub fn magnitude(self) -> f64 {
        self.0.norm()
    }

    /// Fase (argumento)
    pub fn arg(self) -> f64 {
        self.0.arg()
    }

    /// Multiplicação por escalar
    pub fn scale(self, s: f64) -> Self {
        Self(self.0.scale(s))
    }

    /// Igualdade aproximada componente a componente
    pub fn approx_eq(self, other: Self, tolerance: f64) -> bool {
        (self.re - other.re).abs() < tolerance && (self.im - other.im).abs() < tolerance
    }

    /// Formato legível `"a+bi"` com 3 casas decimais.
    ///
    /// O sinal `+` só é inserido quando a parte imaginária é não-negativa;
    /// caso contrário o `-` do próprio número separa as partes.
    pub fn to_human_string(&self) -> String {
        let sign = if self.im >= 0.0 { "+" } else { "" };
        format!("{:.3}{}{:.3}i", self.re, sign, self.im)
    }
}

impl Deref for Complex {
    type Target = Complex64;

    fn deref(&self) -> &Complex64 {
        &self.0
    }
}

impl fmt::Display for Complex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_human_string())
    }
}

impl Add for Complex {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self(self.0 + rhs.0)
    }
}

impl Sub for Complex {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        Self(self.0 - rhs.0)
    }
}

impl Mul for Complex {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        Self(self.0 * rhs.0)
    }
}

impl Mul<f64> for Complex {
    type Output = Self;

    fn mul(self, rhs: f64) -> Self {
        Self(self.0 * rhs)
    }
}

impl Neg for Complex {
    type Output = Self;

    fn neg(self) -> Self {
        Self(-self.0)
    }
}

impl Sum for Complex {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        Self(iter.map(|c| c.0).sum())
    }
}

impl From<f64> for Complex {
    fn from(re: f64) -> Self {
        Self::real(re)
    }
}

impl From<Complex64> for Complex {
    fn from(c: Complex64) -> Self {
        Self(c)
    }
}

impl From<Complex> for Complex64 {
    fn from(c: Complex) -> Self {
        c.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::{FRAC_1_SQRT_2, FRAC_PI_2, PI};

    #[test]
    fn test_complex_arithmetic() {
        let a = Complex::new(1.0, 2.0);
        let b = Complex::new(3.0, 4.0);

        let sum = a + b;
        assert_eq!(sum.re, 4.0);
        assert_eq!(sum.im, 6.0);

        let product = a * b;
        assert_eq!(product.re, -5.0); // 1*3 - 2*4
        assert_eq!(product.im, 10.0); // 1*4 + 2*3
    }

    #[test]
    fn test_magnitude() {
        assert_eq!(Complex::new(3.0, 4.0).magnitude(), 5.0);
        assert_eq!(Complex::ZERO.magnitude(), 0.0);
    }

    #[test]
    fn test_polar() {
        let c = Complex::e(FRAC_PI_2);
        assert!(c.approx_eq(Complex::I, 1e-12));

        let minus_one = Complex::e(PI);
        assert!(minus_one.approx_eq(Complex::real(-1.0), 1e-12));
        assert!((Complex::from_polar(2.0, 0.3).magnitude() - 2.0).abs() < 1e-12);
    }

    #[test]
    fn test_conj_product_is_norm() {
        let c = Complex::new(0.6, -0.8);
        let p = c * c.conj();
        assert!((p.re - 1.0).abs() < 1e-12);
        assert!(p.im.abs() < 1e-12);
    }

    #[test]
    fn test_human_string() {
        let c = Complex::new(FRAC_1_SQRT_2, FRAC_1_SQRT_2);
        assert_eq!(c.to_human_string(), "0.707+0.707i");
        assert_eq!(Complex::new(1.0, -2.0).to_human_string(), "1.000-2.000i");
        assert_eq!(Complex::ZERO.to_string(), "0.000+0.000i");
    }

    #[test]
    fn test_sum() {
        let total: Complex = [Complex::ONE, Complex::I, Complex::new(-1.0, 1.0)]
            .into_iter()
            .sum();
        assert_eq!(total, Complex::new(0.0, 2.0));
    }

    #[test]
    fn test_num_complex_interop() {
        let c = Complex::new(1.5, -0.5);
        let n: num_complex::Complex64 = c.into();
        assert_eq!(n.norm_sqr(), c.norm_sq());
        assert_eq!(Complex::from(n), c);
    }
}

//! # Qubit — sistema quântico de dois níveis
//!
//! ```text
//! |ψ⟩ = a|0⟩ + b|1⟩      P(0) = |a|²   P(1) = |b|²
//! ```
//!
//! A validade `|a|² + |b|² ≈ 1` é uma consulta, não é imposta na construção.

use serde::{Deserialize, Serialize};
use std::f64::consts::FRAC_1_SQRT_2;
use std::fmt;

use scotty_core::{is_probability_valid, Bit, Complex, Labeled};

/// Qubit com amplitudes `(a, b)` e rótulo opcional
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Qubit {
    /// Amplitude de |0⟩
    pub a: Complex,
    /// Amplitude de |1⟩
    pub b: Complex,
    /// Rótulo (metadado, fora do estado físico)
    pub label: Option<String>,
}

impl Qubit {
    /// Cria qubit a partir de amplitudes arbitrárias (sem validação)
    pub fn new(a: Complex, b: Complex) -> Self {
        Self { a, b, label: None }
    }

    /// Cria qubit a partir do par `[a, b]`
    pub fn from_amplitudes([a, b]: [Complex; 2]) -> Self {
        Self::new(a, b)
    }

    /// |0⟩
    pub fn zero() -> Self {
        Self::from_amplitudes(Bit::Zero.to_complex_array())
    }

    /// |1⟩
    pub fn one() -> Self {
        Self::from_amplitudes(Bit::One.to_complex_array())
    }

    /// |+⟩ = (|0⟩ + |1⟩)/√2
    pub fn fifty_fifty() -> Self {
        Self::new(Complex::real(FRAC_1_SQRT_2), Complex::real(FRAC_1_SQRT_2))
    }

    /// `Zero` → |0⟩, `One` → |1⟩
    pub fn from_bit(bit: Bit) -> Self {
        match bit {
            Bit::Zero => Self::zero(),
            Bit::One => Self::one(),
        }
    }

    /// Define rótulo
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Amplitudes `[a, b]`
    pub fn amplitudes(&self) -> [Complex; 2] {
        [self.a, self.b]
    }

    /// `||a|² + |b|² - 1| < 1e-6`
    pub fn are_amplitudes_valid(&self) -> bool {
        is_probability_valid(self.a.magnitude(), self.b.magnitude())
    }

    /// `|a|²` (sem renormalizar)
    pub fn probability_of_zero(&self) -> f64 {
        self.a.norm_sq()
    }

    /// `|b|²` (sem renormalizar)
    pub fn probability_of_one(&self) -> f64 {
        self.b.norm_sq()
    }

    /// Probabilidade de medir `bit`
    pub fn probability_of(&self, bit: Bit) -> f64 {
        match bit {
            Bit::Zero => self.probability_of_zero(),
            Bit::One => self.probability_of_one(),
        }
    }

    /// Vetor achatado `[a.re, a.im, b.re, b.im]`
    pub fn to_vector(&self) -> [f64; 4] {
        [self.a.re, self.a.im, self.b.re, self.b.im]
    }

    /// `"Qubit(a, b)"` com amplitudes no formato legível
    pub fn to_human_string(&self) -> String {
        format!(
            "Qubit({}, {})",
            self.a.to_human_string(),
            self.b.to_human_string()
        )
    }
}

impl Labeled for Qubit {
    fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }
}

impl Default for Qubit {
    fn default() -> Self {
        Self::zero()
    }
}

impl From<Bit> for Qubit {
    fn from(bit: Bit) -> Self {
        Self::from_bit(bit)
    }
}

impl fmt::Display for Qubit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_human_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basis_states() {
        let zero = Qubit::zero();
        assert_eq!(zero.probability_of_zero(), 1.0);
        assert_eq!(zero.probability_of_one(), 0.0);

        let one = Qubit::one();
        assert_eq!(one.probability_of_zero(), 0.0);
        assert_eq!(one.probability_of_one(), 1.0);
    }

    #[test]
    fn test_fifty_fifty() {
        let q = Qubit::fifty_fifty();
        assert!((q.probability_of_zero() - 0.5).abs() < 1e-12);
        assert!((q.probability_of_one() - 0.5).abs() < 1e-12);
        assert!(q.are_amplitudes_valid());
    }

    #[test]
    fn test_from_bit() {
        assert_eq!(Qubit::from_bit(Bit::Zero).probability_of_zero(), 1.0);
        assert_eq!(Qubit::from_bit(Bit::One).probability_of_zero(), 0.0);
        assert_eq!(Qubit::from(Bit::One), Qubit::one());
    }

    #[test]
    fn test_invalid_amplitudes_are_constructible() {
        let q = Qubit::new(Complex::ONE, Complex::ONE);
        assert!(!q.are_amplitudes_valid());
        // Nenhuma renormalização implícita
        assert_eq!(q.probability_of_zero() + q.probability_of_one(), 2.0);
    }

    #[test]
    fn test_complex_phase_is_valid() {
        let q = Qubit::new(Complex::from_polar(0.6, 1.2), Complex::from_polar(0.8, -0.4));
        assert!(q.are_amplitudes_valid());
        assert!((q.probability_of(Bit::Zero) - 0.36).abs() < 1e-12);
    }

    #[test]
    fn test_label() {
        let q = Qubit::zero().with_label("ancilla");
        assert!(q.has_label("ancilla"));
        assert!(!q.has_label("data"));
        assert!(!Qubit::zero().has_label("ancilla"));
    }

    #[test]
    fn test_vector_and_human_string() {
        assert_eq!(Qubit::one().to_vector(), [0.0, 0.0, 1.0, 0.0]);
        assert_eq!(
            Qubit::fifty_fifty().to_human_string(),
            "Qubit(0.707+0.000i, 0.707+0.000i)"
        );
    }
}

//! Utilidades numéricas de tolerância e probabilidade

/// Precisão das comparações de probabilidade (tolerância = 1 / PRECISION)
pub const PRECISION: f64 = 1e6;

/// Tolerância padrão `1e-6`
pub const TOLERANCE: f64 = 1.0 / PRECISION;

/// Probabilidade em porcentagem
pub fn to_percent(p: f64) -> f64 {
    p * 100.0
}

/// `|a - b| < TOLERANCE`
pub fn approx_equal(a: f64, b: f64) -> bool {
    (a - b).abs() < TOLERANCE
}

/// Verifica `|a|² + |b|² ≈ 1` a partir dos módulos das amplitudes
pub fn is_probability_valid(abs_a: f64, abs_b: f64) -> bool {
    approx_equal(abs_a * abs_a + abs_b * abs_b, 1.0)
}

/// Verdadeiro se `n` é potência de dois (e não zero)
pub fn is_power_of_two(n: usize) -> bool {
    n.is_power_of_two()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::FRAC_1_SQRT_2;

    #[test]
    fn test_probability_valid() {
        assert!(is_probability_valid(1.0, 0.0));
        assert!(is_probability_valid(FRAC_1_SQRT_2, FRAC_1_SQRT_2));
        assert!(!is_probability_valid(1.0, 1.0));
        assert!(!is_probability_valid(0.5, 0.5));
    }

    #[test]
    fn test_approx_equal() {
        assert!(approx_equal(1.0, 1.0 + 1e-7));
        assert!(!approx_equal(1.0, 1.0 + 1e-5));
    }

    #[test]
    fn test_percent() {
        assert_eq!(to_percent(0.25), 25.0);
    }

    #[test]
    fn test_power_of_two() {
        assert!(is_power_of_two(1));
        assert!(is_power_of_two(8));
        assert!(!is_power_of_two(0));
        assert!(!is_power_of_two(6));
    }
}

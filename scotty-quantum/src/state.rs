//! Estado quântico de um registrador
//!
//! Duas variantes fechadas: [`Superposition`] (vetor de amplitudes sobre 2^n
//! estados de base) e [`Collapsed`] (padrão de bits definido após medição).
//! Nenhuma operação altera um estado existente; toda transformação cria um
//! novo valor.

use serde::{Deserialize, Serialize};

use scotty_core::{bits_to_string, from_bits, to_padded_binary, Bit, Complex};

use crate::error::{CompositionError, NormalizationError, QuantumError, QuantumResult};
use crate::qubit::Qubit;
use crate::register::QubitRegister;

/// Produto de Kronecker de dois vetores: `out[k1·|rhs| + k2] = lhs[k1]·rhs[k2]`
pub fn kron(lhs: &[Complex], rhs: &[Complex]) -> Vec<Complex> {
    let mut out = Vec::with_capacity(lhs.len() * rhs.len());
    for &l in lhs {
        out.extend(rhs.iter().map(|&r| l * r));
    }
    out
}

/// Soma de `|amp|²`
pub fn total_probability(amplitudes: &[Complex]) -> f64 {
    amplitudes.iter().map(|c| c.norm_sq()).sum()
}

/// Superposição: vetor complexo de tamanho `2^n`, índice big-endian
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "SuperpositionData")]
pub struct Superposition {
    register: QubitRegister,
    amplitudes: Vec<Complex>,
}

#[derive(Deserialize)]
struct SuperpositionData {
    register: QubitRegister,
    amplitudes: Vec<Complex>,
}

impl TryFrom<SuperpositionData> for Superposition {
    type Error = QuantumError;

    fn try_from(data: SuperpositionData) -> QuantumResult<Self> {
        Self::from_amplitudes(data.register, data.amplitudes)
    }
}

impl Superposition {
    /// Cria superposição validando `amplitudes.len() == 2^register.len()`
    pub fn from_amplitudes(
        register: QubitRegister,
        amplitudes: Vec<Complex>,
    ) -> QuantumResult<Self> {
        if register.is_empty() {
            return Err(CompositionError::EmptyRegister.into());
        }
        if !amplitudes.len().is_power_of_two() {
            return Err(CompositionError::NotPowerOfTwo(amplitudes.len()).into());
        }
        let needed = amplitudes.len().trailing_zeros() as usize;
        if register.len() != needed {
            return Err(CompositionError::RegisterMismatch {
                expected: needed,
                actual: register.len(),
            }
            .into());
        }
        Ok(Self { register, amplitudes })
    }

    /// Superposição de um único qubit
    pub fn from_qubit(qubit: Qubit) -> Self {
        let amplitudes = qubit.amplitudes().to_vec();
        Self {
            register: QubitRegister::new(vec![qubit]),
            amplitudes,
        }
    }

    /// Estado conjunto dos qubits do registrador, via produto tensorial.
    ///
    /// Falha no primeiro qubit com `|a|² + |b|²` fora de 1.
    pub fn from_register(register: QubitRegister) -> QuantumResult<Self> {
        if register.is_empty() {
            return Err(CompositionError::EmptyRegister.into());
        }
        if let Some((index, q)) = register
            .qubits()
            .iter()
            .enumerate()
            .find(|(_, q)| !q.are_amplitudes_valid())
        {
            let total = q.probability_of_zero() + q.probability_of_one();
            return Err(NormalizationError::InvalidQubit { index, total }.into());
        }
        let amplitudes = register
            .qubits()
            .iter()
            .fold(vec![Complex::ONE], |acc, q| kron(&acc, &q.amplitudes()));
        Ok(Self { register, amplitudes })
    }

    /// Estado de base |k⟩ sobre o registrador
    pub fn basis(register: QubitRegister, index: usize) -> QuantumResult<Self> {
        let bits = to_padded_binary(index, register.len())?;
        let qubits = register
            .qubits()
            .iter()
            .zip(bits)
            .map(|(q, bit)| Qubit {
                label: q.label.clone(),
                ..Qubit::from_bit(bit)
            })
            .collect();
        Self::from_register(QubitRegister::new(qubits))
    }

    /// Registrador que define a ordem da base
    pub fn register(&self) -> &QubitRegister {
        &self.register
    }

    /// Número de qubits
    pub fn qubit_count(&self) -> usize {
        self.register.len()
    }

    /// Vetor de amplitudes
    pub fn amplitudes(&self) -> &[Complex] {
        &self.amplitudes
    }

    /// Consome o estado retornando o vetor
    pub fn into_amplitudes(self) -> Vec<Complex> {
        self.amplitudes
    }

    /// Amplitude do estado de base `index`
    pub fn amplitude(&self, index: usize) -> Option<Complex> {
        self.amplitudes.get(index).copied()
    }

    /// `|amp[index]|²`
    pub fn probability_of(&self, index: usize) -> f64 {
        self.amplitude(index).map_or(0.0, |c| c.norm_sq())
    }

    /// Probabilidade de um padrão de bits (tamanho deve ser `qubit_count`)
    pub fn probability_of_bits(&self, bits: &[Bit]) -> f64 {
        if bits.len() != self.qubit_count() {
            return 0.0;
        }
        self.probability_of(from_bits(bits))
    }

    /// Probabilidade marginal de medir `bit` no qubit `qubit`
    pub fn marginal_probability(&self, qubit: usize, bit: Bit) -> f64 {
        let n = self.qubit_count();
        if qubit >= n {
            return 0.0;
        }
        let shift = n - 1 - qubit;
        let want = bit.to_int() as usize;
        self.amplitudes
            .iter()
            .enumerate()
            .filter(|(k, _)| (k >> shift) & 1 == want)
            .map(|(_, c)| c.norm_sq())
            .sum()
    }

    /// Massa total de probabilidade
    pub fn total_probability(&self) -> f64 {
        total_probability(&self.amplitudes)
    }

    /// `|Σ|amp|² - 1| < tolerance`
    pub fn is_normalized(&self, tolerance: f64) -> bool {
        (self.total_probability() - 1.0).abs() < tolerance
    }

    pub(crate) fn with_amplitudes(&self, amplitudes: Vec<Complex>) -> Self {
        Self {
            register: self.register.clone(),
            amplitudes,
        }
    }
}

impl From<Qubit> for Superposition {
    fn from(qubit: Qubit) -> Self {
        Self::from_qubit(qubit)
    }
}

/// Estado colapsado: padrão de bits definido
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "CollapsedData")]
pub struct Collapsed {
    register: QubitRegister,
    bits: Vec<Bit>,
}

#[derive(Deserialize)]
struct CollapsedData {
    register: QubitRegister,
    bits: Vec<Bit>,
}

impl TryFrom<CollapsedData> for Collapsed {
    type Error = QuantumError;

    fn try_from(data: CollapsedData) -> QuantumResult<Self> {
        if data.bits.len() != data.register.len() {
            return Err(CompositionError::RegisterMismatch {
                expected: data.bits.len(),
                actual: data.register.len(),
            }
            .into());
        }
        Ok(Self::new(data.register, data.bits))
    }
}

impl Collapsed {
    pub(crate) fn new(register: QubitRegister, bits: Vec<Bit>) -> Self {
        Self { register, bits }
    }

    /// Registrador medido
    pub fn register(&self) -> &QubitRegister {
        &self.register
    }

    /// Número de qubits
    pub fn qubit_count(&self) -> usize {
        self.bits.len()
    }

    /// Resultado da medição, qubit 0 primeiro
    pub fn bits(&self) -> &[Bit] {
        &self.bits
    }

    /// Bit do qubit `qubit`
    pub fn bit(&self, qubit: usize) -> Option<Bit> {
        self.bits.get(qubit).copied()
    }

    /// Índice de base correspondente
    pub fn index(&self) -> usize {
        from_bits(&self.bits)
    }

    /// Padrão como string `'0'`/`'1'`
    pub fn to_bit_string(&self) -> String {
        bits_to_string(&self.bits)
    }
}

/// Estado de um registrador
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum State {
    Superposition(Superposition),
    Collapsed(Collapsed),
}

impl State {
    /// Registrador do estado
    pub fn register(&self) -> &QubitRegister {
        match self {
            Self::Superposition(sp) => sp.register(),
            Self::Collapsed(c) => c.register(),
        }
    }

    /// Número de qubits
    pub fn qubit_count(&self) -> usize {
        match self {
            Self::Superposition(sp) => sp.qubit_count(),
            Self::Collapsed(c) => c.qubit_count(),
        }
    }

    /// Estado colapsado?
    pub fn is_collapsed(&self) -> bool {
        matches!(self, Self::Collapsed(_))
    }

    /// Referência à superposição, se ainda houver
    pub fn as_superposition(&self) -> Option<&Superposition> {
        match self {
            Self::Superposition(sp) => Some(sp),
            Self::Collapsed(_) => None,
        }
    }

    /// Referência ao resultado colapsado, se houver
    pub fn as_collapsed(&self) -> Option<&Collapsed> {
        match self {
            Self::Superposition(_) => None,
            Self::Collapsed(c) => Some(c),
        }
    }
}

impl From<Superposition> for State {
    fn from(sp: Superposition) -> Self {
        Self::Superposition(sp)
    }
}

impl From<Collapsed> for State {
    fn from(c: Collapsed) -> Self {
        Self::Collapsed(c)
    }
}

/// Probabilidade de um estado de base
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StateData {
    /// Índice de base
    pub index: usize,
    /// Padrão de bits big-endian
    pub bits: Vec<Bit>,
    /// `|amp|²`
    pub probability: f64,
}

impl StateData {
    /// Padrão como string
    pub fn bit_string(&self) -> String {
        bits_to_string(&self.bits)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kron_basis() {
        let v = kron(&Bit::One.to_complex_array(), &Bit::Zero.to_complex_array());
        // |1⟩⊗|0⟩ = |10⟩ = índice 2
        assert_eq!(v, vec![Complex::ZERO, Complex::ZERO, Complex::ONE, Complex::ZERO]);
    }

    #[test]
    fn test_from_register_normalized() {
        let reg = QubitRegister::new(vec![Qubit::fifty_fifty(), Qubit::one(), Qubit::fifty_fifty()]);
        let sp = Superposition::from_register(reg).unwrap();
        assert_eq!(sp.amplitudes().len(), 8);
        assert!(sp.is_normalized(1e-9));
        assert!((sp.marginal_probability(1, Bit::One) - 1.0).abs() < 1e-12);
        assert!((sp.marginal_probability(0, Bit::Zero) - 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_from_register_empty() {
        let err = Superposition::from_register(QubitRegister::default()).unwrap_err();
        assert!(matches!(
            err,
            crate::error::QuantumError::Composition(CompositionError::EmptyRegister)
        ));
    }

    #[test]
    fn test_from_amplitudes_validation() {
        let reg = QubitRegister::zeros(2);
        assert!(Superposition::from_amplitudes(reg.clone(), vec![Complex::ONE; 3]).is_err());
        assert!(Superposition::from_amplitudes(reg.clone(), vec![Complex::ONE; 8]).is_err());
        assert!(Superposition::from_amplitudes(reg, vec![Complex::ZERO; 4]).is_ok());
    }

    #[test]
    fn test_basis_state() {
        let sp = Superposition::basis(QubitRegister::zeros(3), 5).unwrap();
        assert_eq!(sp.probability_of(5), 1.0);
        assert_eq!(sp.probability_of_bits(&[Bit::One, Bit::Zero, Bit::One]), 1.0);
        assert!(sp.register().get(0).unwrap().label.is_some());
        assert!(Superposition::basis(QubitRegister::zeros(2), 4).is_err());
    }

    #[test]
    fn test_collapsed_views() {
        let c = Collapsed::new(QubitRegister::zeros(3), vec![Bit::One, Bit::One, Bit::Zero]);
        assert_eq!(c.index(), 6);
        assert_eq!(c.to_bit_string(), "110");
        assert_eq!(c.bit(2), Some(Bit::Zero));

        let state = State::from(c);
        assert!(state.is_collapsed());
        assert_eq!(state.qubit_count(), 3);
        assert!(state.as_superposition().is_none());
    }
}

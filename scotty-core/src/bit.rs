//! # Bit — valor clássico de dois estados
//!
//! `Zero` e `One` formam um conjunto fechado. Cada bit se converte para
//! inteiro, para o par de amplitudes da base padrão e para o vetor achatado
//! `[re0, im0, re1, im1]`.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::complex::Complex;
use crate::label::Labeled;

/// Bit clássico
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Default)]
pub enum Bit {
    #[default]
    Zero,
    One,
}

impl Bit {
    /// Converte string decimal de um caractere.
    ///
    /// Apenas `"1"` vira `One`; qualquer outra entrada (inclusive malformada)
    /// vira `Zero`. Comportamento mantido por compatibilidade, possível bug
    /// latente para quem espera validação.
    pub fn from_string(s: &str) -> Self {
        if s == "1" { Self::One } else { Self::Zero }
    }

    /// Converte caractere `'0'`/`'1'`, com o mesmo default de [`Bit::from_string`]
    pub fn from_char(c: char) -> Self {
        if c == '1' { Self::One } else { Self::Zero }
    }

    /// Converte booleano (`true` = `One`)
    pub fn from_bool(b: bool) -> Self {
        if b { Self::One } else { Self::Zero }
    }

    /// Valor inteiro (0 ou 1)
    pub fn to_int(self) -> u8 {
        match self {
            Self::Zero => 0,
            Self::One => 1,
        }
    }

    /// Par de amplitudes da base padrão
    pub fn to_complex_array(self) -> [Complex; 2] {
        match self {
            Self::Zero => [Complex::ONE, Complex::ZERO],
            Self::One => [Complex::ZERO, Complex::ONE],
        }
    }

    /// Vetor achatado `[re0, im0, re1, im1]`
    pub fn to_vector(self) -> [f64; 4] {
        match self {
            Self::Zero => [1.0, 0.0, 0.0, 0.0],
            Self::One => [0.0, 0.0, 1.0, 0.0],
        }
    }

    /// Caractere `'0'` ou `'1'`
    pub fn to_char(self) -> char {
        match self {
            Self::Zero => '0',
            Self::One => '1',
        }
    }

    /// Inverte o bit
    pub fn flip(self) -> Self {
        match self {
            Self::Zero => Self::One,
            Self::One => Self::Zero,
        }
    }
}

impl fmt::Display for Bit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

impl From<bool> for Bit {
    fn from(b: bool) -> Self {
        Self::from_bool(b)
    }
}

/// Bit com rótulo opcional
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LabeledBit {
    pub bit: Bit,
    pub label: Option<String>,
}

impl LabeledBit {
    /// Cria bit sem rótulo
    pub fn new(bit: Bit) -> Self {
        Self { bit, label: None }
    }

    /// Cria bit rotulado
    pub fn with_label(bit: Bit, label: impl Into<String>) -> Self {
        Self {
            bit,
            label: Some(label.into()),
        }
    }
}

impl Labeled for LabeledBit {
    fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }
}

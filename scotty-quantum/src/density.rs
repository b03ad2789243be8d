//! Matriz densidade `ρ = v·v†` de um estado puro

use serde::{Deserialize, Serialize};

use scotty_core::Complex;

use crate::error::{QuantumError, QuantumResult};
use crate::gates::MatrixData;

/// Matriz densidade complexa `N × N`
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "MatrixData")]
pub struct DensityMatrix {
    dim: usize,
    elements: Vec<Complex>,
}

impl TryFrom<MatrixData> for DensityMatrix {
    type Error = QuantumError;

    fn try_from(data: MatrixData) -> QuantumResult<Self> {
        let (dim, elements) = data.validate()?;
        Ok(Self { dim, elements })
    }
}

impl DensityMatrix {
    /// Produto externo `ρ[i][j] = v[i]·conj(v[j])`
    pub fn from_pure(vector: &[Complex]) -> Self {
        let dim = vector.len();
        let mut elements = Vec::with_capacity(dim * dim);
        for &vi in vector {
            elements.extend(vector.iter().map(|vj| vi * vj.conj()));
        }
        Self { dim, elements }
    }

    /// Dimensão N
    pub fn dimension(&self) -> usize {
        self.dim
    }

    /// Elemento `(i, j)`
    pub fn get(&self, i: usize, j: usize) -> Complex {
        self.elements[i * self.dim + j]
    }

    /// Linhas como vetores
    pub fn rows(&self) -> Vec<Vec<Complex>> {
        self.elements.chunks(self.dim.max(1)).map(<[Complex]>::to_vec).collect()
    }

    /// Traço
    pub fn trace(&self) -> Complex {
        (0..self.dim)
            .map(|i| self.get(i, i))
            .sum::<Complex>()
    }

    /// `ρ[i][j] ≈ conj(ρ[j][i])`
    pub fn is_hermitian(&self, tolerance: f64) -> bool {
        (0..self.dim).all(|i| {
            (i..self.dim).all(|j| self.get(i, j).approx_eq(self.get(j, i).conj(), tolerance))
        })
    }

    /// Pureza `Tr(ρ²)` (1 para estados puros normalizados)
    pub fn purity(&self) -> f64 {
        // Tr(ρ²) = Σ_ij ρ[i][j]·ρ[j][i] = Σ_ij |ρ[i][j]|² para ρ hermitiana
        self.elements.iter().map(|c| c.norm_sq()).sum()
    }

    /// Parte real, para estados com amplitudes reais
    pub fn to_real(&self) -> Vec<Vec<f64>> {
        self.rows()
            .into_iter()
            .map(|row| row.into_iter().map(|c| c.re).collect())
            .collect()
    }
}

//! # Quantum Gates — Portas Quânticas
//!
//! Matrizes unitárias `2^k × 2^k` e alvos para aplicação em registradores.
//!
//! ## Gates Implementadas
//!
//! - **Single-qubit**: I, H (Hadamard), X, Y, Z (Pauli), S, T, P(φ)
//! - **Two-qubit**: CNOT, CZ, SWAP
//! - **Rotation**: Rx, Ry, Rz

use serde::{Deserialize, Serialize};
use std::f64::consts::{FRAC_1_SQRT_2, PI};

use scotty_core::{config, Complex};

use crate::error::{QuantumError, QuantumResult, UnitarityError};

/// Matriz quadrada complexa, armazenada por linhas
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "MatrixData")]
pub struct GateMatrix {
    dim: usize,
    elements: Vec<Complex>,
}

/// Forma serializada de uma matriz quadrada, validada ao desserializar
#[derive(Deserialize)]
pub(crate) struct MatrixData {
    dim: usize,
    elements: Vec<Complex>,
}

impl MatrixData {
    /// `dim > 0` e `dim²` elementos
    pub(crate) fn validate(self) -> QuantumResult<(usize, Vec<Complex>)> {
        if self.dim == 0 || self.dim.checked_mul(self.dim) != Some(self.elements.len()) {
            return Err(UnitarityError::NotSquare(self.elements.len()).into());
        }
        Ok((self.dim, self.elements))
    }
}

impl TryFrom<MatrixData> for GateMatrix {
    type Error = QuantumError;

    fn try_from(data: MatrixData) -> QuantumResult<Self> {
        let (dim, elements) = data.validate()?;
        Ok(Self { dim, elements })
    }
}

impl GateMatrix {
    /// Cria matriz a partir das linhas; falha se não for quadrada
    pub fn from_rows(rows: Vec<Vec<Complex>>) -> QuantumResult<Self> {
        let dim = rows.len();
        let count: usize = rows.iter().map(Vec::len).sum();
        if dim == 0 || rows.iter().any(|r| r.len() != dim) {
            return Err(UnitarityError::NotSquare(count).into());
        }
        Ok(Self {
            dim,
            elements: rows.into_iter().flatten().collect(),
        })
    }

    /// Matriz real a partir das linhas
    pub fn from_real_rows(rows: &[&[f64]]) -> QuantumResult<Self> {
        Self::from_rows(
            rows.iter()
                .map(|r| r.iter().copied().map(Complex::real).collect())
                .collect(),
        )
    }

    /// Identidade `dim × dim`
    pub fn identity(dim: usize) -> Self {
        let mut elements = vec![Complex::ZERO; dim * dim];
        for i in 0..dim {
            elements[i * dim + i] = Complex::ONE;
        }
        Self { dim, elements }
    }

    fn from_array2(elements: [[Complex; 2]; 2]) -> Self {
        Self {
            dim: 2,
            elements: elements.into_iter().flatten().collect(),
        }
    }

    /// Dimensão (número de linhas)
    pub fn dimension(&self) -> usize {
        self.dim
    }

    /// Número de qubits em que a matriz atua, se a dimensão for `2^k`
    pub fn qubit_arity(&self) -> Option<usize> {
        self.dim
            .is_power_of_two()
            .then(|| self.dim.trailing_zeros() as usize)
    }

    /// Elemento `(row, col)`
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> Complex {
        self.elements[row * self.dim + col]
    }

    /// Multiplicação de matrizes (dimensões devem coincidir)
    pub fn mul(&self, other: &GateMatrix) -> GateMatrix {
        let n = self.dim;
        let mut elements = vec![Complex::ZERO; n * n];
        for i in 0..n {
            for j in 0..n {
                elements[i * n + j] = (0..n)
                    .map(|k| self.get(i, k) * other.get(k, j))
                    .sum::<Complex>();
            }
        }
        GateMatrix { dim: n, elements }
    }

    /// Transposta conjugada (dagger)
    pub fn dagger(&self) -> GateMatrix {
        let n = self.dim;
        let mut elements = vec![Complex::ZERO; n * n];
        for i in 0..n {
            for j in 0..n {
                elements[j * n + i] = self.get(i, j).conj();
            }
        }
        GateMatrix { dim: n, elements }
    }

    /// Produto de Kronecker `self ⊗ other`
    pub fn kron(&self, other: &GateMatrix) -> GateMatrix {
        let n = self.dim * other.dim;
        let mut elements = vec![Complex::ZERO; n * n];
        for i in 0..self.dim {
            for j in 0..self.dim {
                let a = self.get(i, j);
                for k in 0..other.dim {
                    for l in 0..other.dim {
                        let row = i * other.dim + k;
                        let col = j * other.dim + l;
                        elements[row * n + col] = a * other.get(k, l);
                    }
                }
            }
        }
        GateMatrix { dim: n, elements }
    }

    /// Maior desvio `|(U·U†)[i][j] - I[i][j]|`
    pub fn unitarity_deviation(&self) -> f64 {
        let product = self.mul(&self.dagger());
        let identity = GateMatrix::identity(self.dim);
        product
            .elements
            .iter()
            .zip(&identity.elements)
            .map(|(p, i)| (*p - *i).magnitude())
            .fold(0.0, f64::max)
    }

    /// `U·U† ≈ I` dentro da tolerância
    pub fn is_unitary(&self, tolerance: f64) -> bool {
        self.unitarity_deviation() < tolerance
    }

    /// Aplica a um vetor de tamanho `dim`
    pub fn apply(&self, state: &[Complex]) -> Vec<Complex> {
        (0..self.dim)
            .map(|r| {
                (0..self.dim)
                    .map(|c| self.get(r, c) * state[c])
                    .sum::<Complex>()
            })
            .collect()
    }
}

/// Trait para portas quânticas
pub trait QuantumGate: Send + Sync {
    /// Nome da porta
    fn name(&self) -> &'static str;

    /// Matriz da porta (`2^k × 2^k`)
    fn matrix(&self) -> GateMatrix;

    /// Verifica se é unitária (tolerância padrão de unitariedade)
    fn is_unitary(&self) -> bool {
        self.matrix().is_unitary(config::DEFAULT_UNITARITY_TOLERANCE)
    }
}

// =============================================================================
// Portas Padrão
// =============================================================================

/// Identidade
#[derive(Clone, Copy, Debug, Default)]
pub struct Identity;

impl QuantumGate for Identity {
    fn name(&self) -> &'static str {
        "I"
    }

    fn matrix(&self) -> GateMatrix {
        GateMatrix::identity(2)
    }
}

/// Porta Hadamard: cria superposição
#[derive(Clone, Copy, Debug, Default)]
pub struct Hadamard;

impl QuantumGate for Hadamard {
    fn name(&self) -> &'static str {
        "H"
    }

    fn matrix(&self) -> GateMatrix {
        let h = FRAC_1_SQRT_2;
        GateMatrix::from_array2([
            [Complex::real(h), Complex::real(h)],
            [Complex::real(h), Complex::real(-h)],
        ])
    }
}

/// Porta Pauli-X (NOT quântico)
#[derive(Clone, Copy, Debug, Default)]
pub struct PauliX;

impl QuantumGate for PauliX {
    fn name(&self) -> &'static str {
        "X"
    }

    fn matrix(&self) -> GateMatrix {
        GateMatrix::from_array2([
            [Complex::ZERO, Complex::ONE],
            [Complex::ONE, Complex::ZERO],
        ])
    }
}

/// Porta Pauli-Y
#[derive(Clone, Copy, Debug, Default)]
pub struct PauliY;

impl QuantumGate for PauliY {
    fn name(&self) -> &'static str {
        "Y"
    }

    fn matrix(&self) -> GateMatrix {
        GateMatrix::from_array2([
            [Complex::ZERO, Complex::new(0.0, -1.0)],
            [Complex::I, Complex::ZERO],
        ])
    }
}

/// Porta Pauli-Z (phase flip)
#[derive(Clone, Copy, Debug, Default)]
pub struct PauliZ;

impl QuantumGate for PauliZ {
    fn name(&self) -> &'static str {
        "Z"
    }

    fn matrix(&self) -> GateMatrix {
        GateMatrix::from_array2([
            [Complex::ONE, Complex::ZERO],
            [Complex::ZERO, Complex::real(-1.0)],
        ])
    }
}

/// Porta S (√Z)
#[derive(Clone, Copy, Debug, Default)]
pub struct SGate;

impl QuantumGate for SGate {
    fn name(&self) -> &'static str {
        "S"
    }

    fn matrix(&self) -> GateMatrix {
        GateMatrix::from_array2([
            [Complex::ONE, Complex::ZERO],
            [Complex::ZERO, Complex::I],
        ])
    }
}

/// Porta T (π/8)
#[derive(Clone, Copy, Debug, Default)]
pub struct TGate;

impl QuantumGate for TGate {
    fn name(&self) -> &'static str {
        "T"
    }

    fn matrix(&self) -> GateMatrix {
        Phase::new(PI / 4.0).matrix()
    }
}

/// Porta de rotação em X
#[derive(Clone, Copy, Debug)]
pub struct RotationX {
    pub theta: f64,
}

impl RotationX {
    pub fn new(theta: f64) -> Self {
        Self { theta }
    }
}

impl QuantumGate for RotationX {
    fn name(&self) -> &'static str {
        "Rx"
    }

    fn matrix(&self) -> GateMatrix {
        let c = (self.theta / 2.0).cos();
        let s = (self.theta / 2.0).sin();
        GateMatrix::from_array2([
            [Complex::real(c), Complex::new(0.0, -s)],
            [Complex::new(0.0, -s), Complex::real(c)],
        ])
    }
}

/// Porta de rotação em Y
#[derive(Clone, Copy, Debug)]
pub struct RotationY {
    pub theta: f64,
}

impl RotationY {
    pub fn new(theta: f64) -> Self {
        Self { theta }
    }
}

impl QuantumGate for RotationY {
    fn name(&self) -> &'static str {
        "Ry"
    }

    fn matrix(&self) -> GateMatrix {
        let c = (self.theta / 2.0).cos();
        let s = (self.theta / 2.0).sin();
        GateMatrix::from_array2([
            [Complex::real(c), Complex::real(-s)],
            [Complex::real(s), Complex::real(c)],
        ])
    }
}

/// Porta de rotação em Z
#[derive(Clone, Copy, Debug)]
pub struct RotationZ {
    pub theta: f64,
}

impl RotationZ {
    pub fn new(theta: f64) -> Self {
        Self { theta }
    }
}

impl QuantumGate for RotationZ {
    fn name(&self) -> &'static str {
        "Rz"
    }

    fn matrix(&self) -> GateMatrix {
        let half = self.theta / 2.0;
        GateMatrix::from_array2([
            [Complex::e(-half), Complex::ZERO],
            [Complex::ZERO, Complex::e(half)],
        ])
    }
}

/// Porta de fase genérica
#[derive(Clone, Copy, Debug)]
pub struct Phase {
    pub phi: f64,
}

impl Phase {
    pub fn new(phi: f64) -> Self {
        Self { phi }
    }
}

impl QuantumGate for Phase {
    fn name(&self) -> &'static str {
        "P"
    }

    fn matrix(&self) -> GateMatrix {
        GateMatrix::from_array2([
            [Complex::ONE, Complex::ZERO],
            [Complex::ZERO, Complex::e(self.phi)],
        ])
    }
}

/// CNOT: primeiro alvo é o controle
#[derive(Clone, Copy, Debug, Default)]
pub struct Cnot;

impl QuantumGate for Cnot {
    fn name(&self) -> &'static str {
        "CNOT"
    }

    fn matrix(&self) -> GateMatrix {
        controlled(&PauliX.matrix())
    }
}

/// CZ: fase -1 em |11⟩
#[derive(Clone, Copy, Debug, Default)]
pub struct Cz;

impl QuantumGate for Cz {
    fn name(&self) -> &'static str {
        "CZ"
    }

    fn matrix(&self) -> GateMatrix {
        controlled(&PauliZ.matrix())
    }
}

/// SWAP: troca dois qubits
#[derive(Clone, Copy, Debug, Default)]
pub struct Swap;

impl QuantumGate for Swap {
    fn name(&self) -> &'static str {
        "SWAP"
    }

    fn matrix(&self) -> GateMatrix {
        let mut m = GateMatrix::identity(4);
        m.elements[5] = Complex::ZERO; // (1,1)
        m.elements[10] = Complex::ZERO; // (2,2)
        m.elements[6] = Complex::ONE; // (1,2)
        m.elements[9] = Complex::ONE; // (2,1)
        m
    }
}

/// Versão controlada de uma porta single-qubit: `|0⟩⟨0| ⊗ I + |1⟩⟨1| ⊗ U`
pub fn controlled(u: &GateMatrix) -> GateMatrix {
    let d = u.dim;
    let n = 2 * d;
    let mut m = GateMatrix::identity(n);
    for i in 0..d {
        for j in 0..d {
            m.elements[(d + i) * n + (d + j)] = u.get(i, j);
        }
    }
    m
}

/// Porta posicionada em qubits específicos de um registrador.
///
/// `targets[0]` é o bit mais significativo do índice local da matriz.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TargetGate {
    pub name: String,
    pub matrix: GateMatrix,
    pub targets: Vec<usize>,
}

impl TargetGate {
    /// Posiciona uma porta padrão
    pub fn new<G: QuantumGate + ?Sized>(gate: &G, targets: Vec<usize>) -> Self {
        Self {
            name: gate.name().to_string(),
            matrix: gate.matrix(),
            targets,
        }
    }

    /// Porta customizada a partir de uma matriz
    pub fn custom(name: impl Into<String>, matrix: GateMatrix, targets: Vec<usize>) -> Self {
        Self {
            name: name.into(),
            matrix,
            targets,
        }
    }
}

// =============================================================================
// Testes
// =============================================================================

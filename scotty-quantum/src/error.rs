//! Tipos de erro para scotty-quantum

use scotty_core::EncodingError;
use thiserror::Error;

/// Resultado customizado para operações quânticas
pub type QuantumResult<T> = Result<T, QuantumError>;

/// Erros ao compor ou endereçar estados
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CompositionError {
    #[error("Register mismatch: register has {actual} qubits but states need {expected}")]
    RegisterMismatch { expected: usize, actual: usize },

    #[error("Too many qubits: {requested} requested, maximum is {maximum}")]
    TooManyQubits { requested: usize, maximum: usize },

    #[error("Amplitude vector length {0} is not a power of two")]
    NotPowerOfTwo(usize),

    #[error("Qubit {qubit} out of range for {count}-qubit state")]
    QubitOutOfRange { qubit: usize, count: usize },

    #[error("Qubit {0} targeted more than once")]
    DuplicateTarget(usize),

    #[error("Empty register")]
    EmptyRegister,

    #[error("Circuit step {0} follows a measurement")]
    StepAfterMeasurement(usize),
}

/// Erros de unitariedade de gates
#[derive(Debug, Clone, PartialEq, Error)]
pub enum UnitarityError {
    #[error("Gate {gate} is not unitary: max |U·U† - I| = {deviation}")]
    NotUnitary { gate: String, deviation: f64 },

    #[error("Gate {gate} has dimension {dimension} but targets {targets} qubits")]
    DimensionMismatch {
        gate: String,
        dimension: usize,
        targets: usize,
    },

    #[error("Matrix with {0} elements is not square")]
    NotSquare(usize),
}

/// Erros de normalização antes da medição
#[derive(Debug, Clone, PartialEq, Error)]
pub enum NormalizationError {
    #[error("Invalid amplitudes: probabilities must sum to 1.0, got {0}")]
    NotNormalized(f64),

    #[error("Invalid qubit {index}: |a|² + |b|² = {total}")]
    InvalidQubit { index: usize, total: f64 },
}

/// Erros de repetição de experimentos
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExperimentError {
    #[error("Experiment needs at least one trial")]
    NoTrials,
}

/// Erros que podem ocorrer em operações quânticas
#[derive(Debug, Clone, PartialEq, Error)]
pub enum QuantumError {
    #[error("Encoding error: {0}")]
    Encoding(#[from] EncodingError),

    #[error("Composition error: {0}")]
    Composition(#[from] CompositionError),

    #[error("Unitarity error: {0}")]
    Unitarity(#[from] UnitarityError),

    #[error("Normalization error: {0}")]
    Normalization(#[from] NormalizationError),

    #[error("Experiment error: {0}")]
    Experiment(#[from] ExperimentError),
}

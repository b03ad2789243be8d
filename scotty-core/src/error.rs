//! Tipos de erro para scotty-core

use thiserror::Error;

/// Resultado customizado para codificação binária
pub type EncodingResult<T> = Result<T, EncodingError>;

/// Erros de codificação inteiro → bits
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EncodingError {
    #[error("qubit count too small to represent value: {value} needs {required} bits, got {width}")]
    WidthTooSmall {
        value: usize,
        width: usize,
        required: usize,
    },
}

//! # 🌀 Scotty-Core
//!
//! Tipos escalares e clássicos do simulador scotty.
//!
//! > *"Todo qubit começa como um bit."*
//!
//! ## Computational Complexity
//!
//! **Complex arithmetic — O(1):**
//! - add, mul, conj, magnitude, polar construction
//!
//! **Binary encoding — O(w):**
//! - w = padded width (qubit count)
//!
//! ## Módulos
//!
//! - [`complex`]: Complex — amplitude complexa imutável
//! - [`bit`]: Bit e LabeledBit — valores clássicos
//! - [`binary`]: inteiro ↔ bits big-endian com largura fixa
//! - [`label`]: trait `Labeled`
//! - [`math`]: tolerâncias e validação de probabilidades
//! - [`config`]: overrides via `.env`
//!
//! ## Quick Start
//!
//! ```
//! use scotty_core::prelude::*;
//!
//! let bits = to_padded_binary(5, 5).unwrap();
//! assert_eq!(bits_to_string(&bits), "00101");
//!
//! let c = Complex::new(1.0, 2.0) * Complex::I;
//! assert_eq!(c.to_human_string(), "-2.000+1.000i");
//! ```

pub mod binary;
pub mod bit;
pub mod complex;
pub mod config;
pub mod error;
pub mod label;
pub mod math;
pub mod prelude;

// Re-exportações de nível superior
pub use binary::{
    bit_length, bits_from_str, bits_to_ints, bits_to_string, from_bits, to_binary,
    to_padded_binary, to_padded_binary_ints, to_padded_binary_string,
};
pub use bit::{Bit, LabeledBit};
pub use complex::Complex;
pub use error::{EncodingError, EncodingResult};
pub use label::Labeled;
pub use math::{approx_equal, is_probability_valid, to_percent, PRECISION, TOLERANCE};

//! # Prelude — Re-exportações Convenientes
//!
//! ```
//! use scotty_core::prelude::*;
//! ```

pub use crate::binary::{
    bits_to_ints, bits_to_string, from_bits, to_binary, to_padded_binary,
    to_padded_binary_string,
};
pub use crate::bit::{Bit, LabeledBit};
pub use crate::complex::Complex;
pub use crate::error::{EncodingError, EncodingResult};
pub use crate::label::Labeled;
pub use crate::math::{approx_equal, TOLERANCE};

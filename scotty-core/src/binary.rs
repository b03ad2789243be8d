//! Codificação binária big-endian para larguras fixas de qubits
//!
//! Índice de base `k` ↔ sequência de [`Bit`], bit mais significativo primeiro.

use crate::bit::Bit;
use crate::error::{EncodingError, EncodingResult};

/// Expansão binária mínima de `n` (`0` → `[Zero]`)
pub fn to_binary(n: usize) -> Vec<Bit> {
    if n == 0 {
        return vec![Bit::Zero];
    }

    let len = bit_length(n);
    (0..len)
        .rev()
        .map(|shift| Bit::from_bool((n >> shift) & 1 == 1))
        .collect()
}

/// Número de bits da expansão mínima (`0` ocupa um bit)
pub fn bit_length(n: usize) -> usize {
    if n == 0 {
        1
    } else {
        (usize::BITS - n.leading_zeros()) as usize
    }
}

/// Expansão de `n` preenchida com `Zero` à esquerda até `width` bits.
///
/// Nunca trunca: se `width` for menor que a expansão natural retorna
/// [`EncodingError::WidthTooSmall`].
pub fn to_padded_binary(n: usize, width: usize) -> EncodingResult<Vec<Bit>> {
    let bits = to_binary(n);
    if width < bits.len() {
        return Err(EncodingError::WidthTooSmall {
            value: n,
            width,
            required: bits.len(),
        });
    }

    let mut padded = vec![Bit::Zero; width - bits.len()];
    padded.extend(bits);
    Ok(padded)
}

/// Bits como inteiros 0/1
pub fn bits_to_ints(bits: &[Bit]) -> Vec<u8> {
    bits.iter().map(|b| b.to_int()).collect()
}

/// Bits como string de `'0'`/`'1'`
pub fn bits_to_string(bits: &[Bit]) -> String {
    bits.iter().map(|b| b.to_char()).collect()
}

/// Inteiros da expansão preenchida
pub fn to_padded_binary_ints(n: usize, width: usize) -> EncodingResult<Vec<u8>> {
    Ok(bits_to_ints(&to_padded_binary(n, width)?))
}

/// String da expansão preenchida (`(5, 5)` → `"00101"`)
pub fn to_padded_binary_string(n: usize, width: usize) -> EncodingResult<String> {
    Ok(bits_to_string(&to_padded_binary(n, width)?))
}

/// Inverso de [`to_binary`]: bits big-endian → índice
pub fn from_bits(bits: &[Bit]) -> usize {
    bits.iter()
        .fold(0usize, |acc, b| (acc << 1) | b.to_int() as usize)
}

/// Converte string de `'0'`/`'1'` em bits (demais caracteres viram `Zero`)
pub fn bits_from_str(s: &str) -> Vec<Bit> {
    s.chars().map(Bit::from_char).collect()
}

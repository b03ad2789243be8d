//! Rótulos opcionais para valores quânticos e clássicos
//!
//! O rótulo é metadado: nunca participa do estado físico, apenas de
//! comparações de identidade contra um candidato.

/// Valor que pode carregar um nome legível
pub trait Labeled {
    /// Rótulo atual, se houver
    fn label(&self) -> Option<&str>;

    /// Verdadeiro se o rótulo existe e é igual ao candidato
    fn has_label(&self, candidate: &str) -> bool {
        self.label() == Some(candidate)
    }
}

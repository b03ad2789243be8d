//! Registrador de qubits: define a ordem da base do estado conjunto

use serde::{Deserialize, Serialize};

use scotty_core::Labeled;

use crate::qubit::Qubit;

/// Sequência ordenada de qubits.
///
/// O qubit 0 corresponde ao bit mais significativo do índice de base.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct QubitRegister {
    qubits: Vec<Qubit>,
}

impl QubitRegister {
    /// Cria registrador a partir dos qubits
    pub fn new(qubits: Vec<Qubit>) -> Self {
        Self { qubits }
    }

    /// Registrador com `n` qubits |0⟩ rotulados `q0..q{n-1}`
    pub fn zeros(n: usize) -> Self {
        Self::new(
            (0..n)
                .map(|i| Qubit::zero().with_label(format!("q{i}")))
                .collect(),
        )
    }

    /// Número de qubits
    pub fn len(&self) -> usize {
        self.qubits.len()
    }

    /// Registrador vazio?
    pub fn is_empty(&self) -> bool {
        self.qubits.is_empty()
    }

    /// Qubits na ordem da base
    pub fn qubits(&self) -> &[Qubit] {
        &self.qubits
    }

    /// Qubit na posição `index`
    pub fn get(&self, index: usize) -> Option<&Qubit> {
        self.qubits.get(index)
    }

    /// Posição do primeiro qubit com o rótulo dado
    pub fn index_of(&self, label: &str) -> Option<usize> {
        self.qubits.iter().position(|q| q.has_label(label))
    }

    /// Concatena registradores (qubits de `self` antes dos de `other`)
    pub fn concat(&self, other: &QubitRegister) -> QubitRegister {
        let mut qubits = self.qubits.clone();
        qubits.extend(other.qubits.iter().cloned());
        QubitRegister::new(qubits)
    }

    /// Adiciona qubit ao final
    pub fn push(&mut self, qubit: Qubit) {
        self.qubits.push(qubit);
    }
}

impl From<Vec<Qubit>> for QubitRegister {
    fn from(qubits: Vec<Qubit>) -> Self {
        Self::new(qubits)
    }
}

impl FromIterator<Qubit> for QubitRegister {
    fn from_iter<I: IntoIterator<Item = Qubit>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

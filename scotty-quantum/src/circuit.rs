//! Circuito: registrador inicial + sequência de passos

use serde::{Deserialize, Serialize};

use crate::gates::{QuantumGate, TargetGate};
use crate::register::QubitRegister;

/// Passo de um circuito
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum Step {
    /// Aplica porta unitária
    Gate(TargetGate),
    /// Mede todo o registrador (encerra a evolução)
    Measure,
}

/// Circuito quântico
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Circuit {
    pub register: QubitRegister,
    steps: Vec<Step>,
}

impl Circuit {
    /// Cria circuito vazio sobre o registrador
    pub fn new(register: QubitRegister) -> Self {
        Self {
            register,
            steps: Vec::new(),
        }
    }

    /// Adiciona porta padrão nos alvos dados
    pub fn add<G: QuantumGate>(&mut self, gate: G, targets: &[usize]) -> &mut Self {
        self.steps
            .push(Step::Gate(TargetGate::new(&gate, targets.to_vec())));
        self
    }

    /// Adiciona porta já posicionada
    pub fn add_target(&mut self, gate: TargetGate) -> &mut Self {
        self.steps.push(Step::Gate(gate));
        self
    }

    /// Adiciona medição
    pub fn measure(&mut self) -> &mut Self {
        self.steps.push(Step::Measure);
        self
    }

    /// Passos na ordem de execução
    pub fn steps(&self) -> &[Step] {
        &self.steps
    }

    /// Número de passos
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// Circuito sem passos?
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Número de qubits
    pub fn qubit_count(&self) -> usize {
        self.register.len()
    }
}

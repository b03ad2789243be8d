//! Estatísticas de execuções repetidas de um circuito

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use scotty_core::to_percent;

/// Frequência de resultados por padrão de bits
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExperimentResult {
    trials: usize,
    counts: BTreeMap<String, usize>,
}

impl ExperimentResult {
    /// Resultado vazio
    pub fn new() -> Self {
        Self::default()
    }

    /// Registra um resultado
    pub fn record(&mut self, pattern: impl Into<String>) {
        *self.counts.entry(pattern.into()).or_insert(0) += 1;
        self.trials += 1;
    }

    /// Número de execuções
    pub fn trials(&self) -> usize {
        self.trials
    }

    /// Contagem de um padrão
    pub fn count(&self, pattern: &str) -> usize {
        self.counts.get(pattern).copied().unwrap_or(0)
    }

    /// Frequência relativa de um padrão (0.0-1.0)
    pub fn frequency(&self, pattern: &str) -> f64 {
        if self.trials == 0 {
            return 0.0;
        }
        self.count(pattern) as f64 / self.trials as f64
    }

    /// Frequência em porcentagem
    pub fn percent(&self, pattern: &str) -> f64 {
        to_percent(self.frequency(pattern))
    }

    /// Pares (padrão, contagem) ordenados por padrão
    pub fn outcomes(&self) -> impl Iterator<Item = (&str, usize)> {
        self.counts.iter().map(|(k, &v)| (k.as_str(), v))
    }

    /// Número de padrões distintos observados
    pub fn distinct(&self) -> usize {
        self.counts.len()
    }

    /// Padrão mais frequente (empate: menor padrão)
    pub fn most_frequent(&self) -> Option<(&str, usize)> {
        self.counts
            .iter()
            .max_by(|a, b| a.1.cmp(b.1).then_with(|| b.0.cmp(a.0)))
            .map(|(k, &v)| (k.as_str(), v))
    }
}

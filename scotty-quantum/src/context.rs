//! Contexto quântico: operações entre estados
//!
//! Produto tensorial, matriz densidade, aplicação de portas, medição,
//! execução de circuitos e repetição de experimentos. Toda operação recebe
//! estados por referência e devolve um estado novo.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use scotty_core::{config, to_padded_binary, Complex};

use crate::circuit::{Circuit, Step};
use crate::density::DensityMatrix;
use crate::error::{
    CompositionError, ExperimentError, NormalizationError, QuantumResult, UnitarityError,
};
use crate::experiment::ExperimentResult;
use crate::gates::{GateMatrix, TargetGate};
use crate::register::QubitRegister;
use crate::state::{kron, total_probability, Collapsed, State, StateData, Superposition};

/// Configuração do contexto quântico
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuantumConfig {
    /// Tolerância de normalização (soma das probabilidades)
    pub tolerance: f64,
    /// Tolerância de unitariedade (`U·U† ≈ I`)
    pub unitarity_tolerance: f64,
    /// Máximo de qubits em um estado (memória cresce com 2^n)
    pub max_qubits: usize,
}

impl Default for QuantumConfig {
    fn default() -> Self {
        Self {
            tolerance: scotty_core::TOLERANCE,
            unitarity_tolerance: config::DEFAULT_UNITARITY_TOLERANCE,
            max_qubits: config::DEFAULT_MAX_QUBITS,
        }
    }
}

impl QuantumConfig {
    /// Carrega overrides de `.env` / variáveis de ambiente
    pub fn from_env() -> Self {
        Self {
            tolerance: *config::TOLERANCE_ENV,
            unitarity_tolerance: *config::UNITARITY_TOLERANCE_ENV,
            max_qubits: *config::MAX_QUBITS_ENV,
        }
    }
}

/// Contexto quântico
#[derive(Debug, Clone, Default)]
pub struct QuantumContext {
    config: QuantumConfig,
}

impl QuantumContext {
    /// Cria contexto com configuração padrão
    pub fn new() -> Self {
        Self::with_config(QuantumConfig::default())
    }

    /// Cria contexto com configuração customizada
    pub fn with_config(config: QuantumConfig) -> Self {
        Self { config }
    }

    /// Configuração atual
    pub fn config(&self) -> &QuantumConfig {
        &self.config
    }

    fn check_qubit_limit(&self, requested: usize) -> QuantumResult<()> {
        if requested > self.config.max_qubits {
            return Err(CompositionError::TooManyQubits {
                requested,
                maximum: self.config.max_qubits,
            }
            .into());
        }
        Ok(())
    }

    fn check_normalized(&self, sp: &Superposition) -> QuantumResult<()> {
        let total = sp.total_probability();
        if !total.is_finite() || (total - 1.0).abs() >= self.config.tolerance {
            return Err(NormalizationError::NotNormalized(total).into());
        }
        Ok(())
    }

    /// Estado inicial de um registrador (produto tensorial de seus qubits)
    pub fn initial_state(&self, register: &QubitRegister) -> QuantumResult<Superposition> {
        self.check_qubit_limit(register.len())?;
        Superposition::from_register(register.clone())
    }

    // =========================================================================
    // Composição
    // =========================================================================

    /// Produto tensorial `sp1 ⊗ sp2` sobre o registrador conjunto.
    ///
    /// `amp[k1·2^n2 + k2] = sp1[k1]·sp2[k2]`; os qubits de `sp1` vêm antes.
    pub fn tensor_product(
        &self,
        register: QubitRegister,
        sp1: &Superposition,
        sp2: &Superposition,
    ) -> QuantumResult<Superposition> {
        let expected = sp1.qubit_count() + sp2.qubit_count();
        if register.len() != expected {
            return Err(CompositionError::RegisterMismatch {
                expected,
                actual: register.len(),
            }
            .into());
        }
        self.check_qubit_limit(expected)?;
        self.check_normalized(sp1)?;
        self.check_normalized(sp2)?;

        let amplitudes = kron(sp1.amplitudes(), sp2.amplitudes());
        debug!(
            left = sp1.qubit_count(),
            right = sp2.qubit_count(),
            len = amplitudes.len(),
            "tensor product"
        );
        Superposition::from_amplitudes(register, amplitudes)
    }

    /// Produto tensorial usando a concatenação dos registradores
    pub fn compose(&self, sp1: &Superposition, sp2: &Superposition) -> QuantumResult<Superposition> {
        let register = sp1.register().concat(sp2.register());
        self.tensor_product(register, sp1, sp2)
    }

    /// Matriz densidade `ρ = v·v†` (complexa)
    pub fn density_matrix(&self, vector: &[Complex]) -> QuantumResult<DensityMatrix> {
        if !vector.len().is_power_of_two() {
            return Err(CompositionError::NotPowerOfTwo(vector.len()).into());
        }
        Ok(DensityMatrix::from_pure(vector))
    }

    /// Probabilidade de cada estado de base
    pub fn probabilities(&self, sp: &Superposition) -> QuantumResult<Vec<StateData>> {
        let n = sp.qubit_count();
        sp.amplitudes()
            .iter()
            .enumerate()
            .map(|(index, amp)| -> QuantumResult<StateData> {
                Ok(StateData {
                    index,
                    bits: to_padded_binary(index, n)?,
                    probability: amp.norm_sq(),
                })
            })
            .collect()
    }

    // =========================================================================
    // Portas
    // =========================================================================

    /// `U·U† ≈ I` dentro da tolerância configurada
    pub fn is_unitary(&self, matrix: &GateMatrix) -> bool {
        matrix.is_unitary(self.config.unitarity_tolerance)
    }

    fn validate_gate(&self, sp: &Superposition, gate: &TargetGate) -> QuantumResult<()> {
        let n = sp.qubit_count();
        let k = gate.targets.len();

        for (i, &q) in gate.targets.iter().enumerate() {
            if q >= n {
                return Err(CompositionError::QubitOutOfRange { qubit: q, count: n }.into());
            }
            if gate.targets[..i].contains(&q) {
                return Err(CompositionError::DuplicateTarget(q).into());
            }
        }

        if k == 0 || gate.matrix.qubit_arity() != Some(k) {
            return Err(UnitarityError::DimensionMismatch {
                gate: gate.name.clone(),
                dimension: gate.matrix.dimension(),
                targets: k,
            }
            .into());
        }

        let deviation = gate.matrix.unitarity_deviation();
        if deviation >= self.config.unitarity_tolerance {
            return Err(UnitarityError::NotUnitary {
                gate: gate.name.clone(),
                deviation,
            }
            .into());
        }
        Ok(())
    }

    /// Aplica porta `2^k × 2^k` aos `k` qubits alvo, mantendo a estrutura
    /// tensorial dos demais `n - k` qubits.
    pub fn apply_gate(&self, sp: &Superposition, gate: &TargetGate) -> QuantumResult<Superposition> {
        self.validate_gate(sp, gate)?;

        let n = sp.qubit_count();
        let k = gate.targets.len();
        let dim = gate.matrix.dimension();
        let amps = sp.amplitudes();

        // Posição de cada alvo no índice global (qubit 0 = bit mais significativo)
        let positions: Vec<usize> = gate.targets.iter().map(|&q| n - 1 - q).collect();
        let target_mask = positions.iter().fold(0usize, |m, &p| m | (1 << p));

        let mut out = vec![Complex::ZERO; amps.len()];
        let mut local = vec![0usize; dim];

        for base in (0..amps.len()).filter(|b| b & target_mask == 0) {
            for (l, slot) in local.iter_mut().enumerate() {
                *slot = positions
                    .iter()
                    .enumerate()
                    .filter(|(j, _)| (l >> (k - 1 - j)) & 1 == 1)
                    .fold(base, |idx, (_, &p)| idx | (1 << p));
            }
            for r in 0..dim {
                out[local[r]] = (0..dim)
                    .map(|c| gate.matrix.get(r, c) * amps[local[c]])
                    .sum::<Complex>();
            }
        }

        debug!(gate = %gate.name, targets = ?gate.targets, qubits = n, "gate applied");
        Ok(sp.with_amplitudes(out))
    }

    // =========================================================================
    // Medição
    // =========================================================================

    /// Mede todo o registrador.
    ///
    /// Sorteia o índice `k` com probabilidade `|amp[k]|²` usando `rng` e
    /// devolve o padrão big-endian de `k`. A soma das probabilidades deve
    /// ser 1 dentro da tolerância.
    pub fn measure<R: Rng + ?Sized>(&self, sp: &Superposition, rng: &mut R) -> QuantumResult<Collapsed> {
        let amps = sp.amplitudes();
        let total = total_probability(amps);
        if !total.is_finite() || total <= 0.0 || (total - 1.0).abs() >= self.config.tolerance {
            warn!(total, "refusing to measure non-normalized state");
            return Err(NormalizationError::NotNormalized(total).into());
        }

        let sample: f64 = rng.gen_range(0.0..total);
        let mut cumulative = 0.0;
        // Fallback para erro de arredondamento: último índice com massa
        let mut selected = amps.iter().rposition(|c| c.norm_sq() > 0.0).unwrap_or(0);

        for (k, amp) in amps.iter().enumerate() {
            let p = amp.norm_sq();
            cumulative += p;
            if p > 0.0 && sample < cumulative {
                selected = k;
                break;
            }
        }

        let bits = to_padded_binary(selected, sp.qubit_count())?;
        debug!(outcome = selected, probability = amps[selected].norm_sq(), "measured");
        Ok(Collapsed::new(sp.register().clone(), bits))
    }

    // =========================================================================
    // Circuitos
    // =========================================================================

    /// Executa os passos do circuito a partir do estado inicial do registrador
    pub fn run<R: Rng + ?Sized>(&self, circuit: &Circuit, rng: &mut R) -> QuantumResult<State> {
        let mut state = State::Superposition(self.initial_state(&circuit.register)?);

        for (i, step) in circuit.steps().iter().enumerate() {
            state = match (state, step) {
                (State::Collapsed(_), _) => {
                    return Err(CompositionError::StepAfterMeasurement(i).into());
                }
                (State::Superposition(sp), Step::Gate(gate)) => {
                    State::Superposition(self.apply_gate(&sp, gate)?)
                }
                (State::Superposition(sp), Step::Measure) => {
                    State::Collapsed(self.measure(&sp, rng)?)
                }
            };
        }
        Ok(state)
    }

    /// Executa e mede, se o circuito não terminou em medição
    pub fn run_and_measure<R: Rng + ?Sized>(
        &self,
        circuit: &Circuit,
        rng: &mut R,
    ) -> QuantumResult<Collapsed> {
        match self.run(circuit, rng)? {
            State::Superposition(sp) => self.measure(&sp, rng),
            State::Collapsed(c) => Ok(c),
        }
    }

    /// Executa o circuito `trials` vezes (estado inicial novo a cada vez)
    pub fn run_experiment<R: Rng + ?Sized>(
        &self,
        circuit: &Circuit,
        trials: usize,
        rng: &mut R,
    ) -> QuantumResult<ExperimentResult> {
        if trials == 0 {
            return Err(ExperimentError::NoTrials.into());
        }

        let mut result = ExperimentResult::new();
        for _ in 0..trials {
            result.record(self.run_and_measure(circuit, rng)?.to_bit_string());
        }
        log_summary(&result);
        Ok(result)
    }

    /// Experimento reprodutível: a execução `t` usa `StdRng::seed_from_u64(seed + t)`
    pub fn run_experiment_seeded(
        &self,
        circuit: &Circuit,
        trials: usize,
        seed: u64,
    ) -> QuantumResult<ExperimentResult> {
        if trials == 0 {
            return Err(ExperimentError::NoTrials.into());
        }

        let mut result = ExperimentResult::new();
        for t in 0..trials {
            let mut rng = StdRng::seed_from_u64(seed.wrapping_add(t as u64));
            result.record(self.run_and_measure(circuit, &mut rng)?.to_bit_string());
        }
        log_summary(&result);
        Ok(result)
    }
}

fn log_summary(result: &ExperimentResult) {
    info!(
        trials = result.trials(),
        distinct = result.distinct(),
        most_frequent = ?result.most_frequent(),
        "experiment finished"
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gates::{Cnot, Hadamard, PauliX, QuantumGate};
    use crate::qubit::Qubit;
    use scotty_core::Bit;

    fn one_qubit(q: Qubit) -> Superposition {
        Superposition::from_qubit(q)
    }

    #[test]
    fn test_create_context() {
        let ctx = QuantumContext::new();
        assert_eq!(ctx.config().max_qubits, 20);
        assert_eq!(ctx.config().tolerance, 1e-6);
    }

    #[test]
    fn test_tensor_product_order() {
        let ctx = QuantumContext::new();
        let sp = ctx
            .compose(&one_qubit(Qubit::one()), &one_qubit(Qubit::zero()))
            .unwrap();
        // |1⟩⊗|0⟩ = |10⟩
        assert_eq!(sp.probability_of(0b10), 1.0);
    }

    #[test]
    fn test_tensor_product_register_mismatch() {
        let ctx = QuantumContext::new();
        let err = ctx
            .tensor_product(
                QubitRegister::zeros(3),
                &one_qubit(Qubit::zero()),
                &one_qubit(Qubit::one()),
            )
            .unwrap_err();
        assert!(err.to_string().contains("Register mismatch"));
    }

    #[test]
    fn test_qubit_limit() {
        let ctx = QuantumContext::with_config(QuantumConfig {
            max_qubits: 1,
            ..QuantumConfig::default()
        });
        let result = ctx.compose(&one_qubit(Qubit::zero()), &one_qubit(Qubit::zero()));
        assert!(result.is_err());
    }

    #[test]
    fn test_apply_x_on_second_qubit() {
        let ctx = QuantumContext::new();
        let sp = ctx.initial_state(&QubitRegister::zeros(2)).unwrap();
        let out = ctx.apply_gate(&sp, &TargetGate::new(&PauliX, vec![1])).unwrap();
        // |00⟩ → |01⟩
        assert!((out.probability_of(0b01) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_bell_state() {
        let ctx = QuantumContext::new();
        let sp = ctx.initial_state(&QubitRegister::zeros(2)).unwrap();
        let sp = ctx.apply_gate(&sp, &TargetGate::new(&Hadamard, vec![0])).unwrap();
        let sp = ctx.apply_gate(&sp, &TargetGate::new(&Cnot, vec![0, 1])).unwrap();

        assert!((sp.probability_of(0b00) - 0.5).abs() < 1e-12);
        assert!((sp.probability_of(0b11) - 0.5).abs() < 1e-12);
        assert!(sp.probability_of(0b01) < 1e-12);
        assert!(sp.probability_of(0b10) < 1e-12);
    }

    #[test]
    fn test_reversed_cnot_targets() {
        let ctx = QuantumContext::new();
        // |01⟩ com controle no qubit 1 → |11⟩
        let sp = Superposition::basis(QubitRegister::zeros(2), 0b01).unwrap();
        let out = ctx.apply_gate(&sp, &TargetGate::new(&Cnot, vec![1, 0])).unwrap();
        assert!((out.probability_of(0b11) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_non_unitary_rejected() {
        let ctx = QuantumContext::new();
        let sp = one_qubit(Qubit::zero());
        let m = GateMatrix::from_real_rows(&[&[1.0, 1.0], &[0.0, 1.0]]).unwrap();
        let err = ctx.apply_gate(&sp, &TargetGate::custom("shear", m, vec![0])).unwrap_err();
        assert!(matches!(
            err,
            crate::error::QuantumError::Unitarity(UnitarityError::NotUnitary { .. })
        ));
    }

    #[test]
    fn test_bad_targets_rejected() {
        let ctx = QuantumContext::new();
        let sp = ctx.initial_state(&QubitRegister::zeros(2)).unwrap();
        assert!(ctx.apply_gate(&sp, &TargetGate::new(&PauliX, vec![2])).is_err());
        assert!(ctx.apply_gate(&sp, &TargetGate::new(&Cnot, vec![1, 1])).is_err());
        assert!(ctx.apply_gate(&sp, &TargetGate::new(&Cnot, vec![0])).is_err());
    }

    #[test]
    fn test_measure_basis_states() {
        let ctx = QuantumContext::new();
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..50 {
            let zero = ctx.measure(&one_qubit(Qubit::zero()), &mut rng).unwrap();
            assert_eq!(zero.bits(), &[Bit::Zero]);
            let one = ctx.measure(&one_qubit(Qubit::one()), &mut rng).unwrap();
            assert_eq!(one.bits(), &[Bit::One]);
        }
    }

    #[test]
    fn test_measure_not_normalized() {
        let ctx = QuantumContext::new();
        let sp = one_qubit(Qubit::new(Complex::ONE, Complex::ONE));
        let mut rng = StdRng::seed_from_u64(1);
        let err = ctx.measure(&sp, &mut rng).unwrap_err();
        assert!(matches!(
            err,
            crate::error::QuantumError::Normalization(NormalizationError::NotNormalized(t)) if (t - 2.0).abs() < 1e-12
        ));
    }

    #[test]
    fn test_measure_zero_vector_with_loose_tolerance() {
        let ctx = QuantumContext::with_config(QuantumConfig {
            tolerance: 2.0,
            ..QuantumConfig::default()
        });
        let sp = Superposition::from_amplitudes(QubitRegister::zeros(1), vec![Complex::ZERO; 2])
            .unwrap();
        let mut rng = StdRng::seed_from_u64(3);
        let err = ctx.measure(&sp, &mut rng).unwrap_err();
        assert_eq!(
            err,
            crate::error::QuantumError::Normalization(NormalizationError::NotNormalized(0.0))
        );
    }

    #[test]
    fn test_tensor_product_rejects_invalid_operand() {
        let ctx = QuantumContext::new();
        let bad = one_qubit(Qubit::new(Complex::ONE, Complex::ONE));
        let err = ctx.compose(&bad, &one_qubit(Qubit::zero())).unwrap_err();
        assert!(matches!(
            err,
            crate::error::QuantumError::Normalization(NormalizationError::NotNormalized(_))
        ));
    }

    #[test]
    fn test_probabilities() {
        let ctx = QuantumContext::new();
        let sp = ctx
            .compose(&one_qubit(Qubit::fifty_fifty()), &one_qubit(Qubit::one()))
            .unwrap();
        let probs = ctx.probabilities(&sp).unwrap();
        assert_eq!(probs.len(), 4);
        assert_eq!(probs[1].bit_string(), "01");
        assert!((probs[1].probability - 0.5).abs() < 1e-12);
        assert!(probs[0].probability < 1e-12);
    }

    #[test]
    fn test_density_matrix_rejects_bad_length() {
        let ctx = QuantumContext::new();
        assert!(ctx.density_matrix(&[Complex::ONE; 3]).is_err());
        assert!(ctx.density_matrix(&[Complex::ONE, Complex::ZERO]).is_ok());
    }

    #[test]
    fn test_is_unitary() {
        let ctx = QuantumContext::new();
        assert!(ctx.is_unitary(&Hadamard.matrix()));
        assert!(!ctx.is_unitary(&GateMatrix::from_real_rows(&[&[2.0]]).unwrap()));
    }
}

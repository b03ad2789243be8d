//! # ⚛️ scotty-quantum — Quantum State Simulation
//!
//! Simulação de registradores de qubits como vetores de amplitudes
//! complexas: composição por produto tensorial, matriz densidade, portas
//! unitárias, medição probabilística e colapso.
//!
//! ## Computational Complexity
//!
//! **State vector — O(2^n) memory:**
//! - n = number of qubits; every added qubit doubles the vector
//! - `QuantumConfig::max_qubits` (default 20) bounds allocation
//!
//! **Tensor product — O(2^(n1+n2))**
//!
//! **Gate application — O(2^n × 2^k):**
//! - k = number of target qubits (1 or 2 for standard gates)
//!
//! **Measurement — O(2^n):**
//! - Linear search for cumulative probability
//!
//! **Scalability:**
//! - Small registers (n < 10): ✓ Excellent
//! - Medium registers (10 < n < 20): △ Good
//! - Large registers (n > 20): rejected by default, state-space doubles per qubit
//!
//! ## Arquitetura
//!
//! ```text
//! ┌─────────────────────────────────────────────────┐
//! │          QuantumContext                         │
//! │  ┌───────────────────────────────────────────┐  │
//! │  │  Tensor Product + Density Matrix          │  │
//! │  └───────────────────────────────────────────┘  │
//! │  ┌───────────────────────────────────────────┐  │
//! │  │  Gate Application (2^k × 2^k unitaries)   │  │
//! │  └───────────────────────────────────────────┘  │
//! │  ┌───────────────────────────────────────────┐  │
//! │  │  Measurement → Collapsed                  │  │
//! │  └───────────────────────────────────────────┘  │
//! └─────────────────────────────────────────────────┘
//! ```
//!
//! ## Exemplo
//!
//! ```
//! use rand::SeedableRng;
//! use rand::rngs::StdRng;
//! use scotty_quantum::{Circuit, Cnot, Hadamard, QuantumContext, QubitRegister};
//!
//! let ctx = QuantumContext::new();
//! let mut circuit = Circuit::new(QubitRegister::zeros(2));
//! circuit.add(Hadamard, &[0]).add(Cnot, &[0, 1]);
//!
//! let mut rng = StdRng::seed_from_u64(42);
//! let result = ctx.run_experiment(&circuit, 100, &mut rng).unwrap();
//! assert_eq!(result.count("00") + result.count("11"), 100);
//! ```

pub mod circuit;
pub mod context;
pub mod density;
pub mod error;
pub mod experiment;
pub mod gates;
pub mod qubit;
pub mod register;
pub mod state;

pub use circuit::{Circuit, Step};
pub use context::{QuantumConfig, QuantumContext};
pub use density::DensityMatrix;
pub use error::{
    CompositionError, ExperimentError, NormalizationError, QuantumError, QuantumResult,
    UnitarityError,
};
pub use experiment::ExperimentResult;
pub use gates::{
    controlled, Cnot, Cz, GateMatrix, Hadamard, Identity, PauliX, PauliY, PauliZ, Phase,
    QuantumGate, RotationX, RotationY, RotationZ, SGate, Swap, TGate, TargetGate,
};
pub use qubit::Qubit;
pub use register::QubitRegister;
pub use state::{Collapsed, State, StateData, Superposition};

pub use scotty_core::{Bit, Complex, EncodingError, Labeled};

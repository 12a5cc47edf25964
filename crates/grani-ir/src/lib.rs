//! Grani IR: circuit descriptors, compiled-circuit profiles, and noise profiles.
//!
//! This crate holds the value objects shared by the HAL and the evaluation
//! engine. Everything here is an immutable value type: transforms produce
//! new values, and nothing in this crate performs I/O or simulation.
//!
//! - [`Circuit`] / [`GateOp`] — an ordered gate sequence with qubit count,
//!   as produced by an external interchange-format parser.
//! - [`BasisGates`] — the explicit gate vocabulary of a target platform.
//!   Always passed by value or reference; there is no ambient gate registry.
//! - [`CircuitProfile`] — per-gate-type instruction counts, depth, and swap
//!   count for a compiled circuit.
//! - [`NoiseProfile`] — per-gate/per-qubit error-channel tables and readout
//!   success probabilities, as reported by an external noise-model provider.

pub mod circuit;
pub mod error;
pub mod noise;
pub mod profile;

pub use circuit::{Circuit, GateOp};
pub use error::{IrError, IrResult};
pub use noise::{GateChannel, NoiseProfile, ReadoutError};
pub use profile::{BasisGates, CircuitProfile, MEASURE};

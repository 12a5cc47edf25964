//! Grani HAL: backend candidates, topology features, and the async
//! collaborator traits the evaluation engine depends on.
//!
//! # Overview
//!
//! - [`BackendCandidate`] — immutable descriptor of one candidate platform:
//!   identifier, qubit capacity, basis gate set, coupling topology, noise
//!   profile. Candidate lists are constructed statically by an external
//!   loader; nothing here discovers backends by introspection.
//! - [`BackendSelector`] — capacity filter + ascending-capacity shortlist.
//! - [`Topology`] / [`TopologyFeatures`] — coupling graph and derived
//!   connectivity statistics (platform feature columns).
//! - [`Simulator`] / [`Transpiler`] — async traits modelling the external
//!   circuit simulator and compiler. They are the only suspension points in
//!   an evaluation; everything downstream is pure computation.
//! - [`Counts`] — raw outcome-count table returned by a simulator.

pub mod candidate;
pub mod collaborator;
pub mod error;
pub mod result;
pub mod selector;
pub mod topology;

pub use candidate::BackendCandidate;
pub use collaborator::{Simulator, Transpiler, TranspileOutcome};
pub use error::{HalError, HalResult};
pub use result::Counts;
pub use selector::{BackendSelector, DEFAULT_CANDIDATE_LIMIT};
pub use topology::{Topology, TopologyFeatures};

//! # Chemnet Core
//!
//! Simulation engine for artificial chemical reaction networks: species
//! identified by formulas over a small alphabet, reversible mass-action
//! reactions between them, and the evolutionary operators that grow and
//! perturb the network.
//!
//! This crate contains:
//! - Random network generation by composing and decomposing formulas
//! - Reflecting-boundary parameter mutation and structural edits
//! - Explicit Euler stepping with pluggable sensor injection
//! - Reaction graph analysis, metrics and structured logging
//!
//! ## Example
//!
//! ```
//! use chemnet_core::config::ChemistryConfig;
//! use chemnet_core::network::NetworkLogic;
//! use chemnet_data::Network;
//! use rand::SeedableRng;
//! use rand_chacha::ChaCha8Rng;
//!
//! let config = ChemistryConfig::default();
//! let mut rng = ChaCha8Rng::seed_from_u64(42);
//! let mut network = Network::new_random_with_rng(&config, &mut rng);
//!
//! let outputs = network.get_outputs(&[0.5, 0.1], &config).unwrap();
//! assert_eq!(outputs.len(), 2);
//! ```

/// Per-species dynamics and mutation
pub mod chemical;
/// Configuration for generation, mutation and stepping
pub mod config;
/// Error types
pub mod error;
/// Formula sampling, canonicalization, composition and decomposition
pub mod formula;
/// Bipartite species/reaction graph
pub mod graph;
/// Sensor injection policies
pub mod injection;
/// Network metrics and logging setup
pub mod metrics;
/// Network construction, mutation and stepping
pub mod network;
/// Reflecting-boundary noise
pub mod noise;
/// Rate derivation and mass-action flux
pub mod reaction;
/// Seeded random streams
pub mod rng;

pub use error::{NetworkError, Result};

//! Configuration management for chemistry parameters.
//!
//! This module provides strongly-typed configuration structures that map to
//! a `chemistry.toml` file. Every tunable constant of the engine (parameter
//! ranges, formula alphabet, timestep, mutation rates, role layout) lives here.
//!
//! ## Configuration Hierarchy
//!
//! 1. Default values (hardcoded in `Default` impls)
//! 2. `chemistry.toml` file (overrides defaults key by key)
//!
//! ## Example `chemistry.toml`
//!
//! ```toml
//! seed = 42
//!
//! [formula]
//! alphabet = "01"
//! max_len = 4
//! aggregation = true
//!
//! [network]
//! dt = 0.01
//! roles = { inputs = 2, outputs = 2, drives = 0 }
//! injection = { mode = "additive" }
//!
//! [evolution]
//! mutation_rate = 0.1
//! ```

use crate::formula;
use crate::injection::InjectionMode;
use chemnet_data::RoleLayout;
use serde::{Deserialize, Serialize};

/// Ranges for the per-species parameters.
///
/// `init_*` bounds apply to freshly generated species; mutation may move a
/// parameter anywhere in `[0, *_max]`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct ChemicalConfig {
    pub potential_max: f64,
    pub initial_conc_max: f64,
    pub decay_max: f64,
    pub init_potential_max: f64,
    pub init_initial_conc_max: f64,
    pub init_decay_max: f64,
    /// Numerical safety ceiling for concentrations.
    pub conc_cap: f64,
}

impl Default for ChemicalConfig {
    fn default() -> Self {
        Self {
            potential_max: 7.5,
            initial_conc_max: 5.0,
            decay_max: 10.0,
            init_potential_max: 7.5,
            init_initial_conc_max: 2.0,
            init_decay_max: 1.0,
            conc_cap: 1.0e4,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct ReactionConfig {
    pub fav_rate_max: f64,
    pub init_fav_rate_max: f64,
    /// Let each reaction's rates be scaled by one sensor reading.
    pub sensor_influence: bool,
}

impl Default for ReactionConfig {
    fn default() -> Self {
        Self {
            fav_rate_max: 60.0,
            init_fav_rate_max: 0.1,
            sensor_influence: false,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct FormulaConfig {
    pub alphabet: String,
    pub max_len: usize,
    pub init_min_len: usize,
    pub init_max_len: usize,
    /// Character order is insignificant; formulas are sorted before use as keys.
    pub aggregation: bool,
}

impl Default for FormulaConfig {
    fn default() -> Self {
        Self {
            alphabet: "01".to_string(),
            max_len: 4,
            init_min_len: 1,
            init_max_len: 4,
            aggregation: true,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct NetworkConfig {
    pub initial_chemicals: usize,
    pub initial_reactions: usize,
    pub dt: f64,
    /// Fixed derivative of drive chemicals (negative drains).
    pub drive_rate: f64,
    pub shuffle_on_init: bool,
    pub roles: RoleLayout,
    pub injection: InjectionMode,
}

impl Default for NetworkConfig {
    fn default() -> Self {
        Self {
            initial_chemicals: 6,
            initial_reactions: 6,
            dt: 0.01,
            drive_rate: -0.004,
            shuffle_on_init: true,
            roles: RoleLayout::new(2, 2, 0),
            injection: InjectionMode::default(),
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct EvolutionConfig {
    /// Per-parameter mutation probability, `p_mut`.
    pub mutation_rate: f64,
    /// Multiplier on `p_mut` for adding or deleting a reaction.
    pub structural_multiplier: f64,
}

impl Default for EvolutionConfig {
    fn default() -> Self {
        Self {
            mutation_rate: 0.1,
            structural_multiplier: 5.0,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
#[serde(default)]
pub struct ChemistryConfig {
    pub chemical: ChemicalConfig,
    pub reaction: ReactionConfig,
    pub formula: FormulaConfig,
    pub network: NetworkConfig,
    pub evolution: EvolutionConfig,
    pub seed: Option<u64>,
}

fn positive(value: f64) -> bool {
    value.is_finite() && value > 0.0
}

impl ChemistryConfig {
    /// Validates all configuration parameters.
    ///
    /// Returns `Ok(())` if all parameters are valid, or `Err` with a description
    /// of the first validation failure.
    pub fn validate(&self) -> anyhow::Result<()> {
        let c = &self.chemical;
        anyhow::ensure!(positive(c.potential_max), "Potential max must be positive");
        anyhow::ensure!(
            positive(c.initial_conc_max),
            "Initial concentration max must be positive"
        );
        anyhow::ensure!(positive(c.decay_max), "Decay max must be positive");
        anyhow::ensure!(
            c.init_potential_max >= 0.0 && c.init_potential_max <= c.potential_max,
            "Initial potential max must be in [0, potential_max]"
        );
        anyhow::ensure!(
            c.init_initial_conc_max >= 0.0 && c.init_initial_conc_max <= c.initial_conc_max,
            "Initial concentration init max must be in [0, initial_conc_max]"
        );
        anyhow::ensure!(
            c.init_decay_max >= 0.0 && c.init_decay_max <= c.decay_max,
            "Initial decay max must be in [0, decay_max]"
        );
        anyhow::ensure!(positive(c.conc_cap), "Concentration cap must be positive");

        let r = &self.reaction;
        anyhow::ensure!(positive(r.fav_rate_max), "Favored rate max must be positive");
        anyhow::ensure!(
            r.init_fav_rate_max >= 0.0 && r.init_fav_rate_max <= r.fav_rate_max,
            "Initial favored rate max must be in [0, fav_rate_max]"
        );

        let f = &self.formula;
        anyhow::ensure!(!f.alphabet.is_empty(), "Formula alphabet must not be empty");
        let mut symbols: Vec<char> = f.alphabet.chars().collect();
        symbols.sort_unstable();
        symbols.dedup();
        anyhow::ensure!(
            symbols.len() == f.alphabet.chars().count(),
            "Formula alphabet must not repeat symbols"
        );
        anyhow::ensure!(f.init_min_len >= 1, "Initial formula length must be at least 1");
        anyhow::ensure!(
            f.init_min_len <= f.init_max_len,
            "Initial formula length range is empty"
        );
        anyhow::ensure!(
            f.init_max_len <= f.max_len,
            "Initial formula length must not exceed max_len"
        );

        let n = &self.network;
        anyhow::ensure!(positive(n.dt), "Timestep must be positive");
        anyhow::ensure!(n.drive_rate.is_finite(), "Drive rate must be finite");
        anyhow::ensure!(
            n.initial_chemicals >= 1,
            "Network needs at least one initial chemical"
        );
        anyhow::ensure!(
            n.initial_chemicals >= n.roles.total(),
            "Role layout reserves {} slots but only {} initial chemicals",
            n.roles.total(),
            n.initial_chemicals
        );
        let distinct = formula::distinct_formulas(
            symbols.len(),
            f.init_min_len,
            f.init_max_len,
            f.aggregation,
        );
        anyhow::ensure!(
            n.initial_chemicals <= distinct,
            "Only {} distinct initial formulas exist, {} requested",
            distinct,
            n.initial_chemicals
        );
        n.injection.validate()?;

        let e = &self.evolution;
        anyhow::ensure!(
            e.mutation_rate >= 0.0 && e.mutation_rate <= 1.0,
            "Mutation rate must be in [0.0, 1.0]"
        );
        anyhow::ensure!(
            e.structural_multiplier >= 0.0 && e.structural_multiplier.is_finite(),
            "Structural multiplier must be non-negative"
        );

        Ok(())
    }

    /// Parses and validates a `chemistry.toml` document. Missing keys keep
    /// their defaults.
    pub fn from_toml(content: &str) -> anyhow::Result<Self> {
        let config = toml::from_str::<Self>(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Probability of each structural add/delete mutation.
    #[must_use]
    pub fn structural_rate(&self) -> f64 {
        (self.evolution.mutation_rate * self.evolution.structural_multiplier).min(1.0)
    }

    #[must_use]
    pub fn fingerprint(&self) -> String {
        use sha2::{Digest, Sha256};
        let mut hasher = Sha256::new();
        hasher.update(format!("{:?}", self.chemical).as_bytes());
        hasher.update(format!("{:?}", self.reaction).as_bytes());
        hasher.update(format!("{:?}", self.formula).as_bytes());
        hasher.update(format!("{:?}", self.network).as_bytes());
        hasher.update(format!("{:?}", self.evolution).as_bytes());
        hex::encode(hasher.finalize())
    }
}

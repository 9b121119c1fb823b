//! Policies for feeding external sensor values into input chemicals.
//!
//! Injection runs after a chemical's baseline derivative has been prepared
//! and before reaction fluxes are accumulated, so reactions see whatever the
//! policy wrote.

use chemnet_data::Chemical;
use serde::{Deserialize, Serialize};

/// How one sensor reading perturbs its input chemical for one step.
pub trait InputInjection {
    fn inject(&self, chemical: &mut Chemical, value: f64);
}

/// Adds the reading to the derivative, as an external inflow.
#[derive(Debug, Clone, Copy, Default)]
pub struct AdditiveInflow;

impl InputInjection for AdditiveInflow {
    fn inject(&self, chemical: &mut Chemical, value: f64) {
        chemical.dconc += value;
    }
}

/// Replaces the concentration with `gain * value`.
#[derive(Debug, Clone, Copy)]
pub struct ConcentrationOverwrite {
    pub gain: f64,
}

impl InputInjection for ConcentrationOverwrite {
    fn inject(&self, chemical: &mut Chemical, value: f64) {
        chemical.conc = (self.gain * value).max(0.0);
        chemical.dconc = -chemical.decay * chemical.conc;
    }
}

/// Leaves the input chemical to its internal kinetics.
#[derive(Debug, Clone, Copy, Default)]
pub struct Ignore;

impl InputInjection for Ignore {
    fn inject(&self, _chemical: &mut Chemical, _value: f64) {}
}

/// Serializable selector over the built-in policies.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum InjectionMode {
    Additive,
    Overwrite { gain: f64 },
    /// Overwrite, then also add the reading as inflow.
    Hybrid { gain: f64 },
    Ignore,
}

impl Default for InjectionMode {
    fn default() -> Self {
        Self::Hybrid { gain: 2.0 }
    }
}

impl InjectionMode {
    pub fn validate(&self) -> anyhow::Result<()> {
        if let Self::Overwrite { gain } | Self::Hybrid { gain } = self {
            anyhow::ensure!(
                gain.is_finite() && *gain >= 0.0,
                "Injection gain must be finite and non-negative"
            );
        }
        Ok(())
    }
}

impl InputInjection for InjectionMode {
    fn inject(&self, chemical: &mut Chemical, value: f64) {
        match *self {
            Self::Additive => AdditiveInflow.inject(chemical, value),
            Self::Overwrite { gain } => ConcentrationOverwrite { gain }.inject(chemical, value),
            Self::Hybrid { gain } => {
                ConcentrationOverwrite { gain }.inject(chemical, value);
                AdditiveInflow.inject(chemical, value);
            }
            Self::Ignore => Ignore.inject(chemical, value),
        }
    }
}

pub mod generation;
pub mod mutation;
pub mod step;

pub use chemnet_data::{Chemical, ChemicalRole, Network, Reaction, RoleLayout};
use rand::Rng;

use crate::config::ChemistryConfig;
use crate::error::{NetworkError, Result};
use crate::injection::InputInjection;

pub use generation::create_network_random_with_rng;

/// Behaviour of a reaction network: construction, variation and stepping.
pub trait NetworkLogic {
    fn new_random(config: &ChemistryConfig) -> Self;
    fn new_random_with_rng<R: Rng>(config: &ChemistryConfig, rng: &mut R) -> Self;

    /// Assembles a network from explicit parts, checking every reaction
    /// index and the role layout against the arena.
    fn from_parts(
        chemicals: Vec<Chemical>,
        reactions: Vec<Reaction>,
        roles: RoleLayout,
    ) -> Result<Self>
    where
        Self: Sized;

    fn new_reaction<R: Rng>(&mut self, config: &ChemistryConfig, rng: &mut R) -> Option<usize>;

    fn mutate_with_config<R: Rng>(&mut self, config: &ChemistryConfig, rng: &mut R);

    /// One integration step using the configured injection mode.
    fn get_outputs(&mut self, inputs: &[f64], config: &ChemistryConfig) -> Result<Vec<f64>>;

    fn get_outputs_with<J: InputInjection + ?Sized>(
        &mut self,
        inputs: &[f64],
        config: &ChemistryConfig,
        injection: &J,
    ) -> Result<Vec<f64>>;

    /// Independent copy with live state back at the initial concentrations.
    #[must_use]
    fn deep_copy(&self) -> Self;

    fn reset(&mut self);
    fn swap_chemicals(&mut self, a: usize, b: usize);
    fn initialize_formula_idx_map(&mut self);

    /// Mass-action derivative of every species, as `(formula, expression)`.
    fn rate_equations(&self) -> Vec<(String, String)>;

    fn to_hex(&self) -> String;
    fn from_hex(hex_str: &str) -> anyhow::Result<Self>
    where
        Self: Sized;
}

fn check_structure(network: &Network) -> Result<()> {
    let len = network.chemicals.len();
    if len < network.roles.total() {
        return Err(NetworkError::RoleOutOfBounds {
            required: network.roles.total(),
            available: len,
        });
    }
    for (index, reaction) in network.reactions.iter().enumerate() {
        if reaction.lhs.is_empty() || reaction.rhs.is_empty() {
            return Err(NetworkError::EmptySide { index });
        }
        if let Some(bad) = reaction.participants().find(|&i| i >= len) {
            return Err(NetworkError::UnknownChemical { index: bad, len });
        }
    }
    Ok(())
}

fn side_term(network: &Network, side: &[usize]) -> String {
    side.iter()
        .map(|&i| format!("[{}]", network.chemicals[i].formula))
        .collect()
}

impl NetworkLogic for Network {
    fn new_random(config: &ChemistryConfig) -> Self {
        let mut rng = crate::rng::seeded_rng(config.seed);
        Self::new_random_with_rng(config, &mut rng)
    }

    fn new_random_with_rng<R: Rng>(config: &ChemistryConfig, rng: &mut R) -> Self {
        generation::create_network_random_with_rng(config, rng)
    }

    fn from_parts(
        chemicals: Vec<Chemical>,
        reactions: Vec<Reaction>,
        roles: RoleLayout,
    ) -> Result<Self> {
        let mut network = Network {
            chemicals,
            reactions,
            roles,
            ..Default::default()
        };
        check_structure(&network)?;
        generation::initialize_formula_idx_map(&mut network);
        Ok(network)
    }

    fn new_reaction<R: Rng>(&mut self, config: &ChemistryConfig, rng: &mut R) -> Option<usize> {
        generation::new_reaction(self, config, rng)
    }

    fn mutate_with_config<R: Rng>(&mut self, config: &ChemistryConfig, rng: &mut R) {
        mutation::mutate_with_config(self, config, rng);
    }

    fn get_outputs(&mut self, inputs: &[f64], config: &ChemistryConfig) -> Result<Vec<f64>> {
        step::get_outputs_with(self, inputs, config, &config.network.injection)
    }

    fn get_outputs_with<J: InputInjection + ?Sized>(
        &mut self,
        inputs: &[f64],
        config: &ChemistryConfig,
        injection: &J,
    ) -> Result<Vec<f64>> {
        step::get_outputs_with(self, inputs, config, injection)
    }

    fn deep_copy(&self) -> Self {
        let mut copy = self.clone();
        copy.reset();
        copy
    }

    fn reset(&mut self) {
        for chemical in &mut self.chemicals {
            chemical.reset();
        }
    }

    fn swap_chemicals(&mut self, a: usize, b: usize) {
        generation::swap_chemicals(self, a, b);
    }

    fn initialize_formula_idx_map(&mut self) {
        generation::initialize_formula_idx_map(self);
    }

    fn rate_equations(&self) -> Vec<(String, String)> {
        let mut derivs: Vec<String> = self
            .chemicals
            .iter()
            .map(|c| format!("-{:.2}[{}]", c.decay, c.formula))
            .collect();
        for reaction in &self.reactions {
            let lhs = side_term(self, &reaction.lhs);
            let rhs = side_term(self, &reaction.rhs);
            for &i in &reaction.lhs {
                derivs[i].push_str(&format!(
                    " + {:.2}{rhs} - {:.2}{lhs}",
                    reaction.backward, reaction.forward
                ));
            }
            for &i in &reaction.rhs {
                derivs[i].push_str(&format!(
                    " + {:.2}{lhs} - {:.2}{rhs}",
                    reaction.forward, reaction.backward
                ));
            }
        }
        self.chemicals
            .iter()
            .map(|c| c.formula.clone())
            .zip(derivs)
            .collect()
    }

    fn to_hex(&self) -> String {
        match serde_json::to_vec(self) {
            Ok(bytes) => hex::encode(bytes),
            Err(e) => {
                tracing::error!(error = %e, "Failed to serialize network to JSON");
                String::new()
            }
        }
    }

    fn from_hex(hex_str: &str) -> anyhow::Result<Self> {
        let bytes =
            hex::decode(hex_str).map_err(|e| anyhow::anyhow!("Invalid hex encoding: {}", e))?;

        if bytes.is_empty() {
            return Err(anyhow::anyhow!("Empty hex string"));
        }

        let mut network: Network = serde_json::from_slice(&bytes)
            .map_err(|e| anyhow::anyhow!("Failed to deserialize network: {}", e))?;
        check_structure(&network)?;
        network.initialize_formula_idx_map();
        network.reset();
        Ok(network)
    }
}

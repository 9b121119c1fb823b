use chemnet_lib::model::config::ChemistryConfig;
use chemnet_lib::model::{Chemical, Network, NetworkLogic, Reaction, RoleLayout};

/// Builds hand-made networks for kinetics scenarios.
#[allow(dead_code)]
pub struct NetworkBuilder {
    chemicals: Vec<Chemical>,
    reactions: Vec<Reaction>,
    roles: RoleLayout,
}

#[allow(dead_code)]
impl NetworkBuilder {
    pub fn new() -> Self {
        Self {
            chemicals: Vec::new(),
            reactions: Vec::new(),
            roles: RoleLayout::default(),
        }
    }

    pub fn with_chemical(
        mut self,
        formula: &str,
        potential: f64,
        initial_conc: f64,
        decay: f64,
    ) -> Self {
        self.chemicals
            .push(Chemical::new(formula, potential, initial_conc, decay));
        self
    }

    pub fn with_reaction(
        mut self,
        lhs: Vec<usize>,
        rhs: Vec<usize>,
        forward: f64,
        backward: f64,
    ) -> Self {
        self.reactions
            .push(Reaction::with_rates(lhs, rhs, forward, backward));
        self
    }

    pub fn with_roles(mut self, roles: RoleLayout) -> Self {
        self.roles = roles;
        self
    }

    pub fn build(self) -> Network {
        Network::from_parts(self.chemicals, self.reactions, self.roles)
            .expect("builder produced an invalid network")
    }
}

/// Default chemistry with a fixed seed.
#[allow(dead_code)]
pub fn seeded_config(seed: u64) -> ChemistryConfig {
    ChemistryConfig {
        seed: Some(seed),
        ..ChemistryConfig::default()
    }
}

//! Structured logging and network health summaries.

use crate::config::ChemistryConfig;
use crate::graph::ReactionGraph;
use chemnet_data::Network;

/// Snapshot of a network's size and state.
#[derive(Debug, Clone, PartialEq)]
pub struct NetworkMetrics {
    pub chemicals: usize,
    pub reactions: usize,
    /// Species referenced by no reaction.
    pub inert: usize,
    /// Species currently at the concentration cap.
    pub saturated: usize,
    pub total_conc: f64,
    pub max_conc: f64,
    pub mean_formula_len: f64,
    /// Every output slot is reachable from at least one input slot.
    pub outputs_reachable: bool,
}

impl NetworkMetrics {
    #[must_use]
    pub fn collect(network: &Network, config: &ChemistryConfig) -> Self {
        let graph = ReactionGraph::build(network);
        let cap = config.chemical.conc_cap;
        let count = network.chemicals.len();

        let total_conc = network.chemicals.iter().map(|c| c.conc).sum();
        let max_conc = network.chemicals.iter().map(|c| c.conc).fold(0.0, f64::max);
        let mean_formula_len = if count == 0 {
            0.0
        } else {
            network
                .chemicals
                .iter()
                .map(|c| c.formula.chars().count())
                .sum::<usize>() as f64
                / count as f64
        };

        let roles = network.roles;
        let reached: std::collections::HashSet<usize> = roles
            .input_indices()
            .flat_map(|i| graph.reachable_from(i))
            .collect();
        let outputs_reachable = roles.output_indices().all(|o| reached.contains(&o));

        Self {
            chemicals: count,
            reactions: network.reactions.len(),
            inert: graph.inert_chemicals().len(),
            saturated: network.chemicals.iter().filter(|c| c.conc >= cap).count(),
            total_conc,
            max_conc,
            mean_formula_len,
            outputs_reachable,
        }
    }

    pub fn log(&self) {
        tracing::info!(
            chemicals = self.chemicals,
            reactions = self.reactions,
            inert = self.inert,
            saturated = self.saturated,
            total_conc = self.total_conc,
            max_conc = self.max_conc,
            mean_formula_len = self.mean_formula_len,
            outputs_reachable = self.outputs_reachable,
            "Network metrics"
        );
    }
}

/// Initialize tracing subscriber for logging.
pub fn init_logging() {
    tracing::subscriber::set_global_default(
        tracing_subscriber::FmtSubscriber::builder()
            .with_max_level(tracing::Level::INFO)
            .finish(),
    )
    .ok();
}

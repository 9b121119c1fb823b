//! Bipartite species/reaction graph for structural queries.

use chemnet_data::Network;
use petgraph::graph::{DiGraph, NodeIndex};
use petgraph::visit::Bfs;
use std::collections::HashSet;

/// A node of the reaction graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GraphNode {
    /// Index into `Network::chemicals`.
    Species(usize),
    /// Index into `Network::reactions`.
    Reaction(usize),
}

/// Directed bipartite view of a network. Every reaction contributes
/// reactant → reaction → product edges and, being reversible, the same edges
/// reversed.
pub struct ReactionGraph {
    pub graph: DiGraph<GraphNode, ()>,
    species: Vec<NodeIndex>,
}

impl ReactionGraph {
    pub fn build(network: &Network) -> Self {
        let mut graph = DiGraph::new();
        let species: Vec<NodeIndex> = (0..network.chemicals.len())
            .map(|i| graph.add_node(GraphNode::Species(i)))
            .collect();

        for (r_idx, reaction) in network.reactions.iter().enumerate() {
            let node = graph.add_node(GraphNode::Reaction(r_idx));
            for &i in &reaction.lhs {
                graph.update_edge(species[i], node, ());
                graph.update_edge(node, species[i], ());
            }
            for &i in &reaction.rhs {
                graph.update_edge(node, species[i], ());
                graph.update_edge(species[i], node, ());
            }
        }

        Self { graph, species }
    }

    /// Species that take part in no reaction.
    #[must_use]
    pub fn inert_chemicals(&self) -> Vec<usize> {
        self.species
            .iter()
            .enumerate()
            .filter(|&(_, &node)| self.graph.neighbors(node).next().is_none())
            .map(|(i, _)| i)
            .collect()
    }

    /// Species reachable from `index` through any chain of reactions,
    /// including `index` itself. Empty for an out-of-range index.
    #[must_use]
    pub fn reachable_from(&self, index: usize) -> HashSet<usize> {
        let mut reached = HashSet::new();
        let Some(&start) = self.species.get(index) else {
            return reached;
        };
        let mut bfs = Bfs::new(&self.graph, start);
        while let Some(node) = bfs.next(&self.graph) {
            if let GraphNode::Species(i) = self.graph[node] {
                reached.insert(i);
            }
        }
        reached
    }

    #[must_use]
    pub fn connects(&self, from: usize, to: usize) -> bool {
        self.reachable_from(from).contains(&to)
    }
}

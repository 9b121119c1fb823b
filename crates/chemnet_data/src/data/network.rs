use super::chemical::Chemical;
use super::reaction::Reaction;
use super::roles::RoleLayout;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// The reaction network of one evolvable individual.
///
/// Chemicals live in a flat arena; reactions refer to them by index.
#[derive(Clone, Debug, Serialize, Deserialize, Default)]
pub struct Network {
    /// All chemical species, including inert ones.
    pub chemicals: Vec<Chemical>,
    /// All reactions over `chemicals`.
    pub reactions: Vec<Reaction>,
    /// Which leading slots are inputs, outputs and drives.
    pub roles: RoleLayout,
    /// Canonical formula to arena index (not serialized).
    #[serde(skip, default = "HashMap::new")]
    pub formula_idx_map: HashMap<String, usize>,
}

impl Network {
    /// Arena index of the chemical with exactly this formula.
    #[must_use]
    pub fn index_of(&self, formula: &str) -> Option<usize> {
        self.formula_idx_map.get(formula).copied()
    }

    /// Sum of the potentials of the given participants.
    #[must_use]
    pub fn potential_of(&self, side: &[usize]) -> f64 {
        side.iter().map(|&i| self.chemicals[i].potential).sum()
    }

    /// Reaction written with formulas, e.g. `[0]+[1]↔[01]`.
    #[must_use]
    pub fn reaction_label(&self, reaction: &Reaction) -> String {
        let side = |indices: &[usize]| {
            indices
                .iter()
                .map(|&i| format!("[{}]", self.chemicals[i].formula))
                .collect::<Vec<_>>()
                .join("+")
        };
        format!("{}↔{}", side(&reaction.lhs), side(&reaction.rhs))
    }

    /// Current concentrations in arena order.
    #[must_use]
    pub fn concentrations(&self) -> Vec<f64> {
        self.chemicals.iter().map(|c| c.conc).collect()
    }
}

impl PartialEq for Network {
    fn eq(&self, other: &Self) -> bool {
        self.roles == other.roles
            && self.chemicals == other.chemicals
            && self.reactions == other.reactions
    }
}

impl fmt::Display for Network {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let formulas: Vec<&str> = self.chemicals.iter().map(|c| c.formula.as_str()).collect();
        write!(f, "{}", formulas.join(" "))?;
        for reaction in &self.reactions {
            write!(f, "\n{}", self.reaction_label(reaction))?;
        }
        Ok(())
    }
}

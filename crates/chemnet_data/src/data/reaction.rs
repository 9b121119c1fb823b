use serde::{Deserialize, Serialize};

/// A reversible transformation between two multisets of chemicals.
///
/// Participants are indices into the owning network's chemical arena; a
/// species may appear more than once on a side.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Reaction {
    /// Reactant indices.
    pub lhs: Vec<usize>,
    /// Product indices.
    pub rhs: Vec<usize>,
    /// Rate constant of the favored direction.
    pub fav_rate: f64,
    /// Derived rate constant for `lhs -> rhs`.
    pub forward: f64,
    /// Derived rate constant for `rhs -> lhs`.
    pub backward: f64,
    /// Input channel whose reading scales both directions, if any.
    #[serde(default)]
    pub influence: Option<usize>,
}

impl Reaction {
    /// Builds a reaction with explicit rate constants, bypassing derivation
    /// from potentials.
    #[must_use]
    pub fn with_rates(lhs: Vec<usize>, rhs: Vec<usize>, forward: f64, backward: f64) -> Self {
        Self {
            lhs,
            rhs,
            fav_rate: forward.max(backward),
            forward,
            backward,
            influence: None,
        }
    }

    /// Iterates every chemical index this reaction touches, reactants first.
    pub fn participants(&self) -> impl Iterator<Item = usize> + '_ {
        self.lhs.iter().chain(self.rhs.iter()).copied()
    }

    /// Whether both sides hold the same multiset of chemicals.
    #[must_use]
    pub fn is_degenerate(&self) -> bool {
        let mut lhs = self.lhs.clone();
        let mut rhs = self.rhs.clone();
        lhs.sort_unstable();
        rhs.sort_unstable();
        lhs == rhs
    }
}

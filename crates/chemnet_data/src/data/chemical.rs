use serde::{Deserialize, Serialize};

/// A single virtual chemical species.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Chemical {
    /// Identity and structural description, drawn from the formula alphabet.
    pub formula: String,
    /// Energy level; reactions producing high-potential species are disfavored.
    pub potential: f64,
    /// Concentration at the start of a simulation run.
    pub initial_conc: f64,
    /// First-order decay rate.
    pub decay: f64,
    /// Current concentration (not persisted).
    #[serde(skip, default)]
    pub conc: f64,
    /// Derivative accumulator for the step in progress (not persisted).
    #[serde(skip, default)]
    pub dconc: f64,
    /// Concentration after every completed step, seeded with `initial_conc` (not persisted).
    #[serde(skip, default = "Vec::new")]
    pub hist: Vec<f64>,
}

impl Chemical {
    /// Creates a species at rest: `conc` equals `initial_conc` and the history
    /// holds only the starting value.
    #[must_use]
    pub fn new(formula: impl Into<String>, potential: f64, initial_conc: f64, decay: f64) -> Self {
        Self {
            formula: formula.into(),
            potential,
            initial_conc,
            decay,
            conc: initial_conc,
            dconc: 0.0,
            hist: vec![initial_conc],
        }
    }

    /// Puts the live state back to the start of a run.
    pub fn reset(&mut self) {
        self.conc = self.initial_conc;
        self.dconc = 0.0;
        self.hist.clear();
        self.hist.push(self.initial_conc);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_chemical_starts_at_initial_conc() {
        let chem = Chemical::new("01", 1.0, 2.5, 0.3);
        assert_eq!(chem.conc, 2.5);
        assert_eq!(chem.dconc, 0.0);
        assert_eq!(chem.hist, vec![2.5]);
    }

    #[test]
    fn test_reset_discards_history() {
        let mut chem = Chemical::new("1", 0.0, 1.0, 0.0);
        chem.conc = 4.0;
        chem.dconc = -2.0;
        chem.hist.extend([3.0, 4.0]);
        chem.reset();
        assert_eq!(chem.conc, 1.0);
        assert_eq!(chem.dconc, 0.0);
        assert_eq!(chem.hist, vec![1.0]);
    }
}

use serde::{Deserialize, Serialize};

/// Reserved purpose of a chemical slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ChemicalRole {
    /// Receives the external sensor value with the given channel index.
    Input(usize),
    /// Read back as the motor output with the given channel index.
    Output(usize),
    /// Battery-like species driven at a fixed rate instead of decaying.
    Drive(usize),
}

/// Positional role assignment: inputs first, then outputs, then drives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub struct RoleLayout {
    pub inputs: usize,
    pub outputs: usize,
    pub drives: usize,
}

impl RoleLayout {
    #[must_use]
    pub const fn new(inputs: usize, outputs: usize, drives: usize) -> Self {
        Self {
            inputs,
            outputs,
            drives,
        }
    }

    /// Number of reserved slots.
    #[must_use]
    pub const fn total(&self) -> usize {
        self.inputs + self.outputs + self.drives
    }

    #[must_use]
    pub fn role_of(&self, index: usize) -> Option<ChemicalRole> {
        if index < self.inputs {
            Some(ChemicalRole::Input(index))
        } else if index < self.inputs + self.outputs {
            Some(ChemicalRole::Output(index - self.inputs))
        } else if index < self.total() {
            Some(ChemicalRole::Drive(index - self.inputs - self.outputs))
        } else {
            None
        }
    }

    /// Arena indices of the output slots, in channel order.
    pub fn output_indices(&self) -> std::ops::Range<usize> {
        self.inputs..self.inputs + self.outputs
    }

    /// Arena indices of the input slots, in channel order.
    pub fn input_indices(&self) -> std::ops::Range<usize> {
        0..self.inputs
    }
}

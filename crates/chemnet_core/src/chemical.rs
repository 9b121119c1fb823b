use crate::config::ChemistryConfig;
use crate::noise::add_noise;
use chemnet_data::{Chemical, ChemicalRole};
use rand::Rng;

/// Per-species dynamics and mutation.
pub trait ChemicalLogic {
    /// A fresh species with parameters drawn from the `init_*` ranges.
    fn new_random_with_rng<R: Rng>(formula: String, config: &ChemistryConfig, rng: &mut R) -> Self;

    /// Resets the derivative accumulator to the species' baseline: decay for
    /// ordinary species, the fixed drive rate for drive slots.
    fn prepare_step(&mut self, role: Option<ChemicalRole>, config: &ChemistryConfig);

    /// Explicit Euler step clamped to `[0, cap]`; records the new
    /// concentration. Returns `true` when the ceiling was hit.
    fn integrate(&mut self, dt: f64, cap: f64) -> bool;

    /// Reflecting parameter noise, then a reset of the live state to the
    /// (possibly new) initial concentration.
    fn mutate_with_config<R: Rng>(
        &mut self,
        config: &ChemistryConfig,
        role: Option<ChemicalRole>,
        rng: &mut R,
    );

    /// Fixes the parameters of a drive slot.
    fn pin_drive(&mut self, config: &ChemistryConfig);
}

impl ChemicalLogic for Chemical {
    fn new_random_with_rng<R: Rng>(formula: String, config: &ChemistryConfig, rng: &mut R) -> Self {
        let c = &config.chemical;
        let potential = rng.gen::<f64>() * c.init_potential_max;
        let initial_conc = rng.gen::<f64>() * c.init_initial_conc_max;
        let decay = rng.gen::<f64>() * c.init_decay_max;
        Chemical::new(formula, potential, initial_conc, decay)
    }

    fn prepare_step(&mut self, role: Option<ChemicalRole>, config: &ChemistryConfig) {
        self.dconc = match role {
            Some(ChemicalRole::Drive(_)) => config.network.drive_rate,
            _ => -self.decay * self.conc,
        };
    }

    fn integrate(&mut self, dt: f64, cap: f64) -> bool {
        // f64::max maps a NaN sum (0 * inf flux) to 0.
        let next = (self.conc + self.dconc * dt).max(0.0);
        let saturated = next >= cap;
        self.conc = next.min(cap);
        self.hist.push(self.conc);
        if saturated {
            tracing::trace!(formula = %self.formula, cap, "Concentration clamped at cap");
        }
        saturated
    }

    fn mutate_with_config<R: Rng>(
        &mut self,
        config: &ChemistryConfig,
        role: Option<ChemicalRole>,
        rng: &mut R,
    ) {
        if matches!(role, Some(ChemicalRole::Drive(_))) {
            self.pin_drive(config);
        } else {
            let c = &config.chemical;
            let rate = config.evolution.mutation_rate;
            self.potential = add_noise(self.potential, c.potential_max, rate, rng);
            self.initial_conc = add_noise(self.initial_conc, c.initial_conc_max, rate, rng);
            self.decay = add_noise(self.decay, c.decay_max, rate, rng);
        }
        self.reset();
    }

    fn pin_drive(&mut self, config: &ChemistryConfig) {
        self.potential = config.chemical.potential_max;
        self.decay = 0.0;
        self.initial_conc = config.chemical.initial_conc_max;
    }
}

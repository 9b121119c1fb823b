use crate::config::ChemistryConfig;
use crate::noise::add_noise;
use chemnet_data::{Chemical, Reaction};
use rand::Rng;

/// Splits `fav_rate` into `(forward, backward)`.
///
/// The side with the higher total potential is disfavored: its direction runs
/// at `fav_rate * exp(-(high - low))`, the other at `fav_rate`. Equal
/// potentials give equal rates.
#[must_use]
pub fn derive_rates(fav_rate: f64, lhs_potential: f64, rhs_potential: f64) -> (f64, f64) {
    if lhs_potential > rhs_potential {
        (fav_rate, fav_rate * (-(lhs_potential - rhs_potential)).exp())
    } else {
        (fav_rate * (-(rhs_potential - lhs_potential)).exp(), fav_rate)
    }
}

fn side_potential(side: &[usize], chemicals: &[Chemical]) -> f64 {
    side.iter().map(|&i| chemicals[i].potential).sum()
}

fn side_product(side: &[usize], chemicals: &[Chemical]) -> f64 {
    side.iter().map(|&i| chemicals[i].conc).product()
}

/// Rate algebra and mass-action flux for reactions over a chemical arena.
pub trait ReactionLogic {
    /// Builds a reaction and derives its rates from the participants' current
    /// potentials.
    fn from_chemicals(
        lhs: Vec<usize>,
        rhs: Vec<usize>,
        fav_rate: f64,
        chemicals: &[Chemical],
    ) -> Self;

    /// A reaction with a random favored rate from the initial range and,
    /// when sensor influence is enabled, a random input channel.
    fn new_random_with_rng<R: Rng>(
        lhs: Vec<usize>,
        rhs: Vec<usize>,
        chemicals: &[Chemical],
        inputs: usize,
        config: &ChemistryConfig,
        rng: &mut R,
    ) -> Self;

    /// Recomputes `forward` and `backward` from `fav_rate` and current potentials.
    fn rederive_rates(&mut self, chemicals: &[Chemical]);

    /// Net `lhs -> rhs` flux at current concentrations, scaled by `modulation`.
    fn flux(&self, chemicals: &[Chemical], modulation: f64) -> f64;

    /// Perturbs `fav_rate` (and the influence channel), then rederives rates.
    fn mutate_with_config<R: Rng>(
        &mut self,
        chemicals: &[Chemical],
        inputs: usize,
        config: &ChemistryConfig,
        rng: &mut R,
    );
}

impl ReactionLogic for Reaction {
    fn from_chemicals(
        lhs: Vec<usize>,
        rhs: Vec<usize>,
        fav_rate: f64,
        chemicals: &[Chemical],
    ) -> Self {
        let mut reaction = Reaction {
            lhs,
            rhs,
            fav_rate,
            forward: 0.0,
            backward: 0.0,
            influence: None,
        };
        reaction.rederive_rates(chemicals);
        reaction
    }

    fn new_random_with_rng<R: Rng>(
        lhs: Vec<usize>,
        rhs: Vec<usize>,
        chemicals: &[Chemical],
        inputs: usize,
        config: &ChemistryConfig,
        rng: &mut R,
    ) -> Self {
        let fav_rate = rng.gen::<f64>() * config.reaction.init_fav_rate_max;
        let mut reaction = Self::from_chemicals(lhs, rhs, fav_rate, chemicals);
        if config.reaction.sensor_influence && inputs > 0 {
            reaction.influence = Some(rng.gen_range(0..inputs));
        }
        reaction
    }

    fn rederive_rates(&mut self, chemicals: &[Chemical]) {
        let (forward, backward) = derive_rates(
            self.fav_rate,
            side_potential(&self.lhs, chemicals),
            side_potential(&self.rhs, chemicals),
        );
        self.forward = forward;
        self.backward = backward;
    }

    fn flux(&self, chemicals: &[Chemical], modulation: f64) -> f64 {
        let lhs_product = side_product(&self.lhs, chemicals);
        let rhs_product = side_product(&self.rhs, chemicals);
        (lhs_product * self.forward - rhs_product * self.backward) * modulation
    }

    fn mutate_with_config<R: Rng>(
        &mut self,
        chemicals: &[Chemical],
        inputs: usize,
        config: &ChemistryConfig,
        rng: &mut R,
    ) {
        let rate = config.evolution.mutation_rate;
        self.fav_rate = add_noise(self.fav_rate, config.reaction.fav_rate_max, rate, rng);
        if config.reaction.sensor_influence && inputs > 0 && rng.gen::<f64>() < rate {
            self.influence = Some(rng.gen_range(0..inputs));
        }
        self.rederive_rates(chemicals);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn arena() -> Vec<Chemical> {
        vec![
            Chemical::new("0", 3.0, 1.0, 0.0),
            Chemical::new("1", 1.0, 2.0, 0.0),
            Chemical::new("01", 2.5, 0.5, 0.0),
        ]
    }

    fn assert_consistent(r: &Reaction, chemicals: &[Chemical]) {
        let diff = (side_potential(&r.lhs, chemicals) - side_potential(&r.rhs, chemicals)).abs();
        let hi = r.forward.max(r.backward);
        let lo = r.forward.min(r.backward);
        assert!((lo - hi * (-diff).exp()).abs() <= 1e-12 * hi.max(1.0));
    }

    #[test]
    fn test_downhill_direction_is_favored() {
        let (forward, backward) = derive_rates(2.0, 5.0, 3.0);
        assert_eq!(forward, 2.0);
        assert!((backward - 2.0 * (-2.0f64).exp()).abs() < 1e-12);

        let (forward, backward) = derive_rates(2.0, 1.0, 3.0);
        assert_eq!(backward, 2.0);
        assert!((forward - 2.0 * (-2.0f64).exp()).abs() < 1e-12);
    }

    #[test]
    fn test_equal_potentials_give_equal_rates() {
        assert_eq!(derive_rates(0.7, 2.0, 2.0), (0.7, 0.7));
    }

    #[test]
    fn test_from_chemicals_sums_side_potentials() {
        let chemicals = arena();
        // lhs 0 + 1 = 4.0, rhs 01 = 2.5
        let r = Reaction::from_chemicals(vec![0, 1], vec![2], 1.0, &chemicals);
        assert_eq!(r.forward, 1.0);
        assert!((r.backward - (-1.5f64).exp()).abs() < 1e-12);
        assert_consistent(&r, &chemicals);
    }

    #[test]
    fn test_flux_is_mass_action() {
        let chemicals = arena();
        let r = Reaction::with_rates(vec![0, 1], vec![2], 0.5, 0.2);
        // 1.0 * 2.0 * 0.5 - 0.5 * 0.2
        assert!((r.flux(&chemicals, 1.0) - 0.9).abs() < 1e-12);
        assert!((r.flux(&chemicals, 2.0) - 1.8).abs() < 1e-12);
    }

    #[test]
    fn test_zero_concentration_gives_zero_flux() {
        let mut chemicals = arena();
        chemicals[0].conc = 0.0;
        chemicals[2].conc = 0.0;
        let r = Reaction::with_rates(vec![0, 1], vec![2], 0.5, 0.2);
        assert_eq!(r.flux(&chemicals, 1.0), 0.0);
    }

    #[test]
    fn test_mutation_keeps_rates_consistent_and_bounded() {
        let mut config = ChemistryConfig::default();
        config.evolution.mutation_rate = 1.0;
        config.reaction.sensor_influence = true;
        let chemicals = arena();
        let mut rng = ChaCha8Rng::seed_from_u64(21);
        let mut r =
            Reaction::new_random_with_rng(vec![2], vec![0, 1], &chemicals, 3, &config, &mut rng);
        assert!(r.influence.is_some_and(|c| c < 3));
        for _ in 0..300 {
            r.mutate_with_config(&chemicals, 3, &config, &mut rng);
            assert!((0.0..=config.reaction.fav_rate_max).contains(&r.fav_rate));
            assert!(r.influence.is_some_and(|c| c < 3));
            assert_consistent(&r, &chemicals);
        }
    }

    #[test]
    fn test_influence_disabled_by_default() {
        let config = ChemistryConfig::default();
        let chemicals = arena();
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let r = Reaction::new_random_with_rng(vec![0], vec![1], &chemicals, 2, &config, &mut rng);
        assert!(r.influence.is_none());
        assert!(r.fav_rate < config.reaction.init_fav_rate_max);
    }
}

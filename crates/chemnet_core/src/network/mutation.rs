use super::generation;
use crate::chemical::ChemicalLogic;
use crate::config::ChemistryConfig;
use crate::reaction::ReactionLogic;
use chemnet_data::Network;
use rand::Rng;

/// Produces offspring variation in place.
///
/// The parametric pass (every chemical, then every reaction's rates against
/// the already-mutated potentials) completes before any structural edit, so
/// reactions and chemicals added here keep their fresh random parameters.
pub fn mutate_with_config<R: Rng>(network: &mut Network, config: &ChemistryConfig, rng: &mut R) {
    let roles = network.roles;
    for (idx, chemical) in network.chemicals.iter_mut().enumerate() {
        chemical.mutate_with_config(config, roles.role_of(idx), rng);
    }
    for reaction in &mut network.reactions {
        reaction.mutate_with_config(&network.chemicals, roles.inputs, config, rng);
    }

    let structural = config.structural_rate();

    if rng.gen::<f64>() < structural || network.reactions.is_empty() {
        let added = generation::new_reaction(network, config, rng);
        tracing::debug!(added = ?added, "Structural mutation: add reaction");
    }

    if rng.gen::<f64>() < structural && !network.reactions.is_empty() {
        let idx = rng.gen_range(0..network.reactions.len());
        network.reactions.remove(idx);
        tracing::debug!(index = idx, "Structural mutation: delete reaction");
    }

    if rng.gen::<f64>() < config.evolution.mutation_rate && !network.chemicals.is_empty() {
        let a = rng.gen_range(0..network.chemicals.len());
        let b = rng.gen_range(0..network.chemicals.len());
        generation::swap_chemicals(network, a, b);
        tracing::debug!(a, b, "Structural mutation: swap chemicals");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reaction::derive_rates;
    use chemnet_data::{Chemical, Reaction, RoleLayout};
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_empty_reaction_set_forces_addition_attempt() {
        let mut config = ChemistryConfig::default();
        config.evolution.mutation_rate = 0.0;
        let mut network = Network::default();
        generation::push_chemical(&mut network, Chemical::new("0", 1.0, 1.0, 0.0));
        generation::push_chemical(&mut network, Chemical::new("1", 2.0, 1.0, 0.0));
        let mut rng = ChaCha8Rng::seed_from_u64(99);
        for _ in 0..50 {
            mutate_with_config(&mut network, &config, &mut rng);
            if !network.reactions.is_empty() {
                break;
            }
        }
        assert!(!network.reactions.is_empty());
    }

    #[test]
    fn test_zero_rate_changes_nothing_structural() {
        let mut config = ChemistryConfig::default();
        config.evolution.mutation_rate = 0.0;
        let mut rng = ChaCha8Rng::seed_from_u64(4);
        let mut network = generation::create_network_random_with_rng(&config, &mut rng);
        if network.reactions.is_empty() {
            return;
        }
        let before = network.clone();
        mutate_with_config(&mut network, &config, &mut rng);
        assert_eq!(before, network);
    }

    #[test]
    fn test_rates_follow_mutated_potentials() {
        let mut config = ChemistryConfig::default();
        config.evolution.mutation_rate = 1.0;
        let mut network = Network {
            roles: RoleLayout::default(),
            ..Default::default()
        };
        generation::push_chemical(&mut network, Chemical::new("0", 1.0, 1.0, 0.1));
        generation::push_chemical(&mut network, Chemical::new("1", 5.0, 1.0, 0.1));
        generation::push_chemical(&mut network, Chemical::new("01", 3.0, 1.0, 0.1));
        network
            .reactions
            .push(Reaction::from_chemicals(vec![0, 1], vec![2], 1.0, &network.chemicals));
        let mut rng = ChaCha8Rng::seed_from_u64(12);
        for _ in 0..100 {
            mutate_with_config(&mut network, &config, &mut rng);
            for reaction in &network.reactions {
                let (forward, backward) = derive_rates(
                    reaction.fav_rate,
                    network.potential_of(&reaction.lhs),
                    network.potential_of(&reaction.rhs),
                );
                assert_eq!(reaction.forward, forward);
                assert_eq!(reaction.backward, backward);
            }
        }
    }

    #[test]
    fn test_index_map_stays_consistent() {
        let mut config = ChemistryConfig::default();
        config.evolution.mutation_rate = 0.5;
        let mut rng = ChaCha8Rng::seed_from_u64(31);
        let mut network = generation::create_network_random_with_rng(&config, &mut rng);
        for _ in 0..200 {
            mutate_with_config(&mut network, &config, &mut rng);
        }
        assert_eq!(network.formula_idx_map.len(), network.chemicals.len());
        for (idx, chem) in network.chemicals.iter().enumerate() {
            assert_eq!(network.index_of(&chem.formula), Some(idx));
        }
        for reaction in &network.reactions {
            assert!(reaction.participants().all(|i| i < network.chemicals.len()));
            assert!(!reaction.is_degenerate());
        }
    }
}

use chemnet_lib::model::config::ChemistryConfig;
use chemnet_lib::model::injection::InjectionMode;
use chemnet_lib::model::noise::{add_noise, reflect};
use chemnet_lib::model::{Network, NetworkLogic, ReactionLogic, RoleLayout};
use proptest::prelude::*;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

fn arb_injection() -> impl Strategy<Value = InjectionMode> {
    prop_oneof![
        Just(InjectionMode::Additive),
        (0.0f64..5.0).prop_map(|gain| InjectionMode::Overwrite { gain }),
        (0.0f64..5.0).prop_map(|gain| InjectionMode::Hybrid { gain }),
        Just(InjectionMode::Ignore),
    ]
}

prop_compose! {
    fn arb_config()(
        mutation_rate in 0.0f64..1.0,
        aggregation in any::<bool>(),
        sensor_influence in any::<bool>(),
        injection in arb_injection(),
        inputs in 0usize..=2,
        outputs in 0usize..=2,
        drives in 0usize..=2,
    ) -> ChemistryConfig {
        let mut config = ChemistryConfig::default();
        config.evolution.mutation_rate = mutation_rate;
        config.formula.aggregation = aggregation;
        config.reaction.sensor_influence = sensor_influence;
        config.network.injection = injection;
        config.network.roles = RoleLayout::new(inputs, outputs, drives);
        let slots = config.network.roles.total();
        config.network.initial_chemicals = config.network.initial_chemicals.max(slots);
        config
    }
}

fn assert_rates_consistent(network: &Network) {
    for reaction in &network.reactions {
        let lhs = network.potential_of(&reaction.lhs);
        let rhs = network.potential_of(&reaction.rhs);
        let diff = (lhs - rhs).abs();
        let hi = reaction.forward.max(reaction.backward);
        let lo = reaction.forward.min(reaction.backward);
        assert_eq!(hi, reaction.fav_rate);
        assert!((lo - hi * (-diff).exp()).abs() <= 1e-12 * hi.max(1.0));
    }
}

proptest! {
    #[test]
    fn reflect_stays_in_bounds(value in -1.0e6f64..1.0e6, max in 0.001f64..100.0) {
        let r = reflect(value, max);
        prop_assert!((0.0..=max).contains(&r));
    }

    #[test]
    fn reflect_is_identity_inside(max in 0.001f64..100.0, frac in 0.0f64..=1.0) {
        let value = max * frac;
        prop_assert!((reflect(value, max) - value).abs() <= 1e-9 * max);
    }

    #[test]
    fn add_noise_stays_in_bounds(
        seed in any::<u64>(),
        value in 0.0f64..10.0,
        rate in 0.0f64..=1.0,
    ) {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let noisy = add_noise(value, 10.0, rate, &mut rng);
        prop_assert!((0.0..=10.0).contains(&noisy));
    }

    #[test]
    fn mutation_keeps_parameters_bounded(seed in any::<u64>(), config in arb_config()) {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let mut network = Network::new_random_with_rng(&config, &mut rng);
        assert_rates_consistent(&network);
        for _ in 0..30 {
            network.mutate_with_config(&config, &mut rng);
            for chem in &network.chemicals {
                prop_assert!((0.0..=config.chemical.potential_max).contains(&chem.potential));
                prop_assert!((0.0..=config.chemical.initial_conc_max).contains(&chem.initial_conc));
                prop_assert!((0.0..=config.chemical.decay_max).contains(&chem.decay));
                prop_assert!(chem.formula.chars().count() <= config.formula.max_len);
            }
            for reaction in &network.reactions {
                prop_assert!((0.0..=config.reaction.fav_rate_max).contains(&reaction.fav_rate));
                prop_assert!(!reaction.is_degenerate());
            }
            assert_rates_consistent(&network);
        }
    }

    #[test]
    fn stepping_never_goes_negative(
        seed in any::<u64>(),
        config in arb_config(),
        readings in prop::collection::vec(-10.0f64..10.0, 2),
    ) {
        let inputs = &readings[..config.network.roles.inputs];
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let mut network = Network::new_random_with_rng(&config, &mut rng);
        for _ in 0..20 {
            network.new_reaction(&config, &mut rng);
        }
        for _ in 0..100 {
            let outputs = network.get_outputs(inputs, &config).unwrap();
            prop_assert!(outputs.iter().all(|&o| o >= 0.0));
            for chem in &network.chemicals {
                prop_assert!(chem.conc >= 0.0);
                prop_assert!(chem.conc <= config.chemical.conc_cap);
            }
        }
    }

    #[test]
    fn rederived_rates_match_potentials(seed in any::<u64>()) {
        let config = ChemistryConfig::default();
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let mut network = Network::new_random_with_rng(&config, &mut rng);
        for chem in &mut network.chemicals {
            chem.potential = rng.gen_range(0.0..config.chemical.potential_max);
        }
        let chemicals = network.chemicals.clone();
        for reaction in &mut network.reactions {
            reaction.rederive_rates(&chemicals);
        }
        assert_rates_consistent(&network);
    }
}

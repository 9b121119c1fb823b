use crate::chemical::ChemicalLogic;
use crate::config::ChemistryConfig;
use crate::formula;
use crate::reaction::ReactionLogic;
use chemnet_data::{Chemical, ChemicalRole, Network, Reaction};
use rand::seq::SliceRandom;
use rand::Rng;

pub fn create_network_random_with_rng<R: Rng>(config: &ChemistryConfig, rng: &mut R) -> Network {
    let alphabet: Vec<char> = config.formula.alphabet.chars().collect();
    let mut network = Network {
        roles: config.network.roles,
        ..Default::default()
    };

    let mut symbols = alphabet.clone();
    symbols.sort_unstable();
    symbols.dedup();
    let available = formula::distinct_formulas(
        symbols.len(),
        config.formula.init_min_len,
        config.formula.init_max_len,
        config.formula.aggregation,
    );
    let target = config.network.initial_chemicals.min(available);
    if target < config.network.initial_chemicals {
        tracing::debug!(
            requested = config.network.initial_chemicals,
            available,
            "Not enough distinct initial formulas, generating fewer chemicals"
        );
    }

    while network.chemicals.len() < target {
        let raw = formula::random_formula(
            &alphabet,
            config.formula.init_min_len,
            config.formula.init_max_len,
            rng,
        );
        let formula = formula::canonicalize(&raw, config.formula.aggregation);
        if network.formula_idx_map.contains_key(&formula) {
            continue;
        }
        let chemical = Chemical::new_random_with_rng(formula, config, rng);
        push_chemical(&mut network, chemical);
    }

    for _ in 0..config.network.initial_reactions {
        new_reaction(&mut network, config, rng);
    }

    if config.network.shuffle_on_init {
        let mut order: Vec<usize> = (0..network.chemicals.len()).collect();
        order.shuffle(rng);
        permute_chemicals(&mut network, &order);
    }

    let roles = network.roles;
    for (idx, chemical) in network.chemicals.iter_mut().enumerate() {
        if let Some(ChemicalRole::Drive(_)) = roles.role_of(idx) {
            chemical.pin_drive(config);
            chemical.reset();
        }
    }
    // Pinned drive potentials invalidate rates derived during generation.
    for reaction in &mut network.reactions {
        reaction.rederive_rates(&network.chemicals);
    }

    tracing::debug!(
        chemicals = network.chemicals.len(),
        reactions = network.reactions.len(),
        "Generated network"
    );
    network
}

/// Appends a chemical and indexes its formula.
pub fn push_chemical(network: &mut Network, chemical: Chemical) -> usize {
    let idx = network.chemicals.len();
    network.formula_idx_map.insert(chemical.formula.clone(), idx);
    network.chemicals.push(chemical);
    idx
}

/// Grows the graph by at most one reaction.
///
/// Picks decompose, compose, or compose-then-decompose uniformly. Returns
/// `None` when the pick cannot be decomposed or the candidate would leave
/// the formula multiset unchanged; in both cases the network is untouched.
pub fn new_reaction<R: Rng>(
    network: &mut Network,
    config: &ChemistryConfig,
    rng: &mut R,
) -> Option<usize> {
    if network.chemicals.is_empty() {
        return None;
    }
    let count = network.chemicals.len();
    let max_len = config.formula.max_len;
    let aggregation = config.formula.aggregation;

    let method = rng.gen_range(0..3);
    let (lhs, products) = if method == 0 {
        let pick = rng.gen_range(0..count);
        let picked = &network.chemicals[pick].formula;
        let Some(parts) = formula::decompose(picked, max_len, aggregation, rng) else {
            tracing::debug!(formula = %picked, "Pick cannot be decomposed");
            return None;
        };
        (vec![pick], Vec::from(parts))
    } else {
        let a = rng.gen_range(0..count);
        let b = rng.gen_range(0..count);
        let composed = formula::compose(&[
            network.chemicals[a].formula.as_str(),
            network.chemicals[b].formula.as_str(),
        ]);
        if composed.chars().count() > max_len || method == 2 {
            let parts = formula::decompose(&composed, max_len, aggregation, rng)?;
            (vec![a, b], Vec::from(parts))
        } else {
            (vec![a, b], vec![composed])
        }
    };

    let products: Vec<String> = products
        .iter()
        .map(|f| formula::canonicalize(f, aggregation))
        .collect();

    let mut lhs_formulas: Vec<&str> = lhs
        .iter()
        .map(|&i| network.chemicals[i].formula.as_str())
        .collect();
    let mut rhs_formulas: Vec<&str> = products.iter().map(String::as_str).collect();
    lhs_formulas.sort_unstable();
    rhs_formulas.sort_unstable();
    if lhs_formulas == rhs_formulas {
        tracing::debug!(products = ?products, "Rejected reaction with identical sides");
        return None;
    }

    let mut rhs = Vec::with_capacity(products.len());
    for product in products {
        let idx = match network.index_of(&product) {
            Some(idx) => idx,
            None => {
                let chemical = Chemical::new_random_with_rng(product, config, rng);
                push_chemical(network, chemical)
            }
        };
        rhs.push(idx);
    }

    let reaction = Reaction::new_random_with_rng(
        lhs,
        rhs,
        &network.chemicals,
        network.roles.inputs,
        config,
        rng,
    );
    tracing::debug!(reaction = %network.reaction_label(&reaction), "Added reaction");
    network.reactions.push(reaction);
    Some(network.reactions.len() - 1)
}

/// Reorders the arena so that new slot `p` holds old chemical `order[p]`,
/// rewriting reaction indices to follow their species.
pub fn permute_chemicals(network: &mut Network, order: &[usize]) {
    let mut new_index = vec![0; order.len()];
    for (new_pos, &old_pos) in order.iter().enumerate() {
        new_index[old_pos] = new_pos;
    }
    let mut old: Vec<Option<Chemical>> = std::mem::take(&mut network.chemicals)
        .into_iter()
        .map(Some)
        .collect();
    network.chemicals = order
        .iter()
        .filter_map(|&old_pos| old[old_pos].take())
        .collect();
    for reaction in &mut network.reactions {
        for idx in reaction.lhs.iter_mut().chain(reaction.rhs.iter_mut()) {
            *idx = new_index[*idx];
        }
    }
    initialize_formula_idx_map(network);
}

/// Exchanges two arena slots; reactions keep pointing at the same species.
pub fn swap_chemicals(network: &mut Network, a: usize, b: usize) {
    if a == b {
        return;
    }
    network.chemicals.swap(a, b);
    for reaction in &mut network.reactions {
        for idx in reaction.lhs.iter_mut().chain(reaction.rhs.iter_mut()) {
            if *idx == a {
                *idx = b;
            } else if *idx == b {
                *idx = a;
            }
        }
    }
    network.formula_idx_map.insert(network.chemicals[a].formula.clone(), a);
    network.formula_idx_map.insert(network.chemicals[b].formula.clone(), b);
}

pub fn initialize_formula_idx_map(network: &mut Network) {
    network.formula_idx_map.clear();
    for (idx, chemical) in network.chemicals.iter().enumerate() {
        network.formula_idx_map.insert(chemical.formula.clone(), idx);
    }
}

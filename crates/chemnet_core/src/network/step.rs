use crate::chemical::ChemicalLogic;
use crate::config::ChemistryConfig;
use crate::error::{NetworkError, Result};
use crate::injection::InputInjection;
use crate::reaction::ReactionLogic;
use chemnet_data::{ChemicalRole, Network};

/// Advances every concentration by one `dt` and reads the output slots.
///
/// Phases run in a fixed order: baseline derivatives and input injection,
/// mass-action accumulation from the concentrations at the start of the
/// step, then clamped Euler integration.
pub fn get_outputs_with<J: InputInjection + ?Sized>(
    network: &mut Network,
    inputs: &[f64],
    config: &ChemistryConfig,
    injection: &J,
) -> Result<Vec<f64>> {
    let roles = network.roles;
    if inputs.len() != roles.inputs {
        return Err(NetworkError::InputArity {
            expected: roles.inputs,
            actual: inputs.len(),
        });
    }
    if network.chemicals.len() < roles.total() {
        return Err(NetworkError::RoleOutOfBounds {
            required: roles.total(),
            available: network.chemicals.len(),
        });
    }

    for (idx, chemical) in network.chemicals.iter_mut().enumerate() {
        let role = roles.role_of(idx);
        chemical.prepare_step(role, config);
        if let Some(ChemicalRole::Input(channel)) = role {
            injection.inject(chemical, inputs[channel]);
        }
    }

    for reaction in &network.reactions {
        let modulation = reaction
            .influence
            .and_then(|channel| inputs.get(channel))
            .map_or(1.0, |reading| reading.exp());
        let flux = reaction.flux(&network.chemicals, modulation);
        for &idx in &reaction.lhs {
            network.chemicals[idx].dconc -= flux;
        }
        for &idx in &reaction.rhs {
            network.chemicals[idx].dconc += flux;
        }
    }

    let dt = config.network.dt;
    let cap = config.chemical.conc_cap;
    let saturated = network
        .chemicals
        .iter_mut()
        .map(|chemical| chemical.integrate(dt, cap))
        .filter(|&hit| hit)
        .count();
    if saturated > 0 {
        tracing::debug!(saturated, cap, "Concentrations clamped this step");
    }

    Ok(roles
        .output_indices()
        .map(|idx| network.chemicals[idx].conc)
        .collect())
}

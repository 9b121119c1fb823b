pub use chemnet_core::chemical::ChemicalLogic;
pub use chemnet_core::network::NetworkLogic;
pub use chemnet_core::reaction::ReactionLogic;
pub use chemnet_data::{Chemical, ChemicalRole, Network, Reaction, RoleLayout};

pub mod config {
    pub use chemnet_core::config::*;
}
pub mod error {
    pub use chemnet_core::error::*;
}
pub mod formula {
    pub use chemnet_core::formula::*;
}
pub mod graph {
    pub use chemnet_core::graph::*;
}
pub mod injection {
    pub use chemnet_core::injection::*;
}
pub mod metrics {
    pub use chemnet_core::metrics::*;
}
pub mod network {
    pub use chemnet_core::network::*;
}
pub mod noise {
    pub use chemnet_core::noise::*;
}
pub mod rng {
    pub use chemnet_core::rng::*;
}

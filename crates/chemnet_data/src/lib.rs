//! Plain data types for artificial chemistry reaction networks.
//!
//! Behavior lives in `chemnet_core`; this crate only defines the state that
//! is owned, copied and serialized.

pub mod data;

pub use data::chemical::Chemical;
pub use data::network::Network;
pub use data::reaction::Reaction;
pub use data::roles::{ChemicalRole, RoleLayout};

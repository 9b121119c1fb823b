//! # Chemnet
//!
//! Artificial chemistry reaction networks. The data model lives in
//! `chemnet_data`, the engine in `chemnet_core`; this crate gathers both
//! under one namespace.

pub mod model;

pub use model::{ChemicalLogic, NetworkLogic, ReactionLogic};

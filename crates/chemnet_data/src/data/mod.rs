//! Core data structures for chemical reaction networks.

pub mod chemical;
pub mod network;
pub mod reaction;
pub mod roles;

//! Domain modules organized as vertical slices.
//!
//! Each sub-module contains:
//! - `mod.rs`: domain types returned to callers
//! - `wire.rs`: raw serde structs matching API responses
//! - `convert.rs`: wire → domain conversions, including discriminator dispatch
//! - `client.rs`: sub-client with the HTTP methods and per-operation parameters

pub mod order;
pub mod position;
pub mod rate;
pub mod trade;
pub mod transaction;

//! Team name reconciliation across ranking providers
//!
//! This module handles:
//! - Mapping provider spellings ("Iowa St.", "UConn") to canonical names
//! - Exact, case-insensitive lookup against the canonical roster
//! - Auditing the alias table against a live roster

mod aliases;
mod normalizer;

pub use normalizer::{CanonicalRoster, StaleAlias, audit_aliases, find_canonical, normalize};

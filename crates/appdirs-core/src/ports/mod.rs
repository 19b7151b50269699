//! Port definitions for the resolver's outside-world dependencies.
//!
//! Resolvers never touch `std::env` directly; they go through these traits
//! so tests can substitute a fake environment without mutating process state.

mod env_lookup;

pub use env_lookup::EnvLookup;
#[cfg(test)]
pub use env_lookup::MockEnvLookup;

pub(crate) use env_lookup::non_empty_var;

//! Deterministic persona identity utilities.
//!
//! Advisor identities are derived from stable inputs so a grid renders the
//! same names and portraits on every pass within a session. The two engines
//! ([`NameEngine`] and [`PortraitEngine`]) hold their own in-memory state
//! and share nothing with each other; callers create one instance per
//! rendering context and call `reset()` between grids.
//!
//! Neither engine is designed for concurrent mutation. Wrap an instance in
//! external synchronization if it must be shared across tasks.

mod name;
mod portrait;
mod seed;

pub use name::{Gender, GeneratedName, NameEngine};
pub use portrait::{GenderPreference, Portrait, PortraitAssignment, PortraitEngine, PORTRAITS};
pub use seed::{session_salt, string_hash, NameSeed};

/// Tracing target for persona identity operations.
pub const TRACING_TARGET: &str = "boardroom_core::persona";

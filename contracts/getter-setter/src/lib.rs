//! Getter-Setter Contract
//!
//! This crate defines the formal interface a getter-setter unit must
//! satisfy. A unit is a small reusable behaviour that manages exactly one
//! field through a fixed set of accessor operations:
//!
//! - `set` stores a value
//! - `get` returns the stored value, or the default when nothing is stored
//! - `has` reports whether a value is stored
//! - `get_default` supplies the fallback value (absent unless customised)
//! - `has_default` (legacy, optional) reports whether a default exists
//!
//! Units declare their field statically instead of being introspected at
//! runtime, and reach their own operations through a [`Receiver`], so a
//! host can swap any single operation without touching the others.

pub mod contract;
pub mod identity;
pub mod instance;

pub use contract::{GetterSetter, Receiver, UnitDescriptor};
pub use identity::Identity;
pub use instance::Instance;

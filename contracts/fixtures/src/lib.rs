//! Example getter-setter units
//!
//! FOR TESTING ONLY. The units here demonstrate the convention and its
//! common violations:
//!
//! - [`conforming`]: units that pass verification
//! - [`structural`]: units rejected for their field count
//! - [`faulty`]: units with a single behavioural defect
//! - [`interfaces`]: capability traits for the compatibility check

pub mod conforming;
pub mod faulty;
pub mod interfaces;
pub mod structural;

pub use conforming::{Contact, Dummy, Owner, Person, Quantity};
pub use faulty::{Eager, Forgetful, Opinionated, Presumptuous, Stubborn};
pub use interfaces::PersonAware;
pub use structural::{Broken, Hollow};

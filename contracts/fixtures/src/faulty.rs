//! Units with one behavioural defect each

use gst_contract::{GetterSetter, Receiver};

/// `set` discards the value.
pub struct Forgetful;

impl GetterSetter for Forgetful {
    type Value = String;
    const FIELDS: &'static [&'static str] = &["memo"];

    fn unit_name() -> &'static str {
        "Forgetful"
    }

    fn set<R: Receiver<Self>>(_this: &mut R, _value: Option<String>) {}

    fn get<R: Receiver<Self>>(this: &mut R) -> Option<String> {
        if !this.has() {
            return this.get_default();
        }
        this.slot().cloned()
    }

    fn has<R: Receiver<Self>>(this: &R) -> bool {
        this.slot().is_some()
    }

    fn get_default<R: Receiver<Self>>(_this: &R) -> Option<String> {
        None
    }
}

/// `has` claims a value exists before anything is stored.
pub struct Eager;

impl GetterSetter for Eager {
    type Value = String;
    const FIELDS: &'static [&'static str] = &["status"];

    fn unit_name() -> &'static str {
        "Eager"
    }

    fn set<R: Receiver<Self>>(this: &mut R, value: Option<String>) {
        *this.slot_mut() = value;
    }

    fn get<R: Receiver<Self>>(this: &mut R) -> Option<String> {
        if this.slot().is_none() {
            let default = this.get_default();
            this.set(default);
        }
        this.slot().cloned()
    }

    fn has<R: Receiver<Self>>(_this: &R) -> bool {
        true
    }

    fn get_default<R: Receiver<Self>>(_this: &R) -> Option<String> {
        None
    }
}

/// Ships a built-in default instead of leaving it absent.
pub struct Presumptuous;

impl GetterSetter for Presumptuous {
    type Value = String;
    const FIELDS: &'static [&'static str] = &["author"];

    fn unit_name() -> &'static str {
        "Presumptuous"
    }

    fn set<R: Receiver<Self>>(this: &mut R, value: Option<String>) {
        *this.slot_mut() = value;
    }

    fn get<R: Receiver<Self>>(this: &mut R) -> Option<String> {
        if !this.has() {
            let default = this.get_default();
            this.set(default);
        }
        this.slot().cloned()
    }

    fn has<R: Receiver<Self>>(this: &R) -> bool {
        this.slot().is_some()
    }

    fn get_default<R: Receiver<Self>>(_this: &R) -> Option<String> {
        Some("anonymous".to_string())
    }
}

/// `get` calls its own `get_default` directly instead of through the
/// receiver, so a host cannot customise the default.
pub struct Stubborn;

impl GetterSetter for Stubborn {
    type Value = String;
    const FIELDS: &'static [&'static str] = &["locale"];

    fn unit_name() -> &'static str {
        "Stubborn"
    }

    fn set<R: Receiver<Self>>(this: &mut R, value: Option<String>) {
        *this.slot_mut() = value;
    }

    fn get<R: Receiver<Self>>(this: &mut R) -> Option<String> {
        if !this.has() {
            let default = Self::get_default(this);
            this.set(default);
        }
        this.slot().cloned()
    }

    fn has<R: Receiver<Self>>(this: &R) -> bool {
        this.slot().is_some()
    }

    fn get_default<R: Receiver<Self>>(_this: &R) -> Option<String> {
        None
    }
}

/// Legacy unit whose `has_default` always answers yes.
pub struct Opinionated;

impl GetterSetter for Opinionated {
    type Value = String;
    const FIELDS: &'static [&'static str] = &["theme"];

    fn unit_name() -> &'static str {
        "Opinionated"
    }

    fn set<R: Receiver<Self>>(this: &mut R, value: Option<String>) {
        *this.slot_mut() = value;
    }

    fn get<R: Receiver<Self>>(this: &mut R) -> Option<String> {
        if !this.has() {
            let default = this.get_default();
            this.set(default);
        }
        this.slot().cloned()
    }

    fn has<R: Receiver<Self>>(this: &R) -> bool {
        this.slot().is_some()
    }

    fn get_default<R: Receiver<Self>>(_this: &R) -> Option<String> {
        None
    }

    fn has_default<R: Receiver<Self>>(_this: &R) -> Option<bool> {
        Some(true)
    }
}

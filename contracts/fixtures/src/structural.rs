//! Units rejected before any behaviour is exercised

use gst_contract::{GetterSetter, Receiver};

/// Declares two managed fields. Behaves conventionally for `name`, but the
/// verifier refuses to look at it.
pub struct Broken;

impl GetterSetter for Broken {
    type Value = String;
    const FIELDS: &'static [&'static str] = &["name", "age"];

    fn unit_name() -> &'static str {
        "Broken"
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
}

/// Declares no managed field at all.
pub struct Hollow;

impl GetterSetter for Hollow {
    type Value = ();
    const FIELDS: &'static [&'static str] = &[];

    fn unit_name() -> &'static str {
        "Hollow"
    }

    fn set<R: Receiver<Self>>(_this: &mut R, _value: Option<()>) {}

    fn get<R: Receiver<Self>>(_this: &mut R) -> Option<()> {
        None
    }

    fn has<R: Receiver<Self>>(_this: &R) -> bool {
        false
    }

    fn get_default<R: Receiver<Self>>(_this: &R) -> Option<()> {
        None
    }
}

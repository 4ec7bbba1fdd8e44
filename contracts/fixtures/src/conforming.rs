//! Units that follow the convention

use gst_contract::{GetterSetter, Identity, Receiver};

/// Name of a person.
///
/// The canonical shape: `get` stores and returns the default when nothing
/// has been set, and no `has_default` operation is exposed.
pub struct Person;

impl GetterSetter for Person {
    type Value = String;
    const FIELDS: &'static [&'static str] = &["person"];

    fn unit_name() -> &'static str {
        "Person"
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

/// Name of something, in the older style that still exposes `has_default`.
///
/// `get` only falls back when `has_default` says a default exists.
pub struct Dummy;

impl GetterSetter for Dummy {
    type Value = String;
    const FIELDS: &'static [&'static str] = &["name"];

    fn unit_name() -> &'static str {
        "Dummy"
    }

    fn set<R: Receiver<Self>>(this: &mut R, value: Option<String>) {
        *this.slot_mut() = value;
    }

    fn get<R: Receiver<Self>>(this: &mut R) -> Option<String> {
        if !this.has() && this.has_default() == Some(true) {
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

    fn has_default<R: Receiver<Self>>(this: &R) -> Option<bool> {
        Some(this.get_default().is_some())
    }
}

/// A scalar field.
pub struct Quantity;

impl GetterSetter for Quantity {
    type Value = u32;
    const FIELDS: &'static [&'static str] = &["quantity"];

    fn unit_name() -> &'static str {
        "Quantity"
    }

    fn set<R: Receiver<Self>>(this: &mut R, value: Option<u32>) {
        *this.slot_mut() = value;
    }

    fn get<R: Receiver<Self>>(this: &mut R) -> Option<u32> {
        if !this.has() {
            let default = this.get_default();
            this.set(default);
        }
        this.slot().copied()
    }

    fn has<R: Receiver<Self>>(this: &R) -> bool {
        this.slot().is_some()
    }

    fn get_default<R: Receiver<Self>>(_this: &R) -> Option<u32> {
        None
    }
}

/// Contact details shared between owners
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Contact {
    pub name: String,
    pub email: String,
}

impl Contact {
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
        }
    }
}

/// A shared object field, compared by identity.
pub struct Owner;

impl GetterSetter for Owner {
    type Value = Identity<Contact>;
    const FIELDS: &'static [&'static str] = &["owner"];

    fn unit_name() -> &'static str {
        "Owner"
    }

    fn set<R: Receiver<Self>>(this: &mut R, value: Option<Identity<Contact>>) {
        *this.slot_mut() = value;
    }

    fn get<R: Receiver<Self>>(this: &mut R) -> Option<Identity<Contact>> {
        if !this.has() {
            let default = this.get_default();
            this.set(default);
        }
        this.slot().cloned()
    }

    fn has<R: Receiver<Self>>(this: &R) -> bool {
        this.slot().is_some()
    }

    fn get_default<R: Receiver<Self>>(_this: &R) -> Option<Identity<Contact>> {
        None
    }
}

//! Test doubles for getter-setter units
//!
//! A [`TestDouble`] hosts a unit the same way [`gst_contract::Instance`]
//! does, except that individual operations can be replaced with canned
//! behaviour. Because a unit reaches its own operations through the
//! receiver, replacing `get_default` on the double also changes what the
//! unit's real `get` falls back to.

use crate::naming::Operation;
use gst_contract::{GetterSetter, Receiver};
use std::fmt;

/// Canned replacements for accessor operations.
///
/// `None` in any slot means "delegate to the unit".
pub struct Overrides<V> {
    set: bool,
    get: Option<Option<V>>,
    has: Option<bool>,
    get_default: Option<Option<V>>,
    has_default: Option<Option<bool>>,
}

impl<V> Overrides<V> {
    /// No operation replaced
    pub fn none() -> Self {
        Self {
            set: false,
            get: None,
            has: None,
            get_default: None,
            has_default: None,
        }
    }

    /// Whether any operation is replaced
    pub fn is_empty(&self) -> bool {
        self.overridden().is_empty()
    }

    /// Operations replaced, in canonical order
    pub fn overridden(&self) -> Vec<Operation> {
        let mut ops = Vec::new();
        if self.set {
            ops.push(Operation::Set);
        }
        if self.get.is_some() {
            ops.push(Operation::Get);
        }
        if self.has.is_some() {
            ops.push(Operation::Has);
        }
        if self.get_default.is_some() {
            ops.push(Operation::GetDefault);
        }
        if self.has_default.is_some() {
            ops.push(Operation::HasDefault);
        }
        ops
    }
}

impl<V> Default for Overrides<V> {
    fn default() -> Self {
        Self::none()
    }
}

impl<V: Clone> Clone for Overrides<V> {
    fn clone(&self) -> Self {
        Self {
            set: self.set,
            get: self.get.clone(),
            has: self.has,
            get_default: self.get_default.clone(),
            has_default: self.has_default,
        }
    }
}

impl<V: fmt::Debug> fmt::Debug for Overrides<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Overrides")
            .field("set", &self.set)
            .field("get", &self.get)
            .field("has", &self.has)
            .field("get_default", &self.get_default)
            .field("has_default", &self.has_default)
            .finish()
    }
}

/// An ephemeral host for a unit with zero or more operations replaced.
pub struct TestDouble<U: GetterSetter> {
    slot: Option<U::Value>,
    overrides: Overrides<U::Value>,
}

impl<U: GetterSetter> TestDouble<U> {
    /// A double with every operation delegating to the unit
    pub fn neutral() -> Self {
        Self::with_overrides(Overrides::none())
    }

    /// A double with the given replacements
    pub fn with_overrides(overrides: Overrides<U::Value>) -> Self {
        Self {
            slot: None,
            overrides,
        }
    }

    /// A double whose `get_default` always returns `value`
    pub fn returning_default(value: U::Value) -> Self {
        Self::neutral().override_get_default(Some(value))
    }

    /// Replace `set` with a no-op
    pub fn stub_set(mut self) -> Self {
        self.overrides.set = true;
        self
    }

    /// Replace `get` with a canned value
    pub fn override_get(mut self, value: Option<U::Value>) -> Self {
        self.overrides.get = Some(value);
        self
    }

    /// Replace `has` with a canned answer
    pub fn override_has(mut self, answer: bool) -> Self {
        self.overrides.has = Some(answer);
        self
    }

    /// Replace `get_default` with a canned value
    pub fn override_get_default(mut self, value: Option<U::Value>) -> Self {
        self.overrides.get_default = Some(value);
        self
    }

    /// Replace `has_default` with a canned answer (`None` hides the operation)
    pub fn override_has_default(mut self, answer: Option<bool>) -> Self {
        self.overrides.has_default = Some(answer);
        self
    }

    /// The active replacements
    pub fn overrides(&self) -> &Overrides<U::Value> {
        &self.overrides
    }

    /// Whether this double replaces the given operation
    pub fn is_overridden(&self, operation: Operation) -> bool {
        self.overrides.overridden().contains(&operation)
    }
}

impl<U: GetterSetter> Receiver<U> for TestDouble<U> {
    fn slot(&self) -> Option<&U::Value> {
        self.slot.as_ref()
    }

    fn slot_mut(&mut self) -> &mut Option<U::Value> {
        &mut self.slot
    }

    fn set(&mut self, value: Option<U::Value>) {
        if !self.overrides.set {
            U::set(self, value);
        }
    }

    fn get(&mut self) -> Option<U::Value> {
        match &self.overrides.get {
            Some(canned) => canned.clone(),
            None => U::get(self),
        }
    }

    fn has(&self) -> bool {
        match self.overrides.has {
            Some(canned) => canned,
            None => U::has(self),
        }
    }

    fn get_default(&self) -> Option<U::Value> {
        match &self.overrides.get_default {
            Some(canned) => canned.clone(),
            None => U::get_default(self),
        }
    }

    fn has_default(&self) -> Option<bool> {
        match self.overrides.has_default {
            Some(canned) => canned,
            None => U::has_default(self),
        }
    }
}

impl<U: GetterSetter> fmt::Debug for TestDouble<U> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TestDouble")
            .field("unit", &U::unit_name())
            .field("slot", &self.slot)
            .field("overrides", &self.overrides.overridden())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Title;

    impl GetterSetter for Title {
        type Value = String;
        const FIELDS: &'static [&'static str] = &["title"];

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

    #[test]
    fn test_neutral_double_delegates() {
        let mut double = TestDouble::<Title>::neutral();
        assert!(double.overrides().is_empty());
        assert!(!double.has());
        assert_eq!(double.get_default(), None);

        double.set(Some("Dune".to_string()));
        assert_eq!(double.get(), Some("Dune".to_string()));
        assert!(double.has());
    }

    #[test]
    fn test_overridden_default_reaches_unit_get() {
        let mut double = TestDouble::<Title>::returning_default("Untitled".to_string());
        assert!(double.is_overridden(Operation::GetDefault));
        assert_eq!(double.get(), Some("Untitled".to_string()));
    }

    #[test]
    fn test_stubbed_set_keeps_slot_empty() {
        let mut double = TestDouble::<Title>::neutral().stub_set();
        double.set(Some("Dune".to_string()));
        assert!(double.slot().is_none());
        assert_eq!(double.get(), None);
    }

    #[test]
    fn test_canned_get_and_has() {
        let mut double = TestDouble::<Title>::neutral()
            .override_get(Some("Canned".to_string()))
            .override_has(true);
        assert_eq!(double.get(), Some("Canned".to_string()));
        assert!(double.has());
        assert!(double.slot().is_none());
    }

    #[test]
    fn test_has_default_absent_unless_overridden() {
        let double = TestDouble::<Title>::neutral();
        assert_eq!(double.has_default(), None);

        let double = TestDouble::<Title>::neutral().override_has_default(Some(false));
        assert_eq!(double.has_default(), Some(false));
    }

    #[test]
    fn test_overridden_lists_in_order() {
        let overrides = TestDouble::<Title>::neutral()
            .override_has_default(Some(true))
            .stub_set()
            .override_get_default(None)
            .overrides()
            .overridden();
        assert_eq!(
            overrides,
            vec![Operation::Set, Operation::GetDefault, Operation::HasDefault]
        );
    }
}

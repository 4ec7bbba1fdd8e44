//! Production host for a unit

use crate::contract::{GetterSetter, Receiver};
use std::fmt;
use std::marker::PhantomData;

/// A plain host that owns the managed field and lets the unit answer every
/// operation. This is what application code embeds.
pub struct Instance<U: GetterSetter> {
    slot: Option<U::Value>,
    _unit: PhantomData<fn() -> U>,
}

impl<U: GetterSetter> Instance<U> {
    /// Create an empty instance
    pub fn new() -> Self {
        Self {
            slot: None,
            _unit: PhantomData,
        }
    }

    /// Create an instance with a value already stored
    pub fn with_value(value: U::Value) -> Self {
        let mut instance = Self::new();
        instance.set(Some(value));
        instance
    }

    /// Store a value, or clear it with `None`
    pub fn set(&mut self, value: Option<U::Value>) {
        U::set(self, value)
    }

    /// Stored value, falling back to the unit's default
    pub fn get(&mut self) -> Option<U::Value> {
        U::get(self)
    }

    pub fn has(&self) -> bool {
        U::has(self)
    }

    pub fn get_default(&self) -> Option<U::Value> {
        U::get_default(self)
    }

    /// `None` when the unit has no legacy default check
    pub fn has_default(&self) -> Option<bool> {
        U::has_default(self)
    }
}

impl<U: GetterSetter> Receiver<U> for Instance<U> {
    fn slot(&self) -> Option<&U::Value> {
        self.slot.as_ref()
    }

    fn slot_mut(&mut self) -> &mut Option<U::Value> {
        &mut self.slot
    }

    fn set(&mut self, value: Option<U::Value>) {
        U::set(self, value)
    }

    fn get(&mut self) -> Option<U::Value> {
        U::get(self)
    }

    fn has(&self) -> bool {
        U::has(self)
    }

    fn get_default(&self) -> Option<U::Value> {
        U::get_default(self)
    }

    fn has_default(&self) -> Option<bool> {
        U::has_default(self)
    }
}

impl<U: GetterSetter> Default for Instance<U> {
    fn default() -> Self {
        Self::new()
    }
}

impl<U: GetterSetter> Clone for Instance<U> {
    fn clone(&self) -> Self {
        Self {
            slot: self.slot.clone(),
            _unit: PhantomData,
        }
    }
}

impl<U: GetterSetter> fmt::Debug for Instance<U> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Instance")
            .field("unit", &U::unit_name())
            .field("slot", &self.slot)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Label;

    impl GetterSetter for Label {
        type Value = String;
        const FIELDS: &'static [&'static str] = &["label"];

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
            Some("untitled".to_string())
        }
    }

    #[test]
    fn test_instance_starts_empty() {
        let instance = Instance::<Label>::new();
        assert!(!instance.has());
        assert!(instance.slot().is_none());
    }

    #[test]
    fn test_instance_falls_back_to_default() {
        let mut instance = Instance::<Label>::default();
        assert_eq!(instance.get(), Some("untitled".to_string()));
        // the default is stored on first read
        assert!(instance.has());
    }

    #[test]
    fn test_instance_with_value() {
        let mut instance = Instance::<Label>::with_value("draft".to_string());
        assert_eq!(instance.get(), Some("draft".to_string()));
        assert!(instance.has_default().is_none());
    }

    mod without_receiver_in_scope {
        use super::Label;
        use crate::instance::Instance;

        #[test]
        fn test_inherent_accessors() {
            let mut instance = Instance::<Label>::new();
            assert!(!instance.has());
            assert_eq!(instance.get_default(), Some("untitled".to_string()));

            instance.set(Some("final".to_string()));
            assert!(instance.has());
            assert_eq!(instance.get(), Some("final".to_string()));
            assert_eq!(instance.has_default(), None);

            instance.set(None);
            assert!(!instance.has());
        }
    }

    #[test]
    fn test_instance_debug_names_unit() {
        let instance = Instance::<Label>::new();
        let text = format!("{:?}", instance);
        assert!(text.contains("Label"));
    }
}

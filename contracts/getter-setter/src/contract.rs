//! Core getter-setter contract definition

use std::fmt;

/// Static description of a unit: its identifier and the fields it manages.
///
/// This stands in for runtime introspection. A conforming unit declares
/// exactly one field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UnitDescriptor {
    /// Identifier used in error messages and reports
    pub unit: &'static str,
    /// Declared managed fields, in declaration order
    pub fields: &'static [&'static str],
}

impl UnitDescriptor {
    /// Number of declared managed fields
    pub fn field_count(&self) -> usize {
        self.fields.len()
    }

    /// The managed field, if exactly one is declared
    pub fn single_field(&self) -> Option<&'static str> {
        match self.fields {
            [field] => Some(*field),
            _ => None,
        }
    }
}

impl fmt::Display for UnitDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} [{}]", self.unit, self.fields.join(", "))
    }
}

/// The getter-setter trait - the behaviour a unit contributes to its host
///
/// A unit is a marker type. Its accessor logic is written against a
/// generic receiver `this`, and any call a unit makes to one of its own
/// operations must go through `this` rather than `Self`. That way a host
/// (or a test double) decides which implementation actually answers.
///
/// ```rust,ignore
/// fn get<R: Receiver<Self>>(this: &mut R) -> Option<String> {
///     if !this.has() {
///         let default = this.get_default();
///         this.set(default);
///     }
///     this.slot().cloned()
/// }
/// ```
pub trait GetterSetter: Sized + 'static {
    /// Type of the managed field
    type Value: Clone + PartialEq + fmt::Debug;

    /// Declared managed fields
    const FIELDS: &'static [&'static str];

    /// Identifier of the unit, defaults to the Rust type name
    fn unit_name() -> &'static str {
        std::any::type_name::<Self>()
    }

    /// Returns the unit's static descriptor
    fn descriptor() -> UnitDescriptor {
        UnitDescriptor {
            unit: Self::unit_name(),
            fields: Self::FIELDS,
        }
    }

    /// Stores a value (or clears it with `None`)
    fn set<R: Receiver<Self>>(this: &mut R, value: Option<Self::Value>);

    /// Returns the stored value, falling back to the default when unset
    fn get<R: Receiver<Self>>(this: &mut R) -> Option<Self::Value>;

    /// Whether a value has been stored
    fn has<R: Receiver<Self>>(this: &R) -> bool;

    /// Default value used when nothing has been stored
    fn get_default<R: Receiver<Self>>(this: &R) -> Option<Self::Value>;

    /// Legacy default-presence check.
    ///
    /// `None` means the unit does not expose this operation at all.
    fn has_default<R: Receiver<Self>>(_this: &R) -> Option<bool> {
        None
    }
}

/// The receiver a unit operates on: field storage plus dispatch for every
/// accessor operation.
pub trait Receiver<U: GetterSetter> {
    /// Current raw contents of the managed field
    fn slot(&self) -> Option<&U::Value>;

    /// Mutable access to the managed field
    fn slot_mut(&mut self) -> &mut Option<U::Value>;

    /// Dispatch `set` for the unit
    fn set(&mut self, value: Option<U::Value>);

    /// Dispatch `get` for the unit
    fn get(&mut self) -> Option<U::Value>;

    /// Dispatch `has` for the unit
    fn has(&self) -> bool;

    /// Dispatch `getDefault` for the unit
    fn get_default(&self) -> Option<U::Value>;

    /// Dispatch the legacy `hasDefault` check, `None` when not exposed
    fn has_default(&self) -> Option<bool>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_field() {
        let desc = UnitDescriptor {
            unit: "Person",
            fields: &["name"],
        };
        assert_eq!(desc.field_count(), 1);
        assert_eq!(desc.single_field(), Some("name"));
    }

    #[test]
    fn test_multiple_fields() {
        let desc = UnitDescriptor {
            unit: "Broken",
            fields: &["name", "age"],
        };
        assert_eq!(desc.field_count(), 2);
        assert!(desc.single_field().is_none());
        assert_eq!(desc.to_string(), "Broken [name, age]");
    }

    #[test]
    fn test_no_fields() {
        let desc = UnitDescriptor {
            unit: "Empty",
            fields: &[],
        };
        assert_eq!(desc.field_count(), 0);
        assert!(desc.single_field().is_none());
    }
}

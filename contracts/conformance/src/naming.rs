//! Operation naming convention
//!
//! Accessor operation names are derived from the managed field's name:
//! the first character is capitalised and a fixed prefix is prepended.
//! `name` yields `setName`, `getName`, `hasName`, `getDefaultName` and
//! `hasDefaultName`.

use serde::{Deserialize, Serialize};
use std::fmt;

/// One accessor operation of the convention
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Operation {
    Set,
    Get,
    Has,
    GetDefault,
    HasDefault,
}

impl Operation {
    /// All operations in canonical order
    pub fn all() -> &'static [Operation] {
        &[
            Self::Set,
            Self::Get,
            Self::Has,
            Self::GetDefault,
            Self::HasDefault,
        ]
    }

    /// Fixed name prefix of the operation
    pub fn prefix(&self) -> &'static str {
        match self {
            Self::Set => "set",
            Self::Get => "get",
            Self::Has => "has",
            Self::GetDefault => "getDefault",
            Self::HasDefault => "hasDefault",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.prefix())
    }
}

/// Uppercase the first character of a field name, leaving the rest as is
pub fn capitalize(field: &str) -> String {
    let mut chars = field.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Operation names derived for a single field.
///
/// Computed once per verification run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OperationNames {
    field: String,
    capitalized: String,
}

impl OperationNames {
    /// Derive the operation names for `field`
    pub fn derive(field: &str) -> Self {
        Self {
            field: field.to_string(),
            capitalized: capitalize(field),
        }
    }

    /// The field the names were derived from
    pub fn field(&self) -> &str {
        &self.field
    }

    /// The capitalised field name, e.g. `Name`
    pub fn capitalized(&self) -> &str {
        &self.capitalized
    }

    /// Name of the given operation, e.g. `getDefaultName`
    pub fn name_of(&self, operation: Operation) -> String {
        format!("{}{}", operation.prefix(), self.capitalized)
    }

    /// e.g. `setName`
    pub fn set(&self) -> String {
        self.name_of(Operation::Set)
    }

    /// e.g. `getName`
    pub fn get(&self) -> String {
        self.name_of(Operation::Get)
    }

    /// e.g. `hasName`
    pub fn has(&self) -> String {
        self.name_of(Operation::Has)
    }

    /// e.g. `getDefaultName`
    pub fn get_default(&self) -> String {
        self.name_of(Operation::GetDefault)
    }

    /// e.g. `hasDefaultName`
    pub fn has_default(&self) -> String {
        self.name_of(Operation::HasDefault)
    }

    /// All five names in canonical order
    pub fn all(&self) -> Vec<String> {
        Operation::all().iter().map(|op| self.name_of(*op)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capitalize() {
        assert_eq!(capitalize("name"), "Name");
        assert_eq!(capitalize("firstName"), "FirstName");
        assert_eq!(capitalize("Id"), "Id");
        assert_eq!(capitalize(""), "");
    }

    #[test]
    fn test_capitalize_unicode() {
        assert_eq!(capitalize("ßtraße"), "SStraße");
        assert_eq!(capitalize("ärger"), "Ärger");
    }

    #[test]
    fn test_derive_names() {
        let names = OperationNames::derive("name");
        assert_eq!(names.field(), "name");
        assert_eq!(names.capitalized(), "Name");
        assert_eq!(names.set(), "setName");
        assert_eq!(names.get(), "getName");
        assert_eq!(names.has(), "hasName");
        assert_eq!(names.get_default(), "getDefaultName");
        assert_eq!(names.has_default(), "hasDefaultName");
    }

    #[test]
    fn test_camel_case_field() {
        let names = OperationNames::derive("createdAt");
        assert_eq!(
            names.all(),
            vec![
                "setCreatedAt",
                "getCreatedAt",
                "hasCreatedAt",
                "getDefaultCreatedAt",
                "hasDefaultCreatedAt",
            ]
        );
    }

    #[test]
    fn test_operation_display() {
        assert_eq!(Operation::GetDefault.to_string(), "getDefault");
        assert_eq!(Operation::all().len(), 5);
    }
}

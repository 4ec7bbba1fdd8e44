//! Structural checks performed before any behaviour is exercised

use crate::error::{ConformanceError, ConformanceResult};
use crate::naming::OperationNames;
use gst_contract::{GetterSetter, UnitDescriptor};

/// Resolve the single managed field of a unit.
///
/// Fails with [`ConformanceError::IncorrectFieldCount`] unless exactly one
/// field is declared.
pub fn resolve_field_name(descriptor: &UnitDescriptor) -> ConformanceResult<&'static str> {
    descriptor
        .single_field()
        .ok_or_else(|| ConformanceError::IncorrectFieldCount {
            unit: descriptor.unit.to_string(),
            found: descriptor.field_count(),
        })
}

/// Resolve the field of `U` and derive its operation names
pub fn operation_names<U: GetterSetter>() -> ConformanceResult<OperationNames> {
    resolve_field_name(&U::descriptor()).map(OperationNames::derive)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolves_single_field() {
        let desc = UnitDescriptor {
            unit: "Person",
            fields: &["name"],
        };
        assert_eq!(resolve_field_name(&desc), Ok("name"));
    }

    #[test]
    fn test_rejects_two_fields() {
        let desc = UnitDescriptor {
            unit: "Broken",
            fields: &["name", "age"],
        };
        let err = resolve_field_name(&desc).unwrap_err();
        assert_eq!(
            err,
            ConformanceError::IncorrectFieldCount {
                unit: "Broken".into(),
                found: 2,
            }
        );
        assert!(err.to_string().contains("Broken"));
    }

    #[test]
    fn test_rejects_no_fields() {
        let desc = UnitDescriptor {
            unit: "Empty",
            fields: &[],
        };
        assert!(matches!(
            resolve_field_name(&desc),
            Err(ConformanceError::IncorrectFieldCount { found: 0, .. })
        ));
    }
}

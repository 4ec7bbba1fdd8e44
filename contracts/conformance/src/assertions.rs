//! Behavioural assertions
//!
//! Each assertion can be invoked on its own; [`ConventionVerifier::verify`]
//! chains them in a fixed order.

use crate::diagnostics::describe;
use crate::double::TestDouble;
use crate::error::{AssertionFailure, ConformanceResult, Phase};
use crate::framework::ConventionVerifier;
use gst_contract::{GetterSetter, Receiver};

impl ConventionVerifier {
    fn failure(&self, phase: Phase, operation: &str) -> AssertionFailure {
        AssertionFailure::new(phase, operation, self.config.messages.for_phase(phase))
    }

    /// Assert that the legacy `hasDefault` operation reports no default.
    ///
    /// Deprecated convention: units should not expose `hasDefault`.
    pub fn assert_no_default_present<U: GetterSetter>(
        &self,
        double: &TestDouble<U>,
        operation: &str,
    ) -> ConformanceResult<()> {
        tracing::warn!(
            unit = U::unit_name(),
            "{}() is deprecated; redesign the unit without a has-default check",
            operation
        );
        self.diagnostics.testing(operation);

        match double.has_default() {
            Some(false) => Ok(()),
            Some(true) => Err(self
                .failure(Phase::NoDefaultPresent, operation)
                .with_values("false", "true")
                .into()),
            None => Err(self
                .failure(Phase::NoDefaultPresent, operation)
                .with_values("false", "operation not exposed")
                .into()),
        }
    }

    /// Assert that `getDefault` returns the absence sentinel
    pub fn assert_default_is_absent<U: GetterSetter>(
        &self,
        double: &TestDouble<U>,
        operation: &str,
    ) -> ConformanceResult<()> {
        self.diagnostics.testing(operation);

        match double.get_default() {
            None => Ok(()),
            Some(value) => Err(self
                .failure(Phase::DefaultIsAbsent, operation)
                .with_values("none", describe(Some(&value)))
                .into()),
        }
    }

    /// Assert that `has` reports no stored value
    pub fn assert_has_no_value<U: GetterSetter>(
        &self,
        double: &TestDouble<U>,
        operation: &str,
    ) -> ConformanceResult<()> {
        self.diagnostics.testing(operation);

        if double.has() {
            Err(self
                .failure(Phase::HasNoValue, operation)
                .with_values("false", "true")
                .into())
        } else {
            Ok(())
        }
    }

    /// Assert that a value stored through `set` comes back from `get`.
    ///
    /// Values are compared with `PartialEq`; wrap shared objects in
    /// [`gst_contract::Identity`] to compare by identity.
    pub fn assert_round_trip<U: GetterSetter>(
        &self,
        double: &mut TestDouble<U>,
        set_operation: &str,
        get_operation: &str,
        value: U::Value,
    ) -> ConformanceResult<()> {
        self.diagnostics.testing_with(set_operation, &value);
        double.set(Some(value.clone()));

        self.diagnostics.testing(get_operation);
        let actual = double.get();

        if actual.as_ref() == Some(&value) {
            Ok(())
        } else {
            Err(self
                .failure(Phase::RoundTrip, get_operation)
                .with_values(describe(Some(&value)), describe(actual.as_ref()))
                .into())
        }
    }

    /// Assert that `get` returns an overridden default when nothing is
    /// stored. Builds its own double with only `getDefault` replaced.
    pub fn assert_default_substitution<U: GetterSetter>(
        &self,
        get_default_operation: &str,
        get_operation: &str,
        default: U::Value,
    ) -> ConformanceResult<()> {
        self.diagnostics.mocking(get_default_operation, &default);
        let mut double = TestDouble::<U>::returning_default(default.clone());

        self.diagnostics.testing(get_operation);
        let actual = double.get();

        if actual.as_ref() == Some(&default) {
            Ok(())
        } else {
            Err(self
                .failure(Phase::DefaultSubstitution, get_operation)
                .with_values(describe(Some(&default)), describe(actual.as_ref()))
                .into())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ConformanceError;
    use crate::framework::{FailureMessages, VerifierConfig};

    /// Conventional unit with an optional legacy check
    struct City;

    impl GetterSetter for City {
        type Value = String;
        const FIELDS: &'static [&'static str] = &["city"];

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

        fn has_default<R: Receiver<Self>>(this: &R) -> Option<bool> {
            Some(this.get_default().is_some())
        }
    }

    fn verifier() -> ConventionVerifier {
        ConventionVerifier::default()
    }

    #[test]
    fn test_no_default_present_passes() {
        let double = TestDouble::<City>::neutral();
        assert!(verifier()
            .assert_no_default_present(&double, "hasDefaultCity")
            .is_ok());
    }

    #[test]
    fn test_no_default_present_fails_when_true() {
        let double = TestDouble::<City>::neutral().override_has_default(Some(true));
        let err = verifier()
            .assert_no_default_present(&double, "hasDefaultCity")
            .unwrap_err();
        let failure = err.as_assertion().unwrap();
        assert_eq!(failure.phase, Phase::NoDefaultPresent);
        assert_eq!(failure.message, "Should not contain default value");
        assert_eq!(failure.actual.as_deref(), Some("true"));
    }

    #[test]
    fn test_no_default_present_fails_when_hidden() {
        let double = TestDouble::<City>::neutral().override_has_default(None);
        assert!(verifier()
            .assert_no_default_present(&double, "hasDefaultCity")
            .is_err());
    }

    #[test]
    fn test_default_is_absent() {
        let double = TestDouble::<City>::neutral();
        assert!(verifier()
            .assert_default_is_absent(&double, "getDefaultCity")
            .is_ok());

        let double = TestDouble::<City>::returning_default("Oslo".to_string());
        let err = verifier()
            .assert_default_is_absent(&double, "getDefaultCity")
            .unwrap_err();
        assert_eq!(
            err.as_assertion().unwrap().actual.as_deref(),
            Some("\"Oslo\"")
        );
    }

    #[test]
    fn test_has_no_value() {
        let double = TestDouble::<City>::neutral();
        assert!(verifier().assert_has_no_value(&double, "hasCity").is_ok());

        let double = TestDouble::<City>::neutral().override_has(true);
        assert!(verifier().assert_has_no_value(&double, "hasCity").is_err());
    }

    #[test]
    fn test_round_trip() {
        let mut double = TestDouble::<City>::neutral();
        assert!(verifier()
            .assert_round_trip(&mut double, "setCity", "getCity", "Bergen".to_string())
            .is_ok());
        assert!(double.has());
    }

    #[test]
    fn test_round_trip_twice_same_value() {
        let mut double = TestDouble::<City>::neutral();
        let v = verifier();
        assert!(v
            .assert_round_trip(&mut double, "setCity", "getCity", "Bergen".to_string())
            .is_ok());
        assert!(v
            .assert_round_trip(&mut double, "setCity", "getCity", "Bergen".to_string())
            .is_ok());
    }

    #[test]
    fn test_round_trip_fails_when_set_is_lost() {
        let mut double = TestDouble::<City>::neutral().stub_set();
        let err = verifier()
            .assert_round_trip(&mut double, "setCity", "getCity", "Bergen".to_string())
            .unwrap_err();
        let failure = err.as_assertion().unwrap();
        assert_eq!(failure.operation, "getCity");
        assert_eq!(failure.expected.as_deref(), Some("\"Bergen\""));
        assert_eq!(failure.actual.as_deref(), Some("none"));
    }

    #[test]
    fn test_default_substitution() {
        assert!(verifier()
            .assert_default_substitution::<City>("getDefaultCity", "getCity", "Tromsø".to_string())
            .is_ok());
    }

    #[test]
    fn test_custom_message() {
        let config = VerifierConfig::default().with_messages(
            FailureMessages::default().with(Phase::HasNoValue, "city leaked in"),
        );
        let verifier = ConventionVerifier::new(config);
        let double = TestDouble::<City>::neutral().override_has(true);
        let err = verifier.assert_has_no_value(&double, "hasCity").unwrap_err();
        match err {
            ConformanceError::Assertion(failure) => {
                assert_eq!(failure.message, "city leaked in");
            }
            other => panic!("unexpected error: {other}"),
        }
    }
}

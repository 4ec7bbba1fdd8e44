//! Compile-time compatibility checks
//!
//! A unit is compatible with an interface when a host that uses the unit,
//! [`Instance<Unit>`](gst_contract::Instance), implements that interface.
//! The check happens in the type checker: an incompatible unit makes the
//! crate fail to compile, a compatible one costs nothing at runtime.

/// Assert that `Instance<Unit>` implements every listed interface.
///
/// ```rust,ignore
/// gst_conformance::assert_compatible!(Person => PersonAware);
/// gst_conformance::assert_compatible!(Person => PersonAware, Send, Sync);
/// ```
#[macro_export]
macro_rules! assert_compatible {
    ($unit:ty => $($interface:path),+ $(,)?) => {
        const _: fn() = || {
            $(
                {
                    fn assert_implements<T: $interface>() {}
                    assert_implements::<$crate::Instance<$unit>>();
                }
            )+
        };
    };
}

#[cfg(test)]
mod tests {
    use gst_contract::{GetterSetter, Instance, Receiver};

    struct Colour;

    impl GetterSetter for Colour {
        type Value = u32;
        const FIELDS: &'static [&'static str] = &["colour"];

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

    trait ColourAware {
        fn set_colour(&mut self, colour: Option<u32>);
        fn get_colour(&mut self) -> Option<u32>;
    }

    impl ColourAware for Instance<Colour> {
        fn set_colour(&mut self, colour: Option<u32>) {
            self.set(colour);
        }

        fn get_colour(&mut self) -> Option<u32> {
            self.get()
        }
    }

    assert_compatible!(Colour => ColourAware);
    assert_compatible!(Colour => ColourAware, Send, Sync, Default);

    #[test]
    fn test_compatible_instance_is_usable_through_interface() {
        let mut instance = Instance::<Colour>::new();
        instance.set_colour(Some(0xff8800));
        assert_eq!(instance.get_colour(), Some(0xff8800));
    }
}

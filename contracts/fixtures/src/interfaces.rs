//! Capability interfaces implemented by hosts of the fixture units

use crate::conforming::Person;
use gst_contract::Instance;

/// Named accessors for a person, as application code would consume them
pub trait PersonAware {
    fn set_person(&mut self, person: Option<String>) -> &mut Self;

    fn get_person(&mut self) -> Option<String>;

    fn has_person(&self) -> bool;

    fn get_default_person(&self) -> Option<String>;
}

impl PersonAware for Instance<Person> {
    fn set_person(&mut self, person: Option<String>) -> &mut Self {
        self.set(person);
        self
    }

    fn get_person(&mut self) -> Option<String> {
        self.get()
    }

    fn has_person(&self) -> bool {
        self.has()
    }

    fn get_default_person(&self) -> Option<String> {
        self.get_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_person_aware_chaining() {
        let mut person = Instance::<Person>::new();
        let name = person.set_person(Some("Alice".into())).get_person();
        assert_eq!(name, Some("Alice".to_string()));
        assert!(person.has_person());
        assert_eq!(person.get_default_person(), None);
    }
}

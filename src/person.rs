use std::any::Any;

use crate::flyable::Flyable;

/// An ordinary person. Cannot fly, so it never implements [`Flyable`].
#[derive(Debug, Clone, PartialEq)]
pub struct Human {
    name: String,
}

impl Human {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

/// A person with a field of study. Still grounded.
#[derive(Debug, Clone, PartialEq)]
pub struct Student {
    human: Human,
    discipline: String,
}

impl Student {
    pub fn new(name: impl Into<String>, discipline: impl Into<String>) -> Self {
        Self {
            human: Human::new(name),
            discipline: discipline.into(),
        }
    }

    pub fn name(&self) -> &str {
        self.human.name()
    }

    pub fn discipline(&self) -> &str {
        &self.discipline
    }

    pub fn as_human(&self) -> &Human {
        &self.human
    }
}

/// The exception: a person who flies at a fixed altitude, in feet.
#[derive(Debug, Clone, PartialEq)]
pub struct FlyingHuman {
    human: Human,
    altitude: f64,
}

impl FlyingHuman {
    pub const DEFAULT_ALTITUDE: f64 = 10.0;

    pub fn new(name: impl Into<String>, altitude: f64) -> Self {
        Self {
            human: Human::new(name),
            altitude,
        }
    }

    /// A flying human at the default altitude.
    pub fn named(name: impl Into<String>) -> Self {
        Self::new(name, Self::DEFAULT_ALTITUDE)
    }

    pub fn name(&self) -> &str {
        self.human.name()
    }

    pub fn altitude(&self) -> f64 {
        self.altitude
    }

    pub fn as_human(&self) -> &Human {
        &self.human
    }
}

impl Flyable for FlyingHuman {
    fn fly(&self) -> String {
        format!(
            "Woo-Hoo! I am {}, a Flying Human, and I am flying {} feet above the Earth.",
            self.name(),
            self.altitude
        )
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_student_keeps_human_identity() {
        let student = Student::new("Hassan Khan", "Computer Science");
        assert_eq!(student.name(), "Hassan Khan");
        assert_eq!(student.discipline(), "Computer Science");
        assert_eq!(student.as_human(), &Human::new("Hassan Khan"));
    }

    #[test]
    fn test_flying_human_default_altitude() {
        let flyer = FlyingHuman::named("Hussain Naeem");
        assert_eq!(flyer.altitude(), 10.0);
        assert_eq!(flyer.as_human().name(), "Hussain Naeem");
    }

    #[test]
    fn test_flying_human_description() {
        let flyer = FlyingHuman::new("Hussain Naeem", 20.0);
        assert_eq!(
            flyer.fly(),
            "Woo-Hoo! I am Hussain Naeem, a Flying Human, and I am flying 20 feet above the Earth."
        );
    }

    #[test]
    fn test_fractional_altitude_is_kept() {
        let flyer = FlyingHuman::new("Ayesha", 12.5);
        assert!(flyer.fly().contains("12.5 feet"));
    }
}

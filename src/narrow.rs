//! Narrowing a `&dyn Flyable` back to its concrete variant.
//!
//! The check is closed over types known at compile time: callers name the
//! variant they expect and get `None` for anything else.

use crate::flyable::Flyable;

/// Returns `true` when the value behind `flyer` is a `T`.
pub fn is<T: Flyable>(flyer: &dyn Flyable) -> bool {
    flyer.as_any().is::<T>()
}

/// Narrows `flyer` to `T`, exposing fields outside the [`Flyable`] contract.
pub fn narrow<T: Flyable>(flyer: &dyn Flyable) -> Option<&T> {
    flyer.as_any().downcast_ref::<T>()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::duck::MallardDuck;
    use crate::person::FlyingHuman;
    use crate::toy::ToyAirplane;

    #[test]
    fn test_narrow_to_true_variant() {
        let duck = MallardDuck::default();
        let flyer: &dyn Flyable = &duck;

        assert!(is::<MallardDuck>(flyer));
        let narrowed = narrow::<MallardDuck>(flyer).expect("a duck narrows to a duck");
        assert_eq!(narrowed.wing_span(), 81);
    }

    #[test]
    fn test_narrow_to_other_variant_is_rejected() {
        let duck = MallardDuck::default();
        let flyer: &dyn Flyable = &duck;

        assert!(!is::<ToyAirplane>(flyer));
        assert!(narrow::<ToyAirplane>(flyer).is_none());
        assert!(narrow::<FlyingHuman>(flyer).is_none());
    }

    #[test]
    fn test_narrow_through_box() {
        let boxed: Box<dyn Flyable> = Box::new(FlyingHuman::new("Hussain Naeem", 20.0));

        let human = narrow::<FlyingHuman>(boxed.as_ref()).expect("boxed flying human");
        assert_eq!(human.name(), "Hussain Naeem");
        assert_eq!(human.altitude(), 20.0);
    }
}

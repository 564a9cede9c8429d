//! The cast of the console demo.

use crate::config::DemoConfig;
use crate::duck::MallardDuck;
use crate::flock::Flock;
use crate::person::{FlyingHuman, Human, Student};
use crate::toy::ToyAirplane;

/// People who stay on the ground. They are shown, never dispatched.
pub fn grounded() -> (Human, Student) {
    (
        Human::new("Ahmed Ali"),
        Student::new("Hassan Khan", "Computer Science"),
    )
}

/// The flyers, in the order they take off.
pub fn demo_flock(config: &DemoConfig) -> Flock {
    let mut flock = Flock::new();
    flock.push(FlyingHuman::new(
        config.flying_human_name.as_str(),
        config.altitude,
    ));
    flock.push(MallardDuck::new(config.wing_span));
    flock.push(ToyAirplane::new(config.battery_capacity));
    flock
}

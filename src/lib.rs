//! # Flying Objects
//!
//! Unrelated types sharing one capability through a trait:
//!
//! - [`Flyable`] is the contract: describe how you fly.
//! - [`FlyingHuman`], [`MallardDuck`] and [`ToyAirplane`] implement it, each
//!   with its own data. [`Human`] and [`Student`] do not, so they cannot join
//!   a [`Flock`].
//! - [`Flock`] stores `Box<dyn Flyable>` values and dispatches over them in
//!   insertion order.
//! - [`narrow`] turns a `&dyn Flyable` back into a concrete type when the
//!   runtime check agrees.
//!
//! Run the demo with: `cargo run --bin flying_objects`

pub mod config;
pub mod console;
pub mod duck;
pub mod error;
pub mod flock;
pub mod flyable;
pub mod narrow;
pub mod person;
pub mod roster;
pub mod toy;

pub use config::DemoConfig;
pub use duck::MallardDuck;
pub use error::{DemoError, Result};
pub use flock::Flock;
pub use flyable::Flyable;
pub use narrow::{is, narrow};
pub use person::{FlyingHuman, Human, Student};
pub use toy::ToyAirplane;

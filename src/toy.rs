use std::any::Any;

use crate::flyable::Flyable;

/// A battery-powered toy plane. Capacity is in mAh.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToyAirplane {
    battery_capacity: u32,
}

impl ToyAirplane {
    pub const DEFAULT_BATTERY_CAPACITY: u32 = 5300;

    pub fn new(battery_capacity: u32) -> Self {
        Self { battery_capacity }
    }

    pub fn battery_capacity(&self) -> u32 {
        self.battery_capacity
    }
}

impl Default for ToyAirplane {
    fn default() -> Self {
        Self::new(Self::DEFAULT_BATTERY_CAPACITY)
    }
}

impl Flyable for ToyAirplane {
    fn fly(&self) -> String {
        format!(
            "Being a toy, my {} mAh Battery will allow me to keep flying up to an Hour. Enjoy Kid!",
            self.battery_capacity
        )
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

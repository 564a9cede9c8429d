use std::any::Any;

use crate::flyable::Flyable;

/// A mallard. How high it flies depends on its wing span, in centimetres.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MallardDuck {
    wing_span: u32,
}

impl MallardDuck {
    pub const DEFAULT_WING_SPAN: u32 = 81;

    pub fn new(wing_span: u32) -> Self {
        Self { wing_span }
    }

    pub fn wing_span(&self) -> u32 {
        self.wing_span
    }
}

impl Default for MallardDuck {
    fn default() -> Self {
        Self::new(Self::DEFAULT_WING_SPAN)
    }
}

impl Flyable for MallardDuck {
    fn fly(&self) -> String {
        format!(
            "I am Mallard duck, and I am flying high because my wing-span is {} cm.",
            self.wing_span
        )
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

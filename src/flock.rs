//! An ordered, heterogeneous collection of flyers.

use std::io::{self, Write};

use tracing::debug;

use crate::flyable::Flyable;
use crate::narrow::narrow;

// =============================================================================
// Collection
// =============================================================================

/// Holds any mix of [`Flyable`] values in insertion order.
#[derive(Default)]
pub struct Flock {
    members: Vec<Box<dyn Flyable>>,
}

impl Flock {
    pub fn new() -> Self {
        Self {
            members: Vec::new(),
        }
    }

    pub fn push(&mut self, flyer: impl Flyable) {
        self.members.push(Box::new(flyer));
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&dyn Flyable> {
        self.members.get(index).map(|m| m.as_ref())
    }

    pub fn iter(&self) -> impl Iterator<Item = &dyn Flyable> + '_ {
        self.members.iter().map(|m| m.as_ref())
    }

    /// Looks up `index` and narrows it to `T` in one step.
    pub fn narrow_at<T: Flyable>(&self, index: usize) -> Option<&T> {
        self.get(index).and_then(narrow::<T>)
    }

    /// Every member whose concrete variant is `T`, in insertion order.
    pub fn of_kind<T: Flyable>(&self) -> impl Iterator<Item = &T> + '_ {
        self.iter().filter_map(narrow::<T>)
    }

    // =========================================================================
    // Dispatch
    // =========================================================================

    /// One description per member, in insertion order.
    pub fn fly_all(&self) -> Vec<String> {
        self.iter().map(|flyer| flyer.fly()).collect()
    }

    /// Writes one line per member and returns how many lines were written.
    pub fn dispatch<W: Write>(&self, out: &mut W) -> io::Result<usize> {
        let mut written = 0;
        for (index, flyer) in self.iter().enumerate() {
            let line = flyer.fly();
            debug!(index, line = %line, "dispatching flyer");
            writeln!(out, "{line}")?;
            written += 1;
        }
        Ok(written)
    }
}

impl FromIterator<Box<dyn Flyable>> for Flock {
    fn from_iter<I: IntoIterator<Item = Box<dyn Flyable>>>(iter: I) -> Self {
        Self {
            members: iter.into_iter().collect(),
        }
    }
}

impl Extend<Box<dyn Flyable>> for Flock {
    fn extend<I: IntoIterator<Item = Box<dyn Flyable>>>(&mut self, iter: I) {
        self.members.extend(iter);
    }
}

impl<'a> IntoIterator for &'a Flock {
    type Item = &'a dyn Flyable;
    type IntoIter = std::iter::Map<
        std::slice::Iter<'a, Box<dyn Flyable>>,
        fn(&'a Box<dyn Flyable>) -> &'a dyn Flyable,
    >;

    fn into_iter(self) -> Self::IntoIter {
        self.members.iter().map(unbox as fn(&'a Box<dyn Flyable>) -> &'a dyn Flyable)
    }
}

// The fn-pointer type in `IntoIter` fixes this signature
#[allow(clippy::borrowed_box)]
fn unbox(member: &Box<dyn Flyable>) -> &dyn Flyable {
    member.as_ref()
}

impl std::fmt::Debug for Flock {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Flock")
            .field("len", &self.members.len())
            .finish()
    }
}

// =============================================================================
// Tests
// =============================================================================

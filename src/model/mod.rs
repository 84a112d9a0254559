mod core;

pub use core::{HairColor, Location, Person};

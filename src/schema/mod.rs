mod core;

pub use core::{FieldSpec, FieldType, ObjectSchema};

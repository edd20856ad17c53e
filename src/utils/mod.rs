pub mod bytes;

pub use bytes::{string_to_array, string_to_bytes, FixedString};

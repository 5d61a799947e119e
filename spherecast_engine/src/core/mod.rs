pub mod colour;
pub mod image;
pub mod macros;
pub mod targets;
pub mod types;

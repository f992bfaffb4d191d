pub mod kind;

pub use solve4x_error::Error;

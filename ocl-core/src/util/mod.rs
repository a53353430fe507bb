pub mod geo;
pub mod validate;

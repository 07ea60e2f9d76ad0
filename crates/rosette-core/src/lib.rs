pub mod constants;
pub mod coordinates;

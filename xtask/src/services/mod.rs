pub mod cargo;
pub mod utils;

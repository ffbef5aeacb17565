pub mod grip_validation;
pub mod sweep;

pub use grip_validation::*;
pub use sweep::*;

pub mod grip;
pub mod moment;

pub use grip::*;
pub use moment::*;

pub mod presets;
pub mod library;

pub use presets::*;
pub use library::*;

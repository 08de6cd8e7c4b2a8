pub mod constants;
pub mod palette;

pub use constants::*;
pub use palette::*;

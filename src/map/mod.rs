pub mod point;
pub mod tile;

pub use point::*;
pub use tile::*;

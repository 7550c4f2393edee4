pub mod error;
pub mod grid2d;

#[cfg(test)]
mod testing;

pub use crate::error::GridError;
pub use crate::grid2d::Grid2D;

//! Data types shared by the store, geometry and selection layers.

mod config;
mod coord;
mod rect;
mod table;

pub use config::*;
pub use coord::*;
pub use rect::*;
pub use table::*;

//! Data types for the resizable table.

mod cell;
mod column;
mod config;
mod definition;

pub use cell::*;
pub use column::*;
pub use config::*;
pub use definition::*;

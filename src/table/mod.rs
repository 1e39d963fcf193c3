//! Table model and column layout.
//!
//! This module handles:
//! - Owning the ordered column list and the immutable row data
//! - The single width-mutation entry point
//! - Pre-computing column edges for hit testing

mod layout;
mod model;

pub use layout::ColumnLayout;
pub use model::TableModel;

//! Command module structure for the parcel-sort CLI

pub mod classify;
pub mod ui;
pub mod util;

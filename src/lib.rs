//! Sort state of marketplace list views and its `<column>,<asc|desc>` query encoding.

pub mod action;
pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod sort;
pub mod view;

mod utils;

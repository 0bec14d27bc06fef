//! Page views

pub mod form;
pub mod list;

//! Core functionality shared by every system: math, errors, utilities

pub mod error;
pub mod math;
pub mod utils;

//! Domain data: constants, plot quantities and settings

pub mod constants;
pub mod quantity;
pub mod settings;

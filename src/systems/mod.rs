//! Systems: bodies, the strings routed over them, and the scenario rigs

pub mod bodies;
pub mod scenarios;
pub mod string;

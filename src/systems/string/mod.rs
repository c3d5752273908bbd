//! String routing
//!
//! A string is a polyline whose points are pinned to bodies. Each frame the
//! router re-reads the bound bodies and moves the points with them.

mod router;

pub use router::{wrap_sample_count, Binding, RouteBuilder, StringRouter};

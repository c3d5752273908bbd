//! Physical and geometric constants shared by every scenario

use std::f64::consts::PI;
use std::ops::RangeInclusive;

use crate::core::math::Vec3;

/// Acceleration due to gravity (m/s²)
pub const ACCEL_G: f64 = 9.81;

/// Fixed simulation timestep (seconds per tick)
pub const DT: f64 = 0.02;

/// Angular spacing of the samples a string takes around a pulley
pub const WRAP_STEP: f64 = PI / 30.0;

/// Values accepted by a live mass adjustment
pub const MASS_RANGE: RangeInclusive<f64> = 1.0..=200.0;

/// Upper bound on ticks run by one wall-clock `advance` call, so a stalled
/// tab does not fast-forward the whole run in one frame
pub const MAX_TICKS_PER_ADVANCE: u32 = 8;

/// Every body translates along this axis only
pub const MOTION_AXIS: Vec3 = Vec3::Y;

// Body colours (0xRRGGBB)
pub const COLOR_MASS: u32 = 0xCC0C56;
pub const COLOR_PULLEY: u32 = 0x318A69;
pub const COLOR_RED: u32 = 0xFF0000;
pub const COLOR_GREEN: u32 = 0x00FF00;
pub const COLOR_BLUE: u32 = 0x0000FF;
pub const COLOR_CYAN: u32 = 0x00FFFF;
pub const COLOR_MAGENTA: u32 = 0xFF00FF;
pub const COLOR_PURPLE: u32 = 0x660099;

//! Sensor types for the KX132
//!
//! The KX132 has a single 3-axis accelerometer. All operations are performed
//! through methods on `Kx132Driver`.

pub mod accelerometer;

// Re-export main types
pub use accelerometer::{AccelConfig, AccelDataG, AccelRange, OutputDataRate};

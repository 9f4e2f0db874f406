//! Capture drivers: scenarios, page expressions, and the frame loop.

pub mod js;
pub mod runner;
pub mod scenario;

pub use runner::{CaptureRunner, CaptureSummary};
pub use scenario::{builtin, builtin_names, DriveMode, Scenario};

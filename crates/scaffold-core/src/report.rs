//! Progress reporting surface used by the scaffolding flows
//!
//! The terminal implementation lives in `tui`; tests use a recording one.

use crate::error::Result;

/// User-facing progress output
pub trait Reporter {
    type Activity: Activity;

    /// Command header, shown once per invocation
    fn header(&self, message: &str) -> Result<()>;

    fn info(&self, message: &str) -> Result<()>;

    /// Start a named activity that is later resolved through [`Activity`]
    fn start(&self, message: &str) -> Result<Self::Activity>;

    /// Pause this reporter's own output before interactive prompts are shown
    fn suspend(&self) -> Result<()>;
}

/// A running activity started by a [`Reporter`]
pub trait Activity {
    fn success(self, message: &str) -> Result<()>;

    fn warn(self, message: &str) -> Result<()>;

    fn fail(self, message: &str) -> Result<()>;
}

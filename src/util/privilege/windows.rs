use super::evaluate_device_open;
use crate::constants;
use crate::error::UserError;
use std::fs::File;
use tracing::debug;

/// Succeeds when the process can open the first physical drive, which
/// requires Administrator rights.
pub fn is_privileged() -> Result<(), UserError> {
    let opened = File::open(constants::WINDOWS_RAW_DEVICE);
    debug!(device = constants::WINDOWS_RAW_DEVICE, ok = opened.is_ok(), "checked raw device access");
    evaluate_device_open(opened)
}

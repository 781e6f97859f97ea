//! Unified application error type.
//! All modules (adb, core, cli, utils) return AppError to keep the error
//! handling consistent and easy to manage.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    // ---------------------------
    // Bridge availability (fatal)
    // ---------------------------
    #[error("adb not found at '{0}'. Install Android platform-tools or point --adb at the binary")]
    AdbNotFound(String),

    #[error("adb devices failed: {0}")]
    DeviceListing(String),

    #[error("no device connected{0}")]
    NoDevice(String),

    #[error("device '{0}' not found (attached: {1})")]
    DeviceNotFound(String, String),

    #[error("multiple devices connected ({0}); select one with --serial")]
    MultipleDevices(String),

    // ---------------------------
    // Query errors (non-fatal upstream, carried for diagnostics)
    // ---------------------------
    #[error("call-log query failed: {0}")]
    Query(String),
}

pub type AppResult<T> = Result<T, AppError>;

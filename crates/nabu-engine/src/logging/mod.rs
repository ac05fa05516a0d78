//! Logging utilities.
//!
//! Centralizes logger initialization. The engine itself only logs through the
//! `log` facade; the backend lives here so binaries get one consistent setup.

mod init;

pub use init::init;

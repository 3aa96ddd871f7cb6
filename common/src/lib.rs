//! # wadeploy common
//!
//! Shared building blocks for the deployment workflow:
//!
//! * **[`config`]**: fixed deployment literals and terminal output flags.
//! * **[`deploy`]**: domain models (target host, locality, gate outcomes, reports).
//! * **[`network`]**: helpers for reading addresses off local interfaces.
//! * **[`ports`]**: traits the workflow engine consumes (environment, connectivity, filesystem).

pub mod config;
pub mod deploy;
pub mod network;
pub mod ports;

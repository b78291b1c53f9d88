//! @acp:module "Commands"
//! @acp:summary "CLI command implementations"
//! @acp:domain cli
//! @acp:layer handler
//!
//! Each command is in its own submodule and takes an options struct.

pub mod create;
pub mod init;
pub mod scan;

pub use create::{execute_create, CreateOptions};
pub use init::{execute_init, InitOptions};
pub use scan::{execute_scan, ScanOptions};

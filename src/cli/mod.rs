//! CLI command implementations

pub mod challenge;
pub mod dashboard;
pub mod init;
pub mod inspect;
pub mod notify;

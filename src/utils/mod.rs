//! Utility modules: build info, config files, logging.

pub mod build_info;
pub mod logging;
pub mod persistence;

//! 工具模块

pub mod logger;

pub use logger::{build_env_filter, init_logger_with_file};

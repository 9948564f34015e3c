//! Logging of solver statistics in a `PREFIX NAME=VALUE` format.
//!
//! Statistics are only written once [`configure_statistic_logging`] has been called.
mod statistic_logging;

pub use statistic_logging::*;

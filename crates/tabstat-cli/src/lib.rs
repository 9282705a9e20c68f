//! Library side of the `tabstat` command: configuration loading, logging
//! setup and the batch driver.

pub mod batch;
pub mod config;
pub mod logging;

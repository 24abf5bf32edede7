//! EcoHome core types: the household profile, its categorical answers,
//! display labels, configuration and the shared error type.

pub mod config;
pub mod error;
pub mod labels;
pub mod profile;

pub use config::EcoHomeConfig;
pub use error::{EhError, Result};
pub use labels::{label, NOT_PROVIDED};
pub use profile::*;

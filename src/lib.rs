pub mod config;
pub mod domain;
pub mod error;
pub mod manifest;
pub mod transition;
pub mod ui;

pub use error::{MdtVersionError, Result};

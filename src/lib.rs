pub mod config;
pub mod domain;
pub mod error;
pub mod git;
pub mod output;
pub mod resolver;
pub mod ui;

pub use config::Config;
pub use error::{NextTagError, Result};
pub use resolver::{resolve, Resolution};

pub mod case;
pub mod cli;
pub mod config;
pub mod error;
pub mod process;

pub use case::{change_case, determine_case, tokenize, Convention, Target};
pub use config::Config;
pub use error::ProcessError;

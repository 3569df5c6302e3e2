//! CLI command handlers.

mod generate;
mod inspect;

pub use generate::{run_generate, GenerateOverrides};
pub use inspect::run_inspect;

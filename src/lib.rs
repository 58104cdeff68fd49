//! gitcmd: ordered option and argument builder for git invocations.

pub mod error;
pub mod cmd;
pub mod render;
pub mod exec;
#[cfg(feature = "json")]
pub mod json;
pub mod prelude;
pub mod macros;

pub use cmd::{CommandLine, CommandSpec, OptionValue, Options};
pub use error::{CommandError, Result};

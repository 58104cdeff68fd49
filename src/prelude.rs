//! gitcmd::prelude - grab-and-go imports for building and planning commands

pub use crate::command;
pub use crate::cmd::{CommandLine, CommandSpec, OptionValue, Options};
pub use crate::error::CommandError;
pub use crate::exec::{dispatch, ExecResult, Executor, Planner};
pub use crate::render::{PosixRenderer, QuotePolicy, Renderer, WinRenderer};

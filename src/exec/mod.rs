//! Execution and planning interfaces.
//!
//! Spawning processes belongs to the caller. This module only defines the
//! seam an executor plugs into and a dry-run planner.

use tracing::debug;

use crate::cmd::CommandSpec;
use crate::error::{CommandError, Result};
use crate::render::Renderer;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExecResult {
    pub status: i32,
    pub stdout: String,
    pub stderr: String,
}

pub trait Executor {
    fn exec(&self, cmd: &CommandSpec) -> Result<ExecResult>;
}

/// Renders a spec with the given renderer and returns the planned line
/// (no execution).
pub struct Planner<'a, R: Renderer> { pub renderer: &'a R }

impl<'a, R: Renderer> Planner<'a, R> {
    pub fn plan(&self, cmd: &CommandSpec) -> Result<String> {
        self.renderer.render_cmd(cmd)
    }
}

impl<'a, R: Renderer> Executor for Planner<'a, R> {
    fn exec(&self, cmd: &CommandSpec) -> Result<ExecResult> {
        let line = self.plan(cmd).map_err(|e| CommandError::ExecError(e.to_string()))?;
        Ok(ExecResult { status: 0, stdout: line, stderr: String::new() })
    }
}

/// Hand `cmd` to `executor` unless it is bypassed.
pub fn dispatch<E: Executor + ?Sized>(executor: &E, cmd: &CommandSpec) -> Result<Option<ExecResult>> {
    if cmd.not_bypassed() {
        debug!(command = %cmd.command(), raw = cmd.is_raw(), dir = ?cmd.directory(), "dispatching");
        executor.exec(cmd).map(Some)
    } else {
        debug!(command = %cmd.command(), "execution bypassed");
        Ok(None)
    }
}

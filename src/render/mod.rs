//! Shell-string rendering for executors that run through a shell.

use crate::cmd::{CommandLine, CommandSpec};
use crate::error::{CommandError, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuotePolicy { Strict, Loose }

pub trait Renderer {
    fn render_cmd(&self, cmd: &CommandSpec) -> Result<String>;
}

#[derive(Debug, Clone)]
pub struct PosixRenderer { pub program: String, pub quote: QuotePolicy }

impl Default for PosixRenderer {
    fn default() -> Self { Self { program: "git".into(), quote: QuotePolicy::Strict } }
}

impl Renderer for PosixRenderer {
    fn render_cmd(&self, cmd: &CommandSpec) -> Result<String> {
        if self.program.is_empty() {
            return Err(CommandError::RenderError("program empty".into()));
        }

        let mut parts: Vec<String> = vec![quote_prog(&self.program)];
        match cmd.command_line() {
            // raw lines are shell text already
            CommandLine::Raw(s) => { if !s.is_empty() { parts.push(s); } }
            CommandLine::Args(tokens) => {
                for t in &tokens {
                    parts.push(match self.quote {
                        QuotePolicy::Strict => quote_sh(t),
                        QuotePolicy::Loose => quote_prog(t),
                    });
                }
            }
        }

        let mut line = parts.join(" ");
        if let Some(dir) = cmd.directory() {
            line = format!("cd {} && {}", quote_sh(dir), line);
        }
        Ok(line)
    }
}

#[derive(Debug, Clone)]
pub struct WinRenderer { pub program: String, pub quote: QuotePolicy }

impl Default for WinRenderer {
    fn default() -> Self { Self { program: "git".into(), quote: QuotePolicy::Strict } }
}

impl Renderer for WinRenderer {
    fn render_cmd(&self, cmd: &CommandSpec) -> Result<String> {
        if self.program.is_empty() {
            return Err(CommandError::RenderError("program empty".into()));
        }

        let mut parts: Vec<String> = Vec::new();
        if let Some(dir) = cmd.directory() {
            parts.push(format!("cd /d {} &&", cmd_token(dir, QuotePolicy::Loose)?));
        }
        parts.push(cmd_token(&self.program, QuotePolicy::Loose)?);
        match cmd.command_line() {
            CommandLine::Raw(s) => { if !s.is_empty() { parts.push(s); } }
            CommandLine::Args(tokens) => {
                for t in &tokens { parts.push(cmd_token(t, self.quote)?); }
            }
        }
        Ok(parts.join(" "))
    }
}

fn quote_prog(p: &str) -> String {
    if is_simple_word(p) { p.to_string() } else { quote_sh(p) }
}

fn is_simple_word(s: &str) -> bool {
    !s.is_empty() && s.chars().all(|c| matches!(c,
        'a'..='z' | 'A'..='Z' | '0'..='9' | '_' | '-' | '.' | '/' | ':' | '+' | '%' | '@' | '=' | ','))
}

fn quote_sh(s: &str) -> String {
    if s.is_empty() { return "''".to_string(); }
    let escaped = s.replace('\'', "'\"'\"'");
    format!("'{}'", escaped)
}

/// Characters cmd.exe passes through untouched outside quotes.
fn is_cmd_bare(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '_' | '-' | '.' | '/' | '\\' | ':' | '+' | '@' | '=' | ',')
}

/// Quote one token for a `cmd.exe` line.
///
/// A line break ends the command in cmd.exe and cannot be quoted, so it is an
/// error. `%` expands even inside double quotes; it is emitted as `"^%"`,
/// which closes the quote, escapes the percent and reopens.
fn cmd_token(s: &str, quote: QuotePolicy) -> Result<String> {
    if s.contains(['\n', '\r', '\0']) {
        return Err(CommandError::RenderError(format!("token {:?} has a line break or NUL", s)));
    }
    if quote == QuotePolicy::Loose && !s.is_empty() && s.chars().all(is_cmd_bare) {
        return Ok(s.to_string());
    }
    let mut out = String::with_capacity(s.len() + 2);
    out.push('"');
    for c in s.chars() {
        match c {
            '"' => out.push_str("\"\""),
            '%' => out.push_str("\"^%\""),
            c => out.push(c),
        }
    }
    out.push('"');
    Ok(out)
}

//! Command modeling for git invocations.

mod options;

pub use options::{OptionValue, Options};

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::trace;

/// A single git invocation: subcommand, ordered options, positional args.
///
/// Rendering reads only `command`, `options`, `args` and `raw`. The
/// `directory` and `bypass` fields are carried for the executor.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CommandSpec {
    command: String,
    options: Options,
    args: Vec<String>,
    directory: Option<String>,
    bypass: bool,
    raw: bool,
}

/// Rendered form of a [`CommandSpec`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandLine {
    /// The command string verbatim, unsplit.
    Raw(String),
    Args(Vec<String>),
}

impl CommandLine {
    pub fn is_raw(&self) -> bool { matches!(self, CommandLine::Raw(_)) }

    /// Token vector for argv-style process APIs. A raw line is a single token.
    pub fn into_args(self) -> Vec<String> {
        match self {
            CommandLine::Raw(s) if s.is_empty() => Vec::new(),
            CommandLine::Raw(s) => vec![s],
            CommandLine::Args(v) => v,
        }
    }
}

impl fmt::Display for CommandLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CommandLine::Raw(s) => f.write_str(s),
            CommandLine::Args(v) => f.write_str(&v.join(" ")),
        }
    }
}

impl CommandSpec {
    pub fn new(command: impl Into<String>) -> Self {
        CommandSpec { command: command.into(), ..Default::default() }
    }

    /// Build from a command, positional args and an initial option set.
    pub fn from_parts<I, S>(command: impl Into<String>, args: I, options: Options) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        CommandSpec {
            command: command.into(),
            options,
            args: args.into_iter().map(Into::into).collect(),
            ..Default::default()
        }
    }

    pub fn command(&self) -> &str { &self.command }
    pub fn options(&self) -> &Options { &self.options }
    pub fn args(&self) -> &[String] { &self.args }

    /// Insert or overwrite an option. Names are not validated.
    pub fn set_option(&mut self, name: impl Into<String>, value: impl Into<OptionValue>) -> &mut Self {
        self.options.insert(name, value.into());
        self
    }

    pub fn set_options<I, K, V>(&mut self, options: I) -> &mut Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<OptionValue>,
    {
        for (k, v) in options { self.set_option(k, v); }
        self
    }

    pub fn set_flag(&mut self, name: impl Into<String>) -> &mut Self {
        self.set_option(name, OptionValue::Flag)
    }

    pub fn get_option(&self, name: &str) -> Option<&OptionValue> { self.options.get(name) }

    pub fn get_option_or<'a>(&'a self, name: &str, default: &'a OptionValue) -> &'a OptionValue {
        self.options.get(name).unwrap_or(default)
    }

    pub fn unset_option(&mut self, name: &str) -> &mut Self {
        self.options.remove(name);
        self
    }

    pub fn add_argument(&mut self, value: impl Into<String>) -> &mut Self {
        self.args.push(value.into());
        self
    }

    pub fn add_arguments<I, S>(&mut self, values: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args.extend(values.into_iter().map(Into::into));
        self
    }

    pub fn set_directory(&mut self, path: impl Into<String>) -> &mut Self {
        self.directory = Some(path.into());
        self
    }

    pub fn directory(&self) -> Option<&str> { self.directory.as_deref() }

    /// Mark the spec so executors skip running it.
    pub fn bypass(&mut self, flag: bool) -> &mut Self {
        self.bypass = flag;
        self
    }

    pub fn is_bypassed(&self) -> bool { self.bypass }
    pub fn not_bypassed(&self) -> bool { !self.bypass }

    /// In raw mode the command string is the whole line; options and args are ignored.
    pub fn execute_raw(&mut self, flag: bool) -> &mut Self {
        self.raw = flag;
        self
    }

    pub fn is_raw(&self) -> bool { self.raw }

    /// Flatten options into tokens in insertion order.
    ///
    /// Single-character names get `-`, everything else `--` (the empty name
    /// included). Values are separate tokens and are never quoted.
    pub fn build_options(&self) -> Vec<String> {
        let mut out = Vec::new();
        for (name, value) in self.options.iter() {
            let prefixed = if name.chars().count() == 1 {
                format!("-{}", name)
            } else {
                format!("--{}", name)
            };
            for v in value.values() {
                out.push(prefixed.clone());
                if let Some(v) = v { out.push(v.to_string()); }
            }
        }
        out
    }

    /// Render the final line.
    ///
    /// Empty tokens are dropped from the whole sequence, including empty
    /// option values. Other strings such as `"0"` are kept.
    pub fn command_line(&self) -> CommandLine {
        if self.raw {
            return CommandLine::Raw(self.command.clone());
        }
        let tokens: Vec<String> = std::iter::once(self.command.clone())
            .chain(self.build_options())
            .chain(self.args.iter().cloned())
            .filter(|t| !t.is_empty())
            .collect();
        trace!(command = %self.command, tokens = tokens.len(), "rendered command line");
        CommandLine::Args(tokens)
    }

    /// Space-joined line with no escaping.
    pub fn command_line_string(&self) -> String { self.command_line().to_string() }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn s(v: &[&str]) -> Vec<String> { v.iter().map(|x| x.to_string()).collect() }

    #[test]
    fn bare_command() {
        assert_eq!(CommandSpec::new("status").command_line(), CommandLine::Args(s(&["status"])));
        assert_eq!(CommandSpec::new("").command_line(), CommandLine::Args(vec![]));
        assert_eq!(CommandSpec::default().command(), "");
    }

    #[test]
    fn short_flag_and_long_value() {
        let mut c = CommandSpec::new("clone");
        c.set_flag("q");
        assert_eq!(c.build_options(), s(&["-q"]));
        let mut c = CommandSpec::new("checkout");
        c.set_option("branch", "main");
        assert_eq!(c.build_options(), s(&["--branch", "main"]));
    }

    #[test]
    fn empty_and_multibyte_names() {
        let mut c = CommandSpec::new("x");
        c.set_flag("").set_flag("é").set_option("ab", "1");
        assert_eq!(c.build_options(), s(&["--", "-é", "--ab", "1"]));
    }

    #[test]
    fn unset_removes() {
        let mut c = CommandSpec::new("x");
        c.set_option("a", "x").unset_option("a").unset_option("missing");
        assert!(c.build_options().is_empty());
    }

    #[test]
    fn multi_repeats_name() {
        let mut c = CommandSpec::new("commit");
        c.set_option("c", vec!["user.name=a", "user.email=b"]);
        assert_eq!(c.build_options(), s(&["-c", "user.name=a", "-c", "user.email=b"]));
        c.set_option("c", Vec::<String>::new());
        assert!(c.build_options().is_empty());
    }

    #[test]
    fn overwrite_keeps_order() {
        let mut c = CommandSpec::new("log");
        c.set_option("format", "oneline").set_flag("n").set_option("format", "short");
        assert_eq!(c.build_options(), s(&["--format", "short", "-n"]));
    }

    #[test]
    fn full_line_order() {
        let mut c = CommandSpec::new("clone");
        c.set_flag("bare").set_option("depth", "1").add_argument("https://x/repo.git").add_argument("dest");
        assert_eq!(
            c.command_line().into_args(),
            s(&["clone", "--bare", "--depth", "1", "https://x/repo.git", "dest"])
        );
        assert_eq!(c.command_line_string(), "clone --bare --depth 1 https://x/repo.git dest");
    }

    #[test]
    fn empty_tokens_dropped_everywhere() {
        let c = CommandSpec::from_parts("", ["x"], Options::new());
        assert_eq!(c.command_line().into_args(), s(&["x"]));
        let mut c = CommandSpec::new("commit");
        c.set_option("m", "").add_argument("").add_argument("f");
        assert_eq!(c.command_line().into_args(), s(&["commit", "-m", "f"]));
    }

    #[test]
    fn only_empty_strings_are_dropped() {
        let mut c = CommandSpec::new("0");
        c.set_option("depth", "0").add_argument("0").add_argument("false");
        assert_eq!(c.command_line().into_args(), s(&["0", "--depth", "0", "0", "false"]));
    }

    #[test]
    fn raw_ignores_options_and_args() {
        let mut c = CommandSpec::new("status -s");
        c.set_flag("q").add_argument("x").execute_raw(true);
        assert_eq!(c.command_line(), CommandLine::Raw("status -s".into()));
        assert_eq!(c.command_line_string(), "status -s");
        c.execute_raw(false);
        assert_eq!(c.command_line().into_args(), s(&["status -s", "-q", "x"]));
    }

    #[test]
    fn raw_empty_has_no_args() {
        let mut c = CommandSpec::new("");
        c.execute_raw(true);
        assert!(c.command_line().is_raw());
        assert!(c.command_line().into_args().is_empty());
    }

    #[test]
    fn get_option_with_default() {
        let mut c = CommandSpec::new("x");
        c.set_flag("q");
        let fallback = OptionValue::from("none");
        assert_eq!(c.get_option_or("q", &fallback), &OptionValue::Flag);
        assert_eq!(c.get_option_or("v", &fallback), &fallback);
        assert_eq!(c.get_option("v"), None);
        assert!(c.get_option("q").is_some_and(OptionValue::is_flag));
        assert!(c.options().contains("q"));
        assert!(!c.options().contains("v"));
    }

    #[test]
    fn set_options_in_input_order() {
        let mut c = CommandSpec::new("x");
        c.set_options(vec![("zeta", "1"), ("alpha", "2"), ("b", "3")]);
        assert_eq!(c.build_options(), s(&["--zeta", "1", "--alpha", "2", "-b", "3"]));
    }

    #[test]
    fn executor_hints_do_not_affect_render() {
        let mut c = CommandSpec::new("fetch");
        let before = c.command_line();
        c.set_directory("/srv/repo").bypass(true);
        assert_eq!(c.directory(), Some("/srv/repo"));
        assert!(c.is_bypassed());
        assert!(!c.not_bypassed());
        assert_eq!(c.command_line(), before);
        assert_eq!(c.command_line(), c.command_line());
    }

    #[test]
    fn serde_roundtrip_with_defaults() {
        let c: CommandSpec = serde_json::from_str(r#"{"command":"push","options":{"f":true}}"#).unwrap();
        assert_eq!(c.command(), "push");
        assert!(c.args().is_empty());
        assert!(c.not_bypassed());
        assert_eq!(c.command_line().into_args(), s(&["push", "-f"]));
    }
}

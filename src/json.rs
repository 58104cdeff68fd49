//! Build a [`CommandSpec`] from loosely typed JSON input.
//!
//! The list form is `["commit", "-m", {"a": true}]`: the first element is the
//! command, a trailing object becomes the option set, every other element is a
//! positional argument.

use serde_json::Value;

use crate::cmd::{CommandSpec, Options};
use crate::error::{CommandError, Result};

pub fn from_values(values: &[Value]) -> Result<CommandSpec> {
    let (command, rest) = match values.split_first() {
        None => return Ok(CommandSpec::default()),
        Some((Value::String(c), rest)) => (c.as_str(), rest),
        Some((other, _)) => {
            return Err(CommandError::InvalidArgument(format!("command must be a string, got {}", other)));
        }
    };

    let (positional, options) = match rest.split_last() {
        Some((Value::Object(map), init)) => {
            let opts: Options = serde_json::from_value(Value::Object(map.clone()))
                .map_err(|e| CommandError::InvalidOption(e.to_string()))?;
            (init, opts)
        }
        _ => (rest, Options::new()),
    };

    let args = positional
        .iter()
        .map(|v| match v {
            Value::String(s) => Ok(s.clone()),
            other => Err(CommandError::InvalidArgument(format!("positional argument must be a string, got {}", other))),
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(CommandSpec::from_parts(command, args, options))
}

/// Parse a JSON array and delegate to [`from_values`].
pub fn from_json(input: &str) -> Result<CommandSpec> {
    let values: Vec<Value> = serde_json::from_str(input)
        .map_err(|e| CommandError::InvalidArgument(format!("expected a JSON array: {}", e)))?;
    from_values(&values)
}

//! Terse construction macro.

use crate::cmd::OptionValue;

/// Conversion used by [`command!`] for option values.
///
/// `true` sets a flag and `false` leaves the option unset, so a boolean
/// variable can toggle a flag inline.
#[doc(hidden)]
pub trait MacroOptionValue {
    fn into_option_value(self) -> Option<OptionValue>;
}

impl MacroOptionValue for bool {
    fn into_option_value(self) -> Option<OptionValue> { self.then_some(OptionValue::Flag) }
}

impl MacroOptionValue for OptionValue {
    fn into_option_value(self) -> Option<OptionValue> { Some(self) }
}

impl MacroOptionValue for &str {
    fn into_option_value(self) -> Option<OptionValue> { Some(self.into()) }
}

impl MacroOptionValue for String {
    fn into_option_value(self) -> Option<OptionValue> { Some(self.into()) }
}

impl MacroOptionValue for &String {
    fn into_option_value(self) -> Option<OptionValue> { Some(self.into()) }
}

impl MacroOptionValue for Vec<String> {
    fn into_option_value(self) -> Option<OptionValue> { Some(self.into()) }
}

impl MacroOptionValue for Vec<&str> {
    fn into_option_value(self) -> Option<OptionValue> { Some(self.into()) }
}

/// `command!("commit", "-m", "msg"; "a" => true, "author" => name)`
///
/// Positional arguments come before the `;`, options after it.
#[macro_export]
macro_rules! command {
    ($cmd:expr $(, $arg:expr)* $(; $($k:expr => $v:expr),+ )?) => {{
        #[allow(unused_mut)]
        let mut __spec = $crate::cmd::CommandSpec::new($cmd);
        $( __spec.add_argument($arg); )*
        $($(
            if let Some(__v) = $crate::macros::MacroOptionValue::into_option_value($v) {
                __spec.set_option($k, __v);
            }
        )+)?
        __spec
    }};
}

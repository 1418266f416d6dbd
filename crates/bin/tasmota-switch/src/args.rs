//! Command-line arguments: `<address> <on|off>`.

use std::fmt;
use std::str::FromStr;

/// What to do with the plug.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Switch {
    /// Arm the auto-off rule and power on.
    On,
    /// Power off now.
    Off,
}

impl FromStr for Switch {
    type Err = ArgsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "on" => Ok(Self::On),
            "off" => Ok(Self::Off),
            other => Err(ArgsError::UnknownSwitch(other.to_string())),
        }
    }
}

impl fmt::Display for Switch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::On => "on",
            Self::Off => "off",
        })
    }
}

/// Parsed command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    /// Plug address, `host` or `host:port`.
    pub address: String,
    /// Requested action.
    pub switch: Switch,
}

impl Invocation {
    /// Parse the positional arguments (program name already stripped).
    ///
    /// # Errors
    ///
    /// Returns [`ArgsError`] unless there are exactly two arguments, the
    /// address is non-empty and the second is `on` or `off`.
    pub fn parse<I, S>(args: I) -> Result<Self, ArgsError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let args: Vec<String> = args.into_iter().map(Into::into).collect();
        let [address, switch] = <[String; 2]>::try_from(args)
            .map_err(|args| ArgsError::ArgumentCount(args.len()))?;
        if address.is_empty() {
            return Err(ArgsError::EmptyAddress);
        }
        Ok(Self {
            address,
            switch: switch.parse()?,
        })
    }
}

/// Errors in the command line.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ArgsError {
    /// Wrong number of positional arguments.
    #[error("usage: tasmota-switch <address> <on|off> (got {0} arguments)")]
    ArgumentCount(usize),
    /// The address was empty.
    #[error("plug address is empty")]
    EmptyAddress,
    /// The second argument was neither `on` nor `off`.
    #[error("unknown command {0:?}, expected \"on\" or \"off\"")]
    UnknownSwitch(String),
}

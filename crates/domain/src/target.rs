//! Outlet target — the socket a power command is aimed at.

use std::fmt;
use std::str::FromStr;

use crate::error::InputError;

/// Identifier of a single switchable outlet.
///
/// Parsed once from process input and never changed afterwards. Only
/// non-empty runs of ASCII digits are accepted; leading zeros are allowed
/// and dropped (`"007"` is outlet 7).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct OutletTarget(u32);

impl OutletTarget {
    /// Wrap an already validated outlet number.
    #[must_use]
    pub const fn new(number: u32) -> Self {
        Self(number)
    }

    /// The outlet number.
    #[must_use]
    pub const fn number(self) -> u32 {
        self.0
    }

    /// Build a target from the positional arguments of a process
    /// (program name already stripped).
    ///
    /// # Errors
    ///
    /// Returns [`InputError::ArgumentCount`] unless there is exactly one
    /// argument, or the parse error of that argument.
    pub fn from_args<I, S>(args: I) -> Result<Self, InputError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut args = args.into_iter();
        match (args.next(), args.next()) {
            (Some(only), None) => only.as_ref().parse(),
            (None, _) => Err(InputError::ArgumentCount(0)),
            (Some(_), Some(_)) => Err(InputError::ArgumentCount(2 + args.count())),
        }
    }
}

impl FromStr for OutletTarget {
    type Err = InputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Err(InputError::Empty);
        }
        if !s.bytes().all(|b| b.is_ascii_digit()) {
            return Err(InputError::NotANumber(s.to_string()));
        }
        // digits only, so the only possible failure is overflow
        s.parse::<u32>()
            .map(Self)
            .map_err(|_| InputError::OutOfRange(s.to_string()))
    }
}

impl fmt::Display for OutletTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

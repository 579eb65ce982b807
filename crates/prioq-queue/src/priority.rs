//! Validated task priority.
//!
//! A [`Priority`] can only be obtained through validation, so every value
//! in circulation lies in `Priority::MIN..=Priority::MAX`. Callers hand the
//! queue anything implementing [`IntoPriority`]: integers of any width,
//! decimal strings, or an already validated `Priority`.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{QueueError, Result};

/// Urgency of a task. 10 is the most urgent, 0 the least.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "u8")]
pub struct Priority(u8);

impl Priority {
    /// Lowest accepted priority.
    pub const MIN: Priority = Priority(0);

    /// Highest accepted priority.
    pub const MAX: Priority = Priority(10);

    /// Validates an integer priority.
    ///
    /// # Errors
    ///
    /// Returns [`QueueError::InvalidPriorityRange`] if `value` is outside
    /// `0..=10`.
    pub fn new(value: i64) -> Result<Self> {
        if (i64::from(Self::MIN.0)..=i64::from(Self::MAX.0)).contains(&value) {
            // Range checked above, the cast cannot truncate.
            Ok(Self(value as u8))
        } else {
            Err(QueueError::InvalidPriorityRange(value))
        }
    }

    /// Returns the numeric value of this priority.
    pub fn value(self) -> u8 {
        self.0
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl TryFrom<i64> for Priority {
    type Error = QueueError;

    fn try_from(value: i64) -> Result<Self> {
        Self::new(value)
    }
}

impl From<Priority> for u8 {
    fn from(priority: Priority) -> Self {
        priority.0
    }
}

impl FromStr for Priority {
    type Err = QueueError;

    /// Parses a base-10 integer, ignoring surrounding whitespace.
    fn from_str(s: &str) -> Result<Self> {
        let value = s
            .trim()
            .parse::<i64>()
            .map_err(|_| QueueError::InvalidPriorityFormat(s.to_string()))?;
        Self::new(value)
    }
}

/// Conversion of a caller-supplied value into a validated [`Priority`].
///
/// Values that are not integers fail with
/// [`QueueError::InvalidPriorityFormat`]; integers outside the accepted range
/// fail with [`QueueError::InvalidPriorityRange`].
pub trait IntoPriority {
    /// Coerces and validates `self`.
    fn into_priority(self) -> Result<Priority>;
}

impl IntoPriority for Priority {
    fn into_priority(self) -> Result<Priority> {
        Ok(self)
    }
}

impl IntoPriority for &str {
    fn into_priority(self) -> Result<Priority> {
        self.parse()
    }
}

impl IntoPriority for String {
    fn into_priority(self) -> Result<Priority> {
        self.parse()
    }
}

impl IntoPriority for &String {
    fn into_priority(self) -> Result<Priority> {
        self.parse()
    }
}

/// Implements [`IntoPriority`] for integer types that widen into `i64`.
macro_rules! into_priority_lossless {
    ($($ty:ty),*) => {
        $(
            impl IntoPriority for $ty {
                fn into_priority(self) -> Result<Priority> {
                    Priority::new(i64::from(self))
                }
            }
        )*
    };
}

/// Implements [`IntoPriority`] for integer types that may exceed `i64`.
///
/// Values beyond `i64::MAX` are reported as `i64::MAX`; they are out of
/// range either way.
macro_rules! into_priority_saturating {
    ($($ty:ty),*) => {
        $(
            impl IntoPriority for $ty {
                fn into_priority(self) -> Result<Priority> {
                    Priority::new(i64::try_from(self).unwrap_or(i64::MAX))
                }
            }
        )*
    };
}

into_priority_lossless!(i8, i16, i32, i64, u8, u16, u32);
into_priority_saturating!(isize, u64, usize);

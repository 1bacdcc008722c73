use std::{error::Error, fmt::Display};

pub type PackResult<T> = Result<T, PackError>;

/// Container level errors.
/// A returned error guarantees that the container wasn't modified.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PackError {
    /// Index doesn't point to a live element.
    IndexOutOfRange {
        index: usize,
        size: usize,
        container: &'static str,
    },
    /// Subsequence `[start, end)` isn't contained in `[0, size]`.
    RangeOutOfBounds {
        start: usize,
        end: usize,
        size: usize,
        container: &'static str,
    },
    /// Operation requires at least one element.
    EmptyCollection { container: &'static str },
    /// Combination of arguments and container state can't be honoured.
    InvalidArguments {
        op: &'static str,
        reason: &'static str,
    },
    /// Operation failed because of the cause.
    IllegalCall {
        op: &'static str,
        cause: Box<PackError>,
    },
}

impl PackError {
    pub fn index_out_of_range<C: ?Sized>(index: usize, size: usize) -> Self {
        Self::IndexOutOfRange {
            index,
            size,
            container: std::any::type_name::<C>(),
        }
    }

    pub fn range_out_of_bounds<C: ?Sized>(start: usize, end: usize, size: usize) -> Self {
        Self::RangeOutOfBounds {
            start,
            end,
            size,
            container: std::any::type_name::<C>(),
        }
    }

    pub fn empty<C: ?Sized>() -> Self {
        Self::EmptyCollection {
            container: std::any::type_name::<C>(),
        }
    }

    pub fn invalid_arguments(op: &'static str, reason: &'static str) -> Self {
        Self::InvalidArguments { op, reason }
    }

    /// Wraps self as the cause of failed `op`.
    pub fn during(self, op: &'static str) -> Self {
        Self::IllegalCall {
            op,
            cause: Box::new(self),
        }
    }

    /// Last error in the chain of causes.
    pub fn root_cause(&self) -> &PackError {
        let mut error = self;
        while let Self::IllegalCall { cause, .. } = error {
            error = cause;
        }
        error
    }

    pub fn is_empty_collection(&self) -> bool {
        matches!(self.root_cause(), Self::EmptyCollection { .. })
    }

    pub fn is_out_of_range(&self) -> bool {
        matches!(
            self.root_cause(),
            Self::IndexOutOfRange { .. } | Self::RangeOutOfBounds { .. }
        )
    }

    pub fn is_invalid_arguments(&self) -> bool {
        matches!(self.root_cause(), Self::InvalidArguments { .. })
    }
}

impl Display for PackError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::IndexOutOfRange {
                index,
                size,
                container,
            } => write!(
                f,
                "Index {} is out of range [0, {}) of {}.",
                index, size, container
            ),
            Self::RangeOutOfBounds {
                start,
                end,
                size,
                container,
            } => write!(
                f,
                "Subsequence [{}, {}) is out of bounds [0, {}] of {}.",
                start, end, size, container
            ),
            Self::EmptyCollection { container } => write!(f, "{} is empty.", container),
            Self::InvalidArguments { op, reason } => {
                write!(f, "Invalid arguments for '{}': {}.", op, reason)
            }
            Self::IllegalCall { op, cause } => write!(f, "'{}' failed: {}", op, cause),
        }
    }
}

impl Error for PackError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::IllegalCall { cause, .. } => Some(cause.as_ref()),
            _ => None,
        }
    }
}

/// Orders bounds given in any order.
pub(crate) fn ordered(start_or_end: usize, end_or_start: usize) -> (usize, usize) {
    if start_or_end <= end_or_start {
        (start_or_end, end_or_start)
    } else {
        (end_or_start, start_or_end)
    }
}

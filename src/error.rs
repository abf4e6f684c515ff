use thiserror::Error;

/// Reason a grid size was rejected before any pass ran.
#[derive(Debug, Copy, Clone, Hash, PartialEq, Eq)]
pub enum SizeViolation {
    /// The grid has no samples.
    Empty,
    /// Row count and column count differ, or rows have different lengths.
    NotSquare,
    /// The side length is not a power of two.
    NotPowerOfTwo,
    /// After the optional radix-2 stage the remaining factor is not a power of four.
    NotPowerOfFour,
}

impl core::fmt::Display for SizeViolation {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Empty => "grid is empty".fmt(f),
            Self::NotSquare => "grid is not square".fmt(f),
            Self::NotPowerOfTwo => "side length is not a power of two".fmt(f),
            Self::NotPowerOfFour => "remaining factor is not a power of four".fmt(f),
        }
    }
}

/// Errors the transform functions can return.
#[derive(Debug, Error, Copy, Clone, Hash, PartialEq, Eq)]
pub enum FftError {
    /// The grid cannot be transformed with a radix-2/radix-4 schedule.
    #[error("invalid transform size {rows}x{columns}: {reason}")]
    InvalidTransformSize {
        rows: usize,
        columns: usize,
        reason: SizeViolation,
    },
    /// The butterfly was handed a vector that is neither 2 nor 4 samples long.
    #[error("unsupported radix {0}, only 2 and 4 are implemented")]
    UnsupportedRadix(usize),
    /// A cached twiddle table was used for a different transform size.
    #[error("twiddle table was built for size {table} but the grid has size {requested}")]
    TwiddleTableMismatch { table: usize, requested: usize },
    /// A grid was handed to an [`Fft2d`](crate::Fft2d) created for another size.
    #[error("transform was created for size {expected} but the grid has size {actual}")]
    GridSizeMismatch { expected: usize, actual: usize },
    /// The pass block size must be at least one column.
    #[error("block size must be non-zero")]
    InvalidBlockSize,
}

impl FftError {
    pub(crate) const fn invalid_size(n: usize, reason: SizeViolation) -> Self {
        Self::InvalidTransformSize {
            rows: n,
            columns: n,
            reason,
        }
    }
}

use std::sync::Arc;

use crate::{
    Axis, FftError, Grid, StockhamPlan, TransformReport, TwiddleStrategy, TwiddleTable, Twiddles,
    stockham_autosort,
};

/// Default number of gather columns processed per cache block.
pub const DEFAULT_BLOCK_SIZE: usize = 64;

/// Configuration of an [`Fft2d`].
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Fft2dConfig {
    /// How twiddle factors are produced.
    pub strategy: TwiddleStrategy,
    /// Gather columns per cache block. Only changes memory access order.
    pub block_size: usize,
}

impl Default for Fft2dConfig {
    fn default() -> Self {
        Self {
            strategy: TwiddleStrategy::Cached,
            block_size: DEFAULT_BLOCK_SIZE,
        }
    }
}

impl Fft2dConfig {
    pub fn with_strategy(mut self, strategy: TwiddleStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    pub fn with_block_size(mut self, block_size: usize) -> Self {
        self.block_size = block_size;
        self
    }
}

/// Two-dimensional FFT over square grids of one size.
///
/// Each axis is transformed by [`stockham_autosort`]; the column pass walks the grid with
/// swapped indices instead of transposing it. The instance owns its twiddle source, so a
/// cached table always matches the size the instance was created for.
///
/// # Normalization
///
/// [`Fft2d::transform`] and [`Fft2d::forward`] do **not** normalize. A forward transform
/// followed by the unscaled inverse yields `N² * input`. [`Fft2d::inverse`] applies the
/// `1 / N²` factor itself.
#[derive(Debug, Clone)]
pub struct Fft2d {
    size: usize,
    block_size: usize,
    twiddles: Twiddles,
}

impl Fft2d {
    /// Creates a transform for `size × size` grids.
    pub fn new(size: usize, config: Fft2dConfig) -> Result<Self, FftError> {
        StockhamPlan::new(size)?;
        if config.block_size == 0 {
            return Err(FftError::InvalidBlockSize);
        }

        Ok(Self {
            size,
            block_size: config.block_size,
            twiddles: Twiddles::new(config.strategy, size)?,
        })
    }

    /// Creates a transform that looks its twiddles up in an existing table.
    pub fn with_table(table: Arc<TwiddleTable>, block_size: usize) -> Result<Self, FftError> {
        if block_size == 0 {
            return Err(FftError::InvalidBlockSize);
        }
        Ok(Self {
            size: table.size(),
            block_size,
            twiddles: Twiddles::Cached(table),
        })
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn block_size(&self) -> usize {
        self.block_size
    }

    pub fn strategy(&self) -> TwiddleStrategy {
        self.twiddles.strategy()
    }

    /// Transforms every row or every column of `grid`.
    ///
    /// The returned grid may be the buffer that was passed in or the internal scratchpad.
    /// Grids of any size other than [`Fft2d::size`] are rejected, whatever the strategy.
    pub fn transform(&self, grid: Grid, axis: Axis) -> Result<(Grid, TransformReport), FftError> {
        if grid.size() != self.size {
            return Err(FftError::GridSizeMismatch {
                expected: self.size,
                actual: grid.size(),
            });
        }
        stockham_autosort(grid, axis, &self.twiddles, self.block_size)
    }

    /// Unnormalized 2D forward transform: rows, then columns.
    pub fn forward(&self, grid: Grid) -> Result<(Grid, [TransformReport; 2]), FftError> {
        let (grid, rows) = self.transform(grid, Axis::Rows)?;
        let (grid, columns) = self.transform(grid, Axis::Columns)?;
        Ok((grid, [rows, columns]))
    }

    /// Normalized 2D inverse transform.
    ///
    /// Swaps real and imaginary parts, runs the forward transform, swaps back and divides
    /// by `N²`.
    pub fn inverse(&self, mut grid: Grid) -> Result<(Grid, [TransformReport; 2]), FftError> {
        let n = grid.size();
        grid.swap_components();
        let (mut grid, reports) = self.forward(grid)?;
        grid.swap_components();
        grid.scale(1.0 / (n * n) as f64);
        Ok((grid, reports))
    }
}

use super::{Axis, Complex64, Radix, TwiddleSource, butterfly_2, butterfly_4, expand};
use crate::{FftError, Grid, error::SizeViolation};

/// Validated radix schedule for one transform size.
///
/// Sizes that are powers of four use radix-4 stages only. Every other power of two starts
/// with a single radix-2 stage, after which the remaining length is a power of four.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct StockhamPlan {
    size: usize,
    factors: Vec<Radix>,
}

impl StockhamPlan {
    /// Computes the schedule for side length `n`.
    ///
    /// A size of one has an empty schedule: the transform is the identity.
    pub fn new(n: usize) -> Result<Self, FftError> {
        if n == 0 {
            return Err(FftError::invalid_size(n, SizeViolation::Empty));
        }
        if !n.is_power_of_two() {
            return Err(FftError::invalid_size(n, SizeViolation::NotPowerOfTwo));
        }

        let mut factors = Vec::new();
        let mut stride = 1;
        if !is_power_of_four(n) {
            factors.push(Radix::Factor2);
            stride = 2;
        }
        if !is_power_of_four(n / stride) {
            return Err(FftError::invalid_size(n, SizeViolation::NotPowerOfFour));
        }
        while stride < n {
            factors.push(Radix::Factor4);
            stride *= 4;
        }

        Ok(Self { size: n, factors })
    }

    pub fn size(&self) -> usize {
        self.size
    }

    /// Radix of every pass, in execution order.
    pub fn factors(&self) -> &[Radix] {
        &self.factors
    }

    pub fn passes(&self) -> usize {
        self.factors.len()
    }

    pub fn radix2_passes(&self) -> usize {
        self.count(Radix::Factor2)
    }

    pub fn radix4_passes(&self) -> usize {
        self.count(Radix::Factor4)
    }

    fn count(&self, radix: Radix) -> usize {
        self.factors.iter().filter(|&&f| f == radix).count()
    }
}

fn is_power_of_four(n: usize) -> bool {
    n.is_power_of_two() && n.trailing_zeros().is_multiple_of(2)
}

/// Indicates where the output data resides after the FFT computation.
///
/// The Stockham autosort algorithm uses ping-pong buffering, alternating between
/// the data and scratchpad buffers at each stage. The final output location depends
/// on whether there's an even or odd number of stages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OutputLocation {
    /// Output is in the buffer that was passed in.
    Data,
    /// Output is in the scratchpad allocated by the transform.
    Scratchpad,
}

/// Summary of one single-axis transform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TransformReport {
    pub axis: Axis,
    pub size: usize,
    pub radix2_passes: usize,
    pub radix4_passes: usize,
    pub output: OutputLocation,
}

impl TransformReport {
    /// Total number of passes over the grid.
    pub fn passes(&self) -> usize {
        self.radix2_passes + self.radix4_passes
    }
}

/// One pass of the schedule over every line of the grid.
struct Stage<'a, T: ?Sized> {
    n: usize,
    stride: usize,
    radix: Radix,
    axis: Axis,
    twiddles: &'a T,
}

impl<T: TwiddleSource + ?Sized> Stage<'_, T> {
    /// Runs the pass from `src` into `dst`.
    ///
    /// Gather columns are visited in blocks of `block_size`; within a block every line is
    /// processed for each column before moving on. The order only affects memory locality.
    fn execute(&self, src: &[Complex64], dst: &mut [Complex64], block_size: usize) {
        let columns = self.n / self.radix.radix();
        for block_start in (0..columns).step_by(block_size) {
            let block_end = (block_start + block_size).min(columns);
            for line in 0..self.n {
                for j in block_start..block_end {
                    match self.radix {
                        Radix::Factor2 => {
                            self.fft_iteration::<2>(line, j, src, dst, butterfly_2)
                        }
                        Radix::Factor4 => {
                            self.fft_iteration::<4>(line, j, src, dst, butterfly_4)
                        }
                    }
                }
            }
        }
    }

    /// Gathers `R` samples of gather column `j`, twiddles them, runs the butterfly and
    /// scatters the results to their Stockham positions.
    #[inline(always)]
    fn fft_iteration<const R: usize>(
        &self,
        line: usize,
        j: usize,
        src: &[Complex64],
        dst: &mut [Complex64],
        butterfly: fn(&mut [Complex64; R]),
    ) {
        debug_assert_eq!(R, self.radix.radix());
        let n = self.n;
        let leg_distance = n / R;

        let mut v: [Complex64; R] = core::array::from_fn(|r| {
            let x = src[self.axis.index(n, line, j + r * leg_distance)];
            let w = self.twiddles.twiddle(j, r, self.stride, n, self.radix);
            x.mul(&w)
        });

        butterfly(&mut v);

        let base = expand(j, self.stride, R);
        for (r, x) in v.into_iter().enumerate() {
            dst[self.axis.index(n, line, base + r * self.stride)] = x;
        }
    }
}

/// Performs an out-of-place mixed-radix FFT along one axis of `grid` using the Stockham
/// Autosort algorithm.
///
/// The Stockham algorithm eliminates the explicit digit reversal permutation by alternating
/// reads and writes between the data and a scratchpad buffer at each stage. The scratchpad is
/// allocated once, after the size has been validated, and whichever of the two buffers holds
/// the final stage is returned. The output is unnormalized.
///
/// # Arguments
///
/// * `grid` - Square input grid, consumed by the transform
/// * `axis` - Whether every row or every column is transformed
/// * `twiddles` - Source of the per-stage rotation factors
/// * `block_size` - Number of gather columns per cache block (non-zero)
pub fn stockham_autosort<T: TwiddleSource + ?Sized>(
    grid: Grid,
    axis: Axis,
    twiddles: &T,
    block_size: usize,
) -> Result<(Grid, TransformReport), FftError> {
    if block_size == 0 {
        return Err(FftError::InvalidBlockSize);
    }

    let n = grid.size();
    let plan = StockhamPlan::new(n)?;
    twiddles.check_size(n)?;

    let mut data = grid;
    let mut scratchpad = Grid::zeroed(n);

    {
        let mut input = data.as_mut_slice();
        let mut output = scratchpad.as_mut_slice();
        let mut stride = 1;

        for &radix in plan.factors() {
            let stage = Stage {
                n,
                stride,
                radix,
                axis,
                twiddles,
            };
            stage.execute(input, output, block_size);

            // Swap input and output buffers for next stage.
            core::mem::swap(&mut input, &mut output);
            stride *= radix.radix();
        }

        debug_assert_eq!(stride, n);
    }

    let output = if plan.passes().is_multiple_of(2) {
        OutputLocation::Data
    } else {
        OutputLocation::Scratchpad
    };

    let report = TransformReport {
        axis,
        size: n,
        radix2_passes: plan.radix2_passes(),
        radix4_passes: plan.radix4_passes(),
        output,
    };

    let result = match output {
        OutputLocation::Data => data,
        OutputLocation::Scratchpad => scratchpad,
    };

    Ok((result, report))
}

//! Synthetic input and round-trip measurement shared by the sweep binary, tests and
//! benchmarks.

use crate::{Complex64, Fft2d, FftError, Grid};

/// Two superimposed sines: `sin(40 * i / n) + sin(200 * i / n)`.
pub fn two_tone(i: usize, n: usize) -> f64 {
    let x = i as f64 / n as f64;
    (40.0 * x).sin() + (200.0 * x).sin()
}

/// Real `n × n` grid whose rows all hold the [`two_tone`] sequence.
pub fn two_tone_grid(n: usize) -> Result<Grid, FftError> {
    Grid::from_fn(n, |_, column| Complex64::new(two_tone(column, n), 0.0))
}

/// Outcome of a forward plus inverse transform.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RoundTrip {
    /// Largest absolute sample error after the round trip.
    pub max_error: f64,
    /// Passes of the forward transform, summed over both axes.
    pub forward_passes: usize,
    /// Passes of the inverse transform, summed over both axes.
    pub inverse_passes: usize,
}

/// Runs `grid` through the forward and the inverse transform and measures the error.
pub fn round_trip(fft: &Fft2d, grid: &Grid) -> Result<RoundTrip, FftError> {
    let (spectrum, forward) = fft.forward(grid.clone())?;
    let (restored, inverse) = fft.inverse(spectrum)?;

    Ok(RoundTrip {
        max_error: restored.max_abs_diff(grid),
        forward_passes: forward.iter().map(|r| r.passes()).sum(),
        inverse_passes: inverse.iter().map(|r| r.passes()).sum(),
    })
}

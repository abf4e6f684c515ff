//! Mixed radix-2/radix-4 Stockham autosort FFT over square grids of complex samples.
//!
//! A two-dimensional transform is two one-dimensional passes, one along the rows and one
//! along the columns. Each pass ping-pongs between the input grid and a scratchpad of the
//! same size, so no digit reversal is needed and the result comes out in natural order.
//!
//! Twiddle factors are supplied through [`TwiddleSource`]: either evaluated on the fly
//! ([`ComputedTwiddles`]) or looked up in a [`TwiddleTable`] built once per size.
//!
//! ```
//! use stockham2d::{Fft2d, Fft2dConfig, signal::two_tone_grid};
//!
//! let fft = Fft2d::new(64, Fft2dConfig::default())?;
//! let grid = two_tone_grid(64)?;
//! let (spectrum, _) = fft.forward(grid.clone())?;
//! let (restored, _) = fft.inverse(spectrum)?;
//! assert!(restored.max_abs_diff(&grid) < 1e-12);
//! # Ok::<(), stockham2d::FftError>(())
//! ```

mod error;
mod fft;
mod fft2d;
mod grid;
pub mod signal;

pub use error::{FftError, SizeViolation};
pub use fft::*;
pub use fft2d::{DEFAULT_BLOCK_SIZE, Fft2d, Fft2dConfig};
pub use grid::Grid;

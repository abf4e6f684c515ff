use core::ops::{Index, IndexMut};

use crate::{Complex64, FftError, error::SizeViolation};

/// Square grid of complex samples stored row-major.
///
/// A grid only guarantees that it is square and non-empty. Whether its side length can be
/// transformed is checked by the transform itself.
#[derive(Debug, Clone, PartialEq)]
pub struct Grid {
    size: usize,
    samples: Vec<Complex64>,
}

impl Grid {
    /// Builds a grid from nested rows. Every row must be as long as there are rows.
    pub fn from_rows(rows: Vec<Vec<Complex64>>) -> Result<Self, FftError> {
        let size = rows.len();
        if size == 0 {
            return Err(FftError::invalid_size(0, SizeViolation::Empty));
        }
        if let Some(row) = rows.iter().find(|row| row.len() != size) {
            return Err(FftError::InvalidTransformSize {
                rows: size,
                columns: row.len(),
                reason: SizeViolation::NotSquare,
            });
        }

        Ok(Self {
            size,
            samples: rows.into_iter().flatten().collect(),
        })
    }

    /// Builds a grid from `size * size` row-major samples.
    pub fn from_samples(size: usize, samples: Vec<Complex64>) -> Result<Self, FftError> {
        if size == 0 {
            return Err(FftError::invalid_size(0, SizeViolation::Empty));
        }
        if size.checked_mul(size) != Some(samples.len()) {
            return Err(FftError::InvalidTransformSize {
                rows: size,
                columns: samples.len() / size,
                reason: SizeViolation::NotSquare,
            });
        }
        Ok(Self { size, samples })
    }

    /// Builds a grid by evaluating `f(row, column)` for every position.
    pub fn from_fn(
        size: usize,
        mut f: impl FnMut(usize, usize) -> Complex64,
    ) -> Result<Self, FftError> {
        if size == 0 {
            return Err(FftError::invalid_size(0, SizeViolation::Empty));
        }
        let samples = (0..size * size).map(|i| f(i / size, i % size)).collect();
        Ok(Self { size, samples })
    }

    /// Zero-filled grid, used as the ping-pong scratchpad.
    pub(crate) fn zeroed(size: usize) -> Self {
        Self {
            size,
            samples: vec![Complex64::zero(); size * size],
        }
    }

    /// Side length.
    pub fn size(&self) -> usize {
        self.size
    }

    #[inline(always)]
    pub fn get(&self, row: usize, column: usize) -> Complex64 {
        self.samples[row * self.size + column]
    }

    pub fn row(&self, row: usize) -> &[Complex64] {
        let start = row * self.size;
        &self.samples[start..start + self.size]
    }

    pub fn rows(&self) -> impl Iterator<Item = &[Complex64]> {
        self.samples.chunks_exact(self.size)
    }

    pub fn as_slice(&self) -> &[Complex64] {
        &self.samples
    }

    pub fn as_mut_slice(&mut self) -> &mut [Complex64] {
        &mut self.samples
    }

    pub fn into_samples(self) -> Vec<Complex64> {
        self.samples
    }

    /// Returns a physically transposed copy.
    pub fn transposed(&self) -> Self {
        let n = self.size;
        let mut out = Self::zeroed(n);
        for row in 0..n {
            for column in 0..n {
                out.samples[column * n + row] = self.samples[row * n + column];
            }
        }
        out
    }

    /// Exchanges real and imaginary parts of every sample.
    pub fn swap_components(&mut self) {
        self.samples.iter_mut().for_each(|x| *x = x.swap());
    }

    /// Multiplies every sample by `factor`.
    pub fn scale(&mut self, factor: f64) {
        self.samples.iter_mut().for_each(|x| *x = x.scale(factor));
    }

    /// Largest modulus of the sample-wise difference.
    ///
    /// Grids of different sizes are infinitely far apart.
    pub fn max_abs_diff(&self, other: &Self) -> f64 {
        if self.size != other.size {
            return f64::INFINITY;
        }
        self.samples
            .iter()
            .zip(&other.samples)
            .map(|(a, b)| a.sub(b).norm())
            .fold(0.0, f64::max)
    }

    /// Largest sample modulus.
    pub fn max_norm(&self) -> f64 {
        self.samples.iter().map(Complex64::norm).fold(0.0, f64::max)
    }
}

impl Index<(usize, usize)> for Grid {
    type Output = Complex64;

    fn index(&self, (row, column): (usize, usize)) -> &Self::Output {
        &self.samples[row * self.size + column]
    }
}

impl IndexMut<(usize, usize)> for Grid {
    fn index_mut(&mut self, (row, column): (usize, usize)) -> &mut Self::Output {
        &mut self.samples[row * self.size + column]
    }
}

mod butterflies;
mod index_map;
mod stockham_autosort;
mod twiddles;

pub use butterflies::decimate;
pub(crate) use butterflies::{butterfly_2, butterfly_4};
pub use index_map::expand;
pub use stockham_autosort::{OutputLocation, StockhamPlan, TransformReport, stockham_autosort};
pub use twiddles::{ComputedTwiddles, TwiddleSource, TwiddleStrategy, TwiddleTable, Twiddles};

/// Simple complex number struct
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[repr(C)]
pub struct Complex64 {
    pub re: f64,
    pub im: f64,
}

impl Complex64 {
    /// The multiplicative identity, used as the radix-2 twiddle.
    pub const ONE: Self = Self::new(1.0, 0.0);

    #[inline(always)]
    pub const fn new(re: f64, im: f64) -> Self {
        Self { re, im }
    }

    #[inline(always)]
    pub const fn zero() -> Self {
        Self { re: 0.0, im: 0.0 }
    }

    /// Returns `exp(i * angle)`.
    #[inline(always)]
    pub fn from_angle(angle: f64) -> Self {
        let (sin, cos) = angle.sin_cos();
        Self { re: cos, im: sin }
    }

    #[inline(always)]
    pub const fn conj(&self) -> Self {
        Self {
            re: self.re,
            im: -self.im,
        }
    }

    #[inline(always)]
    pub const fn add(&self, o: &Self) -> Self {
        Self {
            re: self.re + o.re,
            im: self.im + o.im,
        }
    }

    #[inline(always)]
    pub const fn sub(&self, o: &Self) -> Self {
        Self {
            re: self.re - o.re,
            im: self.im - o.im,
        }
    }

    #[inline(always)]
    pub const fn mul(&self, o: &Self) -> Self {
        Self {
            re: self.re * o.re - self.im * o.im,
            im: self.re * o.im + self.im * o.re,
        }
    }

    /// Multiplies by the imaginary unit: `(re, im) -> (-im, re)`.
    #[inline(always)]
    pub const fn mul_i(&self) -> Self {
        Self {
            re: -self.im,
            im: self.re,
        }
    }

    #[inline(always)]
    pub const fn scale(&self, f: f64) -> Self {
        Self {
            re: self.re * f,
            im: self.im * f,
        }
    }

    /// Exchanges the real and imaginary parts.
    ///
    /// Equal to `i * conj(z)`. Running the forward transform on swapped input and swapping
    /// the result back yields the unnormalized inverse transform.
    #[inline(always)]
    pub const fn swap(&self) -> Self {
        Self {
            re: self.im,
            im: self.re,
        }
    }

    #[inline(always)]
    pub fn norm(&self) -> f64 {
        self.re.hypot(self.im)
    }
}

/// Radix factors supported by the Stockham schedule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Radix {
    /// Radix-2
    Factor2,
    /// Radix-4
    Factor4,
}

impl Radix {
    /// Returns the radix size.
    pub const fn radix(&self) -> usize {
        match self {
            Radix::Factor2 => 2,
            Radix::Factor4 => 4,
        }
    }
}

/// Grid axis a one-dimensional transform runs along.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    /// Transform every row (contiguous storage).
    Rows,
    /// Transform every column (strided storage, no physical transpose).
    Columns,
}

impl Axis {
    /// Maps a `(line, position)` pair along this axis to a row-major storage index.
    #[inline(always)]
    pub(crate) const fn index(&self, n: usize, line: usize, position: usize) -> usize {
        match self {
            Axis::Rows => line * n + position,
            Axis::Columns => position * n + line,
        }
    }
}

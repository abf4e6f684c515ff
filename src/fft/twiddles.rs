use core::f64::consts::PI;
use std::{
    collections::HashMap,
    sync::{Arc, LazyLock, Mutex, PoisonError},
};

use super::{Complex64, Radix};
use crate::{FftError, error::SizeViolation};

/// Number of table entries stored per gather column; tables only serve radix-4 stages.
const LEGS: usize = 4;

static TABLE_CACHE: LazyLock<Mutex<HashMap<usize, Arc<TwiddleTable>>>> =
    LazyLock::new(|| Mutex::new(HashMap::new()));

/// Supplies the rotation factor applied to a gathered sample before its butterfly.
///
/// The factor for leg `r` of gather column `j` in a stage of stride `stride` is
/// `exp(i * r * angle)` with `angle = -2π * (j mod stride) / (stride * radix)`.
pub trait TwiddleSource {
    /// Returns the twiddle for leg `r` of gather column `j` of a transform of length `n`.
    fn twiddle(&self, j: usize, r: usize, stride: usize, n: usize, radix: Radix) -> Complex64;

    /// Checks that this source can serve a transform of side length `n`.
    fn check_size(&self, _n: usize) -> Result<(), FftError> {
        Ok(())
    }
}

/// Evaluates every twiddle directly with `sin`/`cos`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ComputedTwiddles;

impl TwiddleSource for ComputedTwiddles {
    #[inline(always)]
    fn twiddle(&self, j: usize, r: usize, stride: usize, _n: usize, radix: Radix) -> Complex64 {
        let angle = stage_angle(j, stride, radix.radix());
        Complex64::from_angle(r as f64 * angle)
    }
}

#[inline(always)]
fn stage_angle(j: usize, stride: usize, radix: usize) -> f64 {
    -2.0 * PI * (j % stride) as f64 / (stride * radix) as f64
}

/// Pre-computed radix-4 twiddles for every stage stride of one transform size.
///
/// Stages are stored back to back for the strides `1, 2, 4, ..` below the transform size,
/// so both the pure radix-4 schedule and the schedule with a radix-2 warm-up can be served.
/// The stage with stride `s` starts at offset `4 * (s - 1)` and holds four legs per
/// gather column. The table holds `4 * (n - 1)` entries in total.
///
/// A table answers only for the size it was built with.
#[derive(Debug, Clone, PartialEq)]
pub struct TwiddleTable {
    size: usize,
    twiddles: Vec<Complex64>,
}

impl TwiddleTable {
    /// Builds the table for transforms of side length `n`.
    pub fn new(n: usize) -> Result<Self, FftError> {
        if n == 0 {
            return Err(FftError::invalid_size(n, SizeViolation::Empty));
        }
        if !n.is_power_of_two() {
            return Err(FftError::invalid_size(n, SizeViolation::NotPowerOfTwo));
        }

        let mut twiddles = Vec::with_capacity(LEGS * (n - 1));
        let mut stride = 1;
        while stride < n {
            debug_assert_eq!(twiddles.len(), LEGS * (stride - 1));
            for j in 0..stride {
                let angle = stage_angle(j, stride, LEGS);
                twiddles.extend((0..LEGS).map(|r| Complex64::from_angle(r as f64 * angle)));
            }
            stride *= 2;
        }

        Ok(Self { size: n, twiddles })
    }

    /// Returns the table for size `n` from a process-wide cache, building it on first use.
    ///
    /// Every size gets its own table, so transforms of different sizes can share the cache
    /// from several threads. Nothing in the crate uses the cache implicitly: pass the table
    /// to [`Fft2d::with_table`](crate::Fft2d::with_table) to opt in. Cached tables live
    /// until the process exits.
    pub fn shared(n: usize) -> Result<Arc<Self>, FftError> {
        let mut cache = TABLE_CACHE.lock().unwrap_or_else(PoisonError::into_inner);
        if let Some(table) = cache.get(&n) {
            return Ok(Arc::clone(table));
        }
        let table = Arc::new(Self::new(n)?);
        cache.insert(n, Arc::clone(&table));
        Ok(table)
    }

    /// The transform size the table was built for.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Number of stored twiddles.
    pub fn entries(&self) -> usize {
        self.twiddles.len()
    }

    #[inline(always)]
    fn offset(j: usize, r: usize, stride: usize) -> usize {
        LEGS * (stride - 1) + (j % stride) * LEGS + r
    }
}

/// Radix-4 lookups require `stride < size` and `r < 4`. A stride at or beyond the table size
/// panics; debug builds also reject `r >= 4`, which would otherwise read the next column.
impl TwiddleSource for TwiddleTable {
    #[inline(always)]
    fn twiddle(&self, j: usize, r: usize, stride: usize, _n: usize, radix: Radix) -> Complex64 {
        match radix {
            // The only radix-2 stage runs at stride 1, where every angle is zero.
            Radix::Factor2 => Complex64::ONE,
            Radix::Factor4 => {
                debug_assert!(stride < self.size && r < LEGS, "stride {stride}, leg {r}");
                self.twiddles[Self::offset(j, r, stride)]
            }
        }
    }

    fn check_size(&self, n: usize) -> Result<(), FftError> {
        if n == self.size {
            Ok(())
        } else {
            Err(FftError::TwiddleTableMismatch {
                table: self.size,
                requested: n,
            })
        }
    }
}

/// Selects how twiddles are produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TwiddleStrategy {
    /// Evaluate `sin`/`cos` for every twiddle.
    Computed,
    /// Look twiddles up in a table built once per size.
    #[default]
    Cached,
}

/// A twiddle source chosen at runtime.
#[derive(Debug, Clone)]
pub enum Twiddles {
    Computed(ComputedTwiddles),
    Cached(Arc<TwiddleTable>),
}

impl Twiddles {
    /// Creates the twiddle source for `strategy` and transform size `n`.
    ///
    /// The cached strategy builds a table owned by the returned value.
    pub fn new(strategy: TwiddleStrategy, n: usize) -> Result<Self, FftError> {
        match strategy {
            TwiddleStrategy::Computed => Ok(Self::Computed(ComputedTwiddles)),
            TwiddleStrategy::Cached => {
                TwiddleTable::new(n).map(|table| Self::Cached(Arc::new(table)))
            }
        }
    }

    pub fn strategy(&self) -> TwiddleStrategy {
        match self {
            Self::Computed(_) => TwiddleStrategy::Computed,
            Self::Cached(_) => TwiddleStrategy::Cached,
        }
    }
}

impl TwiddleSource for Twiddles {
    #[inline(always)]
    fn twiddle(&self, j: usize, r: usize, stride: usize, n: usize, radix: Radix) -> Complex64 {
        match self {
            Self::Computed(source) => source.twiddle(j, r, stride, n, radix),
            Self::Cached(table) => table.twiddle(j, r, stride, n, radix),
        }
    }

    fn check_size(&self, n: usize) -> Result<(), FftError> {
        match self {
            Self::Computed(source) => source.check_size(n),
            Self::Cached(table) => table.check_size(n),
        }
    }
}

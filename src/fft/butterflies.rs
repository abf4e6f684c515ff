use super::Complex64;
use crate::FftError;

/// Radix-2 DFT butterfly on two already twiddled samples.
#[inline(always)]
pub(crate) fn butterfly_2(v: &mut [Complex64; 2]) {
    let [x0, x1] = *v;
    v[0] = x0.add(&x1);
    v[1] = x0.sub(&x1);
}

/// Radix-4 DFT butterfly on four already twiddled samples.
///
/// Implements the unnormalized order-4 DFT matrix:
/// Y[0] = x[0] + x[1] + x[2] + x[3]
/// Y[1] = x[0] - j*x[1] - x[2] + j*x[3]
/// Y[2] = x[0] - x[1] + x[2] - x[3]
/// Y[3] = x[0] + j*x[1] - x[2] - j*x[3]
#[inline(always)]
pub(crate) fn butterfly_4(v: &mut [Complex64; 4]) {
    let [x0, x1, x2, x3] = *v;

    let u0 = x0.add(&x2); // x0 + x2
    let u1 = x0.sub(&x2); // x0 - x2
    let u2 = x1.add(&x3); // x1 + x3
    let u3 = x1.sub(&x3); // x1 - x3

    // -j * (a + bi) = b - ai
    let u3_neg_j = Complex64::new(u3.im, -u3.re);
    // +j * (a + bi) = -b + ai
    let u3_pos_j = u3.mul_i();

    v[0] = u0.add(&u2);
    v[1] = u1.add(&u3_neg_j);
    v[2] = u0.sub(&u2);
    v[3] = u1.add(&u3_pos_j);
}

/// Replaces `v` with its unnormalized DFT.
///
/// Only lengths 2 and 4 are supported; anything else returns
/// [`FftError::UnsupportedRadix`] and leaves `v` untouched.
pub fn decimate(v: &mut [Complex64]) -> Result<(), FftError> {
    if let Ok(pair) = <&mut [Complex64; 2]>::try_from(&mut *v) {
        butterfly_2(pair);
        Ok(())
    } else if let Ok(quad) = <&mut [Complex64; 4]>::try_from(&mut *v) {
        butterfly_4(quad);
        Ok(())
    } else {
        Err(FftError::UnsupportedRadix(v.len()))
    }
}

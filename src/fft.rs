use log::trace;

use crate::error::SimError;
use crate::scatter::Scatter;

/// A minimal two-field complex number with the `+ - *` operators the FFT
/// needs. Kept local rather than pulled from a crate: the FFT itself is
/// the hand-rolled deliverable here, not an incidental detail.
#[derive(Debug, Clone, Copy, PartialEq)]
struct Complex64 {
    re: f64,
    im: f64,
}

impl Complex64 {
    fn new(re: f64, im: f64) -> Self {
        Self { re, im }
    }

    fn magnitude(self) -> f64 {
        (self.re * self.re + self.im * self.im).sqrt()
    }
}

impl std::ops::Add for Complex64 {
    type Output = Complex64;
    fn add(self, rhs: Complex64) -> Complex64 {
        Complex64::new(self.re + rhs.re, self.im + rhs.im)
    }
}

impl std::ops::Sub for Complex64 {
    type Output = Complex64;
    fn sub(self, rhs: Complex64) -> Complex64 {
        Complex64::new(self.re - rhs.re, self.im - rhs.im)
    }
}

impl std::ops::Mul for Complex64 {
    type Output = Complex64;
    fn mul(self, rhs: Complex64) -> Complex64 {
        Complex64::new(
            self.re * rhs.re - self.im * rhs.im,
            self.re * rhs.im + self.im * rhs.re,
        )
    }
}

fn is_power_of_two(n: usize) -> bool {
    n != 0 && (n & (n - 1)) == 0
}

fn reverse_bits(mut x: usize, bits: u32) -> usize {
    let mut r = 0usize;
    for _ in 0..bits {
        r = (r << 1) | (x & 1);
        x >>= 1;
    }
    r
}

/// Bit-reversal permutation over `n` indices, in place: the index with
/// binary digits b_{k-1}...b_0 moves to position b_0...b_{k-1}.
fn bit_reverse_permute(z: &mut [Complex64]) {
    let n = z.len();
    let bits = n.trailing_zeros();
    for i in 0..n {
        let j = reverse_bits(i, bits);
        if j > i {
            z.swap(i, j);
        }
    }
}

/// Computes a radix-2 iterative Cooley-Tukey FFT of `series`'s Y values
/// and returns their magnitudes against a signed frequency axis.
///
/// `series.len()` must be a power of two (and at least 2); otherwise this
/// returns a [`SimError::Precondition`] rather than producing undefined
/// results.
pub fn fft_compute(series: &Scatter) -> Result<Scatter, SimError> {
    let n = series.len();
    if n < 2 || !is_power_of_two(n) {
        return Err(SimError::Precondition(format!(
            "FFT input length must be a power of two >= 2, got {}",
            n
        )));
    }

    let mut z: Vec<Complex64> = series.points().iter().map(|p| Complex64::new(p.y, 0.0)).collect();

    bit_reverse_permute(&mut z);

    let mut len = 2usize;
    while len <= n {
        let ang = -2.0 * std::f64::consts::PI / len as f64;
        let w_len = Complex64::new(ang.cos(), ang.sin());
        let mut i = 0;
        while i < n {
            let mut w = Complex64::new(1.0, 0.0);
            for k in 0..len / 2 {
                let u = z[i + k];
                let t = w * z[i + k + len / 2];
                z[i + k] = u + t;
                z[i + k + len / 2] = u - t;
                w = w * w_len;
            }
            i += len;
        }
        len <<= 1;
    }

    let x0 = series.x_at(0) as f64;
    let x_last = series.x_at(n - 1) as f64;
    let sampling_rate = (n - 1) as f64 * 1e9 / (x_last - x0);

    let xs: Vec<i64> = (0..n)
        .map(|k| {
            let bin = if k < n / 2 {
                k as f64 * sampling_rate / n as f64
            } else {
                (k as f64 - n as f64) * sampling_rate / n as f64
            };
            bin.round() as i64
        })
        .collect();
    let ys: Vec<f64> = z.iter().map(|c| c.magnitude()).collect();

    trace!("computed {}-point FFT (Fs={:.3e} Sa/s)", n, sampling_rate);
    Ok(Scatter::from_xy(&xs, &ys))
}

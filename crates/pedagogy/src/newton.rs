//! Square roots by Newton-Raphson over an infinite list of estimates.
//!
//! `estimates(n, a0)` is the lazy list `a0, next(a0), next(next(a0)), ...`
//! where `next(x) = (x + n / x) / 2`. [`within`] and [`relative`] pick the
//! first estimate that is close enough to the one before it.

use lazy_list::List;
use lazy_list::Result;
use num_traits::Float;

/// Newton-Raphson estimates of the square root of `n`, starting from `a0`.
pub fn estimates<F: Float + 'static>(n: F, a0: F) -> List<F> {
    let two = F::one() + F::one();
    return List::iterate(move |x: &F| (*x + n / *x) / two, a0);
}

/// The first element of `approx` that differs from its predecessor by at
/// most `eps`.
///
/// Fails if `approx` ends before that happens.
pub fn within<F: Float + 'static>(eps: F, approx: &List<F>) -> Result<F> {
    return converge(approx, |a, b| (a - b).abs() <= eps);
}

/// Like [`within`], but the tolerance scales with the estimate. Better for
/// very small and very large numbers.
pub fn relative<F: Float + 'static>(eps: F, approx: &List<F>) -> Result<F> {
    return converge(approx, |a, b| (a - b).abs() <= eps * b.abs());
}

/// Square root of `n` from initial guess `a0` with absolute tolerance `eps`.
pub fn sqrt<F: Float + 'static>(a0: F, eps: F, n: F) -> Result<F> {
    return within(eps, &estimates(n, a0));
}

/// Square root of `n` from initial guess `a0` with relative tolerance `eps`.
pub fn relative_sqrt<F: Float + 'static>(a0: F, eps: F, n: F) -> Result<F> {
    return relative(eps, &estimates(n, a0));
}

fn converge<F, P>(approx: &List<F>, close: P) -> Result<F>
where
    F: Float + 'static,
    P: Fn(F, F) -> bool,
{
    let mut rest = approx.clone();
    loop {
        let a = rest.index(0)?;
        let b = rest.index(1)?;
        if close(a, b) {
            return Ok(b);
        }
        rest = rest.drop(1);
    }
}

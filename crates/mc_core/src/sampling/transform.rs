//! Inverse-CDF transform from uniform to exponential variates.
//!
//! The exponential CDF with mean `xi` is `F(x) = 1 - exp(-x / xi)`. Since
//! `1 - U` and `U` have the same distribution, the inverse can be applied
//! as `x = -xi * ln(r)` for `r` uniform in (0, 1].

use rand::distributions::OpenClosed01;
use rand::Rng;
use rand_distr::Distribution;

use super::config::validate_xi;
use super::error::{ConfigError, SamplingError};

/// Returns `true` if `r` is a usable uniform variate, i.e. lies in (0, 1].
///
/// NaN, zero, negative values and values above one are all rejected.
#[inline]
pub fn is_valid_uniform(r: f64) -> bool {
    r > 0.0 && r <= 1.0
}

/// Exponential distribution with mean `xi`, sampled by inverse CDF.
///
/// # Examples
///
/// ```rust
/// use mc_core::sampling::ExponentialInverseCdf;
///
/// let exp = ExponentialInverseCdf::new(1.0).unwrap();
/// assert_eq!(exp.transform(1.0).unwrap(), 0.0);
/// assert!((exp.transform((-1.0_f64).exp()).unwrap() - 1.0).abs() < 1e-12);
/// assert!(exp.transform(0.0).is_err());
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ExponentialInverseCdf {
    xi: f64,
}

impl ExponentialInverseCdf {
    /// Creates the transform for mean `xi`.
    ///
    /// # Errors
    ///
    /// [`ConfigError::InvalidRate`] unless `xi` is positive and finite.
    pub fn new(xi: f64) -> Result<Self, ConfigError> {
        validate_xi(xi)?;
        Ok(Self { xi })
    }

    /// Wraps an `xi` that has already passed [`validate_xi`].
    #[inline]
    pub(crate) fn from_validated(xi: f64) -> Self {
        Self { xi }
    }

    /// The mean of the distribution.
    #[inline]
    pub fn xi(&self) -> f64 {
        self.xi
    }

    /// Maps a uniform variate in (0, 1] to an exponential variate `x >= 0`.
    ///
    /// # Errors
    ///
    /// [`SamplingError::OutOfDomain`] if `r` is outside (0, 1]; in
    /// particular zero never reaches the logarithm.
    #[inline]
    pub fn transform(&self, r: f64) -> Result<f64, SamplingError> {
        if !is_valid_uniform(r) {
            return Err(SamplingError::OutOfDomain(r));
        }
        Ok(self.apply(r))
    }

    /// Unchecked transform; callers guarantee `r` is in (0, 1].
    #[inline]
    pub(crate) fn apply(&self, r: f64) -> f64 {
        let x = -self.xi * r.ln();
        // ln(1) gives -0.0 after negation; report it as +0.0.
        if x == 0.0 {
            0.0
        } else {
            x
        }
    }
}

impl Distribution<f64> for ExponentialInverseCdf {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> f64 {
        let r: f64 = rng.sample(OpenClosed01);
        self.apply(r)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_new_rejects_bad_xi() {
        assert!(ExponentialInverseCdf::new(0.0).is_err());
        assert!(ExponentialInverseCdf::new(-2.0).is_err());
        assert!(ExponentialInverseCdf::new(f64::NAN).is_err());
    }

    #[test]
    fn test_transform_one_is_zero() {
        let exp = ExponentialInverseCdf::new(3.0).unwrap();
        let x = exp.transform(1.0).unwrap();
        assert_eq!(x, 0.0);
        assert!(x.is_sign_positive());
    }

    #[test]
    fn test_transform_rejects_zero() {
        let exp = ExponentialInverseCdf::new(1.0).unwrap();
        assert_eq!(exp.transform(0.0), Err(SamplingError::OutOfDomain(0.0)));
    }

    #[test]
    fn test_transform_rejects_out_of_domain() {
        let exp = ExponentialInverseCdf::new(1.0).unwrap();
        for r in [-0.5, 1.5, f64::NAN, f64::INFINITY] {
            assert!(exp.transform(r).is_err(), "r = {} should be rejected", r);
        }
    }

    #[test]
    fn test_transform_scales_with_xi() {
        let unit = ExponentialInverseCdf::new(1.0).unwrap();
        let scaled = ExponentialInverseCdf::new(2.5).unwrap();
        let r = 0.3;
        assert_relative_eq!(
            scaled.transform(r).unwrap(),
            2.5 * unit.transform(r).unwrap(),
            epsilon = 1e-12
        );
    }

    #[test]
    fn test_transform_is_inverse_cdf() {
        let xi = 1.7;
        let exp = ExponentialInverseCdf::new(xi).unwrap();
        for r in [0.01, 0.2, 0.5, 0.9, 0.999] {
            let x = exp.transform(r).unwrap();
            // Survival function exp(-x / xi) recovers r.
            assert_relative_eq!((-x / xi).exp(), r, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_distribution_mean_matches_rand_distr() {
        let mut rng = StdRng::seed_from_u64(11);
        let n = 100_000;
        let ours = ExponentialInverseCdf::new(2.0).unwrap();
        let reference = rand_distr::Exp::new(0.5).unwrap();

        let ours_mean = (0..n).map(|_| ours.sample(&mut rng)).sum::<f64>() / n as f64;
        let reference_mean = (0..n).map(|_| reference.sample(&mut rng)).sum::<f64>() / n as f64;

        assert_relative_eq!(ours_mean, 2.0, max_relative = 0.02);
        assert_relative_eq!(ours_mean, reference_mean, max_relative = 0.03);
    }

    #[test]
    fn test_is_valid_uniform() {
        assert!(is_valid_uniform(1.0));
        assert!(is_valid_uniform(f64::MIN_POSITIVE));
        assert!(!is_valid_uniform(0.0));
        assert!(!is_valid_uniform(-0.0));
        assert!(!is_valid_uniform(f64::NAN));
    }
}

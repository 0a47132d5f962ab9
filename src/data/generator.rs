use rand::Rng;
use rand_distr::{Distribution, Normal, NormalError, Uniform};
use thiserror::Error;

use super::model::{SamplePair, SampleSet};

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("x range [{min}, {max}) is empty")]
    EmptyRange { min: f64, max: f64 },

    #[error("x range [{min}, {max}) is too wide to sample")]
    RangeOverflow { min: f64, max: f64 },

    #[error("{name} must be finite, got {value}")]
    NonFinite { name: &'static str, value: f64 },

    #[error("noise standard deviation must not be negative, got {0}")]
    NegativeNoise(f64),

    #[error("invalid noise distribution: {0}")]
    InvalidNoise(#[from] NormalError),
}

// ---------------------------------------------------------------------------
// LinearModel – generation parameters
// ---------------------------------------------------------------------------

/// Parameters of the synthetic data: `y = intercept + slope·x + e`,
/// `x ~ U[x_min, x_max)`, `e ~ N(0, noise_std_dev²)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearModel {
    pub intercept: f64,
    pub slope: f64,
    pub x_min: f64,
    pub x_max: f64,
    pub noise_std_dev: f64,
    pub sample_count: usize,
}

impl Default for LinearModel {
    fn default() -> Self {
        Self {
            intercept: 4.0,
            slope: 3.0,
            x_min: 0.0,
            x_max: 2.0,
            noise_std_dev: 1.0,
            sample_count: 100,
        }
    }
}

impl LinearModel {
    pub fn validate(&self) -> Result<(), ModelError> {
        for (name, value) in [
            ("intercept", self.intercept),
            ("slope", self.slope),
            ("x_min", self.x_min),
            ("x_max", self.x_max),
            ("noise_std_dev", self.noise_std_dev),
        ] {
            if !value.is_finite() {
                return Err(ModelError::NonFinite { name, value });
            }
        }
        if self.x_min >= self.x_max {
            return Err(ModelError::EmptyRange {
                min: self.x_min,
                max: self.x_max,
            });
        }
        // `Uniform::new` panics when the width overflows.
        if !(self.x_max - self.x_min).is_finite() {
            return Err(ModelError::RangeOverflow {
                min: self.x_min,
                max: self.x_max,
            });
        }
        // `Normal::new` accepts a negative std_dev.
        if self.noise_std_dev < 0.0 {
            return Err(ModelError::NegativeNoise(self.noise_std_dev));
        }
        Normal::new(0.0, self.noise_std_dev)?;
        Ok(())
    }

    /// Noise-free expectation of `y` at `x`.
    pub fn predict(&self, x: f64) -> f64 {
        self.intercept + self.slope * x
    }

    /// Draw `sample_count` pairs from `source`, one x then one noise value
    /// per pair.
    pub fn generate<S: SampleSource + ?Sized>(&self, source: &mut S) -> SampleSet {
        let pairs = (0..self.sample_count)
            .map(|_| {
                let x = source.draw_x();
                let y = self.predict(x) + source.draw_noise();
                SamplePair { x, y }
            })
            .collect();
        SampleSet::from_pairs(pairs)
    }

    /// Generate a fresh sample set from the unseeded thread RNG.
    pub fn generate_random(&self) -> Result<SampleSet, ModelError> {
        let mut source = RandomSource::new(rand::thread_rng(), self)?;
        let samples = self.generate(&mut source);
        log::info!("Generated {} samples", samples.len());
        Ok(samples)
    }
}

// ---------------------------------------------------------------------------
// Sample sources
// ---------------------------------------------------------------------------

/// Supplies the random inputs of [`LinearModel::generate`].
pub trait SampleSource {
    /// Next input value.
    fn draw_x(&mut self) -> f64;
    /// Next additive noise value.
    fn draw_noise(&mut self) -> f64;
}

/// [`SampleSource`] backed by a `rand` RNG.
#[derive(Debug, Clone)]
pub struct RandomSource<R> {
    rng: R,
    x_dist: Uniform<f64>,
    noise_dist: Normal<f64>,
}

impl<R: Rng> RandomSource<R> {
    pub fn new(rng: R, model: &LinearModel) -> Result<Self, ModelError> {
        model.validate()?;
        Ok(Self {
            rng,
            x_dist: Uniform::new(model.x_min, model.x_max),
            noise_dist: Normal::new(0.0, model.noise_std_dev)?,
        })
    }
}

impl<R: Rng> SampleSource for RandomSource<R> {
    fn draw_x(&mut self) -> f64 {
        self.x_dist.sample(&mut self.rng)
    }

    fn draw_noise(&mut self) -> f64 {
        self.noise_dist.sample(&mut self.rng)
    }
}

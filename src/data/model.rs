use std::fmt;

// ---------------------------------------------------------------------------
// SamplePair – one generated point
// ---------------------------------------------------------------------------

/// A single generated `(x, y)` point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SamplePair {
    pub x: f64,
    pub y: f64,
}

// ---------------------------------------------------------------------------
// LineFit – ordinary least-squares line
// ---------------------------------------------------------------------------

/// Least-squares line `y = intercept + slope * x`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineFit {
    pub intercept: f64,
    pub slope: f64,
}

impl fmt::Display for LineFit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "y = {:.3} + {:.3}·x", self.intercept, self.slope)
    }
}

// ---------------------------------------------------------------------------
// SampleSet – the complete generated dataset
// ---------------------------------------------------------------------------

/// An ordered, immutable set of generated pairs.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SampleSet {
    pairs: Vec<SamplePair>,
}

impl SampleSet {
    pub fn from_pairs(pairs: Vec<SamplePair>) -> Self {
        SampleSet { pairs }
    }

    /// Number of pairs.
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    /// Whether the set is empty.
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, SamplePair> {
        self.pairs.iter()
    }

    pub fn xs(&self) -> impl Iterator<Item = f64> + '_ {
        self.pairs.iter().map(|p| p.x)
    }

    pub fn ys(&self) -> impl Iterator<Item = f64> + '_ {
        self.pairs.iter().map(|p| p.y)
    }

    /// Fit `y = a + b·x` by ordinary least squares.
    ///
    /// Returns `None` with fewer than two pairs or when every `x` is equal.
    pub fn least_squares(&self) -> Option<LineFit> {
        if self.pairs.len() < 2 {
            return None;
        }
        let n = self.pairs.len() as f64;
        let mean_x = self.xs().sum::<f64>() / n;
        let mean_y = self.ys().sum::<f64>() / n;

        let (sxx, sxy) = self.pairs.iter().fold((0.0, 0.0), |(sxx, sxy), p| {
            let dx = p.x - mean_x;
            (sxx + dx * dx, sxy + dx * (p.y - mean_y))
        });
        if sxx.abs() < f64::EPSILON {
            return None;
        }

        let slope = sxy / sxx;
        Some(LineFit {
            intercept: mean_y - slope * mean_x,
            slope,
        })
    }
}

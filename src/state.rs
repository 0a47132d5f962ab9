use crate::data::generator::{LinearModel, ModelError};
use crate::data::model::{LineFit, SampleSet};

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering.
pub struct AppState {
    /// Generation parameters.
    pub model: LinearModel,

    /// Points currently on screen.
    pub samples: SampleSet,

    /// Least-squares line of `samples` (cached).
    pub fit: Option<LineFit>,

    /// Status / error message shown in the UI.
    pub status_message: Option<String>,
}

impl AppState {
    /// Build the state from an initial sample set.
    pub fn new(model: LinearModel, samples: SampleSet) -> Self {
        let mut state = Self {
            model,
            samples: SampleSet::default(),
            fit: None,
            status_message: None,
        };
        state.set_samples(samples);
        state
    }

    /// Generate the initial sample set from the thread RNG.
    pub fn generate(model: LinearModel) -> Result<Self, ModelError> {
        let samples = model.generate_random()?;
        Ok(Self::new(model, samples))
    }

    /// Replace the samples and refresh the cached fit.
    pub fn set_samples(&mut self, samples: SampleSet) {
        self.fit = samples.least_squares();
        if let Some(fit) = &self.fit {
            log::debug!("Least-squares fit: {fit}");
        }
        self.samples = samples;
        self.status_message = None;
    }

    /// Draw a fresh sample set.
    pub fn regenerate(&mut self) {
        match self.model.generate_random() {
            Ok(samples) => self.set_samples(samples),
            Err(e) => {
                log::error!("Failed to generate samples: {e}");
                self.status_message = Some(format!("Error: {e}"));
            }
        }
    }

    /// One-line description for the top bar.
    pub fn summary(&self) -> String {
        match &self.fit {
            Some(fit) => format!("{} samples · fit {fit}", self.samples.len()),
            None => format!("{} samples", self.samples.len()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::SamplePair;

    #[test]
    fn generate_fills_default_sample_set() {
        let state = AppState::generate(LinearModel::default()).unwrap();
        assert_eq!(state.samples.len(), 100);
        assert!(state.fit.is_some());
        assert!(state.status_message.is_none());
    }

    #[test]
    fn regenerate_draws_new_samples() {
        let mut state = AppState::generate(LinearModel::default()).unwrap();
        let before = state.samples.clone();
        state.regenerate();
        assert_eq!(state.samples.len(), 100);
        assert_ne!(state.samples, before);
    }

    #[test]
    fn regenerate_reports_invalid_model() {
        let mut state = AppState::new(LinearModel::default(), SampleSet::default());
        state.model.x_max = state.model.x_min;
        state.regenerate();
        assert!(state.samples.is_empty());
        assert!(state.status_message.unwrap().starts_with("Error:"));
    }

    #[test]
    fn summary_includes_fit() {
        let samples = SampleSet::from_pairs(vec![
            SamplePair { x: 0.0, y: 4.0 },
            SamplePair { x: 1.0, y: 7.0 },
        ]);
        let state = AppState::new(LinearModel::default(), samples);
        assert_eq!(state.summary(), "2 samples · fit y = 4.000 + 3.000·x");

        let empty = AppState::new(LinearModel::default(), SampleSet::default());
        assert_eq!(empty.summary(), "0 samples");
    }
}

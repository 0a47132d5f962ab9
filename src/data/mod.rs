/// Data layer: core types and synthetic generation.
///
/// Architecture:
/// ```text
///   LinearModel (intercept, slope, x range, noise)
///        │
///        ▼
///   ┌───────────┐
///   │ generator │  SampleSource → x, noise → y = a + b·x + e
///   └───────────┘
///        │
///        ▼
///   ┌───────────┐
///   │ SampleSet │  Vec<SamplePair>, least-squares summary
///   └───────────┘
/// ```

pub mod generator;
pub mod model;

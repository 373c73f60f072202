//! Thompson Sampling ranking.
//!
//! Given observed positive/negative outcome counts (and optional prior
//! pseudo-counts) for a set of candidates, draw one score per candidate from
//! its Beta posterior and rank candidates by that score. Randomness comes
//! through [`UniformSource`], so rankings are reproducible under a seeded or
//! scripted source.
//!
//! ```no_run
//! use thomsample::{CandidateSet, ThompsonSampler};
//!
//! let set = CandidateSet::from_records(vec![
//!     ("bookmarks", 12.0, 3.0),
//!     ("history", 4.0, 4.0),
//!     ("tabs", 0.0, 0.0),
//! ])?;
//! let ranking = ThompsonSampler::new().rank(set);
//! for (key, score) in ranking.iter() {
//!     println!("{key}: {score:.3}");
//! }
//! # Ok::<(), thomsample::SamplingError>(())
//! ```

pub mod config;
pub mod error;
pub mod ranking;
pub mod thompson;
pub mod uniform;
pub mod variates;

pub use config::{
    default_config_path, load_config, load_config_from, save_config_to, PriorConfig,
    SamplerConfig,
};
pub use error::{ErrorKind, ErrorReport, SamplingError};
pub use ranking::{sort_keys_values, Ranking};
pub use thompson::{thompson_sample_sort, CandidateSet, Priors, ThompsonSampler};
pub use uniform::{ReplaySource, RngSource, UniformSource};
pub use variates::{
    beta_from_gammas, beta_mean, beta_variance, sample_beta, sample_gamma, sample_gamma_with,
    sample_normal, Shape,
};

//! Thompson Sampling ranking over Beta posteriors.
//!
//! Each candidate carries observed positive/negative outcome counts plus prior
//! pseudo-counts. Ranking draws one value from each candidate's posterior
//! Beta(obs_positive + prior_positive, obs_negative + prior_negative) and
//! orders candidates by the draw, so candidates with uncertain posteriors
//! still surface near the top from time to time while those known to perform
//! well are usually ranked first.
//!
//! Ranking is stateless: every call draws fresh scores and nothing is kept
//! between calls.

use rand::rngs::ThreadRng;

use crate::config::{load_config, PriorConfig, SamplerConfig};
use crate::error::SamplingError;
use crate::ranking::Ranking;
use crate::uniform::{RngSource, UniformSource};
use crate::variates::{beta_mean, sample_beta, Shape};

/// Per-candidate prior pseudo-counts.
#[derive(Debug, Clone, PartialEq)]
pub struct Priors {
    pub positive: Vec<f64>,
    pub negative: Vec<f64>,
}

impl Priors {
    /// Beta(1, 1) for `n` candidates.
    pub fn uniform(n: usize) -> Self {
        Self::constant(n, PriorConfig::default())
    }

    pub fn constant(n: usize, prior: PriorConfig) -> Self {
        Self {
            positive: vec![prior.positive; n],
            negative: vec![prior.negative; n],
        }
    }
}

/// Candidates with validated posterior shapes, ready to be sampled.
#[derive(Debug, Clone)]
pub struct CandidateSet<K> {
    keys: Vec<K>,
    alpha: Vec<Shape>,
    beta: Vec<Shape>,
}

impl<K> CandidateSet<K> {
    /// Validate observations and priors for `keys`.
    ///
    /// Omitted priors default to 1.0 for every candidate. Fails when any
    /// sequence length differs from `keys.len()`, when a count is negative or
    /// non-finite, when a prior is not strictly positive, or when
    /// `count + prior` falls below 1 (the Gamma sampler's domain).
    pub fn new(
        keys: Vec<K>,
        obs_positive: Vec<f64>,
        obs_negative: Vec<f64>,
        priors: Option<Priors>,
    ) -> Result<Self, SamplingError> {
        let priors = priors.unwrap_or_else(|| Priors::uniform(keys.len()));
        Self::build(keys, obs_positive, obs_negative, priors)
    }

    /// Like [`CandidateSet::new`], with the same prior for every candidate.
    pub fn with_default_prior(
        keys: Vec<K>,
        obs_positive: Vec<f64>,
        obs_negative: Vec<f64>,
        prior: PriorConfig,
    ) -> Result<Self, SamplingError> {
        let n = keys.len();
        Self::build(keys, obs_positive, obs_negative, Priors::constant(n, prior))
    }

    /// Build from `(key, positive, negative)` records with uniform priors.
    pub fn from_records<I>(records: I) -> Result<Self, SamplingError>
    where
        I: IntoIterator<Item = (K, f64, f64)>,
    {
        let mut keys = Vec::new();
        let mut positive = Vec::new();
        let mut negative = Vec::new();
        for (key, pos, neg) in records {
            keys.push(key);
            positive.push(pos);
            negative.push(neg);
        }
        Self::new(keys, positive, negative, None)
    }

    fn build(
        keys: Vec<K>,
        obs_positive: Vec<f64>,
        obs_negative: Vec<f64>,
        priors: Priors,
    ) -> Result<Self, SamplingError> {
        let n = keys.len();
        check_len("obs_positive", n, obs_positive.len())?;
        check_len("obs_negative", n, obs_negative.len())?;
        check_len("prior_positive", n, priors.positive.len())?;
        check_len("prior_negative", n, priors.negative.len())?;

        let alpha = posterior_shapes(
            ("obs_positive", &obs_positive),
            ("prior_positive", &priors.positive),
        )?;
        let beta = posterior_shapes(
            ("obs_negative", &obs_negative),
            ("prior_negative", &priors.negative),
        )?;

        Ok(Self { keys, alpha, beta })
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    pub fn keys(&self) -> &[K] {
        &self.keys
    }

    /// Posterior Beta parameters `(alpha, beta)` for candidate `index`.
    pub fn posterior(&self, index: usize) -> Option<(f64, f64)> {
        Some((self.alpha.get(index)?.get(), self.beta.get(index)?.get()))
    }

    /// Posterior means in input order; the deterministic counterpart of a draw.
    pub fn posterior_means(&self) -> Vec<f64> {
        self.alpha
            .iter()
            .zip(&self.beta)
            .map(|(a, b)| beta_mean(a.get(), b.get()))
            .collect()
    }
}

fn check_len(field: &'static str, expected: usize, actual: usize) -> Result<(), SamplingError> {
    if expected != actual {
        return Err(SamplingError::LengthMismatch {
            field,
            expected,
            actual,
        });
    }
    Ok(())
}

fn posterior_shapes(
    (obs_field, counts): (&'static str, &[f64]),
    (prior_field, pseudo_counts): (&'static str, &[f64]),
) -> Result<Vec<Shape>, SamplingError> {
    counts
        .iter()
        .zip(pseudo_counts)
        .enumerate()
        .map(|(index, (&count, &pseudo))| {
            if !count.is_finite() || count < 0.0 {
                return Err(SamplingError::InvalidObservation {
                    field: obs_field,
                    index,
                    value: count,
                });
            }
            if !pseudo.is_finite() || pseudo <= 0.0 {
                return Err(SamplingError::InvalidPrior {
                    field: prior_field,
                    index,
                    value: pseudo,
                });
            }
            Shape::new(count + pseudo)
        })
        .collect()
}

/// Draw one posterior sample per candidate and rank by it.
///
/// Scores are drawn in input order. With `do_sort` the result is ordered by
/// score, descending; otherwise keys stay in input order.
pub fn thompson_sample_sort<K, U>(
    set: CandidateSet<K>,
    do_sort: bool,
    uniform: &mut U,
) -> Ranking<K>
where
    U: UniformSource + ?Sized,
{
    log::debug!(
        "Thompson sampling {} candidates (sort={})",
        set.len(),
        do_sort
    );

    let mut scores = Vec::with_capacity(set.len());
    for (&a, &b) in set.alpha.iter().zip(&set.beta) {
        scores.push(sample_beta(a, b, &mut *uniform));
    }

    let degenerate = scores.iter().filter(|s| s.is_nan()).count();
    if degenerate > 0 {
        log::warn!(
            "{} of {} Beta draws were NaN (both Gamma draws zero)",
            degenerate,
            scores.len()
        );
    }

    let ranking = Ranking::from_parts(set.keys, scores);
    if do_sort {
        ranking.sorted()
    } else {
        ranking
    }
}

/// Ranks candidate sets with a configured uniform source.
///
/// Holds no ranking state; the only thing carried between calls is the
/// random source itself.
#[derive(Debug)]
pub struct ThompsonSampler<U> {
    source: U,
    config: SamplerConfig,
}

impl ThompsonSampler<RngSource<ThreadRng>> {
    pub fn new() -> Self {
        Self::from_config(SamplerConfig::default())
    }

    pub fn from_config(config: SamplerConfig) -> Self {
        Self::with_source(RngSource::thread(), config)
    }

    /// Use the config from ~/.thomsample/config.json, or defaults if absent.
    pub fn load() -> Result<Self, SamplingError> {
        Ok(Self::from_config(load_config()?))
    }
}

impl Default for ThompsonSampler<RngSource<ThreadRng>> {
    fn default() -> Self {
        Self::new()
    }
}

impl<U: UniformSource> ThompsonSampler<U> {
    pub fn with_source(source: U, config: SamplerConfig) -> Self {
        Self { source, config }
    }

    pub fn config(&self) -> &SamplerConfig {
        &self.config
    }

    pub fn source_mut(&mut self) -> &mut U {
        &mut self.source
    }

    /// Rank `set`, sorting when `config.sort` is set.
    pub fn rank<K>(&mut self, set: CandidateSet<K>) -> Ranking<K> {
        thompson_sample_sort(set, self.config.sort, &mut self.source)
    }

    /// Validate raw observations with the configured default prior, then rank.
    pub fn rank_observations<K>(
        &mut self,
        keys: Vec<K>,
        obs_positive: Vec<f64>,
        obs_negative: Vec<f64>,
    ) -> Result<Ranking<K>, SamplingError> {
        let set = CandidateSet::with_default_prior(
            keys,
            obs_positive,
            obs_negative,
            self.config.default_prior,
        )?;
        Ok(self.rank(set))
    }

    /// The candidate with the highest draw, or `None` for an empty set.
    pub fn select_best<K>(&mut self, set: CandidateSet<K>) -> Option<K> {
        let (keys, _) = thompson_sample_sort(set, true, &mut self.source).into_parts();
        keys.into_iter().next()
    }
}

//! Primitive random value provider.
//!
//! Wraps a seeded [`ChaCha8Rng`] behind the small contract the rest of the
//! crate draws from: identifiers, dates, bounded integers, weighted choices,
//! pseudo-words, subset sampling, and shuffling. Keeping the primitives in one
//! place decouples the graph logic from any specific random-number library,
//! and a single shared stream means one seed reproduces one whole session.

use chrono::{Duration, NaiveDate, NaiveDateTime};
use fake::Fake;
use fake::faker::name::raw::{FirstName, LastName};
use fake::locales::EN;
use rand::distr::Distribution;
use rand::distr::weighted::WeightedIndex;
use rand::seq::{IndexedRandom, SliceRandom};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use uuid::Uuid;

/// Letters used when assembling pseudo-words.
const VOWELS: [char; 5] = ['a', 'e', 'i', 'o', 'u'];
const CONSONANTS: [char; 21] = [
    'b', 'c', 'd', 'f', 'g', 'h', 'j', 'k', 'l', 'm', 'n', 'p', 'q', 'r', 's', 't', 'v', 'w', 'x',
    'y', 'z',
];

/// Supplies primitive random values from a single deterministic stream.
///
/// All draws consume the same underlying RNG, so reordering calls changes
/// output but never correctness. The same seed always reproduces the same
/// sequence of values.
#[derive(Debug, Clone)]
pub struct RandomProvider {
    rng: ChaCha8Rng,
}

impl RandomProvider {
    /// Creates a provider with a reproducible stream seeded from `seed`.
    #[must_use]
    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Creates a provider seeded from operating-system entropy.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self {
            rng: ChaCha8Rng::from_os_rng(),
        }
    }

    /// Returns a fresh identifier derived from the random stream.
    #[must_use]
    pub fn guid(&mut self) -> Uuid {
        Uuid::from_u128(self.rng.random())
    }

    /// Returns a uniform integer in the inclusive range `[min, max]`.
    ///
    /// An inverted range collapses to `min`.
    #[must_use]
    pub fn integer(&mut self, min: usize, max: usize) -> usize {
        if min >= max {
            return min;
        }
        self.rng.random_range(min..=max)
    }

    /// Returns an index into `weights` chosen proportionally to each weight.
    ///
    /// Falls back to index 0 when the weights cannot form a distribution
    /// (empty slice or an all-zero total).
    #[must_use]
    pub fn weighted(&mut self, weights: &[u32]) -> usize {
        WeightedIndex::new(weights.iter().copied())
            .map_or(0, |distribution| distribution.sample(&mut self.rng))
    }

    /// Builds a pronounceable pseudo-word of exactly `length` lowercase
    /// letters by alternating consonants and vowels.
    #[must_use]
    pub fn word(&mut self, length: usize) -> String {
        let vowel_first = self.rng.random_bool(0.5);
        (0..length)
            .map(|position| {
                let wants_vowel = (position & 1 == 0) == vowel_first;
                let letters: &[char] = if wants_vowel { &VOWELS } else { &CONSONANTS };
                letters.choose(&mut self.rng).copied().unwrap_or('a')
            })
            .collect()
    }

    /// Picks one element uniformly, or `None` for an empty slice.
    #[must_use]
    pub fn pick<'a, T>(&mut self, values: &'a [T]) -> Option<&'a T> {
        values.choose(&mut self.rng)
    }

    /// Samples up to `count` distinct elements in random order.
    ///
    /// Requests larger than the population clamp to the population size, so
    /// the result is never longer than `values`.
    #[must_use]
    pub fn pick_subset<T: Clone>(&mut self, values: &[T], count: usize) -> Vec<T> {
        let mut pool = values.to_vec();
        pool.shuffle(&mut self.rng);
        pool.truncate(count.min(values.len()));
        pool
    }

    /// Shuffles `values` in place.
    pub fn shuffle<T>(&mut self, values: &mut [T]) {
        values.shuffle(&mut self.rng);
    }

    /// Returns a plausible English first name.
    #[must_use]
    pub fn first_name(&mut self) -> String {
        FirstName(EN).fake_with_rng(&mut self.rng)
    }

    /// Returns a plausible English last name.
    #[must_use]
    pub fn last_name(&mut self) -> String {
        LastName(EN).fake_with_rng(&mut self.rng)
    }

    /// Returns a uniformly random moment within the given calendar year,
    /// formatted as an ISO-8601 timestamp at second precision with a trailing
    /// `Z` (e.g. `2017-03-04T12:34:56Z`).
    #[must_use]
    pub fn timestamp_in_year(&mut self, year: i32) -> String {
        let Some((start, seconds)) = year_bounds(year) else {
            return format!("{year:04}-01-01T00:00:00Z");
        };
        let offset = self.rng.random_range(0..seconds);
        let moment = start + Duration::seconds(offset);
        moment.format("%Y-%m-%dT%H:%M:%SZ").to_string()
    }
}

/// Returns the first instant of `year` and the year's length in seconds.
fn year_bounds(year: i32) -> Option<(NaiveDateTime, i64)> {
    let start = NaiveDate::from_ymd_opt(year, 1, 1)?.and_hms_opt(0, 0, 0)?;
    let end = NaiveDate::from_ymd_opt(year.checked_add(1)?, 1, 1)?.and_hms_opt(0, 0, 0)?;
    Some((start, (end - start).num_seconds()))
}

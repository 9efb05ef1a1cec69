//! Domain-flavoured random generators built on the primitive provider.
//!
//! This layer turns raw draws into the values the entity constructors need:
//! synthetic titles, year-anchored timestamps, bounded counts, and a
//! single-use pool of curated first names.

use crate::provider::RandomProvider;
use crate::words;

/// Year that `created` timestamps are anchored to.
const CREATED_YEAR: i32 = 2017;

/// Year that `modified` timestamps are anchored to.
const MODIFIED_YEAR: i32 = 2018;

/// Default inclusive bounds for [`Helpers::random_count`].
const COUNT_MIN: usize = 1;
const COUNT_MAX: usize = 10;

/// A pool of values handed out at most once each.
///
/// `take` removes and returns one uniformly random element; once the pool is
/// exhausted it yields `None` and callers fall back to an unconstrained
/// generator. The pool is exclusively owned by one [`Helpers`] instance for
/// the duration of a session.
#[derive(Debug, Clone)]
pub struct NamePool {
    values: Vec<String>,
}

impl NamePool {
    /// Creates a pool over the given values.
    #[must_use]
    pub const fn new(values: Vec<String>) -> Self {
        Self { values }
    }

    /// Removes and returns one random element, or `None` once exhausted.
    pub fn take(&mut self, provider: &mut RandomProvider) -> Option<String> {
        if self.values.is_empty() {
            return None;
        }
        let index = provider.integer(0, self.values.len().saturating_sub(1));
        if index < self.values.len() {
            Some(self.values.swap_remove(index))
        } else {
            None
        }
    }

    /// Removes and returns one random element, calling `fallback` once the
    /// pool is exhausted.
    pub fn take_or<F>(&mut self, provider: &mut RandomProvider, fallback: F) -> String
    where
        F: FnOnce(&mut RandomProvider) -> String,
    {
        let pooled = self.take(provider);
        pooled.unwrap_or_else(|| fallback(provider))
    }

    /// Number of values still available.
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Returns `true` once every value has been taken.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// Domain-specific random generators composed over a [`RandomProvider`].
#[derive(Debug, Clone)]
pub struct Helpers {
    provider: RandomProvider,
    first_names: NamePool,
}

impl Helpers {
    /// Wraps a provider and stocks the curated first-name pool.
    #[must_use]
    pub fn new(provider: RandomProvider) -> Self {
        let names = words::CURATED_FIRST_NAMES
            .iter()
            .map(|name| (*name).to_owned())
            .collect();
        Self {
            provider,
            first_names: NamePool::new(names),
        }
    }

    /// Uniform pick from the company-name list; repeats are allowed.
    #[must_use]
    pub fn company_name(&mut self) -> &'static str {
        self.provider.pick(&words::COMPANY_NAMES).copied().unwrap_or("")
    }

    /// Uniform pick from the title-word list; repeats are allowed.
    #[must_use]
    pub fn title_word(&mut self) -> &'static str {
        self.provider.pick(&words::TITLE_WORDS).copied().unwrap_or("")
    }

    /// Uniform pick from the buzzword list; repeats are allowed.
    #[must_use]
    pub fn buzz_word(&mut self) -> &'static str {
        self.provider.pick(&words::BUZZ_WORDS).copied().unwrap_or("")
    }

    /// Produces a synthetic title from one of six templates mixing
    /// buzzwords, company names, title words, and pseudo-words.
    ///
    /// The result is never empty.
    #[must_use]
    pub fn title(&mut self) -> String {
        match self.provider.integer(0, 5) {
            0 => self.title_word().to_owned(),
            1 => format!("{} {}", capitalize(self.buzz_word()), self.title_word()),
            2 => format!(
                "{} {}",
                capitalize(self.buzz_word()),
                capitalize(self.company_name())
            ),
            3 => format!(
                "{} {} {}",
                capitalize(self.buzz_word()),
                capitalize(self.buzz_word()),
                self.title_word()
            ),
            4 => {
                let length = self.random_count_between(4, 12);
                format!("{} {}", capitalize(self.buzz_word()), self.provider.word(length))
            }
            _ => format!(
                "{} {} {}",
                capitalize(self.buzz_word()),
                self.provider.word(12),
                self.provider.word(8)
            ),
        }
    }

    /// Random creation timestamp anchored to the coarse creation epoch.
    #[must_use]
    pub fn created(&mut self) -> String {
        self.provider.timestamp_in_year(CREATED_YEAR)
    }

    /// Random modification timestamp anchored to the coarse modification
    /// epoch.
    #[must_use]
    pub fn modified(&mut self) -> String {
        self.provider.timestamp_in_year(MODIFIED_YEAR)
    }

    /// Inclusive uniform count in the default `[1, 10]` range.
    #[must_use]
    pub fn random_count(&mut self) -> usize {
        self.random_count_between(COUNT_MIN, COUNT_MAX)
    }

    /// Inclusive uniform count in `[min, max]`.
    #[must_use]
    pub fn random_count_between(&mut self, min: usize, max: usize) -> usize {
        self.provider.integer(min, max)
    }

    /// Weighted count in `[0, max]` biased strongly toward 0.
    ///
    /// The weight of value `v` is proportional to `(max - v)^2`, which keeps
    /// generated subtrees small and bounded; `max` itself is never returned
    /// when `max > 0`.
    #[must_use]
    pub fn small_count(&mut self, max: usize) -> usize {
        let weights: Vec<u32> = (0..=max)
            .rev()
            .map(|v| u32::try_from(v.saturating_mul(v)).unwrap_or(u32::MAX))
            .collect();
        self.provider.weighted(&weights)
    }

    /// Weighted count in `[0, max]` biased strongly toward `max`.
    ///
    /// Inverse twin of [`Self::small_count`]: the weight of value `v` is
    /// proportional to `v^2`. Not exercised by the default graph build.
    #[must_use]
    pub fn large_count(&mut self, max: usize) -> usize {
        let weights: Vec<u32> = (0..=max)
            .map(|v| u32::try_from(v.saturating_mul(v)).unwrap_or(u32::MAX))
            .collect();
        self.provider.weighted(&weights)
    }

    /// Returns a first name from the curated pool, falling back to a fake
    /// name once the pool is exhausted.
    #[must_use]
    pub fn take_first_name(&mut self) -> String {
        self.first_names
            .take_or(&mut self.provider, RandomProvider::first_name)
    }

    /// Returns a plausible last name.
    #[must_use]
    pub fn last_name(&mut self) -> String {
        self.provider.last_name()
    }

    /// Fresh identifier from the shared stream.
    #[must_use]
    pub fn guid(&mut self) -> uuid::Uuid {
        self.provider.guid()
    }

    /// Samples up to `count` distinct elements from `values`.
    #[must_use]
    pub fn pick_subset<T: Clone>(&mut self, values: &[T], count: usize) -> Vec<T> {
        self.provider.pick_subset(values, count)
    }

    /// Number of curated first names not yet handed out.
    #[must_use]
    pub fn remaining_first_names(&self) -> usize {
        self.first_names.len()
    }
}

/// Uppercases the first character of `word`, leaving the rest untouched.
fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    chars.next().map_or_else(String::new, |first| {
        first.to_uppercase().chain(chars).collect()
    })
}

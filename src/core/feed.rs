use crate::core::compatibility::CompatibilityScorer;
use crate::core::error::MatchError;
use crate::core::fringe::FringeBoost;
use crate::core::random::{shuffle_head, RandomSource};
use crate::models::{ConnectionMode, FeedEntry, MatchingConfig, Profile};

/// Pagination and filtering options for one feed request.
///
/// `limit` and `offset` are taken as given; bounding them is the caller's job.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FeedOptions {
    pub limit: usize,
    pub offset: usize,
    pub include_outside_preferences: bool,
}

impl Default for FeedOptions {
    fn default() -> Self {
        Self {
            limit: 20,
            offset: 0,
            include_outside_preferences: false,
        }
    }
}

/// Main feed orchestrator
///
/// # Pipeline Stages
/// 1. Drop the viewer and candidates not seeking the connection mode
/// 2. Pool median of weekly likes received
/// 3. Compatibility, fringe boost and display probability per candidate
/// 4. Drop non-matches unless outside preferences are requested
/// 5. Sort by display probability, reshuffle the head, paginate
#[derive(Debug, Clone, Copy)]
pub struct FeedAssembler {
    scorer: CompatibilityScorer,
    fringe: FringeBoost,
    shuffle_window: usize,
}

impl FeedAssembler {
    pub fn new(config: &MatchingConfig) -> Self {
        Self {
            scorer: CompatibilityScorer::new(config),
            fringe: FringeBoost::new(config),
            shuffle_window: config.shuffle_window,
        }
    }

    pub fn with_default_config() -> Self {
        Self::new(&MatchingConfig::default())
    }

    /// Build a ranked feed for `viewer` out of `pool`.
    ///
    /// Only the first `shuffle_window` entries are reordered by `rng`; the
    /// rest stay in descending display-probability order.
    ///
    /// # Errors
    /// Propagates `MatchError::MalformedInput` from any scored pair.
    pub fn generate_feed<R: RandomSource + ?Sized>(
        &self,
        viewer: &Profile,
        pool: &[Profile],
        mode: ConnectionMode,
        options: &FeedOptions,
        rng: &mut R,
    ) -> Result<Vec<FeedEntry>, MatchError> {
        let candidates: Vec<&Profile> = pool
            .iter()
            .filter(|candidate| candidate.user_id != viewer.user_id)
            .filter(|candidate| candidate.seeks(mode))
            .collect();

        let median = median_likes_received(&candidates);

        let mut entries = Vec::with_capacity(candidates.len());
        for candidate in candidates {
            let compatibility = self.scorer.score(viewer, candidate)?;
            let fringe_boost = self.fringe.boost(candidate, viewer, median)?;
            let display_probability =
                candidate.visibility_score * fringe_boost * (compatibility.score as f64 / 100.0);
            let show_in_feed = options.include_outside_preferences || compatibility.is_match;

            if !show_in_feed {
                continue;
            }

            entries.push(FeedEntry {
                profile: candidate.clone(),
                compatibility,
                fringe_boost,
                display_probability,
                show_in_feed,
            });
        }

        entries.sort_by(|a, b| {
            b.display_probability
                .partial_cmp(&a.display_probability)
                .unwrap_or(std::cmp::Ordering::Equal)
        });

        shuffle_head(&mut entries, self.shuffle_window, rng);

        Ok(entries
            .into_iter()
            .skip(options.offset)
            .take(options.limit)
            .collect())
    }

    /// `generate_feed` driven by the thread-local generator
    pub fn generate_feed_with_thread_rng(
        &self,
        viewer: &Profile,
        pool: &[Profile],
        mode: ConnectionMode,
        options: &FeedOptions,
    ) -> Result<Vec<FeedEntry>, MatchError> {
        self.generate_feed(viewer, pool, mode, options, &mut rand::rng())
    }
}

impl Default for FeedAssembler {
    fn default() -> Self {
        Self::with_default_config()
    }
}

/// Middle element of the ascending likes-received list; 0 for an empty pool.
///
/// For even-sized pools this is the upper of the two middle values.
pub fn median_likes_received(candidates: &[&Profile]) -> f64 {
    let mut likes: Vec<u32> = candidates
        .iter()
        .map(|c| c.likes_received_this_week)
        .collect();
    likes.sort_unstable();

    likes.get(likes.len() / 2).map(|&l| l as f64).unwrap_or(0.0)
}

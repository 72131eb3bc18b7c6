use std::sync::Arc;

use serde::Serialize;
use thiserror::Error;
use tokio::sync::Mutex;
use tracing::{debug, warn};

use crate::domain::bans::{self, BanRule};
use crate::domain::photos::Photo;
use crate::domain::selection::{self, ExhaustedCandidates, Selection};
use crate::infrastructure::mars::PhotoSource;

/// Retry budget per invocation. Keeps an almost-exhausting ban configuration
/// from spinning the loop forever against the upstream API.
pub const MAX_ATTEMPTS: usize = 25;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RouletteStatus {
    #[default]
    Idle,
    Fetching,
    Success,
    Failed,
}

impl RouletteStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            RouletteStatus::Idle => "idle",
            RouletteStatus::Fetching => "fetching",
            RouletteStatus::Success => "success",
            RouletteStatus::Failed => "failed",
        }
    }
}

/// Immutable view of the roulette state, handed to the presentation layer.
#[derive(Debug, Clone, Serialize)]
pub struct RouletteSnapshot {
    pub status: RouletteStatus,
    pub photo: Option<Photo>,
    pub error: Option<String>,
    pub bans: Vec<BanRule>,
    pub generation: u64,
}

/// Terminal, user-visible failures of one invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RouletteError {
    #[error("all candidates banned")]
    ExhaustedCandidates,

    #[error("no unbanned photo found after {attempts} attempts")]
    NoResultFound { attempts: usize },
}

impl From<ExhaustedCandidates> for RouletteError {
    fn from(_: ExhaustedCandidates) -> Self {
        RouletteError::ExhaustedCandidates
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("no ban at index {0}")]
pub struct UnknownBanIndex(pub usize);

enum HuntOutcome {
    Found(Photo),
    Failed(RouletteError),
    /// A newer invocation started while this one was in flight.
    Superseded,
}

#[derive(Default)]
struct Inner {
    bans: Vec<BanRule>,
    status: RouletteStatus,
    photo: Option<Photo>,
    error: Option<String>,
    generation: u64,
}

impl Inner {
    fn snapshot(&self) -> RouletteSnapshot {
        RouletteSnapshot {
            status: self.status,
            photo: self.photo.clone(),
            error: self.error.clone(),
            bans: self.bans.clone(),
            generation: self.generation,
        }
    }
}

/// Owns the ban list, the displayed result, and the fetch-and-filter loop.
///
/// Every invocation carries a monotonic generation id; a completion is only
/// applied while its generation is still current, so the latest user intent
/// wins and stale completions are discarded. The mutex is never held across
/// an await of the photo source.
pub struct RouletteService {
    source: Arc<dyn PhotoSource>,
    inner: Mutex<Inner>,
}

impl RouletteService {
    pub fn new(source: Arc<dyn PhotoSource>) -> Self {
        Self::with_bans(source, Vec::new())
    }

    /// Start with a pre-populated ban list, without triggering a spin.
    /// Used by the one-shot CLI.
    pub fn with_bans(source: Arc<dyn PhotoSource>, bans: Vec<BanRule>) -> Self {
        Self {
            source,
            inner: Mutex::new(Inner {
                bans,
                ..Inner::default()
            }),
        }
    }

    pub async fn snapshot(&self) -> RouletteSnapshot {
        self.inner.lock().await.snapshot()
    }

    /// Run one invocation of the fetch-and-filter loop and return the state
    /// it left behind. Iterations within the invocation run strictly
    /// sequentially; concurrent invocations race on the generation id.
    pub async fn spin(&self) -> RouletteSnapshot {
        let generation = {
            let mut inner = self.inner.lock().await;
            inner.generation += 1;
            inner.status = RouletteStatus::Fetching;
            inner.error = None;
            inner.generation
        };

        let outcome = self.hunt(generation).await;

        let mut inner = self.inner.lock().await;
        if inner.generation != generation {
            debug!(generation, current = inner.generation, "discarding stale roulette result");
            return inner.snapshot();
        }

        match outcome {
            HuntOutcome::Found(photo) => {
                inner.status = RouletteStatus::Success;
                inner.photo = Some(photo);
            }
            HuntOutcome::Failed(err) => {
                inner.status = RouletteStatus::Failed;
                inner.error = Some(err.to_string());
                // The failure may stem from a ban the displayed photo now
                // matches; clear the slot so no banned photo stays exposed.
                inner.photo = None;
            }
            // Unreachable in practice: a superseded hunt implies the
            // generation moved on, which the check above already caught.
            HuntOutcome::Superseded => {}
        }

        inner.snapshot()
    }

    /// Append a ban rule and re-run the loop under the stricter filter.
    /// Values are accepted as-is; duplicates are permitted.
    pub async fn add_ban(&self, rule: BanRule) -> RouletteSnapshot {
        self.inner.lock().await.bans.push(rule);
        self.spin().await
    }

    /// Remove the ban at `index` (insertion order) and re-run the loop.
    pub async fn remove_ban(&self, index: usize) -> Result<RouletteSnapshot, UnknownBanIndex> {
        {
            let mut inner = self.inner.lock().await;
            if index >= inner.bans.len() {
                return Err(UnknownBanIndex(index));
            }
            inner.bans.remove(index);
        }
        Ok(self.spin().await)
    }

    async fn hunt(&self, generation: u64) -> HuntOutcome {
        for attempt in 1..=MAX_ATTEMPTS {
            let bans = {
                let inner = self.inner.lock().await;
                if inner.generation != generation {
                    return HuntOutcome::Superseded;
                }
                inner.bans.clone()
            };

            let selection = match draw_selection(&bans) {
                Ok(selection) => selection,
                Err(err) => return HuntOutcome::Failed(err.into()),
            };

            match self.source.photos(&selection).await {
                Ok(photos) => {
                    let unbanned = photos.into_iter().find(|photo| !bans::is_banned(&bans, photo));
                    if let Some(photo) = unbanned {
                        return HuntOutcome::Found(photo);
                    }
                    debug!(attempt, ?selection, "no unbanned photo in batch, retrying");
                }
                Err(err) => {
                    warn!(attempt, ?selection, error = %err, "photo fetch failed, retrying");
                }
            }
        }

        HuntOutcome::Failed(RouletteError::NoResultFound {
            attempts: MAX_ATTEMPTS,
        })
    }
}

/// Draw with a fresh thread-local RNG. Kept out of the async path so the
/// non-Send RNG never lives across an await.
fn draw_selection(bans: &[BanRule]) -> Result<Selection, ExhaustedCandidates> {
    let mut rng = rand::rng();
    selection::draw(bans, &mut rng)
}

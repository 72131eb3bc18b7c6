use rand::Rng;
use rand::seq::IndexedRandom;
use serde::Serialize;
use thiserror::Error;

use crate::domain::bans::{BanAttribute, BanRule};

/// Rovers the selector may query. Lowercase because the API takes the rover
/// name as a path segment.
pub const ROVERS: [&str; 3] = ["curiosity", "opportunity", "spirit"];

/// Cameras the selector may query.
pub const CAMERAS: [&str; 5] = ["FHAZ", "RHAZ", "MAST", "CHEMCAM", "NAVCAM"];

/// Inclusive sol range queried, an arbitrary slice of each mission.
pub const MIN_SOL: u32 = 1000;
pub const MAX_SOL: u32 = 2000;

/// A randomly drawn (rover, camera, sol) query triple. Ephemeral: one is
/// drawn per fetch attempt and discarded afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Selection {
    pub rover: &'static str,
    pub camera: &'static str,
    pub sol: u32,
}

/// Every rover or every camera is banned, so no valid Selection exists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("all candidates banned")]
pub struct ExhaustedCandidates;

/// Candidate values for `attribute` not excluded by any ban rule.
pub fn allowed(
    candidates: &[&'static str],
    attribute: BanAttribute,
    bans: &[BanRule],
) -> Vec<&'static str> {
    candidates
        .iter()
        .copied()
        .filter(|candidate| !bans.iter().any(|rule| rule.bans_candidate(attribute, candidate)))
        .collect()
}

/// Draw a uniform random Selection from the unbanned candidates, or fail if
/// either candidate set is fully banned. Pure apart from the injected RNG.
pub fn draw<R: Rng + ?Sized>(bans: &[BanRule], rng: &mut R) -> Result<Selection, ExhaustedCandidates> {
    let rovers = allowed(&ROVERS, BanAttribute::Rover, bans);
    let cameras = allowed(&CAMERAS, BanAttribute::Camera, bans);

    let (Some(rover), Some(camera)) = (rovers.choose(rng).copied(), cameras.choose(rng).copied())
    else {
        return Err(ExhaustedCandidates);
    };

    Ok(Selection {
        rover,
        camera,
        sol: rng.random_range(MIN_SOL..=MAX_SOL),
    })
}

//! Geometric utility functions for distance calculations and arena bounds.

use geo::algorithm::Distance;
use geo::{Euclidean, Point};
use rand::Rng;

use super::params::Params;

/// Euclidean distance between two positions.
pub fn distance(a: &Point<f32>, b: &Point<f32>) -> f32 {
    Euclidean.distance(a, b)
}

/// Clamps a position to the arena interior, keeping `params.arena_margin` from every edge.
///
/// A non-finite coordinate stays non-finite so that the caller can detect it.
pub fn clamp_to_arena(pos: Point<f32>, params: &Params) -> Point<f32> {
    let margin = params.arena_margin;
    Point::new(
        pos.x().clamp(margin, params.arena_width - margin),
        pos.y().clamp(margin, params.arena_height - margin),
    )
}

/// Distance from a position to the closest arena edge.
pub fn boundary_distance(pos: &Point<f32>, params: &Params) -> f32 {
    let left = pos.x();
    let right = params.arena_width - pos.x();
    let top = pos.y();
    let bottom = params.arena_height - pos.y();
    left.min(right).min(top.min(bottom))
}

/// Uniformly random position at least `params.spawn_margin` away from every edge.
pub fn random_point<R: Rng + ?Sized>(rng: &mut R, params: &Params) -> Point<f32> {
    let margin = params.spawn_margin;
    Point::new(
        rng.random_range(margin..params.arena_width - margin),
        rng.random_range(margin..params.arena_height - margin),
    )
}

/// Returns `true` if both coordinates are finite.
pub fn is_finite(pos: &Point<f32>) -> bool {
    pos.x().is_finite() && pos.y().is_finite()
}

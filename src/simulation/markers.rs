//! Transient markers shown where offspring were born.

use std::collections::VecDeque;

use geo::Point;

/// A reproduction marker.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Marker {
    /// Where the offspring appeared.
    pub pos: Point<f32>,
    /// Ticks until the marker disappears.
    pub remaining: u32,
}

/// Bounded set of active markers, oldest first.
///
/// When the pool is full a new marker replaces the oldest one.
#[derive(Debug, Clone)]
pub struct MarkerPool {
    markers: VecDeque<Marker>,
    capacity: usize,
    lifetime: u32,
}

impl MarkerPool {
    /// Creates an empty pool holding at most `capacity` markers of `lifetime` ticks.
    pub fn new(capacity: usize, lifetime: u32) -> Self {
        Self {
            markers: VecDeque::with_capacity(capacity),
            capacity,
            lifetime,
        }
    }

    /// Adds a marker at `pos`, recycling the oldest one if the pool is full.
    pub fn spawn(&mut self, pos: Point<f32>) {
        if self.capacity == 0 || self.lifetime == 0 {
            return;
        }
        if self.markers.len() >= self.capacity {
            self.markers.pop_front();
        }
        self.markers.push_back(Marker {
            pos,
            remaining: self.lifetime,
        });
    }

    /// Counts every marker down by one tick and drops the expired ones.
    pub fn advance(&mut self) {
        for marker in &mut self.markers {
            marker.remaining = marker.remaining.saturating_sub(1);
        }
        self.markers.retain(|m| m.remaining > 0);
    }

    /// Iterates over active markers, oldest first.
    pub fn iter(&self) -> impl Iterator<Item = &Marker> + '_ {
        self.markers.iter()
    }

    /// Number of active markers.
    pub fn len(&self) -> usize {
        self.markers.len()
    }

    /// Returns `true` when no marker is active.
    pub fn is_empty(&self) -> bool {
        self.markers.is_empty()
    }

    /// Ticks a fresh marker stays visible.
    pub fn lifetime(&self) -> u32 {
        self.lifetime
    }
}

//! Event logging system for displaying recent simulation events.

use std::collections::VecDeque;

use super::events::{DeathCause, SimulationEvent};

/// A logged event for display in the UI.
#[derive(Debug, Clone)]
pub struct LoggedEvent {
    /// Tick when the event occurred
    pub tick: u64,
    /// Human-readable description of the event
    pub description: String,
    /// Color hint for the event (for UI display)
    pub color: EventColor,
}

/// Color categories for events
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventColor {
    /// Reproduction events (green)
    Reproduction,
    /// Predation events (red)
    Predation,
    /// Grazing (yellow)
    Grazing,
    /// Death events (gray)
    Death,
}

/// Event log that tracks recent simulation events
#[derive(Debug, Clone)]
pub struct EventLog {
    /// Recent events, newest first
    events: VecDeque<LoggedEvent>,
    /// Maximum number of events to keep
    max_events: usize,
}

impl Default for EventLog {
    fn default() -> Self {
        Self::new(20)
    }
}

impl EventLog {
    /// Creates a new event log with specified capacity
    pub fn new(max_events: usize) -> Self {
        Self {
            events: VecDeque::with_capacity(max_events),
            max_events,
        }
    }

    /// Adds a new event to the log
    pub fn log(&mut self, tick: u64, description: String, color: EventColor) {
        self.events.push_front(LoggedEvent {
            tick,
            description,
            color,
        });

        // Keep only the most recent events
        while self.events.len() > self.max_events {
            self.events.pop_back();
        }
    }

    /// Logs a simulation event. Sprouting grass is too frequent to be worth a line.
    pub fn record(&mut self, tick: u64, event: &SimulationEvent) {
        match event {
            SimulationEvent::Consumed {
                eater_species,
                eaten_species,
                energy,
                ..
            } => {
                let color = if eaten_species.is_stationary() {
                    EventColor::Grazing
                } else {
                    EventColor::Predation
                };
                self.log(
                    tick,
                    format!(
                        "{} ate {} (+{:.0})",
                        eater_species.name(),
                        eaten_species.name(),
                        energy
                    ),
                    color,
                );
            }
            SimulationEvent::Reproduced { species, .. } => {
                self.log(
                    tick,
                    format!("{} born", species.name()),
                    EventColor::Reproduction,
                );
            }
            SimulationEvent::Died {
                species,
                cause: cause @ (DeathCause::Starved | DeathCause::InvalidState),
                ..
            } => {
                let reason = if *cause == DeathCause::Starved {
                    "starved"
                } else {
                    "removed (invalid state)"
                };
                self.log(
                    tick,
                    format!("{} {}", species.name(), reason),
                    EventColor::Death,
                );
            }
            SimulationEvent::Died { .. } | SimulationEvent::Sprouted { .. } => {}
        }
    }

    /// Returns all events, newest first
    pub fn events(&self) -> &VecDeque<LoggedEvent> {
        &self.events
    }

    /// Clears all events
    pub fn clear(&mut self) {
        self.events.clear();
    }
}

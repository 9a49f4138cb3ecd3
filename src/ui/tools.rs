use ecosim::simulation::ecosystem::Ecosystem;
use egui_macroquad::egui;
use macroquad::prelude::*;

use super::ui::UIState;
use crate::graphics;

/// Maximum distance, in arena units, between the cursor and a picked agent.
const PICK_RADIUS: f32 = 32.0;

/// What a left click in the arena does.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tool {
    Inspect,
    Place,
    Drag,
    Clone,
}

impl Tool {
    pub const ALL: [Tool; 4] = [Tool::Inspect, Tool::Place, Tool::Drag, Tool::Clone];

    pub fn label(self) -> &'static str {
        match self {
            Tool::Inspect => "Inspect",
            Tool::Place => "Place",
            Tool::Drag => "Drag",
            Tool::Clone => "Clone",
        }
    }
}

/// Applies the active tool to the arena. Runs between ticks.
pub fn handle_mouse(state: &mut UIState, ecosystem: &mut Ecosystem) {
    if is_mouse_button_released(MouseButton::Left) {
        state.dragging = None;
    }

    // Only if egui doesn't want pointer input
    let mut egui_wants_pointer = false;
    egui_macroquad::cfg(|ctx: &egui::Context| {
        egui_wants_pointer = ctx.wants_pointer_input();
    });
    if egui_wants_pointer {
        return;
    }

    let (mx, my) = mouse_position();
    let cursor = graphics::from_screen(mx, my, ecosystem.params());

    match state.tool {
        Tool::Inspect => {
            if is_mouse_button_pressed(MouseButton::Left) {
                state.selected_agent = ecosystem.agent_at(cursor, PICK_RADIUS);
            }
        }
        Tool::Place => {
            if is_mouse_button_pressed(MouseButton::Left) {
                let id = ecosystem.spawn(state.placement_species, cursor);
                log::debug!("placed {} {id:?}", state.placement_species.name());
            }
        }
        Tool::Drag => {
            if is_mouse_button_pressed(MouseButton::Left) {
                state.dragging = ecosystem.agent_at(cursor, PICK_RADIUS);
            }
            if let Some(id) = state.dragging {
                if is_mouse_button_down(MouseButton::Left) && !ecosystem.relocate(id, cursor) {
                    state.dragging = None;
                }
            }
        }
        Tool::Clone => {
            if is_mouse_button_pressed(MouseButton::Left) {
                if let Some(id) = ecosystem.agent_at(cursor, PICK_RADIUS) {
                    state.selected_agent = ecosystem.clone_agent(id);
                }
            }
        }
    }
}

use ecosim::simulation::ecosystem::Ecosystem;
use ecosim::simulation::population::AgentId;
use ecosim::simulation::species::Species;
use egui_macroquad::egui;
use std::collections::VecDeque;

use super::tools::Tool;

const MAX_HISTORY_POINTS: usize = 500;

pub struct UIState {
    pub stats_panel_width: f32,
    /// Population per species, indexed by `Species::index`, as (tick, count)
    pub population_history: Vec<VecDeque<(f64, f64)>>,
    last_history_tick: u64,
    history_interval: u64,
    pub tool: Tool,
    pub placement_species: Species,
    pub selected_agent: Option<AgentId>,
    pub dragging: Option<AgentId>,
    pub paused: bool,
    pub ticks_per_frame: u32,
    pub reset_requested: bool,
    pub status_message: Option<String>,
}

impl UIState {
    pub fn new() -> Self {
        Self {
            stats_panel_width: 300.0,
            population_history: vec![VecDeque::new(); Species::ALL.len()],
            last_history_tick: 0,
            history_interval: 20,
            tool: Tool::Inspect,
            placement_species: Species::Rabbit,
            selected_agent: None,
            dragging: None,
            paused: false,
            ticks_per_frame: 1,
            reset_requested: false,
            status_message: None,
        }
    }

    pub fn clear_history(&mut self) {
        for history in &mut self.population_history {
            history.clear();
        }
        self.last_history_tick = 0;
    }

    pub fn update_history(&mut self, ecosystem: &Ecosystem) {
        let tick = ecosystem.tick();
        let started = self.population_history.iter().any(|h| !h.is_empty());
        if started && tick < self.last_history_tick + self.history_interval {
            return;
        }
        self.last_history_tick = tick;

        let census = ecosystem.census();
        for species in Species::ALL {
            let history = &mut self.population_history[species.index()];
            history.push_back((tick as f64, census.count(species) as f64));
            if history.len() > MAX_HISTORY_POINTS {
                history.pop_front();
            }
        }
    }
}

pub fn draw_ui(state: &mut UIState, ecosystem: &Ecosystem) {
    egui_macroquad::ui(|egui_ctx| {
        let mut visuals = egui::Visuals::dark();
        visuals.override_text_color = Some(egui::Color32::from_rgb(240, 240, 240));
        visuals.widgets.noninteractive.fg_stroke.color = egui::Color32::from_rgb(220, 220, 220);
        egui_ctx.set_visuals(visuals);

        super::stats::draw_stats_panel(egui_ctx, state, ecosystem);
        super::events::draw_events_panel(egui_ctx, ecosystem);

        if let Some(id) = state.selected_agent {
            if let Some(agent) = ecosystem.population().get(id) {
                super::agents::draw_agent_detail_panel(egui_ctx, agent);
            } else {
                // Selected agent died
                state.selected_agent = None;
            }
        }
    });
}

pub fn process_egui() {
    egui_macroquad::draw();
}

use ecosim::simulation;
use ecosim::simulation::species::Species;
use egui_macroquad::egui;
use egui_plot::{Line, Plot, PlotPoints};

use super::tools::Tool;
use super::ui::UIState;

/// Display color of a species, matching the rendered agents
fn species_color(species: Species) -> egui::Color32 {
    let [r, g, b, _] = species.traits().color;
    egui::Color32::from_rgb(r, g, b)
}

pub(super) fn draw_stats_panel(
    egui_ctx: &egui::Context,
    state: &mut UIState,
    ecosystem: &simulation::ecosystem::Ecosystem,
) {
    egui::SidePanel::right("stats_panel")
        .default_width(state.stats_panel_width)
        .resizable(true)
        .show(egui_ctx, |ui| {
            ui.heading("Simulation Stats");
            ui.separator();

            ui.horizontal(|ui| {
                let pause_text = if state.paused { "▶ Resume" } else { "⏸ Pause" };
                if ui.button(pause_text).clicked() {
                    state.paused = !state.paused;
                }
                if ui.button("🔄 Reset").clicked() {
                    state.reset_requested = true;
                }
            });

            if let Some(ref msg) = state.status_message {
                ui.label(msg);
            }

            ui.label("Ticks per frame");
            ui.add(egui::Slider::new(&mut state.ticks_per_frame, 1..=50));

            ui.separator();

            // Tools
            ui.label("Tool");
            ui.horizontal(|ui| {
                for tool in Tool::ALL {
                    ui.selectable_value(&mut state.tool, tool, tool.label());
                }
            });
            if state.tool == Tool::Place {
                ui.horizontal_wrapped(|ui| {
                    for species in Species::ALL {
                        ui.selectable_value(
                            &mut state.placement_species,
                            species,
                            egui::RichText::new(species.name()).color(species_color(species)),
                        );
                    }
                });
            }

            ui.separator();

            ui.label(format!("Tick: {}", ecosystem.tick()));
            let census = ecosystem.census();
            for species in Species::ALL {
                ui.label(
                    egui::RichText::new(format!(
                        "{}: {}",
                        species.name(),
                        census.count(species)
                    ))
                    .color(species_color(species)),
                );
            }
            ui.label(format!(
                "Reproduction markers: {}",
                ecosystem.markers().len()
            ));

            ui.separator();

            ui.collapsing("Lifetime Totals", |ui| {
                let totals = ecosystem.totals();
                ui.label(format!("Births: {}", totals.births));
                ui.label(format!("Eaten: {}", totals.consumed));
                ui.label(format!("Starved: {}", totals.starved));
                ui.label(format!("Invalid state: {}", totals.invalid));
                ui.label(format!("Grass sprouted: {}", totals.sprouted));
            });

            ui.separator();

            ui.heading("Population Over Time");
            draw_population_plot(ui, state);
        });
}

fn draw_population_plot(ui: &mut egui::Ui, state: &UIState) {
    if state.population_history.iter().all(|h| h.is_empty()) {
        ui.label("Collecting data...");
        return;
    }

    Plot::new("population_plot")
        .height(200.0)
        .show_axes([true, true])
        .legend(egui_plot::Legend::default())
        .label_formatter(|name, value| {
            format!("{}\nTick: {:.0}\nCount: {:.0}", name, value.x, value.y)
        })
        .show(ui, |plot_ui| {
            for species in Species::ALL {
                let history = &state.population_history[species.index()];
                if history.is_empty() {
                    continue;
                }
                let points: PlotPoints = history.iter().map(|&(x, y)| [x, y]).collect();
                let line = Line::new(points)
                    .color(species_color(species))
                    .name(species.name());
                plot_ui.line(line);
            }
        });
}

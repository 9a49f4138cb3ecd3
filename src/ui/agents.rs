use ecosim::simulation::agent::Agent;
use ecosim::simulation::brain::Mlp;
use egui_macroquad::egui;

pub(super) fn draw_agent_detail_panel(egui_ctx: &egui::Context, agent: &Agent) {
    let title = format!("{} [SELECTED]", agent.species.name());

    egui::Window::new(title)
        .default_pos([20.0, 20.0])
        .resizable(true)
        .show(egui_ctx, |ui| {
            ui.label("Click elsewhere to deselect");
            ui.separator();

            ui.label(format!("Energy: {:.2}", agent.energy));
            ui.label(format!("Age: {}", agent.age));
            ui.label(format!("Since mating: {}", agent.mating_timer));
            ui.label(format!("Speed: {:.2}", agent.speed));
            ui.label(format!(
                "Position: ({:.1}, {:.1})",
                agent.pos.x(),
                agent.pos.y()
            ));
            ui.label(format!(
                "Can reproduce: {}",
                if agent.can_reproduce() { "yes" } else { "no" }
            ));

            if agent.species.is_stationary() {
                return;
            }

            ui.separator();
            ui.heading("Brain");
            ui.label(format!(
                "Total Parameters: {}",
                agent.brain.parameter_count()
            ));

            ui.label("Hidden layer weights");
            draw_weight_grid(ui, &agent.brain.hidden);
            ui.add_space(8.0);
            ui.label("Output layer weights");
            draw_weight_grid(ui, &agent.brain.output);
        });
}

/// Inferno colormap similar to matplotlib's inferno
/// Maps a value from 0.0 to 1.0 to a color from dark purple/black to yellow/white
fn inferno_colormap(t: f32) -> egui::Color32 {
    let t = t.clamp(0.0, 1.0);

    let r = if t < 0.5 {
        (t * 2.0 * 100.0) as u8
    } else {
        (100.0 + (t - 0.5) * 2.0 * 155.0) as u8
    };

    let g = if t < 0.25 {
        0
    } else if t < 0.75 {
        ((t - 0.25) * 2.0 * 200.0) as u8
    } else {
        (200.0 + (t - 0.75) * 4.0 * 55.0) as u8
    };

    let b = if t < 0.33 {
        (50.0 + t * 3.0 * 100.0) as u8
    } else if t < 0.66 {
        (150.0 - (t - 0.33) * 3.0 * 100.0) as u8
    } else {
        (50.0 - (t - 0.66) * 3.0 * 50.0) as u8
    };

    egui::Color32::from_rgb(r, g, b)
}

/// One cell per weight, one row per neuron.
fn draw_weight_grid(ui: &mut egui::Ui, layer: &Mlp) {
    const CELL: f32 = 10.0;

    let (rows, cols) = layer.weights.dim();
    let (rect, _) = ui.allocate_exact_size(
        egui::vec2(cols as f32 * CELL, rows as f32 * CELL),
        egui::Sense::hover(),
    );
    let painter = ui.painter_at(rect);

    for ((row, col), &weight) in layer.weights.indexed_iter() {
        // Initial weights lie in [-1, 1]; mutation may push them beyond
        let normalized = f32::midpoint(weight.clamp(-1.0, 1.0), 1.0);
        let min = rect.min + egui::vec2(col as f32 * CELL, row as f32 * CELL);
        painter.rect_filled(
            egui::Rect::from_min_size(min, egui::vec2(CELL - 1.0, CELL - 1.0)),
            1.0,
            inferno_colormap(normalized),
        );
    }
}

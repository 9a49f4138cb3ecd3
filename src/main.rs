use ecosim::simulation::ecosystem::Ecosystem;
use ecosim::simulation::params::Params;
use macroquad::prelude::*;

mod graphics;
mod ui;

fn window_conf() -> Conf {
    Conf {
        window_title: "Ecosim".to_string(),
        window_width: 1920,
        window_height: 1000,
        window_resizable: true,
        ..Default::default()
    }
}

/// Reads parameters from the JSON file given as first argument, or uses the defaults.
fn load_params() -> Result<Params, ecosim::simulation::params::ParamsError> {
    match std::env::args().nth(1) {
        Some(path) => {
            log::info!("loading parameters from {path}");
            Params::load_from_file(&path)
        }
        None => Ok(Params::default()),
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    env_logger::init();

    let params = match load_params() {
        Ok(params) => params,
        Err(e) => {
            log::error!("{e}");
            return;
        }
    };
    let mut ecosystem = match Ecosystem::new(params.clone()) {
        Ok(ecosystem) => ecosystem,
        Err(e) => {
            log::error!("{e}");
            return;
        }
    };

    let mut ui_state = ui::UIState::new();

    loop {
        if ui_state.reset_requested {
            ui_state.reset_requested = false;
            match Ecosystem::new(params.clone()) {
                Ok(fresh) => {
                    ecosystem = fresh;
                    ui_state.clear_history();
                    ui_state.selected_agent = None;
                    ui_state.dragging = None;
                    ui_state.status_message = Some("Simulation reset".to_string());
                }
                Err(e) => {
                    log::error!("{e}");
                    ui_state.status_message = Some(format!("Reset failed: {e}"));
                }
            }
        }

        // Mouse tools act between ticks
        ui::handle_mouse(&mut ui_state, &mut ecosystem);

        if !ui_state.paused {
            for _ in 0..ui_state.ticks_per_frame {
                ecosystem.step();
            }
            ui_state.update_history(&ecosystem);
        }

        clear_background(WHITE);
        graphics::draw_arena(ecosystem.params());
        graphics::draw_agents(&ecosystem, ui_state.selected_agent);
        graphics::draw_markers(&ecosystem);

        ui::draw_ui(&mut ui_state, &ecosystem);
        ui::process_egui();

        next_frame().await
    }
}

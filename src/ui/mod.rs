// UI module - handles all user interface rendering

mod agents;
mod events;
mod stats;
mod tools;
mod ui;

// Re-export the public interface
pub use tools::handle_mouse;
pub use ui::{UIState, draw_ui, process_egui};

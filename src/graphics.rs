use ecosim::simulation;
use ecosim::simulation::params::Params;
use geo::Point;
use macroquad::prelude::*;

/// Radius of an animal in arena units.
const AGENT_RADIUS: f32 = 10.0;
/// Half the side of a grass patch in arena units.
const GRASS_HALF_SIZE: f32 = 6.0;

trait ToScreen {
    type Output;
    fn to_screen(&self, params: &Params) -> Self::Output;
}

impl ToScreen for Point<f32> {
    type Output = Vec2;
    fn to_screen(&self, params: &Params) -> Vec2 {
        let scale_x = screen_width() / params.arena_width;
        let scale_y = screen_height() / params.arena_height;
        vec2(self.x() * scale_x, self.y() * scale_y)
    }
}

impl ToScreen for f32 {
    type Output = f32;
    fn to_screen(&self, params: &Params) -> f32 {
        let scale_x = screen_width() / params.arena_width;
        let scale_y = screen_height() / params.arena_height;
        let scale = scale_x.min(scale_y);
        self * scale
    }
}

/// Converts a screen position into arena coordinates.
pub fn from_screen(x: f32, y: f32, params: &Params) -> Point<f32> {
    Point::new(
        x / screen_width() * params.arena_width,
        y / screen_height() * params.arena_height,
    )
}

fn to_color([r, g, b, a]: [u8; 4]) -> Color {
    Color::from_rgba(r, g, b, a)
}

pub fn draw_arena(params: &Params) {
    let top_left = Point::new(params.arena_margin, params.arena_margin).to_screen(params);
    let bottom_right = Point::new(
        params.arena_width - params.arena_margin,
        params.arena_height - params.arena_margin,
    )
    .to_screen(params);
    draw_rectangle_lines(
        top_left.x,
        top_left.y,
        bottom_right.x - top_left.x,
        bottom_right.y - top_left.y,
        1.0,
        Color::from_rgba(200, 200, 200, 255),
    );
}

pub fn draw_agents(
    ecosystem: &simulation::ecosystem::Ecosystem,
    selected: Option<simulation::population::AgentId>,
) {
    let params = ecosystem.params();

    // Grass first so animals stay visible on top of it
    for (_, agent) in ecosystem
        .population()
        .iter()
        .filter(|(_, a)| a.species.is_stationary())
    {
        let screen_pos = agent.pos.to_screen(params);
        let half = GRASS_HALF_SIZE.to_screen(params);
        draw_rectangle(
            screen_pos.x - half,
            screen_pos.y - half,
            half * 2.0,
            half * 2.0,
            to_color(agent.color),
        );
    }

    for (id, agent) in ecosystem
        .population()
        .iter()
        .filter(|(_, a)| !a.species.is_stationary())
    {
        let screen_pos = agent.pos.to_screen(params);
        let screen_radius = AGENT_RADIUS.to_screen(params);

        draw_circle(screen_pos.x, screen_pos.y, screen_radius, to_color(agent.color));
        if selected == Some(id) {
            draw_circle_lines(
                screen_pos.x,
                screen_pos.y,
                screen_radius + 3.0,
                2.0,
                BLACK,
            );
        }

        let font_size = 12.0;
        let label = format!("e:{:.0} a:{}", agent.energy, agent.age);
        let label_size = measure_text(&label, None, font_size as u16, 1.0);
        draw_text(
            &label,
            screen_pos.x - label_size.width / 2.0,
            screen_pos.y - screen_radius - 4.0,
            font_size,
            DARKGRAY,
        );
    }
}

pub fn draw_markers(ecosystem: &simulation::ecosystem::Ecosystem) {
    let params = ecosystem.params();
    let lifetime = ecosystem.markers().lifetime().max(1) as f32;

    for marker in ecosystem.markers().iter() {
        let screen_pos = marker.pos.to_screen(params);
        // Fade out over the marker's lifetime
        let alpha = marker.remaining as f32 / lifetime;
        draw_text(
            "<3",
            screen_pos.x - 8.0,
            screen_pos.y - 16.0,
            20.0,
            Color::new(0.9, 0.2, 0.4, alpha),
        );
    }
}

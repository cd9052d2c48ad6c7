//! Macroquad backend
//!
//! Window, immediate-mode 2D drawing and keyboard polling on top of
//! macroquad. Macroquad's screen space is y-down with the origin in the top
//! left corner, which matches the engine's coordinates, so no camera is set.

use macroquad::input::{is_key_down, is_quit_requested, prevent_quit};
use macroquad::prelude::{clear_background, draw_circle_lines, draw_line, next_frame, Conf};

use crate::{
    application::Application,
    engine::{Engine, EngineError, EngineState, ExitReason, WindowConfig},
    input::{InputState, KeyCode},
    render::{Color, DrawCommand, DrawQueue},
};

/// Build the macroquad window configuration
pub fn window_conf(window: &WindowConfig) -> Result<Conf, EngineError> {
    let width = i32::try_from(window.width).map_err(|_| {
        EngineError::InitializationFailed(format!("window width {} is too large", window.width))
    })?;
    let height = i32::try_from(window.height).map_err(|_| {
        EngineError::InitializationFailed(format!("window height {} is too large", window.height))
    })?;

    Ok(Conf {
        window_title: window.title.clone(),
        window_width: width,
        window_height: height,
        window_resizable: window.resizable,
        ..Default::default()
    })
}

/// Run the frame loop until the window closes or the game ends
///
/// Per frame: poll input, let the engine clear/update/draw, replay the draw
/// queue, present, then pace and measure the frame for the next update.
pub async fn run<T: Application>(engine: &mut Engine, app: &mut T) -> Result<ExitReason, EngineError> {
    // Window close is reported through the input snapshot instead of
    // exiting the process from inside macroquad.
    prevent_quit();

    log::info!("Starting main loop...");
    let mut delta_time = 0.0;

    let reason = loop {
        let input = poll_input();

        let state = match engine.step(app, &input, delta_time) {
            Ok(state) => state,
            Err(err) => {
                app.cleanup();
                return Err(err);
            }
        };
        if let EngineState::Terminated(reason) = state {
            break reason;
        }

        replay(engine.draw_queue());
        next_frame().await;

        delta_time = engine.end_frame();
    };

    app.cleanup();
    log::info!("Main loop finished: {:?}", reason);
    Ok(reason)
}

/// Snapshot the keyboard and window state
pub fn poll_input() -> InputState {
    let mut input = InputState::new();
    for key in KeyCode::ALL {
        input.set_key(key, is_key_down(to_macroquad_key(key)));
    }
    if is_quit_requested() {
        input.request_close();
    }
    input
}

/// Draw every recorded command with macroquad
pub fn replay(queue: &DrawQueue) {
    for command in queue.commands() {
        match command {
            DrawCommand::Clear { color } => clear_background(to_macroquad_color(*color)),
            DrawCommand::Circle {
                center,
                radius,
                line_width,
                color,
            } => draw_circle_lines(
                center.x,
                center.y,
                *radius,
                *line_width,
                to_macroquad_color(*color),
            ),
            DrawCommand::Polygon {
                points,
                line_width,
                color,
            } => {
                let color = to_macroquad_color(*color);
                for (index, start) in points.iter().enumerate() {
                    let end = &points[(index + 1) % points.len()];
                    draw_line(start.x, start.y, end.x, end.y, *line_width, color);
                }
            }
        }
    }
}

fn to_macroquad_color(color: Color) -> macroquad::color::Color {
    macroquad::color::Color::new(color.r, color.g, color.b, color.a)
}

fn to_macroquad_key(key: KeyCode) -> macroquad::input::KeyCode {
    use macroquad::input::KeyCode as Mq;

    match key {
        KeyCode::A => Mq::A,
        KeyCode::D => Mq::D,
        KeyCode::S => Mq::S,
        KeyCode::W => Mq::W,
        KeyCode::Space => Mq::Space,
        KeyCode::Enter => Mq::Enter,
        KeyCode::Escape => Mq::Escape,
        KeyCode::Up => Mq::Up,
        KeyCode::Down => Mq::Down,
        KeyCode::Left => Mq::Left,
        KeyCode::Right => Mq::Right,
    }
}

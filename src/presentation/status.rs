//! Status bar text shown under the grid

use super::palette::{named, Rgb};
use crate::control::{Prompt, RunState};
use crate::world::World;

/// A line of text placed in screen coordinates
#[derive(Debug, Clone, PartialEq)]
pub struct TextItem {
    pub text: String,
    pub x: usize,
    pub y: usize,
    pub size: u16,
    pub colour: Rgb,
}

/// Message and colour describing the run state
pub fn state_message(state: RunState) -> (&'static str, Rgb) {
    match state {
        RunState::Wait => ("Press 'r' to run.", named::YELLOW),
        RunState::Run => ("Running.", named::GREEN),
        RunState::Stop => ("Stopped.", named::RED),
    }
}

/// Prompt line for an open multi-key command
pub fn prompt_message(world: &World) -> Option<String> {
    match world.prompt() {
        Prompt::None => None,
        Prompt::DensityDigit => Some("RANDOM: Enter digit (0~9)".to_string()),
        Prompt::ModeChoice => Some(format!(
            "MODE: Press up/down and enter '{}'",
            world.pending_family().display_name()
        )),
    }
}

/// Mode, live count and live ratio
pub fn summary_line(world: &World) -> String {
    format!(
        "Mode: {}, live: {} \t ratio: {:.4} \t",
        world.family().display_name(),
        world.live_count(),
        world.live_ratio()
    )
}

/// Every text item of the status bar, left to right
pub fn status_items(world: &World) -> Vec<TextItem> {
    let layout = world.layout();
    let y = layout.status_y();
    let width = layout.field_width;
    let (state_text, state_colour) = state_message(world.state());

    let mut items = vec![
        TextItem {
            text: summary_line(world),
            x: 0,
            y,
            size: 16,
            colour: named::WHITE,
        },
        TextItem {
            text: "Press 'q' to quit".to_string(),
            x: width / 5,
            y,
            size: 16,
            colour: named::WHITE,
        },
    ];

    if let Some(text) = prompt_message(world) {
        items.push(TextItem {
            text,
            x: width / 2,
            y,
            size: 16,
            colour: named::WHITE,
        });
    }

    items.push(TextItem {
        text: state_text.to_string(),
        x: width - width / 10,
        y,
        size: 18,
        colour: state_colour,
    });

    items
}

//! Display and output formatting utilities

use crate::game_of_life::{GridBuffer, RuleFamily, RuleTable};
use crate::presentation::status::{prompt_message, state_message, summary_line};
use crate::presentation::{Palette, Rgb};
use crate::session::RunReport;
use crate::world::World;
use itertools::Itertools;

/// Format runs and worlds for the terminal
pub struct ReportFormatter;

impl ReportFormatter {
    /// Format a single run report for console output
    pub fn format_report(report: &RunReport) -> String {
        let mut output = String::new();

        output.push_str(&format!("=== {} ===\n", report.family));
        output.push_str(&format!("Grid: {}x{} (seed {})\n", report.columns, report.rows, report.seed));
        output.push_str(&format!(
            "Generations: {} of {}\n",
            report.generations_run, report.generations_requested
        ));
        output.push_str(&format!(
            "Living Cells: {} → {} (ratio {:.4})\n",
            report.initial_live_count, report.final_live_count, report.final_live_ratio
        ));
        output.push_str(&format!("Oldest Cell: {} generations\n", report.max_age_seen));
        output.push_str(&format!("Run Time: {:.3}s\n", report.elapsed.as_secs_f64()));

        let outcome = match report.settled_at {
            Some(generation) if report.died_out() => format!("Died out at generation {}", generation),
            Some(generation) => format!("Filled the grid at generation {}", generation),
            None => "Still evolving".to_string(),
        };
        output.push_str(&format!("Outcome: {}\n", outcome));

        output
    }

    /// Format several runs as a summary table
    pub fn format_survey_summary(reports: &[RunReport]) -> String {
        let mut output = String::new();

        output.push_str("Survey Summary:\n");
        output.push_str("Family             | Rule          | Gens  | Living | Ratio  | Outcome\n");
        output.push_str("-------------------|---------------|-------|--------|--------|---------\n");

        for report in reports {
            let outcome = if report.died_out() {
                "Extinct"
            } else if report.saturated() {
                "Full"
            } else {
                "Active"
            };

            output.push_str(&format!(
                "{:18} | {:13} | {:5} | {:6} | {:.4} | {}\n",
                report.family.display_name(),
                report.rule,
                report.generations_run,
                report.final_live_count,
                report.final_live_ratio,
                outcome
            ));
        }

        output
    }

    /// Every family with its cycle index and transition codes
    pub fn format_rules_table() -> String {
        let mut output = String::new();
        output.push_str("Idx | Family             | Rule          | 0 1 2 3 4 5 6 7 8\n");
        output.push_str("----|--------------------|---------------|------------------\n");
        for family in RuleFamily::ALL {
            let table = RuleTable::select(family);
            output.push_str(&format!(
                "{:3} | {:18} | {:13} | {}\n",
                family.index(),
                family.display_name(),
                family.rule_string(),
                table.codes().chars().join(" ")
            ));
        }
        output.push_str("\nP = perish, R = keep state, W = alive, F = toggle\n");
        output
    }

    /// Format a grid in compact form
    pub fn format_grid_compact(grid: &GridBuffer) -> String {
        let mut output = String::new();
        for row in grid.current().chunks(grid.columns()) {
            for &cell in row {
                output.push(if cell { '█' } else { '·' });
            }
            output.push('\n');
        }
        output
    }

    /// Format a world with live cells coloured by age, followed by its status line
    pub fn format_world_visual(world: &World, palette: &Palette) -> String {
        let mut output = String::new();
        for y in 0..world.rows() {
            for x in 0..world.columns() {
                let index = x + y * world.columns();
                if world.cell_alive_at(index) {
                    let colour = palette.colour_for_age(world.cell_age_at(index));
                    output.push_str(&ColorOutput::rgb("██", colour));
                } else {
                    output.push_str("  ");
                }
            }
            output.push('\n');
        }

        output.push_str(&summary_line(world).replace('\t', " "));
        if let Some(prompt) = prompt_message(world) {
            output.push_str(&prompt);
            output.push(' ');
        }
        let (state_text, state_colour) = state_message(world.state());
        output.push_str(&ColorOutput::rgb(state_text, state_colour));
        output.push('\n');
        output
    }
}

/// Color output utilities
pub struct ColorOutput;

impl ColorOutput {
    /// Format text with color (if terminal supports it)
    pub fn colored(text: &str, color: Color) -> String {
        if Self::supports_color() {
            format!("\x1b[{}m{}\x1b[0m", color.code(), text)
        } else {
            text.to_string()
        }
    }

    /// Format text in a 24-bit foreground colour (if terminal supports it)
    pub fn rgb(text: &str, colour: Rgb) -> String {
        if Self::supports_color() {
            format!("\x1b[38;2;{};{};{}m{}\x1b[0m", colour.r, colour.g, colour.b, text)
        } else {
            text.to_string()
        }
    }

    /// Check if terminal supports color
    fn supports_color() -> bool {
        std::env::var("NO_COLOR").is_err() && (std::env::var("TERM").unwrap_or_default() != "dumb")
    }

    /// Format success message
    pub fn success(text: &str) -> String {
        Self::colored(text, Color::Green)
    }

    /// Format error message
    pub fn error(text: &str) -> String {
        Self::colored(text, Color::Red)
    }

    /// Format warning message
    pub fn warning(text: &str) -> String {
        Self::colored(text, Color::Yellow)
    }

    /// Format info message
    pub fn info(text: &str) -> String {
        Self::colored(text, Color::Blue)
    }
}

#[derive(Debug, Clone, Copy)]
pub enum Color {
    Red,
    Green,
    Yellow,
    Blue,
}

impl Color {
    fn code(self) -> u8 {
        match self {
            Color::Red => 31,
            Color::Green => 32,
            Color::Yellow => 33,
            Color::Blue => 34,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_of_life::Layout;

    #[test]
    fn test_grid_formatting() {
        let mut grid = GridBuffer::new(3, 2);
        grid.set_current(0, true);
        grid.set_current(4, true);
        assert_eq!(ReportFormatter::format_grid_compact(&grid), "█··\n·█·\n");
    }

    #[test]
    fn test_rules_table_lists_every_family() {
        let table = ReportFormatter::format_rules_table();
        assert_eq!(table.lines().count(), 2 + RuleFamily::COUNT + 2);
        assert!(table.contains("B3/S23"));
        assert!(table.contains("P P R W P P P P P"));
        assert!(table.contains("B4678/S35678"));
    }

    #[test]
    fn test_visual_frame_has_one_line_per_row() {
        let layout = Layout::exact(6, 4, 5).unwrap();
        let world = World::with_layout(layout, RuleFamily::Conway, 0.5, Some(2)).unwrap();
        let frame = ReportFormatter::format_world_visual(&world, &Palette::hue_wheel());
        assert_eq!(frame.lines().count(), 5);
        assert!(frame.contains("Mode: CONWAY"));
        assert!(frame.contains("Press 'r' to run."));
    }

    #[test]
    fn test_color_output() {
        let colored = ColorOutput::colored("test", Color::Red);
        // Should either be colored or plain text
        assert!(colored.contains("test"));

        let success = ColorOutput::success("OK");
        assert!(success.contains("OK"));

        let cell = ColorOutput::rgb("██", Rgb::new(1, 2, 3));
        assert!(cell.contains("██"));
    }
}

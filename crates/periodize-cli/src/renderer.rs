//! Terminal rendering for markdown output.
//!
//! Schedules, reports and recommendations arrive as markdown from the core's
//! Display implementations. Rich mode styles them with termimad; plain mode
//! prints the markdown unchanged.

use anyhow::Result;
use termimad::{crossterm::style::Color, MadSkin};

/// Terminal renderer that can switch between rich and plain text output
pub struct TerminalRenderer {
    rich_enabled: bool,
    skin: MadSkin,
}

/// ANSI color for a heading line, keyed by its level.
fn heading_color(line: &str) -> Option<&'static str> {
    let level = line.chars().take_while(|c| *c == '#').count();
    match level {
        0 => None,
        // block, phase
        1 => Some("\x1b[1;34m"),
        // week, recommendation
        2 => Some("\x1b[36m"),
        // single workout
        _ => Some("\x1b[32m"),
    }
}

impl TerminalRenderer {
    pub fn new(rich_enabled: bool) -> Self {
        let mut skin = MadSkin::default();

        skin.set_headers_fg(Color::Blue);
        skin.bold.set_fg(Color::Yellow);
        skin.italic.set_fg(Color::DarkGrey);
        skin.inline_code.set_bg(Color::AnsiValue(238));

        Self { rich_enabled, skin }
    }

    /// Render markdown text to the terminal.
    ///
    /// Heading lines keep their hash marks so the schedule hierarchy stays
    /// visible; other lines go through the skin.
    pub fn render(&self, markdown: &str) -> Result<()> {
        if !self.rich_enabled {
            print!("{markdown}");
            return Ok(());
        }

        for line in markdown.lines() {
            match heading_color(line) {
                Some(color) => println!("{color}{line}\x1b[0m"),
                None => {
                    self.skin.print_inline(line);
                    println!();
                }
            }
        }
        Ok(())
    }
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_renderer() {
        let renderer = TerminalRenderer::new(false);
        assert!(!renderer.rich_enabled);
        assert!(renderer.render("# Phase 1: Strength\n").is_ok());
    }

    #[test]
    fn test_default_is_rich() {
        assert!(TerminalRenderer::default().rich_enabled);
    }

    #[test]
    fn test_heading_colors_by_level() {
        assert_eq!(heading_color("- **Volume**: 4 sets"), None);
        assert_eq!(heading_color("# Phase 1: Hypertrophy"), Some("\x1b[1;34m"));
        assert_eq!(heading_color("## Week 2"), Some("\x1b[36m"));
        assert_eq!(heading_color("### 2024-01-01 Strength W1 D1: Push"), Some("\x1b[32m"));
    }
}

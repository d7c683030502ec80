use cube_model::{Color, CubeGrid, CubeView};
use owo_colors::OwoColorize;

use crate::config::ViewConfig;

/// Draws the cube's net on stdout.
pub struct TerminalView {
    config: ViewConfig,
}

impl TerminalView {
    pub fn new(config: ViewConfig) -> Self {
        TerminalView { config }
    }

    pub fn draw(&self, grid: &CubeGrid) -> String {
        let text = grid.to_text();
        if !self.config.colored {
            return text;
        }

        text.chars()
            .map(|ch| match Color::from_initial(ch) {
                Some(color) => paint(ch, color),
                None => ch.to_string(),
            })
            .collect()
    }
}

fn paint(ch: char, color: Color) -> String {
    let (r, g, b) = match color {
        Color::White => (255, 255, 255),
        Color::Yellow => (255, 255, 0),
        Color::Orange => (255, 128, 0),
        Color::Red => (255, 0, 0),
        Color::Green => (0, 255, 0),
        Color::Blue => (0, 0, 255),
    };

    ch.truecolor(r, g, b).to_string()
}

impl CubeView for TerminalView {
    fn render(&mut self, grid: &CubeGrid) {
        println!("{}", self.draw(grid));
    }

    fn solved(&mut self) {
        println!("{}", self.config.solved_message.green());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_view_matches_text_dump() {
        let view = TerminalView::new(ViewConfig {
            colored: false,
            ..ViewConfig::default()
        });
        let grid = CubeGrid::solved();

        assert_eq!(view.draw(&grid), grid.to_text());
    }

    #[test]
    fn colored_view_keeps_letters() {
        let view = TerminalView::new(ViewConfig::default());
        let drawn = view.draw(&CubeGrid::solved());

        assert_ne!(drawn, CubeGrid::solved().to_text());
        assert_eq!(drawn.matches('W').count(), 9);
        assert_eq!(drawn.matches('\n').count(), 9);
    }
}

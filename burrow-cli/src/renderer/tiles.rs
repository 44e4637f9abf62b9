use std::io::Write;

use burrow::{CellState, Dims, Maze};
use crossterm::style::{Color, Stylize as _};

use super::{MazeRenderer, RenderError};
use crate::settings::Settings;

/// Character map of the maze, top row first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TileRenderer {
    pub wall: char,
    pub floor: char,
    pub entrance: char,
    pub exit: char,
    pub color: bool,
}

impl Default for TileRenderer {
    fn default() -> Self {
        Self::from_settings(&Settings::default(), false)
    }
}

impl TileRenderer {
    pub fn from_settings(settings: &Settings, color: bool) -> Self {
        Self {
            wall: settings.get_wall_char(),
            floor: settings.get_floor_char(),
            entrance: settings.get_entrance_char(),
            exit: settings.get_exit_char(),
            color: color && settings.get_color(),
        }
    }

    fn tile(&self, maze: &Maze, pos: Dims) -> (char, Color) {
        if pos == maze.entrance() {
            (self.entrance, Color::Green)
        } else if pos == maze.exit() {
            (self.exit, Color::Red)
        } else {
            match maze.cell_state(pos) {
                Some(CellState::Floor) => (self.floor, Color::Reset),
                _ => (self.wall, Color::DarkGrey),
            }
        }
    }
}

impl MazeRenderer for TileRenderer {
    fn render(&self, maze: &Maze, out: &mut dyn Write) -> Result<(), RenderError> {
        let Dims(width, height) = maze.size();

        // y grows upwards, so the last row goes out first
        for y in (0..height).rev() {
            let mut line = String::with_capacity(width as usize);
            for x in 0..width {
                let (tile, color) = self.tile(maze, Dims(x, y));
                if self.color {
                    line.push_str(&tile.with(color).to_string());
                } else {
                    line.push(tile);
                }
            }
            writeln!(out, "{}", line)?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(renderer: &TileRenderer, maze: &Maze) -> String {
        let mut out = Vec::new();
        renderer.render(maze, &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn smallest_maze() {
        let maze = burrow::generate(3, 3, 42).unwrap();

        assert_eq!(render(&TileRenderer::default(), &maze), "#X#\n# #\n#E#\n");
    }

    #[test]
    fn one_line_per_row() {
        let maze = burrow::generate(17, 9, 5).unwrap();
        let output = render(&TileRenderer::default(), &maze);

        assert_eq!(output.lines().count(), 9);
        assert!(output.lines().all(|line| line.chars().count() == 17));
        assert_eq!(output.matches('E').count(), 1);
        assert_eq!(output.matches('X').count(), 1);
    }

    #[test]
    fn custom_characters() {
        let settings = Settings {
            wall_char: Some('█'),
            floor_char: Some('.'),
            ..Default::default()
        };
        let renderer = TileRenderer::from_settings(&settings, false);
        let maze = burrow::generate(3, 3, 0).unwrap();

        assert_eq!(render(&renderer, &maze), "█X█\n█.█\n█E█\n");
    }

    #[test]
    fn color_only_when_asked() {
        let settings = Settings::default();

        assert!(!TileRenderer::from_settings(&settings, false).color);
        assert!(TileRenderer::from_settings(&settings, true).color);

        let settings = Settings {
            color: Some(false),
            ..Default::default()
        };
        assert!(!TileRenderer::from_settings(&settings, true).color);
    }
}

mod cubes;
mod tiles;

use std::io::{self, Write};

use burrow::Maze;
use clap::ValueEnum;
use thiserror::Error;

use crate::settings::Settings;
pub use cubes::{Cube, CubeKind, CubeRenderer, Scene};
pub use tiles::TileRenderer;

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("Failed to write output: {0}")]
    Io(#[from] io::Error),
    #[error("Failed to serialize scene: {0}")]
    Ron(#[from] ron::Error),
}

/// Turns a finished maze into some output, never changes the maze itself.
pub trait MazeRenderer {
    fn render(&self, maze: &Maze, out: &mut dyn Write) -> Result<(), RenderError>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum RenderMode {
    /// One character per cell
    #[default]
    Tiles,
    /// One cube per cell, as RON
    Cubes,
}

impl RenderMode {
    pub fn renderer(self, settings: &Settings, color: bool) -> Box<dyn MazeRenderer> {
        match self {
            RenderMode::Tiles => Box::new(TileRenderer::from_settings(settings, color)),
            RenderMode::Cubes => Box::new(CubeRenderer::new(settings.get_cube_scale())),
        }
    }
}

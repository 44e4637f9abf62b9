use std::io::Write;

use burrow::{Dims, Maze};
use serde::{Deserialize, Serialize};

use super::{MazeRenderer, RenderError};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CubeKind {
    Wall,
    Path,
    Entrance,
    Exit,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Cube {
    pub kind: CubeKind,
    pub position: (f32, f32, f32),
}

/// Everything a 3D front end needs to place the maze.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Scene {
    pub size: Dims,
    pub seed: u64,
    pub scale: f32,
    pub cubes: Vec<Cube>,
}

impl Scene {
    pub fn count(&self, kind: CubeKind) -> usize {
        self.cubes.iter().filter(|cube| cube.kind == kind).count()
    }
}

/// Lays the maze out as unit cubes on the `z = 0` plane, serialized as RON.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CubeRenderer {
    pub scale: f32,
}

impl CubeRenderer {
    pub fn new(scale: f32) -> Self {
        Self { scale }
    }

    pub fn scene(&self, maze: &Maze) -> Scene {
        let cubes = maze
            .cells()
            .iter_pos()
            .map(|pos| {
                let kind = if pos == maze.entrance() {
                    CubeKind::Entrance
                } else if pos == maze.exit() {
                    CubeKind::Exit
                } else if maze.is_floor(pos) {
                    CubeKind::Path
                } else {
                    CubeKind::Wall
                };

                Cube {
                    kind,
                    position: (pos.0 as f32 * self.scale, pos.1 as f32 * self.scale, 0.0),
                }
            })
            .collect();

        Scene {
            size: maze.size(),
            seed: maze.seed(),
            scale: self.scale,
            cubes,
        }
    }
}

impl MazeRenderer for CubeRenderer {
    fn render(&self, maze: &Maze, out: &mut dyn Write) -> Result<(), RenderError> {
        let scene = self.scene(maze);
        let ron = ron::ser::to_string_pretty(&scene, ron::ser::PrettyConfig::default())?;
        writeln!(out, "{}", ron)?;
        Ok(())
    }
}

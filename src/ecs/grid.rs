use bevy_ecs::resource::Resource;

use crate::ecs::components::Position;
use crate::error::SimError;
use crate::id::AgentId;

const MOORE_OFFSETS: [(i64, i64); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

const VON_NEUMANN_OFFSETS: [(i64, i64); 4] = [(-1, 0), (0, -1), (0, 1), (1, 0)];

/// Toroidal grid holding any number of agents per cell.
///
/// Cells are stored row-major; each keeps its agents in insertion order.
#[derive(Resource, Debug, Clone)]
pub struct SpatialGrid {
    width: u32,
    height: u32,
    cells: Vec<Vec<AgentId>>,
}

impl SpatialGrid {
    pub fn new(width: u32, height: u32) -> Result<Self, SimError> {
        if width == 0 || height == 0 {
            return Err(SimError::invalid_parameter(
                "width/height",
                format!("grid must be at least 1x1, got {width}x{height}"),
            ));
        }
        Ok(Self {
            width,
            height,
            cells: vec![Vec::new(); width as usize * height as usize],
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    pub fn contains(&self, pos: Position) -> bool {
        pos.x < self.width && pos.y < self.height
    }

    /// Fold signed coordinates onto the torus.
    pub fn wrap(&self, x: i64, y: i64) -> Position {
        Position::new(
            x.rem_euclid(i64::from(self.width)) as u32,
            y.rem_euclid(i64::from(self.height)) as u32,
        )
    }

    /// Every cell, row by row.
    pub fn positions(&self) -> impl Iterator<Item = Position> + '_ {
        (0..self.height).flat_map(move |y| (0..self.width).map(move |x| Position::new(x, y)))
    }

    fn index(&self, pos: Position) -> Result<usize, SimError> {
        if !self.contains(pos) {
            return Err(SimError::InvalidPosition {
                x: pos.x,
                y: pos.y,
                width: self.width,
                height: self.height,
            });
        }
        Ok(pos.y as usize * self.width as usize + pos.x as usize)
    }

    /// Add an agent to a cell. The caller guarantees it is not placed elsewhere.
    pub fn place(&mut self, id: AgentId, pos: Position) -> Result<(), SimError> {
        let idx = self.index(pos)?;
        self.cells[idx].push(id);
        Ok(())
    }

    /// Take an agent out of a cell, keeping the order of the others.
    pub fn remove(&mut self, id: AgentId, pos: Position) -> Result<(), SimError> {
        let idx = self.index(pos)?;
        let cell = &mut self.cells[idx];
        let slot = cell
            .iter()
            .position(|other| *other == id)
            .ok_or(SimError::AgentNotFound(id))?;
        cell.remove(slot);
        Ok(())
    }

    /// Agents in a cell, in the order they arrived.
    pub fn contents_of(&self, pos: Position) -> Result<&[AgentId], SimError> {
        let idx = self.index(pos)?;
        Ok(&self.cells[idx])
    }

    /// Relocate an agent. Both cells and the agent's presence are checked
    /// before anything changes, so a failed move leaves the grid untouched.
    pub fn move_agent(
        &mut self,
        id: AgentId,
        from: Position,
        to: Position,
    ) -> Result<(), SimError> {
        let from_idx = self.index(from)?;
        let to_idx = self.index(to)?;
        let slot = self.cells[from_idx]
            .iter()
            .position(|other| *other == id)
            .ok_or(SimError::AgentNotFound(id))?;
        self.cells[from_idx].remove(slot);
        self.cells[to_idx].push(id);
        Ok(())
    }

    /// Candidate destinations for one step of a random walk.
    ///
    /// Wrapped onto the torus with duplicates dropped (first occurrence wins),
    /// so on grids narrower than 3 cells each distinct cell is listed once.
    pub fn neighbor_positions(&self, pos: Position, moore: bool) -> Vec<Position> {
        let offsets: &[(i64, i64)] = if moore {
            &MOORE_OFFSETS
        } else {
            &VON_NEUMANN_OFFSETS
        };
        let mut out: Vec<Position> = Vec::with_capacity(offsets.len());
        for (dx, dy) in offsets {
            let next = self.wrap(i64::from(pos.x) + dx, i64::from(pos.y) + dy);
            if !out.contains(&next) {
                out.push(next);
            }
        }
        out
    }
}

//! Dense rectangular elevation grids as a ready-made search space.

use std::collections::HashSet;
use std::fmt::{Display, Formatter};

use ndarray::Array2;
use unordered_pair::UnorderedPair;

use crate::engine::{Path, Space};
use crate::location::{Dimension, Location};
use crate::shape::{GridShape, SquareStep, Step};

/// A dense rectangular grid of elevations, searchable as a [`Space`] over [`Location`]s.
///
/// Moves go to the four edge-adjacent cells. A move is valid when the destination is in bounds,
/// is not a dropped cell, is not cut off by a wall, and does not climb more than the configured
/// limit (descents of any size are always allowed, mirroring elevation-maze rules). Build one
/// with a [`GridBuilder`](crate::builder::GridBuilder).
pub struct SquareGrid {
    pub(crate) dims: (Dimension, Dimension),
    pub(crate) elevations: Array2<u8>,
    // holes
    pub(crate) dropped: HashSet<Location>,
    // walls between two otherwise-adjacent cells
    pub(crate) walls: HashSet<UnorderedPair<Location>>,
    pub(crate) climb_limit: Option<i16>,
}

impl SquareGrid {
    /// Whether `location` lies within this grid's dimensions. Dropped cells are still
    /// "in bounds"; they are simply never valid move destinations.
    pub fn in_bounds(&self, location: Location) -> bool {
        location.0 < self.dims.0.get() && location.1 < self.dims.1.get()
    }

    /// The elevation at `location`, or [`None`] out of bounds.
    pub fn elevation_at(&self, location: Location) -> Option<u8> {
        self.elevations.get(location.as_index()).copied()
    }

    /// Draw `path` over an otherwise blank copy of this grid: each move renders as its
    /// direction glyph (`^ v < >`) at the cell it leaves, the final state renders as `E`, and
    /// dropped cells render as `#`.
    ///
    /// A zero-move path renders as a lone `E`.
    pub fn render_path(&self, path: &Path<Location>) -> String {
        let mut canvas = Array2::from_shape_fn(self.elevations.raw_dim(), |ind| {
            match self.dropped.contains(&Location::from(ind)) {
                true => '#',
                false => '.',
            }
        });

        for pair in path.states().windows(2) {
            let (here, there) = (pair[0], pair[1]);
            // path states are step-adjacent by construction, so a direction always exists
            let direction = SquareStep::direction_to(here, there).unwrap();
            canvas[here.as_index()] = direction.glyph();
        }
        canvas[path.last().as_index()] = 'E';

        dump(canvas)
    }
}

impl Space for SquareGrid {
    type State = Location;

    fn neighbors(&self, state: Location) -> Vec<Location> {
        SquareStep::neighbors_of(state).into_iter().map(|(_, loc)| loc).collect()
    }

    fn is_valid(&self, from: Location, to: Location) -> bool {
        if !self.in_bounds(to) || self.dropped.contains(&to) {
            return false;
        }
        if self.walls.contains(&UnorderedPair(from, to)) {
            return false;
        }

        match self.climb_limit {
            None => true,
            Some(limit) => {
                let climb = self.elevations[to.as_index()] as i16 - self.elevations[from.as_index()] as i16;
                climb <= limit
            }
        }
    }
}

impl Display for SquareGrid {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", dump(Array2::from_shape_fn(self.elevations.raw_dim(), |ind| {
            match self.dropped.contains(&Location::from(ind)) {
                true => '#',
                false => (b'a' + self.elevations[ind] % 26) as char,
            }
        })))
    }
}

pub(crate) fn dump(canvas: Array2<char>) -> String {
    let mut out = String::with_capacity(canvas.nrows() * (canvas.ncols() + 1));

    for row in canvas.rows() {
        for col in row {
            out.push(*col);
        }
        out.push('\n');
    }

    out
}

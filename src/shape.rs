//! Step directions and grid geometries.

use std::hash::Hash;

use itertools::Itertools;
use strum::VariantArray;

use crate::location::Location;

/// A single step direction on some grid geometry.
///
/// [`SquareStep`] is the built-in implementation for rectangular grids; other geometries
/// (hexagonal cells, knight moves) can implement this to drive the same search machinery.
pub trait Step: Sized + Copy + VariantArray + PartialEq + Eq + Hash + Ord + PartialOrd {
    /// Attempt the step from `location` in the direction specified by `self` and return the
    /// resultant [`Location`].
    ///
    /// Steps off the low edge of the grid wrap to huge coordinates, which bounds checks
    /// downstream reject; no direction is ever unrepresentable.
    fn attempt_from(&self, location: Location) -> Location;
    /// Invert the direction specified by `self`.
    fn invert(&self) -> Self;
    /// The single character used to draw a move in this direction when rendering a path.
    fn glyph(&self) -> char;
}

/// The square cell type of rectangular grids, stepping to the four edge-adjacent neighbors.
#[derive(Copy, Clone, VariantArray, Eq, PartialEq, Hash, Debug, Ord, PartialOrd)]
pub enum SquareStep {
    /// Toward smaller `y`.
    Up,
    /// Toward larger `y`.
    Down,
    /// Toward smaller `x`.
    Left,
    /// Toward larger `x`.
    Right,
}

impl Step for SquareStep {
    fn attempt_from(&self, location: Location) -> Location {
        match self {
            Self::Up => location.offset_by((0, -1)),
            Self::Down => location.offset_by((0, 1)),
            Self::Left => location.offset_by((-1, 0)),
            Self::Right => location.offset_by((1, 0)),
        }
    }

    fn invert(&self) -> Self {
        match self {
            Self::Up => Self::Down,
            Self::Down => Self::Up,
            Self::Left => Self::Right,
            Self::Right => Self::Left,
        }
    }

    fn glyph(&self) -> char {
        match self {
            Self::Up => '^',
            Self::Down => 'v',
            Self::Left => '<',
            Self::Right => '>',
        }
    }
}

/// Functionality on top of [`Step`] with identical implementation across all geometries.
pub trait GridShape: Step {
    /// Get all neighbors of a [`Location`] in "theory", by attempting every step direction in
    /// `Self::VARIANTS`. The variant order is fixed, which keeps neighbor enumeration (and so
    /// BFS tie-breaking) deterministic.
    fn neighbors_of(location: Location) -> Vec<(Self, Location)>;
    /// Determine the direction from `a` to `b` by calling [`attempt_from`](Step::attempt_from)
    /// until one works.
    ///
    /// Works only on two [`Location`]s which are step-adjacent and returns [`None`] otherwise.
    fn direction_to(a: Location, b: Location) -> Option<Self>;
}

impl<Sh> GridShape for Sh
where
    Sh: Step,
{
    fn neighbors_of(location: Location) -> Vec<(Self, Location)> {
        Self::VARIANTS.iter()
            .map(|dir| (*dir, dir.attempt_from(location)))
            .collect_vec()
    }

    fn direction_to(a: Location, b: Location) -> Option<Self> {
        Self::VARIANTS.iter().find(|dir| dir.attempt_from(a) == b).and_then(|dir| Some(*dir))
    }
}

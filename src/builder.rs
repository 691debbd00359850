//! Builders for [`SquareGrid`] search spaces.

use std::collections::HashSet;
use std::ops::IndexMut;

use ndarray::{Array2, AssignElem};
use unordered_pair::UnorderedPair;

use crate::grid::SquareGrid;
use crate::location::{Dimension, Location};
use crate::shape::{GridShape, SquareStep, Step};

/// Reasons a [`GridBuilder`] may become invalid while building.
#[derive(Copy, Clone, Debug)]
pub enum BuilderInvalidReason {
    /// A feature like a wall or an elevation was placed outside the bounds specified by `dims`.
    FeatureOutOfBounds,
    /// The row data given to [`elevations`](GridBuilder::elevations) does not match `dims`.
    DimensionMismatch,
}

/// A builder for [`SquareGrid`] search spaces.
///
/// Builders mutate themselves while building but can be [`Clone`]d to save their state at some
/// point. Invalid operations poison the builder rather than failing eagerly; the accumulated
/// reasons are reported by [`is_valid`](Self::is_valid) and [`build`](Self::build), and a
/// poisoned builder ignores further operations.
#[derive(Clone)]
pub struct GridBuilder {
    // width, height
    dims: (Dimension, Dimension),
    elevations: Array2<u8>,
    climb_limit: Option<i16>,
    invalid_reasons: Vec<BuilderInvalidReason>,
    // walls
    edge_blacklist: HashSet<UnorderedPair<Location>>,
    // holes
    location_blacklist: HashSet<Location>,
}

impl GridBuilder {
    /// Construct a new builder with the specified dimensions, specified in `(x, y)` order.
    /// All elevations start at zero, with no climb limit, walls, or dropped cells.
    pub fn with_dims(dims: (Dimension, Dimension)) -> Self {
        Self {
            dims,
            elevations: Array2::from_shape_simple_fn((dims.1.get(), dims.0.get()), u8::default),
            climb_limit: None,
            invalid_reasons: Default::default(),
            edge_blacklist: Default::default(),
            location_blacklist: Default::default(),
        }
    }

    /// Replace the entire elevation field with `rows`, given row by row from the top.
    ///
    /// May cause the builder to enter a [`DimensionMismatch`](BuilderInvalidReason::DimensionMismatch)
    /// invalid state if the row count or any row length disagrees with `dims`.
    /// If the builder is already in an invalid state, this function does nothing.
    pub fn elevations(&mut self, rows: Vec<Vec<u8>>) -> &mut Self {
        if !self.invalid_reasons.is_empty() {
            return self;
        }

        if rows.len() != self.dims.1.get() || rows.iter().any(|row| row.len() != self.dims.0.get()) {
            self.invalid_reasons.push(BuilderInvalidReason::DimensionMismatch);
            return self;
        }

        for (y, row) in rows.into_iter().enumerate() {
            for (x, elevation) in row.into_iter().enumerate() {
                self.elevations.index_mut(Location(x, y).as_index()).assign_elem(elevation);
            }
        }

        self
    }

    /// Set the elevation of the single cell at `location`.
    ///
    /// May cause the builder to enter a [`FeatureOutOfBounds`](BuilderInvalidReason::FeatureOutOfBounds)
    /// invalid state if `location` is out of bounds.
    /// If the builder is already in an invalid state, this function does nothing.
    pub fn elevation(&mut self, location: Location, elevation: u8) -> &mut Self {
        if !self.invalid_reasons.is_empty() {
            return self;
        }

        if location.0 >= self.dims.0.get() || location.1 >= self.dims.1.get() {
            self.invalid_reasons.push(BuilderInvalidReason::FeatureOutOfBounds);
            return self;
        }

        self.elevations.index_mut(location.as_index()).assign_elem(elevation);
        self
    }

    /// Limit how far "up" a single move may go; descents stay unrestricted.
    /// Elevation-maze rules are `climb_limit(1)`. Without a limit, elevations are decorative.
    pub fn climb_limit(&mut self, limit: i16) -> &mut Self {
        self.climb_limit = Some(limit);
        self
    }

    /// Drop a cell from the grid: it stays in bounds but no move may enter it.
    /// Keep in mind this may disconnect parts of the grid.
    ///
    /// May cause the builder to enter a [`FeatureOutOfBounds`](BuilderInvalidReason::FeatureOutOfBounds)
    /// invalid state if `location` is out of bounds.
    /// If the builder is already in an invalid state, this function does nothing.
    pub fn drop_location(&mut self, location: Location) -> &mut Self {
        if !self.invalid_reasons.is_empty() {
            return self;
        }

        if location.0 >= self.dims.0.get() || location.1 >= self.dims.1.get() {
            self.invalid_reasons.push(BuilderInvalidReason::FeatureOutOfBounds);
            return self;
        }

        self.location_blacklist.insert(location);
        self
    }

    /// Disconnect the two `locations`, i.e. place a wall between them.
    ///
    /// A wall blocks moves in both directions. If the two locations are not adjacent, this
    /// function does nothing and does not invalidate the builder.
    ///
    /// May cause the builder to enter a [`FeatureOutOfBounds`](BuilderInvalidReason::FeatureOutOfBounds)
    /// invalid state if either location is out of bounds.
    /// If the builder is already in an invalid state, this function does nothing.
    pub fn add_wall(&mut self, locations: UnorderedPair<Location>) -> &mut Self {
        if !self.invalid_reasons.is_empty() {
            return self;
        }

        for location in [locations.0, locations.1] {
            if location.0 >= self.dims.0.get() || location.1 >= self.dims.1.get() {
                self.invalid_reasons.push(BuilderInvalidReason::FeatureOutOfBounds);
                return self;
            }
        }

        if !SquareStep::direction_to(locations.0, locations.1).is_some() {
            return self;
        }

        self.edge_blacklist.insert(locations);

        self
    }

    /// Shorthand for multiple calls to [`Self::add_wall`], with the same conditions.
    ///
    /// Walls off the neighbors of `location` in the given `directions`.
    pub fn wall_around(&mut self, location: Location, directions: Vec<SquareStep>) -> &mut Self {
        for direction in directions {
            self.add_wall(UnorderedPair::from((location, direction.attempt_from(location))));
        }

        self
    }

    /// Check the validity of this builder, ensuring no [`BuilderInvalidReason`] condition has
    /// arisen.
    ///
    /// Returns `None` if the builder is valid, `Some(&Vec<BuilderInvalidReason>)` otherwise.
    pub fn is_valid(&self) -> Option<&Vec<BuilderInvalidReason>> {
        if self.invalid_reasons.is_empty() {
            None
        } else {
            Some(&self.invalid_reasons)
        }
    }

    /// Convert the state of this builder into a [`SquareGrid`].
    /// If the builder is invalid for any reason, a reference to a [`Vec`] of
    /// [`BuilderInvalidReason`] will indicate why.
    pub fn build(&self) -> Result<SquareGrid, &Vec<BuilderInvalidReason>> {
        if !self.invalid_reasons.is_empty() {
            return Err(&self.invalid_reasons);
        }

        Ok(SquareGrid {
            dims: self.dims,
            elevations: self.elevations.clone(),
            dropped: self.location_blacklist.clone(),
            walls: self.edge_blacklist.clone(),
            climb_limit: self.climb_limit,
        })
    }
}

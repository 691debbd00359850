//! Time-expanded search spaces.
//!
//! Domains where the environment changes every step (moving hazards, blinking cells) need no
//! special engine support: enlarging the state from `position` to `(position, time)` flattens
//! the dynamic environment into a larger static graph, and ordinary BFS applies. Because the
//! engine deduplicates only identical states, an environment must be *periodic* for the visited
//! set to stay finite; the tick is therefore stored modulo the period, so the same position
//! revisited one full cycle later is recognized as already explored.

use std::hash::Hash;

use itertools::Itertools;

use crate::engine::Space;

/// A position enlarged with a discrete time index, taken modulo the environment's period.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct Timed<S> {
    /// The spatial component.
    pub state: S,
    /// Time modulo the environment period. Equal to path length mod period at discovery time.
    pub tick: usize,
}

impl<S> Timed<S> {
    /// The state `state` at the start of time. Searches over a [`TimeExpanded`] space begin
    /// here.
    pub fn origin(state: S) -> Self {
        Self { state, tick: 0 }
    }
}

/// A search domain whose validity rules repeat with a fixed period.
///
/// Implementors describe the environment one tick at a time; [`TimeExpanded`] folds this into
/// an ordinary [`Space`].
pub trait PeriodicSpace {
    /// The spatial state type.
    type State: Copy + Eq + Hash;

    /// The number of ticks after which the environment repeats exactly. Must be at least 1.
    fn period(&self) -> usize;

    /// Candidate positions occupiable at tick `tick + 1` when standing at `state` at `tick`,
    /// in a fixed order. Include `state` itself if waiting in place is allowed; in moving-hazard
    /// domains it usually is, and outrunning the hazards may require it.
    fn moves_from(&self, state: Self::State, tick: usize) -> Vec<Self::State>;

    /// Whether `state` is occupiable at `tick` (in bounds, not a wall, no hazard present).
    fn is_open(&self, state: Self::State, tick: usize) -> bool;
}

/// The [`Space`] obtained by enlarging a [`PeriodicSpace`]'s states with a time index.
///
/// Each move advances the tick by one (modulo the period), including "moves" that stay in
/// place, so path length equals elapsed time.
pub struct TimeExpanded<'a, P>
where
    P: PeriodicSpace,
{
    space: &'a P,
}

impl<'a, P> From<&'a P> for TimeExpanded<'a, P>
where
    P: PeriodicSpace,
{
    fn from(space: &'a P) -> Self {
        Self { space }
    }
}

impl<P> Space for TimeExpanded<'_, P>
where
    P: PeriodicSpace,
{
    type State = Timed<P::State>;

    fn neighbors(&self, state: Timed<P::State>) -> Vec<Timed<P::State>> {
        let tick = (state.tick + 1) % self.space.period();
        self.space.moves_from(state.state, state.tick)
            .into_iter()
            .map(|next| Timed { state: next, tick })
            .collect_vec()
    }

    fn is_valid(&self, _from: Timed<P::State>, to: Timed<P::State>) -> bool {
        self.space.is_open(to.state, to.tick)
    }
}

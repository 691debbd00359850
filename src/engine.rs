//! The breadth-first search engine and its policy seam.

use std::collections::{HashMap, HashSet, VecDeque};
use std::hash::Hash;
use std::marker::PhantomData;

use log::debug;

/// An implicit search space: the two policy functions the engine needs besides a goal test.
///
/// A `Space` is never materialized up front; the engine discovers states one neighbor list at a
/// time, so spaces may be very large (or conceptually infinite, as long as validity or
/// periodicity keeps the *reachable* portion finite).
///
/// # Contract
/// Both methods must be deterministic and must not observe mutable external state that changes
/// during a search. Violations are not detected at runtime; they silently produce wrong answers.
/// A space whose valid region contains unboundedly many distinct states will not terminate under
/// [`Bfs::shortest_path`] when no goal is reachable; fold any periodicity into the state key
/// (see [`timed`](crate::timed)) or encode a give-up bound into [`is_valid`](Space::is_valid).
pub trait Space {
    /// The state type being searched over. Combines spatial position with whatever auxiliary
    /// discrete context the domain needs (time step, orientation, region).
    type State: Copy + Eq + Hash;

    /// Enumerate candidate successor states of `state`, in a fixed order.
    ///
    /// The order does not affect shortest-path *length*, but it is the first tie-breaker
    /// between equally short paths, so a deterministic order makes searches reproducible.
    fn neighbors(&self, state: Self::State) -> Vec<Self::State>;

    /// Whether the move `from -> to` is allowed. Candidates failing this test are discarded
    /// without being enqueued.
    fn is_valid(&self, from: Self::State, to: Self::State) -> bool;
}

/// Reasons a search may come back without a path.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum SearchFailure {
    /// The frontier emptied before any goal state was dequeued: no goal is reachable from the
    /// start under the supplied policies. This is the normal "no path exists" outcome and must
    /// be handled by callers; it is not a defect in the space or the engine.
    Exhausted,
}

/// An ordered sequence of states from a start state to a goal state, both inclusive.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Path<S> {
    states: Vec<S>,
}

impl<S> Path<S> {
    /// The number of moves (edges) taken, i.e. one less than the number of states.
    /// A search whose start already satisfies the goal yields zero moves.
    pub fn moves(&self) -> usize {
        self.states.len() - 1
    }

    /// All states along the path in order, the start state first.
    pub fn states(&self) -> &[S] {
        &self.states
    }

    /// The start state.
    pub fn first(&self) -> &S {
        self.states.first().unwrap()
    }

    /// The goal state the search accepted.
    pub fn last(&self) -> &S {
        self.states.last().unwrap()
    }
}

/// Breadth-first search over a [`Space`].
///
/// Borrow a space with `Bfs::from(&space)`, then run any number of independent queries.
/// Each query owns its frontier and visited set exclusively and discards them on return, so a
/// `Bfs` holds no state between calls and separate searches are trivially parallelizable at the
/// call site.
pub struct Bfs<'a, Sp>
where
    Sp: Space,
{
    space: &'a Sp,
}

impl<'a, Sp> From<&'a Sp> for Bfs<'a, Sp>
where
    Sp: Space,
{
    fn from(space: &'a Sp) -> Self {
        Self { space }
    }
}

impl<Sp> Bfs<'_, Sp>
where
    Sp: Space,
{
    /// Find the shortest path (by move count) from `start` to the first state satisfying
    /// `is_goal`, or return [`Exhausted`](SearchFailure::Exhausted) once every reachable state
    /// has been expanded.
    ///
    /// The goal test runs when a state is *dequeued*, so the start state itself is tested
    /// first and, if accepted, yields the trivial zero-move path. Equally short paths tie-break
    /// by neighbor enumeration order, then FIFO dequeue order; the first discovered wins.
    pub fn shortest_path(
        &self,
        start: Sp::State,
        is_goal: impl Fn(Sp::State) -> bool,
    ) -> Result<Path<Sp::State>, SearchFailure> {
        let mut frontier = VecDeque::from([start]);
        let mut visited = HashSet::from([start]);
        let mut predecessor: HashMap<Sp::State, Sp::State> = HashMap::new();
        let mut expansions = 0usize;

        while let Some(state) = frontier.pop_front() {
            if is_goal(state) {
                debug!("goal dequeued after {} expansions", expansions);
                return Ok(self.backtrack(start, state, &predecessor));
            }
            expansions += 1;

            for candidate in self.space.neighbors(state) {
                if !self.space.is_valid(state, candidate) {
                    continue;
                }
                // mark visited at enqueue time, not dequeue time, so a state discovered via
                // two paths of equal length is still enqueued exactly once
                if !visited.insert(candidate) {
                    continue;
                }
                predecessor.insert(candidate, state);
                frontier.push_back(candidate);
            }
        }

        debug!("frontier exhausted after {} expansions", expansions);
        Err(SearchFailure::Exhausted)
    }

    /// Flood fill: every state reachable from `start` by valid moves, `start` included.
    ///
    /// This is the same expansion loop as [`shortest_path`](Self::shortest_path) with no goal;
    /// it always runs the space to exhaustion, so the valid region must be finite.
    pub fn reachable(&self, start: Sp::State) -> HashSet<Sp::State> {
        let mut frontier = VecDeque::from([start]);
        let mut visited = HashSet::from([start]);

        while let Some(state) = frontier.pop_front() {
            for candidate in self.space.neighbors(state) {
                if !self.space.is_valid(state, candidate) || !visited.insert(candidate) {
                    continue;
                }
                frontier.push_back(candidate);
            }
        }

        debug!("flood fill reached {} states", visited.len());
        visited
    }

    fn backtrack(
        &self,
        start: Sp::State,
        goal: Sp::State,
        predecessor: &HashMap<Sp::State, Sp::State>,
    ) -> Path<Sp::State> {
        let mut states = vec![goal];
        let mut cursor = goal;
        while cursor != start {
            // every non-start dequeued state was recorded when enqueued
            cursor = *predecessor.get(&cursor).unwrap();
            states.push(cursor);
        }
        states.reverse();

        Path { states }
    }
}

// bundles the neighbor and validity closures of `search()` behind the `Space` seam
struct ClosureSpace<S, N, V> {
    neighbors: N,
    is_valid: V,
    _state: PhantomData<fn(S)>,
}

impl<S, N, V> Space for ClosureSpace<S, N, V>
where
    S: Copy + Eq + Hash,
    N: Fn(S) -> Vec<S>,
    V: Fn(S, S) -> bool,
{
    type State = S;

    fn neighbors(&self, state: S) -> Vec<S> {
        (self.neighbors)(state)
    }

    fn is_valid(&self, from: S, to: S) -> bool {
        (self.is_valid)(from, to)
    }
}

/// One-shot breadth-first search with the policies supplied as closures.
///
/// Equivalent to implementing [`Space`] and calling [`Bfs::shortest_path`]; convenient when a
/// domain is searched exactly once. All three closures must be pure in the sense of the
/// [`Space`] contract.
pub fn search<S, N, V, G>(
    start: S,
    neighbors: N,
    is_valid: V,
    is_goal: G,
) -> Result<Path<S>, SearchFailure>
where
    S: Copy + Eq + Hash,
    N: Fn(S) -> Vec<S>,
    V: Fn(S, S) -> bool,
    G: Fn(S) -> bool,
{
    let space = ClosureSpace { neighbors, is_valid, _state: PhantomData };
    Bfs::from(&space).shortest_path(start, is_goal)
}

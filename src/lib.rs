#![warn(missing_docs)]

//! # `floodpath`
//!
//! A breadth-first shortest-path and reachability engine for grid-like implicit graphs.
//! Supply a start state, a neighbor generator, a step-validity predicate, and a goal predicate;
//! the engine explores the implied state graph in breadth-first order and returns the shortest
//! path to the first goal state it dequeues, or reports that the frontier was exhausted.
//!
//! The quickest way in is the free function [`search()`], which takes all three policies as
//! closures. For structured domains, implement [`Space`](engine::Space) once and run any number
//! of queries through [`Bfs`](engine::Bfs). Ready-made spaces are included for dense elevation
//! grids ([`SquareGrid`](grid::SquareGrid), built with [`GridBuilder`](builder::GridBuilder)),
//! explicit [`petgraph`] graphs ([`GraphSpace`](graph::GraphSpace)), and periodically changing
//! environments ([`TimeExpanded`](timed::TimeExpanded)).
//!
//! # Internals
//! The engine is a classic FIFO breadth-first search. A state is marked visited at the moment it
//! is first *enqueued*, never when dequeued, so no state enters the frontier twice via different
//! paths; the goal predicate is tested on dequeue, so the first accepted state is at minimum edge
//! distance from the start. Paths are rebuilt from a predecessor map rather than stored per
//! frontier entry, keeping the frontier O(1) per state.
//!
//! Edges are unweighted. Ties between equally short paths break by the order the neighbor
//! generator yields candidates, then by FIFO dequeue order, so results are deterministic for
//! deterministic policies.
//!
//! Environments that change over time (moving obstacles and the like) are not special-cased.
//! Fold the clock into the state instead: search over `(position, time)` pairs, time taken
//! modulo the environment's period, and the same BFS applies; see the [`timed`] module.

pub use engine::{search, Bfs, Path, SearchFailure, Space};
pub use location::Location;

pub mod builder;
pub mod engine;
pub mod graph;
pub mod grid;
pub(crate) mod location;
pub mod shape;
mod tests;
pub mod timed;

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::collections::{HashMap, HashSet};
    use std::num::NonZero;

    use petgraph::graphmap::UnGraphMap;
    use unordered_pair::UnorderedPair;

    use crate::builder::{BuilderInvalidReason, GridBuilder};
    use crate::engine::{search, Bfs, SearchFailure, Space};
    use crate::graph::GraphSpace;
    use crate::grid::SquareGrid;
    use crate::location::{Dimension, Location};
    use crate::shape::{GridShape, SquareStep};
    use crate::timed::{PeriodicSpace, TimeExpanded, Timed};

    fn dims(x: usize, y: usize) -> (Dimension, Dimension) {
        (NonZero::new(x).unwrap(), NonZero::new(y).unwrap())
    }

    fn staircase() -> SquareGrid {
        // elevation x + y: every right/down move climbs exactly 1, every shortest path is a
        // straight staircase of manhattan length
        let mut builder = GridBuilder::with_dims(dims(5, 5));
        for x in 0..5 {
            for y in 0..5 {
                builder.elevation(Location(x, y), (x + y) as u8);
            }
        }
        builder.climb_limit(1);
        builder.build().unwrap()
    }

    #[test_log::test]
    fn staircase_shortest_path() {
        let grid = staircase();

        assert_eq!(format!("{}", grid), "abcde
bcdef
cdefg
defgh
efghi
");

        let start = Location(0, 0);
        let goal = Location(4, 4);
        let path = Bfs::from(&grid).shortest_path(start, |state| state == goal).unwrap();

        assert_eq!(path.moves(), start.manhattan_to(goal));
        assert_eq!(*path.first(), start);
        assert_eq!(*path.last(), goal);

        assert_eq!(grid.render_path(&path), "v....
v....
v....
v....
>>>>E
");
    }

    #[test]
    fn walled_off_goal_exhausts() {
        // a full-height wall between x = 1 and x = 2 splits the grid in two
        let mut builder = GridBuilder::with_dims(dims(5, 5));
        for y in 0..5 {
            builder.add_wall(UnorderedPair(Location(1, y), Location(2, y)));
        }
        let grid = builder.build().unwrap();

        let result = Bfs::from(&grid).shortest_path(Location(0, 0), |state| state == Location(4, 4));
        assert_eq!(result, Err(SearchFailure::Exhausted));
    }

    #[test]
    fn goal_at_start_is_trivial() {
        let grid = GridBuilder::with_dims(dims(3, 3)).build().unwrap();
        let start = Location(1, 1);

        let path = Bfs::from(&grid).shortest_path(start, |state| state == start).unwrap();
        assert_eq!(path.states(), &[start]);
        assert_eq!(path.moves(), 0);

        assert_eq!(grid.render_path(&path), "...
.E.
...
");
    }

    #[test]
    fn repeated_searches_agree() {
        // an open grid has many equally short paths; tie-breaking must be reproducible
        let grid = GridBuilder::with_dims(dims(4, 4)).build().unwrap();
        let engine = Bfs::from(&grid);

        let first = engine.shortest_path(Location(0, 0), |state| state == Location(3, 3)).unwrap();
        let second = engine.shortest_path(Location(0, 0), |state| state == Location(3, 3)).unwrap();

        assert_eq!(first, second);
        assert_eq!(first.moves(), 6);
    }

    #[test]
    fn no_state_expands_twice() {
        // count how often the neighbor generator runs per state; BFS must expand each
        // dequeued state exactly once even though the open grid rediscovers every state
        // from several directions
        let expansions: RefCell<HashMap<(usize, usize), usize>> = RefCell::new(HashMap::new());

        let result = search(
            (0usize, 0usize),
            |state: (usize, usize)| {
                *expansions.borrow_mut().entry(state).or_insert(0) += 1;
                vec![
                    (state.0, state.1.wrapping_sub(1)),
                    (state.0, state.1 + 1),
                    (state.0.wrapping_sub(1), state.1),
                    (state.0 + 1, state.1),
                ]
            },
            |_, to| to.0 < 4 && to.1 < 4,
            |_| false,
        );

        assert_eq!(result, Err(SearchFailure::Exhausted));
        let expansions = expansions.into_inner();
        assert_eq!(expansions.len(), 16);
        assert!(expansions.values().all(|count| *count == 1));
    }

    // every simple path, no pruning; the ground truth for optimality checks
    fn exhaustive_min(
        grid: &SquareGrid,
        from: Location,
        to: Location,
        seen: &mut HashSet<Location>,
    ) -> Option<usize> {
        if from == to {
            return Some(0);
        }

        seen.insert(from);
        let mut best: Option<usize> = None;
        for next in grid.neighbors(from) {
            if !grid.is_valid(from, next) || seen.contains(&next) {
                continue;
            }
            if let Some(rest) = exhaustive_min(grid, next, to, seen) {
                best = Some(best.map_or(rest + 1, |b| b.min(rest + 1)));
            }
        }
        seen.remove(&from);

        best
    }

    #[test]
    fn matches_exhaustive_search() {
        // the height-9 plateau across the second row is unclimbable from height 0 except at
        // its right-hand gap, forcing a long detour to a goal 3 cells away
        let grid = GridBuilder::with_dims(dims(4, 4))
            .elevations(vec![
                vec![0, 0, 0, 0],
                vec![9, 9, 9, 0],
                vec![0, 0, 0, 0],
                vec![0, 9, 9, 0],
            ])
            .climb_limit(1)
            .build()
            .unwrap();

        let start = Location(0, 0);
        let goal = Location(0, 3);

        let truth = exhaustive_min(&grid, start, goal, &mut HashSet::new()).unwrap();
        let path = Bfs::from(&grid).shortest_path(start, |state| state == goal).unwrap();

        assert_eq!(path.moves(), truth);
        assert_eq!(path.moves(), 9);
        assert!(path.moves() > start.manhattan_to(goal));
    }

    #[test]
    fn reachable_respects_holes_and_walls() {
        let grid = GridBuilder::with_dims(dims(3, 3))
            .drop_location(Location(1, 1))
            .build()
            .unwrap();
        assert_eq!(Bfs::from(&grid).reachable(Location(0, 0)).len(), 8);

        // wall off the bottom-right corner entirely
        let grid = GridBuilder::with_dims(dims(5, 5))
            .wall_around(Location(4, 4), vec![SquareStep::Up, SquareStep::Left])
            .build()
            .unwrap();
        let engine = Bfs::from(&grid);
        assert_eq!(engine.reachable(Location(0, 0)).len(), 24);
        assert_eq!(engine.reachable(Location(4, 4)).len(), 1);
    }

    #[test]
    fn closure_search_is_grid_agnostic() {
        // signed plane clipped by the validity predicate; no grid type involved
        let path = search(
            (0isize, 0isize),
            |state: (isize, isize)| {
                vec![
                    (state.0 + 1, state.1),
                    (state.0, state.1 + 1),
                    (state.0 - 1, state.1),
                    (state.0, state.1 - 1),
                ]
            },
            |_, to| to.0.abs() <= 2 && to.1.abs() <= 2,
            |state| state == (-2, 2),
        )
        .unwrap();

        assert_eq!(path.moves(), 4);
    }

    #[test]
    fn explicit_graph_space() {
        let mut graph = UnGraphMap::<u8, ()>::from_edges([(1, 2), (2, 3), (3, 4)]);
        graph.add_node(5);

        let space = GraphSpace::from(&graph);
        let engine = Bfs::from(&space);

        let path = engine.shortest_path(1, |node| node == 4).unwrap();
        assert_eq!(path.states(), &[1, 2, 3, 4]);

        assert_eq!(engine.shortest_path(1, |node| node == 5), Err(SearchFailure::Exhausted));
    }

    // 3x3 grid where the two cells next to the start corner are only open every fourth tick
    struct BlinkingCorridor;

    impl PeriodicSpace for BlinkingCorridor {
        type State = Location;

        fn period(&self) -> usize {
            4
        }

        fn moves_from(&self, state: Location, _tick: usize) -> Vec<Location> {
            let mut moves = vec![state];
            moves.extend(SquareStep::neighbors_of(state).into_iter().map(|(_, location)| location));
            moves
        }

        fn is_open(&self, state: Location, tick: usize) -> bool {
            if state.0 >= 3 || state.1 >= 3 {
                return false;
            }
            match state {
                Location(1, 0) | Location(0, 1) => tick % 4 == 2,
                _ => true,
            }
        }
    }

    #[test_log::test]
    fn periodic_obstacles_require_waiting() {
        let corridor = BlinkingCorridor;
        let space = TimeExpanded::from(&corridor);

        let path = Bfs::from(&space)
            .shortest_path(Timed::origin(Location(0, 0)), |timed| timed.state == Location(2, 2))
            .unwrap();

        // unhindered manhattan distance is 4; the first move only becomes legal on the tick
        // the corridor opens, costing one wait
        assert_eq!(path.moves(), 5);
        assert_eq!(path.states()[1], Timed { state: Location(0, 0), tick: 1 });
    }

    #[test]
    fn builder_rejects_out_of_bounds() {
        let mut builder = GridBuilder::with_dims(dims(3, 3));
        builder.elevation(Location(5, 0), 2);

        assert_eq!(builder.is_valid().map(Vec::len), Some(1));
        assert!(builder.build().is_err());

        // a poisoned builder ignores later operations instead of compounding
        builder.drop_location(Location(9, 9));
        assert_eq!(builder.is_valid().map(Vec::len), Some(1));
    }

    #[test]
    fn builder_rejects_mismatched_rows() {
        let mut builder = GridBuilder::with_dims(dims(3, 3));
        builder.elevations(vec![vec![0, 0], vec![0, 0], vec![0, 0]]);

        assert!(matches!(
            builder.build().err().unwrap()[..],
            [BuilderInvalidReason::DimensionMismatch]
        ));
    }
}

use crate::btree_key_values::BTreeKeyValues;
use crate::position::Position;
use std::collections::HashSet;

/// Length of the shortest 4-neighbour walk from `start` to `goal` over cells
/// where `is_used` is false, provided it is strictly shorter than `max_cost`.
///
/// Uniform-cost search with unit steps. The search gives up as soon as the
/// cheapest frontier entry reaches `max_cost`, or when the frontier runs dry.
/// `start` itself is never checked against `is_used`.
pub fn shortest_way_length<F>(
    start: Position,
    goal: Position,
    is_used: F,
    max_cost: u32,
) -> Option<u32>
where
    F: Fn(&Position) -> bool,
{
    let mut queue: BTreeKeyValues<u32, Position> = BTreeKeyValues::default(); // cost, point
    let mut visited: HashSet<Position> = HashSet::new();
    queue.push_back(0, start);

    while let Some((cost, point)) = queue.pop_first() {
        if max_cost <= cost {
            return None;
        }
        if point == goal {
            return Some(cost);
        }
        if !visited.insert(point) {
            continue;
        }
        for next_point in point.near() {
            if visited.contains(&next_point) || is_used(&next_point) {
                continue;
            }
            queue.push_back(cost + 1, next_point);
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use crate::position::Position;
    use crate::way::shortest_way_length;
    use std::collections::HashSet;

    fn cells(cells: &[(i32, i32)]) -> HashSet<Position> {
        cells.iter().map(|(x, y)| Position::new(*x, *y)).collect()
    }

    fn open(_: &Position) -> bool {
        false
    }

    #[test]
    fn test_start_is_goal() {
        let p = Position::new(3, 3);
        assert_eq!(shortest_way_length(p, p, open, 1), Some(0));
        assert_eq!(shortest_way_length(p, p, open, 0), None);
    }

    #[test]
    fn test_single_step() {
        let start = Position::new(0, 0);
        let goal = Position::new(0, 1);
        assert_eq!(shortest_way_length(start, goal, open, 2), Some(1));
        // the bound is exclusive
        assert_eq!(shortest_way_length(start, goal, open, 1), None);
    }

    #[test]
    fn test_boxed_in_start_terminates() {
        let used = cells(&[(1, 0), (-1, 0), (0, 1), (0, -1)]);
        let goal = Position::new(5, 5);
        let result = shortest_way_length(Position::ORIGIN, goal, |p| used.contains(p), 1000);
        assert_eq!(result, None);
    }

    #[test]
    fn test_routes_around_wall() {
        // vertical wall at x = 1 from y = -2 to y = 2
        let used = cells(&[(1, -2), (1, -1), (1, 0), (1, 1), (1, 2)]);
        let is_used = |p: &Position| used.contains(p);
        let start = Position::ORIGIN;
        let goal = Position::new(2, 0);
        // 3 up, 2 across, 3 down
        assert_eq!(shortest_way_length(start, goal, is_used, 100), Some(8));
        assert_eq!(shortest_way_length(start, goal, is_used, 8), None);
        assert_eq!(shortest_way_length(start, goal, is_used, 9), Some(8));
    }

    #[test]
    fn test_unreachable_goal_inside_obstacles() {
        let goal = Position::new(4, 4);
        let used: HashSet<_> = goal.near().into_iter().collect();
        let result = shortest_way_length(Position::ORIGIN, goal, |p| used.contains(p), 20);
        assert_eq!(result, None);
    }

    #[test]
    fn test_matches_manhattan_on_open_grid() {
        let start = Position::new(-2, 5);
        let goal = Position::new(4, -1);
        assert_eq!(
            shortest_way_length(start, goal, open, 64),
            Some(start.manhattan(&goal))
        );
    }
}

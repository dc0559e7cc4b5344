//! Connectivity search used to detect splits.

use crate::link::LinkTable;
use conduit_core::Pos;
use indexmap::IndexSet;

/// Members that cannot be reached from `start` over recorded links.
///
/// Runs an iterative depth-first search seeded at `start`, following the
/// link table only. Node presence plays no part: the link table alone
/// defines topology. Returns an empty vector when every member was
/// reached, i.e. when the network is still connected.
///
/// The search is bounded by `members`: positions outside it are never
/// expanded, so the cost is proportional to the affected network.
pub(crate) fn unreachable_members(
    links: &LinkTable,
    start: Pos,
    members: impl IntoIterator<Item = Pos>,
) -> Vec<Pos> {
    let mut unvisited: IndexSet<Pos> = members.into_iter().collect();
    let mut stack = vec![start];
    while let Some(here) = stack.pop() {
        if !unvisited.swap_remove(&here) {
            continue;
        }
        stack.extend(links.linked_neighbours(here).filter(|p| unvisited.contains(p)));
    }
    unvisited.into_iter().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use conduit_core::{Direction, DirectionSet};

    fn line(n: i32) -> (LinkTable, Vec<Pos>) {
        let mut t = LinkTable::new();
        let ps: Vec<Pos> = (0..n).map(|x| Pos::new(x, 0, 0)).collect();
        for &p in &ps {
            t.insert_entry(p, DirectionSet::empty());
        }
        for &p in &ps[..ps.len() - 1] {
            t.add(p, Direction::East);
        }
        (t, ps)
    }

    #[test]
    fn connected_line_has_nothing_unreachable() {
        let (t, ps) = line(5);
        assert!(unreachable_members(&t, ps[2], ps.clone()).is_empty());
    }

    #[test]
    fn cut_line_reports_far_side() {
        let (mut t, ps) = line(5);
        t.remove(ps[1], Direction::East);
        let mut cut = unreachable_members(&t, ps[0], ps.clone());
        cut.sort();
        assert_eq!(cut, ps[2..].to_vec());
    }

    #[test]
    fn isolated_start_reports_everyone_else() {
        let (mut t, ps) = line(3);
        t.remove(ps[0], Direction::East);
        let mut cut = unreachable_members(&t, ps[0], ps.clone());
        cut.sort();
        assert_eq!(cut, vec![ps[1], ps[2]]);
    }

    #[test]
    fn search_handles_long_chains_without_recursion() {
        let (t, ps) = line(50_000);
        assert!(unreachable_members(&t, ps[0], ps.clone()).is_empty());
    }
}

use std::cmp::Reverse;
use std::collections::BinaryHeap;

use anyhow::{ensure, Context, Result};
use indexmap::map::Entry;

use crate::Board;

type IndexMap<K, V> = indexmap::IndexMap<K, V, fxhash::FxBuildHasher>;

const NO_PARENT: usize = !0usize;

/// One search state: best-known move count plus the node it was reached
/// from along that best path. Boards live as the keys of the node map, so a
/// node's id is its map index and predecessor chains are index chains.
#[derive(Debug, Clone, Copy)]
struct Node {
    parent: usize,
    moves: u32,
}

/// A completed search: the optimal move count and the board sequence from
/// the initial configuration to the goal, inclusive (`path.len() == moves + 1`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Solution {
    pub moves: u32,
    pub path: Vec<Board>,
}

/// A* over board states, ordered by moves-so-far plus Manhattan distance.
///
/// The heuristic is admissible, so the first time the goal leaves the
/// frontier its move count is minimal. Fails if `initial` is unsolvable;
/// callers wanting to report that gracefully should test `is_solvable`
/// first. `on_step` is invoked once per expanded node.
pub fn astar(initial: &Board, mut on_step: impl FnMut()) -> Result<Solution> {
    ensure!(initial.is_solvable(), "unsolvable board");

    // The node map doubles as the closed set: a board reached again at an
    // equal or higher cost is never re-queued, which prunes every cycle,
    // not just immediate move reversals. Stale frontier entries are
    // recognized on pop by comparing against the recorded cost.
    let mut nodes = IndexMap::<Board, Node>::default();
    nodes.insert(
        initial.clone(),
        Node {
            parent: NO_PARENT,
            moves: 0,
        },
    );

    let mut frontier = BinaryHeap::new();
    frontier.push(Reverse((initial.manhattan(), 0u32, 0usize)));

    let goal_idx = loop {
        let Reverse((_, moves, idx)) = frontier.pop().context("Frontier exhausted")?;
        let (board, node) = nodes.get_index(idx).unwrap();
        if moves > node.moves {
            continue;
        }
        if board.is_goal() {
            break idx;
        }
        on_step();

        let board = board.clone();
        let moves = moves + 1;
        for neighbor in board.neighbors() {
            let priority = moves + neighbor.manhattan();
            match nodes.entry(neighbor) {
                Entry::Occupied(mut ent) => {
                    if ent.get().moves <= moves {
                        continue;
                    }
                    let neighbor_idx = ent.index();
                    *ent.get_mut() = Node { parent: idx, moves };
                    frontier.push(Reverse((priority, moves, neighbor_idx)));
                }
                Entry::Vacant(ent) => {
                    let neighbor_idx = ent.index();
                    ent.insert(Node { parent: idx, moves });
                    frontier.push(Reverse((priority, moves, neighbor_idx)));
                }
            }
        }
    };

    let mut path = std::iter::successors(Some(goal_idx), |&idx| {
        let parent = nodes.get_index(idx).unwrap().1.parent;
        (parent != NO_PARENT).then_some(parent)
    })
    .map(|idx| nodes.get_index(idx).unwrap().0.clone())
    .collect::<Vec<_>>();
    path.reverse();

    let moves = nodes.get_index(goal_idx).unwrap().1.moves;
    Ok(Solution { moves, path })
}

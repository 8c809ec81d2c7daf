// src/validate/graph.rs
//! Граф занятых клеток для диагностики отклонённых попыток
//!
//! На решение «принять/отклонить» не влияет: его принимают `exists_path` и
//! `all_connected`. Граф нужен, чтобы сказать, на сколько областей распалась сетка.

use crate::grid::{Grid, Position};
use petgraph::algo::connected_components;
use petgraph::graph::{NodeIndex, UnGraph};
use std::collections::HashMap;

/// Строит неориентированный граф: вершина — занятая клетка, ребро — 4-соседство
#[must_use]
pub fn occupancy_graph(grid: &Grid) -> UnGraph<Position, ()> {
    let mut graph = UnGraph::new_undirected();
    let mut pos_to_node: HashMap<Position, NodeIndex> = HashMap::new();

    for pos in grid.occupied() {
        let node = graph.add_node(pos);
        pos_to_node.insert(pos, node);
    }

    // ребро добавляется только со стороны меньшей позиции, без дублей
    for (&pos, &node) in &pos_to_node {
        for next in grid.neighbors(pos) {
            if next > pos
                && let Some(&other) = pos_to_node.get(&next)
            {
                graph.add_edge(node, other, ());
            }
        }
    }
    graph
}

/// Число 4-связных областей из занятых клеток
#[must_use]
pub fn count_regions(grid: &Grid) -> usize {
    connected_components(&occupancy_graph(grid))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::RoomKind;
    use crate::grid::Cell;
    use crate::placer::place;

    #[test]
    fn counts_separate_regions() {
        let mut grid = Grid::new(6);
        assert_eq!(count_regions(&grid), 0);

        grid.set(Position::new(0, 0), Cell::Start);
        grid.set(Position::new(5, 5), Cell::Finish);
        assert_eq!(count_regions(&grid), 2);

        place(&mut grid, RoomKind::Square2, 2, 2);
        assert_eq!(count_regions(&grid), 3);

        place(&mut grid, RoomKind::Vertical, 5, 3);
        assert_eq!(count_regions(&grid), 3);

        place(&mut grid, RoomKind::Single, 4, 3);
        assert_eq!(count_regions(&grid), 2);
    }

    #[test]
    fn graph_edges_follow_adjacency() {
        let mut grid = Grid::new(4);
        place(&mut grid, RoomKind::Square2, 0, 0);
        let graph = occupancy_graph(&grid);
        assert_eq!(graph.node_count(), 4);
        assert_eq!(graph.edge_count(), 4);
    }
}

// src/validate/connectivity.rs
use crate::grid::Grid;
use std::collections::VecDeque;

/// Образуют ли все занятые клетки одну 4-связную область.
///
/// Стартовая клетка поиска — первая занятая при построчном обходе. Для сетки
/// без занятых клеток возвращает `false`.
#[must_use]
pub fn all_connected(grid: &Grid) -> bool {
    let Some(seed) = grid.occupied().next() else {
        return false;
    };

    let mut visited = vec![false; grid.size() * grid.size()];
    let mut queue = VecDeque::new();
    visited[grid.index_of(seed)] = true;
    queue.push_back(seed);

    while let Some(pos) = queue.pop_front() {
        for next in grid.neighbors(pos) {
            let idx = grid.index_of(next);
            if !visited[idx] && grid.get(next).is_occupied() {
                visited[idx] = true;
                queue.push_back(next);
            }
        }
    }

    grid.occupied().all(|pos| visited[grid.index_of(pos)])
}

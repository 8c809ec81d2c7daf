// src/validate/path.rs
use crate::grid::{Grid, Position};
use std::collections::VecDeque;

/// Есть ли путь из `start` в `finish` по занятым 4-связным клеткам.
///
/// Поиск в ширину; клетка помечается посещённой при постановке в очередь.
/// Сама клетка `start` в очередь попадает всегда, даже если она пуста.
#[must_use]
pub fn exists_path(grid: &Grid, start: Position, finish: Position) -> bool {
    let mut visited = vec![false; grid.size() * grid.size()];
    let mut queue = VecDeque::new();

    visited[grid.index_of(start)] = true;
    queue.push_back(start);

    while let Some(pos) = queue.pop_front() {
        if pos == finish {
            return true;
        }
        for next in grid.neighbors(pos) {
            let idx = grid.index_of(next);
            if !visited[idx] && grid.get(next).is_occupied() {
                visited[idx] = true;
                queue.push_back(next);
            }
        }
    }
    false
}

// src/placer.rs
//! Размещение комнат на сетке
//!
//! `can_place` проверяет границы и пересечения, `place` штампует метку комнаты.
//! Якорь задаётся знаковыми координатами: фигуры с отрицательными смещениями
//! проверяются так же, как остальные.

use crate::catalog::RoomKind;
use crate::grid::{Cell, Grid, Position};

/// Можно ли поставить комнату `kind` с якорем `(x, y)`
///
/// Каждая клетка фигуры должна попасть в `[0, N)×[0, N)` и быть пустой.
#[must_use]
pub fn can_place(grid: &Grid, kind: RoomKind, x: usize, y: usize) -> bool {
    let anchor = Position::new(x, y);
    kind.shape().iter().all(|&(dx, dy)| {
        grid.offset(anchor, dx, dy)
            .is_some_and(|pos| grid.get(pos) == Cell::Empty)
    })
}

/// Записывает метку комнаты во все клетки фигуры.
///
/// Вызывающий обязан сначала получить `true` от [`can_place`] с теми же
/// аргументами. Клетки за пределами сетки не пишутся.
pub fn place(grid: &mut Grid, kind: RoomKind, x: usize, y: usize) {
    debug_assert!(can_place(grid, kind, x, y), "{kind:?} does not fit at ({x}, {y})");
    let anchor = Position::new(x, y);
    for &(dx, dy) in kind.shape() {
        if let Some(pos) = grid.offset(anchor, dx, dy) {
            grid.set(pos, Cell::Room(kind));
        }
    }
}

/// `can_place` + `place`. Возвращает, была ли комната поставлена.
pub fn try_place(grid: &mut Grid, kind: RoomKind, x: usize, y: usize) -> bool {
    if can_place(grid, kind, x, y) {
        place(grid, kind, x, y);
        true
    } else {
        false
    }
}

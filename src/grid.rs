// src/grid.rs
//! Квадратная сетка этажа
//!
//! Клетка хранит `Cell`: пусто, старт, финиш или тип комнаты. Координата `x` —
//! номер строки, `y` — номер столбца; индекс в `data` считается как `x * size + y`,
//! так что обход `data` по порядку совпадает с построчным обходом сетки.

use crate::catalog::RoomKind;
use std::fmt;

/// Содержимое одной клетки
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Cell {
    #[default]
    Empty,
    Start,
    Finish,
    Room(RoomKind),
}

impl Cell {
    /// Текстовая метка клетки: `' '`, `'S'`, `'F'` или метка комнаты
    #[must_use]
    pub fn label(self) -> char {
        match self {
            Cell::Empty => ' ',
            Cell::Start => 'S',
            Cell::Finish => 'F',
            Cell::Room(kind) => kind.label(),
        }
    }

    /// Проходима ли клетка при поиске пути (всё, кроме пустых)
    #[must_use]
    pub fn is_occupied(self) -> bool {
        !matches!(self, Cell::Empty)
    }
}

/// Позиция на сетке, `0 ≤ x, y < size`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Position {
    pub x: usize,
    pub y: usize,
}

impl Position {
    #[must_use]
    pub const fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }

    /// Четыре угла сетки в порядке (0,0), (0,N−1), (N−1,0), (N−1,N−1)
    ///
    /// # Примеры
    /// ```
    /// use dungeon_mapgen::grid::Position;
    /// let corners = Position::corners(10);
    /// assert_eq!(corners[0], Position::new(0, 0));
    /// assert_eq!(corners[3], Position::new(9, 9));
    /// ```
    #[must_use]
    pub fn corners(size: usize) -> [Position; 4] {
        let last = size.saturating_sub(1);
        [
            Position::new(0, 0),
            Position::new(0, last),
            Position::new(last, 0),
            Position::new(last, last),
        ]
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

const DIRECTIONS: [(i32, i32); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];

/// Сетка N×N
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    size: usize,
    data: Vec<Cell>,
}

impl Grid {
    /// Пустая сетка `size × size`
    #[must_use]
    pub fn new(size: usize) -> Self {
        Self {
            size,
            data: vec![Cell::Empty; size * size],
        }
    }

    /// Длина стороны сетки
    #[must_use]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Клетка по координатам. Паникует при выходе за границы.
    #[must_use]
    pub fn cell(&self, x: usize, y: usize) -> Cell {
        self.data[self.index_of(Position::new(x, y))]
    }

    #[must_use]
    pub fn get(&self, pos: Position) -> Cell {
        self.cell(pos.x, pos.y)
    }

    /// Паникует при выходе за границы
    pub fn set(&mut self, pos: Position, cell: Cell) {
        let idx = self.index_of(pos);
        self.data[idx] = cell;
    }

    /// Сбрасывает все клетки в `Cell::Empty`
    pub fn clear(&mut self) {
        self.data.fill(Cell::Empty);
    }

    /// Позиция `anchor + (dx, dy)`, если она лежит внутри сетки
    #[must_use]
    pub fn offset(&self, anchor: Position, dx: i32, dy: i32) -> Option<Position> {
        let x = anchor.x as i64 + i64::from(dx);
        let y = anchor.y as i64 + i64::from(dy);
        let size = self.size as i64;
        if (0..size).contains(&x) && (0..size).contains(&y) {
            Some(Position::new(x as usize, y as usize))
        } else {
            None
        }
    }

    /// 4-связные соседи внутри сетки (без диагоналей)
    pub fn neighbors(&self, pos: Position) -> impl Iterator<Item = Position> + '_ {
        DIRECTIONS
            .iter()
            .filter_map(move |&(dx, dy)| self.offset(pos, dx, dy))
    }

    /// Все занятые клетки в построчном порядке
    pub fn occupied(&self) -> impl Iterator<Item = Position> + '_ {
        self.data
            .iter()
            .enumerate()
            .filter(|(_, cell)| cell.is_occupied())
            .map(|(idx, _)| Position::new(idx / self.size, idx % self.size))
    }

    #[must_use]
    pub fn occupied_count(&self) -> usize {
        self.data.iter().filter(|cell| cell.is_occupied()).count()
    }

    /// Индекс клетки в плоском массиве, пригоден для массивов посещённых клеток.
    /// Паникует при выходе за границы.
    #[must_use]
    pub fn index_of(&self, pos: Position) -> usize {
        assert!(
            pos.x < self.size && pos.y < self.size,
            "position {pos} is outside the {0}×{0} grid",
            self.size
        );
        pos.x * self.size + pos.y
    }
}

/// Сетка в виде текста: строка на каждый `x`, метки клеток по `y`
impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.data.chunks(self.size.max(1)) {
            let line: String = row.iter().map(|cell| cell.label()).collect();
            writeln!(f, "|{line}|")?;
        }
        Ok(())
    }
}

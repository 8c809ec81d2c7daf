pub mod connectivity;
pub mod graph;
pub mod path;

pub use connectivity::all_connected;
pub use graph::{count_regions, occupancy_graph};
pub use path::exists_path;

use crate::grid::{Grid, Position};
use std::fmt;

/// Почему попытка отклонена
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RejectReason {
    /// Финиш недостижим из старта
    NoPath,
    /// Путь есть, но занятые клетки распались на несколько областей
    Disconnected { regions: usize },
}

impl fmt::Display for RejectReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RejectReason::NoPath => write!(f, "no path from start to finish"),
            RejectReason::Disconnected { regions } => {
                write!(f, "rooms split into {regions} regions")
            }
        }
    }
}

/// Обе проверки по порядку: сначала путь старт → финиш, затем общая связность.
///
/// Связность строго сильнее пути, но выполняются обе.
pub fn validate(grid: &Grid, start: Position, finish: Position) -> Result<(), RejectReason> {
    if !exists_path(grid, start, finish) {
        return Err(RejectReason::NoPath);
    }
    if !all_connected(grid) {
        return Err(RejectReason::Disconnected {
            regions: count_regions(grid),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::RoomKind;
    use crate::grid::Cell;
    use crate::placer::place;

    #[test]
    fn reports_missing_path_first() {
        let mut grid = Grid::new(3);
        let (start, finish) = (Position::new(0, 0), Position::new(2, 2));
        grid.set(start, Cell::Start);
        grid.set(finish, Cell::Finish);
        assert_eq!(validate(&grid, start, finish), Err(RejectReason::NoPath));
    }

    #[test]
    fn reports_stray_rooms() {
        let mut grid = Grid::new(5);
        let (start, finish) = (Position::new(0, 0), Position::new(0, 4));
        grid.set(start, Cell::Start);
        grid.set(finish, Cell::Finish);
        place(&mut grid, RoomKind::Vertical, 0, 1);
        place(&mut grid, RoomKind::Single, 0, 3);
        assert_eq!(validate(&grid, start, finish), Ok(()));

        place(&mut grid, RoomKind::Square2, 3, 3);
        assert_eq!(
            validate(&grid, start, finish),
            Err(RejectReason::Disconnected { regions: 2 })
        );
    }
}

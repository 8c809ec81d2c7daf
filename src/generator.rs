// src/generator.rs
//! Генерация этажа методом «сгенерировать и проверить»
//!
//! Одна попытка: выбрать старт и финиш среди углов, бросить заданное число
//! случайных комнат, затем проверить путь старт → финиш и общую связность.
//! Отклонённая попытка выбрасывается целиком, следующая начинается с чистой сетки.

use crate::catalog::RoomCatalog;
use crate::config::GenerationParams;
use crate::error::GenerationError;
use crate::grid::{Cell, Grid, Position};
use crate::placer::try_place;
use crate::validate::validate;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
#[cfg(feature = "parallel")]
use rayon::prelude::*;
use tracing::{debug, info};

/// Принятая карта
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedMap {
    pub grid: Grid,
    pub start: Position,
    pub finish: Position,
    /// Номер принятой попытки (с единицы)
    pub attempts: u64,
    /// Сколько комнат удалось поставить в принятой попытке
    pub rooms_placed: usize,
}

struct Attempt {
    grid: Grid,
    start: Position,
    finish: Position,
    rooms_placed: usize,
}

/// Генератор карт. Каталог только читается и общий для всех попыток.
#[derive(Debug, Clone)]
pub struct MapGenerator<'a> {
    catalog: &'a RoomCatalog,
    grid_size: usize,
    trials_per_attempt: usize,
    max_attempts: Option<u64>,
}

impl<'a> MapGenerator<'a> {
    pub fn new(
        catalog: &'a RoomCatalog,
        params: &GenerationParams,
    ) -> Result<Self, GenerationError> {
        if params.grid_size < 2 {
            return Err(GenerationError::GridTooSmall {
                size: params.grid_size,
            });
        }
        if catalog.is_empty() {
            return Err(GenerationError::EmptyCatalog);
        }
        Ok(Self {
            catalog,
            grid_size: params.grid_size,
            trials_per_attempt: params.trials_per_attempt,
            max_attempts: params.max_attempts,
        })
    }

    /// Повторяет попытки, пока карта не пройдёт обе проверки.
    ///
    /// Без `max_attempts` цикл не ограничен и при неудачном сочетании
    /// каталога и размера сетки может не завершиться.
    pub fn generate<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
    ) -> Result<GeneratedMap, GenerationError> {
        let mut attempts: u64 = 0;
        loop {
            if let Some(limit) = self.max_attempts
                && attempts >= limit
            {
                return Err(GenerationError::AttemptsExhausted { attempts });
            }
            attempts += 1;

            let attempt = self.attempt(rng);
            match validate(&attempt.grid, attempt.start, attempt.finish) {
                Ok(()) => {
                    info!(
                        attempts,
                        rooms = attempt.rooms_placed,
                        "valid path found and all rooms are connected"
                    );
                    return Ok(GeneratedMap {
                        grid: attempt.grid,
                        start: attempt.start,
                        finish: attempt.finish,
                        attempts,
                        rooms_placed: attempt.rooms_placed,
                    });
                }
                Err(reason) => {
                    debug!(attempt = attempts, %reason, "map rejected, regenerating");
                }
            }
        }
    }

    fn attempt<R: Rng + ?Sized>(&self, rng: &mut R) -> Attempt {
        let (start, finish) = pick_endpoints(self.grid_size, rng);

        let mut grid = Grid::new(self.grid_size);
        grid.set(start, Cell::Start);
        grid.set(finish, Cell::Finish);

        let mut rooms_placed = 0;
        for _ in 0..self.trials_per_attempt {
            let Some(kind) = self.catalog.choose(rng) else {
                break;
            };
            let x = rng.gen_range(0..self.grid_size);
            let y = rng.gen_range(0..self.grid_size);
            if try_place(&mut grid, kind, x, y) {
                rooms_placed += 1;
            }
        }

        Attempt {
            grid,
            start,
            finish,
            rooms_placed,
        }
    }
}

/// Старт — случайный угол, финиш — случайный из трёх оставшихся
fn pick_endpoints<R: Rng + ?Sized>(size: usize, rng: &mut R) -> (Position, Position) {
    let corners = Position::corners(size);
    let start = corners[rng.gen_range(0..corners.len())];
    let rest: Vec<Position> = corners.into_iter().filter(|&c| c != start).collect();
    let finish = rest[rng.gen_range(0..rest.len())];
    (start, finish)
}

/// Генерирует карту по параметрам, ГСЧ засевается `params.seed`
pub fn generate_map(params: &GenerationParams) -> Result<GeneratedMap, GenerationError> {
    let catalog = params.catalog();
    let generator = MapGenerator::new(&catalog, params)?;
    let mut rng = ChaCha8Rng::seed_from_u64(params.seed);
    generator.generate(&mut rng)
}

/// Генерирует `count` независимых карт с сидами `seed, seed + 1, ...`
///
/// Каждая карта строится в одном потоке; с фичей `parallel` карты строятся
/// параллельно. Порядок результата совпадает с порядком сидов.
#[must_use]
pub fn generate_batch(
    params: &GenerationParams,
    count: usize,
) -> Vec<Result<GeneratedMap, GenerationError>> {
    let for_index = |i: usize| GenerationParams {
        seed: params.seed.wrapping_add(i as u64),
        ..params.clone()
    };

    #[cfg(feature = "parallel")]
    let maps = (0..count)
        .into_par_iter()
        .map(|i| generate_map(&for_index(i)))
        .collect();

    #[cfg(not(feature = "parallel"))]
    let maps = (0..count).map(|i| generate_map(&for_index(i))).collect();

    maps
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::RoomKind;
    use crate::validate::{all_connected, exists_path};

    fn params(seed: u64) -> GenerationParams {
        GenerationParams {
            seed,
            ..GenerationParams::default()
        }
    }

    #[test]
    fn endpoints_are_distinct_corners() {
        let mut rng = ChaCha8Rng::seed_from_u64(11);
        let corners = Position::corners(10);
        for _ in 0..500 {
            let (start, finish) = pick_endpoints(10, &mut rng);
            assert_ne!(start, finish);
            assert!(corners.contains(&start));
            assert!(corners.contains(&finish));
        }
    }

    #[test]
    fn every_corner_pair_shows_up() {
        let mut rng = ChaCha8Rng::seed_from_u64(5);
        let mut seen = std::collections::HashSet::new();
        for _ in 0..1000 {
            seen.insert(pick_endpoints(4, &mut rng));
        }
        assert_eq!(seen.len(), 12);
    }

    #[test]
    fn accepted_map_passes_both_checks() {
        let map = generate_map(&params(2024)).unwrap();
        assert!(exists_path(&map.grid, map.start, map.finish));
        assert!(all_connected(&map.grid));
        assert_eq!(map.grid.get(map.start), Cell::Start);
        assert_eq!(map.grid.get(map.finish), Cell::Finish);
        assert!(map.attempts >= 1);
    }

    #[test]
    fn same_seed_same_map() {
        let first = generate_map(&params(77)).unwrap();
        let second = generate_map(&params(77)).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn rejects_degenerate_grid() {
        let catalog = RoomCatalog::standard();
        let tiny = GenerationParams {
            grid_size: 1,
            ..params(0)
        };
        assert_eq!(
            MapGenerator::new(&catalog, &tiny).unwrap_err(),
            GenerationError::GridTooSmall { size: 1 }
        );
    }

    #[test]
    fn rejects_empty_catalog() {
        let catalog = RoomCatalog::from_kinds(Vec::<RoomKind>::new());
        assert_eq!(
            MapGenerator::new(&catalog, &params(0)).unwrap_err(),
            GenerationError::EmptyCatalog
        );
    }

    #[test]
    fn bounded_loop_reports_exhaustion() {
        // без комнат углы сетки 10×10 никогда не соединятся
        let hopeless = GenerationParams {
            trials_per_attempt: 0,
            max_attempts: Some(25),
            ..params(3)
        };
        assert_eq!(
            generate_map(&hopeless).unwrap_err(),
            GenerationError::AttemptsExhausted { attempts: 25 }
        );
    }

    #[test]
    fn two_by_two_without_rooms_accepts_adjacent_corners() {
        let bare = GenerationParams {
            grid_size: 2,
            trials_per_attempt: 0,
            ..params(9)
        };
        let map = generate_map(&bare).unwrap();
        assert_eq!(map.rooms_placed, 0);
        assert_eq!(map.grid.occupied_count(), 2);
        let dx = map.start.x.abs_diff(map.finish.x);
        let dy = map.start.y.abs_diff(map.finish.y);
        assert_eq!(dx + dy, 1);
    }

    #[test]
    fn rooms_placed_matches_grid_contents() {
        let catalog = RoomCatalog::standard();
        let generator = MapGenerator::new(&catalog, &params(0)).unwrap();
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        let map = generator.generate(&mut rng).unwrap();

        let mut rooms = 0;
        for kind in RoomKind::ALL {
            let cells = map
                .grid
                .occupied()
                .filter(|&pos| map.grid.get(pos) == Cell::Room(kind))
                .count();
            assert_eq!(cells % kind.shape().len(), 0, "{kind:?}");
            rooms += cells / kind.shape().len();
        }
        assert_eq!(rooms, map.rooms_placed);
    }

    #[test]
    fn batch_matches_individual_runs() {
        let base = params(100);
        let batch = generate_batch(&base, 4);
        assert_eq!(batch.len(), 4);
        for (i, map) in batch.into_iter().enumerate() {
            assert_eq!(map, generate_map(&params(100 + i as u64)));
        }
    }
}

// src/catalog.rs
//! Каталог типов комнат
//!
//! Каждая комната — полимино: набор смещений `(dx, dy)` относительно якорной клетки.
//! Набор типов закрыт и известен статически, поэтому форма, метка и цвет
//! возвращаются напрямую из `match`, без поиска по списку.

use rand::Rng;
use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};

/// Тип комнаты
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RoomKind {
    /// 1×1
    Single,
    /// 2×1, вытянута по `y`
    Vertical,
    /// 1×2, вытянута по `x`
    Horizontal,
    /// 2×2
    Square2,
    /// 3×3
    Square3,
    /// Несимметричная фигура из 11 клеток, уходит в отрицательные `y`
    Heart,
}

impl RoomKind {
    /// Все типы в порядке стандартного каталога
    pub const ALL: [RoomKind; 6] = [
        RoomKind::Single,
        RoomKind::Vertical,
        RoomKind::Horizontal,
        RoomKind::Square2,
        RoomKind::Square3,
        RoomKind::Heart,
    ];

    /// Смещения занимаемых клеток относительно якоря
    ///
    /// # Примеры
    /// ```
    /// use dungeon_mapgen::catalog::RoomKind;
    /// assert_eq!(RoomKind::Vertical.shape(), &[(0, 0), (0, 1)]);
    /// assert_eq!(RoomKind::Heart.shape().len(), 11);
    /// ```
    #[must_use]
    pub fn shape(self) -> &'static [(i32, i32)] {
        match self {
            RoomKind::Single => &[(0, 0)],
            RoomKind::Vertical => &[(0, 0), (0, 1)],
            RoomKind::Horizontal => &[(0, 0), (1, 0)],
            RoomKind::Square2 => &[(0, 0), (0, 1), (1, 0), (1, 1)],
            RoomKind::Square3 => &[
                (0, 0),
                (0, 1),
                (0, 2),
                (1, 0),
                (1, 1),
                (1, 2),
                (2, 0),
                (2, 1),
                (2, 2),
            ],
            RoomKind::Heart => &[
                (1, -1),
                (1, -2),
                (1, -3),
                (0, -2),
                (2, 0),
                (2, -1),
                (2, -2),
                (2, -3),
                (2, -4),
                (3, -1),
                (3, -3),
            ],
        }
    }

    /// Метка, которой комната помечает клетки сетки (уникальна для каждого типа)
    #[must_use]
    pub fn label(self) -> char {
        match self {
            RoomKind::Single => 'A',
            RoomKind::Vertical => 'B',
            RoomKind::Horizontal => 'G',
            RoomKind::Square2 => 'C',
            RoomKind::Square3 => 'D',
            RoomKind::Heart => 'E',
        }
    }

    /// Обратный поиск типа по метке клетки
    #[must_use]
    pub fn from_label(label: char) -> Option<RoomKind> {
        match label {
            'A' => Some(RoomKind::Single),
            'B' => Some(RoomKind::Vertical),
            'G' => Some(RoomKind::Horizontal),
            'C' => Some(RoomKind::Square2),
            'D' => Some(RoomKind::Square3),
            'E' => Some(RoomKind::Heart),
            _ => None,
        }
    }

    /// Косметический цвет для внешнего рендерера. На валидацию не влияет.
    #[must_use]
    pub fn to_rgb(self) -> [u8; 3] {
        match self {
            RoomKind::Single => [255, 255, 0], // yellow
            RoomKind::Vertical | RoomKind::Horizontal => [255, 192, 203], // pink
            RoomKind::Square2 => [0, 0, 255], // blue
            RoomKind::Square3 => [255, 165, 0], // orange
            RoomKind::Heart => [160, 32, 240], // purple
        }
    }
}

/// Неизменяемый набор размещаемых типов комнат
///
/// Передаётся в генератор явно и разделяется всеми попытками только для чтения.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoomCatalog {
    kinds: Vec<RoomKind>,
}

impl RoomCatalog {
    /// Стандартный каталог из шести типов
    #[must_use]
    pub fn standard() -> Self {
        Self {
            kinds: RoomKind::ALL.to_vec(),
        }
    }

    /// Каталог из заданных типов. Повторы отбрасываются, порядок сохраняется.
    #[must_use]
    pub fn from_kinds(kinds: impl IntoIterator<Item = RoomKind>) -> Self {
        let mut unique = Vec::new();
        for kind in kinds {
            if !unique.contains(&kind) {
                unique.push(kind);
            }
        }
        Self { kinds: unique }
    }

    #[must_use]
    pub fn kinds(&self) -> &[RoomKind] {
        &self.kinds
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.kinds.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.kinds.is_empty()
    }

    /// Равновероятный выбор типа комнаты. `None` только для пустого каталога.
    pub fn choose<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<RoomKind> {
        self.kinds.choose(rng).copied()
    }
}

impl Default for RoomCatalog {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;
    use std::collections::HashSet;

    #[test]
    fn labels_are_distinct_and_reversible() {
        let labels: HashSet<char> = RoomKind::ALL.iter().map(|k| k.label()).collect();
        assert_eq!(labels.len(), RoomKind::ALL.len());
        for kind in RoomKind::ALL {
            assert_eq!(RoomKind::from_label(kind.label()), Some(kind));
        }
        assert_eq!(RoomKind::from_label('S'), None);
        assert_eq!(RoomKind::from_label(' '), None);
    }

    #[test]
    fn shapes_have_no_duplicate_offsets() {
        for kind in RoomKind::ALL {
            let offsets: HashSet<_> = kind.shape().iter().collect();
            assert_eq!(offsets.len(), kind.shape().len(), "{kind:?}");
        }
        assert_eq!(RoomKind::Square3.shape().len(), 9);
    }

    #[test]
    fn from_kinds_drops_duplicates_in_order() {
        let catalog = RoomCatalog::from_kinds([
            RoomKind::Square2,
            RoomKind::Single,
            RoomKind::Square2,
        ]);
        assert_eq!(catalog.kinds(), &[RoomKind::Square2, RoomKind::Single]);
    }

    #[test]
    fn choose_stays_inside_catalog() {
        let catalog = RoomCatalog::from_kinds([RoomKind::Vertical, RoomKind::Heart]);
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        for _ in 0..200 {
            let kind = catalog.choose(&mut rng).unwrap();
            assert!(catalog.kinds().contains(&kind));
        }
        assert_eq!(RoomCatalog::from_kinds(Vec::<RoomKind>::new()).choose(&mut rng), None);
    }
}

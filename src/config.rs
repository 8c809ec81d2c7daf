// src/config.rs
//! Конфигурация генерации этажа
//!
//! Этот модуль определяет параметры, управляющие генерацией:
//! - Размер сетки и число попыток размещения комнат за одну попытку генерации
//! - Ограничение на число попыток генерации (по умолчанию без ограничения)
//! - Набор типов комнат, из которых собирается каталог
//!
//! Все структуры поддерживают загрузку из TOML-файлов.

use crate::catalog::{RoomCatalog, RoomKind};
use serde::{Deserialize, Serialize};
use std::fs;

/// Параметры генерации одной карты
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationParams {
    /// Сид генератора случайных чисел (детерминированная генерация)
    pub seed: u64,

    /// Длина стороны квадратной сетки (по умолчанию 10)
    #[serde(default = "default_grid_size")]
    pub grid_size: usize,

    /// Сколько раз за попытку бросается случайная комната (по умолчанию 100).
    /// Неудачный бросок не повторяется.
    #[serde(default = "default_trials_per_attempt")]
    pub trials_per_attempt: usize,

    /// Предел числа попыток генерации:
    /// - `None` — генерировать, пока карта не пройдёт проверку,
    /// - `Some(n)` — после `n` отклонённых попыток вернуть ошибку.
    #[serde(default)]
    pub max_attempts: Option<u64>,

    /// Типы комнат в каталоге (по умолчанию все шесть)
    #[serde(default = "default_rooms")]
    pub rooms: Vec<RoomKind>,
}

fn default_grid_size() -> usize {
    10
}
fn default_trials_per_attempt() -> usize {
    100
}
fn default_rooms() -> Vec<RoomKind> {
    RoomKind::ALL.to_vec()
}

impl GenerationParams {
    /// Загружает параметры из TOML-файла
    ///
    /// # Ошибки
    /// Возвращает ошибку, если файл не найден или содержит недопустимый формат.
    ///
    /// # Пример
    /// ```toml
    /// # floor.toml
    /// seed = 42
    /// grid_size = 12
    /// max_attempts = 10000
    /// rooms = ["Single", "Vertical", "Horizontal", "Square2"]
    /// ```
    pub fn from_toml_file(path: &str) -> Result<Self, Box<dyn std::error::Error>> {
        let contents = fs::read_to_string(path)?;
        let params: Self = toml::from_str(&contents)?;
        Ok(params)
    }

    /// Каталог комнат из поля `rooms`
    #[must_use]
    pub fn catalog(&self) -> RoomCatalog {
        RoomCatalog::from_kinds(self.rooms.iter().copied())
    }
}

impl Default for GenerationParams {
    fn default() -> Self {
        Self {
            seed: 0,
            grid_size: 10,
            trials_per_attempt: 100,
            max_attempts: None,
            rooms: RoomKind::ALL.to_vec(),
        }
    }
}

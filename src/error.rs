// src/error.rs
use thiserror::Error;

/// Ошибки генерации карты
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GenerationError {
    /// При стороне меньше 2 углы сетки совпадают и старт нельзя отделить от финиша
    #[error("grid size {size} is too small: start and finish need two distinct corners")]
    GridTooSmall { size: usize },

    #[error("room catalog is empty")]
    EmptyCatalog,

    #[error("no valid map after {attempts} attempts")]
    AttemptsExhausted { attempts: u64 },
}

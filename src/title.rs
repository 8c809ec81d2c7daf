// src/title.rs
//! Косметические названия карт для заголовка в CLI. С содержимым сетки не связаны.

use rand::Rng;
use rand::seq::SliceRandom;

pub const TITLES: [&str; 20] = [
    "Mystery Dungeon",
    "Enchanted Labyrinth",
    "Maze of Wonders",
    "Forgotten Fortress",
    "Secret Passageways",
    "Hidden Chambers",
    "The Great Escape",
    "Puzzle Palace",
    "Cryptic Corridors",
    "Lost in the Grid",
    "Chamber of Secrets",
    "The Final Frontier",
    "The Forbidden City",
    "The Haunted Maze",
    "The Cursed Catacombs",
    "The Dark Domain",
    "The Phantom Zone",
    "The Twilight Zone",
    "The Enigma",
    "The Mind Bender",
];

/// Случайное название из [`TITLES`]
pub fn random_title<R: Rng + ?Sized>(rng: &mut R) -> &'static str {
    TITLES.choose(rng).copied().unwrap_or(TITLES[0])
}

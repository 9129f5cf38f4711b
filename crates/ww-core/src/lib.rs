//! Core types for Whisker Woods: boards, terrain, items, animals, and the cat.
//!
//! This crate is the world model only. It holds no randomness and no turn
//! rules; `ww-mechanics` generates boards and entities and resolves actions
//! against these types.

/// Sick animals and the final-challenge Lynx.
pub mod animal;
/// Boards, bounds, and terrain.
pub mod board;
/// The cat, its inventory, and progression state.
pub mod character;
/// Grid coordinates and WASD directions.
pub mod coord;
/// Transient entities rolled on tile entry.
pub mod entity;
/// Error types used throughout the crate.
pub mod error;
/// Items, berry colors, and ailments.
pub mod item;

pub use animal::Animal;
pub use board::{Board, Bounds, Terrain};
pub use character::{Character, FinalChallenge, Inventory, Mode};
pub use coord::{Coord, Direction};
pub use entity::Entity;
pub use error::{CoreError, CoreResult};
pub use item::{Ailment, BerryColor, Boost, Item};

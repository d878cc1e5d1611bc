//! Доменная модель бинго: диапазон номеров, вытянутые шары, фазы сессии.

pub mod drawn_set;
pub mod phase;
pub mod range;

/// Номер шара.
pub type BallNumber = i64;

// Удобные реэкспорты, чтобы в других модулях писать crate::domain::DrawRange и т.п.
pub use drawn_set::*;
pub use phase::*;
pub use range::*;

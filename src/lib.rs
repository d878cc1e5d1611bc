//! Движок бинго: диапазон номеров, анимированный розыгрыш без повторов,
//! фазы сессии SETUP → PLAYING → FINISHED.
//!
//! Здесь только логика. Отрисовка, ввод и синтез звука живут снаружи,
//! они общаются с движком через `api` и хуки `engine::DrawNotifier`.

pub mod api;
pub mod domain;
pub mod engine;
pub mod infra;
pub mod time_ctrl;

pub use domain::{BallNumber, DrawRange, DrawnSet, Phase};
pub use engine::{DrawNotifier, EngineError, GameSession, RandomSource};

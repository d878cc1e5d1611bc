use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::BallNumber;

/// Чем именно плох диапазон.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum RangeViolation {
    /// `start >= end`.
    NotAscending,
    /// `end - start` больше допустимого.
    SpanTooLarge { span: u64, max: i64 },
}

impl fmt::Display for RangeViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RangeViolation::NotAscending => {
                write!(f, "конечный номер должен быть больше начального")
            }
            RangeViolation::SpanTooLarge { span, max } => {
                write!(f, "интервал {span} больше допустимых {max} номеров")
            }
        }
    }
}

/// Ошибки движка бинго.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum EngineError {
    #[error("Некорректный диапазон [{start}; {end}]: {reason}")]
    InvalidRange {
        start: BallNumber,
        end: BallNumber,
        reason: RangeViolation,
    },

    #[error("Не удалось прочитать число из {0:?}")]
    InvalidNumber(String),

    #[error("Пул пуст: все {total} номеров диапазона уже вытянуты")]
    ExhaustedPool { total: usize },

    #[error("Розыгрыш уже идёт")]
    ConcurrentDraw,

    #[error("Сессия не запущена")]
    NotPlaying,

    #[error("Игра уже завершена")]
    GameFinished,

    #[error("Сессия уже запущена, сначала нужен сброс")]
    SessionAlreadyStarted,

    #[error("Внутренняя ошибка: {0}")]
    Internal(&'static str),
}

/// Ошибка внешнего обработчика уведомления (звук и т.п.).
///
/// Движок такие ошибки только логирует: розыгрыш из-за них не прерывается.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
#[error("Обработчик уведомления упал: {0}")]
pub struct NotifyError(pub String);

impl NotifyError {
    pub fn new(msg: impl Into<String>) -> Self {
        Self(msg.into())
    }
}

use serde::{Deserialize, Serialize};

use crate::engine::EngineError;

/// Ошибки внешнего API (то, что отдаём фронту / клиенту).
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum ApiError {
    /// Неправильные входные данные (диапазон, не число).
    BadRequest(String),

    /// Команда не может быть выполнена в текущей фазе.
    InvalidCommand(String),

    /// Внутренняя ошибка движка (нарушен инвариант).
    Internal(String),
}

impl From<EngineError> for ApiError {
    fn from(err: EngineError) -> Self {
        match err {
            EngineError::InvalidRange { .. } | EngineError::InvalidNumber(_) => {
                ApiError::BadRequest(err.to_string())
            }
            EngineError::ConcurrentDraw
            | EngineError::NotPlaying
            | EngineError::GameFinished
            | EngineError::SessionAlreadyStarted => ApiError::InvalidCommand(err.to_string()),
            EngineError::ExhaustedPool { .. } | EngineError::Internal(_) => {
                ApiError::Internal(err.to_string())
            }
        }
    }
}

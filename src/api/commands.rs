use serde::{Deserialize, Serialize};

use crate::domain::BallNumber;
use crate::engine::validation::{parse_range_input, validate_range};
use crate::engine::{DrawNotifier, DrawRequest, EngineError, GameSession, RandomSource};

use super::dto::CommandResponse;
use super::errors::ApiError;
use super::queries::build_session_view;

/// Команда верхнего уровня от фронта.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub enum SessionCommand {
    /// Запустить сессию на диапазоне (числа уже распарсены).
    StartSession(StartSessionCommand),

    /// Запустить сессию по сырому вводу формы настройки.
    StartSessionFromInput(StartSessionInput),

    /// Тянуть шар.
    RequestDraw,

    /// Начать розыгрыш заново на том же диапазоне.
    ResetDraws,

    /// Вернуться к настройке.
    ResetSession,

    /// Прокрутить часы сессии.
    Advance { delta_ms: u64 },

    /// Ничего не менять, вернуть текущее состояние.
    Snapshot,
}

/// Запуск сессии.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct StartSessionCommand {
    pub start: BallNumber,
    pub end: BallNumber,
}

/// Запуск сессии из текстовых полей.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct StartSessionInput {
    pub start: String,
    pub end: String,
}

/// Выполнить команду над сессией.
///
/// Диапазон здесь проходит полную валидацию (в т.ч. ширину), прежде чем
/// попасть в движок. Повторный «тянуть» во время анимации не ошибка, а `Ignored`.
pub fn execute_command<R: RandomSource, N: DrawNotifier>(
    session: &mut GameSession<R, N>,
    command: SessionCommand,
) -> Result<CommandResponse, ApiError> {
    match command {
        SessionCommand::StartSession(cmd) => {
            let range = validate_range(cmd.start, cmd.end)?;
            session.start_session(range)?;
            Ok(CommandResponse::SessionState(build_session_view(session)))
        }

        SessionCommand::StartSessionFromInput(input) => {
            let range = parse_range_input(&input.start, &input.end)?;
            session.start_session(range)?;
            Ok(CommandResponse::SessionState(build_session_view(session)))
        }

        SessionCommand::RequestDraw => match session.request_draw() {
            Ok(DrawRequest::Started) => Ok(CommandResponse::DrawStarted),
            Ok(DrawRequest::Finished) => Ok(CommandResponse::GameFinished),
            Err(EngineError::ConcurrentDraw) => Ok(CommandResponse::Ignored {
                reason: EngineError::ConcurrentDraw.to_string(),
            }),
            Err(err) => Err(err.into()),
        },

        SessionCommand::ResetDraws => {
            session.reset_draws()?;
            Ok(CommandResponse::Ok)
        }

        SessionCommand::ResetSession => {
            session.reset_session();
            Ok(CommandResponse::Ok)
        }

        SessionCommand::Advance { delta_ms } => {
            session.advance(delta_ms)?;
            Ok(CommandResponse::SessionState(build_session_view(session)))
        }

        SessionCommand::Snapshot => Ok(CommandResponse::SessionState(build_session_view(session))),
    }
}

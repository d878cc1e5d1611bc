use serde::{Deserialize, Serialize};

use crate::domain::Phase;
use crate::engine::{DrawNotifier, GameSession, RandomSource};

use super::dto::{BallStatus, BoardCellDto, DrawButtonState, SessionViewDto};

/// Запросы "только чтение".
#[derive(Clone, Debug, Serialize, Deserialize)]
pub enum Query {
    /// Полное состояние сессии с табло.
    GetSession,
}

/// Результат запроса "только чтение".
#[derive(Clone, Debug, Serialize, Deserialize)]
pub enum QueryResponse {
    Session(SessionViewDto),
}

pub fn run_query<R: RandomSource, N: DrawNotifier>(
    session: &GameSession<R, N>,
    query: &Query,
) -> QueryResponse {
    match query {
        Query::GetSession => QueryResponse::Session(build_session_view(session)),
    }
}

/// Сформировать DTO сессии.
pub fn build_session_view<R: RandomSource, N: DrawNotifier>(
    session: &GameSession<R, N>,
) -> SessionViewDto {
    let range = session.range();
    let current = session.current_number();

    let ball_status = if session.is_animating() {
        BallStatus::Shuffling
    } else if current.is_some() {
        BallStatus::Drawn
    } else {
        BallStatus::Waiting
    };

    let draw_button = if session.phase() == Phase::Finished {
        DrawButtonState::Finished
    } else if session.is_animating() {
        DrawButtonState::Drawing
    } else {
        DrawButtonState::Ready
    };

    SessionViewDto {
        phase: session.phase(),
        start: range.map(|r| r.start()),
        end: range.map(|r| r.end()),
        drawn_numbers: session.drawn_numbers().to_vec(),
        current_number: current,
        animation_value: session.animation_value(),
        is_animating: session.is_animating(),
        is_settling: session.is_settling(),
        remaining: session.remaining(),
        total: range.map(|r| r.size()).unwrap_or(0),
        ball_status,
        draw_button,
        cells: build_board(session),
    }
}

/// Табло: по клетке на каждый номер диапазона.
fn build_board<R: RandomSource, N: DrawNotifier>(
    session: &GameSession<R, N>,
) -> Vec<BoardCellDto> {
    let Some(range) = session.range() else {
        return Vec::new();
    };
    let drawn = session.drawn();
    let current = session.current_number();

    range
        .iter()
        .map(|number| BoardCellDto {
            number,
            drawn: drawn.contains(number),
            is_current: current == Some(number),
        })
        .collect()
}

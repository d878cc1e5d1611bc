use crate::domain::range::{DrawRange, MAX_SPAN};
use crate::domain::BallNumber;
use crate::engine::errors::{EngineError, RangeViolation};

/// Проверка диапазона до старта сессии: `start < end` и `end - start <= MAX_SPAN`.
pub fn validate_range(start: BallNumber, end: BallNumber) -> Result<DrawRange, EngineError> {
    let range = DrawRange::new(start, end)?;

    if range.span() > MAX_SPAN as u64 {
        return Err(EngineError::InvalidRange {
            start,
            end,
            reason: RangeViolation::SpanTooLarge {
                span: range.span(),
                max: MAX_SPAN,
            },
        });
    }

    Ok(range)
}

/// Разобрать диапазон из пользовательского ввода (две строки формы настройки).
///
/// Пробелы по краям допускаются, всё остальное должно быть целым числом.
pub fn parse_range_input(start: &str, end: &str) -> Result<DrawRange, EngineError> {
    let start = parse_number(start)?;
    let end = parse_number(end)?;
    validate_range(start, end)
}

fn parse_number(raw: &str) -> Result<BallNumber, EngineError> {
    raw.trim()
        .parse::<BallNumber>()
        .map_err(|_| EngineError::InvalidNumber(raw.to_string()))
}

use std::collections::HashSet;

use serde::Serialize;

use crate::domain::BallNumber;

/// Уже вытянутые номера в порядке розыгрыша.
///
/// Порядок важен (табло, «последний шар»), повторов быть не может.
/// Рядом с вектором держим `HashSet`, чтобы `contains` не был линейным.
#[derive(Clone, Debug, Default, Serialize)]
pub struct DrawnSet {
    order: Vec<BallNumber>,
    #[serde(skip)]
    seen: HashSet<BallNumber>,
}

impl DrawnSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    pub fn contains(&self, number: BallNumber) -> bool {
        self.seen.contains(&number)
    }

    /// Добавить номер в конец. Возвращает `false`, если номер уже был.
    pub fn insert(&mut self, number: BallNumber) -> bool {
        if !self.seen.insert(number) {
            return false;
        }
        self.order.push(number);
        true
    }

    /// Последний вытянутый номер.
    pub fn last(&self) -> Option<BallNumber> {
        self.order.last().copied()
    }

    pub fn as_slice(&self) -> &[BallNumber] {
        &self.order
    }

    pub fn iter(&self) -> impl Iterator<Item = BallNumber> + '_ {
        self.order.iter().copied()
    }

    pub fn clear(&mut self) {
        self.order.clear();
        self.seen.clear();
    }
}

impl PartialEq for DrawnSet {
    fn eq(&self, other: &Self) -> bool {
        self.order == other.order
    }
}

impl Eq for DrawnSet {}

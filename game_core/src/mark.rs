use std::fmt::{Display, Formatter};
use std::ops::Deref;

use serde::{Deserialize, Serialize};

/// Symbol placed on the board. The human plays [`Mark::Player`] (`X`) and
/// always moves first; the computer plays [`Mark::Opponent`] (`O`).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Mark {
    #[serde(rename = "X")]
    Player,
    #[serde(rename = "O")]
    Opponent,
}

impl Mark {
    pub fn other(self) -> Mark {
        match self {
            Mark::Player => Mark::Opponent,
            Mark::Opponent => Mark::Player,
        }
    }

    pub fn symbol(self) -> char {
        match self {
            Mark::Player => 'X',
            Mark::Opponent => 'O',
        }
    }
}

impl Display for Mark {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BoardCell(pub Option<Mark>);

impl From<Mark> for BoardCell {
    fn from(value: Mark) -> Self {
        Self(Some(value))
    }
}

impl Deref for BoardCell {
    type Target = Option<Mark>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

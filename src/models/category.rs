use std::str::FromStr;

use crate::ledger::LedgerError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Food,
    Transport,
    Entertainment,
    Shopping,
    Bills,
    Others,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Food => "Food",
            Self::Transport => "Transport",
            Self::Entertainment => "Entertainment",
            Self::Shopping => "Shopping",
            Self::Bills => "Bills",
            Self::Others => "Others",
        }
    }

    /// The fixed category set, in menu order.
    pub fn all() -> &'static [Category] {
        &[
            Self::Food,
            Self::Transport,
            Self::Entertainment,
            Self::Shopping,
            Self::Bills,
            Self::Others,
        ]
    }

    /// Step through `all()` by `delta`, wrapping at both ends.
    pub fn cycle(self, delta: i32) -> Self {
        let all = Self::all();
        let len = all.len() as i32;
        let idx = all.iter().position(|c| *c == self).unwrap_or(0) as i32;
        all[(idx + delta).rem_euclid(len) as usize]
    }
}

impl FromStr for Category {
    type Err = LedgerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Self::all()
            .iter()
            .copied()
            .find(|c| c.as_str().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| LedgerError::InvalidCategory(wanted.to_string()))
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

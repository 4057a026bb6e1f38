use std::fmt;

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize, Serializer};
use thiserror::Error;

/// Number of decimal places shown for transfer amounts.
pub const DISPLAY_SCALE: u32 = 2;

/// A single row of the party roster.
///
/// Missing fields in a serialized record fall back to the values of a fresh row,
/// so `{"name": "Ana"}` is read as an enabled participant who spent nothing.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Participant {
    pub name: String,
    pub spent: f64,
    pub alias: String,
    pub enabled: bool,
}

impl Participant {
    pub fn new(name: impl Into<String>, spent: f64, alias: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            spent,
            alias: alias.into(),
            enabled: true,
        }
    }

    pub fn disabled(mut self) -> Self {
        self.enabled = false;
        self
    }

    /// Non-finite spending cannot be stored: JSON has no NaN or infinity.
    pub fn check_spent(spent: f64) -> Result<f64, RosterEditError> {
        if spent.is_finite() {
            Ok(spent)
        } else {
            Err(RosterEditError::NonFiniteSpent { spent })
        }
    }
}

impl Default for Participant {
    fn default() -> Self {
        Self::new("", 0.0, "")
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Error)]
pub enum RosterEditError {
    #[error("No participant at position {index} (roster has {len})")]
    IndexOutOfRange { index: usize, len: usize },
    #[error("Spent amount must be a finite number (found {spent})")]
    NonFiniteSpent { spent: f64 },
}

/// Immutable snapshot of the roster.
///
/// Every edit returns a new `Roster`; the receiver is left as it was.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Roster {
    participants: Vec<Participant>,
}

impl Roster {
    pub fn new(participants: Vec<Participant>) -> Self {
        Self { participants }
    }

    /// Roster shown before anything has been entered: a single blank row.
    pub fn fresh() -> Self {
        Self::new(vec![Participant::default()])
    }

    pub fn participants(&self) -> &[Participant] {
        &self.participants
    }

    pub fn get(&self, index: usize) -> Option<&Participant> {
        self.participants.get(index)
    }

    pub fn len(&self) -> usize {
        self.participants.len()
    }

    pub fn is_empty(&self) -> bool {
        self.participants.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Participant> + '_ {
        self.participants.iter()
    }

    pub fn with_added(&self, participant: Participant) -> Self {
        let mut participants = Vec::with_capacity(self.participants.len() + 1);
        participants.extend(self.participants.iter().cloned());
        participants.push(participant);
        Self { participants }
    }

    pub fn with_updated<F>(&self, index: usize, edit: F) -> Result<Self, RosterEditError>
    where
        F: FnOnce(&mut Participant),
    {
        self.check_index(index)?;
        let mut participants = self.participants.clone();
        edit(&mut participants[index]);
        Ok(Self { participants })
    }

    pub fn without(&self, index: usize) -> Result<Self, RosterEditError> {
        self.check_index(index)?;
        let participants = self
            .participants
            .iter()
            .enumerate()
            .filter(|&(idx, _)| idx != index)
            .map(|(_, participant)| participant.clone())
            .collect();
        Ok(Self { participants })
    }

    pub fn with_spent_cleared(&self) -> Self {
        let participants = self
            .participants
            .iter()
            .map(|participant| Participant {
                spent: 0.0,
                ..participant.clone()
            })
            .collect();
        Self { participants }
    }

    fn check_index(&self, index: usize) -> Result<(), RosterEditError> {
        if index < self.participants.len() {
            Ok(())
        } else {
            Err(RosterEditError::IndexOutOfRange {
                index,
                len: self.participants.len(),
            })
        }
    }
}

impl From<Vec<Participant>> for Roster {
    fn from(participants: Vec<Participant>) -> Self {
        Self::new(participants)
    }
}

impl FromIterator<Participant> for Roster {
    fn from_iter<I: IntoIterator<Item = Participant>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

/// Net position of an enabled participant against the equal share
/// (positive: is owed money, negative: owes money).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ParticipantBalance<'a> {
    /// Position in the roster the balance was derived from.
    pub position: usize,
    pub name: &'a str,
    pub alias: &'a str,
    pub balance: f64,
}

/// Transfer amount. Holds the unrounded value; `Display` and serialization
/// round the exact binary value half away from zero to [`DISPLAY_SCALE`]
/// places, so `1.005` (stored just below the midpoint) shows as `1.00`.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd)]
pub struct Amount(f64);

impl Amount {
    pub fn new(value: f64) -> Self {
        Self(value)
    }

    pub fn value(self) -> f64 {
        self.0
    }

    /// Amount rounded to the display scale, or `None` for non-finite values.
    pub fn to_display_decimal(self) -> Option<Decimal> {
        let mut rounded = Decimal::from_f64_retain(self.0)?
            .round_dp_with_strategy(DISPLAY_SCALE, RoundingStrategy::MidpointAwayFromZero);
        rounded.rescale(DISPLAY_SCALE);
        Some(rounded)
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.to_display_decimal() {
            Some(decimal) => write!(f, "{decimal}"),
            None => write!(f, "{:.2}", self.0),
        }
    }
}

impl Serialize for Amount {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// A payment instruction: `from` pays `amount` to `to`, using the receiver's `alias`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Transfer<'a> {
    pub from: &'a str,
    pub to: &'a str,
    pub alias: &'a str,
    pub amount: Amount,
}

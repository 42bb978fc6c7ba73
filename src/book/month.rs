use serde::{Deserialize, Serialize};
use std::fmt;

/// Calendar month. Ordering follows the calendar, not the data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Month {
    January,
    February,
    March,
    April,
    May,
    June,
    July,
    August,
    September,
    October,
    November,
    December,
}

impl Month {
    pub const ALL: [Month; 12] = [
        Month::January,
        Month::February,
        Month::March,
        Month::April,
        Month::May,
        Month::June,
        Month::July,
        Month::August,
        Month::September,
        Month::October,
        Month::November,
        Month::December,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Month::January => "January",
            Month::February => "February",
            Month::March => "March",
            Month::April => "April",
            Month::May => "May",
            Month::June => "June",
            Month::July => "July",
            Month::August => "August",
            Month::September => "September",
            Month::October => "October",
            Month::November => "November",
            Month::December => "December",
        }
    }

    /// Zero-based position in the calendar year.
    pub fn position(&self) -> usize {
        Month::ALL
            .iter()
            .position(|candidate| candidate == self)
            .unwrap_or(0)
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn calendar_order_is_stable() {
        assert_eq!(Month::ALL.len(), 12);
        assert!(Month::January < Month::December);
        assert_eq!(Month::March.position(), 2);
    }

    #[test]
    fn serializes_as_full_name() {
        let json = serde_json::to_string(&Month::September).unwrap();
        assert_eq!(json, "\"September\"");
    }
}

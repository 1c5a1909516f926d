use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The five daily screening slots. `Ord` follows the declaration order,
/// which is chronological.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ShowTime {
    #[serde(rename = "10:00 AM")]
    TenAm,
    #[serde(rename = "1:00 PM")]
    OnePm,
    #[serde(rename = "4:00 PM")]
    FourPm,
    #[serde(rename = "7:00 PM")]
    SevenPm,
    #[serde(rename = "10:00 PM")]
    TenPm,
}

impl ShowTime {
    /// All slots in chronological order.
    pub const ALL: [ShowTime; 5] = [
        ShowTime::TenAm,
        ShowTime::OnePm,
        ShowTime::FourPm,
        ShowTime::SevenPm,
        ShowTime::TenPm,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            ShowTime::TenAm => "10:00 AM",
            ShowTime::OnePm => "1:00 PM",
            ShowTime::FourPm => "4:00 PM",
            ShowTime::SevenPm => "7:00 PM",
            ShowTime::TenPm => "10:00 PM",
        }
    }
}

impl fmt::Display for ShowTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One row of the bookings CSV: seats reserved for a movie at a given
/// show time, date, city and price.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Booking {
    pub show_date: NaiveDate,
    pub show_time: ShowTime,
    pub seats_booked: u32,
    pub ticket_price: f64,
    pub movie_name: String,
    #[serde(rename = "City")]
    pub city: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn show_time_labels_round_trip() {
        for slot in ShowTime::ALL {
            let json = serde_json::to_string(&slot).unwrap();
            assert_eq!(json, format!("\"{}\"", slot.label()));
            let back: ShowTime = serde_json::from_str(&json).unwrap();
            assert_eq!(back, slot);
        }
    }

    #[test]
    fn show_time_ord_is_chronological() {
        let mut slots = vec![ShowTime::TenPm, ShowTime::TenAm, ShowTime::FourPm];
        slots.sort();
        assert_eq!(slots, vec![ShowTime::TenAm, ShowTime::FourPm, ShowTime::TenPm]);
    }
}

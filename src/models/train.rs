//! Train (scheduled service) model.
//!
//! A train is the unit the optimizer dispatches. Only `priority` and
//! `current_delay_min` drive decisions; the remaining attributes describe
//! the consist and are carried through unchanged.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

use crate::error::OptimizeError;

/// Traffic class of a train. Class 1 has the highest precedence.
///
/// Serialized as its integer class (1..=5).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum Priority {
    /// Rajdhani, Shatabdi, Vande Bharat.
    Premium,
    /// Mail and express services.
    MailExpress,
    /// Ordinary passenger services.
    Passenger,
    /// Suburban EMU and MEMU locals.
    Suburban,
    /// Goods trains.
    Freight,
}

impl Priority {
    /// Integer class, 1 (highest) to 5 (lowest).
    pub fn class(self) -> u8 {
        match self {
            Priority::Premium => 1,
            Priority::MailExpress => 2,
            Priority::Passenger => 3,
            Priority::Suburban => 4,
            Priority::Freight => 5,
        }
    }

    /// Display label used by the control-room views.
    pub fn label(self) -> &'static str {
        match self {
            Priority::Premium => "Rajdhani/Shatabdi/Vande Bharat",
            Priority::MailExpress => "Mail/Express",
            Priority::Passenger => "Passenger",
            Priority::Suburban => "Suburban EMU",
            Priority::Freight => "Freight",
        }
    }
}

impl TryFrom<u8> for Priority {
    type Error = OptimizeError;

    fn try_from(class: u8) -> Result<Self, Self::Error> {
        match class {
            1 => Ok(Priority::Premium),
            2 => Ok(Priority::MailExpress),
            3 => Ok(Priority::Passenger),
            4 => Ok(Priority::Suburban),
            5 => Ok(Priority::Freight),
            other => Err(OptimizeError::InvalidPriority(other)),
        }
    }
}

impl From<Priority> for u8 {
    fn from(priority: Priority) -> Self {
        priority.class()
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "P{}", self.class())
    }
}

/// Label for a coach type code (`"1A"`, `"SL"`, ...).
pub fn coach_label(code: &str) -> Option<&'static str> {
    match code {
        "1A" => Some("First AC"),
        "2A" => Some("Second AC"),
        "3A" => Some("Third AC"),
        "SL" => Some("Sleeper"),
        "GEN" => Some("General"),
        "BOXN" => Some("Freight Box"),
        _ => None,
    }
}

/// A scheduled train service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Train {
    /// Unique train identifier.
    pub id: String,
    /// Public train number.
    pub number: String,
    /// Service name.
    pub name: String,
    /// Locomotive class.
    pub engine: String,
    /// Traffic class.
    pub priority: Priority,
    /// Rake length in meters.
    pub length_m: u32,
    /// Maximum permitted speed (km/h).
    pub max_speed_kmh: u32,
    /// Station IDs served, in running order.
    pub route: Vec<String>,
    /// Coach type code → number of coaches.
    pub coaches: BTreeMap<String, u32>,
    /// Minutes behind schedule. `None` = running on time.
    #[serde(default)]
    pub current_delay_min: Option<u32>,
}

impl Train {
    /// Creates a train with the given ID and traffic class.
    ///
    /// The number defaults to the ID.
    pub fn new(id: impl Into<String>, priority: Priority) -> Self {
        let id = id.into();
        Self {
            number: id.clone(),
            id,
            name: String::new(),
            engine: String::new(),
            priority,
            length_m: 0,
            max_speed_kmh: 0,
            route: Vec::new(),
            coaches: BTreeMap::new(),
            current_delay_min: None,
        }
    }

    /// Sets the public train number.
    pub fn with_number(mut self, number: impl Into<String>) -> Self {
        self.number = number.into();
        self
    }

    /// Sets the service name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the locomotive class.
    pub fn with_engine(mut self, engine: impl Into<String>) -> Self {
        self.engine = engine.into();
        self
    }

    /// Sets rake length and maximum speed.
    pub fn with_dimensions(mut self, length_m: u32, max_speed_kmh: u32) -> Self {
        self.length_m = length_m;
        self.max_speed_kmh = max_speed_kmh;
        self
    }

    /// Sets the route from a list of station IDs.
    pub fn with_route<I, S>(mut self, stations: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.route = stations.into_iter().map(Into::into).collect();
        self
    }

    /// Adds coaches of one type.
    pub fn with_coaches(mut self, code: impl Into<String>, count: u32) -> Self {
        *self.coaches.entry(code.into()).or_insert(0) += count;
        self
    }

    /// Sets the current delay in minutes.
    pub fn with_delay(mut self, minutes: u32) -> Self {
        self.current_delay_min = Some(minutes);
        self
    }

    /// Current delay, treating a missing value as on time.
    pub fn delay_min(&self) -> u32 {
        self.current_delay_min.unwrap_or(0)
    }

    /// `"{number} {name}"`, as shown against recommendations.
    pub fn display_name(&self) -> String {
        format!("{} {}", self.number, self.name)
    }

    /// Total coaches in the rake.
    pub fn total_coaches(&self) -> u32 {
        self.coaches.values().sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_train_builder() {
        let train = Train::new("12301", Priority::Premium)
            .with_name("Rajdhani Express")
            .with_engine("WAP7")
            .with_dimensions(750, 130)
            .with_route(["HWH", "ASN", "GAYA"])
            .with_coaches("1A", 1)
            .with_coaches("2A", 3)
            .with_coaches("3A", 5)
            .with_delay(0);

        assert_eq!(train.number, "12301");
        assert_eq!(train.display_name(), "12301 Rajdhani Express");
        assert_eq!(train.route, vec!["HWH", "ASN", "GAYA"]);
        assert_eq!(train.total_coaches(), 9);
        assert_eq!(train.current_delay_min, Some(0));
    }

    #[test]
    fn test_missing_delay_is_on_time() {
        let train = Train::new("T1", Priority::Passenger);
        assert_eq!(train.current_delay_min, None);
        assert_eq!(train.delay_min(), 0);
    }

    #[test]
    fn test_priority_conversion() {
        for class in 1..=5u8 {
            let p = Priority::try_from(class).unwrap();
            assert_eq!(p.class(), class);
            assert_eq!(u8::from(p), class);
        }
        assert_eq!(Priority::try_from(0), Err(OptimizeError::InvalidPriority(0)));
        assert_eq!(Priority::try_from(6), Err(OptimizeError::InvalidPriority(6)));
    }

    #[test]
    fn test_priority_serde_as_integer() {
        let json = serde_json::to_string(&Priority::Suburban).unwrap();
        assert_eq!(json, "4");
        let p: Priority = serde_json::from_str("2").unwrap();
        assert_eq!(p, Priority::MailExpress);
        assert!(serde_json::from_str::<Priority>("9").is_err());
    }

    #[test]
    fn test_train_deserialize_without_delay() {
        let json = r#"{
            "id": "63501", "number": "63501", "name": "Local MEMU", "engine": "WDM3D",
            "priority": 4, "length_m": 350, "max_speed_kmh": 80,
            "route": ["ASN", "DHN"], "coaches": {"GEN": 12}
        }"#;
        let train: Train = serde_json::from_str(json).unwrap();
        assert_eq!(train.priority, Priority::Suburban);
        assert_eq!(train.delay_min(), 0);
        assert_eq!(train.total_coaches(), 12);
    }

    #[test]
    fn test_labels() {
        assert_eq!(Priority::Freight.label(), "Freight");
        assert_eq!(coach_label("SL"), Some("Sleeper"));
        assert_eq!(coach_label("XYZ"), None);
    }
}

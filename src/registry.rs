//! Fixed network dataset supplied to the optimizer.
//!
//! The registry is read-only for the lifetime of the process: it is built
//! once and handed to the optimizer wholesale on each run.

use crate::models::{NetworkSection, Priority, Station, Train};
use crate::validation::{validate_network, ValidationResult};

/// Stations, sections and trains of one controlled network.
#[derive(Debug, Clone, Default)]
pub struct TrainRegistry {
    stations: Vec<Station>,
    sections: Vec<NetworkSection>,
    trains: Vec<Train>,
}

impl TrainRegistry {
    /// Creates a registry from its parts.
    pub fn new(stations: Vec<Station>, sections: Vec<NetworkSection>, trains: Vec<Train>) -> Self {
        Self {
            stations,
            sections,
            trains,
        }
    }

    /// The Howrah–Gaya demonstration network.
    pub fn sample() -> Self {
        let stations = vec![
            Station::new("HWH", "Howrah", 23),
            Station::new("ASN", "Asansol", 7),
            Station::new("DHN", "Dhanbad", 6),
            Station::new("GAYA", "Gaya", 5),
        ];

        let sections = vec![
            NetworkSection::new("HWH", "ASN")
                .with_name("Howrah → Asansol")
                .with_limits(200, 110),
            NetworkSection::new("ASN", "DHN")
                .with_name("Asansol → Dhanbad")
                .with_limits(65, 100),
            NetworkSection::new("DHN", "GAYA")
                .with_name("Dhanbad → Gaya")
                .with_limits(120, 110),
        ];

        let trains = vec![
            Train::new("12301", Priority::Premium)
                .with_name("Rajdhani Express")
                .with_engine("WAP7")
                .with_dimensions(750, 130)
                .with_route(["HWH", "ASN", "GAYA"])
                .with_coaches("1A", 1)
                .with_coaches("2A", 3)
                .with_coaches("3A", 5)
                .with_delay(0),
            Train::new("13010", Priority::MailExpress)
                .with_name("Doon Express")
                .with_engine("WAP4")
                .with_dimensions(650, 110)
                .with_route(["HWH", "ASN", "DHN"])
                .with_coaches("SL", 12)
                .with_coaches("3A", 5)
                .with_coaches("2A", 2)
                .with_delay(5),
            Train::new("15659", Priority::MailExpress)
                .with_name("Kanchanjunga Express")
                .with_engine("WAP4")
                .with_dimensions(700, 110)
                .with_route(["HWH", "ASN", "DHN", "GAYA"])
                .with_coaches("SL", 14)
                .with_coaches("3A", 4)
                .with_coaches("2A", 2)
                .with_coaches("1A", 1)
                .with_delay(2),
            Train::new("63501", Priority::Suburban)
                .with_name("Local MEMU")
                .with_engine("WDM3D")
                .with_dimensions(350, 80)
                .with_route(["ASN", "DHN"])
                .with_coaches("GEN", 12)
                .with_delay(0),
            Train::new("15959", Priority::Freight)
                .with_name("Coal Freight")
                .with_engine("WAG9")
                .with_dimensions(1400, 70)
                .with_route(["DHN", "GAYA"])
                .with_coaches("BOXN", 58)
                .with_delay(15),
        ];

        Self::new(stations, sections, trains)
    }

    pub fn stations(&self) -> &[Station] {
        &self.stations
    }

    pub fn sections(&self) -> &[NetworkSection] {
        &self.sections
    }

    /// All trains, in registry order.
    pub fn trains(&self) -> &[Train] {
        &self.trains
    }

    pub fn station(&self, id: &str) -> Option<&Station> {
        self.stations.iter().find(|s| s.id == id)
    }

    pub fn section(&self, id: &str) -> Option<&NetworkSection> {
        self.sections.iter().find(|s| s.id == id)
    }

    pub fn train(&self, id: &str) -> Option<&Train> {
        self.trains.iter().find(|t| t.id == id)
    }

    /// Trains whose route calls at the given station.
    pub fn trains_calling_at<'a>(&'a self, station_id: &'a str) -> impl Iterator<Item = &'a Train> + 'a {
        self.trains
            .iter()
            .filter(move |t| t.route.iter().any(|s| s == station_id))
    }

    /// Checks internal consistency of the dataset.
    pub fn validate(&self) -> ValidationResult {
        validate_network(&self.stations, &self.sections, &self.trains)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_is_consistent() {
        let registry = TrainRegistry::sample();
        assert!(registry.validate().is_ok());
        assert_eq!(registry.stations().len(), 4);
        assert_eq!(registry.sections().len(), 3);
        assert_eq!(registry.trains().len(), 5);
    }

    #[test]
    fn test_lookups() {
        let registry = TrainRegistry::sample();
        assert_eq!(registry.station("HWH").unwrap().platforms, 23);
        assert_eq!(registry.section("DHN-GAYA").unwrap().distance_km, 120);

        let freight = registry.train("15959").unwrap();
        assert_eq!(freight.priority, Priority::Freight);
        assert_eq!(freight.delay_min(), 15);
        assert_eq!(freight.total_coaches(), 58);
        assert!(registry.train("99999").is_none());
    }

    #[test]
    fn test_trains_calling_at() {
        let registry = TrainRegistry::sample();
        let ids: Vec<&str> = registry
            .trains_calling_at("GAYA")
            .map(|t| t.id.as_str())
            .collect();
        assert_eq!(ids, vec!["12301", "15659", "15959"]);
    }
}

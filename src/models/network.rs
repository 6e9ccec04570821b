//! Network topology: stations and the block sections between them.

use serde::{Deserialize, Serialize};

/// A station on the controlled network.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Station {
    /// Station code (e.g. `"HWH"`).
    pub id: String,
    /// Station name.
    pub name: String,
    /// Number of platforms.
    pub platforms: u32,
}

impl Station {
    /// Creates a station.
    pub fn new(id: impl Into<String>, name: impl Into<String>, platforms: u32) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            platforms,
        }
    }
}

/// A section of line between two stations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NetworkSection {
    /// Section identifier (e.g. `"HWH-ASN"`).
    pub id: String,
    /// Display name.
    pub name: String,
    /// Origin station ID.
    pub from: String,
    /// Destination station ID.
    pub to: String,
    /// Length in kilometers.
    pub distance_km: u32,
    /// Sectional speed limit (km/h).
    pub max_speed_kmh: u32,
}

impl NetworkSection {
    /// Creates a section between two stations. The ID is `"{from}-{to}"`.
    pub fn new(from: impl Into<String>, to: impl Into<String>) -> Self {
        let from = from.into();
        let to = to.into();
        Self {
            id: format!("{from}-{to}"),
            name: String::new(),
            from,
            to,
            distance_km: 0,
            max_speed_kmh: 0,
        }
    }

    /// Sets the display name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets length and speed limit.
    pub fn with_limits(mut self, distance_km: u32, max_speed_kmh: u32) -> Self {
        self.distance_km = distance_km;
        self.max_speed_kmh = max_speed_kmh;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_section_builder() {
        let s = NetworkSection::new("ASN", "DHN")
            .with_name("Asansol → Dhanbad")
            .with_limits(65, 100);
        assert_eq!(s.id, "ASN-DHN");
        assert_eq!(s.distance_km, 65);
        assert_eq!(s.max_speed_kmh, 100);
        assert_eq!(s.name, "Asansol → Dhanbad");
    }
}

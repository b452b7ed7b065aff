use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize, Serializer};

use super::{Chakra, UnknownChakra};

/// Where a deva is seated: one of the six tallied chakras, a center the
/// tally never produces, or every chakra at once.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DevaSeat {
    Chakra(Chakra),
    Sahasrara,
    Ida,
    Pingala,
    All,
}

impl DevaSeat {
    /// True when a deva seated here is associated with `chakra`.
    pub fn matches(self, chakra: Chakra) -> bool {
        match self {
            DevaSeat::Chakra(c) => c == chakra,
            DevaSeat::All => true,
            _ => false,
        }
    }
}

impl fmt::Display for DevaSeat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DevaSeat::Chakra(c) => c.fmt(f),
            DevaSeat::Sahasrara => f.write_str("Sahasrara"),
            DevaSeat::Ida => f.write_str("Ida"),
            DevaSeat::Pingala => f.write_str("Pingala"),
            DevaSeat::All => f.write_str("All"),
        }
    }
}

impl Serialize for DevaSeat {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl FromStr for DevaSeat {
    type Err = UnknownChakra;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Sahasrara" => Ok(DevaSeat::Sahasrara),
            "Ida" => Ok(DevaSeat::Ida),
            "Pingala" => Ok(DevaSeat::Pingala),
            "All" => Ok(DevaSeat::All),
            _ => s.parse::<Chakra>().map(DevaSeat::Chakra),
        }
    }
}

/// A `[[devas]]` row as written in TOML.
#[derive(Deserialize)]
pub(super) struct DevaEntry {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub chakra: String,
    pub element: String,
    #[serde(default)]
    pub vahana: Option<String>,
    #[serde(default)]
    pub bija: Option<String>,
    pub description: String,
    #[serde(default)]
    pub vahana_symbolism: Option<String>,
}

/// A Vedic deva and its associations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Deva {
    pub name: String,
    /// Group: Aditya, Rudra, Vasu or Asvin.
    #[serde(rename = "type")]
    pub kind: String,
    pub seat: DevaSeat,
    pub element: String,
    pub vahana: Option<String>,
    pub bija: Option<String>,
    pub description: String,
    pub vahana_symbolism: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seat_from_str() {
        assert_eq!("Ajna".parse::<DevaSeat>(), Ok(DevaSeat::Chakra(Chakra::Ajna)));
        assert_eq!("All".parse::<DevaSeat>(), Ok(DevaSeat::All));
        assert_eq!("Ida".parse::<DevaSeat>(), Ok(DevaSeat::Ida));
        assert!("Crown".parse::<DevaSeat>().is_err());
    }

    #[test]
    fn test_seat_matches() {
        assert!(DevaSeat::All.matches(Chakra::Muladhara));
        assert!(DevaSeat::Chakra(Chakra::Ajna).matches(Chakra::Ajna));
        assert!(!DevaSeat::Chakra(Chakra::Ajna).matches(Chakra::Anahata));
        assert!(!DevaSeat::Sahasrara.matches(Chakra::Ajna));
    }

    #[test]
    fn test_seat_serializes_as_name() {
        let json = serde_json::to_value(DevaSeat::Chakra(Chakra::Manipura)).unwrap();
        assert_eq!(json, "Manipura");
        assert_eq!(serde_json::to_value(DevaSeat::Pingala).unwrap(), "Pingala");
    }
}

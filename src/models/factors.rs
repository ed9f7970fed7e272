use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{FootprintError, Result};

/// Representative one-way distance of a short-haul flight, in miles.
pub const SHORT_HAUL_MILES: f64 = 300.0;
/// Representative one-way distance of a medium-haul flight, in miles.
pub const MEDIUM_HAUL_MILES: f64 = 750.0;
/// Representative one-way distance of a long-haul flight, in miles.
pub const LONG_HAUL_MILES: f64 = 3000.0;

/// Fuel type of the car used for monthly travel.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "snake_case")]
pub enum CarType {
    Gas,
    Diesel,
    Hybrid,
    Electric,
}

impl CarType {
    pub const ALL: [CarType; 4] = [Self::Gas, Self::Diesel, Self::Hybrid, Self::Electric];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Gas => "gas",
            Self::Diesel => "diesel",
            Self::Hybrid => "hybrid",
            Self::Electric => "electric",
        }
    }
}

impl fmt::Display for CarType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CarType {
    type Err = FootprintError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "gas" => Ok(Self::Gas),
            "diesel" => Ok(Self::Diesel),
            "hybrid" => Ok(Self::Hybrid),
            "electric" => Ok(Self::Electric),
            _ => Err(FootprintError::UnknownCarType(s.to_string())),
        }
    }
}

/// Per-mile factors for the three flight distance bands.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct FlightFactors {
    pub short: f64,
    pub medium: f64,
    pub long: f64,
}

/// Factors for digital usage. Units differ per field: hours for
/// streaming, calls and devices, a single email, a gigabyte of storage.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct DigitalFactors {
    pub streaming: f64,
    pub video_call: f64,
    pub email: f64,
    pub cloud: f64,
    pub laptop: f64,
    pub phone: f64,
}

/// Emission factors in kg CO2 per unit of usage.
///
/// The table is built once (from [`Default`] or from the configuration file)
/// and then shared immutably. Car factors are keyed by [`CarType`] so a
/// configuration can leave a type out; the calculator rejects a record that
/// selects a type with no factor instead of guessing one.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EmissionFactors {
    /// Per kWh.
    pub electricity: f64,
    /// Per therm.
    pub natural_gas: f64,
    /// Per mile, by car type.
    pub car: BTreeMap<CarType, f64>,
    pub flight: FlightFactors,
    pub digital: DigitalFactors,
    /// Global average monthly footprint in kg, used for comparison only.
    pub global_avg: f64,
}

impl EmissionFactors {
    pub fn car_factor(&self, car_type: CarType) -> Result<f64> {
        self.car
            .get(&car_type)
            .copied()
            .ok_or(FootprintError::MissingCarFactor(car_type))
    }
}

impl Default for EmissionFactors {
    fn default() -> Self {
        Self {
            electricity: 0.92,
            natural_gas: 5.3,
            car: BTreeMap::from([
                (CarType::Gas, 0.404),
                (CarType::Diesel, 0.45),
                (CarType::Hybrid, 0.28),
                (CarType::Electric, 0.12),
            ]),
            flight: FlightFactors {
                short: 0.25,
                medium: 0.2,
                long: 0.15,
            },
            digital: DigitalFactors {
                streaming: 0.3,
                video_call: 0.15,
                email: 0.0003,
                cloud: 0.02,
                laptop: 0.055,
                phone: 0.018,
            },
            global_avg: 1000.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_car_type_parse_is_case_insensitive() {
        assert_eq!("Gas".parse::<CarType>().unwrap(), CarType::Gas);
        assert_eq!(" ELECTRIC ".parse::<CarType>().unwrap(), CarType::Electric);
    }

    #[test]
    fn test_car_type_parse_rejects_unknown() {
        let err = "hovercraft".parse::<CarType>().unwrap_err();
        assert!(matches!(err, FootprintError::UnknownCarType(s) if s == "hovercraft"));
    }

    #[test]
    fn test_default_table_covers_every_car_type() {
        let factors = EmissionFactors::default();
        for car_type in CarType::ALL {
            assert!(factors.car_factor(car_type).is_ok());
        }
    }

    #[test]
    fn test_missing_car_factor() {
        let mut factors = EmissionFactors::default();
        factors.car.remove(&CarType::Hybrid);
        let err = factors.car_factor(CarType::Hybrid).unwrap_err();
        assert!(matches!(err, FootprintError::MissingCarFactor(CarType::Hybrid)));
    }

    #[test]
    fn test_factors_json_uses_car_type_keys() {
        let json = serde_json::to_value(EmissionFactors::default()).unwrap();
        assert_eq!(json["car"]["diesel"], 0.45);
        let parsed: EmissionFactors = serde_json::from_value(json).unwrap();
        assert_eq!(parsed, EmissionFactors::default());
    }
}

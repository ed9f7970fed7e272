use serde::{Deserialize, Serialize};

use super::CarType;
use crate::error::{FootprintError, Result};

/// Lowest monthly goal accepted, in kg CO2.
pub const MIN_GOAL: f64 = 100.0;
/// Highest monthly goal accepted, in kg CO2.
pub const MAX_GOAL: f64 = 2000.0;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct HomeEnergy {
    /// kWh per month.
    pub electricity_kwh: f64,
    /// Therms per month.
    pub natural_gas_therms: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Transport {
    /// Miles driven per month.
    pub car_miles: f64,
    pub car_type: CarType,
}

/// Number of flights taken per year, by distance band.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Flights {
    /// Under 300 miles.
    pub short: u32,
    /// 300 to 1500 miles.
    pub medium: u32,
    /// Over 1500 miles.
    pub long: u32,
}

/// Monthly digital usage.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DigitalUsage {
    pub streaming_hours: f64,
    pub video_call_hours: f64,
    pub emails: u32,
    pub cloud_gb: f64,
    pub laptop_hours: f64,
    pub phone_hours: f64,
}

/// Usage figures for one person or class.
///
/// Everything is monthly except [`Flights`], which are counted per year and
/// spread over twelve months by the calculator.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct InputRecord {
    /// Student or class name, used as the identity in the history log.
    pub name: String,
    /// Monthly CO2 goal in kg.
    pub goal: f64,
    pub home: HomeEnergy,
    pub transport: Transport,
    pub flights: Flights,
    pub digital: DigitalUsage,
}

impl InputRecord {
    /// Check the bounds the input form enforces: a goal within
    /// [`MIN_GOAL`]..=[`MAX_GOAL`] and finite, non-negative quantities.
    pub fn validate(&self) -> Result<()> {
        if !(MIN_GOAL..=MAX_GOAL).contains(&self.goal) {
            return Err(FootprintError::InvalidInput(format!(
                "goal must be between {} and {} kg, got {}",
                MIN_GOAL, MAX_GOAL, self.goal
            )));
        }

        let quantities = [
            ("electricity", self.home.electricity_kwh),
            ("natural gas", self.home.natural_gas_therms),
            ("car miles", self.transport.car_miles),
            ("streaming hours", self.digital.streaming_hours),
            ("video call hours", self.digital.video_call_hours),
            ("cloud storage", self.digital.cloud_gb),
            ("laptop hours", self.digital.laptop_hours),
            ("phone hours", self.digital.phone_hours),
        ];
        for (label, value) in quantities {
            if !value.is_finite() || value < 0.0 {
                return Err(FootprintError::InvalidInput(format!(
                    "{} must be a non-negative number, got {}",
                    label, value
                )));
            }
        }

        Ok(())
    }
}

impl Default for InputRecord {
    fn default() -> Self {
        Self {
            name: String::new(),
            goal: 900.0,
            home: HomeEnergy {
                electricity_kwh: 400.0,
                natural_gas_therms: 20.0,
            },
            transport: Transport {
                car_miles: 600.0,
                car_type: CarType::Gas,
            },
            flights: Flights {
                short: 2,
                medium: 2,
                long: 1,
            },
            digital: DigitalUsage {
                streaming_hours: 20.0,
                video_call_hours: 10.0,
                emails: 500,
                cloud_gb: 50.0,
                laptop_hours: 90.0,
                phone_hours: 120.0,
            },
        }
    }
}

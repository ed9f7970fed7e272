//! Footprint calculation.
//!
//! [`calculate`] is a pure function of the input record and the factor table:
//! the same arguments always produce the same [`FootprintBreakdown`].

use crate::error::Result;
use crate::models::*;

const MONTHS_PER_YEAR: f64 = 12.0;

/// Compute the monthly footprint of `input`.
///
/// Fails only when the selected car type has no factor in `factors`.
pub fn calculate(input: &InputRecord, factors: &EmissionFactors) -> Result<FootprintBreakdown> {
    let car_factor = factors.car_factor(input.transport.car_type)?;

    let amounts = [
        (Category::Electricity, input.home.electricity_kwh * factors.electricity),
        (Category::NaturalGas, input.home.natural_gas_therms * factors.natural_gas),
        (Category::CarTravel, input.transport.car_miles * car_factor),
        (Category::Flights, flights_co2(&input.flights, &factors.flight)),
        (Category::DigitalDevices, digital_co2(&input.digital, &factors.digital)),
    ];

    let sum: f64 = amounts.iter().map(|(_, kg)| kg).sum();
    let categories = amounts
        .into_iter()
        .map(|(category, co2_kg)| CategoryEmission {
            category,
            co2_kg,
            percent: round_to(percent_of(co2_kg, sum), 1),
        })
        .collect();

    let total = round_to(sum, 2);
    let percent_global = round_to(percent_of(total, factors.global_avg), 1);

    tracing::debug!(
        name = %input.name,
        total,
        percent_global,
        "Calculated footprint"
    );

    Ok(FootprintBreakdown {
        categories,
        total,
        percent_global,
    })
}

/// Yearly flight emissions spread evenly across the months.
fn flights_co2(flights: &Flights, factors: &FlightFactors) -> f64 {
    let yearly = f64::from(flights.short) * SHORT_HAUL_MILES * factors.short
        + f64::from(flights.medium) * MEDIUM_HAUL_MILES * factors.medium
        + f64::from(flights.long) * LONG_HAUL_MILES * factors.long;
    yearly / MONTHS_PER_YEAR
}

fn digital_co2(usage: &DigitalUsage, factors: &DigitalFactors) -> f64 {
    usage.streaming_hours * factors.streaming
        + usage.video_call_hours * factors.video_call
        + f64::from(usage.emails) * factors.email
        + usage.cloud_gb * factors.cloud
        + usage.laptop_hours * factors.laptop
        + usage.phone_hours * factors.phone
}

/// `100 * part / whole`, or 0 when `whole` is zero.
fn percent_of(part: f64, whole: f64) -> f64 {
    if whole == 0.0 {
        0.0
    } else {
        100.0 * part / whole
    }
}

/// Round to `decimals` places, ties to even once scaled.
pub(crate) fn round_to(value: f64, decimals: i32) -> f64 {
    let scale = 10f64.powi(decimals);
    (value * scale).round_ties_even() / scale
}

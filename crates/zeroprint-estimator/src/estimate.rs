use zeroprint_core::models::breakdown::{EMISSION_UNIT, EmissionBreakdown};
use zeroprint_core::models::profile::LifestyleProfile;

use crate::factors::CoefficientTable;

const WEEKS_PER_YEAR: f64 = 52.0;
const MONTHS_PER_YEAR: f64 = 12.0;
const DAYS_PER_YEAR: f64 = 365.0;

// Coarse average flight distances in km. Fixed by contract, not coefficients.
const SHORT_FLIGHT_KM: f64 = 1000.0;
const LONG_FLIGHT_KM: f64 = 6000.0;

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Compute a yearly emission estimate from a lifestyle profile.
///
/// Pure and deterministic. Never fails: missing fields are already zero at
/// this point and unknown enum values were replaced with their defaults
/// during deserialization, so every profile yields a breakdown.
pub fn estimate(profile: &LifestyleProfile, factors: &CoefficientTable) -> EmissionBreakdown {
    let transport = &profile.transport;
    let transport_kg = transport.car_km_per_week * WEEKS_PER_YEAR * factors.car.for_type(transport.car_type)
        + transport.public_km_per_week * WEEKS_PER_YEAR * factors.public_transport_kg_per_km
        + transport.short_flights_per_year * SHORT_FLIGHT_KM * factors.short_flight_kg_per_km
        + transport.long_flights_per_year * LONG_FLIGHT_KM * factors.long_flight_kg_per_km;

    let energy = &profile.energy;
    let renewable_share = energy.renewable_share.clamp(0.0, 1.0);
    let energy_kg = energy.electricity_kwh_per_month
        * MONTHS_PER_YEAR
        * factors.electricity_kg_per_kwh
        * (1.0 - renewable_share)
        + energy.gas_m3_per_month * MONTHS_PER_YEAR * factors.natural_gas_kg_per_m3;

    let diet_kg = factors.diet_daily_kg.for_type(profile.diet.diet_type) * DAYS_PER_YEAR;

    let waste_kg = profile.waste.plastic_items_per_week * WEEKS_PER_YEAR * factors.plastic_kg_per_item;

    let total_kg = transport_kg + energy_kg + diet_kg + waste_kg;

    EmissionBreakdown {
        transport_kg: round2(transport_kg),
        energy_kg: round2(energy_kg),
        diet_kg: round2(diet_kg),
        waste_kg: round2(waste_kg),
        total_kg: round2(total_kg),
        unit: EMISSION_UNIT.to_string(),
    }
}

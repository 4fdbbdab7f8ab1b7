use std::sync::OnceLock;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use zeroprint_core::models::profile::{CarType, DietType};

/// Per-km car emission factors, keyed by drivetrain.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct CarFactors {
    pub petrol: f64,
    pub diesel: f64,
    pub hybrid: f64,
    pub ev: f64,
}

impl CarFactors {
    pub fn for_type(&self, car_type: CarType) -> f64 {
        match car_type {
            CarType::Petrol => self.petrol,
            CarType::Diesel => self.diesel,
            CarType::Hybrid => self.hybrid,
            CarType::Ev => self.ev,
        }
    }
}

/// Daily per-person diet emission factors.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct DietFactors {
    pub omnivore: f64,
    pub vegetarian: f64,
    pub vegan: f64,
}

impl DietFactors {
    pub fn for_type(&self, diet_type: DietType) -> f64 {
        match diet_type {
            DietType::Omnivore => self.omnivore,
            DietType::Vegetarian => self.vegetarian,
            DietType::Vegan => self.vegan,
        }
    }
}

/// Emission factors used by the estimator, all in kg CO2e per unit.
///
/// Conservative global averages; electricity intensity in particular varies
/// a lot by grid and could later be overridden per country.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct CoefficientTable {
    pub car: CarFactors,
    pub public_transport_kg_per_km: f64,
    pub short_flight_kg_per_km: f64,
    pub long_flight_kg_per_km: f64,
    pub electricity_kg_per_kwh: f64,
    pub natural_gas_kg_per_m3: f64,
    pub diet_daily_kg: DietFactors,
    pub plastic_kg_per_item: f64,
}

impl Default for CoefficientTable {
    fn default() -> Self {
        Self {
            car: CarFactors {
                petrol: 0.192,
                diesel: 0.171,
                hybrid: 0.120,
                ev: 0.050,
            },
            public_transport_kg_per_km: 0.07,
            short_flight_kg_per_km: 0.158,
            long_flight_kg_per_km: 0.150,
            electricity_kg_per_kwh: 0.475,
            natural_gas_kg_per_m3: 2.0,
            diet_daily_kg: DietFactors {
                omnivore: 3.0,
                vegetarian: 2.0,
                vegan: 1.6,
            },
            plastic_kg_per_item: 0.08,
        }
    }
}

/// The process-wide coefficient table: built once, immutable thereafter.
pub fn default_factors() -> &'static CoefficientTable {
    static TABLE: OnceLock<CoefficientTable> = OnceLock::new();
    TABLE.get_or_init(CoefficientTable::default)
}

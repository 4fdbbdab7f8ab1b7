use serde::{Deserialize, Deserializer, Serialize};
use ts_rs::TS;

/// Car drivetrain categories with distinct per-km emission factors.
///
/// Deserialization is lossy on purpose: an unrecognized value falls back to
/// `Petrol` instead of rejecting the request. The estimator must always
/// produce an answer, so free-form form input never becomes a 4xx.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, TS)]
#[serde(rename_all = "lowercase")]
#[ts(export)]
pub enum CarType {
    #[default]
    Petrol,
    Diesel,
    Hybrid,
    Ev,
}

impl CarType {
    pub fn from_name(name: &str) -> Self {
        match name.to_ascii_lowercase().as_str() {
            "diesel" => Self::Diesel,
            "hybrid" => Self::Hybrid,
            "ev" => Self::Ev,
            _ => Self::Petrol,
        }
    }
}

/// Diet categories. Same lossy fallback policy as [`CarType`], defaulting to
/// `Omnivore`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, TS)]
#[serde(rename_all = "lowercase")]
#[ts(export)]
pub enum DietType {
    #[default]
    Omnivore,
    Vegetarian,
    Vegan,
}

impl DietType {
    pub fn from_name(name: &str) -> Self {
        match name.to_ascii_lowercase().as_str() {
            "vegetarian" => Self::Vegetarian,
            "vegan" => Self::Vegan,
            _ => Self::Omnivore,
        }
    }
}

fn de_car_type<'de, D>(deserializer: D) -> Result<CarType, D::Error>
where
    D: Deserializer<'de>,
{
    let name = String::deserialize(deserializer)?;
    Ok(CarType::from_name(&name))
}

fn de_diet_type<'de, D>(deserializer: D) -> Result<DietType, D::Error>
where
    D: Deserializer<'de>,
{
    let name = String::deserialize(deserializer)?;
    Ok(DietType::from_name(&name))
}

/// Weekly/yearly travel habits. Missing numeric fields deserialize to 0.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct TransportProfile {
    #[serde(default)]
    pub car_km_per_week: f64,
    #[serde(default, deserialize_with = "de_car_type")]
    pub car_type: CarType,
    #[serde(default)]
    pub public_km_per_week: f64,
    #[serde(default)]
    pub short_flights_per_year: f64,
    #[serde(default)]
    pub long_flights_per_year: f64,
}

/// Monthly household energy use. `renewable_share` is a fraction in [0, 1];
/// out-of-range values are clamped by the estimator, not rejected here.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct EnergyProfile {
    #[serde(default)]
    pub electricity_kwh_per_month: f64,
    #[serde(default)]
    pub gas_m3_per_month: f64,
    #[serde(default)]
    pub renewable_share: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct DietProfile {
    #[serde(rename = "type", default, deserialize_with = "de_diet_type")]
    pub diet_type: DietType,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct WasteProfile {
    #[serde(default)]
    pub plastic_items_per_week: f64,
}

/// A complete lifestyle snapshot, assembled per request and never persisted.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct LifestyleProfile {
    #[serde(default)]
    pub country: Option<String>,
    #[serde(default)]
    pub transport: TransportProfile,
    #[serde(default)]
    pub energy: EnergyProfile,
    #[serde(default)]
    pub diet: DietProfile,
    #[serde(default)]
    pub waste: WasteProfile,
}

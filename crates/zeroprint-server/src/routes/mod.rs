pub mod content;
pub mod estimate;
pub mod factors;
pub mod health;
pub mod preferences;
pub mod translate;

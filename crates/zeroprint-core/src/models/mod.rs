pub mod breakdown;
pub mod content;
pub mod preferences;
pub mod profile;

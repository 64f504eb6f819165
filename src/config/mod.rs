//! Configuration and path management

pub mod paths;
pub mod settings;

pub use paths::TripPaths;
pub use settings::Settings;

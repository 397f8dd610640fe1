pub mod artifacts;
pub mod dashboard;
pub mod health;
pub mod options;

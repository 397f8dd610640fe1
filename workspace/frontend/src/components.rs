pub mod comparison;
pub mod dashboard;
pub mod forecast_table;
pub mod layout;
pub mod prediction_chart;
pub mod sidebar;

pub mod configuration;
pub mod domain;
pub mod notification;
pub mod routes;
pub mod startup;
pub mod telemetry;

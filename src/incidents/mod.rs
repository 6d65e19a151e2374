pub mod incident;
pub mod incident_kind;
pub mod incident_store;
pub mod location;
pub mod severity;

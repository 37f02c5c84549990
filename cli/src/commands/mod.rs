pub mod enrich;
pub mod partition;

pub mod client;
pub mod code;
pub mod identifiable;
pub mod scope;
pub mod subject;

// Library root: configuration, squad import and reporting, shared by the
// `touchline` binary and the integration tests.

pub mod config;
pub mod report;
pub mod squad;

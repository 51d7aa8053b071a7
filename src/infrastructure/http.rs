//! HTTP adapters for the remote simulation service.

pub mod simulation_client;

pub use simulation_client::SimulationHttpClient;

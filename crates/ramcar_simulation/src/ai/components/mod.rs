//! AI FSM components.

pub mod fsm;
mod fsm_tests;

pub use fsm::VehicleAiState;

//! AI systems (target resolution, FSM transitions, ram sequence).

pub mod fsm;
pub mod ram;
pub mod target;

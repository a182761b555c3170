//! Physics module
//!
//! Rapier sync + spawn helpers. Velocity интегрируется в симуляции
//! напрямую, rapier — коллизии embedding layer.

pub mod body;

// Re-export основных типов
pub use body::{
    spawn_ai_vehicle, spawn_player_target, sync_kinematic_mode, sync_velocity,
    vehicle_collision_groups, RapierSyncPlugin,
};

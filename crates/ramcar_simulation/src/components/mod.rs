//! ECS Components для симуляции
//!
//! Организация по доменам:
//! - vehicle: AI-машина (VehicleConfig, PatrolRoute, RamCooldown, ChaseTarget)
//! - nav: навигационный агент (NavAgent)
//! - physics: физическое тело (PhysicsBody)
//! - health: health capability для damage delivery (Health)

pub mod health;
pub mod nav;
pub mod physics;
pub mod vehicle;

// Re-exports для удобного импорта
pub use health::*;
pub use nav::*;
pub use physics::*;
pub use vehicle::*;

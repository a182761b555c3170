//! AI decision-making module
//!
//! FSM AI-машины: Patrol → Chase → Ram → Recover.

use bevy::prelude::*;

pub mod components;
pub mod events;
pub mod systems;

// Re-export основных типов
pub use components::VehicleAiState;
pub use events::StateChanged;

/// AI Plugin
///
/// Регистрирует AI системы в FixedUpdate для детерминизма.
/// Порядок выполнения:
/// 1. resolve_chase_target — target по Player маркеру если не задан явно
/// 2. tick_ram_cooldown — countdown cooldown'а
/// 3. ai_fsm_transitions — Patrol/Chase/Recover ветки + вход в Ram
/// 4. ram_drive — multi-tick таран, выход в Recover
/// 5. navigation_drive — движение NavAgent к destination
pub struct AiPlugin;

impl Plugin for AiPlugin {
    fn build(&self, app: &mut App) {
        app.add_event::<StateChanged>().add_systems(
            FixedUpdate,
            (
                systems::target::resolve_chase_target,
                systems::target::tick_ram_cooldown,
                systems::fsm::ai_fsm_transitions,
                systems::ram::ram_drive,
                crate::nav::navigation_drive,
            )
                .chain(), // Последовательное выполнение для детерминизма
        );
    }
}

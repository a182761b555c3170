//! AI events — observability переходов FSM.

use bevy::prelude::*;

use super::components::VehicleAiState;

/// Событие: FSM перешла в новое состояние
///
/// Для UI, звуков, дебага. Ram в `from`/`to` нормализован к elapsed=0
/// (сам аккумулятор — не событие).
#[derive(Event, Debug, Clone)]
pub struct StateChanged {
    pub entity: Entity,
    pub from: VehicleAiState,
    pub to: VehicleAiState,
}

//! FSM компонент AI-машины (Patrol → Chase → Ram → Recover).

use bevy::prelude::*;

/// Состояние AI-машины
///
/// Ровно одно состояние в каждый момент (гарантируется enum'ом).
/// Ram несёт elapsed-time аккумулятор: вместо suspended coroutine —
/// явный per-tick апдейт, который тикает до ram_duration.
#[derive(Component, Debug, Clone, PartialEq, Reflect)]
#[reflect(Component)]
pub enum VehicleAiState {
    /// Patrol — движение по waypoints маршрута
    Patrol,

    /// Chase — преследование цели (live retarget каждый тик)
    Chase,

    /// Ram — физический таран, navigation отключена
    Ram {
        /// Время с начала тарана (секунды)
        elapsed: f32,
    },

    /// Recover — одна-тиковая развилка после тарана (→ Chase или → Patrol)
    Recover,
}

impl Default for VehicleAiState {
    fn default() -> Self {
        Self::Patrol
    }
}

impl VehicleAiState {
    /// Короткое имя состояния (для логов и snapshot'ов)
    pub fn name(&self) -> &'static str {
        match self {
            Self::Patrol => "Patrol",
            Self::Chase => "Chase",
            Self::Ram { .. } => "Ram",
            Self::Recover => "Recover",
        }
    }
}

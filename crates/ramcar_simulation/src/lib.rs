//! RAMCAR Simulation Core
//!
//! ECS-симуляция AI-машины (Patrol → Chase → Ram → Recover) на Bevy 0.16.
//!
//! HYBRID ARCHITECTURE:
//! - ECS = strategic layer (FSM, навигационные решения, урон)
//! - Embedding layer (Godot/rapier) = tactical layer (рендер, реальные
//!   коллизии, pathfinding по запечённому navmesh)
//!
//! Headless режим полностью самодостаточен: NavAgent стирает по прямой,
//! velocity интегрируется напрямую, NavSurface отвечает на surface queries.

use bevy::prelude::*;
use std::time::Duration;

// Публичные модули
pub mod ai;
pub mod combat;
pub mod components;
pub mod debug_viz;
pub mod logger;
pub mod nav;
pub mod physics;

// Re-export базовых типов для удобства
pub use ai::{AiPlugin, StateChanged, VehicleAiState};
pub use combat::{CombatPlugin, DamageDealt, RamContact, RamContactState};
pub use components::*;
pub use debug_viz::{DebugCircle, DebugColor, DebugDrawQueue, DebugViz, DebugVizPlugin};
pub use logger::{init_logger, log, log_error, log_info, log_warning};
pub use nav::{NavRegion, NavSurface};
pub use physics::{spawn_ai_vehicle, spawn_player_target, RapierSyncPlugin};

/// Simulation tick rate (Hz)
pub const SIMULATION_HZ: f64 = 60.0;

/// Главный plugin симуляции (объединяет все подсистемы)
pub struct SimulationPlugin;

impl Plugin for SimulationPlugin {
    fn build(&self, app: &mut App) {
        app
            // Fixed timestep 60Hz для simulation tick
            .insert_resource(Time::<Fixed>::from_hz(SIMULATION_HZ))
            // Проезжая поверхность (embedding layer может заменить своей)
            .init_resource::<NavSurface>()
            // Подсистемы
            .add_plugins((AiPlugin, CombatPlugin, RapierSyncPlugin, DebugVizPlugin));
    }
}

/// Создаёт minimal Bevy App для headless симуляции
///
/// ManualDuration: каждый `app.update()` продвигает время ровно на один
/// simulation tick — детерминированное пошаговое выполнение для тестов
/// и demo binary.
pub fn create_headless_app() -> App {
    let mut app = App::new();
    logger::init_logger();
    app.add_plugins(MinimalPlugins)
        .insert_resource(Time::<Fixed>::from_hz(SIMULATION_HZ))
        .insert_resource(bevy::time::TimeUpdateStrategy::ManualDuration(
            Duration::from_secs_f64(1.0 / SIMULATION_HZ),
        ));
    app
}

/// Snapshot компонентов мира для сравнения детерминизма
///
/// Entity сортируются по index, компоненты сериализуются через Debug —
/// достаточно для бинарного сравнения двух прогонов.
pub fn world_snapshot<T: Component + std::fmt::Debug>(world: &mut World) -> Vec<u8> {
    let mut snapshot = Vec::new();

    let mut query = world.query::<(Entity, &T)>();
    let mut entities: Vec<_> = query.iter(world).collect();
    entities.sort_by_key(|(entity, _)| entity.index());

    for (entity, component) in entities {
        snapshot.extend_from_slice(&entity.index().to_le_bytes());
        snapshot.extend_from_slice(format!("{:?}", component).as_bytes());
    }

    snapshot
}

//! Debug visualization — радиусы detection/ram для тюнинга.
//!
//! Симуляция не рисует: система наполняет DebugDrawQueue, embedding layer
//! рендерит круги. Выключено по умолчанию, на симуляцию не влияет.

use bevy::prelude::*;

use crate::ai::components::VehicleAiState;
use crate::components::VehicleConfig;

/// Тумблер debug-отрисовки
#[derive(Resource, Debug, Default)]
pub struct DebugViz {
    pub enabled: bool,
}

/// Цвет debug-круга (detection — жёлтый, ram — красный)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DebugColor {
    Yellow,
    Red,
}

/// Круг вокруг машины (radius в метрах, XZ плоскость)
#[derive(Debug, Clone, Copy)]
pub struct DebugCircle {
    pub center: Vec3,
    pub radius: f32,
    pub color: DebugColor,
}

/// Очередь кругов на отрисовку (перезаполняется каждый тик)
#[derive(Resource, Debug, Default)]
pub struct DebugDrawQueue {
    pub circles: Vec<DebugCircle>,
}

/// Система: сбор debug-кругов по всем машинам
pub fn collect_debug_circles(
    viz: Res<DebugViz>,
    mut queue: ResMut<DebugDrawQueue>,
    vehicles: Query<(&Transform, &VehicleConfig), With<VehicleAiState>>,
) {
    queue.circles.clear();
    if !viz.enabled {
        return;
    }

    for (transform, cfg) in vehicles.iter() {
        queue.circles.push(DebugCircle {
            center: transform.translation,
            radius: cfg.detection_radius,
            color: DebugColor::Yellow,
        });
        queue.circles.push(DebugCircle {
            center: transform.translation,
            radius: cfg.ram_distance,
            color: DebugColor::Red,
        });
    }
}

/// Debug viz plugin
pub struct DebugVizPlugin;

impl Plugin for DebugVizPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<DebugViz>()
            .init_resource::<DebugDrawQueue>()
            .add_systems(FixedUpdate, collect_debug_circles);
    }
}

//! Физическое тело машины
//!
//! Velocity интегрируем сами (headless симуляция), rapier компоненты
//! синхронизируются отдельными системами для embedding layer.

use bevy::prelude::*;

/// Физическое тело: velocity + kinematic режим
///
/// kinematic = true: телом управляет NavAgent, физика не вмешивается.
/// kinematic = false: Ram — velocity интегрируется в Transform напрямую.
#[derive(Component, Debug, Clone, Copy, Reflect)]
#[reflect(Component)]
pub struct PhysicsBody {
    /// Линейная скорость (m/s)
    pub velocity: Vec3,
    /// Угловая скорость (rad/s)
    pub angular_velocity: Vec3,
    /// Масса (kg) — для RamForceMode::Impulse
    pub mass: f32,
    /// Non-simulated режим (NavAgent рулит движением)
    pub kinematic: bool,
}

impl Default for PhysicsBody {
    fn default() -> Self {
        Self {
            velocity: Vec3::ZERO,
            angular_velocity: Vec3::ZERO,
            mass: 1200.0, // масса лёгкого автомобиля
            kinematic: true,
        }
    }
}

impl PhysicsBody {
    /// Обнулить линейную и угловую скорость (выход из Ram)
    pub fn zero_velocities(&mut self) {
        self.velocity = Vec3::ZERO;
        self.angular_velocity = Vec3::ZERO;
    }
}

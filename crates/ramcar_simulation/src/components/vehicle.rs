//! Компоненты AI-машины: конфигурация, патрульный маршрут, cooldown, цель.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

/// Режим применения ram-импульса
///
/// VelocityChange — мгновенное изменение скорости без учёта массы.
/// Impulse — импульс делится на массу тела.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Reflect, Serialize, Deserialize)]
pub enum RamForceMode {
    #[default]
    VelocityChange,
    Impulse,
}

/// Параметры AI-машины (фиксируются при спавне, системы их не мутируют)
///
/// Serde — для data-driven тюнинга (загрузка пресетов из JSON).
#[derive(Component, Debug, Clone, Reflect, Serialize, Deserialize)]
#[reflect(Component)]
pub struct VehicleConfig {
    /// Скорость патрулирования (m/s)
    pub patrol_speed: f32,
    /// Скорость преследования (m/s)
    pub chase_speed: f32,
    /// Множитель силы тарана
    pub ram_speed_multiplier: f32,
    /// Дистанция обнаружения цели (начало Chase)
    pub detection_radius: f32,
    /// Дистанция до цели для запуска тарана
    pub ram_distance: f32,
    /// Длительность физического тарана (секунды)
    pub ram_duration: f32,
    /// Cooldown между таранами (секунды)
    pub ram_cooldown: f32,
    /// Базовая сила в формуле тарана
    pub base_ram_force: f32,
    /// Режим применения импульса
    pub ram_force_mode: RamForceMode,
    /// Урон при контакте с целью
    pub damage_amount: u32,
    /// Радиус контакта (суррогат collider extents для headless симуляции)
    pub contact_radius: f32,
}

impl Default for VehicleConfig {
    fn default() -> Self {
        Self {
            patrol_speed: 6.0,
            chase_speed: 10.0,
            ram_speed_multiplier: 2.5,
            detection_radius: 25.0,
            ram_distance: 8.0,
            ram_duration: 1.0,
            ram_cooldown: 3.0,
            base_ram_force: 20.0,
            ram_force_mode: RamForceMode::VelocityChange,
            damage_amount: 10,
            contact_radius: 1.5,
        }
    }
}

impl VehicleConfig {
    /// Величина ram-импульса
    ///
    /// Второй член — фиксированная оценка скорости преследования, НЕ живая
    /// velocity на момент входа в Ram. Таран одинаково силён из любого
    /// положения.
    pub fn ram_impulse_magnitude(&self) -> f32 {
        self.base_ram_force * self.ram_speed_multiplier
            + self.chase_speed * self.ram_speed_multiplier
    }
}

/// Результат продвижения по маршруту
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PatrolAdvance {
    /// Перешли к следующей точке
    Next,
    /// Дошли до конца и обернулись на первую (looped)
    Wrapped,
    /// Конец маршрута без loop — стоим на последней точке
    EndReached,
}

/// Патрульный маршрут: упорядоченные waypoints + текущий индекс
///
/// Инвариант: при непустом `waypoints` индекс всегда валиден.
#[derive(Component, Debug, Clone, Default, Reflect)]
#[reflect(Component)]
pub struct PatrolRoute {
    pub waypoints: Vec<Vec3>,
    pub looped: bool,
    pub index: usize,
}

impl PatrolRoute {
    pub fn new(waypoints: Vec<Vec3>, looped: bool) -> Self {
        Self {
            waypoints,
            looped,
            index: 0,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.waypoints.is_empty()
    }

    /// Текущая точка маршрута (None для пустого маршрута)
    pub fn current(&self) -> Option<Vec3> {
        self.waypoints.get(self.index).copied()
    }

    /// Продвинуться к следующей точке
    ///
    /// Wrap при looped, иначе индекс остаётся на последней валидной позиции
    /// (повторные вызовы — EndReached, без out-of-range).
    pub fn advance(&mut self) -> Option<PatrolAdvance> {
        if self.waypoints.is_empty() {
            return None;
        }
        if self.index + 1 >= self.waypoints.len() {
            if self.looped {
                self.index = 0;
                Some(PatrolAdvance::Wrapped)
            } else {
                self.index = self.waypoints.len() - 1;
                Some(PatrolAdvance::EndReached)
            }
        } else {
            self.index += 1;
            Some(PatrolAdvance::Next)
        }
    }
}

/// Cooldown тарана (секунды)
///
/// Тикает вниз, может уйти чуть в минус — читаем через clamped `remaining()`.
#[derive(Component, Debug, Clone, Copy, Default, Reflect)]
#[reflect(Component)]
pub struct RamCooldown(pub f32);

impl RamCooldown {
    pub fn remaining(&self) -> f32 {
        self.0.max(0.0)
    }

    pub fn ready(&self) -> bool {
        self.0 <= 0.0
    }

    pub fn reset(&mut self, duration: f32) {
        self.0 = duration;
    }
}

/// Цель преследования (weak reference, без ownership)
///
/// None → resolve_chase_target ищет entity с маркером Player каждый тик.
#[derive(Component, Debug, Clone, Copy, Default, Reflect)]
#[reflect(Component)]
pub struct ChaseTarget(pub Option<Entity>);

/// Маркер игрока — well-known tag для target resolution
#[derive(Component, Debug, Clone, Copy, Default, Reflect)]
#[reflect(Component)]
pub struct Player;

/// Маркер: AI отключен (нет патрульного маршрута)
///
/// Машина остаётся на месте, AI системы её пропускают.
#[derive(Component, Debug, Clone, Copy, Default, Reflect)]
#[reflect(Component)]
pub struct AiDisabled;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_defaults() {
        let cfg = VehicleConfig::default();
        assert_eq!(cfg.patrol_speed, 6.0);
        assert_eq!(cfg.chase_speed, 10.0);
        assert_eq!(cfg.detection_radius, 25.0);
        assert_eq!(cfg.ram_distance, 8.0);
        assert_eq!(cfg.ram_cooldown, 3.0);
        assert_eq!(cfg.damage_amount, 10);
    }

    #[test]
    fn test_ram_impulse_magnitude() {
        let cfg = VehicleConfig::default();
        // 20 * 2.5 + 10 * 2.5 = 75
        assert_eq!(cfg.ram_impulse_magnitude(), 75.0);
    }

    #[test]
    fn test_route_advance_looped() {
        let mut route = PatrolRoute::new(vec![Vec3::ZERO, Vec3::Z * 10.0], true);
        assert_eq!(route.index, 0);
        assert_eq!(route.advance(), Some(PatrolAdvance::Next));
        assert_eq!(route.index, 1);
        assert_eq!(route.advance(), Some(PatrolAdvance::Wrapped));
        assert_eq!(route.index, 0);
    }

    #[test]
    fn test_route_advance_clamped() {
        let mut route = PatrolRoute::new(vec![Vec3::ZERO, Vec3::Z * 10.0], false);
        route.advance();
        assert_eq!(route.index, 1);
        // Конец маршрута: индекс остаётся на последней точке, без паники
        for _ in 0..5 {
            assert_eq!(route.advance(), Some(PatrolAdvance::EndReached));
            assert_eq!(route.index, 1);
        }
    }

    #[test]
    fn test_route_single_waypoint() {
        let mut route = PatrolRoute::new(vec![Vec3::X], false);
        assert_eq!(route.advance(), Some(PatrolAdvance::EndReached));
        assert_eq!(route.index, 0);
        assert_eq!(route.current(), Some(Vec3::X));
    }

    #[test]
    fn test_empty_route() {
        let mut route = PatrolRoute::default();
        assert!(route.is_empty());
        assert_eq!(route.current(), None);
        assert_eq!(route.advance(), None);
    }

    #[test]
    fn test_cooldown_clamped_read() {
        let mut cd = RamCooldown(0.5);
        assert!(!cd.ready());
        cd.0 -= 0.7; // тик ушёл в минус
        assert!(cd.ready());
        assert_eq!(cd.remaining(), 0.0);
        cd.reset(3.0);
        assert_eq!(cd.remaining(), 3.0);
    }
}

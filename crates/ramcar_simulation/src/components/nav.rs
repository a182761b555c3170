//! Навигационный агент — движение по прямой к destination
//!
//! Суррогат engine NavigationAgent: хранит destination/speed/enabled/stopped,
//! `navigation_drive` система двигает Transform. Pathfinding — non-goal
//! (агент стирает по прямой), но контракт тот же: set destination, query
//! remaining distance, stop/resume, enable/disable.

use bevy::prelude::*;

/// Навигационный агент
#[derive(Component, Debug, Clone, Reflect)]
#[reflect(Component)]
pub struct NavAgent {
    /// Текущая цель движения (None — путь сброшен)
    pub destination: Option<Vec3>,
    /// Скорость движения (m/s)
    pub speed: f32,
    /// Дистанция остановки у цели
    pub stopping_distance: f32,
    /// Агент активен (false во время Ram — физика рулит)
    pub enabled: bool,
    /// Агент остановлен (путь сохранён, движения нет)
    pub stopped: bool,
}

impl Default for NavAgent {
    fn default() -> Self {
        Self {
            destination: None,
            speed: 2.0,
            stopping_distance: 0.5,
            enabled: true,
            stopped: false,
        }
    }
}

impl NavAgent {
    pub fn set_destination(&mut self, target: Vec3) {
        self.destination = Some(target);
    }

    /// Сбросить путь (destination очищается, скорость не трогаем)
    pub fn reset_path(&mut self) {
        self.destination = None;
    }

    /// Оставшееся расстояние до destination (0.0 если пути нет)
    pub fn remaining_distance(&self, position: Vec3) -> f32 {
        self.destination
            .map_or(0.0, |dest| position.distance(dest))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_remaining_distance() {
        let mut agent = NavAgent::default();
        assert_eq!(agent.remaining_distance(Vec3::ZERO), 0.0);

        agent.set_destination(Vec3::new(3.0, 0.0, 4.0));
        assert_eq!(agent.remaining_distance(Vec3::ZERO), 5.0);

        agent.reset_path();
        assert_eq!(agent.remaining_distance(Vec3::ZERO), 0.0);
    }
}

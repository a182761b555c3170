//! Health — damage capability
//!
//! Таран доставляет урон через capability query: есть Health — применяем,
//! нет — контакт молча игнорируется (best-effort, без reflection).

use bevy::prelude::*;

/// Здоровье цели
///
/// Инвариант: 0 ≤ current ≤ max
#[derive(Component, Debug, Clone, Copy, Reflect)]
#[reflect(Component)]
pub struct Health {
    pub current: u32,
    pub max: u32,
}

impl Default for Health {
    fn default() -> Self {
        Self::new(100)
    }
}

impl Health {
    pub fn new(max: u32) -> Self {
        Self { current: max, max }
    }

    pub fn is_alive(&self) -> bool {
        self.current > 0
    }

    pub fn take_damage(&mut self, amount: u32) {
        self.current = self.current.saturating_sub(amount);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_take_damage_saturating() {
        let mut health = Health::new(25);
        health.take_damage(10);
        assert_eq!(health.current, 15);
        assert!(health.is_alive());

        health.take_damage(100); // saturating sub
        assert_eq!(health.current, 0);
        assert!(!health.is_alive());
    }
}

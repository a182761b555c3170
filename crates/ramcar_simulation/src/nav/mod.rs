//! Navigable surface + straight-line agent drive.
//!
//! Pathfinding — non-goal: агент стирает по прямой к destination.
//! NavSurface отвечает на один вопрос host-контракта: ближайшая валидная
//! точка поверхности в радиусе поиска (нужна для возврата после тарана).

use bevy::prelude::*;

use crate::components::NavAgent;

/// Скорость доворота корпуса агентом (агент рулит rotation)
pub const AGENT_TURN_RATE: f32 = 10.0;

/// Прямоугольный регион проезжей поверхности (XZ плоскость на высоте y)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NavRegion {
    pub min: Vec2,
    pub max: Vec2,
    pub y: f32,
}

impl NavRegion {
    pub fn new(min: Vec2, max: Vec2, y: f32) -> Self {
        Self { min, max, y }
    }

    /// Ближайшая точка региона к произвольной точке мира
    pub fn nearest_point(&self, point: Vec3) -> Vec3 {
        Vec3::new(
            point.x.clamp(self.min.x, self.max.x),
            self.y,
            point.z.clamp(self.min.y, self.max.y),
        )
    }
}

/// Проезжая поверхность: набор прямоугольных регионов
///
/// Default — плоскость 400×400м на y=0 (как тестовая арена embedding layer).
#[derive(Resource, Debug, Clone)]
pub struct NavSurface {
    pub regions: Vec<NavRegion>,
}

impl Default for NavSurface {
    fn default() -> Self {
        Self {
            regions: vec![NavRegion::new(
                Vec2::splat(-200.0),
                Vec2::splat(200.0),
                0.0,
            )],
        }
    }
}

impl NavSurface {
    pub fn new(regions: Vec<NavRegion>) -> Self {
        Self { regions }
    }

    /// Ближайшая валидная точка поверхности в радиусе поиска
    ///
    /// None — точка слишком далеко от любого региона (машина off-mesh).
    pub fn sample_position(&self, point: Vec3, radius: f32) -> Option<Vec3> {
        let mut best: Option<(f32, Vec3)> = None;

        for region in &self.regions {
            let candidate = region.nearest_point(point);
            let dist = point.distance(candidate);
            if dist > radius {
                continue;
            }
            match best {
                Some((best_dist, _)) if best_dist <= dist => {}
                _ => best = Some((dist, candidate)),
            }
        }

        best.map(|(_, p)| p)
    }
}

/// Система: движение NavAgent к destination
///
/// Прямолинейное движение со скоростью агента, без overshoot у цели.
/// Корпус доворачивается к направлению движения (агент рулит rotation,
/// как updateRotation в host-агенте).
pub fn navigation_drive(
    mut agents: Query<(&NavAgent, &mut Transform)>,
    time: Res<Time<Fixed>>,
) {
    let delta = time.delta_secs();

    for (agent, mut transform) in agents.iter_mut() {
        if !agent.enabled || agent.stopped {
            continue;
        }
        let Some(destination) = agent.destination else {
            continue;
        };

        let to_dest = destination - transform.translation;
        let dist = to_dest.length();
        if dist <= agent.stopping_distance {
            continue;
        }

        let dir = to_dest / dist;
        let step = agent.speed * delta;
        if step >= dist {
            transform.translation = destination;
        } else {
            transform.translation += dir * step;
        }

        // Доворот корпуса по горизонтали
        let flat = Vec3::new(dir.x, 0.0, dir.z);
        if flat.length_squared() > 1e-4 {
            let target_rot = Transform::default().looking_to(flat, Vec3::Y).rotation;
            transform.rotation = transform
                .rotation
                .slerp(target_rot, (delta * AGENT_TURN_RATE).min(1.0));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_on_surface() {
        let surface = NavSurface::default();
        let point = Vec3::new(10.0, 0.0, -20.0);
        // Точка уже на поверхности — возвращается как есть
        assert_eq!(surface.sample_position(point, 3.0), Some(point));
    }

    #[test]
    fn test_sample_snaps_to_edge_within_radius() {
        let surface = NavSurface::new(vec![NavRegion::new(
            Vec2::splat(-10.0),
            Vec2::splat(10.0),
            0.0,
        )]);
        // 2м за краем по X — кламп на край
        let sampled = surface.sample_position(Vec3::new(12.0, 0.0, 0.0), 3.0);
        assert_eq!(sampled, Some(Vec3::new(10.0, 0.0, 0.0)));
    }

    #[test]
    fn test_sample_fails_beyond_radius() {
        let surface = NavSurface::new(vec![NavRegion::new(
            Vec2::splat(-10.0),
            Vec2::splat(10.0),
            0.0,
        )]);
        // 5м за краем при радиусе поиска 3м — off-mesh
        assert_eq!(surface.sample_position(Vec3::new(15.0, 0.0, 0.0), 3.0), None);
    }

    #[test]
    fn test_sample_height_within_radius() {
        let surface = NavSurface::default();
        // Машину подбросило на 2м — точка под ней в радиусе 3м
        let sampled = surface.sample_position(Vec3::new(5.0, 2.0, 5.0), 3.0);
        assert_eq!(sampled, Some(Vec3::new(5.0, 0.0, 5.0)));
    }

    #[test]
    fn test_sample_picks_nearest_region() {
        let near = NavRegion::new(Vec2::new(0.0, 0.0), Vec2::new(10.0, 10.0), 0.0);
        let far = NavRegion::new(Vec2::new(20.0, 0.0), Vec2::new(30.0, 10.0), 0.0);
        let surface = NavSurface::new(vec![far, near]);

        let sampled = surface.sample_position(Vec3::new(11.0, 0.0, 5.0), 5.0);
        assert_eq!(sampled, Some(Vec3::new(10.0, 0.0, 5.0)));
    }
}

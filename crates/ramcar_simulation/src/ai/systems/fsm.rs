//! FSM transitions (Patrol/Chase/Recover per-tick behavior, Ram entry).
//!
//! Ram state сам по себе здесь не обрабатывается — он управляется
//! `ram_drive` (аналог таймслайс-корутины: per-tick апдейт с elapsed
//! аккумулятором внутри состояния).

use bevy::prelude::*;

use crate::ai::components::VehicleAiState;
use crate::ai::events::StateChanged;
use crate::components::{
    AiDisabled, ChaseTarget, NavAgent, PatrolAdvance, PatrolRoute, PhysicsBody, RamCooldown,
    RamForceMode, VehicleConfig,
};
use crate::logger;

/// Запас к stopping distance при проверке прибытия на waypoint
pub const ARRIVAL_SLACK: f32 = 0.5;

/// Гистерезис выхода из Chase: цель дальше detection_radius × 1.2 → Patrol
pub const CHASE_GIVE_UP_FACTOR: f32 = 1.2;

/// Скорость преследования во время остывания (Recover → Chase)
pub const RECOVER_CHASE_FACTOR: f32 = 0.6;

/// Порог квадрата горизонтальной дистанции для fallback направления тарана
pub const RAM_DIR_EPSILON_SQ: f32 = 0.001;

/// Направление тарана: горизонтальный вектор к цели
///
/// Цель практически совпадает с машиной → fallback на текущий forward
/// (иначе normalize почти-нулевого вектора даёт мусор).
pub fn compute_ram_direction(vehicle_pos: Vec3, target_pos: Vec3, forward: Vec3) -> Vec3 {
    let mut dir = target_pos - vehicle_pos;
    dir.y = 0.0;
    if dir.length_squared() < RAM_DIR_EPSILON_SQ {
        dir = forward;
    }
    dir.normalize_or_zero()
}

/// Вход в Ram: cooldown на полную, навигация глушится, физика включается,
/// мгновенный velocity-change импульс к цели.
fn start_ram(
    cfg: &VehicleConfig,
    cooldown: &mut RamCooldown,
    agent: &mut NavAgent,
    body: &mut PhysicsBody,
    transform: &Transform,
    target_pos: Vec3,
) {
    cooldown.reset(cfg.ram_cooldown);

    agent.stopped = true;
    agent.reset_path();
    agent.enabled = false;
    body.kinematic = false;

    let dir = compute_ram_direction(transform.translation, target_pos, *transform.forward());

    // Формула силы: второй член — фиксированная оценка chase speed,
    // не живая velocity (см. VehicleConfig::ram_impulse_magnitude)
    let magnitude = cfg.ram_impulse_magnitude();
    match cfg.ram_force_mode {
        RamForceMode::VelocityChange => body.velocity += dir * magnitude,
        RamForceMode::Impulse => body.velocity += dir * (magnitude / body.mass.max(1.0)),
    }
}

/// Продвижение по маршруту при прибытии на waypoint
///
/// Wrap при looped; конец без loop — стоп, индекс остаётся на последней
/// точке (повторные вызовы безопасны для маршрута любой длины ≥ 1).
fn advance_patrol_point(route: &mut PatrolRoute, agent: &mut NavAgent) {
    match route.advance() {
        Some(PatrolAdvance::Next) | Some(PatrolAdvance::Wrapped) => {
            if let Some(waypoint) = route.current() {
                agent.set_destination(waypoint);
            }
        }
        Some(PatrolAdvance::EndReached) => {
            agent.stopped = true;
        }
        None => {}
    }
}

/// Система: FSM transitions (раз в симуляционный тик)
///
/// Дистанция — 3D Euclidean между машиной и целью.
/// Порядок веток:
/// - Patrol: детект цели → Chase; иначе движение между waypoints
/// - Chase: live retarget; в радиусе тарана и cooldown готов → Ram;
///   цель сбежала за detection × 1.2 → Patrol (текущий waypoint, не нулевой)
/// - Ram: пропускается (ведёт ram_drive)
/// - Recover: одна-тиковая развилка → Chase (0.6× скорость) или Patrol
pub fn ai_fsm_transitions(
    mut vehicles: Query<
        (
            Entity,
            &mut VehicleAiState,
            &mut NavAgent,
            &mut PatrolRoute,
            &mut RamCooldown,
            &mut PhysicsBody,
            &Transform,
            &VehicleConfig,
            &ChaseTarget,
        ),
        Without<AiDisabled>,
    >,
    targets: Query<&Transform, Without<VehicleConfig>>,
    mut state_events: EventWriter<StateChanged>,
) {
    for (entity, mut state, mut agent, mut route, mut cooldown, mut body, transform, cfg, chase_target) in
        vehicles.iter_mut()
    {
        // Нет цели — update loop no-op до её появления
        let Some(target_entity) = chase_target.0 else {
            continue;
        };
        let Ok(target_tf) = targets.get(target_entity) else {
            continue;
        };

        let dist = transform.translation.distance(target_tf.translation);

        let new_state = match state.as_ref() {
            VehicleAiState::Patrol => {
                if dist <= cfg.detection_radius {
                    // Цель обнаружена — переходим в преследование
                    agent.speed = cfg.chase_speed;
                    Some(VehicleAiState::Chase)
                } else {
                    // Движение между патрульными точками
                    let remaining = agent.remaining_distance(transform.translation);
                    if remaining <= agent.stopping_distance + ARRIVAL_SLACK {
                        advance_patrol_point(&mut route, &mut agent);
                    }
                    None
                }
            }

            VehicleAiState::Chase => {
                // Live retarget каждый тик (цель двигается)
                agent.set_destination(target_tf.translation);

                if dist <= cfg.ram_distance && cooldown.ready() {
                    start_ram(cfg, &mut cooldown, &mut agent, &mut body, transform, target_tf.translation);
                    Some(VehicleAiState::Ram { elapsed: 0.0 })
                } else if dist > cfg.detection_radius * CHASE_GIVE_UP_FACTOR {
                    // Цель сбежала — возвращаемся к ТЕКУЩЕМУ waypoint, не к нулевому
                    agent.speed = cfg.patrol_speed;
                    if let Some(waypoint) = route.current() {
                        agent.set_destination(waypoint);
                    }
                    Some(VehicleAiState::Patrol)
                } else {
                    None
                }
            }

            // Ram ведёт ram_drive (multi-tick sequence)
            VehicleAiState::Ram { .. } => None,

            VehicleAiState::Recover => {
                if dist <= cfg.detection_radius {
                    // Преследуем медленнее пока остываем
                    agent.speed = cfg.chase_speed * RECOVER_CHASE_FACTOR;
                    Some(VehicleAiState::Chase)
                } else {
                    agent.speed = cfg.patrol_speed;
                    if let Some(waypoint) = route.current() {
                        agent.set_destination(waypoint);
                    }
                    Some(VehicleAiState::Patrol)
                }
            }
        };

        if let Some(next) = new_state {
            if *state != next {
                logger::log(&format!(
                    "🚗 Vehicle {:?}: {} → {} (dist {:.1}m)",
                    entity,
                    state.name(),
                    next.name(),
                    dist
                ));
                state_events.write(StateChanged {
                    entity,
                    from: state.clone(),
                    to: next.clone(),
                });
            }
            *state = next;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ram_direction_horizontal() {
        let dir = compute_ram_direction(
            Vec3::new(0.0, 1.0, 0.0),
            Vec3::new(10.0, 5.0, 0.0),
            Vec3::NEG_Z,
        );
        // Y компонента отбрасывается до нормализации
        assert_eq!(dir, Vec3::X);
    }

    #[test]
    fn test_ram_direction_fallback_to_forward() {
        let forward = Vec3::new(0.0, 0.0, -1.0);
        // Цель ровно в позиции машины → текущий forward
        let dir = compute_ram_direction(Vec3::splat(3.0), Vec3::splat(3.0), forward);
        assert_eq!(dir, forward.normalize());
    }

    #[test]
    fn test_ram_direction_near_zero_threshold() {
        // Горизонтальный квадрат дистанции чуть меньше 0.001 → fallback
        let dir = compute_ram_direction(
            Vec3::ZERO,
            Vec3::new(0.01, 2.0, 0.0), // sq = 0.0001 < 0.001
            Vec3::X,
        );
        assert_eq!(dir, Vec3::X);
    }

    #[test]
    fn test_ram_direction_normalized() {
        let dir = compute_ram_direction(Vec3::ZERO, Vec3::new(3.0, 0.0, 4.0), Vec3::NEG_Z);
        assert!((dir.length() - 1.0).abs() < 1e-6);
        assert!((dir - Vec3::new(0.6, 0.0, 0.8)).length() < 1e-6);
    }

    #[test]
    fn test_start_ram_velocity_change() {
        let cfg = VehicleConfig::default();
        let mut cooldown = RamCooldown::default();
        let mut agent = NavAgent::default();
        let mut body = PhysicsBody::default();
        let transform = Transform::from_translation(Vec3::ZERO);

        start_ram(&cfg, &mut cooldown, &mut agent, &mut body, &transform, Vec3::X * 5.0);

        // Cooldown сразу на полную
        assert_eq!(cooldown.remaining(), cfg.ram_cooldown);
        // Навигация заглушена, физика включена
        assert!(agent.stopped);
        assert!(!agent.enabled);
        assert_eq!(agent.destination, None);
        assert!(!body.kinematic);
        // |v| = 20×2.5 + 10×2.5 = 75 вдоль +X
        assert!((body.velocity - Vec3::X * 75.0).length() < 1e-4);
    }

    #[test]
    fn test_start_ram_impulse_mode_divides_by_mass() {
        let cfg = VehicleConfig {
            ram_force_mode: RamForceMode::Impulse,
            ..default()
        };
        let mut cooldown = RamCooldown::default();
        let mut agent = NavAgent::default();
        let mut body = PhysicsBody {
            mass: 1500.0,
            ..default()
        };
        let transform = Transform::from_translation(Vec3::ZERO);

        start_ram(&cfg, &mut cooldown, &mut agent, &mut body, &transform, Vec3::X * 5.0);

        assert!((body.velocity.x - 75.0 / 1500.0).abs() < 1e-6);
    }
}

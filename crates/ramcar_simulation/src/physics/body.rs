//! Rapier sync + spawn helpers.
//!
//! Headless симуляция интегрирует velocity сама (`ram_drive`,
//! `navigation_drive`); rapier компоненты держим синхронизированными для
//! embedding layer (коллизии, rendering-side физика).

use bevy::prelude::*;
use bevy_rapier3d::prelude::*;

use crate::combat::RamContactState;
use crate::components::{
    AiDisabled, ChaseTarget, Health, NavAgent, PatrolRoute, PhysicsBody, Player, RamCooldown,
    VehicleConfig,
};
use crate::ai::components::VehicleAiState;
use crate::logger;

/// Collision groups: машины (group 2) коллайдят с environment (1),
/// друг с другом (2) и с актёрами (3)
pub fn vehicle_collision_groups() -> CollisionGroups {
    CollisionGroups::new(Group::GROUP_2, Group::GROUP_1 | Group::GROUP_2 | Group::GROUP_3)
}

/// Система: PhysicsBody.kinematic → rapier RigidBody
///
/// kinematic = true → KinematicPositionBased (NavAgent рулит движением),
/// false → Dynamic (Ram). Переключаем только при изменении PhysicsBody.
pub fn sync_kinematic_mode(
    mut commands: Commands,
    bodies: Query<(Entity, &PhysicsBody), Changed<PhysicsBody>>,
) {
    for (entity, body) in bodies.iter() {
        let rigid_body = if body.kinematic {
            RigidBody::KinematicPositionBased
        } else {
            RigidBody::Dynamic
        };
        if let Ok(mut entity_commands) = commands.get_entity(entity) {
            entity_commands.insert(rigid_body);
        }
    }
}

/// Система: PhysicsBody velocity → rapier Velocity
pub fn sync_velocity(mut bodies: Query<(&PhysicsBody, &mut Velocity)>) {
    for (body, mut rapier_velocity) in bodies.iter_mut() {
        rapier_velocity.linvel = body.velocity;
        rapier_velocity.angvel = body.angular_velocity;
    }
}

/// Plugin синхронизации с rapier
///
/// Системы до rapier physics step (embedding layer подключает RapierPlugin).
pub struct RapierSyncPlugin;

impl Plugin for RapierSyncPlugin {
    fn build(&self, app: &mut App) {
        use bevy_rapier3d::plugin::PhysicsSet;

        app.add_systems(
            FixedUpdate,
            (sync_kinematic_mode, sync_velocity)
                .chain()
                .before(PhysicsSet::SyncBackend),
        );
    }
}

/// Spawn helper: AI-машина с полным набором компонентов
///
/// Без патрульного маршрута машина спавнится с AiDisabled (стоит на месте,
/// warning в лог) — движение только при ≥ 1 waypoint.
pub fn spawn_ai_vehicle(
    commands: &mut Commands,
    position: Vec3,
    config: VehicleConfig,
    waypoints: Vec<Vec3>,
    looped: bool,
    target: Option<Entity>,
) -> Entity {
    let route = PatrolRoute::new(waypoints, looped);
    let disabled = route.is_empty();

    let mut agent = NavAgent {
        speed: config.patrol_speed,
        ..default()
    };
    if let Some(first) = route.current() {
        agent.set_destination(first);
    } else {
        agent.stopped = true;
    }

    let mut entity_commands = commands.spawn((
        Transform::from_translation(position),
        // AI
        VehicleAiState::default(),
        config,
        route,
        RamCooldown::default(),
        ChaseTarget(target),
        RamContactState::default(),
        // Navigation + physics
        agent,
        PhysicsBody::default(),
        // Rapier (для embedding layer)
        RigidBody::KinematicPositionBased,
        Collider::cuboid(1.0, 0.6, 2.0), // корпус машины
        Velocity::default(),
        vehicle_collision_groups(),
    ));

    if disabled {
        entity_commands.insert(AiDisabled);
        logger::log_warning(&format!(
            "Vehicle {:?}: patrol points not set, vehicle will stay put",
            entity_commands.id()
        ));
    }

    entity_commands.id()
}

/// Spawn helper: цель преследования (Player tag + Health capability)
pub fn spawn_player_target(commands: &mut Commands, position: Vec3) -> Entity {
    commands
        .spawn((
            Transform::from_translation(position),
            Player,
            Health::default(),
            // Rapier
            RigidBody::KinematicPositionBased,
            Collider::capsule_y(0.9, 0.4),
            Velocity::default(),
            CollisionGroups::new(Group::GROUP_3, Group::GROUP_1 | Group::GROUP_2),
        ))
        .id()
}

//! Headless demo симуляции RAMCAR
//!
//! Квадратный патрульный маршрут + цель, которая на 5-й секунде подходит
//! в detection radius. Логируем переходы FSM.

use bevy::prelude::*;
use ramcar_simulation::*;

fn main() {
    println!("Starting RAMCAR headless simulation");

    let mut app = create_headless_app();
    app.add_plugins(SimulationPlugin);

    let player = spawn_player_target(&mut app.world_mut().commands(), Vec3::new(60.0, 0.0, 0.0));

    let route = vec![
        Vec3::new(0.0, 0.0, 0.0),
        Vec3::new(20.0, 0.0, 0.0),
        Vec3::new(20.0, 0.0, 20.0),
        Vec3::new(0.0, 0.0, 20.0),
    ];
    let vehicle = spawn_ai_vehicle(
        &mut app.world_mut().commands(),
        Vec3::ZERO,
        VehicleConfig::default(),
        route,
        true,
        Some(player),
    );

    // 20 секунд симуляции (60Hz)
    for tick in 0..1200 {
        app.update();

        // На 5-й секунде цель въезжает в detection radius
        if tick == 300 {
            if let Some(mut tf) = app.world_mut().get_mut::<Transform>(player) {
                tf.translation = Vec3::new(15.0, 0.0, 10.0);
            }
        }

        if tick % 60 == 0 {
            let state = app
                .world()
                .get::<VehicleAiState>(vehicle)
                .map(|s| s.name())
                .unwrap_or("?");
            let pos = app
                .world()
                .get::<Transform>(vehicle)
                .map(|t| t.translation)
                .unwrap_or(Vec3::ZERO);
            println!("Tick {}: state={} pos=({:.1}, {:.1})", tick, state, pos.x, pos.z);
        }
    }

    println!("Simulation complete!");
}

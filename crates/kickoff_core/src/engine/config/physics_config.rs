//! Ball flight and locomotion parameters

use serde::{Deserialize, Serialize};

use crate::engine::physics_constants::{ball, player_inertia};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PhysicsConfig {
    // === Ball Flight ===
    /// 공기 저항 (1/s) (기본: 0.5)
    pub air_drag_per_s: f32,
    /// 60fps 기준 프레임당 잔디 마찰 (기본: 0.993)
    pub grass_friction_per_frame: f32,
    /// 높이 감소율 (m/s) (기본: 9.81)
    pub fall_rate: f32,
    pub bounce_min_speed: f32,
    pub bounce_height_factor: f32,
    pub settle_speed: f32,

    // === Locomotion ===
    pub max_speed_base: f32,
    pub max_speed_range: f32,
    pub accel_base: f32,
    pub accel_range: f32,
    pub fatigue_min_mult: f32,
    pub dribble_speed_mult: f32,
    pub stop_damping_per_s: f32,
    pub arrive_radius: f32,
}

impl Default for PhysicsConfig {
    fn default() -> Self {
        Self {
            air_drag_per_s: ball::AIR_DRAG_PER_S,
            grass_friction_per_frame: ball::GRASS_FRICTION_PER_FRAME,
            fall_rate: ball::FALL_RATE_M_PER_S,
            bounce_min_speed: ball::BOUNCE_MIN_SPEED,
            bounce_height_factor: ball::BOUNCE_HEIGHT_FACTOR,
            settle_speed: ball::SETTLE_SPEED,

            max_speed_base: player_inertia::MAX_SPEED_BASE,
            max_speed_range: player_inertia::MAX_SPEED_RANGE,
            accel_base: player_inertia::ACCEL_BASE,
            accel_range: player_inertia::ACCEL_RANGE,
            fatigue_min_mult: player_inertia::FATIGUE_MIN_MULT,
            dribble_speed_mult: player_inertia::DRIBBLE_SPEED_MULT,
            stop_damping_per_s: player_inertia::STOP_DAMPING_PER_S,
            arrive_radius: player_inertia::ARRIVE_RADIUS_M,
        }
    }
}

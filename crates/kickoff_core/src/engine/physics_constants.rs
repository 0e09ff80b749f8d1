//! Physics constants for match simulation
//!
//! 모든 튜닝 레버는 여기서 이름을 가진 상수로 관리한다.
//! `EngineConfig` 의 기본값은 이 상수들을 그대로 읽는다.

// ============================================================
// Field Dimensions
// ============================================================
pub mod field {
    /// Pitch length (x axis, goal line to goal line)
    pub const LENGTH_M: f32 = 105.0;

    /// Pitch width (y axis, touchline to touchline)
    pub const WIDTH_M: f32 = 68.0;

    pub const CENTER_X: f32 = LENGTH_M / 2.0;
    pub const CENTER_Y: f32 = WIDTH_M / 2.0;

    /// Penalty area depth measured from the goal line
    pub const PENALTY_AREA_DEPTH_M: f32 = 16.5;

    /// Goal kick spot distance from the goal line
    pub const GOAL_AREA_DEPTH_M: f32 = 5.5;

    /// Clamp a point into the pitch rectangle.
    #[inline]
    pub fn clamp(pos: (f32, f32)) -> (f32, f32) {
        (pos.0.clamp(0.0, LENGTH_M), pos.1.clamp(0.0, WIDTH_M))
    }

    #[inline]
    pub fn contains(pos: (f32, f32)) -> bool {
        (0.0..=LENGTH_M).contains(&pos.0) && (0.0..=WIDTH_M).contains(&pos.1)
    }
}

// ============================================================
// Goal Dimensions
// ============================================================
pub mod goal {
    use super::field;

    pub const WIDTH_M: f32 = 7.32;
    pub const HALF_WIDTH_M: f32 = WIDTH_M / 2.0;
    pub const Y_MIN: f32 = field::CENTER_Y - HALF_WIDTH_M;
    pub const Y_MAX: f32 = field::CENTER_Y + HALF_WIDTH_M;

    /// Crossbar height. A ball above it crossing the line is not a goal.
    pub const CROSSBAR_HEIGHT_M: f32 = 2.44;

    /// Goal line x of the goal a side attacks.
    #[inline]
    pub fn attack_goal_x(attacks_right: bool) -> f32 {
        if attacks_right {
            field::LENGTH_M
        } else {
            0.0
        }
    }

    #[inline]
    pub fn within_mouth(y: f32) -> bool {
        (Y_MIN..=Y_MAX).contains(&y)
    }
}

// ============================================================
// Ball Flight (loose ball)
// ============================================================
pub mod ball {
    /// 공기 저항: v *= 1 - AIR_DRAG_PER_S * dt
    pub const AIR_DRAG_PER_S: f32 = 0.5;

    /// 잔디 마찰: v *= GRASS_FRICTION ^ (dt * 60)
    pub const GRASS_FRICTION_PER_FRAME: f32 = 0.993;
    pub const FRICTION_FRAME_RATE: f32 = 60.0;

    /// Height at or below which the ball counts as rolling on grass
    pub const GROUNDED_HEIGHT_M: f32 = 0.1;

    /// 높이 감소율 (m/s), gravity-like
    pub const FALL_RATE_M_PER_S: f32 = 9.81;

    /// Landing faster than this re-grants a small bounce
    pub const BOUNCE_MIN_SPEED: f32 = 2.0;
    pub const BOUNCE_HEIGHT_FACTOR: f32 = 0.1;

    /// Below this speed a grounded ball is settled
    pub const SETTLE_SPEED: f32 = 0.1;

    /// Owned ball offset in front of the carrier
    pub const DRIBBLE_OFFSET_M: f32 = 0.5;
    pub const DRIBBLE_OFFSET_PER_SPEED: f32 = 0.2;
}

// ============================================================
// Possession Claims
// ============================================================
pub mod claim {
    pub const REACH_M: f32 = 1.5;
    pub const GK_REACH_M: f32 = 2.5;

    /// difficulty = ball speed * DIFFICULTY_PER_SPEED
    pub const DIFFICULTY_PER_SPEED: f32 = 3.5;

    /// control roll = U(0, ROLL_RANGE) + first_touch * FIRST_TOUCH_WEIGHT + bonuses
    pub const ROLL_RANGE: f32 = 100.0;
    pub const FIRST_TOUCH_WEIGHT: f32 = 5.0;
    pub const OWNER_BONUS: f32 = 50.0;
    pub const GK_BONUS: f32 = 30.0;
    pub const TACKLING_WEIGHT: f32 = 2.5;

    /// Deflection spread per axis (m/s)
    pub const GK_DEFLECT_SPREAD: f32 = 7.5;
    pub const DEFLECT_SPREAD: f32 = 2.5;

    /// Cooldown after a failed touch (s)
    pub const DEFLECT_COOLDOWN_S: f32 = 0.5;

    /// Deadlock: loose ball slower than this for longer than the threshold
    pub const DEADLOCK_SPEED: f32 = 0.5;
    pub const DEADLOCK_THRESHOLD_S: f32 = 3.0;
    pub const DEADLOCK_CHASE_S: f32 = 1.0;
}

// ============================================================
// Kicking
// ============================================================
pub mod kick {
    pub const PASS_BASE_SPEED: f32 = 10.0;
    pub const PASS_SPEED_PER_PASSING: f32 = 0.5;
    pub const LONG_PASS_MULT: f32 = 1.4;

    pub const SHOT_BASE_SPEED: f32 = 20.0;
    pub const SHOT_SPEED_PER_STRENGTH: f32 = 0.5;

    /// angular error range (rad) = (20 - accuracy) * coefficient
    pub const PASS_ERROR_COEF: f32 = 0.02;
    pub const SHOT_ERROR_COEF: f32 = 0.05;

    pub const LONG_PASS_HEIGHT_M: f32 = 2.0;
    pub const SHOT_HEIGHT_PER_POWER: f32 = 0.5;

    pub const SHORT_PASS_MIN_M: f32 = 5.0;
    pub const SHORT_PASS_MAX_M: f32 = 25.0;
    pub const LONG_PASS_MAX_M: f32 = 45.0;

    pub const SHOOT_MAX_M: f32 = 20.0;
    pub const SHOOT_FULL_SCORE_M: f32 = 8.0;
    pub const SHOOT_MIN_FACTOR: f32 = 0.1;

    /// 슈팅 점수 배율. 득점 기대치를 좌우하는 주 레버
    pub const SHOT_WEIGHT: f32 = 0.4;

    /// Aim point as a fraction of the goal half-width from the centre
    pub const SHOT_AIM_FRACTION: f32 = 0.85;

    /// 가장 가까운 수비수가 이 거리 안이면 슈팅 품질 감소
    pub const SHOT_PRESSURE_RADIUS_M: f32 = 8.0;
    pub const SHOT_PRESSURE_FLOOR: f32 = 0.1;

    pub const DRIBBLE_STEP_M: f32 = 5.0;
}

// ============================================================
// Player Inertia (locomotion)
// ============================================================
pub mod player_inertia {
    /// max_speed = MAX_SPEED_BASE + pace/20 * MAX_SPEED_RANGE
    pub const MAX_SPEED_BASE: f32 = 6.5;
    pub const MAX_SPEED_RANGE: f32 = 3.0;

    /// accel = ACCEL_BASE + acceleration/20 * ACCEL_RANGE (1/s blend rate)
    pub const ACCEL_BASE: f32 = 4.0;
    pub const ACCEL_RANGE: f32 = 8.0;

    /// speed multiplier = FATIGUE_MIN_MULT + FATIGUE_RANGE * freshness
    pub const FATIGUE_MIN_MULT: f32 = 0.7;
    pub const FATIGUE_RANGE: f32 = 0.3;

    pub const DRIBBLE_SPEED_MULT: f32 = 0.85;

    /// Stationary actions bleed velocity at this rate (1/s)
    pub const STOP_DAMPING_PER_S: f32 = 8.0;

    /// Arrival slowdown radius
    pub const ARRIVE_RADIUS_M: f32 = 1.0;

    /// Pursuit lookahead cap (s)
    pub const PURSUIT_LOOKAHEAD_S: f32 = 0.6;
}

// ============================================================
// Tactical Grid
// ============================================================
pub mod grid {
    use super::field;

    pub const ZONES: u8 = 6;
    pub const LANES: u8 = 5;

    pub const ZONE_DEPTH_M: f32 = field::LENGTH_M / ZONES as f32;
    pub const LANE_WIDTH_M: f32 = field::WIDTH_M / LANES as f32;

    /// Elastic pull toward the ball
    pub const PULL_X: f32 = 0.3;
    pub const PULL_Y: f32 = 0.2;

    /// Base (kickoff) positions squeeze the grid into the own half
    pub const OWN_HALF_COMPRESSION: f32 = 0.47;

    pub const MENTALITY_SHIFT_M: f32 = 4.0;
    pub const LINE_SHIFT_M: f32 = 4.0;
    pub const NARROW_WIDTH_SCALE: f32 = 0.85;
    pub const WIDE_WIDTH_SCALE: f32 = 1.15;
}

// ============================================================
// Stamina
// ============================================================
pub mod stamina {
    /// fatigue points per second (0..100 scale)
    pub const MOVE_DRAIN_PER_S: f32 = 0.008;
    pub const SPRINT_DRAIN_PER_S: f32 = 0.03;
    pub const RECOVERY_PER_S: f32 = 0.01;

    /// drain *= ATTR_BASE - stamina/20
    pub const ATTR_BASE: f32 = 1.5;

    /// sprint if speed > max_speed * SPRINT_RATIO
    pub const SPRINT_RATIO: f32 = 0.8;

    /// moving if speed above this
    pub const MOVING_SPEED: f32 = 0.3;
}

// ============================================================
// Dead-ball Timers
// ============================================================
pub mod timers {
    pub const KICKOFF_S: f32 = 1.0;
    pub const CELEBRATION_S: f32 = 3.0;
    pub const THROW_IN_S: f32 = 1.5;
    pub const CORNER_S: f32 = 1.5;
    pub const GOAL_KICK_S: f32 = 1.0;
    pub const PENALTY_INTERVAL_S: f32 = 2.0;

    /// Corner spot distance from the flag along both lines
    pub const CORNER_INSET_M: f32 = 1.0;
}

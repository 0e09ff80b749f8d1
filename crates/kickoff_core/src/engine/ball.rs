//! Ball integration
//!
//! Loose ball: drag, grass friction, fake vertical arc, bounce, settle.
//! Owned ball: glued in front of the carrier every step.

use super::config::PhysicsConfig;
use super::physics_constants::{ball as ball_k, field};
use super::steering::{length, normalize};
use crate::models::{Ball, Player};

/// Advance a loose ball by `dt`.
pub fn step_loose_ball(ball: &mut Ball, dt: f32, cfg: &PhysicsConfig) {
    if ball.settled {
        return;
    }

    ball.position.0 += ball.velocity.0 * dt;
    ball.position.1 += ball.velocity.1 * dt;

    let drag = (1.0 - cfg.air_drag_per_s * dt).clamp(0.0, 1.0);
    ball.velocity = (ball.velocity.0 * drag, ball.velocity.1 * drag);

    if ball.height <= ball_k::GROUNDED_HEIGHT_M {
        let friction = cfg.grass_friction_per_frame.powf(dt * ball_k::FRICTION_FRAME_RATE);
        ball.velocity = (ball.velocity.0 * friction, ball.velocity.1 * friction);
    }

    if ball.height > 0.0 {
        ball.height -= cfg.fall_rate * dt;
        if ball.height <= 0.0 {
            ball.height = 0.0;
            let speed = length(ball.velocity);
            if speed > cfg.bounce_min_speed {
                ball.height = speed * cfg.bounce_height_factor;
            }
        }
    }

    if ball.height <= 0.0 && length(ball.velocity) < cfg.settle_speed {
        ball.velocity = (0.0, 0.0);
        ball.height = 0.0;
        ball.settled = true;
    }
}

/// Place an owned ball in front of its carrier.
pub fn attach_to_owner(ball: &mut Ball, owner: &Player) {
    let speed = owner.speed();
    let dir = if speed > 0.01 {
        normalize(owner.velocity)
    } else {
        (owner.side.direction(), 0.0)
    };
    let offset = ball_k::DRIBBLE_OFFSET_M + ball_k::DRIBBLE_OFFSET_PER_SPEED * speed;
    ball.position = field::clamp((owner.position.0 + dir.0 * offset, owner.position.1 + dir.1 * offset));
    ball.velocity = owner.velocity;
    ball.height = 0.0;
    ball.settled = false;
}

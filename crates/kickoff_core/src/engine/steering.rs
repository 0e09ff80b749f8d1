//! Steering helpers
//!
//! These return desired velocity vectors for the inertia-based movement in
//! `player_physics` (velocity targets, not direct position jumps).

#[inline]
pub fn length(v: (f32, f32)) -> f32 {
    (v.0 * v.0 + v.1 * v.1).sqrt()
}

#[inline]
pub fn distance(a: (f32, f32), b: (f32, f32)) -> f32 {
    length((b.0 - a.0, b.1 - a.1))
}

#[inline]
pub fn normalize(v: (f32, f32)) -> (f32, f32) {
    let len = length(v);
    if len < 0.0001 {
        (0.0, 0.0)
    } else {
        (v.0 / len, v.1 / len)
    }
}

/// Rotate by `angle` radians.
#[inline]
pub fn rotate(v: (f32, f32), angle: f32) -> (f32, f32) {
    let (s, c) = angle.sin_cos();
    (v.0 * c - v.1 * s, v.0 * s + v.1 * c)
}

/// Seek: move toward a target at the given speed.
pub fn seek(current: (f32, f32), target: (f32, f32), speed: f32) -> (f32, f32) {
    if speed <= 0.0 {
        return (0.0, 0.0);
    }
    let dir = normalize((target.0 - current.0, target.1 - current.1));
    (dir.0 * speed, dir.1 * speed)
}

/// Arrive: slow down when approaching the target.
pub fn arrive(
    current: (f32, f32),
    target: (f32, f32),
    max_speed: f32,
    slowing_distance: f32,
) -> (f32, f32) {
    if max_speed <= 0.0 {
        return (0.0, 0.0);
    }

    let to_target = (target.0 - current.0, target.1 - current.1);
    let distance = length(to_target);
    if distance < 0.0001 {
        return (0.0, 0.0);
    }

    let speed = if slowing_distance > 0.0 {
        let ratio = (distance / slowing_distance).clamp(0.0, 1.0);
        max_speed * ratio
    } else {
        max_speed
    };
    let dir = (to_target.0 / distance, to_target.1 / distance);
    (dir.0 * speed, dir.1 * speed)
}

/// Pursuit: chase a moving target by predicting its future position.
pub fn pursuit(
    current: (f32, f32),
    target_pos: (f32, f32),
    target_vel: (f32, f32),
    speed: f32,
    max_lookahead_s: f32,
) -> (f32, f32) {
    if speed <= 0.0 {
        return (0.0, 0.0);
    }

    let dist = distance(current, target_pos);
    let lookahead = (dist / speed).min(max_lookahead_s.max(0.0));
    let future = (target_pos.0 + target_vel.0 * lookahead, target_pos.1 + target_vel.1 * lookahead);
    seek(current, future, speed)
}

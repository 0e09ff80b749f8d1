use serde::{Deserialize, Serialize};

use super::player::PlayerId;
use super::team::{PerSide, TeamSide};
use crate::engine::physics_constants::field;

/// What released the ball most recently. Decides what a later claim means.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum LastKick {
    #[default]
    None,
    Pass { passer: PlayerId },
    Shot { shooter: PlayerId },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ball {
    pub position: (f32, f32),
    pub velocity: (f32, f32),
    /// 0 = grounded
    pub height: f32,
    pub owner: Option<PlayerId>,
    pub last_owner: Option<PlayerId>,
    /// Side of the last agent to touch the ball (owner or deflection)
    pub last_touch: Option<TeamSide>,
    /// Most recent owner from each side, for goal attribution
    pub last_owner_by_team: PerSide<Option<PlayerId>>,
    /// Passer of the last completed pass, cleared when the other side wins it
    pub pending_assist: Option<PlayerId>,
    pub last_kick: LastKick,
    /// Loose ball came to rest
    pub settled: bool,
}

impl Default for Ball {
    fn default() -> Self {
        Self {
            position: (field::CENTER_X, field::CENTER_Y),
            velocity: (0.0, 0.0),
            height: 0.0,
            owner: None,
            last_owner: None,
            last_touch: None,
            last_owner_by_team: PerSide::default(),
            pending_assist: None,
            last_kick: LastKick::None,
            settled: true,
        }
    }
}

impl Ball {
    #[inline]
    pub fn is_loose(&self) -> bool {
        self.owner.is_none()
    }

    #[inline]
    pub fn speed(&self) -> f32 {
        (self.velocity.0 * self.velocity.0 + self.velocity.1 * self.velocity.1).sqrt()
    }

    /// Dead ball on a spot: no owner, no motion.
    pub fn place(&mut self, position: (f32, f32)) {
        self.position = position;
        self.velocity = (0.0, 0.0);
        self.height = 0.0;
        self.owner = None;
        self.last_kick = LastKick::None;
        self.settled = true;
    }

    /// Grant possession. Touch bookkeeping follows the new owner.
    pub fn give_to(&mut self, id: PlayerId, side: TeamSide) {
        self.owner = Some(id);
        self.last_owner = Some(id);
        self.last_touch = Some(side);
        *self.last_owner_by_team.get_mut(side) = Some(id);
        self.last_kick = LastKick::None;
        self.height = 0.0;
        self.settled = false;
    }

    /// Release for a kick; velocity is set by the caller.
    pub fn release(&mut self, kick: LastKick) {
        self.owner = None;
        self.last_kick = kick;
        self.settled = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_give_and_release() {
        let mut ball = Ball::default();
        assert!(ball.is_loose());

        ball.give_to(PlayerId(3), TeamSide::Home);
        assert_eq!(ball.owner, Some(PlayerId(3)));
        assert_eq!(ball.last_touch, Some(TeamSide::Home));
        assert_eq!(ball.last_owner_by_team.home, Some(PlayerId(3)));

        ball.release(LastKick::Pass { passer: PlayerId(3) });
        assert!(ball.is_loose());
        assert_eq!(ball.last_owner, Some(PlayerId(3)));
    }

    #[test]
    fn test_place_clears_motion() {
        let mut ball = Ball {
            velocity: (4.0, -2.0),
            height: 1.2,
            owner: Some(PlayerId(1)),
            ..Default::default()
        };
        ball.place((10.0, 20.0));
        assert_eq!(ball.velocity, (0.0, 0.0));
        assert_eq!(ball.height, 0.0);
        assert!(ball.owner.is_none());
    }
}

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use super::team::TeamSide;
use crate::error::SetupError;

pub const ATTRIBUTE_MIN: u8 = 1;
pub const ATTRIBUTE_MAX: u8 = 20;

/// Agent identifier. Home occupies 1..=11, away 12..=22.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlayerId(pub u8);

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Role {
    GK,
    DL,
    DC,
    DR,
    DMC,
    ML,
    MC,
    MR,
    AML,
    AMC,
    AMR,
    ST,
}

/// Tactical role tendencies (1-20). 10 is neutral.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RoleBias {
    pub risk: f32,
    pub creative: f32,
    pub defensive: f32,
    pub roaming: f32,
}

impl Role {
    pub const ALL: [Role; 12] = [
        Role::GK,
        Role::DL,
        Role::DC,
        Role::DR,
        Role::DMC,
        Role::ML,
        Role::MC,
        Role::MR,
        Role::AML,
        Role::AMC,
        Role::AMR,
        Role::ST,
    ];

    pub fn code(&self) -> &'static str {
        match self {
            Role::GK => "GK",
            Role::DL => "DL",
            Role::DC => "DC",
            Role::DR => "DR",
            Role::DMC => "DMC",
            Role::ML => "ML",
            Role::MC => "MC",
            Role::MR => "MR",
            Role::AML => "AML",
            Role::AMC => "AMC",
            Role::AMR => "AMR",
            Role::ST => "ST",
        }
    }

    pub fn parse(code: &str) -> Option<Role> {
        let code = code.trim();
        Role::ALL.iter().copied().find(|r| r.code().eq_ignore_ascii_case(code))
    }

    pub fn is_goalkeeper(&self) -> bool {
        matches!(self, Role::GK)
    }

    pub fn is_defender(&self) -> bool {
        matches!(self, Role::DL | Role::DC | Role::DR)
    }

    pub fn is_forward(&self) -> bool {
        matches!(self, Role::AML | Role::AMC | Role::AMR | Role::ST)
    }

    /// (zone, lane) on the 6x5 tactical grid for a side attacking +x.
    /// Zone 0 is the own goal, lane 0 the y = 0 touchline.
    pub fn grid_cell(&self) -> (u8, u8) {
        match self {
            Role::GK => (0, 2),
            Role::DL => (1, 0),
            Role::DC => (1, 2),
            Role::DR => (1, 4),
            Role::DMC => (2, 2),
            Role::ML => (3, 0),
            Role::MC => (3, 2),
            Role::MR => (3, 4),
            Role::AML => (4, 0),
            Role::AMC => (4, 2),
            Role::AMR => (4, 4),
            Role::ST => (5, 2),
        }
    }

    pub fn bias(&self) -> RoleBias {
        let (risk, creative, defensive, roaming) = match self {
            Role::GK => (3.0, 6.0, 16.0, 2.0),
            Role::DC => (5.0, 7.0, 16.0, 5.0),
            Role::DL | Role::DR => (8.0, 9.0, 13.0, 11.0),
            Role::DMC => (7.0, 11.0, 14.0, 8.0),
            Role::MC => (10.0, 13.0, 10.0, 10.0),
            Role::ML | Role::MR => (12.0, 11.0, 9.0, 12.0),
            Role::AMC => (13.0, 15.0, 6.0, 12.0),
            Role::AML | Role::AMR => (14.0, 12.0, 6.0, 13.0),
            Role::ST => (16.0, 9.0, 5.0, 12.0),
        };
        RoleBias {
            risk,
            creative,
            defensive,
            roaming,
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// 27 named ratings on the 1-20 scale.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerAttributes {
    // Physical
    pub pace: u8,
    pub acceleration: u8,
    pub agility: u8,
    pub strength: u8,
    pub stamina: u8,
    pub balance: u8,
    // Technical
    pub passing: u8,
    pub technique: u8,
    pub finishing: u8,
    pub first_touch: u8,
    pub tackling: u8,
    pub heading: u8,
    pub crossing: u8,
    pub dribbling: u8,
    pub long_shots: u8,
    // Mental
    pub decisions: u8,
    pub composure: u8,
    pub vision: u8,
    pub anticipation: u8,
    pub positioning: u8,
    pub off_the_ball: u8,
    pub teamwork: u8,
    pub work_rate: u8,
    pub aggression: u8,
    pub concentration: u8,
    pub bravery: u8,
    pub determination: u8,
}

impl Default for PlayerAttributes {
    fn default() -> Self {
        Self::uniform(10)
    }
}

macro_rules! attribute_table {
    ($($field:ident),* $(,)?) => {
        impl PlayerAttributes {
            pub const KEYS: &'static [&'static str] = &[$(stringify!($field)),*];

            pub fn uniform(value: u8) -> Self {
                Self { $($field: value),* }
            }

            /// (key, value) pairs in declaration order.
            pub fn entries(&self) -> Vec<(&'static str, u8)> {
                vec![$((stringify!($field), self.$field)),*]
            }

            /// Mutable access by key, used by roster generation.
            pub fn get_mut(&mut self, key: &str) -> Option<&mut u8> {
                $(
                    if key == stringify!($field) {
                        return Some(&mut self.$field);
                    }
                )*
                None
            }
        }
    };
}

attribute_table!(
    pace,
    acceleration,
    agility,
    strength,
    stamina,
    balance,
    passing,
    technique,
    finishing,
    first_touch,
    tackling,
    heading,
    crossing,
    dribbling,
    long_shots,
    decisions,
    composure,
    vision,
    anticipation,
    positioning,
    off_the_ball,
    teamwork,
    work_rate,
    aggression,
    concentration,
    bravery,
    determination,
);

impl PlayerAttributes {
    /// Build from a normalized attribute map. Every key must be present and known.
    pub fn from_map(map: &BTreeMap<String, u8>) -> Result<Self, SetupError> {
        if let Some(unknown) = map.keys().find(|k| !Self::KEYS.contains(&k.as_str())) {
            return Err(SetupError::UnknownAttribute(unknown.clone()));
        }
        let mut attrs = Self::default();
        for key in Self::KEYS {
            let value = map.get(*key).ok_or_else(|| SetupError::MissingAttribute((*key).to_string()))?;
            if let Some(slot) = attrs.get_mut(key) {
                *slot = *value;
            }
        }
        attrs.validate()?;
        Ok(attrs)
    }

    pub fn validate(&self) -> Result<(), SetupError> {
        for (key, value) in self.entries() {
            if !(ATTRIBUTE_MIN..=ATTRIBUTE_MAX).contains(&value) {
                return Err(SetupError::AttributeOutOfRange { key: key.to_string(), value });
            }
        }
        Ok(())
    }

    /// Rating as f32 for score formulas.
    #[inline]
    pub fn f(value: u8) -> f32 {
        value as f32
    }
}

/// Mental / physical condition, each in [0, 100].
/// `fatigue` is remaining freshness: 100 = fully fresh.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MentalState {
    pub fatigue: f32,
    pub morale: f32,
    pub confidence: f32,
    pub condition: f32,
}

impl Default for MentalState {
    fn default() -> Self {
        Self {
            fatigue: 100.0,
            morale: 80.0,
            confidence: 80.0,
            condition: 100.0,
        }
    }
}

impl MentalState {
    pub fn clamp(&mut self) {
        self.fatigue = self.fatigue.clamp(0.0, 100.0);
        self.morale = self.morale.clamp(0.0, 100.0);
        self.confidence = self.confidence.clamp(0.0, 100.0);
        self.condition = self.condition.clamp(0.0, 100.0);
    }

    /// Freshness as 0..1
    #[inline]
    pub fn freshness01(&self) -> f32 {
        (self.fatigue / 100.0).clamp(0.0, 1.0)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PlayerMatchStats {
    pub goals: u16,
    pub assists: u16,
    pub passes_attempted: u16,
    pub passes_completed: u16,
    pub tackles_attempted: u16,
    pub tackles_won: u16,
    pub interceptions: u16,
    pub shots: u16,
    pub shots_on_target: u16,
    pub saves: u16,
    pub distance_covered: f32,
}

/// Current behaviour tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlayerAction {
    #[default]
    Idle,
    Move,
    ShortPass,
    LongPass,
    Dribble,
    Shoot,
    Hold,
    Tackle,
    Press,
    Contain,
    Intercept,
    Chase,
}

impl PlayerAction {
    /// Pass, shoot and hold keep the agent planted.
    pub fn is_stationary(&self) -> bool {
        matches!(
            self,
            PlayerAction::ShortPass | PlayerAction::LongPass | PlayerAction::Shoot | PlayerAction::Hold
        )
    }

    pub fn is_kick(&self) -> bool {
        matches!(self, PlayerAction::ShortPass | PlayerAction::LongPass | PlayerAction::Shoot)
    }

    pub fn tag(&self) -> &'static str {
        match self {
            PlayerAction::Idle => "idle",
            PlayerAction::Move => "move",
            PlayerAction::ShortPass => "pass_short",
            PlayerAction::LongPass => "pass_long",
            PlayerAction::Dribble => "dribble",
            PlayerAction::Shoot => "shoot",
            PlayerAction::Hold => "hold",
            PlayerAction::Tackle => "tackle",
            PlayerAction::Press => "press",
            PlayerAction::Contain => "contain",
            PlayerAction::Intercept => "intercept",
            PlayerAction::Chase => "chase",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub id: PlayerId,
    pub number: u8,
    pub name: String,
    pub side: TeamSide,
    pub role: Role,
    /// Lane on the tactical grid after splitting duplicated roles
    pub lane: u8,
    pub position: (f32, f32),
    pub velocity: (f32, f32),
    /// Formation anchor used for kickoff resets
    pub base_position: (f32, f32),
    pub target: Option<(f32, f32)>,
    pub action: PlayerAction,
    /// Seconds until the next decision. 0 = ready.
    pub action_timer: f32,
    /// Seconds until the agent may touch the ball again
    pub claim_cooldown: f32,
    pub attributes: PlayerAttributes,
    pub mental: MentalState,
    pub stats: PlayerMatchStats,
}

impl Player {
    #[inline]
    pub fn is_ready(&self) -> bool {
        self.action_timer <= 0.0
    }

    #[inline]
    pub fn distance_to(&self, point: (f32, f32)) -> f32 {
        let dx = self.position.0 - point.0;
        let dy = self.position.1 - point.1;
        (dx * dx + dy * dy).sqrt()
    }

    #[inline]
    pub fn speed(&self) -> f32 {
        (self.velocity.0 * self.velocity.0 + self.velocity.1 * self.velocity.1).sqrt()
    }

    /// Reset to the formation anchor, keeping identity and cumulative stats.
    pub fn reset_to_base(&mut self) {
        self.position = self.base_position;
        self.velocity = (0.0, 0.0);
        self.target = None;
        self.action = PlayerAction::Idle;
        self.action_timer = 0.0;
        self.claim_cooldown = 0.0;
    }
}

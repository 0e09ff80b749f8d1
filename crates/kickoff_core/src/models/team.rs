use std::fmt;

use serde::{Deserialize, Serialize};

use super::player::Role;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TeamSide {
    Home,
    Away,
}

impl TeamSide {
    pub const BOTH: [TeamSide; 2] = [TeamSide::Home, TeamSide::Away];

    #[inline]
    pub fn opponent(self) -> TeamSide {
        match self {
            TeamSide::Home => TeamSide::Away,
            TeamSide::Away => TeamSide::Home,
        }
    }

    /// Home attacks toward x = 105 for the whole match.
    #[inline]
    pub fn attacks_right(self) -> bool {
        matches!(self, TeamSide::Home)
    }

    #[inline]
    pub fn index(self) -> usize {
        match self {
            TeamSide::Home => 0,
            TeamSide::Away => 1,
        }
    }

    /// +1 when attacking toward x = 105, -1 otherwise
    #[inline]
    pub fn direction(self) -> f32 {
        if self.attacks_right() {
            1.0
        } else {
            -1.0
        }
    }
}

impl fmt::Display for TeamSide {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            TeamSide::Home => f.write_str("home"),
            TeamSide::Away => f.write_str("away"),
        }
    }
}

/// Per-side pair, indexable by `TeamSide`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct PerSide<T> {
    pub home: T,
    pub away: T,
}

impl<T> PerSide<T> {
    pub fn new(home: T, away: T) -> Self {
        Self { home, away }
    }

    pub fn get(&self, side: TeamSide) -> &T {
        match side {
            TeamSide::Home => &self.home,
            TeamSide::Away => &self.away,
        }
    }

    pub fn get_mut(&mut self, side: TeamSide) -> &mut T {
        match side {
            TeamSide::Home => &mut self.home,
            TeamSide::Away => &mut self.away,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Formation {
    #[default]
    #[serde(rename = "4-4-2")]
    F442,
    #[serde(rename = "4-3-3")]
    F433,
    #[serde(rename = "4-2-3-1")]
    F4231,
    #[serde(rename = "3-5-2")]
    F352,
}

impl Formation {
    pub const ALL: [Formation; 4] = [Formation::F442, Formation::F433, Formation::F4231, Formation::F352];

    pub fn name(&self) -> &'static str {
        match self {
            Formation::F442 => "4-4-2",
            Formation::F433 => "4-3-3",
            Formation::F4231 => "4-2-3-1",
            Formation::F352 => "3-5-2",
        }
    }

    pub fn parse(name: &str) -> Option<Formation> {
        let name = name.trim();
        Formation::ALL.iter().copied().find(|f| f.name() == name)
    }

    /// Unknown names fall back to 4-4-2.
    pub fn parse_or_default(name: &str) -> Formation {
        match Formation::parse(name) {
            Some(f) => f,
            None => {
                log::warn!("unknown formation {:?}, falling back to {}", name, Formation::default().name());
                Formation::default()
            }
        }
    }

    /// Role per slot. Slot 0 is always the goalkeeper.
    pub fn roles(&self) -> [Role; 11] {
        use Role::*;
        match self {
            Formation::F442 => [GK, DL, DC, DC, DR, ML, MC, MC, MR, ST, ST],
            Formation::F433 => [GK, DL, DC, DC, DR, MC, MC, MC, AML, ST, AMR],
            Formation::F4231 => [GK, DL, DC, DC, DR, DMC, DMC, AML, AMC, AMR, ST],
            Formation::F352 => [GK, DC, DC, DC, ML, DMC, MC, MC, MR, ST, ST],
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Mentality {
    Defensive,
    #[default]
    Balanced,
    Attacking,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Width {
    Narrow,
    #[default]
    Normal,
    Wide,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Pressing {
    Low,
    #[default]
    Medium,
    High,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DefensiveLine {
    Deep,
    #[default]
    Normal,
    High,
}

/// Read-only per-match team instructions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TeamTactics {
    pub formation: Formation,
    pub mentality: Mentality,
    pub width: Width,
    pub pressing: Pressing,
    pub defensive_line: DefensiveLine,
}

impl Mentality {
    /// -1 / 0 / +1
    pub fn sign(&self) -> f32 {
        match self {
            Mentality::Defensive => -1.0,
            Mentality::Balanced => 0.0,
            Mentality::Attacking => 1.0,
        }
    }
}

impl DefensiveLine {
    pub fn sign(&self) -> f32 {
        match self {
            DefensiveLine::Deep => -1.0,
            DefensiveLine::Normal => 0.0,
            DefensiveLine::High => 1.0,
        }
    }
}

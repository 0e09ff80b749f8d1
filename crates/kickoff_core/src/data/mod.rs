//! Roster data sources
//!
//! The simulation never reaches for a global store. A `RosterProvider` is
//! constructed by the caller and handed to `create_initial_state`; it yields
//! 11 normalized entries per side (role enum, full attribute bundle).

pub mod generators;

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use crate::engine::sim_rng::SimRng;
use crate::error::SetupError;
use crate::models::{Formation, PlayerAttributes, Role, TeamSide};

pub const SQUAD_SIZE: usize = 11;

/// One normalized roster line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RosterEntry {
    pub number: u8,
    pub name: String,
    pub role: Role,
    pub attributes: PlayerAttributes,
}

/// Loosely typed roster line as it arrives from outside (JSON, a club store).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawRosterEntry {
    pub number: u8,
    pub name: String,
    pub role: String,
    pub attributes: BTreeMap<String, u8>,
}

impl RawRosterEntry {
    pub fn normalize(&self) -> Result<RosterEntry, SetupError> {
        let role = Role::parse(&self.role).ok_or_else(|| SetupError::UnknownRole(self.role.clone()))?;
        Ok(RosterEntry {
            number: self.number,
            name: self.name.trim().to_string(),
            role,
            attributes: PlayerAttributes::from_map(&self.attributes)?,
        })
    }
}

/// Supplies a starting eleven per side.
pub trait RosterProvider {
    fn roster(&self, side: TeamSide, formation: Formation) -> Result<Vec<RosterEntry>, SetupError>;
}

/// Random role-appropriate squads, fully determined by `seed`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratedRoster {
    pub seed: u64,
}

impl GeneratedRoster {
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }
}

impl RosterProvider for GeneratedRoster {
    fn roster(&self, side: TeamSide, formation: Formation) -> Result<Vec<RosterEntry>, SetupError> {
        let salt = match side {
            TeamSide::Home => 0x9E37_79B9_7F4A_7C15,
            TeamSide::Away => 0xC2B2_AE3D_27D4_EB4F,
        };
        let mut rng = SimRng::new(self.seed ^ salt);
        let roles = formation.roles();
        let names = generators::generate_names(&mut rng, roles.len());
        Ok(roles
            .iter()
            .zip(names)
            .enumerate()
            .map(|(slot, (role, name))| RosterEntry {
                number: generators::squad_number(slot),
                name,
                role: *role,
                attributes: generators::generate_attributes(*role, &mut rng),
            })
            .collect())
    }
}

/// Caller-supplied squads, one list per side.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StaticRoster {
    pub home: Vec<RosterEntry>,
    pub away: Vec<RosterEntry>,
}

impl StaticRoster {
    pub fn new(home: Vec<RosterEntry>, away: Vec<RosterEntry>) -> Self {
        Self { home, away }
    }

    pub fn from_raw(home: &[RawRosterEntry], away: &[RawRosterEntry]) -> Result<Self, SetupError> {
        let home = home.iter().map(RawRosterEntry::normalize).collect::<Result<Vec<_>, _>>()?;
        let away = away.iter().map(RawRosterEntry::normalize).collect::<Result<Vec<_>, _>>()?;
        Ok(Self { home, away })
    }
}

impl RosterProvider for StaticRoster {
    fn roster(&self, side: TeamSide, _formation: Formation) -> Result<Vec<RosterEntry>, SetupError> {
        Ok(match side {
            TeamSide::Home => self.home.clone(),
            TeamSide::Away => self.away.clone(),
        })
    }
}

/// Boundary check: 11 players, one keeper, unique numbers, names, ratings in range.
pub fn validate_roster(side: TeamSide, entries: &[RosterEntry]) -> Result<(), SetupError> {
    if entries.len() != SQUAD_SIZE {
        return Err(SetupError::InvalidTeamSize { side, found: entries.len() });
    }
    let keepers = entries.iter().filter(|e| e.role.is_goalkeeper()).count();
    if keepers != 1 {
        return Err(SetupError::GoalkeeperCount { side, found: keepers });
    }
    let mut numbers = BTreeSet::new();
    for e in entries {
        if !numbers.insert(e.number) {
            return Err(SetupError::DuplicateNumber { side, number: e.number });
        }
        if e.name.trim().is_empty() {
            return Err(SetupError::EmptyName { side });
        }
        e.attributes.validate()?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generated_roster_is_valid_and_seeded() {
        let provider = GeneratedRoster::new(17);
        for side in TeamSide::BOTH {
            let roster = provider.roster(side, Formation::F433).unwrap();
            assert!(validate_roster(side, &roster).is_ok());
            assert_eq!(roster[0].role, Role::GK);
        }
        let again = GeneratedRoster::new(17).roster(TeamSide::Home, Formation::F433).unwrap();
        assert_eq!(again, provider.roster(TeamSide::Home, Formation::F433).unwrap());
        assert_ne!(
            provider.roster(TeamSide::Home, Formation::F433).unwrap(),
            provider.roster(TeamSide::Away, Formation::F433).unwrap()
        );
    }

    #[test]
    fn test_generated_names_never_repeat_within_a_side() {
        for seed in 0..20 {
            for side in TeamSide::BOTH {
                let roster = GeneratedRoster::new(seed).roster(side, Formation::F442).unwrap();
                let names: std::collections::BTreeSet<&str> = roster.iter().map(|e| e.name.as_str()).collect();
                assert_eq!(names.len(), roster.len(), "seed {} {}", seed, side);
            }
        }
    }

    #[test]
    fn test_validate_rejects_malformed() {
        let good = GeneratedRoster::new(1).roster(TeamSide::Home, Formation::F442).unwrap();

        let short = &good[..10];
        assert_eq!(
            validate_roster(TeamSide::Home, short),
            Err(SetupError::InvalidTeamSize { side: TeamSide::Home, found: 10 })
        );

        let mut two_keepers = good.clone();
        two_keepers[1].role = Role::GK;
        assert!(matches!(
            validate_roster(TeamSide::Home, &two_keepers),
            Err(SetupError::GoalkeeperCount { found: 2, .. })
        ));

        let mut dup = good.clone();
        dup[3].number = dup[4].number;
        assert!(matches!(validate_roster(TeamSide::Home, &dup), Err(SetupError::DuplicateNumber { .. })));

        let mut bad_attr = good.clone();
        bad_attr[5].attributes.pace = 21;
        assert!(matches!(
            validate_roster(TeamSide::Home, &bad_attr),
            Err(SetupError::AttributeOutOfRange { .. })
        ));

        let mut nameless = good;
        nameless[2].name = "  ".into();
        assert_eq!(validate_roster(TeamSide::Home, &nameless), Err(SetupError::EmptyName { side: TeamSide::Home }));
    }

    #[test]
    fn test_raw_entry_normalizes() {
        let attributes: BTreeMap<String, u8> =
            PlayerAttributes::KEYS.iter().map(|k| (k.to_string(), 11)).collect();
        let raw = RawRosterEntry {
            number: 9,
            name: " Kane ".into(),
            role: "st".into(),
            attributes,
        };
        let entry = raw.normalize().unwrap();
        assert_eq!(entry.role, Role::ST);
        assert_eq!(entry.name, "Kane");

        let bad = RawRosterEntry {
            role: "SW".into(),
            ..raw
        };
        assert_eq!(bad.normalize(), Err(SetupError::UnknownRole("SW".into())));
    }
}

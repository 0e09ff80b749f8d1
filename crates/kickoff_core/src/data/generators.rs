//! Role-based attribute generation.
//!
//! Every rating starts from a broad default range and some roles get
//! elevated ranges for their signature attributes. All draws are bounded and
//! land inside 1..=20.

use crate::engine::sim_rng::SimRng;
use crate::models::{PlayerAttributes, Role};

const NAMES: &[&str] = &[
    "Smith", "Johnson", "Williams", "Brown", "Jones", "Garcia", "Miller", "Davis", "Rodriguez",
    "Martinez", "Hernandez", "Lopez", "Gonzalez", "Wilson", "Anderson", "Thomas", "Taylor", "Moore",
    "Jackson", "Martin", "Lee", "Perez", "Thompson", "White", "Harris", "Sanchez", "Clark",
    "Ramirez", "Lewis", "Robinson", "Walker", "Young", "Allen", "King", "Wright", "Scott", "Torres",
    "Nguyen", "Hill", "Flores",
];

/// Default range for an attribute before role overrides.
fn default_range(key: &str) -> (u8, u8) {
    match key {
        "stamina" => (10, 18),
        "finishing" | "tackling" | "heading" | "crossing" | "long_shots" => (5, 12),
        _ => (8, 16),
    }
}

/// Role-specific overrides.
pub fn role_ranges(role: Role) -> &'static [(&'static str, u8, u8)] {
    match role {
        Role::GK => &[("passing", 5, 12), ("finishing", 1, 5), ("positioning", 12, 18), ("anticipation", 11, 17)],
        Role::DC => &[("heading", 12, 18), ("tackling", 12, 18), ("strength", 12, 18), ("positioning", 12, 18)],
        Role::DL | Role::DR => &[("tackling", 11, 17), ("pace", 11, 17), ("crossing", 9, 15), ("stamina", 12, 18)],
        Role::MC | Role::DMC => &[("passing", 12, 18), ("vision", 12, 18), ("teamwork", 12, 18), ("stamina", 14, 20)],
        Role::ST => &[
            ("finishing", 14, 20),
            ("off_the_ball", 14, 20),
            ("composure", 12, 18),
            ("acceleration", 12, 18),
        ],
        Role::AMR | Role::AML | Role::MR | Role::ML => &[
            ("pace", 14, 20),
            ("dribbling", 14, 20),
            ("crossing", 12, 18),
            ("agility", 12, 18),
        ],
        Role::AMC => &[("passing", 12, 18), ("vision", 13, 19), ("technique", 12, 18), ("long_shots", 10, 16)],
    }
}

/// Attribute bundle for a role; every field populated, every value in 1..=20.
pub fn generate_attributes(role: Role, rng: &mut SimRng) -> PlayerAttributes {
    let mut attrs = PlayerAttributes::default();
    for key in PlayerAttributes::KEYS {
        let (lo, hi) = role_ranges(role)
            .iter()
            .find(|(k, _, _)| k == key)
            .map(|(_, lo, hi)| (*lo, *hi))
            .unwrap_or_else(|| default_range(key));
        if let Some(slot) = attrs.get_mut(key) {
            *slot = rng.int_inclusive(lo, hi).clamp(1, 20);
        }
    }
    attrs
}

/// Surnames for one squad, drawn without replacement so nobody shares a
/// name with a teammate. Past the pool size a numeric suffix keeps them apart.
pub fn generate_names(rng: &mut SimRng, count: usize) -> Vec<String> {
    let mut pool: Vec<usize> = (0..NAMES.len()).collect();
    let last = (NAMES.len() - 1) as u8;
    (0..count)
        .map(|n| {
            let i = n % NAMES.len();
            if i == 0 && n > 0 {
                pool = (0..NAMES.len()).collect();
            }
            // 부분 Fisher-Yates
            let j = rng.int_inclusive(i as u8, last) as usize;
            pool.swap(i, j);
            let name = NAMES[pool[i]];
            match n / NAMES.len() {
                0 => name.to_string(),
                round => format!("{} {}", name, round + 1),
            }
        })
        .collect()
}

/// Conventional shirt number for a slot.
pub fn squad_number(slot: usize) -> u8 {
    (slot as u8).saturating_add(1)
}

//! Formation slots → grid lanes and kickoff anchors.
//!
//! Roles shared by several players are split symmetrically across lanes
//! (two centre-backs stand in lanes 1 and 3, never both in lane 2).

use std::collections::BTreeMap;

use super::physics_constants::{field, grid};
use crate::models::{Role, TeamSide};

/// Lane for each slot, in roster order.
pub fn assign_lanes(roles: &[Role]) -> Vec<u8> {
    let mut counts: BTreeMap<Role, usize> = BTreeMap::new();
    for role in roles {
        *counts.entry(*role).or_insert(0) += 1;
    }

    let mut seen: BTreeMap<Role, usize> = BTreeMap::new();
    roles
        .iter()
        .map(|role| {
            let n = counts.get(role).copied().unwrap_or(1);
            let i = seen.entry(*role).or_insert(0);
            let lane = split_lane(role.grid_cell().1, n, *i);
            *i += 1;
            lane
        })
        .collect()
}

/// Lane of the `i`-th of `n` players sharing a role whose default lane is `default_lane`.
fn split_lane(default_lane: u8, n: usize, i: usize) -> u8 {
    match n {
        0 | 1 => default_lane,
        2 => [1, 3][i.min(1)],
        3 => [1, 2, 3][i.min(2)],
        _ => {
            let last = (grid::LANES - 1) as f32;
            ((i as f32 * last / (n - 1) as f32).round() as u8).min(grid::LANES - 1)
        }
    }
}

/// Centre of a grid cell for a side attacking +x (home frame).
pub fn cell_center(zone: u8, lane: u8) -> (f32, f32) {
    (
        (zone as f32 + 0.5) * grid::ZONE_DEPTH_M,
        (lane as f32 + 0.5) * grid::LANE_WIDTH_M,
    )
}

/// Mirror a home-frame point into the side's own frame.
#[inline]
pub fn to_side_frame(point: (f32, f32), side: TeamSide) -> (f32, f32) {
    if side.attacks_right() {
        point
    } else {
        (field::LENGTH_M - point.0, field::WIDTH_M - point.1)
    }
}

/// Kickoff anchor: grid cell squeezed into the own half.
pub fn base_position(role: Role, lane: u8, side: TeamSide) -> (f32, f32) {
    let (zone, _) = role.grid_cell();
    let (x, y) = cell_center(zone, lane);
    to_side_frame((x * grid::OWN_HALF_COMPRESSION, y), side)
}

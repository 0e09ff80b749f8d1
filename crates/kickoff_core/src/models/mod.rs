pub mod ball;
pub mod events;
pub mod match_statistics;
pub mod player;
pub mod team;

pub use ball::{Ball, LastKick};
pub use events::{EventDetails, EventType, LogKind, MatchEvent, MatchLog};
pub use match_statistics::{PenaltyTally, Score, TeamStats};
pub use player::{
    MentalState, Player, PlayerAction, PlayerAttributes, PlayerId, PlayerMatchStats, Role,
    RoleBias,
};
pub use team::{
    DefensiveLine, Formation, Mentality, PerSide, Pressing, TeamSide, TeamTactics, Width,
};

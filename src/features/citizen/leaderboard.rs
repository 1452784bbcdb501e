use serde::Serialize;

/// Top contributors shown on the home page. Not backed by any store yet.
const CONTRIBUTORS: [(&str, u32); 5] = [
    ("EcoWarrior99", 1250),
    ("GreenGuardian", 980),
    ("RiverSaver", 850),
    ("CleanWaterAct", 720),
    ("NatureLover", 600),
];

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LeaderboardEntry {
    pub rank: usize,
    pub username: &'static str,
    pub points: u32,
    pub level: u32,
}

/// Level is points / 100, rounded half up
fn level_for(points: u32) -> u32 {
    (points + 50) / 100
}

pub fn leaderboard() -> Vec<LeaderboardEntry> {
    CONTRIBUTORS
        .iter()
        .enumerate()
        .map(|(idx, &(username, points))| LeaderboardEntry {
            rank: idx + 1,
            username,
            points,
            level: level_for(points),
        })
        .collect()
}

//! Leaderboard and podium view models.

use serde::{Deserialize, Serialize};

/// One ranked row of a leaderboard.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LeaderboardEntry {
    /// Dense rank, 1 = best
    pub rank: u32,

    /// Player name
    pub player: String,

    /// Class of the player's best sample. On the combined board this is
    /// the class the best result was achieved with.
    pub class: Option<String>,

    /// Best DPS within the scope
    pub dps: f64,

    /// Whether the best result equals the player's most recent result
    pub is_new_record: bool,
}

/// Medal position on the podium. Serialized as its position (1, 2 or 3).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
pub enum Medal {
    Gold,
    Silver,
    Bronze,
}

impl Medal {
    /// Medals in podium order.
    pub const ALL: [Medal; 3] = [Medal::Gold, Medal::Silver, Medal::Bronze];

    /// Numeric position (1, 2 or 3).
    pub fn position(&self) -> u8 {
        match self {
            Medal::Gold => 1,
            Medal::Silver => 2,
            Medal::Bronze => 3,
        }
    }

    /// Icon used by the dashboard.
    pub fn icon(&self) -> &'static str {
        match self {
            Medal::Gold => "🥇",
            Medal::Silver => "🥈",
            Medal::Bronze => "🥉",
        }
    }
}

impl From<Medal> for u8 {
    fn from(medal: Medal) -> Self {
        medal.position()
    }
}

impl TryFrom<u8> for Medal {
    type Error = String;

    fn try_from(position: u8) -> Result<Self, Self::Error> {
        match position {
            1 => Ok(Medal::Gold),
            2 => Ok(Medal::Silver),
            3 => Ok(Medal::Bronze),
            other => Err(format!("invalid medal position: {}", other)),
        }
    }
}

impl std::fmt::Display for Medal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.position())
    }
}

/// One podium step.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PodiumEntry {
    #[serde(rename = "medal_position")]
    pub medal: Medal,
    pub player: String,
    pub dps: f64,
}

impl PodiumEntry {
    pub fn medal_position(&self) -> u8 {
        self.medal.position()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_medal_positions() {
        let positions: Vec<u8> = Medal::ALL.iter().map(Medal::position).collect();
        assert_eq!(positions, vec![1, 2, 3]);
    }

    #[test]
    fn test_medal_display_and_icon() {
        assert_eq!(format!("{}", Medal::Silver), "2");
        assert_eq!(Medal::Gold.icon(), "🥇");
        assert_eq!(Medal::Bronze.icon(), "🥉");
    }

    #[test]
    fn test_podium_entry_serializes_medal_position() {
        let entry = PodiumEntry {
            medal: Medal::Silver,
            player: "Mika".to_string(),
            dps: 1900.0,
        };

        let json = serde_json::to_value(&entry).unwrap();
        assert_eq!(json["medal_position"], 2);
        assert_eq!(json["player"], "Mika");

        let back: PodiumEntry = serde_json::from_value(json).unwrap();
        assert_eq!(back, entry);
    }

    #[test]
    fn test_medal_rejects_unknown_position() {
        assert_eq!(Medal::try_from(3), Ok(Medal::Bronze));
        assert!(Medal::try_from(4).is_err());
        assert!(serde_json::from_str::<Medal>("0").is_err());
    }

    #[test]
    fn test_entry_serialization() {
        let entry = LeaderboardEntry {
            rank: 1,
            player: "Cruellia".to_string(),
            class: Some("Mage".to_string()),
            dps: 2500.0,
            is_new_record: true,
        };

        let json = serde_json::to_string(&entry).unwrap();
        let deserialized: LeaderboardEntry = serde_json::from_str(&json).unwrap();
        assert_eq!(entry, deserialized);
    }
}

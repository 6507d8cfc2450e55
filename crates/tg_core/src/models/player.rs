use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Unique player identifier, assigned by the roster that owns the player.
pub type PlayerId = u32;

/// Win rate assumed for a player with no recorded matches. Keeping the prior
/// at the midpoint means newcomers neither inflate nor drag a team's history
/// score.
pub const DEFAULT_WIN_RATE: f32 = 50.0;

/// Playing position, kept to the four generic lines; the generator only ever
/// reasons about lines, never about specific roles within one.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Position {
    Goalkeeper,
    Defender,
    Midfielder,
    Forward,
}

impl Position {
    /// All positions in their canonical order (goal line outward). Grouped
    /// distribution and the balance score iterate in this order.
    pub const ALL: [Position; 4] =
        [Position::Goalkeeper, Position::Defender, Position::Midfielder, Position::Forward];

    /// Share of a well-composed team this position should occupy.
    /// The position balance score measures distance from these shares.
    pub fn ideal_share(&self) -> f32 {
        match self {
            Position::Goalkeeper => 0.10,
            Position::Defender => 0.30,
            Position::Midfielder => 0.40,
            Position::Forward => 0.20,
        }
    }

    /// Two-letter code used in team sheets and compact output.
    pub fn code(&self) -> &'static str {
        match self {
            Position::Goalkeeper => "GK",
            Position::Defender => "DF",
            Position::Midfielder => "MF",
            Position::Forward => "FW",
        }
    }

    pub fn is_goalkeeper(&self) -> bool {
        matches!(self, Position::Goalkeeper)
    }
}

impl FromStr for Position {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "GOALKEEPER" | "GK" => Ok(Position::Goalkeeper),
            "DEFENDER" | "DF" | "DEF" => Ok(Position::Defender),
            "MIDFIELDER" | "MF" | "MID" => Ok(Position::Midfielder),
            "FORWARD" | "FW" | "FWD" => Ok(Position::Forward),
            _ => Err(format!("Invalid position: {}", s)),
        }
    }
}

/// Per-player career counters and ratings.
///
/// # Boundary Contract
/// - `skill_rating` is always 1..=5 once a player passes the roster boundary;
///   the generator itself never re-checks it.
/// - History counters (`team_wins`/`team_losses`/`team_draws`) are written
///   only by result recording, never by team generation.
/// - `form_rating` and `position_rating` are optional refinements; both fall
///   back to `skill_rating` when absent.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PlayerStats {
    /// Overall skill on a 1..=5 scale.
    #[serde(default = "default_skill_rating")]
    pub skill_rating: u8,

    #[serde(default)]
    pub goals: u32,
    #[serde(default)]
    pub assists: u32,
    #[serde(default)]
    pub clean_sheets: u32,
    #[serde(default)]
    pub tackles: u32,
    #[serde(default)]
    pub saves: u32,
    #[serde(default)]
    pub games_played: u32,

    /// Matches won while on a generated team.
    #[serde(default)]
    pub team_wins: u32,
    /// Matches lost while on a generated team.
    #[serde(default)]
    pub team_losses: u32,
    /// Matches drawn while on a generated team.
    #[serde(default)]
    pub team_draws: u32,

    /// Recent-form override, 1..=5. Falls back to `skill_rating`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub form_rating: Option<u8>,
    /// How well the player fills their nominal position, 1..=5.
    /// Falls back to `skill_rating`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position_rating: Option<u8>,
}

fn default_skill_rating() -> u8 {
    3
}

impl Default for PlayerStats {
    fn default() -> Self {
        Self {
            skill_rating: default_skill_rating(),
            goals: 0,
            assists: 0,
            clean_sheets: 0,
            tackles: 0,
            saves: 0,
            games_played: 0,
            team_wins: 0,
            team_losses: 0,
            team_draws: 0,
            form_rating: None,
            position_rating: None,
        }
    }
}

impl PlayerStats {
    /// Boundary validation for ratings. Counters are unsigned and need no
    /// checking. Returns the reason on failure so callers can attach the
    /// player id.
    pub fn validate(&self) -> Result<(), String> {
        validate_rating("skill_rating", self.skill_rating)?;
        if let Some(form) = self.form_rating {
            validate_rating("form_rating", form)?;
        }
        if let Some(strength) = self.position_rating {
            validate_rating("position_rating", strength)?;
        }
        Ok(())
    }

    /// Total matches recorded against this player's team history.
    pub fn recorded_matches(&self) -> u32 {
        self.team_wins + self.team_losses + self.team_draws
    }
}

fn validate_rating(field: &str, value: u8) -> Result<(), String> {
    if (1..=5).contains(&value) {
        Ok(())
    } else {
        Err(format!("{} must be 1..=5, got {}", field, value))
    }
}

/// Player record as the generator consumes it: read-only input resolved
/// through a [`crate::roster::PlayerResolver`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Player {
    pub id: PlayerId,
    pub name: String,
    pub position: Position,
    #[serde(default)]
    pub stats: PlayerStats,
}

impl Player {
    /// Percentage of recorded matches won, or [`DEFAULT_WIN_RATE`] when the
    /// player has no history yet.
    pub fn win_rate(&self) -> f32 {
        let recorded = self.stats.recorded_matches();
        if recorded == 0 {
            return DEFAULT_WIN_RATE;
        }
        self.stats.team_wins as f32 / recorded as f32 * 100.0
    }

    /// Current form, defaulting to overall skill when not tracked.
    pub fn form_rating(&self) -> u8 {
        self.stats.form_rating.unwrap_or(self.stats.skill_rating)
    }

    /// Positional strength, defaulting to overall skill when not tracked.
    pub fn position_strength(&self) -> u8 {
        self.stats.position_rating.unwrap_or(self.stats.skill_rating)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn player_with_history(wins: u32, losses: u32, draws: u32) -> Player {
        Player {
            id: 1,
            name: "Test".to_string(),
            position: Position::Midfielder,
            stats: PlayerStats {
                team_wins: wins,
                team_losses: losses,
                team_draws: draws,
                ..PlayerStats::default()
            },
        }
    }

    #[test]
    fn win_rate_uses_midpoint_prior_without_history() {
        let player = player_with_history(0, 0, 0);
        assert_eq!(player.win_rate(), DEFAULT_WIN_RATE);
    }

    #[test]
    fn win_rate_is_percentage_of_recorded_matches() {
        let player = player_with_history(3, 1, 0);
        assert!((player.win_rate() - 75.0).abs() < f32::EPSILON);

        let player = player_with_history(1, 1, 2);
        assert!((player.win_rate() - 25.0).abs() < f32::EPSILON);
    }

    #[test]
    fn form_and_position_strength_fall_back_to_skill() {
        let mut player = player_with_history(0, 0, 0);
        player.stats.skill_rating = 4;
        assert_eq!(player.form_rating(), 4);
        assert_eq!(player.position_strength(), 4);

        player.stats.form_rating = Some(2);
        player.stats.position_rating = Some(5);
        assert_eq!(player.form_rating(), 2);
        assert_eq!(player.position_strength(), 5);
    }

    #[test]
    fn stats_validation_rejects_out_of_range_ratings() {
        let mut stats = PlayerStats::default();
        assert!(stats.validate().is_ok());

        stats.skill_rating = 0;
        assert!(stats.validate().is_err());
        stats.skill_rating = 6;
        assert!(stats.validate().is_err());

        stats.skill_rating = 5;
        stats.form_rating = Some(9);
        let err = stats.validate().unwrap_err();
        assert!(err.contains("form_rating"));
    }

    #[test]
    fn position_parses_names_and_codes() {
        assert_eq!("Goalkeeper".parse::<Position>().unwrap(), Position::Goalkeeper);
        assert_eq!("gk".parse::<Position>().unwrap(), Position::Goalkeeper);
        assert_eq!("DEF".parse::<Position>().unwrap(), Position::Defender);
        assert_eq!("midfielder".parse::<Position>().unwrap(), Position::Midfielder);
        assert_eq!("FWD".parse::<Position>().unwrap(), Position::Forward);
        assert!("sweeper".parse::<Position>().is_err());
    }

    #[test]
    fn position_serde_round_trips_full_names() {
        let json = serde_json::to_string(&Position::Goalkeeper).unwrap();
        assert_eq!(json, "\"Goalkeeper\"");
        let parsed: Position = serde_json::from_str("\"Forward\"").unwrap();
        assert_eq!(parsed, Position::Forward);
    }

    #[test]
    fn ideal_shares_cover_a_full_team() {
        let total: f32 = Position::ALL.iter().map(|p| p.ideal_share()).sum();
        assert!((total - 1.0).abs() < f32::EPSILON);
    }

    #[test]
    fn player_deserializes_with_defaulted_stats() {
        let json = r#"{"id": 7, "name": "Ada", "position": "Defender"}"#;
        let player: Player = serde_json::from_str(json).unwrap();
        assert_eq!(player.stats.skill_rating, 3);
        assert_eq!(player.stats.games_played, 0);
        assert_eq!(player.win_rate(), DEFAULT_WIN_RATE);
    }
}

// This file is part of pingpong-bracket.
//
// pingpong-bracket is free software: you can redistribute it and/or modify
// it under the terms of the GNU Affero General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// pingpong-bracket is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU Affero General Public License for more details.
//
// You should have received a copy of the GNU Affero General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::team::{BYE, TBD, Team};

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Side {
    Team1,
    Team2,
}

impl Side {
    /// The slot a match at `index` feeds in the next round.
    #[must_use]
    pub fn feeding(index: usize) -> Self {
        if index % 2 == 0 { Self::Team1 } else { Self::Team2 }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Team1 => write!(f, "team1"),
            Self::Team2 => write!(f, "team2"),
        }
    }
}

#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(deny_unknown_fields, rename_all = "camelCase")]
pub struct Match {
    pub id: String,
    pub team1: String,
    pub team2: String,
    pub team1_players: Vec<String>,
    pub team2_players: Vec<String>,
    /// Empty while undecided.
    #[serde(default)]
    pub winner: String,
}

impl Match {
    /// Pairs two first round teams. A lone BYE hands the match to the other
    /// side straight away.
    #[must_use]
    pub fn new(id: String, team1: &Team, team2: &Team) -> Self {
        let winner = match (team1.is_bye(), team2.is_bye()) {
            (true, false) => team2.name.clone(),
            (false, true) => team1.name.clone(),
            _ => String::new(),
        };

        Self {
            id,
            team1: team1.name.clone(),
            team2: team2.name.clone(),
            team1_players: team1.players.clone(),
            team2_players: team2.players.clone(),
            winner,
        }
    }

    #[must_use]
    pub fn placeholder(id: String) -> Self {
        Self {
            id,
            team1: TBD.to_string(),
            team2: TBD.to_string(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn team(&self, side: Side) -> &str {
        match side {
            Side::Team1 => &self.team1,
            Side::Team2 => &self.team2,
        }
    }

    #[must_use]
    pub fn players(&self, side: Side) -> &[String] {
        match side {
            Side::Team1 => &self.team1_players,
            Side::Team2 => &self.team2_players,
        }
    }

    pub fn set_team(&mut self, side: Side, name: &str, players: &[String]) {
        let (team, team_players) = match side {
            Side::Team1 => (&mut self.team1, &mut self.team1_players),
            Side::Team2 => (&mut self.team2, &mut self.team2_players),
        };

        name.clone_into(team);
        players.clone_into(team_players);
    }

    pub fn reset_team(&mut self, side: Side) {
        self.set_team(side, TBD, &[]);
    }

    /// Which side `name` plays on, checking team1 first.
    #[must_use]
    pub fn side_of(&self, name: &str) -> Option<Side> {
        if self.team1 == name {
            Some(Side::Team1)
        } else if self.team2 == name {
            Some(Side::Team2)
        } else {
            None
        }
    }

    #[must_use]
    pub fn winning_side(&self) -> Option<Side> {
        if self.is_decided() {
            self.side_of(&self.winner)
        } else {
            None
        }
    }

    #[must_use]
    pub fn is_decided(&self) -> bool {
        !self.winner.is_empty()
    }

    #[must_use]
    pub fn has_unresolved_side(&self) -> bool {
        self.team1 == TBD || self.team2 == TBD
    }

    #[must_use]
    pub fn has_bye(&self) -> bool {
        self.team1 == BYE || self.team2 == BYE
    }

    /// Two real teams are waiting to play.
    #[must_use]
    pub fn is_playable(&self) -> bool {
        !self.is_decided() && !self.has_unresolved_side() && !self.has_bye()
    }
}

impl fmt::Display for Match {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {} vs {}", self.id, self.team1, self.team2)?;

        if self.is_decided() {
            write!(f, " -> {}", self.winner)?;
        }

        Ok(())
    }
}

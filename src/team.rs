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

/// The name of a slot that has no opponent.
pub const BYE: &str = "BYE";

/// The name of a slot whose team is still waiting on an earlier match.
pub const TBD: &str = "TBD";

#[derive(Clone, Debug, Default, Deserialize, Eq, Hash, PartialEq, Serialize)]
#[serde(deny_unknown_fields)]
pub struct Team {
    pub id: String,
    pub name: String,
    pub players: Vec<String>,
}

impl Team {
    #[must_use]
    pub fn new(id: &str, name: &str, players: &[&str]) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            players: players.iter().map(ToString::to_string).collect(),
        }
    }

    /// A placeholder that fills slot `position` of the first round.
    #[must_use]
    pub fn bye(position: usize) -> Self {
        Self {
            id: format!("bye-{position}"),
            name: BYE.to_string(),
            players: Vec::new(),
        }
    }

    #[must_use]
    pub fn is_bye(&self) -> bool {
        self.name == BYE
    }
}

impl fmt::Display for Team {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.players.is_empty() {
            write!(f, "{} {}", self.id, self.name)
        } else {
            write!(f, "{} {} ({})", self.id, self.name, self.players.join(", "))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bye_ids_follow_position() {
        let bye = Team::bye(3);
        assert_eq!(bye.id, "bye-3");
        assert!(bye.is_bye());
        assert!(bye.players.is_empty());
    }

    #[test]
    fn display() {
        let team = Team::new("t1", "Spinners", &["Ann", "Bo"]);
        assert_eq!(team.to_string(), "t1 Spinners (Ann, Bo)");
        assert_eq!(Team::bye(0).to_string(), "bye-0 BYE");
    }
}

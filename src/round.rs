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

use crate::matches::Match;

pub const GRAND_FINALS: &str = "Grand Finals";
pub const SEMI_FINALS: &str = "Semi Finals";
pub const QUARTER_FINALS: &str = "Quarter Finals";

#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(deny_unknown_fields)]
pub struct Round {
    pub id: String,
    pub name: String,
    pub matches: Vec<Match>,
}

impl Round {
    #[must_use]
    pub fn new(index: usize, number_of_rounds: usize, matches: Vec<Match>) -> Self {
        Self {
            id: format!("round-{index}"),
            name: round_name(index, number_of_rounds),
            matches,
        }
    }
}

impl fmt::Display for Round {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.name)?;
        for game in &self.matches {
            writeln!(f, "  {game}")?;
        }

        Ok(())
    }
}

/// Names a round by how far it is from the final. Rounds before the
/// quarter finals are named after the number of teams entering them.
#[must_use]
pub fn round_name(index: usize, number_of_rounds: usize) -> String {
    let from_the_end = number_of_rounds.saturating_sub(index + 1);

    match from_the_end {
        0 => GRAND_FINALS.to_string(),
        1 => SEMI_FINALS.to_string(),
        2 => QUARTER_FINALS.to_string(),
        _ => match 1_usize.checked_shl(u32::try_from(from_the_end + 1).unwrap_or(u32::MAX)) {
            Some(16) => "Eights".to_string(),
            Some(teams @ (32 | 64 | 128 | 256)) => format!("Round of {teams}"),
            _ => format!("Round {}", index + 1),
        },
    }
}

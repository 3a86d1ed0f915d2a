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

/// Emitted every time a winner is recorded. The host decides who gets told.
#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub struct MatchCompleted {
    pub match_id: String,
    pub winner: String,
    /// Undecided matches the winner now plays in. Empty after the final.
    pub next_matches: Vec<String>,
    /// Matches whose results were cleared because a corrected result
    /// removed the team that had won them.
    pub reset_matches: Vec<String>,
}

impl fmt::Display for MatchCompleted {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "match_completed {} {}", self.match_id, self.winner)?;

        if !self.next_matches.is_empty() {
            write!(f, " next {}", self.next_matches.join(" "))?;
        }
        if !self.reset_matches.is_empty() {
            write!(f, " reset {}", self.reset_matches.join(" "))?;
        }

        Ok(())
    }
}

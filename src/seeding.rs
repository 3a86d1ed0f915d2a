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

use log::trace;

use crate::team::Team;

/// The smallest power of two that holds `teams`, never less than two.
#[must_use]
pub fn determine_bracket_size(teams: usize) -> usize {
    teams.max(2).next_power_of_two()
}

/// Pads `teams` with BYEs up to `bracket_size`, keeping the teams in their
/// original order. BYEs are spread by halving the bracket so two of them
/// only meet in the first round when there is at most one team.
#[must_use]
pub fn distribute_teams_and_byes(teams: &[Team], bracket_size: usize) -> Vec<Team> {
    let byes = bracket_size.saturating_sub(teams.len());
    if byes == 0 {
        return teams.to_vec();
    }

    let mut marked = vec![false; bracket_size];
    mark_byes(&mut marked, byes);
    trace!("bye positions: {marked:?}");

    let mut teams = teams.iter();
    marked
        .iter()
        .enumerate()
        .map(|(position, bye)| {
            if *bye {
                Team::bye(position)
            } else {
                teams.next().cloned().unwrap_or_else(|| Team::bye(position))
            }
        })
        .collect()
}

fn mark_byes(slots: &mut [bool], mut byes: usize) {
    let size = slots.len();
    if byes == 0 || size == 0 {
        return;
    }

    if size == 1 {
        if let Some(slot) = slots.first_mut() {
            *slot = true;
        }
        return;
    }

    if byes >= size / 2 {
        for slot in slots.iter_mut().skip(1).step_by(2) {
            if byes == 0 {
                return;
            }
            *slot = true;
            byes -= 1;
        }

        for slot in slots.iter_mut().step_by(2) {
            if byes == 0 {
                return;
            }
            if !*slot {
                *slot = true;
                byes -= 1;
            }
        }
    } else {
        let (first, second) = slots.split_at_mut(size / 2);
        mark_byes(first, byes / 2);
        mark_byes(second, byes - byes / 2);
    }
}

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

use std::str::FromStr;

use crate::team::Team;

pub const COMMANDS: [&str; 14] = [
    "champion",
    "export",
    "generate",
    "import",
    "known_command",
    "list_commands",
    "playable",
    "show",
    "team_add",
    "team_remove",
    "teams",
    "tournament_id",
    "winner",
    "winner_id",
];

/// One line of the bracket text protocol.
///
/// A `#` at the start of a word begins a comment that runs to the end of the
/// line, so team ids and names can't hold a `#`.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Message {
    Champion,
    Empty,
    Export,
    Generate,
    Import(String),
    KnownCommand(String),
    ListCommands,
    Playable,
    Show,
    TeamAdd(Team),
    TeamRemove(String),
    Teams,
    TournamentId,
    Winner {
        round: usize,
        index: usize,
        winner: String,
    },
    WinnerId {
        id: String,
        winner: String,
    },
}

impl FromStr for Message {
    type Err = anyhow::Error;

    fn from_str(message: &str) -> anyhow::Result<Self> {
        let message = message.trim();
        let (command, the_rest) = message
            .split_once(char::is_whitespace)
            .unwrap_or((message, ""));
        let the_rest = the_rest.trim();
        let words: Vec<_> = the_rest.split_ascii_whitespace().collect();

        match command {
            "" => Ok(Self::Empty),
            "champion" => Ok(Self::Champion),
            "export" => Ok(Self::Export),
            "generate" => Ok(Self::Generate),
            "import" => {
                if the_rest.is_empty() {
                    Err(anyhow::Error::msg("import: expected a tournament document"))
                } else {
                    Ok(Self::Import(the_rest.to_string()))
                }
            }
            "known_command" => match words.as_slice() {
                [command] => Ok(Self::KnownCommand((*command).to_string())),
                _ => Err(anyhow::Error::msg("known_command: expected a command")),
            },
            "list_commands" => Ok(Self::ListCommands),
            "playable" => Ok(Self::Playable),
            "show" => Ok(Self::Show),
            "team_add" => match words.as_slice() {
                [id, name, players @ ..] => Ok(Self::TeamAdd(Team::new(id, name, players))),
                _ => Err(anyhow::Error::msg(
                    "team_add: expected an id, a name and the players",
                )),
            },
            "team_remove" => match words.as_slice() {
                [id] => Ok(Self::TeamRemove((*id).to_string())),
                _ => Err(anyhow::Error::msg("team_remove: expected a team id")),
            },
            "teams" => Ok(Self::Teams),
            "tournament_id" => Ok(Self::TournamentId),
            "winner" => match words.as_slice() {
                [round, index, winner] => Ok(Self::Winner {
                    round: round.parse()?,
                    index: index.parse()?,
                    winner: (*winner).to_string(),
                }),
                _ => Err(anyhow::Error::msg(
                    "winner: expected a round, a match and a team name",
                )),
            },
            "winner_id" => match words.as_slice() {
                [id, winner] => Ok(Self::WinnerId {
                    id: (*id).to_string(),
                    winner: (*winner).to_string(),
                }),
                _ => Err(anyhow::Error::msg(
                    "winner_id: expected a match id and a team name",
                )),
            },
            command => Err(anyhow::Error::msg(format!(
                "the command '{command}' is not known"
            ))),
        }
    }
}

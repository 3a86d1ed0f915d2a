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

use std::{borrow::Cow, fs, path::Path, str::FromStr, sync::mpsc::Sender};

use log::{debug, error, info};
use ron::ser::PrettyConfig;
use serde::{Deserialize, Serialize};

use crate::{
    document,
    event::MatchCompleted,
    message::{COMMANDS, Message},
    team::{BYE, TBD, Team},
    tournament::{Tournament, generate_tournament},
};

/// Everything a host keeps about one tournament: the approved teams and the
/// draw made from them. Results are forwarded to `notifications` when set.
#[derive(Clone, Debug, Default, Deserialize, Serialize)]
pub struct Organizer {
    pub tournament_id: String,
    pub teams: Vec<Team>,
    pub tournament: Option<Tournament>,
    #[serde(skip)]
    pub notifications: Option<Sender<MatchCompleted>>,
}

impl Organizer {
    #[must_use]
    pub fn new(tournament_id: &str) -> Self {
        Self {
            tournament_id: tournament_id.to_string(),
            ..Self::default()
        }
    }

    /// # Errors
    ///
    /// If the id or the name is taken, the name is reserved, or either holds
    /// a `#`.
    pub fn add_team(&mut self, team: Team) -> anyhow::Result<()> {
        if team.id.contains('#') || team.name.contains('#') {
            return Err(anyhow::Error::msg(format!(
                "team_add: {} {} can't hold a '#'",
                team.id, team.name
            )));
        }

        if team.name == BYE || team.name == TBD {
            return Err(anyhow::Error::msg(format!(
                "team_add: the name {} is reserved",
                team.name
            )));
        }

        if self.teams.iter().any(|approved| approved.id == team.id) {
            return Err(anyhow::Error::msg(format!(
                "team_add: the id {} is taken",
                team.id
            )));
        }

        if self.teams.iter().any(|approved| approved.name == team.name) {
            return Err(anyhow::Error::msg(format!(
                "team_add: the name {} is taken",
                team.name
            )));
        }

        info!("{}: approved {team}", self.tournament_id);
        self.teams.push(team);

        Ok(())
    }

    /// # Errors
    ///
    /// If no team has `id`.
    pub fn remove_team(&mut self, id: &str) -> anyhow::Result<Team> {
        let Some(index) = self.teams.iter().position(|team| team.id == id) else {
            return Err(anyhow::Error::msg(format!(
                "team_remove: there is no team {id}"
            )));
        };

        let team = self.teams.remove(index);
        info!("{}: removed {team}", self.tournament_id);

        Ok(team)
    }

    /// Throws away the current draw and makes a new one from the approved
    /// teams.
    pub fn generate(&mut self) -> &Tournament {
        let tournament = generate_tournament(&self.teams);
        info!(
            "{}: drew {} teams into a bracket of {}",
            self.tournament_id,
            self.teams.len(),
            tournament.bracket_size()
        );

        self.tournament.insert(tournament)
    }

    fn tournament(&self) -> anyhow::Result<&Tournament> {
        self.tournament
            .as_ref()
            .ok_or_else(|| anyhow::Error::msg("there is no tournament, generate one first"))
    }

    fn tournament_mut(&mut self) -> anyhow::Result<&mut Tournament> {
        self.tournament
            .as_mut()
            .ok_or_else(|| anyhow::Error::msg("there is no tournament, generate one first"))
    }

    /// # Errors
    ///
    /// If there is no tournament or the result is rejected.
    pub fn record_winner(
        &mut self,
        round: usize,
        index: usize,
        winner: &str,
    ) -> anyhow::Result<MatchCompleted> {
        let event = self
            .tournament_mut()?
            .update_match_winner(round, index, winner)?;
        self.notify(&event);

        Ok(event)
    }

    /// # Errors
    ///
    /// If there is no tournament or the result is rejected.
    pub fn record_winner_by_id(
        &mut self,
        id: &str,
        winner: &str,
    ) -> anyhow::Result<MatchCompleted> {
        let event = self
            .tournament_mut()?
            .update_match_winner_by_id(id, winner)?;
        self.notify(&event);

        Ok(event)
    }

    fn notify(&self, event: &MatchCompleted) {
        debug!("{}: {event}", self.tournament_id);

        if let Some(tx) = &self.notifications
            && let Err(error) = tx.send(event.clone())
        {
            error!("notify: {error}");
        }
    }

    /// # Errors
    ///
    /// If the command is illegal or invalid.
    pub fn read_line(&mut self, buffer: &str) -> anyhow::Result<Option<String>> {
        let mut buffer = Cow::from(buffer);
        if let Some(comment_offset) = comment_offset(&buffer) {
            buffer.to_mut().replace_range(comment_offset.., "");
        }

        self.update(Message::from_str(buffer.as_ref())?)
    }

    /// # Errors
    ///
    /// If the command is illegal or invalid.
    pub fn update(&mut self, message: Message) -> anyhow::Result<Option<String>> {
        match message {
            Message::Champion => Ok(Some(
                self.tournament()?.champion().unwrap_or("none").to_string(),
            )),
            Message::Empty => Ok(None),
            Message::Export => Ok(Some(document::tournament_to_string(self.tournament()?)?)),
            Message::Generate => {
                let tournament = self.generate();
                Ok(Some(format!(
                    "{} rounds, bracket of {}",
                    tournament.rounds.len(),
                    tournament.bracket_size()
                )))
            }
            Message::Import(string) => {
                let tournament = document::tournament_from_str(&string)?;
                info!(
                    "{}: imported a bracket of {}",
                    self.tournament_id,
                    tournament.bracket_size()
                );
                self.tournament = Some(tournament);
                Ok(Some(String::new()))
            }
            Message::KnownCommand(command) => Ok(Some(
                COMMANDS.contains(&command.as_str()).to_string(),
            )),
            Message::ListCommands => Ok(Some(COMMANDS.join(" "))),
            Message::Playable => {
                let ids: Vec<_> = self
                    .tournament()?
                    .playable_matches()
                    .iter()
                    .map(|game| game.id.as_str())
                    .collect();
                Ok(Some(ids.join(" ")))
            }
            Message::Show => Ok(Some(self.tournament()?.to_string())),
            Message::TeamAdd(team) => {
                self.add_team(team)?;
                Ok(Some(String::new()))
            }
            Message::TeamRemove(id) => {
                self.remove_team(&id)?;
                Ok(Some(String::new()))
            }
            Message::Teams => {
                let teams: Vec<_> = self.teams.iter().map(ToString::to_string).collect();
                Ok(Some(teams.join("\n")))
            }
            Message::TournamentId => Ok(Some(self.tournament_id.clone())),
            Message::Winner {
                round,
                index,
                winner,
            } => Ok(Some(self.record_winner(round, index, &winner)?.to_string())),
            Message::WinnerId { id, winner } => {
                Ok(Some(self.record_winner_by_id(&id, &winner)?.to_string()))
            }
        }
    }

    /// # Errors
    ///
    /// If the file can't be read or holds a broken bracket.
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let string = fs::read_to_string(path)?;
        let organizer: Self = ron::from_str(&string)?;

        if let Some(tournament) = &organizer.tournament {
            tournament.validate()?;
        }

        Ok(organizer)
    }

    /// # Errors
    ///
    /// If the file can't be written.
    pub fn save(&self, path: &Path) -> anyhow::Result<()> {
        let string = ron::ser::to_string_pretty(self, PrettyConfig::default())?;
        fs::write(path, string)?;

        Ok(())
    }
}

/// A comment starts at a `#` that begins a word.
fn comment_offset(buffer: &str) -> Option<usize> {
    let mut previous = None;
    for (offset, c) in buffer.char_indices() {
        if c == '#' && previous.is_none_or(char::is_whitespace) {
            return Some(offset);
        }
        previous = Some(c);
    }

    None
}

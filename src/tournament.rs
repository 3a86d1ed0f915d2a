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

use log::trace;
use rustc_hash::{FxBuildHasher, FxHashSet};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::{
    event::MatchCompleted,
    matches::{Match, Side},
    round::Round,
    seeding::{determine_bracket_size, distribute_teams_and_byes},
    team::{BYE, TBD, Team},
};

#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum BracketError {
    #[error("bracket: {0} teams can't fill a bracket, it takes a power of two of at least two")]
    BracketSize(usize),
    #[error("winner: there is no match {index} in round {round}")]
    OutOfRange { round: usize, index: usize },
    #[error("winner: there is no match with the id {0}")]
    UnknownMatch(String),
    #[error("winner: {winner} can't win {team1} vs {team2}")]
    InvalidWinner {
        winner: String,
        team1: String,
        team2: String,
    },
    #[error("winner: match {0} is still waiting on a team")]
    UnplayableMatch(String),
    #[error("bracket: {0}")]
    Structure(String),
}

/// A single elimination draw. The order of matches in a round is the bracket
/// tree: match `i` of one round feeds match `i / 2` of the next.
#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Tournament {
    pub rounds: Vec<Round>,
}

/// Builds a draw from the approved teams, padding them with BYEs.
#[must_use]
pub fn generate_tournament(approved_teams: &[Team]) -> Tournament {
    let bracket_size = determine_bracket_size(approved_teams.len());
    let teams = distribute_teams_and_byes(approved_teams, bracket_size);

    build(&teams)
}

/// Builds a draw from teams already in bracket order.
///
/// # Errors
///
/// If the number of teams isn't a power of two of at least two.
pub fn generate_brackets(teams: &[Team]) -> Result<Tournament, BracketError> {
    if teams.len() < 2 || !teams.len().is_power_of_two() {
        return Err(BracketError::BracketSize(teams.len()));
    }

    Ok(build(teams))
}

fn build(teams: &[Team]) -> Tournament {
    let bracket_size = teams.len();
    let number_of_rounds = bracket_size.ilog2() as usize;
    trace!("building {number_of_rounds} rounds for {bracket_size} slots");

    let first_round = teams
        .chunks_exact(2)
        .enumerate()
        .map(|(index, pair)| Match::new(format!("0-{index}"), &pair[0], &pair[1]))
        .collect();

    let mut rounds = Vec::with_capacity(number_of_rounds);
    rounds.push(Round::new(0, number_of_rounds, first_round));

    for round in 1..number_of_rounds {
        let matches = (0..bracket_size >> (round + 1))
            .map(|index| Match::placeholder(format!("{round}-{index}")))
            .collect();

        rounds.push(Round::new(round, number_of_rounds, matches));
    }

    let mut tournament = Tournament { rounds };

    let bye_winners: Vec<_> = tournament.rounds[0]
        .matches
        .iter()
        .enumerate()
        .filter(|(_, game)| game.is_decided())
        .map(|(index, _)| index)
        .collect();

    let mut reset = Vec::new();
    for index in bye_winners {
        tournament.advance(0, index, &mut reset);
    }

    tournament
}

impl Tournament {
    #[must_use]
    pub fn bracket_size(&self) -> usize {
        self.rounds.first().map_or(0, |round| round.matches.len() * 2)
    }

    #[must_use]
    pub fn match_at(&self, round: usize, index: usize) -> Option<&Match> {
        self.rounds.get(round)?.matches.get(index)
    }

    fn match_at_mut(&mut self, round: usize, index: usize) -> Option<&mut Match> {
        self.rounds.get_mut(round)?.matches.get_mut(index)
    }

    /// Where the match with `id` sits as `(round, index)`.
    #[must_use]
    pub fn find_match(&self, id: &str) -> Option<(usize, usize)> {
        self.rounds.iter().enumerate().find_map(|(round, stage)| {
            stage
                .matches
                .iter()
                .position(|game| game.id == id)
                .map(|index| (round, index))
        })
    }

    /// Matches with two real teams and no result yet.
    #[must_use]
    pub fn playable_matches(&self) -> Vec<&Match> {
        self.rounds
            .iter()
            .flat_map(|round| &round.matches)
            .filter(|game| game.is_playable())
            .collect()
    }

    #[must_use]
    pub fn champion(&self) -> Option<&str> {
        let last = self.rounds.last()?.matches.first()?;
        last.is_decided().then_some(last.winner.as_str())
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.champion().is_some()
    }

    /// Records `winner` for match `index` of `round` and moves them on to the
    /// next round. Nothing changes when an error is returned.
    ///
    /// # Errors
    ///
    /// If the match doesn't exist, is still waiting on a team, or `winner`
    /// isn't one of its two teams.
    pub fn update_match_winner(
        &mut self,
        round: usize,
        index: usize,
        winner: &str,
    ) -> Result<MatchCompleted, BracketError> {
        let game = self
            .match_at(round, index)
            .ok_or(BracketError::OutOfRange { round, index })?;

        if game.has_unresolved_side() {
            return Err(BracketError::UnplayableMatch(game.id.clone()));
        }

        if winner == BYE || game.side_of(winner).is_none() {
            return Err(BracketError::InvalidWinner {
                winner: winner.to_string(),
                team1: game.team1.clone(),
                team2: game.team2.clone(),
            });
        }

        let match_id = game.id.clone();
        if let Some(game) = self.match_at_mut(round, index) {
            winner.clone_into(&mut game.winner);
        }

        let mut reset_matches = Vec::new();
        self.advance(round, index, &mut reset_matches);

        let next_matches = self
            .match_at(round + 1, index / 2)
            .filter(|next| !next.is_decided())
            .map(|next| vec![next.id.clone()])
            .unwrap_or_default();

        trace!("{match_id} won by {winner}, next: {next_matches:?}, reset: {reset_matches:?}");

        Ok(MatchCompleted {
            match_id,
            winner: winner.to_string(),
            next_matches,
            reset_matches,
        })
    }

    /// # Errors
    ///
    /// See [`Tournament::update_match_winner`], or if no match has `id`.
    pub fn update_match_winner_by_id(
        &mut self,
        id: &str,
        winner: &str,
    ) -> Result<MatchCompleted, BracketError> {
        let (round, index) = self
            .find_match(id)
            .ok_or_else(|| BracketError::UnknownMatch(id.to_string()))?;

        self.update_match_winner(round, index, winner)
    }

    /// Copies the winner of `(round, index)` into the slot it feeds, or
    /// resets that slot to TBD when the match has no winner.
    fn advance(&mut self, round: usize, index: usize, reset: &mut Vec<String>) {
        let Some(game) = self.match_at(round, index) else {
            return;
        };

        let team = game
            .winning_side()
            .map(|side| (game.team(side).to_string(), game.players(side).to_vec()));

        let Some(next) = self.match_at_mut(round + 1, index / 2) else {
            return;
        };

        let side = Side::feeding(index);
        let displaced = next.team(side).to_string();

        match &team {
            Some((name, players)) => next.set_team(side, name, players),
            None => next.reset_team(side),
        }

        // A result won by a team that is no longer in the match is stale.
        if next.is_decided() && next.winner == displaced && next.team(side) != displaced {
            next.winner.clear();
            reset.push(next.id.clone());
            self.advance(round + 1, index / 2, reset);
        }
    }

    /// Checks the shape of the bracket: rounds halve down to a single final,
    /// match ids are unique, every result names one of its real teams and
    /// every later slot holds what the match feeding it sends.
    ///
    /// # Errors
    ///
    /// On the first broken rule.
    pub fn validate(&self) -> Result<(), BracketError> {
        let Some(last) = self.rounds.last() else {
            return Err(BracketError::Structure("there are no rounds".to_string()));
        };

        if last.matches.len() != 1 {
            return Err(BracketError::Structure(format!(
                "the last round has {} matches",
                last.matches.len()
            )));
        }

        for (round, pair) in self.rounds.windows(2).enumerate() {
            if pair[0].matches.len() != pair[1].matches.len() * 2 {
                return Err(BracketError::Structure(format!(
                    "round {round} has {} matches and round {} has {}",
                    pair[0].matches.len(),
                    round + 1,
                    pair[1].matches.len()
                )));
            }
        }

        let mut ids = FxHashSet::with_capacity_and_hasher(self.bracket_size(), FxBuildHasher);
        for game in self.rounds.iter().flat_map(|round| &round.matches) {
            if !ids.insert(game.id.as_str()) {
                return Err(BracketError::Structure(format!(
                    "the match id {} is used twice",
                    game.id
                )));
            }

            if game.is_decided() && game.side_of(&game.winner).is_none() {
                return Err(BracketError::Structure(format!(
                    "the winner of {} is {}, who isn't playing",
                    game.id, game.winner
                )));
            }

            if game.winner == BYE || game.winner == TBD {
                return Err(BracketError::Structure(format!(
                    "the winner of {} is the placeholder {}",
                    game.id, game.winner
                )));
            }
        }

        if let Some(first) = self.rounds.first()
            && let Some(game) = first.matches.iter().find(|game| game.has_unresolved_side())
        {
            return Err(BracketError::Structure(format!(
                "the first round match {} is waiting on a team",
                game.id
            )));
        }

        self.validate_slots()
    }

    /// Every slot after the first round holds the winner of the match
    /// feeding it, or TBD while that match is undecided.
    fn validate_slots(&self) -> Result<(), BracketError> {
        for (round, stage) in self.rounds.iter().enumerate().skip(1) {
            for (index, game) in stage.matches.iter().enumerate() {
                for (side, feeder) in [(Side::Team1, 2 * index), (Side::Team2, 2 * index + 1)] {
                    let expected = self
                        .match_at(round - 1, feeder)
                        .filter(|feeding| feeding.is_decided())
                        .map_or(TBD, |feeding| feeding.winner.as_str());

                    if game.team(side) != expected {
                        return Err(BracketError::Structure(format!(
                            "{side} of {} is {}, but match {}-{feeder} sends {expected}",
                            game.id,
                            game.team(side),
                            round - 1
                        )));
                    }
                }
            }
        }

        Ok(())
    }
}

impl fmt::Display for Tournament {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rounds: Vec<_> = self.rounds.iter().map(ToString::to_string).collect();
        write!(f, "{}", rounds.join("\n"))
    }
}

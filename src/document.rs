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

//! Key-value documents as kept by a document store.
//!
//! A tournament is an array of rounds `{id, name, matches}` and a match is
//! `{id, team1, team2, team1Players, team2Players, winner}`. Missing or
//! unknown fields are rejected; only `winner` may be left out.

use rustc_hash::FxHashSet;
use serde_json::Value;
use thiserror::Error;

use crate::{
    team::Team,
    tournament::{BracketError, Tournament},
};

#[derive(Debug, Error)]
pub enum DocumentError {
    #[error("document: {0}")]
    Json(#[from] serde_json::Error),
    #[error("document: {0}")]
    Invalid(#[from] BracketError),
    #[error("document: the team id {0} is used twice")]
    DuplicateTeam(String),
}

/// # Errors
///
/// If serialization fails.
pub fn to_document(tournament: &Tournament) -> Result<Value, DocumentError> {
    Ok(serde_json::to_value(tournament)?)
}

/// # Errors
///
/// If the document doesn't have the tournament shape or the bracket it
/// describes is broken.
pub fn from_document(document: Value) -> Result<Tournament, DocumentError> {
    let tournament: Tournament = serde_json::from_value(document)?;
    tournament.validate()?;

    Ok(tournament)
}

/// # Errors
///
/// If serialization fails.
pub fn tournament_to_string(tournament: &Tournament) -> Result<String, DocumentError> {
    Ok(serde_json::to_string(tournament)?)
}

/// # Errors
///
/// See [`from_document`].
pub fn tournament_from_str(string: &str) -> Result<Tournament, DocumentError> {
    let tournament: Tournament = serde_json::from_str(string)?;
    tournament.validate()?;

    Ok(tournament)
}

/// # Errors
///
/// If serialization fails.
pub fn teams_to_document(teams: &[Team]) -> Result<Value, DocumentError> {
    Ok(serde_json::to_value(teams)?)
}

/// # Errors
///
/// If a team is malformed or two teams share an id.
pub fn teams_from_document(document: Value) -> Result<Vec<Team>, DocumentError> {
    let teams: Vec<Team> = serde_json::from_value(document)?;

    let mut ids = FxHashSet::default();
    for team in &teams {
        if !ids.insert(team.id.as_str()) {
            return Err(DocumentError::DuplicateTeam(team.id.clone()));
        }
    }

    Ok(teams)
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use crate::tournament::generate_tournament;

    use super::*;

    fn teams() -> Vec<Team> {
        vec![
            Team::new("t1", "Alpha", &["Ann", "Al"]),
            Team::new("t2", "Beta", &["Bo"]),
            Team::new("t3", "Gamma", &[]),
        ]
    }

    #[test]
    fn field_names() -> anyhow::Result<()> {
        let document = to_document(&generate_tournament(&teams()))?;

        assert_eq!(
            document[0],
            json!({
                "id": "round-0",
                "name": "Semi Finals",
                "matches": [
                    {
                        "id": "0-0",
                        "team1": "Alpha",
                        "team2": "Beta",
                        "team1Players": ["Ann", "Al"],
                        "team2Players": ["Bo"],
                        "winner": ""
                    },
                    {
                        "id": "0-1",
                        "team1": "Gamma",
                        "team2": "BYE",
                        "team1Players": [],
                        "team2Players": [],
                        "winner": "Gamma"
                    }
                ]
            })
        );

        Ok(())
    }

    #[test]
    fn round_trip() -> anyhow::Result<()> {
        let mut tournament = generate_tournament(&teams());
        tournament.update_match_winner(0, 0, "Beta")?;

        assert_eq!(from_document(to_document(&tournament)?)?, tournament);
        assert_eq!(
            tournament_from_str(&tournament_to_string(&tournament)?)?,
            tournament
        );

        Ok(())
    }

    #[test]
    fn winner_defaults_to_undecided() -> anyhow::Result<()> {
        let tournament = from_document(json!([{
            "id": "round-0",
            "name": "Grand Finals",
            "matches": [{
                "id": "0-0",
                "team1": "Alpha",
                "team2": "Beta",
                "team1Players": [],
                "team2Players": []
            }]
        }]))?;

        assert!(tournament.rounds[0].matches[0].winner.is_empty());
        Ok(())
    }

    #[test]
    fn missing_fields_are_rejected() {
        let result = from_document(json!([{
            "id": "round-0",
            "name": "Grand Finals",
            "matches": [{
                "id": "0-0",
                "team1": "Alpha",
                "team2": "Beta",
                "team1Players": []
            }]
        }]));

        assert!(matches!(result, Err(DocumentError::Json(_))));
    }

    #[test]
    fn unknown_fields_are_rejected() {
        let result = from_document(json!([{
            "id": "round-0",
            "name": "Grand Finals",
            "matches": [],
            "started": true
        }]));

        assert!(matches!(result, Err(DocumentError::Json(_))));
    }

    #[test]
    fn broken_brackets_are_rejected() {
        let result = from_document(json!([{
            "id": "round-0",
            "name": "Grand Finals",
            "matches": [{
                "id": "0-0",
                "team1": "Alpha",
                "team2": "Beta",
                "team1Players": [],
                "team2Players": [],
                "winner": "Gamma"
            }]
        }]));

        assert!(matches!(
            result,
            Err(DocumentError::Invalid(BracketError::Structure(_)))
        ));
    }

    fn four_slots(final_match: &Value) -> Value {
        json!([
            {
                "id": "round-0",
                "name": "Semi Finals",
                "matches": [
                    {
                        "id": "0-0",
                        "team1": "Alpha",
                        "team2": "Beta",
                        "team1Players": [],
                        "team2Players": []
                    },
                    {
                        "id": "0-1",
                        "team1": "Gamma",
                        "team2": "Delta",
                        "team1Players": [],
                        "team2Players": []
                    }
                ]
            },
            {
                "id": "round-1",
                "name": "Grand Finals",
                "matches": [final_match]
            }
        ])
    }

    fn assert_structure_error(document: Value) {
        let result = from_document(document);
        assert!(
            matches!(result, Err(DocumentError::Invalid(BracketError::Structure(_)))),
            "{result:?}"
        );
    }

    #[test]
    fn placeholders_never_win() -> anyhow::Result<()> {
        assert_structure_error(four_slots(&json!({
            "id": "1-0",
            "team1": "TBD",
            "team2": "TBD",
            "team1Players": [],
            "team2Players": [],
            "winner": "TBD"
        })));

        let byes = json!([{
            "id": "round-0",
            "name": "Grand Finals",
            "matches": [{
                "id": "0-0",
                "team1": "BYE",
                "team2": "BYE",
                "team1Players": [],
                "team2Players": [],
                "winner": "BYE"
            }]
        }]);
        assert_structure_error(byes);

        let undecided = from_document(four_slots(&json!({
            "id": "1-0",
            "team1": "TBD",
            "team2": "TBD",
            "team1Players": [],
            "team2Players": []
        })))?;
        assert_eq!(undecided.champion(), None);

        Ok(())
    }

    #[test]
    fn slots_hold_the_winner_feeding_them() {
        assert_structure_error(four_slots(&json!({
            "id": "1-0",
            "team1": "Alpha",
            "team2": "Gamma",
            "team1Players": [],
            "team2Players": []
        })));

        let mut document = four_slots(&json!({
            "id": "1-0",
            "team1": "Beta",
            "team2": "TBD",
            "team1Players": [],
            "team2Players": []
        }));
        document[0]["matches"][0]["winner"] = json!("Alpha");
        assert_structure_error(document);

        let mut document = four_slots(&json!({
            "id": "1-0",
            "team1": "TBD",
            "team2": "TBD",
            "team1Players": [],
            "team2Players": []
        }));
        document[0]["matches"][1]["winner"] = json!("Delta");
        assert_structure_error(document);

        assert_structure_error(json!([{
            "id": "round-0",
            "name": "Grand Finals",
            "matches": [{
                "id": "0-0",
                "team1": "Alpha",
                "team2": "TBD",
                "team1Players": [],
                "team2Players": []
            }]
        }]));
    }

    #[test]
    fn team_documents() -> anyhow::Result<()> {
        let document = teams_to_document(&teams())?;
        assert_eq!(
            document[1],
            json!({ "id": "t2", "name": "Beta", "players": ["Bo"] })
        );
        assert_eq!(teams_from_document(document)?, teams());

        let result = teams_from_document(json!([
            { "id": "t1", "name": "Alpha", "players": [] },
            { "id": "t1", "name": "Beta", "players": [] }
        ]));
        assert!(matches!(result, Err(DocumentError::DuplicateTeam(id)) if id == "t1"));

        Ok(())
    }
}

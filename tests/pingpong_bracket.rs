use std::{io::Cursor, sync::mpsc};

use rustc_hash::FxHashSet;

use pingpong_bracket::{
    document,
    organizer::Organizer,
    team::{BYE, Team},
    tournament::{Tournament, generate_tournament},
};

#[derive(Debug, serde::Deserialize)]
struct Record {
    id: String,
    name: String,
    players: String,
}

/// # Errors
///
/// If the team records are invalid.
fn teams_from_csv(string: &str) -> anyhow::Result<Vec<Team>> {
    let cursor = Cursor::new(string);
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(false)
        .from_reader(cursor);

    let mut teams = Vec::new();
    for result in rdr.deserialize() {
        let record: Record = result?;
        let players: Vec<_> = record.players.split_ascii_whitespace().collect();
        teams.push(Team::new(&record.id, &record.name, &players));
    }

    Ok(teams)
}

fn setup() -> anyhow::Result<Vec<Team>> {
    teams_from_csv(include_str!("teams.csv"))
}

fn play_out(tournament: &mut Tournament) -> anyhow::Result<usize> {
    let mut played = 0;

    loop {
        let Some((id, winner)) = tournament
            .playable_matches()
            .first()
            .map(|game| (game.id.clone(), game.team1.clone()))
        else {
            return Ok(played);
        };

        tournament.update_match_winner_by_id(&id, &winner)?;
        played += 1;
    }
}

#[test]
fn eleven_teams_are_seeded() -> anyhow::Result<()> {
    let teams = setup()?;
    assert_eq!(teams.len(), 11);

    let tournament = generate_tournament(&teams);
    assert_eq!(tournament.bracket_size(), 16);

    let names: Vec<_> = tournament
        .rounds
        .iter()
        .map(|round| round.name.as_str())
        .collect();
    assert_eq!(
        names,
        ["Eights", "Quarter Finals", "Semi Finals", "Grand Finals"]
    );

    let first_round = &tournament.rounds[0].matches;
    assert_eq!(first_round.len(), 8);

    let byes: Vec<_> = first_round.iter().filter(|game| game.has_bye()).collect();
    assert_eq!(byes.len(), 5);
    assert!(byes.iter().all(|game| game.is_decided()));
    assert!(byes.iter().all(|game| game.team1 != BYE || game.team2 != BYE));

    let mut seen = FxHashSet::default();
    for game in first_round {
        for name in [&game.team1, &game.team2] {
            if name != BYE {
                assert!(seen.insert(name.clone()), "{name} is drawn twice");
            }
        }
    }
    assert_eq!(seen.len(), 11);

    assert_eq!(generate_tournament(&teams), tournament);
    tournament.validate()?;

    Ok(())
}

#[test]
fn eleven_teams_play_out() -> anyhow::Result<()> {
    let mut tournament = generate_tournament(&setup()?);

    assert_eq!(play_out(&mut tournament)?, 10);
    assert!(tournament.is_complete());
    assert_eq!(tournament.champion(), Some("Spinners"));
    assert!(tournament.playable_matches().is_empty());
    tournament.validate()?;

    Ok(())
}

#[test]
fn documents_survive_a_half_played_tournament() -> anyhow::Result<()> {
    let mut tournament = generate_tournament(&setup()?);
    for game in tournament.rounds[0].matches.clone() {
        if game.is_playable() {
            tournament.update_match_winner_by_id(&game.id, &game.team2)?;
        }
    }

    let string = document::tournament_to_string(&tournament)?;
    let mut imported = document::tournament_from_str(&string)?;
    assert_eq!(imported, tournament);

    play_out(&mut imported)?;
    assert!(imported.is_complete());

    Ok(())
}

#[test]
fn the_organizer_reports_every_result() -> anyhow::Result<()> {
    let (tx, rx) = mpsc::channel();
    let mut organizer = Organizer::new("csv");
    organizer.notifications = Some(tx);

    for team in setup()? {
        organizer.add_team(team)?;
    }
    assert_eq!(
        organizer.read_line("generate")?.as_deref(),
        Some("4 rounds, bracket of 16")
    );

    loop {
        let Some(id) = organizer.read_line("playable")?.and_then(|ids| {
            ids.split_ascii_whitespace().next().map(ToString::to_string)
        }) else {
            break;
        };

        let (round, index) = organizer
            .tournament
            .as_ref()
            .and_then(|tournament| tournament.find_match(&id))
            .ok_or_else(|| anyhow::Error::msg("the match disappeared"))?;
        let winner = organizer
            .tournament
            .as_ref()
            .and_then(|tournament| tournament.match_at(round, index))
            .map(|game| game.team2.clone())
            .ok_or_else(|| anyhow::Error::msg("the match disappeared"))?;

        organizer.read_line(&format!("winner_id {id} {winner}"))?;
    }

    let events: Vec<_> = rx.try_iter().collect();
    assert_eq!(events.len(), 10);
    assert!(events.last().is_some_and(|event| event.next_matches.is_empty()));

    let champion = organizer.read_line("champion")?;
    assert_eq!(champion.as_deref(), events.last().map(|event| event.winner.as_str()));

    Ok(())
}

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

#![deny(clippy::expect_used)]
#![deny(clippy::indexing_slicing)]
#![deny(clippy::panic)]
#![deny(clippy::unwrap_used)]

mod command_line;

use std::{
    io,
    path::Path,
    sync::mpsc::{self, Receiver},
    thread,
};

use clap::Parser;
use log::{error, info};
use pingpong_bracket::{
    event::MatchCompleted,
    organizer::Organizer,
    utils::{self, create_data_folder, data_file},
};

use crate::command_line::Args;

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    utils::init_logger(args.debug, args.systemd);

    if args.man {
        return Args::generate_man_page();
    }

    let path = match &args.data_file {
        Some(path) => path.clone(),
        None => {
            create_data_folder()?;
            data_file(&format!("{}.ron", args.tournament_id))
        }
    };

    let mut organizer = if args.skip_the_data_file {
        Organizer::new(&args.tournament_id)
    } else {
        load(&path, &args.tournament_id)?
    };

    let (tx, rx) = mpsc::channel();
    organizer.notifications = Some(tx);
    thread::spawn(move || log_results(&rx));

    let mut buffer = String::new();
    let stdin = io::stdin();

    if args.display_bracket {
        display(&organizer);
        println!("Enter 'list_commands' for a list of commands.");
    }

    loop {
        match stdin.read_line(&mut buffer) {
            Ok(0) => return Ok(()),
            Ok(_) => {}
            Err(error) => {
                println!("? {error}\n");
                return Ok(());
            }
        }

        let result = organizer.read_line(&buffer);

        if args.display_bracket {
            display(&organizer);
        }

        match result {
            Err(error) => println!("? {error}\n"),
            Ok(message) => {
                if let Some(message) = message {
                    println!("= {message}");

                    if !args.skip_the_data_file
                        && let Err(error) = organizer.save(&path)
                    {
                        error!("save: {}: {error}", path.display());
                    }
                }
            }
        }

        buffer.clear();
    }
}

fn load(path: &Path, tournament_id: &str) -> anyhow::Result<Organizer> {
    if !path.exists() {
        info!("{}: starting a new tournament", path.display());
        return Ok(Organizer::new(tournament_id));
    }

    match Organizer::load(path) {
        Ok(organizer) => {
            info!(
                "{}: loaded the tournament {}",
                path.display(),
                organizer.tournament_id
            );
            Ok(organizer)
        }
        Err(error) => Err(anyhow::Error::msg(format!(
            "RON: {}: {error}",
            path.display()
        ))),
    }
}

fn log_results(rx: &Receiver<MatchCompleted>) {
    for event in rx {
        info!("{event}");
    }
}

fn display(organizer: &Organizer) {
    match &organizer.tournament {
        Some(tournament) => println!("{tournament}\n"),
        None => println!("{}: no bracket yet\n", organizer.tournament_id),
    }
}

//! A single elimination bracket engine for ping pong tournaments.
//!
//! Teams are seeded into a bracket sized to the next power of two, empty
//! slots are filled with BYEs, and results are propagated toward the final
//! as they are recorded.
//!
//! ## Message Protocol
//!
//! A host drives an [`organizer::Organizer`] one line at a time, see
//! [`message::Message`] for the commands.

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

#![deny(clippy::panic)]

pub mod document;
pub mod event;
pub mod matches;
pub mod message;
pub mod organizer;
pub mod round;
pub mod seeding;
pub mod team;
pub mod tournament;
pub mod utils;

pub const HOME: &str = "pingpong-bracket";

pub const COPYRIGHT: &str = r".SH COPYRIGHT
Copyright (C) 2026 Developers of the pingpong-bracket project

This program is free software: you can redistribute it and/or modify
it under the terms of the GNU Affero General Public License as published by
the Free Software Foundation, either version 3 of the License, or
(at your option) any later version.

This program is distributed in the hope that it will be useful,
but WITHOUT ANY WARRANTY; without even the implied warranty of
MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
GNU Affero General Public License for more details.

You should have received a copy of the GNU Affero General Public License
along with this program.  If not, see <https://www.gnu.org/licenses/>.
";

pub const LONG_VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    "
Copyright (c) 2026 Developers of the pingpong-bracket project
Licensed under the AGPLv3"
);

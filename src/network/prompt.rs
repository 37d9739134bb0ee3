//! Text menu for querying a network over any reader/writer pair.

use std::collections::BTreeMap;
use std::fmt::Display;
use std::io::{self, BufRead, Write};
use std::str::FromStr;

use crate::network::graph::SocialNetwork;

pub const MENU: &str = "Please select an action by typing the number associated with it:
1. View all engagement rates of the members
2. Find and display the shortest path between two members
3. Find and display the path with the highest engagement between two members
4. Exit the application

Type your action here (Please make sure your answer is ONLY a number): ";

const INVALID_MEMBER: &str =
    "Invalid member name. Please type the full name of a member in the network.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    EngagementRates,
    ShortestPath,
    HighestEngagementPath,
    Exit,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MenuActionParseError {
    #[error("no action given")]
    Empty,
    #[error("{0:?} is not a number")]
    NotANumber(String),
    #[error("{0} is not a menu entry")]
    Unknown(u32),
}

impl FromStr for MenuAction {
    type Err = MenuActionParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err(MenuActionParseError::Empty);
        }

        let choice = s
            .parse::<u32>()
            .map_err(|_| MenuActionParseError::NotANumber(s.to_string()))?;

        match choice {
            1 => Ok(Self::EngagementRates),
            2 => Ok(Self::ShortestPath),
            3 => Ok(Self::HighestEngagementPath),
            4 => Ok(Self::Exit),
            other => Err(MenuActionParseError::Unknown(other)),
        }
    }
}

/// Writes `prompt` and reads one trimmed line. `None` once input is exhausted.
pub fn read_line<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    prompt: &str,
) -> io::Result<Option<String>> {
    write!(output, "{prompt}")?;
    output.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

/// Prompts until the answer parses as `T`.
pub fn read_number<T, R, W>(input: &mut R, output: &mut W, prompt: &str) -> io::Result<Option<T>>
where
    T: FromStr,
    R: BufRead,
    W: Write,
{
    while let Some(line) = read_line(input, output, prompt)? {
        match line.parse() {
            Ok(value) => return Ok(Some(value)),
            Err(_) => writeln!(output, "{line:?} is not a valid number, please try again.\n")?,
        }
    }
    Ok(None)
}

/// Prompts until the answer names a member of `network`.
pub fn read_member<R: BufRead, W: Write>(
    network: &SocialNetwork<String>,
    input: &mut R,
    output: &mut W,
    prompt: &str,
) -> io::Result<Option<String>> {
    while let Some(name) = read_line(input, output, prompt)? {
        if network.contains(&name) {
            return Ok(Some(name));
        }
        writeln!(output, "{INVALID_MEMBER}\n")?;
    }
    Ok(None)
}

/// Shows the menu until a valid action is picked.
pub fn read_action<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
) -> io::Result<Option<MenuAction>> {
    while let Some(line) = read_line(input, output, MENU)? {
        match line.parse() {
            Ok(action) => return Ok(Some(action)),
            Err(_) => writeln!(output, "You had a typo please try again!\n")?,
        }
    }
    Ok(None)
}

#[must_use]
pub fn format_path<M: Display>(path: &[M]) -> String {
    path.iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" -> ")
}

pub fn write_engagement_rates<M: Display, W: Write>(
    output: &mut W,
    rates: &BTreeMap<M, f64>,
) -> io::Result<()> {
    for (member, rate) in rates {
        writeln!(output, "{member}'s engagement rate: {rate:.2}")?;
    }
    writeln!(output)
}

pub fn write_members<M: Display, W: Write>(output: &mut W, members: &[M]) -> io::Result<()> {
    writeln!(output, "Members in the network:\n")?;
    for member in members {
        writeln!(output, "{member}")?;
    }
    writeln!(output)
}

fn read_endpoints<R: BufRead, W: Write>(
    network: &SocialNetwork<String>,
    input: &mut R,
    output: &mut W,
) -> io::Result<Option<(String, String)>> {
    write_members(output, &network.members())?;
    let Some(start) = read_member(network, input, output, "Type the start member (Full name): ")? else {
        return Ok(None);
    };
    let Some(end) = read_member(network, input, output, "Type the end member (Full name): ")? else {
        return Ok(None);
    };
    Ok(Some((start, end)))
}

/// Runs the menu loop until the user exits or input runs out.
pub fn run_session<R: BufRead, W: Write>(
    network: &SocialNetwork<String>,
    input: &mut R,
    output: &mut W,
) -> io::Result<()> {
    while let Some(action) = read_action(input, output)? {
        match action {
            MenuAction::EngagementRates => {
                write_engagement_rates(output, &network.all_engagement_rates())?;
            }
            MenuAction::ShortestPath => {
                let Some((start, end)) = read_endpoints(network, input, output)? else {
                    break;
                };
                match network.shortest_path(&start, &end) {
                    Some(path) => {
                        writeln!(
                            output,
                            "The shortest path between {start} and {end} is: {}",
                            format_path(&path)
                        )?;
                        writeln!(output, "Number of steps: {}\n", path.len() - 1)?;
                    }
                    None => writeln!(output, "No path exists between {start} and {end}\n")?,
                }
            }
            MenuAction::HighestEngagementPath => {
                let Some((start, end)) = read_endpoints(network, input, output)? else {
                    break;
                };
                match network.path_with_highest_engagement(&start, &end) {
                    Some(path) => writeln!(
                        output,
                        "The path with the highest engagement between {start} and {end} is: {}\n",
                        format_path(&path)
                    )?,
                    None => writeln!(output, "No path exists between {start} and {end}\n")?,
                }
            }
            MenuAction::Exit => break,
        }
    }
    Ok(())
}

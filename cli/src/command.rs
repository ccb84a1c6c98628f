use std::str::FromStr;

use anyhow::{Context, bail};
use freecell_core::{Destination, Source};

pub const HELP: &str = "\
Commands:
  t <column>          play the top card of a tableau column wherever it fits
  f <cell>            play the card in a free cell wherever it fits
  tf <column> <cell>  tableau to free cell
  ft <cell> <column>  free cell to tableau
  tt <from> <to>      tableau to tableau
  tfnd <column>       tableau to foundation
  ffnd <cell>         free cell to foundation
  a                   promote whatever can go to the foundations
  u                   undo
  r                   deal a new game
  json                dump the current frame as JSON
  h                   this help
  q                   quit";

#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Command {
    Select(Source),
    Move(Source, Destination),
    Auto,
    Undo,
    Restart,
    Json,
    Help,
    Quit,
}

fn index<'a>(words: &mut impl Iterator<Item = &'a str>, what: &str) -> anyhow::Result<usize> {
    let word = words.next().with_context(|| format!("Missing {what}"))?;
    word.parse()
        .with_context(|| format!("Invalid {what} {word:?}"))
}

impl FromStr for Command {
    type Err = anyhow::Error;

    fn from_str(line: &str) -> anyhow::Result<Self> {
        let mut words = line.split_whitespace();
        let Some(name) = words.next() else {
            bail!("Empty command");
        };

        let command = match name {
            "t" => Self::Select(Source::Tableau(index(&mut words, "column")?)),
            "f" => Self::Select(Source::FreeCell(index(&mut words, "free cell")?)),
            "tf" => {
                let column = index(&mut words, "column")?;
                let cell = index(&mut words, "free cell")?;
                Self::Move(Source::Tableau(column), Destination::FreeCell(cell))
            }
            "ft" => {
                let cell = index(&mut words, "free cell")?;
                let column = index(&mut words, "column")?;
                Self::Move(Source::FreeCell(cell), Destination::Tableau(column))
            }
            "tt" => {
                let from = index(&mut words, "column")?;
                let to = index(&mut words, "column")?;
                Self::Move(Source::Tableau(from), Destination::Tableau(to))
            }
            "tfnd" => Self::Move(
                Source::Tableau(index(&mut words, "column")?),
                Destination::Foundation,
            ),
            "ffnd" => Self::Move(
                Source::FreeCell(index(&mut words, "free cell")?),
                Destination::Foundation,
            ),
            "a" | "auto" => Self::Auto,
            "u" | "p" | "undo" => Self::Undo,
            "r" | "restart" => Self::Restart,
            "json" => Self::Json,
            "h" | "help" | "?" => Self::Help,
            "q" | "quit" => Self::Quit,
            _ => bail!("Unknown command {name:?}, type h for help"),
        };

        if let Some(extra) = words.next() {
            bail!("Unexpected argument {extra:?}");
        }
        Ok(command)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_explicit_moves() {
        assert_eq!(
            "tf 3 1".parse::<Command>().unwrap(),
            Command::Move(Source::Tableau(3), Destination::FreeCell(1))
        );
        assert_eq!(
            "ft 4 0".parse::<Command>().unwrap(),
            Command::Move(Source::FreeCell(4), Destination::Tableau(0))
        );
        assert_eq!(
            "  tt 7   2 ".parse::<Command>().unwrap(),
            Command::Move(Source::Tableau(7), Destination::Tableau(2))
        );
        assert_eq!(
            "ffnd 2".parse::<Command>().unwrap(),
            Command::Move(Source::FreeCell(2), Destination::Foundation)
        );
    }

    #[test]
    fn parses_selections_and_keys() {
        assert_eq!("t 5".parse::<Command>().unwrap(), Command::Select(Source::Tableau(5)));
        assert_eq!("f 0".parse::<Command>().unwrap(), Command::Select(Source::FreeCell(0)));
        assert_eq!("p".parse::<Command>().unwrap(), Command::Undo);
        assert_eq!("r".parse::<Command>().unwrap(), Command::Restart);
        assert_eq!("q".parse::<Command>().unwrap(), Command::Quit);
    }

    #[test]
    fn rejects_malformed_input() {
        assert!("".parse::<Command>().is_err());
        assert!("tf 1".parse::<Command>().is_err());
        assert!("tt one two".parse::<Command>().is_err());
        assert!("t -1".parse::<Command>().is_err());
        assert!("u 3".parse::<Command>().is_err());

        let err = "move 1 2".parse::<Command>().unwrap_err();
        assert!(err.to_string().contains("Unknown command"));
    }

    #[test]
    fn out_of_range_indices_parse() {
        // range is the engine's call
        assert_eq!("t 9".parse::<Command>().unwrap(), Command::Select(Source::Tableau(9)));
    }
}

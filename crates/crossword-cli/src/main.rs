//! Headless crossword host.
//!
//! Loads a puzzle (and optionally a guess snapshot) from JSON, replays a key
//! sequence against it, then prints the grid, the clue lists and the final
//! guess snapshot.

use std::{
    fs,
    io::{self, Write},
    path::{Path, PathBuf},
    process::ExitCode,
};

use clap::Parser;
use crossword_core::{CellData, ClueNumber, CluesInput, Direction, Grid, GuessEntry, Position};
use crossword_game::{
    Crossword, CrosswordError, CrosswordObserver, CrosswordOptions, Key, Modifiers,
    ValidationPolicy,
};
use serde::de::DeserializeOwned;

/// Plays a crossword puzzle from the command line.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Args {
    /// Clue input JSON file (`{"across": {...}, "down": {...}}`).
    #[arg(long)]
    puzzle: PathBuf,
    /// Guess snapshot JSON file (`[{"row": 0, "col": 0, "guess": "C"}, ...]`).
    #[arg(long)]
    guesses: Option<PathBuf>,
    /// Options JSON file; flags below override it.
    #[arg(long)]
    config: Option<PathBuf>,
    /// Keep the grid at its natural size instead of squaring it.
    #[arg(long)]
    allow_non_square: bool,
    /// Ignore typed characters and deletions.
    #[arg(long)]
    read_only: bool,
    /// Reject inconsistent clue input.
    #[arg(long)]
    strict: bool,
    /// Keys to replay; `{Name}` stands for a named key, e.g. `CAT{Tab}{Backspace}`.
    #[arg(long, default_value = "")]
    keys: String,
}

#[derive(Debug, derive_more::Display, derive_more::Error, derive_more::From)]
enum CliError {
    #[display("failed to read {}: {source}", path.display())]
    Read { path: PathBuf, source: io::Error },
    #[display("failed to parse {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
    #[display("unterminated key name in {keys:?}")]
    UnterminatedKey { keys: String },
    #[display("{_0}")]
    Crossword(#[from] CrosswordError),
    #[display("failed to write output: {_0}")]
    Output(#[from] io::Error),
    #[display("failed to serialize guesses: {_0}")]
    Serialize(#[from] serde_json::Error),
}

struct LoggingObserver;

impl CrosswordObserver for LoggingObserver {
    fn cell_changed(&mut self, position: Position, guess: Option<char>) {
        match guess {
            Some(guess) => log::info!("cell {position} set to {guess}"),
            None => log::info!("cell {position} cleared"),
        }
    }

    fn grid_changed(&mut self, grid: &Grid) {
        let guessed = grid.used_cells().filter(|cell| cell.guess.is_some()).count();
        log::info!("grid {} replaced, {guessed} cells guessed", grid.size());
    }

    fn clue_selected(&mut self, direction: Direction, number: &ClueNumber) {
        log::info!("clue {direction} {number} selected");
    }
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T, CliError> {
    let text = fs::read_to_string(path).map_err(|source| CliError::Read {
        path: path.to_owned(),
        source,
    })?;
    serde_json::from_str(&text).map_err(|source| CliError::Parse {
        path: path.to_owned(),
        source,
    })
}

fn parse_keys(keys: &str) -> Result<Vec<Key>, CliError> {
    let mut parsed = vec![];
    let mut rest = keys;
    while let Some(ch) = rest.chars().next() {
        if ch == '{' {
            let Some(end) = rest.find('}') else {
                return Err(CliError::UnterminatedKey {
                    keys: keys.to_owned(),
                });
            };
            parsed.push(Key::from_name(&rest[1..end]));
            rest = &rest[end + 1..];
        } else {
            parsed.push(Key::from_name(&rest[..ch.len_utf8()]));
            rest = &rest[ch.len_utf8()..];
        }
    }
    Ok(parsed)
}

fn options(args: &Args) -> Result<CrosswordOptions, CliError> {
    let mut options = match &args.config {
        Some(path) => read_json(path)?,
        None => CrosswordOptions::default(),
    };
    if args.allow_non_square {
        options = options.allow_non_square(true);
    }
    if args.read_only {
        options = options.allow_mutation(false);
    }
    if args.strict {
        options = options.validation(ValidationPolicy::Strict);
    }
    Ok(options)
}

fn render(crossword: &Crossword, out: &mut impl Write) -> io::Result<()> {
    for row in crossword.grid().iter_rows() {
        let line: String = row
            .iter()
            .map(|cell| match cell {
                CellData::Unused(_) => '#',
                CellData::Used(cell) => cell.guess.unwrap_or('.'),
            })
            .collect();
        writeln!(out, "{line}")?;
    }

    let correct = crossword.correct_answers();
    let selection = crossword.selection();
    for direction in Direction::ALL {
        writeln!(out)?;
        writeln!(out, "{direction}:")?;
        for entry in crossword.clues().get(direction) {
            let current = direction == selection.direction && entry.number == selection.number;
            let solved = correct
                .iter()
                .any(|answer| answer.direction == direction && answer.number == entry.number);
            writeln!(
                out,
                "{} {:>3}. {} ({}){}",
                if current { '>' } else { ' ' },
                entry.number.as_str(),
                entry.clue,
                entry.len(),
                if solved { " ✓" } else { "" }
            )?;
        }
    }

    writeln!(out)?;
    writeln!(
        out,
        "selection: {} {} at {}{}",
        selection.direction,
        selection.number,
        selection.position,
        if selection.focused { " (focused)" } else { "" }
    )?;
    Ok(())
}

fn run(args: &Args) -> Result<(), CliError> {
    let input: CluesInput = read_json(&args.puzzle)?;
    let mut crossword = Crossword::new(input, options(args)?)?;
    crossword.set_observer(Box::new(LoggingObserver));
    crossword.register_focus_handler(Some(Box::new(|| log::info!("focus acquired"))));
    crossword.focus();

    if let Some(path) = &args.guesses {
        let guesses: Vec<GuessEntry> = read_json(path)?;
        crossword.load_guesses(&guesses)?;
    }

    for key in parse_keys(&args.keys)? {
        if crossword.handle_key_down(&key, Modifiers::empty())?.is_ignored() {
            log::warn!("key {key:?} ignored");
        }
    }

    let mut stdout = io::stdout().lock();
    render(&crossword, &mut stdout)?;
    writeln!(stdout)?;
    writeln!(stdout, "{}", serde_json::to_string_pretty(&crossword.guesses())?)?;
    Ok(())
}

fn main() -> ExitCode {
    better_panic::install();
    env_logger::init();

    let args = Args::parse();
    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            log::error!("{err}");
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use crossword_core::ClueInput;

    use super::*;

    #[test]
    fn test_parse_keys() {
        let keys = parse_keys("Ca{Tab}é{Backspace} {F1}").unwrap();
        assert_eq!(
            keys,
            [
                Key::Character('C'),
                Key::Character('a'),
                Key::Tab,
                Key::Character('é'),
                Key::Backspace,
                Key::Space,
                Key::Other("F1".into()),
            ]
        );
        assert!(parse_keys("").unwrap().is_empty());
        assert!(matches!(
            parse_keys("AB{Tab"),
            Err(CliError::UnterminatedKey { .. })
        ));
    }

    #[test]
    fn test_options_flags_override_defaults() {
        let args = Args::parse_from([
            "crossword",
            "--puzzle",
            "p.json",
            "--read-only",
            "--strict",
        ]);
        let options = options(&args).unwrap();
        assert!(!options.allow_mutation);
        assert!(!options.allow_non_square);
        assert!(options.validation.is_strict());
    }

    #[test]
    fn test_render() {
        let input = CluesInput::new()
            .with_clue(Direction::Across, "1", ClueInput::new("Feline", "CAT", 0, 0))
            .with_clue(Direction::Down, "1", ClueInput::new("Baby bed", "COT", 0, 0));
        let mut crossword = Crossword::new(input, CrosswordOptions::default()).unwrap();
        crossword.handle_bulk_input("cat").unwrap();

        let mut out = vec![];
        render(&crossword, &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert_eq!(
            text,
            "CAT\n.##\n.##\n\
             \n\
             across:\n\
             >   1. Feline (3) ✓\n\
             \n\
             down:\n\
             \x20   1. Baby bed (3)\n\
             \n\
             selection: across 1 at (0, 2)\n"
        );
    }

    #[test]
    fn test_sample_puzzle_replay() {
        let input: CluesInput = serde_json::from_str(include_str!("../puzzles/mini.json")).unwrap();
        let guesses: Vec<GuessEntry> =
            serde_json::from_str(include_str!("../puzzles/mini-guesses.json")).unwrap();
        let options = CrosswordOptions::default().validation(ValidationPolicy::Strict);
        let mut crossword = Crossword::new(input, options).unwrap();
        crossword.load_guesses(&guesses).unwrap();

        for key in parse_keys("{ArrowDown}{ArrowDown}t{Tab}{ArrowRight}oe").unwrap() {
            let outcome = crossword.handle_key_down(&key, Modifiers::empty()).unwrap();
            assert!(outcome.is_handled());
        }

        let solved: Vec<_> = crossword
            .correct_answers()
            .into_iter()
            .map(|answer| (answer.direction, answer.number.as_str().to_owned()))
            .collect();
        assert_eq!(
            solved,
            [
                (Direction::Across, "4".to_owned()),
                (Direction::Down, "1".to_owned()),
            ]
        );
        assert_eq!(crossword.selection().position, Position::new(2, 2));
    }
}

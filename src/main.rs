//! Twisty Cube
//!
//! Command-line front end for the cube library: scramble a cube and print
//! it, or play interactively by typing turns on standard input.

use std::io::{self, BufRead, Write};

use clap::{Parser, Subcommand};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use rubik::cube::{default_scramble_len, MAX_SIZE, MIN_SIZE};
use rubik::net::format_net;
use rubik::{Cube, Game, Solved, Turn};

/// Simulates an N×N×N twisty cube puzzle.
#[derive(Parser)]
#[command(name = "rubik")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Scramble a cube and print the twists and resulting sides.
    Scramble {
        /// Number of layers along each edge.
        #[arg(short, long, default_value_t = 3, value_parser = parse_size)]
        size: usize,
        /// Number of random twists (defaults to size cubed).
        #[arg(short, long)]
        moves: Option<usize>,
        /// Seed for a reproducible scramble.
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Play interactively, reading one command per line from stdin.
    Play {
        /// Number of layers along each edge.
        #[arg(short, long, default_value_t = 3, value_parser = parse_size)]
        size: usize,
    },
}

fn parse_size(s: &str) -> Result<usize, String> {
    let size: usize = s.parse().map_err(|e| format!("{e}"))?;
    if (MIN_SIZE..=MAX_SIZE).contains(&size) {
        Ok(size)
    } else {
        Err(format!("size must be between {MIN_SIZE} and {MAX_SIZE}"))
    }
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    let result = match cli.command {
        Some(Command::Scramble { size, moves, seed }) => run_scramble(size, moves, seed),
        Some(Command::Play { size }) => run_play(size),
        None => run_play(3),
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

/// Scrambles a fresh cube and prints the result.
fn run_scramble(size: usize, moves: Option<usize>, seed: Option<u64>) -> io::Result<()> {
    let mut cube = Cube::new(size).map_err(io::Error::other)?;
    let moves = moves.unwrap_or(default_scramble_len(size));

    let twists = match seed {
        Some(seed) => cube.scramble_with_rng(&mut ChaCha8Rng::seed_from_u64(seed), moves),
        None => cube.scramble(moves),
    }
    .map_err(io::Error::other)?;

    let mut stdout = io::stdout().lock();
    for (i, twist) in twists.iter().enumerate() {
        writeln!(stdout, "{:>4}. {twist}", i + 1)?;
    }
    writeln!(stdout)?;
    write!(stdout, "{}", format_net(&cube))?;
    writeln!(stdout)?;
    print_status(&mut stdout, &cube)?;
    Ok(())
}

const HELP: &str = "\
Commands:
  R U' 2F x ...   turn layers (number = layer from that side) or rotate (x y z)
  < / >           rotate the whole cube about the up side (same as y' / y)
  deeper          select the next layer inward for single-letter turns
  shallower       select the next layer outward
  turn <side>     turn the selected layers clockwise (append ' to reverse)
  undo / redo     step through history
  scramble        scramble and start a game
  solve           reset to solved
  size <n>        start over with a new size
  show            print the cube
  quit";

/// Runs a line-based play session on stdin.
fn run_play(size: usize) -> io::Result<()> {
    let mut game = Game::new(size).map_err(io::Error::other)?;
    let mut stdout = io::stdout().lock();
    writeln!(stdout, "{HELP}")?;
    write!(stdout, "\n{}", format_net(game.cube()))?;

    for line in io::stdin().lock().lines() {
        let line = line?;
        let mut words = line.split_whitespace();
        let Some(command) = words.next() else {
            continue;
        };

        let solved = match command {
            "quit" | "exit" => break,
            "help" => {
                writeln!(stdout, "{HELP}")?;
                None
            }
            "show" => None,
            "undo" => game.undo(),
            "redo" => game.redo(),
            "scramble" => {
                game.scramble().map_err(io::Error::other)?;
                None
            }
            "solve" => {
                game.solve();
                None
            }
            "deeper" => {
                game.select_deeper();
                writeln!(stdout, "layers {}", game.selected_layers())?;
                None
            }
            "shallower" => {
                game.select_shallower();
                writeln!(stdout, "layers {}", game.selected_layers())?;
                None
            }
            "size" => {
                match words.next().map(parse_size) {
                    Some(Ok(size)) => game.resize(size).map_err(io::Error::other)?,
                    Some(Err(e)) => writeln!(stdout, "{e}")?,
                    None => writeln!(stdout, "usage: size <n>")?,
                }
                None
            }
            "turn" => match words.next().map(parse_side_turn) {
                Some(Ok((face, direction))) => report(&mut stdout, game.turn(face, direction))?,
                Some(Err(e)) => {
                    writeln!(stdout, "{e}")?;
                    None
                }
                None => {
                    writeln!(stdout, "usage: turn <side>")?;
                    None
                }
            },
            "<" => apply_all(&mut stdout, &mut game, "y'")?,
            ">" => apply_all(&mut stdout, &mut game, "y")?,
            _ => apply_all(&mut stdout, &mut game, &line)?,
        };

        write!(stdout, "\n{}", format_net(game.cube()))?;
        print_status(&mut stdout, game.cube())?;
        if let Some(Solved { moves }) = solved {
            writeln!(stdout, "You solved the cube using {moves} moves.")?;
        }
    }

    Ok(())
}

/// Parses `<side>` or `<side>'` for the `turn` command.
fn parse_side_turn(word: &str) -> rubik::Result<(rubik::Face, rubik::Direction)> {
    match word.strip_suffix('\'') {
        Some(side) => Ok((side.parse()?, rubik::Direction::CounterClockwise)),
        None => Ok((word.parse()?, rubik::Direction::Clockwise)),
    }
}

/// Applies every notation token on a line, stopping at the first error.
fn apply_all(stdout: &mut impl Write, game: &mut Game, line: &str) -> io::Result<Option<Solved>> {
    let mut solved = None;
    for token in line.split_whitespace() {
        let turn = match token.parse::<Turn>() {
            Ok(turn) => turn,
            Err(e) => {
                writeln!(stdout, "{e} (type 'help' for commands)")?;
                return Ok(solved);
            }
        };
        match game.apply(&turn) {
            Ok(Some(event)) => solved = Some(event),
            Ok(None) => {}
            Err(e) => {
                writeln!(stdout, "{e}")?;
                return Ok(solved);
            }
        }
    }
    Ok(solved)
}

/// Prints an error from a fallible turn and passes through its outcome.
fn report(
    stdout: &mut impl Write,
    result: rubik::Result<Option<Solved>>,
) -> io::Result<Option<Solved>> {
    match result {
        Ok(solved) => Ok(solved),
        Err(e) => {
            writeln!(stdout, "{e}")?;
            Ok(None)
        }
    }
}

fn print_status(stdout: &mut impl Write, cube: &Cube) -> io::Result<()> {
    writeln!(
        stdout,
        "moves: {}  solved: {}  centers: {}  super: {}  undo: {}  redo: {}",
        cube.move_count(),
        cube.is_solved(),
        cube.is_center_solved(),
        cube.is_super_solved(),
        cube.history().cursor(),
        cube.history().len() - cube.history().cursor(),
    )
}

//! Line-oriented driver for the renju rule engine
//!
//! Reads one command per line from stdin and prints the board after every
//! accepted action:
//! - `x,y,color` places a stone (color: 1 = black, 2 = white)
//! - `pass`, `announce N`, `swap yes|no`, `choose N` drive the protocol
//! - `dots x,y x,y ...` submits dot candidates
//! - `log` dumps the operation log as JSON
//! - `quit` exits

use std::io::{self, BufRead};

use clap::{Parser, ValueEnum};
use renju::{EngineError, MatchState, Pos, RuleMode, Stone};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Rules {
    Freestyle,
    Forbidden,
    Balanced,
}

impl From<Rules> for RuleMode {
    fn from(rules: Rules) -> Self {
        match rules {
            Rules::Freestyle => RuleMode::Freestyle,
            Rules::Forbidden => RuleMode::Forbidden,
            Rules::Balanced => RuleMode::Balanced,
        }
    }
}

/// Play one five-in-a-row match on stdin/stdout.
#[derive(Parser)]
#[command(name = "renju", version, about)]
struct Cli {
    /// Rule set for the match
    #[arg(long, value_enum, default_value = "forbidden")]
    rules: Rules,
}

fn main() -> io::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    let mut game = MatchState::new(cli.rules.into());
    println!("{}", game.board());
    println!("phase: {} / {:?} to act", game.phase(), game.next_color());

    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let line = line?;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        if line == "quit" {
            break;
        }
        match run_command(&mut game, line) {
            Ok(report) => {
                println!("{}", game.board());
                println!("{report}");
            }
            Err(err) => println!("rejected: {err}"),
        }
        if game.phase().is_terminal() {
            println!("result: {:?}", game.result());
            break;
        }
        println!("phase: {} / {:?} to act", game.phase(), game.next_color());
    }
    Ok(())
}

fn run_command(game: &mut MatchState, line: &str) -> Result<String, String> {
    let mut words = line.split_whitespace();
    let head = words.next().unwrap_or_default();
    match head {
        "pass" => {
            game.pass().map_err(display)?;
            Ok("pass".into())
        }
        "announce" => {
            let count: usize = parse_arg(words.next())?;
            game.announce(count).map_err(display)?;
            Ok(format!("announced {count} dots"))
        }
        "swap" => {
            let accept = match words.next() {
                Some("yes") => true,
                Some("no") => false,
                other => return Err(format!("expected yes or no, got {other:?}")),
            };
            game.swap(accept).map_err(display)?;
            Ok(if accept { "sides swapped" } else { "swap declined" }.into())
        }
        "dots" => {
            let dots = words
                .map(parse_pos)
                .collect::<Result<Vec<Pos>, String>>()?;
            game.submit_dots(&dots).map_err(display)?;
            Ok(format!("{} dots accepted", dots.len()))
        }
        "choose" => {
            let index: usize = parse_arg(words.next())?;
            game.choose(index).map_err(display)?;
            Ok(format!("dot {index} chosen"))
        }
        "log" => serde_json::to_string_pretty(game.log())
            .map_err(|err| err.to_string()),
        _ => {
            let (x, y, color) = parse_move(head)?;
            let outcome = game.play(x, y, color).map_err(display)?;
            if let Some(rule) = outcome.violated_rule {
                Ok(format!("forbidden move: {rule:?}"))
            } else if outcome.ended {
                Ok("match over".into())
            } else {
                Ok("ok".into())
            }
        }
    }
}

fn parse_move(word: &str) -> Result<(i32, i32, Stone), String> {
    let parts: Vec<&str> = word.split(',').collect();
    if parts.len() != 3 {
        return Err("expected x,y,color".into());
    }
    let x: i32 = parse_arg(Some(parts[0]))?;
    let y: i32 = parse_arg(Some(parts[1]))?;
    let color = match parts[2] {
        "1" => Stone::Black,
        "2" => Stone::White,
        other => return Err(format!("color must be 1 or 2, got {other}")),
    };
    Ok((x, y, color))
}

fn parse_pos(word: &str) -> Result<Pos, String> {
    let parts: Vec<&str> = word.split(',').collect();
    if parts.len() != 2 {
        return Err("expected x,y".into());
    }
    let x: i32 = parse_arg(Some(parts[0]))?;
    let y: i32 = parse_arg(Some(parts[1]))?;
    if !Pos::is_valid(x, y) {
        return Err(format!("({x},{y}) is off the board"));
    }
    Ok(Pos::new(x as u8, y as u8))
}

fn parse_arg<T: std::str::FromStr>(word: Option<&str>) -> Result<T, String> {
    word.ok_or_else(|| "missing argument".to_string())?
        .parse()
        .map_err(|_| format!("bad argument: {word:?}"))
}

fn display(err: EngineError) -> String {
    err.to_string()
}

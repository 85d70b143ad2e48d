use anyhow::{Context, Result};
use scoundrel_core::{
    Card, EventBus, Game, GameError, GameState, Snapshot, ROOM_SIZE, RULES,
};
use std::io::{self, BufRead, IsTerminal, Write};

#[derive(Debug, Clone, PartialEq, Eq)]
struct CliOptions {
    seed: u32,
    json: bool,
    cui: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Command {
    Restart,
    Avoid,
    Play { slot: usize, barehanded: bool },
    State,
    Score,
    Rules,
    Help,
    Quit,
}

fn parse_cli_options(args: &[String]) -> Result<CliOptions> {
    let mut json = false;
    let mut cui = false;
    let mut seed_flag = None;
    let mut idx = 0usize;
    while idx < args.len() {
        match args[idx].as_str() {
            "--json" => json = true,
            "--cui" => cui = true,
            "--seed" | "-s" => {
                if let Some(value) = args.get(idx + 1) {
                    seed_flag = Some(value.as_str());
                    idx += 1;
                }
            }
            _ => {}
        }
        idx += 1;
    }
    let seed = scoundrel_cui::resolve_seed(seed_flag)?;
    Ok(CliOptions { seed, json, cui })
}

fn parse_command(input: &str) -> Result<Command, String> {
    let mut parts = input.split_whitespace();
    let cmd = parts.next().unwrap_or("");
    let args: Vec<&str> = parts.collect();
    match cmd {
        "restart" | "r" => Ok(Command::Restart),
        "avoid" | "a" => Ok(Command::Avoid),
        "play" | "p" => Ok(Command::Play {
            slot: parse_slot(&args)?,
            barehanded: false,
        }),
        "bare" | "b" => Ok(Command::Play {
            slot: parse_slot(&args)?,
            barehanded: true,
        }),
        "state" | "s" => Ok(Command::State),
        "score" => Ok(Command::Score),
        "rules" => Ok(Command::Rules),
        "help" | "h" | "?" => Ok(Command::Help),
        "quit" | "q" | "exit" => Ok(Command::Quit),
        other => Err(format!("unknown command '{other}' (try help)")),
    }
}

/// Slots are 1-based on the command line.
fn parse_slot(args: &[&str]) -> Result<usize, String> {
    let raw = args.first().ok_or_else(|| "missing slot".to_string())?;
    let slot = raw
        .parse::<usize>()
        .map_err(|_| format!("invalid slot '{raw}'"))?;
    if slot == 0 || slot > ROOM_SIZE {
        return Err(format!("slot must be between 1 and {ROOM_SIZE}"));
    }
    Ok(slot - 1)
}

struct Session {
    game: Game,
    events: EventBus,
    json: bool,
}

impl Session {
    fn new(seed: u32, json: bool) -> Self {
        let mut events = EventBus::default();
        let game = Game::new(seed, &mut events);
        Self { game, events, json }
    }

    /// Parses and runs one input line; returns `false` once the session
    /// should end.
    fn run_line(&mut self, input: &str, out: &mut impl Write) -> io::Result<bool> {
        match parse_command(input) {
            Ok(command) => self.execute(command, out),
            Err(message) => {
                self.report_error(&message, out)?;
                Ok(true)
            }
        }
    }

    fn execute(&mut self, command: Command, out: &mut impl Write) -> io::Result<bool> {
        log::debug!("command {command:?}");
        let outcome: Result<Snapshot, GameError> = match command {
            Command::Quit => return Ok(false),
            Command::Help => {
                self.report_text("help", HELP, out)?;
                return Ok(true);
            }
            Command::Rules => {
                self.report_text("rules", RULES, out)?;
                return Ok(true);
            }
            Command::Score => {
                let score = self.game.score();
                if self.json {
                    write_json(out, &serde_json::json!({ "score": score }))?;
                } else {
                    writeln!(out, "score: {}", score.label())?;
                }
                return Ok(true);
            }
            Command::State => Ok(self.game.snapshot()),
            Command::Restart => Ok(self.game.start_game(&mut self.events)),
            Command::Avoid => self.game.avoid_room(&mut self.events),
            Command::Play { slot, barehanded } => {
                self.game.play_card(slot, barehanded, &mut self.events)
            }
        };
        match outcome {
            Ok(snapshot) => self.report(&snapshot, out)?,
            Err(err) => self.report_error(&err, out)?,
        }
        Ok(true)
    }

    fn report(&mut self, snapshot: &Snapshot, out: &mut impl Write) -> io::Result<()> {
        let events: Vec<_> = self.events.drain().collect();
        if self.json {
            return write_json(out, snapshot);
        }
        for event in &events {
            writeln!(out, "event: {}", scoundrel_cui::format_event(event))?;
        }
        print_snapshot(snapshot, out)
    }

    fn report_text(&self, key: &str, text: &str, out: &mut impl Write) -> io::Result<()> {
        if self.json {
            return write_json(out, &serde_json::json!({ key: text }));
        }
        writeln!(out, "{}", text.trim_end())
    }

    fn report_error(&self, err: &dyn std::fmt::Display, out: &mut impl Write) -> io::Result<()> {
        if self.json {
            return write_json(out, &serde_json::json!({ "error": err.to_string() }));
        }
        writeln!(out, "error: {err}")
    }
}

const HELP: &str = "commands:
  play|p <slot>   play the card in slot 1-4
  bare|b <slot>   fight the monster in slot 1-4 barehanded
  avoid|a         send the full room to the bottom of the dungeon
  restart|r       start over with the same seed
  state|s         show the table
  score           show the current score
  rules           print the rules
  help|h|?        show this help
  quit|q|exit     leave";

/// One JSON value per line.
fn write_json<T: serde::Serialize + ?Sized>(out: &mut impl Write, value: &T) -> io::Result<()> {
    let line = serde_json::to_string(value).map_err(io::Error::other)?;
    writeln!(out, "{line}")
}

fn print_snapshot(snapshot: &Snapshot, out: &mut impl Write) -> io::Result<()> {
    writeln!(
        out,
        "health {} | dungeon {} | discard {} | score {} | seed {}",
        snapshot.health,
        snapshot.draw.len(),
        snapshot.discard.len(),
        snapshot.score.label(),
        snapshot.seed
    )?;
    let room: Vec<String> = snapshot
        .room
        .iter()
        .enumerate()
        .map(|(idx, card)| format!("[{}] {}", idx + 1, slot_label(card)))
        .collect();
    writeln!(out, "room: {}", room.join("  "))?;
    match &snapshot.weapon {
        Some(weapon) => {
            let slain: Vec<String> = weapon.slain.iter().map(Card::to_string).collect();
            if slain.is_empty() {
                writeln!(out, "weapon: {}", weapon.card)?;
            } else {
                writeln!(out, "weapon: {} (slain: {})", weapon.card, slain.join(", "))?;
            }
        }
        None => writeln!(out, "weapon: none")?,
    }
    if snapshot.last_room_avoided {
        writeln!(out, "last room was avoided")?;
    }
    match snapshot.state {
        GameState::Started => Ok(()),
        GameState::Won => writeln!(out, "victory! (restart to play again)"),
        GameState::Lost => writeln!(out, "game over! (restart to try again)"),
    }
}

fn slot_label(card: &Option<Card>) -> String {
    match card {
        Some(card) => card.to_string(),
        None => "-".to_string(),
    }
}

fn run_shell(options: &CliOptions) -> Result<()> {
    let mut session = Session::new(options.seed, options.json);
    let stdin = io::stdin();
    let prompt = stdin.is_terminal() && !options.json;
    let mut out = io::stdout().lock();
    if !options.json {
        writeln!(out, "scoundrel (seed {}) - type help for commands", options.seed)?;
    }
    session
        .execute(Command::State, &mut out)
        .context("write state")?;
    let mut lines = stdin.lock().lines();
    loop {
        if prompt {
            write!(out, "> ")?;
            out.flush()?;
        }
        let Some(line) = lines.next() else {
            break;
        };
        let line = line.context("read command")?;
        let input = line.trim();
        if input.is_empty() {
            continue;
        }
        if !session.run_line(input, &mut out)? {
            break;
        }
    }
    Ok(())
}

fn main() {
    env_logger::init();
    let args: Vec<String> = std::env::args().skip(1).collect();
    let options = match parse_cli_options(&args) {
        Ok(options) => options,
        Err(err) => {
            eprintln!("error: {err:#}");
            std::process::exit(2);
        }
    };
    if options.cui {
        let launch = scoundrel_cui::LaunchOptions {
            seed: Some(options.seed),
        };
        if let Err(err) = scoundrel_cui::run(launch) {
            eprintln!("cui launch error: {err:#}");
            std::process::exit(1);
        }
        return;
    }
    if let Err(err) = run_shell(&options) {
        eprintln!("error: {err:#}");
        std::process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(values: &[&str]) -> Vec<String> {
        values.iter().map(|value| value.to_string()).collect()
    }

    fn run_commands(session: &mut Session, commands: &[&str]) -> String {
        let mut out = Vec::new();
        for command in commands {
            session.run_line(command, &mut out).expect("execute");
        }
        String::from_utf8(out).expect("utf8")
    }

    #[test]
    fn parses_cli_flags() {
        let options = parse_cli_options(&args(&["--seed", "77", "--json"])).expect("options");
        assert_eq!(
            options,
            CliOptions {
                seed: 77,
                json: true,
                cui: false
            }
        );
        let options = parse_cli_options(&args(&["--cui", "-s", "5"])).expect("options");
        assert!(options.cui);
        assert_eq!(options.seed, 5);
    }

    #[test]
    fn rejects_out_of_range_seed_flag() {
        assert!(parse_cli_options(&args(&["--seed", "100000"])).is_err());
        assert!(parse_cli_options(&args(&["--seed", "nope"])).is_err());
    }

    #[test]
    fn parses_commands_and_one_based_slots() {
        assert_eq!(parse_command("r"), Ok(Command::Restart));
        assert_eq!(parse_command("avoid"), Ok(Command::Avoid));
        assert_eq!(
            parse_command("p 1"),
            Ok(Command::Play {
                slot: 0,
                barehanded: false
            })
        );
        assert_eq!(
            parse_command("bare 4"),
            Ok(Command::Play {
                slot: 3,
                barehanded: true
            })
        );
        assert_eq!(parse_command("q"), Ok(Command::Quit));
    }

    #[test]
    fn rejects_bad_slots_and_unknown_commands() {
        assert!(parse_command("play").is_err());
        assert!(parse_command("play 0").is_err());
        assert!(parse_command("play 5").is_err());
        assert!(parse_command("play x").is_err());
        assert!(parse_command("dance").is_err());
    }

    #[test]
    fn session_reports_errors_and_keeps_going() {
        let mut session = Session::new(42, false);
        let output = run_commands(&mut session, &["avoid", "avoid"]);
        assert!(output.contains("event: avoided room, 4 cards buried"));
        assert!(output.contains("error: previous room was avoided"));
        assert!(output.contains("last room was avoided"));
    }

    #[test]
    fn json_mode_prints_snapshot_lines() {
        let mut session = Session::new(42, true);
        let output = run_commands(
            &mut session,
            &["state", "avoid", "avoid", "score", "dance", "help", "rules"],
        );
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines.len(), 7);
        let values: Vec<serde_json::Value> = lines
            .iter()
            .map(|line| serde_json::from_str(line).expect("json line"))
            .collect();

        let snapshot: Snapshot = serde_json::from_str(lines[0]).expect("snapshot json");
        assert_eq!(snapshot.seed, 42);
        assert_eq!(snapshot.health, 20);
        assert_eq!(values[2]["error"], "previous room was avoided");
        assert_eq!(values[3]["score"]["won"], 20);
        assert_eq!(values[3]["score"]["lost"], 20 - 208);
        assert_eq!(values[4]["error"], "unknown command 'dance' (try help)");
        assert!(values[5]["help"].as_str().expect("help").contains("play|p"));
        assert!(values[6]["rules"].as_str().expect("rules").starts_with("SCOUNDREL"));
    }

    #[test]
    fn text_mode_reports_bad_commands_and_aliases() {
        let mut session = Session::new(3, false);
        let output = run_commands(&mut session, &["dance", "h"]);
        assert!(output.contains("error: unknown command 'dance' (try help)"));
        assert!(output.contains("quit|q|exit"));
        assert_eq!(parse_command("exit"), Ok(Command::Quit));
        assert_eq!(parse_command("h"), Ok(Command::Help));
    }

    #[test]
    fn quit_ends_the_session() {
        let mut session = Session::new(1, false);
        let mut out = Vec::new();
        assert!(!session.execute(Command::Quit, &mut out).expect("quit"));
        assert!(session.execute(Command::Help, &mut out).expect("help"));
    }
}

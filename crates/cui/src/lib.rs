mod actions;
mod app;
mod input;
mod seed;
mod view;

pub use app::format_event;
pub use seed::{parse_seed, resolve_seed, roll_seed, SEED_ENV};

use anyhow::{Context, Result};
use app::App;
use crossterm::event::{self, Event as CEvent, KeyEventKind};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::{execute, ExecutableCommand};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use std::io::{self, stdout, IsTerminal};
use std::time::Duration;

#[derive(Debug, Clone, Default)]
pub struct LaunchOptions {
    pub seed: Option<u32>,
}

pub fn run(options: LaunchOptions) -> Result<()> {
    let seed = match options.seed {
        Some(seed) => seed,
        None => resolve_seed(None)?,
    };
    let mut app = App::bootstrap(seed);

    ensure_interactive_terminal()?;

    enable_raw_mode().map_err(|err| {
        anyhow::anyhow!(
            "failed to enable raw mode; ensure the process owns an interactive terminal: {err}"
        )
    })?;
    let mut stdout = stdout();
    stdout
        .execute(EnterAlternateScreen)
        .context("enter alternate screen")?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).context("create terminal")?;

    let run_result = run_loop(&mut terminal, &mut app);
    restore_terminal(&mut terminal)?;
    run_result
}

pub fn run_with_args(args: &[String]) -> Result<()> {
    let options = parse_options(args)?;
    run(options)
}

fn parse_options(args: &[String]) -> Result<LaunchOptions> {
    let mut seed_flag = None;
    let mut idx = 0usize;
    while idx < args.len() {
        if matches!(args[idx].as_str(), "--seed" | "-s") {
            if let Some(value) = args.get(idx + 1) {
                seed_flag = Some(value.as_str());
                idx += 1;
            }
        }
        idx += 1;
    }
    let seed = resolve_seed(seed_flag)?;
    Ok(LaunchOptions { seed: Some(seed) })
}

fn run_loop(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, app: &mut App) -> Result<()> {
    let tick_rate = Duration::from_millis(120);
    while !app.should_quit {
        terminal.draw(|frame| view::draw(frame, app))?;
        if event::poll(tick_rate)? {
            if let CEvent::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Press {
                    continue;
                }
                let action = input::map_key(key);
                actions::dispatch(app, action);
            }
        }
    }
    Ok(())
}

fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) -> Result<()> {
    disable_raw_mode().context("disable raw mode")?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen).context("leave alternate screen")?;
    terminal.show_cursor().context("show cursor")?;
    Ok(())
}

fn ensure_interactive_terminal() -> Result<()> {
    if io::stdin().is_terminal() && io::stdout().is_terminal() {
        return Ok(());
    }
    anyhow::bail!(
        "scoundrel-cui requires an interactive TTY (run directly in a terminal, not a piped/headless shell)"
    );
}

#[cfg(test)]
mod tests {
    use super::parse_options;

    #[test]
    fn parse_options_reads_seed_flag() {
        let args = vec!["--seed".to_string(), "4321".to_string()];
        let options = parse_options(&args).expect("options");
        assert_eq!(options.seed, Some(4321));
    }

    #[test]
    fn parse_options_rejects_out_of_range_seed() {
        let args = vec!["-s".to_string(), "100000".to_string()];
        assert!(parse_options(&args).is_err());
    }
}

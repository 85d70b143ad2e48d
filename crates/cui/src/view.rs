use crate::app::App;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::prelude::{Alignment, Color, Line, Modifier, Span, Style, Stylize};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};
use ratatui::Frame;
use scoundrel_core::{Card, CardKind, GameState, ROOM_SIZE, RULES};

const SLOT_KEYS: [&str; ROOM_SIZE] = ["1/h", "2/j", "3/k", "4/l"];
const LOW_HEALTH: i32 = 5;

pub fn draw(frame: &mut Frame, app: &App) {
    let root = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(5),
            Constraint::Length(7),
            Constraint::Min(8),
            Constraint::Length(3),
        ])
        .split(frame.area());

    draw_header(frame, root[0], app);
    draw_room(frame, root[1], app);

    let middle = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(50),
        ])
        .split(root[2]);

    let left = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(6), Constraint::Min(4)])
        .split(middle[0]);

    draw_stats(frame, left[0], app);
    draw_piles(frame, left[1], app);
    draw_weapon(frame, middle[1], app);
    draw_events(frame, middle[2], app);
    draw_footer(frame, root[3]);

    if app.show_help {
        draw_help_popup(frame);
    }
}

fn draw_header(frame: &mut Frame, area: Rect, app: &App) {
    let lines = vec![
        Line::from("Scoundrel".bold()),
        Line::from("a single-player rogue-like card game".italic()),
        Line::from(format!("Status: {}", app.status_line)),
        Line::from(format!("Hint: {}", app.next_hint())),
    ];
    let block = Block::default().borders(Borders::ALL).title("Dungeon");
    let paragraph = Paragraph::new(lines).wrap(Wrap { trim: true }).block(block);
    frame.render_widget(paragraph, area);
}

fn draw_room(frame: &mut Frame, area: Rect, app: &App) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Ratio(1, ROOM_SIZE as u32); ROOM_SIZE])
        .split(area);
    for (slot, column) in columns.iter().enumerate() {
        let card = app.snapshot.room[slot];
        let block = pane_block(SLOT_KEYS[slot], card.map(card_color));
        let body = match card {
            Some(card) => vec![
                Line::from(""),
                Line::from(Span::styled(
                    card.value.to_string(),
                    Style::default()
                        .fg(card_color(card))
                        .add_modifier(Modifier::BOLD),
                )),
                Line::from(card.kind.label()),
            ],
            None => vec![Line::from(""), Line::from("-".dark_gray())],
        };
        let paragraph = Paragraph::new(body)
            .alignment(Alignment::Center)
            .block(block);
        frame.render_widget(paragraph, *column);
    }
}

fn draw_stats(frame: &mut Frame, area: Rect, app: &App) {
    let snapshot = &app.snapshot;
    let health_style = if snapshot.health <= LOW_HEALTH {
        Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)
    } else {
        Style::default()
    };
    let mut lines = Vec::new();
    match snapshot.state {
        GameState::Started => {}
        GameState::Won => lines.push(Line::from(app.outcome_label().green().bold())),
        GameState::Lost => lines.push(Line::from(app.outcome_label().red().bold())),
    }
    lines.push(Line::from(vec![
        Span::raw("Health: "),
        Span::styled(snapshot.health.to_string(), health_style),
    ]));
    lines.push(Line::from(format!("Score: {}", snapshot.score.label())));
    lines.push(Line::from(format!("Seed: {}", snapshot.seed)));
    frame.render_widget(Paragraph::new(lines).block(pane_block("Stats", None)), area);
}

fn draw_piles(frame: &mut Frame, area: Rect, app: &App) {
    let snapshot = &app.snapshot;
    let lines = vec![
        Line::from(format!("Dungeon: {}", snapshot.draw.len())),
        Line::from(format!("Discard: {}", snapshot.discard.len())),
        Line::from(format!(
            "Avoided: {}",
            if snapshot.last_room_avoided { "yes" } else { "no" }
        )),
    ];
    frame.render_widget(Paragraph::new(lines).block(pane_block("Piles", None)), area);
}

fn draw_weapon(frame: &mut Frame, area: Rect, app: &App) {
    let lines = match &app.snapshot.weapon {
        None => vec![Line::from("barehanded".dark_gray())],
        Some(weapon) => {
            let mut lines = vec![Line::from(Span::styled(
                weapon.card.to_string(),
                Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
            ))];
            let limit = match weapon.limit() {
                Some(limit) => format!("slays monsters below {limit}"),
                None => "slays any monster".to_string(),
            };
            lines.push(Line::from(limit));
            for monster in &weapon.slain {
                lines.push(Line::from(Span::styled(
                    format!("  {monster}"),
                    Style::default().fg(Color::Red),
                )));
            }
            lines
        }
    };
    frame.render_widget(
        Paragraph::new(lines).block(pane_block("Weapon", Some(Color::Cyan))),
        area,
    );
}

fn draw_events(frame: &mut Frame, area: Rect, app: &App) {
    let capacity = area.height.saturating_sub(2) as usize;
    let start = app.event_log.len().saturating_sub(capacity);
    let lines: Vec<Line<'_>> = app
        .event_log
        .iter()
        .skip(start)
        .map(|line| Line::from(line.clone()))
        .collect();
    frame.render_widget(Paragraph::new(lines).block(pane_block("Events", None)), area);
}

fn draw_footer(frame: &mut Frame, area: Rect) {
    let line = Line::from(
        "1-4/hjkl play | shift fights barehanded | a avoid | r restart | ? help | q quit",
    );
    let block = Block::default().borders(Borders::ALL).title("Controls");
    frame.render_widget(Paragraph::new(line).block(block), area);
}

fn draw_help_popup(frame: &mut Frame) {
    let area = centered_rect(70, 80, frame.area());
    frame.render_widget(Clear, area);
    let mut lines: Vec<Line<'_>> = RULES.lines().map(Line::from).collect();
    lines.push(Line::from(""));
    lines.push(Line::from("1-4 or h/j/k/l play the card in that slot".bold()));
    lines.push(Line::from(
        "shift+slot (!@#$ or HJKL) fights a monster barehanded",
    ));
    lines.push(Line::from("a avoid | r restart | ? or esc close | q quit"));
    let block = Block::default()
        .title("Help")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    frame.render_widget(
        Paragraph::new(lines).block(block).wrap(Wrap { trim: true }),
        area,
    );
}

fn card_color(card: Card) -> Color {
    match card.kind {
        CardKind::Monster => Color::Red,
        CardKind::Weapon => Color::Cyan,
        CardKind::Potion => Color::Green,
    }
}

fn pane_block(title: &str, accent: Option<Color>) -> Block<'_> {
    let mut block = Block::default().title(title).borders(Borders::ALL);
    if let Some(color) = accent {
        block = block.border_style(Style::default().fg(color));
    }
    block
}

fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);
    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

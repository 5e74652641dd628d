//! UI rendering using ratatui
//!
//! One screen per game phase. Everything drawn comes from the coordinator's
//! snapshot and reports.

use super::controls::Frontend;
use fishbowl::game::{Round, Team, TransitionReason};
use fishbowl::{GameSnapshot, Phase};
use ratatui::{
    prelude::*,
    widgets::{Block, Borders, List, ListItem, Paragraph, Row, Table},
};

/// Slowest words shown on the game over screen
const WORD_STATS_SHOWN: usize = 5;

/// Render the screen for the current phase
pub fn render(frame: &mut Frame, ui: &Frontend) {
    let snap = ui.game.snapshot();
    match snap.phase {
        Phase::Setup => render_title(frame),
        Phase::SetupView => render_settings(frame, &snap),
        Phase::WordInput => render_word_input(frame, ui),
        Phase::GameOverview => render_overview(frame, &snap),
        Phase::Playing => render_playing(frame, &snap),
        Phase::RoundTransition => render_transition(frame, &snap),
        Phase::GameOver => render_game_over(frame, ui, &snap),
    }
}

fn render_title(frame: &mut Frame) {
    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage(30),
            Constraint::Length(8),  // Logo
            Constraint::Length(2),  // Hint
            Constraint::Min(0),
        ])
        .margin(2)
        .split(frame.area());

    let logo = r#"
 _____ ___ ____  _   _ ____   _____        ___
|  ___|_ _/ ___|| | | | __ ) / _ \ \      / / |
| |_   | |\___ \| |_| |  _ \| | | \ \ /\ / /| |
|  _|  | | ___) |  _  | |_) | |_| |\ V  V / | |___
|_|   |___|____/|_| |_|____/ \___/  \_/\_/  |_____|
"#;
    let logo_widget = Paragraph::new(logo)
        .style(Style::default().fg(Color::Cyan).bold())
        .alignment(Alignment::Center);
    frame.render_widget(logo_widget, layout[1]);

    let hint = Paragraph::new("Enter New game  Esc Quit")
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    frame.render_widget(hint, layout[2]);
}

fn render_settings(frame: &mut Frame, snap: &GameSnapshot) {
    let layout = centered_rows(frame.area(), 3);

    let title = Paragraph::new("Turn length")
        .style(Style::default().fg(Color::Yellow).bold())
        .alignment(Alignment::Center);
    frame.render_widget(title, layout[0]);

    let duration = Paragraph::new(format!("< {} >", format_timer(snap.turn_duration)))
        .style(Style::default().fg(Color::Cyan).bold())
        .alignment(Alignment::Center);
    frame.render_widget(duration, layout[1]);

    let footer = Paragraph::new("←→ Adjust  Enter Add words  Esc Quit")
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    frame.render_widget(footer, layout[2]);
}

fn render_word_input(frame: &mut Frame, ui: &Frontend) {
    let area = frame.area();
    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Input
            Constraint::Length(1), // Feedback
            Constraint::Min(3),    // Words so far
            Constraint::Length(1), // Footer
        ])
        .margin(1)
        .split(area);

    let input = Paragraph::new(format!("{}_", ui.input))
        .style(Style::default().fg(Color::White).bold())
        .block(Block::default().borders(Borders::ALL).title(" Add a word "));
    frame.render_widget(input, layout[0]);

    let feedback_color = if ui.feedback == "Added!" {
        Color::Green
    } else {
        Color::Red
    };
    let feedback = Paragraph::new(ui.feedback.as_str())
        .style(Style::default().fg(feedback_color))
        .alignment(Alignment::Center);
    frame.render_widget(feedback, layout[1]);

    let catalog = ui.game.pool().catalog();
    let items: Vec<ListItem> = catalog
        .iter()
        .rev()
        .map(|w| ListItem::new(w.text.clone()))
        .collect();
    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .title(format!(" In the bowl ({}) ", catalog.len())),
    );
    frame.render_widget(list, layout[2]);

    let footer = Paragraph::new("Enter Add  Tab Start game  Esc Quit")
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    frame.render_widget(footer, layout[3]);
}

fn render_overview(frame: &mut Frame, snap: &GameSnapshot) {
    let layout = centered_rows(frame.area(), 3);

    let header = Paragraph::new(format!(
        "{} words  ·  {} per turn",
        snap.word_count,
        format_timer(snap.turn_duration)
    ))
    .style(Style::default().fg(Color::Yellow).bold())
    .alignment(Alignment::Center);
    frame.render_widget(header, layout[0]);

    let rounds: Vec<Line> = Round::all()
        .iter()
        .enumerate()
        .map(|(i, r)| Line::from(format!("{}. {}: {}", i + 1, r.label(), r.instructions())))
        .collect();
    let rounds = Paragraph::new(rounds).alignment(Alignment::Center);
    frame.render_widget(rounds, layout[1]);

    let footer = Paragraph::new("Team 1 starts. Enter Begin")
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    frame.render_widget(footer, layout[2]);
}

fn render_playing(frame: &mut Frame, snap: &GameSnapshot) {
    let area = frame.area();
    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(3),    // Word
            Constraint::Length(1), // Footer
        ])
        .split(area);

    render_header(frame, layout[0], snap);

    let word_area = centered_rows(layout[1], 1)[0];
    let word = Paragraph::new(snap.current_word.clone().unwrap_or_default())
        .style(Style::default().fg(Color::White).bold())
        .alignment(Alignment::Center);
    frame.render_widget(word, word_area);

    let skip_hint = if snap.can_skip { "  S Skip" } else { "" };
    let footer = Paragraph::new(format!(
        "Space Got it{}  ·  {} left",
        skip_hint, snap.words_remaining
    ))
    .style(Style::default().fg(Color::DarkGray))
    .alignment(Alignment::Center);
    frame.render_widget(footer, layout[2]);
}

/// Round | team and scores | timer
fn render_header(frame: &mut Frame, area: Rect, snap: &GameSnapshot) {
    let block = Block::default()
        .borders(Borders::BOTTOM)
        .border_style(Style::default().fg(Color::DarkGray));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let header_layout = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(12),
            Constraint::Min(20),
            Constraint::Length(10),
        ])
        .split(inner);

    let round = Paragraph::new(snap.round.label())
        .style(Style::default().fg(Color::Yellow).bold())
        .alignment(Alignment::Left);
    frame.render_widget(round, header_layout[0]);

    let teams = Paragraph::new(format!(
        "Team {} acting   {} : {}",
        snap.team.number(),
        snap.score(Team::One),
        snap.score(Team::Two)
    ))
    .style(Style::default().fg(Color::Cyan).bold())
    .alignment(Alignment::Center);
    frame.render_widget(teams, header_layout[1]);

    let timer_color = if snap.time_remaining <= 10 {
        Color::Red
    } else if snap.time_remaining <= 30 {
        Color::Yellow
    } else {
        Color::Green
    };
    let timer = Paragraph::new(format_timer(snap.time_remaining))
        .style(Style::default().fg(timer_color).bold())
        .alignment(Alignment::Right);
    frame.render_widget(timer, header_layout[2]);
}

fn render_transition(frame: &mut Frame, snap: &GameSnapshot) {
    let layout = centered_rows(frame.area(), 3);

    let (headline, next) = match snap.transition_reason {
        Some(TransitionReason::WordsExhausted) => {
            let next = match snap.round.next() {
                Some(round) => format!("Next: {}. Team {} keeps going", round.label(), snap.team.number()),
                None => "That was the last round".to_string(),
            };
            ("The bowl is empty!".to_string(), next)
        }
        _ => (
            "TIME'S UP!".to_string(),
            format!("Team {}, you're up", snap.team.number()),
        ),
    };

    let headline = Paragraph::new(headline)
        .style(Style::default().fg(Color::Yellow).bold())
        .alignment(Alignment::Center);
    frame.render_widget(headline, layout[0]);

    let body = Paragraph::new(vec![
        Line::from(next),
        Line::from(format!(
            "Team 1: {}   Team 2: {}",
            snap.score(Team::One),
            snap.score(Team::Two)
        )),
    ])
    .alignment(Alignment::Center);
    frame.render_widget(body, layout[1]);

    let footer = Paragraph::new("Enter Continue")
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    frame.render_widget(footer, layout[2]);
}

fn render_game_over(frame: &mut Frame, ui: &Frontend, snap: &GameSnapshot) {
    let area = frame.area();
    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Winner
            Constraint::Length(6), // Words per minute
            Constraint::Min(4),    // Slowest words
            Constraint::Length(1), // Footer
        ])
        .margin(1)
        .split(area);

    let winner = match ui.game.winner() {
        Some(team) => format!("Team {} wins!", team.number()),
        None => "It's a tie!".to_string(),
    };
    let winner = Paragraph::new(vec![
        Line::from(winner).style(Style::default().fg(Color::Yellow).bold()),
        Line::from(format!(
            "{} : {}",
            snap.score(Team::One),
            snap.score(Team::Two)
        )),
    ])
    .alignment(Alignment::Center);
    frame.render_widget(winner, layout[0]);

    let mut rows: Vec<Row> = ui
        .game
        .words_per_minute()
        .into_iter()
        .map(|(round, wpm)| {
            Row::new(vec![
                round.label().to_string(),
                format_wpm(wpm.get(Team::One)),
                format_wpm(wpm.get(Team::Two)),
            ])
        })
        .collect();
    let overall = ui.game.overall_words_per_minute();
    rows.push(
        Row::new(vec![
            "Overall".to_string(),
            format_wpm(overall.get(Team::One)),
            format_wpm(overall.get(Team::Two)),
        ])
        .style(Style::default().bold()),
    );
    let table = Table::new(
        rows,
        [
            Constraint::Length(10),
            Constraint::Length(8),
            Constraint::Length(8),
        ],
    )
    .header(Row::new(vec!["WPM", "Team 1", "Team 2"]).style(Style::default().fg(Color::Cyan)))
    .block(Block::default().borders(Borders::ALL).title(" Words per minute "));
    frame.render_widget(table, layout[1]);

    let items: Vec<ListItem> = ui
        .game
        .word_statistics()
        .into_iter()
        .take(WORD_STATS_SHOWN)
        .map(|s| {
            ListItem::new(format!(
                "{:<20} avg {:>5.1}s  skipped {}",
                s.word, s.average_time, s.skips
            ))
        })
        .collect();
    let list = List::new(items).block(Block::default().borders(Borders::ALL).title(" Toughest words "));
    frame.render_widget(list, layout[2]);

    let footer = Paragraph::new("R New game  Esc Quit")
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    frame.render_widget(footer, layout[3]);
}

/// Split `area` into `count` equal rows, vertically centered
fn centered_rows(area: Rect, count: usize) -> Vec<Rect> {
    let mut constraints = vec![Constraint::Percentage(30)];
    constraints.extend(std::iter::repeat(Constraint::Length(3)).take(count));
    constraints.push(Constraint::Min(0));
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .margin(1)
        .split(area);
    rows[1..=count].to_vec()
}

fn format_timer(seconds: i32) -> String {
    let seconds = seconds.max(0);
    format!("{}:{:02}", seconds / 60, seconds % 60)
}

fn format_wpm(wpm: Option<f64>) -> String {
    match wpm {
        Some(v) => format!("{:.1}", v),
        None => "-".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_timer() {
        assert_eq!(format_timer(60), "1:00");
        assert_eq!(format_timer(5), "0:05");
        assert_eq!(format_timer(-3), "0:00");
    }

    #[test]
    fn test_format_wpm() {
        assert_eq!(format_wpm(Some(12.0)), "12.0");
        assert_eq!(format_wpm(None), "-");
    }
}

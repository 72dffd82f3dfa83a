//! TUI rendering with ratatui
//!
//! The drill screen draws from a `SessionSnapshot` only.

use super::app::{App, MessageStyle, Screen};
use crate::core::{Rarity, Side};
use crate::drill::{DrillMode, DrillablePattern, ProtocolSnapshot, SessionSnapshot};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Gauge, List, ListItem, Paragraph, Wrap},
};

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(10),   // Main content
            Constraint::Length(3), // Input area
            Constraint::Length(3), // Status bar
        ])
        .split(f.area());

    render_header(f, app, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(60), // Left panel
            Constraint::Percentage(40), // Right panel
        ])
        .split(chunks[1]);

    match app.screen {
        Screen::Select => {
            render_pattern_list(f, app, main_chunks[0]);
            render_select_info(f, app, main_chunks[1]);
        }
        Screen::Drill => {
            let snapshot = app.session.snapshot();
            render_challenge(f, &snapshot, main_chunks[0]);
            render_drill_info(f, app, &snapshot, main_chunks[1]);
        }
    }

    render_input(f, app, chunks[2]);
    render_status(f, app, chunks[3]);
}

fn render_header(f: &mut Frame, app: &App, area: Rect) {
    let title = match app.screen {
        Screen::Select => "🧩 AFFIX DRILL - Choose Patterns".to_string(),
        Screen::Drill => format!("🧩 AFFIX DRILL - {}", app.mode),
    };
    let header = Paragraph::new(title)
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(header, area);
}

fn rarity_color(count: usize) -> Color {
    match Rarity::classify(count) {
        Rarity::UltraRare => Color::Magenta,
        Rarity::Rare => Color::LightBlue,
        Rarity::Uncommon => Color::Green,
        Rarity::Common => Color::Yellow,
        Rarity::VeryCommon => Color::DarkGray,
    }
}

// Selection screen

fn render_pattern_list(f: &mut Frame, app: &App, area: Rect) {
    let drills = app.drills();
    // Rows inside the borders
    let visible = usize::from(area.height.saturating_sub(2)).max(1);
    let offset = app.cursor.saturating_sub(visible - 1);

    let items: Vec<ListItem> = drills
        .iter()
        .enumerate()
        .skip(offset)
        .take(visible)
        .map(|(i, drill)| {
            let marker = if app.session.is_selected(drill.key()) {
                "[x]"
            } else {
                "[ ]"
            };
            let line = Line::from(vec![
                Span::raw(format!("{marker} ")),
                Span::styled(
                    format!("{:<12}", drill.key().to_string()),
                    Style::default().add_modifier(Modifier::BOLD),
                ),
                Span::styled(
                    format!("{:>3} words", drill.count()),
                    Style::default().fg(rarity_color(drill.count())),
                ),
            ]);
            let style = if i == app.cursor {
                Style::default().bg(Color::DarkGray).fg(Color::White)
            } else {
                Style::default()
            };
            ListItem::new(line).style(style)
        })
        .collect();

    let title = format!(
        " Patterns ({}) | {} selected | side: {} ",
        drills.len(),
        app.session.selected().len(),
        app.side_filter
    );
    let list = List::new(items).block(
        Block::default()
            .title(title)
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    f.render_widget(list, area);
}

fn render_select_info(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage(60), // Pattern details
            Constraint::Percentage(40), // Messages
        ])
        .split(area);

    let content = app.drill_under_cursor().map_or_else(
        || vec![Line::from("Nothing to drill with these filters.")],
        pattern_details,
    );
    let details = Paragraph::new(content)
        .block(
            Block::default()
                .title(" Details ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .wrap(Wrap { trim: false });
    f.render_widget(details, chunks[0]);

    render_messages(f, app, chunks[1]);
}

fn pattern_details(drill: &DrillablePattern) -> Vec<Line<'static>> {
    let mut lines = vec![
        Line::from(vec![
            Span::raw("Pattern: "),
            Span::styled(
                drill.key().to_string(),
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(format!("Length:  {}", drill.length())),
        Line::from(vec![
            Span::raw("Words:   "),
            Span::styled(
                format!("{} ({})", drill.count(), Rarity::classify(drill.count())),
                Style::default().fg(rarity_color(drill.count())),
            ),
        ]),
        Line::from(""),
    ];
    lines.extend(
        drill
            .words()
            .iter()
            .map(|word| Line::from(format!("  {word}"))),
    );
    lines
}

// Drill screen

fn render_challenge(f: &mut Frame, snapshot: &SessionSnapshot, area: Rect) {
    let Some(challenge) = &snapshot.challenge else {
        let paragraph = Paragraph::new("Current pattern is no longer available. Ctrl+N to move on.")
            .block(Block::default().title(" Challenge ").borders(Borders::ALL));
        f.render_widget(paragraph, area);
        return;
    };

    let mut lines = vec![
        Line::from(vec![
            Span::raw("Pattern: "),
            Span::styled(
                challenge.key().to_string(),
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format!("  ({} words)", challenge.count()),
                Style::default().fg(Color::DarkGray),
            ),
        ]),
        Line::from(""),
    ];

    match &snapshot.protocol {
        Some(ProtocolSnapshot::FindWords {
            found, revealed, ..
        }) => find_words_lines(&mut lines, challenge, found, *revealed),
        Some(ProtocolSnapshot::RepeatAfterMe {
            word_index,
            repeat_count,
            hide_word,
            completed,
        }) => {
            if *completed {
                lines.push(Line::styled(
                    "🎉 Pattern complete! ENTER for the next one",
                    Style::default().fg(Color::Green),
                ));
            } else if *hide_word {
                lines.push(Line::from("Type the word from memory:"));
                lines.push(Line::styled(
                    "  ?????",
                    Style::default().fg(Color::DarkGray),
                ));
            } else if let Some(word) = challenge.words().get(*word_index) {
                lines.push(Line::from("Type this word:"));
                lines.push(Line::from(vec![
                    Span::styled(
                        format!("  {word}"),
                        Style::default()
                            .fg(Color::Cyan)
                            .add_modifier(Modifier::BOLD),
                    ),
                    Span::raw(format!("  [{repeat_count}]")),
                ]));
            }
        }
        None => {}
    }

    let paragraph = Paragraph::new(lines)
        .block(
            Block::default()
                .title(" Challenge ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .wrap(Wrap { trim: false });
    f.render_widget(paragraph, area);
}

fn find_words_lines(
    lines: &mut Vec<Line<'static>>,
    challenge: &DrillablePattern,
    found: &[String],
    revealed: bool,
) {
    let hint = match challenge.side() {
        Side::Ends => format!("Type the start of a word ending in '{}'", challenge.pattern()),
        Side::Starts => format!("Type the end of a word starting with '{}'", challenge.pattern()),
    };
    lines.push(Line::from(hint));
    lines.push(Line::from(""));

    for word in challenge.words() {
        let is_found = found.iter().any(|w| w == word.key());
        let line = if is_found {
            Line::styled(format!("  ✅ {word}"), Style::default().fg(Color::Green))
        } else if revealed {
            Line::styled(format!("  ·  {word}"), Style::default().fg(Color::DarkGray))
        } else {
            let blank = "_".repeat(challenge.fragment_of(word).chars().count());
            Line::from(format!(
                "  ·  {}",
                challenge.side().complete(&blank, challenge.pattern())
            ))
        };
        lines.push(line);
    }
}

fn render_drill_info(f: &mut Frame, app: &App, snapshot: &SessionSnapshot, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Pattern progress
            Constraint::Length(3), // Accuracy
            Constraint::Min(5),    // Messages
        ])
        .split(area);

    let (done, total) = snapshot.challenge_progress().unwrap_or((0, 0));
    let progress_pct = if total == 0 {
        0
    } else {
        u16::try_from(done * 100 / total).unwrap_or(100).min(100)
    };
    let progress = Gauge::default()
        .block(
            Block::default()
                .title(" Pattern Progress ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .gauge_style(Style::default().fg(Color::Cyan))
        .percent(progress_pct)
        .label(format!("{done}/{total} words"));
    f.render_widget(progress, chunks[0]);

    let accuracy = snapshot.accuracy().unwrap_or(0.0);
    // Cast is safe: accuracy is a percentage
    let accuracy_pct = accuracy.clamp(0.0, 100.0) as u16;
    let score = Gauge::default()
        .block(
            Block::default()
                .title(" Score ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .gauge_style(Style::default().fg(Color::Green))
        .percent(accuracy_pct)
        .label(format!(
            "{}/{} correct ({accuracy:.0}%)",
            snapshot.correct_answers, snapshot.total_attempts
        ));
    f.render_widget(score, chunks[1]);

    render_messages(f, app, chunks[2]);
}

fn render_messages(f: &mut Frame, app: &App, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .map(|msg| {
            let style = match msg.style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Success => Style::default().fg(Color::Green),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(msg.text.clone()).style(style)
        })
        .collect();

    let messages_list =
        List::new(messages).block(Block::default().title(" Messages ").borders(Borders::ALL));

    f.render_widget(messages_list, area);
}

fn render_input(f: &mut Frame, app: &App, area: Rect) {
    let (title, content, color) = match app.screen {
        Screen::Select if app.editing_query => (
            " Affix filter | ENTER/ESC to finish ",
            app.affix_query.as_str(),
            Color::Yellow,
        ),
        Screen::Select => (
            " Affix filter | '/' to edit ",
            app.affix_query.as_str(),
            Color::DarkGray,
        ),
        Screen::Drill => (" Answer | ENTER to submit ", app.input_buffer.as_str(), Color::Cyan),
    };

    let input = Paragraph::new(content)
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .style(Style::default().fg(color)),
        );

    f.render_widget(input, area);
}

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(20),
            Constraint::Percentage(20),
            Constraint::Percentage(60),
        ])
        .split(area);

    let mode = Paragraph::new(format!("Mode: {}", app.mode)).alignment(Alignment::Center);
    f.render_widget(mode, chunks[0]);

    let position = match app.screen {
        Screen::Select => format!("Selected: {}", app.session.selected().len()),
        Screen::Drill => {
            let snapshot = app.session.snapshot();
            format!(
                "Pattern {}/{} | Round {}",
                snapshot.challenge_position().unwrap_or(0),
                snapshot.selected.len(),
                snapshot.round()
            )
        }
    };
    f.render_widget(
        Paragraph::new(position).alignment(Alignment::Center),
        chunks[1],
    );

    let help_text = match app.screen {
        Screen::Select => {
            "q: Quit | SPACE: Toggle | a: All | r: Random | c: Clear | s: Side | m: Mode | ENTER: Start"
        }
        Screen::Drill => match app.mode {
            DrillMode::FindWords => {
                "ESC: End | TAB: Reveal | Ctrl+N: Next | Ctrl+C: Quit"
            }
            DrillMode::RepeatAfterMe => {
                "ESC: End | TAB: Skip word | Ctrl+N: Next | Ctrl+C: Quit"
            }
        },
    };

    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[2]);
}

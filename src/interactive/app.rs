//! TUI application state and logic

use crate::catalog::Catalog;
use crate::core::SideFilter;
use crate::drill::{
    DrillMode, DrillablePattern, GuessOutcome, ProtocolSnapshot, RepeatOutcome, Session,
};
use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind, KeyModifiers,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;

/// Number of patterns picked by the random selection key
const RANDOM_PICK: usize = 5;

/// Application state
pub struct App<'a> {
    pub catalog: &'a Catalog,
    pub session: Session,
    pub screen: Screen,
    pub side_filter: SideFilter,
    pub affix_query: String,
    pub editing_query: bool,
    pub cursor: usize,
    pub mode: DrillMode,
    pub input_buffer: String,
    pub messages: Vec<Message>,
    pub should_quit: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Select,
    Drill,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, Copy)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

impl<'a> App<'a> {
    #[must_use]
    pub fn new(catalog: &'a Catalog, mode: DrillMode) -> Self {
        let session = Session::with_config(
            catalog.drill_set(SideFilter::All, None),
            catalog.config().session,
        );

        Self {
            catalog,
            session,
            screen: Screen::Select,
            side_filter: SideFilter::All,
            affix_query: String::new(),
            editing_query: false,
            cursor: 0,
            mode,
            input_buffer: String::new(),
            messages: vec![Message {
                text: "Pick patterns with SPACE, then press ENTER to start.".to_string(),
                style: MessageStyle::Info,
            }],
            should_quit: false,
        }
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        // Keep only last 5 messages
        if self.messages.len() > 5 {
            self.messages.remove(0);
        }
    }

    // Selection screen

    #[must_use]
    pub fn drills(&self) -> &[DrillablePattern] {
        self.session.drills()
    }

    #[must_use]
    pub fn drill_under_cursor(&self) -> Option<&DrillablePattern> {
        self.drills().get(self.cursor)
    }

    /// Rebuild the drill set after a side or affix filter change
    pub fn refresh_drills(&mut self) {
        let query = Some(self.affix_query.as_str()).filter(|q| !q.trim().is_empty());
        let drills = self.catalog.drill_set(self.side_filter, query);
        self.session.replace_drill_set(drills);
        self.cursor = self.cursor.min(self.drills().len().saturating_sub(1));
    }

    pub fn move_cursor(&mut self, delta: isize) {
        let len = self.drills().len();
        if len == 0 {
            self.cursor = 0;
            return;
        }
        self.cursor = self.cursor.saturating_add_signed(delta).min(len - 1);
    }

    pub fn toggle_under_cursor(&mut self) {
        if let Some(key) = self.drill_under_cursor().map(|d| d.key().clone()) {
            self.session.toggle(&key);
        }
    }

    pub fn cycle_side_filter(&mut self) {
        self.side_filter = self.side_filter.next();
        self.refresh_drills();
        self.add_message(
            &format!("Showing {} patterns", self.side_filter),
            MessageStyle::Info,
        );
    }

    pub fn select_random(&mut self) {
        self.session.select_random(RANDOM_PICK, &mut rand::rng());
        self.add_message(
            &format!("Picked {} random patterns", self.session.selected().len()),
            MessageStyle::Info,
        );
    }

    pub fn start_session(&mut self) {
        match self.session.start(self.mode) {
            Ok(()) => {
                self.screen = Screen::Drill;
                self.input_buffer.clear();
                self.add_message(
                    &format!("Started {} drill", self.mode),
                    MessageStyle::Success,
                );
            }
            Err(err) => self.add_message(&format!("{err}"), MessageStyle::Error),
        }
    }

    // Drill screen

    pub fn submit_input(&mut self) {
        let input = std::mem::take(&mut self.input_buffer);

        if input.trim().is_empty() {
            // Empty ENTER moves on once the pattern is done
            if self.is_challenge_finished() {
                self.next_challenge();
            }
            return;
        }

        match self.mode {
            DrillMode::FindWords => match self.session.submit_guess(&input) {
                Ok(GuessOutcome::Correct(word)) => {
                    self.add_message(&format!("✅ {word}"), MessageStyle::Success);
                    if self.session.is_challenge_complete() {
                        self.add_message(
                            "🎉 All words found! ENTER for the next pattern",
                            MessageStyle::Success,
                        );
                    }
                }
                Ok(GuessOutcome::Incorrect) => {
                    self.add_message(&format!("✗ {}", input.trim()), MessageStyle::Error);
                }
                Ok(GuessOutcome::Duplicate) => {
                    self.add_message("Already tried", MessageStyle::Info);
                }
                Ok(GuessOutcome::Ignored) => {}
                Err(err) => self.add_message(&format!("{err}"), MessageStyle::Error),
            },
            DrillMode::RepeatAfterMe => match self.session.submit_repetition(&input) {
                Ok(RepeatOutcome::Repeated { count }) => {
                    self.add_message(&format!("✓ {count}"), MessageStyle::Success);
                }
                Ok(RepeatOutcome::Hidden) => {
                    self.add_message("👀 Now type it from memory", MessageStyle::Info);
                }
                Ok(RepeatOutcome::Recalled { completed }) => {
                    self.add_message("✅ Recalled!", MessageStyle::Success);
                    if completed {
                        self.add_message(
                            "🎉 Pattern complete! ENTER for the next pattern",
                            MessageStyle::Success,
                        );
                    }
                }
                Ok(RepeatOutcome::Incorrect) => {
                    self.add_message("✗ Try again", MessageStyle::Error);
                }
                Ok(RepeatOutcome::Ignored) => {}
                Err(err) => self.add_message(&format!("{err}"), MessageStyle::Error),
            },
        }
    }

    /// TAB: reveal answers in find mode, skip the word in repeat mode
    pub fn give_up(&mut self) {
        match self.mode {
            DrillMode::FindWords => match self.session.reveal() {
                Ok(true) => {
                    self.add_message("Answers revealed (counted as a miss)", MessageStyle::Info);
                }
                Ok(false) => self.add_message("Answers revealed", MessageStyle::Info),
                Err(err) => self.add_message(&format!("{err}"), MessageStyle::Error),
            },
            DrillMode::RepeatAfterMe => match self.session.skip() {
                Ok(true) => self.add_message("Skipped", MessageStyle::Info),
                Ok(false) => {}
                Err(err) => self.add_message(&format!("{err}"), MessageStyle::Error),
            },
        }
    }

    pub fn next_challenge(&mut self) {
        self.input_buffer.clear();
        if let Err(err) = self.session.advance() {
            self.add_message(&format!("{err}"), MessageStyle::Error);
        }
    }

    /// Leave the drill and go back to selection
    pub fn end_session(&mut self) {
        let snapshot = self.session.snapshot();
        self.session.reset();
        self.screen = Screen::Select;
        self.input_buffer.clear();
        self.add_message(
            &format!(
                "Session ended: {}/{} correct",
                snapshot.correct_answers, snapshot.total_attempts
            ),
            MessageStyle::Info,
        );
    }

    fn is_challenge_finished(&self) -> bool {
        self.session.is_challenge_complete()
            || matches!(
                self.session.snapshot().protocol,
                Some(ProtocolSnapshot::FindWords { revealed: true, .. })
            )
    }

    fn handle_select_key(&mut self, code: KeyCode) {
        if self.editing_query {
            match code {
                KeyCode::Enter | KeyCode::Esc => self.editing_query = false,
                KeyCode::Char(c) => {
                    self.affix_query.push(c);
                    self.refresh_drills();
                }
                KeyCode::Backspace => {
                    self.affix_query.pop();
                    self.refresh_drills();
                }
                _ => {}
            }
            return;
        }

        match code {
            KeyCode::Char('q') => self.should_quit = true,
            KeyCode::Up | KeyCode::Char('k') => self.move_cursor(-1),
            KeyCode::Down | KeyCode::Char('j') => self.move_cursor(1),
            KeyCode::PageUp => self.move_cursor(-10),
            KeyCode::PageDown => self.move_cursor(10),
            KeyCode::Char(' ') => self.toggle_under_cursor(),
            KeyCode::Char('a') => self.session.select_all(),
            KeyCode::Char('c') => self.session.clear_selection(),
            KeyCode::Char('r') => self.select_random(),
            KeyCode::Char('s') => self.cycle_side_filter(),
            KeyCode::Char('m') => self.mode = self.mode.toggle(),
            KeyCode::Char('/') => self.editing_query = true,
            KeyCode::Enter => self.start_session(),
            _ => {}
        }
    }

    fn handle_drill_key(&mut self, code: KeyCode, modifiers: KeyModifiers) {
        match code {
            KeyCode::Char('n') if modifiers.contains(KeyModifiers::CONTROL) => {
                self.next_challenge();
            }
            KeyCode::Esc => self.end_session(),
            KeyCode::Tab => self.give_up(),
            KeyCode::Enter => self.submit_input(),
            KeyCode::Backspace => {
                self.input_buffer.pop();
            }
            KeyCode::Char(c) => self.input_buffer.push(c),
            _ => {}
        }
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui(app: App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {err}");
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind != KeyEventKind::Press {
                continue;
            }

            if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
                app.should_quit = true;
            } else {
                match app.screen {
                    Screen::Select => app.handle_select_key(key.code),
                    Screen::Drill => app.handle_drill_key(key.code, key.modifiers),
                }
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AppConfig;
    use crate::index::Vocabulary;
    use crate::wordlists::loader::words_from_slice;

    fn catalog() -> Catalog {
        let words = words_from_slice(&[
            "walking", "talking", "running", "preview", "prefix", "kindness", "sadness",
        ]);
        let vocab = Vocabulary::from_pairs([("ing", 3), ("pre", 3), ("ness", 4)]);
        Catalog::build(&words, vocab, AppConfig::default()).unwrap()
    }

    fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            app.handle_drill_key(KeyCode::Char(c), KeyModifiers::NONE);
        }
        app.handle_drill_key(KeyCode::Enter, KeyModifiers::NONE);
    }

    #[test]
    fn enter_without_selection_stays_on_select_screen() {
        let catalog = catalog();
        let mut app = App::new(&catalog, DrillMode::FindWords);
        app.handle_select_key(KeyCode::Enter);
        assert_eq!(app.screen, Screen::Select);
        assert!(matches!(app.messages.last().unwrap().style, MessageStyle::Error));
    }

    #[test]
    fn select_and_drill_find_words() {
        let catalog = catalog();
        let mut app = App::new(&catalog, DrillMode::FindWords);
        assert_eq!(app.drills().len(), 3);

        // Records are rarest first: pre-, -ness, -ing
        app.move_cursor(2);
        app.handle_select_key(KeyCode::Char(' '));
        app.handle_select_key(KeyCode::Enter);
        assert_eq!(app.screen, Screen::Drill);

        type_text(&mut app, "walk");
        type_text(&mut app, "xyz");
        let snapshot = app.session.snapshot();
        assert_eq!(snapshot.correct_answers, 1);
        assert_eq!(snapshot.total_attempts, 2);

        app.handle_drill_key(KeyCode::Esc, KeyModifiers::NONE);
        assert_eq!(app.screen, Screen::Select);
        assert!(app.session.selected().is_empty());
    }

    #[test]
    fn empty_enter_advances_after_reveal() {
        let catalog = catalog();
        let mut app = App::new(&catalog, DrillMode::FindWords);
        app.handle_select_key(KeyCode::Char('a'));
        app.handle_select_key(KeyCode::Enter);

        app.handle_drill_key(KeyCode::Tab, KeyModifiers::NONE);
        app.handle_drill_key(KeyCode::Enter, KeyModifiers::NONE);
        assert_eq!(app.session.snapshot().challenge_index, 1);
        assert_eq!(app.session.snapshot().total_attempts, 1);
    }

    #[test]
    fn repeat_mode_from_mode_toggle() {
        let catalog = catalog();
        let mut app = App::new(&catalog, DrillMode::FindWords);
        app.handle_select_key(KeyCode::Char('m'));
        assert_eq!(app.mode, DrillMode::RepeatAfterMe);

        app.handle_select_key(KeyCode::Char(' '));
        app.handle_select_key(KeyCode::Enter);
        for _ in 0..3 {
            type_text(&mut app, "preview");
        }
        type_text(&mut app, "preview");
        assert_eq!(app.session.snapshot().correct_answers, 1);
    }

    #[test]
    fn affix_query_rebuilds_drills() {
        let catalog = catalog();
        let mut app = App::new(&catalog, DrillMode::FindWords);

        app.handle_select_key(KeyCode::Char('/'));
        for c in "ss".chars() {
            app.handle_select_key(KeyCode::Char(c));
        }
        app.handle_select_key(KeyCode::Enter);
        assert!(!app.editing_query);
        assert_eq!(app.drills().len(), 1);
        assert_eq!(app.drills()[0].pattern(), "ness");

        app.handle_select_key(KeyCode::Char('/'));
        app.handle_select_key(KeyCode::Backspace);
        app.handle_select_key(KeyCode::Backspace);
        app.handle_select_key(KeyCode::Esc);
        assert_eq!(app.drills().len(), 3);
    }

    #[test]
    fn side_filter_cycle_prunes_selection() {
        let catalog = catalog();
        let mut app = App::new(&catalog, DrillMode::FindWords);
        app.handle_select_key(KeyCode::Char('a'));
        assert_eq!(app.session.selected().len(), 3);

        app.handle_select_key(KeyCode::Char('s'));
        assert_eq!(app.side_filter, SideFilter::Ends);
        assert_eq!(app.session.selected().len(), 2);
    }
}

//! TUI application state and logic

use crate::core::{LETTER_COUNT, normalize_letters};
use crate::game::Session;
use crate::generator::{CreationError, PuzzleCreator};
use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind, KeyModifiers,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use log::{info, warn};
use rand::rngs::StdRng;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;

/// Longest word the input line accepts
const MAX_INPUT_LENGTH: usize = 24;

/// Messages kept in the log panel
const MAX_MESSAGES: usize = 5;

/// Application state
pub struct App<'a> {
    pub creator: &'a PuzzleCreator<'a>,
    rng: StdRng,
    pub session: Session,
    /// Current display order of the letters, center at index 3
    pub hive: [char; LETTER_COUNT],
    pub input_buffer: String,
    pub messages: Vec<Message>,
    pub stats: Statistics,
    pub should_quit: bool,
    pub input_mode: InputMode,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    Playing,
    /// The player gave up and the answers are shown
    Revealed,
    /// Every word was found
    Complete,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

#[derive(Debug, Default, Clone)]
pub struct Statistics {
    pub puzzles_played: usize,
    pub puzzles_completed: usize,
    pub pangrams_found: usize,
}

impl<'a> App<'a> {
    /// Start a game on `letters`, or on a random puzzle when `None`
    ///
    /// # Errors
    ///
    /// Returns the `CreationError` if the first puzzle cannot be created.
    pub fn new(
        creator: &'a PuzzleCreator<'a>,
        letters: Option<&str>,
        mut rng: StdRng,
    ) -> Result<Self, CreationError> {
        let puzzle = match letters {
            Some(letters) => creator.create_from_letters(&normalize_letters(letters))?,
            None => creator.create_random(&mut rng)?,
        };
        let hive = puzzle.letters().hive(&mut rng);

        let mut app = Self {
            creator,
            rng,
            session: Session::new(puzzle),
            hive,
            input_buffer: String::new(),
            messages: Vec::new(),
            stats: Statistics {
                puzzles_played: 1,
                ..Statistics::default()
            },
            should_quit: false,
            input_mode: InputMode::Playing,
        };
        app.add_message(
            "Welcome! Make words of 4+ letters that use the center letter.",
            MessageStyle::Info,
        );
        Ok(app)
    }

    /// Append a typed letter to the input line
    pub fn push_char(&mut self, c: char) {
        if self.input_mode == InputMode::Playing
            && c.is_alphabetic()
            && self.input_buffer.chars().count() < MAX_INPUT_LENGTH
        {
            self.input_buffer.extend(c.to_lowercase());
        }
    }

    /// Submit the input line as a word
    pub fn submit(&mut self) {
        if self.input_mode != InputMode::Playing {
            return;
        }
        let word = std::mem::take(&mut self.input_buffer);
        if word.is_empty() {
            return;
        }

        match self.session.check(&word) {
            Ok(result) if result.is_pangram() => {
                self.stats.pangrams_found += 1;
                self.add_message(
                    &format!("🎉 PANGRAM! {} +{}", word.to_uppercase(), result.points),
                    MessageStyle::Success,
                );
            }
            Ok(result) => {
                self.add_message(
                    &format!("{} +{}", word.to_uppercase(), result.points),
                    MessageStyle::Success,
                );
            }
            Err(e) => {
                self.add_message(
                    &format!("{}: {e}", word.to_uppercase()),
                    MessageStyle::Error,
                );
            }
        }

        if self.session.is_complete() {
            self.stats.puzzles_completed += 1;
            self.input_mode = InputMode::Complete;
            self.add_message("🐝 QUEEN BEE! Every word found!", MessageStyle::Success);
            self.add_message("Press 'n' for a new puzzle or 'q' to quit.", MessageStyle::Info);
        }
    }

    /// Reorder the outer letters of the hive
    pub fn shuffle(&mut self) {
        self.hive = self.session.puzzle().letters().hive(&mut self.rng);
    }

    /// Give up and show the words not yet found
    pub fn reveal(&mut self) {
        if self.input_mode != InputMode::Playing {
            return;
        }
        self.input_buffer.clear();
        self.input_mode = InputMode::Revealed;
        let missed = self.session.remaining_words().len();
        self.add_message(
            &format!("Revealed {missed} missed words."),
            MessageStyle::Info,
        );
        self.add_message("Press 'n' for a new puzzle or 'q' to quit.", MessageStyle::Info);
    }

    /// Replace the current puzzle with a random one
    ///
    /// On failure the current game is kept and the error is shown.
    pub fn new_game(&mut self) {
        match self.creator.create_random(&mut self.rng) {
            Ok(puzzle) => {
                info!("new puzzle {}", puzzle.letters());
                self.hive = puzzle.letters().hive(&mut self.rng);
                self.session = Session::new(puzzle);
                self.input_buffer.clear();
                self.messages.clear();
                self.input_mode = InputMode::Playing;
                self.stats.puzzles_played += 1;
                self.add_message("New puzzle started!", MessageStyle::Info);
            }
            Err(e) => {
                warn!("could not create a new puzzle: {e}");
                self.add_message(&format!("No new puzzle: {e}"), MessageStyle::Error);
            }
        }
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        if self.messages.len() > MAX_MESSAGES {
            self.messages.remove(0);
        }
    }

    fn handle_key(&mut self, code: KeyCode, modifiers: KeyModifiers) {
        if code == KeyCode::Char('c') && modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return;
        }

        match self.input_mode {
            InputMode::Revealed | InputMode::Complete => match code {
                KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
                KeyCode::Char('n') | KeyCode::Enter => self.new_game(),
                _ => {}
            },
            InputMode::Playing => match code {
                KeyCode::Char(' ') => self.shuffle(),
                KeyCode::Char(c) => self.push_char(c),
                KeyCode::Backspace => {
                    self.input_buffer.pop();
                }
                KeyCode::Enter => self.submit(),
                KeyCode::Tab => self.reveal(),
                KeyCode::Esc => self.new_game(),
                _ => {}
            },
        }
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling. The terminal is restored first.
pub fn run_tui(mut app: App) -> Result<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, &mut app, event::read);

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    res
}

fn run_app<B, E>(terminal: &mut Terminal<B>, app: &mut App, mut next_event: E) -> Result<()>
where
    B: ratatui::backend::Backend,
    E: FnMut() -> io::Result<Event>,
{
    loop {
        terminal.draw(|f| super::rendering::ui(f, app))?;

        if let Event::Key(key) = next_event()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind != KeyEventKind::Press {
                continue;
            }
            app.handle_key(key.code, key.modifiers);
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
    use crate::game::SubmissionError;
    use crate::generator::fixtures::{self, LETTERS, PANGRAM};
    use crossterm::event::KeyEvent;
    use rand::SeedableRng;
    use ratatui::backend::TestBackend;

    fn type_word(app: &mut App, word: &str) {
        for c in word.chars() {
            app.handle_key(KeyCode::Char(c), KeyModifiers::NONE);
        }
        app.handle_key(KeyCode::Enter, KeyModifiers::NONE);
    }

    #[test]
    fn starts_on_given_letters() {
        let corpus = fixtures::corpus();
        let creator = PuzzleCreator::new(&corpus);
        let app = App::new(&creator, Some(LETTERS), StdRng::seed_from_u64(0)).unwrap();

        assert_eq!(app.session.puzzle().center(), 'd');
        assert_eq!(app.hive[3], 'd');
        assert_eq!(app.input_mode, InputMode::Playing);
        assert_eq!(app.stats.puzzles_played, 1);
    }

    #[test]
    fn rejects_bad_letters() {
        let corpus = fixtures::corpus();
        let creator = PuzzleCreator::new(&corpus);
        assert!(App::new(&creator, Some("abc"), StdRng::seed_from_u64(0)).is_err());
    }

    #[test]
    fn typing_and_submitting_scores_word() {
        let corpus = fixtures::corpus();
        let creator = PuzzleCreator::new(&corpus);
        let mut app = App::new(&creator, Some(LETTERS), StdRng::seed_from_u64(0)).unwrap();

        type_word(&mut app, "DAAAAA");
        assert!(app.input_buffer.is_empty());
        assert_eq!(app.session.current_score(), 3);
        assert_eq!(app.messages.last().unwrap().style, MessageStyle::Success);
    }

    #[test]
    fn pangram_is_counted() {
        let corpus = fixtures::corpus();
        let creator = PuzzleCreator::new(&corpus);
        let mut app = App::new(&creator, Some(LETTERS), StdRng::seed_from_u64(0)).unwrap();

        type_word(&mut app, PANGRAM);
        assert_eq!(app.session.current_score(), 11);
        assert_eq!(app.stats.pangrams_found, 1);
        assert!(app.messages.last().unwrap().text.contains("PANGRAM"));
    }

    #[test]
    fn rejection_shows_error() {
        let corpus = fixtures::corpus();
        let creator = PuzzleCreator::new(&corpus);
        let mut app = App::new(&creator, Some(LETTERS), StdRng::seed_from_u64(0)).unwrap();

        type_word(&mut app, "dab");
        let last = app.messages.last().unwrap();
        assert_eq!(last.style, MessageStyle::Error);
        assert!(last.text.contains(&SubmissionError::WordTooShort.to_string()));
        assert_eq!(app.session.current_score(), 0);
    }

    #[test]
    fn backspace_and_non_letters() {
        let corpus = fixtures::corpus();
        let creator = PuzzleCreator::new(&corpus);
        let mut app = App::new(&creator, Some(LETTERS), StdRng::seed_from_u64(0)).unwrap();

        app.handle_key(KeyCode::Char('d'), KeyModifiers::NONE);
        app.handle_key(KeyCode::Char('1'), KeyModifiers::NONE);
        app.handle_key(KeyCode::Char('a'), KeyModifiers::NONE);
        assert_eq!(app.input_buffer, "da");
        app.handle_key(KeyCode::Backspace, KeyModifiers::NONE);
        assert_eq!(app.input_buffer, "d");
    }

    #[test]
    fn shuffle_keeps_center_and_letters() {
        let corpus = fixtures::corpus();
        let creator = PuzzleCreator::new(&corpus);
        let mut app = App::new(&creator, Some(LETTERS), StdRng::seed_from_u64(0)).unwrap();

        for _ in 0..10 {
            app.handle_key(KeyCode::Char(' '), KeyModifiers::NONE);
            assert_eq!(app.hive[3], 'd');
            let mut sorted = app.hive;
            sorted.sort_unstable();
            assert_eq!(sorted, ['a', 'b', 'c', 'd', 'e', 'f', 'g']);
        }
        assert!(app.input_buffer.is_empty());
    }

    #[test]
    fn finding_every_word_completes() {
        let corpus = fixtures::corpus();
        let creator = PuzzleCreator::new(&corpus);
        let mut app = App::new(&creator, Some(LETTERS), StdRng::seed_from_u64(0)).unwrap();

        let words = app.session.puzzle().words().to_vec();
        for word in &words {
            type_word(&mut app, word);
        }
        assert_eq!(app.input_mode, InputMode::Complete);
        assert_eq!(app.stats.puzzles_completed, 1);
        assert_eq!(app.session.current_score(), 101);

        // Letters no longer reach the input line
        app.handle_key(KeyCode::Char('d'), KeyModifiers::NONE);
        assert!(app.input_buffer.is_empty());
    }

    #[test]
    fn reveal_then_new_game() {
        let corpus = fixtures::corpus();
        let creator = PuzzleCreator::new(&corpus);
        let mut app = App::new(&creator, Some(LETTERS), StdRng::seed_from_u64(0)).unwrap();

        app.handle_key(KeyCode::Tab, KeyModifiers::NONE);
        assert_eq!(app.input_mode, InputMode::Revealed);

        app.handle_key(KeyCode::Char('n'), KeyModifiers::NONE);
        assert_eq!(app.input_mode, InputMode::Playing);
        assert_eq!(app.stats.puzzles_played, 2);
        assert_eq!(app.session.current_score(), 0);
        assert!(app.session.found_words().is_empty());
    }

    #[test]
    fn messages_are_capped() {
        let corpus = fixtures::corpus();
        let creator = PuzzleCreator::new(&corpus);
        let mut app = App::new(&creator, Some(LETTERS), StdRng::seed_from_u64(0)).unwrap();

        for i in 0..12 {
            app.add_message(&i.to_string(), MessageStyle::Info);
        }
        assert_eq!(app.messages.len(), MAX_MESSAGES);
        assert_eq!(app.messages.last().unwrap().text, "11");
    }

    fn key_events(keys: Vec<(KeyCode, KeyModifiers)>) -> impl FnMut() -> io::Result<Event> {
        let mut keys = keys.into_iter();
        move || {
            keys.next()
                .map(|(code, modifiers)| Event::Key(KeyEvent::new(code, modifiers)))
                .ok_or_else(|| io::Error::new(io::ErrorKind::UnexpectedEof, "no more input"))
        }
    }

    #[test]
    fn event_loop_plays_until_quit() {
        let corpus = fixtures::corpus();
        let creator = PuzzleCreator::new(&corpus);
        let mut app = App::new(&creator, Some(LETTERS), StdRng::seed_from_u64(0)).unwrap();
        let mut terminal = Terminal::new(TestBackend::new(80, 30)).unwrap();

        let mut keys: Vec<_> = "daaaaa"
            .chars()
            .map(|c| (KeyCode::Char(c), KeyModifiers::NONE))
            .collect();
        keys.push((KeyCode::Enter, KeyModifiers::NONE));
        keys.push((KeyCode::Char('c'), KeyModifiers::CONTROL));

        run_app(&mut terminal, &mut app, key_events(keys)).unwrap();
        assert!(app.should_quit);
        assert_eq!(app.session.current_score(), 3);
    }

    #[test]
    fn event_loop_reports_input_errors() {
        let corpus = fixtures::corpus();
        let creator = PuzzleCreator::new(&corpus);
        let mut app = App::new(&creator, Some(LETTERS), StdRng::seed_from_u64(0)).unwrap();
        let mut terminal = Terminal::new(TestBackend::new(80, 30)).unwrap();

        let keys = vec![(KeyCode::Char('d'), KeyModifiers::NONE)];
        let err = run_app(&mut terminal, &mut app, key_events(keys)).unwrap_err();
        assert!(err.to_string().contains("no more input"));
        assert!(!app.should_quit);
    }

    #[test]
    fn ctrl_c_quits_in_any_mode() {
        let corpus = fixtures::corpus();
        let creator = PuzzleCreator::new(&corpus);
        let mut app = App::new(&creator, Some(LETTERS), StdRng::seed_from_u64(0)).unwrap();

        app.handle_key(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert!(app.should_quit);
    }
}

//! TUI application model (Elm architecture).

use std::io;
use std::sync::Arc;
use std::time::{Duration, Instant};

use crossbeam_channel::{Receiver, Sender};
use crossterm::event::{self, Event};
use crossterm::execute;
use crossterm::terminal::{self, EnterAlternateScreen, LeaveAlternateScreen};
use ratatui::backend::CrosstermBackend;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::Terminal;
use tracing::debug;

use deskcalc_core::{Clock, EngineOptions, Input, Session, Snapshot, SystemClock};

use crate::bridge::TuiBridgeObserver;
use crate::display::render_display;
use crate::footer::render_footer;
use crate::header::render_header;
use crate::keymap::{map_key, KeyAction};
use crate::keypad::render_keypad;
use crate::messages::TuiMessage;
use crate::styles::ColorTheme;

/// How long a pressed key stays highlighted.
pub const PRESS_FLASH: Duration = Duration::from_millis(150);

const TICK_RATE: Duration = Duration::from_millis(250);

/// TUI application state (Elm Model).
pub struct TuiApp<C: Clock + Clone = SystemClock> {
    /// Whether the app should quit.
    pub should_quit: bool,
    /// Last snapshot received from the session.
    pub snapshot: Snapshot,
    session: Session<C>,
    clock: C,
    pressed: Option<(Input, Instant)>,
    rx: Receiver<TuiMessage>,
    theme: ColorTheme,
}

impl TuiApp<SystemClock> {
    /// Create a TUI app on the wall clock.
    ///
    /// `tx` is the sending half of `rx`; the session publishes snapshots
    /// through it.
    #[must_use]
    pub fn new(options: EngineOptions, tx: Sender<TuiMessage>, rx: Receiver<TuiMessage>) -> Self {
        Self::with_clock(options, SystemClock, tx, rx)
    }
}

impl<C: Clock + Clone> TuiApp<C> {
    /// Create a TUI app on a custom clock.
    pub fn with_clock(
        options: EngineOptions,
        clock: C,
        tx: Sender<TuiMessage>,
        rx: Receiver<TuiMessage>,
    ) -> Self {
        let session = Session::with_clock(options, clock.clone());
        session.subscribe(Arc::new(TuiBridgeObserver::new(tx)));
        let snapshot = session.snapshot().clone();
        Self {
            should_quit: false,
            snapshot,
            session,
            clock,
            pressed: None,
            rx,
            theme: ColorTheme::default(),
        }
    }

    /// The underlying session.
    #[must_use]
    pub fn session(&self) -> &Session<C> {
        &self.session
    }

    /// Key currently flashed, if its highlight has not expired.
    #[must_use]
    pub fn pressed(&self) -> Option<Input> {
        self.pressed.map(|(input, _)| input)
    }

    /// Update the model with incoming messages (Elm Update).
    pub fn update(&mut self) {
        while let Ok(msg) = self.rx.try_recv() {
            self.handle_message(msg);
        }
    }

    /// Handle a single message.
    pub fn handle_message(&mut self, msg: TuiMessage) {
        match msg {
            TuiMessage::Snapshot(snapshot) => {
                self.snapshot = snapshot;
            }
            TuiMessage::KeyPress(action) => {
                self.handle_key_action(action);
            }
            TuiMessage::Tick => {
                self.tick();
            }
            TuiMessage::Resize { width, height } => {
                // the next draw picks up the new frame size
                debug!(width, height, "resize");
            }
            TuiMessage::Quit => {
                self.should_quit = true;
            }
        }
    }

    /// Handle a keyboard action.
    pub fn handle_key_action(&mut self, action: KeyAction) {
        match action {
            KeyAction::Input(input) => {
                debug!(?input, "key");
                self.pressed = Some((input, self.clock.now()));
                self.session.press(input);
            }
            KeyAction::Quit => {
                self.should_quit = true;
            }
            KeyAction::None => {}
        }
    }

    /// Fire a due error recovery and expire the key flash.
    pub fn tick(&mut self) {
        self.session.poll();
        let now = self.clock.now();
        if let Some((_, at)) = self.pressed {
            if now.saturating_duration_since(at) >= PRESS_FLASH {
                self.pressed = None;
            }
        }
    }

    /// How long the event loop may block before the model needs attention.
    #[must_use]
    pub fn poll_timeout(&self) -> Duration {
        let now = self.clock.now();
        let flash = self
            .pressed
            .map(|(_, at)| PRESS_FLASH.saturating_sub(now.saturating_duration_since(at)));
        [Some(TICK_RATE), self.session.time_until_recovery(), flash]
            .into_iter()
            .flatten()
            .min()
            .unwrap_or(TICK_RATE)
    }

    /// Compute the layout.
    ///
    /// Returns (header, display, keypad, footer) rects.
    #[must_use]
    pub fn compute_layout(area: Rect) -> (Rect, Rect, Rect, Rect) {
        let outer = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(2), // header
                Constraint::Length(4), // display
                Constraint::Min(5),    // keypad
                Constraint::Length(2), // footer
            ])
            .split(area);

        (outer[0], outer[1], outer[2], outer[3])
    }

    /// Render the full TUI view.
    pub fn render(&self, frame: &mut ratatui::Frame) {
        let (header_area, display_area, keypad_area, footer_area) =
            Self::compute_layout(frame.area());

        render_header(frame, header_area, self.session.state().phase());

        let recovery_in = if self.snapshot.is_error {
            self.session.time_until_recovery()
        } else {
            None
        };
        render_display(
            frame,
            display_area,
            &self.snapshot,
            recovery_in,
            &self.theme,
        );

        render_keypad(
            frame,
            keypad_area,
            self.snapshot.active_operator,
            self.pressed(),
            &self.theme,
        );

        render_footer(frame, footer_area);
    }

    /// Set up the terminal for TUI mode.
    pub fn setup_terminal() -> io::Result<Terminal<CrosstermBackend<io::Stdout>>> {
        terminal::enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        Terminal::new(backend)
    }

    /// Tear down the terminal, restoring normal mode.
    pub fn teardown_terminal(
        terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    ) -> io::Result<()> {
        terminal::disable_raw_mode()?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
        terminal.show_cursor()?;
        Ok(())
    }

    /// Run the TUI event loop.
    ///
    /// Sets up the terminal, loops (render, poll events, update), and tears
    /// down on exit, also when the loop fails.
    pub fn run(&mut self) -> io::Result<()> {
        let mut terminal = Self::setup_terminal()?;
        let result = self.event_loop(&mut terminal);
        Self::teardown_terminal(&mut terminal)?;
        result
    }

    fn event_loop(&mut self, terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) -> io::Result<()> {
        loop {
            terminal.draw(|frame| {
                self.render(frame);
            })?;

            if self.should_quit {
                return Ok(());
            }

            if event::poll(self.poll_timeout())? {
                match event::read()? {
                    Event::Key(key_event) => {
                        self.handle_key_action(map_key(key_event));
                    }
                    Event::Resize(w, h) => {
                        self.handle_message(TuiMessage::Resize {
                            width: w,
                            height: h,
                        });
                    }
                    _ => {}
                }
            }

            self.tick();
            self.update();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossbeam_channel::unbounded;
    use deskcalc_core::{ManualClock, Operator};
    use ratatui::backend::TestBackend;

    fn make_app() -> (TuiApp<ManualClock>, Sender<TuiMessage>, ManualClock) {
        let (tx, rx) = unbounded();
        let clock = ManualClock::new();
        let app = TuiApp::with_clock(EngineOptions::default(), clock.clone(), tx.clone(), rx);
        (app, tx, clock)
    }

    fn press_all(app: &mut TuiApp<ManualClock>, inputs: &[Input]) {
        for input in inputs {
            app.handle_key_action(KeyAction::Input(*input));
        }
        app.update();
    }

    #[test]
    fn initial_state() {
        let (app, _tx, _clock) = make_app();
        assert!(!app.should_quit);
        assert_eq!(app.snapshot, Snapshot::initial());
        assert!(app.pressed().is_none());
    }

    #[test]
    fn snapshots_arrive_through_channel() {
        let (mut app, _tx, _clock) = make_app();
        press_all(
            &mut app,
            &[
                Input::Digit(2),
                Input::Operator(Operator::Add),
                Input::Digit(3),
                Input::Equals,
            ],
        );
        assert_eq!(app.snapshot.primary_text, "5");
        assert_eq!(app.snapshot.secondary_text, "2 + 3 =");
    }

    #[test]
    fn active_operator_follows_session() {
        let (mut app, _tx, _clock) = make_app();
        press_all(&mut app, &[Input::Digit(9), Input::Operator(Operator::Multiply)]);
        assert_eq!(app.snapshot.active_operator, Some(Operator::Multiply));
    }

    #[test]
    fn error_recovers_on_tick() {
        let (mut app, tx, clock) = make_app();
        press_all(
            &mut app,
            &[
                Input::Digit(8),
                Input::Operator(Operator::Divide),
                Input::Digit(0),
                Input::Equals,
            ],
        );
        assert!(app.snapshot.is_error);

        clock.advance(Duration::from_millis(1999));
        tx.send(TuiMessage::Tick).unwrap();
        app.update();
        assert!(app.snapshot.is_error);

        clock.advance(Duration::from_millis(1));
        tx.send(TuiMessage::Tick).unwrap();
        app.update();
        app.update();
        assert!(!app.snapshot.is_error);
        assert_eq!(app.snapshot, Snapshot::initial());
        assert_eq!(app.session().recoveries(), 1);
    }

    #[test]
    fn poll_timeout_shrinks_near_recovery() {
        let (mut app, _tx, clock) = make_app();
        assert_eq!(app.poll_timeout(), TICK_RATE);

        press_all(
            &mut app,
            &[
                Input::Digit(1),
                Input::Operator(Operator::Divide),
                Input::Digit(0),
                Input::Equals,
            ],
        );
        clock.advance(Duration::from_millis(1900));
        app.tick();
        assert_eq!(app.poll_timeout(), Duration::from_millis(100));
    }

    #[test]
    fn key_flash_expires() {
        let (mut app, _tx, clock) = make_app();
        app.handle_key_action(KeyAction::Input(Input::Digit(4)));
        assert_eq!(app.pressed(), Some(Input::Digit(4)));
        assert_eq!(app.poll_timeout(), PRESS_FLASH);

        clock.advance(PRESS_FLASH);
        app.tick();
        assert!(app.pressed().is_none());
    }

    #[test]
    fn handle_quit() {
        let (mut app, tx, _clock) = make_app();
        tx.send(TuiMessage::Quit).unwrap();
        app.update();
        assert!(app.should_quit);
    }

    #[test]
    fn key_action_quit() {
        let (mut app, _tx, _clock) = make_app();
        app.handle_key_action(KeyAction::Quit);
        assert!(app.should_quit);
    }

    #[test]
    fn key_press_message() {
        let (mut app, tx, _clock) = make_app();
        tx.send(TuiMessage::KeyPress(KeyAction::Input(Input::Digit(6))))
            .unwrap();
        app.update();
        assert_eq!(app.snapshot.primary_text, "6");
    }

    #[test]
    fn resize_keeps_state() {
        let (mut app, _tx, _clock) = make_app();
        app.handle_key_action(KeyAction::Input(Input::Digit(4)));
        app.update();
        app.handle_message(TuiMessage::Resize {
            width: 120,
            height: 40,
        });
        assert_eq!(app.snapshot.primary_text, "4");
        assert!(!app.should_quit);
    }

    #[test]
    fn layout_computation() {
        let area = Rect::new(0, 0, 40, 24);
        let (header, display, keypad, footer) = TuiApp::<ManualClock>::compute_layout(area);

        assert_eq!(header.y, 0);
        assert_eq!(display.height, 4);
        assert_eq!(footer.y + footer.height, area.height);
        assert_eq!(
            header.height + display.height + keypad.height + footer.height,
            area.height
        );
    }

    #[test]
    fn render_shows_primary_text() {
        let (mut app, _tx, _clock) = make_app();
        press_all(
            &mut app,
            &[Input::Digit(1), Input::Digit(2), Input::Digit(3), Input::Digit(4)],
        );

        let backend = TestBackend::new(40, 24);
        let mut terminal = Terminal::new(backend).unwrap();
        let buf = terminal.draw(|frame| app.render(frame)).unwrap();

        let content: String = (0..buf.area.height)
            .flat_map(|y| (0..buf.area.width).map(move |x| (x, y)))
            .map(|pos| buf.buffer[pos].symbol().to_string())
            .collect();
        assert!(content.contains("1,234"));
    }
}

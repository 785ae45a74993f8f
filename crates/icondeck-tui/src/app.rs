//! Top-level application state and the main event loop.
//!
//! [`App::run`] sets up the terminal, drives the crossterm event loop, and
//! tears everything down cleanly on exit or panic. All input goes through
//! [`App::handle`], which only touches [`AppState`], so the whole interaction
//! model can be exercised without a terminal.

use crate::{
    commands::{execute_command, Command},
    event::{self, AppEvent, Direction, Keymap},
    theme::Theme,
    widgets::{
        command_bar::{CommandBar, CommandBarState},
        gallery::{Gallery, GalleryState},
        help::HelpPopup,
        preview_panel::{self, PreviewPanel},
        status_bar::StatusBar,
        text_input::{TextInput, TextInputState},
    },
};
use crossterm::{
    event::{self as ct_event, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use icondeck_core::{clipboard, config::Config, Catalog, ClipboardService, CopyOutcome};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Layout, Position, Rect},
    Frame, Terminal,
};
use std::{
    cell::Cell,
    io,
    sync::{mpsc, Arc},
    time::{Duration, Instant},
};

/// How long the "Copied!" confirmation stays up.
const COPIED_FOR: Duration = Duration::from_millis(1500);
const COLOR_FIELD_W: u16 = 28;

// ---------------------------------------------------------------------------
// Focus
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Gallery,
    Search,
    Color,
    /// Vim-style `:` command line is active.
    Command,
}

// ---------------------------------------------------------------------------
// AppState
// ---------------------------------------------------------------------------

pub struct AppState {
    pub catalog: Catalog,
    pub focus: Focus,
    /// Focus state before entering command mode, restored on exit.
    pub prev_focus: Focus,
    pub theme: Theme,
    pub config: Config,
    pub keymap: Keymap,
    pub show_help: bool,
    pub command_bar: CommandBarState,
    pub search: TextInputState,
    /// Free-text color field; always mirrors the catalog's color.
    pub color: TextInputState,
    pub gallery: GalleryState,
    pub quit: bool,
    clipboard: Arc<dyn ClipboardService>,
    pending_copy: Option<mpsc::Receiver<CopyOutcome>>,
    copied_at: Option<Instant>,
    /// Terminal area of the last frame, for mouse hit-testing.
    screen: Cell<Rect>,
}

impl AppState {
    /// Set the color from any surface and keep the text field in step.
    pub fn set_color(&mut self, color: impl Into<String>) {
        let color = color.into();
        self.color.set_text(color.clone());
        self.catalog.set_color(color);
    }

    /// Advance to the palette swatch after the current color, or the first
    /// swatch when the current color is not in the palette.
    pub fn cycle_palette(&mut self) {
        let palette = &self.config.ui.palette;
        if palette.is_empty() {
            return;
        }
        let current = &self.catalog.params().color;
        let next = palette
            .iter()
            .position(|c| c.eq_ignore_ascii_case(current))
            .map_or(0, |i| (i + 1) % palette.len());
        let color = palette[next].clone();
        self.set_color(color);
    }

    /// Start a best-effort copy of the current usage snippet. Returns at
    /// once; [`AppState::poll_copy`] picks up the outcome.
    pub fn copy(&mut self) {
        let snippet = self.catalog.usage();
        tracing::debug!(%snippet, "copy requested");
        self.copied_at = None;
        self.pending_copy = Some(clipboard::dispatch(Arc::clone(&self.clipboard), snippet));
    }

    /// Collect a finished copy, if any. Only success is shown; a failure
    /// leaves the UI exactly as it was.
    pub fn poll_copy(&mut self, now: Instant) {
        let Some(rx) = &self.pending_copy else {
            return;
        };
        match rx.try_recv() {
            Ok(outcome) => {
                self.pending_copy = None;
                if outcome.is_copied() {
                    self.copied_at = Some(now);
                }
            }
            Err(mpsc::TryRecvError::Empty) => {}
            Err(mpsc::TryRecvError::Disconnected) => self.pending_copy = None,
        }
    }

    /// Whether the copy confirmation should be showing at `now`.
    pub fn copied(&self, now: Instant) -> bool {
        self.copied_at
            .is_some_and(|at| now.saturating_duration_since(at) < COPIED_FOR)
    }

    fn set_focus(&mut self, focus: Focus) {
        if self.focus != focus {
            tracing::debug!(from = ?self.focus, to = ?focus, "focus");
            self.focus = focus;
        }
    }

    /// Step the gallery selection one tile in `dir`.
    fn step(&mut self, dir: Direction) {
        let columns = self.gallery.columns() as isize;
        let delta = match dir {
            Direction::Left => -1,
            Direction::Right => 1,
            Direction::Up => -columns,
            Direction::Down => columns,
        };
        self.catalog.select_offset(delta);
    }

    fn click(&mut self, column: u16, row: u16) {
        let screen = screen_layout(self.screen.get(), self.config.ui.gallery_pane_width_pct);
        let pos = Position::new(column, row);
        if screen.search.contains(pos) {
            self.set_focus(Focus::Search);
        } else if screen.color.contains(pos) {
            self.set_focus(Focus::Color);
        } else if preview_panel::copy_button(screen.preview).contains(pos) {
            self.copy();
        } else if let Some(index) = self.gallery.hit_test(column, row) {
            self.catalog.select_visible(index);
            self.set_focus(Focus::Gallery);
        }
    }

    fn handle_gallery(&mut self, event: AppEvent) {
        let step = i64::from(self.config.ui.size_step.max(1));
        match event {
            AppEvent::Char('?') => {
                tracing::debug!("help popup opened");
                self.show_help = true;
            }
            AppEvent::Char(':') => {
                tracing::debug!(prev_focus = ?self.focus, "entering command mode");
                self.prev_focus = self.focus;
                self.command_bar.clear();
                self.focus = Focus::Command;
            }
            AppEvent::QueryFocus => self.set_focus(Focus::Search),
            AppEvent::ColorFocus => self.set_focus(Focus::Color),
            AppEvent::SizeUp => self.catalog.step_size(step),
            AppEvent::SizeDown => self.catalog.step_size(-step),
            AppEvent::ToggleBackground => self.catalog.toggle_background(),
            AppEvent::CyclePalette => self.cycle_palette(),
            AppEvent::Copy => self.copy(),
            AppEvent::Nav(dir) => self.step(dir),
            AppEvent::PageUp => self.catalog.select_offset(-(self.gallery.page() as isize)),
            AppEvent::PageDown => self.catalog.select_offset(self.gallery.page() as isize),
            AppEvent::First => self.catalog.select_visible(0),
            AppEvent::Last => {
                let last = self.catalog.visible_count().saturating_sub(1);
                self.catalog.select_visible(last);
            }
            _ => {}
        }
    }

    fn handle_search(&mut self, event: AppEvent) {
        match event {
            AppEvent::Enter => self.set_focus(Focus::Gallery),
            // Up/Down keep working on the gallery while typing
            AppEvent::Nav(dir @ (Direction::Up | Direction::Down)) => self.step(dir),
            other => {
                if self.search.handle(&other) {
                    self.catalog.set_query(self.search.text());
                }
            }
        }
    }

    fn handle_color(&mut self, event: AppEvent) {
        match event {
            AppEvent::Enter => self.set_focus(Focus::Gallery),
            other => {
                if self.color.handle(&other) {
                    self.catalog.set_color(self.color.text());
                }
            }
        }
    }
}

// ---------------------------------------------------------------------------
// App
// ---------------------------------------------------------------------------

pub struct App {
    state: AppState,
}

impl App {
    pub fn new(
        catalog: Catalog,
        config: Config,
        theme: Theme,
        clipboard: Arc<dyn ClipboardService>,
    ) -> Self {
        let keymap = Keymap::from_config(&config.keybindings);
        let search = TextInputState::with_text(catalog.query());
        let color = TextInputState::with_text(catalog.params().color.as_str());

        let state = AppState {
            catalog,
            focus: Focus::Gallery,
            prev_focus: Focus::Gallery,
            theme,
            config,
            keymap,
            show_help: false,
            command_bar: CommandBarState::default(),
            search,
            color,
            gallery: GalleryState::default(),
            quit: false,
            clipboard,
            pending_copy: None,
            copied_at: None,
            screen: Cell::new(Rect::default()),
        };

        App { state }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Set up the terminal, run the event loop, and restore the terminal on exit.
    pub fn run(mut self) -> anyhow::Result<()> {
        install_panic_hook();

        enable_raw_mode()?;
        execute!(io::stdout(), EnterAlternateScreen, EnableMouseCapture)?;
        let backend = CrosstermBackend::new(io::stdout());
        let mut terminal = Terminal::new(backend)?;

        let result = self.event_loop(&mut terminal);

        // Always restore terminal, even if the loop returned an error
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), DisableMouseCapture, LeaveAlternateScreen);
        let _ = terminal.show_cursor();

        result
    }

    fn event_loop(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    ) -> anyhow::Result<()> {
        loop {
            self.state.poll_copy(Instant::now());
            {
                let s = &self.state;
                terminal.draw(|frame| draw(frame, s))?;
            }

            if self.state.quit {
                break;
            }

            if ct_event::poll(Duration::from_millis(16))? {
                match ct_event::read()? {
                    Event::Key(key) if key.kind == KeyEventKind::Press => {
                        let raw = Event::Key(key);
                        // Use insert-mode mapping when a text widget is focused
                        let app_event = if is_insert_mode(self.state.focus) {
                            event::to_app_event_insert(raw)
                        } else {
                            event::to_app_event(raw, &self.state.keymap)
                        };
                        if let Some(ev) = app_event {
                            tracing::debug!(focus = ?self.state.focus, event = ?ev, "key event");
                            self.handle(ev);
                        }
                    }
                    other => {
                        if let Some(ev) = event::to_app_event(other, &self.state.keymap) {
                            self.handle(ev);
                        }
                    }
                }
            }
        }
        Ok(())
    }

    pub fn handle(&mut self, event: AppEvent) {
        let s = &mut self.state;

        // Help popup intercepts all events; only close keys pass through.
        if s.show_help {
            match event {
                AppEvent::Char('?') | AppEvent::Escape | AppEvent::Quit => {
                    tracing::debug!("help popup closed");
                    s.show_help = false;
                }
                _ => {}
            }
            return;
        }

        // Command mode intercepts all events.
        if s.focus == Focus::Command {
            match event {
                AppEvent::Escape => {
                    tracing::debug!("command bar cancelled");
                    s.command_bar.clear();
                    s.focus = s.prev_focus;
                }
                AppEvent::Enter => {
                    let input = s.command_bar.input.text().to_string();
                    match Command::parse(&input) {
                        Ok(cmd) => {
                            tracing::debug!(command = ?cmd, "executing command");
                            s.command_bar.clear();
                            s.focus = s.prev_focus;
                            execute_command(s, cmd);
                        }
                        Err(msg) if msg.is_empty() => {
                            // Empty input, just close
                            s.command_bar.clear();
                            s.focus = s.prev_focus;
                        }
                        Err(msg) => {
                            // Show the error; bar stays open
                            s.command_bar.error = Some(msg);
                        }
                    }
                }
                AppEvent::Quit => s.quit = true,
                other => s.command_bar.handle(&other),
            }
            return;
        }

        match event {
            AppEvent::Quit => {
                tracing::debug!("quit");
                s.quit = true;
            }

            // Leave a text field
            AppEvent::Escape => s.set_focus(Focus::Gallery),

            // Tab-cycle focus: Gallery → Search → Color → Gallery
            AppEvent::FocusNext => {
                let next = match s.focus {
                    Focus::Gallery => Focus::Search,
                    Focus::Search => Focus::Color,
                    Focus::Color | Focus::Command => Focus::Gallery,
                };
                s.set_focus(next);
            }

            AppEvent::Click { column, row } => s.click(column, row),

            // Terminal resize is handled automatically by ratatui
            AppEvent::Resize(_, _) => {}

            other => match s.focus {
                Focus::Gallery => s.handle_gallery(other),
                Focus::Search => s.handle_search(other),
                Focus::Color => s.handle_color(other),
                Focus::Command => {} // handled above
            },
        }
    }
}

/// Returns true when the current focus is on a text-input widget, meaning
/// alphabetic keys should produce characters rather than trigger shortcuts.
fn is_insert_mode(focus: Focus) -> bool {
    matches!(focus, Focus::Search | Focus::Color | Focus::Command)
}

// ---------------------------------------------------------------------------
// Rendering
// ---------------------------------------------------------------------------

struct Screen {
    status: Rect,
    gallery: Rect,
    preview: Rect,
    search: Rect,
    color: Rect,
}

/// Vertical: 1-line status bar | gallery + preview | 3-line input row.
fn screen_layout(area: Rect, gallery_pct: u16) -> Screen {
    let [status, body, inputs] =
        Layout::vertical([Constraint::Length(1), Constraint::Fill(1), Constraint::Length(3)])
            .areas(area);
    let [gallery, preview] =
        Layout::horizontal([Constraint::Percentage(gallery_pct.min(100)), Constraint::Fill(1)])
            .areas(body);
    let [search, color] =
        Layout::horizontal([Constraint::Fill(1), Constraint::Length(COLOR_FIELD_W)]).areas(inputs);
    Screen { status, gallery, preview, search, color }
}

fn draw(frame: &mut Frame, state: &AppState) {
    let area = frame.area();
    state.screen.set(area);
    let screen = screen_layout(area, state.config.ui.gallery_pane_width_pct);
    let surface = state.theme.surface(state.catalog.params().background);

    frame.render_widget(StatusBar::new(&state.catalog, &state.theme), screen.status);
    frame.render_widget(
        Gallery::new(&state.catalog, &state.gallery, &state.theme, state.focus == Focus::Gallery),
        screen.gallery,
    );
    frame.render_widget(
        PreviewPanel::new(&state.catalog, &state.theme)
            .copy_key(state.keymap.copy)
            .copied(state.copied(Instant::now())),
        screen.preview,
    );

    let search_hint = format!("press {} to search icons", state.keymap.query_focus);
    let search = TextInput::new(&state.search, " Search ", state.focus == Focus::Search, &state.theme)
        .placeholder(&search_hint)
        .style(surface);
    let color = TextInput::new(&state.color, " Color ", state.focus == Focus::Color, &state.theme)
        .style(surface);
    let search_cursor = search.cursor_position(screen.search);
    let color_cursor = color.cursor_position(screen.color);
    frame.render_widget(search, screen.search);
    frame.render_widget(color, screen.color);

    if state.show_help {
        frame.render_widget(HelpPopup::new(&state.theme, &state.keymap), area);
    }

    match state.focus {
        // Command bar overlays the bottom row of the screen
        Focus::Command => {
            let cmd_area = Rect { y: area.bottom().saturating_sub(1), height: 1, ..area };
            frame.render_widget(CommandBar::new(&state.command_bar, &state.theme), cmd_area);
            let col = state.command_bar.cursor_col(cmd_area);
            frame.set_cursor_position((col, cmd_area.y));
        }
        Focus::Search => frame.set_cursor_position(search_cursor),
        Focus::Color => frame.set_cursor_position(color_cursor),
        Focus::Gallery => {}
    }
}

// ---------------------------------------------------------------------------
// Terminal helpers
// ---------------------------------------------------------------------------

fn install_panic_hook() {
    let original = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), DisableMouseCapture, LeaveAlternateScreen);
        original(info);
    }));
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use icondeck_core::{ClipboardError, DisplayParams, Registry};
    use pretty_assertions::assert_eq;
    use ratatui::backend::TestBackend;
    use std::sync::Mutex;

    #[derive(Default)]
    struct Recording(Mutex<Vec<String>>);

    impl ClipboardService for Recording {
        fn write_text(&self, text: &str) -> Result<(), ClipboardError> {
            self.0.lock().unwrap().push(text.to_string());
            Ok(())
        }
    }

    struct Denied;

    impl ClipboardService for Denied {
        fn write_text(&self, _: &str) -> Result<(), ClipboardError> {
            Err(ClipboardError::Unavailable("no display".into()))
        }
    }

    fn app_with(clipboard: Arc<dyn ClipboardService>) -> App {
        let registry = Arc::new(Registry::load(icondeck_assets::exports()));
        let catalog = Catalog::new(registry, DisplayParams::default());
        App::new(catalog, Config::defaults(), Theme::load_default(), clipboard)
    }

    fn app() -> App {
        app_with(Arc::new(Recording::default()))
    }

    fn type_str(app: &mut App, s: &str) {
        for c in s.chars() {
            app.handle(AppEvent::Char(c));
        }
    }

    fn render(app: &App) {
        let mut terminal = Terminal::new(TestBackend::new(120, 40)).unwrap();
        terminal.draw(|frame| draw(frame, app.state())).unwrap();
    }

    /// Wait for the clipboard worker to report back.
    fn settle(app: &mut App) {
        for _ in 0..400 {
            app.state.poll_copy(Instant::now());
            if app.state.pending_copy.is_none() {
                return;
            }
            std::thread::sleep(Duration::from_millis(5));
        }
        panic!("clipboard worker never reported");
    }

    #[test]
    fn starts_on_first_icon() {
        let app = app();
        assert_eq!(app.state().catalog.selection(), Some("Adinkrahene"));
        assert_eq!(app.state().focus, Focus::Gallery);
        assert_eq!(app.state().color.text(), "#111827");
    }

    #[test]
    fn typing_a_query_filters_and_reselects() {
        let mut app = app();
        app.handle(AppEvent::QueryFocus);
        type_str(&mut app, "arrow");
        let s = app.state();
        assert_eq!(s.catalog.query(), "arrow");
        assert_eq!(s.catalog.visible_count(), 2);
        assert_eq!(s.catalog.selection(), Some("ArrowLeft"));
    }

    #[test]
    fn shortcuts_are_text_while_searching() {
        let mut app = app();
        app.handle(AppEvent::QueryFocus);
        type_str(&mut app, "q");
        assert!(!app.state().quit);
        assert_eq!(app.state().catalog.query(), "q");
        app.handle(AppEvent::Escape);
        assert_eq!(app.state().focus, Focus::Gallery);
    }

    #[test]
    fn no_match_clears_selection() {
        let mut app = app();
        app.handle(AppEvent::QueryFocus);
        type_str(&mut app, "zzz");
        assert_eq!(app.state().catalog.selection(), None);
        assert_eq!(
            app.state().catalog.usage(),
            r##"<Icon size={32} color="#111827" />"##
        );
    }

    #[test]
    fn size_steps_and_clamps() {
        let mut app = app();
        app.handle(AppEvent::SizeUp);
        assert_eq!(app.state().catalog.params().size, 36);
        for _ in 0..10 {
            app.handle(AppEvent::SizeDown);
        }
        assert_eq!(app.state().catalog.params().size, 12);
    }

    #[test]
    fn palette_and_color_field_share_one_value() {
        let mut app = app();
        app.handle(AppEvent::CyclePalette);
        assert_eq!(app.state().catalog.params().color, "#DC2626");
        assert_eq!(app.state().color.text(), "#DC2626");

        app.handle(AppEvent::ColorFocus);
        for _ in 0..7 {
            app.handle(AppEvent::Backspace);
        }
        type_str(&mut app, "tomato");
        assert_eq!(app.state().catalog.params().color, "tomato");
        assert!(app.state().catalog.usage().contains(r#"color="tomato""#));
    }

    #[test]
    fn background_toggle_keeps_selection() {
        let mut app = app();
        app.handle(AppEvent::Nav(Direction::Right));
        app.handle(AppEvent::ToggleBackground);
        assert_eq!(app.state().catalog.selection(), Some("ArrowLeft"));
        assert_eq!(
            app.state().catalog.params().background,
            icondeck_core::Background::Dark
        );
    }

    #[test]
    fn command_bar_runs_commands() {
        let mut app = app();
        app.handle(AppEvent::Char(':'));
        assert_eq!(app.state().focus, Focus::Command);
        type_str(&mut app, "size 64");
        app.handle(AppEvent::Enter);
        assert_eq!(app.state().focus, Focus::Gallery);
        assert_eq!(app.state().catalog.params().size, 64);

        app.handle(AppEvent::Char(':'));
        type_str(&mut app, "bg dark");
        app.handle(AppEvent::Enter);
        assert_eq!(
            app.state().catalog.params().background,
            icondeck_core::Background::Dark
        );
    }

    #[test]
    fn bad_command_keeps_bar_open() {
        let mut app = app();
        app.handle(AppEvent::Char(':'));
        type_str(&mut app, "size 1000");
        app.handle(AppEvent::Enter);
        assert_eq!(app.state().focus, Focus::Command);
        assert!(app.state().command_bar.error.is_some());
        assert_eq!(app.state().catalog.params().size, 32);
    }

    #[test]
    fn clear_command_resets_query() {
        let mut app = app();
        app.handle(AppEvent::QueryFocus);
        type_str(&mut app, "arrow");
        app.handle(AppEvent::Escape);
        app.handle(AppEvent::Char(':'));
        type_str(&mut app, "clear");
        app.handle(AppEvent::Enter);
        assert_eq!(app.state().catalog.query(), "");
        assert_eq!(app.state().search.text(), "");
        assert_eq!(app.state().catalog.visible_count(), 32);
        assert_eq!(app.state().catalog.selection(), Some("ArrowLeft"));
    }

    #[test]
    fn copy_shows_confirmation() {
        let clipboard = Arc::new(Recording::default());
        let mut app = app_with(clipboard.clone());
        app.handle(AppEvent::Copy);
        settle(&mut app);
        assert!(app.state().copied(Instant::now()));
        assert_eq!(
            clipboard.0.lock().unwrap().as_slice(),
            [r##"<Adinkrahene size={32} color="#111827" />"##]
        );
    }

    #[test]
    fn copy_failure_is_silent() {
        let mut app = app_with(Arc::new(Denied));
        let before = app.state().catalog.usage();
        app.handle(AppEvent::Copy);
        settle(&mut app);
        assert!(!app.state().copied(Instant::now()));
        assert_eq!(app.state().catalog.usage(), before);
        assert!(!app.state().quit);
    }

    #[test]
    fn confirmation_expires() {
        let mut app = app();
        app.handle(AppEvent::Copy);
        settle(&mut app);
        assert!(!app.state().copied(Instant::now() + COPIED_FOR));
    }

    #[test]
    fn clicking_a_tile_selects_it() {
        let mut app = app();
        render(&app);
        // second tile of the first row
        app.handle(AppEvent::Click { column: 20, row: 3 });
        assert_eq!(app.state().catalog.selection(), Some("ArrowLeft"));
    }

    #[test]
    fn clicking_fields_and_copy_button() {
        let mut app = app();
        render(&app);
        let screen = screen_layout(Rect::new(0, 0, 120, 40), 60);

        app.handle(AppEvent::Click { column: screen.search.x + 2, row: screen.search.y + 1 });
        assert_eq!(app.state().focus, Focus::Search);
        app.handle(AppEvent::Click { column: screen.color.x + 2, row: screen.color.y + 1 });
        assert_eq!(app.state().focus, Focus::Color);

        let button = preview_panel::copy_button(screen.preview);
        app.handle(AppEvent::Click { column: button.x, row: button.y });
        settle(&mut app);
        assert!(app.state().copied(Instant::now()));
    }

    #[test]
    fn arrow_keys_move_through_grid() {
        let mut app = app();
        render(&app);
        let columns = app.state().gallery.columns();
        app.handle(AppEvent::Nav(Direction::Down));
        assert_eq!(app.state().catalog.selected_visible_index(), Some(columns));
        app.handle(AppEvent::Last);
        assert_eq!(app.state().catalog.selection(), Some("Warning"));
        app.handle(AppEvent::First);
        assert_eq!(app.state().catalog.selection(), Some("Adinkrahene"));
    }

    #[test]
    fn help_popup_swallows_keys() {
        let mut app = app();
        app.handle(AppEvent::Char('?'));
        assert!(app.state().show_help);
        app.handle(AppEvent::SizeUp);
        assert_eq!(app.state().catalog.params().size, 32);
        app.handle(AppEvent::Escape);
        assert!(!app.state().show_help);
    }
}

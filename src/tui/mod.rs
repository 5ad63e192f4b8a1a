// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Thalassa-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Thalassa and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Terminal UI.
//!
//! The interactive shell (ratatui + crossterm): translates terminal mouse
//! events into canvas gestures, paints the render projection onto a braille
//! canvas, and hosts the modal prompt overlays for labels, menus, colors,
//! and thicknesses.

use std::error::Error;
use std::io;
use std::time::{Duration, Instant};

use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        MouseButton, MouseEvent, MouseEventKind,
    },
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    prelude::*,
    widgets::{
        canvas::{Canvas, Circle, Context, Line as CanvasLine},
        Block, Borders, Clear, List, ListItem, ListState, Paragraph,
    },
};

use crate::interact::{Editor, Gesture, MenuChoice, Mode, PromptReply, PromptRequest};
use crate::model::{PaletteColor, THICKNESS_CHOICES};
use crate::render::{project, Primitive};
use crate::store::GraphFile;

const FOOTER_LABEL_COLOR: Color = Color::Gray;
const FOOTER_KEY_COLOR: Color = Color::Cyan;
const FOOTER_MODE_COLOR: Color = Color::LightGreen;
const OVERLAY_BORDER_COLOR: Color = Color::Cyan;

const TOAST_TTL: Duration = Duration::from_secs(3);
const POLL_INTERVAL: Duration = Duration::from_millis(250);

/// A held, unmoved press fires a long-press after this much time while the
/// press/release stream continues independently.
const LONG_PRESS_DURATION: Duration = Duration::from_millis(500);
/// Pointer travel (canvas units) beyond which a press stops counting as held.
const LONG_PRESS_SLOP: f32 = 10.0;

// Canvas units per terminal cell. Cells are roughly twice as tall as they
// are wide, so a node (radius 40) covers about 8 columns by 4 rows.
const UNITS_PER_COL: f32 = 10.0;
const UNITS_PER_ROW: f32 = 20.0;

/// Runs the interactive diagram editor against the given file.
pub fn run(file: GraphFile) -> Result<(), Box<dyn Error>> {
    let mut terminal = TerminalSession::new()?;
    let mut app = App::new(file);

    while !app.should_quit {
        app.tick(Instant::now());
        terminal.draw(|frame| draw(frame, &mut app))?;

        if event::poll(POLL_INTERVAL)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => app.handle_key(key),
                Event::Mouse(mouse) => app.handle_mouse(mouse),
                _ => {}
            }
        }
    }

    Ok(())
}

#[derive(Debug, Clone)]
struct Toast {
    message: String,
    expires_at: Instant,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SelectKind {
    Menu,
    Color,
    Thickness,
}

/// The widget-side state of the outstanding prompt.
#[derive(Debug)]
enum PromptOverlay {
    Text {
        title: &'static str,
        input: String,
    },
    Select {
        title: &'static str,
        kind: SelectKind,
        options: Vec<String>,
        state: ListState,
    },
}

/// One physical press being watched for the long-press threshold.
#[derive(Debug, Clone, Copy)]
struct PressTracker {
    x: f32,
    y: f32,
    started_at: Instant,
    moved: bool,
    long_press_fired: bool,
}

struct App {
    editor: Editor,
    file: GraphFile,
    prompt: Option<PromptOverlay>,
    toast: Option<Toast>,
    press: Option<PressTracker>,
    canvas_area: Rect,
    should_quit: bool,
}

impl App {
    fn new(file: GraphFile) -> Self {
        Self {
            editor: Editor::new(),
            file,
            prompt: None,
            toast: None,
            press: None,
            canvas_area: Rect::new(0, 0, 80, 24),
            should_quit: false,
        }
    }

    /// Fires time-based work: long-press synthesis and toast expiry.
    fn tick(&mut self, now: Instant) {
        if self
            .toast
            .as_ref()
            .is_some_and(|toast| now >= toast.expires_at)
        {
            self.toast = None;
        }

        let Some(tracker) = &mut self.press else {
            return;
        };
        if tracker.long_press_fired || tracker.moved {
            return;
        }
        if now.duration_since(tracker.started_at) >= LONG_PRESS_DURATION {
            tracker.long_press_fired = true;
            let (x, y) = (tracker.x, tracker.y);
            self.dispatch(Gesture::LongPress { x, y });
        }
    }

    fn handle_key(&mut self, key: KeyEvent) {
        if self.prompt.is_some() {
            self.handle_prompt_key(key);
            return;
        }

        match key.code {
            KeyCode::Char('q') => self.should_quit = true,
            KeyCode::Char('1') => self.editor.set_mode(Mode::AddNode),
            KeyCode::Char('2') => self.editor.set_mode(Mode::AddConnection),
            KeyCode::Char('3') => self.editor.set_mode(Mode::Modify),
            KeyCode::Char('s') => self.save(),
            KeyCode::Char('o') => self.load(),
            KeyCode::Char('r') => {
                self.editor.clear_edges();
                self.set_toast("Connections cleared".to_owned());
            }
            _ => {}
        }
    }

    fn handle_mouse(&mut self, mouse: MouseEvent) {
        // The overlay is modal; the canvas sees no pointer input under it.
        if self.prompt.is_some() {
            return;
        }

        let (x, y) = self.canvas_position(mouse.column, mouse.row);
        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                self.press = Some(PressTracker {
                    x,
                    y,
                    started_at: Instant::now(),
                    moved: false,
                    long_press_fired: false,
                });
                self.dispatch(Gesture::Press { x, y });
            }
            MouseEventKind::Drag(MouseButton::Left) => {
                if let Some(tracker) = &mut self.press {
                    if (x - tracker.x).hypot(y - tracker.y) > LONG_PRESS_SLOP {
                        tracker.moved = true;
                    }
                }
                self.dispatch(Gesture::Move { x, y });
            }
            MouseEventKind::Up(MouseButton::Left) => {
                self.press = None;
                self.dispatch(Gesture::Release { x, y });
            }
            _ => {}
        }
    }

    fn dispatch(&mut self, gesture: Gesture) {
        if let Some(request) = self.editor.handle_gesture(gesture) {
            self.press = None;
            self.open_prompt(request);
        }
    }

    fn canvas_position(&self, column: u16, row: u16) -> (f32, f32) {
        let col = f32::from(column.saturating_sub(self.canvas_area.x));
        let row = f32::from(row.saturating_sub(self.canvas_area.y));
        (
            (col + 0.5) * UNITS_PER_COL,
            (row + 0.5) * UNITS_PER_ROW,
        )
    }

    fn open_prompt(&mut self, request: PromptRequest) {
        let select_overlay = |title, kind, options: Vec<String>, selected: usize| {
            let mut state = ListState::default();
            state.select(Some(selected));
            PromptOverlay::Select {
                title,
                kind,
                options,
                state,
            }
        };

        self.prompt = Some(match request {
            PromptRequest::Text { title, initial } => PromptOverlay::Text {
                title,
                input: initial,
            },
            PromptRequest::Menu { title } => select_overlay(
                title,
                SelectKind::Menu,
                vec!["Delete".to_owned(), "Modify".to_owned()],
                0,
            ),
            PromptRequest::Color { title, current } => select_overlay(
                title,
                SelectKind::Color,
                PaletteColor::ALL
                    .iter()
                    .map(|color| color.name().to_owned())
                    .collect(),
                PaletteColor::ALL
                    .iter()
                    .position(|color| *color == current)
                    .unwrap_or(0),
            ),
            PromptRequest::Thickness { title, current } => select_overlay(
                title,
                SelectKind::Thickness,
                THICKNESS_CHOICES
                    .iter()
                    .map(|choice| format!("{choice:.0}"))
                    .collect(),
                THICKNESS_CHOICES
                    .iter()
                    .position(|choice| (choice - current).abs() < f32::EPSILON)
                    .unwrap_or(0),
            ),
        });
    }

    fn handle_prompt_key(&mut self, key: KeyEvent) {
        if key.code == KeyCode::Esc {
            self.editor.cancel_prompt();
            self.prompt = None;
            return;
        }

        let Some(overlay) = &mut self.prompt else {
            return;
        };

        match overlay {
            PromptOverlay::Text { input, .. } => match key.code {
                KeyCode::Enter => {
                    let label = input.clone();
                    self.submit(PromptReply::Text(label));
                }
                KeyCode::Backspace => {
                    input.pop();
                }
                KeyCode::Char(ch) => input.push(ch),
                _ => {}
            },
            PromptOverlay::Select {
                kind,
                options,
                state,
                ..
            } => match key.code {
                KeyCode::Up | KeyCode::Char('k') => {
                    let selected = state.selected().unwrap_or(0);
                    state.select(Some(selected.saturating_sub(1)));
                }
                KeyCode::Down | KeyCode::Char('j') => {
                    let selected = state.selected().unwrap_or(0);
                    state.select(Some((selected + 1).min(options.len() - 1)));
                }
                KeyCode::Enter => {
                    let selected = state.selected().unwrap_or(0);
                    let reply = match kind {
                        SelectKind::Menu => PromptReply::Menu(if selected == 0 {
                            MenuChoice::Delete
                        } else {
                            MenuChoice::Modify
                        }),
                        SelectKind::Color => PromptReply::Color(
                            PaletteColor::ALL[selected.min(PaletteColor::ALL.len() - 1)],
                        ),
                        SelectKind::Thickness => PromptReply::Thickness(
                            THICKNESS_CHOICES[selected.min(THICKNESS_CHOICES.len() - 1)],
                        ),
                    };
                    self.submit(reply);
                }
                _ => {}
            },
        }
    }

    fn submit(&mut self, reply: PromptReply) {
        self.prompt = None;
        if let Some(next) = self.editor.resolve_prompt(reply) {
            self.open_prompt(next);
        }
    }

    fn save(&mut self) {
        match self.file.save(self.editor.graph()) {
            Ok(()) => self.set_toast(format!("Saved {}", self.file.path().display())),
            Err(err) => self.set_toast(format!("Save failed: {err}")),
        }
    }

    fn load(&mut self) {
        // On failure the current diagram stays untouched.
        match self.file.load() {
            Ok(graph) => {
                self.editor.replace_graph(graph);
                self.prompt = None;
                self.set_toast(format!("Loaded {}", self.file.path().display()));
            }
            Err(err) => self.set_toast(format!("Load failed: {err}")),
        }
    }

    fn set_toast(&mut self, message: String) {
        self.toast = Some(Toast {
            message,
            expires_at: Instant::now() + TOAST_TTL,
        });
    }
}

fn draw(frame: &mut Frame<'_>, app: &mut App) {
    let area = frame.area();

    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(1)])
        .split(area);
    let canvas_area = layout[0];
    let footer_area = layout[1];

    app.canvas_area = canvas_area;

    let width_units = f64::from(canvas_area.width) * f64::from(UNITS_PER_COL);
    let height_units = f64::from(canvas_area.height) * f64::from(UNITS_PER_ROW);
    let primitives = project(app.editor.graph(), app.editor.pending_edge());

    let canvas = Canvas::default()
        .x_bounds([0.0, width_units])
        .y_bounds([0.0, height_units])
        .paint(|ctx| paint_primitives(ctx, &primitives, height_units));
    frame.render_widget(canvas, canvas_area);

    frame.render_widget(footer_line(app.editor.mode()), footer_area);

    if let Some(toast) = &app.toast {
        draw_toast(frame, canvas_area, &toast.message);
    }

    if let Some(overlay) = &mut app.prompt {
        draw_prompt(frame, canvas_area, overlay);
    }
}

fn paint_primitives(ctx: &mut Context<'_>, primitives: &[Primitive], height_units: f64) {
    // Model y grows downward; the canvas y axis grows upward.
    let flip = |y: f32| height_units - f64::from(y);

    for primitive in primitives {
        match primitive {
            Primitive::Line {
                x1,
                y1,
                x2,
                y2,
                color,
                ..
            } => {
                ctx.draw(&CanvasLine {
                    x1: f64::from(*x1),
                    y1: flip(*y1),
                    x2: f64::from(*x2),
                    y2: flip(*y2),
                    color: terminal_color(*color),
                });
            }
            Primitive::Circle {
                x,
                y,
                radius,
                color,
            } => {
                ctx.draw(&Circle {
                    x: f64::from(*x),
                    y: flip(*y),
                    radius: f64::from(*radius),
                    color: terminal_color(*color),
                });
            }
            Primitive::Text { x, y, text, color } => {
                if !text.is_empty() {
                    ctx.print(
                        f64::from(*x),
                        flip(*y),
                        Line::styled(
                            text.clone(),
                            Style::default().fg(terminal_color(*color)),
                        ),
                    );
                }
            }
        }
    }
}

fn terminal_color(color: PaletteColor) -> Color {
    match color {
        PaletteColor::Red => Color::Red,
        PaletteColor::Green => Color::Green,
        PaletteColor::Blue => Color::Blue,
        PaletteColor::Orange => Color::Yellow,
        PaletteColor::Cyan => Color::Cyan,
        PaletteColor::Magenta => Color::Magenta,
        // Black ink would vanish on dark terminals; use the bright
        // foreground instead.
        PaletteColor::Black => Color::White,
    }
}

fn footer_line(mode: Mode) -> Paragraph<'static> {
    let mut spans = Vec::new();
    for (key, label, entry_mode) in [
        ("1", "add node", Mode::AddNode),
        ("2", "connect", Mode::AddConnection),
        ("3", "modify", Mode::Modify),
    ] {
        let label_style = if entry_mode == mode {
            Style::default().fg(FOOTER_MODE_COLOR).bold()
        } else {
            Style::default().fg(FOOTER_LABEL_COLOR)
        };
        spans.push(Span::styled(
            format!("[{key}] "),
            Style::default().fg(FOOTER_KEY_COLOR),
        ));
        spans.push(Span::styled(format!("{label}  "), label_style));
    }
    for (key, label) in [("s", "save"), ("o", "open"), ("r", "reset edges"), ("q", "quit")] {
        spans.push(Span::styled(
            format!("[{key}] "),
            Style::default().fg(FOOTER_KEY_COLOR),
        ));
        spans.push(Span::styled(
            format!("{label}  "),
            Style::default().fg(FOOTER_LABEL_COLOR),
        ));
    }
    Paragraph::new(Line::from(spans))
}

fn draw_toast(frame: &mut Frame<'_>, area: Rect, message: &str) {
    let width = (message.chars().count() as u16 + 2).min(area.width);
    let toast_area = Rect::new(
        area.x + area.width.saturating_sub(width),
        area.y + area.height.saturating_sub(1),
        width,
        1,
    );
    frame.render_widget(Clear, toast_area);
    frame.render_widget(
        Paragraph::new(format!(" {message} ")).style(Style::default().reversed()),
        toast_area,
    );
}

fn draw_prompt(frame: &mut Frame<'_>, area: Rect, overlay: &mut PromptOverlay) {
    match overlay {
        PromptOverlay::Text { title, input } => {
            let popup = centered_rect(area, 40, 3);
            frame.render_widget(Clear, popup);
            let block = Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(OVERLAY_BORDER_COLOR))
                .title(*title);
            frame.render_widget(
                Paragraph::new(format!("{input}█")).block(block),
                popup,
            );
        }
        PromptOverlay::Select {
            title,
            options,
            state,
            ..
        } => {
            let height = options.len() as u16 + 2;
            let popup = centered_rect(area, 30, height);
            frame.render_widget(Clear, popup);
            let block = Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(OVERLAY_BORDER_COLOR))
                .title(*title);
            let items: Vec<ListItem<'_>> =
                options.iter().map(|option| ListItem::new(option.as_str())).collect();
            let list = List::new(items)
                .block(block)
                .highlight_style(Style::default().reversed().bold())
                .highlight_symbol("> ");
            frame.render_stateful_widget(list, popup, state);
        }
    }
}

fn centered_rect(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect::new(
        area.x + (area.width - width) / 2,
        area.y + (area.height - height) / 2,
        width,
        height,
    )
}

struct TerminalSession {
    terminal: Terminal<CrosstermBackend<io::Stdout>>,
}

impl TerminalSession {
    fn new() -> Result<Self, Box<dyn Error>> {
        enable_raw_mode()?;

        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture).map_err(|err| {
            teardown_terminal();
            err
        })?;

        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend).map_err(|err| {
            teardown_terminal();
            err
        })?;
        terminal.clear().map_err(|err| {
            teardown_terminal();
            err
        })?;

        Ok(Self { terminal })
    }

    fn draw(&mut self, draw_fn: impl FnOnce(&mut Frame<'_>)) -> io::Result<()> {
        self.terminal.draw(draw_fn)?;
        Ok(())
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        let _ = self.terminal.show_cursor();
        teardown_terminal();
    }
}

fn teardown_terminal() {
    let _ = disable_raw_mode();
    let mut stdout = io::stdout();
    let _ = execute!(stdout, DisableMouseCapture, LeaveAlternateScreen);
}

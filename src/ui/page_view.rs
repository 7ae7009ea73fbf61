use crate::advice::{AdviceFetcher, AdviceOutcome};
use crate::calc::validate::{validate_form, SignupForm};
use crate::dashboard::StatusDashboard;
use crate::data::{PageSettings, Profile};
use crate::ui::theme::Theme;
use anyhow::Result;
use chrono::{DateTime, Local};
use crossterm::event::{
    self, Event as CEvent, KeyCode, KeyEventKind, KeyModifiers, MouseButton, MouseEvent,
    MouseEventKind,
};
use log::{debug, info};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Alignment, Constraint, Direction, Layout, Position, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Clear, Paragraph, Row, Table, Wrap},
    Frame, Terminal,
};
use std::io::Stdout;
use std::time::{Duration as StdDuration, Instant};

const SUBMIT_LABEL: &str = "[ Submit ]";
const THEME_LABEL: &str = "[ Theme ]";

#[derive(PartialEq, Debug, Clone, Copy, Default)]
enum Focus {
    #[default]
    Nickname,
    Genre,
    Submit,
    Theme,
}

impl Focus {
    fn next(self) -> Self {
        match self {
            Focus::Nickname => Focus::Genre,
            Focus::Genre => Focus::Submit,
            Focus::Submit => Focus::Theme,
            Focus::Theme => Focus::Nickname,
        }
    }

    fn prev(self) -> Self {
        match self {
            Focus::Nickname => Focus::Theme,
            Focus::Genre => Focus::Nickname,
            Focus::Submit => Focus::Genre,
            Focus::Theme => Focus::Submit,
        }
    }
}

/// Screen areas recorded by the last render, used for mouse hit-testing.
#[derive(Debug, Default, Clone, Copy)]
struct Regions {
    nickname: Rect,
    genre: Rect,
    submit: Rect,
    theme: Rect,
    skills: Rect,
}

pub struct App {
    profile: Profile,
    form: SignupForm,
    focus: Focus,
    dashboard: StatusDashboard,
    /// Dark presentation mode. Never persisted.
    dark: bool,
    advice: AdviceFetcher,
    /// Whether the last About paragraph carries the advice emphasis style.
    advice_emphasis: bool,
    pointer_in_skills: bool,
    submitted_at: Option<DateTime<Local>>,
    regions: Regions,
}

impl App {
    /// Builds the page. The first status is rendered here, before the timer
    /// has had a chance to tick.
    pub fn new(profile: Profile, settings: &PageSettings, now: Instant) -> Self {
        let mut dashboard = StatusDashboard::new();
        dashboard.render_now();
        dashboard.start(now);
        App {
            profile,
            form: SignupForm::default(),
            focus: Focus::default(),
            dashboard,
            dark: settings.start_dark,
            advice: AdviceFetcher::new(),
            advice_emphasis: false,
            pointer_in_skills: false,
            submitted_at: None,
            regions: Regions::default(),
        }
    }

    pub fn fetch_advice(&mut self) {
        self.advice.start();
    }

    #[cfg(test)]
    fn fetch_advice_with<F>(&mut self, source: F) -> bool
    where
        F: FnOnce() -> Result<String> + Send + 'static,
    {
        self.advice.start_with(source)
    }

    /// Advances timers and picks up a finished advice fetch.
    pub fn tick(&mut self, now: Instant) {
        self.dashboard.poll(now);
        if let Some(outcome) = self.advice.poll() {
            self.apply_advice(&outcome);
        }
    }

    /// Writes the fetch result into the last About paragraph, if there is one.
    fn apply_advice(&mut self, outcome: &AdviceOutcome) {
        if let Some(last) = self.profile.about.last_mut() {
            *last = outcome.text().to_string();
            self.advice_emphasis = outcome.is_emphasized();
        }
    }

    fn toggle_theme(&mut self) {
        self.dark = !self.dark;
        debug!("dark mode {}", if self.dark { "on" } else { "off" });
    }

    fn toggle_status_panel(&mut self, now: Instant) {
        if !self.dashboard.is_mounted() {
            self.dashboard.mount(now);
            // Still paused while the pointer sits on the skills table.
            if self.pointer_in_skills {
                self.dashboard.stop();
            }
        } else {
            self.dashboard.unmount();
        }
    }

    fn submit(&mut self) {
        if validate_form(&mut self.form) {
            self.submitted_at = Some(Local::now());
        }
    }

    fn modal_open(&self) -> bool {
        self.form.acknowledgment.is_some()
    }

    /// Returns true if the app should quit.
    pub fn handle_key(&mut self, code: KeyCode, modifiers: KeyModifiers, now: Instant) -> bool {
        if code == KeyCode::Char('c') && modifiers.contains(KeyModifiers::CONTROL) {
            return true;
        }

        // The acknowledgment blocks the page until dismissed.
        if self.modal_open() {
            if matches!(code, KeyCode::Enter | KeyCode::Esc | KeyCode::Char(' ')) {
                self.form.acknowledgment = None;
            }
            return false;
        }

        match code {
            KeyCode::Tab => {
                self.focus = self.focus.next();
                return false;
            }
            KeyCode::BackTab => {
                self.focus = self.focus.prev();
                return false;
            }
            _ => {}
        }

        if self.focus == Focus::Nickname {
            match code {
                KeyCode::Char(c)
                    if !modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
                {
                    self.form.nickname.push(c)
                }
                KeyCode::Backspace => {
                    self.form.nickname.pop();
                }
                KeyCode::Enter => self.submit(),
                KeyCode::Esc => self.focus = Focus::Submit,
                _ => {}
            }
            return false;
        }

        match code {
            KeyCode::Char('q') => return true,
            KeyCode::Char('t') => self.toggle_theme(),
            KeyCode::Char('r') => {
                self.advice.start();
            }
            KeyCode::Char('s') => self.toggle_status_panel(now),
            KeyCode::Left | KeyCode::Up if self.focus == Focus::Genre => self.form.prev_genre(),
            KeyCode::Right | KeyCode::Down if self.focus == Focus::Genre => {
                self.form.next_genre()
            }
            KeyCode::Enter => match self.focus {
                Focus::Submit => self.submit(),
                Focus::Theme => self.toggle_theme(),
                Focus::Genre => self.focus = Focus::Submit,
                Focus::Nickname => {}
            },
            _ => {}
        }
        false
    }

    pub fn handle_mouse(&mut self, mouse: MouseEvent, now: Instant) {
        let pos = Position::new(mouse.column, mouse.row);
        match mouse.kind {
            MouseEventKind::Moved | MouseEventKind::Drag(_) => self.hover(pos, now),
            MouseEventKind::Down(MouseButton::Left) => {
                self.hover(pos, now);
                if !self.modal_open() {
                    self.click(pos);
                }
            }
            _ => {}
        }
    }

    /// Pauses the status timer while the pointer is over the skills table.
    /// Only the enter and leave edges act; motion inside does nothing.
    fn hover(&mut self, pos: Position, now: Instant) {
        let inside = self.regions.skills.contains(pos);
        if inside == self.pointer_in_skills {
            return;
        }
        self.pointer_in_skills = inside;
        if inside {
            info!("pointer entered skills table, pausing status");
            self.dashboard.stop();
        } else {
            info!("pointer left skills table, resuming status");
            self.dashboard.restart(now);
        }
    }

    fn click(&mut self, pos: Position) {
        if self.regions.theme.contains(pos) {
            self.focus = Focus::Theme;
            self.toggle_theme();
        } else if self.regions.submit.contains(pos) {
            self.focus = Focus::Submit;
            self.submit();
        } else if self.regions.nickname.contains(pos) {
            self.focus = Focus::Nickname;
        } else if self.regions.genre.contains(pos) {
            self.focus = Focus::Genre;
            self.form.next_genre();
        }
    }

    pub fn render(&mut self, f: &mut Frame) {
        let theme = Theme::for_mode(self.dark);
        let area = f.area();
        f.render_widget(Block::default().style(theme.base()), area);

        let status_height = if self.dashboard.is_mounted() { 3 } else { 0 };
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),             // header + theme button
                Constraint::Length(status_height), // status panel
                Constraint::Min(8),                // about + skills
                Constraint::Length(9),             // sign-up form
                Constraint::Length(1),             // key hints
            ])
            .split(area);

        self.render_header(f, chunks[0], &theme);
        if self.dashboard.is_mounted() {
            self.render_status(f, chunks[1], &theme);
        }
        let body = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
            .split(chunks[2]);
        self.render_about(f, body[0], &theme);
        self.render_skills(f, body[1], &theme);
        self.render_form(f, chunks[3], &theme);
        self.render_hints(f, chunks[4], &theme);

        if self.modal_open() {
            self.render_acknowledgment(f, area, &theme);
        }
    }

    fn render_header(&mut self, f: &mut Frame, area: Rect, theme: &Theme) {
        let block = Block::default()
            .borders(Borders::BOTTOM)
            .border_style(theme.border_style(false));
        let inner = block.inner(area);
        f.render_widget(block, area);

        let button_width = THEME_LABEL.chars().count() as u16;
        let cols = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Min(10), Constraint::Length(button_width)])
            .split(inner);

        let title = Line::from(vec![
            Span::styled(
                self.profile.name.clone(),
                Style::default()
                    .fg(theme.accent)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw("  "),
            Span::styled(self.profile.tagline.clone(), Style::default().fg(theme.muted)),
        ]);
        f.render_widget(Paragraph::new(title), cols[0]);

        let button_area = Rect { height: 1, ..cols[1] };
        let button = Paragraph::new(THEME_LABEL)
            .style(theme.button(self.focus == Focus::Theme, false));
        f.render_widget(button, button_area);
        self.regions.theme = button_area;
    }

    fn render_status(&self, f: &mut Frame, area: Rect, theme: &Theme) {
        let line = match self.dashboard.current() {
            Some(record) => Line::from(Span::styled(
                record.display_text(),
                Style::default().fg(record.color).add_modifier(Modifier::BOLD),
            )),
            None => Line::from(""),
        };
        let title = if self.dashboard.is_running() {
            " Status "
        } else {
            " Status (paused) "
        };
        let p = Paragraph::new(line).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(theme.border_style(false))
                .title(title),
        );
        f.render_widget(p, area);
    }

    fn render_about(&self, f: &mut Frame, area: Rect, theme: &Theme) {
        let count = self.profile.about.len();
        let mut lines: Vec<Line> = Vec::new();
        for (i, paragraph) in self.profile.about.iter().enumerate() {
            let style = if i + 1 == count && self.advice_emphasis {
                theme.emphasis()
            } else {
                Style::default().fg(theme.fg)
            };
            lines.push(Line::from(Span::styled(paragraph.clone(), style)));
            if i + 1 < count {
                lines.push(Line::from(""));
            }
        }
        let p = Paragraph::new(lines).wrap(Wrap { trim: true }).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(theme.border_style(false))
                .title(if self.advice.is_pending() {
                    " About (fetching advice...) "
                } else {
                    " About "
                }),
        );
        f.render_widget(p, area);
    }

    fn render_skills(&mut self, f: &mut Frame, area: Rect, theme: &Theme) {
        let header = Row::new(vec![
            Cell::from("Skill").style(Style::default().add_modifier(Modifier::BOLD)),
            Cell::from("Level").style(Style::default().add_modifier(Modifier::BOLD)),
        ]);
        let rows: Vec<Row> = self
            .profile
            .skills
            .iter()
            .map(|s| Row::new(vec![Cell::from(s.name.clone()), Cell::from(s.level.clone())]))
            .collect();
        let table = Table::new(rows, [Constraint::Min(16), Constraint::Length(14)])
            .header(header)
            .style(Style::default().fg(theme.fg))
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(theme.border_style(self.pointer_in_skills))
                    .title(" Skills "),
            );
        f.render_widget(table, area);
        self.regions.skills = area;
    }

    fn render_form(&mut self, f: &mut Frame, area: Rect, theme: &Theme) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(theme.border_style(false))
            .title(" Team up ");
        let inner = block.inner(area);
        f.render_widget(block, area);

        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1), // nickname
                Constraint::Length(1),
                Constraint::Length(1), // genre
                Constraint::Length(1),
                Constraint::Length(1), // submit
                Constraint::Length(1),
                Constraint::Min(1), // error
            ])
            .split(inner);

        let label = Style::default().fg(theme.muted);
        let field = |focused: bool| {
            if focused {
                Style::default()
                    .fg(theme.fg)
                    .add_modifier(Modifier::UNDERLINED)
            } else {
                Style::default().fg(theme.fg)
            }
        };

        let cursor = if self.focus == Focus::Nickname { "_" } else { "" };
        let nickname = Line::from(vec![
            Span::styled("Nickname: ", label),
            Span::styled(
                format!("{}{}", self.form.nickname, cursor),
                field(self.focus == Focus::Nickname),
            ),
        ]);
        f.render_widget(Paragraph::new(nickname), rows[0]);
        self.regions.nickname = rows[0];

        let genre = Line::from(vec![
            Span::styled("Genre:    ", label),
            Span::styled(
                format!("< {} >", self.form.genre()),
                field(self.focus == Focus::Genre),
            ),
        ]);
        f.render_widget(Paragraph::new(genre), rows[2]);
        self.regions.genre = rows[2];

        let submit_area = Rect {
            width: (SUBMIT_LABEL.chars().count() as u16).min(rows[4].width),
            ..rows[4]
        };
        let submit = Paragraph::new(SUBMIT_LABEL)
            .style(theme.button(self.focus == Focus::Submit, self.form.failed));
        f.render_widget(submit, submit_area);
        self.regions.submit = submit_area;

        let error = Paragraph::new(Span::styled(
            self.form.error.clone(),
            Style::default().fg(theme.error),
        ));
        f.render_widget(error, rows[6]);
    }

    fn render_hints(&self, f: &mut Frame, area: Rect, theme: &Theme) {
        let text = if self.focus == Focus::Nickname {
            "Type nickname  Enter=submit  Tab=next field  Esc=leave field  Ctrl-C=quit"
        } else {
            "Tab=next field  ←→=genre  Enter=activate  t=theme  r=refresh advice  s=status panel  q=quit"
        };
        let hints = Paragraph::new(Line::from(Span::styled(
            text,
            Style::default().fg(theme.muted),
        )));
        f.render_widget(hints, area);
    }

    fn render_acknowledgment(&self, f: &mut Frame, area: Rect, theme: &Theme) {
        let message = self.form.acknowledgment.clone().unwrap_or_default();
        let sent = self
            .submitted_at
            .map(|t| format!("Sent at {}", t.format("%H:%M:%S")))
            .unwrap_or_default();
        let popup = centered(area, 44, 7);
        f.render_widget(Clear, popup);
        let p = Paragraph::new(vec![
            Line::from(Span::styled(message, Style::default().add_modifier(Modifier::BOLD))),
            Line::from(Span::styled(sent, Style::default().fg(theme.muted))),
            Line::from(""),
            Line::from(Span::styled("Enter=OK", Style::default().fg(theme.muted))),
        ])
        .alignment(Alignment::Center)
        .style(theme.base())
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(theme.border_style(true)),
        );
        f.render_widget(p, popup);
    }
}

/// A `width` x `height` rectangle centred in `area`, clamped to fit.
fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

// ── App event loop ────────────────────────────────────────────────────────────

pub fn run_app(terminal: &mut Terminal<CrosstermBackend<Stdout>>, app: &mut App) -> Result<()> {
    loop {
        app.tick(Instant::now());
        terminal.draw(|f| app.render(f))?;
        if event::poll(StdDuration::from_millis(16))? {
            match event::read()? {
                CEvent::Key(key) if key.kind == KeyEventKind::Press => {
                    if app.handle_key(key.code, key.modifiers, Instant::now()) {
                        break;
                    }
                }
                CEvent::Mouse(mouse) => app.handle_mouse(mouse, Instant::now()),
                _ => {}
            }
        }
    }
    Ok(())
}

use color_eyre::eyre::Result;
use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use crossterm::terminal::{disable_raw_mode, enable_raw_mode};
use itertools::Itertools;
use lotto_cart::cart::{CartEntry, EntryId};
use lotto_cart::catalog::{GameDefinition, GameId};
use lotto_cart::money::{BrlFormatter, PriceFormatter};
use lotto_cart::view::View;
use ratatui::prelude::*;
use ratatui::widgets::*;
use std::io::stdout;

const GRID_COLUMNS: usize = 10;

pub enum UserEvent {
    Quit,
    SelectGame(GameId),
    ToggleNumber(u32),
    RandomComplete,
    ClearSelection,
    AddToCart,
    RemoveEntry(EntryId),
    Redraw,
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
enum Mode {
    #[default]
    Normal,
    QuitModal,
}

#[derive(Clone, Debug)]
struct CartLine {
    id: EntryId,
    title: String,
    numbers: String,
    price: String,
    color: Color,
}

/// Render model fed exclusively through the `View` callbacks; drawing reads
/// only from here.
pub struct UiState {
    games: Vec<GameDefinition>,
    active: Option<GameId>,
    description: String,
    accent: Color,
    cells: Vec<bool>,
    cursor: usize,
    cart: Vec<CartLine>,
    cart_cursor: usize,
    total: String,
    status: String,
    mode: Mode,
    formatter: BrlFormatter,
    terminal: Option<Terminal<CrosstermBackend<std::io::Stdout>>>,
}

impl Default for UiState {
    fn default() -> Self {
        UiState {
            games: Vec::new(),
            active: None,
            description: String::new(),
            accent: Color::White,
            cells: Vec::new(),
            cursor: 0,
            cart: Vec::new(),
            cart_cursor: 0,
            total: String::new(),
            status: String::from("Ready"),
            mode: Mode::Normal,
            formatter: BrlFormatter,
            terminal: None,
        }
    }
}

impl UiState {
    pub fn set_status(&mut self, status: impl Into<String>) {
        self.status = status.into();
    }

    fn active_position(&self) -> usize {
        self.active
            .and_then(|id| self.games.iter().position(|g| g.id == id))
            .unwrap_or(0)
    }
}

impl View for UiState {
    fn on_catalog_ready(&mut self, games: &[GameDefinition]) {
        self.games = games.to_vec();
    }

    fn on_game_switched(&mut self, _old: Option<&GameDefinition>, new: &GameDefinition) {
        self.active = Some(new.id);
        self.description = new.description.clone();
        self.accent = accent_color(&new.color);
        self.cells = vec![false; new.number_range as usize];
        self.cursor = 0;
    }

    fn on_number_toggled(&mut self, number: u32, selected: bool) {
        if let Some(cell) = self.cells.get_mut(number as usize - 1) {
            *cell = selected;
        }
    }

    fn on_selection_cleared(&mut self) {
        self.cells.fill(false);
    }

    fn on_entry_added(&mut self, id: EntryId, entry: &CartEntry) {
        let game = self.games.iter().find(|g| g.id == entry.game);
        self.cart.push(CartLine {
            id,
            title: game.map(|g| g.label.clone()).unwrap_or_default(),
            numbers: entry.numbers.iter().join(", "),
            price: self.formatter.format(entry.price),
            color: game.map(|g| accent_color(&g.color)).unwrap_or(Color::White),
        });
    }

    fn on_entry_removed(&mut self, id: EntryId) {
        self.cart.retain(|line| line.id != id);
        if self.cart_cursor >= self.cart.len() {
            self.cart_cursor = self.cart.len().saturating_sub(1);
        }
    }

    fn on_total_changed(&mut self, formatted_total: &str) {
        self.total = formatted_total.to_string();
    }
}

pub fn terminal_enter(state: &mut UiState) -> Result<()> {
    enable_raw_mode()?;
    crossterm::execute!(std::io::stdout(), crossterm::terminal::EnterAlternateScreen)?;
    // Single persistent Terminal to preserve buffers across draws
    let backend = CrosstermBackend::new(stdout());
    let terminal = Terminal::new(backend)?;
    state.terminal = Some(terminal);
    Ok(())
}

pub fn terminal_exit() -> Result<()> {
    disable_raw_mode()?;
    crossterm::execute!(std::io::stdout(), crossterm::terminal::LeaveAlternateScreen)?;
    Ok(())
}

pub fn draw(state: &mut UiState) -> Result<()> {
    if let Some(mut term) = state.terminal.take() {
        term.draw(|f| ui(f, state))?;
        state.terminal = Some(term);
    }
    Ok(())
}

pub async fn next_event(state: &mut UiState) -> Result<UserEvent> {
    loop {
        if let Event::Key(k) = event::read()? {
            if k.kind != KeyEventKind::Press {
                continue;
            }
            if state.mode == Mode::QuitModal {
                match k.code {
                    KeyCode::Char('y') | KeyCode::Char('Y') => return Ok(UserEvent::Quit),
                    KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => {
                        state.mode = Mode::Normal;
                        return Ok(UserEvent::Redraw);
                    }
                    _ => continue,
                }
            }
            let cells = state.cells.len();
            return Ok(match k.code {
                KeyCode::Char('q') | KeyCode::Esc => {
                    state.mode = Mode::QuitModal;
                    UserEvent::Redraw
                }
                KeyCode::Left | KeyCode::Char('h') => {
                    state.cursor = state.cursor.saturating_sub(1);
                    UserEvent::Redraw
                }
                KeyCode::Right | KeyCode::Char('l') => {
                    if cells > 0 && state.cursor + 1 < cells {
                        state.cursor += 1;
                    }
                    UserEvent::Redraw
                }
                KeyCode::Up | KeyCode::Char('k') => {
                    state.cursor = state.cursor.saturating_sub(GRID_COLUMNS);
                    UserEvent::Redraw
                }
                KeyCode::Down | KeyCode::Char('j') => {
                    if cells > 0 && state.cursor + GRID_COLUMNS < cells {
                        state.cursor += GRID_COLUMNS;
                    }
                    UserEvent::Redraw
                }
                KeyCode::Char(' ') | KeyCode::Enter => {
                    if cells == 0 {
                        continue;
                    }
                    UserEvent::ToggleNumber(state.cursor as u32 + 1)
                }
                KeyCode::Tab => {
                    if state.games.is_empty() {
                        continue;
                    }
                    let next = (state.active_position() + 1) % state.games.len();
                    UserEvent::SelectGame(state.games[next].id)
                }
                KeyCode::BackTab => {
                    if state.games.is_empty() {
                        continue;
                    }
                    let len = state.games.len();
                    let prev = (state.active_position() + len - 1) % len;
                    UserEvent::SelectGame(state.games[prev].id)
                }
                KeyCode::Char(c) if c.is_ascii_digit() && c != '0' => {
                    let index = c.to_digit(10).unwrap() as usize - 1;
                    match state.games.get(index) {
                        Some(game) => UserEvent::SelectGame(game.id),
                        None => continue,
                    }
                }
                KeyCode::Char('r') => UserEvent::RandomComplete,
                KeyCode::Char('c') => UserEvent::ClearSelection,
                KeyCode::Char('a') => UserEvent::AddToCart,
                KeyCode::Char('[') => {
                    state.cart_cursor = state.cart_cursor.saturating_sub(1);
                    UserEvent::Redraw
                }
                KeyCode::Char(']') => {
                    if !state.cart.is_empty() && state.cart_cursor + 1 < state.cart.len() {
                        state.cart_cursor += 1;
                    }
                    UserEvent::Redraw
                }
                KeyCode::Char('x') | KeyCode::Delete => {
                    match state.cart.get(state.cart_cursor) {
                        Some(line) => UserEvent::RemoveEntry(line.id),
                        None => continue,
                    }
                }
                _ => continue,
            });
        }
    }
}

fn ui(f: &mut Frame, state: &UiState) {
    f.render_widget(Clear, f.area());
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),  // game selector
            Constraint::Length(4),  // description
            Constraint::Min(12),    // number grid
            Constraint::Length(8),  // cart
            Constraint::Length(3),  // total + status
            Constraint::Length(3),  // help
        ])
        .split(f.area());

    draw_games(f, chunks[0], state);
    draw_description(f, chunks[1], state);
    draw_grid(f, chunks[2], state);
    draw_cart(f, chunks[3], state);
    draw_footer(f, chunks[4], state);
    draw_help(f, chunks[5]);
    draw_modals(f, state);
}

fn draw_games(f: &mut Frame, area: Rect, state: &UiState) {
    let mut spans: Vec<Span> = Vec::new();
    for (i, game) in state.games.iter().enumerate() {
        if i > 0 {
            spans.push(Span::raw("  "));
        }
        let color = accent_color(&game.color);
        let style = if Some(game.id) == state.active {
            Style::default().fg(Color::White).bg(color).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(color)
        };
        spans.push(Span::styled(format!(" {} ", game.label), style));
    }
    let selector = Paragraph::new(Line::from(spans))
        .block(Block::default().borders(Borders::ALL).title("Choose a game"));
    f.render_widget(selector, area);
}

fn draw_description(f: &mut Frame, area: Rect, state: &UiState) {
    let description = Paragraph::new(state.description.as_str())
        .wrap(Wrap { trim: true })
        .block(Block::default().borders(Borders::ALL).title("Fill your bet"));
    f.render_widget(description, area);
}

fn draw_grid(f: &mut Frame, area: Rect, state: &UiState) {
    let mut lines: Vec<Line> = Vec::new();
    for row in state.cells.chunks(GRID_COLUMNS).enumerate() {
        let (row_index, row_cells) = row;
        let mut spans: Vec<Span> = Vec::new();
        for (col, selected) in row_cells.iter().enumerate() {
            let index = row_index * GRID_COLUMNS + col;
            let mut style = if *selected {
                Style::default().fg(Color::White).bg(state.accent)
            } else {
                Style::default().fg(Color::Gray)
            };
            if index == state.cursor {
                style = style.add_modifier(Modifier::REVERSED | Modifier::BOLD);
            }
            spans.push(Span::styled(format!(" {:2} ", index + 1), style));
            spans.push(Span::raw(" "));
        }
        lines.push(Line::from(spans));
        lines.push(Line::from(""));
    }
    let picked = state.cells.iter().filter(|c| **c).count();
    let title = format!("Numbers ({picked} picked)");
    let grid = Paragraph::new(lines)
        .block(Block::default().borders(Borders::ALL).title(title));
    f.render_widget(grid, area);
}

fn draw_cart(f: &mut Frame, area: Rect, state: &UiState) {
    let mut lines: Vec<Line> = Vec::new();
    if state.cart.is_empty() {
        lines.push(Line::styled("Empty", Style::default().fg(Color::DarkGray)));
    } else {
        for (i, line) in state.cart.iter().enumerate() {
            let marker = if i == state.cart_cursor { ">" } else { " " };
            lines.push(Line::from(vec![
                Span::raw(format!("{marker} ")),
                Span::styled(line.title.clone(), Style::default().fg(line.color)),
                Span::raw(format!("  {}  ", line.numbers)),
                Span::styled(line.price.clone(), Style::default().fg(Color::Green)),
            ]));
        }
    }
    let cart = Paragraph::new(lines)
        .block(Block::default().borders(Borders::ALL).title("Cart"));
    f.render_widget(cart, area);
}

fn draw_footer(f: &mut Frame, area: Rect, state: &UiState) {
    let footer = Paragraph::new(format!("Total: {} | {}", state.total, state.status))
        .block(Block::default().borders(Borders::ALL).title("Cart total"));
    f.render_widget(footer, area);
}

fn draw_help(f: &mut Frame, area: Rect) {
    let help = Paragraph::new(
        "arrows move | space toggle | tab/1-9 game | r random | c clear | a add to cart | [/] cart | x remove | q quit",
    )
    .block(Block::default().borders(Borders::ALL).title("Help"));
    f.render_widget(help, area);
}

fn draw_modals(f: &mut Frame, state: &UiState) {
    if state.mode == Mode::QuitModal {
        let area = centered_rect(40, 20, f.area());
        let block = Block::default().borders(Borders::ALL).title("Confirm Quit");
        let p = Paragraph::new("Leave without betting? (Y/N)");
        f.render_widget(Clear, area);
        f.render_widget(block.clone(), area);
        f.render_widget(p, block.inner(area));
    }
}

fn centered_rect(w_percent: u16, h_percent: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - h_percent) / 2),
            Constraint::Percentage(h_percent),
            Constraint::Percentage((100 - h_percent) / 2),
        ])
        .split(r);

    let vertical = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - w_percent) / 2),
            Constraint::Percentage(w_percent),
            Constraint::Percentage((100 - w_percent) / 2),
        ])
        .split(popup_layout[1]);

    vertical[1]
}

fn accent_color(token: &str) -> Color {
    let hex = token.strip_prefix('#').unwrap_or(token);
    if hex.len() == 6 {
        if let Ok(value) = u32::from_str_radix(hex, 16) {
            return Color::Rgb((value >> 16) as u8, (value >> 8) as u8, value as u8);
        }
    }
    Color::White
}

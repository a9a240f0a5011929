//! Terminal UI implementation using ratatui
//!
//! This module provides the concrete implementation of UIRenderer using ratatui for the
//! timeline screen. It only reads `ViewState`; filtering and aggregation have already
//! happened by the time a frame is drawn.

use crate::dataset::Record;
use crate::error::{PrizelineError, Result};
use crate::render::ui::detail::{self, highlighted_spans};
use crate::render::ui::{ColorTheme, UIRenderer, ViewState};
use crate::search::Highlighter;
use crate::session::LoadStatus;
use crate::stats::CategoryShare;
use crate::timeline::{summary_line, TimelineModel};
use ratatui::crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph, Wrap},
    Frame, Terminal,
};
use std::io::{self, Stdout};

type CrosstermTerminal = Terminal<CrosstermBackend<Stdout>>;

const LABEL_WIDTH: usize = 12;
/// `" count   pct%"` after each bar
const FIGURES_WIDTH: usize = 14;

pub const LOADING_MESSAGE: &str = "Loading...";
pub const EMPTY_MESSAGE: &str = "No prizes found matching your criteria";

/// Terminal UI implementation with ratatui backend
pub struct TerminalUI {
    terminal: Option<CrosstermTerminal>,
    theme: ColorTheme,
}

impl TerminalUI {
    /// Create a new terminal UI instance with the default theme
    pub fn new() -> Result<Self> {
        Ok(Self {
            terminal: None,
            theme: ColorTheme::default(),
        })
    }

    /// Create terminal UI with custom theme
    pub fn with_theme(theme: ColorTheme) -> Result<Self> {
        Ok(Self {
            terminal: None,
            theme,
        })
    }

    /// Draw one complete frame.
    pub fn draw_frame(frame: &mut Frame, view_state: &ViewState, theme: &ColorTheme) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints(
                [
                    Constraint::Length(1), // header
                    Constraint::Length(1), // category chips
                    Constraint::Length(7), // distribution
                    Constraint::Length(2), // year axis
                    Constraint::Min(0),    // timeline
                    Constraint::Length(1), // status
                ]
                .as_ref(),
            )
            .split(frame.size());

        let highlighter = Highlighter::new(&view_state.session.query);

        Self::render_header(frame, chunks[0], view_state, theme);
        Self::render_chips(frame, chunks[1], view_state, theme);
        Self::render_distribution(frame, chunks[2], view_state, theme);
        Self::render_axis(frame, chunks[3], view_state, theme);
        Self::render_timeline(frame, chunks[4], view_state, &highlighter, theme);
        Self::render_status(frame, chunks[5], view_state, theme);

        if let Some(record) = view_state.overlay_record() {
            let area = centered_rect(70, 70, frame.size());
            let block = Block::default()
                .borders(Borders::ALL)
                .title(detail::title(record))
                .border_style(theme.muted());
            let card = Paragraph::new(detail::detail_lines(record, &highlighter, theme))
                .block(block)
                .wrap(Wrap { trim: false });
            frame.render_widget(Clear, area);
            frame.render_widget(card, area);
        }
    }

    fn render_header(frame: &mut Frame, area: Rect, view_state: &ViewState, theme: &ColorTheme) {
        let text = match &view_state.load_status {
            LoadStatus::Loading => LOADING_MESSAGE.to_string(),
            LoadStatus::Ready => format!("Loaded {}", view_state.summary.describe()),
            LoadStatus::Failed(_) => "No prize data loaded".to_string(),
        };
        let mut spans = vec![
            Span::styled("Prize timeline ", theme.text().add_modifier(Modifier::BOLD)),
            Span::styled(text, theme.muted()),
        ];
        // Tooltip for the ◆ marker on the axis
        if let Some(record) = view_state.selected_record() {
            spans.push(Span::styled(
                format!("  ◆ {}", summary_line(record)),
                theme.text(),
            ));
        }
        let header = Paragraph::new(Line::from(spans));
        frame.render_widget(header, area);
    }

    fn render_chips(frame: &mut Frame, area: Rect, view_state: &ViewState, theme: &ColorTheme) {
        frame.render_widget(Paragraph::new(chip_line(view_state, theme)), area);
    }

    fn render_distribution(
        frame: &mut Frame,
        area: Rect,
        view_state: &ViewState,
        theme: &ColorTheme,
    ) {
        let block = Block::default()
            .borders(Borders::TOP)
            .title("Distribution")
            .border_style(theme.muted());
        let width = area.width as usize;
        let lines: Vec<Line> = view_state
            .derived
            .distribution
            .iter()
            .map(|share| distribution_line(share, width, theme))
            .collect();
        frame.render_widget(Paragraph::new(lines).block(block), area);
    }

    fn render_axis(frame: &mut Frame, area: Rect, view_state: &ViewState, theme: &ColorTheme) {
        let model = TimelineModel::build(view_state.derived.records(&view_state.dataset));
        let selected_year = view_state.selected_record().and_then(|record| record.year());
        let (axis, labels) = axis_rows(&model, selected_year, area.width as usize);
        let lines = vec![
            Line::from(Span::styled(axis, theme.muted())),
            Line::from(Span::styled(labels, theme.muted())),
        ];
        frame.render_widget(Paragraph::new(lines), area);
    }

    fn render_timeline(
        frame: &mut Frame,
        area: Rect,
        view_state: &ViewState,
        highlighter: &Highlighter,
        theme: &ColorTheme,
    ) {
        let placeholder = if view_state.load_status.is_pending() {
            Some(LOADING_MESSAGE)
        } else if view_state.derived.is_empty() {
            Some(EMPTY_MESSAGE)
        } else {
            None
        };

        if let Some(message) = placeholder {
            let paragraph = Paragraph::new(Span::styled(message, theme.muted()))
                .alignment(Alignment::Center)
                .block(Block::default().borders(Borders::TOP).border_style(theme.muted()));
            frame.render_widget(paragraph, area);
            return;
        }

        let (items, selected) = timeline_items(view_state, highlighter, theme);
        let list = List::new(items)
            .block(Block::default().borders(Borders::TOP).border_style(theme.muted()))
            .highlight_style(theme.selection);
        let mut state = ListState::default().with_selected(selected);
        frame.render_stateful_widget(list, area, &mut state);
    }

    fn render_status(frame: &mut Frame, area: Rect, view_state: &ViewState, theme: &ColorTheme) {
        let mut style = Style::default().bg(theme.status_bg).fg(theme.status_fg);
        if view_state.status_line.is_error {
            style = style.fg(theme.error_text);
        }
        let status = Paragraph::new(view_state.format_status_line()).style(style);
        frame.render_widget(status, area);
    }
}

/// Category chips: `" 1 Physics 6 "` per category, dimmed when deselected.
pub fn chip_line(view_state: &ViewState, theme: &ColorTheme) -> Line<'static> {
    let mut spans = Vec::new();
    for share in &view_state.derived.distribution {
        let selected = view_state.session.is_selected(share.category);
        spans.push(Span::styled(
            format!(
                " {} {} {} ",
                share.category.index() + 1,
                share.label,
                share.count
            ),
            theme.chip(share.category, selected),
        ));
        spans.push(Span::raw(" "));
    }
    Line::from(spans)
}

/// One row of the distribution panel: label, proportional bar, count and percentage.
pub fn distribution_line(share: &CategoryShare, width: usize, theme: &ColorTheme) -> Line<'static> {
    let bar_width = width.saturating_sub(LABEL_WIDTH + FIGURES_WIDTH);
    let filled = ((share.percentage / 100.0) * bar_width as f64).round() as usize;
    let filled = filled.min(bar_width);
    let color = theme.category_color(share.category);

    Line::from(vec![
        Span::styled(
            format!("{:<width$}", share.label, width = LABEL_WIDTH),
            Style::default().fg(color),
        ),
        Span::styled("█".repeat(filled), Style::default().fg(color)),
        Span::styled("░".repeat(bar_width - filled), theme.muted()),
        Span::styled(
            format!(" {:>5} {:>6.1}%", share.count, share.percentage),
            theme.text(),
        ),
    ])
}

/// List rows for the derived records, grouped under one heading per year.
///
/// Years run oldest first; records within a year keep dataset order. Returns the rows and
/// the row index of the selected record.
pub fn timeline_items(
    view_state: &ViewState,
    highlighter: &Highlighter,
    theme: &ColorTheme,
) -> (Vec<ListItem<'static>>, Option<usize>) {
    let model = TimelineModel::build(view_state.derived.records(&view_state.dataset));
    let mut items = Vec::new();
    let mut selected_row = None;
    let mut row = 0;

    for (heading, positions) in model.sections() {
        items.push(ListItem::new(Line::from(Span::styled(
            heading,
            theme.text().add_modifier(Modifier::BOLD),
        ))));

        for &position in positions {
            let Some(record) = view_state.derived.record(&view_state.dataset, position) else {
                continue;
            };
            if view_state.session.selected == Some(row) {
                selected_row = Some(items.len());
            }
            row += 1;
            items.push(record_item(record, highlighter, theme));
        }
    }

    (items, selected_row)
}

fn record_item(
    record: &Record,
    highlighter: &Highlighter,
    theme: &ColorTheme,
) -> ListItem<'static> {
    let accent = match record.known_category() {
        Some(category) => Style::default().fg(theme.category_color(category)),
        None => theme.muted(),
    };
    let mut spans = vec![
        Span::styled("  ● ", accent),
        Span::styled(format!("{}: ", record.category_label()), accent),
    ];
    if record.is_organization_award() {
        spans.push(Span::styled("Organization", theme.muted()));
    } else {
        for (i, name) in record.recipient_names().iter().enumerate() {
            if i > 0 {
                spans.push(Span::styled(", ", theme.text()));
            }
            spans.extend(highlighted_spans(name, highlighter, theme.text(), theme));
        }
    }
    ListItem::new(Line::from(spans))
}

/// Year axis and its label row for `width` columns.
///
/// Years with records are marked `•`, labelled years `┼`, and the selected year `◆`.
pub fn axis_rows(model: &TimelineModel, selected_year: Option<i32>, width: usize) -> (String, String) {
    if model.is_empty() || width == 0 {
        return (String::new(), String::new());
    }

    let column = |year: i32| -> Option<usize> {
        let position = model.position_for_year(year)?;
        Some(((position / 100.0) * (width - 1) as f64).round() as usize)
    };

    let mut axis = vec!['─'; width];
    let mut labels = vec![' '; width];

    // Range ends claim their label space before decades.
    for year in model.labelled_years() {
        let Some(col) = column(year) else { continue };
        axis[col] = '┼';
        let text: Vec<char> = year.to_string().chars().collect();
        if text.len() > width {
            continue;
        }
        let start = col.min(width - text.len());
        let end = start + text.len();
        let clear_before = start == 0 || labels[start - 1] == ' ';
        let clear_after = end == width || labels[end] == ' ';
        if clear_before && clear_after && labels[start..end].iter().all(|c| *c == ' ') {
            labels[start..end].copy_from_slice(&text);
        }
    }

    for (year, _) in model.groups() {
        if let Some(col) = column(year) {
            axis[col] = '•';
        }
    }
    if let Some(col) = selected_year.and_then(|year| column(year)) {
        axis[col] = '◆';
    }

    (axis.into_iter().collect(), labels.into_iter().collect())
}

/// Rectangle of `percent_x` by `percent_y` centered in `area`.
fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let vertical = Layout::default()
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
        .split(vertical[1])[1]
}

/// Wrap a terminal I/O failure so it is never mistaken for a dataset error.
fn terminal_error(action: &'static str) -> impl FnOnce(io::Error) -> PrizelineError {
    move |err| PrizelineError::ui(format!("{action}: {err}"))
}

impl UIRenderer for TerminalUI {
    fn render(&mut self, view_state: &ViewState) -> Result<()> {
        if let Some(ref mut terminal) = self.terminal {
            // Extract theme before closure to avoid borrowing issues
            let theme = &self.theme;
            terminal
                .draw(move |frame| Self::draw_frame(frame, view_state, theme))
                .map_err(terminal_error("draw frame"))?;
        }
        Ok(())
    }

    fn initialize(&mut self) -> Result<()> {
        enable_raw_mode().map_err(terminal_error("enable raw mode"))?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture)
            .map_err(terminal_error("enter alternate screen"))?;

        let backend = CrosstermBackend::new(stdout);
        let terminal = Terminal::new(backend).map_err(terminal_error("open terminal"))?;
        self.terminal = Some(terminal);

        Ok(())
    }

    fn cleanup(&mut self) -> Result<()> {
        if self.terminal.is_some() {
            disable_raw_mode().map_err(terminal_error("disable raw mode"))?;
            execute!(io::stdout(), LeaveAlternateScreen, DisableMouseCapture)
                .map_err(terminal_error("leave alternate screen"))?;
            self.terminal = None;
        }
        Ok(())
    }

    fn get_terminal_size(&self) -> Result<(u16, u16)> {
        ratatui::crossterm::terminal::size().map_err(terminal_error("query terminal size"))
    }
}

impl Drop for TerminalUI {
    fn drop(&mut self) {
        let _ = self.cleanup();
    }
}

//! Stateless rendering of one frame from the navigation snapshot.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph},
};
use tracing::instrument;
use unicode_width::UnicodeWidthStr;

use crate::navigation::NavigationState;
use crate::registry::{Control, OverlayEntry, ScreenEntry};

/// Everything one frame needs. Built fresh by the shell on every tick.
#[derive(Debug)]
pub struct View<'a> {
    /// Navigation snapshot.
    pub state: NavigationState,
    /// Content of the current screen.
    pub entry: &'a ScreenEntry,
    /// Controls on offer, in display order.
    pub controls: &'a [Control],
    /// Index of the highlighted control.
    pub selected: usize,
    /// Wall-clock text for the status bar.
    pub clock: String,
}

/// Renders the whole frame.
#[instrument(skip(frame, view), fields(screen = %view.state.current_screen))]
pub fn draw(frame: &mut Frame, view: &View<'_>) {
    let area = frame.area();
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Min(5),
            Constraint::Length(view.controls.len() as u16 + 2),
            Constraint::Length(1),
        ])
        .split(area);

    draw_status_bar(frame, chunks[0], &view.clock);
    draw_header(frame, chunks[1], view);
    draw_body(frame, chunks[2], view.entry);
    draw_controls(frame, chunks[3], view.controls, view.selected);

    let help = Paragraph::new("↑↓: Navigate | Enter: Select | m: Menu | Esc: Back | q: Quit")
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    frame.render_widget(help, chunks[4]);

    if view.state.visible_overlay().is_some()
        && let Some(overlay) = &view.entry.overlay
    {
        draw_overlay(frame, chunks[2], overlay, view.controls);
    }
}

fn draw_status_bar(frame: &mut Frame, area: Rect, clock: &str) {
    let bar = Paragraph::new(clock.to_string())
        .style(Style::default().fg(Color::White).add_modifier(Modifier::BOLD));
    frame.render_widget(bar, area);
}

fn draw_header(frame: &mut Frame, area: Rect, view: &View<'_>) {
    let screen = view.state.current_screen;
    let back = if screen.back_target().is_some() { "← " } else { "  " };
    let menu = if screen.overlay().is_some() { " ☰" } else { "" };

    let line = Line::from(vec![
        Span::styled(back, Style::default().fg(Color::Gray)),
        Span::styled(
            view.entry.title,
            Style::default()
                .fg(Color::Rgb(0xF9, 0x73, 0x16))
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(menu, Style::default().fg(Color::Gray)),
    ]);

    let header = Paragraph::new(line)
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(screen.id())
                .border_style(Style::default().fg(Color::Magenta)),
        );
    frame.render_widget(header, area);
}

fn draw_body(frame: &mut Frame, area: Rect, entry: &ScreenEntry) {
    let lines: Vec<Line> = entry.body.iter().map(|text| Line::from(*text)).collect();
    let body = Paragraph::new(lines).block(Block::default().borders(Borders::ALL));
    frame.render_widget(body, area);
}

fn draw_controls(frame: &mut Frame, area: Rect, controls: &[Control], selected: usize) {
    let items: Vec<ListItem> = controls
        .iter()
        .map(|control| ListItem::new(control.label()))
        .collect();

    let list = List::new(items)
        .block(Block::default().borders(Borders::ALL).title("Actions"))
        .highlight_style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("> ");

    let mut list_state = ListState::default();
    if !controls.is_empty() {
        list_state.select(Some(selected.min(controls.len() - 1)));
    }
    frame.render_stateful_widget(list, area, &mut list_state);
}

fn draw_overlay(frame: &mut Frame, area: Rect, overlay: &OverlayEntry, controls: &[Control]) {
    let mut lines: Vec<Line> = overlay.lines.iter().map(|text| Line::from(*text)).collect();
    lines.extend(controls.iter().filter_map(|control| match control {
        Control::Navigate(action) if action.is_menu_item() => Some(Line::styled(
            action.label(),
            Style::default().add_modifier(Modifier::BOLD),
        )),
        _ => None,
    }));

    let popup = overlay_rect(area, &lines);
    let panel = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .style(Style::default().bg(Color::DarkGray).fg(Color::White)),
    );
    frame.render_widget(Clear, popup);
    frame.render_widget(panel, popup);
}

/// Anchors a panel sized to its content in the top-right corner of `area`.
fn overlay_rect(area: Rect, lines: &[Line]) -> Rect {
    let content_width = lines
        .iter()
        .map(|line| {
            line.spans
                .iter()
                .map(|span| span.content.width())
                .sum::<usize>()
        })
        .max()
        .unwrap_or(0);

    let width = (content_width as u16 + 2).min(area.width);
    let height = (lines.len() as u16 + 2).min(area.height);
    Rect {
        x: area.x + area.width.saturating_sub(width + 1),
        y: area.y + 1.min(area.height.saturating_sub(height)),
        width,
        height,
    }
}

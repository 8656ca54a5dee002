use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, List, ListItem, Paragraph, Wrap};
use ratatui::Frame;

use crate::notify::NoticeKind;

use super::app::{AppState, DeleteConfirm};
use super::model::{display_text, PulsePhase, TaskRow, EMPTY_PLACEHOLDER};

const COLOR_TEXT: Color = Color::Rgb(230, 233, 237);
const COLOR_MUTED: Color = Color::Rgb(156, 162, 170);
const COLOR_MUTED_DARK: Color = Color::Rgb(112, 119, 126);
const COLOR_BG_MUTED: Color = Color::Rgb(48, 52, 57);
const COLOR_INFO: Color = Color::Rgb(108, 190, 214);
const COLOR_WARNING: Color = Color::Rgb(240, 195, 92);
const COLOR_ERROR: Color = Color::Rgb(252, 110, 102);
const COLOR_SUCCESS: Color = Color::Rgb(118, 203, 141);
const COLOR_ACCENT: Color = Color::Rgb(130, 176, 255);
const COLOR_BORDER_LIST: Color = Color::Rgb(86, 120, 158);

const NOTICE_HEIGHT: u16 = 3;

pub fn render(frame: &mut Frame, app: &mut AppState) {
    let area = frame.size();
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(
            [
                Constraint::Length(3),
                Constraint::Min(0),
                Constraint::Length(3),
                Constraint::Length(2),
            ]
            .as_ref(),
        )
        .split(area);

    render_input(frame, app, chunks[0]);
    render_list(frame, app, chunks[1]);
    render_stats(frame, app, chunks[2]);
    render_footer(frame, app, chunks[3]);

    render_notices(frame, app, area);
    if let Some(confirm) = app.delete_confirm.as_ref() {
        render_delete_confirm_modal(frame, area, confirm);
    }
}

fn render_input(frame: &mut Frame, app: &AppState, area: Rect) {
    let shaking = app.input_shaking(app.now);
    let border_style = if shaking {
        Style::default()
            .fg(COLOR_ERROR)
            .add_modifier(Modifier::BOLD)
    } else if app.input_active {
        Style::default().fg(COLOR_ACCENT)
    } else {
        Style::default().fg(COLOR_BORDER_LIST)
    };

    let width = area.width.saturating_sub(2) as usize;
    let mut spans = input_spans(&app.input, width, app.input_active);
    if shaking && app.shake_nudge(app.now) {
        spans.insert(0, Span::raw(" "));
    }

    let widget = Paragraph::new(Line::from(spans)).block(
        Block::default()
            .borders(Borders::ALL)
            .title("New task")
            .border_style(border_style),
    );
    frame.render_widget(widget, area);
}

fn input_spans(value: &str, width: usize, active: bool) -> Vec<Span<'static>> {
    let style = Style::default().fg(COLOR_TEXT);
    if width == 0 {
        return vec![Span::raw("")];
    }
    if value.is_empty() {
        if active {
            return vec![Span::styled(
                " ".to_string(),
                style.add_modifier(Modifier::REVERSED),
            )];
        }
        return vec![Span::styled(
            "press i to add a task".to_string(),
            Style::default().fg(COLOR_MUTED_DARK),
        )];
    }

    // Keep the tail visible; the caret always sits at the end of the text.
    let chars: Vec<char> = value.chars().collect();
    let available = if active {
        width.saturating_sub(1)
    } else {
        width
    };
    let start = chars.len().saturating_sub(available);
    let text: String = chars[start..].iter().collect();
    let mut spans = vec![Span::styled(text, style)];
    if active {
        spans.push(Span::styled(
            " ".to_string(),
            style.add_modifier(Modifier::REVERSED),
        ));
    }
    spans
}

fn render_list(frame: &mut Frame, app: &mut AppState, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title("Tasks")
        .border_style(Style::default().fg(COLOR_BORDER_LIST));

    if app.rows.is_empty() {
        let widget = Paragraph::new(Line::from(Span::styled(
            EMPTY_PLACEHOLDER,
            Style::default().fg(COLOR_MUTED),
        )))
        .alignment(Alignment::Center)
        .block(block)
        .wrap(Wrap { trim: true });
        frame.render_widget(widget, area);
        return;
    }

    let width = area.width.saturating_sub(2) as usize;
    let items: Vec<ListItem<'static>> = app
        .rows
        .iter()
        .map(|row| render_list_row(row, width))
        .collect();
    let list = List::new(items).block(block).highlight_style(
        Style::default()
            .bg(COLOR_BG_MUTED)
            .add_modifier(Modifier::BOLD),
    );

    app.sync_selection();
    frame.render_stateful_widget(list, area, &mut app.list_state);
}

fn render_list_row(row: &TaskRow, width: usize) -> ListItem<'static> {
    let mark = if row.completed { "[x]" } else { "[ ]" };
    let mark_style = if row.completed {
        Style::default().fg(COLOR_SUCCESS)
    } else {
        Style::default().fg(COLOR_MUTED)
    };
    let text_style = if row.completed {
        Style::default()
            .fg(COLOR_MUTED_DARK)
            .add_modifier(Modifier::CROSSED_OUT)
    } else {
        Style::default().fg(COLOR_TEXT)
    };

    let date_width = row.created_at.chars().count();
    let text_width = width.saturating_sub(date_width + 6);
    let line = Line::from(vec![
        Span::styled(mark.to_string(), mark_style),
        Span::raw(" "),
        Span::styled(truncate_text(&row.text, text_width), text_style),
        Span::raw("  "),
        Span::styled(row.created_at.clone(), Style::default().fg(COLOR_MUTED)),
    ]);
    ListItem::new(line)
}

fn render_stats(frame: &mut Frame, app: &AppState, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(
            [
                Constraint::Percentage(34),
                Constraint::Percentage(33),
                Constraint::Percentage(33),
            ]
            .as_ref(),
        )
        .split(area);

    for (cell, chunk) in app.stats.cells().iter().zip(chunks.iter()) {
        let value_style = match cell.phase(app.now) {
            PulsePhase::Contract => Style::default().fg(COLOR_MUTED_DARK),
            PulsePhase::Expand => Style::default()
                .fg(COLOR_ACCENT)
                .add_modifier(Modifier::BOLD),
            PulsePhase::Idle => Style::default().fg(COLOR_TEXT),
        };
        let line = Line::from(vec![
            Span::styled(
                format!("{}: ", cell.label),
                Style::default().fg(COLOR_MUTED),
            ),
            Span::styled(cell.value.clone(), value_style),
        ]);
        let widget = Paragraph::new(line).alignment(Alignment::Center).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(COLOR_BORDER_LIST)),
        );
        frame.render_widget(widget, *chunk);
    }
}

fn render_footer(frame: &mut Frame, app: &AppState, area: Rect) {
    let widget = Paragraph::new(Line::from(Span::styled(
        app.footer_hint(),
        Style::default().fg(COLOR_INFO),
    )))
    .alignment(Alignment::Center)
    .block(
        Block::default()
            .borders(Borders::TOP)
            .border_style(Style::default().fg(COLOR_BORDER_LIST)),
    );
    frame.render_widget(widget, area);
}

fn render_notices(frame: &mut Frame, app: &AppState, area: Rect) {
    // Stack below the input box at the right edge, newest at the bottom.
    let mut y = area.y + 3;
    for notice in app.notices.notices() {
        if y + NOTICE_HEIGHT > area.y + area.height {
            break;
        }
        // Never wider than the frame itself.
        let width = (notice.message.chars().count() as u16 + 4)
            .clamp(12, area.width.saturating_sub(4).max(12))
            .min(area.width);
        let x = area.x + area.width.saturating_sub(width + 1);
        let rect = Rect::new(x, y, width, NOTICE_HEIGHT);
        frame.render_widget(Clear, rect);

        let style = notice_style(notice.kind);
        let widget = Paragraph::new(Line::from(Span::styled(
            notice.message.clone(),
            style,
        )))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).border_style(style))
        .wrap(Wrap { trim: true });
        frame.render_widget(widget, rect);
        y += NOTICE_HEIGHT;
    }
}

fn notice_style(kind: NoticeKind) -> Style {
    match kind {
        NoticeKind::Success => Style::default().fg(COLOR_SUCCESS),
        NoticeKind::Error => Style::default().fg(COLOR_ERROR),
        NoticeKind::Warning => Style::default().fg(COLOR_WARNING),
        NoticeKind::Info => Style::default().fg(COLOR_INFO),
    }
}

fn render_delete_confirm_modal(frame: &mut Frame, area: Rect, confirm: &DeleteConfirm) {
    let content_width = area.width.saturating_sub(8).min(56);
    let height = 8u16.min(area.height.saturating_sub(4).max(7));
    let modal = centered_rect(content_width, height, area);
    frame.render_widget(Clear, modal);

    let text_width = (content_width as usize).saturating_sub(10);
    let mut lines: Vec<Line<'static>> = Vec::new();
    lines.push(Line::from(Span::styled(
        "Delete task?",
        Style::default()
            .fg(COLOR_ERROR)
            .add_modifier(Modifier::BOLD),
    )));
    lines.push(Line::from(""));
    lines.push(Line::from(vec![
        Span::styled("Id: ", Style::default().fg(COLOR_MUTED_DARK)),
        Span::styled(
            confirm.id.to_string(),
            Style::default().fg(COLOR_ACCENT),
        ),
    ]));
    lines.push(Line::from(vec![
        Span::styled("Text: ", Style::default().fg(COLOR_MUTED_DARK)),
        Span::styled(
            truncate_text(&display_text(&confirm.text), text_width),
            Style::default().fg(COLOR_TEXT),
        ),
    ]));
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "y/enter confirm  n/esc cancel",
        Style::default().fg(COLOR_MUTED_DARK),
    )));

    let widget = Paragraph::new(lines)
        .block(Block::default().borders(Borders::ALL).title("Delete Task"))
        .wrap(Wrap { trim: true });
    frame.render_widget(widget, modal);
}

fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width.saturating_sub(2));
    let height = height.min(area.height.saturating_sub(2));
    Rect::new(
        area.x + area.width.saturating_sub(width) / 2,
        area.y + area.height.saturating_sub(height) / 2,
        width,
        height,
    )
}

fn truncate_text(value: &str, max: usize) -> String {
    let chars: Vec<char> = value.chars().collect();
    if chars.len() <= max {
        return value.to_string();
    }
    match max {
        0 => String::new(),
        1..=3 => chars[..max].iter().collect(),
        _ => {
            let mut out: String = chars[..max - 3].iter().collect();
            out.push_str("...");
            out
        }
    }
}

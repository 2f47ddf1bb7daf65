use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Clear, Paragraph, Row, Table, Wrap},
    Frame,
};

use super::calc_app::CalcApp;
use super::gallery_app::GalleryApp;
use super::theme::Theme;
use crate::calculator::{Action, CalcCommand, Operator};
use crate::constants::UI_GRID_COLUMNS;

/// Keypad layout, top to bottom
const KEYPAD: [[(&str, Option<CalcCommand>); 4]; 5] = [
    [
        ("C", Some(CalcCommand::Action(Action::Clear))),
        ("⌫", Some(CalcCommand::Action(Action::Delete))),
        ("", None),
        ("÷", Some(CalcCommand::Operator(Operator::Divide))),
    ],
    [
        ("7", Some(CalcCommand::Digit(7))),
        ("8", Some(CalcCommand::Digit(8))),
        ("9", Some(CalcCommand::Digit(9))),
        ("×", Some(CalcCommand::Operator(Operator::Multiply))),
    ],
    [
        ("4", Some(CalcCommand::Digit(4))),
        ("5", Some(CalcCommand::Digit(5))),
        ("6", Some(CalcCommand::Digit(6))),
        ("−", Some(CalcCommand::Operator(Operator::Subtract))),
    ],
    [
        ("1", Some(CalcCommand::Digit(1))),
        ("2", Some(CalcCommand::Digit(2))),
        ("3", Some(CalcCommand::Digit(3))),
        ("+", Some(CalcCommand::Operator(Operator::Add))),
    ],
    [
        ("0", Some(CalcCommand::Digit(0))),
        (".", Some(CalcCommand::Point)),
        ("", None),
        ("=", Some(CalcCommand::Action(Action::Equals))),
    ],
];

/// Render the calculator screen
pub fn render_calculator(frame: &mut Frame, app: &CalcApp) {
    let theme = &app.theme;
    let area = centered_rect(40, 80, frame.area());

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Header
            Constraint::Length(4), // Display
            Constraint::Min(5),    // Keypad
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    render_header(frame, chunks[0], theme, "Calculator");

    let view = app.calculator.view();
    let display_style = if view.is_error {
        Style::default().fg(theme.colors.error.to_color())
    } else {
        Style::default().fg(theme.colors.display.to_color())
    };
    let display = Paragraph::new(vec![
        Line::from(Span::styled(
            view.previous_operation,
            Style::default().fg(theme.colors.text_secondary.to_color()),
        )),
        Line::from(Span::styled(
            view.display,
            display_style.add_modifier(Modifier::BOLD),
        )),
    ])
    .alignment(Alignment::Right)
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.colors.border_focused.to_color())),
    );
    frame.render_widget(display, chunks[1]);

    let rows = KEYPAD.iter().map(|row| {
        Row::new(row.iter().map(|(label, command)| {
            let mut style = match command {
                Some(CalcCommand::Operator(_)) | Some(CalcCommand::Action(_)) => {
                    Style::default().fg(theme.colors.operator_key.to_color())
                }
                _ => Style::default().fg(theme.colors.text_primary.to_color()),
            };
            if command.is_some() && *command == app.last_command {
                style = style.bg(theme.colors.selection.to_color());
            }
            Cell::from(Line::from(*label).alignment(Alignment::Center)).style(style)
        }))
        .height(1)
    });
    let keypad = Table::new(rows, [Constraint::Ratio(1, 4); 4])
        .column_spacing(1)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(theme.colors.border.to_color())),
        );
    frame.render_widget(keypad, chunks[2]);

    render_status_bar(
        frame,
        chunks[3],
        theme,
        "0-9 . digits | + - * / | Enter = | Esc clear | Backspace delete | q quit",
    );
}

/// Render the gallery screen, with the lightbox on top when open
pub fn render_gallery(frame: &mut Frame, app: &GalleryApp) {
    let theme = &app.theme;
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Header
            Constraint::Length(3), // Filter bar
            Constraint::Min(6),    // Grid
            Constraint::Length(1), // Status bar
        ])
        .split(frame.area());

    render_header(frame, chunks[0], theme, "Gallery");
    render_filter_bar(frame, chunks[1], app);
    render_grid(frame, chunks[2], app);

    let hint = if app.gallery.scroll_locked() {
        "← prev | → next | Esc close"
    } else {
        "1-9/Tab filter | arrows select | Enter open | q quit"
    };
    render_status_bar(frame, chunks[3], theme, hint);

    if app.gallery.is_lightbox_open() {
        render_lightbox(frame, app);
    }
}

fn render_filter_bar(frame: &mut Frame, area: Rect, app: &GalleryApp) {
    let theme = &app.theme;
    let mut spans = Vec::new();
    for (idx, filter) in app.gallery.filters().iter().enumerate() {
        let label = format!(" {} {} ", idx + 1, filter);
        let style = if filter == app.gallery.active_filter() {
            Style::default()
                .fg(theme.colors.text_highlight.to_color())
                .add_modifier(Modifier::BOLD | Modifier::REVERSED)
        } else {
            Style::default().fg(theme.colors.text_secondary.to_color())
        };
        spans.push(Span::styled(label, style));
        spans.push(Span::raw(" "));
    }

    let bar = Paragraph::new(Line::from(spans)).block(
        Block::default()
            .borders(Borders::BOTTOM)
            .border_style(Style::default().fg(theme.colors.border.to_color())),
    );
    frame.render_widget(bar, area);
}

fn render_grid(frame: &mut Frame, area: Rect, app: &GalleryApp) {
    let theme = &app.theme;
    let visible = app.gallery.visible_items();

    if visible.is_empty() {
        let empty = Paragraph::new("No items in this category")
            .style(Style::default().fg(theme.colors.text_disabled.to_color()))
            .alignment(Alignment::Center);
        frame.render_widget(empty, area);
        return;
    }

    let rows = visible.chunks(UI_GRID_COLUMNS).enumerate().map(|(row_idx, ids)| {
        let cells = ids.iter().enumerate().map(|(col_idx, &id)| {
            let position = row_idx * UI_GRID_COLUMNS + col_idx;
            let Some(item) = app.gallery.item(id) else {
                return Cell::from("");
            };
            let mut style = Style::default().fg(theme.colors.text_primary.to_color());
            if position == app.selected() {
                style = style.bg(theme.colors.selection.to_color());
            }
            Cell::from(vec![
                Line::from(Span::styled(
                    item.caption.clone(),
                    Style::default().add_modifier(Modifier::BOLD),
                )),
                Line::from(Span::styled(
                    format!("[{}] {}", item.category, item.source),
                    Style::default().fg(theme.colors.text_secondary.to_color()),
                )),
            ])
            .style(style)
        });
        Row::new(cells).height(2).bottom_margin(1)
    });

    let widths = vec![Constraint::Ratio(1, UI_GRID_COLUMNS as u32); UI_GRID_COLUMNS];
    let grid = Table::new(rows, widths).column_spacing(2);
    frame.render_widget(grid, area);
}

fn render_lightbox(frame: &mut Frame, app: &GalleryApp) {
    let theme = &app.theme;
    let view = app.gallery.lightbox();
    let area = centered_rect(60, 50, frame.area());

    let title = match view.position {
        Some((current, total)) => format!(" {} / {} ", current, total),
        None => " Lightbox ".to_string(),
    };

    let mut lines = vec![Line::from("")];
    match (&view.source, &view.caption) {
        (Some(source), Some(caption)) if view.image_visible => {
            lines.push(Line::from(Span::styled(
                format!("🖼  {}", source),
                Style::default().fg(theme.colors.info.to_color()),
            )));
            lines.push(Line::from(""));
            lines.push(Line::from(Span::styled(
                caption.clone(),
                Style::default()
                    .fg(theme.colors.text_primary.to_color())
                    .add_modifier(Modifier::ITALIC),
            )));
        }
        _ => {
            // faded out mid-crossfade
            lines.push(Line::from(Span::styled(
                "…",
                Style::default().fg(theme.colors.text_disabled.to_color()),
            )));
        }
    }
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "‹ prev    close ✕    next ›",
        Style::default().fg(theme.colors.text_secondary.to_color()),
    )));

    let lightbox = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .title(title)
                .borders(Borders::ALL)
                .border_style(Style::default().fg(theme.colors.border_focused.to_color())),
        );

    frame.render_widget(Clear, area);
    frame.render_widget(lightbox, area);
}

fn render_header(frame: &mut Frame, area: Rect, theme: &Theme, title: &str) {
    let header = Paragraph::new(Line::from(vec![
        Span::styled(
            "Benchtop",
            Style::default()
                .fg(theme.colors.header.to_color())
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(" | "),
        Span::styled(title, Style::default().fg(theme.colors.text_secondary.to_color())),
    ]))
    .alignment(Alignment::Center);
    frame.render_widget(header, area);
}

fn render_status_bar(frame: &mut Frame, area: Rect, theme: &Theme, hint: &str) {
    let status = Paragraph::new(Span::styled(
        hint,
        Style::default().fg(theme.colors.text_disabled.to_color()),
    ));
    frame.render_widget(status, area);
}

/// A rectangle of the given percentages centered in `area`
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

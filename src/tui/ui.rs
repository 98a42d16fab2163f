//! UI rendering for the TUI.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style, Stylize},
    symbols::Marker,
    text::{Line, Span},
    widgets::{
        canvas::{Canvas, Points},
        Block, Borders, Cell, LineGauge, Paragraph, Row, Table,
    },
    Frame,
};

use super::event::HELP;
use crate::focus::dashboard::donut_points;
use crate::focus::{ControllerState, Dashboard, Field, FocusController, Notifier};

/// Radius of the donut hole relative to the outer radius.
const DONUT_HOLE: f64 = 0.45;

/// Render the application UI.
pub fn render<N: Notifier>(frame: &mut Frame<'_>, controller: &FocusController<N>) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // Header
            Constraint::Length(3), // Task
            Constraint::Length(3), // Tech + minutes
            Constraint::Length(3), // Countdown
            Constraint::Length(3), // Start button
            Constraint::Length(1), // Dashboard title
            Constraint::Min(8),    // Chart + table
            Constraint::Length(1), // Status bar
        ])
        .split(frame.area());

    render_header(frame, chunks[0]);
    render_field(frame, controller, Field::Task, chunks[1]);

    let row = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(10), Constraint::Length(20)])
        .split(chunks[2]);
    render_field(frame, controller, Field::Tech, row[0]);
    render_field(frame, controller, Field::Minutes, row[1]);

    render_countdown(frame, controller, chunks[3]);
    render_start_button(frame, controller, chunks[4]);
    render_dashboard_title(frame, chunks[5]);
    render_dashboard(frame, controller.dashboard(), chunks[6]);
    render_status_bar(frame, controller, chunks[7]);
}

fn render_header(frame: &mut Frame<'_>, area: Rect) {
    let header = Paragraph::new(vec![
        Line::from("Tech Focus".bold().cyan()),
        Line::from("Manage your time".dark_gray()),
    ])
    .alignment(Alignment::Center);

    frame.render_widget(header, area);
}

fn render_field<N: Notifier>(
    frame: &mut Frame<'_>,
    controller: &FocusController<N>,
    field: Field,
    area: Rect,
) {
    let enabled = controller.inputs_enabled();
    let focused = enabled && controller.focused() == Some(field);

    let border = if !enabled {
        Style::default().fg(Color::DarkGray)
    } else if focused {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::White)
    };

    let mut block = Block::default()
        .borders(Borders::ALL)
        .border_style(border)
        .title(format!(" {} ", field.label()));

    if field == Field::Minutes {
        if let Some(err) = controller.minutes_error() {
            block = block
                .border_style(Style::default().fg(Color::Red))
                .title_bottom(Line::from(format!(" {err} ")).red());
        }
    }

    let mut text = controller.form().value(field).to_string();
    if focused {
        text.push('▏');
    }

    let style = if enabled {
        Style::default()
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let alignment = if field == Field::Minutes {
        Alignment::Center
    } else {
        Alignment::Left
    };

    frame.render_widget(
        Paragraph::new(text).style(style).alignment(alignment).block(block),
        area,
    );
}

fn render_countdown<N: Notifier>(
    frame: &mut Frame<'_>,
    controller: &FocusController<N>,
    area: Rect,
) {
    let countdown = Paragraph::new(controller.display().to_string())
        .style(
            Style::default()
                .fg(Color::LightBlue)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::NONE));

    let inner = Rect {
        y: area.y + area.height / 2,
        height: 1,
        ..area
    };
    frame.render_widget(countdown, inner);

    if let ControllerState::Running(cycle) = controller.state() {
        let gauge = LineGauge::default()
            .style(Style::default().fg(Color::LightBlue))
            .ratio(cycle.countdown.progress().clamp(0.0, 1.0));
        let bar = Rect {
            y: area.y + area.height.saturating_sub(1),
            height: 1,
            ..centered(area, 40)
        };
        frame.render_widget(gauge, bar);
    }
}

fn render_start_button<N: Notifier>(
    frame: &mut Frame<'_>,
    controller: &FocusController<N>,
    area: Rect,
) {
    let style = if controller.inputs_enabled() {
        Style::default()
            .fg(Color::White)
            .bg(Color::Blue)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let button = Paragraph::new("▶ START FOCUS CYCLE")
        .style(style)
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).border_style(style));

    frame.render_widget(button, centered(area, 30));
}

fn render_dashboard_title(frame: &mut Frame<'_>, area: Rect) {
    let line = Line::from(vec![
        Span::styled(
            "Your Performance",
            Style::default().add_modifier(Modifier::BOLD),
        ),
        Span::styled("  [r] refresh", Style::default().fg(Color::DarkGray)),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}

fn render_dashboard(frame: &mut Frame<'_>, dashboard: &Dashboard, area: Rect) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(40),
            Constraint::Percentage(25),
            Constraint::Percentage(35),
        ])
        .split(area);

    render_chart(frame, dashboard, columns[0]);
    render_legend(frame, dashboard, columns[1]);
    render_table(frame, dashboard, columns[2]);
}

fn render_chart(frame: &mut Frame<'_>, dashboard: &Dashboard, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));
    let inner = block.inner(area);

    // Terminal cells are about twice as tall as wide.
    let aspect = if inner.height == 0 {
        1.0
    } else {
        f64::from(inner.width) / (2.0 * f64::from(inner.height))
    };
    let arcs = donut_points(dashboard.slices(), DONUT_HOLE, 24, 720);

    let canvas = Canvas::default()
        .block(block)
        .marker(Marker::Braille)
        .x_bounds([-1.1 * aspect, 1.1 * aspect])
        .y_bounds([-1.1, 1.1])
        .paint(|ctx| {
            for (color, coords) in &arcs {
                ctx.draw(&Points {
                    coords,
                    color: *color,
                });
            }
        });

    frame.render_widget(canvas, area);
}

fn render_legend(frame: &mut Frame<'_>, dashboard: &Dashboard, area: Rect) {
    let mut lines = Vec::new();
    for slice in dashboard.slices() {
        let mut parts = slice.label.lines();
        if let Some(tech) = parts.next() {
            lines.push(Line::from(vec![
                Span::styled("■ ", Style::default().fg(slice.color)),
                Span::styled(tech.to_string(), Style::default().add_modifier(Modifier::BOLD)),
            ]));
        }
        for rest in parts {
            lines.push(Line::from(format!("  {rest}")));
        }
    }

    frame.render_widget(
        Paragraph::new(lines).block(Block::default().borders(Borders::NONE)),
        area,
    );
}

fn render_table(frame: &mut Frame<'_>, dashboard: &Dashboard, area: Rect) {
    let rows: Vec<Row<'_>> = dashboard
        .rows()
        .iter()
        .map(|row| {
            Row::new(vec![
                Cell::from(row.tech.clone()),
                Cell::from(Line::from(row.total_minutes.to_string()).alignment(Alignment::Right)),
            ])
        })
        .collect();

    let table = Table::new(rows, [Constraint::Percentage(60), Constraint::Percentage(40)])
        .header(
            Row::new(vec![
                Cell::from("Tech"),
                Cell::from(Line::from("Total (min)").alignment(Alignment::Right)),
            ])
            .style(Style::default().add_modifier(Modifier::BOLD)),
        )
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::DarkGray)),
        );

    frame.render_widget(table, area);
}

fn render_status_bar<N: Notifier>(
    frame: &mut Frame<'_>,
    controller: &FocusController<N>,
    area: Rect,
) {
    let status = controller.notice().map_or_else(
        || Paragraph::new(HELP).style(Style::default().fg(Color::DarkGray)),
        |notice| {
            Paragraph::new(notice.to_string()).style(
                Style::default()
                    .fg(Color::Black)
                    .bg(Color::Yellow),
            )
        },
    );

    frame.render_widget(status, area);
}

/// A horizontally centered slice of `area`, at most `width` cells wide.
fn centered(area: Rect, width: u16) -> Rect {
    let width = width.min(area.width);
    Rect {
        x: area.x + (area.width - width) / 2,
        width,
        ..area
    }
}

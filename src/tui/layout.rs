//! TUI layout and widget rendering.

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::symbols;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Axis, Block, Borders, Chart, Dataset, Gauge, Paragraph};

use super::runtime::App;
use super::style;

/// Renders the full TUI frame.
pub fn render(frame: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // header
            Constraint::Min(10),   // chart
            Constraint::Length(3), // efficiency gauge
            Constraint::Length(4), // status panel
            Constraint::Length(1), // footer
        ])
        .split(frame.area());

    render_header(frame, app, chunks[0]);
    render_chart(frame, app, chunks[1]);
    render_efficiency_gauge(frame, app, chunks[2]);
    render_status(frame, app, chunks[3]);
    render_footer(frame, chunks[4]);
}

/// Header bar: preset name, sweep progress, speed, run state.
fn render_header(frame: &mut Frame, app: &App, area: Rect) {
    let (state_icon, state_label) = if app.is_finished() {
        ("■", "DONE")
    } else if app.paused {
        ("‖", "PAUSED")
    } else {
        ("▶", "RUNNING")
    };

    let header = Line::from(vec![
        Span::styled(
            " SOLAR-PLANT ",
            Style::default()
                .fg(style::HEADER_FG)
                .bg(style::HEADER_BG)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(" "),
        Span::styled(
            &app.preset_name,
            Style::default().add_modifier(Modifier::BOLD),
        ),
        Span::raw(format!(
            " │ step {}/{} │ {}ms │ {} {} ",
            app.steps_done(),
            app.total_steps,
            app.tick_interval_ms(),
            state_icon,
            state_label,
        )),
    ]);
    frame.render_widget(Paragraph::new(header), area);
}

/// Plant output (and reference setup, if any) against source angle.
fn render_chart(frame: &mut Frame, app: &App, area: Rect) {
    let plant_data: Vec<(f64, f64)> = app
        .history
        .iter()
        .map(|s| (s.source_angle_rad, s.plant_power_w))
        .collect();

    let reference_data: Vec<(f64, f64)> = app
        .history
        .iter()
        .filter_map(|s| s.reference_power_w.map(|p| (s.source_angle_rad, p)))
        .collect();

    let y_bounds = style::auto_bounds_y(&plant_data, &reference_data);
    let x_bounds = app.angle_bounds();

    let mut datasets = vec![
        Dataset::default()
            .name("Plant")
            .marker(symbols::Marker::Braille)
            .style(Style::default().fg(style::PLANT_COLOR))
            .data(&plant_data),
    ];
    if !reference_data.is_empty() {
        datasets.push(
            Dataset::default()
                .name("Reference")
                .marker(symbols::Marker::Dot)
                .style(Style::default().fg(style::REFERENCE_COLOR))
                .data(&reference_data),
        );
    }

    let chart = Chart::new(datasets)
        .block(
            Block::default()
                .title(" Plant Output vs Sun Angle ")
                .borders(Borders::ALL),
        )
        .x_axis(
            Axis::default()
                .title("rad")
                .bounds(x_bounds)
                .labels(vec![
                    format!("{:.2}", x_bounds[0]),
                    format!("{:.2}", x_bounds[1]),
                ]),
        )
        .y_axis(
            Axis::default()
                .title("W")
                .bounds(y_bounds)
                .labels(vec![
                    format!("{:.0}", y_bounds[0]),
                    format!("{:.0}", y_bounds[1]),
                ]),
        );

    frame.render_widget(chart, area);
}

/// Plant efficiency gauge for the latest sample.
fn render_efficiency_gauge(frame: &mut Frame, app: &App, area: Rect) {
    let pct = app.last_sample().map_or(0.0, |s| s.efficiency_pct);
    let gauge = Gauge::default()
        .block(Block::default().title(" Efficiency ").borders(Borders::ALL))
        .gauge_style(Style::default().fg(style::efficiency_color(pct)))
        .ratio((pct / 100.0).clamp(0.0, 1.0))
        .label(format!("{pct:.1}%"));
    frame.render_widget(gauge, area);
}

/// Status panel with the latest sample.
fn render_status(frame: &mut Frame, app: &App, area: Rect) {
    let lines = if let Some(s) = app.last_sample() {
        let reference = s
            .reference_power_w
            .map_or_else(|| "-".to_string(), |p| format!("{p:.2} W"));
        vec![
            Line::from(format!(
                "  sun={:>7.4} rad  plant={:>10.2} W  rated={:.0} W",
                s.source_angle_rad,
                s.plant_power_w,
                app.max_output_w(),
            )),
            Line::from(format!("  reference={reference}")),
        ]
    } else {
        vec![Line::from("  Waiting for first step...")]
    };

    let block = Block::default().title(" Status ").borders(Borders::ALL);
    frame.render_widget(Paragraph::new(lines).block(block), area);
}

/// Footer with keybinding hints.
fn render_footer(frame: &mut Frame, area: Rect) {
    let footer = Paragraph::new(Line::from(Span::styled(
        " q:Quit  Space:Pause  +/-:Speed  1/2/3:Preset  r:Restart",
        Style::default().fg(style::FOOTER_FG),
    )));
    frame.render_widget(footer, area);
}

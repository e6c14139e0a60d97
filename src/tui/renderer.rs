//! Frame rendering for the dashboard TUI. All values come straight from the
//! current `DashboardReport`; nothing is aggregated here.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{BarChart, Block, Borders, Cell, Gauge, List, ListItem, Paragraph, Row, Table},
    Frame,
};

use super::app::App;
use super::theme::Theme;
use crate::core::{Series, SleepDisorder};

pub fn render(frame: &mut Frame, app: &App) {
    let theme = Theme::default_theme();
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4), // metric cards
            Constraint::Min(12),   // charts + table
            Constraint::Length(1), // key hints
        ])
        .split(frame.area());

    render_metric_cards(frame, app, &theme, rows[0]);
    render_body(frame, app, &theme, rows[1]);
    render_footer(frame, &theme, rows[2]);
}

fn render_metric_cards(frame: &mut Frame, app: &App, theme: &Theme, area: Rect) {
    let count = app.report.metrics.len().max(1) as u32;
    let cards = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(vec![Constraint::Ratio(1, count); count as usize])
        .split(area);

    for (metric, card) in app.report.metrics.iter().zip(cards.iter()) {
        let lines = vec![
            Line::from(Span::styled(
                metric.content.to_string(),
                theme.value_style(),
            )),
            Line::from(Span::styled(metric.trend.clone(), theme.trend_style())),
        ];
        let widget = Paragraph::new(lines).block(
            Block::default()
                .borders(Borders::ALL)
                .title(Span::styled(metric.title.clone(), theme.title_style())),
        );
        frame.render_widget(widget, *card);
    }
}

fn render_body(frame: &mut Frame, app: &App, theme: &Theme, area: Rect) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(26), Constraint::Min(40)])
        .split(area);

    render_filter_pane(frame, app, theme, columns[0]);

    let chart_rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage(34),
            Constraint::Percentage(33),
            Constraint::Percentage(33),
        ])
        .split(columns[1]);

    let top = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(34),
            Constraint::Percentage(33),
            Constraint::Percentage(33),
        ])
        .split(chart_rows[0]);
    render_bar_chart(frame, theme, top[0], "Gender", &app.report.gender_breakdown);
    render_funnel(frame, app, theme, top[1]);
    render_bar_chart(frame, theme, top[2], "BMI", &app.report.bmi_breakdown);

    let middle = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
        .split(chart_rows[1]);
    render_treemap(frame, app, theme, middle[0]);
    render_table(frame, app, theme, middle[1]);

    let bottom_count = app.report.average_panels.len().max(1) as u32;
    let bottom = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(vec![
            Constraint::Ratio(1, bottom_count);
            bottom_count as usize
        ])
        .split(chart_rows[2]);
    for (panel, slot) in app.report.average_panels.iter().zip(bottom.iter()) {
        render_bar_chart(frame, theme, *slot, &panel.title, &panel.series);
    }
}

fn render_filter_pane(frame: &mut Frame, app: &App, theme: &Theme, area: Rect) {
    let mut items: Vec<ListItem> = vec![
        ListItem::new(Line::from(vec![
            Span::styled("Population: ", theme.trend_style()),
            Span::styled(app.population().to_string(), theme.value_style()),
        ])),
        ListItem::new(Line::from("")),
    ];

    for (i, disorder) in SleepDisorder::ALL.iter().enumerate() {
        let selected = app.filter.contains(*disorder);
        let marker = if selected { "[x] " } else { "[ ] " };
        let style = if i == app.cursor {
            theme.cursor_style()
        } else if selected {
            theme.selected_style()
        } else {
            theme.unselected_style()
        };
        items.push(ListItem::new(Line::from(Span::styled(
            format!("{marker}{disorder}"),
            style,
        ))));
    }

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .title(Span::styled("Sleep Disorder", theme.title_style())),
    );
    frame.render_widget(list, area);
}

fn render_bar_chart(frame: &mut Frame, theme: &Theme, area: Rect, title: &str, series: &Series) {
    let data: Vec<(&str, u64)> = series
        .iter()
        .map(|p| (p.label.as_str(), p.value.round() as u64))
        .collect();
    let chart = BarChart::default()
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(Span::styled(title.to_string(), theme.title_style())),
        )
        .bar_width(9)
        .bar_gap(1)
        .bar_style(theme.bar_style())
        .value_style(theme.value_style())
        .label_style(theme.text_style())
        .data(&data[..]);
    frame.render_widget(chart, area);
}

fn render_funnel(frame: &mut Frame, app: &App, theme: &Theme, area: Rect) {
    let series = &app.report.blood_pressure_funnel;
    let block = Block::default()
        .borders(Borders::ALL)
        .title(Span::styled("Blood Pressure", theme.title_style()));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    if series.is_empty() || inner.height == 0 {
        return;
    }

    let total = app.report.selected.max(1) as f64;
    let stages = Layout::default()
        .direction(Direction::Vertical)
        .constraints(vec![Constraint::Length(1); series.len()])
        .split(inner);

    for (point, slot) in series.iter().zip(stages.iter()) {
        let ratio = (point.value / total).clamp(0.0, 1.0);
        let gauge = Gauge::default()
            .ratio(ratio)
            .label(format!("{} {}", point.label, point.value as u64))
            .gauge_style(theme.bar_style());
        frame.render_widget(gauge, *slot);
    }
}

fn render_treemap(frame: &mut Frame, app: &App, theme: &Theme, area: Rect) {
    let series = &app.report.occupation_treemap;
    let max = series
        .iter()
        .map(|p| p.value)
        .fold(f64::NEG_INFINITY, f64::max)
        .max(1.0);

    let items: Vec<ListItem> = series
        .iter()
        .map(|p| {
            let width = ((p.value / max) * 12.0).round() as usize;
            ListItem::new(Line::from(vec![
                Span::styled(format!("{:<14}{:>4} ", p.label, p.value as u64), theme.text_style()),
                Span::styled("▇".repeat(width.max(1)), theme.bar_style()),
            ]))
        })
        .collect();

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .title(Span::styled("Occupation", theme.title_style())),
    );
    frame.render_widget(list, area);
}

fn render_table(frame: &mut Frame, app: &App, theme: &Theme, area: Rect) {
    let header = Row::new(vec![
        "Gender", "Occupation", "Disorder", "BMI", "Qual", "Stress", "Steps", "Sleep",
    ]);

    let visible = area.height.saturating_sub(3) as usize;
    let rows: Vec<Row> = app
        .report
        .table
        .iter()
        .skip(app.table_offset)
        .take(visible)
        .map(|r| {
            Row::new(vec![
                Cell::from(r.gender.label()),
                Cell::from(r.occupation.clone()),
                Cell::from(if r.has_disorder { "yes" } else { "no" }),
                Cell::from(r.bmi_category.label()),
                Cell::from(format!("{:.0}", r.quality_of_sleep)),
                Cell::from(format!("{:.0}", r.stress_level)),
                Cell::from(format!("{:.0}", r.daily_steps)),
                Cell::from(format!("{:.1}", r.sleep_duration)),
            ])
        })
        .collect();

    let table = Table::new(
        rows,
        [
            Constraint::Length(7),
            Constraint::Min(12),
            Constraint::Length(8),
            Constraint::Length(11),
            Constraint::Length(5),
            Constraint::Length(6),
            Constraint::Length(6),
            Constraint::Length(6),
        ],
    )
    .header(header.style(theme.title_style()))
    .block(Block::default().borders(Borders::ALL).title(Span::styled(
        format!(
            "Records ({}-{} of {})",
            app.table_offset + 1,
            (app.table_offset + visible).min(app.report.table.len()),
            app.report.table.len()
        ),
        theme.title_style(),
    )));
    frame.render_widget(table, area);
}

fn render_footer(frame: &mut Frame, theme: &Theme, area: Rect) {
    let hints = Paragraph::new(Line::from(Span::styled(
        " ↑/↓ move · space toggle disorder · PgUp/PgDn scroll table · q quit",
        theme.trend_style(),
    )));
    frame.render_widget(hints, area);
}

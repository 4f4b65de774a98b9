use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style, Stylize},
    symbols,
    text::{Line, Span},
    widgets::{
        Axis, Bar, BarChart, BarGroup, Block, Chart, Clear, Dataset, Gauge, GraphType,
        Paragraph, Row, Table, TableState, Tabs, Wrap,
    },
};

use crate::charts;
use crate::data::{
    ACTUAL_CHURN, AGE_BANDS, CHURN_BY_AGE, CHURN_BY_PRODUCT_MIX, CHURN_BY_QUARTER,
    CORRELATION_LABELS, CORRELATION_MATRIX, FEATURE_IMPORTANCE, FEATURE_LABELS, MONTH_LABELS,
    PRECISION_RECALL_CURVE, PREDICTED_CHURN, PRODUCT_MIX_LABELS, QUARTER_LABELS, ROC_CURVE,
    model_performance, profile_extras, report_summary,
};
use crate::domain::{HELP_TEXT, Page};
use crate::format::{
    CorrelationStrength, RiskLevel, format_count, format_percent, format_rwf, format_tenure,
};
use crate::model::{DISPLAY_COLUMNS, Model};
use crate::schema::Record;
use crate::view::SortDirection;

pub fn draw(model: &Model, frame: &mut Frame) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Min(0), Constraint::Length(1)])
        .split(frame.area());

    draw_tabs(model, frame, chunks[0]);
    match model.page() {
        Page::Dashboard => draw_dashboard(model, frame, chunks[1]),
        Page::Retention => draw_retention(model, frame, chunks[1]),
        Page::Lookup => draw_lookup(model, frame, chunks[1]),
        Page::Reports => draw_reports(frame, chunks[1]),
    }
    draw_status(model, frame, chunks[2]);

    if model.help_visible() {
        draw_help(frame);
    }
}

fn draw_tabs(model: &Model, frame: &mut Frame, area: Rect) {
    let titles = [Page::Dashboard, Page::Retention, Page::Lookup, Page::Reports]
        .map(|p| format!(" {} ", p.title()));
    let selected = match model.page() {
        Page::Dashboard => 0,
        Page::Retention => 1,
        Page::Lookup => 2,
        Page::Reports => 3,
    };
    let tabs = Tabs::new(titles.to_vec())
        .select(selected)
        .highlight_style(Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD));
    frame.render_widget(tabs, area);
}

// ---------------------------- Dashboard ------------------------------- //

fn draw_dashboard(model: &Model, frame: &mut Frame, area: Rect) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(5), Constraint::Min(8), Constraint::Length(9)])
        .split(area);

    draw_metric_cards(model, frame, rows[0]);

    let middle = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(rows[1]);
    let left = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(5)])
        .split(middle[0]);

    draw_churn_gauge(model, frame, left[0]);
    draw_trends_chart(frame, left[1]);
    draw_feature_importance(frame, middle[1]);

    let bottom = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(rows[2]);
    draw_top_risk_table(model, frame, bottom[0]);
    draw_segment_charts(frame, bottom[1]);
}

fn draw_metric_cards(model: &Model, frame: &mut Frame, area: Rect) {
    let m = model.metrics();
    let at_risk_share = m.at_risk_customers as f64 * 100.0 / m.total_customers as f64;
    let cards: [(&str, String, String); 4] = [
        ("Total Customers", format_count(m.total_customers), String::new()),
        (
            "At-Risk Customers",
            format_count(m.at_risk_customers),
            format!("{} of total", format_percent(at_risk_share)),
        ),
        ("Avg Account Balance", format_rwf(m.avg_account_balance), "of churners".to_string()),
        (
            "Avg Tenure",
            format!("{} years", m.avg_tenure),
            "of at-risk customers".to_string(),
        ),
    ];

    let slots = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(25); 4])
        .split(area);
    for (slot, (title, value, subtitle)) in slots.iter().zip(cards) {
        let lines = vec![
            Line::from(value.bold()),
            Line::from(subtitle.dark_gray()),
        ];
        let card = Paragraph::new(lines).block(Block::bordered().title(title));
        frame.render_widget(card, *slot);
    }
}

fn draw_churn_gauge(model: &Model, frame: &mut Frame, area: Rect) {
    let m = model.metrics();
    let gauge = Gauge::default()
        .block(Block::bordered().title("Churn Distribution"))
        .gauge_style(Style::default().fg(Color::Red).bg(Color::Green))
        .ratio(m.churn_rate / 100.0)
        .label(format!(
            "{} churn / {} retained",
            format_percent(m.churn_rate),
            format_percent(m.retention_rate)
        ));
    frame.render_widget(gauge, area);
}

fn draw_trends_chart(frame: &mut Frame, area: Rect) {
    let predicted = charts::line_points(PREDICTED_CHURN);
    let actual = charts::sparse_line_points(ACTUAL_CHURN);
    let [y_low, y_high] = charts::y_bounds(&[&predicted, &actual]);

    let datasets = vec![
        Dataset::default()
            .name("Predicted")
            .marker(symbols::Marker::Braille)
            .graph_type(GraphType::Line)
            .style(Style::default().fg(Color::Blue))
            .data(&predicted),
        Dataset::default()
            .name("Actual")
            .marker(symbols::Marker::Braille)
            .graph_type(GraphType::Line)
            .style(Style::default().fg(Color::Yellow))
            .data(&actual),
    ];
    let chart = Chart::new(datasets)
        .block(Block::bordered().title("Monthly Churn Trends"))
        .x_axis(
            Axis::default()
                .bounds([0.0, (MONTH_LABELS.len() - 1) as f64])
                .labels([MONTH_LABELS[0], MONTH_LABELS[5], MONTH_LABELS[11]])
                .style(Style::default().fg(Color::DarkGray)),
        )
        .y_axis(
            Axis::default()
                .bounds([y_low, y_high])
                .labels([
                    format!("{}%", y_low),
                    format!("{}%", (y_low + y_high) / 2.0),
                    format!("{}%", y_high),
                ])
                .style(Style::default().fg(Color::DarkGray)),
        );
    frame.render_widget(chart, area);
}

fn draw_feature_importance(frame: &mut Frame, area: Rect) {
    let scaled = charts::bar_data(FEATURE_LABELS, FEATURE_IMPORTANCE, 100.0);
    let bars: Vec<Bar> = scaled
        .iter()
        .zip(FEATURE_IMPORTANCE)
        .map(|(&(label, value), &raw)| {
            Bar::default()
                .label(Line::from(label))
                .value(value)
                .text_value(format!("{:.2}", raw))
                .style(Style::default().fg(Color::Blue))
        })
        .collect();
    let chart = BarChart::default()
        .block(Block::bordered().title("Feature Importance"))
        .direction(Direction::Horizontal)
        .bar_width(1)
        .bar_gap(0)
        .data(BarGroup::default().bars(&bars));
    frame.render_widget(chart, area);
}

fn draw_segment_charts(frame: &mut Frame, area: Rect) {
    let halves = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    let age_labels: Vec<&'static str> = AGE_BANDS.iter().map(|b| b.label).collect();
    draw_rate_bars(frame, halves[0], "Churn by Age", &age_labels, CHURN_BY_AGE);
    draw_rate_bars(frame, halves[1], "Churn by Products", PRODUCT_MIX_LABELS, CHURN_BY_PRODUCT_MIX);
}

fn draw_rate_bars(
    frame: &mut Frame,
    area: Rect,
    title: &str,
    labels: &[&'static str],
    rates: &[f64],
) {
    let bars: Vec<Bar> = labels
        .iter()
        .zip(rates)
        .map(|(&label, &rate)| {
            Bar::default()
                .label(Line::from(label))
                .value((rate * 10.0).round() as u64)
                .text_value(format_percent(rate))
                .style(Style::default().fg(Color::Cyan))
        })
        .collect();
    let chart = BarChart::default()
        .block(Block::bordered().title(title.to_string()))
        .direction(Direction::Horizontal)
        .bar_width(1)
        .bar_gap(0)
        .data(BarGroup::default().bars(&bars));
    frame.render_widget(chart, area);
}

fn draw_top_risk_table(model: &Model, frame: &mut Frame, area: Rect) {
    let header = Row::new(["Customer", "Account", "Balance", "Risk", "Churn", "Tenure"])
        .style(Style::default().add_modifier(Modifier::BOLD));
    let rows: Vec<Row> = model
        .top_risk()
        .iter()
        .map(|r| {
            Row::new(vec![
                Line::from(field_text(r, "name")),
                account_type_span(&field_text(r, "account_type")),
                Line::from(format_rwf(field_num(r, "balance"))),
                risk_span(field_num(r, "risk_score")),
                risk_span(field_num(r, "churn_probability")),
                Line::from(format_tenure(field_num(r, "tenure"))),
            ])
        })
        .collect();
    let table = Table::new(
        rows,
        [
            Constraint::Min(18),
            Constraint::Length(9),
            Constraint::Length(14),
            Constraint::Length(7),
            Constraint::Length(7),
            Constraint::Length(7),
        ],
    )
    .header(header)
    .block(Block::bordered().title("Top Risk Customers"));
    frame.render_widget(table, area);
}

// ----------------------------- Reports -------------------------------- //

fn draw_reports(frame: &mut Frame, area: Rect) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(12), Constraint::Length(9)])
        .split(area);

    draw_report_cards(frame, rows[0]);

    let middle = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(58), Constraint::Percentage(42)])
        .split(rows[1]);
    draw_correlation_heatmap(frame, middle[0]);
    draw_model_performance(frame, middle[1]);

    let bottom = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(35),
            Constraint::Percentage(35),
            Constraint::Percentage(30),
        ])
        .split(rows[2]);
    draw_roc_chart(frame, bottom[0]);
    draw_precision_recall_chart(frame, bottom[1]);
    draw_rate_bars(frame, bottom[2], "Seasonal Patterns", QUARTER_LABELS, CHURN_BY_QUARTER);
}

fn draw_report_cards(frame: &mut Frame, area: Rect) {
    let summary = report_summary();
    let perf = model_performance();
    let cards: [(&str, String); 4] = [
        ("Overall Churn Rate", format!("{}%", summary.churn_rate)),
        ("Retention Rate", format!("{}%", summary.retention_rate)),
        ("Revenue at Risk", summary.revenue_at_risk.to_string()),
        ("Model Accuracy", format_percent(perf.accuracy)),
    ];
    let slots = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(25); 4])
        .split(area);
    for (slot, (title, value)) in slots.iter().zip(cards) {
        let card = Paragraph::new(Line::from(value.bold()))
            .block(Block::bordered().title(title));
        frame.render_widget(card, *slot);
    }
}

fn draw_correlation_heatmap(frame: &mut Frame, area: Rect) {
    let mut lines = Vec::with_capacity(CORRELATION_LABELS.len() + 3);
    let mut header = vec![Span::raw(format!("{:<14}", ""))];
    for label in CORRELATION_LABELS {
        let short = label.split(' ').next().unwrap_or(label);
        header.push(Span::styled(format!("{:>6.6}", short), Style::default().dark_gray()));
    }
    lines.push(Line::from(header));

    for (label, row) in CORRELATION_LABELS.iter().zip(CORRELATION_MATRIX) {
        let mut spans = vec![Span::raw(format!("{:<14.14}", label))];
        for &r in row {
            spans.push(correlation_cell(r));
        }
        lines.push(Line::from(spans));
    }

    lines.push(Line::default());
    lines.push(Line::from(vec![
        Span::styled("■ Strong -  ", Style::default().fg(Color::Red)),
        Span::styled("■ Weak  ", Style::default().fg(Color::Gray)),
        Span::styled("■ Strong +", Style::default().fg(Color::Blue)),
    ]));

    let grid = Paragraph::new(lines).block(Block::bordered().title("Feature Correlation Matrix"));
    frame.render_widget(grid, area);
}

// Values below |0.1| are left blank, as noise.
fn correlation_cell(r: f64) -> Span<'static> {
    let text = if r.abs() >= 0.1 {
        format!("{:>6.2}", r)
    } else {
        format!("{:>6}", "")
    };
    Span::styled(text, correlation_style(r))
}

fn correlation_style(r: f64) -> Style {
    let base = Style::default();
    match (CorrelationStrength::bucket(r), r >= 0.0) {
        (CorrelationStrength::Strong, true) => base.fg(Color::Blue).bold(),
        (CorrelationStrength::Strong, false) => base.fg(Color::Red).bold(),
        (CorrelationStrength::Moderate, true) => base.fg(Color::LightBlue),
        (CorrelationStrength::Moderate, false) => base.fg(Color::LightRed),
        (CorrelationStrength::Mild, true) => base.fg(Color::Cyan),
        (CorrelationStrength::Mild, false) => base.fg(Color::Magenta),
        (CorrelationStrength::Weak, _) => base.fg(Color::Gray),
        (CorrelationStrength::Negligible, _) => base.fg(Color::DarkGray),
    }
}

fn draw_model_performance(frame: &mut Frame, area: Rect) {
    let perf = model_performance();
    let [[tn, fp], [fneg, tp]] = perf.confusion;
    let mut lines = vec![
        profile_line("Accuracy", format_percent(perf.accuracy)),
        profile_line("Precision", format_percent(perf.precision)),
        profile_line("Recall", format_percent(perf.recall)),
        profile_line("F1-Score", format_percent(perf.f1_score)),
        profile_line("AUC", format!("{:.2}", perf.auc)),
        Line::default(),
        Line::from("Confusion Matrix".bold()),
        Line::from(Span::styled(
            format!("{:<13}{:>11}{:>12}", "", "Pred. stay", "Pred. churn"),
            Style::default().dark_gray(),
        )),
        Line::from(vec![
            Span::raw(format!("{:<13}", "Actual stay")),
            Span::styled(format!("{:>11}", tn), Style::default().fg(Color::Green)),
            Span::styled(format!("{:>12}", fp), Style::default().fg(Color::Red)),
        ]),
        Line::from(vec![
            Span::raw(format!("{:<13}", "Actual churn")),
            Span::styled(format!("{:>11}", fneg), Style::default().fg(Color::LightRed)),
            Span::styled(format!("{:>12}", tp), Style::default().fg(Color::Green)),
        ]),
    ];
    if perf.auc < 0.5 {
        lines.push(Line::default());
        lines.push(Line::from(Span::styled(
            "AUC below 0.5: weaker than a random classifier",
            Style::default().fg(Color::Yellow),
        )));
    }
    let panel = Paragraph::new(lines)
        .wrap(Wrap { trim: true })
        .block(Block::bordered().title("Model Performance"));
    frame.render_widget(panel, area);
}

fn draw_roc_chart(frame: &mut Frame, area: Rect) {
    let perf = model_performance();
    let diagonal: Vec<(f64, f64)> = ROC_CURVE.iter().map(|&(x, _)| (x, x)).collect();
    let datasets = vec![
        Dataset::default()
            .name(format!("AUC = {:.2}", perf.auc))
            .marker(symbols::Marker::Braille)
            .graph_type(GraphType::Line)
            .style(Style::default().fg(Color::Blue))
            .data(ROC_CURVE),
        Dataset::default()
            .name("Random")
            .marker(symbols::Marker::Braille)
            .graph_type(GraphType::Line)
            .style(Style::default().fg(Color::DarkGray))
            .data(&diagonal),
    ];
    let chart = Chart::new(datasets)
        .block(Block::bordered().title("ROC Curve"))
        .x_axis(unit_axis("FPR"))
        .y_axis(unit_axis("TPR"));
    frame.render_widget(chart, area);
}

fn draw_precision_recall_chart(frame: &mut Frame, area: Rect) {
    let datasets = vec![
        Dataset::default()
            .name("Precision")
            .marker(symbols::Marker::Braille)
            .graph_type(GraphType::Line)
            .style(Style::default().fg(Color::Yellow))
            .data(PRECISION_RECALL_CURVE),
    ];
    let chart = Chart::new(datasets)
        .block(Block::bordered().title("Precision-Recall"))
        .x_axis(unit_axis("Recall"))
        .y_axis(unit_axis("Precision"));
    frame.render_widget(chart, area);
}

fn unit_axis(title: &str) -> Axis<'_> {
    Axis::default()
        .title(title)
        .bounds([0.0, 1.0])
        .labels(["0", "0.5", "1"])
        .style(Style::default().fg(Color::DarkGray))
}

// ---------------------------- Retention ------------------------------- //

fn draw_retention(model: &Model, frame: &mut Frame, area: Rect) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(4), Constraint::Length(1)])
        .split(area);

    let filters = Paragraph::new(model.filter_summary())
        .block(Block::bordered().title("Search & Filters"));
    frame.render_widget(filters, rows[0]);

    draw_retention_table(model, frame, rows[1]);

    let view = model.retention();
    let summary = Line::from(format!(
        "Showing {} of {} at-risk customers — {} selected",
        view.visible_len(),
        view.source_len(),
        view.state().selection().len()
    ));
    frame.render_widget(Paragraph::new(summary.dark_gray()), rows[2]);
}

fn draw_retention_table(model: &Model, frame: &mut Frame, area: Rect) {
    let view = model.retention();
    let (cursor_row, cursor_col) = model.cursor();

    let mut header_cells: Vec<Line> = vec![Line::from("Sel")];
    for (i, &col) in DISPLAY_COLUMNS.iter().enumerate() {
        let mut label = view
            .schema()
            .field(col)
            .map(|spec| spec.label.clone())
            .unwrap_or_else(|| col.to_string());
        if view.state().sort_key() == col {
            label.push_str(match view.state().direction() {
                SortDirection::Descending => " ▼",
                SortDirection::Ascending => " ▲",
            });
        }
        let mut style = Style::default().add_modifier(Modifier::BOLD);
        if i == cursor_col {
            style = style.add_modifier(Modifier::UNDERLINED).fg(Color::Blue);
        }
        header_cells.push(Line::from(Span::styled(label, style)));
    }
    let header = Row::new(header_cells);

    let rows: Vec<Row> = view
        .visible_records()
        .map(|r| {
            let marker = if view.is_selected(r.id()) { "[x]" } else { "[ ]" };
            Row::new(vec![
                Line::from(marker),
                Line::from(format!("{} ({})", field_text(r, "name"), r.id())),
                account_type_span(&field_text(r, "account_type")),
                Line::from(format_rwf(field_num(r, "balance"))),
                risk_span(field_num(r, "churn_probability")),
                Line::from(format_tenure(field_num(r, "tenure"))),
                risk_span(field_num(r, "risk_score")),
            ])
        })
        .collect();

    let table = Table::new(
        rows,
        [
            Constraint::Length(3),
            Constraint::Min(24),
            Constraint::Length(12),
            Constraint::Length(14),
            Constraint::Length(18),
            Constraint::Length(8),
            Constraint::Length(12),
        ],
    )
    .header(header)
    .block(Block::bordered())
    .row_highlight_style(Style::default().add_modifier(Modifier::REVERSED))
    .highlight_symbol("> ");

    let mut state = TableState::default();
    if view.visible_len() > 0 {
        state.select(Some(cursor_row));
    }
    frame.render_stateful_widget(table, area, &mut state);
}

// ----------------------------- Lookup --------------------------------- //

fn draw_lookup(model: &Model, frame: &mut Frame, area: Rect) {
    let view = model.lookup();
    if view.state().search_text().is_empty() {
        let hint = Paragraph::new("Press / to search by customer name or id")
            .alignment(Alignment::Center)
            .block(Block::bordered().title("Customer Lookup"));
        frame.render_widget(hint, area);
        return;
    }
    let Some(record) = view.visible_record(0) else {
        let empty = Paragraph::new(format!(
            "No customer matched \"{}\"",
            view.state().search_text()
        ))
        .alignment(Alignment::Center)
        .block(Block::bordered().title("Customer Lookup"));
        frame.render_widget(empty, area);
        return;
    };

    let halves = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    let extras = profile_extras();
    let churn = field_num(record, "churn_probability");
    let level = RiskLevel::bucket(churn);

    let identity = vec![
        profile_line("Name", field_text(record, "name")),
        profile_line("Customer ID", record.id().to_string()),
        profile_line("Email", extras.email.to_string()),
        profile_line("Phone", extras.phone.to_string()),
        profile_line("Address", extras.address.to_string()),
        profile_line("Age", field_num(record, "age").to_string()),
        Line::default(),
        profile_line("Account Type", field_text(record, "account_type")),
        profile_line("Balance", format_rwf(field_num(record, "balance"))),
        profile_line("Tenure", format_tenure(field_num(record, "tenure"))),
        profile_line("Credit Score", extras.credit_score.to_string()),
        profile_line("Products", field_text(record, "products")),
    ];
    let profile = Paragraph::new(identity)
        .wrap(Wrap { trim: true })
        .block(Block::bordered().title("Profile"));
    frame.render_widget(profile, halves[0]);

    let mut risk_lines = vec![
        Line::from(vec![
            Span::styled("Risk Level: ", Style::default().dark_gray()),
            Span::styled(level.label(), Style::default().fg(risk_color(level)).bold()),
        ]),
        profile_line("Churn Probability", format_percent(churn)),
        profile_line("Risk Score", format_percent(field_num(record, "risk_score"))),
        profile_line("Last Activity", field_text(record, "last_activity")),
        profile_line("Last Login", extras.last_login.to_string()),
        Line::default(),
        profile_line("Txn Frequency", format!("{}/month", extras.txn_frequency)),
        profile_line("Avg Txn Value", format_rwf(extras.txn_avg_value)),
        profile_line("Mobile Usage", format_percent(extras.mobile_usage)),
        profile_line("Branch Visits", extras.branch_visits.to_string()),
        Line::default(),
        Line::from("Complaint History".bold()),
    ];
    for (date, kind, status) in extras.complaints {
        risk_lines.push(Line::from(format!("  {} {} ({})", date, kind, status)));
    }
    let risk = Paragraph::new(risk_lines)
        .wrap(Wrap { trim: true })
        .block(Block::bordered().title("Churn Risk"));
    frame.render_widget(risk, halves[1]);
}

// ------------------------- Shared widgets ------------------------------ //

fn draw_status(model: &Model, frame: &mut Frame, area: Rect) {
    let line = match model.prompt_view() {
        Some((_, result)) => {
            let (before, after) = split_at_char(&result.input, result.cursor);
            Line::from(vec![
                Span::styled("Search: ", Style::default().bold()),
                Span::raw(before),
                Span::styled(" ", Style::default().add_modifier(Modifier::REVERSED)),
                Span::raw(after),
            ])
        }
        None => Line::from(vec![
            Span::raw(model.status_message().to_string()),
            Span::styled("   (? for help)", Style::default().dark_gray()),
        ]),
    };
    frame.render_widget(Paragraph::new(line), area);
}

fn draw_help(frame: &mut Frame) {
    let area = centered_rect(frame.area(), 62, 26);
    frame.render_widget(Clear, area);
    let popup = Paragraph::new(HELP_TEXT).block(Block::bordered().title("Help"));
    frame.render_widget(popup, area);
}

fn centered_rect(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

fn split_at_char(s: &str, cursor: usize) -> (String, String) {
    let byte = s
        .char_indices()
        .nth(cursor)
        .map(|(i, _)| i)
        .unwrap_or(s.len());
    (s[..byte].to_string(), s[byte..].to_string())
}

fn profile_line(label: &str, value: String) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("{label}: "), Style::default().dark_gray()),
        Span::raw(value),
    ])
}

fn field_text(record: &Record, field: &str) -> String {
    record.get(field).map(|v| v.render()).unwrap_or_default()
}

fn field_num(record: &Record, field: &str) -> f64 {
    record.get(field).and_then(|v| v.as_num()).unwrap_or(0.0)
}

fn risk_color(level: RiskLevel) -> Color {
    match level {
        RiskLevel::Critical => Color::Red,
        RiskLevel::High => Color::LightRed,
        RiskLevel::Medium => Color::Yellow,
        RiskLevel::Low => Color::Green,
    }
}

fn risk_span(score: f64) -> Line<'static> {
    let level = RiskLevel::bucket(score);
    Line::from(Span::styled(
        format_percent(score),
        Style::default().fg(risk_color(level)),
    ))
}

fn account_type_span(account_type: &str) -> Line<'static> {
    let color = match account_type {
        "Premium" => Color::Magenta,
        "Standard" => Color::Blue,
        _ => Color::Gray,
    };
    Line::from(Span::styled(
        account_type.to_string(),
        Style::default().fg(color),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn centered_rect_is_clamped_and_centered() {
        let area = Rect::new(0, 0, 100, 40);
        let r = centered_rect(area, 52, 26);
        assert_eq!((r.x, r.y, r.width, r.height), (24, 7, 52, 26));
        let tiny = centered_rect(Rect::new(0, 0, 10, 5), 52, 26);
        assert_eq!((tiny.width, tiny.height), (10, 5));
    }

    #[test]
    fn prompt_split_respects_char_boundaries() {
        assert_eq!(split_at_char("grace", 2), ("gr".to_string(), "ace".to_string()));
        assert_eq!(split_at_char("grâce", 3), ("grâ".to_string(), "ce".to_string()));
        assert_eq!(split_at_char("abc", 9), ("abc".to_string(), String::new()));
    }

    #[test]
    fn correlation_cells_color_by_sign_and_strength() {
        assert_eq!(correlation_style(1.0).fg, Some(Color::Blue));
        assert_eq!(correlation_style(0.52).fg, Some(Color::LightBlue));
        assert_eq!(correlation_style(-0.22).fg, Some(Color::Gray));
        assert_eq!(correlation_style(-0.51).fg, Some(Color::LightRed));
        // Noise-level cells render blank
        assert_eq!(correlation_cell(0.05).content.trim(), "");
        assert_eq!(correlation_cell(-0.15).content.trim(), "-0.15");
    }

    #[test]
    fn risk_colors_follow_buckets() {
        assert_eq!(risk_color(RiskLevel::bucket(94.2)), Color::Red);
        assert_eq!(risk_color(RiskLevel::bucket(89.5)), Color::LightRed);
        assert_eq!(risk_color(RiskLevel::bucket(72.1)), Color::Yellow);
        assert_eq!(risk_color(RiskLevel::bucket(10.0)), Color::Green);
    }
}

use newsai_core::{AppViewModel, InputMode, ResultView, SentimentStyle};
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span, Text};
use ratatui::widgets::{Block, Paragraph, Tabs, Wrap};
use ratatui::Frame;

use super::constants::*;
use super::layout;

pub fn draw(frame: &mut Frame, view: &AppViewModel) {
    let areas = layout::split(frame.area(), view);

    render_header(frame, areas.header);
    render_tabs(frame, areas.tabs, view);
    render_input(frame, areas.input, view);
    render_submit(frame, areas.submit, view);
    if let (Some(area), Some(message)) = (areas.error, view.error.as_deref()) {
        render_error(frame, area, message);
    }
    if let Some(result) = &view.result {
        render_result(frame, areas.result, result);
    }
    frame.render_widget(
        Paragraph::new(HELP_TEXT).style(Style::new().fg(Color::DarkGray)),
        areas.help,
    );
}

/// Text rendering of the outcome for non-interactive output.
pub fn plain_lines(view: &AppViewModel) -> Vec<String> {
    if let Some(message) = &view.error {
        return vec![format!("Error: {message}")];
    }
    match &view.result {
        Some(result) => vec![
            format!(
                "Sentiment: {} {} ({})",
                result.label,
                result.emoji,
                result.style.css_class()
            ),
            format!("Confidence: {}%", result.confidence_percent),
            format!("Summary: {}", result.summary),
            original_length_text(result),
        ],
        None => Vec::new(),
    }
}

pub fn sentiment_style(style: SentimentStyle) -> Style {
    let color = match style {
        SentimentStyle::Positive => Color::Green,
        SentimentStyle::Negative => Color::Red,
        SentimentStyle::Neutral => Color::Blue,
    };
    Style::new().fg(color).add_modifier(Modifier::BOLD)
}

fn original_length_text(result: &ResultView) -> String {
    format!("Original length: {} characters", result.original_length)
}

fn render_header(frame: &mut Frame, area: Rect) {
    let line = Line::from(vec![
        Span::styled(APP_TITLE, Style::new().fg(Color::Blue).add_modifier(Modifier::BOLD)),
        Span::raw("  "),
        Span::styled(APP_TAGLINE, Style::new().fg(Color::DarkGray)),
    ]);
    frame.render_widget(Paragraph::new(line).block(Block::bordered()), area);
}

fn render_tabs(frame: &mut Frame, area: Rect, view: &AppViewModel) {
    let selected = match view.active_mode {
        InputMode::Url => 0,
        InputMode::Text => 1,
    };
    let tabs = Tabs::new(vec![TAB_URL, TAB_TEXT])
        .select(selected)
        .highlight_style(
            Style::new()
                .fg(Color::Blue)
                .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
        )
        .block(Block::bordered());
    frame.render_widget(tabs, area);
}

fn render_input(frame: &mut Frame, area: Rect, view: &AppViewModel) {
    let title = match view.active_mode {
        InputMode::Url => " Article URL ",
        InputMode::Text => " Article text ",
    };
    let block = Block::bordered().title(title);
    let inner = block.inner(area);

    if view.input_value.is_empty() {
        let placeholder = Span::styled(view.placeholder, Style::new().fg(Color::DarkGray));
        frame.render_widget(Paragraph::new(placeholder).block(block), area);
        return;
    }

    let rows = input_rows(&view.input_value, usize::from(inner.width), view.multiline);
    let offset = input_scroll(&rows, inner, view.multiline);
    let lines: Vec<Line> = rows.into_iter().map(Line::from).collect();
    frame.render_widget(Paragraph::new(lines).block(block).scroll(offset), area);
}

/// Splits the input plus caret into display rows. Text mode hard-wraps at
/// `width` so the row count matches what ends up on screen.
fn input_rows(value: &str, width: usize, multiline: bool) -> Vec<String> {
    let with_caret = format!("{value}{INPUT_CARET}");
    if !multiline {
        return vec![with_caret];
    }
    let width = width.max(1);
    let mut rows = Vec::new();
    for line in with_caret.split('\n') {
        let chars: Vec<char> = line.chars().collect();
        if chars.is_empty() {
            rows.push(String::new());
            continue;
        }
        rows.extend(chars.chunks(width).map(|chunk| chunk.iter().collect::<String>()));
    }
    rows
}

/// `(vertical, horizontal)` offset that keeps the caret row and column inside `inner`.
fn input_scroll(rows: &[String], inner: Rect, multiline: bool) -> (u16, u16) {
    let to_offset = |n: usize| u16::try_from(n).unwrap_or(u16::MAX);
    if multiline {
        (to_offset(rows.len().saturating_sub(usize::from(inner.height))), 0)
    } else {
        let columns = rows.last().map_or(0, |row| row.chars().count());
        (0, to_offset(columns.saturating_sub(usize::from(inner.width))))
    }
}

fn render_submit(frame: &mut Frame, area: Rect, view: &AppViewModel) {
    let style = if view.submit_enabled {
        Style::new().fg(Color::White).bg(Color::Blue).add_modifier(Modifier::BOLD)
    } else {
        Style::new().fg(Color::Gray).bg(Color::DarkGray)
    };
    let button = Paragraph::new(view.submit_label)
        .alignment(Alignment::Center)
        .style(style)
        .block(Block::bordered());
    frame.render_widget(button, area);
}

fn render_error(frame: &mut Frame, area: Rect, message: &str) {
    let error = Paragraph::new(format!("⚠ {message}"))
        .style(Style::new().fg(Color::Red))
        .wrap(Wrap { trim: true })
        .block(Block::bordered().border_style(Style::new().fg(Color::Red)));
    frame.render_widget(error, area);
}

fn render_result(frame: &mut Frame, area: Rect, result: &ResultView) {
    let (sentiment_area, summary_area) = layout::split_result(area);

    let sentiment = Text::from(vec![
        Line::from(vec![
            Span::styled(
                format!("{}%", result.confidence_percent),
                Style::new().add_modifier(Modifier::BOLD),
            ),
            Span::styled(" confidence", Style::new().fg(Color::DarkGray)),
        ]),
        Line::from(Span::styled(
            format!("{} {}", result.label, result.emoji),
            sentiment_style(result.style),
        )),
    ]);
    frame.render_widget(
        Paragraph::new(sentiment).block(Block::bordered().title(" Sentiment analysis ")),
        sentiment_area,
    );

    let summary = Text::from(vec![
        Line::from(result.summary.as_str()),
        Line::default(),
        Line::from(Span::styled(
            original_length_text(result),
            Style::new().fg(Color::DarkGray),
        )),
    ]);
    frame.render_widget(
        Paragraph::new(summary)
            .wrap(Wrap { trim: true })
            .block(Block::bordered().title(" Abstractive summary ")),
        summary_area,
    );
}

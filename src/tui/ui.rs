//! UI rendering for the TUI.

use crate::languages;
use crate::panel::Phase;
use crate::tui::app::{App, LangSide, SelectorState};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, Paragraph, Wrap},
    Frame,
};

/// Draw the entire UI.
pub fn draw(frame: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(0),    // Panes
            Constraint::Length(4), // Footer
        ])
        .split(frame.area());

    draw_header(frame, app, chunks[0]);
    draw_panes(frame, app, chunks[1]);
    draw_footer(frame, app, chunks[2]);

    if let Some(selector) = app.selector {
        draw_selector_overlay(frame, app, selector);
    }

    if app.show_help {
        draw_help_overlay(frame, app);
    }
}

/// Draw the title bar.
fn draw_header(frame: &mut Frame, app: &App, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(app.palette.border_inactive_style());

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let line = Line::from(vec![
        Span::styled("transly", app.palette.accent_style()),
        Span::styled("  as-you-type translation", app.palette.text_dim_style()),
        Span::raw("   "),
        Span::styled(
            format!(
                "{} → {}",
                languages::label(app.panel.source_lang()),
                languages::label(app.panel.target_lang())
            ),
            app.palette.text_style(),
        ),
        Span::raw("   "),
        Span::styled(format!("Theme: {}", app.theme_name()), app.palette.text_dim_style()),
    ]);

    frame.render_widget(Paragraph::new(line), inner);
}

/// Draw the source and output panes.
fn draw_panes(frame: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    draw_source_pane(frame, app, chunks[0]);
    draw_output_pane(frame, app, chunks[1]);
}

/// Draw the free-text input pane.
fn draw_source_pane(frame: &mut Frame, app: &App, area: Rect) {
    let title = format!(
        " {} [{}] — F2 ",
        languages::label(app.panel.source_lang()),
        app.panel.source_lang()
    );
    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(app.palette.border_active_style());

    let inner = block.inner(area);
    frame.render_widget(block, area);

    // Trailing block marks the insertion point.
    let line = Line::from(vec![
        Span::styled(app.panel.source_text(), app.palette.text_style()),
        Span::styled("▏", app.palette.accent_style()),
    ]);

    let paragraph = Paragraph::new(line).wrap(Wrap { trim: false });
    frame.render_widget(paragraph, inner);
}

/// Draw the read-only translation pane.
fn draw_output_pane(frame: &mut Frame, app: &App, area: Rect) {
    let title = format!(
        " {} [{}] — F3 ",
        languages::label(app.panel.target_lang()),
        app.panel.target_lang()
    );
    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(app.palette.border_inactive_style());

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let (text, style) = if app.panel.translated_text().is_empty() {
        let placeholder = match app.panel.phase() {
            Phase::Pending => "Translating…",
            _ => "Type to translate",
        };
        (placeholder.to_string(), app.palette.text_dim_style())
    } else if app.panel.phase() == Phase::Error {
        (app.panel.translated_text().to_string(), app.palette.error_style())
    } else {
        (app.panel.translated_text().to_string(), app.palette.text_style())
    };

    let paragraph = Paragraph::new(text).wrap(Wrap { trim: false }).style(style);
    frame.render_widget(paragraph, inner);
}

/// Draw the status line and key hints.
fn draw_footer(frame: &mut Frame, app: &App, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(app.palette.border_inactive_style());

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let (state_icon, state_text, state_style) = match app.panel.phase() {
        Phase::Idle => ("○", "Idle", app.palette.text_dim_style()),
        Phase::Pending => ("◐", "Translating", app.palette.shortcut_style()),
        Phase::Done => ("●", "Translated", app.palette.text_style()),
        Phase::Error => ("✗", "Error", app.palette.error_style()),
    };

    let lines = vec![
        Line::from(vec![
            Span::styled(state_icon, state_style),
            Span::raw(" "),
            Span::styled(state_text, state_style),
        ]),
        Line::from(vec![
            Span::styled("[Enter]", app.palette.shortcut_style()),
            Span::raw(" translate  "),
            Span::styled("[^R]", app.palette.shortcut_style()),
            Span::raw(" swap  "),
            Span::styled("[^T]", app.palette.shortcut_style()),
            Span::raw(" theme  "),
            Span::styled("[F2/F3]", app.palette.shortcut_style()),
            Span::raw(" languages  "),
            Span::styled("[F1]", app.palette.shortcut_style()),
            Span::raw(" help  "),
            Span::styled("[Esc]", app.palette.shortcut_style()),
            Span::raw(" quit"),
        ]),
    ];

    frame.render_widget(Paragraph::new(lines), inner);
}

/// Draw the language selector overlay.
fn draw_selector_overlay(frame: &mut Frame, app: &App, selector: SelectorState) {
    let area = centered_rect(40, 70, frame.area());
    frame.render_widget(Clear, area);

    let title = match selector.side {
        LangSide::Source => " Source language ",
        LangSide::Target => " Target language ",
    };
    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(app.palette.border_active_style());

    let inner = block.inner(area);
    frame.render_widget(block, area);

    // Keep the selection visible in short terminals.
    let visible = inner.height as usize;
    let offset = selector.index.saturating_sub(visible.saturating_sub(1));

    let items: Vec<ListItem> = languages::all()
        .iter()
        .enumerate()
        .skip(offset)
        .map(|(i, lang)| {
            let style = if i == selector.index {
                app.palette.selected_style()
            } else {
                app.palette.text_style()
            };
            ListItem::new(Line::from(Span::styled(
                format!("{:<22} {}", lang.label, lang.code),
                style,
            )))
        })
        .collect();

    frame.render_widget(List::new(items), inner);
}

/// Draw help overlay.
fn draw_help_overlay(frame: &mut Frame, app: &App) {
    let area = centered_rect(60, 60, frame.area());
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(" Help ")
        .borders(Borders::ALL)
        .border_style(app.palette.shortcut_style());

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let help_text = vec![
        Line::from(""),
        Line::from("  type               Edit the source text"),
        Line::from("  Enter              Translate now"),
        Line::from("  Backspace          Delete last character"),
        Line::from("  Ctrl+U             Clear the source text"),
        Line::from(""),
        Line::from("  F2                 Choose source language"),
        Line::from("  F3                 Choose target language"),
        Line::from("  Ctrl+R             Swap languages and text"),
        Line::from(""),
        Line::from("  Ctrl+T             Toggle light/dark theme"),
        Line::from("  F1                 Toggle this help"),
        Line::from("  Esc / Ctrl+C       Quit"),
        Line::from(""),
        Line::from(Span::styled(
            "  Press Esc or F1 to close",
            app.palette.text_dim_style(),
        )),
    ];

    frame.render_widget(Paragraph::new(help_text), inner);
}

/// Create a centered rect.
fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

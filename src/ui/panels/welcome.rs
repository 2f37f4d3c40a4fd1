//! Welcome and loading panels shown before a summary is available.

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
};

use crate::state::App;
use crate::ui::helpers::create_border_block;

const SPINNER_FRAMES: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

/// Instructions, plus the last upload failure and selection error.
pub fn render_welcome(app: &App, frame: &mut Frame, area: Rect) {
    let palette = app.ui.theme.palette();
    let block = create_border_block("ParsePoint", false, &palette);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let key = Style::default()
        .fg(palette.primary)
        .add_modifier(Modifier::BOLD);
    let muted = palette.muted_style();

    let mut lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            "Bank statement summaries",
            Style::default()
                .fg(palette.accent)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(vec![
            Span::styled("Press ", muted),
            Span::styled("o", key),
            Span::styled(" to choose a PDF, or drop one onto the terminal.", muted),
        ]),
        Line::from(vec![
            Span::styled("Press ", muted),
            Span::styled("u", key),
            Span::styled(" to upload it for parsing.", muted),
        ]),
    ];

    if let Some(selection) = &app.ui.selection {
        lines.push(Line::from(""));
        lines.push(Line::from(vec![
            Span::styled("Selected: ", muted),
            Span::styled(
                format!("{} ({})", selection.name, selection.size_label()),
                Style::default().fg(palette.text),
            ),
        ]));
    }

    if let Some(error) = app.ui.phase.error() {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            error.to_string(),
            Style::default()
                .fg(palette.error)
                .add_modifier(Modifier::BOLD),
        )));
    }

    if let Some(error) = &app.ui.selection_error {
        lines.push(Line::from(""));
        lines.push(Line::from(Span::styled(
            error.to_string(),
            Style::default().fg(palette.warning),
        )));
    }

    let paragraph = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    frame.render_widget(paragraph, inner);
}

/// Spinner shown while the statement is being parsed.
pub fn render_loading(app: &App, frame: &mut Frame, area: Rect) {
    let palette = app.ui.theme.palette();
    let block = create_border_block("Uploading", true, &palette);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let spinner = SPINNER_FRAMES[(app.animation_tick as usize) % SPINNER_FRAMES.len()];
    let name = app.ui.selected_name().unwrap_or("statement");

    let top = inner.height.saturating_sub(1) / 2;
    let mut lines: Vec<Line> = (0..top).map(|_| Line::from("")).collect();
    lines.push(Line::from(vec![
        Span::styled(
            format!("{spinner} "),
            Style::default().fg(palette.primary),
        ),
        Span::styled(
            format!("Parsing {name}..."),
            Style::default().fg(palette.text),
        ),
    ]));

    frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), inner);
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{SelectionError, UPLOAD_FAILURE_MESSAGE};
    use crate::state::ViewPhase;
    use crate::test_utils::{AppMother, buffer_to_string};
    use ratatui::{Terminal, backend::TestBackend};

    fn draw(app: &App, f: fn(&App, &mut Frame, Rect)) -> String {
        let backend = TestBackend::new(80, 16);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|frame| f(app, frame, frame.area())).unwrap();
        buffer_to_string(terminal.backend().buffer())
    }

    #[test]
    fn test_welcome_instructions() {
        let app = AppMother::fresh();
        let content = draw(&app, render_welcome);

        assert!(content.contains("to choose a PDF"));
        assert!(content.contains("to upload it"));
        assert!(!content.contains("Selected:"));
    }

    #[test]
    fn test_welcome_shows_failure_and_selection_error() {
        let mut app = AppMother::fresh();
        app.ui.phase = ViewPhase::Failed(UPLOAD_FAILURE_MESSAGE.to_string());
        app.ui.selection_error = Some(SelectionError::invalid_file_type("notes.txt"));
        let content = draw(&app, render_welcome);

        assert!(content.contains(UPLOAD_FAILURE_MESSAGE));
        assert!(content.contains("'notes.txt' is not a PDF file"));
    }

    #[test]
    fn test_loading_spinner_advances() {
        let mut app = AppMother::fresh();
        let first = draw(&app, render_loading);
        app.animation_tick += 1;
        let second = draw(&app, render_loading);

        assert!(first.contains("Parsing statement..."));
        assert!(first.contains(SPINNER_FRAMES[0]));
        assert!(second.contains(SPINNER_FRAMES[1]));
    }
}

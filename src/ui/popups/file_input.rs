//! "Open statement" prompt.
//!
//! A single-line path field with a live hint telling whether the typed
//! path looks like a PDF, plus the reason the last attempt was rejected.

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    symbols::border,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
};

use crate::domain::SelectionError;
use crate::domain::upload::{is_pdf_name, normalize_dropped_path};
use crate::state::FileInputState;
use crate::theme::Palette;
use crate::ui::helpers::{create_popup_block, render_popup_footer};
use crate::ui::layout::centered_popup_area;

const CURSOR: &str = "▏";

/// Renders the file prompt.
///
/// # Arguments
///
/// * `input` - Current field content and cursor
/// * `error` - Why the last selection was rejected, if it was
pub fn render(
    frame: &mut Frame,
    area: Rect,
    input: &FileInputState,
    error: Option<&SelectionError>,
    palette: &Palette,
) {
    let popup_area = centered_popup_area(area, 70, 12);

    let popup_block = create_popup_block("Open Statement", palette);
    frame.render_widget(Clear, popup_area);
    frame.render_widget(popup_block.clone(), popup_area);

    let inner_area = popup_block.inner(popup_area);
    if inner_area.height < 6 || inner_area.width < 8 {
        return;
    }

    let input_block = Block::default()
        .borders(Borders::ALL)
        .border_set(border::ROUNDED)
        .border_style(palette.focused_border_style())
        .title(" Path to PDF ")
        .title_alignment(Alignment::Left);

    let input_area = Rect::new(inner_area.x + 1, inner_area.y + 1, inner_area.width - 2, 3);
    let text_area = input_block.inner(input_area);
    frame.render_widget(input_block, input_area);

    frame.render_widget(Paragraph::new(input_line(input, text_area.width, palette)), text_area);

    let hint_area = Rect::new(
        inner_area.x + 1,
        input_area.y + 3,
        inner_area.width - 2,
        inner_area.height.saturating_sub(6),
    );
    frame.render_widget(
        Paragraph::new(hint_line(input, error, palette)).wrap(Wrap { trim: true }),
        hint_area,
    );

    render_popup_footer(
        frame,
        popup_area,
        &[("Enter", "Select"), ("Esc", "Cancel"), ("^U", "Clear")],
        palette,
    );
}

/// Field content with the cursor drawn in place, scrolled so the cursor
/// stays visible.
fn input_line(input: &FileInputState, width: u16, palette: &Palette) -> Line<'static> {
    let value = input.value();
    let (before, after) = value.split_at(input.cursor().min(value.len()));

    // Keep the tail nearest the cursor when the path overflows.
    let room = (width as usize).saturating_sub(1);
    let before_chars = before.chars().count();
    let before: String = if before_chars > room {
        before.chars().skip(before_chars - room).collect()
    } else {
        before.to_string()
    };

    Line::from(vec![
        Span::styled(before, Style::default().fg(palette.text)),
        Span::styled(CURSOR, Style::default().fg(palette.primary)),
        Span::styled(after.to_string(), Style::default().fg(palette.text)),
    ])
}

fn hint_line(
    input: &FileInputState,
    error: Option<&SelectionError>,
    palette: &Palette,
) -> Line<'static> {
    if let Some(error) = error {
        return Line::from(Span::styled(
            error.to_string(),
            Style::default()
                .fg(palette.error)
                .add_modifier(Modifier::BOLD),
        ));
    }

    let path = normalize_dropped_path(input.value());
    if path.is_empty() {
        Line::from(Span::styled(
            "Type or paste a path, or drop a file onto the terminal",
            palette.muted_style(),
        ))
    } else if is_pdf_name(&path) {
        Line::from(Span::styled(
            "Looks like a PDF",
            Style::default().fg(palette.success),
        ))
    } else {
        Line::from(Span::styled(
            "Only .pdf statements are accepted",
            Style::default().fg(palette.warning),
        ))
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::buffer_to_string;
    use crate::theme::DARK;
    use ratatui::{Terminal, backend::TestBackend};

    fn draw(input: &FileInputState, error: Option<&SelectionError>) -> String {
        let backend = TestBackend::new(80, 20);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|frame| render(frame, frame.area(), input, error, &DARK))
            .unwrap();
        buffer_to_string(terminal.backend().buffer())
    }

    #[test]
    fn test_empty_prompt() {
        let content = draw(&FileInputState::new(), None);
        assert!(content.contains("Open Statement"));
        assert!(content.contains("Type or paste a path"));
        assert!(content.contains("Enter:Select"));
    }

    #[test]
    fn test_hint_follows_extension() {
        let pdf = FileInputState::with_value("/tmp/april.pdf");
        let content = draw(&pdf, None);
        assert!(content.contains("/tmp/april.pdf▏"));
        assert!(content.contains("Looks like a PDF"));

        let txt = FileInputState::with_value("/tmp/notes.txt");
        assert!(draw(&txt, None).contains("Only .pdf statements"));
    }

    #[test]
    fn test_error_takes_precedence() {
        let input = FileInputState::with_value("/tmp/notes.txt");
        let error = SelectionError::invalid_file_type("notes.txt");
        let content = draw(&input, Some(&error));

        assert!(content.contains("'notes.txt' is not a PDF file"));
        assert!(!content.contains("Only .pdf statements"));
    }

    #[test]
    fn test_cursor_in_the_middle() {
        let mut input = FileInputState::with_value("ab");
        input.cursor_left();
        let line = input_line(&input, 20, &DARK);
        let text: String = line.spans.iter().map(|s| s.content.as_ref()).collect();
        assert_eq!(text, "a▏b");
    }

    #[test]
    fn test_long_path_keeps_cursor_visible() {
        let input = FileInputState::with_value("x".repeat(50) + "end.pdf");
        let line = input_line(&input, 10, &DARK);
        assert_eq!(line.spans[0].content, "xxend.pdf");
    }
}

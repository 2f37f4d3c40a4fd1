//! Header rendering for ParsePoint TUI
//!
//! Renders the application header with logo, selected file and phase.

use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::state::{App, ViewPhase};
use crate::theme::Palette;
use crate::widgets::truncate_middle;

use super::helpers::create_border_block;

const LOGO_WIDTH: u16 = 12;

/// Render the application header
pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let palette = app.ui.theme.palette();
    let header_block = create_border_block("", false, &palette);
    frame.render_widget(header_block, area);

    if area.height <= 2 {
        return;
    }

    let title = if app.ui.phase.is_loading() {
        create_animated_logo(app.animation_tick)
    } else {
        create_static_logo(&palette)
    };

    let title_area = Rect::new(
        area.x + 2,
        area.y + 1,
        LOGO_WIDTH.min(area.width.saturating_sub(2)),
        1,
    );
    frame.render_widget(Paragraph::new(title), title_area);

    if area.width > 40 {
        render_status(frame, area, app, &palette);
    }
}

/// Logo with a breathing glow, shown while an upload is in flight.
fn create_animated_logo(animation_tick: u64) -> Line<'static> {
    let time = animation_tick as f32 * 0.15;

    let bracket_glow = ((time * 0.8).sin() + 1.0) / 2.0;
    let parse_glow = ((time * 0.8 + 0.5).sin() + 1.0) / 2.0;
    let point_glow = ((time * 0.8 + 1.0).sin() + 1.0) / 2.0;

    let parse_color = Color::Rgb(
        (40.0 * parse_glow) as u8,
        (150.0 + parse_glow * 105.0) as u8,
        (170.0 + parse_glow * 85.0) as u8,
    );
    let point_color = Color::Rgb(
        (150.0 + point_glow * 105.0) as u8,
        (60.0 * point_glow) as u8,
        (160.0 + point_glow * 95.0) as u8,
    );
    let bracket_intensity = (100.0 + bracket_glow * 155.0) as u8;
    let bracket_color = Color::Rgb(bracket_intensity, bracket_intensity, bracket_intensity);

    Line::from(vec![
        Span::styled("[", Style::default().fg(bracket_color)),
        Span::styled(
            "parse",
            Style::default().fg(parse_color).add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            "point",
            Style::default().fg(point_color).add_modifier(Modifier::BOLD),
        ),
        Span::styled("]", Style::default().fg(bracket_color)),
    ])
}

fn create_static_logo(palette: &Palette) -> Line<'static> {
    let bold = Modifier::BOLD;
    Line::from(vec![
        Span::styled("[", Style::default().fg(palette.text)),
        Span::styled("parse", Style::default().fg(palette.primary).add_modifier(bold)),
        Span::styled("point", Style::default().fg(palette.accent).add_modifier(bold)),
        Span::styled("]", Style::default().fg(palette.text)),
    ])
}

fn phase_color(phase: &ViewPhase, palette: &Palette) -> Color {
    match phase {
        ViewPhase::Welcome => palette.muted,
        ViewPhase::Loading => palette.warning,
        ViewPhase::Failed(_) => palette.error,
        ViewPhase::Loaded => palette.success,
    }
}

/// File name, size and phase on the right side.
fn render_status(frame: &mut Frame, area: Rect, app: &App, palette: &Palette) {
    let available = area.width.saturating_sub(LOGO_WIDTH + 6) as usize;

    let file = app.ui.selection.as_ref().map_or_else(
        || "No file selected".to_string(),
        |s| format!("{} ({})", s.name, s.size_label()),
    );
    let phase = app.ui.phase.label();
    let theme = app.ui.theme.as_str();

    // " | phase | theme" plus padding
    let fixed = phase.len() + theme.len() + 7;
    let file = truncate_middle(&file, available.saturating_sub(fixed));

    let line = Line::from(vec![
        Span::styled(file, Style::default().fg(palette.text)),
        Span::styled(" │ ", palette.muted_style()),
        Span::styled(
            phase,
            Style::default()
                .fg(phase_color(&app.ui.phase, palette))
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(" │ ", palette.muted_style()),
        Span::styled(theme, palette.muted_style()),
    ]);

    let status_area = Rect::new(
        area.x + LOGO_WIDTH + 3,
        area.y + 1,
        area.width.saturating_sub(LOGO_WIDTH + 5),
        1,
    );
    frame.render_widget(
        Paragraph::new(line).alignment(Alignment::Right),
        status_area,
    );
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{AppMother, ResponseMother, buffer_to_string};
    use crate::theme::DARK;
    use ratatui::{Terminal, backend::TestBackend};

    fn render_header(app: &App, width: u16) -> String {
        let backend = TestBackend::new(width, 3);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|frame| render(frame, frame.area(), app))
            .unwrap();
        buffer_to_string(terminal.backend().buffer())
    }

    #[test]
    fn test_logos_have_four_spans() {
        assert_eq!(create_static_logo(&DARK).spans.len(), 4);
        assert_eq!(create_animated_logo(0).spans.len(), 4);
        assert_eq!(create_animated_logo(100).spans.len(), 4);
    }

    #[test]
    fn test_header_without_selection() {
        let app = AppMother::fresh();
        let content = render_header(&app, 90);

        assert!(content.contains("[parsepoint]"));
        assert!(content.contains("No file selected"));
        assert!(content.contains("Ready"));
        assert!(content.contains("dark"));
    }

    #[test]
    fn test_header_shows_selected_file_and_phase() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("april.pdf");
        std::fs::write(&path, b"%PDF").unwrap();

        let mut app = AppMother::loaded(ResponseMother::single());
        assert!(app.select_path(&path));
        let content = render_header(&app, 90);

        assert!(content.contains("april.pdf (4 B)"));
        assert!(content.contains("Loaded"));
    }

    #[test]
    fn test_header_narrow_hides_status() {
        let app = AppMother::fresh();
        let content = render_header(&app, 30);
        assert!(content.contains("[parsepoint]"));
        assert!(!content.contains("Ready"));
    }
}

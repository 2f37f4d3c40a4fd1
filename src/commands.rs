//! Command pattern for key event handling in the TUI application.
//!
//! Key input is mapped to an [`AppCommand`] based on the current
//! [`InputContext`], keeping keybindings testable in isolation.
//!
//! # Example
//!
//! ```ignore
//! let context = app.get_input_context();
//! let command = KeyMapper::map_key(key_event, &context);
//! app.execute_command(command);
//! ```

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

// ============================================================================
// Input Context
// ============================================================================

/// Represents the current input context for key mapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputContext {
    /// Dashboard: table, charts, stats.
    Main,
    /// "Open file" prompt with text input.
    FileInput,
    /// Detail modal for a summary item.
    DetailView,
    /// Detail modal for one statement line.
    StatementDetail,
    /// Help overlay.
    HelpPopup,
    /// Quit confirmation.
    ConfirmQuit,
    /// Message/notification popup.
    MessagePopup,
}

// ============================================================================
// App Commands
// ============================================================================

/// All possible commands the application can execute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppCommand {
    // === Application Control ===
    /// Ask for quit confirmation.
    RequestQuit,
    /// Exit the application.
    ConfirmQuit,
    ToggleHelp,
    ToggleTheme,
    /// Close the current popup or detail view.
    Dismiss,

    // === Upload ===
    OpenFileInput,
    SubmitUpload,

    // === Table Navigation ===
    MoveUp,
    MoveDown,
    GoToTop,
    GoToBottom,
    NextPage,
    PrevPage,
    /// Open the detail modal for the row under the cursor.
    Select,
    /// Move keyboard focus between the summary and statement tables.
    SwitchFocus,

    // === Charts ===
    ReshuffleCharts,

    // === Detail View ===
    CopyIdentifier,
    CopyParticulars,
    ScrollDetailUp,
    ScrollDetailDown,

    // === Help ===
    ScrollHelpUp,
    ScrollHelpDown,

    // === File Prompt ===
    TypeChar(char),
    Backspace,
    CursorLeft,
    CursorRight,
    ClearInput,
    SubmitPath,

    // === No Operation ===
    Noop,
}

// ============================================================================
// Key Mapper
// ============================================================================

/// Maps key events to commands.
#[derive(Debug, Clone, Copy, Default)]
pub struct KeyMapper;

impl KeyMapper {
    /// Maps a key event to a command in the given context.
    #[must_use]
    pub fn map_key(key: KeyEvent, context: &InputContext) -> AppCommand {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            return match context {
                InputContext::FileInput => AppCommand::Dismiss,
                _ => AppCommand::ConfirmQuit,
            };
        }

        match context {
            InputContext::Main => Self::map_main_keys(key),
            InputContext::FileInput => Self::map_file_input_keys(key),
            InputContext::DetailView => Self::map_detail_view_keys(key),
            InputContext::StatementDetail => Self::map_statement_detail_keys(key),
            InputContext::HelpPopup => Self::map_help_keys(key),
            InputContext::ConfirmQuit => Self::map_confirm_quit_keys(key),
            InputContext::MessagePopup => Self::map_message_popup_keys(key),
        }
    }

    fn map_main_keys(key: KeyEvent) -> AppCommand {
        match key.code {
            KeyCode::Char('q') => AppCommand::RequestQuit,
            KeyCode::Char('?') => AppCommand::ToggleHelp,
            KeyCode::Char('o') => AppCommand::OpenFileInput,
            KeyCode::Char('u') => AppCommand::SubmitUpload,
            KeyCode::Char('t') => AppCommand::ToggleTheme,
            KeyCode::Char('s') => AppCommand::ReshuffleCharts,
            KeyCode::Up | KeyCode::Char('k') => AppCommand::MoveUp,
            KeyCode::Down | KeyCode::Char('j') => AppCommand::MoveDown,
            KeyCode::Char('g') | KeyCode::Home => AppCommand::GoToTop,
            KeyCode::Char('G') | KeyCode::End => AppCommand::GoToBottom,
            KeyCode::Right | KeyCode::Char('n') | KeyCode::PageDown => AppCommand::NextPage,
            KeyCode::Left | KeyCode::Char('p') | KeyCode::PageUp => AppCommand::PrevPage,
            KeyCode::Enter => AppCommand::Select,
            KeyCode::Tab | KeyCode::BackTab => AppCommand::SwitchFocus,
            KeyCode::Esc => AppCommand::Dismiss,
            _ => AppCommand::Noop,
        }
    }

    fn map_file_input_keys(key: KeyEvent) -> AppCommand {
        match key.code {
            KeyCode::Esc => AppCommand::Dismiss,
            KeyCode::Enter => AppCommand::SubmitPath,
            KeyCode::Backspace => AppCommand::Backspace,
            KeyCode::Left => AppCommand::CursorLeft,
            KeyCode::Right => AppCommand::CursorRight,
            KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                AppCommand::ClearInput
            }
            KeyCode::Char(c) => AppCommand::TypeChar(c),
            _ => AppCommand::Noop,
        }
    }

    fn map_detail_view_keys(key: KeyEvent) -> AppCommand {
        match key.code {
            KeyCode::Esc | KeyCode::Enter => AppCommand::Dismiss,
            KeyCode::Char('c') => AppCommand::CopyIdentifier,
            KeyCode::Char('?') => AppCommand::ToggleHelp,
            KeyCode::Up | KeyCode::Char('k') => AppCommand::ScrollDetailUp,
            KeyCode::Down | KeyCode::Char('j') => AppCommand::ScrollDetailDown,
            KeyCode::Char('q') => AppCommand::RequestQuit,
            _ => AppCommand::Noop,
        }
    }

    fn map_statement_detail_keys(key: KeyEvent) -> AppCommand {
        match key.code {
            KeyCode::Esc | KeyCode::Enter => AppCommand::Dismiss,
            KeyCode::Char('c') => AppCommand::CopyParticulars,
            KeyCode::Char('?') => AppCommand::ToggleHelp,
            KeyCode::Char('q') => AppCommand::RequestQuit,
            _ => AppCommand::Noop,
        }
    }

    fn map_help_keys(key: KeyEvent) -> AppCommand {
        match key.code {
            KeyCode::Esc | KeyCode::Char('?') | KeyCode::Char('q') => AppCommand::ToggleHelp,
            KeyCode::Up | KeyCode::Char('k') => AppCommand::ScrollHelpUp,
            KeyCode::Down | KeyCode::Char('j') => AppCommand::ScrollHelpDown,
            _ => AppCommand::Noop,
        }
    }

    fn map_confirm_quit_keys(key: KeyEvent) -> AppCommand {
        match key.code {
            KeyCode::Char('y') | KeyCode::Char('q') | KeyCode::Enter => AppCommand::ConfirmQuit,
            KeyCode::Char('n') | KeyCode::Esc => AppCommand::Dismiss,
            _ => AppCommand::Noop,
        }
    }

    fn map_message_popup_keys(key: KeyEvent) -> AppCommand {
        match key.code {
            KeyCode::Esc | KeyCode::Enter | KeyCode::Char(' ') => AppCommand::Dismiss,
            KeyCode::Char('q') => AppCommand::RequestQuit,
            _ => AppCommand::Noop,
        }
    }
}

/// Convenience wrapper around [`KeyMapper::map_key`].
#[must_use]
pub fn map_key(key: KeyEvent, context: &InputContext) -> AppCommand {
    KeyMapper::map_key(key, context)
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyEventKind, KeyEventState};
    use rstest::*;

    fn key_event(code: KeyCode) -> KeyEvent {
        KeyEvent {
            code,
            modifiers: KeyModifiers::empty(),
            kind: KeyEventKind::Press,
            state: KeyEventState::empty(),
        }
    }

    fn key_event_with_modifiers(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent {
            code,
            modifiers,
            kind: KeyEventKind::Press,
            state: KeyEventState::empty(),
        }
    }

    mod main_context_mapping_tests {
        use super::*;

        #[rstest]
        #[case::quit(KeyCode::Char('q'), AppCommand::RequestQuit)]
        #[case::help(KeyCode::Char('?'), AppCommand::ToggleHelp)]
        #[case::open(KeyCode::Char('o'), AppCommand::OpenFileInput)]
        #[case::upload(KeyCode::Char('u'), AppCommand::SubmitUpload)]
        #[case::theme(KeyCode::Char('t'), AppCommand::ToggleTheme)]
        #[case::reshuffle(KeyCode::Char('s'), AppCommand::ReshuffleCharts)]
        #[case::up(KeyCode::Up, AppCommand::MoveUp)]
        #[case::k(KeyCode::Char('k'), AppCommand::MoveUp)]
        #[case::down(KeyCode::Down, AppCommand::MoveDown)]
        #[case::j(KeyCode::Char('j'), AppCommand::MoveDown)]
        #[case::top(KeyCode::Char('g'), AppCommand::GoToTop)]
        #[case::bottom(KeyCode::Char('G'), AppCommand::GoToBottom)]
        #[case::right(KeyCode::Right, AppCommand::NextPage)]
        #[case::n(KeyCode::Char('n'), AppCommand::NextPage)]
        #[case::left(KeyCode::Left, AppCommand::PrevPage)]
        #[case::p(KeyCode::Char('p'), AppCommand::PrevPage)]
        #[case::enter(KeyCode::Enter, AppCommand::Select)]
        #[case::tab(KeyCode::Tab, AppCommand::SwitchFocus)]
        #[case::back_tab(KeyCode::BackTab, AppCommand::SwitchFocus)]
        #[case::unknown(KeyCode::F(1), AppCommand::Noop)]
        fn test_main_keys(#[case] code: KeyCode, #[case] expected: AppCommand) {
            assert_eq!(
                KeyMapper::map_key(key_event(code), &InputContext::Main),
                expected
            );
        }

        #[test]
        fn test_ctrl_c_quits_immediately() {
            let key = key_event_with_modifiers(KeyCode::Char('c'), KeyModifiers::CONTROL);
            assert_eq!(
                KeyMapper::map_key(key, &InputContext::Main),
                AppCommand::ConfirmQuit
            );
        }
    }

    mod file_input_mapping_tests {
        use super::*;

        #[test]
        fn test_chars_are_typed() {
            for c in ['a', 'q', 'u', '/', '.'] {
                let cmd = KeyMapper::map_key(key_event(KeyCode::Char(c)), &InputContext::FileInput);
                assert_eq!(cmd, AppCommand::TypeChar(c));
            }
        }

        #[rstest]
        #[case::esc(KeyCode::Esc, AppCommand::Dismiss)]
        #[case::enter(KeyCode::Enter, AppCommand::SubmitPath)]
        #[case::backspace(KeyCode::Backspace, AppCommand::Backspace)]
        #[case::left(KeyCode::Left, AppCommand::CursorLeft)]
        #[case::right(KeyCode::Right, AppCommand::CursorRight)]
        fn test_editing_keys(#[case] code: KeyCode, #[case] expected: AppCommand) {
            assert_eq!(
                KeyMapper::map_key(key_event(code), &InputContext::FileInput),
                expected
            );
        }

        #[test]
        fn test_ctrl_c_dismisses_prompt() {
            let key = key_event_with_modifiers(KeyCode::Char('c'), KeyModifiers::CONTROL);
            assert_eq!(
                KeyMapper::map_key(key, &InputContext::FileInput),
                AppCommand::Dismiss
            );
        }

        #[test]
        fn test_ctrl_u_clears() {
            let key = key_event_with_modifiers(KeyCode::Char('u'), KeyModifiers::CONTROL);
            assert_eq!(
                KeyMapper::map_key(key, &InputContext::FileInput),
                AppCommand::ClearInput
            );
        }
    }

    mod detail_view_mapping_tests {
        use super::*;

        #[rstest]
        #[case::esc(KeyCode::Esc, AppCommand::Dismiss)]
        #[case::copy(KeyCode::Char('c'), AppCommand::CopyIdentifier)]
        #[case::up(KeyCode::Up, AppCommand::ScrollDetailUp)]
        #[case::down(KeyCode::Down, AppCommand::ScrollDetailDown)]
        #[case::quit(KeyCode::Char('q'), AppCommand::RequestQuit)]
        fn test_detail_keys(#[case] code: KeyCode, #[case] expected: AppCommand) {
            assert_eq!(
                KeyMapper::map_key(key_event(code), &InputContext::DetailView),
                expected
            );
        }
    }

    mod statement_detail_mapping_tests {
        use super::*;

        #[rstest]
        #[case::esc(KeyCode::Esc, AppCommand::Dismiss)]
        #[case::enter(KeyCode::Enter, AppCommand::Dismiss)]
        #[case::copy(KeyCode::Char('c'), AppCommand::CopyParticulars)]
        #[case::help(KeyCode::Char('?'), AppCommand::ToggleHelp)]
        #[case::no_scroll(KeyCode::Down, AppCommand::Noop)]
        fn test_statement_detail_keys(#[case] code: KeyCode, #[case] expected: AppCommand) {
            assert_eq!(
                KeyMapper::map_key(key_event(code), &InputContext::StatementDetail),
                expected
            );
        }
    }

    mod popup_mapping_tests {
        use super::*;

        fn map(code: KeyCode, ctx: InputContext) -> AppCommand {
            KeyMapper::map_key(key_event(code), &ctx)
        }

        #[test]
        fn test_confirm_quit_keys() {
            let ctx = InputContext::ConfirmQuit;
            assert_eq!(map(KeyCode::Char('y'), ctx), AppCommand::ConfirmQuit);
            assert_eq!(map(KeyCode::Char('n'), ctx), AppCommand::Dismiss);
            assert_eq!(map(KeyCode::Esc, ctx), AppCommand::Dismiss);
        }

        #[test]
        fn test_help_keys() {
            let ctx = InputContext::HelpPopup;
            assert_eq!(map(KeyCode::Esc, ctx), AppCommand::ToggleHelp);
            assert_eq!(map(KeyCode::Down, ctx), AppCommand::ScrollHelpDown);
        }

        #[test]
        fn test_message_popup_keys() {
            let ctx = InputContext::MessagePopup;
            assert_eq!(map(KeyCode::Enter, ctx), AppCommand::Dismiss);
            assert_eq!(map(KeyCode::Char('x'), ctx), AppCommand::Noop);
        }
    }
}

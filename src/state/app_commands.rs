//! Command execution and input handling for the ParsePoint application.
//!
//! This module handles keyboard and mouse input, mapping them to commands,
//! and executing those commands to update application state.

use crossterm::event::{KeyEvent, MouseEvent, MouseEventKind};

use super::{App, PopupState, TableFocus};
use crate::commands::{AppCommand, InputContext, map_key};

impl App {
    pub(crate) fn handle_key_event(&mut self, key_event: KeyEvent) {
        let context = self.get_input_context();
        let command = map_key(key_event, &context);
        self.execute_command(command);
    }

    /// Determines the current input context based on application state.
    ///
    /// Help takes precedence over popups, popups over the detail modal.
    #[must_use]
    pub fn get_input_context(&self) -> InputContext {
        if self.ui.show_help {
            return InputContext::HelpPopup;
        }

        match &self.ui.popup_state {
            PopupState::ConfirmQuit => InputContext::ConfirmQuit,
            PopupState::FileInput(_) => InputContext::FileInput,
            PopupState::Message(_) => InputContext::MessagePopup,
            PopupState::None => {
                if self.nav.is_detail_open() {
                    InputContext::DetailView
                } else if self.nav.statement_selected.is_some() {
                    InputContext::StatementDetail
                } else {
                    InputContext::Main
                }
            }
        }
    }

    /// Executes an application command.
    pub(crate) fn execute_command(&mut self, command: AppCommand) {
        match command {
            // === Application Control ===
            AppCommand::RequestQuit => {
                self.ui.open_confirm_quit();
            }
            AppCommand::ConfirmQuit => {
                self.exit = true;
            }
            AppCommand::ToggleHelp => {
                self.ui.toggle_help();
            }
            AppCommand::ToggleTheme => {
                self.toggle_theme();
            }
            AppCommand::Dismiss => {
                self.handle_dismiss();
            }

            // === Upload ===
            AppCommand::OpenFileInput => {
                self.ui.open_file_input();
            }
            AppCommand::SubmitUpload => {
                self.submit_upload();
            }

            // === Table Navigation ===
            AppCommand::MoveUp => match self.nav.focus {
                TableFocus::Summary => self.nav.move_up(),
                TableFocus::Statement => self.nav.statement_up(),
            },
            AppCommand::MoveDown => match self.nav.focus {
                TableFocus::Summary => {
                    let rows = self.rows_on_page();
                    self.nav.move_down(rows);
                }
                TableFocus::Statement => {
                    let len = self.data.statement_rows().len();
                    self.nav.statement_down(len);
                }
            },
            AppCommand::GoToTop => match self.nav.focus {
                TableFocus::Summary => self.nav.cursor_to_top(),
                TableFocus::Statement => self.nav.statement_to_top(),
            },
            AppCommand::GoToBottom => match self.nav.focus {
                TableFocus::Summary => {
                    let rows = self.rows_on_page();
                    self.nav.cursor_to_bottom(rows);
                }
                TableFocus::Statement => {
                    let len = self.data.statement_rows().len();
                    self.nav.statement_to_bottom(len);
                }
            },
            AppCommand::NextPage => {
                self.nav.next_page(self.data.page_count());
            }
            AppCommand::PrevPage => {
                self.nav.prev_page(self.data.page_count());
            }
            AppCommand::Select => match self.nav.focus {
                TableFocus::Summary => self.open_detail(),
                TableFocus::Statement => self.open_statement_detail(),
            },
            AppCommand::SwitchFocus => {
                self.nav.toggle_focus(self.data.statement_rows().len());
            }

            // === Charts ===
            AppCommand::ReshuffleCharts => {
                self.reshuffle_charts();
            }

            // === Detail View ===
            AppCommand::CopyIdentifier => {
                self.copy_selected_identifier();
            }
            AppCommand::CopyParticulars => {
                self.copy_selected_particulars();
            }
            AppCommand::ScrollDetailUp => {
                self.nav.scroll_detail_up();
            }
            AppCommand::ScrollDetailDown => {
                self.scroll_detail_down();
            }

            // === Help ===
            AppCommand::ScrollHelpUp => {
                self.ui.scroll_help_up();
            }
            AppCommand::ScrollHelpDown => {
                self.ui.scroll_help_down();
            }

            // === File Prompt ===
            AppCommand::TypeChar(c) => {
                if let Some(input) = self.ui.popup_state.as_file_input_mut() {
                    input.type_char(c);
                }
            }
            AppCommand::Backspace => {
                if let Some(input) = self.ui.popup_state.as_file_input_mut() {
                    input.backspace();
                }
            }
            AppCommand::CursorLeft => {
                if let Some(input) = self.ui.popup_state.as_file_input_mut() {
                    input.cursor_left();
                }
            }
            AppCommand::CursorRight => {
                if let Some(input) = self.ui.popup_state.as_file_input_mut() {
                    input.cursor_right();
                }
            }
            AppCommand::ClearInput => {
                if let Some(input) = self.ui.popup_state.as_file_input_mut() {
                    input.clear();
                }
            }
            AppCommand::SubmitPath => {
                self.submit_file_input();
            }

            AppCommand::Noop => {}
        }
    }

    /// Closes the topmost overlay: help, then popup, then a detail modal.
    pub(crate) fn handle_dismiss(&mut self) {
        if self.ui.show_help {
            self.ui.toggle_help();
            return;
        }
        if self.ui.has_active_popup() {
            self.ui.dismiss_popup();
            return;
        }
        if self.nav.is_detail_open() {
            self.nav.close_detail();
        } else if self.nav.statement_selected.is_some() {
            self.nav.close_statement_detail();
        }
    }

    /// Mouse wheel scrolls the detail modal when open, otherwise the table.
    pub(crate) fn handle_mouse_input(&mut self, mouse: MouseEvent) {
        let command = match (mouse.kind, self.get_input_context()) {
            (MouseEventKind::ScrollUp, InputContext::Main) => AppCommand::MoveUp,
            (MouseEventKind::ScrollDown, InputContext::Main) => AppCommand::MoveDown,
            (MouseEventKind::ScrollUp, InputContext::DetailView) => AppCommand::ScrollDetailUp,
            (MouseEventKind::ScrollDown, InputContext::DetailView) => AppCommand::ScrollDetailDown,
            (MouseEventKind::ScrollUp, InputContext::HelpPopup) => AppCommand::ScrollHelpUp,
            (MouseEventKind::ScrollDown, InputContext::HelpPopup) => AppCommand::ScrollHelpDown,
            _ => AppCommand::Noop,
        };
        self.execute_command(command);
    }
}

//! Keyboard Input Handler
//!
//! Handles all keyboard input and user interactions. Modal states are
//! checked first (confirm dialog, search input, drag), then the regular
//! key map runs.

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use dashtui::export::ExportScope;
use dashtui::model::{Interaction, PageId, VimCommandState};

use crate::App;

/// Handle keyboard input
///
/// Processes all keyboard events and dispatches to appropriate actions.
pub fn handle_key(app: &mut App, key: KeyEvent) -> Result<()> {
    // Windows reports key releases too
    if key.kind == KeyEventKind::Release {
        return Ok(());
    }

    // Handle confirmation prompt first
    if app.model.ui.confirm_action.is_some() {
        match key.code {
            KeyCode::Char('y') | KeyCode::Char('Y') => app.confirm_pending(),
            KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => app.cancel_pending(),
            _ => {
                // Ignore other keys while prompt is showing
            }
        }
        return Ok(());
    }

    // Search input owns the keyboard while active
    if app.model.ui.interaction == Interaction::Filtering {
        match key.code {
            KeyCode::Esc => app.clear_search(),
            KeyCode::Enter => app.accept_search(),
            KeyCode::Backspace => app.search_backspace(),
            KeyCode::Up => app.previous_item(),
            KeyCode::Down => app.next_item(),
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                app.search_push_char(c)
            }
            _ => {}
        }
        return Ok(());
    }

    // Drop / cancel while dragging; other keys fall through so the cursor can move
    if app.model.ui.is_dragging() {
        match key.code {
            KeyCode::Char('m') | KeyCode::Enter => {
                app.drop_drag();
                return Ok(());
            }
            KeyCode::Esc => {
                app.cancel_drag();
                return Ok(());
            }
            _ => {}
        }
    }

    let vim_mode = app.model.ui.vim_mode;
    let waiting_for_g = app.model.ui.vim_command_state == VimCommandState::WaitingForSecondG;
    if vim_mode {
        // Any key other than a second 'g' resets the 'gg' sequence
        app.model.ui.vim_command_state = VimCommandState::None;
    }

    match key.code {
        KeyCode::Char('q') => app.model.ui.should_quit = true,
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.model.ui.should_quit = true
        }
        // Esc clears an accepted search first, then the selection
        KeyCode::Esc if !app.model.active_page().view().query.is_empty() => app.clear_search(),
        KeyCode::Esc => app.clear_selection(),

        // Pages
        KeyCode::Tab => app.next_tab(),
        KeyCode::BackTab => app.previous_tab(),
        KeyCode::Char(c @ '1'..='4') => {
            let idx = c as usize - '1' as usize;
            app.switch_page(PageId::ALL[idx]);
        }
        KeyCode::Char('o') => app.cycle_open_section(),

        // Search and view parameters
        KeyCode::Char('/') => app.start_search(),
        KeyCode::Char('f') if key.modifiers.contains(KeyModifiers::CONTROL) => app.start_search(),
        KeyCode::Char('f') => app.cycle_facet(),
        KeyCode::Char('s') => app.cycle_sort_mode(),
        KeyCode::Char('S') => app.toggle_sort_reverse(),
        KeyCode::Char('z') => app.cycle_page_size(),
        KeyCode::Char('c') => app.toggle_chart(),

        // Selection and deletes
        KeyCode::Char(' ') => app.toggle_selected(),
        KeyCode::Char('a') => app.toggle_select_all(),
        KeyCode::Char('x') => app.clear_selection(),
        KeyCode::Char('d') => app.request_delete(),
        KeyCode::Char('D') => app.request_bulk_delete(),

        // Reordering
        KeyCode::Char('m') => app.start_drag(),
        KeyCode::Char('K') => app.move_row_up(),
        KeyCode::Char('J') => app.move_row_down(),

        // Export
        KeyCode::Char('e') => app.export(ExportScope::Full),
        KeyCode::Char('E') => app.export(ExportScope::View),

        // Vim keybindings
        KeyCode::Char('j') if vim_mode => app.next_item(),
        KeyCode::Char('k') if vim_mode => app.previous_item(),
        KeyCode::Char('h') if vim_mode => app.previous_table_page(),
        KeyCode::Char('l') if vim_mode => app.next_table_page(),
        KeyCode::Char('g') if vim_mode => {
            if waiting_for_g {
                // gg - jump to first
                app.jump_to_first();
            } else {
                // First 'g' press
                app.model.ui.vim_command_state = VimCommandState::WaitingForSecondG;
            }
        }
        KeyCode::Char('G') if vim_mode => app.jump_to_last(),

        // Standard navigation keys
        KeyCode::Down => app.next_item(),
        KeyCode::Up => app.previous_item(),
        KeyCode::Right | KeyCode::Char(']') | KeyCode::PageDown => app.next_table_page(),
        KeyCode::Left | KeyCode::Char('[') | KeyCode::PageUp => app.previous_table_page(),
        KeyCode::Home => app.jump_to_first(),
        KeyCode::End => app.jump_to_last(),
        _ => {}
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyEventState;
    use dashtui::config::Config;
    use dashtui::export::FileExportSink;
    use dashtui::model::{ConfirmAction, Model};
    use dashtui::seed::SeedData;

    fn app(page: PageId) -> App {
        let model = Model::new(SeedData::mock(Some(3)), &Config::default(), page);
        App::new(model, FileExportSink::new(std::env::temp_dir()))
    }

    fn press(app: &mut App, code: KeyCode) {
        let key = KeyEvent {
            code,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        };
        handle_key(app, key).unwrap();
    }

    fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            press(app, KeyCode::Char(c));
        }
    }

    #[test]
    fn test_search_typing_filters_active_page() {
        let mut app = app(PageId::Products);
        press(&mut app, KeyCode::Char('/'));
        type_text(&mut app, "lamp");
        assert_eq!(app.model.active_page().view().query, "lamp");
        assert_eq!(app.model.active_page().filtered_len(), 1);

        press(&mut app, KeyCode::Enter);
        assert_eq!(app.model.ui.interaction, Interaction::Idle);
        // 'q' no longer types into the query
        press(&mut app, KeyCode::Char('q'));
        assert!(app.model.ui.should_quit);
    }

    #[test]
    fn test_escape_clears_search() {
        let mut app = app(PageId::Products);
        press(&mut app, KeyCode::Char('/'));
        type_text(&mut app, "zzz");
        assert_eq!(app.model.active_page().filtered_len(), 0);
        press(&mut app, KeyCode::Esc);
        assert_eq!(app.model.active_page().view().query, "");
        assert_eq!(app.model.active_page().filtered_len(), 12);
    }

    #[test]
    fn test_bulk_delete_needs_confirmation() {
        let mut app = app(PageId::Products);
        press(&mut app, KeyCode::Char(' '));
        press(&mut app, KeyCode::Down);
        press(&mut app, KeyCode::Char(' '));
        press(&mut app, KeyCode::Char('D'));
        assert!(matches!(
            app.model.ui.confirm_action,
            Some(ConfirmAction::BulkDelete { count: 2, .. })
        ));

        press(&mut app, KeyCode::Char('n'));
        assert_eq!(app.model.active_page().total_len(), 12);

        press(&mut app, KeyCode::Char('D'));
        press(&mut app, KeyCode::Char('y'));
        assert_eq!(app.model.active_page().total_len(), 10);
        assert_eq!(app.model.active_page().selected_count(), 0);
    }

    #[test]
    fn test_select_all_on_empty_view() {
        let mut app = app(PageId::Products);
        press(&mut app, KeyCode::Char('/'));
        type_text(&mut app, "zzz");
        press(&mut app, KeyCode::Enter);
        press(&mut app, KeyCode::Char('a'));

        let toast = app.model.ui.toast_message.as_ref().map(|(m, _)| m.as_str());
        assert_eq!(toast, Some("No rows in view"));
        assert_eq!(app.model.active_page().selected_count(), 0);
    }

    #[test]
    fn test_drag_and_drop_moves_row() {
        let mut app = app(PageId::Products);
        // Pick up p003, drop it on p001
        press(&mut app, KeyCode::Down);
        press(&mut app, KeyCode::Down);
        press(&mut app, KeyCode::Char('m'));
        assert!(app.model.ui.is_dragging());
        press(&mut app, KeyCode::Up);
        press(&mut app, KeyCode::Up);
        press(&mut app, KeyCode::Char('m'));

        assert!(!app.model.ui.is_dragging());
        let ids: Vec<&str> = app
            .model
            .pages
            .products
            .records()
            .iter()
            .take(3)
            .map(|p| p.id.as_str())
            .collect();
        assert_eq!(ids, vec!["p003", "p001", "p002"]);
        assert_eq!(app.model.active_page().cursor(), 0);
    }

    #[test]
    fn test_reorder_blocked_when_sorted() {
        let mut app = app(PageId::Products);
        press(&mut app, KeyCode::Char('s'));
        press(&mut app, KeyCode::Char('m'));
        assert!(!app.model.ui.is_dragging());
        press(&mut app, KeyCode::Down);
        press(&mut app, KeyCode::Char('K'));
        assert_eq!(app.model.pages.products.records()[0].id, "p001");
    }

    #[test]
    fn test_number_keys_switch_pages() {
        let mut app = app(PageId::Sellers);
        press(&mut app, KeyCode::Char('4'));
        assert_eq!(app.model.active_page_id(), PageId::MonthlyReport);
        press(&mut app, KeyCode::Tab);
        assert_eq!(app.model.active_page_id(), PageId::Sellers);
    }

    #[test]
    fn test_vim_gg_jumps_to_first() {
        let mut app = app(PageId::Sellers);
        app.model.ui.vim_mode = true;
        press(&mut app, KeyCode::Char('G'));
        assert_eq!(app.model.active_page().view().page_index, 1);
        press(&mut app, KeyCode::Char('g'));
        press(&mut app, KeyCode::Char('g'));
        assert_eq!(app.model.active_page().view().page_index, 0);
        assert_eq!(app.model.active_page().cursor(), 0);
    }
}

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use dashtui::model::ConfirmAction;

/// Full prompt text for a pending destructive action
fn confirmation_text(action: &ConfirmAction) -> String {
    format!(
        "{}\n\n\
        WARNING: Deleted rows are gone until the next start.\n\n\
        Continue? (y/n)",
        action.prompt()
    )
}

/// Render the delete confirmation dialog (single row or bulk)
pub fn render_confirmation(f: &mut Frame, action: &ConfirmAction) {
    let title = match action {
        ConfirmAction::DeleteRow { .. } => "Confirm Delete",
        ConfirmAction::BulkDelete { .. } => "Confirm Bulk Delete",
    };

    // Center the prompt
    let area = f.area();
    let prompt_width = 56.min(area.width);
    let prompt_height = 9.min(area.height);
    let prompt_area = Rect {
        x: (area.width.saturating_sub(prompt_width)) / 2,
        y: (area.height.saturating_sub(prompt_height)) / 2,
        width: prompt_width,
        height: prompt_height,
    };

    let prompt = Paragraph::new(confirmation_text(action))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(title)
                .border_style(Style::default().fg(Color::Red)),
        )
        .style(Style::default().fg(Color::White).bg(Color::Black))
        .wrap(Wrap { trim: false });

    f.render_widget(Clear, prompt_area);
    f.render_widget(prompt, prompt_area);
}

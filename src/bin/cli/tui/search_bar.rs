use ratatui::prelude::*;
use ratatui::widgets::Paragraph;

use super::app_state::TuiState;

pub fn draw(f: &mut Frame, area: Rect, state: &TuiState) {
    let input_text = format!("/{}", state.search_input);
    let input_widget = Paragraph::new(input_text)
        .style(Style::default().fg(Color::Yellow));
    f.render_widget(input_widget, area);

    // Set cursor position
    let cursor_x = area.x + 1 + state.search_input.chars().count() as u16;
    f.set_cursor_position(Position::new(cursor_x, area.y));
}

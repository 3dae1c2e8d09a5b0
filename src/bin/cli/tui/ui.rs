use ratatui::prelude::*;
use ratatui::layout::{Constraint, Direction, Layout};

use super::app_state::{Mode, TuiState};
use super::{results_widget, search_bar, session_widget, status_bar};

pub fn draw(f: &mut Frame, state: &TuiState) {
    let size = f.area();

    // Main layout: content area + status bar
    let outer = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(3),
            Constraint::Length(1),
        ])
        .split(size);

    let main_area = outer[0];
    let status_area = outer[1];

    match state.mode {
        Mode::Quiz | Mode::Flashcards => session_widget::draw(f, main_area, state),
        _ => results_widget::draw(f, main_area, state),
    }

    if state.mode == Mode::ModeSelect {
        results_widget::draw_mode_select(f, main_area, state);
    }

    // Draw status bar or search input
    if state.mode == Mode::Search {
        search_bar::draw(f, status_area, state);
    } else {
        status_bar::draw(f, status_area, state);
    }
}

use ratatui::prelude::*;
use ratatui::widgets::Paragraph;

use super::app_state::{Mode, TuiState};

pub fn draw(f: &mut Frame, area: Rect, state: &TuiState) {
    // Show flash message if present
    if let Some(ref msg) = state.flash_message {
        let flash = Paragraph::new(format!(" {}", msg))
            .style(Style::default().bg(Color::Green).fg(Color::Black));
        f.render_widget(flash, area);
        return;
    }

    if state.mode == Mode::GenerateInput {
        let text = format!(" Generate quiz about: {}█", state.input_text);
        let prompt = Paragraph::new(text)
            .style(Style::default().bg(Color::Blue).fg(Color::White));
        f.render_widget(prompt, area);
        return;
    }

    // Generation stays visible in every mode until it finishes
    if state.worker.is_busy() {
        let text = format!(" {}", state.generating_label());
        let busy = Paragraph::new(text)
            .style(Style::default().bg(Color::Magenta).fg(Color::White));
        f.render_widget(busy, area);
        return;
    }

    let quiz_finished = state.quiz.as_ref().is_some_and(|q| q.is_finished());
    let hints = match state.mode {
        Mode::Browse => {
            " /: search  g: generate  j/k: navigate  Enter: play  q: quit "
        }
        Mode::Search => {
            " Type to search  Up/Down: select  Enter: play  Esc: clear "
        }
        Mode::ModeSelect => " q: quiz  f: flashcards  Esc: cancel ",
        Mode::Quiz if quiz_finished => " Enter: back to quizzes ",
        Mode::Quiz => " a-d or Up/Down: choose  Enter: submit  Esc: quit quiz ",
        Mode::Flashcards => " Space: flip  n/Right: next card  Esc: back ",
        Mode::GenerateInput => " Enter: generate  Esc: cancel ",
    };

    let status = Paragraph::new(hints)
        .style(Style::default().bg(Color::DarkGray).fg(Color::White));
    f.render_widget(status, area);
}

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseEvent, MouseEventKind};

use quizbox_lib::quiz::AnswerLetter;

use super::app_state::{Mode, TuiState};

pub fn handle_key(state: &mut TuiState, key: KeyEvent) {
    // Clear flash message on any keypress
    state.flash_message = None;

    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        state.quit = true;
        return;
    }

    match state.mode {
        Mode::Browse => handle_browse_key(state, key),
        Mode::Search => handle_search_key(state, key),
        Mode::ModeSelect => handle_mode_select_key(state, key),
        Mode::Quiz => handle_quiz_key(state, key),
        Mode::Flashcards => handle_flashcard_key(state, key),
        Mode::GenerateInput => handle_input_key(state, key),
    }
}

fn handle_browse_key(state: &mut TuiState, key: KeyEvent) {
    match key.code {
        KeyCode::Char('q') => state.quit = true,
        KeyCode::Char('j') | KeyCode::Down => state.move_down(),
        KeyCode::Char('k') | KeyCode::Up => state.move_up(),
        KeyCode::Enter => state.choose_mode(),
        KeyCode::Char('/') => {
            state.mode = Mode::Search;
        }
        KeyCode::Char('g') => state.begin_generate(),
        _ => {}
    }
}

fn handle_search_key(state: &mut TuiState, key: KeyEvent) {
    match key.code {
        KeyCode::Esc => {
            state.mode = Mode::Browse;
            state.search_input.clear();
            state.update_search();
        }
        KeyCode::Enter => {
            state.mode = Mode::Browse;
            state.choose_mode();
        }
        KeyCode::Backspace => {
            state.search_input.pop();
            state.update_search();
        }
        KeyCode::Down => state.move_down(),
        KeyCode::Up => state.move_up(),
        KeyCode::Char(c) => {
            state.search_input.push(c);
            state.update_search();
        }
        _ => {}
    }
}

fn handle_mode_select_key(state: &mut TuiState, key: KeyEvent) {
    match key.code {
        KeyCode::Char('q') => state.open_selected(false),
        KeyCode::Char('f') => state.open_selected(true),
        KeyCode::Esc => state.mode = Mode::Browse,
        _ => {}
    }
}

fn handle_quiz_key(state: &mut TuiState, key: KeyEvent) {
    let finished = state.quiz.as_ref().map_or(true, |q| q.is_finished());
    if finished {
        if matches!(key.code, KeyCode::Enter | KeyCode::Esc | KeyCode::Char('q')) {
            state.close_session();
        }
        return;
    }

    match key.code {
        KeyCode::Esc => state.close_session(),
        KeyCode::Char('j') | KeyCode::Down => state.quiz_cursor_down(),
        KeyCode::Char('k') | KeyCode::Up => state.quiz_cursor_up(),
        KeyCode::Enter => state.quiz_submit(),
        KeyCode::Char(c) => {
            if let Ok(letter) = c.to_string().parse::<AnswerLetter>() {
                state.quiz_choose(letter);
            }
        }
        _ => {}
    }
}

fn handle_flashcard_key(state: &mut TuiState, key: KeyEvent) {
    match key.code {
        KeyCode::Esc | KeyCode::Char('q') => state.close_session(),
        KeyCode::Char(' ') => state.card_flip(),
        KeyCode::Char('n') | KeyCode::Right => state.card_next(),
        _ => {}
    }
}

fn handle_input_key(state: &mut TuiState, key: KeyEvent) {
    match key.code {
        KeyCode::Esc => {
            state.input_text.clear();
            state.mode = Mode::Browse;
        }
        KeyCode::Enter => state.start_generation(),
        KeyCode::Backspace => {
            state.input_text.pop();
        }
        KeyCode::Char(c) => {
            state.input_text.push(c);
        }
        _ => {}
    }
}

pub fn handle_mouse(state: &mut TuiState, mouse: MouseEvent) {
    match mouse.kind {
        MouseEventKind::ScrollDown => match state.mode {
            Mode::Browse | Mode::Search => state.move_down(),
            _ => {}
        },
        MouseEventKind::ScrollUp => match state.mode {
            Mode::Browse | Mode::Search => state.move_up(),
            _ => {}
        },
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::app::App;
    use crate::tui::app_state::StartMode;
    use quizbox_lib::generator::GeneratorError;
    use quizbox_lib::quiz::{QuestionRecord, QuizStorage};
    use quizbox_lib::{AppConfig, GenerationWorker};

    fn quiz_state() -> TuiState {
        let mut storage = QuizStorage::open_in_memory().unwrap();
        let quiz_id = storage
            .save_quiz("Math", &[QuestionRecord::new("2+2?", "4", ["3", "5", "6"], None)])
            .unwrap();

        let app = App {
            config: AppConfig::default(),
            storage,
        };
        let generator = |_: &str| -> quizbox_lib::generator::Result<String> { Err(GeneratorError::EmptyResponse) };
        let worker = GenerationWorker::new(Arc::new(generator));
        TuiState::new(app, worker, StartMode::Quiz(quiz_id)).unwrap()
    }

    fn scroll(kind: MouseEventKind) -> MouseEvent {
        MouseEvent {
            kind,
            column: 0,
            row: 0,
            modifiers: KeyModifiers::NONE,
        }
    }

    #[test]
    fn test_scroll_does_not_pick_quiz_answer() {
        let mut state = quiz_state();
        assert_eq!(state.mode, Mode::Quiz);

        handle_mouse(&mut state, scroll(MouseEventKind::ScrollDown));
        handle_mouse(&mut state, scroll(MouseEventKind::ScrollUp));

        assert_eq!(state.quiz_cursor, None);
        assert_eq!(state.quiz.as_ref().unwrap().selection(), None);
    }

    #[test]
    fn test_letter_key_picks_quiz_answer() {
        let mut state = quiz_state();
        handle_key(&mut state, KeyEvent::new(KeyCode::Char('b'), KeyModifiers::NONE));

        assert_eq!(state.quiz_cursor, Some(AnswerLetter::B));
        assert_eq!(state.quiz.as_ref().unwrap().selection(), Some("3"));
    }
}

use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};

use quizbox_lib::flashcards::{CardFace, FlashcardSession};
use quizbox_lib::quiz::{AnswerLetter, QuizSession};

use super::app_state::{Feedback, TuiState};

fn session_block(title: &str) -> Block<'_> {
    Block::default()
        .title(format!(" {} ", title))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan))
}

pub fn draw(f: &mut Frame, area: Rect, state: &TuiState) {
    if let Some(quiz) = &state.quiz {
        draw_quiz(f, area, state, quiz);
    } else if let Some(cards) = &state.cards {
        draw_cards(f, area, &state.session_title, cards);
    }
}

fn feedback_line(feedback: &Option<Feedback>) -> Line<'static> {
    match feedback {
        Some(Feedback::Correct) => Line::from(Span::styled(
            "Correct!",
            Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
        )),
        Some(Feedback::Wrong { answer }) => Line::from(Span::styled(
            format!("Wrong. The answer was: {}", answer),
            Style::default().fg(Color::Red),
        )),
        None => Line::from(""),
    }
}

fn draw_quiz(f: &mut Frame, area: Rect, state: &TuiState, quiz: &QuizSession) {
    let block = session_block(&state.session_title);

    let mut text = vec![Line::from("")];

    match quiz.prompt() {
        Some(prompt) => {
            text.push(Line::from(Span::styled(
                format!("  Question {} of {}", prompt.number, prompt.total),
                Style::default().fg(Color::DarkGray),
            )));
            text.push(Line::from(""));
            text.push(Line::from(Span::styled(
                format!("  {}", prompt.text),
                Style::default().add_modifier(Modifier::BOLD),
            )));
            text.push(Line::from(""));

            for (letter, choice) in AnswerLetter::ALL.iter().zip(prompt.choices) {
                let selected = state.quiz_cursor == Some(*letter);
                let marker = if selected { "> " } else { "  " };
                let style = if selected {
                    Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
                } else {
                    Style::default()
                };
                text.push(Line::from(Span::styled(
                    format!("  {}{}) {}", marker, letter, choice),
                    style,
                )));
            }

            text.push(Line::from(""));
            let mut feedback = feedback_line(&state.feedback);
            feedback.spans.insert(0, Span::raw("  "));
            text.push(feedback);
        }
        None => {
            let mut feedback = feedback_line(&state.feedback);
            feedback.spans.insert(0, Span::raw("  "));
            text.push(feedback);
            text.push(Line::from(""));
            if let Some(result) = quiz.result() {
                text.push(Line::from(Span::styled(
                    format!("  Quiz finished! Your score: {}/{}", result.score, result.total),
                    Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
                )));
            }
        }
    }

    let paragraph = Paragraph::new(text)
        .block(block)
        .wrap(Wrap { trim: false });
    f.render_widget(paragraph, area);
}

fn draw_cards(f: &mut Frame, area: Rect, title: &str, cards: &FlashcardSession) {
    let block = session_block(title);

    let (label, style) = match cards.face() {
        CardFace::Question => ("Question", Style::default().add_modifier(Modifier::BOLD)),
        CardFace::Answer => ("Answer", Style::default().fg(Color::Green).add_modifier(Modifier::BOLD)),
    };

    let text = vec![
        Line::from(""),
        Line::from(Span::styled(
            format!("  Card {} of {} - {}", cards.index() + 1, cards.len(), label),
            Style::default().fg(Color::DarkGray),
        )),
        Line::from(""),
        Line::from(Span::styled(format!("  {}", cards.displayed_text()), style)),
    ];

    let paragraph = Paragraph::new(text)
        .block(block)
        .wrap(Wrap { trim: false });
    f.render_widget(paragraph, area);
}

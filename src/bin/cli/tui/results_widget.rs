use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph};

use super::app_state::{Mode, TuiState};

pub fn draw(f: &mut Frame, area: Rect, state: &TuiState) {
    let is_active = matches!(state.mode, Mode::Browse | Mode::Search);

    let title = if state.search_input.is_empty() {
        " Quizzes ".to_string()
    } else {
        format!(" Quizzes matching '{}' ", state.search_input)
    };

    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(if is_active {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default().fg(Color::DarkGray)
        });

    if state.quizzes.is_empty() {
        let hint = if state.search_input.is_empty() {
            "  No quizzes yet. Press g to generate one."
        } else {
            "  No quizzes match this search."
        };
        let help_text = vec![
            Line::from(""),
            Line::from(Span::styled(hint, Style::default().fg(Color::DarkGray))),
        ];
        f.render_widget(Paragraph::new(help_text).block(block), area);
        return;
    }

    let id_w = state
        .quizzes
        .iter()
        .map(|q| q.id.to_string().len())
        .max()
        .unwrap_or(1);

    let items: Vec<ListItem> = state
        .quizzes
        .iter()
        .map(|quiz| {
            ListItem::new(Line::from(vec![
                Span::styled(
                    format!("{:>id_w$}  ", quiz.id, id_w = id_w),
                    Style::default().fg(Color::DarkGray),
                ),
                Span::styled(quiz.topic.clone(), Style::default().fg(Color::Yellow)),
            ]))
        })
        .collect();

    let list = List::new(items)
        .block(block)
        .highlight_style(
            Style::default()
                .bg(if is_active { Color::DarkGray } else { Color::Black })
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("> ");

    let mut list_state = ListState::default();
    list_state.select(Some(state.selected));

    f.render_stateful_widget(list, area, &mut list_state);
}

/// Centered popup asking how to open the highlighted quiz
pub fn draw_mode_select(f: &mut Frame, area: Rect, state: &TuiState) {
    let Some(quiz) = state.selected_quiz() else {
        return;
    };

    let width = 44.min(area.width);
    let height = 6.min(area.height);
    let popup = Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    };

    f.render_widget(Clear, popup);

    let text = vec![
        Line::from(Span::styled(
            quiz.topic.clone(),
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(vec![
            Span::styled("q", Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)),
            Span::raw(": quiz    "),
            Span::styled("f", Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)),
            Span::raw(": flashcards"),
        ]),
    ];

    let block = Block::default()
        .title(" Play ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Yellow));

    f.render_widget(Paragraph::new(text).block(block).alignment(Alignment::Center), popup);
}

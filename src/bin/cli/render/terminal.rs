use quizbox_lib::quiz::{AnswerLetter, QuestionRecord};

/// ANSI color codes
#[allow(dead_code)]
pub struct Color;

#[allow(dead_code)]
impl Color {
    pub const RESET: &str = "\x1b[0m";
    pub const BOLD: &str = "\x1b[1m";
    pub const DIM: &str = "\x1b[2m";
    pub const RED: &str = "\x1b[31m";
    pub const GREEN: &str = "\x1b[32m";
    pub const YELLOW: &str = "\x1b[33m";
    pub const CYAN: &str = "\x1b[36m";
    pub const GRAY: &str = "\x1b[90m";
}

/// Wrap `text` in an ANSI style when color is on
pub fn paint(text: &str, style: &str, use_color: bool) -> String {
    if use_color {
        format!("{}{}{}", style, text, Color::RESET)
    } else {
        text.to_string()
    }
}

/// Render a numbered question with its A-D choices. The correct answer is
/// marked with `*` when `mark_correct` is set.
pub fn render_question(
    record: &QuestionRecord,
    number: usize,
    mark_correct: bool,
    use_color: bool,
) -> Vec<String> {
    let mut lines = Vec::new();

    let heading = format!("{}. ", number);
    let indent = " ".repeat(heading.len());
    for (i, line) in wrap_lines(&record.question, "", 76).into_iter().enumerate() {
        let prefix = if i == 0 { heading.as_str() } else { indent.as_str() };
        lines.push(format!("{}{}", prefix, paint(&line, Color::BOLD, use_color)));
    }

    for (letter, choice) in AnswerLetter::ALL.iter().zip(record.choices()) {
        let is_correct = mark_correct && choice == record.correct;
        let marker = if is_correct { "*" } else { " " };
        let text = format!("{}{}) {}", marker, letter, choice);
        if is_correct {
            lines.push(format!("{}{}", indent, paint(&text, Color::GREEN, use_color)));
        } else {
            lines.push(format!("{}{}", indent, text));
        }
    }

    if let Some(category) = &record.category {
        let tag = format!("#{}", category);
        lines.push(format!("{}{}", indent, paint(&tag, Color::DIM, use_color)));
    }

    lines
}

/// Simple word-wrapping for terminal output
pub fn wrap_lines(text: &str, prefix: &str, max_width: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let effective_width = max_width.saturating_sub(prefix.len());

    for line in text.lines() {
        if line.chars().count() <= effective_width {
            lines.push(format!("{}{}", prefix, line));
        } else {
            let mut current_line = String::new();
            for word in line.split_whitespace() {
                if current_line.is_empty() {
                    current_line = word.to_string();
                } else if current_line.chars().count() + 1 + word.chars().count() <= effective_width {
                    current_line.push(' ');
                    current_line.push_str(word);
                } else {
                    lines.push(format!("{}{}", prefix, current_line));
                    current_line = word.to_string();
                }
            }
            if !current_line.is_empty() {
                lines.push(format!("{}{}", prefix, current_line));
            }
        }
    }

    if lines.is_empty() && !text.is_empty() {
        lines.push(format!("{}{}", prefix, text));
    }

    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_question_marks_correct() {
        let record = QuestionRecord::new("2+2?", "4", ["3", "5", "6"], Some("math"));
        let lines = render_question(&record, 1, true, false);

        assert_eq!(
            lines,
            vec!["1. 2+2?", "   *A) 4", "    B) 3", "    C) 5", "    D) 6", "   #math"]
        );
    }

    #[test]
    fn test_wrap_lines() {
        let lines = wrap_lines("one two three four", "> ", 11);
        assert_eq!(lines, vec!["> one two", "> three", "> four"]);
    }
}

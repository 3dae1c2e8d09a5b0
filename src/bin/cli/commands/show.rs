use anyhow::Result;

use crate::app::App;
use crate::render::terminal::{self, Color};
use crate::OutputFormat;

pub fn run(
    app: &App,
    quiz_id: i64,
    show_answers: bool,
    format: &OutputFormat,
    use_color: bool,
) -> Result<()> {
    let (quiz, questions) = app.find_quiz(quiz_id)?;

    match format {
        OutputFormat::Json => {
            let output = serde_json::json!({
                "id": quiz.id,
                "topic": quiz.topic,
                "questions": questions,
            });
            println!("{}", serde_json::to_string_pretty(&output)?);
        }
        OutputFormat::Plain => {
            println!("{}", terminal::paint(&quiz.topic, Color::BOLD, use_color));
            let count = format!("{} questions", questions.len());
            println!("{}", terminal::paint(&count, Color::DIM, use_color));

            for (i, question) in questions.iter().enumerate() {
                println!();
                for line in terminal::render_question(&question.content, i + 1, show_answers, use_color) {
                    println!("{}", line);
                }
            }
        }
    }

    Ok(())
}

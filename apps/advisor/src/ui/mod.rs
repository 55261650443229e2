//! Terminal front end — renders the session state and feeds user events back
//! into the advisor.
//!
//! Pure presentation: the four screens mirror the View enum, and the loop
//! owns nothing but the line editor. All state lives in the advisor; every
//! keystroke maps onto one of its transitions.

use anyhow::Result;
use colored::Colorize;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;

use crate::models::{CareerDetails, CareerPath, SkillsLearningPath};
use crate::session::handlers::Advisor;
use crate::session::View;

/// Runs the interactive loop until the user quits.
pub async fn run(mut advisor: Advisor) -> Result<()> {
    let mut editor = DefaultEditor::new()?;

    println!();
    println!("{}", "AI Career Advisor".bold());
    println!("{}", "Map your skills to your future career.".dimmed());

    loop {
        // Errors replace the current screen; the only way out is Go Back.
        if advisor.state().error.is_some() {
            render_error(advisor.state().error.as_deref().unwrap_or_default());
            match read_line(&mut editor, "press Enter to go back (q quits) > ")? {
                Some(input) if input.trim() == "q" => break,
                Some(_) => advisor.go_back(),
                None => break,
            }
            continue;
        }

        let view = advisor.state().view;
        match view {
            View::Input => {
                println!();
                println!(
                    "{}",
                    "Describe your skills and interests (e.g. \"Python, data analysis, public speaking\")."
                        .bold()
                );
                match read_line(&mut editor, "skills > ")? {
                    Some(input) if input.trim() == "q" => break,
                    Some(input) => {
                        advisor.set_skills_text(input);
                        println!("{}", "Analyzing your skills...".dimmed());
                        advisor.submit_skills().await;
                    }
                    None => break,
                }
            }

            View::Recommendations => {
                {
                    let state = advisor.state();
                    render_recommendations(&state.recommendations, &state.favorites);
                }
                let input = match read_line(&mut editor, "> ")? {
                    Some(input) => input,
                    None => break,
                };
                if !handle_recommendations_input(&mut advisor, input.trim()).await {
                    break;
                }
            }

            View::Details => {
                {
                    let state = advisor.state();
                    if let Some(career) = &state.selected_career {
                        render_details(
                            career,
                            state.career_details.as_ref(),
                            state.is_favorite(&career.title),
                        );
                    }
                }
                match read_line(&mut editor, "f favorite · b back · q quit > ")? {
                    Some(input) => match input.trim() {
                        "q" => break,
                        "b" => advisor.go_back(),
                        "f" => {
                            if let Some(career) = advisor.state().selected_career.clone() {
                                advisor.toggle_favorite(&career);
                            }
                        }
                        _ => {}
                    },
                    None => break,
                }
            }

            View::LearningPath => {
                if let Some(path) = &advisor.state().learning_path {
                    render_learning_path(path);
                }
                match read_line(&mut editor, "b back · q quit > ")? {
                    Some(input) => match input.trim() {
                        "q" => break,
                        "b" => advisor.go_back(),
                        _ => {}
                    },
                    None => break,
                }
            }
        }
    }

    println!();
    println!("{}", "Powered by Google Gemini".dimmed());
    Ok(())
}

/// Dispatches one recommendations-screen command. Returns false to quit.
async fn handle_recommendations_input(advisor: &mut Advisor, input: &str) -> bool {
    match input {
        "q" => return false,
        "b" => advisor.go_back(),
        "l" => {
            println!("{}", "Building your personalized learning path...".dimmed());
            advisor.generate_learning_path().await;
        }
        _ => {
            if let Some(rest) = input.strip_prefix("f ") {
                match parse_entry_number(rest, advisor.state().recommendations.len()) {
                    Some(idx) => {
                        let career = advisor.state().recommendations[idx].clone();
                        advisor.toggle_favorite(&career);
                    }
                    None => println!("{}", "No such entry.".red()),
                }
            } else {
                match parse_entry_number(input, advisor.state().recommendations.len()) {
                    Some(idx) => {
                        let career = advisor.state().recommendations[idx].clone();
                        println!("{}", "Fetching the career guide...".dimmed());
                        advisor.select_career(career).await;
                    }
                    None => println!(
                        "{}",
                        "Enter a number to open a career, f <n> to favorite, l for a learning path, b to go back."
                            .dimmed()
                    ),
                }
            }
        }
    }
    true
}

/// Parses a 1-based list index, returning a 0-based one.
fn parse_entry_number(input: &str, len: usize) -> Option<usize> {
    let n: usize = input.trim().parse().ok()?;
    if n >= 1 && n <= len {
        Some(n - 1)
    } else {
        None
    }
}

fn read_line(editor: &mut DefaultEditor, prompt: &str) -> Result<Option<String>> {
    match editor.readline(prompt) {
        Ok(line) => {
            let _ = editor.add_history_entry(line.as_str());
            Ok(Some(line))
        }
        Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => Ok(None),
        Err(e) => Err(e.into()),
    }
}

fn render_error(error: &str) {
    println!();
    println!("{}", error.red().bold());
}

fn render_recommendations(recommendations: &[CareerPath], favorites: &[CareerPath]) {
    println!();
    println!("{}", "Recommended career paths".bold().underline());
    for (i, career) in recommendations.iter().enumerate() {
        let star = if favorites.iter().any(|f| f.title == career.title) {
            "★".yellow()
        } else {
            "☆".dimmed()
        };
        println!();
        println!("{:>2}. {} {}", i + 1, star, career.title.bold());
        println!("    {}", career.description);
        println!("    {} {}", "Why it fits:".cyan(), career.relevance);
    }
    println!();
    println!(
        "{}",
        "<n> open guide · f <n> favorite · l learning path · b back · q quit".dimmed()
    );
}

fn render_details(career: &CareerPath, details: Option<&CareerDetails>, favorited: bool) {
    println!();
    let star = if favorited { "★".yellow() } else { "☆".dimmed() };
    println!("{} {}", star, career.title.bold().underline());

    let details = match details {
        Some(details) => details,
        None => {
            println!("{}", "Loading the full guide...".dimmed());
            return;
        }
    };

    println!();
    println!("{}", details.summary);

    println!();
    println!("{}", "Key responsibilities".cyan().bold());
    for item in &details.key_responsibilities {
        println!("  • {item}");
    }

    println!();
    println!("{}", "Required skills".cyan().bold());
    println!("  {} {}", "technical:".dimmed(), details.required_skills.technical.join(", "));
    println!("  {} {}", "soft:".dimmed(), details.required_skills.soft.join(", "));

    println!();
    println!("{}", "Learning path".cyan().bold());
    for (i, step) in details.learning_path.iter().enumerate() {
        println!("  {}. {} — {}", i + 1, step.step.bold(), step.description);
    }

    println!();
    println!("{}", "Interview questions".cyan().bold());
    for question in &details.interview_questions.behavioral {
        println!("  {} {question}", "behavioral:".dimmed());
    }
    for question in &details.interview_questions.technical {
        println!("  {} {question}", "technical:".dimmed());
    }

    println!();
    println!("{}", "Career outlook".cyan().bold());
    println!("  {}", details.career_outlook);
}

fn render_learning_path(path: &[SkillsLearningPath]) {
    println!();
    println!("{}", "Your personalized learning path".bold().underline());
    for area in path {
        println!();
        println!("{}", area.skill_area.cyan().bold());
        for (i, step) in area.steps.iter().enumerate() {
            println!("  {}. {}", i + 1, step.title.bold());
            println!("     {}", step.description);
            for resource in step.resources.iter().flatten() {
                println!("     {} {} — {}", "↗".dimmed(), resource.name, resource.url.dimmed());
            }
        }
    }
}

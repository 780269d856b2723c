// src/cli/menu.rs
use console::style;
use inquire::{InquireError, MultiSelect, Select, Text};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use crate::cli::CliError;
use crate::core::session::{GeneratorSession, SessionError};
use crate::models::CharacterClass;

const SET_LENGTH: &str = "🔢  Set password length";
const TOGGLE_CLASSES: &str = "🔤  Choose character classes";
const GENERATE: &str = "🔐  Generate";
const RESET: &str = "🔄  Reset";
const SHOW: &str = "📋  Show password";
const EXIT: &str = "❌  Exit";

/// Run the interactive form until the user exits, cancels, or `should_exit`
/// is raised (the Ctrl+C handler sets it).
pub fn run_generator_menu(mut session: GeneratorSession, should_exit: Arc<AtomicBool>) -> Result<(), CliError> {
    println!("╔══════════════════════════════════════╗");
    println!("║        🦀 PASSWORD GENERATOR         ║");
    println!("╚══════════════════════════════════════╝");

    while !should_exit.load(Ordering::SeqCst) {
        print_form(&session);

        let options = vec![SET_LENGTH, TOGGLE_CLASSES, GENERATE, RESET, SHOW, EXIT];
        let choice = match Select::new("What would you like to do?", options).prompt() {
            Ok(choice) => choice,
            Err(InquireError::OperationCanceled) | Err(InquireError::OperationInterrupted) => break,
            Err(e) => return Err(e.into()),
        };

        match choice {
            SET_LENGTH => match Text::new("Password Length").with_placeholder("Ex. 8").prompt_skippable() {
                Ok(Some(input)) => {
                    session.set_length_input(&input);
                }
                Ok(None) => {}
                Err(InquireError::OperationInterrupted) => break,
                Err(e) => return Err(e.into()),
            },
            TOGGLE_CLASSES => match choose_classes(&mut session) {
                Err(CliError::Prompt(InquireError::OperationInterrupted)) => break,
                other => other?,
            },
            GENERATE => match session.generate() {
                Ok(result) if result.produced => {
                    println!("\n{} {}\n", style("Generated Password:").bold(), style(&result.password).green());
                }
                Ok(_) => println!("⚠️  Enable at least one character class to generate a password."),
                Err(SessionError::LengthRequired) => println!("❌ Length is required"),
                // The reason is already shown under the length field
                Err(SessionError::Rejected(_)) => {}
            },
            RESET => {
                session.reset();
                println!("🔄 Form reset. Enter a new length before generating.");
            }
            SHOW => match session.current_password() {
                Some(password) => println!("\n{}\n", password),
                None => println!("Nothing to copy yet."),
            },
            _ => break,
        }
    }

    log::info!("Generator menu closed");
    Ok(())
}

fn print_form(session: &GeneratorSession) {
    println!();
    let length = if session.length_input().is_empty() {
        style("(empty)".to_string()).dim()
    } else {
        style(session.length_input().to_string()).bold()
    };
    println!("Password Length: {}", length);
    if let Some(error) = session.error_message() {
        println!("  {}", style(error).red());
    }

    for class in CharacterClass::ALL {
        let mark = if session.config().is_enabled(class) { "[x]" } else { "[ ]" };
        println!("{} {}", mark, class.label());
    }

    if let Some(password) = session.current_password() {
        println!("Current: {}", style(password).green());
    }
    println!();
}

fn choose_classes(session: &mut GeneratorSession) -> Result<(), CliError> {
    let labels: Vec<&str> = CharacterClass::ALL.iter().map(|class| class.label()).collect();
    let enabled: Vec<usize> = CharacterClass::ALL
        .iter()
        .enumerate()
        .filter(|(_, class)| session.config().is_enabled(**class))
        .map(|(index, _)| index)
        .collect();

    let Some(selected) = MultiSelect::new("Character classes:", labels)
        .with_default(&enabled)
        .prompt_skippable()?
    else {
        return Ok(());
    };

    for class in CharacterClass::ALL {
        session.set_class(class, selected.contains(&class.label()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_raised_exit_flag_closes_without_prompting() {
        let should_exit = Arc::new(AtomicBool::new(true));
        assert!(run_generator_menu(GeneratorSession::default(), should_exit).is_ok());
    }
}

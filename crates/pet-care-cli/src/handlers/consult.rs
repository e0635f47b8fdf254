//! Consult command handler.
//!
//! Flags fill the form first. With `--interactive`, every field without a flag
//! is prompted for and validated as soon as it is entered, re-asking until it
//! passes. The form is then submitted to the context's sink.

use anyhow::Result;
use console::style;
use pet_care_core::form::{ConsultationFormState, Field, SubmitError};
use pet_care_core::models::{ConsultPetType, Urgency};
use rustyline::DefaultEditor;

use crate::bootstrap::CliContext;
use crate::commands::ConsultArgs;
use crate::error::CliError;
use crate::presentation::{render_field_errors, render_notice};

/// Source of interactive answers.
pub trait Prompter {
    /// Read one answer. Cancelling yields [`CliError::Cancelled`].
    fn ask(&mut self, prompt: &str) -> Result<String, CliError>;

    /// Report a field error before asking again.
    fn warn(&mut self, message: &str);
}

/// Line editor on the controlling terminal.
pub struct TerminalPrompter {
    editor: DefaultEditor,
}

impl TerminalPrompter {
    pub fn new() -> Result<Self, CliError> {
        Ok(Self {
            editor: DefaultEditor::new()?,
        })
    }
}

impl Prompter for TerminalPrompter {
    fn ask(&mut self, prompt: &str) -> Result<String, CliError> {
        Ok(self.editor.readline(prompt)?)
    }

    fn warn(&mut self, message: &str) {
        eprintln!("  {} {}", style("✗").red(), message);
    }
}

/// Fill, optionally prompt, then submit the consultation form.
pub fn execute(ctx: &mut CliContext, args: ConsultArgs) -> Result<()> {
    let mut form = ConsultationFormState::new();
    apply_flags(&mut form, &args);

    if args.interactive {
        let mut prompter = TerminalPrompter::new()?;
        prompt_missing(&mut form, &args, &mut prompter)?;
    }

    let mut sink = ctx.sink();
    match form.submit(&mut sink) {
        Ok(submitted) => {
            if args.json {
                println!("{}", serde_json::to_string_pretty(&submitted.request)?);
            } else {
                print!("{}", render_notice(&submitted));
            }
            Ok(())
        }
        Err(SubmitError::Invalid(errors)) => {
            if args.json {
                println!("{}", serde_json::to_string_pretty(&errors)?);
            } else {
                eprint!("{}", render_field_errors(&errors));
            }
            Err(CliError::Validation(errors.to_string()).into())
        }
        Err(other) => Err(CliError::from(other).into()),
    }
}

fn flag(args: &ConsultArgs, field: Field) -> Option<&str> {
    let value = match field {
        Field::OwnerName => &args.owner_name,
        Field::Email => &args.email,
        Field::Phone => &args.phone,
        Field::PetType => &args.pet_type,
        Field::PetAge => &args.pet_age,
        Field::Symptoms => &args.symptoms,
        Field::Urgency => &args.urgency,
    };
    value.as_deref()
}

/// Copy every given flag into the form. Omitted selects keep their defaults.
pub fn apply_flags(form: &mut ConsultationFormState, args: &ConsultArgs) {
    for field in Field::ALL {
        if let Some(value) = flag(args, field) {
            form.change(field, &canonical_value(field, value));
        }
    }
}

/// Ask for each field without a flag until it validates.
pub fn prompt_missing<P: Prompter + ?Sized>(
    form: &mut ConsultationFormState,
    args: &ConsultArgs,
    prompter: &mut P,
) -> Result<(), CliError> {
    for field in Field::ALL {
        if flag(args, field).is_some() {
            continue;
        }
        loop {
            let answer = prompter.ask(&prompt_text(form, field))?;
            let answer = answer.trim();
            // Enter on a select keeps the current choice
            if !(field.is_select() && answer.is_empty()) {
                form.change(field, &canonical_value(field, answer));
            }
            match form.blur(field) {
                None => break,
                Some(error) => prompter.warn(error.message),
            }
        }
    }
    Ok(())
}

fn select_labels(field: Field) -> Vec<&'static str> {
    match field {
        Field::PetType => ConsultPetType::ALL.iter().map(|p| p.label()).collect(),
        Field::Urgency => Urgency::ALL.iter().map(|u| u.label()).collect(),
        _ => Vec::new(),
    }
}

/// Select answers match their option label ignoring case.
fn canonical_value(field: Field, value: &str) -> String {
    select_labels(field)
        .into_iter()
        .find(|label| label.eq_ignore_ascii_case(value.trim()))
        .unwrap_or(value)
        .to_string()
}

fn prompt_text(form: &ConsultationFormState, field: Field) -> String {
    if !field.is_select() {
        return format!("{} ({}): ", field.label(), field.placeholder());
    }
    let current = match field {
        Field::PetType => form.values().pet_type.map(|p| p.label()),
        _ => form.values().urgency.map(|u| u.label()),
    };
    format!(
        "{} [{}] ({}): ",
        field.label(),
        select_labels(field).join("/"),
        current.unwrap_or(field.placeholder())
    )
}

#[cfg(test)]
mod tests {
    use std::collections::VecDeque;

    use super::*;
    use crate::bootstrap::{bootstrap, CliConfig};
    use pet_care_core::form::{OWNER_NAME_TOO_SHORT, SYMPTOMS_TOO_SHORT};

    #[derive(Default)]
    struct ScriptedPrompter {
        answers: VecDeque<&'static str>,
        prompts: Vec<String>,
        warnings: Vec<String>,
    }

    impl ScriptedPrompter {
        fn new(answers: &[&'static str]) -> Self {
            Self {
                answers: answers.iter().copied().collect(),
                ..Default::default()
            }
        }
    }

    impl Prompter for ScriptedPrompter {
        fn ask(&mut self, prompt: &str) -> Result<String, CliError> {
            self.prompts.push(prompt.to_string());
            self.answers
                .pop_front()
                .map(str::to_string)
                .ok_or(CliError::Cancelled)
        }

        fn warn(&mut self, message: &str) {
            self.warnings.push(message.to_string());
        }
    }

    fn valid_args() -> ConsultArgs {
        ConsultArgs {
            owner_name: Some("Alex Doe".into()),
            email: Some("alex@example.com".into()),
            phone: Some("555-1234".into()),
            pet_type: Some("cat".into()),
            pet_age: Some("3".into()),
            symptoms: Some("Sneezing and watery eyes".into()),
            urgency: Some("Soon".into()),
            ..Default::default()
        }
    }

    #[test]
    fn test_prompt_reasks_until_valid() {
        let mut form = ConsultationFormState::new();
        let mut prompter = ScriptedPrompter::new(&[
            "A",
            "Alex Doe",
            "alex@example.com",
            "555-1234",
            "",
            "2 years",
            "Vomiting since yesterday",
            "urgent",
        ]);

        prompt_missing(&mut form, &ConsultArgs::default(), &mut prompter).unwrap();

        assert_eq!(prompter.warnings, vec![OWNER_NAME_TOO_SHORT.to_string()]);
        assert_eq!(form.values().owner_name, "Alex Doe");
        assert_eq!(form.values().pet_type, Some(ConsultPetType::Dog));
        assert_eq!(form.values().urgency, Some(Urgency::Urgent));
        assert!(form.errors().is_empty());
        assert_eq!(
            prompter.prompts[4],
            "Pet Type [Dog/Cat/Bird/Rabbit/Other] (Dog): "
        );
    }

    #[test]
    fn test_flags_skip_prompts() {
        let mut args = valid_args();
        args.symptoms = None;

        let mut form = ConsultationFormState::new();
        apply_flags(&mut form, &args);
        let mut prompter = ScriptedPrompter::new(&["sick", "Sick since Monday night"]);
        prompt_missing(&mut form, &args, &mut prompter).unwrap();

        assert_eq!(prompter.prompts.len(), 2);
        assert_eq!(prompter.warnings, vec![SYMPTOMS_TOO_SHORT.to_string()]);
        assert_eq!(form.values().pet_type, Some(ConsultPetType::Cat));
    }

    #[test]
    fn test_running_out_of_answers_cancels() {
        let mut form = ConsultationFormState::new();
        let mut prompter = ScriptedPrompter::new(&["Alex Doe"]);
        let result = prompt_missing(&mut form, &ConsultArgs::default(), &mut prompter);
        assert!(matches!(result, Err(CliError::Cancelled)));
    }

    #[test]
    fn test_execute_stores_in_outbox() {
        let dir = tempfile::tempdir().unwrap();
        let mut ctx = bootstrap(CliConfig {
            db_path: Some(dir.path().join("outbox.db")),
        })
        .unwrap();

        execute(&mut ctx, valid_args()).unwrap();

        let outbox = ctx.outbox().unwrap();
        let stored = outbox.list_consultations(10).unwrap();
        assert_eq!(stored.len(), 1);
        assert_eq!(stored[0].pet_type, ConsultPetType::Cat);
        assert_eq!(stored[0].urgency, Urgency::Soon);
    }

    #[test]
    fn test_execute_invalid_exits_with_code_two() {
        let mut ctx = bootstrap(CliConfig::default()).unwrap();
        let mut args = valid_args();
        args.symptoms = Some("sick".into());

        let err = execute(&mut ctx, args).unwrap_err();
        let cli_err = err.downcast_ref::<CliError>().unwrap();
        assert_eq!(cli_err.exit_code(), 2);
    }
}

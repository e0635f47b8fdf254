//! Subcommand definitions.

use clap::{Args, Subcommand};
use pet_care_core::models::PetType;

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List the supported pet types
    Pets {
        /// Mark this pet as the active selection
        #[arg(long)]
        selected: Option<PetType>,
    },

    /// Show feeding, temperature, play and toy guidance
    Guide {
        /// Pet type (dog, cat, bird, fish, rabbit); placeholders when omitted
        #[arg(long)]
        pet: Option<PetType>,

        /// Print the panels as JSON
        #[arg(long)]
        json: bool,
    },

    /// Fill in and submit a veterinary consultation request
    Consult(ConsultArgs),

    /// List consultations stored in the outbox
    History {
        /// Maximum number of requests to show
        #[arg(long, default_value_t = 20)]
        limit: usize,
    },

    /// Audit the shipped care content and print its digest
    Catalog,
}

/// Consultation form values. Select fields take their option label.
#[derive(Args, Debug, Default, Clone)]
pub struct ConsultArgs {
    #[arg(long)]
    pub owner_name: Option<String>,

    #[arg(long)]
    pub email: Option<String>,

    #[arg(long)]
    pub phone: Option<String>,

    /// Dog, Cat, Bird, Rabbit or Other (default: Dog)
    #[arg(long)]
    pub pet_type: Option<String>,

    /// e.g. "6 months", "2 years", "3"
    #[arg(long)]
    pub pet_age: Option<String>,

    #[arg(long)]
    pub symptoms: Option<String>,

    /// Routine, Soon or Urgent (default: Routine)
    #[arg(long)]
    pub urgency: Option<String>,

    /// Prompt for every field not given as a flag
    #[arg(short, long)]
    pub interactive: bool,

    /// Print the accepted request (or field errors) as JSON
    #[arg(long)]
    pub json: bool,
}

#[cfg(test)]
mod tests {
    use crate::parser::Cli;
    use crate::Commands;
    use clap::Parser;
    use pet_care_core::models::PetType;

    #[test]
    fn test_guide_pet_is_case_insensitive() {
        let cli = Cli::try_parse_from(["pet-care", "guide", "--pet", "Rabbit"]).unwrap();
        assert!(matches!(
            cli.command,
            Commands::Guide {
                pet: Some(PetType::Rabbit),
                json: false
            }
        ));
    }

    #[test]
    fn test_guide_rejects_unknown_pet() {
        let err = Cli::try_parse_from(["pet-care", "guide", "--pet", "dogg"]).unwrap_err();
        assert!(err.to_string().contains("did you mean 'dog'?"));
    }

    #[test]
    fn test_consult_flags() {
        let cli = Cli::try_parse_from([
            "pet-care",
            "consult",
            "--owner-name",
            "Alex Doe",
            "--pet-age",
            "2 years",
            "--urgency",
            "Urgent",
        ])
        .unwrap();
        let Commands::Consult(args) = cli.command else {
            panic!("expected consult");
        };
        assert_eq!(args.owner_name.as_deref(), Some("Alex Doe"));
        assert_eq!(args.pet_age.as_deref(), Some("2 years"));
        assert_eq!(args.urgency.as_deref(), Some("Urgent"));
        assert!(args.email.is_none());
        assert!(!args.interactive);
    }
}

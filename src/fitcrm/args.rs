use clap::{Args, Parser, Subcommand};
use fitcrm::model::ClientForm;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "fitcrm", version)]
#[command(about = "Client roster for personal trainers", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Directory holding the roster and config (overrides FITCRM_HOME)
    #[arg(long, global = true, value_name = "PATH")]
    pub data_dir: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

/// Client form fields. On `edit`, omitted flags keep the stored value.
#[derive(Args, Debug, Default, Clone)]
pub struct ClientArgs {
    /// Full name
    #[arg(long)]
    pub name: Option<String>,

    /// Age in years (1-150)
    #[arg(long)]
    pub age: Option<String>,

    #[arg(long)]
    pub gender: Option<String>,

    #[arg(long)]
    pub email: Option<String>,

    #[arg(long)]
    pub phone: Option<String>,

    /// Fitness goal, e.g. "Weight Loss", "Muscle Gain", "General Fitness"
    #[arg(long)]
    pub goal: Option<String>,

    /// Date the client started training
    #[arg(long, value_name = "DATE")]
    pub start_date: Option<String>,
}

impl ClientArgs {
    /// Writes every provided flag over `form`.
    pub fn apply_to(self, form: &mut ClientForm) {
        let pairs = [
            (self.name, &mut form.full_name),
            (self.age, &mut form.age),
            (self.gender, &mut form.gender),
            (self.email, &mut form.email),
            (self.phone, &mut form.phone),
            (self.goal, &mut form.goal),
            (self.start_date, &mut form.start_date),
        ];
        for (value, slot) in pairs {
            if let Some(value) = value {
                *slot = value;
            }
        }
    }
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List clients, optionally filtered by name
    #[command(alias = "ls")]
    List {
        /// Case-insensitive name filter
        #[arg(short, long)]
        search: Option<String>,
    },

    /// Add a new client
    #[command(alias = "n")]
    Add(ClientArgs),

    /// Edit an existing client
    #[command(alias = "e")]
    Edit {
        /// Client id
        id: String,

        #[command(flatten)]
        fields: ClientArgs,
    },

    /// Show a client with exercise suggestions
    #[command(alias = "v")]
    View {
        /// Client id
        id: String,

        /// Skip the exercise API and use the built-in suggestions
        #[arg(long)]
        offline: bool,
    },

    /// Delete a client
    #[command(alias = "rm")]
    Delete {
        /// Client id
        id: String,

        /// Name filter to keep when listing afterwards
        #[arg(short, long)]
        search: Option<String>,

        /// Skip confirmation
        #[arg(short, long)]
        yes: bool,
    },

    /// Create the data directory and an empty roster
    Init,

    /// Get or set configuration
    Config {
        /// Configuration key (e.g., relay)
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_add_flags() {
        let cli = Cli::parse_from([
            "fitcrm",
            "add",
            "--name",
            "Jane Doe",
            "--age",
            "30",
            "--goal",
            "Weight Loss",
        ]);
        match cli.command {
            Some(Commands::Add(args)) => {
                assert_eq!(args.name.as_deref(), Some("Jane Doe"));
                assert_eq!(args.age.as_deref(), Some("30"));
                assert!(args.email.is_none());
            }
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn apply_keeps_unset_fields() {
        let mut form = ClientForm {
            full_name: "Old".into(),
            email: "old@x.io".into(),
            ..ClientForm::default()
        };
        ClientArgs {
            name: Some("New".into()),
            ..ClientArgs::default()
        }
        .apply_to(&mut form);
        assert_eq!(form.full_name, "New");
        assert_eq!(form.email, "old@x.io");
    }

    #[test]
    fn parses_global_data_dir_after_subcommand() {
        let cli = Cli::parse_from(["fitcrm", "delete", "abc", "--yes", "--data-dir", "/tmp/x"]);
        assert_eq!(cli.data_dir, Some(PathBuf::from("/tmp/x")));
        assert!(matches!(cli.command, Some(Commands::Delete { yes: true, .. })));
    }
}

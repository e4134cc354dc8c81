use clap::{Args, Parser, Subcommand};
use colored::Colorize;
use emr_client::{Anonymous, Client, StaticToken};
use std::process;
use tracing::Level;

mod commands;

/// Standardized exit codes for CLI.
/// 0 = OK, 2 = input error, 3 = conflict (409), 4 = auth (401/403), 5 = rate limit (429), 1 = other.
#[allow(dead_code)]
const EXIT_OK: i32 = 0;
const EXIT_OTHER: i32 = 1;
const EXIT_INPUT: i32 = 2;
const EXIT_CONFLICT: i32 = 3;
const EXIT_AUTH: i32 = 4;
const EXIT_RATE: i32 = 5;

#[derive(Parser)]
#[command(name = "emrx", version, about = "EMR admin console — persons, attributes, encounters, visit types")]
struct Cli {
    /// API base URL
    #[arg(
        long,
        env = "EMR_URL",
        default_value = "http://localhost:8080/openmrs/ws/rest/v1"
    )]
    url: String,

    /// Bearer token for authentication
    #[arg(long, env = "EMR_TOKEN")]
    token: Option<String>,

    /// Log requests and responses to stderr
    #[arg(long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Manage persons
    #[command(subcommand)]
    Person(PersonCmd),
    /// Manage a person's attributes
    #[command(subcommand)]
    Attribute(AttributeCmd),
    /// Manage a patient's encounters
    #[command(subcommand)]
    Encounter(EncounterCmd),
    /// Configure visit types
    #[command(subcommand, name = "visit-type")]
    VisitType(VisitTypeCmd),
    /// List privileges
    #[command(subcommand)]
    Privilege(PrivilegeCmd),
    /// List roles
    #[command(subcommand)]
    Role(RoleCmd),
    /// Show who the current credential authenticates as
    Whoami,
}

#[derive(Subcommand)]
enum PersonCmd {
    /// Search persons by name
    Search {
        /// Search text
        query: String,
    },
    /// Create a person
    Create(CreatePersonArgs),
    /// Delete a person by UUID
    Delete {
        uuid: String,
    },
}

#[derive(Args)]
struct CreatePersonArgs {
    /// Given name
    #[arg(long)]
    given: String,
    /// Family name
    #[arg(long)]
    family: String,
    /// Gender code (M/F/O/U)
    #[arg(long)]
    gender: String,
    /// Birthdate, YYYY-MM-DD
    #[arg(long)]
    birthdate: Option<String>,
}

#[derive(Subcommand)]
enum AttributeCmd {
    /// List a person's attributes
    List {
        /// Person UUID
        person: String,
    },
    /// Add an attribute to a person
    Add {
        /// Person UUID
        person: String,
        /// Attribute type UUID
        #[arg(long = "type")]
        type_id: String,
        /// Attribute value
        #[arg(long)]
        value: String,
    },
    /// Replace an attribute's value
    Set {
        /// Person UUID
        person: String,
        /// Attribute UUID
        id: String,
        /// New value
        #[arg(long)]
        value: String,
    },
    /// Delete an attribute
    Delete {
        /// Person UUID
        person: String,
        /// Attribute UUID
        id: String,
    },
}

#[derive(Subcommand)]
enum EncounterCmd {
    /// List a patient's encounters
    List {
        /// Patient UUID
        patient: String,
    },
    /// Create an encounter
    Create {
        /// Patient UUID
        #[arg(long)]
        patient: String,
        /// Encounter type UUID
        #[arg(long = "type")]
        type_id: String,
        /// Encounter datetime, ISO-8601
        #[arg(long)]
        datetime: String,
    },
    /// Delete an encounter by UUID
    Delete {
        uuid: String,
    },
}

#[derive(Subcommand)]
enum VisitTypeCmd {
    /// List visit types
    List,
    /// Create a visit type
    Create {
        /// Visit type name
        name: String,
        /// Description
        #[arg(long, default_value = "")]
        description: String,
    },
    /// Replace a visit type's name and description
    Update {
        /// Visit type UUID
        uuid: String,
        #[arg(long)]
        name: String,
        #[arg(long, default_value = "")]
        description: String,
    },
    /// Retire a visit type
    Retire {
        /// Visit type UUID
        uuid: String,
        /// Retirement reason
        #[arg(long)]
        reason: String,
    },
}

#[derive(Subcommand)]
enum PrivilegeCmd {
    /// List privileges
    List,
}

#[derive(Subcommand)]
enum RoleCmd {
    /// List roles with their privileges
    List,
}

/// Map error strings to exit codes based on HTTP status patterns.
fn exit_code_for(err: &str) -> i32 {
    if err.contains("HTTP 401") || err.contains("HTTP 403") {
        EXIT_AUTH
    } else if err.contains("HTTP 409") {
        EXIT_CONFLICT
    } else if err.contains("HTTP 429") {
        EXIT_RATE
    } else if err.contains("read ") || err.contains("parse ") || err.contains("missing ") {
        EXIT_INPUT
    } else {
        EXIT_OTHER
    }
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    if cli.verbose {
        tracing_subscriber::fmt()
            .with_max_level(Level::DEBUG)
            .with_target(false)
            .with_writer(std::io::stderr)
            .compact()
            .init();
    }

    let client = match cli.token.as_deref() {
        Some(tok) => Client::new(&cli.url, StaticToken(tok.to_string())),
        None => Client::new(&cli.url, Anonymous),
    };

    let result = match cli.command {
        Commands::Person(PersonCmd::Search { query }) => {
            commands::person_search(&client, &query).await
        }
        Commands::Person(PersonCmd::Create(args)) => {
            commands::person_create(&client, &args.given, &args.family, &args.gender, args.birthdate.as_deref()).await
        }
        Commands::Person(PersonCmd::Delete { uuid }) => {
            commands::person_delete(&client, &uuid).await
        }
        Commands::Attribute(AttributeCmd::List { person }) => {
            commands::attribute_list(&client, &person).await
        }
        Commands::Attribute(AttributeCmd::Add { person, type_id, value }) => {
            commands::attribute_add(&client, &person, &type_id, &value).await
        }
        Commands::Attribute(AttributeCmd::Set { person, id, value }) => {
            commands::attribute_set(&client, &person, &id, &value).await
        }
        Commands::Attribute(AttributeCmd::Delete { person, id }) => {
            commands::attribute_delete(&client, &person, &id).await
        }
        Commands::Encounter(EncounterCmd::List { patient }) => {
            commands::encounter_list(&client, &patient).await
        }
        Commands::Encounter(EncounterCmd::Create { patient, type_id, datetime }) => {
            commands::encounter_create(&client, &patient, &type_id, &datetime).await
        }
        Commands::Encounter(EncounterCmd::Delete { uuid }) => {
            commands::encounter_delete(&client, &uuid).await
        }
        Commands::VisitType(VisitTypeCmd::List) => commands::visit_type_list(&client).await,
        Commands::VisitType(VisitTypeCmd::Create { name, description }) => {
            commands::visit_type_create(&client, &name, &description).await
        }
        Commands::VisitType(VisitTypeCmd::Update { uuid, name, description }) => {
            commands::visit_type_update(&client, &uuid, &name, &description).await
        }
        Commands::VisitType(VisitTypeCmd::Retire { uuid, reason }) => {
            commands::visit_type_retire(&client, &uuid, &reason).await
        }
        Commands::Privilege(PrivilegeCmd::List) => commands::privilege_list(&client).await,
        Commands::Role(RoleCmd::List) => commands::role_list(&client).await,
        Commands::Whoami => commands::whoami(&client).await,
    };

    if let Err(e) = result {
        eprintln!("{} {}", "error:".red().bold(), e);
        process::exit(exit_code_for(&e));
    }
}

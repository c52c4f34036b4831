use std::process::ExitCode;

use appsynex_auth::create_access_token;
use appsynex_cli::{Decision, case_warnings, decide, parse_roles, render_table};
use appsynex_config::JwtConfig;
use appsynex_core::RoleTable;
use clap::{Parser, Subcommand};
use dialoguer::Input;
use dotenvy::dotenv;

#[derive(Parser)]
#[command(name = "appsynex-cli")]
#[command(about = "AppSynex CLI - Role and session tools for the AppSynex dashboard", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Decide whether a role set may perform an action on a module
    Check {
        /// Role held by the user (repeatable)
        #[arg(short = 'r', long = "role")]
        roles: Vec<String>,

        /// Module, e.g. SAMPLE
        #[arg(short = 'm', long)]
        module: String,

        /// Action, e.g. DELETE
        #[arg(short = 'a', long)]
        action: String,
    },
    /// Print the role table and report hierarchy gaps
    Audit,
    /// Sign a development session token
    IssueToken {
        /// Username (prompted if not provided)
        #[arg(short = 'u', long)]
        username: Option<String>,

        /// Email address (prompted if not provided)
        #[arg(short = 'e', long)]
        email: Option<String>,

        /// Role to embed in the token (repeatable)
        #[arg(short = 'r', long = "role")]
        roles: Vec<String>,

        /// User id; a random UUID when omitted
        #[arg(long)]
        user_id: Option<String>,
    },
}

fn main() -> ExitCode {
    dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Commands::Check {
            roles,
            module,
            action,
        } => handle_check(&roles, &module, &action),
        Commands::Audit => handle_audit(),
        Commands::IssueToken {
            username,
            email,
            roles,
            user_id,
        } => match handle_issue_token(username, email, &roles, user_id) {
            Ok(()) => ExitCode::SUCCESS,
            Err(e) => {
                eprintln!("\n❌ Error issuing token: {e:#}");
                ExitCode::FAILURE
            }
        },
    }
}

fn handle_check(roles: &[String], module: &str, action: &str) -> ExitCode {
    for warning in case_warnings(roles, Some(module), Some(action)) {
        eprintln!("⚠️  {warning}");
    }
    let roles = parse_roles(roles);
    let decision = decide(&roles, module, action);
    println!("{decision}");

    match decision {
        Decision::Allow => ExitCode::SUCCESS,
        Decision::Deny => ExitCode::FAILURE,
    }
}

fn handle_audit() -> ExitCode {
    let table = RoleTable::builtin();
    println!("{}", render_table(table));

    let findings = table.hierarchy_findings();
    if findings.is_empty() {
        println!("\n✅ Role hierarchy is consistent");
        return ExitCode::SUCCESS;
    }

    eprintln!("\n❌ {} hierarchy gap(s):", findings.len());
    for finding in &findings {
        eprintln!("   {finding}");
    }
    ExitCode::FAILURE
}

fn handle_issue_token(
    username: Option<String>,
    email: Option<String>,
    roles: &[String],
    user_id: Option<String>,
) -> anyhow::Result<()> {
    let username = match username {
        Some(username) => username,
        None => Input::new().with_prompt("Username").interact_text()?,
    };

    let email = match email {
        Some(email) => email,
        None => Input::new().with_prompt("Email address").interact_text()?,
    };

    let user_id = user_id.unwrap_or_else(|| uuid::Uuid::new_v4().to_string());
    for warning in case_warnings(roles, None, None) {
        eprintln!("⚠️  {warning}");
    }
    let roles = parse_roles(roles);
    if roles.is_empty() {
        eprintln!("⚠️  No roles given; the token will not grant any permission");
    }

    let jwt_config = JwtConfig::from_env();
    if jwt_config.uses_dev_secret() {
        eprintln!("⚠️  JWT_SECRET is not set; signing with the development secret");
    }
    let token = create_access_token(
        &user_id,
        &username,
        &email,
        roles.into_iter().collect(),
        &jwt_config,
    )
    .map_err(|e| anyhow::anyhow!(e.message()))?;

    println!("{token}");
    Ok(())
}

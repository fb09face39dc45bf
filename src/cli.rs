//! Command line front end
//!
//! Every command prints a JSON document on stdout; logs go to stderr.

use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use serde::Serialize;
use serde_json::json;

use kb_app::usecases::{GateView, ProtectedPage};
use kb_core::{AccessPolicy, AdminLevel, Identity, OnboardingStep, Role, StepSubmission};

use crate::adapters::Navigation;
use crate::bootstrap::{load_config_or_default, wire_dependencies, AppRuntime};

#[derive(Debug, Parser)]
#[command(name = "kakobingo")]
#[command(about = "KakoBingo onboarding gate", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Configuration file path
    #[arg(short, long, env = "KAKOBINGO_CONFIG")]
    pub config: Option<PathBuf>,

    /// Also write logs to a daily file in this directory
    #[arg(long, env = "KAKOBINGO_LOG_DIR")]
    pub log_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Run the route gate for a requested path
    Gate {
        /// Authenticated user; omit to check as a signed-out visitor
        #[arg(long)]
        uid: Option<String>,
        #[arg(long)]
        path: String,
        /// Minimum admin level the page requires
        #[arg(long)]
        min_admin: Option<AdminLevel>,
    },
    /// Show derived onboarding status and wizard progress
    Status {
        #[arg(long)]
        uid: String,
    },
    /// Submit one onboarding step
    Submit {
        #[arg(long)]
        uid: String,
        /// The identity service reports the email as verified
        #[arg(long)]
        email_verified: bool,
        #[command(subcommand)]
        step: StepArgs,
    },
    /// Clear the stored wizard progress
    Reset {
        #[arg(long)]
        uid: String,
    },
}

#[derive(Debug, Subcommand)]
pub enum StepArgs {
    VerifyEmail,
    Terms {
        #[arg(long)]
        accept: bool,
    },
    RoleSelection {
        #[arg(long)]
        role: Role,
    },
    AgeVerification {
        /// YYYY-MM-DD
        #[arg(long)]
        birth_date: NaiveDate,
        #[arg(long)]
        gender: String,
        #[arg(long)]
        country: String,
    },
    ContactInfo {
        #[arg(long)]
        phone_number: String,
        #[arg(long)]
        found_us_via: String,
    },
    KakoIdInput {
        #[arg(long)]
        kako_id: String,
    },
    KakoAccountCheck {
        #[arg(long)]
        has_account: bool,
    },
}

impl From<StepArgs> for StepSubmission {
    fn from(args: StepArgs) -> Self {
        match args {
            StepArgs::VerifyEmail => StepSubmission::VerifyEmail,
            StepArgs::Terms { accept } => StepSubmission::Terms { accepted: accept },
            StepArgs::RoleSelection { role } => StepSubmission::RoleSelection { role },
            StepArgs::AgeVerification {
                birth_date,
                gender,
                country,
            } => StepSubmission::AgeVerification {
                birth_date,
                gender,
                country,
            },
            StepArgs::ContactInfo {
                phone_number,
                found_us_via,
            } => StepSubmission::ContactInfo {
                phone_number,
                found_us_via,
            },
            StepArgs::KakoIdInput { kako_id } => StepSubmission::KakoIdInput { kako_id },
            StepArgs::KakoAccountCheck { has_account } => {
                StepSubmission::KakoAccountCheck { has_account }
            }
        }
    }
}

#[derive(Serialize)]
struct Report<T: Serialize> {
    result: T,
    navigations: Vec<Navigation>,
}

fn print_json(value: &impl Serialize) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

pub async fn run(cli: Cli) -> anyhow::Result<()> {
    let config = load_config_or_default(cli.config.as_deref())?;

    match cli.command {
        Command::Gate {
            uid,
            path,
            min_admin,
        } => {
            let (deps, navigator) = wire_dependencies(config, uid.map(Identity::new));
            let runtime = AppRuntime::new(deps);
            let gate = runtime.usecases().route_gate();

            let base = &runtime.deps.config.routes.onboarding_base;
            let page = match OnboardingStep::from_path(&path, base) {
                Some(step) => ProtectedPage::enter_onboarding(&gate, step, &path).await,
                None => {
                    let policy = match min_admin {
                        Some(level) => AccessPolicy::admin(level),
                        None => AccessPolicy::onboarded(),
                    };
                    ProtectedPage::enter(&gate, &path, policy).await
                }
            };
            let rendered = matches!(page.render(|| ()), GateView::Content(()));

            print_json(&Report {
                result: json!({ "decision": page.decision(), "rendered": rendered }),
                navigations: navigator.history(),
            })
        }
        Command::Status { uid } => {
            let (deps, _) = wire_dependencies(config, Some(Identity::new(uid.clone())));
            let runtime = AppRuntime::new(deps);
            let session = runtime.open_session(&uid).await;

            let status = runtime.usecases().get_onboarding_status().execute(&session).await?;
            print_json(&status)
        }
        Command::Submit {
            uid,
            email_verified,
            step,
        } => {
            let mut identity = Identity::new(uid.clone());
            identity.email_verified = email_verified;
            let (deps, navigator) = wire_dependencies(config, Some(identity));
            let runtime = AppRuntime::new(deps);
            let session = runtime.open_session(&uid).await;

            let outcome = runtime
                .usecases()
                .submit_onboarding_step()
                .execute(&session, step.into())
                .await?;

            print_json(&Report {
                result: outcome,
                navigations: navigator.history(),
            })
        }
        Command::Reset { uid } => {
            let (deps, _) = wire_dependencies(config, Some(Identity::new(uid.clone())));
            let runtime = AppRuntime::new(deps);
            runtime.open_session(&uid).await.restart().await?;
            print_json(&json!({ "cleared": uid }))
        }
    }
}

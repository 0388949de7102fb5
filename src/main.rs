use std::net::SocketAddr;
use std::process;
use std::sync::Arc;
use std::time::Duration;

use clap::{Parser, Subcommand};
use comfy_table::{modifiers, presets, ContentArrangement, Table};
use dialoguer::Confirm;
use indicatif::{ProgressBar, ProgressStyle};
use terminal_size::{terminal_size, Width};
use yansi::Paint;

use ec2m::api::{AwsConnector, AwsProvider, ComputeProvider};
use ec2m::config::{self, DEFAULT_HOST, DEFAULT_PORT};
use ec2m::models::{AppState, ConfirmationAction, FleetScan, InstanceView, LifecycleCommand};
use ec2m::services::{check_account, check_instance_block, execute_lifecycle, scan_running_instances};
use ec2m::utils::is_valid_region;
use ec2m::{logging, routes};

fn build_state() -> AppState {
    let connector = Arc::new(AwsConnector::new(config::get_home_region()));
    let mut state = AppState::new(connector);
    state.public_base_url = config::get_public_base_url();
    state.protected_instances = Arc::new(config::get_protected_instance_ids());
    state.session_idle_timeout = config::get_session_idle_timeout();
    state
}

async fn start_server(mut state: AppState, host: &str, port: u16, stylesheet: Option<String>) {
    if let Some(path) = stylesheet {
        match std::fs::read_to_string(&path) {
            Ok(css) => {
                state.custom_css = Some(css);
                tracing::info!("Loaded custom stylesheet from {}", path);
            }
            Err(e) => {
                tracing::error!(%e, "Failed to read custom stylesheet");
                eprintln!("{} {}: {}", "Failed to read custom stylesheet at".red(), path, e);
                process::exit(1);
            }
        }
    }

    let addr: SocketAddr = match format!("{}:{}", host, port).parse() {
        Ok(a) => a,
        Err(e) => {
            tracing::error!(%e, "Invalid host/port format");
            eprintln!("{}: {}", "Invalid host/port format".red(), e);
            process::exit(1);
        }
    };
    if !state.protected_instances.is_empty() {
        tracing::info!(count = state.protected_instances.len(), "Protected instances configured");
    }
    let app = routes::build_app(state);
    tracing::info!(%addr, "Starting EC2 Manager dashboard");
    println!("{} {}", "Dashboard running on".green(), format!("http://{}", addr).cyan());
    match tokio::net::TcpListener::bind(addr).await {
        Ok(listener) => {
            if let Err(e) = axum::serve(listener, app).await {
                tracing::error!(%e, "Server encountered an error while running");
                eprintln!("{}: {}", "Server error".red(), e);
                process::exit(1);
            }
        }
        Err(e) => {
            tracing::error!(%e, "Failed to bind to address; is the port already in use?");
            eprintln!(
                "{}: {}\n{}",
                format!("Failed to bind to {}", addr).red(),
                e,
                "Please stop any process using this port, or start the server with a different --port value.".yellow()
            );
            process::exit(1);
        }
    }
}

/// Static keys from the environment when present, otherwise the SDK chain.
async fn cli_provider() -> AwsProvider {
    let home = config::get_home_region();
    match config::credentials_from_env() {
        Some(credentials) => AwsProvider::from_credentials(&credentials, &home).await,
        None => AwsProvider::from_default_chain(&home).await,
    }
}

fn new_table() -> Table {
    let mut table = Table::new();
    table.load_preset(presets::UTF8_FULL);
    table.apply_modifier(modifiers::UTF8_ROUND_CORNERS);
    table.set_content_arrangement(ContentArrangement::Dynamic);
    if let Some((Width(w), _)) = terminal_size() {
        table.set_width(w.saturating_sub(4));
    }
    table
}

fn print_scan(scan: &FleetScan) {
    if scan.is_empty() {
        println!("\n{}", "No running instances found in any region.".dim());
    } else {
        let mut table = new_table();
        table.set_header(vec!["Region", "Instance ID", "Name", "Type", "Public IP", "Private IP", "Launch Time", "State"]);
        for section in &scan.sections {
            for instance in &section.instances {
                let v = InstanceView::from_instance(instance, &section.region);
                table.add_row(vec![
                    v.region, v.id, v.name, v.instance_type, v.public_ip, v.private_ip, v.launch_time, v.state,
                ]);
            }
        }
        println!("\n{table}");
        println!(
            "\n{}",
            format!("{} running instance(s) in {} region(s)", scan.total, scan.sections.len()).cyan()
        );
    }
    if !scan.failed_regions.is_empty() {
        eprintln!(
            "{} {}",
            "Could not list instances in:".yellow(),
            scan.failed_regions.join(", ")
        );
    }
    println!();
}

fn confirm(prompt: &str) -> bool {
    Confirm::new()
        .with_prompt(prompt)
        .default(false)
        .interact()
        .unwrap_or(false)
}

fn fail(message: impl std::fmt::Display) -> ! {
    eprintln!("{} {}", "error:".red().bold(), message);
    process::exit(1);
}

async fn regions_or_exit(provider: &AwsProvider) -> Vec<String> {
    match provider.list_regions().await {
        Ok(regions) => regions,
        Err(e) => {
            tracing::error!(error = %e, detail = ?e.detail(), "Region enumeration failed");
            fail(e)
        }
    }
}

async fn run_lifecycle_command(command: LifecycleCommand, instance_id: &str, region: &str, yes: bool) {
    if let Some(reason) = check_instance_block(&config::get_protected_instance_ids(), instance_id) {
        tracing::warn!(instance_id, region, command = command.verb(), "Refused lifecycle command on protected instance");
        fail(reason.message());
    }
    if !yes {
        let prompts: &[ConfirmationAction] = match command {
            LifecycleCommand::Stop => &[ConfirmationAction::StopInstance],
            LifecycleCommand::Terminate => &[
                ConfirmationAction::TerminateInstance,
                ConfirmationAction::TerminateInstanceFinal,
            ],
        };
        for action in prompts {
            if !confirm(&action.message(instance_id, region)) {
                println!("{}", "Aborted.".dim());
                return;
            }
        }
    }

    let provider = cli_provider().await;
    match execute_lifecycle(&provider, command, region, instance_id).await {
        Ok(change) => {
            println!("{}", command.success_message(instance_id).green());
            println!(
                "{} {} -> {}",
                "State:".dim(),
                change.previous.label(),
                change.current.label().bold()
            );
        }
        Err(e) => fail(command.failure_message(&e.to_string())),
    }
}

#[derive(Parser)]
#[command(
    name = "ec2m",
    author,
    version,
    about = "List, stop and terminate running EC2 instances across every region",
    long_about = r#"ec2m: a small dashboard and CLI for the running EC2 instances of one AWS account.

`ec2m serve` starts the web dashboard, where credentials are entered in the browser and kept in memory for that session only. The other commands read AWS_ACCESS_KEY_ID / AWS_SECRET_ACCESS_KEY (and optionally AWS_ACCOUNT_ID) from the environment or a .env file, falling back to the AWS SDK default credential chain.

Examples:
  ec2m serve --host 127.0.0.1 --port 8080
  ec2m instances list
  ec2m instances stop i-0123456789abcdef0 --region eu-west-1
"#,
    after_help = "Use `ec2m <subcommand> --help` to get subcommand specific options and usage examples."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
    /// Disable colorized output
    #[arg(long, global = true)]
    no_color: bool,
    /// Path to .env file
    #[arg(long, global = true)]
    env_file: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the web dashboard
    Serve {
        /// Host to bind to
        #[arg(long, default_value_t = String::from(DEFAULT_HOST))]
        host: String,
        /// Port to bind to
        #[arg(long, default_value_t = DEFAULT_PORT)]
        port: u16,
        /// Path to a custom stylesheet to serve instead of the default
        #[arg(long)]
        stylesheet: Option<String>,
    },
    /// Validate credentials by enumerating regions
    #[command(long_about = "Resolve credentials the same way the other commands do, list regions from the home region and, when AWS_ACCOUNT_ID is set, check that the credentials belong to that account.")]
    CheckConfig,
    /// List regions visible to the credentials
    Regions,
    /// List, stop or terminate instances
    #[command(long_about = "These commands perform the same actions as the dashboard. Stop and terminate ask for confirmation unless --yes is given; terminate asks twice.")]
    Instances {
        #[command(subcommand)]
        sub: InstanceCommands,
    },
}

#[derive(Subcommand)]
enum InstanceCommands {
    /// List running instances, one region at a time
    List {
        /// Only scan these regions (repeatable). Defaults to every region.
        #[arg(long = "region", short = 'r')]
        regions: Vec<String>,
    },
    /// Stop an instance; its storage is preserved
    Stop {
        instance_id: String,
        #[arg(long, short = 'r')]
        region: String,
        /// Skip the confirmation prompt
        #[arg(long, short = 'y')]
        yes: bool,
    },
    /// Terminate an instance; this cannot be undone
    Terminate {
        instance_id: String,
        #[arg(long, short = 'r')]
        region: String,
        /// Skip both confirmation prompts
        #[arg(long, short = 'y')]
        yes: bool,
    },
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    config::load_env_file(cli.env_file.as_deref());
    logging::init(&config::get_log_format(), &config::get_log_level());

    if cli.no_color {
        yansi::whenever(yansi::Condition::NEVER);
    }

    let Some(command) = cli.command else {
        start_server(build_state(), DEFAULT_HOST, DEFAULT_PORT, None).await;
        return;
    };

    match command {
        Commands::Serve { host, port, stylesheet } => {
            start_server(build_state(), &host, port, stylesheet).await;
        }
        Commands::CheckConfig => {
            let provider = cli_provider().await;
            let regions = regions_or_exit(&provider).await;
            if let Some(expected) = config::credentials_from_env()
                .map(|c| c.account_id)
                .filter(|a| !a.is_empty())
            {
                match provider.caller_account_id().await {
                    Ok(actual) => {
                        if let Err(e) = check_account(&expected, &actual) {
                            fail(e);
                        }
                    }
                    Err(e) => fail(e),
                }
            }
            println!(
                "{}",
                format!("Configuration looks valid ({} regions returned)", regions.len()).green()
            );
        }
        Commands::Regions => {
            let provider = cli_provider().await;
            let regions = regions_or_exit(&provider).await;
            let mut table = new_table();
            table.set_header(vec!["Region"]);
            for region in &regions {
                table.add_row(vec![region]);
            }
            println!("\n{table}\n");
        }
        Commands::Instances { sub } => match sub {
            InstanceCommands::List { regions } => {
                if let Some(bad) = regions.iter().find(|r| !is_valid_region(r)) {
                    fail(format!("invalid region '{}'", bad));
                }
                let provider = cli_provider().await;
                let regions = if regions.is_empty() {
                    regions_or_exit(&provider).await
                } else {
                    regions
                };

                let spinner = ProgressBar::new_spinner();
                if let Ok(style) = ProgressStyle::with_template("{spinner} {msg}") {
                    spinner.set_style(style);
                }
                spinner.set_message(format!("Scanning {} region(s)...", regions.len()));
                spinner.enable_steady_tick(Duration::from_millis(100));
                let scan = scan_running_instances(&provider, &regions).await;
                spinner.finish_and_clear();

                print_scan(&scan);
            }
            InstanceCommands::Stop { instance_id, region, yes } => {
                run_lifecycle_command(LifecycleCommand::Stop, &instance_id, &region, yes).await;
            }
            InstanceCommands::Terminate { instance_id, region, yes } => {
                run_lifecycle_command(LifecycleCommand::Terminate, &instance_id, &region, yes).await;
            }
        },
    }
}

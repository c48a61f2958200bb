// each subcommand plays the role of one page event
use crate::api::HrApi;
use crate::config::{ClientConfig, UploadRoute};
use crate::errors::AppError;
use crate::handlers;
use crate::handlers::file::EmployeeIdSource;
use crate::handlers::search::{LiveSearch, SearchMode};
use crate::ui::console::ConsolePage;
use crate::ui::FieldBindings;
use clap::Parser;
use futures_util::stream::{FuturesUnordered, StreamExt};
use std::path::PathBuf;
use tokio::io::{AsyncBufReadExt, BufReader};

/// Client for the HR backend: register employees, upload their documents,
/// look them up and show dashboard counts.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Backend base URL. Defaults to HR_API_BASE_URL, then http://localhost:8080.
    #[arg(long, global = true)]
    base_url: Option<String>,
    #[command(subcommand)]
    subcommands: Subcommands,
}

#[derive(Clone, clap::Subcommand)]
enum Subcommands {
    /// Register a new employee
    Register {
        #[arg(long)]
        name: String,
        /// Date of birth, YYYY-MM-DD
        #[arg(long)]
        dob: String,
        #[arg(long)]
        address: String,
        #[arg(long)]
        contact: String,
        #[arg(long)]
        pan: String,
        #[arg(long)]
        aadhar: String,
    },
    /// Upload the document bundle of an employee
    Upload {
        #[arg(long)]
        employee_id: String,
        /// `files` or `legacy`. Defaults to HR_UPLOAD_ROUTE, then `files`.
        #[arg(long)]
        route: Option<UploadRoute>,
        #[arg(long)]
        resume: Option<PathBuf>,
        #[arg(long)]
        certs: Option<PathBuf>,
        #[arg(long)]
        offer: Option<PathBuf>,
        #[arg(long)]
        pan_card: Option<PathBuf>,
        #[arg(long)]
        aadhar_card: Option<PathBuf>,
        #[arg(long)]
        form16: Option<PathBuf>,
    },
    /// Live lookup: every stdin line is the current content of the search box
    Search {
        /// Match on employee name instead of id
        #[arg(long)]
        by_name: bool,
    },
    /// Show employee and document counts
    Stats,
    /// List every employee
    List,
}

fn load_config(base_url: Option<String>) -> Result<ClientConfig, AppError> {
    let config = ClientConfig::from_env()?;
    match base_url {
        Some(base_url) => ClientConfig::new(&base_url, config.upload_route),
        None => Ok(config),
    }
}

/// Main entrypoint of the binary.
///
/// # Errors
/// Returns the error of the handler that ran; the handler has already
/// reported it on the console.
pub async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let config = load_config(cli.base_url)?;
    let api = HrApi::new(&config)?;
    log::debug!("using backend {}", config.base_url);

    match cli.subcommands {
        Subcommands::Register { name, dob, address, contact, pan, aadhar } => {
            let bindings = FieldBindings::registration();
            let page = ConsolePage::new()
                .with_text(bindings.element_id("name"), name)
                .with_text(bindings.element_id("date_of_birth"), dob)
                .with_text(bindings.element_id("address"), address)
                .with_text(bindings.element_id("contact_number"), contact)
                .with_text(bindings.element_id("pan_number"), pan)
                .with_text(bindings.element_id("aadhar_number"), aadhar);
            handlers::employee::register_employee(&api, &page, &bindings).await?;
        }
        Subcommands::Upload {
            employee_id,
            route,
            resume,
            certs,
            offer,
            pan_card,
            aadhar_card,
            form16,
        } => {
            let bindings = FieldBindings::documents();
            let page = ConsolePage::new()
                .with_file(bindings.element_id("resume"), resume)?
                .with_file(bindings.element_id("educational_certificates"), certs)?
                .with_file(bindings.element_id("offer_letters"), offer)?
                .with_file(bindings.element_id("pan_card"), pan_card)?
                .with_file(bindings.element_id("aadhar_card"), aadhar_card)?
                .with_file(bindings.element_id("form_16_or_it_returns"), form16)?;
            let id_source = EmployeeIdSource::Argument(employee_id);
            handlers::file::upload_documents(&api, &page, &bindings, &id_source, route).await?;
        }
        Subcommands::Search { by_name } => {
            let mode = if by_name { SearchMode::ByName } else { SearchMode::ById };
            search_stdin(&api, mode).await?;
        }
        Subcommands::Stats => {
            handlers::stats::load_dashboard(&api, &ConsolePage::new()).await?;
        }
        Subcommands::List => {
            for employee in api.list_employees().await? {
                println!("{}", employee.summary_line());
            }
        }
    }
    Ok(())
}

/// Feeds stdin lines to a live search while earlier lookups are still in
/// flight, the way keystrokes reach the search box.
async fn search_stdin(api: &HrApi, mode: SearchMode) -> Result<(), AppError> {
    let search = LiveSearch::new(api, mode);
    let page = ConsolePage::new();
    let (search, page) = (&search, &page);

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut in_flight = FuturesUnordered::new();
    loop {
        tokio::select! {
            line = lines.next_line() => match line? {
                Some(line) => in_flight.push(async move { search.on_input(&line, page).await }),
                None => break,
            },
            Some(()) = in_flight.next(), if !in_flight.is_empty() => {}
        }
    }
    while in_flight.next().await.is_some() {}
    Ok(())
}

use anyhow::Context;
use clap::{ArgGroup, Parser};
use edgar_lookup::{
    CompanyIndex, CompanyOperations, CompanyRecord, Edgar, EdgarConfig,
    FilingOperations, FilingPeriod, FilingReference,
};
use std::process::ExitCode;
use std::time::Duration;
use tracing_subscriber::{EnvFilter, fmt};

/// Look up a company's 10-K or 10-Q on SEC EDGAR
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
#[command(group(ArgGroup::new("company").required(true).args(["name", "ticker"])))]
struct Args {
    /// Exact company name as listed by the SEC (case-insensitive)
    #[arg(short, long)]
    name: Option<String>,

    /// Ticker symbol (case-insensitive)
    #[arg(short, long)]
    ticker: Option<String>,

    /// Filing year
    #[arg(short, long)]
    year: i32,

    /// Fiscal quarter (1-4); omit to look up the annual 10-K
    #[arg(short, long, value_parser = clap::value_parser!(u32).range(1..=4))]
    quarter: Option<u32>,

    /// Download the filing document and print it as text
    #[arg(long)]
    text: bool,

    /// Override the company reference feed URL
    #[arg(long)]
    companies_url: Option<String>,

    /// Contact string sent as User-Agent, e.g. "AppName you@example.com"
    #[arg(long, env = "EDGAR_USER_AGENT")]
    user_agent: String,

    /// Per-request timeout in seconds
    #[arg(long, env = "EDGAR_TIMEOUT_SECS", default_value_t = 30)]
    timeout_secs: u64,
}

fn setup_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    setup_logging();

    let args = Args::parse();
    tracing::debug!("Starting lookup for args: {:?}", args);

    let config = EdgarConfig::new(
        args.user_agent.clone(),
        Duration::from_secs(args.timeout_secs),
        None,
    );
    let edgar = Edgar::with_config(config).context("failed to build EDGAR client")?;

    let index = match &args.companies_url {
        Some(url) => edgar.company_index_from(url).await,
        None => edgar.company_index().await,
    }
    .context("failed to load the company index")?;
    tracing::info!("Loaded {} companies", index.len());

    let Some(company) = lookup_company(&index, &args)? else {
        return Ok(ExitCode::FAILURE);
    };
    print_company(company);

    let period = match args.quarter {
        Some(quarter) => FilingPeriod::quarterly(args.year, quarter)?,
        None => FilingPeriod::annual(args.year)?,
    };

    let filing = match edgar.find_filing(company.cik(), period).await {
        Ok(filing) => filing,
        Err(err) if err.is_not_found() => {
            println!("{}", err);
            return Ok(ExitCode::FAILURE);
        }
        Err(err) => return Err(err).context("failed to fetch filings"),
    };
    print_filing(&filing);

    if args.text {
        let text = edgar
            .filing_text(&filing)
            .await
            .with_context(|| format!("failed to fetch {}", filing.document_url))?;
        println!();
        println!("{}", text);
    }

    Ok(ExitCode::SUCCESS)
}

fn lookup_company<'a>(
    index: &'a CompanyIndex,
    args: &Args,
) -> anyhow::Result<Option<&'a CompanyRecord>> {
    let result = match (&args.ticker, &args.name) {
        (Some(ticker), _) => index.resolve_by_ticker(ticker),
        (None, Some(name)) => index.resolve_by_name(name),
        (None, None) => anyhow::bail!("either --name or --ticker is required"),
    };

    match result {
        Ok(record) => Ok(Some(record)),
        Err(err) if err.is_not_found() => {
            println!("{}", err);
            Ok(None)
        }
        Err(err) => Err(err.into()),
    }
}

fn print_company(company: &CompanyRecord) {
    println!("Company: {}", company.name);
    println!("Ticker:  {}", company.ticker);
    println!("CIK:     {} ({})", company.cik, company.cik().padded());
}

fn print_filing(filing: &FilingReference) {
    println!("Form:      {}", filing.form);
    println!("Filed:     {}", filing.filing_date);
    println!("Accession: {}", filing.accession_number);
    println!("Document:  {}", filing.document_url);
}

mod cli;

// remote imports
use clap::Parser;
use cli::{Cli, Commands, TraceLevel};
use thirteenf_spider::edgar::Locator;
use thirteenf_spider::{report, tsv};
use tracing::{debug, subscriber, trace, Level};
use tracing_subscriber::FmtSubscriber;

////////////////////////////////////////////////////////////////////////////

// preproccess the trace level, and open the .env file
fn preprocess(trace_level: Option<Level>) -> anyhow::Result<()> {
    dotenv::dotenv().ok();
    if let Some(trace_level) = trace_level {
        let my_subscriber = FmtSubscriber::builder()
            .with_max_level(trace_level)
            .finish();
        subscriber::set_global_default(my_subscriber)?;
    }
    Ok(())
}

////////////////////////////////////////////////////////////////////////////

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // set the trace level
    preprocess(cli.trace.map(|trace_level| match trace_level {
        TraceLevel::DEBUG => Level::DEBUG,
        TraceLevel::ERROR => Level::ERROR,
        TraceLevel::INFO => Level::INFO,
        TraceLevel::TRACE => Level::TRACE,
        TraceLevel::WARN => Level::WARN,
    }))?;
    trace!("command line input recorded: {cli:?}");

    // if no trace level provided, use tui
    let tui = cli.trace.is_none();

    // read cli inputs
    match cli.command {
        // `thirteenf report <identifier> <output>`: download, parse & write the latest 13F
        Commands::Report {
            identifier,
            output,
            form_type,
            count,
        } => {
            let http_client = thirteenf_spider::std_client_build()?;
            let locator = Locator {
                form_type,
                count,
                ..Locator::from_env()
            };
            debug!("locating filings with {locator:?}");

            let holdings =
                report::generate(&http_client, &locator, &identifier, &output, tui).await?;
            if tui {
                println!(
                    "{} holdings written to {}",
                    holdings.len(),
                    output.display()
                );
            }
        }

        // `thirteenf show <path>`: read a report back
        Commands::Show { path } => {
            let holdings = tsv::read(&path).await?;
            for holding in &holdings {
                println!(
                    "{:<40} {:<9} {:>12} {:>12} {}",
                    holding.name_of_issuer,
                    holding.cusip,
                    holding.value,
                    holding.ssh_prnamt,
                    holding.ssh_prnamt_type
                );
            }
            if tui {
                println!("{} holdings read from {}", holdings.len(), path.display());
            }
        }
    }

    Ok(())
}

use crate::edgar::{info_table, Locator};
use crate::holding::Holding;
use crate::http::Fetch;
use std::path::Path;
use tracing::{error, info, warn};

/// Download, parse and write the latest 13F holdings report of `identifier`
/// (a ticker or CIK) to `output_path`, returning the holdings written.
pub async fn generate<F: Fetch>(
    fetcher: &F,
    locator: &Locator,
    identifier: &str,
    output_path: impl AsRef<Path>,
    tui: bool,
) -> anyhow::Result<Vec<Holding>> {
    let time = std::time::Instant::now();
    let output_path = output_path.as_ref();

    // 1. find & download the filing
    let pb = crate::tui::spinner(
        tui,
        format!(
            "locating the latest {} filing for {identifier} ...",
            locator.form_type
        ),
    );
    let document = locator
        .locate(fetcher, identifier)
        .await
        .map_err(|err| {
            pb.finish_and_clear();
            error!("failed to locate a {} filing, error({err})", locator.form_type);
            err
        })?;

    // 2. parse the information table
    pb.set_message("parsing information table ...");
    let holdings = info_table::parse(&document);
    if holdings.is_empty() {
        warn!("no holdings found in the {} filing for {identifier}", locator.form_type);
    }

    // 3. write the report
    pb.set_message(format!("writing holdings to {} ...", output_path.display()));
    crate::tsv::write(output_path, &holdings)
        .await
        .map_err(|err| {
            pb.finish_and_clear();
            err
        })?;
    pb.finish_and_clear();

    info!(
        "{} report for {identifier} generated, {}",
        locator.form_type,
        crate::time_elapsed(time)
    );

    Ok(holdings)
}

use crate::holding::{Holding, HEADERS};
use std::path::Path;
use tracing::{debug, error, trace, warn};

/// Serialize holdings to tab-separated text; the header row first, then one
/// row per holding, each value written verbatim.
pub fn to_string(holdings: &[Holding]) -> anyhow::Result<String> {
    let mut writer = csv::WriterBuilder::new()
        .delimiter(b'\t')
        .has_headers(false)
        .from_writer(vec![]);

    writer.write_record(HEADERS)?;
    for holding in holdings {
        writer.write_record(holding.to_record())?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|err| anyhow::anyhow!("failed to flush tsv writer: {err}"))?;
    Ok(String::from_utf8(bytes)?)
}

/// Deserialize tab-separated text back to holdings; the header row is
/// dropped and each remaining row is read positionally.
pub fn from_str(text: &str) -> anyhow::Result<Vec<Holding>> {
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(b'\t')
        .has_headers(true)
        .from_reader(text.as_bytes());

    let headers = reader.headers()?;
    if !headers.is_empty() && headers.iter().ne(HEADERS) {
        warn!("unexpected header row {headers:?}, reading rows by position");
    }

    let mut holdings = Vec::new();
    for (i, record) in reader.records().enumerate() {
        let record = record.map_err(|err| {
            error!("failed to read tsv row {}, error({err})", i + 2);
            err
        })?;
        holdings.push(record.deserialize::<Holding>(None)?);
    }

    Ok(holdings)
}

/// Write a holdings report to `path`, creating parent directories as
/// necessary.
pub async fn write(path: impl AsRef<Path>, holdings: &[Holding]) -> anyhow::Result<()> {
    let path = path.as_ref();

    trace!("checking directory path: {path:?}");
    if let Some(dir_path) = path.parent().filter(|dir| !dir.as_os_str().is_empty()) {
        tokio::fs::create_dir_all(dir_path).await?;
    }

    let text = to_string(holdings)?;
    tokio::fs::write(path, text).await.map_err(|err| {
        error!("failed to write holdings to {path:?}, error({err})");
        err
    })?;
    debug!("{} holdings written to {path:?}", holdings.len());

    Ok(())
}

/// Read a holdings report from `path`.
pub async fn read(path: impl AsRef<Path>) -> anyhow::Result<Vec<Holding>> {
    let path = path.as_ref();

    trace!("reading file path: {path:?}");
    let text = tokio::fs::read_to_string(path).await.map_err(|err| {
        error!("failed to read {path:?}, error({err})");
        err
    })?;

    from_str(&text)
}

//////////////////////////////////////////////////////////////
// -- TESTS --
//////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use super::*;

    fn holding(name: &str, other_manager: &str) -> Holding {
        Holding {
            name_of_issuer: name.to_string(),
            title_of_class: "COM".to_string(),
            cusip: "037833100".to_string(),
            value: "0012".to_string(),
            ssh_prnamt: "5000".to_string(),
            ssh_prnamt_type: "SH".to_string(),
            investment_discretion: "SOLE".to_string(),
            other_manager: other_manager.to_string(),
            voting_authority_sole: "5000".to_string(),
            voting_authority_shared: "".to_string(),
            voting_authority_none: "0".to_string(),
        }
    }

    #[test]
    fn header_row_comes_first() {
        let text = to_string(&[holding("APPLE INC", "1")]).unwrap();
        let mut lines = text.lines();
        assert_eq!(lines.next().unwrap(), HEADERS.join("\t"));
        assert_eq!(
            lines.next().unwrap(),
            "APPLE INC\tCOM\t037833100\t0012\t5000\tSH\tSOLE\t1\t5000\t\t0"
        );
        assert!(lines.next().is_none());
    }

    #[test]
    fn empty_report_is_just_headers() {
        let text = to_string(&[]).unwrap();
        assert_eq!(text, format!("{}\n", HEADERS.join("\t")));
        assert!(from_str(&text).unwrap().is_empty());
    }

    #[test]
    fn round_trip_keeps_every_field() {
        let holdings = vec![
            holding("APPLE INC", ""),
            holding("AT&T INC", "2,3"),
            Holding::default(),
            holding("TAB\tAND \"QUOTE\"", "4"),
        ];
        let text = to_string(&holdings).unwrap();
        assert_eq!(from_str(&text).unwrap(), holdings);
    }

    #[test]
    fn short_rows_are_rejected() {
        let text = format!("{}\nAPPLE INC\tCOM\n", HEADERS.join("\t"));
        assert!(from_str(&text).is_err());
    }

    #[tokio::test]
    async fn file_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("reports").join("holdings.tsv");
        let holdings = vec![holding("APPLE INC", ""), holding("MICROSOFT CORP", "7")];

        write(&path, &holdings).await.unwrap();
        assert_eq!(read(&path).await.unwrap(), holdings);
    }
}

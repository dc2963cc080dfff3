use crate::error::Result;
use crate::model::BattleRecord;
use csv::ReaderBuilder;
use rayon::prelude::*;
use std::collections::HashSet;
use std::path::Path;

/// Clean up a header cell before using it as a field name
fn normalize_header(header: &str) -> String {
    header.trim_start_matches('\u{feff}').trim().to_string()
}

/// Give repeated header names a numeric suffix (`a`, `a_1`, `a_2`, ...)
/// so no column is shadowed by a later one with the same name
fn unique_headers(headers: Vec<String>) -> Vec<String> {
    let mut used: HashSet<String> = headers.iter().cloned().collect();
    let mut seen = HashSet::new();
    let mut unique = Vec::with_capacity(headers.len());

    for header in headers {
        if seen.insert(header.clone()) {
            unique.push(header);
            continue;
        }

        let mut suffix = 1;
        let mut renamed = format!("{}_{}", header, suffix);
        while used.contains(&renamed) {
            suffix += 1;
            renamed = format!("{}_{}", header, suffix);
        }
        log::debug!("Repeated header '{}' renamed to '{}'", header, renamed);
        used.insert(renamed.clone());
        seen.insert(renamed.clone());
        unique.push(renamed);
    }

    unique
}

/// Read battle records from CSV content with a header row.
///
/// Short rows simply lack their trailing fields; cells beyond the header
/// width are dropped. Rows with only blank cells are skipped.
pub fn read_battle_log(content: &str) -> Result<Vec<BattleRecord>> {
    let mut reader = ReaderBuilder::new()
        .flexible(true)
        .from_reader(content.as_bytes());

    let headers = unique_headers(reader.headers()?.iter().map(normalize_header).collect());

    let mut records = Vec::new();
    let mut blank_rows = 0;

    for result in reader.records() {
        let row = result?;
        if row.len() > headers.len() {
            log::debug!(
                "Row {} has {} fields but only {} headers; extra fields ignored",
                records.len() + blank_rows + 1,
                row.len(),
                headers.len()
            );
        }

        let record: BattleRecord = headers
            .iter()
            .zip(row.iter())
            .map(|(name, value)| (name.as_str(), value))
            .collect();

        if record.is_blank() {
            blank_rows += 1;
            continue;
        }
        records.push(record);
    }

    log::debug!(
        "Parsed {} records ({} blank rows skipped)",
        records.len(),
        blank_rows
    );
    Ok(records)
}

/// Read battle records from a single CSV file
pub fn read_battle_log_file(path: &Path) -> Result<Vec<BattleRecord>> {
    let content = std::fs::read_to_string(path)?;
    read_battle_log(&content)
}

/// Drop exact duplicates, keeping the first occurrence of each record
pub fn dedup_records<I>(records: I) -> Vec<BattleRecord>
where
    I: IntoIterator<Item = BattleRecord>,
{
    let mut seen = HashSet::new();
    let mut unique = Vec::new();
    let mut duplicates = 0;

    for record in records {
        if seen.insert(record.clone()) {
            unique.push(record);
        } else {
            duplicates += 1;
        }
    }

    if duplicates > 0 {
        log::debug!("Dropped {} duplicate records", duplicates);
    }
    unique
}

/// Parse several CSV sources in order and merge them without duplicates.
///
/// A source that cannot be parsed fails the whole call; the error names
/// the 1-based position of the offending source.
pub fn parse_and_dedup<S: AsRef<str>>(sources: &[S]) -> Result<Vec<BattleRecord>> {
    let mut all = Vec::new();
    for (idx, source) in sources.iter().enumerate() {
        let records = read_battle_log(source.as_ref())
            .map_err(|e| e.in_source(format!("#{}", idx + 1)))?;
        all.extend(records);
    }

    let unique = dedup_records(all);
    log::info!("Loaded {} unique records from {} sources", unique.len(), sources.len());
    Ok(unique)
}

/// Read several CSV files in parallel and merge them without duplicates.
///
/// Merge order follows `paths`, regardless of which file finishes first.
pub fn read_battle_log_files<P: AsRef<Path> + Sync>(paths: &[P]) -> Result<Vec<BattleRecord>> {
    let per_file: Vec<Vec<BattleRecord>> = paths
        .par_iter()
        .map(|path| {
            let path = path.as_ref();
            read_battle_log_file(path).map_err(|e| e.in_source(path.display().to_string()))
        })
        .collect::<Result<_>>()?;

    for (path, records) in paths.iter().zip(&per_file) {
        log::debug!("{}: {} records", path.as_ref().display(), records.len());
    }

    let unique = dedup_records(per_file.into_iter().flatten());
    log::info!("Loaded {} unique records from {} files", unique.len(), paths.len());
    Ok(unique)
}

use crate::error::Result;
use crate::model::{AnalysisResult, CardStats};
use rust_xlsxwriter::{
    ConditionalFormat3ColorScale, Format, FormatAlign, FormatBorder, Workbook, Worksheet,
};
use std::path::Path;

/// Write an analysis result to an Excel file.
///
/// The workbook gets a Summary sheet describing the selection and a
/// Cards sheet with one row per opponent card, in the order given.
pub fn write_analysis_to_xlsx(
    result: &AnalysisResult,
    deck_id: &str,
    filter_cards: &[String],
    path: &Path,
) -> Result<()> {
    let mut workbook = Workbook::new();

    let summary = workbook.add_worksheet();
    write_summary_sheet(summary, result, deck_id, filter_cards)?;

    let cards = workbook.add_worksheet();
    write_cards_sheet(cards, &result.card_stats)?;

    workbook.save(path)?;
    Ok(())
}

fn write_summary_sheet(
    sheet: &mut Worksheet,
    result: &AnalysisResult,
    deck_id: &str,
    filter_cards: &[String],
) -> Result<()> {
    sheet.set_name("Summary")?;
    sheet.set_column_width(0, 16)?;
    sheet.set_column_width(1, 60)?;

    let label_format = Format::new().set_bold();
    let number_format = Format::new().set_align(FormatAlign::Left);

    let overall = &result.overall;
    let filter = if filter_cards.is_empty() {
        "(none)".to_string()
    } else {
        filter_cards.join(", ")
    };

    let text_rows = [
        ("Deck", deck_id.to_string()),
        ("Filter", filter),
        ("Win rate", overall.win_rate_label()),
    ];
    for (row, (label, value)) in text_rows.iter().enumerate() {
        sheet.write_string_with_format(row as u32, 0, *label, &label_format)?;
        sheet.write_string(row as u32, 1, value)?;
    }

    let number_rows = [
        ("Games", overall.total_games),
        ("Wins", overall.win_count),
        ("Losses", overall.loss_count()),
        ("Opponent cards", result.card_stats.len() as u32),
    ];
    let offset = text_rows.len();
    for (idx, (label, value)) in number_rows.iter().enumerate() {
        let row = (offset + idx) as u32;
        sheet.write_string_with_format(row, 0, *label, &label_format)?;
        sheet.write_number_with_format(row, 1, *value as f64, &number_format)?;
    }

    Ok(())
}

fn write_cards_sheet(sheet: &mut Worksheet, rows: &[CardStats]) -> Result<()> {
    sheet.set_name("Cards")?;

    sheet.set_column_width(0, 22)?; // Card
    sheet.set_column_width(1, 22)?; // Display name
    sheet.set_column_width(2, 10)?; // Win %
    sheet.set_column_width(3, 8)?;  // Wins
    sheet.set_column_width(4, 8)?;  // Losses
    sheet.set_column_width(5, 8)?;  // Games

    let header_format = Format::new()
        .set_bold()
        .set_align(FormatAlign::Center)
        .set_border_bottom(FormatBorder::Thin);

    let headers = ["Card", "Name", "Win %", "Wins", "Losses", "Games"];
    for (col, header) in headers.iter().enumerate() {
        sheet.write_string_with_format(0, col as u16, *header, &header_format)?;
    }

    let center_format = Format::new().set_align(FormatAlign::Center);

    for (idx, stats) in rows.iter().enumerate() {
        let row = (idx + 1) as u32;
        sheet.write_string(row, 0, &stats.card_name)?;
        sheet.write_string(row, 1, &stats.display_name)?;
        sheet.write_number_with_format(row, 2, stats.win_rate as f64, &center_format)?;
        sheet.write_number_with_format(row, 3, stats.win_count as f64, &center_format)?;
        sheet.write_number_with_format(row, 4, stats.loss_count() as f64, &center_format)?;
        sheet.write_number_with_format(row, 5, stats.total_games as f64, &center_format)?;
    }

    if !rows.is_empty() {
        let scale = ConditionalFormat3ColorScale::new();
        sheet.add_conditional_format(1, 2, rows.len() as u32, 2, &scale)?;
    }

    sheet.set_freeze_panes(1, 0)?;

    Ok(())
}

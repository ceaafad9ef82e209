use crate::domain::{AnalysisReport, Category};
use crate::errors::ServerError;
use crate::responses::xlsx_response;
use crate::responses::ResultResp;
use chrono::NaiveDate;
use rust_xlsxwriter::{Format, Workbook, Worksheet, XlsxError};

fn xlsx_err(what: &str) -> impl FnOnce(XlsxError) -> ServerError + '_ {
    move |e| ServerError::XlsxError(format!("Failed to write {what}: {e}"))
}

/// Download response for one analyzed listing.
pub fn export_analysis_xlsx(report: &AnalysisReport) -> ResultResp {
    let buffer = analysis_workbook(report)?;
    let today = chrono::Local::now().date_naive();
    xlsx_response(buffer, &export_filename(report, today))
}

pub fn export_filename(report: &AnalysisReport, date: NaiveDate) -> String {
    format!(
        "analysis_{}_{}.xlsx",
        report.listing.slug(),
        date.format("%Y-%m-%d")
    )
}

/// Two sheets: the listing with its scores, and one row per category with
/// explanation and keywords.
pub fn analysis_workbook(report: &AnalysisReport) -> Result<Vec<u8>, ServerError> {
    let mut workbook = Workbook::new();
    let bold = Format::new().set_bold();

    let summary = workbook.add_worksheet();
    summary
        .set_name("Summary")
        .map_err(xlsx_err("sheet name"))?;
    write_summary_sheet(summary, report, &bold)?;

    let details = workbook.add_worksheet();
    details
        .set_name("Categories")
        .map_err(xlsx_err("sheet name"))?;
    write_category_sheet(details, report, &bold)?;

    workbook
        .save_to_buffer()
        .map_err(|e| ServerError::XlsxError(format!("Failed to save workbook: {e}")))
}

fn write_summary_sheet(
    sheet: &mut Worksheet,
    report: &AnalysisReport,
    bold: &Format,
) -> Result<(), ServerError> {
    let listing = &report.listing;
    let analysis = &report.analysis;

    let text_rows = [
        ("Property Name", listing.display_name()),
        ("Property Type", listing.display_type()),
        ("Location", listing.display_location()),
        ("Price", listing.display_price()),
        ("Model Used", report.model_used.as_deref().unwrap_or("N/A")),
    ];

    let mut row: u32 = 0;
    for (label, value) in text_rows {
        sheet
            .write_string_with_format(row, 0, label, bold)
            .map_err(xlsx_err(label))?;
        sheet.write_string(row, 1, value).map_err(xlsx_err(label))?;
        row += 1;
    }

    row += 1;
    for (category, result) in analysis.categories() {
        sheet
            .write_string_with_format(row, 0, category.title(), bold)
            .map_err(xlsx_err("score label"))?;
        sheet
            .write_number(row, 1, result.score)
            .map_err(xlsx_err("score"))?;
        row += 1;
    }

    sheet
        .write_string_with_format(row, 0, "Total Score", bold)
        .map_err(xlsx_err("total label"))?;
    sheet
        .write_number(row, 1, analysis.total_score)
        .map_err(xlsx_err("total score"))?;
    row += 2;

    sheet
        .write_string_with_format(row, 0, "Investment Recommendation", bold)
        .map_err(xlsx_err("summary label"))?;
    sheet
        .write_string(row, 1, analysis.summary.as_deref().unwrap_or(""))
        .map_err(xlsx_err("summary"))?;

    sheet.set_column_width(0, 28).map_err(xlsx_err("column width"))?;
    sheet.set_column_width(1, 80).map_err(xlsx_err("column width"))?;
    Ok(())
}

fn write_category_sheet(
    sheet: &mut Worksheet,
    report: &AnalysisReport,
    bold: &Format,
) -> Result<(), ServerError> {
    let headers = ["Category", "Score", "Explanation", "Keywords"];
    for (col, header) in headers.iter().enumerate() {
        sheet
            .write_string_with_format(0, col as u16, *header, bold)
            .map_err(xlsx_err(header))?;
    }

    for (i, category) in Category::ALL.into_iter().enumerate() {
        let r = (i + 1) as u32;
        let result = report.analysis.category(category);

        sheet
            .write_string(r, 0, category.title())
            .map_err(xlsx_err("category"))?;
        sheet
            .write_number(r, 1, result.score)
            .map_err(xlsx_err("score"))?;
        sheet
            .write_string(r, 2, &result.explanation)
            .map_err(xlsx_err("explanation"))?;
        sheet
            .write_string(r, 3, result.keywords.join(", "))
            .map_err(xlsx_err("keywords"))?;
    }

    sheet.set_column_width(0, 26).map_err(xlsx_err("column width"))?;
    sheet.set_column_width(2, 90).map_err(xlsx_err("column width"))?;
    sheet.set_column_width(3, 50).map_err(xlsx_err("column width"))?;
    Ok(())
}

//! PDF report exporter.
//!
//! Translates a tabular dataset plus store branding into a printable A4
//! document - store header, report title and date line, ruled grid table,
//! and the signature block the store's paperwork expects - then saves it as
//! `<filename>.pdf` in the download directory.
//!
//! Construction failures never escape [`ReportExporter::export`]: they are
//! logged, surfaced through a blocking alert, and the call returns normally.

use std::fs;
use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;

use chrono::{Local, Locale};
use printpdf::{
    BuiltinFont, IndirectFontRef, Line, Mm, PdfDocument, PdfDocumentReference,
    PdfLayerReference, Point,
};
use thiserror::Error;
use tracing::{error, info};

use kasira_core::StoreSettings;

use crate::shell::Shell;

// A4 portrait, coordinates in millimeters measured from the top-left like
// the layouts this mirrors; conversion to PDF-space happens at draw time.
const PAGE_WIDTH: f64 = 210.0;
const PAGE_HEIGHT: f64 = 297.0;
const MARGIN_LEFT: f64 = 14.0;
const TOP_MARGIN: f64 = 20.0;
const BOTTOM_MARGIN: f64 = 20.0;
const TABLE_START_Y: f64 = 50.0;
const ROW_HEIGHT: f64 = 8.0;
// Vertical room a signature block needs below the table.
const SIGNATURE_SPACE: f64 = 50.0;
const SIGNATURE_RIGHT: f64 = 180.0;

const PT_TO_MM: f64 = 0.352_778;

/// Report content: title, grid data, optional footer line.
#[derive(Debug, Clone)]
pub struct Report {
    /// Output name without extension; `.pdf` is appended on save.
    pub filename: String,
    /// Report title, rendered left-aligned under the store header.
    pub title: String,
    /// Header row of the grid table.
    pub columns: Vec<String>,
    /// Table body, one inner vector per row.
    pub rows: Vec<Vec<String>>,
    /// Extra line rendered under the table when present.
    pub footer_text: Option<String>,
}

/// Store identity printed on the report header and signature block.
#[derive(Debug, Clone)]
pub struct ReportBranding {
    /// Store display name (header, large and bold).
    pub store_name: String,
    /// Store address; its first comma-segment becomes the signature place.
    pub store_address: Option<String>,
}

impl From<&StoreSettings> for ReportBranding {
    fn from(settings: &StoreSettings) -> Self {
        let address = settings.store_address.trim();
        Self {
            store_name: settings.store_name.clone(),
            store_address: (!address.is_empty()).then(|| address.to_string()),
        }
    }
}

/// Errors during document construction.
#[derive(Debug, Error)]
pub enum ExportError {
    /// The PDF library refused an operation.
    #[error("PDF error: {0}")]
    Pdf(String),

    /// The document could not be written.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Renders reports and saves them into the download directory.
#[derive(Debug, Clone)]
pub struct ReportExporter {
    download_dir: PathBuf,
}

impl ReportExporter {
    #[must_use]
    pub fn new(download_dir: impl Into<PathBuf>) -> Self {
        Self {
            download_dir: download_dir.into(),
        }
    }

    /// Render `report` and save `<filename>.pdf`.
    ///
    /// Terminal-but-contained: any internal failure is logged and surfaced
    /// via `shell.alert`, and the call returns normally.
    pub fn export(&self, report: &Report, branding: &ReportBranding, shell: &dyn Shell) {
        match self.render(report, branding) {
            Ok(path) => info!(path = %path.display(), "report exported"),
            Err(err) => {
                error!("report export failed: {err}");
                shell.alert(&format!("Failed to export report: {err}"));
            }
        }
    }

    fn render(&self, report: &Report, branding: &ReportBranding) -> Result<PathBuf, ExportError> {
        let (doc, page, layer_index) = PdfDocument::new(
            report.title.as_str(),
            Mm(PAGE_WIDTH),
            Mm(PAGE_HEIGHT),
            "Layer 1",
        );
        let regular = doc
            .add_builtin_font(BuiltinFont::Helvetica)
            .map_err(|err| ExportError::Pdf(err.to_string()))?;
        let bold = doc
            .add_builtin_font(BuiltinFont::HelveticaBold)
            .map_err(|err| ExportError::Pdf(err.to_string()))?;
        let mut layer = doc.get_page(page).get_layer(layer_index);

        // Header: centered store name, centered address beneath when present.
        text_centered(&layer, &branding.store_name, 18.0, &bold, PAGE_WIDTH / 2.0, 15.0);
        if let Some(address) = &branding.store_address {
            text_centered(&layer, address, 10.0, &regular, PAGE_WIDTH / 2.0, 22.0);
        }

        // Title and date line.
        text_at(&layer, &report.title, 14.0, &bold, MARGIN_LEFT, 35.0);
        let date_str = localized_date();
        text_at(
            &layer,
            &format!("Date: {date_str}"),
            10.0,
            &regular,
            MARGIN_LEFT,
            42.0,
        );

        // Grid table.
        let table_width = PAGE_WIDTH - 2.0 * MARGIN_LEFT;
        let column_count = report.columns.len();
        let mut y = TABLE_START_Y;
        if column_count > 0 {
            let col_width = table_width / column_count as f64;

            draw_row(&layer, &report.columns, &bold, y, col_width, column_count);
            y += ROW_HEIGHT;

            for row in &report.rows {
                if y + ROW_HEIGHT > PAGE_HEIGHT - BOTTOM_MARGIN {
                    // Close the band, continue on a fresh page with the
                    // header row repeated.
                    stroke_line(&layer, MARGIN_LEFT, y, MARGIN_LEFT + table_width, y);
                    layer = add_page(&doc);
                    y = TOP_MARGIN;
                    draw_row(&layer, &report.columns, &bold, y, col_width, column_count);
                    y += ROW_HEIGHT;
                }
                draw_row(&layer, row, &regular, y, col_width, column_count);
                y += ROW_HEIGHT;
            }
            stroke_line(&layer, MARGIN_LEFT, y, MARGIN_LEFT + table_width, y);
        }

        if let Some(footer) = report.footer_text.as_deref().filter(|f| !f.is_empty()) {
            y += ROW_HEIGHT;
            text_at(&layer, footer, 10.0, &regular, MARGIN_LEFT, y);
        }

        // Signature block, on a fresh page when the table ran too deep.
        let signature_y = if y + SIGNATURE_SPACE > PAGE_HEIGHT {
            layer = add_page(&doc);
            TOP_MARGIN + 10.0
        } else {
            y + 20.0
        };

        let place = signature_place(branding.store_address.as_deref());
        text_right(
            &layer,
            &format!("{place}, {date_str}"),
            10.0,
            &regular,
            SIGNATURE_RIGHT,
            signature_y,
        );
        text_centered(
            &layer,
            "Dibuat Oleh,",
            10.0,
            &regular,
            SIGNATURE_RIGHT - 20.0,
            signature_y + 10.0,
        );
        stroke_line(
            &layer,
            SIGNATURE_RIGHT - 40.0,
            signature_y + 35.0,
            SIGNATURE_RIGHT,
            signature_y + 35.0,
        );
        text_centered(
            &layer,
            "( .................... )",
            10.0,
            &regular,
            SIGNATURE_RIGHT - 20.0,
            signature_y + 40.0,
        );

        fs::create_dir_all(&self.download_dir)?;
        let path = self.download_dir.join(format!("{}.pdf", report.filename));
        doc.save(&mut BufWriter::new(File::create(&path)?))
            .map_err(|err| ExportError::Pdf(err.to_string()))?;
        Ok(path)
    }
}

/// The report date, long-form Indonesian (e.g. "Senin, 1 Januari 2024").
fn localized_date() -> String {
    Local::now()
        .format_localized("%A, %-d %B %Y", Locale::id_ID)
        .to_string()
}

/// First comma-segment of the store address, or the placeholder when the
/// address is absent or empty.
fn signature_place(address: Option<&str>) -> &str {
    address
        .and_then(|a| a.split(',').next())
        .map(str::trim)
        .filter(|segment| !segment.is_empty())
        .unwrap_or("Tempat")
}

fn add_page(doc: &PdfDocumentReference) -> PdfLayerReference {
    let (page, layer) = doc.add_page(Mm(PAGE_WIDTH), Mm(PAGE_HEIGHT), "Layer 1");
    doc.get_page(page).get_layer(layer)
}

/// One grid row: band rules plus cell text.
fn draw_row(
    layer: &PdfLayerReference,
    cells: &[String],
    font: &IndirectFontRef,
    y: f64,
    col_width: f64,
    column_count: usize,
) {
    let table_width = col_width * column_count as f64;
    stroke_line(layer, MARGIN_LEFT, y, MARGIN_LEFT + table_width, y);
    for boundary in 0..=column_count {
        let x = MARGIN_LEFT + col_width * boundary as f64;
        stroke_line(layer, x, y, x, y + ROW_HEIGHT);
    }
    for (index, cell) in cells.iter().take(column_count).enumerate() {
        let x = MARGIN_LEFT + col_width * index as f64 + 2.0;
        text_at(layer, cell, 9.0, font, x, y + 5.5);
    }
}

/// Place text with `(x, y)` measured from the top-left edge.
fn text_at(
    layer: &PdfLayerReference,
    text: &str,
    size: f64,
    font: &IndirectFontRef,
    x: f64,
    y: f64,
) {
    layer.use_text(text, size, Mm(x), Mm(PAGE_HEIGHT - y), font);
}

fn text_centered(
    layer: &PdfLayerReference,
    text: &str,
    size: f64,
    font: &IndirectFontRef,
    center_x: f64,
    y: f64,
) {
    text_at(
        layer,
        text,
        size,
        font,
        center_x - approx_text_width(text, size) / 2.0,
        y,
    );
}

fn text_right(
    layer: &PdfLayerReference,
    text: &str,
    size: f64,
    font: &IndirectFontRef,
    right_x: f64,
    y: f64,
) {
    text_at(
        layer,
        text,
        size,
        font,
        right_x - approx_text_width(text, size),
        y,
    );
}

/// Builtin faces expose no metrics; Helvetica averages about half an em per
/// glyph, close enough to center and right-align short header lines.
fn approx_text_width(text: &str, font_size: f64) -> f64 {
    text.chars().count() as f64 * font_size * 0.5 * PT_TO_MM
}

fn stroke_line(layer: &PdfLayerReference, x1: f64, y1: f64, x2: f64, y2: f64) {
    let line = Line {
        points: vec![
            (Point::new(Mm(x1), Mm(PAGE_HEIGHT - y1)), false),
            (Point::new(Mm(x2), Mm(PAGE_HEIGHT - y2)), false),
        ],
        is_closed: false,
        has_fill: false,
        has_stroke: true,
        is_clipping_path: false,
    };
    layer.add_shape(line);
}

//! Board export to CSV, JSON and Excel.
//!
//! Every format walks the board in display order: swimlanes, then lists, then
//! cards, each by position. CSV and Excel produce one row per card under the
//! header `Board, Swimlane, List, Card Title, Description, Created At`; Excel
//! additionally embeds card attachments as images next to their row. JSON keeps
//! the tree shape and replaces attachment bytes with a `has_attachment` flag.
//!
//! ```rust,no_run
//! use lanes::libs::export::{ExportFormat, Exporter};
//! use lanes::libs::kanban::Kanban;
//!
//! let kanban = Kanban::new()?;
//! if let Some(tree) = kanban.load_board(1)? {
//!     Exporter::new(ExportFormat::Csv, None).export(&tree)?;
//! }
//! # Ok::<(), anyhow::Error>(())
//! ```

use crate::{
    libs::{
        entity::{BoardTree, Card, Id},
        messages::Message,
    },
    msg_success, msg_warning,
};
use anyhow::Result;
use chrono::Local;
use rust_xlsxwriter::{Format, Image, Workbook};
use serde::Serialize;
use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

const HEADER: [&str; 6] = ["Board", "Swimlane", "List", "Card Title", "Description", "Created At"];
const IMAGE_COLUMN: u16 = 6;

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum ExportFormat {
    Csv,
    Json,
    Excel,
}

impl ExportFormat {
    fn extension(self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Json => "json",
            ExportFormat::Excel => "xlsx",
        }
    }
}

/// One card with the names of everything above it.
#[derive(Debug, Clone, Copy)]
pub struct ExportRow<'t> {
    pub board: &'t str,
    pub swimlane: &'t str,
    pub list: &'t str,
    pub card: &'t Card,
}

#[derive(Debug, Serialize)]
pub struct ExportBoard {
    pub id: Id,
    pub name: String,
    pub description: String,
    pub exported_at: String,
    pub swimlanes: Vec<ExportSwimlane>,
}

#[derive(Debug, Serialize)]
pub struct ExportSwimlane {
    pub id: Id,
    pub name: String,
    pub position: i64,
    pub lists: Vec<ExportList>,
}

#[derive(Debug, Serialize)]
pub struct ExportList {
    pub id: Id,
    pub name: String,
    pub position: i64,
    pub cards: Vec<ExportCard>,
}

#[derive(Debug, Serialize)]
pub struct ExportCard {
    pub id: Id,
    pub title: String,
    pub description: String,
    pub position: i64,
    pub created_at: Option<String>,
    pub has_attachment: bool,
}

impl From<&BoardTree> for ExportBoard {
    fn from(tree: &BoardTree) -> Self {
        ExportBoard {
            id: tree.board.id,
            name: tree.board.name.clone(),
            description: tree.board.description.clone(),
            exported_at: Local::now().format("%Y-%m-%d %H:%M:%S").to_string(),
            swimlanes: tree
                .swimlanes
                .iter()
                .map(|lane| ExportSwimlane {
                    id: lane.swimlane.id,
                    name: lane.swimlane.name.clone(),
                    position: lane.swimlane.position,
                    lists: lane
                        .lists
                        .iter()
                        .map(|l| ExportList {
                            id: l.list.id,
                            name: l.list.name.clone(),
                            position: l.list.position,
                            cards: l
                                .cards
                                .iter()
                                .map(|c| ExportCard {
                                    id: c.id,
                                    title: c.title.clone(),
                                    description: c.description.clone(),
                                    position: c.position,
                                    created_at: c.created_at.clone(),
                                    has_attachment: c.has_attachment(),
                                })
                                .collect(),
                        })
                        .collect(),
                })
                .collect(),
        }
    }
}

/// Flattens the tree into card rows in display order.
pub fn rows(tree: &BoardTree) -> Vec<ExportRow<'_>> {
    let mut rows = Vec::with_capacity(tree.card_count());
    for lane in &tree.swimlanes {
        for list in &lane.lists {
            for card in &list.cards {
                rows.push(ExportRow {
                    board: &tree.board.name,
                    swimlane: &lane.swimlane.name,
                    list: &list.list.name,
                    card,
                });
            }
        }
    }
    rows
}

pub struct Exporter {
    format: ExportFormat,
    output_path: PathBuf,
}

impl Exporter {
    /// Without an explicit path the file is named after the current time,
    /// e.g. `lanes_export_20250115_143022.xlsx`.
    pub fn new(format: ExportFormat, output_path: Option<PathBuf>) -> Self {
        let output_path = output_path.unwrap_or_else(|| {
            PathBuf::from(format!(
                "lanes_export_{}.{}",
                Local::now().format("%Y%m%d_%H%M%S"),
                format.extension()
            ))
        });

        Self { format, output_path }
    }

    pub fn output_path(&self) -> &Path {
        &self.output_path
    }

    pub fn export(&self, tree: &BoardTree) -> Result<()> {
        match self.format {
            ExportFormat::Csv => self.export_csv(tree)?,
            ExportFormat::Json => self.export_json(tree)?,
            ExportFormat::Excel => self.export_excel(tree)?,
        }

        msg_success!(Message::ExportSuccess(self.output_path.display().to_string()));
        Ok(())
    }

    fn export_csv(&self, tree: &BoardTree) -> Result<()> {
        let mut wtr = csv::Writer::from_path(&self.output_path)?;
        wtr.write_record(HEADER)?;

        for row in rows(tree) {
            wtr.write_record([
                row.board,
                row.swimlane,
                row.list,
                row.card.title.as_str(),
                row.card.description.as_str(),
                row.card.created_at.as_deref().unwrap_or(""),
            ])?;
        }

        wtr.flush()?;
        Ok(())
    }

    fn export_json(&self, tree: &BoardTree) -> Result<()> {
        let json = serde_json::to_string_pretty(&ExportBoard::from(tree))?;
        File::create(&self.output_path)?.write_all(json.as_bytes())?;
        Ok(())
    }

    fn export_excel(&self, tree: &BoardTree) -> Result<()> {
        let mut workbook = Workbook::new();
        let worksheet = workbook.add_worksheet();

        let header_format = Format::new().set_bold().set_background_color(rust_xlsxwriter::Color::Gray);
        for (col, title) in HEADER.iter().enumerate() {
            worksheet.write_string_with_format(0, col as u16, *title, &header_format)?;
        }

        for (i, row) in rows(tree).iter().enumerate() {
            let r = i as u32 + 1;
            worksheet.write_string(r, 0, row.board)?;
            worksheet.write_string(r, 1, row.swimlane)?;
            worksheet.write_string(r, 2, row.list)?;
            worksheet.write_string(r, 3, &row.card.title)?;
            worksheet.write_string(r, 4, &row.card.description)?;
            worksheet.write_string(r, 5, row.card.created_at.as_deref().unwrap_or(""))?;

            // Attachments that are not a recognised image format are left out.
            if let Some(bytes) = row.card.attachment.as_deref().filter(|b| !b.is_empty()) {
                match Image::new_from_buffer(bytes) {
                    Ok(image) => {
                        worksheet.insert_image(r, IMAGE_COLUMN, &image)?;
                    }
                    Err(e) => {
                        msg_warning!(Message::ExportAttachmentSkipped(row.card.id, e.to_string()));
                    }
                }
            }
        }

        worksheet.autofit();
        workbook.save(&self.output_path)?;
        Ok(())
    }
}

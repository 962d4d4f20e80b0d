//! End-of-run summary table.

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, Color, ContentArrangement, Table};

use vins_cli::pipeline::PipelineRunSummary;

pub fn print_summary(summary: &PipelineRunSummary) {
    println!("Run artifacts: {}", summary.run_dir.display());
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Stage"),
        header_cell("Status"),
        header_cell("Output"),
    ]);
    apply_table_style(&mut table);
    table.add_row(vec![
        Cell::new("Data ingestion"),
        status_cell(true),
        Cell::new(format!(
            "{}\n{}",
            summary.ingestion.training_file_path.display(),
            summary.ingestion.testing_file_path.display()
        )),
    ]);
    table.add_row(vec![
        Cell::new("Data validation"),
        status_cell(summary.validation.validation_status),
        Cell::new(summary.validation.report_path.display()),
    ]);
    println!("{table}");
    if !summary.validation.validation_status {
        eprintln!("Validation issues: {}", summary.validation.message);
    }
}

fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
}

fn header_cell(text: &str) -> Cell {
    Cell::new(text).add_attribute(Attribute::Bold)
}

fn status_cell(ok: bool) -> Cell {
    if ok {
        Cell::new("passed").fg(Color::Green)
    } else {
        Cell::new("failed").fg(Color::Red)
    }
}

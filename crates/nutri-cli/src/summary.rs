use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use nutri_model::{Category, IngredientKind};
use nutri_normalization::NormalizationReport;

use crate::types::{IngredientView, RunResult};

pub fn print_summary(result: &RunResult) {
    println!("Data: {}", result.data_path.display());
    match &result.outputs {
        Some(paths) => {
            println!("Output: {}", result.output_dir.display());
            for path in paths.all() {
                println!("  {}", path.display());
            }
        }
        None => println!("Output: skipped (dry run)"),
    }

    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Kind"),
        header_cell("Records"),
        header_cell("Established"),
        header_cell("Not established"),
        header_cell("Unparseable"),
        header_cell("With references"),
        header_cell("Countries"),
    ]);
    apply_table_style(&mut table, 120);
    for index in 1..7 {
        align_column(&mut table, index, CellAlignment::Right);
    }
    for (kind, report) in &result.kind_reports {
        table.add_row(report_row(kind_cell(*kind), report));
    }
    let total_label = Cell::new("TOTAL")
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold);
    table.add_row(
        report_row(total_label, &result.report)
            .into_iter()
            .map(|cell| cell.add_attribute(Attribute::Bold))
            .collect::<Vec<_>>(),
    );
    println!("{table}");

    print_category_table(&result.report);

    if !result.unresolved.is_empty() {
        eprintln!("Unresolved reference markers:");
        for missing in &result.unresolved {
            eprintln!(
                "- [{}] {} / {} ({})",
                missing.marker, missing.country, missing.ingredient, missing.kind
            );
        }
    }
}

fn print_category_table(report: &NormalizationReport) {
    let mut table = Table::new();
    table.set_header(vec![header_cell("Category"), header_cell("Records")]);
    apply_table_style(&mut table, 60);
    align_column(&mut table, 1, CellAlignment::Right);
    for (category, count) in &report.categories {
        table.add_row(vec![category_cell(category), Cell::new(count)]);
    }
    println!();
    println!("Categories:");
    println!("{table}");
}

pub fn print_ingredient(view: &IngredientView) {
    let mut units: Vec<&str> = Vec::new();
    for row in &view.rows {
        if !units.contains(&row.record.unit.as_str()) {
            units.push(&row.record.unit);
        }
    }
    println!("Ingredient: {} ({})", view.query, units.join(", "));

    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Country"),
        header_cell("Ingredient"),
        header_cell("Category"),
        header_cell("Range"),
        header_cell("Unit"),
        header_cell("References"),
    ]);
    apply_table_style(&mut table, 160);
    align_column(&mut table, 3, CellAlignment::Right);
    for row in &view.rows {
        let record = &row.record;
        let range = if record.established {
            Cell::new(record.range())
        } else {
            dim_cell(record.range())
        };
        let references = if row.references.is_empty() {
            dim_cell("-")
        } else {
            Cell::new(row.references.join("\n"))
        };
        table.add_row(vec![
            Cell::new(&record.country)
                .fg(Color::Blue)
                .add_attribute(Attribute::Bold),
            Cell::new(&record.ingredient),
            category_cell(&record.category),
            range,
            Cell::new(&record.unit),
            references,
        ]);
    }
    println!("{table}");
}

fn report_row(label: Cell, report: &NormalizationReport) -> Vec<Cell> {
    vec![
        label,
        Cell::new(report.total_records),
        count_cell(report.established, Color::Green),
        dim_cell(report.not_established),
        count_cell(report.unparseable, Color::Yellow),
        Cell::new(report.with_references),
        Cell::new(report.countries),
    ]
}

fn kind_cell(kind: IngredientKind) -> Cell {
    Cell::new(kind).fg(Color::Blue).add_attribute(Attribute::Bold)
}

fn category_cell(category: &Category) -> Cell {
    match category {
        Category::Standard => Cell::new(category),
        Category::Other(_) => Cell::new(category).fg(Color::Yellow),
        _ => Cell::new(category).fg(Color::Magenta),
    }
}

fn count_cell(count: usize, color: Color) -> Cell {
    if count > 0 {
        Cell::new(count).fg(color)
    } else {
        dim_cell(count)
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}

fn apply_table_style(table: &mut Table, width: u16) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(width);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

use cardforge::dataset::Record;
use cardforge::format::format_currency;
use cardforge::layout::GridPlan;
use cardforge::segments::style_for;
use comfy_table::presets::ASCII_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

pub fn print_card_grid(plan: &GridPlan, records: &[Record]) {
    if plan.num_rows == 0 {
        println!("\n(empty grid)");
        return;
    }

    let mut table = Table::new();
    table.load_preset(ASCII_FULL);

    // Columns past the last card are empty in every row.
    for row in 0..plan.num_rows {
        let cells: Vec<Cell> = (0..plan.occupied_columns())
            .map(|col| {
                let index = row * plan.max_per_row + col;
                match records.get(index) {
                    Some(r) if index < plan.num_records => {
                        Cell::new(format!("#{} {}\n{}", index, r.segment, r.product))
                            .set_alignment(CellAlignment::Center)
                    }
                    _ => Cell::new(" "),
                }
            })
            .collect();
        table.add_row(cells);
    }
    println!("\n{}", table);
}

pub fn print_segment_summary(records: &[Record]) {
    // First-seen order, like the cards themselves.
    let mut order: Vec<&str> = Vec::new();
    for r in records {
        if !order.contains(&r.segment.as_str()) {
            order.push(&r.segment);
        }
    }

    let mut table = Table::new();
    table
        .load_preset(ASCII_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);

    table.add_row(vec![
        Cell::new("Segment").add_attribute(Attribute::Bold),
        Cell::new("Cards"),
        Cell::new("Units"),
        Cell::new("Sales").fg(Color::Green),
        Cell::new("Color"),
        Cell::new("Icon"),
    ]);

    for i in 1..=3 {
        if let Some(col) = table.column_mut(i) {
            col.set_cell_alignment(CellAlignment::Right);
        }
    }

    for segment in order {
        let rows: Vec<&Record> = records.iter().filter(|r| r.segment == segment).collect();
        let units: u64 = rows.iter().map(|r| r.units_sold as u64).sum();
        let sales: f64 = rows.iter().map(|r| r.sales).sum();
        let style = style_for(segment);

        let icon_cell = if style.icon_url.is_some() {
            Cell::new("yes")
        } else {
            Cell::new("none").fg(Color::Yellow)
        };

        table.add_row(vec![
            Cell::new(segment).add_attribute(Attribute::Bold),
            Cell::new(rows.len()),
            Cell::new(units),
            Cell::new(format_currency(sales)).fg(Color::Green),
            Cell::new(style.color),
            icon_cell,
        ]);
    }
    println!("\n{}", table);
}

use crate::reports;
use cardforge::config::LayoutParams;
use cardforge::dataset::Record;
use cardforge::error::CfResult;
use cardforge::layout::GridPlan;
use clap::Args;

/// Offline dry run: nothing is fetched or written.
#[derive(Args, Debug, Clone)]
pub struct InspectArgs {
    #[command(flatten)]
    pub layout: LayoutParams,
}

pub fn run(args: InspectArgs, records: &[Record]) -> CfResult<()> {
    args.layout.validate()?;
    let plan = GridPlan::new(records.len(), args.layout.max_per_row)?;
    let (width, height) = plan.canvas_size(&args.layout);

    println!("\n🔎 === CARD LAYOUT === 🔎");
    println!(
        "Cards: {} | Grid: {} x {} | Hidden cells: {} | Canvas: {}x{} px",
        plan.num_records,
        plan.num_rows,
        plan.max_per_row,
        plan.hidden_cells().len(),
        width,
        height
    );

    reports::print_card_grid(&plan, records);
    reports::print_segment_summary(records);
    Ok(())
}

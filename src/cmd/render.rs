use crate::reports;
use cardforge::api;
use cardforge::config::Config;
use cardforge::dataset::Record;
use cardforge::error::CfResult;
use cardforge::fetch::HttpFetcher;
use clap::Args;

#[derive(Args, Debug, Clone, Default)]
pub struct RenderArgs {
    #[command(flatten)]
    pub config: Config,
}

pub fn run(args: RenderArgs, records: &[Record]) -> CfResult<()> {
    println!("\n🎨 === RENDERING BUSINESS CARDS === 🎨");
    let fetcher = HttpFetcher::new()?;
    let board = api::run_pipeline(records, &args.config, &fetcher)?;

    reports::print_card_grid(&board.plan, records);

    let with_icons = board.cards.iter().filter(|c| c.icon).count();
    println!(
        "\n✅ Rendered {} cards ({} with icons) to {}",
        board.cards.len(),
        with_icons,
        args.config.output.output.display()
    );
    Ok(())
}

use anyhow::Context;
use bench_graphs::cli::parse_cli;
use bench_graphs::{create_graph, parse_labels, scan_csv_files, PlotOptions};

fn main() -> anyhow::Result<()> {
    let args = parse_cli();
    let default_level = if args.verbose { "info" } else { "warn" };
    let env = env_logger::Env::default().default_filter_or(default_level);
    env_logger::Builder::from_env(env).init();

    let options = PlotOptions::default();
    let labels = parse_labels(&args.labels, options.label_mode);
    let input_files = scan_csv_files(&args.directory, &labels, options.listing_order)?;
    log::info!(
        "plotting {} files from {} to {}",
        input_files.len(),
        args.directory.display(),
        args.output.display()
    );
    let summary = create_graph(&labels, &input_files, &args.output, &options)
        .with_context(|| format!("could not create {}", args.output.display()))?;
    println!("{}", summary);
    Ok(())
}

//! CLI entry point for quilting numbered image series

use clap::Parser;
use quilter::io::cli::{Cli, QuiltProcessor, SeriesOutcome};
use quilter::io::report::{TracingReporter, init_logging};

// Allow print for the dry-run listing
#[allow(clippy::print_stdout)]
fn main() -> quilter::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.log_level());

    let processor = QuiltProcessor::new(cli.settings()?, cli.run_options(), &TracingReporter);
    for (key, outcome) in processor.process()? {
        if let SeriesOutcome::Planned(path) = outcome {
            println!("{key}: {}", path.display());
        }
    }
    Ok(())
}

use anyhow::Context;
use clap::Parser;
use img_compress::cli::Args;
use img_compress::{compress, logger, print_compression_result, CompressionRequest};
use log::debug;
use std::process::ExitCode;

fn main() -> ExitCode {
    let args = Args::parse();
    logger::init(args.verbose, args.quiet);

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(args: Args) -> anyhow::Result<()> {
    let request = CompressionRequest::new(
        args.input,
        args.output,
        Some(args.quality),
        args.max_width,
        args.max_height,
    )?;
    debug!("{:?}", request);

    let pb = img_compress::utils::create_progress_spinner("Compressing image...");
    let result = compress(&request);
    pb.finish_and_clear();

    let result = result.with_context(|| {
        format!("failed to compress {}", request.input_path.display())
    })?;

    print_compression_result(&request.input_path, &result);
    Ok(())
}

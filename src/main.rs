use anyhow::{Context as _, Result};
use clap::Parser;

use image_tags::cli::{run_tag_workflow, TagWorkflowArgs};
use image_tags::config;
use image_tags::context::Context;
use image_tags::diagnostics::Diagnostics;
use image_tags::git::RemoteTagSource;
use image_tags::logging;
use image_tags::output::{FileOutput, MemoryOutput};
use image_tags::ui;

#[derive(clap::Parser)]
#[command(
    name = "image-tags",
    version,
    about = "Compute container image tags for the ref being built"
)]
struct Args {
    #[arg(short, long, help = "Custom configuration file path")]
    config: Option<String>,

    #[arg(long = "ref", help = "Ref to compute tags for instead of the CI-provided one")]
    git_ref: Option<String>,

    #[arg(long, help = "Print the tags instead of writing the output file")]
    dry_run: bool,

    #[arg(long, help = "Enable debug logging")]
    debug: bool,
}

fn main() {
    let args = Args::parse();
    logging::init_tracing(args.debug);

    if let Err(e) = run(args) {
        ui::display_error(&format!("{:#}", e));
        std::process::exit(1);
    }
}

fn run(args: Args) -> Result<()> {
    let config = config::load_config(args.config.as_deref()).context("Error loading config")?;

    let mut diagnostics = Diagnostics::new();
    let ctx = Context::from_env(&mut diagnostics)?;
    diagnostics.log();

    let workflow_args = TagWorkflowArgs {
        git_ref: args.git_ref.unwrap_or_else(|| ctx.git_ref.clone()),
        repository_url: ctx.repo_url(),
    };
    let source = RemoteTagSource::with_token(ctx.token.clone());

    if args.dry_run {
        let mut sink = MemoryOutput::new();
        let result = run_tag_workflow(&workflow_args, &config, &source, &mut sink)?;
        ui::display_dry_run(&config.output_key, result.tags.as_ref());
        return Ok(());
    }

    let mut sink = FileOutput::new(&ctx.output_file);
    let result = run_tag_workflow(&workflow_args, &config, &source, &mut sink)?;
    if let Some(tags) = result.tags {
        ui::display_success(&format!(
            "Wrote {}={} to {}",
            config.output_key, tags, ctx.output_file
        ));
    }

    Ok(())
}

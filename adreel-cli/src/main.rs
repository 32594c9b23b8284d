use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::{Parser, Subcommand};

use adreel::{Brief, EdgeTtsCommand, PipelineOpts, RenderReceipt};

#[derive(Parser, Debug)]
#[command(name = "adreel", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Derive and print the storyboard JSON without rendering.
    Storyboard(StoryboardArgs),
    /// Generate an ad video (requires `ffmpeg` and a TTS command on PATH).
    Generate(GenerateArgs),
}

#[derive(Parser, Debug)]
struct StoryboardArgs {
    /// Input brief JSON.
    #[arg(long = "brief")]
    brief_path: PathBuf,
}

#[derive(Parser, Debug)]
struct GenerateArgs {
    /// Input brief JSON.
    #[arg(long = "brief")]
    brief_path: PathBuf,

    /// Output directory for `ad_<job_id>.mp4`.
    #[arg(long, default_value = "data/outputs")]
    out_dir: PathBuf,

    /// Voice identifier passed to the TTS command.
    #[arg(long)]
    voice: Option<String>,

    /// TTS program name (edge-tts compatible flags).
    #[arg(long, default_value = "edge-tts")]
    tts_command: String,

    /// Frames rendered per parallel chunk.
    #[arg(long, default_value_t = 16)]
    chunk_size: usize,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt().with_env_filter("info").init();

    let cli = Cli::parse();
    match cli.cmd {
        Command::Storyboard(args) => cmd_storyboard(args),
        Command::Generate(args) => cmd_generate(args),
    }
}

fn load_brief(path: &Path) -> anyhow::Result<Brief> {
    let bytes = std::fs::read(path)
        .with_context(|| format!("failed to read brief '{}'", path.display()))?;
    let brief: Brief = serde_json::from_slice(&bytes)
        .with_context(|| format!("failed to parse brief '{}'", path.display()))?;
    brief.validate()?;
    Ok(brief)
}

fn cmd_storyboard(args: StoryboardArgs) -> anyhow::Result<()> {
    let brief = load_brief(&args.brief_path)?;
    let storyboard = adreel::generate(&brief)?;
    println!("{}", serde_json::to_string_pretty(&storyboard)?);
    Ok(())
}

fn cmd_generate(args: GenerateArgs) -> anyhow::Result<()> {
    let brief = load_brief(&args.brief_path)?;

    let job_id = adreel::new_job_id();
    let out_path = args.out_dir.join(format!("ad_{job_id}.mp4"));

    let voice = EdgeTtsCommand {
        program: args.tts_command,
    };
    let opts = PipelineOpts {
        voice: args.voice.unwrap_or_else(|| adreel::DEFAULT_VOICE.to_string()),
        chunk_size: args.chunk_size,
        ..PipelineOpts::default()
    };

    let stats = adreel::render_ad(&brief, &voice, &out_path, &opts)
        .with_context(|| format!("video generation failed for job {job_id}"))?;

    let receipt = RenderReceipt {
        job_id,
        video_path: out_path,
        duration_secs: stats.duration_secs,
        scenes: stats.scenes,
    };
    println!("{}", serde_json::to_string_pretty(&receipt)?);
    Ok(())
}

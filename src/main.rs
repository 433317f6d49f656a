use anyhow::Context;
use clap::{Parser, Subcommand};
use http_log_analytics::config::RawConfig;
use http_log_analytics::render::{self, Format};
use http_log_analytics::{LogAnalyzer, RankPolicy, Result, logging};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "http-log-analytics")]
#[command(about = "HTTP access log analytics", long_about = None)]
struct Cli {
    /// Emit logs as JSON lines.
    #[arg(long, global = true)]
    log_json: bool,

    #[command(subcommand)]
    cmd: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Count distinct clients and rank the busiest clients and urls.
    Report {
        #[arg(long)]
        log: PathBuf,

        /// JSON analyzer config; flags below override its values.
        #[arg(long)]
        config: Option<PathBuf>,

        /// Line regex with named groups (ip, url, ...).
        #[arg(long)]
        pattern: Option<String>,

        #[arg(long)]
        top_ips: Option<usize>,

        #[arg(long)]
        top_urls: Option<usize>,

        /// Return fewer entries instead of failing when fewer distinct keys exist.
        #[arg(long)]
        clamp: bool,

        #[arg(long, value_enum, default_value_t = Format::Text)]
        format: Format,

        #[arg(short = 'o', long)]
        out: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init_logging(cli.log_json);

    match cli.cmd {
        Commands::Report {
            log,
            config,
            pattern,
            top_ips,
            top_urls,
            clamp,
            format,
            out,
        } => {
            // 1) Config file, then flag overrides.
            let mut raw = match &config {
                Some(path) => RawConfig::load(path)?,
                None => RawConfig::default(),
            };
            if pattern.is_some() {
                raw.pattern = pattern;
            }
            if top_ips.is_some() {
                raw.top_ips = top_ips;
            }
            if top_urls.is_some() {
                raw.top_urls = top_urls;
            }
            if clamp {
                raw.rank_policy = Some(RankPolicy::Clamp);
            }

            // 2) Analyze.
            let analyzer = LogAnalyzer::new(Some(raw.build()?))?;
            let analytics = analyzer
                .analyze(&log)
                .with_context(|| format!("analyze {}", log.display()))?;

            // 3) Render.
            let report = render::render(&analytics, format)?;
            match out {
                Some(path) => {
                    std::fs::write(&path, report)
                        .with_context(|| format!("write report {}", path.display()))?;
                    tracing::info!(path = %path.display(), "wrote report");
                }
                None => print!("{}", report),
            }
        }
    }

    Ok(())
}

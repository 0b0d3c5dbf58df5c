use anyhow::Context;
use chrono::{NaiveTime, TimeZone, Utc};
use clap::{Parser, Subcommand};
use momentum::key_dates::find_next_key_date;
use momentum::natal::natal_chart;
use momentum::{calculate_score, KeplerianProvider, Pillar, PositionProvider};
use momentum_api::{build_router, AppState};
use std::sync::Arc;

#[derive(Parser)]
#[command(name = "momentum-api", version, about = "Momentum score engine and HTTP API")]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Serve the HTTP API (default)
    Serve,
    /// Print a natal chart and today's score for a birth date
    Verify {
        #[arg(long)]
        birth_date: String,
        #[arg(long)]
        birth_time: Option<String>,
        #[arg(long, default_value = "Overall")]
        pillar: String,
    },
}

#[cfg(not(feature = "swiss-ephemeris"))]
fn default_provider() -> anyhow::Result<Arc<dyn PositionProvider>> {
    Ok(Arc::new(KeplerianProvider::new()))
}

#[cfg(feature = "swiss-ephemeris")]
fn default_provider() -> anyhow::Result<Arc<dyn PositionProvider>> {
    use momentum::ephemeris::SwissEphemerisAdapter;
    match SwissEphemerisAdapter::new(std::env::var_os("SE_EPHE_PATH").map(Into::into)) {
        Ok(adapter) => Ok(Arc::new(adapter)),
        Err(e) => {
            log::warn!("Swiss Ephemeris unavailable ({}), using Keplerian elements", e);
            Ok(Arc::new(KeplerianProvider::new()))
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    match cli.command.unwrap_or(Command::Serve) {
        Command::Serve => serve().await,
        Command::Verify {
            birth_date,
            birth_time,
            pillar,
        } => verify(&birth_date, birth_time.as_deref(), &pillar),
    }
}

async fn serve() -> anyhow::Result<()> {
    let settings = momentum_config::load_settings()?;
    let addr = settings.bind_addr();
    let state = Arc::new(AppState::new(settings, default_provider()?));
    let app = build_router(state);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    log::info!("Server running at http://{}", listener.local_addr()?);
    axum::serve(listener, app).await?;
    Ok(())
}

fn verify(birth_date: &str, birth_time: Option<&str>, pillar: &str) -> anyhow::Result<()> {
    let provider = default_provider()?;
    let pillar: Pillar = pillar.parse()?;
    let natal = natal_chart(&provider, birth_date, birth_time)?;

    println!("Natal chart for {}", natal.timestamp.format("%Y-%m-%d %H:%M UTC"));
    for position in natal.planets() {
        println!(
            "  {:<8} {:>7.2}  {}",
            position.body.name(),
            position.longitude,
            position.sign()
        );
    }

    let today = Utc.from_utc_datetime(&Utc::now().date_naive().and_time(NaiveTime::MIN));
    let result = calculate_score(&natal, &provider.snapshot(today)?, pillar);
    println!(
        "{} score for {}: {:.0}",
        pillar,
        today.format("%Y-%m-%d"),
        result.score
    );
    for tag in &result.tags {
        println!("  {}", tag);
    }

    match find_next_key_date(&provider, &natal, today, 90, pillar)? {
        Some(key) => println!("Next key date: {} ({})", key.date, key.tag),
        None => println!("No new major aspect in the next 90 days"),
    }
    Ok(())
}

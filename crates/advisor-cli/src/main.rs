// ============================================================================
// buildhub - PC build advisor CLI
// ============================================================================
// Usage:
//   buildhub builds [--budget RUB]        List builds within a budget ceiling
//   buildhub match [--game KEY]           Check builds against a game's needs
//   buildhub compare                      Characteristic table across builds
//   buildhub articles                     List the hardware guides
//   buildhub chat [MESSAGE]               Ask the advisor (no args: REPL)
//   buildhub favorites <list|toggle|clear>
//   buildhub export --format json         Dump catalog and favorites as JSON
//   buildhub stats                        Store path and catalog counts
// ============================================================================

use std::io::{self, BufRead, Write};
use std::thread;
use std::time::Duration;

use anyhow::{anyhow, Result};
use clap::{Parser, Subcommand};
use tracing::warn;

use advisor_core::favorites;
use advisor_core::{
    catalog, classify_all, filter_by_budget, format_price, Build, ChatTurn, FavoriteSet,
    MatchTier, Responder,
};

mod store;
use store::FavoritesStore;

/// Slider range the builds view clamps budget input into (rubles)
const BUDGET_MIN: i64 = 30_000;
const BUDGET_MAX: i64 = 200_000;

/// Cosmetic pause before showing an already-computed reply
const REPLY_DELAY: Duration = Duration::from_millis(800);

/// Clamp a requested budget ceiling into the slider range
fn clamped_ceiling(budget: i64) -> i64 {
    budget.clamp(BUDGET_MIN, BUDGET_MAX)
}

/// BuildHub PC build advisor
#[derive(Parser)]
#[command(name = "buildhub", version, about = "Pick a gaming PC build: filter, match, chat")]
struct Cli {
    /// Path to the favorites store (default: ~/.buildhub/advisor.redb)
    #[arg(long, global = true)]
    db_path: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List builds within a budget ceiling
    Builds {
        /// Budget ceiling in rubles (clamped to the 30000-200000 slider range)
        #[arg(long, default_value = "200000")]
        budget: i64,
    },

    /// Check every build against a game's frame-rate requirements
    Match {
        /// Game key: valorant, csgo, cyberpunk, rdr2
        #[arg(long, default_value = "valorant")]
        game: String,
    },

    /// Compare characteristics across all builds
    Compare,

    /// List the hardware guides
    Articles,

    /// Ask the advisor a question (no message starts an interactive session)
    Chat {
        /// Message text
        message: Vec<String>,

        /// Skip the cosmetic reply delay
        #[arg(long)]
        no_delay: bool,
    },

    /// Manage starred builds
    Favorites {
        #[command(subcommand)]
        action: FavoritesAction,
    },

    /// Export the catalog and favorites as JSON
    Export {
        /// Output format (currently only json is supported)
        #[arg(long, default_value = "json")]
        format: String,
    },

    /// Show store path and catalog counts
    Stats,
}

#[derive(Subcommand)]
enum FavoritesAction {
    /// Show starred builds
    List,
    /// Star or unstar a build by id
    Toggle { id: u32 },
    /// Remove all stars
    Clear,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Builds { budget } => cmd_builds(budget),
        Commands::Match { game } => cmd_match(&game),
        Commands::Compare => cmd_compare(),
        Commands::Articles => cmd_articles(),
        Commands::Chat { message, no_delay } => cmd_chat(message, no_delay),
        Commands::Favorites { action } => cmd_favorites(cli.db_path.as_deref(), action),
        Commands::Export { format } => cmd_export(cli.db_path.as_deref(), &format),
        Commands::Stats => cmd_stats(cli.db_path.as_deref()),
    }
}

fn print_build_card(build: &Build) {
    println!("#{} {} [{}]", build.id, build.name, build.tier.display_name());
    println!("  CPU: {:<20} GPU: {}", build.cpu, build.gpu);
    println!("  RAM: {:<20} SSD: {}", build.ram, build.storage);
    println!("  {}  |  {}", build.fps_label, format_price(build.price));
    let stores: Vec<&str> = build.vendors.iter().map(|v| v.name.as_str()).collect();
    println!("  Магазины: {}", stores.join(", "));
    println!();
}

fn cmd_builds(budget: i64) -> Result<()> {
    let ceiling = clamped_ceiling(budget);
    if ceiling != budget {
        warn!("Budget {} is outside the slider range, using {}", budget, ceiling);
    }

    let cat = catalog();
    let selected = filter_by_budget(cat.builds(), ceiling);

    println!("=== Сборки до {} ===", format_price(ceiling as u32));
    println!();
    for build in &selected {
        print_build_card(build);
    }
    println!("Найдено: {} из {}", selected.len(), cat.builds().len());
    Ok(())
}

fn cmd_match(game_key: &str) -> Result<()> {
    let cat = catalog();
    let profile = cat.game(game_key).map_err(|e| {
        let keys: Vec<&str> = cat.games().iter().map(|g| g.key.as_str()).collect();
        anyhow!("{}. Valid keys: {}", e, keys.join(", "))
    })?;

    println!("=== Требования для {} ===", profile.display_name);
    println!("Минимум:       {} FPS", profile.min_fps);
    println!("Рекомендуется: {} FPS", profile.rec_fps);
    println!();

    for (build, tier) in classify_all(cat.builds(), profile) {
        println!(
            "{:<20} {:<20} {:>10}  [{}]",
            build.name,
            build.fps_label,
            format_price(build.price),
            tier.display_name()
        );
        if tier == MatchTier::Recommended {
            println!("{:<20} Рекомендуем для комфортной игры", "");
        }
    }
    Ok(())
}

fn cmd_compare() -> Result<()> {
    let builds = catalog().builds();

    print!("{:<16}", "");
    for build in builds {
        print!("  {:<22}", build.name);
    }
    println!();
    println!("{}", "-".repeat(16 + builds.len() * 24));

    let rows: [(&str, fn(&Build) -> String); 6] = [
        ("Процессор", |b| b.cpu.clone()),
        ("Видеокарта", |b| b.gpu.clone()),
        ("Память", |b| b.ram.clone()),
        ("Накопитель", |b| b.storage.clone()),
        ("FPS", |b| b.fps_label.clone()),
        ("Цена", |b| format_price(b.price)),
    ];

    for (label, column) in rows {
        print!("{:<16}", label);
        for build in builds {
            print!("  {:<22}", column(build));
        }
        println!();
    }
    Ok(())
}

fn cmd_articles() -> Result<()> {
    for article in catalog().articles() {
        println!("[{}] {}", article.icon, article.title);
        println!("     {}", article.description);
        println!();
    }
    Ok(())
}

fn cmd_chat(message: Vec<String>, no_delay: bool) -> Result<()> {
    let responder = Responder::new(catalog());
    let mut history: Vec<ChatTurn> = Vec::new();

    // One-shot mode
    if !message.is_empty() {
        let text = message.join(" ");
        let reply = exchange(&responder, &mut history, &text, no_delay);
        println!("{}", reply);
        return Ok(());
    }

    println!("{}", responder.greeting());
    println!("(пустая строка или \"выход\" завершает диалог)");
    history.push(ChatTurn::assistant(responder.greeting()));

    let stdin = io::stdin();
    loop {
        print!("> ");
        io::stdout().flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break; // EOF
        }
        let text = line.trim();
        if text.is_empty() || text.to_lowercase() == "выход" {
            break;
        }

        let reply = exchange(&responder, &mut history, text, no_delay);
        println!("{}", reply);
    }
    Ok(())
}

/// Run one user turn against the responder. The cosmetic pause is
/// applied only after the reply has been computed.
fn exchange(
    responder: &Responder<'_>,
    history: &mut Vec<ChatTurn>,
    text: &str,
    no_delay: bool,
) -> String {
    history.push(ChatTurn::user(text));
    let reply = responder.respond(text, history);
    if !no_delay {
        thread::sleep(REPLY_DELAY);
    }
    history.push(ChatTurn::assistant(&reply));
    reply
}

fn cmd_favorites(db_path: Option<&str>, action: FavoritesAction) -> Result<()> {
    let store = FavoritesStore::open(db_path)?;
    let cat = catalog();

    match action {
        FavoritesAction::List => {
            let set = store.load()?;
            if set.is_empty() {
                println!("Добавь сборки в избранное, чтобы быстро к ним вернуться");
                println!("(buildhub favorites toggle <ID>)");
                return Ok(());
            }

            println!("=== Избранные сборки ===");
            println!();
            for id in &set {
                match cat.build(*id) {
                    Some(build) => print_build_card(build),
                    None => warn!("Favorite id {} is not in the catalog, skipping", id),
                }
            }
            println!("Сохранено: {}", set.len());
        }
        FavoritesAction::Toggle { id } => {
            if cat.build(id).is_none() {
                warn!("Build {} is not in the catalog", id);
            }

            let updated = favorites::toggle(&store.load()?, id);
            store.save(&updated)?;

            if favorites::contains(&updated, id) {
                println!("Сборка {} добавлена в избранное", id);
            } else {
                println!("Сборка {} убрана из избранного", id);
            }
        }
        FavoritesAction::Clear => {
            store.save(&FavoriteSet::new())?;
            println!("Избранное очищено");
        }
    }
    Ok(())
}

fn cmd_export(db_path: Option<&str>, format: &str) -> Result<()> {
    if format != "json" {
        anyhow::bail!("Unsupported format '{}'. Only 'json' is supported.", format);
    }

    let store = FavoritesStore::open(db_path)?;
    let set = store.load()?;
    let cat = catalog();

    let export = serde_json::json!({
        "builds": cat.builds(),
        "games": cat.games(),
        "articles": cat.articles(),
        "favorites": set,
    });

    println!("{}", serde_json::to_string_pretty(&export)?);
    Ok(())
}

fn cmd_stats(db_path: Option<&str>) -> Result<()> {
    let store = FavoritesStore::open(db_path)?;
    let set = store.load()?;
    let cat = catalog();

    println!("=== BuildHub Advisor Stats ===");
    println!("Store:     {}", store.path().display());
    println!();
    println!("Builds:    {}", cat.builds().len());
    println!("Games:     {}", cat.games().len());
    println!("Articles:  {}", cat.articles().len());
    println!("Favorites: {}", set.len());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clamped_ceiling_pulls_outliers_into_range() {
        assert_eq!(clamped_ceiling(10_000), BUDGET_MIN);
        assert_eq!(clamped_ceiling(-5), BUDGET_MIN);
        assert_eq!(clamped_ceiling(1_000_000), BUDGET_MAX);
        assert_eq!(clamped_ceiling(i64::MAX), BUDGET_MAX);
    }

    #[test]
    fn test_clamped_ceiling_keeps_in_range_values() {
        assert_eq!(clamped_ceiling(BUDGET_MIN), BUDGET_MIN);
        assert_eq!(clamped_ceiling(85_000), 85_000);
        assert_eq!(clamped_ceiling(BUDGET_MAX), BUDGET_MAX);
    }
}

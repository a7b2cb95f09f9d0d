use clap::Parser;
use nm_search::{catalog, cli, config, error, export, interactive, notify, render, search};
use cli::{Cli, Commands, SearchArgs};
use config::Config;
use error::{NmSearchError, Result};
use export::Selection;
use nm_search_common::RngSource;
use notify::Notification;
use std::path::Path;
use std::process::ExitCode;
use std::time::Duration;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    let config = match Config::load() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("✖ {}", e);
            return ExitCode::FAILURE;
        }
    };

    let result = match cli.command {
        Commands::Search(args) => {
            // 検索の失敗はすべて通知として表示
            if let Err(e) = run_search_command(&config, cli.catalog.as_deref(), cli.seed, cli.verbose, args).await {
                Notification::from_error(&e).emit();
                return ExitCode::FAILURE;
            }
            Ok(())
        }

        Commands::Catalog { json } => show_catalog(&config, cli.catalog.as_deref(), cli.verbose, json),

        Commands::Config { show, set_limit, set_mode, set_delay, set_catalog, reset } => {
            let mut config = if reset { Config::default() } else { config };
            let changed = reset
                || set_limit.is_some()
                || set_mode.is_some()
                || set_delay.is_some()
                || set_catalog.is_some();

            edit_config(&mut config, set_limit, set_mode, set_delay, set_catalog)
                .and_then(|_| if changed { save_config(&config) } else { Ok(()) })
                .map(|_| {
                    if show || !changed {
                        print_config(&config);
                    }
                })
        }
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("✖ {}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run_search_command(
    config: &Config,
    catalog_override: Option<&Path>,
    seed: Option<u64>,
    verbose: bool,
    args: SearchArgs,
) -> Result<()> {
    let catalog_path = config.resolve_catalog_path(catalog_override);
    let catalog = catalog::load_or_builtin(catalog_path.as_deref(), verbose)?;

    let request = search::SearchRequest::new(
        &args.query,
        args.mode.unwrap_or(config.default_mode),
        args.limit.unwrap_or(config.default_limit),
    )?;

    let options = search::SearchOptions {
        delay: if args.no_delay || args.json {
            Duration::ZERO
        } else {
            Duration::from_millis(config.search_delay_ms)
        },
        show_spinner: !args.json,
        verbose,
    };

    if !args.json {
        println!("🔎 nm-search - Busca {}\n", request.mode);
    }

    let results = match seed {
        Some(seed) => search::run_search(&catalog, RngSource::seeded(seed), &request, &options).await,
        None => search::run_search(&catalog, RngSource::thread(), &request, &options).await,
    };

    if args.json {
        println!("{}", serde_json::to_string_pretty(&results)?);
        return Ok(());
    }

    Notification::SearchCompleted {
        query: request.query.clone(),
        count: results.len(),
    }
    .emit();

    // 選択
    let mut selection = if args.interactive {
        interactive::select_results(&results)?
    } else if args.select_all {
        Selection::all(&results)
    } else {
        Selection::from_ids(args.select)
    };
    selection.exclude(&args.exclude);

    for id in selection.ids() {
        if !results.iter().any(|r| r.id() == id) {
            eprintln!("⚠ id não encontrado nos resultados: {}", id);
        }
    }

    println!();
    println!("{}", render::render_results(&results, &selection));

    // エクスポート
    let format = match args.export {
        Some(format) => Some(format),
        None if args.interactive && !selection.is_empty() => Some(interactive::select_format()?),
        None => None,
    };

    if let Some(format) = format {
        match export::export_selection(&results, &selection, format) {
            Ok(summary) => Notification::Exported {
                count: summary.count(),
                format: summary.format,
            }
            .emit(),
            // 未選択は通知のみで終了コードは成功
            Err(NmSearchError::NothingSelected) => Notification::NothingSelected.emit(),
            Err(e) => return Err(e),
        }
    }

    Ok(())
}

fn show_catalog(config: &Config, catalog_override: Option<&Path>, verbose: bool, json: bool) -> Result<()> {
    let catalog_path = config.resolve_catalog_path(catalog_override);
    let catalog = catalog::load_or_builtin(catalog_path.as_deref(), verbose)?;

    if json {
        println!("{}", serde_json::to_string_pretty(catalog.entries())?);
        return Ok(());
    }

    println!("📚 Catálogo: {} itens\n", catalog.len());
    for entry in catalog.entries() {
        println!("  {:>3}  {}  {}", entry.id, entry.code, entry.description);
        println!(
            "            {} | {} | {} | {}",
            entry.category,
            entry.unit,
            render::format_price(entry.price),
            entry.source
        );
    }

    Ok(())
}

fn edit_config(
    config: &mut Config,
    set_limit: Option<usize>,
    set_mode: Option<nm_search_common::SearchMode>,
    set_delay: Option<u64>,
    set_catalog: Option<std::path::PathBuf>,
) -> Result<()> {
    if let Some(limit) = set_limit {
        config.set_default_limit(limit)?;
    }
    if let Some(mode) = set_mode {
        config.default_mode = mode;
    }
    if let Some(delay) = set_delay {
        config.search_delay_ms = delay;
    }
    if let Some(path) = set_catalog {
        config.catalog_path = Some(path);
    }
    Ok(())
}

fn save_config(config: &Config) -> Result<()> {
    config.save()?;
    println!("✔ Configuração salva: {}", Config::config_path()?.display());
    Ok(())
}

fn print_config(config: &Config) {
    println!("Configuração:");
    println!("  Limite padrão: {}", config.default_limit);
    println!("  Modo padrão: {}", config.default_mode);
    println!("  Atraso da busca: {} ms", config.search_delay_ms);
    println!(
        "  Catálogo: {}",
        config
            .catalog_path
            .as_ref()
            .map(|p| p.display().to_string())
            .unwrap_or_else(|| "embutido".into())
    );
}

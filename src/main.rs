use clap::Parser;
use route_progress::{cli, config, error, logging, report};
use cli::{Cli, Commands};
use config::ConfigStore;
use error::Result;
use route_progress_common::{replay, Environment, ProgressConfig, Timeline};

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose)?;

    let store = ConfigStore::locate(cli.config.as_deref())?;

    match cli.command {
        Commands::Style { overrides, nonce, css_only, output } => {
            let mut config = overrides.apply(store.load()?);
            if nonce.is_some() {
                config.nonce = nonce;
            }
            config.validate()?;

            let rendered = report::render_style(&config, css_only);
            match output {
                Some(path) => {
                    std::fs::write(&path, rendered)?;
                    eprintln!("✔ スタイルを書き出しました: {}", path.display());
                }
                None => println!("{}", rendered),
            }
        }

        Commands::Simulate { timeline, overrides, server, format } => {
            let config = overrides.apply(store.load()?);
            config.validate()?;
            let timeline: Timeline = timeline.parse()?;

            let environment = if server { Environment::Server } else { Environment::Browser };
            tracing::debug!(events = timeline.events().len(), ?environment, "replaying timeline");

            let calls = replay(&timeline, &config, environment);
            println!("{}", report::render_calls(&calls, format)?);
        }

        Commands::Config { show, init, force } => {
            if init {
                if store.exists() && !force {
                    println!("設定ファイルは既に存在します: {}", store.path().display());
                    println!("上書きする場合は --force を指定してください");
                } else {
                    store.save(&ProgressConfig::default())?;
                    println!("✔ 設定ファイルを作成しました: {}", store.path().display());
                }
            }

            if show || !init {
                let config = store.load()?;
                println!("設定ファイル: {}", store.path().display());
                println!("{}", report::render_config(&config)?);
            }
        }
    }

    Ok(())
}

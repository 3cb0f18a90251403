use anyhow::Result;
use log::LevelFilter;

use colkern_cli::{build_cli, resolve_config, run};

fn main() -> Result<()> {
    env_logger::Builder::default()
        .filter_level(LevelFilter::Error)
        .parse_env(env_logger::Env::default().filter_or("COLKERN_LOG", "error,colkern=info"))
        .init();

    let matches = build_cli().get_matches();
    let config = resolve_config(&matches)?;
    log::info!(
        "[colkern] {} with column check {}",
        matches.subcommand_name().unwrap_or("-"),
        config.column_check
    );

    match run(&matches, &config) {
        Ok(value) => {
            println!("{}", value);
            Ok(())
        }
        Err(e) => {
            log::error!("Kernel failed: {:#}", e);
            std::process::exit(1)
        }
    }
}

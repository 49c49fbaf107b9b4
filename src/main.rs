use clap::Parser;
use plugin_packer::utils::{logger, validation::Validate};
use plugin_packer::{CliConfig, LocalStorage, Packager};

fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting plugin-packer");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        eprintln!("❌ {}", e);
        std::process::exit(2);
    }

    let storage = LocalStorage::new(".".to_string());
    let packager = Packager::new(storage, config);

    match packager.package() {
        Ok(archive_path) => {
            tracing::info!("✅ Plugin packaged successfully");
            tracing::info!("📁 Archive saved to: {}", archive_path);
            println!("Plugin packaged as {}", archive_path);
        }
        Err(e) => {
            tracing::error!("❌ Packaging failed: {}", e);
            eprintln!("❌ {}", e);
            std::process::exit(1);
        }
    }

    Ok(())
}

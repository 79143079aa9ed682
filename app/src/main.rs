use clap::Parser;

use image_studio::app::settings::to_toml_string;
use image_studio::cli::Cli;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let settings = cli.apply(cli.load_settings()?);

    if cli.print_config {
        print!("{}", to_toml_string(&settings)?);
        return Ok(());
    }
    if cli.write_config {
        let path = cli.save_settings(&settings)?;
        println!("settings written to {}", path.display());
        return Ok(());
    }

    // Keep the guard alive for the whole run so buffered log lines flush.
    let _log_guard = image_studio::logging::init_logging(&cli.log_level);
    image_studio::runner::run_app(settings)
}

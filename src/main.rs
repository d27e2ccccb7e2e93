use clap::Parser;
use env_logger::{Builder, Env};
use rekey::cli::Cli;
use rekey::config::Config;
use rekey::pipeline::Pipeline;
use rekey::services::ap::FramesetAdmin;
use rekey::services::generator::HttpGenerator;
use rekey::services::journal::SessionJournal;
use rekey::services::notify::SlackNotifier;
use rekey::services::wifi::SystemWifi;

fn main() -> anyhow::Result<()> {
    dotenvy::dotenv_override().ok();
    Builder::from_env(Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    let config = Config::from_env()?;

    let connector = SystemWifi::from_config(&config);
    let generator = HttpGenerator::from_config(&config)?;
    let controller = FramesetAdmin::from_config(&config);
    let notifier = SlackNotifier::from_config(&config)?;
    let journal = SessionJournal::from_config(&config)?;

    let pipeline = Pipeline {
        store_path: &cli.password_file,
        connector: &connector,
        generator: &generator,
        controller: &controller,
        notifier: &notifier,
        journal: &journal,
    };

    // a blank --password falls back to the generator
    let source = pipeline.run(cli.explicit_password())?;

    println!(
        "wifi password rotated ({source}), stored in {}",
        cli.password_file.display()
    );
    Ok(())
}

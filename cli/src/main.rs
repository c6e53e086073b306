mod commands;
mod terminal;

use commands::control::Action;
use commands::{CommandLine, Commands, control, scan};
use rokr_common::config::Config;
use terminal::{logging, print};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let commands = CommandLine::parse_args();
    logging::init();

    let cfg: Config = commands.config();
    print::banner(cfg.no_banner, cfg.quiet);

    let result = match commands.command {
        Commands::Scan { subnet } => {
            print::header("discovering players", cfg.quiet);
            scan::scan(subnet, &cfg).await
        }
        Commands::Key { key, device } => control::run(Action::Key(key), device, &cfg).await,
        Commands::Launch { app, device } => control::run(Action::Launch(app), device, &cfg).await,
        Commands::Search { query, device } => {
            control::run(Action::Search(query.join(" ")), device, &cfg).await
        }
        Commands::Apps { device } => control::run(Action::ListApps, device, &cfg).await,
    };

    print::end_of_program(cfg.quiet);
    result
}

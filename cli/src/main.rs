use clap::Parser;

use intervals_cli::commands::{self, Action};
use intervals_cli::{CliContext, Console, logging, render};
use intervals_core::snapshot::token_from_url;
use intervals_core::{AppConfig, AppConfigExt};

#[derive(Parser)]
#[command(version, about = "Interval workout timer")]
struct Args {
    /// Share token to load (the value of the `c` query parameter)
    #[arg(short, long, conflicts_with = "url")]
    token: Option<String>,

    /// Share link or query string containing `c=<token>`
    #[arg(short, long)]
    url: Option<String>,

    /// Disable audio cues
    #[arg(short, long)]
    mute: bool,

    /// Tick period in milliseconds (overrides the saved setting)
    #[arg(long)]
    tick_ms: Option<u64>,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), String> {
    let _log_guard = logging::init();
    let args = Args::parse();

    let mut config = AppConfig::load();
    if let Some(tick_ms) = args.tick_ms {
        config.tick_millis = tick_ms;
        if let Err(e) = config.validate() {
            return Err(e.to_string());
        }
    }

    let token = args
        .token
        .or_else(|| args.url.as_deref().and_then(token_from_url));
    let mut ctx = CliContext::new(config, token.as_deref(), args.mute);
    let mut console = Console::new();

    println!("{}", render::setup(ctx.session.store().sets(), ctx.session.store().can_remove()));
    println!("Commands: list, add, edit <n> <field> <value>, remove <n>, start, share, exit");

    loop {
        let Some(line) = console.readline("> ").await? else {
            break;
        };
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        match commands::respond(line, &mut ctx) {
            Ok((Action::Start, _)) => match commands::run_workout(&mut ctx, &mut console).await {
                Ok(Action::Quit) => break,
                Ok(_) => {}
                Err(err) => println!("{err}"),
            },
            Ok((Action::Quit, text)) => {
                println!("{text}");
                break;
            }
            Ok((Action::Continue, text)) => println!("{text}"),
            Err(err) => println!("{err}"),
        }
    }

    ctx.ticker.stop();
    Ok(())
}

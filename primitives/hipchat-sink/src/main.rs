use anyhow::{Context, Result};
use clap::Parser;
use hipchat_sink::{Cli, Command, logging};

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Command::Send(args) => {
            let dispatch = logging::dispatch(args.debug);
            hipchat_sink::run(&args, dispatch, tokio::io::stdin())
                .await
                .with_context(|| format!("sending to room {}", args.room))?;
        }
    }

    Ok(())
}

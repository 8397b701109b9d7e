mod adapters;
mod commands;
mod terminal;

use commands::{CommandLine, Commands, actions, resolve, run};
use terminal::{logging, print};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let commands = CommandLine::parse_args();

    logging::init();

    match commands.command {
        Commands::Run(args) => {
            print::header("fault injection run");
            run::run(args).await
        }
        Commands::Actions => {
            print::header("available fault actions");
            actions::actions();
            Ok(())
        }
        Commands::Resolve(args) => {
            print::header("target resolution");
            resolve::resolve(args)
        }
    }
}

extern crate actix;
extern crate env_logger;
extern crate failure;
#[macro_use]
extern crate failure_derive;
extern crate hackathon_winners;
#[macro_use]
extern crate log;
extern crate serde_json;
#[cfg(test)] #[macro_use] extern crate matches;

mod command;
mod errors;
mod settings;

use std::env;

use actix::System;
use failure::Error;
use hackathon_winners::{establish_pool, run_migrations, DbExecutor, WinnerSolution, WinnerSolutionRepository};

use command::Command;
use settings::Settings;

fn print_solutions(solutions: &[WinnerSolution]) -> Result<(), Error> {
    for solution in solutions {
        println!("{}", serde_json::to_string(solution)?);
    }
    Ok(())
}

async fn execute(repository: WinnerSolutionRepository, command: Command) -> Result<(), Error> {
    let solutions = match command {
        Command::List => repository.get_all().await?,
        Command::Show { id } => repository.get_by_id(&id).await?.into_iter().collect(),
        Command::Hackathon { hackathon_id } => repository.get_by_hackathon(&hackathon_id).await?,
        Command::Team { team_id } => repository.get_by_team(&team_id).await?,
        Command::TeamAtHackathon { team_id, hackathon_id } => repository
            .get_by_team_and_hackathon(&team_id, &hackathon_id)
            .await?
            .into_iter()
            .collect(),
    };
    info!("{} winner solutions found", solutions.len());
    print_solutions(&solutions)
}

fn run() -> Result<(), Error> {
    let settings = Settings::from_env()?;
    let command = Command::parse(env::args().skip(1))?;

    info!("Opening winner solutions store at {}", settings.database_url);
    let pool = establish_pool(&settings.database_url, settings.pool_size)?;
    let applied = run_migrations(&pool)?;
    info!("{} pending migrations applied", applied);

    let system = System::new();
    system.block_on(async move {
        let repository = WinnerSolutionRepository::new(DbExecutor::start(settings.executors, pool));
        execute(repository, command).await
    })
}

fn main() {
    env_logger::init();

    if let Err(e) = run() {
        error!("{}", e);
        for cause in e.iter_causes() {
            error!("caused by : {}", cause);
        }
        std::process::exit(1);
    }
}

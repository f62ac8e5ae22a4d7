extern crate actix;
#[macro_use]
extern crate diesel;
extern crate diesel_migrations;
extern crate failure;
#[macro_use]
extern crate failure_derive;
#[macro_use]
extern crate log;
extern crate serde;
#[macro_use]
extern crate serde_derive;
extern crate uuid;
#[cfg(test)] #[macro_use] extern crate matches;
#[cfg(test)] extern crate serde_json;

pub mod errors;
pub mod record;

pub use errors::{Constraint, StorageError};
pub use record::db::{establish_pool, run_migrations, DbExecutor, DbPool};
pub use record::models::{CreateWinnerSolution, WinnerSolution};
pub use record::repository::WinnerSolutionRepository;

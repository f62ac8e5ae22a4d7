//! Db executor actor
use actix::prelude::*;
use diesel::connection::SimpleConnection;
use diesel::prelude::*;
use diesel::r2d2::{self, ConnectionManager, CustomizeConnection, Pool};
use diesel::sqlite::SqliteConnection;
use diesel_migrations::{embed_migrations, EmbeddedMigrations, MigrationHarness};

use super::models::{CreateWinnerSolution, WinnerSolution};
use crate::errors::StorageError;

pub type DbPool = Pool<ConnectionManager<SqliteConnection>>;

const MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations");

/// Applied to every new pooled connection: SQLite does not enforce foreign keys unless asked to.
#[derive(Debug)]
struct SqlitePragmas;

impl CustomizeConnection<SqliteConnection, r2d2::Error> for SqlitePragmas {
    fn on_acquire(&self, conn: &mut SqliteConnection) -> Result<(), r2d2::Error> {
        conn.batch_execute("PRAGMA foreign_keys = ON; PRAGMA busy_timeout = 5000;")
            .map_err(r2d2::Error::QueryError)
    }
}

/// Builds the connection pool shared by every executor. Call it once at startup.
pub fn establish_pool(database_url: &str, max_size: u32) -> Result<DbPool, StorageError> {
    let manager = ConnectionManager::<SqliteConnection>::new(database_url);
    let pool = Pool::builder()
        .max_size(max_size)
        .connection_customizer(Box::new(SqlitePragmas))
        .build(manager)?;
    Ok(pool)
}

pub fn run_migrations(pool: &DbPool) -> Result<usize, StorageError> {
    let mut pooled = pool.get()?;
    let conn: &mut SqliteConnection = &mut pooled;
    let applied = conn
        .run_pending_migrations(MIGRATIONS)
        .map_err(|err| StorageError::Migration { message: err.to_string() })?;
    for version in &applied {
        info!("Applied migration {}", version);
    }
    Ok(applied.len())
}

/// This is db executor actor. Several of them run in parallel on a `SyncArbiter`,
/// each message checks a connection out of the pool for its own duration.
pub struct DbExecutor(pub DbPool);

impl Actor for DbExecutor {
    type Context = SyncContext<Self>;
}

impl DbExecutor {
    /// Starts `threads` executors sharing `pool`.
    pub fn start(threads: usize, pool: DbPool) -> Addr<DbExecutor> {
        SyncArbiter::start(threads, move || DbExecutor(pool.clone()))
    }
}

pub struct ListWinnerSolutions;

impl Message for ListWinnerSolutions {
    type Result = Result<Vec<WinnerSolution>, StorageError>;
}

impl Handler<ListWinnerSolutions> for DbExecutor {
    type Result = Result<Vec<WinnerSolution>, StorageError>;

    fn handle(&mut self, _: ListWinnerSolutions, _: &mut Self::Context) -> Self::Result {
        use super::schema::winner_solutions::dsl::*;

        let mut pooled = self.0.get()?;
        let conn: &mut SqliteConnection = &mut pooled;
        let items = winner_solutions.load::<WinnerSolution>(conn)?;
        debug!("Loaded {} winner solutions", items.len());
        Ok(items)
    }
}

impl Message for CreateWinnerSolution {
    type Result = Result<String, StorageError>;
}

impl Handler<CreateWinnerSolution> for DbExecutor {
    type Result = Result<String, StorageError>;

    fn handle(&mut self, msg: CreateWinnerSolution, _: &mut Self::Context) -> Self::Result {
        use super::schema::winner_solutions::dsl::*;

        let uuid = format!("{}", uuid::Uuid::new_v4());
        let new_solution = msg.as_row(&uuid);

        let mut pooled = self.0.get()?;
        let conn: &mut SqliteConnection = &mut pooled;

        conn.transaction::<_, diesel::result::Error, _>(|conn| {
            diesel::insert_into(winner_solutions)
                .values(&new_solution)
                .execute(conn)
        })
        .map_err(|err| {
            let err = StorageError::from(err);
            match &err {
                StorageError::ConstraintViolation { constraint } => warn!(
                    "Winner solution for team {} at hackathon {} rejected by {} constraint",
                    msg.team_id, msg.hackathon_id, constraint
                ),
                other => error!("Error inserting winner solution : {}", other),
            }
            err
        })?;

        debug!("Created winner solution {}", uuid);
        Ok(uuid)
    }
}

pub struct GetWinnerSolution {
    pub id: String,
}

impl Message for GetWinnerSolution {
    type Result = Result<Option<WinnerSolution>, StorageError>;
}

impl Handler<GetWinnerSolution> for DbExecutor {
    type Result = Result<Option<WinnerSolution>, StorageError>;

    fn handle(&mut self, msg: GetWinnerSolution, _: &mut Self::Context) -> Self::Result {
        use super::schema::winner_solutions::dsl::*;

        let mut pooled = self.0.get()?;
        let conn: &mut SqliteConnection = &mut pooled;
        let item = winner_solutions
            .find(&msg.id)
            .first::<WinnerSolution>(conn)
            .optional()?;
        debug!("Winner solution {} found : {}", msg.id, item.is_some());
        Ok(item)
    }
}

pub struct GetWinnerSolutionsByHackathon {
    pub hackathon_id: String,
}

impl Message for GetWinnerSolutionsByHackathon {
    type Result = Result<Vec<WinnerSolution>, StorageError>;
}

impl Handler<GetWinnerSolutionsByHackathon> for DbExecutor {
    type Result = Result<Vec<WinnerSolution>, StorageError>;

    fn handle(&mut self, msg: GetWinnerSolutionsByHackathon, _: &mut Self::Context) -> Self::Result {
        use super::schema::winner_solutions::dsl::*;

        let mut pooled = self.0.get()?;
        let conn: &mut SqliteConnection = &mut pooled;
        let items = winner_solutions
            .filter(hackathon_id.eq(&msg.hackathon_id))
            .load::<WinnerSolution>(conn)?;
        debug!("Loaded {} winner solutions for hackathon {}", items.len(), msg.hackathon_id);
        Ok(items)
    }
}

pub struct GetWinnerSolutionsByTeam {
    pub team_id: String,
}

impl Message for GetWinnerSolutionsByTeam {
    type Result = Result<Vec<WinnerSolution>, StorageError>;
}

impl Handler<GetWinnerSolutionsByTeam> for DbExecutor {
    type Result = Result<Vec<WinnerSolution>, StorageError>;

    fn handle(&mut self, msg: GetWinnerSolutionsByTeam, _: &mut Self::Context) -> Self::Result {
        use super::schema::winner_solutions::dsl::*;

        let mut pooled = self.0.get()?;
        let conn: &mut SqliteConnection = &mut pooled;
        let items = winner_solutions
            .filter(team_id.eq(&msg.team_id))
            .load::<WinnerSolution>(conn)?;
        debug!("Loaded {} winner solutions for team {}", items.len(), msg.team_id);
        Ok(items)
    }
}

pub struct GetWinnerSolutionByTeamAndHackathon {
    pub team_id: String,
    pub hackathon_id: String,
}

impl Message for GetWinnerSolutionByTeamAndHackathon {
    type Result = Result<Option<WinnerSolution>, StorageError>;
}

impl Handler<GetWinnerSolutionByTeamAndHackathon> for DbExecutor {
    type Result = Result<Option<WinnerSolution>, StorageError>;

    fn handle(&mut self, msg: GetWinnerSolutionByTeamAndHackathon, _: &mut Self::Context) -> Self::Result {
        use super::schema::winner_solutions::dsl::*;

        let mut pooled = self.0.get()?;
        let conn: &mut SqliteConnection = &mut pooled;
        let mut items = winner_solutions
            .filter(team_id.eq(&msg.team_id).and(hackathon_id.eq(&msg.hackathon_id)))
            .limit(1)
            .load::<WinnerSolution>(conn)?;
        debug!("Winner solution of team {} at hackathon {} found : {}", msg.team_id, msg.hackathon_id, !items.is_empty());
        Ok(items.pop())
    }
}

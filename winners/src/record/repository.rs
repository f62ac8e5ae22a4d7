use actix::Addr;

use super::db::{
    DbExecutor, GetWinnerSolution, GetWinnerSolutionByTeamAndHackathon, GetWinnerSolutionsByHackathon,
    GetWinnerSolutionsByTeam, ListWinnerSolutions,
};
use super::models::{CreateWinnerSolution, WinnerSolution};
use crate::errors::StorageError;

/// Async access to winner solutions.
///
/// Every call is one message to the executors: a pooled connection is checked out
/// for that single statement and released when it completes. "Not found" is `Ok(None)`,
/// storage failures are returned as they are.
#[derive(Clone)]
pub struct WinnerSolutionRepository {
    db: Addr<DbExecutor>,
}

impl WinnerSolutionRepository {
    pub fn new(db: Addr<DbExecutor>) -> Self {
        WinnerSolutionRepository { db }
    }

    /// Every stored winner solution, in no particular order.
    pub async fn get_all(&self) -> Result<Vec<WinnerSolution>, StorageError> {
        self.db.send(ListWinnerSolutions).await?
    }

    /// Inserts a winner solution and returns its generated id.
    ///
    /// A row rejected by a storage constraint (unknown hackathon or team, duplicate id)
    /// is rolled back and reported as `StorageError::ConstraintViolation`, it is never
    /// turned into an empty result here. Callers that only need "created or not" match
    /// on `ConstraintViolation` and map it to `None` themselves.
    pub async fn create(&self, solution: CreateWinnerSolution) -> Result<String, StorageError> {
        self.db.send(solution).await?
    }

    pub async fn get_by_id(&self, id: &str) -> Result<Option<WinnerSolution>, StorageError> {
        self.db.send(GetWinnerSolution { id: id.to_owned() }).await?
    }

    pub async fn get_by_hackathon(&self, hackathon_id: &str) -> Result<Vec<WinnerSolution>, StorageError> {
        self.db
            .send(GetWinnerSolutionsByHackathon { hackathon_id: hackathon_id.to_owned() })
            .await?
    }

    pub async fn get_by_team(&self, team_id: &str) -> Result<Vec<WinnerSolution>, StorageError> {
        self.db.send(GetWinnerSolutionsByTeam { team_id: team_id.to_owned() }).await?
    }

    /// The first winner solution of a team at a hackathon. The pair is not unique in storage.
    pub async fn get_by_team_and_hackathon(
        &self,
        team_id: &str,
        hackathon_id: &str,
    ) -> Result<Option<WinnerSolution>, StorageError> {
        self.db
            .send(GetWinnerSolutionByTeamAndHackathon {
                team_id: team_id.to_owned(),
                hackathon_id: hackathon_id.to_owned(),
            })
            .await?
    }
}

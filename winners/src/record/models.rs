use super::schema::winner_solutions;

/// A prize-winning submission of a team at a hackathon.
#[derive(Serialize, Queryable, Debug, Clone, PartialEq)]
pub struct WinnerSolution {
    pub id: String,
    pub hackathon_id: String,
    pub team_id: String,
    pub win_money: f64,
    pub link_to_solution: String,
    pub link_to_presentation: String,
    pub can_share: bool,
}

#[derive(Insertable)]
#[diesel(table_name = winner_solutions)]
pub struct NewWinnerSolution<'a> {
    pub id: &'a str,
    pub hackathon_id: &'a str,
    pub team_id: &'a str,
    pub win_money: f64,
    pub link_to_solution: &'a str,
    pub link_to_presentation: &'a str,
    pub can_share: bool,
}

/// Values submitted to record a new winner solution.
///
/// Solutions are shareable unless `can_share(false)` is called.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct CreateWinnerSolution {
    pub hackathon_id: String,
    pub team_id: String,
    pub win_money: f64,
    pub link_to_solution: String,
    pub link_to_presentation: String,
    #[serde(default = "shareable_by_default")]
    pub can_share: bool,
}

fn shareable_by_default() -> bool {
    true
}

impl CreateWinnerSolution {
    pub fn new<S: Into<String>>(hackathon_id: S, team_id: S, win_money: f64, link_to_solution: S, link_to_presentation: S) -> Self {
        CreateWinnerSolution {
            hackathon_id: hackathon_id.into(),
            team_id: team_id.into(),
            win_money,
            link_to_solution: link_to_solution.into(),
            link_to_presentation: link_to_presentation.into(),
            can_share: shareable_by_default(),
        }
    }

    pub fn can_share(mut self, can_share: bool) -> Self {
        self.can_share = can_share;
        self
    }

    pub(crate) fn as_row<'a>(&'a self, id: &'a str) -> NewWinnerSolution<'a> {
        NewWinnerSolution {
            id,
            hackathon_id: &self.hackathon_id,
            team_id: &self.team_id,
            win_money: self.win_money,
            link_to_solution: &self.link_to_solution,
            link_to_presentation: &self.link_to_presentation,
            can_share: self.can_share,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_can_share_defaults_to_true() {
        let solution = CreateWinnerSolution::new("hackathon", "team", 1000.0, "https://a", "https://b");
        assert!(solution.can_share);
        assert!(!solution.can_share(false).can_share);
    }

    #[test]
    fn test_deserialize_without_can_share() {
        let json = r#"{"hackathon_id":"hackathon","team_id":"team","win_money":1000.0,"link_to_solution":"https://a","link_to_presentation":"https://b"}"#;
        let actual: CreateWinnerSolution = serde_json::from_str(json).unwrap();
        assert_eq!(actual, CreateWinnerSolution::new("hackathon", "team", 1000.0, "https://a", "https://b"));
        assert!(actual.can_share);

        let json = r#"{"hackathon_id":"hackathon","team_id":"team","win_money":5.0,"link_to_solution":"https://a","link_to_presentation":"https://b","can_share":false}"#;
        let actual: CreateWinnerSolution = serde_json::from_str(json).unwrap();
        assert!(!actual.can_share);
    }

    #[test]
    fn test_as_row() {
        let solution = CreateWinnerSolution::new("hackathon", "team", 250.5, "https://a", "https://b").can_share(false);
        let row = solution.as_row("generated");
        assert_eq!(row.id, "generated");
        assert_eq!(row.hackathon_id, "hackathon");
        assert_eq!(row.team_id, "team");
        assert_eq!(row.win_money, 250.5);
        assert_eq!(row.link_to_solution, "https://a");
        assert_eq!(row.link_to_presentation, "https://b");
        assert!(!row.can_share);
    }
}

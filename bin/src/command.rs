use crate::errors::CliError;

const USAGE: &'static str = "winners-admin [list | show <id> | hackathon <id> | team <team_id> [hackathon_id]]";

#[derive(Debug, PartialEq)]
pub enum Command {
    List,
    Show { id: String },
    Hackathon { hackathon_id: String },
    Team { team_id: String },
    TeamAtHackathon { team_id: String, hackathon_id: String },
}

impl Command {
    pub fn parse<I: IntoIterator<Item = String>>(args: I) -> Result<Command, CliError> {
        let args: Vec<String> = args.into_iter().collect();
        let args: Vec<&str> = args.iter().map(|arg| arg.as_str()).collect();
        match args.as_slice() {
            [] | ["list"] => Ok(Command::List),
            ["show", id] => Ok(Command::Show { id: id.to_string() }),
            ["hackathon", hackathon_id] => Ok(Command::Hackathon { hackathon_id: hackathon_id.to_string() }),
            ["team", team_id] => Ok(Command::Team { team_id: team_id.to_string() }),
            ["team", team_id, hackathon_id] => Ok(Command::TeamAtHackathon {
                team_id: team_id.to_string(),
                hackathon_id: hackathon_id.to_string(),
            }),
            _ => Err(CliError::InvalidCommand { usage: USAGE.to_owned() }),
        }
    }
}

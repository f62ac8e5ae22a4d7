#[derive(Fail, Debug, PartialEq)]
pub enum CliError {
    #[fail(display = "Invalid command : {}", usage)]
    InvalidCommand { usage: String },
    #[fail(display = "{} is mandatory", name)]
    MissingSetting { name: &'static str },
    #[fail(display = "{} must be a positive number, got {}", name, value)]
    InvalidSetting { name: &'static str, value: String },
}

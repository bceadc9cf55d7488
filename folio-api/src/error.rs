#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
pub enum Error {
    #[error("Failed reaching the comment api: {0}")]
    Transport(String),

    #[error("Failed parsing the comment api response: {0}")]
    Parse(String),
}

impl Error {
    pub fn is_parse(&self) -> bool {
        matches!(self, Error::Parse(_))
    }
}

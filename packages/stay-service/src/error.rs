pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
	#[error("Not found: {message}")]
	NotFound { message: String },
}
impl From<stay_storage::Error> for Error {
	fn from(err: stay_storage::Error) -> Self {
		match err {
			stay_storage::Error::NotFound(message) => Self::NotFound { message },
		}
	}
}

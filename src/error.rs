use thiserror::Error;

pub type Result<T> = std::result::Result<T, GridError>;

#[derive(Error, Debug)]
pub enum GridError {
    #[error("Git error: {0}")]
    Git(#[from] Box<gix::open::Error>),
    #[error("Reference find error: {0}")]
    RefFind(#[from] Box<gix::reference::find::existing::Error>),
    #[error("Object find error: {0}")]
    ObjectFind(#[from] Box<gix::object::find::existing::with_conversion::Error>),
    #[error("Commit error: {0}")]
    Commit(#[from] Box<gix::object::commit::Error>),
    #[error("Object decode error: {0}")]
    ObjectDecode(#[from] Box<gix::objs::decode::Error>),
    #[error("Walk error: {0}")]
    Walk(#[from] ignore::Error),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Config error: {0}")]
    Config(String),
    #[error("Invalid date: {0}")]
    InvalidDate(String),
}

// Manual From implementations for unboxed to boxed conversions
impl From<gix::open::Error> for GridError {
    fn from(err: gix::open::Error) -> Self {
        GridError::Git(Box::new(err))
    }
}

impl From<gix::reference::find::existing::Error> for GridError {
    fn from(err: gix::reference::find::existing::Error) -> Self {
        GridError::RefFind(Box::new(err))
    }
}

impl From<gix::object::find::existing::with_conversion::Error> for GridError {
    fn from(err: gix::object::find::existing::with_conversion::Error) -> Self {
        GridError::ObjectFind(Box::new(err))
    }
}

impl From<gix::object::commit::Error> for GridError {
    fn from(err: gix::object::commit::Error) -> Self {
        GridError::Commit(Box::new(err))
    }
}

impl From<gix::objs::decode::Error> for GridError {
    fn from(err: gix::objs::decode::Error) -> Self {
        GridError::ObjectDecode(Box::new(err))
    }
}

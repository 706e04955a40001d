use thiserror::Error;

#[derive(Error, PartialEq, Eq, Debug)]
pub enum IndexError {
    #[error("document id {0} does not fit in 47 bits")]
    DocumentIdOutOfRange(u64),
    #[error("conjunction index {0} does not fit in 16 bits")]
    ConjunctionIndexOutOfRange(u64),
}

#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
pub enum Error {
    #[error("underflow at {offset}: need {needed} bytes, {remaining} remain")]
    Underflow {
        offset: usize,
        needed: usize,
        remaining: usize,
    },
}

/// General purpose error type for this crate.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Unknown instruction.
    #[error("unknown instruction discriminator: {0:?}")]
    UnknownInstruction(Vec<u8>),
    /// Borsh decode error.
    #[error("decode: {0}")]
    Decode(#[from] std::io::Error),
}

mod bits;
mod register;

pub use bits::Bits;
pub use register::BitsWithNext;

pub(crate) use bits::Payload;

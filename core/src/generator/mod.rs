use crate::*;
pub use random::*;

mod random;

pub trait DealGenerator {
    fn generate(self) -> Board;
}

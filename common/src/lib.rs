mod block;
pub use block::*;

pub mod test_case;

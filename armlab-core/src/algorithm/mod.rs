pub use fk::*;
pub use ik::*;

mod fk;
mod ik;

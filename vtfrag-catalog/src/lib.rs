//! Static catalog of the ECMA-48 control functions.
//!
//! Every function knows its mnemonic, the pattern it is written with and the
//! default values of its positional parameters. The catalog carries no
//! behaviour: recognising functions in text is the job of the `vtfrag` crate.
mod c0;
mod c1;
mod function;
mod independent;
mod sequence;
mod sgr;

pub use c0::C0Function;
pub use c1::C1Function;
pub use function::{ControlFunction, Environment, FunctionKind};
pub use independent::IndependentFunction;
pub use sequence::SequenceFunction;
pub use sgr::{Colour, SgrParameter};

/// ESCAPE, the first character of every 7-bit C1 and independent function.
pub const ESC: char = '\u{1b}';

//! Splits text into ECMA-48 control functions and plain text.
//!
//! The crate recognises C0 and C1 codes, independent functions, control
//! sequences and control strings in a string or in a byte stream and
//! yields them as ordered [`Fragment`]s:
//! - [`TextFragment`] for runs of ordinary characters,
//! - [`FunctionFragment`] for a recognised function with its decoded
//!   arguments.
//!
//! The catalog of known functions lives in [`vtfrag_catalog`], re-exported
//! as [`catalog`].
//!
//! Typical use:
//! 1. Configure [`ParserOptions`] and build a [`ParserFactory`].
//! 2. Create a [`StringParser`] for complete text or a [`StreamParser`]
//!    for a reader.
//! 3. Pull fragments with `next_fragment()` or iterate over the parser.
//!
//! ```
//! use vtfrag::{Fragment, ParserFactory, ParserOptions};
//!
//! let factory = ParserFactory::new(ParserOptions::default())?;
//! let fragments = factory
//!     .string_parser("\x1b[1mbold\x1b[m")
//!     .collect::<vtfrag::Result<Vec<_>>>()?;
//!
//! assert_eq!(fragments.len(), 3);
//! assert!(matches!(fragments[1], Fragment::Text(_)));
//! # Ok::<(), vtfrag::Error>(())
//! ```

mod decode;
mod engine;
mod error;
mod factory;
mod finder;
mod fragment;
mod handler;
mod options;
mod pattern;
mod stream;
mod string;

pub use error::{DecodeError, Error, PatternError, Result};
pub use factory::{ParserFactory, ParserFactoryBuilder};
pub use finder::{Finder, FinderResult};
pub use fragment::{
    ArgumentValue, Fragment, FunctionArgument, FunctionFragment, TextFragment,
};
pub use handler::{
    C0Handler, C1Handler, ControlStringHandler, DefaultTextHandler, Failure,
    FunctionHandler, IndependentHandler, SequenceHandler, TextHandler,
};
pub use options::{Encoding, ParserOptions, UnrecognizedPolicy};
pub use pattern::{
    Code, FunctionDescriptor, Placeholder, SequenceKey, SequenceMatch,
    SequenceMatcher,
};
pub use stream::StreamParser;
pub use string::StringParser;

pub use vtfrag_catalog as catalog;
pub use vtfrag_catalog::{ControlFunction, Environment, FunctionKind};

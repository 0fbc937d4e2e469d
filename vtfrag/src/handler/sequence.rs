use std::sync::Arc;

use vtfrag_catalog::{ControlFunction, FunctionKind, SequenceFunction};

use super::{Failure, FunctionHandler};
use crate::{
    error::DecodeError,
    fragment::{ArgumentValue, FunctionArgument, FunctionFragment},
    pattern::{SequenceMatch, SequenceMatcher},
};

/// Control sequences: `CSI P..P I..I F`.
#[derive(Clone, Debug)]
pub struct SequenceHandler {
    matcher: Arc<SequenceMatcher>,
}

impl SequenceHandler {
    pub fn new(matcher: Arc<SequenceMatcher>) -> Self {
        Self { matcher }
    }
}

impl FunctionHandler for SequenceHandler {
    fn kind(&self) -> FunctionKind {
        FunctionKind::ControlSequence
    }

    fn handle(
        &self,
        text: &str,
        _function: ControlFunction,
        offset: usize,
    ) -> Result<FunctionFragment, Failure> {
        match self.matcher.match_at(text) {
            SequenceMatch::Matched {
                descriptor,
                parameters,
                len,
            } => {
                let function = descriptor.function();
                let arguments = decode_arguments(function, parameters)
                    .map_err(|source| Failure::Decode { len, source })?;
                Ok(FunctionFragment::new(
                    &text[..len],
                    offset,
                    function.into(),
                    arguments,
                ))
            },
            SequenceMatch::Unknown { len } => {
                Err(Failure::UnknownFunction { len })
            },
            SequenceMatch::Incomplete => Err(Failure::NoEndOfFunction),
        }
    }
}

/// Split parameter bytes on `;`, empty slots become `None`.
///
/// An empty parameter string has no slots at all.
fn split_arguments(parameters: &str) -> Option<Vec<Option<&str>>> {
    if parameters.is_empty() {
        return None;
    }
    Some(
        parameters
            .split(';')
            .map(|slot| (!slot.is_empty()).then_some(slot))
            .collect(),
    )
}

/// Empty slots take the default declared for their position. Without any
/// parameter only the first default is used.
fn decode_arguments(
    function: SequenceFunction,
    parameters: &str,
) -> Result<Vec<FunctionArgument>, DecodeError> {
    let defaults = function.default_values();
    let default_at = |position: usize| defaults.get(position).copied().flatten();

    let Some(slots) = split_arguments(parameters) else {
        return Ok(default_at(0)
            .map(|value| FunctionArgument::new(value.into(), true))
            .into_iter()
            .collect());
    };

    slots
        .into_iter()
        .enumerate()
        .map(|(position, slot)| match slot {
            Some(raw) => Ok(FunctionArgument::new(ArgumentValue::parse(raw), false)),
            None => default_at(position)
                .map(|value| FunctionArgument::new(value.into(), true))
                .ok_or_else(|| DecodeError::MissingDefault {
                    function: function.into(),
                    position,
                    parameters: parameters.to_string(),
                }),
        })
        .collect()
}

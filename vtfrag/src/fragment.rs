use serde::Serialize;

use crate::ControlFunction;

/// One unit of parser output.
///
/// `start` and `end` are byte offsets into the parsed text, `text` is the
/// slice between them.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Fragment {
    Text(TextFragment),
    Function(FunctionFragment),
}

impl Fragment {
    pub fn text(&self) -> &str {
        match self {
            Fragment::Text(fragment) => &fragment.text,
            Fragment::Function(fragment) => &fragment.text,
        }
    }

    pub fn start(&self) -> usize {
        match self {
            Fragment::Text(fragment) => fragment.start,
            Fragment::Function(fragment) => fragment.start,
        }
    }

    pub fn end(&self) -> usize {
        match self {
            Fragment::Text(fragment) => fragment.end,
            Fragment::Function(fragment) => fragment.end,
        }
    }

    pub fn as_function(&self) -> Option<&FunctionFragment> {
        match self {
            Fragment::Function(fragment) => Some(fragment),
            Fragment::Text(_) => None,
        }
    }
}

/// Run of characters without control functions.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct TextFragment {
    pub text: String,
    pub start: usize,
    pub end: usize,
}

impl TextFragment {
    pub fn new(text: impl Into<String>, start: usize) -> Self {
        let text = text.into();
        let end = start + text.len();
        Self { text, start, end }
    }
}

/// Recognised control function with its decoded arguments.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct FunctionFragment {
    pub text: String,
    pub start: usize,
    pub end: usize,
    pub function: ControlFunction,
    pub arguments: Vec<FunctionArgument>,
}

impl FunctionFragment {
    pub fn new(
        text: impl Into<String>,
        start: usize,
        function: ControlFunction,
        arguments: Vec<FunctionArgument>,
    ) -> Self {
        let text = text.into();
        let end = start + text.len();
        Self {
            text,
            start,
            end,
            function,
            arguments,
        }
    }

    /// Integer values of the arguments, `None` for string arguments.
    pub fn integers(&self) -> impl Iterator<Item = Option<i64>> + '_ {
        self.arguments.iter().map(|argument| argument.value.as_integer())
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct FunctionArgument {
    pub value: ArgumentValue,
    /// Set when the value was substituted for an omitted parameter.
    pub is_default: bool,
}

impl FunctionArgument {
    pub fn new(value: ArgumentValue, is_default: bool) -> Self {
        Self { value, is_default }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum ArgumentValue {
    Integer(i64),
    Text(String),
}

impl ArgumentValue {
    /// Integer for a run of ASCII digits that fits `i64`, text otherwise.
    pub fn parse(raw: &str) -> Self {
        if !raw.is_empty() && raw.bytes().all(|b| b.is_ascii_digit()) {
            if let Ok(value) = raw.parse() {
                return ArgumentValue::Integer(value);
            }
        }
        ArgumentValue::Text(raw.to_string())
    }

    pub fn as_integer(&self) -> Option<i64> {
        match self {
            ArgumentValue::Integer(value) => Some(*value),
            ArgumentValue::Text(_) => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            ArgumentValue::Text(value) => Some(value),
            ArgumentValue::Integer(_) => None,
        }
    }
}

impl From<i64> for ArgumentValue {
    fn from(value: i64) -> Self {
        ArgumentValue::Integer(value)
    }
}

impl From<&str> for ArgumentValue {
    fn from(value: &str) -> Self {
        ArgumentValue::Text(value.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_argument_values() {
        assert_eq!(ArgumentValue::parse("20"), ArgumentValue::Integer(20));
        assert_eq!(ArgumentValue::parse("007"), ArgumentValue::Integer(7));
        assert_eq!(ArgumentValue::parse("foo"), ArgumentValue::from("foo"));
        assert_eq!(ArgumentValue::parse("-1"), ArgumentValue::from("-1"));
        assert_eq!(
            ArgumentValue::parse("99999999999999999999"),
            ArgumentValue::from("99999999999999999999")
        );
    }

    #[test]
    fn fragments_serialize_with_type_tag() {
        let fragment = Fragment::Text(TextFragment::new("abc", 4));
        let json = serde_json::to_value(&fragment).unwrap();

        assert_eq!(
            json,
            serde_json::json!({
                "type": "text", "text": "abc", "start": 4, "end": 7
            })
        );
    }
}

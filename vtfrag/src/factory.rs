use std::{collections::HashMap, io::Read, sync::Arc};

use log::debug;
use vtfrag_catalog::{FunctionKind, SequenceFunction};

use crate::{
    engine::Components,
    error::Result,
    finder::Finder,
    handler::{
        C0Handler, C1Handler, ControlStringHandler, DefaultTextHandler,
        FunctionHandler, IndependentHandler, SequenceHandler, TextHandler,
    },
    options::ParserOptions,
    pattern::SequenceMatcher,
    stream::StreamParser,
    string::StringParser,
};

/// Creates parsers sharing one finder, handler set and compiled catalog.
///
/// Cloning is cheap, clones share the same components.
#[derive(Clone)]
pub struct ParserFactory {
    components: Arc<Components>,
}

impl ParserFactory {
    /// Factory with the default handlers.
    pub fn new(options: ParserOptions) -> Result<Self> {
        Self::builder(options).build()
    }

    #[must_use]
    pub fn builder(options: ParserOptions) -> ParserFactoryBuilder {
        ParserFactoryBuilder {
            options,
            function_handlers: Vec::new(),
            text_handler: None,
        }
    }

    pub fn options(&self) -> &ParserOptions {
        &self.components.options
    }

    pub fn string_parser(&self, text: impl Into<String>) -> StringParser {
        StringParser::new(Arc::clone(&self.components), text.into())
    }

    pub fn stream_parser<R: Read>(&self, reader: R) -> StreamParser<R> {
        StreamParser::new(Arc::clone(&self.components), reader)
    }
}

/// Builder for a [`ParserFactory`] with custom handlers.
pub struct ParserFactoryBuilder {
    options: ParserOptions,
    function_handlers: Vec<Box<dyn FunctionHandler>>,
    text_handler: Option<Box<dyn TextHandler>>,
}

impl ParserFactoryBuilder {
    /// Replace the default handler for the kind `handler` reports.
    #[must_use]
    pub fn function_handler(
        mut self,
        handler: impl FunctionHandler + 'static,
    ) -> Self {
        self.function_handlers.push(Box::new(handler));
        self
    }

    /// Replace the handler applied to runs of plain text.
    #[must_use]
    pub fn text_handler(mut self, handler: impl TextHandler + 'static) -> Self {
        self.text_handler = Some(Box::new(handler));
        self
    }

    /// Validate the options and fill in default handlers. The catalog is
    /// compiled here unless a control sequence handler was supplied.
    pub fn build(self) -> Result<ParserFactory> {
        let Self {
            options,
            function_handlers,
            text_handler,
        } = self;
        options.validate()?;

        let environment = options.environment;
        let mut handlers: HashMap<FunctionKind, Box<dyn FunctionHandler>> =
            HashMap::new();
        for handler in function_handlers {
            handlers.insert(handler.kind(), handler);
        }

        if !handlers.contains_key(&FunctionKind::ControlSequence) {
            let matcher = SequenceMatcher::new(&SequenceFunction::ALL)?;
            handlers.insert(
                FunctionKind::ControlSequence,
                Box::new(SequenceHandler::new(Arc::new(matcher))),
            );
        }
        handlers
            .entry(FunctionKind::C0)
            .or_insert_with(|| Box::new(C0Handler));
        handlers
            .entry(FunctionKind::C1)
            .or_insert_with(|| Box::new(C1Handler::new(environment)));
        handlers
            .entry(FunctionKind::Independent)
            .or_insert_with(|| Box::new(IndependentHandler));
        handlers.entry(FunctionKind::ControlString).or_insert_with(|| {
            Box::new(ControlStringHandler::new(environment))
        });

        debug!(
            "parser factory for {environment:?} with {} function handlers",
            handlers.len()
        );

        Ok(ParserFactory {
            components: Arc::new(Components {
                finder: Finder::new(environment),
                handlers,
                text_handler: text_handler
                    .unwrap_or_else(|| Box::new(DefaultTextHandler)),
                options,
            }),
        })
    }
}

use crate::adapters::outbound::formatters::{
    DotFormatter, GraphmlFormatter, TextFormatter, TgfFormatter,
};
use crate::application::dto::OutputType;
use crate::dependency_graph::domain::TokenStyle;
use crate::ports::outbound::TreeFormatter;

/// Factory for creating tree formatters
///
/// This factory encapsulates the creation logic for the formatter implementations,
/// following the Factory Pattern. It belongs in the application layer as it orchestrates
/// the selection of infrastructure adapters based on application needs.
pub struct FormatterFactory;

impl FormatterFactory {
    /// Creates a formatter instance for the specified output type
    ///
    /// # Arguments
    /// * `output_type` - The output type to create a formatter for
    /// * `tokens` - Indentation style; only the text formatter uses it
    ///
    /// # Returns
    /// A boxed TreeFormatter trait object appropriate for the specified type
    ///
    /// # Examples
    /// ```
    /// use mdep::application::dto::OutputType;
    /// use mdep::application::factories::FormatterFactory;
    /// use mdep::dependency_graph::domain::TokenStyle;
    ///
    /// let formatter = FormatterFactory::create(OutputType::Dot, TokenStyle::Standard);
    /// ```
    pub fn create(output_type: OutputType, tokens: TokenStyle) -> Box<dyn TreeFormatter> {
        match output_type {
            OutputType::Text => Box::new(TextFormatter::new(tokens.tokens())),
            OutputType::Dot => Box::new(DotFormatter::new()),
            OutputType::Graphml => Box::new(GraphmlFormatter::new()),
            OutputType::Tgf => Box::new(TgfFormatter::new()),
        }
    }

    /// Returns the progress message for the specified output type
    ///
    /// # Examples
    /// ```
    /// use mdep::application::dto::OutputType;
    /// use mdep::application::factories::FormatterFactory;
    ///
    /// let message = FormatterFactory::progress_message(OutputType::Graphml);
    /// assert_eq!(message, "📝 Generating GraphML output...");
    /// ```
    pub fn progress_message(output_type: OutputType) -> &'static str {
        match output_type {
            OutputType::Text => "📝 Generating dependency tree...",
            OutputType::Dot => "📝 Generating DOT output...",
            OutputType::Graphml => "📝 Generating GraphML output...",
            OutputType::Tgf => "📝 Generating TGF output...",
        }
    }
}

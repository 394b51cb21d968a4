use miette::Diagnostic;
use thiserror::Error;

#[derive(Error, Diagnostic, Debug)]
pub enum PaymentError {
    #[error("Unknown provider '{provider}'")]
    #[diagnostic(code(payfactory::unknown_provider), help("Known providers: {known}"))]
    UnknownProvider { provider: String, known: String },

    #[error("Invalid amount '{0}'")]
    #[diagnostic(
        code(payfactory::invalid_amount),
        help("The amount must be a number, e.g. 100 or 50.5")
    )]
    InvalidAmount(String),

    #[error("Input closed while waiting for the {0}")]
    #[diagnostic(code(payfactory::input_closed))]
    InputClosed(&'static str),

    #[error("Payment config for {provider} failed verification: {reason}")]
    #[diagnostic(code(payfactory::config))]
    Config {
        provider: &'static str,
        reason: String,
    },

    #[error("IO error: {0}")]
    #[diagnostic(code(payfactory::io))]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, PaymentError>;

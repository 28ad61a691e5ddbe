//! Definitions of errors that can occur during the execution of the provisioning scripts

use std::{
    error::Error,
    fmt::{self, Display, Formatter},
};

/// Errors that can occur during the execution of the provisioning scripts
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScriptError {
    /// No usable signer or RPC client could be set up
    Environment(String),
    /// Error deploying a contract
    Deployment(String),
    /// Error calling a contract method
    Call(String),
    /// Error reading or parsing a contract build artifact
    ArtifactParsing(String),
    /// Error converting a decimal string into a fixed-point amount
    AmountParsing(String),
    /// Error parsing an address supplied on the command line
    AddressParsing(String),
    /// Error writing progress output
    Output(String),
}

impl Display for ScriptError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            ScriptError::Environment(s) => write!(f, "error setting up environment: {}", s),
            ScriptError::Deployment(s) => write!(f, "error deploying contract: {}", s),
            ScriptError::Call(s) => write!(f, "error calling contract: {}", s),
            ScriptError::ArtifactParsing(s) => write!(f, "error parsing artifact: {}", s),
            ScriptError::AmountParsing(s) => write!(f, "error parsing amount: {}", s),
            ScriptError::AddressParsing(s) => write!(f, "error parsing address: {}", s),
            ScriptError::Output(s) => write!(f, "error writing output: {}", s),
        }
    }
}

impl Error for ScriptError {}

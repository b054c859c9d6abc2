/// Pipeline buffer entry builders.
pub mod latches;

/// Program text builder.
pub mod program;

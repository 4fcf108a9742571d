// Input catalogue and user-entered values
pub mod fields;
pub mod inputs;

// Required-field checks
pub mod validation;

// Formula variants and metric computation
pub mod calculator;
pub mod formulas;

// Display formatting for rates and currency
pub mod formatting;

// Domain-specific error types
pub mod errors;

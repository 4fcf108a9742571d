// Submit flow: validate, compute, report
pub mod estimator;
pub mod report;

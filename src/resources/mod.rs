mod report;

pub use report::{ComponentRow, MassReport, ReportError};

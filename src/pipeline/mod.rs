// Analysis pipeline — explicit parameters in, report out.

pub mod analyze;
pub mod legend;

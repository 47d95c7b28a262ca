pub(crate) mod eval;
pub(crate) mod format;

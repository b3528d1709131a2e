pub(crate) mod command;
pub(crate) mod snippet;
pub(crate) mod spec;

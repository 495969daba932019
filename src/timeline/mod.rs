pub(crate) mod resolve;
pub(crate) mod runnable;
pub(crate) mod spec;

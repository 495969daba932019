pub(crate) mod binder;
pub(crate) mod binding;
pub(crate) mod coalesce;

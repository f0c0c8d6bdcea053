pub(crate) mod confirm;
pub(crate) mod home;
pub(crate) mod list;

pub(crate) mod data;
pub(crate) mod http;
pub(crate) mod runtime;
pub(crate) mod util;

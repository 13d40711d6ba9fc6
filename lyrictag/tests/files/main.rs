#![allow(missing_docs)]

mod mpeg;
mod session;
pub(crate) mod util;

mod common;

mod session;
mod source;

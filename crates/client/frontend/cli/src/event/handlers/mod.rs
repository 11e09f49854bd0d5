//! Event loop handlers split by concern.

mod input;
mod rendering;
mod session;

pub mod dialog;
pub mod format;
pub mod storage;

pub mod dom;
pub mod storage;

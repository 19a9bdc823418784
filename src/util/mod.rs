//! Browser helpers shared by the host.

pub mod storage;

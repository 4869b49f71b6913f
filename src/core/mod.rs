//! Prompt logic: the interactive reader, its interrupt watcher, and the
//! yes/no interpreter.

pub mod interrupt;
pub mod reader;
pub mod yes_no;

pub(crate) mod assembler;
pub(crate) mod entry;
pub(crate) mod timeline;

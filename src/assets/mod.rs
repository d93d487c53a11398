pub(crate) mod arena;
pub(crate) mod decode;
pub(crate) mod normalize;

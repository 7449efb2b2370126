//! The transaction codec: the JSON document form of a genesis transaction
//! and the protobuf encoding of its sign bytes.

pub mod document;
pub mod encode;

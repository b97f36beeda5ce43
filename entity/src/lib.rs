//! SeaORM entity definitions for the notekeeper database.
//!
//! Each module maps one table. Articles reference tags through a JSON list of tag ids
//! (`TagIds`) rather than a join table, and the `tag.weight` column is kept equal to the
//! number of the owner's articles whose list contains the tag.

pub mod article;
pub mod prelude;
pub mod tag;
pub mod user;

//! Newick format writer for phylogenetic trees.
//!
//! # Format
//! The Newick format has the following simple grammar:
//! * `tree ::= vertex ';'`
//! * `vertex ::= leaf | internal_vertex`
//! * `internal_vertex ::= '(' vertex ',' vertex ')' [branch_length]`
//! * `leaf ::= label [branch_length]`
//! * `branch_length ::= ':' number`
//!
//! Labels are the taxon names; names with delimiters are single-quoted
//! (see [escape_label](crate::utils::escape_label)), spaces in other names
//! become underscores. The root gets no branch length.

mod writer;

pub use self::writer::{to_newick, write_newick_file};

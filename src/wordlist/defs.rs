//! Constants for the wordlist (long-format CSV) writer.

/// Header row of every wordlist
pub(crate) const WORDLIST_HEADER: &str = "Language_ID,Feature_ID,Value";

/// Prefix of the positional feature identifiers (`feature_0`, `feature_1`, ...)
pub(crate) const FEATURE_PREFIX: &str = "feature_";

/// Value written for characters a taxon lacks, when padding
pub(crate) const MISSING_VALUE: &str = "?";

use serde::{Deserialize, Serialize};

use crate::scoring::LexiconConfig;

#[derive(Debug, Default, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub lexicon: Option<LexiconConfig>,
}

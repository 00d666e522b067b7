use serde::{Deserialize, Serialize};

use crate::scoring::PolicyConstants;

#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub policy: PolicyConstants,
}

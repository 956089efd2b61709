//! Serializable export of a finished plan (JSON and YAML).

use crate::error::PlanError;
use crate::models::{NetworkBlock, SubnetRecord};
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct PlanReport {
    pub network_cidr: NetworkBlock,
    pub subnets: Vec<SubnetRecord>,
}

impl PlanReport {
    pub fn new(network_cidr: NetworkBlock, subnets: Vec<SubnetRecord>) -> PlanReport {
        PlanReport {
            network_cidr,
            subnets,
        }
    }

    pub fn to_json(&self) -> Result<String, PlanError> {
        serde_json::to_string_pretty(self).map_err(|e| PlanError::Export(e.to_string()))
    }

    pub fn to_yaml(&self) -> Result<String, PlanError> {
        serde_yaml::to_string(self).map_err(|e| PlanError::Export(e.to_string()))
    }
}

//! Adapter selection for model configs.

use serde::{Deserialize, Serialize};

use crate::adapter::{Enc2Dec, FutureFeatIntegrator, PassThrough};

/// Which encoder-to-decoder adapter a model uses.
///
/// Meant to be embedded in a larger model configuration and deserialized
/// from the same JSON files as the rest of the model parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum AdapterKind {
    /// Forward encoder outputs unchanged, drop future covariates.
    #[default]
    PassThrough,

    /// Concatenate flattened future covariates onto the dynamic output.
    FutureFeatIntegrator,
}

impl AdapterKind {
    /// Builds the adapter this kind names.
    pub fn build(self) -> Box<dyn Enc2Dec> {
        match self {
            AdapterKind::PassThrough => Box::new(PassThrough),
            AdapterKind::FutureFeatIntegrator => Box::new(FutureFeatIntegrator),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_serde() {
        let json = serde_json::to_string(&AdapterKind::FutureFeatIntegrator).unwrap();
        assert_eq!(json, "\"future_feat_integrator\"");

        let kind: AdapterKind = serde_json::from_str("\"pass_through\"").unwrap();
        assert_eq!(kind, AdapterKind::PassThrough);
    }

    #[test]
    fn test_default_kind() {
        assert_eq!(AdapterKind::default(), AdapterKind::PassThrough);
    }

    #[test]
    fn test_build_dispatch() {
        let passthrough = AdapterKind::PassThrough.build();
        let integrator = AdapterKind::FutureFeatIntegrator.build();

        assert_eq!(passthrough.dynamic_output_size(3, 4, 2), 3);
        assert_eq!(integrator.dynamic_output_size(3, 4, 2), 11);
    }
}

use serde::{Deserialize, Serialize};

/// Architectures de modèles reconnues
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ModelName {
    Alexnet,
    Resnet,
    Lenet,
}

impl ModelName {
    /// Message associé au modèle
    pub fn message(&self) -> &'static str {
        match self {
            ModelName::Alexnet => "Deep Learning FTW!",
            ModelName::Lenet => "LeCNN all the images",
            ModelName::Resnet => "Have some residuals",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_known_members() {
        let parsed: ModelName = serde_json::from_str("\"lenet\"").unwrap();
        assert_eq!(parsed, ModelName::Lenet);
        assert_eq!(serde_json::to_string(&ModelName::Alexnet).unwrap(), "\"alexnet\"");
    }

    #[test]
    fn test_reject_unknown_member() {
        assert!(serde_json::from_str::<ModelName>("\"vgg\"").is_err());
        assert!(serde_json::from_str::<ModelName>("\"AlexNet\"").is_err());
    }
}

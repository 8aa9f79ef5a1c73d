/// Errors raised by manual adjustments of a [`ClassMapping`](crate::ClassMapping).
///
/// Inference itself never fails; these only come from explicit override calls.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum MappingError {
    #[error("entity '{entity}' has no property '{property}'")]
    UnknownProperty { entity: String, property: String },

    #[error("property '{property}' of entity '{entity}' is already mapped")]
    DuplicateProperty { entity: String, property: String },

    #[error("property '{property}' of entity '{entity}' is ignored and cannot be the key")]
    IgnoredKey { entity: String, property: String },

    #[error("'not_a_key' cannot be used to designate a key (property '{property}')")]
    NotAKeyType { property: String },
}

/// Configuration loading error.
#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    #[error("invalid automap configuration: {0}")]
    Extract(#[from] Box<figment::Error>),
}

impl From<figment::Error> for ConfigError {
    fn from(err: figment::Error) -> Self {
        ConfigError::Extract(Box::new(err))
    }
}

//! House fixtures for creating in-memory test data.

use entity::house;

/// Default test house name.
pub const DEFAULT_NAME: &str = "Gryffindor";

/// Default test house founder.
pub const DEFAULT_FOUNDER: &str = "Godric Gryffindor";

/// Default primary color.
pub const DEFAULT_COLOR1: &str = "scarlet";

/// Default secondary color.
pub const DEFAULT_COLOR2: &str = "gold";

/// Creates a house entity model with default values.
///
/// # Default Values
/// - name: `"Gryffindor"`
/// - founder: `"Godric Gryffindor"`
/// - color1: `"scarlet"`
/// - color2: `"gold"`
pub fn entity() -> house::Model {
    entity_builder().build()
}

/// Creates a house entity builder for customization.
pub fn entity_builder() -> HouseEntityBuilder {
    HouseEntityBuilder::default()
}

/// Builder for creating customized house entity models.
pub struct HouseEntityBuilder {
    name: String,
    founder: String,
    color1: String,
    color2: String,
}

impl Default for HouseEntityBuilder {
    fn default() -> Self {
        Self {
            name: DEFAULT_NAME.to_string(),
            founder: DEFAULT_FOUNDER.to_string(),
            color1: DEFAULT_COLOR1.to_string(),
            color2: DEFAULT_COLOR2.to_string(),
        }
    }
}

impl HouseEntityBuilder {
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn founder(mut self, founder: impl Into<String>) -> Self {
        self.founder = founder.into();
        self
    }

    pub fn colors(mut self, color1: impl Into<String>, color2: impl Into<String>) -> Self {
        self.color1 = color1.into();
        self.color2 = color2.into();
        self
    }

    pub fn build(self) -> house::Model {
        house::Model {
            name: self.name,
            founder: self.founder,
            color1: self.color1,
            color2: self.color2,
        }
    }
}

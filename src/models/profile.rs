use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    pub age: Option<i32>,
    pub height: Option<Height>,
}

/// Feet and inches travel together; a profile either has both or neither.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Height {
    pub feet: i32,
    pub inches: i32,
}

impl UserProfile {
    pub fn apply(&mut self, update: ProfileUpdate) {
        match update {
            ProfileUpdate::Age(age) => self.age = age,
            ProfileUpdate::Height(height) => self.height = height,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "field", content = "value", rename_all = "lowercase")]
pub enum ProfileUpdate {
    Age(Option<i32>),
    Height(Option<Height>),
}

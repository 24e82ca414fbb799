use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum DomError {
    #[error("no element matches `{selector}`")]
    MissingElement { selector: String },
    #[error("element `{selector}` has an unexpected type")]
    WrongElementType { selector: String },
    #[error("browser call failed: {0}")]
    Js(String),
}

impl DomError {
    pub fn missing(selector: &str) -> Self {
        Self::MissingElement {
            selector: selector.to_string(),
        }
    }

    pub fn wrong_type(selector: &str) -> Self {
        Self::WrongElementType {
            selector: selector.to_string(),
        }
    }
}

#[cfg(target_arch = "wasm32")]
impl From<wasm_bindgen::JsValue> for DomError {
    fn from(value: wasm_bindgen::JsValue) -> Self {
        Self::Js(value.as_string().unwrap_or_else(|| format!("{value:?}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_selector() {
        assert_eq!(
            DomError::missing("#themeToggle").to_string(),
            "no element matches `#themeToggle`"
        );
        assert_eq!(
            DomError::wrong_type("#contactForm").to_string(),
            "element `#contactForm` has an unexpected type"
        );
    }
}

use cfndiff_core::params::ParameterSet;
use cfndiff_core::{Document, StackDataGateway, StackDescription};

/// In-memory gateway standing in for a reachable stack.
#[allow(dead_code)]
#[derive(Default)]
pub struct FakeGateway {
    pub description: StackDescription,
    pub template: Option<Document>,
}

impl StackDataGateway for FakeGateway {
    fn describe_stack(&self, _stack_name: &str) -> StackDescription {
        self.description.clone()
    }

    fn template_body(&self, _stack_name: &str) -> Document {
        self.template.clone().unwrap_or_else(Document::empty)
    }
}

/// Build a parameter or tag set from literal pairs.
#[allow(dead_code)]
pub fn set(pairs: &[(&str, &str)]) -> ParameterSet {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

/// Parse a literal document, JSON or YAML.
#[allow(dead_code)]
pub fn doc(text: &str) -> Document {
    cfndiff_core::document::parse("fixture", text).unwrap().0
}

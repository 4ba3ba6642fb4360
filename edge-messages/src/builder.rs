/// Fills `{name}` slots in a static template.
///
/// Substitutions apply in the order they were added.
pub struct MessageBuilder {
    template: &'static str,
    slots: Vec<(&'static str, String)>,
}

impl MessageBuilder {
    pub fn new(template: &'static str) -> Self {
        Self {
            template,
            slots: Vec::new(),
        }
    }

    pub fn var(mut self, name: &'static str, value: impl Into<String>) -> Self {
        self.slots.push((name, value.into()));
        self
    }

    pub fn build(self) -> String {
        self.slots
            .iter()
            .fold(self.template.to_string(), |text, (name, value)| {
                text.replace(&format!("{{{name}}}"), value)
            })
    }
}

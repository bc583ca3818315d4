pub struct DefaultsConfig {
    pub form: String,
    pub sequence: String,
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            form: "B".to_string(),
            sequence: "ATGCGTACGCTAAGCT".to_string(),
        }
    }
}

#[derive(Debug, Default)]
pub struct ValidationResult {
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
}

impl ValidationResult {
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn print_summary(&self) {
        if self.is_valid() {
            println!("✅ Validation passed");
        } else {
            println!("❌ Validation failed with {} errors", self.errors.len());
        }

        if !self.warnings.is_empty() {
            println!("⚠️ {} warnings found", self.warnings.len());
        }

        for error in &self.errors {
            println!("   ❌ {}", error);
        }

        for warning in &self.warnings {
            println!("   ⚠️ {}", warning);
        }
    }

    pub fn log_summary(&self) {
        for error in &self.errors {
            log::error!("❌ Configuration: {}", error);
        }

        for warning in &self.warnings {
            log::warn!("⚠️ Configuration: {}", warning);
        }

        if !self.is_valid() {
            log::warn!(
                "⚠️ Starting with {} configuration errors; chat requests may be refused",
                self.errors.len()
            );
        }
    }
}

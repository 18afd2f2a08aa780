use crate::calculators::{resolve, CalculationMethod, CalculationResult, Values};

/// The method table for one target variable plus how to present its result.
#[derive(Debug, Clone, Copy)]
pub struct VariableCatalog {
    /// Variable name as used in [`Values`].
    pub target: &'static str,
    pub display_name: &'static str,
    /// SI unit of the result.
    pub unit: &'static str,
    pub methods: &'static [CalculationMethod],
}

impl VariableCatalog {
    pub fn resolve(&self, values: &Values) -> CalculationResult {
        resolve(self.target, self.methods, values, self.unit, self.display_name)
    }

    pub fn method(&self, id: &str) -> Option<&'static CalculationMethod> {
        self.methods.iter().find(|method| method.id == id)
    }

    /// Every variable that appears as an input of at least one method.
    pub fn input_variables(&self) -> Vec<&'static str> {
        let mut names: Vec<&'static str> = self
            .methods
            .iter()
            .flat_map(|method| method.required_variables.iter().copied())
            .collect();
        names.sort_unstable();
        names.dedup();
        names
    }
}

//! Safety rules for heating, evaluated with `Validation`.

use crate::engine::HeatMethod;
use crate::safety::context::HeatingContext;
use crate::safety::violations::SafetyViolation;
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

/// Type alias for heating check functions
pub type SafetyCheck =
    Box<dyn Fn(&HeatingContext<'_>) -> Validation<(), NonEmptyVec<SafetyViolation>> + Send + Sync>;

/// Ordered set of heating checks.
/// Uses Validation to accumulate ALL violations.
pub struct SafetyRules {
    checks: Vec<SafetyCheck>,
}

impl SafetyRules {
    /// Empty rule set; every heating attempt passes.
    pub fn new() -> Self {
        Self { checks: Vec::new() }
    }

    /// Eye protection first, then the open-flame hazard.
    pub fn standard() -> Self {
        Self::new()
            .require(SafetyViolation::EyeProtection, |ctx| ctx.has_goggles)
            .require(SafetyViolation::FlammableOverFlame, |ctx| {
                !(ctx.method == HeatMethod::Burner && ctx.has_flammable())
            })
    }

    /// Add a predicate that must hold, reporting `violation` otherwise.
    pub fn require<F>(mut self, violation: SafetyViolation, predicate: F) -> Self
    where
        F: Fn(&HeatingContext<'_>) -> bool + Send + Sync + 'static,
    {
        let check = move |ctx: &HeatingContext<'_>| {
            if predicate(ctx) {
                Validation::success(())
            } else {
                Validation::fail(violation)
            }
        };
        self.checks.push(Box::new(check));
        self
    }

    /// Run every check, accumulating ALL violations in check order.
    pub fn check_heating(
        &self,
        context: &HeatingContext<'_>,
    ) -> Validation<(), NonEmptyVec<SafetyViolation>> {
        let checks: Vec<Validation<(), NonEmptyVec<SafetyViolation>>> =
            self.checks.iter().map(|check| check(context)).collect();

        Validation::all_vec(checks).map(|_| ())
    }

    /// Violations as a plain list; empty when heating is safe.
    pub fn heating_violations(&self, context: &HeatingContext<'_>) -> Vec<SafetyViolation> {
        match self.check_heating(context) {
            Validation::Success(_) => Vec::new(),
            Validation::Failure(errors) => errors.iter().copied().collect(),
        }
    }
}

impl Default for SafetyRules {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Reagent;

    fn context(method: HeatMethod, has_goggles: bool, contents: &[Reagent]) -> HeatingContext<'_> {
        HeatingContext {
            method,
            has_goggles,
            contents,
        }
    }

    #[test]
    fn safe_heating_passes() {
        let rules = SafetyRules::standard();
        let contents = [Reagent::SampleGlucose, Reagent::Benedicts];
        let result = rules.check_heating(&context(HeatMethod::Bath, true, &contents));
        assert!(result.is_success());
    }

    #[test]
    fn missing_goggles_is_reported() {
        let rules = SafetyRules::standard();
        let violations = rules.heating_violations(&context(HeatMethod::Bath, false, &[]));
        assert_eq!(violations, vec![SafetyViolation::EyeProtection]);
    }

    #[test]
    fn ethanol_over_burner_is_reported() {
        let rules = SafetyRules::standard();
        let contents = [Reagent::SampleLipid, Reagent::Ethanol];
        let violations = rules.heating_violations(&context(HeatMethod::Burner, true, &contents));
        assert_eq!(violations, vec![SafetyViolation::FlammableOverFlame]);
    }

    #[test]
    fn ethanol_in_bath_is_allowed() {
        let rules = SafetyRules::standard();
        let contents = [Reagent::Ethanol];
        let result = rules.check_heating(&context(HeatMethod::Bath, true, &contents));
        assert!(result.is_success());
    }

    #[test]
    fn all_violations_accumulate() {
        let rules = SafetyRules::standard();
        let contents = [Reagent::Ethanol];
        let result = rules.check_heating(&context(HeatMethod::Burner, false, &contents));

        match result {
            Validation::Failure(errors) => {
                assert_eq!(errors.len(), 2);
                let ordered: Vec<_> = errors.iter().copied().collect();
                assert_eq!(
                    ordered,
                    vec![
                        SafetyViolation::EyeProtection,
                        SafetyViolation::FlammableOverFlame
                    ]
                );
            }
            Validation::Success(_) => panic!("Expected failures, got success"),
        }
    }

    #[test]
    fn empty_rules_always_pass() {
        let rules = SafetyRules::new();
        let contents = [Reagent::Ethanol];
        assert!(rules
            .check_heating(&context(HeatMethod::Burner, false, &contents))
            .is_success());
    }
}
